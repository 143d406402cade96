//! Status projection: resolve a decoded status snapshot into named fields
//!
//! Pure functions only: no I/O, no mutation. The codec leaves switch and
//! band fields as raw integer codes; this layer resolves them through the
//! reverse lookup tables, rendering codes this client does not define as
//! `UNKNOWN` so a newer device firmware cannot break the projection.

use std::fmt;

use crate::envelope::{DeviceStatus, Response};
use crate::error::ProjectionError;
use crate::options::{IfSwitchOption, MixerSwitchOption, RfSwitchOption};

/// Status snapshot with switch fields resolved to symbolic names.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct StatusView {
    pub lo_frequency_mhz: u32,
    pub attenuation_db: i32,
    pub channels_enabled: bool,
    pub calibration_enabled: bool,
    pub rf_switch: &'static str,
    pub mixer_switch: &'static str,
    pub if_switch: &'static str,
}

impl From<&DeviceStatus> for StatusView {
    fn from(status: &DeviceStatus) -> Self {
        Self {
            lo_frequency_mhz: status.lo_frequency_mhz,
            attenuation_db: status.attenuation_db,
            channels_enabled: status.channels_enabled,
            calibration_enabled: status.calibration_enabled,
            rf_switch: RfSwitchOption::label(status.rf_switch),
            mixer_switch: MixerSwitchOption::label(status.mixer_switch),
            if_switch: IfSwitchOption::label(status.if_switch),
        }
    }
}

/// Project a response into a [`StatusView`].
///
/// Fails with [`ProjectionError::UnexpectedResponseType`] unless the
/// response is the status case.
pub fn project(response: &Response) -> Result<StatusView, ProjectionError> {
    match response {
        Response::Status(status) => Ok(StatusView::from(status)),
        other => Err(ProjectionError::UnexpectedResponseType { got: other.name() }),
    }
}

impl fmt::Display for StatusView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} DEVICE STATUS {}", "*".repeat(20), "*".repeat(19))?;
        writeln!(f, "  Channels Enabled     : {}", self.channels_enabled)?;
        writeln!(f, "  Calibration Enabled  : {}", self.calibration_enabled)?;
        writeln!(f, "  Frontend Attenuation : {} dB", self.attenuation_db)?;
        writeln!(f, "  LO Frequency         : {} MHz", self.lo_frequency_mhz)?;
        writeln!(f, "  RF Switch State      : {}", self.rf_switch)?;
        writeln!(f, "  Mixer Switch State   : {}", self.mixer_switch)?;
        writeln!(f, "  IF Switch State      : {}", self.if_switch)?;
        write!(f, "{}", "*".repeat(54))
    }
}
