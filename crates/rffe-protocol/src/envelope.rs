//! Command and response unions for the control envelope
//!
//! `Command` and `Response` are the typed forms of the protobuf `Packet`
//! oneof: exactly one case is populated per message, enforced here by the
//! sum type rather than by runtime introspection. Instances are single-use,
//! built immediately before a send and dropped after the reply is consumed.

use crate::options::{IfSwitchOption, MixerSwitchOption, RfBand, RfSwitchOption};

/// A request to the front-end, one oneof case per variant.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Command {
    /// Request a status snapshot
    GetStatus,

    /// Enable or disable the RF channels
    SetChannelsEnabled { enabled: bool },

    /// Enter or leave calibration mode
    SetCalEnabled { enabled: bool },

    /// Set the calibration path attenuation in dB
    SetCalAttenuation { db: i32 },

    /// Set the frontend attenuator in dB
    SetFrontendAttenuation { db: i32 },

    /// Select the RF input band
    SetRfBand { band: RfBand },

    /// Tune the PLL / local oscillator in MHz
    SetPllFrequency { mhz: u32 },

    /// Route the switch banks.
    ///
    /// Fields left as `None` are not encoded at all and the device keeps the
    /// corresponding switch in its current position (preserve-unset).
    SetSwitches {
        rf: Option<RfSwitchOption>,
        mixer: Option<MixerSwitchOption>,
        if_: Option<IfSwitchOption>,
    },
}

impl Command {
    /// Discriminant identifying which request variant this is.
    pub fn kind(&self) -> CommandKind {
        match self {
            Command::GetStatus => CommandKind::GetStatus,
            Command::SetChannelsEnabled { .. } => CommandKind::SetChannelsEnabled,
            Command::SetCalEnabled { .. } => CommandKind::SetCalEnabled,
            Command::SetCalAttenuation { .. } => CommandKind::SetCalAttenuation,
            Command::SetFrontendAttenuation { .. } => CommandKind::SetFrontendAttenuation,
            Command::SetRfBand { .. } => CommandKind::SetRfBand,
            Command::SetPllFrequency { .. } => CommandKind::SetPllFrequency,
            Command::SetSwitches { .. } => CommandKind::SetSwitches,
        }
    }
}

/// Closed set of request identifiers.
///
/// The wire code of each kind is its envelope field number, which is also
/// what the device echoes back in an acknowledgment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CommandKind {
    GetStatus,
    SetChannelsEnabled,
    SetCalEnabled,
    SetCalAttenuation,
    SetFrontendAttenuation,
    SetRfBand,
    SetPllFrequency,
    SetSwitches,
}

impl CommandKind {
    /// Every request kind, in envelope field-number order.
    pub const ALL: &'static [CommandKind] = &[
        CommandKind::GetStatus,
        CommandKind::SetChannelsEnabled,
        CommandKind::SetCalEnabled,
        CommandKind::SetCalAttenuation,
        CommandKind::SetFrontendAttenuation,
        CommandKind::SetRfBand,
        CommandKind::SetPllFrequency,
        CommandKind::SetSwitches,
    ];

    /// Envelope field number carrying this request.
    pub fn field_number(self) -> u32 {
        match self {
            CommandKind::GetStatus => 1,
            CommandKind::SetChannelsEnabled => 2,
            CommandKind::SetCalEnabled => 3,
            CommandKind::SetCalAttenuation => 4,
            CommandKind::SetFrontendAttenuation => 5,
            CommandKind::SetRfBand => 6,
            CommandKind::SetPllFrequency => 7,
            CommandKind::SetSwitches => 8,
        }
    }

    /// Reverse lookup from an envelope field number.
    pub fn from_field_number(field: u32) -> Option<Self> {
        match field {
            1 => Some(CommandKind::GetStatus),
            2 => Some(CommandKind::SetChannelsEnabled),
            3 => Some(CommandKind::SetCalEnabled),
            4 => Some(CommandKind::SetCalAttenuation),
            5 => Some(CommandKind::SetFrontendAttenuation),
            6 => Some(CommandKind::SetRfBand),
            7 => Some(CommandKind::SetPllFrequency),
            8 => Some(CommandKind::SetSwitches),
            _ => None,
        }
    }

    /// External command name used by batch configurations and the CLI.
    pub fn name(self) -> &'static str {
        match self {
            CommandKind::GetStatus => "get_status",
            CommandKind::SetChannelsEnabled => "set_channels_enabled",
            CommandKind::SetCalEnabled => "set_cal_enabled",
            CommandKind::SetCalAttenuation => "set_cal_attenuation",
            CommandKind::SetFrontendAttenuation => "set_frontend_attenuation",
            CommandKind::SetRfBand => "set_rf_band",
            CommandKind::SetPllFrequency => "set_pll_frequency",
            CommandKind::SetSwitches => "set_switches",
        }
    }

    /// Resolve an external command name, rejecting anything outside the
    /// closed set.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.name() == name)
    }
}

/// A reply from the front-end.
///
/// Setter requests are answered with an empty acknowledgment naming the
/// request that was applied; `get_status` is answered with a snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Response {
    /// Device status snapshot
    Status(DeviceStatus),
    /// Acknowledgment of the named request variant
    Ack(CommandKind),
}

impl Response {
    /// Wire name of this response case, for diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            Response::Status(_) => "get_status_response",
            Response::Ack(_) => "ack",
        }
    }
}

/// Raw status snapshot as decoded off the wire.
///
/// Switch and band fields are integer codes; the codec never resolves names.
/// Use [`crate::status::project`] to turn this into symbolic form. Only ever
/// produced by decoding a device reply (or by the simulator).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeviceStatus {
    pub lo_frequency_mhz: u32,
    pub attenuation_db: i32,
    pub channels_enabled: bool,
    pub calibration_enabled: bool,
    pub rf_switch: u32,
    pub mixer_switch: u32,
    pub if_switch: u32,
}
