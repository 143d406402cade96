//! Simulated front-end state machine
//!
//! [`SimDevice`] mirrors the observable state of the real front-end and
//! answers commands the way the device does: setters mutate and are
//! acknowledged, `get_status` snapshots. A journal records every applied
//! command so tests can assert on execution order.

use rffe_protocol::{
    Command, CommandKind, DeviceStatus, IfSwitchOption, MixerSwitchOption, Response, RfBand,
    RfSwitchOption,
};

/// In-memory model of the front-end.
#[derive(Debug, Clone)]
pub struct SimDevice {
    lo_frequency_mhz: u32,
    attenuation_db: i32,
    cal_attenuation_db: i32,
    channels_enabled: bool,
    calibration_enabled: bool,
    rf_band: RfBand,
    rf_switch: RfSwitchOption,
    mixer_switch: MixerSwitchOption,
    if_switch: IfSwitchOption,
    journal: Vec<CommandKind>,
}

impl Default for SimDevice {
    /// Power-on state: LO parked at 2250 MHz, input terminated, channels off.
    fn default() -> Self {
        Self {
            lo_frequency_mhz: 2250,
            attenuation_db: 0,
            cal_attenuation_db: 0,
            channels_enabled: false,
            calibration_enabled: false,
            rf_band: RfBand::Band05To2Ghz,
            rf_switch: RfSwitchOption::Termination,
            mixer_switch: MixerSwitchOption::Mix,
            if_switch: IfSwitchOption::Bandpass1To2Ghz,
            journal: Vec::new(),
        }
    }
}

impl SimDevice {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one command and produce the device's reply.
    pub fn apply(&mut self, command: &Command) -> Response {
        self.journal.push(command.kind());
        match command {
            Command::GetStatus => return Response::Status(self.status()),
            Command::SetChannelsEnabled { enabled } => self.channels_enabled = *enabled,
            Command::SetCalEnabled { enabled } => self.calibration_enabled = *enabled,
            Command::SetCalAttenuation { db } => self.cal_attenuation_db = *db,
            Command::SetFrontendAttenuation { db } => self.attenuation_db = *db,
            Command::SetRfBand { band } => self.rf_band = *band,
            Command::SetPllFrequency { mhz } => self.lo_frequency_mhz = *mhz,
            Command::SetSwitches { rf, mixer, if_ } => {
                // Preserve-unset: absent fields leave the switch alone
                if let Some(rf) = rf {
                    self.rf_switch = *rf;
                }
                if let Some(mixer) = mixer {
                    self.mixer_switch = *mixer;
                }
                if let Some(if_) = if_ {
                    self.if_switch = *if_;
                }
            }
        }
        Response::Ack(command.kind())
    }

    /// Current state as the wire-level snapshot.
    pub fn status(&self) -> DeviceStatus {
        DeviceStatus {
            lo_frequency_mhz: self.lo_frequency_mhz,
            attenuation_db: self.attenuation_db,
            channels_enabled: self.channels_enabled,
            calibration_enabled: self.calibration_enabled,
            rf_switch: self.rf_switch.code(),
            mixer_switch: self.mixer_switch.code(),
            if_switch: self.if_switch.code(),
        }
    }

    /// Every command applied so far, in order.
    pub fn journal(&self) -> &[CommandKind] {
        &self.journal
    }

    pub fn rf_band(&self) -> RfBand {
        self.rf_band
    }

    pub fn rf_switch(&self) -> RfSwitchOption {
        self.rf_switch
    }

    pub fn mixer_switch(&self) -> MixerSwitchOption {
        self.mixer_switch
    }

    pub fn if_switch(&self) -> IfSwitchOption {
        self.if_switch
    }

    pub fn cal_attenuation_db(&self) -> i32 {
        self.cal_attenuation_db
    }
}
