//! Command dispatcher: symbolic names + JSON arguments to typed commands
//!
//! The registry is the closed [`CommandKind`] set; unknown names are
//! rejected at this boundary rather than deep in the codec. Arguments
//! arrive as decoded JSON values from the batch configuration and are
//! converted into the strongly typed [`Command`] variants, resolving
//! symbolic enum names through the forward lookup tables.

use std::thread;
use std::time::Duration;

use serde_json::{Map, Value};
use tracing::{error, info, warn};

use rffe_protocol::{
    Command, CommandKind, IfSwitchOption, MixerSwitchOption, Response, RfBand, RfSwitchOption,
    StatusView,
};

use crate::error::{ClientError, DispatchError, SessionError};
use crate::session::Session;

/// The command the reordering policy moves to the end of every batch.
const ATTENUATION_LAST: &str = "set_frontend_attenuation";

/// Pause between commands so the hardware settles before the next one.
const SETTLE_DELAY: Duration = Duration::from_millis(50);

/// Build a typed command from a symbolic name and its JSON argument.
pub fn build_command(name: &str, argument: &Value) -> Result<Command, DispatchError> {
    let kind = CommandKind::from_name(name)
        .ok_or_else(|| DispatchError::UnknownCommand(name.to_string()))?;

    match kind {
        // get_status carries no argument; whatever the config put there is
        // ignored, matching the original runner
        CommandKind::GetStatus => Ok(Command::GetStatus),
        CommandKind::SetChannelsEnabled => {
            Ok(Command::SetChannelsEnabled { enabled: expect_bool(kind, argument)? })
        }
        CommandKind::SetCalEnabled => {
            Ok(Command::SetCalEnabled { enabled: expect_bool(kind, argument)? })
        }
        CommandKind::SetCalAttenuation => {
            Ok(Command::SetCalAttenuation { db: expect_i32(kind, argument)? })
        }
        CommandKind::SetFrontendAttenuation => {
            Ok(Command::SetFrontendAttenuation { db: expect_i32(kind, argument)? })
        }
        CommandKind::SetRfBand => {
            let name = expect_str(kind, argument)?;
            let band = RfBand::from_wire_name(name).ok_or_else(|| {
                DispatchError::InvalidEnumName { field: "rf_band", name: name.to_string() }
            })?;
            Ok(Command::SetRfBand { band })
        }
        CommandKind::SetPllFrequency => {
            let mhz = argument
                .as_u64()
                .and_then(|v| u32::try_from(v).ok())
                .ok_or(DispatchError::InvalidArgument {
                    command: kind.name(),
                    expected: "a frequency in MHz",
                })?;
            Ok(Command::SetPllFrequency { mhz })
        }
        CommandKind::SetSwitches => build_switches(argument),
    }
}

fn build_switches(argument: &Value) -> Result<Command, DispatchError> {
    let fields = argument.as_object().ok_or(DispatchError::InvalidArgument {
        command: "set_switches",
        expected: "an object with optional rf_switch/mixer_switch/if_switch names",
    })?;

    let rf = match fields.get("rf_switch") {
        Some(value) => {
            let name = expect_switch_name(value, "rf_switch")?;
            Some(RfSwitchOption::from_wire_name(name).ok_or_else(|| {
                DispatchError::InvalidEnumName { field: "rf_switch", name: name.to_string() }
            })?)
        }
        None => None,
    };
    let mixer = match fields.get("mixer_switch") {
        Some(value) => {
            let name = expect_switch_name(value, "mixer_switch")?;
            Some(MixerSwitchOption::from_wire_name(name).ok_or_else(|| {
                DispatchError::InvalidEnumName { field: "mixer_switch", name: name.to_string() }
            })?)
        }
        None => None,
    };
    let if_ = match fields.get("if_switch") {
        Some(value) => {
            let name = expect_switch_name(value, "if_switch")?;
            Some(IfSwitchOption::from_wire_name(name).ok_or_else(|| {
                DispatchError::InvalidEnumName { field: "if_switch", name: name.to_string() }
            })?)
        }
        None => None,
    };

    Ok(Command::SetSwitches { rf, mixer, if_ })
}

fn expect_bool(kind: CommandKind, argument: &Value) -> Result<bool, DispatchError> {
    argument.as_bool().ok_or(DispatchError::InvalidArgument {
        command: kind.name(),
        expected: "a boolean",
    })
}

fn expect_i32(kind: CommandKind, argument: &Value) -> Result<i32, DispatchError> {
    argument
        .as_i64()
        .and_then(|v| i32::try_from(v).ok())
        .ok_or(DispatchError::InvalidArgument {
            command: kind.name(),
            expected: "an attenuation in dB",
        })
}

fn expect_str<'a>(kind: CommandKind, argument: &'a Value) -> Result<&'a str, DispatchError> {
    argument.as_str().ok_or(DispatchError::InvalidArgument {
        command: kind.name(),
        expected: "a symbolic enum name",
    })
}

fn expect_switch_name<'a>(value: &'a Value, field: &'static str) -> Result<&'a str, DispatchError> {
    value.as_str().ok_or(DispatchError::InvalidArgument {
        command: "set_switches",
        expected: match field {
            "rf_switch" => "a symbolic rf_switch name",
            "mixer_switch" => "a symbolic mixer_switch name",
            _ => "a symbolic if_switch name",
        },
    })
}

/// Build and send one command, returning the decoded response unchanged.
pub fn dispatch(
    session: &mut Session,
    name: &str,
    argument: &Value,
) -> Result<Response, ClientError> {
    let command = build_command(name, argument)?;
    let response = session.round_trip(&command)?;
    Ok(response)
}

/// Deterministic batch order: `set_frontend_attenuation` moves to the end,
/// everything else keeps its relative input order.
///
/// This is an ordering guarantee, not an optimization: attenuation changes
/// must follow the other configuration changes.
pub fn execution_order(commands: &Map<String, Value>) -> Vec<(&str, &Value)> {
    let mut ordered: Vec<(&str, &Value)> = commands
        .iter()
        .filter(|(name, _)| name.as_str() != ATTENUATION_LAST)
        .map(|(name, value)| (name.as_str(), value))
        .collect();
    if let Some(value) = commands.get(ATTENUATION_LAST) {
        ordered.push((ATTENUATION_LAST, value));
    }
    ordered
}

/// Result of a batch run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchOutcome {
    /// Commands that completed a round-trip
    pub executed: usize,
    /// Commands skipped before reaching the wire
    pub skipped: usize,
}

/// Run a whole command batch over one session.
///
/// Dispatch-level failures (unknown command, bad enum name, bad argument)
/// are logged and skipped; any transport failure aborts the run and is
/// returned. Every diagnostic names the command that was in flight.
pub fn run_batch(
    session: &mut Session,
    commands: &Map<String, Value>,
) -> Result<BatchOutcome, SessionError> {
    let mut outcome = BatchOutcome { executed: 0, skipped: 0 };

    for (name, argument) in execution_order(commands) {
        info!(command = name, "sending");
        match dispatch(session, name, argument) {
            Ok(Response::Status(status)) => {
                outcome.executed += 1;
                info!(command = name, "device status\n{}", StatusView::from(&status));
            }
            Ok(Response::Ack(kind)) => {
                outcome.executed += 1;
                info!(command = name, acked = kind.name(), "acknowledged");
            }
            Err(ClientError::Dispatch(err)) => {
                outcome.skipped += 1;
                warn!(command = name, %err, "skipping command");
            }
            Err(ClientError::Session(err)) => {
                error!(command = name, %err, "aborting run");
                return Err(err);
            }
        }
        // Let the hardware settle before the next command
        thread::sleep(SETTLE_DELAY);
    }

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    fn commands(pairs: &[(&str, Value)]) -> Map<String, Value> {
        pairs
            .iter()
            .map(|(name, value)| (name.to_string(), value.clone()))
            .collect()
    }

    #[test]
    fn build_known_commands() {
        assert_eq!(
            build_command("get_status", &Value::Null).unwrap(),
            Command::GetStatus
        );
        assert_eq!(
            build_command("set_cal_enabled", &json!(true)).unwrap(),
            Command::SetCalEnabled { enabled: true }
        );
        assert_eq!(
            build_command("set_frontend_attenuation", &json!(30)).unwrap(),
            Command::SetFrontendAttenuation { db: 30 }
        );
        assert_eq!(
            build_command("set_rf_band", &json!("BAND_2_6GHZ")).unwrap(),
            Command::SetRfBand { band: RfBand::Band2To6Ghz }
        );
        assert_eq!(
            build_command("set_pll_frequency", &json!(2250)).unwrap(),
            Command::SetPllFrequency { mhz: 2250 }
        );
    }

    #[test]
    fn build_switches_partial() {
        assert_eq!(
            build_command("set_switches", &json!({ "mixer_switch": "BYPASS" })).unwrap(),
            Command::SetSwitches {
                rf: None,
                mixer: Some(MixerSwitchOption::Bypass),
                if_: None,
            }
        );
    }

    #[test]
    fn unknown_command_is_rejected_at_the_boundary() {
        assert_eq!(
            build_command("foo_bar", &json!(1)),
            Err(DispatchError::UnknownCommand("foo_bar".into()))
        );
    }

    #[test]
    fn invalid_enum_name_is_rejected() {
        assert_eq!(
            build_command("set_rf_band", &json!("BAND_99GHZ")),
            Err(DispatchError::InvalidEnumName {
                field: "rf_band",
                name: "BAND_99GHZ".into(),
            })
        );
        assert_eq!(
            build_command("set_switches", &json!({ "rf_switch": "NO_SUCH_PATH" })),
            Err(DispatchError::InvalidEnumName {
                field: "rf_switch",
                name: "NO_SUCH_PATH".into(),
            })
        );
    }

    #[test]
    fn wrong_argument_shape_is_rejected() {
        assert!(matches!(
            build_command("set_cal_enabled", &json!(1)),
            Err(DispatchError::InvalidArgument { command: "set_cal_enabled", .. })
        ));
        assert!(matches!(
            build_command("set_switches", &json!("BYPASS")),
            Err(DispatchError::InvalidArgument { command: "set_switches", .. })
        ));
    }

    #[test]
    fn attenuation_runs_last() {
        let commands = commands(&[
            ("set_rf_band", json!("BAND_2_6GHZ")),
            ("set_frontend_attenuation", json!(10)),
            ("set_cal_enabled", json!(true)),
        ]);
        let order: Vec<&str> = execution_order(&commands).iter().map(|(n, _)| *n).collect();
        assert_eq!(
            order,
            vec!["set_rf_band", "set_cal_enabled", "set_frontend_attenuation"]
        );
    }

    #[test]
    fn order_without_attenuation_is_untouched() {
        let commands = commands(&[
            ("set_cal_enabled", json!(true)),
            ("get_status", json!(true)),
            ("set_rf_band", json!("BAND_0_5_2GHZ")),
        ]);
        let order: Vec<&str> = execution_order(&commands).iter().map(|(n, _)| *n).collect();
        assert_eq!(order, vec!["set_cal_enabled", "get_status", "set_rf_band"]);
    }

    proptest! {
        /// Whatever the input order, `set_frontend_attenuation` lands last
        /// and the other commands keep their relative order.
        #[test]
        fn prop_reordering_invariant(
            names in proptest::sample::subsequence(
                vec![
                    "get_status",
                    "set_channels_enabled",
                    "set_cal_enabled",
                    "set_frontend_attenuation",
                    "set_rf_band",
                    "set_pll_frequency",
                    "set_switches",
                ],
                0..=7,
            ),
            shuffle in any::<u64>(),
        ) {
            let mut names = names;
            // cheap deterministic shuffle driven by the seed
            if names.len() > 1 {
                let len = names.len();
                for i in 0..len {
                    let j = (shuffle as usize).wrapping_mul(i + 1) % len;
                    names.swap(i, j);
                }
            }
            let map: Map<String, Value> = names
                .iter()
                .map(|name| (name.to_string(), Value::Bool(true)))
                .collect();

            let order: Vec<&str> = execution_order(&map).iter().map(|(n, _)| *n).collect();

            if names.iter().any(|n| *n == "set_frontend_attenuation") {
                prop_assert_eq!(order.last().copied(), Some("set_frontend_attenuation"));
            }
            let rest_in: Vec<&str> = names
                .iter()
                .copied()
                .filter(|n| *n != "set_frontend_attenuation")
                .collect();
            let rest_out: Vec<&str> = order
                .iter()
                .copied()
                .filter(|n| *n != "set_frontend_attenuation")
                .collect();
            prop_assert_eq!(rest_in, rest_out);
        }
    }
}
