//! Protobuf wire codec for the control envelope
//!
//! Hand-rolled protobuf encoding: varints, `(field << 3) | wire_type` keys,
//! length-delimited submessages. There is no outer length prefix; the link
//! is a trusted point-to-point connection where one send carries exactly one
//! envelope and one read returns exactly one reply, and the transport layer
//! treats that as an accepted constraint rather than hiding it.
//!
//! proto3 rules apply: scalar zero values are omitted on encode and default
//! on decode. The three `set_switches_request` fields are the exception:
//! they use explicit presence, so an absent field means "leave that switch
//! alone" while a present zero code is a real selection.
//!
//! Unknown fields *inside* a known message are skipped (forward
//! compatibility); an unknown envelope discriminant is a malformed message.

use tracing::trace;

use crate::envelope::{Command, CommandKind, DeviceStatus, Response};
use crate::error::DecodeError;
use crate::options::{IfSwitchOption, MixerSwitchOption, RfBand, RfSwitchOption};

/// Varint wire type
const WIRE_VARINT: u32 = 0;
/// 64-bit wire type (skipped only)
const WIRE_FIXED64: u32 = 1;
/// Length-delimited wire type
const WIRE_LEN: u32 = 2;
/// 32-bit wire type (skipped only)
const WIRE_FIXED32: u32 = 5;

/// Envelope field number of `get_status_response`
pub const GET_STATUS_RESPONSE: u32 = 9;
/// Envelope field number of `ack`
pub const ACK: u32 = 10;

// get_status_response field numbers
const ST_LO_FREQUENCY_MHZ: u32 = 1;
const ST_ATTENUATION_DB: u32 = 2;
const ST_CHANNELS_ENABLED: u32 = 3;
const ST_CALIBRATION_ENABLED: u32 = 4;
const ST_RF_SWITCH: u32 = 5;
const ST_MIXER_SWITCH: u32 = 6;
const ST_IF_SWITCH: u32 = 7;

// set_switches_request field numbers
const SW_RF: u32 = 1;
const SW_MIXER: u32 = 2;
const SW_IF: u32 = 3;

// ack field numbers
const ACK_REQUEST_ID: u32 = 1;

// Encoding helpers

fn put_varint(buf: &mut Vec<u8>, mut value: u64) {
    loop {
        let byte = (value & 0x7F) as u8;
        value >>= 7;
        if value == 0 {
            buf.push(byte);
            return;
        }
        buf.push(byte | 0x80);
    }
}

fn put_key(buf: &mut Vec<u8>, field: u32, wire_type: u32) {
    put_varint(buf, (u64::from(field) << 3) | u64::from(wire_type));
}

/// uint32/enum field, omitted when zero (proto3 default)
fn put_u32(buf: &mut Vec<u8>, field: u32, value: u32) {
    if value != 0 {
        put_key(buf, field, WIRE_VARINT);
        put_varint(buf, u64::from(value));
    }
}

/// int32 field, omitted when zero; negatives sign-extend to ten bytes
fn put_i32(buf: &mut Vec<u8>, field: u32, value: i32) {
    if value != 0 {
        put_key(buf, field, WIRE_VARINT);
        put_varint(buf, i64::from(value) as u64);
    }
}

/// bool field, omitted when false
fn put_bool(buf: &mut Vec<u8>, field: u32, value: bool) {
    if value {
        put_key(buf, field, WIRE_VARINT);
        buf.push(1);
    }
}

/// Enum field with explicit presence: written even when the code is zero
fn put_enum_present(buf: &mut Vec<u8>, field: u32, code: u32) {
    put_key(buf, field, WIRE_VARINT);
    put_varint(buf, u64::from(code));
}

/// Length-delimited submessage field
fn put_message(buf: &mut Vec<u8>, field: u32, body: &[u8]) {
    put_key(buf, field, WIRE_LEN);
    put_varint(buf, body.len() as u64);
    buf.extend_from_slice(body);
}

/// Encode a request into one envelope's worth of bytes.
pub fn encode_command(command: &Command) -> Vec<u8> {
    let mut body = Vec::new();
    match command {
        Command::GetStatus => {}
        Command::SetChannelsEnabled { enabled } | Command::SetCalEnabled { enabled } => {
            put_bool(&mut body, 1, *enabled);
        }
        Command::SetCalAttenuation { db } | Command::SetFrontendAttenuation { db } => {
            put_i32(&mut body, 1, *db);
        }
        Command::SetRfBand { band } => put_u32(&mut body, 1, band.code()),
        Command::SetPllFrequency { mhz } => put_u32(&mut body, 1, *mhz),
        Command::SetSwitches { rf, mixer, if_ } => {
            if let Some(rf) = rf {
                put_enum_present(&mut body, SW_RF, rf.code());
            }
            if let Some(mixer) = mixer {
                put_enum_present(&mut body, SW_MIXER, mixer.code());
            }
            if let Some(if_) = if_ {
                put_enum_present(&mut body, SW_IF, if_.code());
            }
        }
    }

    let mut packet = Vec::with_capacity(body.len() + 2);
    put_message(&mut packet, command.kind().field_number(), &body);
    packet
}

/// Encode a reply into one envelope's worth of bytes (device side; the
/// client only ever decodes these).
pub fn encode_response(response: &Response) -> Vec<u8> {
    let mut body = Vec::new();
    let field = match response {
        Response::Status(status) => {
            put_u32(&mut body, ST_LO_FREQUENCY_MHZ, status.lo_frequency_mhz);
            put_i32(&mut body, ST_ATTENUATION_DB, status.attenuation_db);
            put_bool(&mut body, ST_CHANNELS_ENABLED, status.channels_enabled);
            put_bool(&mut body, ST_CALIBRATION_ENABLED, status.calibration_enabled);
            put_u32(&mut body, ST_RF_SWITCH, status.rf_switch);
            put_u32(&mut body, ST_MIXER_SWITCH, status.mixer_switch);
            put_u32(&mut body, ST_IF_SWITCH, status.if_switch);
            GET_STATUS_RESPONSE
        }
        Response::Ack(kind) => {
            put_u32(&mut body, ACK_REQUEST_ID, kind.field_number());
            ACK
        }
    };

    let mut packet = Vec::with_capacity(body.len() + 2);
    put_message(&mut packet, field, &body);
    packet
}

// Decoding helpers

struct Reader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    fn is_empty(&self) -> bool {
        self.pos >= self.buf.len()
    }

    fn varint(&mut self) -> Result<u64, DecodeError> {
        let mut value: u64 = 0;
        for shift in 0..10 {
            let byte = *self
                .buf
                .get(self.pos)
                .ok_or(DecodeError::Truncated { needed: 1 })?;
            self.pos += 1;
            value |= u64::from(byte & 0x7F) << (shift * 7);
            if byte & 0x80 == 0 {
                return Ok(value);
            }
        }
        Err(DecodeError::BadVarint)
    }

    fn key(&mut self) -> Result<(u32, u32), DecodeError> {
        let key = self.varint()?;
        Ok(((key >> 3) as u32, (key & 0x7) as u32))
    }

    fn bytes(&mut self) -> Result<&'a [u8], DecodeError> {
        let len = self.varint()? as usize;
        // the claimed length is attacker-controlled wire data: the add must
        // not overflow and the end must stay inside the buffer
        let end = self
            .pos
            .checked_add(len)
            .filter(|end| *end <= self.buf.len())
            .ok_or(DecodeError::Truncated {
                needed: len.saturating_sub(self.buf.len() - self.pos),
            })?;
        let slice = &self.buf[self.pos..end];
        self.pos = end;
        Ok(slice)
    }

    fn skip_fixed(&mut self, len: usize) -> Result<(), DecodeError> {
        let end = self
            .pos
            .checked_add(len)
            .filter(|end| *end <= self.buf.len())
            .ok_or(DecodeError::Truncated {
                needed: len.saturating_sub(self.buf.len() - self.pos),
            })?;
        self.pos = end;
        Ok(())
    }

    fn skip(&mut self, wire_type: u32) -> Result<(), DecodeError> {
        match wire_type {
            WIRE_VARINT => self.varint().map(|_| ()),
            WIRE_FIXED64 => self.skip_fixed(8),
            WIRE_LEN => self.bytes().map(|_| ()),
            WIRE_FIXED32 => self.skip_fixed(4),
            other => Err(DecodeError::BadWireType(other)),
        }
    }

    /// Varint payload of a known field, rejecting other wire types.
    fn varint_field(&mut self, field: u32, wire_type: u32) -> Result<u64, DecodeError> {
        if wire_type != WIRE_VARINT {
            return Err(DecodeError::UnexpectedWireType { field, wire_type });
        }
        self.varint()
    }
}

/// Read the envelope and return the oneof discriminant plus its payload.
///
/// Protobuf last-wins semantics apply if the oneof field is repeated; an
/// envelope with no submessage field at all is malformed.
fn read_envelope(data: &[u8]) -> Result<(u32, &[u8]), DecodeError> {
    if data.is_empty() {
        return Err(DecodeError::Empty);
    }
    let mut reader = Reader::new(data);
    let mut case: Option<(u32, &[u8])> = None;
    while !reader.is_empty() {
        let (field, wire_type) = reader.key()?;
        if wire_type != WIRE_LEN {
            return Err(DecodeError::UnexpectedWireType { field, wire_type });
        }
        case = Some((field, reader.bytes()?));
    }
    case.ok_or(DecodeError::Empty)
}

/// Decode a reply envelope (client side).
///
/// Returns [`DecodeError::WrongDirection`] when the envelope carries a
/// request, and [`DecodeError::UnknownMessageId`] for discriminants outside
/// the protocol.
pub fn decode_response(data: &[u8]) -> Result<Response, DecodeError> {
    let (field, body) = read_envelope(data)?;
    match field {
        GET_STATUS_RESPONSE => decode_status(body).map(Response::Status),
        ACK => decode_ack(body).map(Response::Ack),
        other => match CommandKind::from_field_number(other) {
            Some(kind) => Err(DecodeError::WrongDirection(kind.name())),
            None => Err(DecodeError::UnknownMessageId(other)),
        },
    }
}

/// Decode a request envelope (device side; used by the simulator).
pub fn decode_command(data: &[u8]) -> Result<Command, DecodeError> {
    let (field, body) = read_envelope(data)?;
    let kind = match field {
        GET_STATUS_RESPONSE => return Err(DecodeError::WrongDirection("get_status_response")),
        ACK => return Err(DecodeError::WrongDirection("ack")),
        other => {
            CommandKind::from_field_number(other).ok_or(DecodeError::UnknownMessageId(other))?
        }
    };

    match kind {
        CommandKind::GetStatus => {
            skip_all(body)?;
            Ok(Command::GetStatus)
        }
        CommandKind::SetChannelsEnabled => {
            Ok(Command::SetChannelsEnabled { enabled: decode_bool_message(body)? })
        }
        CommandKind::SetCalEnabled => {
            Ok(Command::SetCalEnabled { enabled: decode_bool_message(body)? })
        }
        CommandKind::SetCalAttenuation => {
            Ok(Command::SetCalAttenuation { db: decode_i32_message(body)? })
        }
        CommandKind::SetFrontendAttenuation => {
            Ok(Command::SetFrontendAttenuation { db: decode_i32_message(body)? })
        }
        CommandKind::SetRfBand => {
            let code = decode_u32_message(body)?;
            let band = RfBand::from_code(code).ok_or(DecodeError::UnknownEnumCode {
                field: "set_rf_band_request.band",
                code,
            })?;
            Ok(Command::SetRfBand { band })
        }
        CommandKind::SetPllFrequency => {
            Ok(Command::SetPllFrequency { mhz: decode_u32_message(body)? })
        }
        CommandKind::SetSwitches => decode_switches(body),
    }
}

/// Skip every field of a message, validating the structure.
fn skip_all(body: &[u8]) -> Result<(), DecodeError> {
    let mut reader = Reader::new(body);
    while !reader.is_empty() {
        let (field, wire_type) = reader.key()?;
        trace!(field, "skipping unexpected field");
        reader.skip(wire_type)?;
    }
    Ok(())
}

/// Single-varint-field messages: `{ 1: value }` with unknown fields skipped.
fn decode_varint_message(body: &[u8]) -> Result<u64, DecodeError> {
    let mut reader = Reader::new(body);
    let mut value = 0u64;
    while !reader.is_empty() {
        let (field, wire_type) = reader.key()?;
        if field == 1 {
            value = reader.varint_field(field, wire_type)?;
        } else {
            trace!(field, "skipping unknown field");
            reader.skip(wire_type)?;
        }
    }
    Ok(value)
}

fn decode_bool_message(body: &[u8]) -> Result<bool, DecodeError> {
    decode_varint_message(body).map(|v| v != 0)
}

fn decode_i32_message(body: &[u8]) -> Result<i32, DecodeError> {
    decode_varint_message(body).map(|v| v as i32)
}

fn decode_u32_message(body: &[u8]) -> Result<u32, DecodeError> {
    decode_varint_message(body).map(|v| v as u32)
}

fn decode_switches(body: &[u8]) -> Result<Command, DecodeError> {
    let mut rf = None;
    let mut mixer = None;
    let mut if_ = None;

    let mut reader = Reader::new(body);
    while !reader.is_empty() {
        let (field, wire_type) = reader.key()?;
        match field {
            SW_RF => {
                let code = reader.varint_field(field, wire_type)? as u32;
                rf = Some(RfSwitchOption::from_code(code).ok_or(DecodeError::UnknownEnumCode {
                    field: "set_switches_request.rf_switch",
                    code,
                })?);
            }
            SW_MIXER => {
                let code = reader.varint_field(field, wire_type)? as u32;
                mixer =
                    Some(MixerSwitchOption::from_code(code).ok_or(DecodeError::UnknownEnumCode {
                        field: "set_switches_request.mixer_switch",
                        code,
                    })?);
            }
            SW_IF => {
                let code = reader.varint_field(field, wire_type)? as u32;
                if_ = Some(IfSwitchOption::from_code(code).ok_or(DecodeError::UnknownEnumCode {
                    field: "set_switches_request.if_switch",
                    code,
                })?);
            }
            other => {
                trace!(field = other, "skipping unknown field");
                reader.skip(wire_type)?;
            }
        }
    }

    Ok(Command::SetSwitches { rf, mixer, if_ })
}

fn decode_status(body: &[u8]) -> Result<DeviceStatus, DecodeError> {
    let mut status = DeviceStatus::default();
    let mut reader = Reader::new(body);
    while !reader.is_empty() {
        let (field, wire_type) = reader.key()?;
        match field {
            ST_LO_FREQUENCY_MHZ => {
                status.lo_frequency_mhz = reader.varint_field(field, wire_type)? as u32;
            }
            ST_ATTENUATION_DB => {
                status.attenuation_db = reader.varint_field(field, wire_type)? as i32;
            }
            ST_CHANNELS_ENABLED => {
                status.channels_enabled = reader.varint_field(field, wire_type)? != 0;
            }
            ST_CALIBRATION_ENABLED => {
                status.calibration_enabled = reader.varint_field(field, wire_type)? != 0;
            }
            ST_RF_SWITCH => {
                status.rf_switch = reader.varint_field(field, wire_type)? as u32;
            }
            ST_MIXER_SWITCH => {
                status.mixer_switch = reader.varint_field(field, wire_type)? as u32;
            }
            ST_IF_SWITCH => {
                status.if_switch = reader.varint_field(field, wire_type)? as u32;
            }
            other => {
                trace!(field = other, "skipping unknown status field");
                reader.skip(wire_type)?;
            }
        }
    }
    Ok(status)
}

fn decode_ack(body: &[u8]) -> Result<CommandKind, DecodeError> {
    let request_id = decode_u32_message(body)?;
    CommandKind::from_field_number(request_id)
        .ok_or(DecodeError::UnknownMessageId(request_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn encode_get_status() {
        // field 1, wire type 2, empty body
        assert_eq!(encode_command(&Command::GetStatus), vec![0x0A, 0x00]);
    }

    #[test]
    fn encode_set_channels_enabled() {
        let encoded = encode_command(&Command::SetChannelsEnabled { enabled: true });
        assert_eq!(encoded, vec![0x12, 0x02, 0x08, 0x01]);
        // false is a proto3 default: empty body
        let encoded = encode_command(&Command::SetChannelsEnabled { enabled: false });
        assert_eq!(encoded, vec![0x12, 0x00]);
    }

    #[test]
    fn encode_set_frontend_attenuation() {
        let encoded = encode_command(&Command::SetFrontendAttenuation { db: 30 });
        assert_eq!(encoded, vec![0x2A, 0x02, 0x08, 0x1E]);
        // zero dB omitted
        let encoded = encode_command(&Command::SetFrontendAttenuation { db: 0 });
        assert_eq!(encoded, vec![0x2A, 0x00]);
    }

    #[test]
    fn negative_attenuation_roundtrips() {
        // int32 negatives sign-extend to the full ten-byte varint
        let command = Command::SetCalAttenuation { db: -3 };
        let encoded = encode_command(&command);
        assert_eq!(encoded.len(), 2 + 1 + 10);
        assert_eq!(decode_command(&encoded).unwrap(), command);
    }

    #[test]
    fn switch_presence_is_explicit() {
        // A present zero code must stay distinguishable from an absent field
        let command = Command::SetSwitches {
            rf: Some(RfSwitchOption::Termination),
            mixer: None,
            if_: None,
        };
        let encoded = encode_command(&command);
        assert_eq!(encoded, vec![0x42, 0x02, 0x08, 0x00]);
        assert_eq!(decode_command(&encoded).unwrap(), command);
    }

    #[test]
    fn command_roundtrip_all_variants() {
        let commands = [
            Command::GetStatus,
            Command::SetChannelsEnabled { enabled: true },
            Command::SetChannelsEnabled { enabled: false },
            Command::SetCalEnabled { enabled: true },
            Command::SetCalAttenuation { db: 12 },
            Command::SetFrontendAttenuation { db: 0 },
            Command::SetFrontendAttenuation { db: 30 },
            Command::SetRfBand { band: RfBand::Band05To2Ghz },
            Command::SetRfBand { band: RfBand::Band12To18Ghz },
            Command::SetPllFrequency { mhz: 2250 },
            Command::SetSwitches { rf: None, mixer: None, if_: None },
            Command::SetSwitches {
                rf: Some(RfSwitchOption::Lpf4Ghz),
                mixer: Some(MixerSwitchOption::Bypass),
                if_: Some(IfSwitchOption::Bandpass1To2Ghz),
            },
        ];
        for command in commands {
            let decoded = decode_command(&encode_command(&command)).unwrap();
            assert_eq!(decoded, command, "roundtrip failed for {command:?}");
        }
    }

    #[test]
    fn decode_handcrafted_status() {
        // get_status_response { lo=2250, attn=30, channels=true, rf=2, mixer=1 }
        // cal_enabled and if_switch are zero and omitted
        let bytes = [
            0x4A, 0x0B, // field 9, len 11
            0x08, 0xCA, 0x11, // lo_frequency_mhz = 2250
            0x10, 0x1E, // attenuation_db = 30
            0x18, 0x01, // channels_enabled = true
            0x28, 0x02, // rf_switch = 2
            0x30, 0x01, // mixer_switch = 1
        ];
        let response = decode_response(&bytes).unwrap();
        assert_eq!(
            response,
            Response::Status(DeviceStatus {
                lo_frequency_mhz: 2250,
                attenuation_db: 30,
                channels_enabled: true,
                calibration_enabled: false,
                rf_switch: 2,
                mixer_switch: 1,
                if_switch: 0,
            })
        );
    }

    #[test]
    fn response_roundtrip() {
        let status = Response::Status(DeviceStatus {
            lo_frequency_mhz: 8400,
            attenuation_db: 15,
            channels_enabled: false,
            calibration_enabled: true,
            rf_switch: 4,
            mixer_switch: 0,
            if_switch: 2,
        });
        assert_eq!(decode_response(&encode_response(&status)).unwrap(), status);

        for kind in CommandKind::ALL {
            let ack = Response::Ack(*kind);
            assert_eq!(decode_response(&encode_response(&ack)).unwrap(), ack);
        }
    }

    #[test]
    fn empty_input_is_not_a_message() {
        assert_eq!(decode_response(&[]), Err(DecodeError::Empty));
        assert_eq!(decode_command(&[]), Err(DecodeError::Empty));
    }

    #[test]
    fn truncated_payload_is_rejected() {
        // claims a 10-byte body but carries 2
        let bytes = [0x4A, 0x0A, 0x08, 0xCA];
        assert_eq!(
            decode_response(&bytes),
            Err(DecodeError::Truncated { needed: 8 })
        );
    }

    #[test]
    fn huge_length_claim_is_truncated() {
        // length varint of u64::MAX: the claimed end must not wrap around
        let mut bytes = vec![0x0A];
        bytes.extend_from_slice(&[0xFF; 9]);
        bytes.push(0x01);
        assert!(matches!(
            decode_response(&bytes),
            Err(DecodeError::Truncated { .. })
        ));
        assert!(matches!(
            decode_command(&bytes),
            Err(DecodeError::Truncated { .. })
        ));

        // same claim buried in an inner field of a known message
        let bytes = [0x4A, 0x04, 0x42, 0xFF, 0xFF, 0x7F];
        assert!(matches!(
            decode_response(&bytes),
            Err(DecodeError::Truncated { .. })
        ));
    }

    #[test]
    fn request_decoded_as_response_is_wrong_direction() {
        let encoded = encode_command(&Command::GetStatus);
        assert_eq!(
            decode_response(&encoded),
            Err(DecodeError::WrongDirection("get_status"))
        );
    }

    #[test]
    fn response_decoded_as_command_is_wrong_direction() {
        let encoded = encode_response(&Response::Ack(CommandKind::GetStatus));
        assert_eq!(
            decode_command(&encoded),
            Err(DecodeError::WrongDirection("ack"))
        );
    }

    #[test]
    fn unknown_discriminant_is_rejected() {
        // field 15, empty body, outside the envelope table
        let bytes = [0x7A, 0x00];
        assert_eq!(decode_response(&bytes), Err(DecodeError::UnknownMessageId(15)));
        assert_eq!(decode_command(&bytes), Err(DecodeError::UnknownMessageId(15)));
    }

    #[test]
    fn envelope_field_must_be_length_delimited() {
        // field 9 with varint wire type
        let bytes = [0x48, 0x01];
        assert_eq!(
            decode_response(&bytes),
            Err(DecodeError::UnexpectedWireType { field: 9, wire_type: 0 })
        );
    }

    #[test]
    fn unknown_inner_fields_are_skipped() {
        // set_cal_enabled_request { 1: true, 9: varint 7 }; field 9 unknown
        let bytes = [0x1A, 0x04, 0x08, 0x01, 0x48, 0x07];
        assert_eq!(
            decode_command(&bytes).unwrap(),
            Command::SetCalEnabled { enabled: true }
        );
    }

    #[test]
    fn unknown_band_code_is_rejected() {
        // set_rf_band_request { band = 9 }
        let bytes = [0x32, 0x02, 0x08, 0x09];
        assert_eq!(
            decode_command(&bytes),
            Err(DecodeError::UnknownEnumCode {
                field: "set_rf_band_request.band",
                code: 9,
            })
        );
    }

    #[test]
    fn overlong_varint_is_rejected() {
        let mut bytes = vec![0x12, 0x0C, 0x08];
        bytes.extend_from_slice(&[0x80; 10]);
        bytes.push(0x01);
        assert_eq!(decode_command(&bytes), Err(DecodeError::BadVarint));
    }

    fn command_strategy() -> impl Strategy<Value = Command> {
        prop_oneof![
            Just(Command::GetStatus),
            any::<bool>().prop_map(|enabled| Command::SetChannelsEnabled { enabled }),
            any::<bool>().prop_map(|enabled| Command::SetCalEnabled { enabled }),
            any::<i32>().prop_map(|db| Command::SetCalAttenuation { db }),
            any::<i32>().prop_map(|db| Command::SetFrontendAttenuation { db }),
            proptest::sample::select(RfBand::ALL.to_vec())
                .prop_map(|band| Command::SetRfBand { band }),
            any::<u32>().prop_map(|mhz| Command::SetPllFrequency { mhz }),
            (
                proptest::option::of(proptest::sample::select(RfSwitchOption::ALL.to_vec())),
                proptest::option::of(proptest::sample::select(MixerSwitchOption::ALL.to_vec())),
                proptest::option::of(proptest::sample::select(IfSwitchOption::ALL.to_vec())),
            )
                .prop_map(|(rf, mixer, if_)| Command::SetSwitches { rf, mixer, if_ }),
        ]
    }

    proptest! {
        #[test]
        fn prop_command_roundtrip(command in command_strategy()) {
            let decoded = decode_command(&encode_command(&command)).unwrap();
            prop_assert_eq!(decoded, command);
        }

        #[test]
        fn prop_status_roundtrip(
            lo_frequency_mhz in any::<u32>(),
            attenuation_db in any::<i32>(),
            channels_enabled in any::<bool>(),
            calibration_enabled in any::<bool>(),
            rf_switch in 0u32..8,
            mixer_switch in 0u32..4,
            if_switch in 0u32..4,
        ) {
            let response = Response::Status(DeviceStatus {
                lo_frequency_mhz,
                attenuation_db,
                channels_enabled,
                calibration_enabled,
                rf_switch,
                mixer_switch,
                if_switch,
            });
            let decoded = decode_response(&encode_response(&response)).unwrap();
            prop_assert_eq!(decoded, response);
        }

        #[test]
        fn prop_decode_never_panics(bytes in proptest::collection::vec(any::<u8>(), 0..64)) {
            let _ = decode_response(&bytes);
            let _ = decode_command(&bytes);
        }
    }
}
