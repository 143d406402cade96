//! Closed name/code tables for the front-end's band and switch enumerations
//!
//! Wire names follow the device's protobuf spelling and may begin with a
//! digit (`4GHZ_LPF`), so they are table data rather than Rust identifiers.
//! Each enumeration supports forward lookup (name to code, for building
//! requests) and reverse lookup (code to name, for projecting status), and the
//! tables are the single source of truth for the wire codes.

/// Label rendered for integer codes outside the closed tables.
///
/// Status projection tolerates protocol skew: an unrecognized code renders
/// as this sentinel instead of failing the projection.
pub const UNKNOWN_LABEL: &str = "UNKNOWN";

/// Defines a wire enumeration with bijective code and name tables.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $code:literal, $wire:literal; )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            /// Every defined option, in wire-code order.
            pub const ALL: &'static [$name] = &[ $( $name::$variant, )+ ];

            /// Integer code used on the wire.
            pub fn code(self) -> u32 {
                match self { $( $name::$variant => $code, )+ }
            }

            /// Reverse lookup from a wire code.
            pub fn from_code(code: u32) -> Option<Self> {
                match code { $( $code => Some($name::$variant), )+ _ => None }
            }

            /// Symbolic name as the device protocol spells it.
            pub fn wire_name(self) -> &'static str {
                match self { $( $name::$variant => $wire, )+ }
            }

            /// Forward lookup from a symbolic name.
            pub fn from_wire_name(name: &str) -> Option<Self> {
                match name { $( $wire => Some($name::$variant), )+ _ => None }
            }

            /// Resolve a raw code to its name, or [`UNKNOWN_LABEL`] for codes
            /// outside the table.
            pub fn label(code: u32) -> &'static str {
                Self::from_code(code).map(Self::wire_name).unwrap_or(UNKNOWN_LABEL)
            }
        }
    };
}

wire_enum! {
    /// RF input band selected by the front-end preselector.
    ///
    /// Iteration order of [`RfBand::ALL`] is the device's band order and is
    /// what band sweeps step through.
    RfBand {
        /// 0.5-2 GHz low band
        Band05To2Ghz = 0, "BAND_0_5_2GHZ";
        /// 2-6 GHz band
        Band2To6Ghz = 1, "BAND_2_6GHZ";
        /// 6-12 GHz band
        Band6To12Ghz = 2, "BAND_6_12GHZ";
        /// 12-18 GHz high band
        Band12To18Ghz = 3, "BAND_12_18GHZ";
    }
}

wire_enum! {
    /// RF path switch ahead of the mixer.
    RfSwitchOption {
        /// Input terminated (no RF path)
        Termination = 0, "RF_TERMINATION";
        /// 2 GHz low-pass filter path
        Lpf2Ghz = 1, "2GHZ_LPF";
        /// 4 GHz low-pass filter path
        Lpf4Ghz = 2, "4GHZ_LPF";
        /// 6 GHz low-pass filter path
        Lpf6Ghz = 3, "6GHZ_LPF";
        /// Filter bank bypassed
        Bypass = 4, "BYPASS";
    }
}

wire_enum! {
    /// Mixer path switch.
    MixerSwitchOption {
        /// Signal routed through the mixer
        Mix = 0, "MIX";
        /// Mixer bypassed (direct path)
        Bypass = 1, "BYPASS";
    }
}

wire_enum! {
    /// IF output switch after the mixer.
    IfSwitchOption {
        /// 1-2 GHz bandpass output
        Bandpass1To2Ghz = 0, "1_2GHZ_BANDPASS";
        /// 2-4 GHz bandpass output
        Bandpass2To4Ghz = 1, "2_4GHZ_BANDPASS";
        /// Unfiltered through path
        Through = 2, "THROUGH";
    }
}
