//! Integer enumerations used by the engine's properties.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::error::DssError;

macro_rules! engine_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident = $value:expr,)* }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[repr(i32)]
        pub enum $name {
            $($variant = $value,)*
        }

        impl TryFrom<i32> for $name {
            type Error = DssError;

            fn try_from(value: i32) -> Result<Self, DssError> {
                match value {
                    $(v if v == $value => Ok($name::$variant),)*
                    other => Err(DssError::InvalidArgument(format!(
                        "{} is not a valid {}",
                        other,
                        stringify!($name)
                    ))),
                }
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> i32 {
                value as i32
            }
        }
    };
}

engine_enum! {
    /// Solution mode, `Solution_Get_Mode`.
    SolveModes {
        SnapShot = 0,
        Daily = 1,
        Yearly = 2,
        Monte1 = 3,
        LD1 = 4,
        PeakDay = 5,
        DutyCycle = 6,
        Direct = 7,
        MonteFault = 8,
        FaultStudy = 9,
        Monte2 = 10,
        Monte3 = 11,
        LD2 = 12,
        AutoAdd = 13,
        Dynamic = 14,
        Harmonic = 15,
    }
}

engine_enum! {
    LoadModels {
        ConstPQ = 1,
        ConstZ = 2,
        Motor = 3,
        CVR = 4,
        ConstI = 5,
        ConstPFixedQ = 6,
        ConstPFixedX = 7,
        ZIPV = 8,
    }
}

engine_enum! {
    LoadStatus {
        Variable = 0,
        Fixed = 1,
        Exempt = 2,
    }
}

engine_enum! {
    /// Length units for lines and line codes.
    LineUnits {
        None = 0,
        Miles = 1,
        KFt = 2,
        Km = 3,
        Meter = 4,
        Ft = 5,
        Inch = 6,
        Cm = 7,
        Mm = 8,
        MaxNum = 9,
    }
}

engine_enum! {
    CapControlModes {
        Current = 0,
        Voltage = 1,
        Kvar = 2,
        Time = 3,
        Pf = 4,
    }
}

engine_enum! {
    /// Control queue action codes.
    ActionCodes {
        None = 0,
        Open = 1,
        Close = 2,
        Reset = 3,
        Lock = 4,
        Unlock = 5,
        TapUp = 6,
        TapDown = 7,
    }
}

engine_enum! {
    /// What a monitor records. Combined with [`MonitorOptions`] in
    /// [`MonitorMode`].
    MonitorModes {
        VI = 0,
        Power = 1,
        Taps = 2,
        States = 3,
    }
}

engine_enum! {
    /// Storage element dispatch state, `Storages_Get_State`.
    StorageStates {
        Charging = -1,
        Idling = 0,
        Discharging = 1,
    }
}

bitflags! {
    /// Modifiers OR-ed into a monitor mode.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct MonitorOptions: i32 {
        const SEQUENCE = 0x10;
        const MAGNITUDE = 0x20;
        const POS_ONLY = 0x40;
    }
}

/// A full monitor mode value: base mode plus option bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonitorMode {
    pub base: MonitorModes,
    pub options: MonitorOptions,
}

impl MonitorMode {
    pub fn new(base: MonitorModes) -> Self {
        Self {
            base,
            options: MonitorOptions::empty(),
        }
    }

    pub fn with(mut self, options: MonitorOptions) -> Self {
        self.options |= options;
        self
    }
}

impl TryFrom<i32> for MonitorMode {
    type Error = DssError;

    fn try_from(value: i32) -> Result<Self, DssError> {
        Ok(Self {
            base: MonitorModes::try_from(value & 0x0F)?,
            options: MonitorOptions::from_bits_truncate(value & !0x0F),
        })
    }
}

impl From<MonitorMode> for i32 {
    fn from(mode: MonitorMode) -> i32 {
        i32::from(mode.base) | mode.options.bits()
    }
}

bitflags! {
    /// Options for the `ToJSON` exports.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct JsonFlags: i32 {
        /// All properties, ordered by index.
        const FULL = 0x01;
        /// With `FULL`, skip redundant and unused properties.
        const SKIP_REDUNDANT = 0x02;
        const ENUM_AS_INT = 0x04;
        const FULL_NAMES = 0x08;
        const PRETTY = 0x10;
        const EXCLUDE_DISABLED = 0x20;
        const SKIP_DSS_CLASS = 0x40;
        const LOWERCASE_KEYS = 0x80;
    }
}

bitflags! {
    /// Options for `Circuit.save`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct DssSaveFlags: u32 {
        const CALC_VOLTAGE_BASES = 0x0001;
        const SET_VOLTAGE_BASES = 0x0002;
        const INCLUDE_OPTIONS = 0x0004;
        const INCLUDE_DISABLED = 0x0008;
        const EXCLUDE_DEFAULT = 0x0010;
        /// One file instead of a directory tree.
        const SINGLE_FILE = 0x0020;
        const KEEP_ORDER = 0x0040;
        const EXCLUDE_METER_ZONES = 0x0080;
        const IS_OPEN = 0x0100;
        /// Return the script instead of writing it.
        const TO_STRING = 0x0200;
    }
}
