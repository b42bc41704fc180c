//! Closed enumerations of calendar and clock formats, plus UUID versions.
//!
//! Keeping these as enums (rather than free-form strings) moves the
//! "invalid format tag" class of build-time errors into the type system.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

/// Calendar formats accepted by the `date` rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DateFormat {
    /// ISO-8601: `2024-03-01`, `2024-03-01T10:30:00`, `2024-03-01T10:30:00.250`.
    #[default]
    Iso8601,
    /// `DD/MM/YYYY`
    DdMmYyyy,
    /// `MM/DD/YYYY`
    MmDdYyyy,
    /// `DD-MM-YYYY`
    DdMmYyyyDashed,
    /// `MM-DD-YYYY`
    MmDdYyyyDashed,
    /// `YYYY/MM/DD`
    YyyyMmDd,
    /// `YYYY/DD/MM`
    YyyyDdMm,
    /// `YYYY-MM-DD`
    YyyyMmDdDashed,
    /// `YYYY-DD-MM`
    YyyyDdMmDashed,
}

impl DateFormat {
    /// The format tag as it appears in rendered messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Iso8601 => "ISO8601",
            Self::DdMmYyyy => "DD/MM/YYYY",
            Self::MmDdYyyy => "MM/DD/YYYY",
            Self::DdMmYyyyDashed => "DD-MM-YYYY",
            Self::MmDdYyyyDashed => "MM-DD-YYYY",
            Self::YyyyMmDd => "YYYY/MM/DD",
            Self::YyyyDdMm => "YYYY/DD/MM",
            Self::YyyyMmDdDashed => "YYYY-MM-DD",
            Self::YyyyDdMmDashed => "YYYY-DD-MM",
        }
    }

    /// The chrono pattern for the date-only formats; `None` for ISO-8601,
    /// which accepts several shapes and is parsed specially.
    #[must_use]
    pub(crate) const fn chrono_pattern(self) -> Option<&'static str> {
        match self {
            Self::Iso8601 => None,
            Self::DdMmYyyy => Some("%d/%m/%Y"),
            Self::MmDdYyyy => Some("%m/%d/%Y"),
            Self::DdMmYyyyDashed => Some("%d-%m-%Y"),
            Self::MmDdYyyyDashed => Some("%m-%d-%Y"),
            Self::YyyyMmDd => Some("%Y/%m/%d"),
            Self::YyyyDdMm => Some("%Y/%d/%m"),
            Self::YyyyMmDdDashed => Some("%Y-%m-%d"),
            Self::YyyyDdMmDashed => Some("%Y-%d-%m"),
        }
    }
}

impl Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Clock formats accepted by the `time` rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TimeFormat {
    /// `HH:MM`
    #[default]
    HhMm,
    /// `HH:MM:SS`
    HhMmSs,
    /// `HH:MM:SS.mmm`
    HhMmSsMs,
}

impl TimeFormat {
    /// The format tag as it appears in rendered messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::HhMm => "HH:MM",
            Self::HhMmSs => "HH:MM:SS",
            Self::HhMmSsMs => "HH:MM:SS.mmm",
        }
    }

    #[must_use]
    pub(crate) const fn chrono_pattern(self) -> &'static str {
        match self {
            Self::HhMm => "%H:%M",
            Self::HhMmSs => "%H:%M:%S",
            Self::HhMmSsMs => "%H:%M:%S%.3f",
        }
    }
}

impl Display for TimeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// UUID versions the `uuid` rule can pin; omitted version accepts any
/// well-formed UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UuidVersion {
    V1,
    V2,
    V3,
    V4,
    V5,
    V6,
    V7,
}

impl UuidVersion {
    /// The numeric version as reported by the uuid crate.
    #[must_use]
    pub const fn number(self) -> usize {
        match self {
            Self::V1 => 1,
            Self::V2 => 2,
            Self::V3 => 3,
            Self::V4 => 4,
            Self::V5 => 5,
            Self::V6 => 6,
            Self::V7 => 7,
        }
    }
}
