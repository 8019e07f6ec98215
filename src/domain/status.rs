// src/domain/status.rs

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Ordinal of `Status::Complete`. The progress gauge runs from 0 to this value.
pub const COMPLETE_ORDINAL: i64 = 6;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown status: {0:?}")]
pub struct UnknownStatus(pub String);

/// Every status a project row may carry. The sheet spells them exactly as `as_str` does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Unknown,
    Unannounced,
    Proposed,
    Announced,
    PreDesign,
    Design25,
    Design75,
    Design100,
    UnderConstruction,
    Complete,
    PartiallyUndone,
    Undone,
}

/// Which section of the page a project is listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    Future,
    Current,
    Completed,
}

/// Graphic drawn over the progress gauge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    BlueprintPencil,
    Pencil,
    Roller,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressTone {
    Bad,
    Good,
}

impl Status {
    pub const ALL: [Status; 12] = [
        Status::Unknown,
        Status::Unannounced,
        Status::Proposed,
        Status::Announced,
        Status::PreDesign,
        Status::Design25,
        Status::Design75,
        Status::Design100,
        Status::UnderConstruction,
        Status::Complete,
        Status::PartiallyUndone,
        Status::Undone,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Status::Unknown => "?",
            Status::Unannounced => "Unannounced",
            Status::Proposed => "Proposed",
            Status::Announced => "Announced",
            Status::PreDesign => "Pre-25% design",
            Status::Design25 => "25% design",
            Status::Design75 => "75% design",
            Status::Design100 => "100% design",
            Status::UnderConstruction => "Under construction",
            Status::Complete => "Complete",
            Status::PartiallyUndone => "Partially undone",
            Status::Undone => "Undone",
        }
    }

    /// Position on the progress gauge. Negative means the project has not started.
    pub fn ordinal(self) -> i64 {
        match self {
            Status::Unknown | Status::Unannounced => -1,
            Status::Proposed | Status::Announced | Status::Undone => 0,
            Status::PreDesign => 1,
            Status::Design25 => 2,
            Status::Design75 => 3,
            Status::Design100 => 4,
            Status::UnderConstruction | Status::PartiallyUndone => 5,
            Status::Complete => COMPLETE_ORDINAL,
        }
    }

    pub fn bucket(self) -> Bucket {
        let n = self.ordinal();
        if n < 0 {
            Bucket::Future
        } else if n < COMPLETE_ORDINAL {
            Bucket::Current
        } else {
            Bucket::Completed
        }
    }

    pub fn icon(self) -> Option<Icon> {
        match self.ordinal() {
            0..=1 => Some(Icon::BlueprintPencil),
            2..=4 => Some(Icon::Pencil),
            5 => Some(Icon::Roller),
            _ => None,
        }
    }

    /// Horizontal position of the icon along the gauge, in whole percent.
    pub fn icon_offset_percent(self) -> Option<i64> {
        self.icon()?;
        let pct = self.ordinal() as f64 / COMPLETE_ORDINAL as f64 * 100.0;
        Some(pct.round() as i64)
    }

    pub fn progress_tone(self) -> Option<ProgressTone> {
        match self {
            Status::PartiallyUndone | Status::Undone => Some(ProgressTone::Bad),
            Status::UnderConstruction | Status::Complete => Some(ProgressTone::Good),
            _ => None,
        }
    }
}

/// Look up a raw status cell. Matching is exact and case-sensitive.
pub fn classify(raw: &str) -> Result<Status, UnknownStatus> {
    raw.parse()
}

impl FromStr for Status {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Status::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Icon {
    pub fn file_name(self) -> &'static str {
        match self {
            Icon::BlueprintPencil => "blueprint_pencil.svg",
            Icon::Pencil => "pencil.svg",
            Icon::Roller => "roller.svg",
        }
    }
}

impl ProgressTone {
    pub fn class_name(self) -> &'static str {
        match self {
            ProgressTone::Bad => "bad",
            ProgressTone::Good => "good",
        }
    }
}
