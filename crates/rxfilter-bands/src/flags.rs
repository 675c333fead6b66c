//! Duplexor direction and per-entry flag types

use std::fmt;
use std::str::FromStr;

use crate::error::CatalogError;

/// Signal direction through a duplexor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// No direction context (single-arm filter queries)
    #[default]
    Unknown,
    /// Mobile-to-base (reverse) branch
    Uplink,
    /// Base-to-mobile (forward) branch
    Downlink,
}

impl Direction {
    /// Order in which branches are inspected during a frequency hunt
    pub const SCAN_ORDER: [Direction; 2] = [Direction::Uplink, Direction::Downlink];

    /// Firmware numeric code (-1, 0, 1)
    pub fn code(&self) -> i8 {
        match self {
            Direction::Unknown => -1,
            Direction::Uplink => 0,
            Direction::Downlink => 1,
        }
    }

    /// Mask bit that must be present for an entry to be used in this direction
    ///
    /// `Unknown` tests against the downlink bit, matching how the firmware
    /// treats any hint that is not uplink.
    pub fn mask_bit(&self) -> DirectionMask {
        match self {
            Direction::Uplink => DirectionMask::UPLINK,
            Direction::Downlink | Direction::Unknown => DirectionMask::DOWNLINK,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Unknown => "unknown",
            Direction::Uplink => "uplink",
            Direction::Downlink => "downlink",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ul" | "up" | "uplink" | "rev" | "reverse" => Ok(Direction::Uplink),
            "dl" | "down" | "downlink" | "fwd" | "forward" => Ok(Direction::Downlink),
            "unknown" | "any" => Ok(Direction::Unknown),
            _ => Err(CatalogError::UnknownDirection(s.to_string())),
        }
    }
}

/// Which arms of a filter entry are wired and usable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DirectionMask(u16);

impl DirectionMask {
    pub const UPLINK: DirectionMask = DirectionMask(1);
    pub const DOWNLINK: DirectionMask = DirectionMask(2);
    pub const BOTH: DirectionMask = DirectionMask(1 | 2);

    pub const fn from_bits(bits: u16) -> Self {
        Self(bits)
    }

    pub const fn bits(&self) -> u16 {
        self.0
    }

    /// Whether any bit of `other` is also set here
    pub const fn intersects(&self, other: DirectionMask) -> bool {
        self.0 & other.0 != 0
    }

    /// Whether the arm for `direction` is wired
    pub fn allows(&self, direction: Direction) -> bool {
        self.intersects(direction.mask_bit())
    }

    pub fn name(&self) -> &'static str {
        match self.0 {
            1 => "UL",
            2 => "DL",
            3 => "UL/DL",
            _ => "?",
        }
    }
}

/// Hardware-specific flags attached to a catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExtraData(u8);

impl ExtraData {
    pub const NONE: ExtraData = ExtraData(0);
    /// F/R control line must be driven high for the forward path
    pub const FORREV: ExtraData = ExtraData(1);
    /// Forward and reverse paths are wired opposite to convention
    pub const SWAP_FOR_AND_REV: ExtraData = ExtraData(2);

    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    pub const fn bits(&self) -> u8 {
        self.0
    }

    /// Whether every bit of `flag` is set
    pub const fn contains(&self, flag: ExtraData) -> bool {
        self.0 & flag.0 == flag.0
    }

    pub const fn swaps_direction(&self) -> bool {
        self.contains(ExtraData::SWAP_FOR_AND_REV)
    }

    pub const fn inverts_control_line(&self) -> bool {
        self.contains(ExtraData::FORREV)
    }
}

impl fmt::Display for ExtraData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names = Vec::new();
        if self.inverts_control_line() {
            names.push("FORREV");
        }
        if self.swaps_direction() {
            names.push("SWAP_FOR_AND_REV");
        }
        if names.is_empty() {
            write!(f, "-")
        } else {
            write!(f, "{}", names.join("|"))
        }
    }
}
