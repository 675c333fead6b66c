//! Direction resolution
//!
//! Some duplexors are built with their forward and reverse paths wired
//! opposite to the usual orientation. Their catalog entries carry the
//! [`ExtraData::SWAP_FOR_AND_REV`] flag, and the direction matched during
//! selection must be inverted before it reaches the RF switch.

use rxfilter_bands::{Direction, ExtraData};

/// Direction to drive for a matched entry
///
/// When `extra_data` has the swap flag set, uplink becomes downlink and
/// anything else (including [`Direction::Unknown`]) becomes uplink.
/// Otherwise `direction` is returned unchanged.
pub fn resolve_direction(extra_data: ExtraData, direction: Direction) -> Direction {
    if !extra_data.swaps_direction() {
        return direction;
    }
    match direction {
        Direction::Uplink => Direction::Downlink,
        Direction::Downlink | Direction::Unknown => Direction::Uplink,
    }
}

/// Branch tested for a direction hint
///
/// Any hint other than uplink tests the downlink branch, the same rule
/// [`Direction::mask_bit`] applies to the direction mask.
pub fn hint_branch(hint: Direction) -> Direction {
    match hint {
        Direction::Uplink => Direction::Uplink,
        Direction::Downlink | Direction::Unknown => Direction::Downlink,
    }
}
