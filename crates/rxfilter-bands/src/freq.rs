//! Frequency unit conversions
//!
//! Requests arrive in kHz while the catalog stores passbands in deci-MHz
//! (dMHz, 100 kHz per unit). Every conversion rounds half-up by adding a
//! 50 kHz bias before the truncating division, and the two edges of a
//! channel are rounded independently of its centre.

/// Number of kHz in one dMHz
pub const KHZ_PER_DMHZ: u32 = 100;

/// Rounding bias applied before dividing by [`KHZ_PER_DMHZ`]
const ROUNDING_BIAS_KHZ: u32 = KHZ_PER_DMHZ / 2;

/// Requests at or above this frequency are outside the RF hardware's range
pub const MAX_RF_FREQ_KHZ: u32 = 6_000_000;

/// Convert kHz to dMHz, rounding half-up
pub fn to_deci_mhz(freq_khz: u32) -> u32 {
    freq_khz.saturating_add(ROUNDING_BIAS_KHZ) / KHZ_PER_DMHZ
}

/// Half of a channel bandwidth, rounded up
///
/// Equal to `(bandwidth_khz + 1) / 2` without overflowing at `u32::MAX`.
pub fn half_width_khz(bandwidth_khz: u32) -> u32 {
    bandwidth_khz / 2 + bandwidth_khz % 2
}

/// Low and high edges of a channel in dMHz
///
/// Each edge is computed in kHz first and then rounded on its own. A low
/// edge below 0 kHz clamps to 0.
pub fn channel_edges(freq_khz: u32, bandwidth_khz: u32) -> (u32, u32) {
    let half = half_width_khz(bandwidth_khz);
    let low = to_deci_mhz(freq_khz.saturating_sub(half));
    let high = to_deci_mhz(freq_khz.saturating_add(half));
    (low, high)
}

/// Whether a frequency lies below the RF hardware ceiling
pub fn is_within_rf_range(freq_khz: u32) -> bool {
    freq_khz < MAX_RF_FREQ_KHZ
}

/// A requested channel expressed in catalog units
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChannelWindow {
    /// Channel centre in dMHz
    pub centre_dmhz: u32,
    /// Lowest frequency of the channel in dMHz
    pub low_dmhz: u32,
    /// Highest frequency of the channel in dMHz
    pub high_dmhz: u32,
}

impl ChannelWindow {
    /// Derive the window for a centre frequency and bandwidth in kHz
    pub fn new(freq_khz: u32, bandwidth_khz: u32) -> Self {
        let (low_dmhz, high_dmhz) = channel_edges(freq_khz, bandwidth_khz);
        Self {
            centre_dmhz: to_deci_mhz(freq_khz),
            low_dmhz,
            high_dmhz,
        }
    }

    /// Derive the window, or `None` when the frequency is at or above
    /// [`MAX_RF_FREQ_KHZ`]
    pub fn checked(freq_khz: u32, bandwidth_khz: u32) -> Option<Self> {
        is_within_rf_range(freq_khz).then(|| Self::new(freq_khz, bandwidth_khz))
    }

    /// Absolute distance in dMHz between the window centre and `centre_dmhz`
    pub fn offset_from(&self, centre_dmhz: u32) -> u32 {
        self.centre_dmhz.abs_diff(centre_dmhz)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_to_deci_mhz_rounds_half_up() {
        assert_eq!(to_deci_mhz(897_500), 8975);
        assert_eq!(to_deci_mhz(897_549), 8975);
        assert_eq!(to_deci_mhz(897_550), 8976);
        assert_eq!(to_deci_mhz(0), 0);
        assert_eq!(to_deci_mhz(49), 0);
        assert_eq!(to_deci_mhz(50), 1);
    }

    #[test]
    fn test_half_width_rounds_up() {
        assert_eq!(half_width_khz(200), 100);
        assert_eq!(half_width_khz(201), 101);
        assert_eq!(half_width_khz(1), 1);
        assert_eq!(half_width_khz(0), 0);
        assert_eq!(half_width_khz(u32::MAX), u32::MAX / 2 + 1);
    }

    #[test]
    fn test_channel_edges() {
        assert_eq!(channel_edges(897_500, 200), (8974, 8976));
        assert_eq!(channel_edges(1_842_500, 5_000), (18400, 18450));
    }

    #[test]
    fn test_edges_rounded_independently() {
        // 1.1 MHz channel at 869.049 MHz: rounding the centre and the
        // half-width first would give 8690 -/+ 6 = (8684, 8696).
        assert_eq!(channel_edges(869_049, 1_100), (8685, 8696));
        assert_eq!(to_deci_mhz(869_049), 8690);
        assert_eq!(to_deci_mhz(550), 6);
    }

    #[test]
    fn test_low_edge_clamps_at_zero() {
        assert_eq!(channel_edges(100, 1_000), (0, 6));
    }

    #[test]
    fn test_window_ceiling() {
        assert!(ChannelWindow::checked(5_999_999, 200).is_some());
        assert!(ChannelWindow::checked(6_000_000, 200).is_none());
        assert!(ChannelWindow::checked(u32::MAX, 0).is_none());
    }

    #[test]
    fn test_window_offset() {
        let window = ChannelWindow::new(897_500, 200);
        assert_eq!(window.offset_from(8815), 160);
        assert_eq!(window.offset_from(9000), 25);
    }

    proptest! {
        #[test]
        fn to_deci_mhz_is_monotonic(a in 0u32..MAX_RF_FREQ_KHZ, b in 0u32..MAX_RF_FREQ_KHZ) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(to_deci_mhz(lo) <= to_deci_mhz(hi));
        }

        #[test]
        fn edges_bracket_centre(freq in 0u32..MAX_RF_FREQ_KHZ, bw in 0u32..200_000u32) {
            let window = ChannelWindow::new(freq, bw);
            prop_assert!(window.low_dmhz <= window.centre_dmhz);
            prop_assert!(window.centre_dmhz <= window.high_dmhz);
        }
    }
}
