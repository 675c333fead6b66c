//! Integration tests for filter site selection
//!
//! These tests verify end-to-end behavior over the production catalog:
//! - Frequency-only selection, tie-breaking and the wideband fallback
//! - Band-constrained selection and its fallback to the frequency hunt
//! - Forward/reverse path swapping
//! - Board profiles driving the selector
//! - Consistency of the catalog table itself

use rxfilter_bands::{
    band_to_filter_type, BandFilter, ChannelWindow, Direction, ExtraData, FilterBand,
    FilterCatalog, FreqRange, WIDEBAND_FILTER_ID,
};
use rxfilter_select::{
    high_limit, low_limit, resolve_direction, BoardProfile, BoardVariant, FilterSelector,
    Selection, UNPOPULATED_SITE,
};

// ============================================================================
// Helper Functions
// ============================================================================

mod helpers {
    use super::*;

    pub fn selector() -> FilterSelector {
        FilterSelector::new(FilterCatalog::standard())
    }

    /// Frequency-only selection over every site in `fitted`
    pub fn select(fitted: &[u8], freq_khz: u32, bw_khz: u32) -> Option<Selection> {
        selector().select_by_frequency(fitted, fitted.len(), freq_khz, bw_khz)
    }

    /// Band-constrained selection over every site in `fitted`
    pub fn select_band(
        fitted: &[u8],
        freq_khz: u32,
        bw_khz: u32,
        band: BandFilter,
        hint: Direction,
    ) -> Option<Selection> {
        selector().select_by_band_and_frequency(fitted, fitted.len(), freq_khz, bw_khz, band, hint)
    }

    /// Smallest centre offset any fitted non-wideband branch achieves,
    /// computed independently of the selector
    pub fn best_offset(fitted: &[u8], freq_khz: u32, bw_khz: u32) -> Option<u32> {
        let catalog = FilterCatalog::standard();
        let window = ChannelWindow::new(freq_khz, bw_khz);
        fitted
            .iter()
            .filter(|&&id| id != WIDEBAND_FILTER_ID)
            .filter_map(|&id| catalog.entry(usize::from(id)))
            .flat_map(|entry| [entry.uplink, entry.downlink])
            .filter(|range| {
                !range.is_unused() && range.contains_window(window.low_dmhz, window.high_dmhz)
            })
            .map(|range| window.offset_from(range.centre_dmhz()))
            .min()
    }

    /// Branch a band-constrained hunt tests for `hint`
    pub fn hint_range(entry: &FilterBand, hint: Direction) -> FreqRange {
        match hint {
            Direction::Uplink => entry.uplink,
            Direction::Downlink | Direction::Unknown => entry.downlink,
        }
    }

    /// Smallest centre offset over fitted entries of `band` whose mask
    /// allows `hint`, tested on the `hint` branch only
    pub fn best_band_offset(
        fitted: &[u8],
        freq_khz: u32,
        bw_khz: u32,
        band: BandFilter,
        hint: Direction,
    ) -> Option<u32> {
        let catalog = FilterCatalog::standard();
        let window = ChannelWindow::new(freq_khz, bw_khz);
        fitted
            .iter()
            .filter(|&&id| id != WIDEBAND_FILTER_ID)
            .filter_map(|&id| catalog.entry(usize::from(id)))
            .filter(|entry| entry.band == band && entry.direction_mask.allows(hint))
            .map(|entry| hint_range(entry, hint))
            .filter(|range| {
                !range.is_unused() && range.contains_window(window.low_dmhz, window.high_dmhz)
            })
            .map(|range| window.offset_from(range.centre_dmhz()))
            .min()
    }
}

// ============================================================================
// Frequency Selection Tests
// ============================================================================

mod frequency_selection_tests {
    use super::helpers::*;
    use super::*;

    #[test]
    fn test_gsm850_duplexor_downlink() {
        let sel = select(&[0x19], 881_500, 200).unwrap();
        assert_eq!(sel.site, 0);
        assert_eq!(sel.direction, Direction::Downlink);
        assert_eq!(sel.extra_data, ExtraData::NONE);
    }

    #[test]
    fn test_gsm850_duplexor_uplink() {
        let sel = select(&[0x19], 836_500, 200).unwrap();
        assert_eq!(sel.direction, Direction::Uplink);
    }

    #[test]
    fn test_nesie2_standard_board() {
        // Flight board with single-arm filters in NESIE2 block order
        let fitted = [0x1E, 0x1F, 0x20, 0x21, 0x22, 0x23, 0x24, 0x25, 0x26, 0x27, 0x28, 0x29];

        let cases = [
            (881_500, 0, Direction::Downlink), // GSM850 DL
            (836_500, 1, Direction::Uplink),   // GSM850 UL
            (942_500, 2, Direction::Downlink), // EGSM900 DL
            (1_842_500, 4, Direction::Downlink), // DCS1800 DL
            (1_960_000, 6, Direction::Downlink), // PCS1900 DL
            (2_140_000, 8, Direction::Downlink), // UMTS1 DL
            (2_655_000, 10, Direction::Downlink), // LTE7 DL
        ];
        for (freq, site, direction) in cases {
            let sel = select(&fitted, freq, 200).unwrap();
            assert_eq!((sel.site, sel.direction), (site, direction), "{} kHz", freq);
        }
    }

    #[test]
    fn test_overlapping_bands_pick_closest_centre() {
        // Extended PCS UL (1850-1920) and PCS UL (1850-1910) both pass 1880 MHz
        let sel = select(&[0x3A, 0x17], 1_880_000, 200).unwrap();
        // PCS UL centre 1880.0 beats extended PCS UL centre 1885.0
        assert_eq!(sel.site, 1);
        assert_eq!(sel.filter_id, 0x17);
    }

    #[test]
    fn test_equal_centres_lowest_site_wins() {
        let sel = select(&[0xFF, 0x2F, 0x15], 2_535_000, 5_000).unwrap();
        assert_eq!(sel.site, 1);
        assert_eq!(sel.filter_id, 0x2F);
    }

    #[test]
    fn test_channel_straddling_band_edge_is_rejected() {
        // LTE7 UL ends at 2570.0 MHz
        assert!(select(&[0x15], 2_567_500, 5_000).is_some());
        assert!(select(&[0x15], 2_568_000, 5_000).is_none());
    }

    #[test]
    fn test_wideband_fallback_only_when_nothing_passes() {
        let fitted = [0x01, 0x19, 0x1A];
        assert_eq!(select(&fitted, 881_500, 200).unwrap().filter_id, 0x19);

        let sel = select(&fitted, 433_000, 200).unwrap();
        assert_eq!(sel.site, 0);
        assert_eq!(sel.filter_id, WIDEBAND_FILTER_ID);
        assert_eq!(sel.direction, Direction::Uplink);
        assert_eq!(sel.extra_data, ExtraData::NONE);
    }

    #[test]
    fn test_wideband_fallback_below_its_passband() {
        // The fallback does not require the wideband filter to pass the channel
        let sel = select(&[0x01], 5_000, 200).unwrap();
        assert_eq!(sel.filter_id, WIDEBAND_FILTER_ID);
    }

    #[test]
    fn test_nothing_fitted() {
        assert_eq!(select(&[], 881_500, 200), None);
        assert_eq!(select(&[UNPOPULATED_SITE; 16], 881_500, 200), None);
        assert_eq!(Selection::site_code(None), -1);
    }

    #[test]
    fn test_not_fitted_entry_never_matches() {
        assert_eq!(select(&[0x00, 0x00], 881_500, 200), None);
    }

    #[test]
    fn test_rf_ceiling() {
        assert_eq!(select(&[0x01, 0x3F], 6_000_000, 200), None);
        assert_eq!(select(&[0x01, 0x3F], u32::MAX, 0), None);
    }

    #[test]
    fn test_zero_bandwidth() {
        let sel = select(&[0x19], 869_000, 0).unwrap();
        assert_eq!(sel.direction, Direction::Downlink);
    }

    #[test]
    fn test_site_count_limits_scan() {
        let s = selector();
        let fitted = [0x1B, 0x19];
        assert_eq!(s.select_by_frequency(&fitted, 1, 881_500, 200), None);
        assert_eq!(s.select_by_frequency(&fitted, 0, 881_500, 200), None);
        assert_eq!(s.select_by_frequency(&fitted, 2, 881_500, 200).unwrap().site, 1);
    }
}

// ============================================================================
// Band-Constrained Selection Tests
// ============================================================================

mod band_selection_tests {
    use super::helpers::*;
    use super::*;

    #[test]
    fn test_band_match_beats_closer_centre() {
        // LTE7 UL is closer but the request is constrained to LTE41
        let sel = select_band(&[0x15, 0x3D], 2_535_000, 5_000, BandFilter::Lte41, Direction::Uplink)
            .unwrap();
        assert_eq!(sel.site, 1);
        assert_eq!(sel.filter_id, 0x3D);
        assert_eq!(sel.direction, Direction::Uplink);
    }

    #[test]
    fn test_missing_band_falls_back_to_lte7() {
        let fitted = [0x19, 0x15];
        let by_band =
            select_band(&fitted, 2_655_000, 5_000, BandFilter::Lte41, Direction::Uplink).unwrap();
        let by_freq = select(&fitted, 2_655_000, 5_000).unwrap();
        assert_eq!(by_band, by_freq);
        assert_eq!(by_band.site, 1);
        assert_eq!(by_band.direction, Direction::Downlink);
    }

    #[test]
    fn test_hint_selects_branch() {
        let fitted = [0x1B];
        // LTE20 UL sits above its DL
        let ul =
            select_band(&fitted, 847_000, 5_000, BandFilter::Lte20, Direction::Uplink).unwrap();
        assert_eq!(ul.direction, Direction::Uplink);
        let dl =
            select_band(&fitted, 806_000, 5_000, BandFilter::Lte20, Direction::Downlink).unwrap();
        assert_eq!(dl.direction, Direction::Downlink);
    }

    #[test]
    fn test_mapped_band_number() {
        let band = band_to_filter_type(5);
        let sel = select_band(&[0x1A, 0x19], 881_500, 200, band, Direction::Downlink).unwrap();
        assert_eq!(sel.site, 1);
    }

    #[test]
    fn test_unmapped_band_number_degrades_to_wideband_search() {
        let band = band_to_filter_type(66);
        assert_eq!(band, BandFilter::Wide);
        // wideband can never win the band hunt, so the frequency hunt decides
        let sel = select_band(&[0x01, 0x16], 1_842_500, 200, band, Direction::Downlink).unwrap();
        assert_eq!(sel.filter_id, 0x16);
    }

    #[test]
    fn test_equal_band_candidates_lowest_site_wins() {
        // 0x15 and 0x2F are both LTE7 duplexors with the same UL passband
        let sel =
            select_band(&[0x15, 0x2F], 2_535_000, 5_000, BandFilter::Lte7, Direction::Uplink)
                .unwrap();
        assert_eq!((sel.site, sel.filter_id), (0, 0x15));

        let sel =
            select_band(&[0x2F, 0x15], 2_535_000, 5_000, BandFilter::Lte7, Direction::Uplink)
                .unwrap();
        assert_eq!((sel.site, sel.filter_id), (0, 0x2F));
    }

    #[test]
    fn test_equal_band_candidates_after_empty_sites() {
        let fitted = [UNPOPULATED_SITE, 0x19, 0x31];
        let sel = select_band(&fitted, 881_500, 200, BandFilter::Gsm850, Direction::Downlink)
            .unwrap();
        assert_eq!((sel.site, sel.filter_id), (1, 0x19));
    }

    #[test]
    fn test_unknown_hint_is_returned_unchanged() {
        let sel =
            select_band(&[0x19], 881_500, 200, BandFilter::Gsm850, Direction::Unknown).unwrap();
        assert_eq!(sel.site, 0);
        assert_eq!(sel.direction, Direction::Unknown);
        assert_eq!(Selection::site_code(Some(&sel)), 0);
    }

    #[test]
    fn test_no_match_anywhere() {
        assert_eq!(
            select_band(&[0x19], 2_655_000, 5_000, BandFilter::Lte7, Direction::Downlink),
            None
        );
    }

    #[test]
    fn test_rf_ceiling() {
        assert_eq!(
            select_band(&[0x01], 6_000_000, 0, BandFilter::Wide, Direction::Uplink),
            None
        );
    }
}

// ============================================================================
// Direction Swap Tests
// ============================================================================

mod swap_tests {
    use super::helpers::*;
    use super::*;

    #[test]
    fn test_swapped_lte13() {
        // 0x36: LTE13 matched on its DL arm is driven as UL
        let sel = select(&[0x36], 751_000, 5_000).unwrap();
        assert_eq!(sel.direction, Direction::Uplink);
        assert_eq!(sel.extra_data, ExtraData::SWAP_FOR_AND_REV);

        // the unswapped build of the same duplexor
        let sel = select(&[0x2D], 751_000, 5_000).unwrap();
        assert_eq!(sel.direction, Direction::Downlink);
    }

    #[test]
    fn test_swapped_lte20() {
        let sel = select(&[0x40], 806_000, 5_000).unwrap();
        assert_eq!(sel.direction, Direction::Uplink);
        let sel = select(&[0x40], 847_000, 5_000).unwrap();
        assert_eq!(sel.direction, Direction::Downlink);
    }

    #[test]
    fn test_band_path_swaps_once() {
        let sel =
            select_band(&[0x40], 806_000, 5_000, BandFilter::Lte20, Direction::Downlink).unwrap();
        assert_eq!(sel.direction, Direction::Uplink);
    }

    #[test]
    fn test_band_path_unknown_hint_drives_uplink() {
        // Unknown tests the DL arm, and the swap turns it into UL
        let sel =
            select_band(&[0x40], 806_000, 5_000, BandFilter::Lte20, Direction::Unknown).unwrap();
        assert_eq!(sel.filter_id, 0x40);
        assert_eq!(sel.direction, Direction::Uplink);
    }

    #[test]
    fn test_fallback_path_swaps_once() {
        let sel =
            select_band(&[0x40], 806_000, 5_000, BandFilter::Lte41, Direction::Uplink).unwrap();
        assert_eq!(sel, select(&[0x40], 806_000, 5_000).unwrap());
        assert_eq!(sel.direction, Direction::Uplink);
    }

    #[test]
    fn test_forrev_does_not_swap() {
        let sel = select(&[0x30], 806_000, 5_000).unwrap();
        assert_eq!(sel.direction, Direction::Downlink);
        assert_eq!(sel.extra_data, ExtraData::FORREV);
    }

    #[test]
    fn test_resolved_direction_limits() {
        // Limits are reported for the arm that physically passes the channel
        let catalog = FilterCatalog::standard();
        let sel = select(&[0x40], 806_000, 5_000).unwrap();
        let arm = resolve_direction(sel.extra_data, sel.direction);
        let id = usize::from(sel.filter_id);
        assert_eq!(low_limit(&catalog, id, arm), 7910);
        assert_eq!(high_limit(&catalog, id, arm), 8210);
    }
}

// ============================================================================
// Board Profile Tests
// ============================================================================

mod board_profile_tests {
    use super::helpers::*;
    use super::*;

    #[test]
    fn test_tactical_profile() {
        let profile = BoardProfile::from_json(
            r#"{
                "name": "tactical-03",
                "variant": "tactical",
                "fitted_filter_ids": [47, 48, 49, 50, 51, 52, 53, 55, 1]
            }"#,
        )
        .unwrap();
        assert_eq!(profile.site_count(), 12);

        let s = selector();
        let sel = profile.select_by_frequency(&s, 2_350_000, 10_000).unwrap();
        assert_eq!(sel.filter_id, 0x37);
        assert_eq!(sel.site, 7);

        let sel = profile.select_by_frequency(&s, 3_500_000, 10_000).unwrap();
        assert_eq!(sel.filter_id, WIDEBAND_FILTER_ID);
        assert_eq!(sel.site, 8);
    }

    #[test]
    fn test_forrev_board_entry() {
        let profile =
            BoardProfile::new("t", BoardVariant::Tactical, vec![0x2F, 0x30].into()).unwrap();
        let sel = profile.select_by_frequency(&selector(), 806_000, 5_000).unwrap();
        assert_eq!(sel.site, 1);
        assert!(sel.extra_data.inverts_control_line());
    }

    #[test]
    fn test_reconfigure_board() {
        let s = selector();
        let mut profile =
            BoardProfile::new("m", BoardVariant::MiniNesie784, vec![0x1C].into()).unwrap();
        // LTE28 lower duplexor covers 758-788 DL
        assert!(profile.select_by_frequency(&s, 760_500, 5_000).is_some());
        assert!(profile.select_by_frequency(&s, 800_500, 5_000).is_none());

        profile.replace_fitted(vec![0x1C, 0x1D].into()).unwrap();
        let sel = profile.select_by_frequency(&s, 800_500, 5_000).unwrap();
        assert_eq!(sel.site, 1);
    }
}

// ============================================================================
// Catalog Consistency Tests
// ============================================================================

mod catalog_consistency_tests {
    use super::*;

    const CATALOG_SOURCE: &str = include_str!("../../rxfilter-bands/src/catalog.rs");

    #[test]
    fn test_hardware_id_annotations_are_sequential() {
        let ids: Vec<u8> = CATALOG_SOURCE
            .lines()
            .filter(|line| line.trim_start().starts_with("FilterBand::new(("))
            .map(|line| {
                let at = line.find("// 0x").expect("row without hardware id");
                u8::from_str_radix(&line[at + 5..at + 7], 16).expect("bad hardware id")
            })
            .collect();

        let catalog = FilterCatalog::standard();
        assert_eq!(ids.len(), catalog.len());
        for (index, id) in ids.iter().enumerate() {
            assert_eq!(usize::from(*id), index);
        }
    }

    #[test]
    fn test_masks_match_populated_ranges() {
        for (id, entry) in FilterCatalog::standard().iter() {
            if entry.band == BandFilter::Empty {
                continue;
            }
            assert!(
                matches!(entry.direction_mask.bits(), 1..=3),
                "{:#04x} has mask {}",
                id,
                entry.direction_mask.bits()
            );
            assert_eq!(
                entry.direction_mask.allows(Direction::Uplink),
                !entry.uplink.is_unused(),
                "{:#04x} uplink",
                id
            );
            assert_eq!(
                entry.direction_mask.allows(Direction::Downlink),
                !entry.downlink.is_unused(),
                "{:#04x} downlink",
                id
            );
        }
    }

    #[test]
    fn test_ranges_are_ordered_and_bounded() {
        for (id, entry) in FilterCatalog::standard().iter() {
            for range in [entry.uplink, entry.downlink] {
                if range.is_unused() {
                    assert_eq!((range.low_dmhz, range.high_dmhz), (0, 0), "{:#04x}", id);
                    continue;
                }
                assert!(range.low_dmhz < range.high_dmhz, "{:#04x}", id);
                assert!(range.high_mhz() <= 6300.0, "{:#04x}", id);
            }
        }
    }

    #[test]
    fn test_only_placeholder_is_empty() {
        for (id, entry) in FilterCatalog::standard().iter() {
            let empty = entry.uplink.is_unused() && entry.downlink.is_unused();
            assert_eq!(empty, id == 0, "{:#04x}", id);
        }
    }

    #[test]
    fn test_filter_groups_are_complete() {
        let catalog = FilterCatalog::standard();
        for (id, entry) in catalog.iter() {
            assert!(
                entry.filter_no >= 1 && entry.filter_no <= entry.filters_per_band,
                "{:#04x}",
                id
            );
            if !entry.is_partial() {
                continue;
            }
            let group = catalog.filter_group(id);
            for position in 1..=entry.filters_per_band {
                assert!(
                    group.iter().any(|&g| catalog.entries()[g].filter_no == position),
                    "{:#04x} group lacks filter {}",
                    id,
                    position
                );
            }
        }
    }

    #[test]
    fn test_lte_band_numbers_map_back() {
        for (id, entry) in FilterCatalog::standard().iter() {
            if entry.lte_band > 0 {
                let number = u32::try_from(entry.lte_band).unwrap();
                assert_eq!(band_to_filter_type(number), entry.band, "{:#04x}", id);
            }
        }
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

mod proptest_tests {
    use super::helpers::*;
    use super::*;
    use proptest::prelude::*;

    // Strategy for frequencies in the cellular bands the catalog covers (kHz)
    fn cellular_frequency() -> impl Strategy<Value = u32> {
        prop_oneof![
            // 450
            450_000u32..470_000u32,
            // 600-960
            600_000u32..960_000u32,
            // 1700-2200
            1_700_000u32..2_200_000u32,
            // 2300-2700
            2_300_000u32..2_700_000u32,
            // NR77
            3_300_000u32..4_200_000u32,
        ]
    }

    fn bandwidth() -> impl Strategy<Value = u32> {
        prop_oneof![
            Just(200u32),
            Just(1_400u32),
            Just(5_000u32),
            Just(10_000u32),
            Just(20_000u32),
            0u32..25_000u32,
        ]
    }

    // Up to 16 sites, including IDs past the end of the catalog
    fn fitted_ids() -> impl Strategy<Value = Vec<u8>> {
        prop::collection::vec(0u8..0x50u8, 0..16)
    }

    fn band() -> impl Strategy<Value = BandFilter> {
        prop::sample::select(BandFilter::ALL.to_vec())
    }

    fn direction() -> impl Strategy<Value = Direction> {
        prop_oneof![
            Just(Direction::Uplink),
            Just(Direction::Downlink),
            Just(Direction::Unknown),
        ]
    }

    proptest! {
        #[test]
        fn selection_passes_channel(
            freq in cellular_frequency(),
            bw in bandwidth(),
            fitted in fitted_ids()
        ) {
            let catalog = FilterCatalog::standard();
            if let Some(sel) = select(&fitted, freq, bw) {
                prop_assert!(sel.site < fitted.len());
                prop_assert_eq!(fitted[sel.site], sel.filter_id);
                if sel.filter_id != WIDEBAND_FILTER_ID {
                    let entry = catalog.get(usize::from(sel.filter_id)).unwrap();
                    let arm = resolve_direction(sel.extra_data, sel.direction);
                    prop_assert!(entry.covers_channel(freq, bw, arm));
                }
            }
        }

        #[test]
        fn selection_is_closest(
            freq in cellular_frequency(),
            bw in bandwidth(),
            fitted in fitted_ids()
        ) {
            let catalog = FilterCatalog::standard();
            let sel = select(&fitted, freq, bw);
            match best_offset(&fitted, freq, bw) {
                Some(best) => {
                    let sel = sel.unwrap();
                    let entry = catalog.get(usize::from(sel.filter_id)).unwrap();
                    let arm = resolve_direction(sel.extra_data, sel.direction);
                    let window = ChannelWindow::new(freq, bw);
                    prop_assert_eq!(window.offset_from(entry.branch(arm).centre_dmhz()), best);
                }
                None => {
                    let wideband = fitted.contains(&WIDEBAND_FILTER_ID);
                    prop_assert_eq!(sel.is_some(), wideband);
                }
            }
        }

        #[test]
        fn wideband_always_answers(
            freq in 0u32..6_000_000u32,
            bw in bandwidth(),
            mut fitted in fitted_ids()
        ) {
            fitted.push(WIDEBAND_FILTER_ID);
            prop_assert!(select(&fitted, freq, bw).is_some());
        }

        #[test]
        fn nothing_above_ceiling(
            freq in 6_000_000u32..,
            bw in bandwidth(),
            fitted in fitted_ids(),
            band in band()
        ) {
            prop_assert_eq!(select(&fitted, freq, bw), None);
            prop_assert_eq!(select_band(&fitted, freq, bw, band, Direction::Uplink), None);
        }

        #[test]
        fn absent_band_matches_frequency_hunt(
            freq in cellular_frequency(),
            bw in bandwidth(),
            fitted in fitted_ids(),
            hint in direction()
        ) {
            // 0x3D is the only LTE41 filter
            let fitted: Vec<u8> = fitted.into_iter().filter(|&id| id != 0x3D).collect();
            prop_assert_eq!(
                select_band(&fitted, freq, bw, BandFilter::Lte41, hint),
                select(&fitted, freq, bw)
            );
        }

        #[test]
        fn band_result_is_in_band_or_fallback(
            freq in cellular_frequency(),
            bw in bandwidth(),
            fitted in fitted_ids(),
            band in band()
        ) {
            let catalog = FilterCatalog::standard();
            if let Some(sel) = select_band(&fitted, freq, bw, band, Direction::Downlink) {
                let entry = catalog.get(usize::from(sel.filter_id)).unwrap();
                if entry.band != band {
                    prop_assert_eq!(Some(sel), select(&fitted, freq, bw));
                }
            }
        }

        #[test]
        fn band_match_is_closest_in_band(
            freq in cellular_frequency(),
            bw in bandwidth(),
            fitted in fitted_ids(),
            band in band(),
            hint in direction()
        ) {
            let catalog = FilterCatalog::standard();
            let sel = select_band(&fitted, freq, bw, band, hint);
            match best_band_offset(&fitted, freq, bw, band, hint) {
                Some(best) => {
                    let sel = sel.unwrap();
                    let entry = catalog.get(usize::from(sel.filter_id)).unwrap();
                    prop_assert_eq!(entry.band, band);
                    prop_assert_eq!(sel.direction, resolve_direction(entry.extra_data, hint));
                    let window = ChannelWindow::new(freq, bw);
                    let offset = window.offset_from(hint_range(entry, hint).centre_dmhz());
                    prop_assert_eq!(offset, best);
                }
                None => prop_assert_eq!(sel, select(&fitted, freq, bw)),
            }
        }

        #[test]
        fn swapped_lte13_always_drives_uplink(
            freq in 746_500u32..755_500u32,
            bw in 0u32..=1_000u32
        ) {
            let sel = select(&[0x36], freq, bw).unwrap();
            prop_assert_eq!(sel.direction, Direction::Uplink);
        }
    }
}
