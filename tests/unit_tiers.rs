// Unit tests for the local tier table and signal catalog.
//
// The tier table is what every meter colors itself by, so these pin its
// shape: ten contiguous buckets covering 0-100 with no gaps or overlaps.

use virality::tiers::{
    signal_label, tier_by_level, tier_for_score, TierColor, NEGATIVE_SIGNALS, POSITIVE_SIGNALS,
    VIRALITY_TIERS,
};

#[test]
fn every_integer_score_has_exactly_one_tier() {
    for score in 0..=100u8 {
        let matches = VIRALITY_TIERS.iter().filter(|t| t.contains(score)).count();
        assert_eq!(matches, 1, "score {score} matched {matches} tiers");
    }
}

#[test]
fn tiers_are_contiguous_and_ordered() {
    assert_eq!(VIRALITY_TIERS[0].min_score, 0);
    assert_eq!(VIRALITY_TIERS[9].max_score, 100);
    for pair in VIRALITY_TIERS.windows(2) {
        assert_eq!(pair[0].max_score + 1, pair[1].min_score);
        assert_eq!(pair[0].level + 1, pair[1].level);
    }
}

#[test]
fn boundary_scores() {
    assert_eq!(tier_for_score(0.0).name, "DEAD_SIGNAL");
    assert_eq!(tier_for_score(10.0).level, 1);
    assert_eq!(tier_for_score(11.0).level, 2);
    assert_eq!(tier_for_score(90.0).level, 9);
    assert_eq!(tier_for_score(91.0).name, "LEGENDARY");
    assert_eq!(tier_for_score(100.0).level, 10);
}

#[test]
fn fractional_scores_round_down() {
    assert_eq!(tier_for_score(10.5).level, 1);
    assert_eq!(tier_for_score(90.99).level, 9);
}

#[test]
fn out_of_range_scores_clamp() {
    assert_eq!(tier_for_score(-12.0).level, 1);
    assert_eq!(tier_for_score(250.0).level, 10);
    assert_eq!(tier_for_score(f64::NAN).level, 1);
}

#[test]
fn level_lookup_falls_back_to_first_tier() {
    assert_eq!(tier_by_level(7).level, 7);
    assert_eq!(tier_by_level(0).level, 1);
    assert_eq!(tier_by_level(42).level, 1);
}

#[test]
fn unknown_color_keys_render_gray() {
    assert_eq!(TierColor::from_key("not-a-color"), TierColor::Gray);
    assert_eq!(TierColor::from_key("gray").hex(), TierColor::Gray.hex());
}

#[test]
fn signal_catalog_sizes() {
    assert_eq!(POSITIVE_SIGNALS.len(), 11);
    assert_eq!(NEGATIVE_SIGNALS.len(), 4);
    assert!(POSITIVE_SIGNALS.iter().any(|s| s.key == "favorite"));
    assert!(NEGATIVE_SIGNALS.iter().any(|s| s.key == "block_author"));
}

#[test]
fn unknown_signal_keeps_its_name() {
    assert_eq!(signal_label("favorite"), ("likes", "♥"));
    assert_eq!(signal_label("mystery_signal"), ("mystery_signal", "◆"));
}
