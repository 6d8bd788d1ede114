//! Property-based tests for solace_core.
//!
//! Uses proptest to check the mood log and lookup tables against arbitrary
//! labels, not just the handful the tables know about.

use chrono::{Duration, Local, TimeZone};
use proptest::prelude::*;
use solace_core::recommend::DEFAULT_RECOMMENDATION;
use solace_core::resources::NOT_FOUND;
use solace_core::{fetch_resources, recommend, Insight, MoodBucket, MoodChart, MoodHistory};

// ============================================================================
// Strategies
// ============================================================================

/// Labels mixing the known vocabulary with arbitrary text.
fn arb_mood() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("happy".to_string()),
        Just("content".to_string()),
        Just("sad".to_string()),
        Just("stressed".to_string()),
        Just("anxious".to_string()),
        Just("Happy".to_string()),
        "[ -~]{0,16}",
    ]
}

fn arb_moods(max: usize) -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(arb_mood(), 0..max)
}

fn is_positive(mood: &str) -> bool {
    mood == "happy" || mood == "content"
}

// ============================================================================
// MoodHistory
// ============================================================================

proptest! {
    /// Every record grows the log by exactly one and keeps the label verbatim.
    #[test]
    fn record_always_appends_one_entry(moods in arb_moods(32)) {
        let mut history = MoodHistory::new();
        for (i, mood) in moods.iter().enumerate() {
            history.record(mood.clone());
            prop_assert_eq!(history.len(), i + 1);
            prop_assert_eq!(history.last().map(|e| e.mood()), Some(mood.as_str()));
        }
    }

    /// Short logs never produce a trend.
    #[test]
    fn short_history_keeps_tracking(moods in arb_moods(4)) {
        let mut history = MoodHistory::new();
        for mood in &moods {
            history.record(mood.clone());
        }
        prop_assert_eq!(history.insight(), Insight::KeepTracking);
    }

    /// Past the threshold the insight depends only on the newest three labels.
    #[test]
    fn insight_counts_positive_labels_in_window(
        prefix in prop::collection::vec(arb_mood(), 1..10),
        window in prop::collection::vec(arb_mood(), 3..=3),
    ) {
        let mut history = MoodHistory::new();
        for mood in prefix.iter().chain(window.iter()) {
            history.record(mood.clone());
        }
        let positive = window.iter().filter(|m| is_positive(m)).count();
        let expected = if positive >= 2 { Insight::PositiveTrend } else { Insight::Challenges };
        prop_assert_eq!(history.insight(), expected);
    }

    /// Timestamps never go backwards, whatever order they are supplied in.
    #[test]
    fn timestamps_are_non_decreasing(offsets in prop::collection::vec(-3600i64..3600, 1..20)) {
        let base = Local.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let mut history = MoodHistory::new();
        for (i, offset) in offsets.iter().enumerate() {
            history.record_at(format!("mood-{i}"), base + Duration::seconds(*offset));
        }
        let entries = history.entries();
        for pair in entries.windows(2) {
            prop_assert!(pair[0].timestamp() <= pair[1].timestamp());
        }
    }
}

// ============================================================================
// Lookups and chart
// ============================================================================

proptest! {
    /// Recommendation lookup ignores case for every label.
    #[test]
    fn recommendation_ignores_case(mood in arb_mood()) {
        prop_assert_eq!(recommend(&mood.to_uppercase()), recommend(&mood.to_lowercase()));
    }

    /// Unknown topics always produce the single fallback line.
    #[test]
    fn unknown_topics_fall_back(topic in "[a-z ]{0,12}") {
        let known = ["stress", "anxiety", "general"];
        prop_assume!(!known.contains(&topic.as_str()));
        let resources = fetch_resources(&topic);
        prop_assert_eq!(resources.len(), 1);
        prop_assert_eq!(resources, NOT_FOUND);
    }

    /// Chart buckets follow the exact-match rule and never exceed the cap.
    #[test]
    fn chart_respects_cap_and_buckets(moods in arb_moods(30), cap in 1usize..50) {
        let mut history = MoodHistory::new();
        for mood in &moods {
            history.record(mood.clone());
        }
        match MoodChart::from_history(&history, cap) {
            Err(_) => prop_assert!(moods.is_empty()),
            Ok(chart) => {
                prop_assert_eq!(chart.points().len(), moods.len().min(cap));
                prop_assert_eq!(chart.points().len() + chart.omitted(), moods.len());
                let tail = &moods[moods.len() - chart.points().len()..];
                for (point, mood) in chart.points().iter().zip(tail) {
                    prop_assert_eq!(point.bucket, MoodBucket::from_label(mood));
                }
            }
        }
    }
}

#[test]
fn five_entry_examples() {
    let mut history = MoodHistory::new();
    for mood in ["sad", "sad", "happy", "content", "sad"] {
        history.record(mood);
    }
    assert_eq!(history.insight(), Insight::PositiveTrend);

    let mut history = MoodHistory::new();
    for mood in ["happy", "happy", "sad", "anxious", "stressed"] {
        history.record(mood);
    }
    assert_eq!(history.insight(), Insight::Challenges);

    assert_ne!(recommend("HAPPY"), DEFAULT_RECOMMENDATION);
}
