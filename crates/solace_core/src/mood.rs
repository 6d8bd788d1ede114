//! Mood history: the append-only log of self-reported moods.
//!
//! Entries are kept in recording order, which is also chronological order.
//! The log never shrinks during a session and is dropped with it.

use chrono::{DateTime, Local, SubsecRound};
use std::fmt;

/// Display format for entry timestamps.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Number of most recent entries the insight query inspects.
pub const INSIGHT_WINDOW: usize = 3;

/// Labels counted as positive by [`MoodHistory::insight`]. Case-sensitive.
const POSITIVE_LABELS: &[&str] = &["happy", "content"];

/// Positive entries needed inside the window to call the trend positive.
const POSITIVE_THRESHOLD: usize = 2;

/// A single recorded mood.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoodEntry {
    timestamp: DateTime<Local>,
    mood: String,
}

impl MoodEntry {
    /// When the mood was recorded, truncated to whole seconds.
    pub fn timestamp(&self) -> DateTime<Local> {
        self.timestamp
    }

    /// The label exactly as the user gave it.
    pub fn mood(&self) -> &str {
        &self.mood
    }

    pub fn formatted_timestamp(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }

    fn is_positive(&self) -> bool {
        POSITIVE_LABELS.contains(&self.mood.as_str())
    }
}

/// Canned reading of the recent mood trend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Insight {
    /// Not enough entries yet.
    KeepTracking,
    PositiveTrend,
    Challenges,
}

impl Insight {
    pub fn message(&self) -> &'static str {
        match self {
            Insight::KeepTracking => "Keep tracking your mood so I can help you with insights.",
            Insight::PositiveTrend => "You've had some positive days recently! Keep it up!",
            Insight::Challenges => {
                "It looks like you've been having a few challenges. Remember to take care of yourself."
            }
        }
    }
}

impl fmt::Display for Insight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Append-only, chronologically ordered log of [`MoodEntry`] values.
#[derive(Debug, Clone, Default)]
pub struct MoodHistory {
    entries: Vec<MoodEntry>,
}

impl MoodHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a mood at the current local time. Any label is accepted.
    pub fn record(&mut self, mood: impl Into<String>) -> &MoodEntry {
        self.record_at(mood, Local::now())
    }

    /// Record a mood at an explicit time.
    ///
    /// A timestamp older than the newest entry is raised to that entry's
    /// timestamp, so the log stays in chronological order.
    pub fn record_at(&mut self, mood: impl Into<String>, timestamp: DateTime<Local>) -> &MoodEntry {
        let mut timestamp = timestamp.trunc_subsecs(0);
        if let Some(last) = self.entries.last() {
            if timestamp < last.timestamp {
                tracing::warn!(
                    "Mood timestamp {} precedes newest entry {}, clamping",
                    timestamp.format(TIMESTAMP_FORMAT),
                    last.formatted_timestamp()
                );
                timestamp = last.timestamp;
            }
        }

        let index = self.entries.len();
        self.entries.push(MoodEntry {
            timestamp,
            mood: mood.into(),
        });
        let entry = &self.entries[index];
        tracing::debug!(mood = %entry.mood, total = index + 1, "mood recorded");
        entry
    }

    /// Classify the recent trend.
    ///
    /// With [`INSIGHT_WINDOW`] or fewer entries the answer is always
    /// [`Insight::KeepTracking`]; the first real insight arrives with the
    /// fourth entry. After that only the newest three entries count.
    pub fn insight(&self) -> Insight {
        if self.entries.len() <= INSIGHT_WINDOW {
            return Insight::KeepTracking;
        }

        let positive = self
            .recent(INSIGHT_WINDOW)
            .iter()
            .filter(|e| e.is_positive())
            .count();

        if positive >= POSITIVE_THRESHOLD {
            Insight::PositiveTrend
        } else {
            Insight::Challenges
        }
    }

    /// The newest `n` entries (fewer if the log is shorter), oldest first.
    pub fn recent(&self, n: usize) -> &[MoodEntry] {
        let start = self.entries.len().saturating_sub(n);
        &self.entries[start..]
    }

    pub fn entries(&self) -> &[MoodEntry] {
        &self.entries
    }

    pub fn last(&self) -> Option<&MoodEntry> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
