//! Chart data for the mood scatter plot.
//!
//! Mood labels collapse into a handful of buckets, each with a fixed color.
//! Rendering is left to the front end; this module only decides which
//! points to draw and where.

use crate::mood::MoodHistory;
use chrono::{DateTime, Local};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChartError {
    #[error("No mood data available to display.")]
    EmptyHistory,
}

/// Visual category of a mood label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoodBucket {
    Happy,
    Sad,
    Stressed,
    Anxious,
    Neutral,
}

/// Chart colors, one per bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartColor {
    Green,
    Blue,
    Orange,
    Red,
    Grey,
}

impl MoodBucket {
    /// Top-to-bottom row order of the chart.
    pub const ALL: [MoodBucket; 5] = [
        MoodBucket::Happy,
        MoodBucket::Sad,
        MoodBucket::Stressed,
        MoodBucket::Anxious,
        MoodBucket::Neutral,
    ];

    /// Exact, case-sensitive match; everything unrecognised is neutral.
    pub fn from_label(label: &str) -> Self {
        match label {
            "happy" => MoodBucket::Happy,
            "sad" => MoodBucket::Sad,
            "stressed" => MoodBucket::Stressed,
            "anxious" => MoodBucket::Anxious,
            _ => MoodBucket::Neutral,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MoodBucket::Happy => "happy",
            MoodBucket::Sad => "sad",
            MoodBucket::Stressed => "stressed",
            MoodBucket::Anxious => "anxious",
            MoodBucket::Neutral => "neutral",
        }
    }

    pub fn color(&self) -> ChartColor {
        match self {
            MoodBucket::Happy => ChartColor::Green,
            MoodBucket::Sad => ChartColor::Blue,
            MoodBucket::Stressed => ChartColor::Orange,
            MoodBucket::Anxious => ChartColor::Red,
            MoodBucket::Neutral => ChartColor::Grey,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartPoint {
    pub timestamp: DateTime<Local>,
    pub bucket: MoodBucket,
}

/// Points to plot, oldest first.
#[derive(Debug, Clone)]
pub struct MoodChart {
    points: Vec<ChartPoint>,
    /// Entries left out because they are older than the plotted window.
    omitted: usize,
}

impl MoodChart {
    /// Build a chart from the newest `max_points` entries of the history.
    ///
    /// `max_points` of zero is treated as one so a non-empty history always
    /// produces something to draw.
    pub fn from_history(history: &MoodHistory, max_points: usize) -> Result<Self, ChartError> {
        if history.is_empty() {
            return Err(ChartError::EmptyHistory);
        }

        let window = history.recent(max_points.max(1));
        let points = window
            .iter()
            .map(|entry| ChartPoint {
                timestamp: entry.timestamp(),
                bucket: MoodBucket::from_label(entry.mood()),
            })
            .collect();

        Ok(Self {
            points,
            omitted: history.len() - window.len(),
        })
    }

    pub fn points(&self) -> &[ChartPoint] {
        &self.points
    }

    pub fn omitted(&self) -> usize {
        self.omitted
    }

    pub fn first_timestamp(&self) -> Option<DateTime<Local>> {
        self.points.first().map(|p| p.timestamp)
    }

    pub fn last_timestamp(&self) -> Option<DateTime<Local>> {
        self.points.last().map(|p| p.timestamp)
    }

    /// Number of plotted points per bucket, in [`MoodBucket::ALL`] order.
    pub fn bucket_counts(&self) -> [(MoodBucket, usize); 5] {
        MoodBucket::ALL.map(|bucket| {
            let count = self.points.iter().filter(|p| p.bucket == bucket).count();
            (bucket, count)
        })
    }
}
