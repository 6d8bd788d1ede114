//! # Solace Core
//!
//! The mood log and the small, static tables a journaling session draws on:
//!
//! - [`MoodHistory`]: append-only log of recorded moods and the trend insight
//! - [`recommend`]: canned recommendation per mood label
//! - [`fetch_resources`]: resource lines per topic keyword
//! - [`journal_prompt`]: uniformly random journaling prompt
//! - [`MoodChart`]: bucketed points for the mood scatter plot
//!
//! Nothing here touches the terminal or the network; the CLI crate owns I/O.

pub mod chart;
pub mod checkin;
pub mod config;
pub mod mood;
pub mod prompts;
pub mod recommend;
pub mod resources;

pub use chart::{ChartColor, ChartError, ChartPoint, MoodBucket, MoodChart};
pub use checkin::{check_in, CheckIn};
pub use config::SolaceConfig;
pub use mood::{Insight, MoodEntry, MoodHistory, TIMESTAMP_FORMAT};
pub use prompts::{journal_prompt, random_journal_prompt, JOURNAL_PROMPTS};
pub use recommend::recommend;
pub use resources::fetch_resources;
