//! One turn of the journaling loop: record a mood and gather the replies.

use crate::mood::{Insight, MoodEntry, MoodHistory};
use crate::prompts::journal_prompt;
use crate::recommend::recommend;
use rand::Rng;

/// Everything the front end shows after a mood is recorded.
#[derive(Debug, Clone)]
pub struct CheckIn {
    pub entry: MoodEntry,
    pub insight: Insight,
    pub recommendation: &'static str,
    pub prompt: &'static str,
}

pub fn check_in<R: Rng + ?Sized>(history: &mut MoodHistory, mood: &str, rng: &mut R) -> CheckIn {
    let entry = history.record(mood).clone();
    CheckIn {
        entry,
        insight: history.insight(),
        recommendation: recommend(mood),
        prompt: journal_prompt(rng),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompts::JOURNAL_PROMPTS;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_check_in_records_and_answers() {
        let mut history = MoodHistory::new();
        let mut rng = StdRng::seed_from_u64(1);

        let reply = check_in(&mut history, "Stressed", &mut rng);
        assert_eq!(history.len(), 1);
        assert_eq!(reply.entry.mood(), "Stressed");
        assert_eq!(reply.insight, Insight::KeepTracking);
        assert_eq!(reply.recommendation, recommend("stressed"));
        assert!(JOURNAL_PROMPTS.contains(&reply.prompt));
    }

    #[test]
    fn test_insight_reflects_the_new_entry() {
        let mut history = MoodHistory::new();
        let mut rng = StdRng::seed_from_u64(2);
        for mood in ["sad", "sad", "happy"] {
            check_in(&mut history, mood, &mut rng);
        }
        let reply = check_in(&mut history, "content", &mut rng);
        assert_eq!(reply.insight, Insight::PositiveTrend);
        assert_eq!(history.len(), 4);
    }
}
