//! Journaling prompts.

use rand::seq::SliceRandom;
use rand::Rng;

pub const JOURNAL_PROMPTS: &[&str] = &[
    "What is one thing you learned this week?",
    "Who is someone you can reach out to when you need support?",
    "How have you been resilient this month?",
    "What self-care activity made you feel good recently?",
    "Describe a positive experience from your day.",
];

/// Pick a prompt uniformly at random using the supplied RNG.
pub fn journal_prompt<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    // The list is a non-empty constant, so the fallback never triggers.
    JOURNAL_PROMPTS
        .choose(rng)
        .copied()
        .unwrap_or(JOURNAL_PROMPTS[0])
}

/// Pick a prompt with the thread-local RNG.
pub fn random_journal_prompt() -> &'static str {
    journal_prompt(&mut rand::thread_rng())
}
