//! Canned wellness recommendations keyed by mood label.

/// Returned for any label without a dedicated recommendation.
pub const DEFAULT_RECOMMENDATION: &str = "Engage in a self-care activity that you enjoy.";

/// Look up the recommendation for a mood. Matching ignores case.
pub fn recommend(mood: &str) -> &'static str {
    match mood.to_lowercase().as_str() {
        "happy" => "Keep the positivity going! Consider sharing your happiness with someone else.",
        "content" => "That's great! Engage in an activity you enjoy.",
        "sad" => "It's okay to feel down. Take some time to relax or reach out to someone you trust.",
        "stressed" => "Take a deep breath. Mindfulness exercises or a short walk can help.",
        "anxious" => {
            "Focus on grounding techniques like deep breathing or enjoy a calming activity."
        }
        "neutral" => "Perhaps explore something new to lift your spirits!",
        _ => DEFAULT_RECOMMENDATION,
    }
}
