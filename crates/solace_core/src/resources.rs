//! Static mental-health resource lists.
//!
//! "Fetching" is a lookup over constant data; nothing leaves the process.

const STRESS: &[&str] = &[
    "1. Stress Management Techniques: Visit [link1]",
    "2. Understanding Stress: Visit [link2]",
    "3. Relaxation Exercises: Visit [link3]",
];

const ANXIETY: &[&str] = &[
    "1. Coping with Anxiety: Visit [link4]",
    "2. Breathing Techniques: Visit [link5]",
    "3. Mindfulness for Anxiety: Visit [link6]",
];

const GENERAL: &[&str] = &[
    "1. Mental Health Awareness: Visit [link7]",
    "2. Self-Care Tips: Visit [link8]",
    "3. Finding Support: Visit [link9]",
];

/// Returned for topics without a resource list.
pub const NOT_FOUND: &[&str] = &["No resources found for this topic. Try something else."];

/// Topics with a dedicated resource list, in display order.
pub const TOPICS: &[&str] = &["stress", "anxiety", "general"];

/// Resource lines for a topic keyword. Matching ignores case.
pub fn fetch_resources(topic: &str) -> &'static [&'static str] {
    tracing::debug!(topic, "looking up resources");
    match topic.to_lowercase().as_str() {
        "stress" => STRESS,
        "anxiety" => ANXIETY,
        "general" => GENERAL,
        _ => NOT_FOUND,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_topic_has_three_items() {
        for topic in TOPICS {
            assert_eq!(fetch_resources(topic).len(), 3, "topic {topic}");
        }
    }

    #[test]
    fn test_lookup_ignores_case() {
        assert_eq!(fetch_resources("STRESS"), fetch_resources("stress"));
        assert!(fetch_resources("Anxiety")[0].contains("Coping with Anxiety"));
    }

    #[test]
    fn test_unknown_topic_yields_single_fallback() {
        let resources = fetch_resources("sleep hygiene");
        assert_eq!(resources.len(), 1);
        assert_eq!(resources, NOT_FOUND);
    }
}
