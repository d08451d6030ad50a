//! Prompt classification.
//!
//! Maps free-text improvement prompts to an [`ImprovementArchetype`] using
//! case-insensitive keyword detection. Groups are checked in order and the
//! first group with any matching keyword wins, so a prompt mentioning both
//! trees and transport is a green-space improvement.

use ecomind_simulation_models::ImprovementArchetype;

/// Keyword groups in matching priority order. Prompts matching none of
/// them classify as [`ImprovementArchetype::General`].
pub const KEYWORD_GROUPS: &[(ImprovementArchetype, &[&str])] = &[
    (ImprovementArchetype::GreenSpace, &["tree", "green", "park"]),
    (
        ImprovementArchetype::PublicTransport,
        &["transport", "transit", "bus"],
    ),
    (
        ImprovementArchetype::TrafficReduction,
        &["traffic", "car", "vehicle"],
    ),
    (ImprovementArchetype::WaterTreatment, &["water", "pollution"]),
];

/// Classifies a prompt. Total: every string, including the empty string,
/// yields an archetype.
#[must_use]
pub fn classify(prompt: &str) -> ImprovementArchetype {
    classify_lowercase(&prompt.to_lowercase())
}

/// Same as [`classify`] for a prompt that is already lower-cased.
#[must_use]
pub fn classify_lowercase(lower: &str) -> ImprovementArchetype {
    KEYWORD_GROUPS
        .iter()
        .find(|(_, keywords)| contains_any(lower, keywords))
        .map_or(ImprovementArchetype::General, |(archetype, _)| *archetype)
}

/// Checks if `haystack` contains any of the given `needles`.
fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_example_prompts() {
        assert_eq!(
            classify("Add more trees in the city center"),
            ImprovementArchetype::GreenSpace
        );
        assert_eq!(
            classify("Improve public transport in the north zone"),
            ImprovementArchetype::PublicTransport
        );
        assert_eq!(
            classify("Reduce vehicle traffic downtown"),
            ImprovementArchetype::TrafficReduction
        );
        assert_eq!(
            classify("Enhance water treatment facilities"),
            ImprovementArchetype::WaterTreatment
        );
    }

    #[test]
    fn first_group_wins() {
        assert_eq!(
            classify("I want more trees and better transport"),
            ImprovementArchetype::GreenSpace
        );
        assert_eq!(
            classify("more buses to cut car traffic"),
            ImprovementArchetype::PublicTransport
        );
        assert_eq!(
            classify("fewer cars near polluted water"),
            ImprovementArchetype::TrafficReduction
        );
    }

    #[test]
    fn case_insensitive() {
        assert_eq!(classify("ADD TREES"), classify("add trees"));
        assert_eq!(classify("ADD TREES"), ImprovementArchetype::GreenSpace);
        assert_eq!(classify("Bus Lanes"), ImprovementArchetype::PublicTransport);
    }

    #[test]
    fn substring_matching() {
        // "car" inside "scarce", "bus" inside "business"
        assert_eq!(
            classify("scarce resources"),
            ImprovementArchetype::TrafficReduction
        );
        assert_eq!(
            classify("support local business"),
            ImprovementArchetype::PublicTransport
        );
    }

    #[test]
    fn unknown_fallback() {
        assert_eq!(classify("make things nicer"), ImprovementArchetype::General);
        assert_eq!(classify(""), ImprovementArchetype::General);
        assert_eq!(classify("   \t\n"), ImprovementArchetype::General);
    }
}
