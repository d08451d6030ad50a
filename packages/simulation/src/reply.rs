//! Assistant reply text for a simulation.

use std::fmt::Write as _;

use ecomind_simulation_models::SimulationResult;

/// Prompts offered to the user as starting points.
pub const EXAMPLE_PROMPTS: &[&str] = &[
    "Add more trees in the city center",
    "Improve public transport in the north zone",
    "Reduce vehicle traffic downtown",
    "Enhance water treatment facilities",
];

/// Greeting that opens every assistant session.
pub const WELCOME_MESSAGE: &str = "Hello! I'm your AI urban planning assistant. Describe improvements you'd like to simulate, and I'll show you the predicted environmental impact.";

/// Formats the assistant's answer for a simulation result.
#[must_use]
pub fn format_reply(result: &SimulationResult) -> String {
    let metrics = &result.metrics;
    let mut out = format!(
        "I've simulated \"{}\". Here are the predicted results:\n\n",
        result.improvement_label
    );

    writeln!(out, "\u{2022} Air Quality: {}", change(metrics.air_quality_delta)).unwrap();
    writeln!(out, "\u{2022} Heat Reduction: {}", change(metrics.heat_delta)).unwrap();
    writeln!(out, "\u{2022} Green Space: {}", change(metrics.green_space_delta)).unwrap();
    write!(
        out,
        "\u{2022} Overall Environmental Score: {}/100",
        metrics.overall_score
    )
    .unwrap();

    out
}

fn change(pct: u8) -> String {
    if pct > 0 {
        format!("+{pct}%")
    } else {
        "No change".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulate;

    #[test]
    fn formats_traffic_reply() {
        let result = simulate("reduce traffic downtown", &[]);
        let reply = format_reply(&result);

        assert!(reply.starts_with(
            "I've simulated \"Reduced vehicle traffic and emissions\". Here are the predicted results:"
        ));
        assert!(reply.contains("\u{2022} Air Quality: +30%"));
        assert!(reply.contains("\u{2022} Heat Reduction: +10%"));
        assert!(reply.contains("\u{2022} Green Space: No change"));
        assert!(reply.ends_with("\u{2022} Overall Environmental Score: 100/100"));
    }

    #[test]
    fn example_prompts_cover_specific_archetypes() {
        use ecomind_simulation_models::ImprovementArchetype;

        for prompt in EXAMPLE_PROMPTS {
            assert_ne!(
                crate::classify::classify(prompt),
                ImprovementArchetype::General,
                "example prompt {prompt:?} fell through to the general archetype"
            );
        }
    }
}
