//! Plain-text tables for terminal output.

use std::fmt::Write as _;

use ecomind_dashboard::DashboardView;
use ecomind_dashboard::notifications::NotificationFeed;
use ecomind_dataset::catalog::LocationCatalog;
use ecomind_dataset::summary::{CategorySummary, SeverityComparison};
use ecomind_simulation::ImprovementArchetype;
use ecomind_vulnerability_models::{
    Position, SeverityLevel, VulnerabilityCategory, VulnerabilityRecord,
};

/// Category list with marker colours, the severity legend and the
/// improvement archetypes the assistant recognizes.
#[must_use]
pub fn categories() -> String {
    let mut out = format!("{:<34} COLOR\n", "CATEGORY");
    out.push_str(&"-".repeat(42));
    out.push('\n');
    for category in VulnerabilityCategory::all() {
        writeln!(out, "{:<34} {}", category.to_string(), category.color()).unwrap();
    }
    out.push('\n');
    out.push_str("Severity legend:\n");
    for level in SeverityLevel::all() {
        writeln!(out, "  {:<22} {}", level.legend_label(), level.color()).unwrap();
    }
    out.push('\n');
    out.push_str("Improvements:\n");
    for archetype in ImprovementArchetype::all() {
        let effect = archetype.effect();
        writeln!(
            out,
            "  {:<44} air {:>2}%  heat {:>2}%  green {:>2}%",
            archetype.label(),
            effect.air_quality_improvement_pct,
            effect.heat_reduction_pct,
            effect.green_space_increase_pct
        )
        .unwrap();
    }
    out
}

/// Indented country / state / city tree.
#[must_use]
pub fn locations(catalog: &LocationCatalog) -> String {
    let mut out = String::new();
    for country in catalog.countries() {
        writeln!(out, "{country}").unwrap();
        for state in catalog.states(country) {
            writeln!(out, "  {state}").unwrap();
            for city in catalog.cities(country, state) {
                writeln!(out, "    {city}").unwrap();
            }
        }
    }
    out
}

/// One row per record.
#[must_use]
pub fn records(records: &[VulnerabilityRecord]) -> String {
    if records.is_empty() {
        return "No vulnerabilities match the current filters.\n".to_string();
    }

    let mut out = format!(
        "{:<5} {:<34} {:>8} {:<9} {:>12}  DESCRIPTION\n",
        "ID", "CATEGORY", "SEVERITY", "LEVEL", "POPULATION"
    );
    out.push_str(&"-".repeat(90));
    out.push('\n');
    for r in records {
        writeln!(
            out,
            "{:<5} {:<34} {:>8.2} {:<9} {:>12}  {}",
            r.id,
            r.category.to_string(),
            r.severity,
            r.severity_level().to_string(),
            r.population_affected,
            r.description
        )
        .unwrap();
    }
    out
}

/// Per-category aggregates followed by the population total.
#[must_use]
pub fn summary(rows: &[CategorySummary], population_affected: u64) -> String {
    let mut out = format!(
        "{:<34} {:>6} {:>13} {:>12}\n",
        "CATEGORY", "COUNT", "MEAN SEVERITY", "POPULATION"
    );
    out.push_str(&"-".repeat(68));
    out.push('\n');
    for row in rows {
        writeln!(
            out,
            "{:<34} {:>6} {:>13.2} {:>12}",
            row.category.to_string(),
            row.count,
            row.mean_severity,
            row.population_affected
        )
        .unwrap();
    }
    out.push_str(&"-".repeat(68));
    out.push('\n');
    writeln!(out, "{:<34} {:>6} {:>13} {:>12}", "TOTAL", "", "", population_affected).unwrap();
    out
}

/// Baseline vs simulated mean severities.
#[must_use]
pub fn comparison(rows: &[SeverityComparison]) -> String {
    let mut out = format!(
        "{:<34} {:>9} {:>10} {:>7}\n",
        "CATEGORY", "BASELINE", "SIMULATED", "CHANGE"
    );
    out.push_str(&"-".repeat(63));
    out.push('\n');
    for row in rows {
        writeln!(
            out,
            "{:<34} {:>9.2} {:>10.2} {:>+7.2}",
            row.category.to_string(),
            row.baseline,
            row.simulated,
            -row.improvement()
        )
        .unwrap();
    }
    out
}

/// Map centre line.
#[must_use]
pub fn center(position: Position) -> String {
    format!(
        "Map center: {:.4}, {:.4}\n",
        position.latitude, position.longitude
    )
}

/// Notifications grouped by category. Unread entries are starred.
#[must_use]
pub fn notifications(feed: &NotificationFeed) -> String {
    let mut out = format!("Notifications ({} unread)\n", feed.unread_count());
    for category in feed.categories() {
        out.push('\n');
        writeln!(out, "{}", category.name.to_uppercase()).unwrap();
        for n in &category.notifications {
            let marker = if n.read { ' ' } else { '*' };
            writeln!(out, "{marker} {} ({})", n.title, n.time).unwrap();
            writeln!(out, "    {}", n.description).unwrap();
        }
    }
    out
}

/// Header, visible records and map centre of a dashboard view.
#[must_use]
pub fn dashboard(view: &DashboardView) -> String {
    let mut out = format!("{}", view.location());
    if view.is_simulated() {
        out.push_str(" (Simulated)");
    }
    out.push('\n');

    let selected = if view.selected_categories().is_empty() {
        "all".to_string()
    } else {
        view.selected_categories()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    };
    writeln!(
        out,
        "Categories: {selected} | Minimum severity: {:.1}",
        view.severity_threshold()
    )
    .unwrap();
    writeln!(out, "Baseline environmental score: {}/100", view.baseline_score()).unwrap();
    if let Some(simulation) = view.simulation() {
        writeln!(
            out,
            "Simulated environmental score: {}/100",
            simulation.metrics.overall_score
        )
        .unwrap();
    }
    out.push('\n');

    let visible = view.visible_records();
    out.push_str(&records(&visible));
    out.push_str(&center(view.map_center()));
    out
}
