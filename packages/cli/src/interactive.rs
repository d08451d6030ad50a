#![allow(clippy::module_name_repetitions)]

//! Interactive region picker and improvement assistant.
//!
//! Walks the user through choosing a country, state, city and the
//! vulnerability categories of interest, then opens a menu loop over the
//! resulting [`DashboardView`]. The assistant simulates prompts against the
//! region's base records; a simulation only affects the displayed records
//! once the user applies it. Any simulation in the transcript can be
//! applied, not only the latest.

use dialoguer::{Confirm, Input, MultiSelect, Select};
use ecomind_cli_utils::{MultiProgress, with_spinner};
use ecomind_dashboard::assistant::AssistantSession;
use ecomind_dashboard::{DashboardError, DashboardQuery, DashboardView};
use ecomind_dataset::catalog::LocationCatalog;
use ecomind_simulation::reply::EXAMPLE_PROMPTS;
use ecomind_simulation_models::SimulationResult;
use ecomind_vulnerability_models::VulnerabilityCategory;

use crate::config::CliConfig;
use crate::render;

/// Actions available once a region is open.
enum DashboardAction {
    AskAssistant,
    ApplySimulation,
    ShowRecords,
    ShowSummary,
    Notifications,
    ChangeCategories,
    SetSeverity,
    ResetFilters,
    ResetConversation,
    Quit,
}

impl DashboardAction {
    const ALL: &[Self] = &[
        Self::AskAssistant,
        Self::ApplySimulation,
        Self::ShowRecords,
        Self::ShowSummary,
        Self::Notifications,
        Self::ChangeCategories,
        Self::SetSeverity,
        Self::ResetFilters,
        Self::ResetConversation,
        Self::Quit,
    ];

    #[must_use]
    const fn label(&self) -> &'static str {
        match self {
            Self::AskAssistant => "Ask the assistant",
            Self::ApplySimulation => "Apply a simulation",
            Self::ShowRecords => "Show vulnerabilities",
            Self::ShowSummary => "Show category summary",
            Self::Notifications => "Notifications",
            Self::ChangeCategories => "Change categories",
            Self::SetSeverity => "Set minimum severity",
            Self::ResetFilters => "Reset filters",
            Self::ResetConversation => "Reset conversation",
            Self::Quit => "Quit",
        }
    }
}

/// Runs the picker and then the dashboard menu until the user quits.
///
/// # Errors
///
/// Returns an error if the dataset or catalog cannot be loaded, or if a
/// terminal prompt fails.
pub async fn run(
    config: &CliConfig,
    multi: &MultiProgress,
) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = config.load_catalog()?;
    let dataset = config.load_dataset()?;
    let mut feed = config.load_notifications()?;

    println!("EcoMind");
    println!("Explore your city's environmental health and simulate improvements.");
    println!();

    let Some(query) = pick_region(&catalog)? else {
        println!("No locations configured.");
        return Ok(());
    };

    let mut view = DashboardView::new(&dataset, &query);
    let mut session = AssistantSession::new();

    print!("{}", render::dashboard(&view));
    println!();
    if let Some(welcome) = session.messages().first() {
        println!("{}", welcome.content);
    }
    if feed.unread_count() > 0 {
        println!();
        println!("You have {} unread notifications.", feed.unread_count());
    }

    let labels: Vec<&str> = DashboardAction::ALL
        .iter()
        .map(DashboardAction::label)
        .collect();

    loop {
        println!();
        let idx = Select::new()
            .with_prompt("What would you like to do?")
            .items(&labels)
            .default(0)
            .interact()?;

        match DashboardAction::ALL[idx] {
            DashboardAction::AskAssistant => {
                ask_assistant(config, multi, &view, &mut session).await?;
            }
            DashboardAction::ApplySimulation => match pick_simulation(&session)? {
                Some(result) => {
                    view.apply_simulation(result)?;
                    print!("{}", render::dashboard(&view));
                    if let Some(rows) = view.comparison() {
                        println!();
                        print!("{}", render::comparison(&rows));
                    }
                }
                None => println!("Ask the assistant for a simulation first."),
            },
            DashboardAction::ShowRecords => print!("{}", render::dashboard(&view)),
            DashboardAction::ShowSummary => {
                print!(
                    "{}",
                    render::summary(&view.summary(), view.population_affected())
                );
            }
            DashboardAction::Notifications => {
                print!("{}", render::notifications(&feed));
                if feed.unread_count() > 0
                    && Confirm::new()
                        .with_prompt("Mark all as read?")
                        .default(false)
                        .interact()?
                {
                    feed.mark_all_read();
                }
            }
            DashboardAction::ChangeCategories => {
                change_categories(&mut view)?;
                print!("{}", render::dashboard(&view));
            }
            DashboardAction::SetSeverity => {
                let threshold: f64 = Input::new()
                    .with_prompt("Minimum severity (0.0-1.0)")
                    .default(view.severity_threshold())
                    .interact_text()?;
                view.set_severity_threshold(threshold);
                print!("{}", render::dashboard(&view));
            }
            DashboardAction::ResetFilters => {
                view.reset();
                print!("{}", render::dashboard(&view));
            }
            DashboardAction::ResetConversation => {
                session.reset();
                if let Some(welcome) = session.messages().first() {
                    println!("{}", welcome.content);
                }
            }
            DashboardAction::Quit => break,
        }
    }

    Ok(())
}

/// Prompts for country, state, city and categories. Returns `None` if the
/// catalog offers nothing to pick.
fn pick_region(
    catalog: &LocationCatalog,
) -> Result<Option<DashboardQuery>, Box<dyn std::error::Error>> {
    let Some(country) = pick_one("Country", &catalog.countries())? else {
        return Ok(None);
    };
    let Some(state) = pick_one("State", &catalog.states(&country))? else {
        return Ok(None);
    };
    let Some(city) = pick_one("City", &catalog.cities(&country, &state))? else {
        return Ok(None);
    };

    let labels: Vec<String> = VulnerabilityCategory::all()
        .iter()
        .map(ToString::to_string)
        .collect();

    loop {
        let selected = MultiSelect::new()
            .with_prompt("Vulnerability types (space=toggle, enter=confirm)")
            .items(&labels)
            .interact()?;

        let query = DashboardQuery {
            country: country.clone(),
            state: state.clone(),
            city: city.clone(),
            vulnerabilities: selected
                .into_iter()
                .map(|i| VulnerabilityCategory::all()[i])
                .collect(),
        };

        if query.is_complete() {
            return Ok(Some(query));
        }
        println!("Select at least one vulnerability type.");
    }
}

fn pick_one(prompt: &str, items: &[&str]) -> Result<Option<String>, dialoguer::Error> {
    if items.is_empty() {
        return Ok(None);
    }
    let idx = Select::new()
        .with_prompt(prompt)
        .items(items)
        .default(0)
        .interact()?;
    Ok(Some(items[idx].to_string()))
}

/// Offers the example prompts or free text, then shows the assistant's
/// reply after the configured delay.
async fn ask_assistant(
    config: &CliConfig,
    multi: &MultiProgress,
    view: &DashboardView,
    session: &mut AssistantSession,
) -> Result<(), Box<dyn std::error::Error>> {
    const CUSTOM: &str = "Write my own...";

    let mut choices: Vec<&str> = EXAMPLE_PROMPTS.to_vec();
    choices.push(CUSTOM);

    let idx = Select::new()
        .with_prompt("Describe an improvement")
        .items(&choices)
        .default(0)
        .interact()?;

    let prompt = if choices[idx] == CUSTOM {
        Input::<String>::new()
            .with_prompt("Improvement")
            .allow_empty(true)
            .interact_text()?
    } else {
        choices[idx].to_string()
    };

    let base_records = view.base_records();
    let outcome = with_spinner(multi, "Simulating...", config.simulation_delay, || {
        session
            .send(&prompt, base_records)
            .map(|reply| reply.content)
    })
    .await;

    match outcome {
        Ok(content) => {
            println!("{content}");
            println!();
            println!("Choose \"Apply a simulation\" to see the changes on the map.");
        }
        Err(DashboardError::EmptyPrompt) => println!("Please describe an improvement."),
        Err(e) => return Err(e.into()),
    }

    Ok(())
}

/// Offers every simulation in the transcript, newest preselected. Returns
/// `None` if the assistant has not simulated anything yet.
fn pick_simulation(
    session: &AssistantSession,
) -> Result<Option<SimulationResult>, dialoguer::Error> {
    let simulations: Vec<_> = session.simulations().collect();
    if simulations.is_empty() {
        return Ok(None);
    }

    let labels: Vec<String> = simulations
        .iter()
        .map(|(message, result)| {
            format!(
                "#{} {} ({}/100)",
                message.id, result.improvement_label, result.metrics.overall_score
            )
        })
        .collect();

    let idx = Select::new()
        .with_prompt("Simulation to apply")
        .items(&labels)
        .default(labels.len() - 1)
        .interact()?;

    Ok(Some(simulations[idx].1.clone()))
}

/// Lets the user re-pick the category filter, starting from the current
/// selection.
fn change_categories(view: &mut DashboardView) -> Result<(), dialoguer::Error> {
    let labels: Vec<String> = VulnerabilityCategory::all()
        .iter()
        .map(ToString::to_string)
        .collect();
    let current: Vec<bool> = VulnerabilityCategory::all()
        .iter()
        .map(|c| view.selected_categories().contains(c))
        .collect();

    let selected = MultiSelect::new()
        .with_prompt("Vulnerability types (none selected shows all)")
        .items(&labels)
        .defaults(&current)
        .interact()?;

    for (i, category) in VulnerabilityCategory::all().iter().enumerate() {
        if selected.contains(&i) != current[i] {
            view.toggle_category(*category);
        }
    }

    Ok(())
}
