use clap::Parser;
use tracing::warn;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use meal_wizard_rs::cli::{Cli, Command, DraftAction};
use meal_wizard_rs::config::PlannerConfig;
use meal_wizard_rs::error::{PlannerError, Result};
use meal_wizard_rs::interface::{
    StepAction, collect_health_form, collect_preferences_form, display_advisories, display_bmi,
    display_draft, display_indicators, display_meal_plan, display_report, display_step_header,
    display_suggestions, prompt_step_action, prompt_yes_no, write_plan_csv,
};
use meal_wizard_rs::models::{
    BmiCategory, Cuisine, Field, FormInput, GeneratedPlan, ValidationReport, ViolationKind,
    parse_measurement,
};
use meal_wizard_rs::planner::{
    GenerationRequest, PlanGenerator, SuggestionKey, bmi_reading, category_guidance,
    closest_cuisine, live_indicators, suggest_meals,
};
use meal_wizard_rs::state::{FileStore, clear_draft, load_draft, save_draft};
use meal_wizard_rs::wizard::{Transition, WizardSession};

const HEALTH_FIELDS: [Field; 5] = [
    Field::Weight,
    Field::Height,
    Field::BloodSugar,
    Field::BpSystolic,
    Field::BpDiastolic,
];

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = PlannerConfig::from(&cli);
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Plan => cmd_plan(&config),
        Command::Bmi { weight, height } => cmd_bmi(&weight, &height),
        Command::Suggest { cuisine, category } => {
            cmd_suggest(cuisine.as_deref(), category.as_deref())
        }
        Command::Draft { action } => cmd_draft(&config, action),
    }
}

/// Walk through the wizard and generate a plan.
fn cmd_plan(config: &PlannerConfig) -> Result<()> {
    let mut store = FileStore::new(&config.store_path);
    let mut session = WizardSession::new();
    let mut form = FormInput::default();

    match load_draft(&store) {
        Ok(Some(draft)) => {
            display_draft(&draft);
            if prompt_yes_no("Found a saved draft. Would you like to load it?", true)? {
                form = FormInput::from_profile(&draft.profile);
                session.restore(draft.profile);
                println!("Draft loaded successfully!");
            }
        }
        Ok(None) => {}
        Err(e) => warn!(error = %e, "ignoring unreadable draft"),
    }

    loop {
        display_step_header(&session);

        match prompt_step_action(&session)? {
            StepAction::Continue => {
                collect_step(&session, &mut form)?;

                match session.next(&form) {
                    Ok(Transition::Advanced { advisories, .. }) => {
                        display_advisories(&advisories);
                        if let Some(reading) = session.bmi() {
                            println!("BMI: {:.1} ({})", reading.rounded(), reading.category);
                        }
                    }
                    Ok(Transition::Submitted {
                        request,
                        advisories,
                    }) => {
                        display_advisories(&advisories);
                        let result = run_generation(config, request);
                        match session.complete(result) {
                            Ok(plan) => {
                                display_meal_plan(plan);
                                println!("Your personalized meal plan has been generated!");
                                export_plan(config, plan)?;
                                return Ok(());
                            }
                            Err(PlannerError::Cancelled) => {
                                println!("Meal plan generation cancelled.");
                            }
                            Err(e) => return Err(e),
                        }
                    }
                    Err(PlannerError::InvalidInput(report)) => display_report(&report),
                    Err(e) => return Err(e),
                }
            }
            StepAction::Back => {
                session.prev();
            }
            StepAction::JumpTo(step) => {
                session.go_to(step);
            }
            StepAction::FillSample => {
                let sample = FormInput::sample();
                for field in HEALTH_FIELDS {
                    if let Some(value) = sample.raw(field) {
                        form.set(field, value);
                    }
                }
                display_indicators(&live_indicators(&form));
                println!("Sample data filled! You can modify the values as needed.");
            }
            StepAction::SaveDraft => {
                save_draft(&mut store, session.profile())?;
                println!("Progress saved as draft in {}", store.path().display());
            }
            StepAction::Clear => {
                if prompt_yes_no("Are you sure you want to clear all form data?", false)? {
                    session.reset();
                    form = FormInput::default();
                    println!("Form cleared successfully!");
                }
            }
            StepAction::Quit => return Ok(()),
        }
    }
}

/// Prompt for the fields belonging to the current step.
fn collect_step(session: &WizardSession, form: &mut FormInput) -> Result<()> {
    match session.current_step() {
        1 => collect_health_form(form),
        2 => collect_preferences_form(form),
        step if step == session.total_steps() => {
            println!("Review your answers before generating:");
            let meals: Vec<&str> = session
                .profile()
                .planned_meal_types()
                .iter()
                .map(|m| m.label())
                .collect();
            println!("  Meals: {}", meals.join(", "));
            if let Some(cuisine) = &session.profile().preferences.cuisine {
                println!("  Cuisine: {}", Cuisine::resolve(cuisine));
            }
            if let Some(reading) = session.bmi() {
                println!("  BMI: {:.1} ({})", reading.rounded(), reading.category);
            }
            Ok(())
        }
        step if !session.step_is_checked(step) => {
            println!("Nothing to fill in on this step yet.");
            Ok(())
        }
        _ => Ok(()),
    }
}

/// Run the delayed generation; Ctrl-C aborts it.
fn run_generation(config: &PlannerConfig, request: GenerationRequest) -> Result<GeneratedPlan> {
    let generator = PlanGenerator::from_config(config);
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    println!("Generating your meal plan... (Ctrl-C to cancel)");
    runtime.block_on(async {
        tokio::select! {
            result = generator.generate(request) => result,
            _ = tokio::signal::ctrl_c() => Err(PlannerError::Cancelled),
        }
    })
}

fn export_plan(config: &PlannerConfig, plan: &GeneratedPlan) -> Result<()> {
    if let Some(path) = &config.export_path {
        write_plan_csv(plan, path)?;
        println!("Plan exported to {}", path.display());
    }
    Ok(())
}

/// Calculate BMI from command-line values.
fn cmd_bmi(weight: &str, height: &str) -> Result<()> {
    let mut report = ValidationReport::new();
    let weight = parse_measurement(weight);
    let height = parse_measurement(height);
    if weight.is_none() {
        report.push(Field::Weight, ViolationKind::NotANumber);
    }
    if height.is_none() {
        report.push(Field::Height, ViolationKind::NotANumber);
    }

    let (Some(weight), Some(height)) = (weight, height) else {
        return Err(PlannerError::InvalidInput(report));
    };

    let reading = bmi_reading(weight, height)?;
    display_bmi(&reading, &category_guidance(reading.category));
    Ok(())
}

/// Show suggestions for a cuisine or category.
fn cmd_suggest(cuisine: Option<&str>, category: Option<&str>) -> Result<()> {
    if let Some(name) = category {
        let Some(category) = BmiCategory::parse(name) else {
            println!("Unknown category '{}'.", name);
            println!("Choose one of: underweight, normal, overweight, obese");
            return Ok(());
        };
        let suggestions = suggest_meals(SuggestionKey::Category(category));
        display_suggestions(&format!("Suggestions for {}", category), &suggestions);
        return Ok(());
    }

    let name = cuisine.unwrap_or(Cuisine::NoPreference.label());
    if let Some(guess) = closest_cuisine(name) {
        println!("No menu for '{}'. Did you mean '{}'?", name, guess);
    }
    let resolved = Cuisine::resolve(name);
    let suggestions = suggest_meals(SuggestionKey::Cuisine(name));
    display_suggestions(&format!("{} Suggestions", resolved), &suggestions);
    Ok(())
}

/// Inspect or remove the saved draft.
fn cmd_draft(config: &PlannerConfig, action: DraftAction) -> Result<()> {
    let mut store = FileStore::new(&config.store_path);

    match action {
        DraftAction::Show => match load_draft(&store)? {
            Some(draft) => display_draft(&draft),
            None => println!("No saved draft."),
        },
        DraftAction::Clear => {
            clear_draft(&mut store)?;
            println!("Draft cleared.");
        }
    }

    Ok(())
}
