use std::collections::BTreeSet;

use crate::models::{
    Advisory, BmiReading, CategoryGuidance, DietaryRestriction, GeneratedPlan, HealthIndicators,
    ValidationReport,
};
use crate::planner::suggestions::MealSuggestions;
use crate::state::Draft;
use crate::wizard::WizardSession;

/// Display the step indicator, e.g. `[✓ Health] [● Preferences] [ Goals] ...`.
pub fn display_step_header(session: &WizardSession) {
    let current = session.current_step();
    let markers: Vec<String> = (1..=session.total_steps())
        .map(|n| {
            let mark = if n < current {
                "✓"
            } else if n == current {
                "●"
            } else {
                " "
            };
            format!("[{} {}]", mark, session.step_title(n).unwrap_or(""))
        })
        .collect();

    println!();
    println!("{}", markers.join(" "));
    println!(
        "=== Step {} of {}: {} ===",
        current,
        session.total_steps(),
        session.step_title(current).unwrap_or("")
    );
}

/// Display whatever live indicators are available.
pub fn display_indicators(indicators: &HealthIndicators) {
    if let Some(reading) = indicators.bmi {
        println!("  BMI: {:.1} ({})", reading.rounded(), reading.category);
    }
    if let Some(band) = indicators.sugar {
        println!("  Blood sugar: {}", band.label());
    }
    if let Some(band) = indicators.pressure {
        println!("  Blood pressure: {}", band.label());
    }
}

/// Display every violation of a failed step.
pub fn display_report(report: &ValidationReport) {
    println!();
    println!("Please fix the following errors:");
    for violation in report.violations() {
        println!("  • {}", violation);
    }
    println!();
}

pub fn display_advisories(advisories: &[Advisory]) {
    for advisory in advisories {
        println!("⚠ {}", advisory);
    }
}

/// Display a BMI reading together with its category guidance.
pub fn display_bmi(reading: &BmiReading, guidance: &CategoryGuidance) {
    println!();
    println!("Your BMI is {:.1} ({})", reading.rounded(), reading.category);
    println!("Goal: {}", guidance.goal);
    display_guidance_lists(guidance);
}

fn display_guidance_lists(guidance: &CategoryGuidance) {
    println!();
    println!("--- Daily Nutrition Targets ---");
    for target in guidance.daily_targets {
        println!("  {}", target);
    }
    println!();
    println!("--- Shopping List ---");
    println!("  {}", guidance.shopping_list.join(", "));
    println!();
}

/// Display a suggestion table.
pub fn display_suggestions(title: &str, suggestions: &MealSuggestions) {
    println!();
    println!("=== {} ===", title);
    for (label, dishes) in [
        ("Breakfast", suggestions.breakfast),
        ("Lunch", suggestions.lunch),
        ("Dinner", suggestions.dinner),
        ("Snacks", suggestions.snacks),
    ] {
        if dishes.is_empty() {
            continue;
        }
        println!("{}:", label);
        for dish in dishes {
            println!("  • {}", dish);
        }
    }
    println!();
}

/// Display a generated plan.
pub fn display_meal_plan(plan: &GeneratedPlan) {
    println!();
    println!("=== Your Personalized {}-Day Meal Plan ===", plan.days.len());
    println!();
    let reading = plan.reading();
    println!("BMI: {:.1} ({})", reading.rounded(), reading.category);
    println!("Health score: {}/100", plan.health_score);
    if let Some(cuisine) = plan.cuisine {
        println!("Cuisine: {}", cuisine);
    }
    if !plan.restrictions.is_empty() {
        println!("Dietary focus: {}", restriction_labels(&plan.restrictions));
    }
    if let Some(minutes) = plan.max_cooking_minutes {
        println!("Max cooking time: {} min", minutes);
    }

    println!();
    println!("--- Recommendations ---");
    if plan.recommendations.is_empty() {
        println!("  General healthy eating");
    }
    for advice in &plan.recommendations {
        println!("  • {}", advice);
    }

    let width = plan
        .days
        .iter()
        .flat_map(|d| d.meals.keys())
        .map(|m| m.label().len())
        .max()
        .unwrap_or(9);

    for day in &plan.days {
        println!();
        println!("{}:", day.day);
        for (meal, dish) in &day.meals {
            println!("  {:<width$}  {}", meal.label(), dish, width = width);
        }
    }

    println!();
    println!("Goal: {}", plan.guidance.goal);
    display_guidance_lists(&plan.guidance);

    if let Some(tip) = plan.budget_tip {
        println!("Budget tip: {}", tip);
        println!();
    }
}

/// Display a saved draft.
pub fn display_draft(draft: &Draft) {
    println!();
    println!("=== Draft saved {} ===", draft.timestamp.format("%Y-%m-%d %H:%M:%S UTC"));

    match &draft.profile.health {
        Some(health) => {
            println!("Weight: {} kg, height: {} cm", health.weight_kg, health.height_cm);
            println!(
                "Blood sugar: {} mg/dL, blood pressure: {}",
                health.blood_sugar, health.blood_pressure
            );
            if !health.dietary_restrictions.is_empty() {
                println!(
                    "Restrictions: {}",
                    restriction_labels(&health.dietary_restrictions)
                );
            }
        }
        None => println!("Health information: (not yet completed)"),
    }

    let prefs = &draft.profile.preferences;
    if let Some(budget) = prefs.budget {
        println!("Budget: ${}/week", budget);
    }
    if let Some(cuisine) = &prefs.cuisine {
        println!("Cuisine: {}", cuisine);
    }
    if let Some(minutes) = prefs.cooking_time_minutes {
        println!("Max cooking time: {} min", minutes);
    }
    if !prefs.meal_types.is_empty() {
        let names: Vec<&str> = prefs.meal_types.iter().map(|m| m.label()).collect();
        println!("Meals: {}", names.join(", "));
    }
    println!();
}

fn restriction_labels(restrictions: &BTreeSet<DietaryRestriction>) -> String {
    let names: Vec<&str> = restrictions.iter().map(|r| r.label()).collect();
    names.join(", ")
}
