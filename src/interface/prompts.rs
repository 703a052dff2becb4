use dialoguer::{Confirm, Input, MultiSelect, Select};

use crate::error::Result;
use crate::interface::render::display_indicators;
use crate::models::{Cuisine, DietaryRestriction, Field, FormInput, MealType};
use crate::planner::calculations::live_indicators;
use crate::planner::suggestions::closest_cuisine;
use crate::wizard::WizardSession;

/// What the user wants to do on the current step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepAction {
    Continue,
    Back,
    JumpTo(usize),
    FillSample,
    SaveDraft,
    Clear,
    Quit,
}

/// Prompt for a free-form field, keeping the current value on Enter.
pub fn prompt_field(form: &mut FormInput, field: Field) -> Result<()> {
    let label = if field.unit().is_empty() {
        capitalize(field.label())
    } else {
        format!("{} ({})", capitalize(field.label()), field.unit())
    };

    let mut input = Input::<String>::new().with_prompt(label).allow_empty(true);
    if let Some(current) = form.raw(field) {
        input = input.default(current.to_string());
    }
    let value = input.interact_text()?;
    form.set(field, value.trim().to_string());
    Ok(())
}

/// Collect the health step, showing live indicators as values come in.
pub fn collect_health_form(form: &mut FormInput) -> Result<()> {
    prompt_field(form, Field::Weight)?;
    prompt_field(form, Field::Height)?;
    display_indicators(&live_indicators(form));

    prompt_field(form, Field::BloodSugar)?;
    prompt_field(form, Field::BpSystolic)?;
    prompt_field(form, Field::BpDiastolic)?;
    display_indicators(&live_indicators(form));

    let labels: Vec<&str> = DietaryRestriction::ALL.iter().map(|r| r.label()).collect();
    let checked: Vec<bool> = DietaryRestriction::ALL
        .iter()
        .map(|r| form.dietary_restrictions.contains(r))
        .collect();
    let picked = MultiSelect::new()
        .with_prompt("Dietary restrictions (space to toggle, enter to confirm)")
        .items(&labels)
        .defaults(&checked)
        .interact()?;
    form.dietary_restrictions = picked.into_iter().map(|i| DietaryRestriction::ALL[i]).collect();

    Ok(())
}

/// Collect the preferences step.
pub fn collect_preferences_form(form: &mut FormInput) -> Result<()> {
    prompt_field(form, Field::Budget)?;
    prompt_cuisine(form)?;
    prompt_field(form, Field::CookingTime)?;

    let labels: Vec<&str> = MealType::ALL.iter().map(|m| m.label()).collect();
    let checked: Vec<bool> = MealType::ALL
        .iter()
        .map(|m| form.meal_types.contains(m))
        .collect();
    let picked = MultiSelect::new()
        .with_prompt("Meals to plan (none selected plans breakfast, lunch and dinner)")
        .items(&labels)
        .defaults(&checked)
        .interact()?;
    form.meal_types = picked.into_iter().map(|i| MealType::ALL[i]).collect();

    Ok(())
}

fn prompt_cuisine(form: &mut FormInput) -> Result<()> {
    let mut options: Vec<String> = Cuisine::ALL.iter().map(|c| c.label().to_string()).collect();
    options.push("Other...".to_string());

    let default = form
        .raw(Field::Cuisine)
        .and_then(Cuisine::lookup)
        .and_then(|c| Cuisine::ALL.iter().position(|x| *x == c))
        .unwrap_or(Cuisine::ALL.len() - 1);

    let selection = Select::new()
        .with_prompt("Cuisine")
        .items(&options)
        .default(default)
        .interact()?;

    if selection < Cuisine::ALL.len() {
        form.set(Field::Cuisine, Cuisine::ALL[selection].label());
        return Ok(());
    }

    let typed: String = Input::new()
        .with_prompt("Cuisine name")
        .allow_empty(true)
        .interact_text()?;
    let typed = typed.trim();

    if let Some(guess) = closest_cuisine(typed) {
        let accept = prompt_yes_no(&format!("Did you mean '{}'?", guess), true)?;
        if accept {
            form.set(Field::Cuisine, guess.label());
            return Ok(());
        }
    }
    if Cuisine::lookup(typed).is_none() && !typed.is_empty() {
        println!(
            "No dedicated menu for '{}'; using {} suggestions.",
            typed,
            Cuisine::NoPreference
        );
    }
    form.set(Field::Cuisine, typed.to_string());
    Ok(())
}

/// Ask what to do on the current step.
pub fn prompt_step_action(session: &WizardSession) -> Result<StepAction> {
    let step = session.current_step();
    let mut actions = Vec::new();

    let continue_label = if session.is_last_step() {
        "Generate meal plan"
    } else {
        "Fill in and continue"
    };
    actions.push((continue_label.to_string(), StepAction::Continue));
    if step > 1 {
        actions.push(("Back".to_string(), StepAction::Back));
        actions.push(("Jump to an earlier step".to_string(), StepAction::JumpTo(0)));
    }
    if step == 1 {
        actions.push(("Fill sample data".to_string(), StepAction::FillSample));
    }
    actions.push(("Save as draft".to_string(), StepAction::SaveDraft));
    actions.push(("Clear form".to_string(), StepAction::Clear));
    actions.push(("Quit".to_string(), StepAction::Quit));

    let labels: Vec<&str> = actions.iter().map(|(l, _)| l.as_str()).collect();
    let selection = Select::new()
        .with_prompt("What next?")
        .items(&labels)
        .default(0)
        .interact()?;

    match actions[selection].1 {
        StepAction::JumpTo(_) => {
            let titles: Vec<String> = (1..=step)
                .map(|n| format!("{}. {}", n, session.step_title(n).unwrap_or("")))
                .collect();
            let target = Select::new()
                .with_prompt("Go to step")
                .items(&titles)
                .default(step - 1)
                .interact()?;
            Ok(StepAction::JumpTo(target + 1))
        }
        action => Ok(action),
    }
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("blood sugar"), "Blood sugar");
        assert_eq!(capitalize(""), "");
    }
}
