pub mod export;
pub mod prompts;
pub mod render;

pub use export::write_plan_csv;
pub use prompts::{
    StepAction, collect_health_form, collect_preferences_form, prompt_field, prompt_step_action,
    prompt_yes_no,
};
pub use render::{
    display_advisories, display_bmi, display_draft, display_indicators, display_meal_plan,
    display_report, display_step_header, display_suggestions,
};
