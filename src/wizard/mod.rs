mod session;
mod validation;

pub use session::{Phase, Transition, WizardSession, WizardStep, default_steps};
pub use validation::{HealthStep, PreferencesStep, StepValidator};
