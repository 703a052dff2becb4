pub mod cli;
pub mod config;
pub mod error;
pub mod interface;
pub mod models;
pub mod planner;
pub mod state;
pub mod wizard;

pub use config::PlannerConfig;
pub use error::{PlannerError, Result};
pub use models::{GeneratedPlan, UserProfile};
pub use wizard::WizardSession;
