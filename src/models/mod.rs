pub mod form;
pub mod health;
pub mod meal;
pub mod plan;
pub mod profile;

pub use form::{Field, FormInput, ValidationReport, Violation, ViolationKind, parse_measurement};
pub use health::{
    Advisory, BloodPressure, BmiCategory, BmiReading, HealthIndicators, PressureBand, SugarBand,
};
pub use meal::{Cuisine, DietaryRestriction, MealType};
pub use plan::{CategoryGuidance, DayPlan, GeneratedPlan};
pub use profile::{HealthBlock, PreferenceBlock, UserProfile};
