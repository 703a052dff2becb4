pub mod assembly;
pub mod calculations;
pub mod constants;
pub mod generation;
pub mod suggestions;

pub use assembly::{assemble_plan, assemble_plan_with_rng};
pub use calculations::{
    assess, bmi_reading, classify, compute_bmi, health_score, live_indicators, pressure_band,
    recommendations, sugar_band,
};
pub use constants::*;
pub use generation::{
    CancelSignal, GenerationHandle, GenerationRequest, PlanGenerator, cancellation,
};
pub use suggestions::{
    MealSuggestions, SuggestionKey, closest_cuisine, meals_for_category, meals_for_cuisine,
    suggest_meals,
};
