use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::models::health::BloodPressure;
use crate::models::meal::{DietaryRestriction, MealType};

/// Validated answers from the health step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthBlock {
    pub weight_kg: f64,
    pub height_cm: f64,
    /// Fasting blood sugar in mg/dL.
    pub blood_sugar: f64,
    pub blood_pressure: BloodPressure,
    #[serde(default)]
    pub dietary_restrictions: BTreeSet<DietaryRestriction>,
}

/// Answers from the preferences step. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferenceBlock {
    /// Weekly budget in dollars.
    pub budget: Option<f64>,
    /// Cuisine name as entered; resolved against the suggestion tables later.
    pub cuisine: Option<String>,
    pub cooking_time_minutes: Option<f64>,
    #[serde(default)]
    pub meal_types: BTreeSet<MealType>,
}

/// Everything the wizard has collected so far.
///
/// `health` stays `None` until the health step validates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub health: Option<HealthBlock>,
    #[serde(default)]
    pub preferences: PreferenceBlock,
}

impl UserProfile {
    pub fn is_empty(&self) -> bool {
        self.health.is_none() && self.preferences == PreferenceBlock::default()
    }

    /// Meal slots to plan, defaulting to breakfast, lunch and dinner.
    pub fn planned_meal_types(&self) -> Vec<MealType> {
        if self.preferences.meal_types.is_empty() {
            MealType::DEFAULT_SELECTION.to_vec()
        } else {
            self.preferences.meal_types.iter().copied().collect()
        }
    }
}
