use std::collections::{BTreeMap, BTreeSet};

use chrono::Weekday;
use serde::Serialize;

use crate::models::health::{BmiCategory, BmiReading};
use crate::models::meal::{Cuisine, DietaryRestriction, MealType};

/// Static, per-category advice shown alongside a plan.
///
/// The daily targets are fixed text, not derived from the health score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CategoryGuidance {
    pub goal: &'static str,
    pub daily_targets: &'static [&'static str],
    pub shopping_list: &'static [&'static str],
}

/// Meals for one day, keyed by slot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayPlan {
    pub day: Weekday,
    pub meals: BTreeMap<MealType, String>,
}

/// The result of running the wizard to completion.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratedPlan {
    pub bmi: f64,
    pub category: BmiCategory,
    /// Heuristic in `[0, 100]`.
    pub health_score: u8,
    pub recommendations: Vec<String>,
    /// Cuisine whose table supplied the meals, `None` when keyed by category.
    pub cuisine: Option<Cuisine>,
    pub days: Vec<DayPlan>,
    pub guidance: CategoryGuidance,
    pub budget_tip: Option<&'static str>,
    /// Restrictions the dishes should respect, as entered on the health step.
    pub restrictions: BTreeSet<DietaryRestriction>,
    pub max_cooking_minutes: Option<f64>,
}

impl GeneratedPlan {
    pub fn reading(&self) -> BmiReading {
        BmiReading {
            bmi: self.bmi,
            category: self.category,
        }
    }

    /// Total number of planned dishes across all days.
    pub fn dish_count(&self) -> usize {
        self.days.iter().map(|d| d.meals.len()).sum()
    }
}
