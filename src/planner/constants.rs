use crate::models::{BmiCategory, CategoryGuidance};

// ─────────────────────────────────────────────────────────────────────────────
// BMI bands
// ─────────────────────────────────────────────────────────────────────────────

/// Lower bound of the normal band.
pub const BMI_NORMAL_MIN: f64 = 18.5;

/// Lower bound of the overweight band.
pub const BMI_OVERWEIGHT_MIN: f64 = 25.0;

/// Lower bound of the obese band.
pub const BMI_OBESE_MIN: f64 = 30.0;

// ─────────────────────────────────────────────────────────────────────────────
// Health step input ranges (inclusive)
// ─────────────────────────────────────────────────────────────────────────────

pub const WEIGHT_RANGE_KG: (f64, f64) = (30.0, 200.0);
pub const HEIGHT_RANGE_CM: (f64, f64) = (100.0, 250.0);
pub const BLOOD_SUGAR_RANGE: (f64, f64) = (70.0, 400.0);

// ─────────────────────────────────────────────────────────────────────────────
// Indicator bands
// ─────────────────────────────────────────────────────────────────────────────

/// Blood sugar below this is normal.
pub const SUGAR_NORMAL_BELOW: f64 = 100.0;

/// Blood sugar below this (and not normal) is a warning; above is danger.
pub const SUGAR_WARNING_BELOW: f64 = 140.0;

/// Normal pressure: both readings at or below these.
pub const BP_NORMAL_MAX: (f64, f64) = (120.0, 80.0);

/// Elevated pressure: both readings at or below these.
pub const BP_ELEVATED_MAX: (f64, f64) = (139.0, 89.0);

// ─────────────────────────────────────────────────────────────────────────────
// Health score
// ─────────────────────────────────────────────────────────────────────────────

pub const HEALTH_SCORE_MAX: i32 = 100;
pub const MAJOR_PENALTY: i32 = 20;
pub const MINOR_PENALTY: i32 = 10;

/// Blood sugar above this costs a minor penalty.
pub const SUGAR_MINOR_ABOVE: f64 = 100.0;

/// Blood sugar above this costs a major penalty.
pub const SUGAR_MAJOR_ABOVE: f64 = 140.0;

/// Pressure above either reading costs a minor penalty.
pub const BP_MINOR_ABOVE: (f64, f64) = (120.0, 80.0);

/// Pressure above either reading costs a major penalty.
pub const BP_MAJOR_ABOVE: (f64, f64) = (140.0, 90.0);

pub const ADVICE_PORTION_CONTROL: &str = "Focus on portion control and low-calorie options";
pub const ADVICE_LOW_GLYCEMIC: &str = "Choose low-glycemic index foods";
pub const ADVICE_REDUCE_SODIUM: &str = "Reduce sodium intake";

// ─────────────────────────────────────────────────────────────────────────────
// Plan shape
// ─────────────────────────────────────────────────────────────────────────────

pub const DEFAULT_PLAN_DAYS: usize = 7;

/// Artificial "thinking" time before a plan is shown.
pub const DEFAULT_GENERATION_DELAY_MS: u64 = 2000;

/// Name of the key-value record holding the saved draft.
pub const DRAFT_KEY: &str = "mealPlannerDraft";

// ─────────────────────────────────────────────────────────────────────────────
// Static guidance content
// ─────────────────────────────────────────────────────────────────────────────

const UNDERWEIGHT_TARGETS: &[&str] = &[
    "Calories: 2200-2500",
    "Protein: 1.2-1.6g per kg body weight",
    "Carbs: 45-65% of total calories",
    "Fats: 20-35% of total calories",
];

const NORMAL_TARGETS: &[&str] = &[
    "Calories: 1800-2200",
    "Protein: 1.0-1.2g per kg body weight",
    "Carbs: 45-65% of total calories",
    "Fats: 20-35% of total calories",
];

const REDUCED_TARGETS: &[&str] = &[
    "Calories: 1200-1800",
    "Protein: 1.2-1.5g per kg body weight",
    "Carbs: 40-50% of total calories",
    "Fats: 20-30% of total calories",
];

const UNDERWEIGHT_SHOPPING: &[&str] = &[
    "Oats",
    "Mixed nuts",
    "Bananas",
    "Avocados",
    "Whole grain bread",
    "Quinoa",
    "Chicken breast",
    "Pasta",
    "Lean ground meat",
    "Salmon",
    "Sweet potatoes",
    "Brown rice",
    "Lentils",
];

const NORMAL_SHOPPING: &[&str] = &[
    "Greek yogurt",
    "Mixed berries",
    "Eggs",
    "Whole grain bread",
    "Quinoa",
    "Mixed vegetables",
    "Turkey slices",
    "Fish fillets",
    "Brown rice",
    "Tofu",
    "Lean meat",
];

const REDUCED_SHOPPING: &[&str] = &[
    "Eggs",
    "Greek yogurt",
    "Mixed berries",
    "Leafy greens",
    "Chicken breast",
    "Mixed vegetables",
    "Lentils",
    "Fish fillets",
    "Broccoli",
    "Cauliflower",
    "Bell peppers",
    "Cucumber",
];

/// Goal, daily targets and shopping list for a category.
pub fn category_guidance(category: BmiCategory) -> CategoryGuidance {
    match category {
        BmiCategory::Underweight => CategoryGuidance {
            goal: "Focus on healthy weight gain with nutrient-rich foods",
            daily_targets: UNDERWEIGHT_TARGETS,
            shopping_list: UNDERWEIGHT_SHOPPING,
        },
        BmiCategory::Normal => CategoryGuidance {
            goal: "Maintain current weight with balanced nutrition",
            daily_targets: NORMAL_TARGETS,
            shopping_list: NORMAL_SHOPPING,
        },
        BmiCategory::Overweight => CategoryGuidance {
            goal: "Gradual weight loss with portion control",
            daily_targets: REDUCED_TARGETS,
            shopping_list: REDUCED_SHOPPING,
        },
        BmiCategory::Obese => CategoryGuidance {
            goal: "Structured weight loss with professional guidance",
            daily_targets: REDUCED_TARGETS,
            shopping_list: REDUCED_SHOPPING,
        },
    }
}

/// Shopping advice for a weekly budget in dollars.
pub fn budget_tip(budget: f64) -> &'static str {
    if budget < 50.0 {
        "Focus on affordable proteins like eggs, beans, and chicken. Buy seasonal vegetables for better prices."
    } else if budget < 100.0 {
        "You have flexibility for variety including fish, lean meats, and diverse vegetables."
    } else {
        "Consider organic options and premium ingredients for optimal nutrition."
    }
}
