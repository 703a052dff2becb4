use serde::Serialize;

use crate::models::{BmiCategory, Cuisine, MealType};

/// Canned dishes per meal slot.
///
/// Category tables carry no snacks; cuisine tables do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MealSuggestions {
    pub breakfast: &'static [&'static str],
    pub lunch: &'static [&'static str],
    pub dinner: &'static [&'static str],
    pub snacks: &'static [&'static str],
}

impl MealSuggestions {
    pub fn for_meal(&self, meal: MealType) -> &'static [&'static str] {
        match meal {
            MealType::Breakfast => self.breakfast,
            MealType::Lunch => self.lunch,
            MealType::Dinner => self.dinner,
            MealType::Snacks => self.snacks,
        }
    }
}

/// What to look suggestions up by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestionKey<'a> {
    Category(BmiCategory),
    /// Free-form cuisine name; unknown names use the "No Preference" table.
    Cuisine(&'a str),
}

/// Look up the suggestion table for a key. Never fails.
pub fn suggest_meals(key: SuggestionKey<'_>) -> MealSuggestions {
    match key {
        SuggestionKey::Category(category) => meals_for_category(category),
        SuggestionKey::Cuisine(name) => meals_for_cuisine(Cuisine::resolve(name)),
    }
}

pub fn meals_for_category(category: BmiCategory) -> MealSuggestions {
    match category {
        BmiCategory::Underweight => UNDERWEIGHT,
        BmiCategory::Normal => NORMAL,
        BmiCategory::Overweight | BmiCategory::Obese => WEIGHT_LOSS,
    }
}

pub fn meals_for_cuisine(cuisine: Cuisine) -> MealSuggestions {
    match cuisine {
        Cuisine::Mediterranean => MEDITERRANEAN,
        Cuisine::Asian => ASIAN,
        Cuisine::Mexican => MEXICAN,
        Cuisine::Italian => ITALIAN,
        Cuisine::NoPreference => NO_PREFERENCE,
    }
}

/// Closest known cuisine to a misspelt name, for "did you mean" hints.
pub fn closest_cuisine(name: &str) -> Option<Cuisine> {
    let wanted = name.trim().to_lowercase();
    if wanted.is_empty() || Cuisine::lookup(&wanted).is_some() {
        return None;
    }

    Cuisine::ALL
        .into_iter()
        .map(|c| (c, strsim::jaro_winkler(&c.label().to_lowercase(), &wanted)))
        .filter(|(_, score)| *score > 0.8)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(c, _)| c)
}

const NO_SNACKS: &[&str] = &[];

const UNDERWEIGHT: MealSuggestions = MealSuggestions {
    breakfast: &[
        "Oatmeal with nuts and fruits",
        "Whole grain toast with avocado",
        "Protein smoothie with banana",
    ],
    lunch: &[
        "Quinoa bowl with grilled chicken",
        "Pasta with lean meat sauce",
        "Rice with lentils and vegetables",
    ],
    dinner: &[
        "Salmon with sweet potato",
        "Chicken curry with brown rice",
        "Lean beef with quinoa",
    ],
    snacks: NO_SNACKS,
};

const NORMAL: MealSuggestions = MealSuggestions {
    breakfast: &[
        "Greek yogurt with berries",
        "Eggs with whole grain toast",
        "Smoothie bowl with granola",
    ],
    lunch: &[
        "Grilled chicken salad",
        "Quinoa and vegetable bowl",
        "Turkey and avocado wrap",
    ],
    dinner: &[
        "Baked fish with vegetables",
        "Lean meat with brown rice",
        "Tofu stir-fry with quinoa",
    ],
    snacks: NO_SNACKS,
};

const WEIGHT_LOSS: MealSuggestions = MealSuggestions {
    breakfast: &[
        "Vegetable omelet (2 eggs)",
        "Greek yogurt with berries",
        "Green smoothie with protein",
    ],
    lunch: &[
        "Large mixed green salad",
        "Grilled chicken with vegetables",
        "Lentil soup with side salad",
    ],
    dinner: &[
        "Steamed fish with broccoli",
        "Grilled chicken breast",
        "Vegetable curry with cauliflower rice",
    ],
    snacks: NO_SNACKS,
};

const MEDITERRANEAN: MealSuggestions = MealSuggestions {
    breakfast: &[
        "Greek yogurt with honey and nuts",
        "Whole grain toast with olive oil",
        "Mediterranean omelet",
    ],
    lunch: &[
        "Greek salad with grilled chicken",
        "Hummus and vegetable wrap",
        "Lentil soup with whole grain bread",
    ],
    dinner: &[
        "Grilled fish with roasted vegetables",
        "Chicken souvlaki with quinoa",
        "Mediterranean pasta with vegetables",
    ],
    snacks: &["Mixed nuts", "Greek yogurt", "Fresh fruit"],
};

const ASIAN: MealSuggestions = MealSuggestions {
    breakfast: &[
        "Congee with vegetables",
        "Miso soup with tofu",
        "Green tea and rice cakes",
    ],
    lunch: &[
        "Stir-fried vegetables with brown rice",
        "Miso glazed salmon",
        "Vegetable sushi rolls",
    ],
    dinner: &[
        "Steamed fish with ginger",
        "Vegetable curry with brown rice",
        "Grilled chicken teriyaki",
    ],
    snacks: &["Edamame", "Green tea", "Seaweed snacks"],
};

const MEXICAN: MealSuggestions = MealSuggestions {
    breakfast: &[
        "Scrambled eggs with black beans and avocado",
        "Huevos rancheros on corn tortillas",
        "Chia pudding with mango",
    ],
    lunch: &[
        "Chicken and vegetable burrito bowl",
        "Black bean soup",
        "Shrimp fajita salad",
    ],
    dinner: &[
        "Grilled fish tacos with cabbage slaw",
        "Chicken enchiladas with salsa verde",
        "Stuffed bell peppers",
    ],
    snacks: &["Guacamole with vegetable sticks", "Roasted pepitas", "Jicama with lime"],
};

const ITALIAN: MealSuggestions = MealSuggestions {
    breakfast: &[
        "Whole grain toast with ricotta and fresh tomatoes",
        "Frittata with spinach",
        "Yogurt with almonds and figs",
    ],
    lunch: &[
        "Caprese salad with grilled chicken",
        "Minestrone soup",
        "Whole wheat pasta with pesto",
    ],
    dinner: &[
        "Zucchini noodles with turkey meatballs",
        "Baked cod with cherry tomatoes",
        "Chicken cacciatore",
    ],
    snacks: &["Olives", "Fresh mozzarella", "Biscotti with espresso"],
};

const NO_PREFERENCE: MealSuggestions = MealSuggestions {
    breakfast: &[
        "Oatmeal with fresh fruits",
        "Scrambled eggs with vegetables",
        "Whole grain cereal",
    ],
    lunch: &[
        "Grilled chicken salad",
        "Quinoa bowl with vegetables",
        "Turkey and avocado wrap",
    ],
    dinner: &[
        "Baked salmon with sweet potato",
        "Lean beef stir-fry",
        "Vegetable pasta",
    ],
    snacks: &[
        "Apple slices with almond butter",
        "Greek yogurt",
        "Handful of nuts",
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_cuisine_falls_back() {
        assert_eq!(
            suggest_meals(SuggestionKey::Cuisine("Nonexistent-Cuisine")),
            suggest_meals(SuggestionKey::Cuisine("No Preference"))
        );
    }

    #[test]
    fn test_every_category_has_three_slots() {
        for category in BmiCategory::ALL {
            let meals = suggest_meals(SuggestionKey::Category(category));
            assert!(!meals.breakfast.is_empty());
            assert!(!meals.lunch.is_empty());
            assert!(!meals.dinner.is_empty());
            assert!(meals.snacks.is_empty());
        }
    }

    #[test]
    fn test_overweight_and_obese_share_table() {
        assert_eq!(
            meals_for_category(BmiCategory::Overweight),
            meals_for_category(BmiCategory::Obese)
        );
    }

    #[test]
    fn test_every_cuisine_has_snacks() {
        for cuisine in Cuisine::ALL {
            assert!(!meals_for_cuisine(cuisine).snacks.is_empty());
        }
    }

    #[test]
    fn test_closest_cuisine() {
        assert_eq!(closest_cuisine("Meditteranean"), Some(Cuisine::Mediterranean));
        assert_eq!(closest_cuisine("Italain"), Some(Cuisine::Italian));
        assert_eq!(closest_cuisine("Asian"), None);
        assert_eq!(closest_cuisine("xyzzy"), None);
    }
}
