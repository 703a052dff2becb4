use std::fmt;

use serde::{Deserialize, Serialize};

/// A meal slot in a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snacks,
}

impl MealType {
    pub const ALL: [MealType; 4] = [
        MealType::Breakfast,
        MealType::Lunch,
        MealType::Dinner,
        MealType::Snacks,
    ];

    /// Slots planned when the user picked none.
    pub const DEFAULT_SELECTION: [MealType; 3] =
        [MealType::Breakfast, MealType::Lunch, MealType::Dinner];

    pub fn label(self) -> &'static str {
        match self {
            MealType::Breakfast => "Breakfast",
            MealType::Lunch => "Lunch",
            MealType::Dinner => "Dinner",
            MealType::Snacks => "Snacks",
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Dietary restriction toggles offered on the health step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DietaryRestriction {
    Vegetarian,
    Vegan,
    GlutenFree,
    DiabeticFriendly,
    LowSodium,
}

impl DietaryRestriction {
    pub const ALL: [DietaryRestriction; 5] = [
        DietaryRestriction::Vegetarian,
        DietaryRestriction::Vegan,
        DietaryRestriction::GlutenFree,
        DietaryRestriction::DiabeticFriendly,
        DietaryRestriction::LowSodium,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DietaryRestriction::Vegetarian => "Vegetarian",
            DietaryRestriction::Vegan => "Vegan",
            DietaryRestriction::GlutenFree => "Gluten-Free",
            DietaryRestriction::DiabeticFriendly => "Diabetic-Friendly",
            DietaryRestriction::LowSodium => "Low-Sodium",
        }
    }
}

impl fmt::Display for DietaryRestriction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Cuisine styles with their own suggestion table.
///
/// Free-form cuisine names from the form are resolved with [`Cuisine::resolve`],
/// which never fails: anything unrecognized becomes [`Cuisine::NoPreference`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cuisine {
    Mediterranean,
    Asian,
    Mexican,
    Italian,
    NoPreference,
}

impl Cuisine {
    pub const ALL: [Cuisine; 5] = [
        Cuisine::Mediterranean,
        Cuisine::Asian,
        Cuisine::Mexican,
        Cuisine::Italian,
        Cuisine::NoPreference,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Cuisine::Mediterranean => "Mediterranean",
            Cuisine::Asian => "Asian",
            Cuisine::Mexican => "Mexican",
            Cuisine::Italian => "Italian",
            Cuisine::NoPreference => "No Preference",
        }
    }

    /// Exact (case-insensitive, trimmed) match against the known cuisines.
    pub fn lookup(name: &str) -> Option<Cuisine> {
        let wanted = name.trim();
        Cuisine::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(wanted))
    }

    /// Resolve a cuisine name, falling back to `NoPreference`.
    pub fn resolve(name: &str) -> Cuisine {
        Cuisine::lookup(name).unwrap_or(Cuisine::NoPreference)
    }
}

impl Default for Cuisine {
    fn default() -> Self {
        Cuisine::NoPreference
    }
}

impl fmt::Display for Cuisine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cuisine_lookup_case_insensitive() {
        assert_eq!(Cuisine::lookup("asian"), Some(Cuisine::Asian));
        assert_eq!(Cuisine::lookup("  ITALIAN "), Some(Cuisine::Italian));
        assert_eq!(Cuisine::lookup("no preference"), Some(Cuisine::NoPreference));
        assert_eq!(Cuisine::lookup("Martian"), None);
    }

    #[test]
    fn test_cuisine_resolve_falls_back() {
        assert_eq!(Cuisine::resolve("Nonexistent-Cuisine"), Cuisine::NoPreference);
        assert_eq!(Cuisine::resolve(""), Cuisine::NoPreference);
        assert_eq!(Cuisine::resolve("Mexican"), Cuisine::Mexican);
    }

    #[test]
    fn test_meal_type_ordering() {
        let mut types = vec![MealType::Snacks, MealType::Breakfast, MealType::Dinner];
        types.sort();
        assert_eq!(
            types,
            vec![MealType::Breakfast, MealType::Dinner, MealType::Snacks]
        );
    }
}
