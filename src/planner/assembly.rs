use std::collections::BTreeMap;

use chrono::Weekday;
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

use crate::error::{PlannerError, Result};
use crate::models::{Cuisine, DayPlan, GeneratedPlan, UserProfile};
use crate::planner::calculations::assess;
use crate::planner::constants::{budget_tip, category_guidance};
use crate::planner::suggestions::{MealSuggestions, meals_for_category, meals_for_cuisine};

/// Build a plan, rotating through each table in order.
///
/// Fails with `MissingData` if the health step never validated.
pub fn assemble_plan(profile: &UserProfile, days: usize) -> Result<GeneratedPlan> {
    build_plan(profile, days, |options, day| options[day % options.len()])
}

/// Build a plan, picking each dish at random.
pub fn assemble_plan_with_rng<R: Rng + ?Sized>(
    profile: &UserProfile,
    days: usize,
    rng: &mut R,
) -> Result<GeneratedPlan> {
    build_plan(profile, days, |options, _| {
        options.choose(&mut *rng).copied().unwrap_or(options[0])
    })
}

fn build_plan<F>(profile: &UserProfile, days: usize, mut pick: F) -> Result<GeneratedPlan>
where
    F: FnMut(&'static [&'static str], usize) -> &'static str,
{
    let health = profile.health.as_ref().ok_or_else(|| {
        PlannerError::MissingData("health information has not been validated".to_string())
    })?;

    let (reading, health_score, recommendations) = assess(health)?;

    let cuisine = profile.preferences.cuisine.as_deref().map(Cuisine::resolve);
    let table: MealSuggestions = match cuisine {
        Some(c) => meals_for_cuisine(c),
        None => meals_for_category(reading.category),
    };

    let meal_types = profile.planned_meal_types();
    let mut day = Weekday::Mon;
    let mut plan_days = Vec::with_capacity(days);

    for index in 0..days {
        let mut meals = BTreeMap::new();
        for &meal in &meal_types {
            let options = table.for_meal(meal);
            if options.is_empty() {
                continue;
            }
            meals.insert(meal, pick(options, index).to_string());
        }
        plan_days.push(DayPlan { day, meals });
        day = day.succ();
    }

    debug!(
        bmi = reading.bmi,
        score = health_score,
        days = plan_days.len(),
        "assembled meal plan"
    );

    Ok(GeneratedPlan {
        bmi: reading.bmi,
        category: reading.category,
        health_score,
        recommendations,
        cuisine,
        days: plan_days,
        guidance: category_guidance(reading.category),
        budget_tip: profile.preferences.budget.map(budget_tip),
        restrictions: health.dietary_restrictions.clone(),
        max_cooking_minutes: profile.preferences.cooking_time_minutes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BloodPressure, BmiCategory, DietaryRestriction, HealthBlock, MealType};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn profile() -> UserProfile {
        UserProfile {
            health: Some(HealthBlock {
                weight_kg: 70.0,
                height_cm: 170.0,
                blood_sugar: 95.0,
                blood_pressure: BloodPressure {
                    systolic: 120.0,
                    diastolic: 80.0,
                },
                dietary_restrictions: Default::default(),
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_missing_health_is_an_error() {
        let result = assemble_plan(&UserProfile::default(), 7);
        assert!(matches!(result, Err(PlannerError::MissingData(_))));
    }

    #[test]
    fn test_category_table_skips_snacks() {
        let mut p = profile();
        p.preferences.meal_types.insert(MealType::Breakfast);
        p.preferences.meal_types.insert(MealType::Snacks);

        let plan = assemble_plan(&p, 2).unwrap();
        assert_eq!(plan.cuisine, None);
        for day in &plan.days {
            assert_eq!(day.meals.len(), 1);
            assert!(day.meals.contains_key(&MealType::Breakfast));
        }
    }

    #[test]
    fn test_rotation_starts_monday() {
        let plan = assemble_plan(&profile(), 3).unwrap();
        let days: Vec<Weekday> = plan.days.iter().map(|d| d.day).collect();
        assert_eq!(days, vec![Weekday::Mon, Weekday::Tue, Weekday::Wed]);
        assert_ne!(
            plan.days[0].meals[&MealType::Lunch],
            plan.days[1].meals[&MealType::Lunch]
        );
    }

    #[test]
    fn test_random_picks_come_from_table() {
        let mut p = profile();
        p.preferences.cuisine = Some("Asian".to_string());
        let mut rng = StdRng::seed_from_u64(7);

        let plan = assemble_plan_with_rng(&p, 7, &mut rng).unwrap();
        let table = meals_for_cuisine(Cuisine::Asian);
        for day in &plan.days {
            for (meal, dish) in &day.meals {
                assert!(table.for_meal(*meal).contains(&dish.as_str()));
            }
        }
    }

    #[test]
    fn test_budget_tip_only_with_budget() {
        let mut p = profile();
        assert!(assemble_plan(&p, 1).unwrap().budget_tip.is_none());
        p.preferences.budget = Some(40.0);
        assert!(assemble_plan(&p, 1).unwrap().budget_tip.is_some());
    }

    #[test]
    fn test_plan_carries_restrictions_and_cooking_limit() {
        let mut p = profile();
        if let Some(health) = p.health.as_mut() {
            health.dietary_restrictions.insert(DietaryRestriction::Vegan);
            health.dietary_restrictions.insert(DietaryRestriction::LowSodium);
        }
        p.preferences.cooking_time_minutes = Some(30.0);

        let plan = assemble_plan(&p, 1).unwrap();
        let restrictions: Vec<DietaryRestriction> = plan.restrictions.iter().copied().collect();
        assert_eq!(
            restrictions,
            vec![DietaryRestriction::Vegan, DietaryRestriction::LowSodium]
        );
        assert_eq!(plan.max_cooking_minutes, Some(30.0));

        let reading = plan.reading();
        assert_eq!(reading.category, BmiCategory::Normal);
        assert_eq!(reading.rounded(), 24.2);
    }
}
