use std::fmt;

use crate::models::{
    Advisory, BloodPressure, Field, FormInput, HealthBlock, PreferenceBlock, PressureBand,
    UserProfile, ValidationReport, ViolationKind,
};
use crate::planner::calculations::pressure_band;
use crate::planner::constants::{BLOOD_SUGAR_RANGE, HEIGHT_RANGE_CM, WEIGHT_RANGE_KG};

/// Checks one wizard step and, on success, records its answers.
///
/// Implementations must leave `profile` untouched when they return an error,
/// and must report every violation they find rather than stopping at the first.
pub trait StepValidator: fmt::Debug {
    fn apply(
        &self,
        form: &FormInput,
        profile: &mut UserProfile,
    ) -> Result<Vec<Advisory>, ValidationReport>;
}

/// Weight, height, blood sugar and blood pressure are all required.
#[derive(Debug, Default, Clone, Copy)]
pub struct HealthStep;

impl StepValidator for HealthStep {
    fn apply(
        &self,
        form: &FormInput,
        profile: &mut UserProfile,
    ) -> Result<Vec<Advisory>, ValidationReport> {
        let mut report = ValidationReport::new();

        let weight = form.require_number(Field::Weight, &mut report);
        let height = form.require_number(Field::Height, &mut report);
        let sugar = form.require_number(Field::BloodSugar, &mut report);
        let systolic = form.require_number(Field::BpSystolic, &mut report);
        let diastolic = form.require_number(Field::BpDiastolic, &mut report);

        check_range(Field::Weight, weight, WEIGHT_RANGE_KG, &mut report);
        check_range(Field::Height, height, HEIGHT_RANGE_CM, &mut report);
        check_range(Field::BloodSugar, sugar, BLOOD_SUGAR_RANGE, &mut report);
        check_positive(Field::BpSystolic, systolic, &mut report);
        check_positive(Field::BpDiastolic, diastolic, &mut report);

        if !report.is_empty() {
            return Err(report);
        }
        let (Some(weight_kg), Some(height_cm), Some(blood_sugar), Some(systolic), Some(diastolic)) =
            (weight, height, sugar, systolic, diastolic)
        else {
            return Err(report);
        };

        let blood_pressure = BloodPressure {
            systolic,
            diastolic,
        };
        let mut advisories = Vec::new();
        if pressure_band(blood_pressure) == PressureBand::High {
            advisories.push(Advisory::HighBloodPressure);
        }

        profile.health = Some(HealthBlock {
            weight_kg,
            height_cm,
            blood_sugar,
            blood_pressure,
            dietary_restrictions: form.dietary_restrictions.clone(),
        });

        Ok(advisories)
    }
}

/// Nothing is required; numeric answers that are given must make sense.
#[derive(Debug, Default, Clone, Copy)]
pub struct PreferencesStep;

impl StepValidator for PreferencesStep {
    fn apply(
        &self,
        form: &FormInput,
        profile: &mut UserProfile,
    ) -> Result<Vec<Advisory>, ValidationReport> {
        let mut report = ValidationReport::new();

        let budget = form.optional_number(Field::Budget, &mut report);
        let cooking_time = form.optional_number(Field::CookingTime, &mut report);
        check_non_negative(Field::Budget, budget, &mut report);
        check_non_negative(Field::CookingTime, cooking_time, &mut report);

        report.into_result()?;

        profile.preferences = PreferenceBlock {
            budget,
            cuisine: form.raw(Field::Cuisine).map(str::to_string),
            cooking_time_minutes: cooking_time,
            meal_types: form.meal_types.clone(),
        };

        Ok(Vec::new())
    }
}

fn check_range(
    field: Field,
    value: Option<f64>,
    (min, max): (f64, f64),
    report: &mut ValidationReport,
) {
    if let Some(v) = value
        && (v < min || v > max)
    {
        report.push(field, ViolationKind::OutOfRange { min, max });
    }
}

fn check_positive(field: Field, value: Option<f64>, report: &mut ValidationReport) {
    if let Some(v) = value
        && v <= 0.0
    {
        report.push(field, ViolationKind::NotPositive);
    }
}

fn check_non_negative(field: Field, value: Option<f64>, report: &mut ValidationReport) {
    if let Some(v) = value
        && v < 0.0
    {
        report.push(field, ViolationKind::Negative);
    }
}
