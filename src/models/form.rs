use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

use crate::models::meal::{DietaryRestriction, MealType};
use crate::models::profile::UserProfile;

/// Named wizard input fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Field {
    Weight,
    Height,
    BloodSugar,
    BpSystolic,
    BpDiastolic,
    Budget,
    Cuisine,
    CookingTime,
}

impl Field {
    pub fn label(self) -> &'static str {
        match self {
            Field::Weight => "weight",
            Field::Height => "height",
            Field::BloodSugar => "blood sugar",
            Field::BpSystolic => "systolic blood pressure",
            Field::BpDiastolic => "diastolic blood pressure",
            Field::Budget => "budget",
            Field::Cuisine => "cuisine",
            Field::CookingTime => "cooking time",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            Field::Weight => "kg",
            Field::Height => "cm",
            Field::BloodSugar => "mg/dL",
            Field::BpSystolic | Field::BpDiastolic => "mmHg",
            Field::Budget => "$/week",
            Field::CookingTime => "min",
            Field::Cuisine => "",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// What is wrong with a single field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum ViolationKind {
    Missing,
    NotANumber,
    NotPositive,
    Negative,
    OutOfRange { min: f64, max: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Violation {
    pub field: Field,
    pub kind: ViolationKind,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let field = self.field;
        match self.kind {
            ViolationKind::Missing => write!(f, "{} is required", field),
            ViolationKind::NotANumber => write!(f, "{} must be a number", field),
            ViolationKind::NotPositive => write!(f, "{} must be greater than zero", field),
            ViolationKind::Negative => write!(f, "{} cannot be negative", field),
            ViolationKind::OutOfRange { min, max } => write!(
                f,
                "{} must be between {}-{} {}",
                field,
                min,
                max,
                field.unit()
            ),
        }
    }
}

/// Every violation found in one validation pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ValidationReport {
    violations: Vec<Violation>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: Field, kind: ViolationKind) {
        self.violations.push(Violation { field, kind });
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Whether any violation concerns `field`.
    pub fn mentions(&self, field: Field) -> bool {
        self.violations.iter().any(|v| v.field == field)
    }

    /// `Ok(())` when nothing was reported.
    pub fn into_result(self) -> std::result::Result<(), ValidationReport> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self.violations.iter().map(|v| v.to_string()).collect();
        write!(f, "please fix the following: {}", messages.join("; "))
    }
}

/// Raw values from the wizard's input fields.
///
/// Text fields are kept as typed; validators decide what they mean.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormInput {
    pub weight: Option<String>,
    pub height: Option<String>,
    pub blood_sugar: Option<String>,
    pub bp_systolic: Option<String>,
    pub bp_diastolic: Option<String>,
    pub budget: Option<String>,
    pub cuisine: Option<String>,
    pub cooking_time: Option<String>,
    pub dietary_restrictions: BTreeSet<DietaryRestriction>,
    pub meal_types: BTreeSet<MealType>,
}

impl FormInput {
    /// Trimmed value of a text field, `None` when blank.
    pub fn raw(&self, field: Field) -> Option<&str> {
        let value = match field {
            Field::Weight => &self.weight,
            Field::Height => &self.height,
            Field::BloodSugar => &self.blood_sugar,
            Field::BpSystolic => &self.bp_systolic,
            Field::BpDiastolic => &self.bp_diastolic,
            Field::Budget => &self.budget,
            Field::Cuisine => &self.cuisine,
            Field::CookingTime => &self.cooking_time,
        };
        value.as_deref().map(str::trim).filter(|v| !v.is_empty())
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = Some(value.into());
        match field {
            Field::Weight => self.weight = value,
            Field::Height => self.height = value,
            Field::BloodSugar => self.blood_sugar = value,
            Field::BpSystolic => self.bp_systolic = value,
            Field::BpDiastolic => self.bp_diastolic = value,
            Field::Budget => self.budget = value,
            Field::Cuisine => self.cuisine = value,
            Field::CookingTime => self.cooking_time = value,
        }
    }

    /// Parse a field as a finite number, `None` when blank or unparseable.
    pub fn number(&self, field: Field) -> Option<f64> {
        self.raw(field)
            .and_then(|v| v.parse::<f64>().ok())
            .filter(|v| v.is_finite())
    }

    /// Parse a required numeric field, recording a violation on failure.
    pub fn require_number(&self, field: Field, report: &mut ValidationReport) -> Option<f64> {
        match self.raw(field) {
            None => {
                report.push(field, ViolationKind::Missing);
                None
            }
            Some(raw) => match parse_measurement(raw) {
                Some(v) => Some(v),
                None => {
                    report.push(field, ViolationKind::NotANumber);
                    None
                }
            },
        }
    }

    /// Parse an optional numeric field, recording a violation only for bad text.
    pub fn optional_number(&self, field: Field, report: &mut ValidationReport) -> Option<f64> {
        let raw = self.raw(field)?;
        let parsed = parse_measurement(raw);
        if parsed.is_none() {
            report.push(field, ViolationKind::NotANumber);
        }
        parsed
    }

    /// The values behind the "fill sample data" button.
    pub fn sample() -> Self {
        let mut form = FormInput::default();
        form.set(Field::Weight, "70");
        form.set(Field::Height, "170");
        form.set(Field::BloodSugar, "95");
        form.set(Field::BpSystolic, "120");
        form.set(Field::BpDiastolic, "80");
        form
    }

    /// Pre-fill the form from previously collected answers.
    pub fn from_profile(profile: &UserProfile) -> Self {
        let mut form = FormInput::default();
        if let Some(health) = &profile.health {
            form.set(Field::Weight, health.weight_kg.to_string());
            form.set(Field::Height, health.height_cm.to_string());
            form.set(Field::BloodSugar, health.blood_sugar.to_string());
            form.set(Field::BpSystolic, health.blood_pressure.systolic.to_string());
            form.set(Field::BpDiastolic, health.blood_pressure.diastolic.to_string());
            form.dietary_restrictions = health.dietary_restrictions.clone();
        }
        let prefs = &profile.preferences;
        if let Some(budget) = prefs.budget {
            form.set(Field::Budget, budget.to_string());
        }
        if let Some(cuisine) = &prefs.cuisine {
            form.set(Field::Cuisine, cuisine.clone());
        }
        if let Some(minutes) = prefs.cooking_time_minutes {
            form.set(Field::CookingTime, minutes.to_string());
        }
        form.meal_types = prefs.meal_types.clone();
        form
    }
}

/// Parse a free-form numeric input. Rejects NaN and infinities.
pub fn parse_measurement(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_treats_blank_as_missing() {
        let mut form = FormInput::default();
        form.set(Field::Height, "   ");
        assert_eq!(form.raw(Field::Height), None);
        form.set(Field::Height, " 170 ");
        assert_eq!(form.raw(Field::Height), Some("170"));
    }

    #[test]
    fn test_require_number_records_violations() {
        let mut form = FormInput::default();
        form.set(Field::Weight, "heavy");
        let mut report = ValidationReport::new();

        assert_eq!(form.require_number(Field::Weight, &mut report), None);
        assert_eq!(form.require_number(Field::Height, &mut report), None);

        assert_eq!(
            report.violations(),
            &[
                Violation {
                    field: Field::Weight,
                    kind: ViolationKind::NotANumber
                },
                Violation {
                    field: Field::Height,
                    kind: ViolationKind::Missing
                },
            ]
        );
    }

    #[test]
    fn test_parse_measurement_rejects_non_finite() {
        assert_eq!(parse_measurement("72.5"), Some(72.5));
        assert_eq!(parse_measurement("NaN"), None);
        assert_eq!(parse_measurement("inf"), None);
        assert_eq!(parse_measurement(""), None);
    }

    #[test]
    fn test_report_display_lists_everything() {
        let mut report = ValidationReport::new();
        report.push(Field::Height, ViolationKind::Missing);
        report.push(
            Field::Weight,
            ViolationKind::OutOfRange {
                min: 30.0,
                max: 200.0,
            },
        );
        let text = report.to_string();
        assert!(text.contains("height is required"));
        assert!(text.contains("weight must be between 30-200 kg"));
    }
}
