use crate::error::{PlannerError, Result};
use crate::models::{
    BloodPressure, BmiCategory, BmiReading, Field, FormInput, HealthBlock, HealthIndicators,
    PressureBand, SugarBand, ValidationReport, ViolationKind,
};
use crate::planner::constants::*;

/// Body mass index from weight (kg) and height (cm).
///
/// Both inputs must be positive and finite; otherwise every offending field is
/// reported and no value is substituted.
pub fn compute_bmi(weight_kg: f64, height_cm: f64) -> Result<f64> {
    let mut report = ValidationReport::new();
    check_positive(Field::Weight, weight_kg, &mut report);
    check_positive(Field::Height, height_cm, &mut report);
    if !report.is_empty() {
        return Err(PlannerError::InvalidInput(report));
    }

    let height_m = height_cm / 100.0;
    Ok(weight_kg / (height_m * height_m))
}

fn check_positive(field: Field, value: f64, report: &mut ValidationReport) {
    if !value.is_finite() {
        report.push(field, ViolationKind::NotANumber);
    } else if value <= 0.0 {
        report.push(field, ViolationKind::NotPositive);
    }
}

/// Classify a BMI. Total over the real line; NaN lands in `Obese` and is never
/// produced by [`compute_bmi`].
pub fn classify(bmi: f64) -> BmiCategory {
    if bmi < BMI_NORMAL_MIN {
        BmiCategory::Underweight
    } else if bmi < BMI_OVERWEIGHT_MIN {
        BmiCategory::Normal
    } else if bmi < BMI_OBESE_MIN {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

/// Compute and classify in one step.
pub fn bmi_reading(weight_kg: f64, height_cm: f64) -> Result<BmiReading> {
    let bmi = compute_bmi(weight_kg, height_cm)?;
    Ok(BmiReading {
        bmi,
        category: classify(bmi),
    })
}

/// Band a blood sugar reading (mg/dL).
pub fn sugar_band(blood_sugar: f64) -> SugarBand {
    if blood_sugar < SUGAR_NORMAL_BELOW {
        SugarBand::Normal
    } else if blood_sugar < SUGAR_WARNING_BELOW {
        SugarBand::Warning
    } else {
        SugarBand::Danger
    }
}

/// Band a blood pressure reading.
pub fn pressure_band(bp: BloodPressure) -> PressureBand {
    let (normal_sys, normal_dia) = BP_NORMAL_MAX;
    let (elevated_sys, elevated_dia) = BP_ELEVATED_MAX;
    if bp.systolic <= normal_sys && bp.diastolic <= normal_dia {
        PressureBand::Normal
    } else if bp.systolic <= elevated_sys && bp.diastolic <= elevated_dia {
        PressureBand::Elevated
    } else {
        PressureBand::High
    }
}

/// Indicators for whatever parses in a partially filled health form.
pub fn live_indicators(form: &FormInput) -> HealthIndicators {
    let bmi = match (form.number(Field::Weight), form.number(Field::Height)) {
        (Some(w), Some(h)) => bmi_reading(w, h).ok(),
        _ => None,
    };

    let sugar = form
        .number(Field::BloodSugar)
        .filter(|v| *v > 0.0)
        .map(sugar_band);

    let pressure = match (
        form.number(Field::BpSystolic),
        form.number(Field::BpDiastolic),
    ) {
        (Some(systolic), Some(diastolic)) if systolic > 0.0 && diastolic > 0.0 => {
            Some(pressure_band(BloodPressure {
                systolic,
                diastolic,
            }))
        }
        _ => None,
    };

    HealthIndicators {
        bmi,
        sugar,
        pressure,
    }
}

/// Health score in `[0, 100]` from BMI, blood sugar and blood pressure.
pub fn health_score(bmi: f64, blood_sugar: f64, bp: BloodPressure) -> u8 {
    let mut score = HEALTH_SCORE_MAX;

    if bmi < BMI_NORMAL_MIN || bmi >= BMI_OBESE_MIN {
        score -= MAJOR_PENALTY;
    } else if bmi >= BMI_OVERWEIGHT_MIN {
        score -= MINOR_PENALTY;
    }

    if blood_sugar > SUGAR_MAJOR_ABOVE {
        score -= MAJOR_PENALTY;
    } else if blood_sugar > SUGAR_MINOR_ABOVE {
        score -= MINOR_PENALTY;
    }

    if pressure_above(bp, BP_MAJOR_ABOVE) {
        score -= MAJOR_PENALTY;
    } else if pressure_above(bp, BP_MINOR_ABOVE) {
        score -= MINOR_PENALTY;
    }

    score.clamp(0, HEALTH_SCORE_MAX) as u8
}

fn pressure_above(bp: BloodPressure, (systolic, diastolic): (f64, f64)) -> bool {
    bp.systolic > systolic || bp.diastolic > diastolic
}

/// Advisory lines for each condition outside its healthy threshold.
///
/// Order is fixed: BMI, blood sugar, blood pressure.
pub fn recommendations(bmi: f64, blood_sugar: f64, bp: BloodPressure) -> Vec<String> {
    let mut out = Vec::new();

    if bmi >= BMI_OVERWEIGHT_MIN {
        out.push(ADVICE_PORTION_CONTROL.to_string());
    }
    if blood_sugar > SUGAR_MINOR_ABOVE {
        out.push(ADVICE_LOW_GLYCEMIC.to_string());
    }
    if pressure_above(bp, BP_MINOR_ABOVE) {
        out.push(ADVICE_REDUCE_SODIUM.to_string());
    }

    out
}

/// Score and recommendations for a validated health block.
pub fn assess(health: &HealthBlock) -> Result<(BmiReading, u8, Vec<String>)> {
    let reading = bmi_reading(health.weight_kg, health.height_cm)?;
    let score = health_score(reading.bmi, health.blood_sugar, health.blood_pressure);
    let advice = recommendations(reading.bmi, health.blood_sugar, health.blood_pressure);
    Ok((reading, score, advice))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bp(systolic: f64, diastolic: f64) -> BloodPressure {
        BloodPressure {
            systolic,
            diastolic,
        }
    }

    #[test]
    fn test_classify_boundaries() {
        assert_eq!(classify(18.49), BmiCategory::Underweight);
        assert_eq!(classify(18.5), BmiCategory::Normal);
        assert_eq!(classify(24.99), BmiCategory::Normal);
        assert_eq!(classify(25.0), BmiCategory::Overweight);
        assert_eq!(classify(29.99), BmiCategory::Overweight);
        assert_eq!(classify(30.0), BmiCategory::Obese);
    }

    #[test]
    fn test_compute_bmi_reports_both_fields() {
        match compute_bmi(0.0, -5.0) {
            Err(PlannerError::InvalidInput(report)) => {
                assert_eq!(report.len(), 2);
                assert!(report.mentions(Field::Weight));
                assert!(report.mentions(Field::Height));
            }
            other => panic!("expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_sugar_band() {
        assert_eq!(sugar_band(95.0), SugarBand::Normal);
        assert_eq!(sugar_band(100.0), SugarBand::Warning);
        assert_eq!(sugar_band(139.9), SugarBand::Warning);
        assert_eq!(sugar_band(140.0), SugarBand::Danger);
    }

    #[test]
    fn test_pressure_band() {
        assert_eq!(pressure_band(bp(120.0, 80.0)), PressureBand::Normal);
        assert_eq!(pressure_band(bp(121.0, 80.0)), PressureBand::Elevated);
        assert_eq!(pressure_band(bp(139.0, 89.0)), PressureBand::Elevated);
        assert_eq!(pressure_band(bp(140.0, 85.0)), PressureBand::High);
        assert_eq!(pressure_band(bp(130.0, 90.0)), PressureBand::High);
    }

    #[test]
    fn test_health_score_minor_penalties() {
        // BMI 26, sugar 110, BP 125/82
        assert_eq!(health_score(26.0, 110.0, bp(125.0, 82.0)), 70);
    }

    #[test]
    fn test_health_score_underweight_is_major() {
        assert_eq!(health_score(17.0, 90.0, bp(110.0, 70.0)), 80);
    }

    #[test]
    fn test_recommendations_skip_underweight() {
        assert!(recommendations(17.0, 90.0, bp(110.0, 70.0)).is_empty());
    }

    #[test]
    fn test_recommendations_diastolic_alone_triggers_sodium() {
        assert_eq!(
            recommendations(22.0, 90.0, bp(115.0, 85.0)),
            vec![ADVICE_REDUCE_SODIUM.to_string()]
        );
    }

    #[test]
    fn test_live_indicators_partial_form() {
        let mut form = FormInput::default();
        form.set(Field::Weight, "70");
        form.set(Field::BloodSugar, "150");
        form.set(Field::BpSystolic, "118");

        let indicators = live_indicators(&form);
        assert!(indicators.bmi.is_none());
        assert_eq!(indicators.sugar, Some(SugarBand::Danger));
        assert!(indicators.pressure.is_none());

        form.set(Field::Height, "170");
        form.set(Field::BpDiastolic, "76");
        let indicators = live_indicators(&form);
        assert_eq!(indicators.bmi.map(|r| r.category), Some(BmiCategory::Normal));
        assert_eq!(indicators.pressure, Some(PressureBand::Normal));
    }
}
