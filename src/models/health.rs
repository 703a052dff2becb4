use std::fmt;

use serde::{Deserialize, Serialize};

/// BMI classification.
///
/// Bands are half-open: `[.., 18.5)`, `[18.5, 25)`, `[25, 30)`, `[30, ..)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub const ALL: [BmiCategory; 4] = [
        BmiCategory::Underweight,
        BmiCategory::Normal,
        BmiCategory::Overweight,
        BmiCategory::Obese,
    ];

    pub fn label(self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }

    /// Parse a category name as typed on the command line.
    pub fn parse(name: &str) -> Option<BmiCategory> {
        match name.trim().to_ascii_lowercase().as_str() {
            "underweight" => Some(BmiCategory::Underweight),
            "normal" | "normal weight" => Some(BmiCategory::Normal),
            "overweight" => Some(BmiCategory::Overweight),
            "obese" => Some(BmiCategory::Obese),
            _ => None,
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A computed BMI together with its category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BmiReading {
    pub bmi: f64,
    pub category: BmiCategory,
}

impl BmiReading {
    /// BMI rounded to one decimal place for display.
    pub fn rounded(&self) -> f64 {
        (self.bmi * 10.0).round() / 10.0
    }
}

/// Fasting blood sugar band (mg/dL).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SugarBand {
    Normal,
    Warning,
    Danger,
}

impl SugarBand {
    pub fn label(self) -> &'static str {
        match self {
            SugarBand::Normal => "normal",
            SugarBand::Warning => "warning",
            SugarBand::Danger => "danger",
        }
    }
}

/// Blood pressure band. `High` is advisory and never blocks the wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PressureBand {
    Normal,
    Elevated,
    High,
}

impl PressureBand {
    pub fn label(self) -> &'static str {
        match self {
            PressureBand::Normal => "normal",
            PressureBand::Elevated => "elevated",
            PressureBand::High => "high",
        }
    }
}

/// Systolic/diastolic pair in mmHg.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BloodPressure {
    pub systolic: f64,
    pub diastolic: f64,
}

impl fmt::Display for BloodPressure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.systolic, self.diastolic)
    }
}

/// Indicators shown next to the health form while the user types.
///
/// Each value is present only when its inputs parse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct HealthIndicators {
    pub bmi: Option<BmiReading>,
    pub sugar: Option<SugarBand>,
    pub pressure: Option<PressureBand>,
}

/// Non-blocking notices raised when a step validates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Advisory {
    HighBloodPressure,
}

impl Advisory {
    pub fn message(self) -> &'static str {
        match self {
            Advisory::HighBloodPressure => {
                "Blood pressure readings seem high. Consider consulting a healthcare provider."
            }
        }
    }
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
