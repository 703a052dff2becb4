use std::path::Path;

use crate::error::Result;
use crate::models::GeneratedPlan;

/// Write one row per planned dish: day, meal, dish.
pub fn write_plan_csv(plan: &GeneratedPlan, path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(["day", "meal", "dish"])?;

    for day in &plan.days {
        for (meal, dish) in &day.meals {
            wtr.write_record([day.day.to_string().as_str(), meal.label(), dish.as_str()])?;
        }
    }

    wtr.flush()?;
    Ok(())
}
