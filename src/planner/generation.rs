use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tokio::sync::watch;
use tracing::{info, warn};

use crate::config::PlannerConfig;
use crate::error::{PlannerError, Result};
use crate::models::{GeneratedPlan, UserProfile};
use crate::planner::assembly::{assemble_plan, assemble_plan_with_rng};

/// Held by the wizard session; cancels the pending generation when told to
/// or when dropped.
#[derive(Debug)]
pub struct GenerationHandle {
    cancel: watch::Sender<bool>,
}

impl GenerationHandle {
    pub fn cancel(&self) {
        // No receivers left means the task already finished.
        let _ = self.cancel.send(true);
    }
}

/// Receiving side of a [`GenerationHandle`].
#[derive(Debug, Clone)]
pub struct CancelSignal {
    rx: watch::Receiver<bool>,
}

impl CancelSignal {
    /// Resolves once cancellation is requested or the handle is dropped.
    pub async fn cancelled(&mut self) {
        loop {
            if *self.rx.borrow_and_update() {
                return;
            }
            if self.rx.changed().await.is_err() {
                return;
            }
        }
    }

    pub fn is_cancelled(&self) -> bool {
        *self.rx.borrow() || self.rx.has_changed().is_err()
    }
}

pub fn cancellation() -> (GenerationHandle, CancelSignal) {
    let (tx, rx) = watch::channel(false);
    (GenerationHandle { cancel: tx }, CancelSignal { rx })
}

/// A snapshot of the validated profile handed out when the last step submits.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub profile: UserProfile,
    pub signal: CancelSignal,
}

/// Runs plan assembly after an artificial delay that can be aborted.
#[derive(Debug, Clone)]
pub struct PlanGenerator {
    delay: Duration,
    days: usize,
    seed: Option<u64>,
}

impl PlanGenerator {
    pub fn new(delay: Duration, days: usize, seed: Option<u64>) -> Self {
        Self { delay, days, seed }
    }

    pub fn from_config(config: &PlannerConfig) -> Self {
        Self::new(config.generation_delay, config.plan_days, config.seed)
    }

    /// Wait out the delay, then assemble. Cancellation wins ties.
    pub async fn generate(&self, request: GenerationRequest) -> Result<GeneratedPlan> {
        let GenerationRequest {
            profile,
            mut signal,
        } = request;

        info!(delay_ms = self.delay.as_millis() as u64, "generating meal plan");

        tokio::select! {
            biased;
            _ = signal.cancelled() => {
                warn!("meal plan generation cancelled");
                return Err(PlannerError::Cancelled);
            }
            _ = tokio::time::sleep(self.delay) => {}
        }

        let plan = match self.seed {
            Some(seed) => {
                let mut rng = StdRng::seed_from_u64(seed);
                assemble_plan_with_rng(&profile, self.days, &mut rng)?
            }
            None => assemble_plan(&profile, self.days)?,
        };

        info!(score = plan.health_score, "meal plan ready");
        Ok(plan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BloodPressure, HealthBlock};

    fn request(signal: CancelSignal) -> GenerationRequest {
        GenerationRequest {
            profile: UserProfile {
                health: Some(HealthBlock {
                    weight_kg: 90.0,
                    height_cm: 170.0,
                    blood_sugar: 150.0,
                    blood_pressure: BloodPressure {
                        systolic: 145.0,
                        diastolic: 92.0,
                    },
                    dietary_restrictions: Default::default(),
                }),
                ..Default::default()
            },
            signal,
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_generate_after_delay() {
        let (_handle, signal) = cancellation();
        let generator = PlanGenerator::new(Duration::from_secs(2), 7, None);

        let plan = generator.generate(request(signal)).await.unwrap();
        assert_eq!(plan.health_score, 40);
        assert_eq!(plan.days.len(), 7);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_aborts_generation() {
        let (handle, signal) = cancellation();
        let generator = PlanGenerator::new(Duration::from_secs(2), 7, None);

        handle.cancel();
        let result = generator.generate(request(signal)).await;
        assert!(matches!(result, Err(PlannerError::Cancelled)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropped_handle_aborts_generation() {
        let (handle, signal) = cancellation();
        drop(handle);
        assert!(signal.is_cancelled());

        let generator = PlanGenerator::new(Duration::from_secs(2), 7, None);
        let result = generator.generate(request(signal)).await;
        assert!(matches!(result, Err(PlannerError::Cancelled)));
    }
}
