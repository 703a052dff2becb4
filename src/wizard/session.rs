use tracing::{debug, info, warn};

use crate::error::{PlannerError, Result};
use crate::models::{Advisory, BmiReading, FormInput, GeneratedPlan, UserProfile};
use crate::planner::calculations::bmi_reading;
use crate::planner::generation::{GenerationHandle, GenerationRequest, cancellation};
use crate::wizard::validation::{HealthStep, PreferencesStep, StepValidator};

/// One page of the wizard. Steps without a validator always pass.
#[derive(Debug)]
pub struct WizardStep {
    pub title: &'static str,
    validator: Option<Box<dyn StepValidator>>,
}

impl WizardStep {
    pub fn new(title: &'static str) -> Self {
        Self {
            title,
            validator: None,
        }
    }

    pub fn with_validator(title: &'static str, validator: impl StepValidator + 'static) -> Self {
        Self {
            title,
            validator: Some(Box::new(validator)),
        }
    }

    pub fn has_validator(&self) -> bool {
        self.validator.is_some()
    }
}

/// The four steps of the standard wizard.
pub fn default_steps() -> Vec<WizardStep> {
    vec![
        WizardStep::with_validator("Health Information", HealthStep),
        WizardStep::with_validator("Meal Preferences", PreferencesStep),
        WizardStep::new("Goals"),
        WizardStep::new("Review"),
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Filling in the current step.
    Editing,
    /// The last step was submitted and a plan is on its way.
    Generating,
    /// Terminal: a plan is available. Only `reset` leaves this phase.
    Generated,
}

/// Result of a successful `next`.
#[derive(Debug)]
pub enum Transition {
    Advanced {
        step: usize,
        advisories: Vec<Advisory>,
    },
    /// The last step validated; run the request through a `PlanGenerator`
    /// and hand the result to [`WizardSession::complete`].
    Submitted {
        request: GenerationRequest,
        advisories: Vec<Advisory>,
    },
}

/// State of one pass through the wizard.
///
/// Steps are numbered from 1. The session owns the profile and the handle of
/// any pending generation; navigating away from the last step cancels it.
#[derive(Debug)]
pub struct WizardSession {
    steps: Vec<WizardStep>,
    current: usize,
    phase: Phase,
    profile: UserProfile,
    pending: Option<GenerationHandle>,
    plan: Option<GeneratedPlan>,
}

impl Default for WizardSession {
    fn default() -> Self {
        Self::new()
    }
}

impl WizardSession {
    /// A session over the standard four steps.
    pub fn new() -> Self {
        Self::from_steps(default_steps())
    }

    /// A session over custom steps. At least one step is required.
    pub fn with_steps(steps: Vec<WizardStep>) -> Result<Self> {
        if steps.is_empty() {
            return Err(PlannerError::MissingData(
                "a wizard needs at least one step".to_string(),
            ));
        }
        Ok(Self::from_steps(steps))
    }

    fn from_steps(steps: Vec<WizardStep>) -> Self {
        Self {
            steps,
            current: 1,
            phase: Phase::Editing,
            profile: UserProfile::default(),
            pending: None,
            plan: None,
        }
    }

    pub fn current_step(&self) -> usize {
        self.current
    }

    pub fn total_steps(&self) -> usize {
        self.steps.len()
    }

    pub fn is_last_step(&self) -> bool {
        self.current == self.steps.len()
    }

    pub fn step_title(&self, step: usize) -> Option<&'static str> {
        step.checked_sub(1)
            .and_then(|i| self.steps.get(i))
            .map(|s| s.title)
    }

    /// Whether the given step validates its input before advancing.
    pub fn step_is_checked(&self, step: usize) -> bool {
        step.checked_sub(1)
            .and_then(|i| self.steps.get(i))
            .is_some_and(WizardStep::has_validator)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    pub fn plan(&self) -> Option<&GeneratedPlan> {
        self.plan.as_ref()
    }

    /// BMI of the validated health answers, if any.
    pub fn bmi(&self) -> Option<BmiReading> {
        let health = self.profile.health.as_ref()?;
        bmi_reading(health.weight_kg, health.height_cm).ok()
    }

    /// Validate the current step and move forward.
    ///
    /// On a validation failure nothing changes and every violation is returned
    /// in one report.
    pub fn next(&mut self, form: &FormInput) -> Result<Transition> {
        match self.phase {
            Phase::Editing => {}
            Phase::Generating => return Err(PlannerError::GenerationInProgress),
            Phase::Generated => return Err(PlannerError::AlreadyGenerated),
        }

        let step = &self.steps[self.current - 1];
        let advisories = match &step.validator {
            Some(validator) => validator.apply(form, &mut self.profile).map_err(|report| {
                warn!(
                    step = self.current,
                    violations = report.len(),
                    "step validation failed"
                );
                PlannerError::InvalidInput(report)
            })?,
            None => Vec::new(),
        };

        for advisory in &advisories {
            warn!(step = self.current, "{}", advisory);
        }

        if self.current < self.steps.len() {
            self.current += 1;
            info!(step = self.current, "advanced to step");
            return Ok(Transition::Advanced {
                step: self.current,
                advisories,
            });
        }

        let (handle, signal) = cancellation();
        self.pending = Some(handle);
        self.phase = Phase::Generating;
        info!("wizard submitted");

        Ok(Transition::Submitted {
            request: GenerationRequest {
                profile: self.profile.clone(),
                signal,
            },
            advisories,
        })
    }

    /// Step back. A no-op on step 1 and once the plan is generated.
    ///
    /// Returns whether the session changed.
    pub fn prev(&mut self) -> bool {
        let cancelled = match self.phase {
            Phase::Generated => return false,
            Phase::Generating => self.cancel_generation(),
            Phase::Editing => false,
        };

        if self.current > 1 {
            self.current -= 1;
            debug!(step = self.current, "moved back");
            return true;
        }
        cancelled
    }

    /// Revisit an earlier (or the current) step. Skipping ahead is a no-op.
    pub fn go_to(&mut self, step: usize) -> bool {
        if self.phase == Phase::Generated || step == 0 || step > self.current {
            return false;
        }
        if self.phase == Phase::Generating {
            self.cancel_generation();
        }
        self.current = step;
        debug!(step, "jumped to step");
        true
    }

    /// Abort a pending generation and return to editing the last step.
    pub fn cancel_generation(&mut self) -> bool {
        if self.phase != Phase::Generating {
            return false;
        }
        if let Some(handle) = self.pending.take() {
            handle.cancel();
        }
        self.phase = Phase::Editing;
        info!("generation cancelled");
        true
    }

    /// Record the outcome of a generation started by `next`.
    ///
    /// A result that arrives after the user navigated away is discarded with
    /// `Cancelled`.
    pub fn complete(&mut self, result: Result<GeneratedPlan>) -> Result<&GeneratedPlan> {
        if self.phase != Phase::Generating {
            debug!("discarding stale generation result");
            return Err(PlannerError::Cancelled);
        }
        self.pending = None;

        match result {
            Ok(plan) => {
                self.phase = Phase::Generated;
                info!(score = plan.health_score, "plan generated");
                Ok(self.plan.insert(plan))
            }
            Err(e) => {
                self.phase = Phase::Editing;
                warn!(error = %e, "generation failed");
                Err(e)
            }
        }
    }

    /// Clear every answer and start again from step 1.
    pub fn reset(&mut self) {
        self.cancel_generation();
        self.profile = UserProfile::default();
        self.plan = None;
        self.phase = Phase::Editing;
        self.current = 1;
        info!("wizard reset");
    }

    /// Replace the answers with a loaded draft and start again from step 1.
    pub fn restore(&mut self, profile: UserProfile) {
        self.reset();
        self.profile = profile;
        info!("draft restored");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_steps_rejects_empty() {
        assert!(matches!(
            WizardSession::with_steps(Vec::new()),
            Err(PlannerError::MissingData(_))
        ));
    }

    #[test]
    fn test_single_step_wizard_submits_immediately() {
        let mut session = WizardSession::with_steps(vec![WizardStep::new("Only")]).unwrap();
        let transition = session.next(&FormInput::default()).unwrap();

        assert!(matches!(transition, Transition::Submitted { .. }));
        assert_eq!(session.phase(), Phase::Generating);
        assert_eq!(session.current_step(), 1);
    }

    #[test]
    fn test_prev_on_single_step_cancels_generation() {
        let mut session = WizardSession::with_steps(vec![WizardStep::new("Only")]).unwrap();
        let Transition::Submitted { request, .. } = session.next(&FormInput::default()).unwrap()
        else {
            panic!("expected submission");
        };

        assert!(session.prev());
        assert_eq!(session.phase(), Phase::Editing);
        assert!(request.signal.is_cancelled());
    }

    #[test]
    fn test_stale_result_is_discarded() {
        let mut session = WizardSession::with_steps(vec![WizardStep::new("Only")]).unwrap();
        session.next(&FormInput::default()).unwrap();
        session.cancel_generation();

        let result = session.complete(Err(PlannerError::Cancelled));
        assert!(matches!(result, Err(PlannerError::Cancelled)));
        assert!(session.plan().is_none());
    }

    #[test]
    fn test_step_titles() {
        let session = WizardSession::new();
        assert_eq!(session.step_title(1), Some("Health Information"));
        assert_eq!(session.step_title(4), Some("Review"));
        assert_eq!(session.step_title(0), None);
        assert_eq!(session.step_title(5), None);
    }

    #[test]
    fn test_only_data_steps_are_checked() {
        let steps = default_steps();
        assert!(steps[0].has_validator());
        assert!(steps[1].has_validator());
        assert!(!steps[3].has_validator());

        let session = WizardSession::new();
        assert!(session.step_is_checked(1));
        assert!(session.step_is_checked(2));
        assert!(!session.step_is_checked(3));
        assert!(!session.step_is_checked(4));
        assert!(!session.step_is_checked(0));
    }
}
