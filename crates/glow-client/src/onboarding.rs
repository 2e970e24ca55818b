// File: crates/glow-client/src/onboarding.rs
// Summary: Onboarding walkthrough as a small state machine.
// Notes: `Welcome -> SkinProfile -> SelfieUpload -> Goals -> Completed`. Advancing
//        marks the step being left as completed; the step indicator may jump back
//        to any completed step but never ahead of the active one.

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Step {
    Welcome,
    SkinProfile,
    SelfieUpload,
    Goals,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepInfo {
    pub title: &'static str,
    pub description: &'static str,
}

impl Step {
    pub const ALL: [Step; 4] = [Step::Welcome, Step::SkinProfile, Step::SelfieUpload, Step::Goals];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn next(self) -> Option<Step> {
        Self::ALL.get(self.index() + 1).copied()
    }

    pub fn prev(self) -> Option<Step> {
        self.index().checked_sub(1).map(|i| Self::ALL[i])
    }

    pub fn info(self) -> StepInfo {
        let (title, description) = match self {
            Step::Welcome => ("Welcome to GlowAI", "Your personal skincare assistant powered by AI."),
            Step::SkinProfile => ("Tell us about your skin", "Help us understand your skin type and concerns."),
            Step::SelfieUpload => ("Upload a selfie", "Get a personalized skin analysis and recommendations."),
            Step::Goals => ("Set your goals", "What do you want to achieve with your skincare routine?"),
        };
        StepInfo { title, description }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowState {
    Active(Step),
    Completed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OnboardingFlow {
    state: FlowState,
    done: [bool; Step::ALL.len()],
}

impl Default for OnboardingFlow {
    fn default() -> Self {
        Self { state: FlowState::Active(Step::Welcome), done: [false; Step::ALL.len()] }
    }
}

impl OnboardingFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> FlowState {
        self.state
    }

    /// The active step, `None` once the flow has finished.
    pub fn current(&self) -> Option<Step> {
        match self.state {
            FlowState::Active(step) => Some(step),
            FlowState::Completed => None,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.state == FlowState::Completed
    }

    pub fn is_completed(&self, step: Step) -> bool {
        self.done[step.index()]
    }

    pub fn completed_count(&self) -> usize {
        self.done.iter().filter(|d| **d).count()
    }

    /// Complete the active step and move on.
    pub fn next(&mut self) -> FlowState {
        if let FlowState::Active(step) = self.state {
            self.done[step.index()] = true;
            self.state = match step.next() {
                Some(n) => FlowState::Active(n),
                None => {
                    log::info!("onboarding completed");
                    FlowState::Completed
                }
            };
        }
        self.state
    }

    /// One step back. Stays put on the first step; a finished flow reopens on the last.
    pub fn back(&mut self) -> FlowState {
        self.state = match self.state {
            FlowState::Active(step) => FlowState::Active(step.prev().unwrap_or(step)),
            FlowState::Completed => FlowState::Active(Step::Goals),
        };
        self.state
    }

    /// Jump to `step` if it is completed or already active. Returns whether the jump happened.
    pub fn select(&mut self, step: Step) -> bool {
        if self.is_completed(step) || self.current() == Some(step) {
            self.state = FlowState::Active(step);
            true
        } else {
            false
        }
    }
}
