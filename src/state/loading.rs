/// Loading-phase state
///
/// Tracks the progress bar and the one-way Loading → Ready transition.

use crate::error::PhaseError;

/// Which view is on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Loading,
    /// Terminal
    Ready,
}

#[derive(Debug, Clone, Default)]
pub struct LoadingState {
    /// Progress bar value in [0, 1]
    progress: f32,
    phase: Phase,
}

impl LoadingState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Record a progress update
    ///
    /// Values are clamped to [0, 1]. Lower values than the current one and
    /// updates after the transition are ignored, so progress never goes back.
    pub fn record_progress(&mut self, value: f32) {
        if self.phase == Phase::Ready || value.is_nan() {
            return;
        }

        self.progress = self.progress.max(value.clamp(0.0, 1.0));
    }

    /// Perform the Loading → Ready transition
    ///
    /// Succeeds once, and only after progress has reached 1.
    pub fn finish(&mut self) -> Result<(), PhaseError> {
        match self.phase {
            Phase::Ready => Err(PhaseError::AlreadyReady),
            Phase::Loading if self.progress < 1.0 => Err(PhaseError::Incomplete(self.progress)),
            Phase::Loading => {
                self.phase = Phase::Ready;
                Ok(())
            }
        }
    }
}
