// SPDX-License-Identifier: MPL-2.0
//! Submission progress value objects.

// =============================================================================
// Progress Bounds
// =============================================================================

/// Progress bounds and estimated-progress defaults.
pub mod progress_bounds {
    /// Upper bound of a progress value.
    pub const MAX_PERCENT: u8 = 100;
    /// Default step of estimated progress.
    pub const DEFAULT_ESTIMATED_STEP: u8 = 10;
    /// Smallest accepted estimated step.
    pub const MIN_ESTIMATED_STEP: u8 = 1;
    /// Largest accepted estimated step.
    pub const MAX_ESTIMATED_STEP: u8 = 50;
}

// =============================================================================
// Progress
// =============================================================================

/// Percentage of a submission, guaranteed to be within 0–100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
pub struct Progress(u8);

impl Progress {
    pub const ZERO: Self = Self(0);
    pub const COMPLETE: Self = Self(progress_bounds::MAX_PERCENT);

    /// Creates a progress value, clamping to 100.
    #[must_use]
    pub fn new(percent: u8) -> Self {
        Self(percent.min(progress_bounds::MAX_PERCENT))
    }

    /// Progress of a transfer of `total` bytes after `sent` bytes.
    ///
    /// An empty transfer counts as complete.
    #[must_use]
    pub fn from_bytes(sent: u64, total: u64) -> Self {
        if total == 0 {
            return Self::COMPLETE;
        }
        let percent = (u128::from(sent.min(total)) * 100 / u128::from(total)) as u8;
        Self::new(percent)
    }

    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }

    /// Progress as a fraction in `0.0..=1.0`, as the upload progress bar draws it.
    #[must_use]
    pub fn fraction(self) -> f32 {
        f32::from(self.0) / 100.0
    }

    #[must_use]
    pub fn is_complete(self) -> bool {
        self.0 >= progress_bounds::MAX_PERCENT
    }

    /// Advances by `step`, saturating at 100.
    #[must_use]
    pub fn advance(self, step: EstimatedStep) -> Self {
        Self::new(self.0.saturating_add(step.value()))
    }
}

// =============================================================================
// EstimatedStep
// =============================================================================

/// Increment applied on every estimated-progress tick (1–50).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EstimatedStep(u8);

impl EstimatedStep {
    #[must_use]
    pub fn new(step: u8) -> Self {
        Self(step.clamp(
            progress_bounds::MIN_ESTIMATED_STEP,
            progress_bounds::MAX_ESTIMATED_STEP,
        ))
    }

    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }
}

impl Default for EstimatedStep {
    fn default() -> Self {
        Self(progress_bounds::DEFAULT_ESTIMATED_STEP)
    }
}

/// Where the progress numbers of a submission come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressSource {
    /// Bytes sent over total bytes, reported by the transport.
    Measured,
    /// Synthetic ticks advancing in fixed steps.
    Estimated,
}
