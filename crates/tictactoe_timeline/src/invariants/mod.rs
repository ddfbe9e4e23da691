//! First-class invariants for game histories.
//!
//! Invariants are logical properties that must hold for every history
//! value the crate hands out. They are testable independently and serve
//! as documentation of system guarantees.

pub mod seeded_start;
pub mod single_square_delta;
pub mod step_in_bounds;

pub use seeded_start::SeededStartInvariant;
pub use single_square_delta::SingleSquareDeltaInvariant;
pub use step_in_bounds::StepInBoundsInvariant;

use crate::history::History;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// All history invariants as a composable set.
pub type HistoryInvariants = (
    SeededStartInvariant,
    StepInBoundsInvariant,
    SingleSquareDeltaInvariant,
);

/// Asserts that all history invariants hold (panics on violation in
/// debug builds).
pub fn assert_invariants(history: &History) {
    debug_assert!(
        SeededStartInvariant::holds(history),
        "{}",
        SeededStartInvariant::description()
    );
    debug_assert!(
        StepInBoundsInvariant::holds(history),
        "{}",
        StepInBoundsInvariant::description()
    );
    debug_assert!(
        SingleSquareDeltaInvariant::holds(history),
        "{}",
        SingleSquareDeltaInvariant::description()
    );
}
