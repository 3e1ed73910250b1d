//! Contains [`SolverError`], the error type returned by fallible setup operations.
//!
//! Everything that is part of the three-valued solve contract ([`LogicResult`],
//! [`crate::logical_step::LogicalStepResult`], [`crate::solver::logical_solve_result::LogicalSolveResult`],
//! and friends) stays as those enums rather than a [`SolverError`] — those describe solve
//! *outcomes*, not failures to even start solving.

/// Errors that can occur while configuring and building a [`crate::solver::Solver`].
#[derive(Debug, Clone, thiserror::Error)]
pub enum SolverError {
    /// The region vector passed to [`crate::solver::solver_builder::SolverBuilder::with_regions`]
    /// was malformed (wrong length, or a region index used the wrong number of times).
    #[error("invalid region configuration: {0}")]
    InvalidRegions(String),

    /// A givens string was the wrong length for the board size.
    #[error("invalid givens string: {0}")]
    InvalidGivens(String),

    /// A given conflicted with a value already fixed at that cell.
    #[error("failed to set given {value} at cell {cell}")]
    GivenConflict { cell: String, value: usize },

    /// A constraint reported the board as invalid while initializing.
    #[error("{constraint} has found the board is invalid: {detail}")]
    ConstraintInvalid { constraint: String, detail: String },

    /// More than one of the above occurred while building the same solver.
    #[error("{}", .0.iter().map(ToString::to_string).collect::<Vec<_>>().join(", "))]
    Multiple(Vec<SolverError>),
}
