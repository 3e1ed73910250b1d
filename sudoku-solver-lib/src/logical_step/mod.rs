//! Contains the [`LogicalStep`] trait and the built-in techniques that implement it.
//!
//! A logical step is a single named deduction technique. The solver runs a list of
//! them to a fixed point during a logical solve (see [`crate::solver::Solver::run_logical_solve`]),
//! and a smaller, description-free subset of them during brute forcing.

pub mod all_naked_singles;
pub mod chains;
pub mod fish;
pub mod hidden_single;
pub mod naked_single;
pub mod naked_tuples;
pub mod pointing;
pub mod simple_cell_forcing;
pub mod simple_contradictions;
pub mod step_constraints;
pub mod wings;

pub mod logical_step_desc;
pub mod logical_step_desc_list;
pub mod logical_step_result;

#[macro_use]
pub(crate) mod macros;

pub use all_naked_singles::AllNakedSingles;
pub use chains::Chains;
pub use fish::Fish;
pub use hidden_single::HiddenSingle;
pub use logical_step_desc::LogicalStepDesc;
pub use logical_step_desc_list::LogicalStepDescList;
pub use logical_step_result::LogicalStepResult;
pub use naked_single::NakedSingle;
pub use naked_tuples::NakedTuples;
pub use pointing::Pointing;
pub use simple_cell_forcing::SimpleCellForcing;
pub use simple_contradictions::SimpleContradictions;
pub use step_constraints::{ConstraintLinks, StepConstraints};
pub use wings::{NWing, YWing};

use crate::prelude::*;

/// A single named logical deduction technique.
///
/// Implementations are stateless and shared behind `Arc<dyn LogicalStep>` so the same
/// instance can be reused across every consolidate pass and every brute-force branch.
pub trait LogicalStep: std::any::Any + std::fmt::Debug + Send + Sync {
    /// The name of this technique, used to prefix its descriptions and to identify it
    /// when checking whether a required step is already present in a custom step list.
    fn name(&self) -> &'static str;

    /// Whether this step participates in logical solves (the default).
    fn is_active_during_logical_solves(&self) -> bool {
        true
    }

    /// Whether this step participates in brute-force solves (off by default, since most
    /// techniques are too slow to be worth running when no human-readable proof is wanted).
    fn is_active_during_brute_force_solves(&self) -> bool {
        false
    }

    /// Whether this step's own [`LogicalStep::run`] already prefixes its description with
    /// its name (as [`StepConstraints`] does, prefixing with the constraint's name instead).
    /// The solver's consolidate loop skips adding its own `"{name}: "` prefix when this is true.
    fn has_own_prefix(&self) -> bool {
        false
    }

    /// Performs a single step of this technique's logic, returning as soon as any change
    /// to the board is found (or as soon as an invalidity is found).
    ///
    /// `generate_description` is `false` during brute forcing, where proof text would be
    /// discarded; implementations should skip building [`LogicalStepDesc`]s in that case.
    fn run(&self, board: &mut Board, generate_description: bool) -> LogicalStepResult;
}
