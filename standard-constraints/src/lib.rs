//! A small library of concrete [`sudoku_solver_lib::constraint::Constraint`] implementations
//! covering common variant Sudoku rules: non-repeating cell groups (extra regions,
//! diagonals), orthogonal-pair markers (Kropki, XV, and their negative forms), chess-move
//! constraints (anti-king, anti-knight, and arbitrary offsets), arrow sums, and pencilmark
//! restrictions (even/odd/prime cells).
//!
//! This is intentionally not a full variant-constraint catalog — just enough concrete
//! constraints to exercise and integration-test the kernel in `sudoku-solver-lib`. Puzzle
//! import/export formats and plugin discovery are out of scope; callers construct
//! constraints directly with the types in this crate.

pub mod arrow_sum_constraint;
pub mod chess_constraint;
pub mod non_repeat_constraint;
pub mod orthogonal_pairs_constraint;
pub mod pencilmark_constraint;
pub mod standard_pair_type;

pub mod prelude {
    //! Convenience re-export of the types most commonly needed together.
    pub use crate::standard_pair_type::*;
}
