//! Contains the [`Constraint`] trait for defining the behavior of additional constraints.

use crate::prelude::*;
use std::vec::Vec;

/// Constraints are used by variant sudokus to define extra rules
/// beyond the standard Sudoku rules.
///
/// Most of the methods in this trait are optional, but aside from very
/// simple constraints, most will override most or all of them.
///
/// Some methods provide an optional implementation for convenience:
/// - [`Constraint::cells_must_contain`] can call [`Constraint::cells_must_contain_by_running_logic`]
/// to automatically determine the answer based on running the [`Constraint::step_logic`] method.
///
/// - [`Constraint::get_weak_links`] can call [`Constraint::get_weak_links_by_running_logic`]
/// to automatically generate weak links based on running the [`Constraint::enforce`]
/// and [`Constraint::step_logic`] methods.
pub trait Constraint: Send + Sync {
    /// A generic name for the constraint which is independent of how it was initialized.
    fn name(&self) -> &str;

    /// Override if there is a more specific name for this constraint instance,
    /// such as "Killer Cage at r1c1".
    fn specific_name(&self) -> String {
        self.name().to_owned()
    }

    /// Cells which this constraint gives extra power over, beyond the normal
    /// rule of "one candidate per cell, per house". Used only for bookkeeping
    /// by the board; most constraints have none.
    fn powerful_cells(&self) -> Vec<CellIndex> {
        Vec::new()
    }

    /// Called once passing in the [`Board`] so the constraint can initialize itself based
    /// on the board properties and all other constraints on the board.
    ///
    /// This method may be called multiple times, but only during board creation.
    /// It is called on all constraints until all of them return [`LogicalStepResult::None`].
    /// This allows them react to each other and how they may have changed the board.
    ///
    /// Return the following based on the situation:
    /// - [`LogicalStepResult::None`] if the board is unchanged.
    /// - [`LogicalStepResult::Changed`] if the board is changed.
    /// - [`LogicalStepResult::Invalid`] if this constraint has made the solve impossible.
    fn init_board(&self, _board: &mut Board) -> LogicalStepResult {
        LogicalStepResult::None
    }

    /// Called once, after weak links have settled, for constraints that need
    /// to contribute additional weak links derived from running logic rather
    /// than from [`Constraint::get_weak_links`] alone (for example, a constraint
    /// whose links depend on other constraints having already contributed theirs).
    ///
    /// Most constraints have no need to override this; the default contributes
    /// nothing new.
    fn init_links(&self, _board: &mut Board) -> LogicResult {
        LogicResult::None
    }

    /// Called when a value has just been set on the board.
    /// The job of this function is to determine if setting this value is a violation of the constraint.
    ///
    /// **Avoid complex logic in this function.** Just enforcement of the direct, actual rule is advised.
    /// For example, a Killer Cage would do nothing if all values in the cage are not yet set, and otherwise
    /// would check the sum of the values against the desired cage sum.
    ///
    /// The board is immutable in this function. Any changes to the board should be enforced via the
    /// [`Constraint::get_weak_links`] method and/or the [`Constraint::step_logic`] method.
    ///
    /// All weak links will be applied before this function is called.
    ///
    /// Return the following based on the situation:
    /// - [`LogicalStepResult::None`] if the constraint is not violated.
    /// - [`LogicalStepResult::Invalid`] if the constraint is violated.
    fn enforce(&self, _board: &Board, _cell: CellIndex, _val: usize) -> LogicalStepResult {
        LogicalStepResult::None
    }

    /// Whether [`Constraint::enforce`] is meaningfully implemented.
    ///
    /// The board can skip calling `enforce` for constraints that report `false`
    /// here, which matters for constraints tracking many cells since `enforce`
    /// runs on every value assignment.
    fn needs_enforce(&self) -> bool {
        true
    }

    /// Called during logical solving.
    /// Go through the board and perform a single step of logic related to this constraint.
    /// For example, a Killer Cage constraint may check which candidates are still possible
    /// based on the desired sum and remove any which are not.
    ///
    /// Use your judgement and testing to determine if any of the logic should occur during brute force
    /// solving. The brute force solving boolean is set to true when this logic is not going to be
    /// visible to the end-user and so anything done during brute forcing is only advised if it's faster
    /// than guessing.
    ///
    /// Do not attempt to do any logic which isn't relevant to this constraint.
    ///
    /// Return the following based on the situation. You must track this yourself and return an accurate
    /// [`LogicalStepResult`], including a human readable description when `generate_description` is true:
    /// - [`LogicalStepResult::None`] if the board is unchanged.
    /// - [`LogicalStepResult::Changed`] if the board is changed.
    /// - [`LogicalStepResult::Invalid`] if this constraint can no longer be satisfied.
    fn step_logic(&self, _board: &mut Board, _generate_description: bool) -> LogicalStepResult {
        LogicalStepResult::None
    }

    /// Return a vector of cells which must contain the given value.
    ///
    /// For example, a Killer Cage may determine that there must be a 9 in one of the cells
    /// in order to fulfill the sum. This would return a [`Vec`] of all the cells in the cage
    /// which can still be 9.
    fn cells_must_contain(&self, _board: &Board, _val: usize) -> Vec<CellIndex> {
        Vec::new()
    }

    /// Can be used by [`Constraint::cells_must_contain`] to automatically determine the
    /// answer based on running the [`Constraint::step_logic`] method.
    ///
    /// This is determined by cloning the board, and then removing the given value from all
    /// cells in the constraint and then running the [`Constraint::step_logic`] method to see
    /// if it returns [`LogicalStepResult::Invalid`].
    fn cells_must_contain_by_running_logic(
        &self,
        board: &mut Board,
        cells: &[CellIndex],
        value: usize,
    ) -> Vec<CellIndex> {
        let mut result = Vec::new();

        for &cell in cells {
            let mask = board.cell(cell);
            if mask.is_solved() || !mask.has(value) {
                continue;
            }

            result.push(cell);
        }

        if !result.is_empty() {
            let mut board_clone = board.clone();
            for &cell in &result {
                board_clone.clear_value(cell, value);
            }

            let mut logic_result = self.step_logic(&mut board_clone, false);
            while logic_result.is_changed() {
                logic_result = self.step_logic(&mut board_clone, false);
            }

            if !logic_result.is_invalid() {
                result.clear();
            }
        }

        result
    }

    /// Returns the cells which "see" the given cell for the purposes of this constraint:
    /// any cell that cannot hold the same value as `cell` by virtue of this constraint alone.
    ///
    /// Most constraints don't need to override this directly since weak links already
    /// capture this information; it exists for techniques which want constraint-local
    /// visibility without consulting the full weak-link graph.
    fn seen_cells(&self, _cell: CellIndex) -> Vec<CellIndex> {
        Vec::new()
    }

    /// Like [`Constraint::seen_cells`], but restricted to cells which see `cell` for
    /// every value in `value_mask`.
    fn seen_cells_by_value_mask(&self, _cell: CellIndex, _value_mask: ValueMask) -> Vec<CellIndex> {
        Vec::new()
    }

    /// A weak link is a relationship between candidates A and B which may be in different
    /// cells which is equivalent to the logic `A → !B`.
    ///
    /// Essentially, if A is true, then B must be false and so is eliminated.
    ///
    /// Return a [`Vec`] of candidate pairs which form a weak links. Weak links eliminations
    /// are assumed to be symmetrical, so if `A → !B` then `B → !A`, so only `(A, B)` or `(B, A)`
    /// is necessary to include, not both. It is not harmful to include both, however.
    ///
    /// For example, a nonconsecutive constraint would return that the candidate 1 in r1c1 has
    /// a weak link to the candidate 2 in r1c2 (among others).
    ///
    /// Including a weak link of a candidate to itself `(A, A)` tells the solver that this
    /// candidate is never possible and it is immediately eliminated.
    ///
    /// The solver can quickly figure out both cell and region forcing eliminations using these
    /// weak links. A cell forcing elimination is when all candidates remaining in a cell all
    /// have a weak link to the same candidate, so that candidate can be eliminated. A region forcing
    /// elimination is when all instances of a value remaining in a region all have a weak link
    /// to the same candidate, so that candidate can be eliminated.
    ///
    /// As a result, proper generation of weak links means that some logic can be omitted from the
    /// [`Constraint::step_logic`] method. For example, a nonconsecutive constraint does not need
    /// to check if a cell has only `1,2` left, which eliminates `1,2` from adjacent cells. The solver
    /// will figure this out itself via cell forcing.
    ///
    /// [`crate::cell_utility::CellUtility::candidate_pairs`] is especially useful for this method, which generates all candidates
    /// pairs for all values within a group of cells. Passing in a group of cells which cannot
    /// repeat will generate the needed weak link pairs for that group.
    fn get_weak_links(&self, _size: usize) -> Vec<(CandidateIndex, CandidateIndex)> {
        Vec::new()
    }

    /// Can be used by [`Constraint::get_weak_links`] to automatically determine the
    /// answer based on running the [`Constraint::step_logic`] method.
    ///
    /// This is determined by setting each candidate in each cell one at a time to a cloned board,
    /// then running the [`Constraint::step_logic`] method to see if it returns [`LogicalStepResult::Invalid`].
    fn get_weak_links_by_running_logic(
        &self,
        board: &Board,
        cells: &[CellIndex],
    ) -> Vec<(CandidateIndex, CandidateIndex)> {
        let mut result = Vec::new();

        for &cell in cells {
            let orig_mask = board.cell(cell);
            if orig_mask.is_single() {
                continue;
            }

            for val in orig_mask {
                let cand0 = cell.candidate(val);

                let mut board_clone = board.clone();
                if !board_clone.set_solved(cell, val) {
                    // A weak link to self indicates that the candidate is generally invalid
                    result.push((cand0, cand0));
                    continue;
                }

                let mut logic_result = self.step_logic(&mut board_clone, false);
                while logic_result.is_changed() {
                    logic_result = self.step_logic(&mut board_clone, false);
                }

                if logic_result.is_invalid() {
                    // A weak link to self indicates that the candidate is generally invalid
                    result.push((cand0, cand0));
                    continue;
                }

                for &cell1 in cells.iter() {
                    if cell == cell1 {
                        continue;
                    }

                    let orig_mask1 = board.cell(cell1).unsolved();
                    let new_mask1 = board_clone.cell(cell1).unsolved();
                    if orig_mask1 != new_mask1 {
                        let diff_mask = orig_mask1 & !new_mask1;
                        for val1 in diff_mask {
                            let cand1 = cell1.candidate(val1);
                            result.push((cand0, cand1));
                        }
                    }
                }
            }
        }

        result
    }

    /// Some constraints essentially create new houses. For example, an extra region
    /// constraint, or a Killer Cage sized such that it must contain every digit.
    /// Even constraints like a Renban can be considered to create new houses if
    /// they are of the correct size.
    ///
    /// This method returns a [`Vec`] of [`House`] which are created by the constraint.
    ///
    /// The size of the board is passed in so that the constraint can know the size of the house.
    fn get_houses(&self, _size: usize) -> Vec<House> {
        Vec::new()
    }
}
