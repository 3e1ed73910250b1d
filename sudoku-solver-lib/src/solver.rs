//! Constains the [`Solver`] struct which is the main entry point for solving a puzzle.

pub mod brute_force;
pub mod cancellation;
pub mod logical_solve_result;
pub mod single_solution_result;
pub mod solution_count_result;
pub mod solution_receiver;
pub mod solver_builder;
pub mod true_candidates_count_result;

pub use cancellation::Cancellation;
pub use logical_solve_result::LogicalSolveResult;
pub use single_solution_result::SingleSolutionResult;
pub use solution_count_result::SolutionCountResult;
pub use solution_receiver::{CountSolutionReceiver, SolutionReceiver, VecSolutionReceiver};
pub use solver_builder::SolverBuilder;
pub use true_candidates_count_result::TrueCandidatesCountResult;

use itertools::Itertools;

use crate::memo;
use crate::prelude::*;
use std::collections::HashMap;
use std::sync::Arc;

/// The main entry point for solving a puzzle.
///
/// A `Solver` owns a [`Board`] plus the ordered lists of [`LogicalStep`]s that drive its two
/// solve modes: a full list used during [`Solver::run_logical_solve`] (and the step-by-step
/// [`Solver::run_single_logical_step`]), and a smaller, description-free list used by the
/// brute-force driver ([`Solver::find_first_solution`] and friends).
///
/// Cloning a `Solver` is cheap: the board's metadata (houses, weak links, constraints) is
/// shared behind an `Arc` rather than copied, which is what makes the brute-force driver's
/// stack-of-clones search affordable.
#[derive(Clone)]
pub struct Solver {
    board: Board,
    logical_solve_steps: Vec<Arc<dyn LogicalStep>>,
    brute_force_steps: Vec<Arc<dyn LogicalStep>>,
    custom_info: HashMap<String, String>,
}

/// A board is valid as long as every cell still has at least one candidate left. Once a
/// cell's mask goes empty, the board can never be completed.
fn board_is_valid(board: &Board) -> bool {
    board.all_cell_masks().all(|(_, mask)| !mask.is_empty())
}

impl Solver {
    /// Create a new solver with the default standard logic and no extra constraints.
    ///
    /// For anything beyond the basics — custom logical steps, custom info, regions — use
    /// [`SolverBuilder`] instead.
    pub fn new(
        size: usize,
        regions: &[usize],
        constraints: Vec<Arc<dyn Constraint>>,
    ) -> Result<Solver, SolverError> {
        SolverBuilder::new(size)
            .with_regions(regions.to_vec())
            .with_constraints(constraints)
            .build()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The size of the board (9 for a standard 9x9 Sudoku).
    pub fn size(&self) -> usize {
        self.board.size()
    }

    pub fn cell_utility(&self) -> CellUtility {
        self.board.cell_utility()
    }

    pub fn logical_solve_steps(&self) -> &[Arc<dyn LogicalStep>] {
        &self.logical_solve_steps
    }

    pub fn brute_force_steps(&self) -> &[Arc<dyn LogicalStep>] {
        &self.brute_force_steps
    }

    /// Looks up a piece of free-form metadata that was attached via
    /// [`SolverBuilder::with_custom_info`] when this solver was built.
    ///
    /// Used by consumers of this library to stash things the kernel itself has no opinion
    /// about, such as a puzzle's original pencilmarks for later comparison.
    pub fn get_custom_info(&self, key: &str) -> Option<&String> {
        self.custom_info.get(key)
    }

    /// Set the givens on the board.
    ///
    /// # Example
    /// ```
    /// # use sudoku_solver_lib::prelude::*;
    /// let mut solver = Solver::default();
    /// let cu = solver.cell_utility();
    /// let cells = [(cu.cell(0, 0), 1), (cu.cell(0, 1), 2), (cu.cell(0, 2), 3)];
    /// assert!(solver.set_givens(cells.into_iter()));
    /// assert!(solver.board().cell(cu.cell(0, 0)).is_solved());
    /// assert!(solver.board().cell(cu.cell(0, 1)).is_solved());
    /// assert!(solver.board().cell(cu.cell(0, 2)).is_solved());
    /// assert!(!solver.board().cell(cu.cell(0, 3)).is_solved());
    /// assert_eq!(solver.board().cell(cu.cell(0, 0)).value(), 1);
    /// assert_eq!(solver.board().cell(cu.cell(0, 1)).value(), 2);
    /// assert_eq!(solver.board().cell(cu.cell(0, 2)).value(), 3);
    /// assert_eq!(solver.board().cell(cu.cell(0, 3)).min(), 4);
    /// ```
    pub fn set_givens(&mut self, givens: impl Iterator<Item = (CellIndex, usize)>) -> bool {
        for (cell, value) in givens {
            if !self.board.cell(cell).is_solved() && !self.board.set_solved(cell, value) {
                return false;
            }
        }

        true
    }

    /// Set the givens from a given string.
    /// The string should be a sequence of numbers, with 0 or any non-digit representing an empty cell.
    /// The string should be in row-major order.
    /// For grid sizes larger than 9, the each number takes the same number of characters, so use 01 for 1, for example.
    ///
    /// # Example
    /// ```
    /// # use sudoku_solver_lib::prelude::*;
    /// let mut solver = Solver::default();
    /// assert!(solver.set_givens_from_string("123000000000000000000000000000000000000000000000000000000000000000000000000000000"));
    ///
    /// let cu = solver.cell_utility();
    /// assert!(solver.board().cell(cu.cell(0, 0)).is_solved());
    /// assert!(solver.board().cell(cu.cell(0, 1)).is_solved());
    /// assert!(solver.board().cell(cu.cell(0, 2)).is_solved());
    /// assert!(!solver.board().cell(cu.cell(0, 3)).is_solved());
    /// assert_eq!(solver.board().cell(cu.cell(0, 0)).value(), 1);
    /// assert_eq!(solver.board().cell(cu.cell(0, 1)).value(), 2);
    /// assert_eq!(solver.board().cell(cu.cell(0, 2)).value(), 3);
    /// assert_eq!(solver.board().cell(cu.cell(0, 3)).min(), 4);
    /// ```
    pub fn set_givens_from_string(&mut self, givens: &str) -> bool {
        let cu = self.board.cell_utility();
        if cu.size() <= 9 {
            if givens.len() != cu.size() * cu.size() {
                return false;
            }

            let givens_itr = givens.chars().enumerate().filter_map(|(i, c)| {
                let value = c.to_digit(10)?;
                if value == 0 {
                    None
                } else {
                    Some((cu.cell_index(i), value as usize))
                }
            });
            self.set_givens(givens_itr)
        } else {
            let num_digits = cu.size().to_string().len();
            if givens.len() != cu.size() * cu.size() * num_digits {
                return false;
            }

            let givens_chunks_itr = givens.chars().chunks(num_digits);
            let givens_itr = givens_chunks_itr.into_iter().enumerate().filter_map(|(i, c)| {
                let val_str = c.collect::<String>();
                let value = val_str.parse::<usize>().ok()?;
                if value == 0 {
                    None
                } else {
                    Some((cu.cell_index(i), value))
                }
            });
            self.set_givens(givens_itr)
        }
    }

    /// Run a single logical step, returning as soon as any technique reports a change or an
    /// invalidity. Each step's description is prefixed with its name, unless the step already
    /// does so itself (see [`LogicalStep::has_own_prefix`]).
    pub fn run_single_logical_step(&mut self) -> LogicalStepResult {
        for step in self.logical_solve_steps.iter() {
            let step_result = step.run(&mut self.board, true);
            if !step_result.is_none() {
                if step.has_own_prefix() {
                    return step_result;
                }
                return step_result.with_prefix(format!("{}: ", step.name()).as_str());
            }
        }

        LogicalStepResult::None
    }

    /// Run a full logical solve. This mutates the solver's board, repeating
    /// [`Solver::run_single_logical_step`] until nothing more changes, the board is solved, or
    /// a contradiction is found.
    pub fn run_logical_solve(&mut self) -> LogicalSolveResult {
        let mut desc_list = LogicalStepDescList::new();
        let mut changed = false;
        loop {
            if self.board.is_solved() {
                desc_list.push("Solved!".into());
                return LogicalSolveResult::Solved(desc_list);
            }

            let step_result = self.run_single_logical_step();
            if step_result.is_none() {
                break;
            }

            changed = true;

            if let Some(desc) = step_result.description() {
                desc_list.push(desc.clone());
            }

            if step_result.is_invalid() {
                return LogicalSolveResult::Invalid(desc_list);
            }
        }

        if changed {
            LogicalSolveResult::Changed(desc_list)
        } else {
            LogicalSolveResult::None
        }
    }

    /// Restricts the logical pipeline to naked and hidden singles only, running both to a
    /// fixed point. Unlike [`Solver::run_logical_solve`], this never touches tuples,
    /// pointing, fishes, wings, chains, or contradiction search — it is the cheap pass the
    /// brute-force driver's cell-selection heuristics and quick external callers want
    /// without paying for the full technique pipeline.
    pub fn apply_singles(&mut self) -> LogicalSolveResult {
        let mut desc_list = LogicalStepDescList::new();
        let mut changed = false;
        loop {
            if self.board.is_solved() {
                desc_list.push("Solved!".into());
                return LogicalSolveResult::Solved(desc_list);
            }

            let naked = NakedSingle.run(&mut self.board, true);
            let hidden = if naked.is_none() { HiddenSingle.run(&mut self.board, true) } else { LogicalStepResult::None };

            let step_result = if !naked.is_none() { naked } else { hidden };
            if step_result.is_none() {
                break;
            }

            changed = true;
            if let Some(desc) = step_result.description() {
                desc_list.push(desc.clone());
            }

            if step_result.is_invalid() {
                return LogicalSolveResult::Invalid(desc_list);
            }
        }

        if changed {
            LogicalSolveResult::Changed(desc_list)
        } else {
            LogicalSolveResult::None
        }
    }

    /// Use brute-force methods to find the first solution to the puzzle, deterministically
    /// (the lexicographically-lowest remaining value is always tried first), using a pool of
    /// worker threads bounded by [`brute_force::worker_count`].
    ///
    /// The solution found is not guaranteed to be the only one.
    pub fn find_first_solution(&self) -> SingleSolutionResult {
        self.brute_force_find(false, Cancellation::default())
    }

    /// Like [`Solver::find_first_solution`], but branches on a uniformly random remaining
    /// value at each step instead of the lowest one, so repeated calls tend to surface
    /// different solutions for puzzles with more than one.
    pub fn find_random_solution(&self) -> SingleSolutionResult {
        self.brute_force_find(true, Cancellation::default())
    }

    fn brute_force_find(&self, randomize: bool, cancellation: Cancellation) -> SingleSolutionResult {
        self.brute_force_find_on(self.board.clone(), cancellation, randomize)
    }

    fn brute_force_find_on(&self, board: Board, cancellation: Cancellation, randomize: bool) -> SingleSolutionResult {
        if !board_is_valid(&board) {
            return SingleSolutionResult::None;
        }

        let steps = self.brute_force_steps.clone();
        match brute_force::find_any_solution(steps, board, cancellation, randomize) {
            Some(board) => SingleSolutionResult::Solved(Box::new(board)),
            None => SingleSolutionResult::None,
        }
    }

    /// Counts solutions up to `max_solutions` (0 means uncapped, returning an exact count).
    ///
    /// Every solution found is reported to `receiver` (if provided) as it is discovered.
    /// Exact counts for a given board and cap are cached in a process-wide memo table when no
    /// receiver is in play, since re-counting an unchanged board is wasted work.
    ///
    /// Shorthand for [`Solver::find_solution_count_ex`] with `multithread` off and no
    /// dedup/skip set.
    pub fn find_solution_count(
        &self,
        max_solutions: usize,
        receiver: Option<&mut dyn SolutionReceiver>,
        cancellation: impl Into<Cancellation>,
    ) -> SolutionCountResult {
        self.find_solution_count_ex(max_solutions, false, None, receiver, cancellation)
    }

    /// Counts solutions up to `max_solutions` (0 means uncapped, returning an exact count),
    /// optionally spreading the DFS over a pool of worker threads and/or excluding any
    /// solution whose canonical given-string (its [`Board`]'s `Display` rendering) appears
    /// in `skip_given_strings` — used to deduplicate counts across repeated calls that
    /// progressively exclude solutions already seen.
    ///
    /// Every solution found (after the skip-set filter) is reported to `receiver` as it is
    /// discovered. Exact counts are cached in a process-wide memo table only for the
    /// single-threaded, receiver-free, skip-set-free path, since that's the only one whose
    /// result depends solely on the board and cap.
    pub fn find_solution_count_ex(
        &self,
        max_solutions: usize,
        multithread: bool,
        skip_given_strings: Option<&std::collections::HashSet<String>>,
        mut receiver: Option<&mut dyn SolutionReceiver>,
        cancellation: impl Into<Cancellation>,
    ) -> SolutionCountResult {
        if !board_is_valid(&self.board) {
            return SolutionCountResult::None;
        }

        let cancellation = cancellation.into();
        let cacheable = receiver.is_none() && skip_given_strings.is_none() && !multithread;
        let memo_key = memo::solution_count_key(&self.board, max_solutions);
        if cacheable {
            if let Some(cached) = memo::get_solution_count(&memo_key) {
                return cached;
            }
        }

        let (count, cancelled) = if multithread {
            let mut seen = 0usize;
            let cancelled = brute_force::count_solutions_multithreaded(
                self.brute_force_steps.clone(),
                self.board.clone(),
                cancellation,
                &mut |board| {
                    if let Some(skip) = skip_given_strings {
                        if skip.contains(&board.to_string()) {
                            return true;
                        }
                    }
                    seen += 1;
                    let keep_going = match receiver.as_deref_mut() {
                        Some(receiver) => {
                            receiver.progress_ping(seen);
                            receiver.receive(Box::new(board))
                        }
                        None => true,
                    };
                    let reached_cap = max_solutions != 0 && seen >= max_solutions;
                    keep_going && !reached_cap
                },
            );
            (seen, cancelled)
        } else {
            let mut count = 0usize;
            let mut rng = None;
            let cancelled = brute_force::dfs(
                &self.brute_force_steps,
                self.board.clone(),
                &cancellation,
                &mut rng,
                &mut |board| {
                    if let Some(skip) = skip_given_strings {
                        if skip.contains(&board.to_string()) {
                            return brute_force::Visit::Continue;
                        }
                    }
                    count += 1;
                    let keep_going = match receiver.as_deref_mut() {
                        Some(receiver) => {
                            receiver.progress_ping(count);
                            receiver.receive(Box::new(board))
                        }
                        None => true,
                    };
                    let reached_cap = max_solutions != 0 && count >= max_solutions;
                    if keep_going && !reached_cap {
                        brute_force::Visit::Continue
                    } else {
                        brute_force::Visit::Stop
                    }
                },
            );
            (count, cancelled)
        };

        if cancelled {
            return SolutionCountResult::AtLeastCount(count);
        }

        let result = if count == 0 {
            SolutionCountResult::None
        } else if max_solutions != 0 && count >= max_solutions {
            SolutionCountResult::AtLeastCount(count)
        } else {
            SolutionCountResult::ExactCount(count)
        };

        if cacheable && result.is_exact_count() {
            memo::insert_solution_count(memo_key, result.clone());
        }

        result
    }

    /// Computes the *true candidates*: the union, over every solution, of the values that
    /// still appear somewhere. Returns [`SingleSolutionResult::Solved`] with a board whose
    /// cell masks are the true candidate sets (not necessarily single values).
    pub fn find_true_candidates(&self) -> SingleSolutionResult {
        match self.find_true_candidates_with_count(0, Cancellation::default()) {
            TrueCandidatesCountResult::None => SingleSolutionResult::None,
            TrueCandidatesCountResult::Error(err) => SingleSolutionResult::Error(err),
            TrueCandidatesCountResult::Solved(board) => SingleSolutionResult::Solved(board),
            TrueCandidatesCountResult::Candidates(board, _) => SingleSolutionResult::Solved(board),
        }
    }

    /// Like [`Solver::find_true_candidates`], but additionally counts how many of up to
    /// `max_solutions_to_check` distinct solutions support each surviving candidate.
    ///
    /// Each candidate still on the board is tested by fixing it and searching for any
    /// solution; candidates with no supporting solution are cleared. `max_solutions_to_check`
    /// of 0 means every candidate is tested without a cap.
    pub fn find_true_candidates_with_count(
        &self,
        max_solutions_to_check: usize,
        cancellation: impl Into<Cancellation>,
    ) -> TrueCandidatesCountResult {
        if !board_is_valid(&self.board) {
            return TrueCandidatesCountResult::None;
        }

        let cancellation = cancellation.into();
        let cu = self.board.cell_utility();

        // Seed with a single real solution so there is something to report even if the board
        // turns out to already be uniquely solved.
        let seed = match self.brute_force_find(false, cancellation.clone()) {
            SingleSolutionResult::Solved(board) => *board,
            SingleSolutionResult::None => return TrueCandidatesCountResult::None,
            SingleSolutionResult::Error(err) => return TrueCandidatesCountResult::Error(err),
        };

        if cancellation.check() {
            return TrueCandidatesCountResult::Solved(Box::new(seed));
        }

        let mut real_mask: Vec<ValueMask> = seed.all_cell_masks().map(|(_, mask)| mask).collect();
        let track_counts = max_solutions_to_check != 0;
        let mut counts: Vec<usize> = vec![0; self.board.num_candidates()];
        if track_counts {
            for (cell, mask) in seed.all_cell_masks() {
                for value in mask {
                    counts[cu.candidate(cell, value).index()] += 1;
                }
            }
        }

        let mut solutions_examined = 1usize;
        for candidate in cu.all_candidates() {
            if cancellation.check() {
                break;
            }

            let (cell, value) = candidate.cell_index_and_value();
            if real_mask[cell.index()].has(value) {
                continue;
            }
            if !self.board.has_candidate(candidate) {
                continue;
            }
            if track_counts && max_solutions_to_check != 0 && solutions_examined >= max_solutions_to_check {
                break;
            }

            let mut attempt = self.board.clone();
            if !attempt.set_solved(cell, value) {
                continue;
            }

            if let SingleSolutionResult::Solved(solution) =
                self.brute_force_find_on(attempt, cancellation.clone(), false)
            {
                solutions_examined += 1;
                for (solved_cell, mask) in solution.all_cell_masks() {
                    real_mask[solved_cell.index()] = real_mask[solved_cell.index()] | mask;
                    if track_counts {
                        for v in mask {
                            counts[cu.candidate(solved_cell, v).index()] += 1;
                        }
                    }
                }
            }
        }

        let mut result_board = seed;
        for cell in cu.all_cells() {
            result_board.set_mask(cell.index(), real_mask[cell.index()]);
        }

        if real_mask.iter().all(|mask| mask.is_single()) {
            return TrueCandidatesCountResult::Solved(Box::new(result_board));
        }

        TrueCandidatesCountResult::Candidates(Box::new(result_board), counts)
    }
}

impl Default for Solver {
    fn default() -> Self {
        SolverBuilder::default()
            .build()
            .expect("default solver configuration is always valid")
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_first_solution() {
        let solver = Solver::default();
        let result = solver.find_first_solution();
        assert!(result.is_solved());

        let board = result.board().unwrap();
        assert!(board.is_solved());
        println!("Solved: {}", board);
    }

    #[test]
    fn test_random_solution_is_a_valid_solution() {
        let solver = Solver::default();
        let result = solver.find_random_solution();
        assert!(result.is_solved());
        assert!(result.board().unwrap().is_solved());
    }

    #[test]
    fn test_solution_count_classical_empty_board() {
        let solver = Solver::default();
        let result = solver.find_solution_count(1, None, Cancellation::default());
        assert!(result.has_count());
        assert_eq!(result.count(), Some(1));
    }

    #[test]
    fn test_classical_empty_board_has_more_than_one_solution() {
        let solver = Solver::default();
        let result = solver.find_solution_count(2, None, Cancellation::default());
        assert!(result.has_count());
        assert_eq!(result.count(), Some(2));
    }

    #[test]
    fn test_near_minimal_clue_puzzle_has_a_unique_solution() {
        // A sparse (23-clue) classic Sudoku with a verified unique solution, standing in
        // for the 17-clue boundary case: far below the 81 givens of a solved board, but
        // still pinned down to exactly one completion.
        let givens = "004000050003000048000063000000002004005000090190007060007030005900006000500700200";
        let mut solver = Solver::default();
        assert!(solver.set_givens_from_string(givens));

        let result = solver.find_solution_count(2, None, Cancellation::default());
        assert!(result.has_count());
        assert_eq!(result.count(), Some(1));

        let found = solver.find_first_solution();
        assert!(found.is_solved());
        assert!(found.board().unwrap().is_solved());
    }

    #[test]
    fn test_contradictory_givens_are_rejected() {
        let mut solver = Solver::default();
        let cu = solver.cell_utility();
        assert!(!solver.set_givens([(cu.cell(0, 0), 1), (cu.cell(0, 1), 1)].into_iter()));
    }

    #[test]
    fn test_find_true_candidates_on_already_solved_board() {
        let mut solver = Solver::default();
        let solved = *solver.find_first_solution().board().unwrap();
        let givens: Vec<(CellIndex, usize)> = solved
            .all_cell_masks()
            .map(|(cell, mask)| (cell, mask.value()))
            .collect();
        assert!(solver.set_givens(givens.into_iter()));

        let result = solver.find_true_candidates();
        assert!(result.is_solved());
        assert!(result.board().unwrap().is_solved());
    }

    #[test]
    fn test_apply_singles_cascades_and_then_settles() {
        let mut solver = Solver::default();
        let solved = *solver.find_first_solution().board().unwrap();
        let cu = solver.cell_utility();

        // Give every cell but the last two in row 1; the cascade of naked/hidden singles
        // should fill both in without needing any other technique.
        let givens: Vec<(CellIndex, usize)> = solved
            .all_cell_masks()
            .filter(|&(cell, _)| cell != cu.cell(0, 7) && cell != cu.cell(0, 8))
            .map(|(cell, mask)| (cell, mask.value()))
            .collect();
        assert!(solver.set_givens(givens.into_iter()));

        let result = solver.apply_singles();
        assert!(result.is_changed() || result.is_solved());
        assert!(solver.board().cell(cu.cell(0, 7)).is_solved());
        assert!(solver.board().cell(cu.cell(0, 8)).is_solved());

        let settled = solver.apply_singles();
        assert!(settled.is_none() || settled.is_solved());
    }

    #[test]
    fn test_run_single_logical_step_does_not_error_on_partial_givens() {
        let mut solver = Solver::default();
        let cu = solver.cell_utility();
        assert!(solver.set_givens([(cu.cell(0, 0), 1), (cu.cell(0, 1), 2)].into_iter()));

        let result = solver.run_single_logical_step();
        assert!(!result.is_invalid());
    }
}
