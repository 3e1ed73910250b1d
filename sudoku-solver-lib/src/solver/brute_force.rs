//! The brute-force search used to find solutions, count them, or compute true candidates.
//!
//! The search is an iterative DFS over a stack of [`Board`] clones: each node is
//! consolidated with [`Solver::brute_force_steps`](crate::solver::Solver) to a fixed point,
//! then branches on [`select_branch_cell`]. Finding any single solution additionally runs
//! over a small pool of OS threads bounded by [`worker_count`], since that path never needs
//! to hand a solution back through a borrowed receiver.

use crate::prelude::*;
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use std::sync::{
    atomic::{AtomicBool, AtomicUsize, Ordering},
    Arc, Mutex,
};

/// Number of worker threads to use for a parallel brute-force search: `max(1, cores - 1)`,
/// leaving one core free for the caller.
pub(crate) fn worker_count() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
        .saturating_sub(1)
        .max(1)
}

/// Picks the next cell to branch on.
///
/// A 2-candidate cell is returned immediately. Failing that, cells belonging to the
/// smallest house whose unsolved cells are mutually exclusive (no repeated value possible)
/// are preferred. If every remaining cell has at least 4 candidates, a cell holding a
/// bilocal value (a value with exactly two remaining witnesses in one of its houses) is
/// preferred instead. Otherwise the cell with the fewest candidates is used.
pub(crate) fn select_branch_cell(board: &Board) -> Option<CellIndex> {
    let unsolved: Vec<CellIndex> = board.all_cells().filter(|&c| !board.cell(c).is_solved()).collect();
    if unsolved.is_empty() {
        return None;
    }

    if let Some(&cell) = unsolved.iter().find(|&&c| board.cell(c).count() == 2) {
        return Some(cell);
    }

    let mut best_in_group: Option<(CellIndex, usize, usize)> = None;
    for &cell in &unsolved {
        for house in board.houses_for_cell(cell) {
            let house_unsolved: Vec<CellIndex> =
                house.cells().iter().copied().filter(|&c| !board.cell(c).is_solved()).collect();
            if house_unsolved.len() < 2 || !board.is_grouped(&house_unsolved) {
                continue;
            }
            let candidate_count = board.cell(cell).count();
            let group_size = house_unsolved.len();
            let better = match best_in_group {
                None => true,
                Some((_, best_group_size, best_candidate_count)) => {
                    group_size < best_group_size
                        || (group_size == best_group_size && candidate_count < best_candidate_count)
                }
            };
            if better {
                best_in_group = Some((cell, group_size, candidate_count));
            }
        }
    }
    if let Some((cell, _, _)) = best_in_group {
        return Some(cell);
    }

    for &cell in &unsolved {
        let mask = board.cell(cell);
        for value in mask {
            let is_bilocal = board.houses_for_cell(cell).iter().any(|house| {
                house
                    .cells()
                    .iter()
                    .filter(|&&c| !board.cell(c).is_solved() && board.cell(c).has(value))
                    .count()
                    == 2
            });
            if is_bilocal {
                return Some(cell);
            }
        }
    }

    unsolved.into_iter().min_by_key(|&c| board.cell(c).count())
}

/// Picks which value of `mask` to branch on first: the lowest value deterministically, or a
/// uniformly random one when `rng` is provided.
pub(crate) fn choose_branch_value(mask: ValueMask, rng: &mut Option<StdRng>) -> usize {
    match rng {
        Some(rng) => *mask.to_vec().choose(rng).expect("mask must be non-empty to branch on"),
        None => mask.min(),
    }
}

/// Runs `board`'s brute-force steps to a fixed point. Returns `false` if a contradiction
/// was found.
fn consolidate(steps: &[Arc<dyn LogicalStep>], board: &mut Board) -> bool {
    loop {
        let mut changed = false;
        for step in steps {
            let result = step.run(board, false);
            if result.is_invalid() {
                return false;
            }
            if result.is_changed() {
                changed = true;
            }
        }
        if !changed {
            return true;
        }
    }
}

/// What to do after visiting one completed solution in a DFS search.
pub(crate) enum Visit {
    /// Keep searching for further solutions.
    Continue,
    /// Stop the search immediately.
    Stop,
}

/// Runs a single-threaded iterative DFS starting from `initial`, calling `on_solution` for
/// every completed board found.
///
/// Returns `true` if the search was cancelled before the stack was exhausted (or before
/// `on_solution` asked to stop).
pub(crate) fn dfs(
    steps: &[Arc<dyn LogicalStep>],
    initial: Board,
    cancellation: &Cancellation,
    rng: &mut Option<StdRng>,
    on_solution: &mut dyn FnMut(Board) -> Visit,
) -> bool {
    let mut stack = vec![initial];

    while let Some(mut board) = stack.pop() {
        if cancellation.check() {
            return true;
        }

        if !consolidate(steps, &mut board) {
            continue;
        }

        if board.is_solved() {
            if matches!(on_solution(board), Visit::Stop) {
                return false;
            }
            continue;
        }

        let Some(cell) = select_branch_cell(&board) else {
            continue;
        };
        let value = choose_branch_value(board.cell(cell), rng);

        let mut without_value = board.clone();
        if without_value.clear_value(cell, value) {
            stack.push(without_value);
        }
        if board.set_solved(cell, value) {
            stack.push(board);
        }
    }

    false
}

struct SharedSearch {
    stack: Mutex<Vec<Board>>,
    active: AtomicUsize,
    done: AtomicBool,
    result: Mutex<Option<Board>>,
    cancellation: Cancellation,
}

/// Shared state for a multithreaded solution count: a work-stealing stack of board clones.
/// `on_solution` is invoked under a short-lived lock for every completed board, which is also
/// where deduplication against a caller-supplied skip set and cap counting happens; its return
/// value (keep going or stop) is the only thing that ends the search, so a skipped board never
/// counts against the cap.
struct SharedCount<'a> {
    stack: Mutex<Vec<Board>>,
    active: AtomicUsize,
    done: AtomicBool,
    cancellation: Cancellation,
    on_solution: Mutex<&'a mut dyn FnMut(Board) -> bool + Send>,
}

fn count_worker(steps: Arc<Vec<Arc<dyn LogicalStep>>>, shared: &SharedCount, mut rng: Option<StdRng>) {
    loop {
        if shared.done.load(Ordering::Acquire) {
            return;
        }
        if shared.cancellation.check() {
            shared.done.store(true, Ordering::Release);
            return;
        }

        let board = {
            let mut stack = shared.stack.lock().unwrap();
            let board = stack.pop();
            if board.is_some() {
                shared.active.fetch_add(1, Ordering::AcqRel);
            }
            board
        };
        let Some(mut board) = board else {
            if shared.active.load(Ordering::Acquire) == 0 {
                shared.done.store(true, Ordering::Release);
                return;
            }
            std::thread::yield_now();
            continue;
        };

        if consolidate(&steps, &mut board) {
            if board.is_solved() {
                let keep_going = (shared.on_solution.lock().unwrap())(board);
                if !keep_going {
                    shared.done.store(true, Ordering::Release);
                }
            } else if let Some(cell) = select_branch_cell(&board) {
                let value = choose_branch_value(board.cell(cell), &mut rng);

                let mut without_value = board.clone();
                let mut stack = shared.stack.lock().unwrap();
                if without_value.clear_value(cell, value) {
                    stack.push(without_value);
                }
                if board.set_solved(cell, value) {
                    stack.push(board);
                }
            }
        }

        shared.active.fetch_sub(1, Ordering::AcqRel);
    }
}

/// Counts solutions using a pool of [`worker_count`] OS threads.
///
/// `on_solution` is called once per completed board found by any worker (a skip set, a cap,
/// and the running count are entirely the caller's responsibility) and returns whether the
/// search should keep going; once any invocation returns `false`, every worker stops. Returns
/// whether the cancellation was triggered.
pub(crate) fn count_solutions_multithreaded(
    steps: Vec<Arc<dyn LogicalStep>>,
    initial: Board,
    cancellation: Cancellation,
    on_solution: &mut dyn FnMut(Board) -> bool + Send,
) -> bool {
    let steps = Arc::new(steps);
    let shared = SharedCount {
        stack: Mutex::new(vec![initial]),
        active: AtomicUsize::new(0),
        done: AtomicBool::new(false),
        cancellation: cancellation.clone(),
        on_solution: Mutex::new(on_solution),
    };

    let thread_count = worker_count();
    std::thread::scope(|scope| {
        for _ in 0..thread_count {
            let steps = Arc::clone(&steps);
            let shared = &shared;
            scope.spawn(move || count_worker(steps, shared, None));
        }
    });

    cancellation.check()
}

fn worker(steps: Arc<Vec<Arc<dyn LogicalStep>>>, shared: Arc<SharedSearch>, mut rng: Option<StdRng>) {
    loop {
        if shared.done.load(Ordering::Acquire) {
            return;
        }
        if shared.cancellation.check() {
            shared.done.store(true, Ordering::Release);
            return;
        }

        let board = {
            let mut stack = shared.stack.lock().unwrap();
            let board = stack.pop();
            if board.is_some() {
                shared.active.fetch_add(1, Ordering::AcqRel);
            }
            board
        };
        let Some(mut board) = board else {
            if shared.active.load(Ordering::Acquire) == 0 {
                shared.done.store(true, Ordering::Release);
                return;
            }
            std::thread::yield_now();
            continue;
        };

        if consolidate(&steps, &mut board) {
            if board.is_solved() {
                let mut result = shared.result.lock().unwrap();
                if result.is_none() {
                    *result = Some(board);
                }
                shared.done.store(true, Ordering::Release);
            } else if let Some(cell) = select_branch_cell(&board) {
                let value = choose_branch_value(board.cell(cell), &mut rng);

                let mut without_value = board.clone();
                let mut stack = shared.stack.lock().unwrap();
                if without_value.clear_value(cell, value) {
                    stack.push(without_value);
                }
                if board.set_solved(cell, value) {
                    stack.push(board);
                }
            }
        }

        shared.active.fetch_sub(1, Ordering::AcqRel);
    }
}

/// Searches for any single solution using a pool of [`worker_count`] OS threads, stopping
/// as soon as the first one is found (first writer wins).
///
/// When `randomize` is set, each worker branches on a uniformly random remaining value
/// instead of the lowest one, using its own independently-seeded PRNG.
pub(crate) fn find_any_solution(
    steps: Vec<Arc<dyn LogicalStep>>,
    initial: Board,
    cancellation: Cancellation,
    randomize: bool,
) -> Option<Board> {
    let steps = Arc::new(steps);
    let shared = Arc::new(SharedSearch {
        stack: Mutex::new(vec![initial]),
        active: AtomicUsize::new(0),
        done: AtomicBool::new(false),
        result: Mutex::new(None),
        cancellation,
    });

    let thread_count = worker_count();
    std::thread::scope(|scope| {
        for _ in 0..thread_count {
            let steps = Arc::clone(&steps);
            let shared = Arc::clone(&shared);
            let rng = if randomize { Some(StdRng::from_entropy()) } else { None };
            scope.spawn(move || worker(steps, shared, rng));
        }
    });

    shared.result.lock().unwrap().take()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_select_branch_cell_prefers_bivalue() {
        let mut board = Board::default();
        let cu = board.cell_utility();
        assert!(board.keep_mask(cu.cell(4, 4), ValueMask::from_values(&[3, 7])));

        let cell = select_branch_cell(&board).unwrap();
        assert_eq!(cell, cu.cell(4, 4));
    }

    #[test]
    fn test_choose_branch_value_deterministic() {
        let mask = ValueMask::from_values(&[2, 5, 9]);
        let mut rng = None;
        assert_eq!(choose_branch_value(mask, &mut rng), 2);
    }

    #[test]
    fn test_find_any_solution_classical() {
        let board = Board::default();
        let steps: Vec<Arc<dyn LogicalStep>> = vec![Arc::new(AllNakedSingles)];
        let solution = find_any_solution(steps, board, Cancellation::default(), false);
        assert!(solution.is_some());
        assert!(solution.unwrap().is_solved());
    }
}
