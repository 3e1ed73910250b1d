use crate::prelude::*;

/// Generalized pointing / box-line reduction.
///
/// For a tuple size `k`, looks at each house and each constraint in turn. For a house,
/// the "cells which must contain v" are simply the unfixed cells of the house with `v`
/// still a candidate; for a constraint, the same question is answered by
/// [`Constraint::cells_must_contain`]. If that set has at most `k` cells, `v` is
/// eliminated from every cell weakly linked to all of them.
///
/// A size-2 pointing is run before a size-3 naked tuple since it is cheaper to find and
/// at least as restrictive, which is why [`Pointing`] and [`NakedTuples`](super::naked_tuples::NakedTuples)
/// of the same size are interleaved with pointing first.
#[derive(Debug)]
pub struct Pointing {
    size: usize,
}

impl Pointing {
    /// Creates a new instance for tuple size `size` (the maximum number of witnessing
    /// cells a value may have and still trigger an elimination).
    pub fn new(size: usize) -> Self {
        Self { size }
    }
}

fn eliminate_from_witnesses(board: &mut Board, witnesses: &[CellIndex], value: usize, generate_description: bool) -> Option<LogicalStepResult> {
    let cu = board.cell_utility();
    let bd = board.data();

    let mut elim_set = CandidateLinks::new(board.size());
    let mut is_first = true;
    for &cell in witnesses {
        let candidate = cu.candidate(cell, value);
        if is_first {
            elim_set.union(bd.weak_links_for(candidate));
            is_first = false;
        } else {
            elim_set.intersect(bd.weak_links_for(candidate));
        }
    }

    if elim_set.is_empty() {
        return None;
    }

    let mut elims = EliminationList::new();
    for candidate in elim_set.links() {
        if board.has_candidate(candidate) && witnesses.iter().all(|&c| c != candidate.cell_index()) {
            elims.add(candidate);
        }
    }

    if elims.is_empty() {
        return None;
    }

    let desc = if generate_description {
        Some(LogicalStepDesc::from_elims(&format!("{} in {}", value, cu.compact_name(witnesses)), &elims))
    } else {
        None
    };

    if !board.clear_candidates(elims.iter()) {
        return Some(LogicalStepResult::Invalid(desc));
    }
    Some(LogicalStepResult::Changed(desc))
}

impl LogicalStep for Pointing {
    fn name(&self) -> &'static str {
        "Pointing"
    }

    fn run(&self, board: &mut Board, generate_description: bool) -> LogicalStepResult {
        let size = board.size();
        let k = self.size;

        for house in board.houses().to_vec() {
            for value in 1..=size {
                let witnesses: Vec<CellIndex> = house
                    .cells()
                    .iter()
                    .copied()
                    .filter(|&cell| {
                        let mask = board.cell(cell);
                        !mask.is_solved() && mask.has(value)
                    })
                    .collect();

                if witnesses.is_empty() || witnesses.len() > k {
                    continue;
                }

                if let Some(result) = eliminate_from_witnesses(board, &witnesses, value, generate_description) {
                    return result;
                }
            }
        }

        for constraint in board.constraints().to_vec() {
            for value in 1..=size {
                let witnesses = constraint.cells_must_contain(board, value);
                if witnesses.is_empty() || witnesses.len() > k {
                    continue;
                }

                if let Some(result) = eliminate_from_witnesses(board, &witnesses, value, generate_description) {
                    return result;
                }
            }
        }

        LogicalStepResult::None
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_pointing_in_region() {
        let mut board = Board::default();
        let cu = board.cell_utility();

        // Remove 1 as a candidate from every cell of row 1 except the first box,
        // so 1 must go in r1c123 within box 1.
        for col in 3..9 {
            assert!(board.clear_value(cu.cell(0, col), 1));
        }

        let pointing = Pointing::new(2);
        let result = pointing.run(&mut board, true);

        // Box 1's witnesses for 1 are r1c1, r1c2, r1c3 (size 3), which is too many for a
        // size-2 pointer, so nothing should happen yet.
        assert!(result.is_none());

        let pointing = Pointing::new(3);
        let result = pointing.run(&mut board, true);
        assert!(result.is_changed());

        // 1 should now be eliminated from the rest of box 1 (r2c1..3, r3c1..3).
        assert!(!board.cell(cu.cell(1, 0)).has(1));
        assert!(!board.cell(cu.cell(2, 2)).has(1));
    }
}
