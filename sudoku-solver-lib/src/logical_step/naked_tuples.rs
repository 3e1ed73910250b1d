use crate::prelude::*;
use itertools::Itertools;

/// Naked tuples of a fixed size.
///
/// For each house, looks for `size` unfixed cells whose combined candidates number
/// exactly `size`. None of those values can appear anywhere else in the house, and
/// additionally, for each of the tuple's values, any cell weakly linked to every cell
/// of the tuple that holds that value can have it eliminated too.
#[derive(Debug)]
pub struct NakedTuples {
    size: usize,
}

impl NakedTuples {
    /// Creates a new instance for tuple size `size` (2..=board_size - 1).
    pub fn new(size: usize) -> Self {
        Self { size }
    }
}

impl LogicalStep for NakedTuples {
    fn name(&self) -> &'static str {
        "Naked Tuple"
    }

    fn run(&self, board: &mut Board, generate_description: bool) -> LogicalStepResult {
        let k = self.size;
        let cu = board.cell_utility();

        for house in board.houses().to_vec() {
            let unfixed_cells: Vec<CellIndex> =
                house.cells().iter().copied().filter(|&cell| !board.cell(cell).is_solved()).collect();

            if unfixed_cells.len() <= k {
                continue;
            }

            for combo in unfixed_cells.iter().copied().combinations(k) {
                let union_mask =
                    combo.iter().fold(ValueMask::new(), |mask, &cell| mask | board.cell(cell));

                if union_mask.count() != k {
                    continue;
                }

                let mut elims = EliminationList::new();

                // Eliminate the tuple's values from the rest of the house.
                for &cell in &unfixed_cells {
                    if combo.contains(&cell) {
                        continue;
                    }
                    for value in union_mask & board.cell(cell) {
                        elims.add(cell.candidate(value));
                    }
                }

                // Eliminate each value from any cell weakly linked to every bearer of it.
                let bd = board.data();
                for value in union_mask {
                    let bearers: Vec<CellIndex> =
                        combo.iter().copied().filter(|&cell| board.cell(cell).has(value)).collect();

                    let mut elim_set = CandidateLinks::new(board.size());
                    let mut is_first = true;
                    for &cell in &bearers {
                        let candidate = cu.candidate(cell, value);
                        if is_first {
                            elim_set.union(bd.weak_links_for(candidate));
                            is_first = false;
                        } else {
                            elim_set.intersect(bd.weak_links_for(candidate));
                        }
                    }

                    for candidate in elim_set.links() {
                        if board.has_candidate(candidate) && !combo.contains(&candidate.cell_index()) {
                            elims.add(candidate);
                        }
                    }
                }

                if elims.is_empty() {
                    continue;
                }

                let desc = if generate_description {
                    Some(LogicalStepDesc::from_elims(&cu.compact_name(&combo), &elims))
                } else {
                    None
                };

                if !board.clear_candidates(elims.iter()) {
                    return LogicalStepResult::Invalid(desc);
                }
                return LogicalStepResult::Changed(desc);
            }
        }

        LogicalStepResult::None
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_naked_pair() {
        let mut board = Board::default();
        let cu = board.cell_utility();

        // Restrict r1c1 and r1c2 to only candidates 1 and 2.
        board.keep_mask(cu.cell(0, 0), ValueMask::from_values(&[1, 2]));
        board.keep_mask(cu.cell(0, 1), ValueMask::from_values(&[1, 2]));

        let naked_tuples = NakedTuples::new(2);
        let result = naked_tuples.run(&mut board, true);
        assert!(result.is_changed());

        // 1 and 2 should be eliminated from the rest of row 1.
        for col in 2..9 {
            let mask = board.cell(cu.cell(0, col));
            assert!(!mask.has(1));
            assert!(!mask.has(2));
        }
    }
}
