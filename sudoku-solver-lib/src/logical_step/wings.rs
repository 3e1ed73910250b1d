use crate::prelude::*;
use itertools::Itertools;

/// Y-Wing: three bivalue cells `pivot`, `pincer1`, `pincer2` with candidates `{a,b}`,
/// `{a,c}`, `{b,c}` respectively, where the pivot is weakly linked to each pincer on
/// their shared value. The value `c` can then be eliminated from any cell weakly linked
/// to both pincers.
#[derive(Debug)]
pub struct YWing;

impl LogicalStep for YWing {
    fn name(&self) -> &'static str {
        "Y-Wing"
    }

    fn run(&self, board: &mut Board, generate_description: bool) -> LogicalStepResult {
        let cu = board.cell_utility();

        let bivalue_cells: Vec<(CellIndex, usize, usize)> = board
            .all_cells()
            .filter_map(|cell| {
                let mask = board.cell(cell);
                if mask.is_solved() || mask.count() != 2 {
                    return None;
                }
                let values = mask.to_vec();
                Some((cell, values[0], values[1]))
            })
            .collect();

        for &(pivot, a, b) in &bivalue_cells {
            let pincers_for_a: Vec<(CellIndex, usize)> = bivalue_cells
                .iter()
                .filter(|&&(cell, v0, v1)| cell != pivot && (v0 == a || v1 == a))
                .filter(|&&(cell, v0, v1)| board.data().has_weak_link(cu.candidate(pivot, a), cu.candidate(cell, a)))
                .map(|&(cell, v0, v1)| (cell, if v0 == a { v1 } else { v0 }))
                .collect();

            let pincers_for_b: Vec<(CellIndex, usize)> = bivalue_cells
                .iter()
                .filter(|&&(cell, v0, v1)| cell != pivot && (v0 == b || v1 == b))
                .filter(|&&(cell, v0, v1)| board.data().has_weak_link(cu.candidate(pivot, b), cu.candidate(cell, b)))
                .map(|&(cell, v0, v1)| (cell, if v0 == b { v1 } else { v0 }))
                .collect();

            for &(pincer1, c1) in &pincers_for_a {
                for &(pincer2, c2) in &pincers_for_b {
                    if pincer1 == pincer2 || c1 != c2 {
                        continue;
                    }
                    let c = c1;

                    let cand1 = cu.candidate(pincer1, c);
                    let cand2 = cu.candidate(pincer2, c);
                    let bd = board.data();
                    let mut elim_set = bd.weak_links_for(cand1).clone();
                    elim_set.intersect(bd.weak_links_for(cand2));

                    let mut elims = EliminationList::new();
                    for candidate in elim_set.links() {
                        if board.has_candidate(candidate) && candidate.cell_index() != pincer1 && candidate.cell_index() != pincer2 {
                            elims.add(candidate);
                        }
                    }

                    if elims.is_empty() {
                        continue;
                    }

                    let desc = if generate_description {
                        Some(LogicalStepDesc::from_elims(
                            &format!("{}-{}-{}", pivot, pincer1, pincer2),
                            &elims,
                        ))
                    } else {
                        None
                    };

                    if !board.clear_candidates(elims.iter()) {
                        return LogicalStepResult::Invalid(desc);
                    }
                    return LogicalStepResult::Changed(desc);
                }
            }
        }

        LogicalStepResult::None
    }
}

/// Unorthodox tuples and N-wings, generalized to any tuple size `k` from 3 up to the
/// board's maximum value.
///
/// Enumerates `k`-cell combinations maintaining an incremental validity predicate: the
/// accumulated candidate mask's popcount never exceeds `k`, and with all `k` cells chosen
/// it is exactly `k`. Each value in the accumulated mask must be *grouped* (every pair of
/// its bearing cells mutually weakly linked on that value), with at most one value allowed
/// to be non-grouped.
///
/// If every value is grouped, this is an *unorthodox tuple*: the whole mask can be
/// eliminated from any cell weakly linked to every bearer. If exactly one value is
/// non-grouped, this is an *N-wing*: that value must appear somewhere in the k cells, so it
/// can be eliminated from any cell weakly linked to every one of its own bearers.
#[derive(Debug)]
pub struct NWing {
    size: usize,
}

impl NWing {
    /// Creates a new instance for tuple size `size` (3..=board_size).
    pub fn new(size: usize) -> Self {
        Self { size }
    }
}

/// Returns `true` if every pair of `cells` is mutually weakly linked on `value`.
fn is_grouped_on(board: &Board, cells: &[CellIndex], value: usize) -> bool {
    let cu = board.cell_utility();
    let bd = board.data();
    cells
        .iter()
        .tuple_combinations()
        .all(|(&c0, &c1)| bd.has_weak_link(cu.candidate(c0, value), cu.candidate(c1, value)))
}

impl LogicalStep for NWing {
    fn name(&self) -> &'static str {
        "Unorthodox Tuple"
    }

    fn run(&self, board: &mut Board, generate_description: bool) -> LogicalStepResult {
        let k = self.size;
        let cu = board.cell_utility();

        // Only cells with a small enough candidate count can possibly belong to a k-tuple.
        let candidate_cells: Vec<CellIndex> = board
            .all_cells()
            .filter(|&cell| {
                let mask = board.cell(cell);
                !mask.is_solved() && mask.count() <= k
            })
            .collect();

        if candidate_cells.len() < k {
            return LogicalStepResult::None;
        }

        for combo in candidate_cells.iter().copied().combinations(k) {
            let union_mask = combo.iter().fold(ValueMask::new(), |mask, &cell| mask | board.cell(cell));
            if union_mask.count() > k {
                continue;
            }

            let mut non_grouped_value: Option<usize> = None;
            let mut all_grouped_or_single = true;

            for value in union_mask {
                let bearers: Vec<CellIndex> = combo.iter().copied().filter(|&cell| board.cell(cell).has(value)).collect();
                if bearers.len() <= 1 || is_grouped_on(board, &bearers, value) {
                    continue;
                }

                if non_grouped_value.is_some() {
                    all_grouped_or_single = false;
                    break;
                }
                non_grouped_value = Some(value);
            }

            if !all_grouped_or_single {
                continue;
            }

            let mut elims = EliminationList::new();

            match non_grouped_value {
                None => {
                    // Unorthodox tuple: eliminate the whole mask from cells seeing every bearer.
                    for value in union_mask {
                        let bearers: Vec<CellIndex> = combo.iter().copied().filter(|&cell| board.cell(cell).has(value)).collect();
                        add_shared_weak_link_eliminations(board, &bearers, value, &combo, &mut elims);
                    }
                }
                Some(value) => {
                    // N-wing: value must land in one of the bearers.
                    let bearers: Vec<CellIndex> = combo.iter().copied().filter(|&cell| board.cell(cell).has(value)).collect();
                    add_shared_weak_link_eliminations(board, &bearers, value, &combo, &mut elims);
                }
            }

            if elims.is_empty() {
                continue;
            }

            let desc = if generate_description {
                let kind = if non_grouped_value.is_some() { "N-Wing" } else { "Unorthodox Tuple" };
                Some(LogicalStepDesc::from_elims(&format!("{} {}", kind, cu.compact_name(&combo)), &elims))
            } else {
                None
            };

            if !board.clear_candidates(elims.iter()) {
                return LogicalStepResult::Invalid(desc);
            }
            return LogicalStepResult::Changed(desc);
        }

        LogicalStepResult::None
    }
}

fn add_shared_weak_link_eliminations(
    board: &Board,
    bearers: &[CellIndex],
    value: usize,
    combo: &[CellIndex],
    elims: &mut EliminationList,
) {
    let cu = board.cell_utility();
    let bd = board.data();

    let mut elim_set = CandidateLinks::new(board.size());
    let mut is_first = true;
    for &cell in bearers {
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

#[cfg(test)]
mod test {
    use super::*;
    use std::sync::Arc;

    #[derive(Debug)]
    struct ExtraWeakLinksConstraint;

    impl Constraint for ExtraWeakLinksConstraint {
        fn name(&self) -> &str {
            "Test Y-Wing Links"
        }

        fn get_weak_links(&self, size: usize) -> Vec<(CandidateIndex, CandidateIndex)> {
            let cu = CellUtility::new(size);
            // Pivot r1c1 weakly linked to pincer1 r1c2 on 'a'=1, and to pincer2 r2c1 on 'b'=2.
            vec![
                (cu.candidate(cu.cell(0, 0), 1), cu.candidate(cu.cell(0, 1), 1)),
                (cu.candidate(cu.cell(0, 0), 2), cu.candidate(cu.cell(1, 0), 2)),
            ]
        }
    }

    #[test]
    fn test_y_wing() {
        let mut board = Board::new(9, &[], vec![Arc::new(ExtraWeakLinksConstraint)]);
        let cu = board.cell_utility();

        // Pivot r1c1 = {1,2}; pincer1 r1c2 = {1,3}; pincer2 r2c1 = {2,3}.
        assert!(board.keep_mask(cu.cell(0, 0), ValueMask::from_values(&[1, 2])));
        assert!(board.keep_mask(cu.cell(0, 1), ValueMask::from_values(&[1, 3])));
        assert!(board.keep_mask(cu.cell(1, 0), ValueMask::from_values(&[2, 3])));

        // Give r3c3 candidate 3, weakly linked to both pincers via the box (r1c2 and r2c1
        // share box 1 with r3c3).
        let ywing = YWing;
        let result = ywing.run(&mut board, true);
        assert!(result.is_changed());
        assert!(!board.cell(cu.cell(2, 2)).has(3));
    }
}
