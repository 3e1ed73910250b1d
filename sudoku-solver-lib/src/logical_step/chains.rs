use crate::prelude::*;
use itertools::Itertools;

/// AIC / CNL / DNL chains.
///
/// Builds a *strong-link* graph (a candidate pair where at least one of the two must be
/// true) distinct from the weak-link graph (where at most one of the two may be true), then
/// searches for alternating strong/weak chains starting from every candidate that has at
/// least one strong link:
///
/// - **AIC** (open chain, both ends strong): the two endpoints are "same parity" — any
///   candidate weakly linked to both can be eliminated.
/// - **CNL** (chain closes back to its start with a weak link): every same-parity pair of
///   candidates along the loop can mutually eliminate any candidate weakly linked to both.
/// - **DNL** (chain closes back to its start with a strong link): the starting candidate
///   must be false.
///
/// Unlike most other techniques, the chain length is bounded (see [`MAX_CHAIN_LENGTH`])
/// since an unbounded alternating search is not guaranteed to terminate quickly; this
/// matches the general "return at the first elimination found" discipline the rest of the
/// propagation engine follows; chain-quality scoring between multiple candidate chains of
/// the same length is not attempted; the first chain that yields an elimination wins.
#[derive(Debug)]
pub struct Chains;

/// Chains longer than this are not explored. Bounds the alternating search so a single call
/// to [`LogicalStep::run`] always terminates quickly even on large boards.
const MAX_CHAIN_LENGTH: usize = 16;

/// Caps the Almost Locked Set cell count considered when deriving extra strong links, since
/// the number of k-subsets of a house grows combinatorially with house size.
const MAX_ALS_CELLS: usize = 4;

fn build_strong_links(board: &Board) -> Vec<CandidateLinks> {
    let size = board.size();
    let cu = board.cell_utility();
    let num_candidates = board.num_candidates();
    let mut strong = vec![CandidateLinks::new(size); num_candidates];

    let mut link = |c0: CandidateIndex, c1: CandidateIndex| {
        strong[c0.index()].set(c1, true);
        strong[c1.index()].set(c0, true);
    };

    // Bivalue cells: a strong link between the cell's two remaining candidates.
    for cell in board.all_cells() {
        let mask = board.cell(cell);
        if mask.is_solved() || mask.count() != 2 {
            continue;
        }
        let values = mask.to_vec();
        link(cu.candidate(cell, values[0]), cu.candidate(cell, values[1]));
    }

    // Bilocal: a value appearing in exactly two unfixed cells of a house.
    for house in board.houses() {
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
            if witnesses.len() == 2 {
                link(cu.candidate(witnesses[0], value), cu.candidate(witnesses[1], value));
            }
        }
    }

    // Almost Locked Sets: k unfixed cells of a house whose union has popcount k + 1. Any
    // pair of values appearing exactly once among those cells forms a strong link between
    // their (unique) bearing candidates.
    for house in board.houses() {
        let unfixed: Vec<CellIndex> =
            house.cells().iter().copied().filter(|&cell| !board.cell(cell).is_solved()).collect();

        let max_k = unfixed.len().saturating_sub(1).min(MAX_ALS_CELLS);
        for k in 2..=max_k {
            for combo in unfixed.iter().copied().combinations(k) {
                let union_mask = combo.iter().fold(ValueMask::new(), |mask, &cell| mask | board.cell(cell));
                if union_mask.count() != k + 1 {
                    continue;
                }

                let singles: Vec<(usize, CellIndex)> = union_mask
                    .to_vec()
                    .into_iter()
                    .filter_map(|value| {
                        let bearers: Vec<CellIndex> = combo.iter().copied().filter(|&cell| board.cell(cell).has(value)).collect();
                        if bearers.len() == 1 {
                            Some((value, bearers[0]))
                        } else {
                            None
                        }
                    })
                    .collect();

                for pair in singles.iter().combinations(2) {
                    let (v0, cell0) = *pair[0];
                    let (v1, cell1) = *pair[1];
                    link(cu.candidate(cell0, v0), cu.candidate(cell1, v1));
                }
            }
        }
    }

    strong
}

fn weak_link_eliminations(board: &Board, c0: CandidateIndex, c1: CandidateIndex, exclude: &[CellIndex]) -> EliminationList {
    let bd = board.data();
    let mut elim_set = bd.weak_links_for(c0).clone();
    elim_set.intersect(bd.weak_links_for(c1));

    let mut elims = EliminationList::new();
    for candidate in elim_set.links() {
        if board.has_candidate(candidate) && !exclude.contains(&candidate.cell_index()) {
            elims.add(candidate);
        }
    }
    elims
}

enum ChainFinding {
    /// An open alternating chain; eliminate candidates weakly linked to both endpoints.
    Aic(Vec<CandidateIndex>),
    /// A continuous nice loop; eliminate candidates weakly linked to a same-parity pair.
    Cnl(Vec<CandidateIndex>, CandidateIndex, CandidateIndex),
    /// A discontinuous nice loop; the starting candidate must be false.
    Dnl(CandidateIndex),
}

fn search_from(board: &Board, strong: &[CandidateLinks], start: CandidateIndex) -> Option<ChainFinding> {
    let mut path = vec![start];
    search_step(board, strong, &mut path, true)
}

fn search_step(board: &Board, strong: &[CandidateLinks], path: &mut Vec<CandidateIndex>, next_is_strong: bool) -> Option<ChainFinding> {
    if path.len() >= MAX_CHAIN_LENGTH {
        return None;
    }

    let from = *path.last().unwrap();
    let neighbors: Vec<CandidateIndex> = if next_is_strong {
        strong[from.index()].links().collect()
    } else {
        board.data().weak_links_for(from).links().collect()
    };

    for neighbor in neighbors {
        if neighbor == path[0] && path.len() >= 3 {
            return Some(if next_is_strong {
                ChainFinding::Dnl(path[0])
            } else {
                ChainFinding::Cnl(path.clone(), path[0], *path.last().unwrap())
            });
        }

        if path.contains(&neighbor) {
            continue;
        }

        path.push(neighbor);

        if next_is_strong && path.len() >= 3 {
            let start = path[0];
            let end = neighbor;
            if !weak_link_eliminations(board, start, end, &[start.cell_index(), end.cell_index()]).is_empty() {
                return Some(ChainFinding::Aic(path.clone()));
            }
        }

        if let Some(finding) = search_step(board, strong, path, !next_is_strong) {
            return Some(finding);
        }

        path.pop();
    }

    None
}

impl LogicalStep for Chains {
    fn name(&self) -> &'static str {
        "Chain"
    }

    fn run(&self, board: &mut Board, generate_description: bool) -> LogicalStepResult {
        let strong = build_strong_links(board);

        for candidate in 0..board.num_candidates() {
            let start = CandidateIndex::new(candidate, board.size());
            if !board.has_candidate(start) || strong[start.index()].is_empty() {
                continue;
            }

            let finding = match search_from(board, &strong, start) {
                Some(f) => f,
                None => continue,
            };

            let (elims, desc_text) = match &finding {
                ChainFinding::Aic(chain) => {
                    let a = chain[0];
                    let b = *chain.last().unwrap();
                    let elims = weak_link_eliminations(board, a, b, &[a.cell_index(), b.cell_index()]);
                    (elims, format!("AIC {} = ... = {}", a, b))
                }
                ChainFinding::Cnl(_, a, b) => {
                    let elims = weak_link_eliminations(board, *a, *b, &[a.cell_index(), b.cell_index()]);
                    (elims, format!("Continuous Nice Loop through {} and {}", a, b))
                }
                ChainFinding::Dnl(start) => {
                    let mut elims = EliminationList::new();
                    elims.add(*start);
                    (elims, format!("Discontinuous Nice Loop forces {} false", start))
                }
            };

            if elims.is_empty() {
                continue;
            }

            let desc = if generate_description { Some(LogicalStepDesc::from_elims(&desc_text, &elims)) } else { None };

            if !elims.execute(board).is_invalid() {
                return LogicalStepResult::Changed(desc);
            }
            return LogicalStepResult::Invalid(desc);
        }

        LogicalStepResult::None
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_build_strong_links_bivalue() {
        let mut board = Board::default();
        let cu = board.cell_utility();
        assert!(board.keep_mask(cu.cell(0, 0), ValueMask::from_values(&[1, 2])));

        let strong = build_strong_links(&board);
        let cand1 = cu.candidate(cu.cell(0, 0), 1);
        let cand2 = cu.candidate(cu.cell(0, 0), 2);
        assert!(strong[cand1.index()].is_linked(cand2));
        assert!(strong[cand2.index()].is_linked(cand1));
    }

    #[test]
    fn test_chains_runs_without_panicking() {
        let mut board = Board::default();
        let chains = Chains;
        let result = chains.run(&mut board, true);
        assert!(result.is_none() || result.is_changed() || result.is_invalid());
    }
}
