use crate::prelude::*;

/// Simple contradictions: for each remaining candidate of a low-candidate-count cell,
/// tentatively set it on a clone of the board and run a full consolidate. If the clone
/// turns out to be invalid, the candidate can never have been true and is eliminated from
/// the original board.
///
/// Cells are tried in increasing order of candidate count so that the cheapest, most
/// "obviously wrong" contradictions are found first.
#[derive(Debug)]
pub struct SimpleContradictions;

impl LogicalStep for SimpleContradictions {
    fn name(&self) -> &'static str {
        "Simple Contradiction"
    }

    fn run(&self, board: &mut Board, generate_description: bool) -> LogicalStepResult {
        let size = board.size();

        for count in 2..=size {
            for cell in board.all_cells() {
                let mask = board.cell(cell);
                if mask.is_solved() || mask.count() != count {
                    continue;
                }

                for value in mask {
                    let mut clone = board.clone();

                    if !clone.set_solved(cell, value) {
                        // Trivial immediate contradiction: the assignment itself is impossible.
                        let desc = if generate_description {
                            Some(LogicalStepDesc::from_elims(
                                &format!("{}={} is immediately impossible", cell, value),
                                &{
                                    let mut elims = EliminationList::new();
                                    elims.add_cell_value(cell, value);
                                    elims
                                },
                            ))
                        } else {
                            None
                        };

                        if !board.clear_value(cell, value) {
                            return LogicalStepResult::Invalid(desc);
                        }
                        return LogicalStepResult::Changed(desc);
                    }

                    if consolidate_to_fixed_point(&mut clone) {
                        continue;
                    }

                    let mut elims = EliminationList::new();
                    elims.add_cell_value(cell, value);

                    let desc = if generate_description {
                        Some(LogicalStepDesc::from_elims(
                            &format!("If {}={} then the board becomes invalid", cell, value),
                            &elims,
                        ))
                    } else {
                        None
                    };

                    if !board.clear_value(cell, value) {
                        return LogicalStepResult::Invalid(desc);
                    }
                    return LogicalStepResult::Changed(desc);
                }
            }
        }

        LogicalStepResult::None
    }
}

/// Runs naked/hidden singles and each constraint's `step_logic` to a fixed point.
/// Returns `false` as soon as the board is found to be invalid.
fn consolidate_to_fixed_point(board: &mut Board) -> bool {
    loop {
        let naked = NakedSingle.run(board, false);
        if naked.is_invalid() {
            return false;
        }
        if naked.is_changed() {
            continue;
        }

        let hidden = HiddenSingle.run(board, false);
        if hidden.is_invalid() {
            return false;
        }
        if hidden.is_changed() {
            continue;
        }

        let mut changed = false;
        for constraint in board.constraints().to_vec() {
            let result = constraint.step_logic(board, false);
            if result.is_invalid() {
                return false;
            }
            if result.is_changed() {
                changed = true;
                break;
            }
        }

        if !changed {
            return true;
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_simple_contradiction() {
        let mut board = Board::default();
        let cu = board.cell_utility();

        // Solve r1c2 to 2.
        assert!(board.set_solved(cu.cell(0, 1), 2));

        // Force r1c1 to still consider 2 a candidate, bypassing the weak-link elimination
        // that set_solved would normally have applied. Trying 2 in r1c1 is then an
        // immediate contradiction: it shares row 1 with the already-solved r1c2 = 2.
        assert!(board.set_mask(cu.cell(0, 0).index(), ValueMask::from_values(&[1, 2])));

        let step = SimpleContradictions;
        let result = step.run(&mut board, true);
        assert!(result.is_changed());
        assert!(!board.cell(cu.cell(0, 0)).has(2));
        assert!(board.cell(cu.cell(0, 0)).has(1));
    }
}
