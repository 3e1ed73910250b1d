use crate::prelude::*;

/// Applies constraint-specific logic.
#[derive(Debug)]
pub struct StepConstraints;

impl LogicalStep for StepConstraints {
    fn name(&self) -> &'static str {
        "Step Constraints"
    }

    fn has_own_prefix(&self) -> bool {
        true
    }

    fn is_active_during_brute_force_solves(&self) -> bool {
        true
    }

    fn run(&self, board: &mut Board, generate_description: bool) -> LogicalStepResult {
        let board_data = board.data();
        for constraint in board_data.constraints() {
            let result = constraint.step_logic(board, !generate_description);
            if !result.is_none() {
                return result.with_prefix(format!("{}: ", constraint.name()).as_str());
            }
        }

        LogicalStepResult::None
    }
}

/// Asks every constraint for new weak links derived from running logic (as opposed to the
/// board-geometry-only links contributed once at finalize time). Unlike [`StepConstraints`],
/// this stage grows the weak-link graph itself, so it must own it exclusively first.
#[derive(Debug)]
pub struct ConstraintLinks;

impl LogicalStep for ConstraintLinks {
    fn name(&self) -> &'static str {
        "Constraint Links"
    }

    fn has_own_prefix(&self) -> bool {
        true
    }

    fn is_active_during_brute_force_solves(&self) -> bool {
        true
    }

    fn run(&self, board: &mut Board, generate_description: bool) -> LogicalStepResult {
        board.prepare_for_link_generating_logic();

        let board_data = board.data();
        for constraint in board_data.constraints() {
            match constraint.init_links(board) {
                LogicResult::Invalid => {
                    let desc = if generate_description {
                        Some(format!("{}: found the board invalid while adding links.", constraint.name()).into())
                    } else {
                        None
                    };
                    return LogicalStepResult::Invalid(desc);
                }
                LogicResult::Changed => {
                    let desc = if generate_description {
                        Some(format!("{}: added new weak links.", constraint.name()).into())
                    } else {
                        None
                    };
                    return LogicalStepResult::Changed(desc);
                }
                LogicResult::Solved | LogicResult::None => {}
            }
        }

        LogicalStepResult::None
    }
}

#[cfg(test)]
mod test {
    use std::sync::Arc;

    use super::*;

    #[derive(Debug)]
    struct RemoveCandidateConstraint {
        specific_name: String,
        candidate: CandidateIndex,
    }

    impl RemoveCandidateConstraint {
        fn new(candidate: CandidateIndex) -> Self {
            Self { specific_name: format!("Remove {}", candidate), candidate }
        }
    }

    impl Constraint for RemoveCandidateConstraint {
        fn name(&self) -> &str {
            &self.specific_name
        }

        fn step_logic(&self, board: &mut Board, _generate_description: bool) -> LogicalStepResult {
            if board.has_candidate(self.candidate) {
                if !board.clear_candidate(self.candidate) {
                    return LogicalStepResult::Invalid(Some(
                        format!("{} remover failed to remove it.", self.candidate).into(),
                    ));
                }
                LogicalStepResult::Changed(Some(format!("{} removed.", self.candidate).into()))
            } else {
                LogicalStepResult::None
            }
        }
    }

    #[test]
    fn test_step_constraints() {
        let size = 9;
        let cu = CellUtility::new(size);
        let candidate1 = cu.cell(0, 0).candidate(1);
        let candidate2 = cu.cell(0, 1).candidate(1);
        let mut board = Board::new(
            size,
            &[],
            vec![
                Arc::new(RemoveCandidateConstraint::new(candidate1)),
                Arc::new(RemoveCandidateConstraint::new(candidate2)),
            ],
        );
        let step_constraints = StepConstraints;

        // Both candidates should be present
        assert!(board.has_candidate(candidate1));
        assert!(board.has_candidate(candidate2));

        // Stepping the logic should remove just the first candidate
        let result = step_constraints.run(&mut board, true);
        assert!(result.is_changed());
        assert_eq!(result.description().unwrap().to_string(), "Remove 1r1c1: 1r1c1 removed.");
        assert!(!board.has_candidate(candidate1));
        assert!(board.has_candidate(candidate2));

        // Stepping the logic should remove just the second candidate
        let result = step_constraints.run(&mut board, true);
        assert!(result.is_changed());
        assert_eq!(result.description().unwrap().to_string(), "Remove 1r1c2: 1r1c2 removed.");
        assert!(!board.has_candidate(candidate1));
        assert!(!board.has_candidate(candidate2));

        // Stepping the logic should now do nothing
        let result = step_constraints.run(&mut board, true);
        assert!(result.is_none());

        // Create a new board with the same constraints
        let mut board = Board::new(
            size,
            &[],
            vec![
                Arc::new(RemoveCandidateConstraint::new(candidate1)),
                Arc::new(RemoveCandidateConstraint::new(candidate2)),
            ],
        );

        // Clear out all but 1 from r1c1
        let cell = cu.cell(0, 0);
        assert!(board.clear_candidates((2..=size).map(|value| cu.candidate(cell, value))));

        // Stepping the logic should try to remove 1r1c1 and discover this makes the board invalid
        let result = step_constraints.run(&mut board, true);
        assert!(result.is_invalid());
        assert_eq!(result.description().unwrap().to_string(), "Remove 1r1c1: 1r1c1 remover failed to remove it.");
    }

    #[derive(Debug)]
    struct CloneLinkConstraint {
        candidate1: CandidateIndex,
        candidate2: CandidateIndex,
        done: std::sync::atomic::AtomicBool,
    }

    impl CloneLinkConstraint {
        fn new(candidate1: CandidateIndex, candidate2: CandidateIndex) -> Self {
            Self { candidate1, candidate2, done: std::sync::atomic::AtomicBool::new(false) }
        }
    }

    impl Constraint for CloneLinkConstraint {
        fn name(&self) -> &str {
            "Clone Link"
        }

        fn init_links(&self, board: &mut Board) -> LogicResult {
            if self.done.swap(true, std::sync::atomic::Ordering::AcqRel) {
                return LogicResult::None;
            }

            board.prepare_for_link_generating_logic();
            if !board.add_clone_link(self.candidate1, self.candidate2) {
                return LogicResult::Invalid;
            }
            LogicResult::Changed
        }
    }

    #[test]
    fn test_constraint_links() {
        let size = 9;
        let cu = CellUtility::new(size);
        let cell1 = cu.cell(0, 0);
        let cell2 = cu.cell(0, 1);
        let candidate1 = cu.candidate(cell1, 1);
        let candidate2 = cu.candidate(cell2, 1);
        let mut board =
            Board::new(size, &[], vec![Arc::new(CloneLinkConstraint::new(candidate1, candidate2))]);
        let constraint_links = ConstraintLinks;

        let result = constraint_links.run(&mut board, true);
        assert!(result.is_changed());

        // The clone link should now force any other value in r1c1 to eliminate value 1 from
        // r1c2, and vice versa.
        assert!(board.data().has_weak_link(cu.candidate(cell1, 2), candidate2));
        assert!(board.data().has_weak_link(cu.candidate(cell2, 2), candidate1));

        // Running it again should find nothing new to add.
        let result = constraint_links.run(&mut board, true);
        assert!(result.is_none());
    }
}
