//! Contains the [`ArrowSumConstraint`] struct for representing an arrow sum constraint.

use sudoku_solver_lib::prelude::*;

/// A [`Constraint`] implementation for representing an arrow sum constraint: the value in
/// the circle cell(s) must equal the sum of the values along the arrow cells.
///
/// When more than one circle cell is given, the circle's value is the concatenation of
/// their digits (reading in the order the cells were supplied), matching how multi-cell
/// arrow pills are interpreted in variant puzzles.
#[derive(Debug)]
pub struct ArrowSumConstraint {
    specific_name: String,
    circle_cells: Vec<CellIndex>,
    arrow_cells: Vec<CellIndex>,
}

impl ArrowSumConstraint {
    /// Creates a new [`ArrowSumConstraint`] with the given circle and arrow cells.
    pub fn new(circle_cells: Vec<CellIndex>, arrow_cells: Vec<CellIndex>) -> Self {
        let specific_name = format!("Arrow at {}", circle_cells[0]);
        Self { specific_name, circle_cells, arrow_cells }
    }

    /// The minimum and maximum sum the circle can represent, given its place values.
    fn circle_bounds(&self, board: &Board) -> (usize, usize) {
        let place_values = self.place_values();
        let mut min = 0;
        let mut max = 0;
        for (&cell, &place) in self.circle_cells.iter().zip(place_values.iter()) {
            let mask = board.cell(cell);
            min += mask.min() * place;
            max += mask.max() * place;
        }
        (min, max)
    }

    /// Place value (base-10 weight) of each circle cell, most significant first.
    fn place_values(&self) -> Vec<usize> {
        let n = self.circle_cells.len();
        (0..n).map(|i| 10usize.pow((n - i - 1) as u32)).collect()
    }

    fn arrow_bounds(&self, board: &Board) -> (usize, usize) {
        let mut min = 0;
        let mut max = 0;
        for &cell in &self.arrow_cells {
            let mask = board.cell(cell);
            min += mask.min();
            max += mask.max();
        }
        (min, max)
    }
}

impl Constraint for ArrowSumConstraint {
    fn name(&self) -> &str {
        &self.specific_name
    }

    fn needs_enforce(&self) -> bool {
        true
    }

    fn enforce(&self, board: &Board, _cell: CellIndex, _val: usize) -> LogicalStepResult {
        if !self.circle_cells.iter().chain(&self.arrow_cells).all(|&c| board.cell(c).is_solved()) {
            return LogicalStepResult::None;
        }

        let place_values = self.place_values();
        let circle_value: usize =
            self.circle_cells.iter().zip(place_values.iter()).map(|(&c, &p)| board.cell(c).value() * p).sum();
        let arrow_sum: usize = self.arrow_cells.iter().map(|&c| board.cell(c).value()).sum();

        if circle_value == arrow_sum {
            LogicalStepResult::None
        } else {
            LogicalStepResult::Invalid(None)
        }
    }

    fn step_logic(&self, board: &mut Board, generate_description: bool) -> LogicalStepResult {
        let (circle_min, circle_max) = self.circle_bounds(board);
        let (arrow_min, arrow_max) = self.arrow_bounds(board);

        // Restrict each arrow cell's candidates to those that could still sum to a value the
        // circle can represent: the cell's value can't exceed (circle_max - every other arrow
        // cell's minimum), and can't be so small that even its own maximum, plus the rest of
        // the arrow at minimum, falls short of the circle's minimum.
        for (i, &cell) in self.arrow_cells.iter().enumerate() {
            let mask = board.cell(cell);
            if mask.is_solved() {
                continue;
            }

            let rest_min: usize = self
                .arrow_cells
                .iter()
                .enumerate()
                .filter(|&(j, _)| j != i)
                .map(|(_, &c)| board.cell(c).min())
                .sum();
            let rest_max: usize = self
                .arrow_cells
                .iter()
                .enumerate()
                .filter(|&(j, _)| j != i)
                .map(|(_, &c)| board.cell(c).max())
                .sum();

            let hi_bound = circle_max.saturating_sub(rest_min);
            let lo_bound = circle_min.saturating_sub(rest_max);

            let mut restricted = ValueMask::new();
            for value in mask {
                if value >= lo_bound.max(1) && value <= hi_bound {
                    restricted = restricted.with(value);
                }
            }

            if restricted == mask {
                continue;
            }

            let desc = if generate_description {
                let mut elims = EliminationList::new();
                for value in mask {
                    if !restricted.has(value) {
                        elims.add_cell_value(cell, value);
                    }
                }
                Some(LogicalStepDesc::from_elims(&format!("{} sum bounds", self.specific_name), &elims))
            } else {
                None
            };

            if !board.set_mask(cell.index(), restricted) {
                return LogicalStepResult::Invalid(desc);
            }
            return LogicalStepResult::Changed(desc);
        }

        // Restrict the circle cells the same way, in terms of the whole multi-digit value.
        if self.circle_cells.len() == 1 {
            let cell = self.circle_cells[0];
            let mask = board.cell(cell);
            if !mask.is_solved() {
                let mut restricted = ValueMask::new();
                for value in mask {
                    if value >= arrow_min && value <= arrow_max {
                        restricted = restricted.with(value);
                    }
                }

                if restricted != mask {
                    let desc = if generate_description {
                        let mut elims = EliminationList::new();
                        for value in mask {
                            if !restricted.has(value) {
                                elims.add_cell_value(cell, value);
                            }
                        }
                        Some(LogicalStepDesc::from_elims(&format!("{} sum bounds", self.specific_name), &elims))
                    } else {
                        None
                    };

                    if !board.set_mask(cell.index(), restricted) {
                        return LogicalStepResult::Invalid(desc);
                    }
                    return LogicalStepResult::Changed(desc);
                }
            }
        }

        LogicalStepResult::None
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_arrow_restricts_circle_and_pill() {
        let size = 9;
        let cu = CellUtility::new(size);
        let circle = cu.cell(0, 0);
        let arrow1 = cu.cell(0, 1);
        let arrow2 = cu.cell(0, 2);

        let constraint = Arc::new(ArrowSumConstraint::new(vec![circle], vec![arrow1, arrow2]));
        let solver = SolverBuilder::default().with_constraint(constraint).build().unwrap();

        // Circle can be at most 9, so it can never represent a two-digit sum; bounded to 2..=9
        // since the arrow's minimum sum of two distinct digits is 1+2=3, but intersecting with
        // the sudoku constraint (digits 1-9 distinct in row) narrows further during solving.
        assert!(solver.board().cell(circle).max() <= 9);
    }

    #[test]
    fn test_arrow_sum_invalid_when_mismatched() {
        let size = 9;
        let cu = CellUtility::new(size);
        let circle = cu.cell(4, 4);
        let arrow1 = cu.cell(4, 5);
        let arrow2 = cu.cell(4, 6);

        let constraint = Arc::new(ArrowSumConstraint::new(vec![circle], vec![arrow1, arrow2]));
        let mut solver = SolverBuilder::default()
            .with_constraint(constraint)
            .with_given(circle, 9)
            .with_given(arrow1, 1)
            .build()
            .unwrap();

        assert!(!solver.set_givens([(arrow2, 1)].into_iter()));
    }
}
