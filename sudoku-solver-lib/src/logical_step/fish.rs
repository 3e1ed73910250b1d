use crate::prelude::*;
use itertools::Itertools;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Orientation {
    Row,
    Column,
}

impl Orientation {
    fn cell(self, cu: CellUtility, line: usize, position: usize) -> CellIndex {
        match self {
            Orientation::Row => cu.cell(line, position),
            Orientation::Column => cu.cell(position, line),
        }
    }
}

fn fish_name(size: usize) -> String {
    match size {
        2 => "X-Wing".to_owned(),
        3 => "Swordfish".to_owned(),
        4 => "Jellyfish".to_owned(),
        _ => format!("{}-Fish", size),
    }
}

/// Fishes: X-Wing, Swordfish, Jellyfish, and their finned variants, generalized to any
/// square board.
///
/// A `size`-fish picks `size` base lines (rows, or columns) in which a value's remaining
/// positions fit within `size` cross lines; the value can then be eliminated from the rest
/// of those cross lines. A finned fish relaxes this to "at most `size` cross lines plus
/// some extra fin candidates", restricting eliminations to cells that also see every fin.
#[derive(Debug)]
pub struct Fish {
    size: usize,
    finned: bool,
}

impl Fish {
    /// Creates a new instance looking for fish of the given base/cover line count.
    pub fn new(size: usize, finned: bool) -> Self {
        Self { size, finned }
    }
}

struct CandidateLines {
    // positions[line] is the set of positions in that line which still have the value as a
    // candidate. A line that already has the value solved somewhere is left as `None` since
    // no fish elimination is needed there.
    positions: Vec<Option<Vec<usize>>>,
}

fn candidate_lines(board: &Board, orientation: Orientation, value: usize) -> CandidateLines {
    let size = board.size();
    let cu = board.cell_utility();
    let mut positions = Vec::with_capacity(size);

    for line in 0..size {
        let mut solved_elsewhere = false;
        let mut line_positions = Vec::new();
        for position in 0..size {
            let cell = orientation.cell(cu, line, position);
            let mask = board.cell(cell);
            if mask.is_solved() {
                if mask.value() == value {
                    solved_elsewhere = true;
                    break;
                }
                continue;
            }
            if mask.has(value) {
                line_positions.push(position);
            }
        }
        positions.push(if solved_elsewhere { None } else { Some(line_positions) });
    }

    CandidateLines { positions }
}

fn try_eliminate(
    board: &mut Board,
    orientation: Orientation,
    value: usize,
    base_lines: &[usize],
    cover_positions: &[usize],
    fins: &[CandidateIndex],
    generate_description: bool,
    size: usize,
    finned: bool,
) -> Option<LogicalStepResult> {
    let cu = board.cell_utility();
    let mut elims = EliminationList::new();

    for other_line in 0..board.size() {
        if base_lines.contains(&other_line) {
            continue;
        }
        for &position in cover_positions {
            let cell = orientation.cell(cu, other_line, position);
            let mask = board.cell(cell);
            if mask.is_solved() || !mask.has(value) {
                continue;
            }
            let candidate = cell.candidate(value);
            if finned && !fins.iter().all(|&fin| board.data().has_weak_link(fin, candidate)) {
                continue;
            }
            elims.add(candidate);
        }
    }

    if elims.is_empty() {
        return None;
    }

    let desc = if generate_description {
        let name = fish_name(size);
        let label = if finned { format!("Finned {}", name) } else { name };
        Some(LogicalStepDesc::from_elims(&format!("{} on {}", label, value), &elims))
    } else {
        None
    };

    if !board.clear_candidates(elims.iter()) {
        return Some(LogicalStepResult::Invalid(desc));
    }
    Some(LogicalStepResult::Changed(desc))
}

impl LogicalStep for Fish {
    fn name(&self) -> &'static str {
        "Fish"
    }

    fn run(&self, board: &mut Board, generate_description: bool) -> LogicalStepResult {
        let size = board.size();
        let k = self.size;
        let cu = board.cell_utility();

        for &orientation in &[Orientation::Row, Orientation::Column] {
            for value in 1..=size {
                let lines = candidate_lines(board, orientation, value);
                let candidate_base_lines: Vec<usize> = (0..size)
                    .filter(|&l| lines.positions[l].as_ref().map_or(false, |p| !p.is_empty()))
                    .collect();

                if candidate_base_lines.len() < k {
                    continue;
                }

                for base_lines in candidate_base_lines.iter().copied().combinations(k) {
                    let mut union_positions: Vec<usize> = base_lines
                        .iter()
                        .flat_map(|&l| lines.positions[l].as_ref().unwrap().iter().copied())
                        .sorted()
                        .dedup()
                        .collect();

                    if union_positions.len() < k {
                        continue;
                    }

                    if union_positions.len() == k {
                        if let Some(result) =
                            try_eliminate(board, orientation, value, &base_lines, &union_positions, &[], generate_description, k, false)
                        {
                            return result;
                        }
                        continue;
                    }

                    if !self.finned {
                        continue;
                    }

                    let all_positions = std::mem::take(&mut union_positions);
                    for cover in all_positions.iter().copied().combinations(k) {
                        let fins: Vec<CandidateIndex> = base_lines
                            .iter()
                            .flat_map(|&l| {
                                lines.positions[l]
                                    .as_ref()
                                    .unwrap()
                                    .iter()
                                    .copied()
                                    .filter(|p| !cover.contains(p))
                                    .map(move |p| orientation.cell(cu, l, p).candidate(value))
                            })
                            .collect();

                        if fins.is_empty() {
                            continue;
                        }

                        if let Some(result) =
                            try_eliminate(board, orientation, value, &base_lines, &cover, &fins, generate_description, k, true)
                        {
                            return result;
                        }
                    }
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
    fn test_x_wing() {
        let mut board = Board::default();
        let cu = board.cell_utility();

        // Set up a classic X-Wing: value 5 only possible in columns 2 and 5 of rows 1 and 4.
        for row in [0usize, 3] {
            for col in 0..9 {
                if col != 1 && col != 4 {
                    assert!(board.clear_value(cu.cell(row, col), 5));
                }
            }
        }

        let fish = Fish::new(2, false);
        let result = fish.run(&mut board, true);
        assert!(result.is_changed());

        // 5 should now be eliminated from the rest of columns 2 and 5 (other rows).
        assert!(!board.cell(cu.cell(1, 1)).has(5));
        assert!(!board.cell(cu.cell(1, 4)).has(5));
    }
}
