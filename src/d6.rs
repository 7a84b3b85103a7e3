use {crate::*, glam::IVec2};

/// Day 6: Guard Gallivant
///
/// The guard walks straight, turning right at obstacles, until leaving the map. Visited cells are
/// tracked in the grid's flags.
#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution {
    grid: FlaggedGrid<Cell>,
    start_pos: IVec2,
    start_dir: Direction,
}

define_cell! {
    #[repr(u8)]
    #[derive(Clone, Copy, Debug, Default, PartialEq)]
    pub enum Cell {
        #[default]
        Empty = EMPTY = b'.',
        Obstacle = OBSTACLE = b'#',
        Up = UP = b'^',
        Down = DOWN = b'v',
        Left = LEFT = b'<',
        Right = RIGHT = b'>',
    }
}

impl Cell {
    fn direction(self) -> Option<Direction> {
        match self {
            Self::Up => Some(Direction::North),
            Self::Right => Some(Direction::East),
            Self::Down => Some(Direction::South),
            Self::Left => Some(Direction::West),
            _ => None,
        }
    }
}

impl Solution {
    fn visited_cell_count(&mut self) -> usize {
        let mut pos: IVec2 = self.start_pos;
        let mut dir: Direction = self.start_dir;
        let (cells, flags) = self.grid.split_mut();

        loop {
            *flags.get_mut(pos).unwrap() = 1_u32;

            match cells.get(pos + dir.vec()) {
                None => break,
                Some(Cell::Obstacle) => dir = dir.next(),
                Some(_) => pos += dir.vec(),
            }
        }

        flags.cells().iter().filter(|&&flag| flag != 0_u32).count()
    }
}

impl RunQuestions for Solution {
    const HAS_SECOND_QUESTION: bool = false;

    fn q1_internal(&mut self, _args: &QuestionArgs) {
        println!("Part 1: {}", self.visited_cell_count());
    }
}

impl<'i> TryFrom<&'i str> for Solution {
    type Error = String;

    fn try_from(input: &'i str) -> Result<Self, Self::Error> {
        let grid: FlaggedGrid<Cell> =
            FlaggedGrid::try_from(input).map_err(|error| format!("{error:?}"))?;

        let (start_pos, start_dir): (IVec2, Direction) = grid
            .cells()
            .iter_filtered_positions(|cell| cell.direction().is_some())
            .try_fold(None, |prev_start: Option<(IVec2, Direction)>, pos| {
                prev_start.is_none().then(|| {
                    Some((
                        pos,
                        grid.cells().get(pos).copied().unwrap().direction().unwrap(),
                    ))
                })
            })
            .flatten()
            .ok_or_else(|| "expected exactly one guard".to_owned())?;

        Ok(Self {
            grid,
            start_pos,
            start_dir,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOLUTION_STRS: &'static [&'static str] = &["\
        ....#.....\n\
        .........#\n\
        ..........\n\
        ..#.......\n\
        .......#..\n\
        ..........\n\
        .#..^.....\n\
        ........#.\n\
        #.........\n\
        ......#...\n"];

    #[test]
    fn test_try_from_str() {
        let solution: Solution = Solution::try_from(SOLUTION_STRS[0_usize]).unwrap();

        assert_eq!(solution.start_pos, IVec2::new(4_i32, 6_i32));
        assert_eq!(solution.start_dir, Direction::North);
    }

    #[test]
    fn test_try_from_str_rejects_multiple_guards() {
        assert!(Solution::try_from("^^\n..\n").is_err());
    }

    #[test]
    fn test_visited_cell_count() {
        for (solution_str, visited_cell_count) in SOLUTION_STRS.iter().copied().zip([41_usize]) {
            let mut solution: Solution = Solution::try_from(solution_str).unwrap();

            assert_eq!(solution.visited_cell_count(), visited_cell_count);
        }
    }
}
