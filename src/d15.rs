use {
    crate::*,
    glam::IVec2,
    nom::{
        branch::alt,
        character::complete::{line_ending, one_of},
        combinator::{map, map_opt},
        error::Error,
        multi::fold_many1,
        sequence::tuple,
        Err, IResult,
    },
};

/// Day 15: Warehouse Woes
///
/// A robot pushes lines of boxes through a warehouse, one move at a time. A push succeeds when an
/// empty cell lies beyond the run of boxes.
#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution {
    grid: Grid2D<Cell>,
    robot: IVec2,
    moves: Vec<Direction>,
}

define_cell! {
    #[repr(u8)]
    #[derive(Clone, Copy, Debug, Default, PartialEq)]
    pub enum Cell {
        #[default]
        Empty = EMPTY = b'.',
        Wall = WALL = b'#',
        Box = BOX = b'O',
        Robot = ROBOT = b'@',
    }
}

impl Solution {
    fn step(&mut self, dir: Direction) {
        let forward: IVec2 = self.robot + dir.vec();

        match self.grid.get(forward) {
            Some(Cell::Empty) => self.robot = forward,
            Some(Cell::Box) => {
                let mut probe: IVec2 = forward + dir.vec();

                while self.grid.get(probe) == Some(&Cell::Box) {
                    probe += dir.vec();
                }

                if self.grid.get(probe) == Some(&Cell::Empty) {
                    *self.grid.get_mut(probe).unwrap() = Cell::Box;
                    *self.grid.get_mut(forward).unwrap() = Cell::Empty;
                    self.robot = forward;
                }
            }
            _ => {}
        }
    }

    fn run_moves(&mut self) {
        for index in 0_usize..self.moves.len() {
            self.step(self.moves[index]);
        }
    }

    fn gps_sum(&self) -> usize {
        self.grid
            .iter_positions_with_cell(&Cell::Box)
            .map(|pos| 100_usize * pos.y as usize + pos.x as usize)
            .sum()
    }

    fn grid_string(&self) -> String {
        let mut grid: Grid2D<Cell> = self.grid.clone();

        *grid.get_mut(self.robot).unwrap() = Cell::Robot;

        grid.into()
    }
}

impl Parse for Solution {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map_opt(
            tuple((
                Grid2D::parse,
                line_ending,
                fold_many1(
                    alt((
                        map(one_of("^v<>"), |move_char| match move_char {
                            '^' => Some(Direction::North),
                            '>' => Some(Direction::East),
                            'v' => Some(Direction::South),
                            _ => Some(Direction::West),
                        }),
                        map(line_ending, |_| None),
                    )),
                    Vec::new,
                    |mut moves, dir| {
                        if let Some(dir) = dir {
                            moves.push(dir);
                        }

                        moves
                    },
                ),
            )),
            |(mut grid, _, moves): (Grid2D<Cell>, _, Vec<Direction>)| {
                let robot: IVec2 = grid.try_find_single_position_with_cell(&Cell::Robot)?;

                *grid.get_mut(robot).unwrap() = Cell::Empty;

                Some(Self { grid, robot, moves })
            },
        )(input)
    }
}

impl RunQuestions for Solution {
    const HAS_SECOND_QUESTION: bool = false;

    fn q1_internal(&mut self, args: &QuestionArgs) {
        self.run_moves();

        println!("Part 1: Sum of GPS coordinates = {}", self.gps_sum());

        if args.verbose {
            print!("{}", self.grid_string());
        }
    }
}

impl<'i> TryFrom<&'i str> for Solution {
    type Error = Err<Error<&'i str>>;

    fn try_from(input: &'i str) -> Result<Self, Self::Error> {
        Ok(Self::parse(input)?.1)
    }
}
