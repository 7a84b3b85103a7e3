use {
    crate::*,
    glam::IVec2,
    nom::{
        combinator::{map_opt, verify},
        error::Error,
        Err, IResult,
    },
    strum::{EnumCount, IntoEnumIterator},
};

/// Day 16: Reindeer Maze
///
/// Dijkstra over `(cell, facing)` states: moving forward costs 1, rotating in place to any other
/// facing costs 1000. The reindeer starts facing east; the answer is the cheapest cost over the
/// four facings at the end cell.
#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution {
    grid: Grid2D<Cell>,
    start: IVec2,
    end: IVec2,
}

define_cell! {
    #[repr(u8)]
    #[derive(Clone, Copy, Debug, Default, PartialEq)]
    pub enum Cell {
        #[default]
        Empty = EMPTY = b'.',
        Wall = WALL = b'#',
        Start = START = b'S',
        End = END = b'E',
    }
}

struct MazeSearch<'s> {
    solution: &'s Solution,
    start: SmallPosAndDir,
    costs: Grid2D<[u32; Direction::COUNT]>,
}

impl<'s> MazeSearch<'s> {
    const FORWARD_COST: u32 = 1_u32;
    const TURN_COST: u32 = 1000_u32;

    fn new(solution: &'s Solution) -> Self {
        Self {
            solution,
            // SAFETY: The grid dimensions were validated while parsing.
            start: unsafe {
                SmallPosAndDir::from_pos_and_dir_unsafe(solution.start, Solution::START_DIR)
            },
            costs: Grid2D::default(solution.grid.dimensions()),
        }
    }

    fn end_cost(&self) -> Option<u32> {
        self.costs
            .get(self.solution.end)
            .unwrap()
            .iter()
            .copied()
            .min()
            .filter(|&cost| cost != u32::MAX)
    }
}

impl<'s> WeightedGraphSearch for MazeSearch<'s> {
    type Vertex = SmallPosAndDir;
    type Cost = u32;

    fn start(&self) -> &Self::Vertex {
        &self.start
    }

    fn is_end(&self, _vertex: &Self::Vertex) -> bool {
        // The cheapest cost for every facing at the end cell is wanted, so the search runs to
        // exhaustion.
        false
    }

    fn path_to(&self, _vertex: &Self::Vertex) -> Vec<Self::Vertex> {
        unreachable!("no vertex is an end vertex");
    }

    fn cost_from_start(&self, vertex: &Self::Vertex) -> Self::Cost {
        self.costs.get(vertex.pos.get()).unwrap()[vertex.dir as usize]
    }

    fn heuristic(&self, _vertex: &Self::Vertex) -> Self::Cost {
        0_u32
    }

    fn neighbors(
        &self,
        vertex: &Self::Vertex,
        neighbors: &mut Vec<OpenSetElement<Self::Vertex, Self::Cost>>,
    ) {
        let forward: IVec2 = vertex.pos.get() + vertex.dir.vec();

        if self.solution.grid.get(forward) == Some(&Cell::Empty) {
            neighbors.push(OpenSetElement(
                // SAFETY: `forward` is inside the grid, whose dimensions were validated.
                unsafe { SmallPosAndDir::from_pos_and_dir_unsafe(forward, vertex.dir) },
                Self::FORWARD_COST,
            ));
        }

        for dir in Direction::iter() {
            if dir != vertex.dir {
                neighbors.push(OpenSetElement(
                    SmallPosAndDir {
                        pos: vertex.pos,
                        dir,
                    },
                    Self::TURN_COST,
                ));
            }
        }
    }

    fn update_vertex(
        &mut self,
        _from: &Self::Vertex,
        to: &Self::Vertex,
        cost: Self::Cost,
        _heuristic: Self::Cost,
    ) {
        self.costs.get_mut(to.pos.get()).unwrap()[to.dir as usize] = cost;
    }

    fn reset(&mut self) {
        self.costs
            .cells_mut()
            .fill([u32::MAX; Direction::COUNT]);
        self.costs.get_mut(self.start.pos.get()).unwrap()[self.start.dir as usize] = 0_u32;
    }
}

impl Solution {
    const START_DIR: Direction = Direction::East;

    fn lowest_score(&self) -> Option<u32> {
        let mut search: MazeSearch = MazeSearch::new(self);

        search.run_dijkstra();

        search.end_cost()
    }
}

impl Parse for Solution {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map_opt(
            verify(Grid2D::parse, |grid: &Grid2D<Cell>| {
                SmallPos::are_dimensions_valid(grid.dimensions())
            }),
            |mut grid: Grid2D<Cell>| {
                let start: IVec2 = grid.try_find_single_position_with_cell(&Cell::Start)?;
                let end: IVec2 = grid.try_find_single_position_with_cell(&Cell::End)?;

                *grid.get_mut(start).unwrap() = Cell::Empty;
                *grid.get_mut(end).unwrap() = Cell::Empty;

                Some(Self { grid, start, end })
            },
        )(input)
    }
}

impl RunQuestions for Solution {
    const HAS_SECOND_QUESTION: bool = false;

    fn q1_internal(&mut self, _args: &QuestionArgs) {
        println!(
            "Part 1: {}",
            self.lowest_score().map_or(-1_i64, i64::from)
        );
    }
}

impl<'i> TryFrom<&'i str> for Solution {
    type Error = Err<Error<&'i str>>;

    fn try_from(input: &'i str) -> Result<Self, Self::Error> {
        Ok(Self::parse(input)?.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOLUTION_STRS: &'static [&'static str] = &[
        "\
        ###############\n\
        #.......#....E#\n\
        #.#.###.#.###.#\n\
        #.....#.#...#.#\n\
        #.###.#####.#.#\n\
        #.#.#.......#.#\n\
        #.#.#####.###.#\n\
        #...........#.#\n\
        ###.#.#####.#.#\n\
        #...#.....#.#.#\n\
        #.#.#.###.#.#.#\n\
        #.....#...#.#.#\n\
        #.###.#.#.#.#.#\n\
        #S..#.....#...#\n\
        ###############\n",
        "\
        #################\n\
        #...#...#...#..E#\n\
        #.#.#.#.#.#.#.#.#\n\
        #.#.#.#...#...#.#\n\
        #.#.#.#.###.#.#.#\n\
        #...#.#.#.....#.#\n\
        #.#.#.#.#.#####.#\n\
        #.#...#.#.#.....#\n\
        #.#.#####.#.###.#\n\
        #.#.#.......#...#\n\
        #.#.###.#####.###\n\
        #.#.#...#.....#.#\n\
        #.#.#.#####.###.#\n\
        #.#.#.........#.#\n\
        #.#.#.#########.#\n\
        #S#.............#\n\
        #################\n",
    ];

    #[test]
    fn test_lowest_score() {
        for (solution_str, lowest_score) in SOLUTION_STRS
            .iter()
            .copied()
            .zip([Some(7036_u32), Some(11048_u32)])
        {
            assert_eq!(
                Solution::try_from(solution_str).unwrap().lowest_score(),
                lowest_score
            );
        }
    }

    #[test]
    fn test_turn_costs() {
        // Straight ahead of the starting facing costs only steps.
        assert_eq!(
            Solution::try_from("#####\n#S.E#\n#####\n")
                .unwrap()
                .lowest_score(),
            Some(2_u32)
        );

        // A single turn adds 1000.
        assert_eq!(
            Solution::try_from("###\n#E#\n#S#\n###\n")
                .unwrap()
                .lowest_score(),
            Some(1001_u32)
        );

        // Five steps and one turn.
        assert_eq!(
            Solution::try_from("#######\n#....E#\n#S....#\n#######\n")
                .unwrap()
                .lowest_score(),
            Some(1005_u32)
        );
    }

    #[test]
    fn test_unreachable_end() {
        assert_eq!(
            Solution::try_from("#####\n#S#E#\n#####\n")
                .unwrap()
                .lowest_score(),
            None
        );
    }
}
