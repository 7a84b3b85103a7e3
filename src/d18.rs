use {
    crate::*,
    bitvec::prelude::*,
    glam::IVec2,
    nom::{bytes::complete::tag, combinator::all_consuming, sequence::separated_pair},
    strum::IntoEnumIterator,
};

/// Day 18: RAM Run
///
/// Bytes fall into a square memory grid at listed coordinates. After a prefix of them has landed,
/// a breadth-first search finds the shortest route from the top-left corner to the bottom-right.
#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution(Vec<IVec2>);

struct MemorySearch {
    dimensions: IVec2,
    corrupted: BitVec,
    start: IVec2,
    end: IVec2,
    distances: Grid2D<u32>,
}

impl MemorySearch {
    fn new(solution: &Solution, side_len: i32, prefix: usize) -> Self {
        let dimensions: IVec2 = IVec2::new(side_len, side_len);
        let mut corrupted: BitVec = bitvec![0; (side_len * side_len) as usize];

        for pos in solution.0.iter().take(prefix) {
            if let Some(index) = grid_2d_try_index_from_pos_and_dimensions(*pos, dimensions) {
                corrupted.set(index, true);
            }
        }

        Self {
            dimensions,
            corrupted,
            start: IVec2::ZERO,
            end: dimensions - IVec2::ONE,
            distances: Grid2D::default(dimensions),
        }
    }

    fn min_steps(&mut self) -> Option<u32> {
        self.run()
            .map(|_| *self.distances.get(self.end).unwrap())
    }
}

impl BreadthFirstSearch for MemorySearch {
    type Vertex = IVec2;

    fn start(&self) -> &Self::Vertex {
        &self.start
    }

    fn is_end(&self, vertex: &Self::Vertex) -> bool {
        *vertex == self.end
    }

    fn path_to(&self, vertex: &Self::Vertex) -> Vec<Self::Vertex> {
        vec![*vertex]
    }

    fn neighbors(&self, vertex: &Self::Vertex, neighbors: &mut Vec<Self::Vertex>) {
        neighbors.extend(Direction::iter().filter_map(|dir| {
            let neighbor: IVec2 = *vertex + dir.vec();

            grid_2d_try_index_from_pos_and_dimensions(neighbor, self.dimensions)
                .filter(|&index| !self.corrupted[index])
                .map(|_| neighbor)
        }));
    }

    fn update_parent(&mut self, from: &Self::Vertex, to: &Self::Vertex) {
        let distance: u32 = *self.distances.get(*from).unwrap() + 1_u32;

        *self.distances.get_mut(*to).unwrap() = distance;
    }

    fn reset(&mut self) {
        self.distances.cells_mut().fill(u32::MAX);
        *self.distances.get_mut(self.start).unwrap() = 0_u32;
    }
}

impl Solution {
    const SIDE_LEN: i32 = 71_i32;
    const PREFIX: usize = 1024_usize;

    fn min_steps(&self, side_len: i32, prefix: usize) -> Option<u32> {
        MemorySearch::new(self, side_len, prefix).min_steps()
    }
}

impl RunQuestions for Solution {
    const HAS_SECOND_QUESTION: bool = false;

    fn q1_internal(&mut self, _args: &QuestionArgs) {
        println!(
            "Part 1: minimum number of steps = {}",
            self.min_steps(Self::SIDE_LEN, Self::PREFIX)
                .map_or(-1_i64, i64::from)
        );
    }
}

impl TryFrom<&str> for Solution {
    type Error = String;

    fn try_from(input: &str) -> Result<Self, Self::Error> {
        let mut line_store: LineStore = LineStore::new(input);

        if line_store.is_empty() {
            return Err("empty input".into());
        }

        let mut bytes: Vec<IVec2> = Vec::with_capacity(line_store.len());

        while let Some((line, line_number)) = line_store.next_line() {
            let (_, (x, y)): (&str, (i32, i32)) =
                all_consuming(separated_pair(parse_integer, tag(","), parse_integer))(line)
                    .map_err(|error| format!("line {line_number}: {error}"))?;

            bytes.push(IVec2::new(x, y));
        }

        Ok(Self(bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOLUTION_STRS: &'static [&'static str] = &["\
        5,4\n\
        4,2\n\
        4,5\n\
        3,0\n\
        2,1\n\
        6,3\n\
        2,4\n\
        1,5\n\
        0,6\n\
        3,3\n\
        2,6\n\
        5,1\n\
        1,2\n\
        5,5\n\
        2,5\n\
        6,5\n\
        1,4\n\
        0,4\n\
        6,4\n\
        1,1\n\
        6,1\n\
        1,0\n\
        0,5\n\
        1,6\n\
        2,0\n"];

    const TEST_SIDE_LEN: i32 = 7_i32;
    const TEST_PREFIX: usize = 12_usize;

    #[test]
    fn test_try_from_str() {
        let solution: Solution = Solution::try_from(SOLUTION_STRS[0_usize]).unwrap();

        assert_eq!(solution.0.len(), 25_usize);
        assert_eq!(solution.0[0_usize], IVec2::new(5_i32, 4_i32));
        assert!(Solution::try_from("5,4\n4,x\n").is_err());
    }

    #[test]
    fn test_min_steps() {
        for (solution_str, min_steps) in SOLUTION_STRS.iter().copied().zip([Some(22_u32)]) {
            assert_eq!(
                Solution::try_from(solution_str)
                    .unwrap()
                    .min_steps(TEST_SIDE_LEN, TEST_PREFIX),
                min_steps
            );
        }
    }

    #[test]
    fn test_open_grid_is_manhattan_distance() {
        assert_eq!(
            Solution::try_from("0,0\n")
                .unwrap()
                .min_steps(5_i32, 0_usize),
            Some(8_u32)
        );
    }

    #[test]
    fn test_blocked_exit() {
        // A wall of bytes across the second row seals off the start corner.
        assert_eq!(
            Solution::try_from("0,1\n1,1\n2,1\n1,0\n")
                .unwrap()
                .min_steps(3_i32, 4_usize),
            None
        );
    }
}
