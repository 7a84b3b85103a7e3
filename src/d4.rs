use {
    crate::*,
    glam::IVec2,
    nom::{combinator::map, error::Error, Err, IResult},
};

/// Day 4: Ceres Search
///
/// A word search: count `XMAS` in all 8 directions, then count `X-MAS` crosses.
#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution(Grid2D<Cell>);

define_cell! {
    #[repr(u8)]
    #[derive(Clone, Copy, Debug, PartialEq)]
    pub enum Cell {
        X = X_BYTE = b'X',
        M = M_BYTE = b'M',
        A = A_BYTE = b'A',
        S = S_BYTE = b'S',
    }
}

impl Solution {
    const XMAS: [Cell; 4_usize] = [Cell::X, Cell::M, Cell::A, Cell::S];
    const DELTAS: [IVec2; 8_usize] = [
        IVec2::new(-1_i32, -1_i32),
        IVec2::new(0_i32, -1_i32),
        IVec2::new(1_i32, -1_i32),
        IVec2::new(-1_i32, 0_i32),
        IVec2::new(1_i32, 0_i32),
        IVec2::new(-1_i32, 1_i32),
        IVec2::new(0_i32, 1_i32),
        IVec2::new(1_i32, 1_i32),
    ];

    fn xmas_count(&self) -> usize {
        self.0
            .iter_positions_with_cell(&Cell::X)
            .map(|pos| {
                Self::DELTAS
                    .into_iter()
                    .filter(|&delta| {
                        Self::XMAS.into_iter().enumerate().skip(1_usize).all(
                            |(distance, expected)| {
                                self.0.get(pos + delta * distance as i32) == Some(&expected)
                            },
                        )
                    })
                    .count()
            })
            .sum()
    }

    fn is_m_and_s(a: Option<&Cell>, b: Option<&Cell>) -> bool {
        matches!(
            (a, b),
            (Some(Cell::M), Some(Cell::S)) | (Some(Cell::S), Some(Cell::M))
        )
    }

    fn cross_mas_count(&self) -> usize {
        self.0
            .iter_positions_with_cell(&Cell::A)
            .filter(|&pos| {
                Self::is_m_and_s(
                    self.0.get(pos + IVec2::new(-1_i32, -1_i32)),
                    self.0.get(pos + IVec2::new(1_i32, 1_i32)),
                ) && Self::is_m_and_s(
                    self.0.get(pos + IVec2::new(1_i32, -1_i32)),
                    self.0.get(pos + IVec2::new(-1_i32, 1_i32)),
                )
            })
            .count()
    }
}

impl Parse for Solution {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(Grid2D::parse, Self)(input)
    }
}

impl RunQuestions for Solution {
    fn q1_internal(&mut self, _args: &QuestionArgs) {
        println!("Part 1: XMAS count = {}", self.xmas_count());
    }

    fn q2_internal(&mut self, _args: &QuestionArgs) {
        println!("Part 2: X-MAS count = {}", self.cross_mas_count());
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
    use {super::*, std::sync::OnceLock};

    const SOLUTION_STRS: &'static [&'static str] = &["\
        MMMSXXMASM\n\
        MSAMXMSMSA\n\
        AMXSXMAAMM\n\
        MSAMASMSMX\n\
        XMASAMXAMM\n\
        XXAMMXXAMA\n\
        SMSMSASXSS\n\
        SAXAMASAAA\n\
        MAMMMXMMMM\n\
        MXMXAXMASX\n"];

    fn solution(index: usize) -> &'static Solution {
        static ONCE_LOCK: OnceLock<Vec<Solution>> = OnceLock::new();

        &ONCE_LOCK.get_or_init(|| {
            SOLUTION_STRS
                .iter()
                .copied()
                .map(|solution_str| Solution::try_from(solution_str).unwrap())
                .collect()
        })[index]
    }

    #[test]
    fn test_xmas_count() {
        for (index, xmas_count) in [18_usize].into_iter().enumerate() {
            assert_eq!(solution(index).xmas_count(), xmas_count);
        }
    }

    #[test]
    fn test_cross_mas_count() {
        for (index, cross_mas_count) in [9_usize].into_iter().enumerate() {
            assert_eq!(solution(index).cross_mas_count(), cross_mas_count);
        }
    }
}
