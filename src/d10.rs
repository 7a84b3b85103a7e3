use {crate::*, glam::IVec2, strum::IntoEnumIterator};

/// Day 10: Hoof It
///
/// Trails climb from height 0 to 9 one step at a time. A single recursive walk per trailhead
/// increments a flag for every distinct trail reaching a peak, so the nonzero flag count is the
/// trailhead's score and the flag sum is its rating.
#[derive(Clone, Copy, Eq, PartialEq)]
#[cfg_attr(test, derive(Debug))]
struct Height(u8);

impl Height {
    const TRAILHEAD: Self = Self(0_u8);
    const PEAK: Self = Self(9_u8);
}

impl TryFrom<char> for Height {
    type Error = ();

    fn try_from(value: char) -> Result<Self, Self::Error> {
        value
            .to_digit(10_u32)
            .map(|digit| Self(digit as u8))
            .ok_or(())
    }
}

pub struct Solution(FlaggedGrid<Height>);

impl Solution {
    fn walk(cells: &Grid2D<Height>, flags: &mut Grid2D<u32>, pos: IVec2, height: Height) {
        if height == Height::PEAK {
            *flags.get_mut(pos).unwrap() += 1_u32;
        } else {
            let next_height: Height = Height(height.0 + 1_u8);

            for dir in Direction::iter() {
                let next_pos: IVec2 = pos + dir.vec();

                if cells.get(next_pos) == Some(&next_height) {
                    Self::walk(cells, flags, next_pos, next_height);
                }
            }
        }
    }

    /// Total score and total rating over all trailheads.
    fn trailhead_totals(&mut self) -> (usize, u32) {
        let trailheads: Vec<IVec2> = self
            .0
            .cells()
            .iter_positions_with_cell(&Height::TRAILHEAD)
            .collect();

        let mut score: usize = 0_usize;
        let mut rating: u32 = 0_u32;

        for trailhead in trailheads {
            {
                let (cells, flags) = self.0.split_mut();

                Self::walk(cells, flags, trailhead, Height::TRAILHEAD);
            }

            score += self
                .0
                .flags()
                .cells()
                .iter()
                .filter(|&&flag| flag != 0_u32)
                .count();
            rating += self.0.flags().cells().iter().sum::<u32>();

            self.0.clear_flags();
        }

        (score, rating)
    }
}

impl RunQuestions for Solution {
    fn q1_internal(&mut self, _args: &QuestionArgs) {
        println!("Part 1: {}", self.trailhead_totals().0);
    }

    fn q2_internal(&mut self, _args: &QuestionArgs) {
        println!("Part 2: {}", self.trailhead_totals().1);
    }
}

impl<'i> TryFrom<&'i str> for Solution {
    type Error = String;

    fn try_from(input: &'i str) -> Result<Self, Self::Error> {
        FlaggedGrid::try_from(input)
            .map(Self)
            .map_err(|error| format!("{error:?}"))
    }
}
