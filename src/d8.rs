use {crate::*, glam::IVec2};

/// Day 8: Resonant Collinearity
///
/// Every pair of same-frequency antennas projects an antinode beyond each antenna. Flag bit 1
/// marks a frequency as handled, flag bit 2 marks an antinode.
#[derive(Clone, Copy, Eq, PartialEq)]
#[cfg_attr(test, derive(Debug))]
struct Freq(u8);

impl Freq {
    const EMPTY: Self = Self(b'.');
}

impl TryFrom<char> for Freq {
    type Error = ();

    fn try_from(value: char) -> Result<Self, Self::Error> {
        value
            .is_ascii_graphic()
            .then_some(Self(value as u8))
            .ok_or(())
    }
}

pub struct Solution(FlaggedGrid<Freq>);

impl Solution {
    const SEEN: u32 = 1_u32;
    const ANTINODE: u32 = 2_u32;

    fn place_antinode(flags: &mut Grid2D<u32>, pos: IVec2) {
        if let Some(flag) = flags.get_mut(pos) {
            *flag |= Self::ANTINODE;
        }
    }

    fn unique_antinode_count(&mut self) -> usize {
        let (cells, flags) = self.0.split_mut();

        for index in 0_usize..cells.area() {
            let freq: Freq = cells.cells()[index];

            if freq != Freq::EMPTY && flags.cells()[index] & Self::SEEN == 0_u32 {
                let antennas: Vec<IVec2> = cells.iter_positions_with_cell(&freq).collect();

                for &antenna in &antennas {
                    *flags.get_mut(antenna).unwrap() |= Self::SEEN;
                }

                for (i, &antenna_a) in antennas.iter().enumerate() {
                    for &antenna_b in &antennas[i + 1_usize..] {
                        let dist: IVec2 = antenna_a - antenna_b;

                        Self::place_antinode(flags, antenna_a + dist);
                        Self::place_antinode(flags, antenna_b - dist);
                    }
                }
            }
        }

        flags
            .cells()
            .iter()
            .filter(|&&flag| flag & Self::ANTINODE != 0_u32)
            .count()
    }
}

impl RunQuestions for Solution {
    const HAS_SECOND_QUESTION: bool = false;

    fn q1_internal(&mut self, _args: &QuestionArgs) {
        println!(
            "Part 1: Number of unique antinodes = {}",
            self.unique_antinode_count()
        );
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

#[cfg(test)]
mod tests {
    use super::*;

    const SOLUTION_STRS: &'static [&'static str] = &["\
        ............\n\
        ........0...\n\
        .....0......\n\
        .......0....\n\
        ....0.......\n\
        ......A.....\n\
        ............\n\
        ............\n\
        ........A...\n\
        .........A..\n\
        ............\n\
        ............\n"];

    #[test]
    fn test_unique_antinode_count() {
        for (solution_str, unique_antinode_count) in SOLUTION_STRS.iter().copied().zip([14_usize]) {
            let mut solution: Solution = Solution::try_from(solution_str).unwrap();

            assert_eq!(solution.unique_antinode_count(), unique_antinode_count);
        }
    }

    #[test]
    fn test_antinodes_may_land_on_antennas() {
        let mut solution: Solution = Solution::try_from(
            "\
            ......\n\
            .a....\n\
            ..a...\n\
            ...a..\n\
            ......\n\
            ......\n",
        )
        .unwrap();

        // The antennas themselves are antinodes of the neighboring pairs.
        assert_eq!(solution.unique_antinode_count(), 5_usize);
    }
}
