use {
    crate::*,
    nom::{character::complete::space1, combinator::all_consuming, multi::separated_list1},
};

/// Day 11: Plutonian Pebbles
///
/// Each blink, a 0 stone becomes 1, a stone with an even digit count splits in half, and any
/// other stone is multiplied by 2024.
#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution(Vec<u64>);

impl Solution {
    const BLINKS: usize = 25_usize;

    fn blink(stones: &[u64]) -> Vec<u64> {
        let mut next_stones: Vec<u64> = Vec::with_capacity(stones.len());

        for &stone in stones {
            if stone == 0_u64 {
                next_stones.push(1_u64);
            } else {
                let digits: u32 = stone.ilog10() + 1_u32;

                if digits % 2_u32 == 0_u32 {
                    let split: u64 = 10_u64.pow(digits / 2_u32);

                    next_stones.push(stone / split);
                    next_stones.push(stone % split);
                } else {
                    next_stones.push(stone * 2024_u64);
                }
            }
        }

        next_stones
    }

    fn stone_count_after_blinks(&self, blinks: usize) -> usize {
        let mut stones: Vec<u64> = self.0.clone();

        for _ in 0_usize..blinks {
            stones = Self::blink(&stones);
        }

        stones.len()
    }
}

impl RunQuestions for Solution {
    const HAS_SECOND_QUESTION: bool = false;

    fn q1_internal(&mut self, _args: &QuestionArgs) {
        println!(
            "Part 1: Stones after {} blinks = {}",
            Self::BLINKS,
            self.stone_count_after_blinks(Self::BLINKS)
        );
    }
}

impl TryFrom<&str> for Solution {
    type Error = String;

    fn try_from(input: &str) -> Result<Self, Self::Error> {
        let mut line_store: LineStore = LineStore::new(input);

        let (line, line_number): (&str, usize) =
            line_store.next_line().ok_or("empty input".to_owned())?;

        let (_, stones): (&str, Vec<u64>) =
            all_consuming(separated_list1(space1, parse_integer))(line)
                .map_err(|error| format!("line {line_number}: {error}"))?;

        Ok(Self(stones))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOLUTION_STRS: &'static [&'static str] = &["125 17\n"];

    #[test]
    fn test_try_from_str() {
        assert_eq!(
            Solution::try_from(SOLUTION_STRS[0_usize]),
            Ok(Solution(vec![125_u64, 17_u64]))
        );
    }

    #[test]
    fn test_blink() {
        let mut stones: Vec<u64> = vec![0_u64, 1_u64, 10_u64, 99_u64, 999_u64];

        stones = Solution::blink(&stones);

        assert_eq!(
            stones,
            vec![1_u64, 2024_u64, 1_u64, 0_u64, 9_u64, 9_u64, 2021976_u64]
        );
    }

    #[test]
    fn test_stone_count_after_blinks() {
        let solution: Solution = Solution::try_from(SOLUTION_STRS[0_usize]).unwrap();

        assert_eq!(solution.stone_count_after_blinks(6_usize), 22_usize);
        assert_eq!(
            solution.stone_count_after_blinks(Solution::BLINKS),
            55312_usize
        );
    }
}
