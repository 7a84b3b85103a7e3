use {crate::*, nom::combinator::all_consuming};

/// Day 22: Monkey Market
///
/// Each buyer's secret number evolves through 2000 rounds of a mix-and-prune sequence. The answer
/// is the sum of every buyer's final secret.
#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution(Vec<u64>);

impl Solution {
    const PRUNE_MASK: u64 = (1_u64 << 24_u32) - 1_u64;
    const ROUNDS: usize = 2000_usize;

    fn next_secret(mut secret: u64) -> u64 {
        secret = (secret ^ (secret << 6_u32)) & Self::PRUNE_MASK;
        secret = (secret ^ (secret >> 5_u32)) & Self::PRUNE_MASK;

        (secret ^ (secret << 11_u32)) & Self::PRUNE_MASK
    }

    fn secret_after_rounds(mut secret: u64, rounds: usize) -> u64 {
        for _ in 0_usize..rounds {
            secret = Self::next_secret(secret);
        }

        secret
    }

    fn final_secret_sum(&self) -> u64 {
        self.0
            .iter()
            .map(|&secret| Self::secret_after_rounds(secret, Self::ROUNDS))
            .sum()
    }
}

impl RunQuestions for Solution {
    const HAS_SECOND_QUESTION: bool = false;

    fn q1_internal(&mut self, _args: &QuestionArgs) {
        println!("Part 1: {}", self.final_secret_sum());
    }
}

impl TryFrom<&str> for Solution {
    type Error = String;

    fn try_from(input: &str) -> Result<Self, Self::Error> {
        let mut line_store: LineStore = LineStore::new(input);

        if line_store.is_empty() {
            return Err("empty input".into());
        }

        let mut secrets: Vec<u64> = Vec::with_capacity(line_store.len());

        while let Some((line, line_number)) = line_store.next_line() {
            let (_, secret): (&str, u64) = all_consuming(parse_integer)(line)
                .map_err(|error| format!("line {line_number}: {error}"))?;

            secrets.push(secret);
        }

        Ok(Self(secrets))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOLUTION_STRS: &'static [&'static str] = &["\
        1\n\
        10\n\
        100\n\
        2024\n"];

    #[test]
    fn test_try_from_str() {
        assert_eq!(
            Solution::try_from(SOLUTION_STRS[0_usize]),
            Ok(Solution(vec![1_u64, 10_u64, 100_u64, 2024_u64]))
        );
        assert!(Solution::try_from("1\nten\n").is_err());
    }

    #[test]
    fn test_next_secret() {
        let mut secret: u64 = 123_u64;

        for expected in [
            15887950_u64,
            16495136_u64,
            527345_u64,
            704524_u64,
            1553684_u64,
            12683156_u64,
            11100544_u64,
            12249484_u64,
            7753432_u64,
            5908254_u64,
        ] {
            secret = Solution::next_secret(secret);

            assert_eq!(secret, expected);
        }
    }

    #[test]
    fn test_secret_after_rounds() {
        for (secret, final_secret) in [1_u64, 10_u64, 100_u64, 2024_u64].into_iter().zip([
            8685429_u64,
            4700978_u64,
            15273692_u64,
            8667524_u64,
        ]) {
            assert_eq!(
                Solution::secret_after_rounds(secret, Solution::ROUNDS),
                final_secret
            );
        }
    }

    #[test]
    fn test_final_secret_sum() {
        for (solution_str, final_secret_sum) in
            SOLUTION_STRS.iter().copied().zip([37327623_u64])
        {
            assert_eq!(
                Solution::try_from(solution_str).unwrap().final_secret_sum(),
                final_secret_sum
            );
        }
    }
}
