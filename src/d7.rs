use {
    crate::*,
    nom::{
        bytes::complete::tag, character::complete::space1, combinator::all_consuming,
        multi::separated_list1, sequence::separated_pair,
    },
};

/// Day 7: Bridge Repair
///
/// Each equation is achievable if some left-to-right combination of `+` and `*` over its operands
/// produces the test value. Operator choices are enumerated as bitmasks.
#[cfg_attr(test, derive(Debug, PartialEq))]
struct Equation {
    test_value: u64,
    operands: Vec<u64>,
}

impl Equation {
    fn is_achievable(&self) -> bool {
        let operator_count: u32 = self.operands.len() as u32 - 1_u32;

        (0_u64..1_u64 << operator_count).any(|operator_mask| {
            self.operands[1_usize..]
                .iter()
                .enumerate()
                .fold(self.operands[0_usize], |value, (index, &operand)| {
                    if operator_mask & (1_u64 << index) != 0_u64 {
                        value * operand
                    } else {
                        value + operand
                    }
                })
                == self.test_value
        })
    }
}

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution(Vec<Equation>);

impl Solution {
    fn total_calibration_result(&self) -> u64 {
        self.0
            .iter()
            .filter(|equation| equation.is_achievable())
            .map(|equation| equation.test_value)
            .sum()
    }
}

impl RunQuestions for Solution {
    const HAS_SECOND_QUESTION: bool = false;

    fn q1_internal(&mut self, _args: &QuestionArgs) {
        println!("Part 1: {}", self.total_calibration_result());
    }
}

impl TryFrom<&str> for Solution {
    type Error = String;

    fn try_from(input: &str) -> Result<Self, Self::Error> {
        let mut line_store: LineStore = LineStore::new(input);

        if line_store.is_empty() {
            return Err("empty input".into());
        }

        let mut equations: Vec<Equation> = Vec::with_capacity(line_store.len());

        while let Some((line, line_number)) = line_store.next_line() {
            let (_, (test_value, operands)): (&str, (u64, Vec<u64>)) =
                all_consuming(separated_pair(
                    parse_integer,
                    tag(": "),
                    separated_list1(space1, parse_integer),
                ))(line)
                .map_err(|error| format!("line {line_number}: {error}"))?;

            if operands.is_empty() {
                return Err(format!("line {line_number}: no operands"));
            }

            equations.push(Equation {
                test_value,
                operands,
            });
        }

        Ok(Self(equations))
    }
}

#[cfg(test)]
mod tests {
    use {super::*, std::sync::OnceLock};

    const SOLUTION_STRS: &'static [&'static str] = &["\
        190: 10 19\n\
        3267: 81 40 27\n\
        83: 17 5\n\
        156: 15 6\n\
        7290: 6 8 6 15\n\
        161011: 16 10 13\n\
        192: 17 8 14\n\
        21037: 9 7 18 13\n\
        292: 11 6 16 20\n"];

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
    fn test_is_achievable() {
        for (equation, is_achievable) in solution(0_usize).0.iter().zip([
            true, true, false, false, false, false, false, false, true,
        ]) {
            assert_eq!(equation.is_achievable(), is_achievable);
        }
    }

    #[test]
    fn test_total_calibration_result() {
        for (index, total_calibration_result) in [3749_u64].into_iter().enumerate() {
            assert_eq!(
                solution(index).total_calibration_result(),
                total_calibration_result
            );
        }
    }
}
