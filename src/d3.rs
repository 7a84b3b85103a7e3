use {
    crate::*,
    nom::{
        branch::alt,
        bytes::complete::tag,
        character::complete::anychar,
        combinator::{map, value},
        error::Error,
        multi::fold_many0,
        sequence::{delimited, separated_pair},
        Err, IResult,
    },
};

/// Day 3: Mull It Over
///
/// Corrupted memory scanned for intact `mul(a,b)` instructions, with `do()`/`don't()` toggling
/// whether subsequent multiplications count.
#[derive(Clone, Copy)]
#[cfg_attr(test, derive(Debug, PartialEq))]
enum Instruction {
    Mul(i64, i64),
    Do,
    Dont,
}

impl Parse for Instruction {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        alt((
            map(
                delimited(
                    tag("mul("),
                    separated_pair(parse_integer, tag(","), parse_integer),
                    tag(")"),
                ),
                |(a, b)| Self::Mul(a, b),
            ),
            value(Self::Do, tag("do()")),
            value(Self::Dont, tag("don't()")),
        ))(input)
    }
}

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution(Vec<Instruction>);

impl Solution {
    fn mul_sum(&self) -> i64 {
        self.0
            .iter()
            .map(|instruction| match instruction {
                Instruction::Mul(a, b) => a * b,
                _ => 0_i64,
            })
            .sum()
    }

    fn enabled_mul_sum(&self) -> i64 {
        let mut enabled: bool = true;

        self.0
            .iter()
            .map(|instruction| match instruction {
                Instruction::Mul(a, b) => {
                    if enabled {
                        a * b
                    } else {
                        0_i64
                    }
                }
                Instruction::Do => {
                    enabled = true;

                    0_i64
                }
                Instruction::Dont => {
                    enabled = false;

                    0_i64
                }
            })
            .sum()
    }
}

impl Parse for Solution {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(
            fold_many0(
                alt((map(Instruction::parse, Some), value(None, anychar))),
                Vec::new,
                |mut instructions, instruction| {
                    if let Some(instruction) = instruction {
                        instructions.push(instruction);
                    }

                    instructions
                },
            ),
            Self,
        )(input)
    }
}

impl RunQuestions for Solution {
    fn q1_internal(&mut self, _args: &QuestionArgs) {
        println!("Part 1: result = {}", self.mul_sum());
    }

    fn q2_internal(&mut self, _args: &QuestionArgs) {
        println!("Part 2: result = {}", self.enabled_mul_sum());
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

    const SOLUTION_STRS: &'static [&'static str] = &[
        "xmul(2,4)%&mul[3,7]!@^do_not_mul(5,5)+mul(32,64]then(mul(11,8)mul(8,5))",
        "xmul(2,4)&mul[3,7]!^don't()_mul(5,5)+mul(32,64](mul(11,8)undo()?mul(8,5))",
    ];

    fn solution(index: usize) -> &'static Solution {
        use Instruction::*;

        static ONCE_LOCK: OnceLock<Vec<Solution>> = OnceLock::new();

        &ONCE_LOCK.get_or_init(|| {
            vec![
                Solution(vec![
                    Mul(2_i64, 4_i64),
                    Mul(5_i64, 5_i64),
                    Mul(11_i64, 8_i64),
                    Mul(8_i64, 5_i64),
                ]),
                Solution(vec![
                    Mul(2_i64, 4_i64),
                    Dont,
                    Mul(5_i64, 5_i64),
                    Mul(11_i64, 8_i64),
                    Do,
                    Mul(8_i64, 5_i64),
                ]),
            ]
        })[index]
    }

    #[test]
    fn test_try_from_str() {
        for (index, solution_str) in SOLUTION_STRS.iter().copied().enumerate() {
            assert_eq!(
                Solution::try_from(solution_str).as_ref(),
                Ok(solution(index))
            );
        }
    }

    #[test]
    fn test_mul_sum() {
        for (index, mul_sum) in [161_i64, 161_i64].into_iter().enumerate() {
            assert_eq!(solution(index).mul_sum(), mul_sum);
        }
    }

    #[test]
    fn test_enabled_mul_sum() {
        for (index, enabled_mul_sum) in [161_i64, 48_i64].into_iter().enumerate() {
            assert_eq!(solution(index).enabled_mul_sum(), enabled_mul_sum);
        }
    }
}
