use {
    crate::*,
    glam::I64Vec2,
    nom::{
        bytes::complete::tag,
        character::complete::line_ending,
        combinator::map,
        error::Error,
        multi::separated_list1,
        sequence::{preceded, separated_pair, tuple},
        Err, IResult,
    },
};

/// Day 13: Claw Contraption
///
/// Each machine is a pair of linear equations in button presses, solved exactly by elimination. A
/// prize is only winnable with whole numbers of presses, at 3 tokens per A press and 1 per B.
#[cfg_attr(test, derive(Debug, PartialEq))]
struct Machine {
    button_a: I64Vec2,
    button_b: I64Vec2,
    prize: I64Vec2,
}

impl Machine {
    fn fewest_tokens(&self) -> Option<i64> {
        let m: i64 = self.prize.x * self.button_a.y - self.prize.y * self.button_a.x;
        let n: i64 = self.button_b.x * self.button_a.y - self.button_b.y * self.button_a.x;

        (n != 0_i64 && m % n == 0_i64)
            .then(|| {
                let b_presses: i64 = m / n;
                let k: i64 = self.prize.x - b_presses * self.button_b.x;

                (k % self.button_a.x == 0_i64).then(|| k / self.button_a.x * 3_i64 + b_presses)
            })
            .flatten()
    }
}

impl Parse for Machine {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(
            tuple((
                preceded(
                    tag("Button A: X+"),
                    separated_pair(parse_integer, tag(", Y+"), parse_integer),
                ),
                line_ending,
                preceded(
                    tag("Button B: X+"),
                    separated_pair(parse_integer, tag(", Y+"), parse_integer),
                ),
                line_ending,
                preceded(
                    tag("Prize: X="),
                    separated_pair(parse_integer, tag(", Y="), parse_integer),
                ),
            )),
            |((a_x, a_y), _, (b_x, b_y), _, (prize_x, prize_y))| Self {
                button_a: I64Vec2::new(a_x, a_y),
                button_b: I64Vec2::new(b_x, b_y),
                prize: I64Vec2::new(prize_x, prize_y),
            },
        )(input)
    }
}

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution(Vec<Machine>);

impl Solution {
    fn total_fewest_tokens(&self) -> i64 {
        self.0
            .iter()
            .filter_map(Machine::fewest_tokens)
            .sum()
    }
}

impl Parse for Solution {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(
            separated_list1(tuple((line_ending, line_ending)), Machine::parse),
            Self,
        )(input)
    }
}

impl RunQuestions for Solution {
    const HAS_SECOND_QUESTION: bool = false;

    fn q1_internal(&mut self, _args: &QuestionArgs) {
        println!("Part 1: fewest tokens = {}", self.total_fewest_tokens());
    }
}

impl<'i> TryFrom<&'i str> for Solution {
    type Error = Err<Error<&'i str>>;

    fn try_from(input: &'i str) -> Result<Self, Self::Error> {
        Ok(Self::parse(input)?.1)
    }
}
