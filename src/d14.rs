use {
    crate::*,
    glam::IVec2,
    nom::{
        bytes::complete::tag,
        combinator::{all_consuming, map},
        sequence::{preceded, separated_pair, tuple},
        IResult,
    },
};

/// Day 14: Restroom Redoubt
///
/// Robots move with constant velocity on a wrapping grid. The safety factor is the product of the
/// robot counts in the four quadrants, ignoring the middle row and column.
#[cfg_attr(test, derive(Debug, PartialEq))]
struct Robot {
    pos: IVec2,
    vel: IVec2,
}

impl Robot {
    fn pos_after(&self, dimensions: IVec2, time: i32) -> IVec2 {
        let pos: IVec2 = self.pos + self.vel * time;

        IVec2::new(pos.x.rem_euclid(dimensions.x), pos.y.rem_euclid(dimensions.y))
    }
}

impl Parse for Robot {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(
            tuple((
                preceded(
                    tag("p="),
                    separated_pair(parse_integer, tag(","), parse_integer),
                ),
                preceded(
                    tag(" v="),
                    separated_pair(parse_integer, tag(","), parse_integer),
                ),
            )),
            |((pos_x, pos_y), (vel_x, vel_y))| Self {
                pos: IVec2::new(pos_x, pos_y),
                vel: IVec2::new(vel_x, vel_y),
            },
        )(input)
    }
}

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution(Vec<Robot>);

impl Solution {
    const DIMENSIONS: IVec2 = IVec2::new(101_i32, 103_i32);
    const TIME: i32 = 100_i32;

    fn safety_factor(&self, dimensions: IVec2, time: i32) -> i64 {
        let middle: IVec2 = dimensions / 2_i32;
        let mut quadrants: [i64; 4_usize] = [0_i64; 4_usize];

        for robot in &self.0 {
            let pos: IVec2 = robot.pos_after(dimensions, time);

            if pos.x != middle.x && pos.y != middle.y {
                let quadrant: usize = (pos.x > middle.x) as usize
                    | (((pos.y > middle.y) as usize) << 1_usize);

                quadrants[quadrant] += 1_i64;
            }
        }

        quadrants.into_iter().product()
    }
}

impl RunQuestions for Solution {
    const HAS_SECOND_QUESTION: bool = false;

    fn q1_internal(&mut self, _args: &QuestionArgs) {
        println!(
            "Part 1: Safety factor = {}",
            self.safety_factor(Self::DIMENSIONS, Self::TIME)
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

        let mut robots: Vec<Robot> = Vec::with_capacity(line_store.len());

        while let Some((line, line_number)) = line_store.next_line() {
            let (_, robot): (&str, Robot) = all_consuming(Robot::parse)(line)
                .map_err(|error| format!("line {line_number}: {error}"))?;

            robots.push(robot);
        }

        Ok(Self(robots))
    }
}
