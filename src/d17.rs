use {
    crate::*,
    nom::{
        bytes::complete::tag,
        character::complete::line_ending,
        combinator::{map, verify},
        error::Error,
        multi::separated_list1,
        sequence::{preceded, tuple},
        Err, IResult,
    },
};

const REG_A: usize = 0_usize;
const REG_B: usize = 1_usize;
const REG_C: usize = 2_usize;

/// Day 17: Chronospatial Computer
///
/// A 3-bit virtual machine: three registers and a program of opcode/operand pairs, with combo
/// operands resolving 4, 5, 6 to registers. Execution runs on an explicit machine state record.
#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution {
    registers: [u32; 3_usize],
    program: Vec<u32>,
}

struct MachineState {
    registers: [u32; 3_usize],
    ip: usize,
    output: Vec<u32>,
}

impl MachineState {
    fn new(registers: [u32; 3_usize]) -> Self {
        Self {
            registers,
            ip: 0_usize,
            output: Vec::new(),
        }
    }

    fn combo(&self, operand: u32) -> u32 {
        match operand {
            0_u32..=3_u32 => operand,
            4_u32 => self.registers[REG_A],
            5_u32 => self.registers[REG_B],
            6_u32 => self.registers[REG_C],
            _ => unreachable!("combo operand 7 is reserved"),
        }
    }

    /// `A >> combo`, which is `A / (1 << combo)` even when the shift saturates.
    fn shifted_a(&self, operand: u32) -> u32 {
        self.registers[REG_A]
            .checked_shr(self.combo(operand))
            .unwrap_or(0_u32)
    }

    fn run(&mut self, program: &[u32]) {
        while self.ip + 1_usize < program.len() {
            let operand: u32 = program[self.ip + 1_usize];

            match program[self.ip] {
                0_u32 => self.registers[REG_A] = self.shifted_a(operand),
                1_u32 => self.registers[REG_B] ^= operand,
                2_u32 => self.registers[REG_B] = self.combo(operand) % 8_u32,
                3_u32 => {
                    if self.registers[REG_A] != 0_u32 {
                        self.ip = operand as usize;

                        continue;
                    }
                }
                4_u32 => self.registers[REG_B] ^= self.registers[REG_C],
                5_u32 => self.output.push(self.combo(operand) % 8_u32),
                6_u32 => self.registers[REG_B] = self.shifted_a(operand),
                7_u32 => self.registers[REG_C] = self.shifted_a(operand),
                opcode => unreachable!("invalid opcode {opcode}"),
            }

            self.ip += 2_usize;
        }
    }
}

impl Solution {
    fn run_program(&self) -> MachineState {
        let mut state: MachineState = MachineState::new(self.registers);

        state.run(&self.program);

        state
    }

    fn program_output(&self) -> String {
        self.run_program()
            .output
            .into_iter()
            .map(|value| value.to_string())
            .collect::<Vec<String>>()
            .join(",")
    }
}

impl Parse for Solution {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(
            tuple((
                preceded(tag("Register A: "), parse_integer),
                line_ending,
                preceded(tag("Register B: "), parse_integer),
                line_ending,
                preceded(tag("Register C: "), parse_integer),
                line_ending,
                line_ending,
                preceded(
                    tag("Program: "),
                    verify(
                        separated_list1(tag(","), parse_integer::<u32>),
                        |program: &Vec<u32>| program.iter().all(|&value| value < 8_u32),
                    ),
                ),
            )),
            |(a, _, b, _, c, _, _, program)| Self {
                registers: [a, b, c],
                program,
            },
        )(input)
    }
}

impl RunQuestions for Solution {
    const HAS_SECOND_QUESTION: bool = false;

    fn q1_internal(&mut self, _args: &QuestionArgs) {
        println!("Part 1: program output = {}", self.program_output());
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
    use super::*;

    const SOLUTION_STRS: &'static [&'static str] = &["\
        Register A: 729\n\
        Register B: 0\n\
        Register C: 0\n\
        \n\
        Program: 0,1,5,4,3,0\n"];

    #[test]
    fn test_try_from_str() {
        assert_eq!(
            Solution::try_from(SOLUTION_STRS[0_usize]),
            Ok(Solution {
                registers: [729_u32, 0_u32, 0_u32],
                program: vec![0_u32, 1_u32, 5_u32, 4_u32, 3_u32, 0_u32],
            })
        );
        assert!(Solution::try_from(
            "Register A: 0\nRegister B: 0\nRegister C: 0\n\nProgram: 8,0\n"
        )
        .is_err());
    }

    #[test]
    fn test_small_programs() {
        // 2,6: with C = 9, B becomes 1.
        let state: MachineState = Solution {
            registers: [0_u32, 0_u32, 9_u32],
            program: vec![2_u32, 6_u32],
        }
        .run_program();

        assert_eq!(state.registers[REG_B], 1_u32);

        // 5,0,5,1,5,4: with A = 10, outputs 0,1,2.
        assert_eq!(
            Solution {
                registers: [10_u32, 0_u32, 0_u32],
                program: vec![5_u32, 0_u32, 5_u32, 1_u32, 5_u32, 4_u32],
            }
            .program_output(),
            "0,1,2"
        );

        // 0,1,5,4,3,0: with A = 2024, outputs 4,2,5,6,7,7,7,7,3,1,0 and leaves A = 0.
        let solution: Solution = Solution {
            registers: [2024_u32, 0_u32, 0_u32],
            program: vec![0_u32, 1_u32, 5_u32, 4_u32, 3_u32, 0_u32],
        };
        let state: MachineState = solution.run_program();

        assert_eq!(state.output, vec![
            4_u32, 2_u32, 5_u32, 6_u32, 7_u32, 7_u32, 7_u32, 7_u32, 3_u32, 1_u32, 0_u32
        ]);
        assert_eq!(state.registers[REG_A], 0_u32);

        // 1,7: with B = 29, B becomes 26.
        let state: MachineState = Solution {
            registers: [0_u32, 29_u32, 0_u32],
            program: vec![1_u32, 7_u32],
        }
        .run_program();

        assert_eq!(state.registers[REG_B], 26_u32);

        // 4,0: with B = 2024 and C = 43690, B becomes 44354.
        let state: MachineState = Solution {
            registers: [0_u32, 2024_u32, 43690_u32],
            program: vec![4_u32, 0_u32],
        }
        .run_program();

        assert_eq!(state.registers[REG_B], 44354_u32);
    }

    #[test]
    fn test_program_output() {
        for (solution_str, program_output) in SOLUTION_STRS.iter().copied().zip(["4,6,3,5,6,3,5,2,1,0"]) {
            assert_eq!(
                Solution::try_from(solution_str).unwrap().program_output(),
                program_output
            );
        }
    }
}
