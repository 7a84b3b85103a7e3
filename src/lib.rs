use {
    memmap::Mmap,
    nom::{
        bytes::complete::tag,
        character::complete::digit1,
        combinator::{map, map_res, opt, rest},
        sequence::tuple,
        IResult,
    },
    num::Integer,
    std::{
        fmt::{Debug, Display, Formatter, Result as FmtResult},
        fs::File,
        io::{Error as IoError, ErrorKind, Result as IoResult},
        str::{from_utf8, FromStr, Utf8Error},
        sync::OnceLock,
    },
};

pub use {clap::Parser, util::*};

mod util;

/// Anything that aborts a run. All variants are fatal: `main` prints the `Display` form to
/// stderr and exits with a non-zero status.
#[derive(Debug)]
pub enum RunError {
    Io(IoError),
    Parse(String),
    NoQuestion { day: u8, question: u8 },
    UnknownDay(u8),
}

impl Display for RunError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Io(error) => write!(f, "input error: {error}"),
            Self::Parse(message) => write!(f, "parse error: {message}"),
            Self::NoQuestion { day, question } => {
                write!(f, "day {day} has no solution for question {question}")
            }
            Self::UnknownDay(day) => write!(f, "no solution registered for day {day}"),
        }
    }
}

impl From<IoError> for RunError {
    fn from(error: IoError) -> Self {
        Self::Io(error)
    }
}

pub type RunResult = Result<(), RunError>;

#[derive(Debug, Parser)]
pub struct QuestionArgs {
    /// Print extra information, if there is any
    #[arg(short, long, default_value_t)]
    pub verbose: bool,
}

/// Arguments for program execution
#[derive(Debug, Parser)]
pub struct Args {
    /// Input file path; defaults to `input/d<DAY>.txt`
    #[arg(short, long, default_value_t)]
    input_file_path: String,

    /// The day to run
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=25))]
    pub day: u8,

    /// The question to run, both if omitted
    #[arg(short, long, default_value_t, value_parser = clap::value_parser!(u8).range(0..=2))]
    pub question: u8,

    #[command(flatten)]
    pub question_args: QuestionArgs,
}

impl Args {
    fn try_to_intermediate<I>(&self) -> Result<I, RunError>
    where
        I: for<'a> TryFrom<&'a str>,
        for<'a> <I as TryFrom<&'a str>>::Error: Debug,
    {
        let default_file_path: String;
        let file_path: &str = if self.input_file_path.is_empty() {
            default_file_path = format!("input/d{}.txt", self.day);

            &default_file_path
        } else {
            &self.input_file_path
        };

        // SAFETY: This isn't truly safe, we're just hoping nobody touches our file before we're
        // done parsing it
        unsafe {
            open_utf8_file(file_path, |input| {
                input
                    .try_into()
                    .map_err(|error| RunError::Parse(format!("{file_path}: {error:?}")))
            })
        }?
    }
}

/// A day's solution: an intermediate state parsed from the input file, plus one printing method
/// per solved question.
pub trait RunQuestions
where
    Self: Sized + for<'a> TryFrom<&'a str>,
    for<'a> <Self as TryFrom<&'a str>>::Error: Debug,
{
    /// `false` for days whose second question hasn't been solved yet.
    const HAS_SECOND_QUESTION: bool = true;

    fn q1_internal(&mut self, args: &QuestionArgs);

    fn q2_internal(&mut self, _args: &QuestionArgs) {
        unreachable!("q2_internal invoked on a day without a second question");
    }

    fn q1(args: &Args) -> RunResult {
        args.try_to_intermediate::<Self>()?
            .q1_internal(&args.question_args);

        Ok(())
    }

    fn q2(args: &Args) -> RunResult {
        if Self::HAS_SECOND_QUESTION {
            args.try_to_intermediate::<Self>()?
                .q2_internal(&args.question_args);

            Ok(())
        } else {
            Err(RunError::NoQuestion {
                day: args.day,
                question: 2_u8,
            })
        }
    }

    fn both(args: &Args) -> RunResult {
        let mut intermediate: Self = args.try_to_intermediate()?;

        intermediate.q1_internal(&args.question_args);

        if Self::HAS_SECOND_QUESTION {
            intermediate.q2_internal(&args.question_args);
        }

        Ok(())
    }
}

#[derive(Clone)]
pub struct Day {
    pub q1: fn(&Args) -> RunResult,
    pub q2: fn(&Args) -> RunResult,
    pub both: fn(&Args) -> RunResult,
}

impl Day {
    fn run(&self, args: &Args) -> RunResult {
        match args.question {
            0_u8 => (self.both)(args),
            1_u8 => (self.q1)(args),
            2_u8 => (self.q2)(args),
            question => unreachable!(
                "A valid Args will have a question value in the range 0..=2, but {question} was \
                encountered"
            ),
        }
    }
}

pub struct DayParams<'a> {
    pub string: &'a str,
    pub option: Option<u8>,
    pub day: Day,
}

fn parse_tagged_int<'i, I: FromStr>(t: &str, input: &'i str) -> IResult<&'i str, I> {
    map(tuple((tag(t), map_res(rest, I::from_str))), |(_, i)| i)(input)
}

/// Registry of all solved days, sparse over the range of registered day numbers.
#[derive(Default)]
pub struct Solutions {
    days: Vec<Option<Day>>,
    min: u8,
}

impl Solutions {
    pub fn run(&self, args: &Args) -> RunResult {
        match args
            .day
            .checked_sub(self.min)
            .and_then(|day| self.days.get(day as usize))
        {
            Some(Some(day)) => day.run(args),
            _ => Err(RunError::UnknownDay(args.day)),
        }
    }

    fn try_from_day_params(mut day_params: Vec<DayParams>) -> Option<Self> {
        let (min, max): (u8, u8) = day_params
            .iter_mut()
            .filter_map(|DayParams { string, option, .. }| {
                parse_tagged_int("d", string).map_or_else(
                    |error| {
                        eprintln!(
                            "Invalid day string \"{}\"\n\
                            Error:\n\
                            {error}",
                            string
                        );

                        None
                    },
                    |(_, day)| {
                        *option = Some(day);

                        Some(day)
                    },
                )
            })
            .fold((u8::MAX, u8::MIN), |(min, max), day| {
                (min.min(day), max.max(day))
            });

        if min == u8::MAX {
            None
        } else {
            let size: usize = (max + 1_u8 - min) as usize;
            let mut days: Vec<Option<Day>> = Vec::with_capacity(size);

            days.resize_with(size, || None);

            for DayParams { option, day, .. } in day_params.into_iter() {
                days[(option.unwrap() - min) as usize] = Some(day);
            }

            Some(Solutions { days, min })
        }
    }
}

macro_rules! solutions {
    [ $( $day:ident ),* $(,)? ] => {
        $(
            pub mod $day;
        )*

        pub fn solutions() -> &'static Solutions {
            static ONCE_LOCK: OnceLock<Solutions> = OnceLock::new();

            ONCE_LOCK.get_or_init(|| Solutions::try_from_day_params(vec![ $(
                DayParams {
                    string: stringify!($day),
                    option: None,
                    day: Day {
                        q1: $day::Solution::q1,
                        q2: $day::Solution::q2,
                        both: $day::Solution::both,
                    }
                },
            )* ]).unwrap_or_else(Solutions::default))
        }
    };
}

solutions![
    d1, d2, d3, d4, d5, d6, d7, d8, d9, d10, d11, d12, d13, d14, d15, d16, d17, d18, d22, d25,
];

/// Opens a memory-mapped UTF-8 file at a specified path, and passes in a `&str` over the file to a
/// provided callback function
///
/// # Arguments
///
/// * `file_path` - A string slice file path to open as a read-only file
/// * `f` - A callback function to invoke on the contents of the file as a string slice
///
/// # Errors
///
/// This function returns a `Result::Err`-wrapped `std::io::Error` if an error has occurred.
/// Possible causes are:
///
/// * `std::fs::File::open` was unable to open a read-only file at `file_path`
/// * `memmap::Mmap::map` fails to create an `Mmap` instance for the opened file
/// * `std::str::from_utf8` determines the file is not in valid UTF-8 format
///
/// `f` is only executed *iff* an error is not encountered.
///
/// # Safety
///
/// This function uses `Mmap::map`, which is an unsafe function. There is no guarantee that an
/// external process won't modify the file after it is opened as read-only.
pub unsafe fn open_utf8_file<T, F: FnOnce(&str) -> T>(file_path: &str, f: F) -> IoResult<T> {
    let file: File = File::open(file_path)?;

    // SAFETY: This operation is unsafe
    let mmap: Mmap = Mmap::map(&file)?;
    let bytes: &[u8] = &mmap;
    let utf8_str: &str = from_utf8(bytes).map_err(|utf8_error: Utf8Error| -> IoError {
        IoError::new(ErrorKind::InvalidData, utf8_error)
    })?;

    Ok(f(utf8_str))
}

pub fn parse_integer<'i, I: FromStr + Integer>(input: &'i str) -> IResult<&'i str, I> {
    map(
        tuple((
            map(opt(tag("-")), |minus| {
                if minus.is_some() {
                    I::zero() - I::one()
                } else {
                    I::one()
                }
            }),
            map_res(digit1, I::from_str),
        )),
        |(sign, bound)| sign * bound,
    )(input)
}

pub trait Parse: Sized {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self>;
}
