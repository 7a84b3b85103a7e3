use {
    crate::*,
    nom::{character::complete::space1, combinator::all_consuming, multi::separated_list1},
};

/// Day 2: Red-Nosed Reports
///
/// A report is safe when its levels are strictly monotonic with steps of at most 3.
#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution(Vec<Vec<i32>>);

impl Solution {
    fn is_report_safe(report: &[i32]) -> bool {
        report
            .windows(2_usize)
            .all(|levels| (1_i32..=3_i32).contains(&(levels[1_usize] - levels[0_usize])))
            || report
                .windows(2_usize)
                .all(|levels| (1_i32..=3_i32).contains(&(levels[0_usize] - levels[1_usize])))
    }

    fn safe_report_count(&self) -> usize {
        self.0
            .iter()
            .filter(|report| Self::is_report_safe(report))
            .count()
    }
}

impl RunQuestions for Solution {
    const HAS_SECOND_QUESTION: bool = false;

    fn q1_internal(&mut self, _args: &QuestionArgs) {
        println!(
            "Part 1: Number of safe reports = {}",
            self.safe_report_count()
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

        let mut reports: Vec<Vec<i32>> = Vec::with_capacity(line_store.len());

        while let Some((line, line_number)) = line_store.next_line() {
            let (_, report): (&str, Vec<i32>) =
                all_consuming(separated_list1(space1, parse_integer))(line)
                    .map_err(|error| format!("line {line_number}: {error}"))?;

            reports.push(report);
        }

        Ok(Self(reports))
    }
}

#[cfg(test)]
mod tests {
    use {super::*, std::sync::OnceLock};

    const SOLUTION_STRS: &'static [&'static str] = &["\
        7 6 4 2 1\n\
        1 2 7 8 9\n\
        9 7 6 2 1\n\
        1 3 2 4 5\n\
        8 6 4 4 1\n\
        1 3 6 7 9\n"];

    fn solution(index: usize) -> &'static Solution {
        static ONCE_LOCK: OnceLock<Vec<Solution>> = OnceLock::new();

        &ONCE_LOCK.get_or_init(|| {
            vec![Solution(vec![
                vec![7_i32, 6_i32, 4_i32, 2_i32, 1_i32],
                vec![1_i32, 2_i32, 7_i32, 8_i32, 9_i32],
                vec![9_i32, 7_i32, 6_i32, 2_i32, 1_i32],
                vec![1_i32, 3_i32, 2_i32, 4_i32, 5_i32],
                vec![8_i32, 6_i32, 4_i32, 4_i32, 1_i32],
                vec![1_i32, 3_i32, 6_i32, 7_i32, 9_i32],
            ])]
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
    fn test_is_report_safe() {
        for (report, is_safe) in solution(0_usize)
            .0
            .iter()
            .zip([true, false, false, false, false, true])
        {
            assert_eq!(Solution::is_report_safe(report), is_safe);
        }
    }

    #[test]
    fn test_safe_report_count() {
        for (index, safe_report_count) in [2_usize].into_iter().enumerate() {
            assert_eq!(solution(index).safe_report_count(), safe_report_count);
        }
    }
}
