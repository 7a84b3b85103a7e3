use {
    crate::*,
    nom::{
        bytes::complete::tag, combinator::all_consuming, multi::separated_list1,
        sequence::separated_pair,
    },
    std::collections::HashSet,
};

/// Day 5: Print Queue
///
/// Page ordering rules `a|b` followed by a blank line and one comma-separated update per line.
/// An update is correctly ordered when no rule demands a later page before an earlier one.
#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution {
    rules: HashSet<(u32, u32)>,
    updates: Vec<Vec<u32>>,
}

impl Solution {
    fn is_update_correct(&self, update: &[u32]) -> bool {
        update.iter().enumerate().all(|(earlier_index, &earlier)| {
            update[earlier_index + 1_usize..]
                .iter()
                .all(|&later| !self.rules.contains(&(later, earlier)))
        })
    }

    fn correct_update_middle_page_sum(&self) -> u32 {
        self.updates
            .iter()
            .filter(|update| self.is_update_correct(update))
            .map(|update| update[update.len() / 2_usize])
            .sum()
    }
}

impl RunQuestions for Solution {
    const HAS_SECOND_QUESTION: bool = false;

    fn q1_internal(&mut self, _args: &QuestionArgs) {
        println!("Part 1: {}", self.correct_update_middle_page_sum());
    }
}

impl TryFrom<&str> for Solution {
    type Error = String;

    fn try_from(input: &str) -> Result<Self, Self::Error> {
        let mut line_store: LineStore = LineStore::new(input);

        if line_store.is_empty() {
            return Err("empty input".into());
        }

        let mut rules: HashSet<(u32, u32)> = HashSet::new();
        let mut updates: Vec<Vec<u32>> = Vec::new();

        while let Some((line, line_number)) = line_store.next_line() {
            if line.is_empty() {
                break;
            }

            let (_, rule): (&str, (u32, u32)) =
                all_consuming(separated_pair(parse_integer, tag("|"), parse_integer))(line)
                    .map_err(|error| format!("line {line_number}: {error}"))?;

            rules.insert(rule);
        }

        while let Some((line, line_number)) = line_store.next_line() {
            let (_, update): (&str, Vec<u32>) =
                all_consuming(separated_list1(tag(","), parse_integer))(line)
                    .map_err(|error| format!("line {line_number}: {error}"))?;

            updates.push(update);
        }

        Ok(Self { rules, updates })
    }
}

#[cfg(test)]
mod tests {
    use {super::*, std::sync::OnceLock};

    const SOLUTION_STRS: &'static [&'static str] = &["\
        47|53\n\
        97|13\n\
        97|61\n\
        97|47\n\
        75|29\n\
        61|13\n\
        75|53\n\
        29|13\n\
        97|29\n\
        53|29\n\
        61|53\n\
        97|53\n\
        61|29\n\
        47|13\n\
        75|47\n\
        97|75\n\
        47|61\n\
        75|61\n\
        47|29\n\
        75|13\n\
        53|13\n\
        \n\
        75,47,61,53,29\n\
        97,61,53,29,13\n\
        75,29,13\n\
        75,97,47,61,53\n\
        61,13,29\n\
        97,13,75,29,47\n"];

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
    fn test_try_from_str() {
        let solution: &Solution = solution(0_usize);

        assert_eq!(solution.rules.len(), 21_usize);
        assert_eq!(solution.updates.len(), 6_usize);
    }

    #[test]
    fn test_is_update_correct() {
        let solution: &Solution = solution(0_usize);

        for (update, is_correct) in solution
            .updates
            .iter()
            .zip([true, true, true, false, false, false])
        {
            assert_eq!(solution.is_update_correct(update), is_correct);
        }
    }

    #[test]
    fn test_correct_update_middle_page_sum() {
        for (index, middle_page_sum) in [143_u32].into_iter().enumerate() {
            assert_eq!(
                solution(index).correct_update_middle_page_sum(),
                middle_page_sum
            );
        }
    }
}
