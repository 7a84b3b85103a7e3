use {
    crate::*,
    nom::{character::complete::space1, combinator::all_consuming, sequence::separated_pair},
};

/// Day 1: Historian Hysteria
///
/// Two side-by-side lists of location IDs, one pair per line.
#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution {
    left: Vec<i32>,
    right: Vec<i32>,
}

impl Solution {
    fn sorted_lists(&self) -> (Vec<i32>, Vec<i32>) {
        let mut left: Vec<i32> = self.left.clone();
        let mut right: Vec<i32> = self.right.clone();

        left.sort();
        right.sort();

        (left, right)
    }

    fn total_distance(&self) -> i32 {
        let (left, right): (Vec<i32>, Vec<i32>) = self.sorted_lists();

        left.into_iter()
            .zip(right)
            .map(|(left, right)| (left - right).abs())
            .sum()
    }

    fn count_occurrences_in_sorted_list(sorted_list: &[i32], target: i32) -> i32 {
        let index_ge_target: usize =
            sorted_list.partition_point(|&sorted_element| sorted_element < target);

        sorted_list[index_ge_target..].partition_point(|&sorted_element| sorted_element == target)
            as i32
    }

    fn similarity_score(&self) -> i32 {
        let mut right: Vec<i32> = self.right.clone();

        right.sort();

        self.left
            .iter()
            .map(|&left| left * Self::count_occurrences_in_sorted_list(&right, left))
            .sum()
    }
}

impl RunQuestions for Solution {
    fn q1_internal(&mut self, _args: &QuestionArgs) {
        println!("Part 1: Total distance = {}", self.total_distance());
    }

    fn q2_internal(&mut self, _args: &QuestionArgs) {
        println!("Part 2: Similarity score = {}", self.similarity_score());
    }
}

impl TryFrom<&str> for Solution {
    type Error = String;

    fn try_from(input: &str) -> Result<Self, Self::Error> {
        let mut line_store: LineStore = LineStore::new(input);

        if line_store.is_empty() {
            return Err("empty input".into());
        }

        let mut left: Vec<i32> = Vec::with_capacity(line_store.len());
        let mut right: Vec<i32> = Vec::with_capacity(line_store.len());

        while let Some((line, line_number)) = line_store.next_line() {
            let (_, (left_id, right_id)): (&str, (i32, i32)) =
                all_consuming(separated_pair(parse_integer, space1, parse_integer))(line)
                    .map_err(|error| format!("line {line_number}: {error}"))?;

            left.push(left_id);
            right.push(right_id);
        }

        Ok(Self { left, right })
    }
}
