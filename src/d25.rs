use crate::*;

/// Day 25: Code Chronicle
///
/// Lock and key schematics share a 7 by 5 grid. Locks have their top row filled, keys their bottom
/// row. A key fits a lock when no column's combined pin heights exceed the available space.
#[cfg_attr(test, derive(Debug, PartialEq))]
struct Schematic {
    heights: [u8; Solution::COLUMNS],
    is_lock: bool,
}

impl Schematic {
    fn try_from_rows(rows: &[[bool; Solution::COLUMNS]]) -> Result<Self, String> {
        if rows.len() != Solution::ROWS {
            return Err(format!(
                "schematic has {} rows, expected {}",
                rows.len(),
                Solution::ROWS
            ));
        }

        let is_lock: bool = rows[0_usize].iter().all(|&filled| filled);

        if !is_lock && !rows[Solution::ROWS - 1_usize].iter().all(|&filled| filled) {
            return Err("schematic has neither a filled top row nor a filled bottom row".into());
        }

        let mut heights: [u8; Solution::COLUMNS] = [0_u8; Solution::COLUMNS];

        for row in &rows[1_usize..Solution::ROWS - 1_usize] {
            for (height, &filled) in heights.iter_mut().zip(row) {
                *height += filled as u8;
            }
        }

        Ok(Self { heights, is_lock })
    }

    fn fits(&self, key: &Self) -> bool {
        self.heights
            .iter()
            .zip(&key.heights)
            .all(|(&lock_height, &key_height)| lock_height + key_height <= Solution::MAX_HEIGHT)
    }
}

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution(Vec<Schematic>);

impl Solution {
    const ROWS: usize = 7_usize;
    const COLUMNS: usize = 5_usize;
    const MAX_HEIGHT: u8 = (Self::ROWS - 2_usize) as u8;

    fn fitting_pair_count(&self) -> usize {
        self.0
            .iter()
            .filter(|schematic| schematic.is_lock)
            .map(|lock| {
                self.0
                    .iter()
                    .filter(|key| !key.is_lock && lock.fits(key))
                    .count()
            })
            .sum()
    }
}

impl RunQuestions for Solution {
    const HAS_SECOND_QUESTION: bool = false;

    fn q1_internal(&mut self, _args: &QuestionArgs) {
        println!("Part 1: {}", self.fitting_pair_count());
    }
}

impl TryFrom<&str> for Solution {
    type Error = String;

    fn try_from(input: &str) -> Result<Self, Self::Error> {
        let mut line_store: LineStore = LineStore::new(input);
        let mut schematics: Vec<Schematic> = Vec::new();
        let mut rows: Vec<[bool; Self::COLUMNS]> = Vec::with_capacity(Self::ROWS);

        while let Some((line, line_number)) = line_store.next_line() {
            if line.is_empty() {
                if !rows.is_empty() {
                    schematics.push(
                        Schematic::try_from_rows(&rows)
                            .map_err(|error| format!("line {line_number}: {error}"))?,
                    );
                    rows.clear();
                }

                continue;
            }

            if line.len() != Self::COLUMNS
                || !line.bytes().all(|byte| byte == b'#' || byte == b'.')
            {
                return Err(format!("line {line_number}: invalid schematic row {line:?}"));
            }

            if rows.len() == Self::ROWS {
                return Err(format!(
                    "line {line_number}: schematic has more than {} rows",
                    Self::ROWS
                ));
            }

            let mut filled: [bool; Self::COLUMNS] = [false; Self::COLUMNS];

            for (filled, byte) in filled.iter_mut().zip(line.bytes()) {
                *filled = byte == b'#';
            }

            rows.push(filled);
        }

        if !rows.is_empty() {
            schematics.push(Schematic::try_from_rows(&rows)?);
        }

        if schematics.is_empty() {
            return Err("empty input".into());
        }

        Ok(Self(schematics))
    }
}
