use crate::*;

/// Day 9: Disk Fragmenter
///
/// The disk map alternates file and free-space lengths. Blocks are compacted one at a time from
/// the back of the disk into the first free block, then checksummed.
#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution(Vec<u8>);

impl Solution {
    fn build_disk(&self) -> Vec<Option<u32>> {
        let disk_size: usize = self.0.iter().map(|&len| len as usize).sum();
        let mut disk: Vec<Option<u32>> = Vec::with_capacity(disk_size);

        for (index, &len) in self.0.iter().enumerate() {
            let block: Option<u32> = (index % 2_usize == 0_usize).then(|| (index / 2_usize) as u32);

            for _ in 0_u8..len {
                disk.push(block);
            }
        }

        disk
    }

    fn compacted_checksum(&self) -> u64 {
        let mut disk: Vec<Option<u32>> = self.build_disk();
        let mut head: usize = 0_usize;

        for i in (0_usize..disk.len()).rev() {
            if disk[i].is_some() {
                while head < i && disk[head].is_some() {
                    head += 1_usize;
                }

                if head < i {
                    disk[head] = disk[i].take();
                }
            }
        }

        disk.into_iter()
            .enumerate()
            .filter_map(|(index, block)| block.map(|id| index as u64 * id as u64))
            .sum()
    }
}

impl RunQuestions for Solution {
    const HAS_SECOND_QUESTION: bool = false;

    fn q1_internal(&mut self, _args: &QuestionArgs) {
        println!("Part 1: checksum = {}", self.compacted_checksum());
    }
}

impl TryFrom<&str> for Solution {
    type Error = String;

    fn try_from(input: &str) -> Result<Self, Self::Error> {
        let input: &str = input.trim_end();

        if input.is_empty() {
            return Err("empty input".into());
        }

        let mut lengths: Vec<u8> = input
            .bytes()
            .map(|byte| {
                byte.is_ascii_digit()
                    .then_some(byte - b'0')
                    .ok_or_else(|| format!("invalid digit {:?}", byte as char))
            })
            .collect::<Result<_, _>>()?;

        // An implicit zero-length free span follows a trailing file length.
        if lengths.len() % 2_usize != 0_usize {
            lengths.push(0_u8);
        }

        Ok(Self(lengths))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOLUTION_STRS: &'static [&'static str] = &["2333133121414131402\n"];

    #[test]
    fn test_try_from_str() {
        assert_eq!(
            Solution::try_from("123\n"),
            Ok(Solution(vec![1_u8, 2_u8, 3_u8, 0_u8]))
        );
        assert!(Solution::try_from("12a\n").is_err());
        assert!(Solution::try_from("").is_err());
    }

    #[test]
    fn test_build_disk() {
        let disk: Vec<Option<u32>> = Solution::try_from("12345\n").unwrap().build_disk();

        assert_eq!(
            disk,
            vec![
                Some(0_u32),
                None,
                None,
                Some(1_u32),
                Some(1_u32),
                Some(1_u32),
                None,
                None,
                None,
                None,
                Some(2_u32),
                Some(2_u32),
                Some(2_u32),
                Some(2_u32),
                Some(2_u32),
            ]
        );
    }

    #[test]
    fn test_compacted_checksum() {
        for (solution_str, checksum) in SOLUTION_STRS.iter().copied().zip([1928_u64]) {
            assert_eq!(
                Solution::try_from(solution_str).unwrap().compacted_checksum(),
                checksum
            );
        }
    }
}
