use {crate::*, glam::IVec2, strum::IntoEnumIterator};

/// Day 12: Garden Groups
///
/// Flood fill each region of equal plants, accumulating its area and perimeter. A region's fence
/// price is area times perimeter.
#[derive(Clone, Copy, Eq, PartialEq)]
#[cfg_attr(test, derive(Debug))]
struct Plot(u8);

impl TryFrom<char> for Plot {
    type Error = ();

    fn try_from(value: char) -> Result<Self, Self::Error> {
        value
            .is_ascii_uppercase()
            .then_some(Self(value as u8))
            .ok_or(())
    }
}

pub struct Solution(FlaggedGrid<Plot>);

impl Solution {
    /// Area and perimeter of the unvisited region containing `pos`.
    fn walk_region(cells: &Grid2D<Plot>, flags: &mut Grid2D<u32>, pos: IVec2) -> (u32, u32) {
        if *flags.get(pos).unwrap() != 0_u32 {
            return (0_u32, 0_u32);
        }

        *flags.get_mut(pos).unwrap() = 1_u32;

        let plant: Plot = *cells.get(pos).unwrap();
        let mut area: u32 = 1_u32;
        let mut perimeter: u32 = 0_u32;

        for dir in Direction::iter() {
            let next_pos: IVec2 = pos + dir.vec();

            if cells.get(next_pos) == Some(&plant) {
                let (next_area, next_perimeter): (u32, u32) =
                    Self::walk_region(cells, flags, next_pos);

                area += next_area;
                perimeter += next_perimeter;
            } else {
                perimeter += 1_u32;
            }
        }

        (area, perimeter)
    }

    fn total_fence_price(&mut self) -> u32 {
        let (cells, flags) = self.0.split_mut();
        let mut total_price: u32 = 0_u32;

        for index in 0_usize..cells.area() {
            if flags.cells()[index] == 0_u32 {
                let (area, perimeter): (u32, u32) =
                    Self::walk_region(cells, flags, cells.pos_from_index(index));

                total_price += area * perimeter;
            }
        }

        total_price
    }
}

impl RunQuestions for Solution {
    const HAS_SECOND_QUESTION: bool = false;

    fn q1_internal(&mut self, _args: &QuestionArgs) {
        println!("Part 1: total price = {}", self.total_fence_price());
    }
}

impl<'i> TryFrom<&'i str> for Solution {
    type Error = String;

    fn try_from(input: &'i str) -> Result<Self, Self::Error> {
        FlaggedGrid::try_from(input)
            .map(Self)
            .map_err(|error| format!("{error:?}"))
    }
}
