pub use direction::*;

use {
    crate::Parse,
    glam::{BVec2, IVec2},
    nom::{
        character::complete::line_ending,
        combinator::{map, map_res, opt},
        error::{Error as NomError, ErrorKind as NomErrorKind},
        multi::many1_count,
        sequence::tuple,
        Err, IResult,
    },
    std::{
        fmt::{Debug, DebugList, Formatter, Result as FmtResult, Write},
        iter::Peekable,
        mem::transmute,
        str::{from_utf8, Lines},
    },
};

macro_rules! define_direction {
    {
        $( #[$meta:meta] )*
        $vis:vis enum $direction:ident {
            $(
                $( #[$variant_meta:meta] )?
                $variant:ident,
            )*
        }
    } => {
        $(#[$meta])*
        $vis enum $direction {
            $(
                $( #[$variant_meta] )?
                $variant,
            )*
        }

        const VECS: [IVec2; $direction::COUNT] = [
            $( $direction::$variant.vec_internal(), )*
        ];
    };
}

mod direction {
    use {
        super::*,
        static_assertions::const_assert,
        std::mem::transmute,
        strum::{EnumCount, EnumIter},
    };

    define_direction! {
        #[derive(Copy, Clone, Debug, Default, EnumCount, EnumIter, Eq, Hash, PartialEq)]
        #[repr(u8)]
        pub enum Direction {
            #[default]
            North,
            East,
            South,
            West,
        }
    }

    // This guarantees we can safely convert from `u8` to `Direction` by masking the smallest 2
    // bits, which is the same as masking by `MASK`
    const_assert!(Direction::COUNT == 4_usize);

    impl Direction {
        pub const COUNT_U8: u8 = Self::COUNT as u8;
        pub const MASK: u8 = Self::COUNT_U8 - 1_u8;
        pub const HALF_COUNT: u8 = Self::COUNT_U8 / 2_u8;
        pub const PREV_DELTA: u8 = Self::COUNT_U8 - 1_u8;

        #[inline]
        pub const fn vec(self) -> IVec2 {
            VECS[self as usize]
        }

        #[inline]
        pub const fn from_u8(value: u8) -> Self {
            // SAFETY: See `const_assert` above
            unsafe { transmute(value & Self::MASK) }
        }

        /// The next direction clockwise.
        #[inline]
        pub const fn next(self) -> Self {
            Self::from_u8(self as u8 + 1_u8)
        }

        #[inline]
        pub const fn rev(self) -> Self {
            Self::from_u8(self as u8 + Self::HALF_COUNT)
        }

        #[inline]
        pub const fn prev(self) -> Self {
            Self::from_u8(self as u8 + Self::PREV_DELTA)
        }

        const fn vec_internal(self) -> IVec2 {
            match self {
                Self::North => IVec2::NEG_Y,
                Self::East => IVec2::X,
                Self::South => IVec2::Y,
                Self::West => IVec2::NEG_X,
            }
        }
    }

    impl From<Direction> for IVec2 {
        fn from(value: Direction) -> Self {
            value.vec()
        }
    }

    impl From<u8> for Direction {
        fn from(value: u8) -> Self {
            Self::from_u8(value)
        }
    }
}

pub struct SideLen(pub usize);

impl From<SideLen> for IVec2 {
    fn from(side_len: SideLen) -> Self {
        IVec2::new(side_len.0 as i32, side_len.0 as i32)
    }
}

pub fn grid_2d_contains(pos: IVec2, dimensions: IVec2) -> bool {
    (pos.cmpge(IVec2::ZERO) & pos.cmplt(dimensions)).all()
}

pub fn grid_2d_pos_from_index_and_dimensions(index: usize, dimensions: IVec2) -> IVec2 {
    let x: usize = dimensions.x as usize;

    IVec2::new((index % x) as i32, (index / x) as i32)
}

pub fn grid_2d_try_index_from_pos_and_dimensions(pos: IVec2, dimensions: IVec2) -> Option<usize> {
    grid_2d_contains(pos, dimensions)
        .then(|| pos.y as usize * dimensions.x as usize + pos.x as usize)
}

pub struct Grid2D<T> {
    cells: Vec<T>,

    /// Should only contain unsigned values, but is signed for ease of use for iterating
    dimensions: IVec2,
}

impl<T> Grid2D<T> {
    pub fn try_from_cells_and_dimensions(cells: Vec<T>, dimensions: IVec2) -> Option<Self> {
        if dimensions.cmpge(IVec2::ZERO) == BVec2::TRUE
            && cells.len() == dimensions.x as usize * dimensions.y as usize
        {
            Some(Self { cells, dimensions })
        } else {
            None
        }
    }

    pub fn try_from_cells_and_width(cells: Vec<T>, width: usize) -> Option<Self> {
        let cells_len: usize = cells.len();

        if cells_len % width != 0_usize {
            None
        } else {
            Some(Self {
                cells,
                dimensions: IVec2::new(width as i32, (cells_len / width) as i32),
            })
        }
    }

    pub fn allocate(dimensions: IVec2) -> Self {
        Self {
            cells: Vec::with_capacity((dimensions.x * dimensions.y) as usize),
            dimensions,
        }
    }

    #[inline]
    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    #[inline]
    pub fn cells_mut(&mut self) -> &mut [T] {
        &mut self.cells
    }

    #[inline]
    pub fn dimensions(&self) -> IVec2 {
        self.dimensions
    }

    #[inline]
    pub fn area(&self) -> usize {
        (self.dimensions.x * self.dimensions.y) as usize
    }

    #[inline]
    pub fn contains(&self, pos: IVec2) -> bool {
        grid_2d_contains(pos, self.dimensions)
    }

    #[inline]
    pub fn index_from_pos(&self, pos: IVec2) -> usize {
        pos.y as usize * self.dimensions.x as usize + pos.x as usize
    }

    pub fn try_index_from_pos(&self, pos: IVec2) -> Option<usize> {
        grid_2d_try_index_from_pos_and_dimensions(pos, self.dimensions)
    }

    pub fn pos_from_index(&self, index: usize) -> IVec2 {
        grid_2d_pos_from_index_and_dimensions(index, self.dimensions)
    }

    pub fn get(&self, pos: IVec2) -> Option<&T> {
        self.try_index_from_pos(pos)
            .map(|index: usize| &self.cells[index])
    }

    pub fn get_mut(&mut self, pos: IVec2) -> Option<&mut T> {
        self.try_index_from_pos(pos)
            .map(|index: usize| &mut self.cells[index])
    }

    pub fn iter_positions(&self) -> impl Iterator<Item = IVec2> {
        let dimensions: IVec2 = self.dimensions;

        (0_usize..self.area())
            .map(move |index| grid_2d_pos_from_index_and_dimensions(index, dimensions))
    }

    pub fn iter_filtered_positions<'a, P: Fn(&T) -> bool + 'a>(
        &'a self,
        predicate: P,
    ) -> impl Iterator<Item = IVec2> + 'a {
        self.cells
            .iter()
            .enumerate()
            .filter_map(move |(index, cell)| predicate(cell).then(|| self.pos_from_index(index)))
    }

    pub fn iter_positions_with_cell<'a>(&'a self, target: &'a T) -> impl Iterator<Item = IVec2> + 'a
    where
        T: PartialEq,
    {
        self.iter_filtered_positions(|cell| *cell == *target)
    }

    pub fn try_find_single_position_with_cell(&self, target: &T) -> Option<IVec2>
    where
        T: PartialEq,
    {
        self.iter_positions_with_cell(target)
            .try_fold(None, |prev_pos, curr_pos| {
                prev_pos.is_none().then_some(Some(curr_pos))
            })
            .flatten()
    }
}

impl<T: Clone> Clone for Grid2D<T> {
    fn clone(&self) -> Self {
        Self {
            cells: self.cells.clone(),
            dimensions: self.dimensions,
        }
    }
}

impl<T: Debug> Debug for Grid2D<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str("Grid2D")?;
        let mut y_list: DebugList = f.debug_list();

        for y in 0_i32..self.dimensions.y {
            let start: usize = (y * self.dimensions.x) as usize;

            y_list.entry(&&self.cells[start..(start + self.dimensions.x as usize)]);
        }

        y_list.finish()
    }
}

impl<T: Default> Grid2D<T> {
    pub fn default(dimensions: IVec2) -> Self {
        let capacity: usize = (dimensions.x * dimensions.y) as usize;
        let mut cells: Vec<T> = Vec::with_capacity(capacity);

        cells.resize_with(capacity, T::default);

        Self { cells, dimensions }
    }
}

impl<T: Parse> Parse for Grid2D<T> {
    fn parse(input: &str) -> IResult<&str, Self> {
        let mut width: Option<usize> = None;
        let mut rows: usize = 0_usize;
        let mut cells: Vec<T> = Vec::new();
        let (input, _) = many1_count(map_res(
            tuple((T::parse, opt(line_ending))),
            |(cell, opt_line_ending)| -> Result<(), ()> {
                cells.push(cell);

                if opt_line_ending.is_some() {
                    rows += 1_usize;

                    match width {
                        Some(width) => {
                            if cells.len() != rows * width {
                                Err(())?;
                            }
                        }
                        None => {
                            width = Some(cells.len());
                        }
                    }
                }

                Ok(())
            },
        ))(input)?;

        let width: usize = width.unwrap_or(cells.len());

        // Either the final row was terminated, or an unterminated tail row of the same width
        // remains.
        if cells.len() == rows * width || cells.len() == (rows + 1_usize) * width {
            Ok((
                input,
                Grid2D::try_from_cells_and_width(cells, width).unwrap(),
            ))
        } else {
            Err(Err::Failure(NomError::new(input, NomErrorKind::ManyMN)))
        }
    }
}

impl<T: PartialEq> PartialEq for Grid2D<T> {
    fn eq(&self, other: &Self) -> bool {
        self.dimensions == other.dimensions && self.cells == other.cells
    }
}

#[derive(Debug, PartialEq)]
pub enum GridParseError<'s, E> {
    NoInitialToken,
    IsNotAscii(&'s str),
    InvalidLength { line: &'s str, expected_len: usize },
    CellParseError(E),
}

impl<'s, E, T: TryFrom<char, Error = E>> TryFrom<&'s str> for Grid2D<T> {
    type Error = GridParseError<'s, E>;

    fn try_from(grid_str: &'s str) -> Result<Self, Self::Error> {
        use GridParseError as Error;

        let mut grid_line_iter: Peekable<Lines> = grid_str.lines().peekable();

        let side_len: usize = grid_line_iter.peek().ok_or(Error::NoInitialToken)?.len();

        let mut grid: Grid2D<T> = Grid2D::allocate(SideLen(side_len).into());
        let mut lines: usize = 0_usize;

        for grid_line_str in grid_line_iter {
            if !grid_line_str.is_ascii() {
                return Err(Error::IsNotAscii(grid_line_str));
            }

            if grid_line_str.len() != side_len {
                return Err(Error::InvalidLength {
                    line: grid_line_str,
                    expected_len: side_len,
                });
            }

            for cell_char in grid_line_str.chars() {
                grid.cells
                    .push(cell_char.try_into().map_err(Error::CellParseError)?);
            }

            lines += 1_usize;
        }

        if lines != side_len {
            grid.dimensions.y = lines as i32;
        }

        Ok(grid)
    }
}

/// A marker trait to indicate that a type is a single byte, and any possible value is a valid ASCII
/// byte.
///
/// # Safety
///
/// Only implement this on a trait that meets the following criteria:
///
/// * `std::mem::size_of::<Self>() == 1_usize`
/// * `std::str::from_utf8(std::mem::transmute::<[Self], [u8]>(value)).is_ok()` for any `value:
/// [Self]`.
pub unsafe trait IsValidAscii {}

impl<T: IsValidAscii> From<Grid2D<T>> for String {
    fn from(value: Grid2D<T>) -> Self {
        let dimensions: IVec2 = value.dimensions;
        let width: usize = dimensions.x as usize;
        let height: usize = dimensions.y as usize;

        // SAFETY: Guaranteed by `T` implementing `IsValidAscii`
        let bytes: &[u8] = unsafe { transmute(value.cells()) };

        let mut string: String = String::with_capacity((width + 1_usize) * height);

        for y in 0_usize..height {
            let start: usize = y * width;
            let end: usize = start + width;
            let row_str: &str = from_utf8(&bytes[start..end]).unwrap_or_else(|e| {
                panic!("A grid row contained an invalid UTF-8 slice: {e:?}");
            });

            writeln!(&mut string, "{row_str}").unwrap_or_else(|e| {
                panic!(
                    "`String::write_fmt` returned an `Err`, despite both its `write_str` and \
                    `write_char` definitions returning an `Ok`: {e:?}"
                );
            });
        }

        string
    }
}

/// A cell grid paired with a same-shaped `u32` flag grid, for traversals that need per-cell
/// scratch state. Flags start zeroed and are only ever reset by an explicit `clear_flags`.
pub struct FlaggedGrid<T> {
    cells: Grid2D<T>,
    flags: Grid2D<u32>,
}

impl<T> FlaggedGrid<T> {
    pub fn new(cells: Grid2D<T>) -> Self {
        let flags: Grid2D<u32> = Grid2D::default(cells.dimensions());

        Self { cells, flags }
    }

    #[inline]
    pub fn dimensions(&self) -> IVec2 {
        self.cells.dimensions()
    }

    #[inline]
    pub fn cells(&self) -> &Grid2D<T> {
        &self.cells
    }

    #[inline]
    pub fn flags(&self) -> &Grid2D<u32> {
        &self.flags
    }

    pub fn flag_mut(&mut self, pos: IVec2) -> Option<&mut u32> {
        self.flags.get_mut(pos)
    }

    pub fn clear_flags(&mut self) {
        self.flags.cells_mut().fill(0_u32);
    }

    /// Borrows the cells immutably alongside the flags mutably, for traversals that update flags
    /// while inspecting cells.
    pub fn split_mut(&mut self) -> (&Grid2D<T>, &mut Grid2D<u32>) {
        (&self.cells, &mut self.flags)
    }
}

impl<T: Clone> Clone for FlaggedGrid<T> {
    fn clone(&self) -> Self {
        Self {
            cells: self.cells.clone(),
            flags: self.flags.clone(),
        }
    }
}

impl<T: Debug> Debug for FlaggedGrid<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("FlaggedGrid")
            .field("cells", &self.cells)
            .field("flags", &self.flags)
            .finish()
    }
}

impl<T: PartialEq> PartialEq for FlaggedGrid<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cells == other.cells && self.flags == other.flags
    }
}

impl<T: Parse> Parse for FlaggedGrid<T> {
    fn parse(input: &str) -> IResult<&str, Self> {
        map(Grid2D::parse, Self::new)(input)
    }
}

impl<'s, E, T: TryFrom<char, Error = E>> TryFrom<&'s str> for FlaggedGrid<T> {
    type Error = GridParseError<'s, E>;

    fn try_from(grid_str: &'s str) -> Result<Self, Self::Error> {
        Grid2D::try_from(grid_str).map(Self::new)
    }
}

/// Defines a grid cell enum with a fixed ASCII alphabet, along with its `Parse` impl and
/// char/byte conversions.
#[macro_export]
macro_rules! define_cell {
    {
        #[repr(u8)]
        $(#[$attr:meta])*
        $pub:vis enum $cell:ident { $(
            $(#[$variant_attr:meta])*
            $variant:ident = $variant_const:ident = $variant_u8:expr
        ),* $(,)? }
    } => {
        #[repr(u8)]
        $(#[$attr])*
        $pub enum $cell { $(
            $(#[$variant_attr])*
            $variant = Self::$variant_const,
        )* }

        impl $cell {
            $(
                const $variant_const: u8 = $variant_u8;
            )*
            const STR: &'static str =
                // SAFETY: Trivial
                unsafe { ::std::str::from_utf8_unchecked(&[$(
                    $cell::$variant_const,
                )*]) };
        }

        unsafe impl IsValidAscii for $cell {}

        impl Parse for $cell {
            fn parse<'i>(input: &'i str) -> ::nom::IResult<&'i str, Self> {
                ::nom::combinator::map(
                    ::nom::character::complete::one_of($cell::STR),
                    |value: char| { $cell::try_from(value).unwrap() }
                )(input)
            }
        }

        impl TryFrom<u8> for $cell {
            type Error = ();

            fn try_from(value: u8) -> Result<Self, Self::Error> {
                match value {
                    $(
                        Self::$variant_const => Ok(Self::$variant),
                    )*
                    _ => Err(()),
                }
            }
        }

        impl TryFrom<char> for $cell {
            type Error = ();

            fn try_from(value: char) -> Result<Self, Self::Error> {
                (value as u8).try_into()
            }
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct SmallPos {
    pub x: u8,
    pub y: u8,
}

impl SmallPos {
    pub const MAX_POS: IVec2 = IVec2::new(u8::MAX as i32, u8::MAX as i32);
    pub const MAX_DIMENSIONS: IVec2 = IVec2::new(Self::MAX_POS.x + 1_i32, Self::MAX_POS.y + 1_i32);

    /// SAFETY: This will panic if either component can't be converted to a `u8`
    pub unsafe fn from_pos_unsafe(pos: IVec2) -> Self {
        Self {
            x: pos.x as u8,
            y: pos.y as u8,
        }
    }

    pub fn is_pos_valid(pos: IVec2) -> bool {
        grid_2d_contains(pos, Self::MAX_DIMENSIONS)
    }

    pub fn are_dimensions_valid(dimensions: IVec2) -> bool {
        dimensions.cmpge(IVec2::ZERO).all() && dimensions.cmple(Self::MAX_DIMENSIONS).all()
    }

    pub fn try_from_pos(pos: IVec2) -> Option<Self> {
        // SAFETY: `pos` has been verified.
        Self::is_pos_valid(pos).then(|| unsafe { Self::from_pos_unsafe(pos) })
    }

    pub fn get(self) -> IVec2 {
        IVec2::new(self.x as i32, self.y as i32)
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct SmallPosAndDir {
    pub pos: SmallPos,
    pub dir: Direction,
}

impl SmallPosAndDir {
    /// SAFETY: This will panic if either component can't be converted to a `u8`
    pub unsafe fn from_pos_and_dir_unsafe(pos: IVec2, dir: Direction) -> Self {
        Self {
            pos: SmallPos::from_pos_unsafe(pos),
            dir,
        }
    }

    pub fn try_from_pos_and_dir(pos: IVec2, dir: Direction) -> Option<Self> {
        // SAFETY: `pos` has been verified.
        SmallPos::is_pos_valid(pos).then(|| unsafe { Self::from_pos_and_dir_unsafe(pos, dir) })
    }
}

#[cfg(test)]
mod tests {
    use {super::*, strum::IntoEnumIterator};

    define_cell! {
        #[repr(u8)]
        #[derive(Clone, Copy, Debug, Default, PartialEq)]
        pub enum Pixel {
            #[default]
            Dark = DARK = b'.',
            Light = LIGHT = b'#',
        }
    }

    #[test]
    fn test_direction_vecs_are_unit_and_clockwise() {
        for dir in Direction::iter() {
            let abs: IVec2 = dir.vec().abs();

            assert_eq!(abs.x + abs.y, 1_i32);
            assert_eq!(dir.next().vec(), dir.vec().perp());
            assert_eq!(dir.rev().vec(), -dir.vec());
        }
    }

    #[test]
    fn test_grid_try_from_str() {
        let grid: Grid2D<Pixel> = Grid2D::try_from(".#\n#.\n").unwrap();

        assert_eq!(grid.dimensions(), IVec2::new(2_i32, 2_i32));
        assert_eq!(
            grid.cells(),
            &[Pixel::Dark, Pixel::Light, Pixel::Light, Pixel::Dark]
        );
        assert_eq!(String::from(grid), ".#\n#.\n".to_owned());
    }

    #[test]
    fn test_grid_try_from_str_rejects_ragged_rows() {
        assert_eq!(
            Grid2D::<Pixel>::try_from("..#\n..\n"),
            Err(GridParseError::InvalidLength {
                line: "..",
                expected_len: 3_usize
            })
        );
        assert_eq!(
            Grid2D::<Pixel>::try_from(""),
            Err(GridParseError::NoInitialToken)
        );
    }

    #[test]
    fn test_grid_parse_rejects_ragged_rows() {
        assert!(Grid2D::<Pixel>::parse("..#\n..#\n").is_ok());
        assert!(Grid2D::<Pixel>::parse("..#\n..\n.#\n").is_err());
    }

    #[test]
    fn test_flagged_grid() {
        let mut flagged_grid: FlaggedGrid<Pixel> = FlaggedGrid::try_from("..\n##\n").unwrap();

        assert!(flagged_grid.flags().cells().iter().all(|flag| *flag == 0_u32));

        let pos: IVec2 = IVec2::new(1_i32, 0_i32);

        *flagged_grid.flag_mut(pos).unwrap() = 5_u32;

        assert_eq!(flagged_grid.flags().get(pos), Some(&5_u32));
        assert_eq!(flagged_grid.flag_mut(IVec2::new(2_i32, 0_i32)), None);

        flagged_grid.clear_flags();

        assert!(flagged_grid.flags().cells().iter().all(|flag| *flag == 0_u32));
    }

    #[test]
    fn test_small_pos() {
        assert!(SmallPos::is_pos_valid(IVec2::new(255_i32, 0_i32)));
        assert!(!SmallPos::is_pos_valid(IVec2::new(256_i32, 0_i32)));
        assert!(!SmallPos::is_pos_valid(IVec2::new(-1_i32, 0_i32)));
        assert_eq!(
            SmallPos::try_from_pos(IVec2::new(3_i32, 7_i32)).map(SmallPos::get),
            Some(IVec2::new(3_i32, 7_i32))
        );
    }
}
