use {
    crate::open_utf8_file,
    std::io::Result as IoResult,
};

/// An owned store of input lines with a read cursor.
///
/// Only `'\n'` terminates a line. A trailing segment without a terminator still counts as a line,
/// and an empty input has no lines at all, which callers should treat as an error for their own
/// purposes.
#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct LineStore {
    lines: Vec<String>,
    cursor: usize,
}

impl LineStore {
    pub fn new(input: &str) -> Self {
        let mut lines: Vec<String> = Vec::new();

        if !input.is_empty() {
            lines.extend(input.split('\n').map(String::from));

            if input.ends_with('\n') {
                lines.pop();
            }
        }

        Self {
            lines,
            cursor: 0_usize,
        }
    }

    pub fn load(file_path: &str) -> IoResult<Self> {
        // SAFETY: This isn't truly safe, we're just hoping nobody touches our file before we're
        // done parsing it
        unsafe { open_utf8_file(file_path, Self::new) }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The line at the cursor plus its 1-based line number, advancing the cursor past it.
    pub fn next_line(&mut self) -> Option<(&str, usize)> {
        if self.cursor < self.lines.len() {
            self.cursor += 1_usize;

            Some((&self.lines[self.cursor - 1_usize], self.cursor))
        } else {
            None
        }
    }

    /// The line at a 0-based index, repositioning the cursor just past it. The index must be in
    /// range.
    pub fn line(&mut self, index: usize) -> &str {
        assert!(index < self.lines.len());

        self.cursor = index + 1_usize;

        &self.lines[index]
    }

    pub fn reset(&mut self) {
        self.cursor = 0_usize;
    }
}

impl From<&str> for LineStore {
    fn from(input: &str) -> Self {
        Self::new(input)
    }
}
