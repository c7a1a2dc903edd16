/// Sourcecode location. Both the row and the column start at 1, and the
/// column counts characters, not bytes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Location {
    pub(super) row: usize,
    pub(super) column: usize,
}

impl Location {
    pub fn new(row: usize, column: usize) -> Self {
        Location { row, column }
    }

    /// Compute the location of the byte `offset` in `text`.
    ///
    /// Offsets past the end of `text` are clamped to its end, and offsets in
    /// the middle of a multi-byte character point at that character.
    pub fn from_offset(text: &str, offset: usize) -> Self {
        let mut offset = offset.min(text.len());
        while !text.is_char_boundary(offset) {
            offset -= 1;
        }

        let before = &text[..offset];
        let line_start = before.rfind('\n').map_or(0, |i| i + 1);
        let row = before.matches('\n').count() + 1;
        let column = before[line_start..].chars().count() + 1;

        Location { row, column }
    }

    /// Current row
    pub fn row(&self) -> usize {
        self.row
    }

    /// Current column
    pub fn column(&self) -> usize {
        self.column
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_offset() {
        let text = "a {\n  color: red;\n}\n";
        assert_eq!(Location::from_offset(text, 0), Location::new(1, 1));
        assert_eq!(Location::from_offset(text, 6), Location::new(2, 3));
        assert_eq!(Location::from_offset(text, 18), Location::new(3, 1));
    }

    #[test]
    fn test_from_offset_counts_characters() {
        let text = "/* é */ a {}";
        // `a` is the 9th character but the 10th byte.
        assert_eq!(Location::from_offset(text, 9), Location::new(1, 9));
    }

    #[test]
    fn test_from_offset_is_clamped() {
        assert_eq!(Location::from_offset("ab", 10), Location::new(1, 3));
        assert_eq!(Location::from_offset("é", 1), Location::new(1, 1));
    }
}
