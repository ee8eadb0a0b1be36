//! Splitting text into display lines and display lines into pages.
use crate::{DisplayLine, LayoutError, Page, PageHeader};
use alloc::vec::Vec;

/// Lazily splits `text` into pieces of `width` characters. Every piece but the
/// last has exactly `width` characters and joining them gives back `text`.
///
/// Cloning the iterator restarts from where the clone was taken.
///
/// # Panics
///
/// If `width` is zero.
pub fn chunk(text: &str, width: usize) -> Chunks<'_> {
    assert!(width > 0, "chunk width must be at least 1");
    Chunks { rest: text, width }
}

#[derive(Clone, Debug)]
pub struct Chunks<'a> {
    rest: &'a str,
    width: usize,
}

impl<'a> Iterator for Chunks<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }
        let split_at = self
            .rest
            .char_indices()
            .nth(self.width)
            .map(|(index, _)| index)
            .unwrap_or(self.rest.len());
        let (line, rest) = self.rest.split_at(split_at);
        self.rest = rest;
        Some(line)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.rest.is_empty() {
            return (0, Some(0));
        }
        // byte length bounds the char count from above
        let max_chars = self.rest.len();
        (1, Some(max_chars.div_ceil(self.width)))
    }
}

impl core::iter::FusedIterator for Chunks<'_> {}

/// Groups `lines[offset..]` into pages of at most `per_page` lines under
/// `header`. Nothing left after `offset` means no pages at all.
///
/// # Panics
///
/// If `per_page` is zero.
pub fn paginate(
    lines: &[DisplayLine],
    offset: usize,
    per_page: usize,
    header: &PageHeader,
) -> Result<Vec<Page>, LayoutError> {
    assert!(per_page > 0, "pages must hold at least one line");
    let remaining = lines.get(offset..).unwrap_or(&[]);
    remaining
        .chunks(per_page)
        .map(|page_lines| Page::new(header.clone(), page_lines.to_vec(), per_page))
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{Emphasis, Icon, Tint};
    use alloc::string::String;

    fn lines(count: usize) -> Vec<DisplayLine> {
        (0..count)
            .map(|i| DisplayLine::new(format!("line {i}"), Emphasis::Bold, 17).unwrap())
            .collect()
    }

    fn header() -> PageHeader {
        PageHeader::new("Confirm transaction", Icon::Send, Tint::Green)
    }

    #[test]
    fn chunk_examples() {
        assert_eq!(chunk("abcdefghi", 3).collect::<Vec<_>>(), ["abc", "def", "ghi"]);
        assert_eq!(chunk("abcdefgh", 3).collect::<Vec<_>>(), ["abc", "def", "gh"]);
        assert_eq!(chunk("ab", 17).collect::<Vec<_>>(), ["ab"]);
        assert_eq!(chunk("", 17).count(), 0);
    }

    #[test]
    fn chunk_counts_chars_not_bytes() {
        let pieces = chunk("₳₳₳₳₳", 2).collect::<Vec<_>>();
        assert_eq!(pieces, ["₳₳", "₳₳", "₳"]);
        assert_eq!(pieces.concat(), "₳₳₳₳₳");
    }

    #[test]
    fn chunk_restarts_from_a_clone() {
        let mut chunks = chunk("abcdef", 2);
        assert_eq!(chunks.next(), Some("ab"));
        let rest = chunks.clone();
        assert_eq!(chunks.collect::<String>(), "cdef");
        assert_eq!(rest.collect::<Vec<_>>(), ["cd", "ef"]);
    }

    #[test]
    fn paginate_groups_from_offset() {
        let pages = paginate(&lines(10), 3, 4, &header()).unwrap();
        assert_eq!(
            pages.iter().map(|page| page.lines().len()).collect::<Vec<_>>(),
            [4, 3]
        );
        assert_eq!(pages[0].lines()[0].text(), "line 3");
        assert_eq!(pages[1].lines()[2].text(), "line 9");
    }

    #[test]
    fn paginate_never_makes_empty_pages() {
        assert!(paginate(&lines(3), 3, 4, &header()).unwrap().is_empty());
        assert!(paginate(&lines(3), 7, 4, &header()).unwrap().is_empty());
        assert!(paginate(&[], 0, 4, &header()).unwrap().is_empty());
    }
}
