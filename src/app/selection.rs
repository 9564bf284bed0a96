//! Wrapping list cursor shared by the feed and the result lists.

/// Zero-based cursor over a list whose length is supplied per call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    index: usize,
}

impl Selection {
    #[must_use]
    pub const fn index(self) -> usize {
        self.index
    }

    /// Moves down by one, wrapping to the top. No-op on an empty list.
    pub fn next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.index = (self.index + 1) % len;
    }

    /// Moves up by one, wrapping to the bottom. No-op on an empty list.
    pub fn previous(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        if self.index == 0 {
            self.index = len - 1;
        } else {
            self.index -= 1;
        }
    }

    /// Keeps the cursor inside `0..len` after the list shrank.
    pub fn clamp(&mut self, len: usize) {
        self.index = if len == 0 { 0 } else { self.index.min(len - 1) };
    }

    pub fn reset(&mut self) {
        self.index = 0;
    }

    /// The selected element of `items`, if any.
    #[must_use]
    pub fn pick<T>(self, items: &[T]) -> Option<&T> {
        items.get(self.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_in_both_directions() {
        let mut selection = Selection::default();
        selection.previous(3);
        assert_eq!(selection.index(), 2);
        selection.next(3);
        assert_eq!(selection.index(), 0);
    }

    #[test]
    fn empty_list_is_a_no_op() {
        let mut selection = Selection::default();
        selection.next(0);
        selection.previous(0);
        assert_eq!(selection.index(), 0);
        assert_eq!(selection.pick::<u8>(&[]), None);
    }

    #[test]
    fn clamp_after_shrink() {
        let mut selection = Selection::default();
        selection.previous(10);
        selection.clamp(4);
        assert_eq!(selection.index(), 3);
        selection.clamp(0);
        assert_eq!(selection.index(), 0);
    }
}
