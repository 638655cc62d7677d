/// A view over the not-yet-consumed tail of the input.
///
/// The cursor only ever shrinks: every successful pattern match advances it
/// by the matched length, and the scan loop stops once the current state has
/// no matching pattern. There is no way to seek backwards.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Cursor<'a> {
    rest: &'a str,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(input: &'a str) -> Self {
        Cursor { rest: input }
    }

    /// The remaining unconsumed input.
    pub(crate) fn rest(&self) -> &'a str {
        self.rest
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.rest.is_empty()
    }

    /// Consume `n` bytes. `n` must lie on a character boundary; the matcher
    /// only ever reports lengths that do.
    pub(crate) fn advance(&mut self, n: usize) {
        debug_assert!(self.rest.is_char_boundary(n));
        self.rest = &self.rest[n..];
    }

    /// Consume whatever is left and return it.
    pub(crate) fn take_rest(&mut self) -> &'a str {
        let rv = self.rest;
        self.rest = "";
        rv
    }
}

#[cfg(test)]
mod tests {
    use super::Cursor;

    #[test]
    fn advance_shrinks() {
        let mut cursor = Cursor::new("<div>");
        cursor.advance(1);
        assert_eq!(cursor.rest(), "div>");
        cursor.advance(4);
        assert!(cursor.is_empty());
    }

    #[test]
    fn take_rest_drains() {
        let mut cursor = Cursor::new("left over");
        assert_eq!(cursor.take_rest(), "left over");
        assert!(cursor.is_empty());
        assert_eq!(cursor.take_rest(), "");
    }
}
