/// The quote style an attribute value was written in.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Quote {
    /// `name="value"`, including the unterminated `name="value` form.
    Double,
    /// `name='value'`, including the unterminated `name='value` form.
    Single,
    /// `name=value` with no quotes at all.
    Bare,
}

impl Quote {
    /// The opening quote as it appeared in the input. Empty for [`Quote::Bare`].
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Quote::Double => "\"",
            Quote::Single => "'",
            Quote::Bare => "",
        }
    }
}

/// An observer receives the event stream produced by [`crate::Tokenizer`].
///
/// All calls are synchronous and arrive in document order; each callback runs
/// to completion before the scanner advances. Every method has a no-op
/// default body, so an observer only interested in, say, text runs can
/// implement `text` and nothing else.
///
/// String arguments are borrowed from the input being scanned (except the
/// reconstructed `<` on comments and doctypes) and are only valid for the
/// duration of the call. Observers that want to keep them must copy.
pub trait Observer {
    /// A tag occurrence began.
    ///
    /// `raw_name` is the name exactly as captured, *including* the leading
    /// `/` of a closing tag: `</div>` arrives as `tag_start("/div")`.
    /// Distinguishing open from close is the observer's job.
    fn tag_start(&mut self, raw_name: &str) {
        let _ = raw_name;
    }

    /// An attribute was fully resolved.
    ///
    /// `value` and `quote` are either both present or both absent; they are
    /// absent when the attribute has no value (`<input disabled>`). The value
    /// never includes the `=` or the enclosing quotes.
    fn attr_parsed(&mut self, name: &str, value: Option<&str>, quote: Option<Quote>) {
        let _ = (name, value, quote);
    }

    /// The tag occurrence that most recently produced [`Observer::tag_start`]
    /// reached its terminator.
    ///
    /// `raw_name` is the same string previously passed to `tag_start`.
    /// `auto_close` is true iff the terminator was `/>` rather than `>`.
    fn tag_end(&mut self, raw_name: &str, auto_close: bool) {
        let _ = (raw_name, auto_close);
    }

    /// A text run between tags. May be empty: two adjacent tags produce a
    /// zero-length text event between them.
    fn text(&mut self, run: &str) {
        let _ = run;
    }

    /// A comment, markup declaration other than DOCTYPE, or processing
    /// instruction, with its leading `<` reconstructed (`<!-- x -->`,
    /// `<?xml version="1.0"?>`).
    fn comment(&mut self, raw: &str) {
        let _ = raw;
    }

    /// A DOCTYPE declaration with its leading `<` reconstructed
    /// (`<!DOCTYPE html>`).
    fn doctype(&mut self, raw: &str) {
        let _ = raw;
    }

    /// A whitespace run consumed inside a tag, immediately before the token
    /// it preceded. Never empty.
    fn whitespace(&mut self, run: &str) {
        let _ = run;
    }

    /// An input span the scanner could not interpret at the current position:
    /// either a leading mid-tag fragment, or whatever was left unconsumed
    /// when no pattern matched anymore.
    fn invalid_markup(&mut self, run: &str) {
        let _ = run;
    }
}

impl<O: Observer + ?Sized> Observer for &mut O {
    fn tag_start(&mut self, raw_name: &str) {
        (**self).tag_start(raw_name);
    }

    fn attr_parsed(&mut self, name: &str, value: Option<&str>, quote: Option<Quote>) {
        (**self).attr_parsed(name, value, quote);
    }

    fn tag_end(&mut self, raw_name: &str, auto_close: bool) {
        (**self).tag_end(raw_name, auto_close);
    }

    fn text(&mut self, run: &str) {
        (**self).text(run);
    }

    fn comment(&mut self, raw: &str) {
        (**self).comment(raw);
    }

    fn doctype(&mut self, raw: &str) {
        (**self).doctype(raw);
    }

    fn whitespace(&mut self, run: &str) {
        (**self).whitespace(run);
    }

    fn invalid_markup(&mut self, run: &str) {
        (**self).invalid_markup(run);
    }
}

impl<O: Observer + ?Sized> Observer for Box<O> {
    fn tag_start(&mut self, raw_name: &str) {
        (**self).tag_start(raw_name);
    }

    fn attr_parsed(&mut self, name: &str, value: Option<&str>, quote: Option<Quote>) {
        (**self).attr_parsed(name, value, quote);
    }

    fn tag_end(&mut self, raw_name: &str, auto_close: bool) {
        (**self).tag_end(raw_name, auto_close);
    }

    fn text(&mut self, run: &str) {
        (**self).text(run);
    }

    fn comment(&mut self, raw: &str) {
        (**self).comment(raw);
    }

    fn doctype(&mut self, raw: &str) {
        (**self).doctype(raw);
    }

    fn whitespace(&mut self, run: &str) {
        (**self).whitespace(run);
    }

    fn invalid_markup(&mut self, run: &str) {
        (**self).invalid_markup(run);
    }
}
