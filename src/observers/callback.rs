//! Consume the event stream through a single closure.
//!
//! While [`DefaultObserver`](crate::DefaultObserver) allocates an owned
//! [`Event`](crate::Event) per callback, this observer hands you every event
//! as a [`ScanEvent`] whose strings are borrowed straight from the input.
//!
//! ```
//! use html5scan::Tokenizer;
//! use html5scan::observers::callback::{CallbackObserver, ScanEvent};
//!
//! let mut text = String::new();
//! let observer = CallbackObserver::new(|event| {
//!     if let ScanEvent::Text { run } = event {
//!         text.push_str(run);
//!     }
//! });
//!
//! Tokenizer::with_observer(observer)
//!     .scan("<b>hello</b> <i>world</i>")
//!     .unwrap();
//!
//! assert_eq!(text, "hello world");
//! ```

use std::fmt::{Debug, Formatter};

use crate::observer::{Observer, Quote};

/// A borrowed view of one scanner event, as passed to [`CallbackObserver`].
///
/// This mirrors the [`Observer`](crate::Observer) callbacks one to one; see
/// the trait docs for the semantics of each variant.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ScanEvent<'a> {
    /// See [`Observer::tag_start`](crate::Observer::tag_start).
    TagStart {
        /// Raw tag name, leading `/` included for closing tags.
        raw_name: &'a str,
    },
    /// See [`Observer::attr_parsed`](crate::Observer::attr_parsed).
    AttrParsed {
        /// Attribute name.
        name: &'a str,
        /// Attribute value; absent when the attribute has no value.
        value: Option<&'a str>,
        /// Quote style; absent when the attribute has no value.
        quote: Option<Quote>,
    },
    /// See [`Observer::tag_end`](crate::Observer::tag_end).
    TagEnd {
        /// The raw name previously reported by the matching
        /// [`ScanEvent::TagStart`].
        raw_name: &'a str,
        /// True iff the terminator was `/>`.
        auto_close: bool,
    },
    /// See [`Observer::text`](crate::Observer::text).
    Text {
        /// The text run. May be empty.
        run: &'a str,
    },
    /// See [`Observer::comment`](crate::Observer::comment).
    Comment {
        /// Raw comment, leading `<` included.
        raw: &'a str,
    },
    /// See [`Observer::doctype`](crate::Observer::doctype).
    Doctype {
        /// Raw declaration, leading `<` included.
        raw: &'a str,
    },
    /// See [`Observer::whitespace`](crate::Observer::whitespace).
    Whitespace {
        /// The whitespace run. Never empty.
        run: &'a str,
    },
    /// See [`Observer::invalid_markup`](crate::Observer::invalid_markup).
    InvalidMarkup {
        /// The uninterpretable span, verbatim.
        run: &'a str,
    },
}

/// An [`Observer`](crate::Observer) that routes every event through one
/// `FnMut`. Please refer to the module-level documentation for usage.
pub struct CallbackObserver<F> {
    callback: F,
}

impl<F> Debug for CallbackObserver<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CallbackObserver").finish_non_exhaustive()
    }
}

impl<F: FnMut(ScanEvent<'_>)> CallbackObserver<F> {
    /// Wrap `callback` so it receives every scanner event.
    pub fn new(callback: F) -> Self {
        CallbackObserver { callback }
    }

    /// Get mutable access to the inner callback.
    pub fn callback_mut(&mut self) -> &mut F {
        &mut self.callback
    }

    /// Consume the observer and return the inner callback.
    pub fn into_callback(self) -> F {
        self.callback
    }
}

impl<F: FnMut(ScanEvent<'_>)> Observer for CallbackObserver<F> {
    fn tag_start(&mut self, raw_name: &str) {
        (self.callback)(ScanEvent::TagStart { raw_name });
    }

    fn attr_parsed(&mut self, name: &str, value: Option<&str>, quote: Option<Quote>) {
        (self.callback)(ScanEvent::AttrParsed { name, value, quote });
    }

    fn tag_end(&mut self, raw_name: &str, auto_close: bool) {
        (self.callback)(ScanEvent::TagEnd {
            raw_name,
            auto_close,
        });
    }

    fn text(&mut self, run: &str) {
        (self.callback)(ScanEvent::Text { run });
    }

    fn comment(&mut self, raw: &str) {
        (self.callback)(ScanEvent::Comment { raw });
    }

    fn doctype(&mut self, raw: &str) {
        (self.callback)(ScanEvent::Doctype { raw });
    }

    fn whitespace(&mut self, run: &str) {
        (self.callback)(ScanEvent::Whitespace { run });
    }

    fn invalid_markup(&mut self, run: &str) {
        (self.callback)(ScanEvent::InvalidMarkup { run });
    }
}
