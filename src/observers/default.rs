//! Collect the event stream as owned values.

use crate::observer::{Observer, Quote};

/// One recorded scanner event. An owned mirror of the
/// [`Observer`](crate::Observer) callbacks.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Event {
    /// A tag occurrence began. The raw name keeps the leading `/` of a
    /// closing tag.
    TagStart(String),
    /// An attribute was resolved.
    AttrParsed {
        /// Attribute name.
        name: String,
        /// Attribute value; absent when the attribute has no value.
        value: Option<String>,
        /// Quote style; absent when the attribute has no value.
        quote: Option<Quote>,
    },
    /// A tag occurrence reached its terminator.
    TagEnd {
        /// The raw name previously reported by the matching
        /// [`Event::TagStart`].
        raw_name: String,
        /// True iff the terminator was `/>`.
        auto_close: bool,
    },
    /// A text run between tags. May be empty.
    Text(String),
    /// A comment, non-DOCTYPE markup declaration, or processing instruction,
    /// leading `<` included.
    Comment(String),
    /// A DOCTYPE declaration, leading `<` included.
    Doctype(String),
    /// A whitespace run consumed inside a tag. Never empty.
    Whitespace(String),
    /// An input span the scanner could not interpret.
    InvalidMarkup(String),
}

/// The default implementation of [`Observer`](crate::Observer): records
/// every event, in order, as an owned [`Event`].
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct DefaultObserver {
    events: Vec<Event>,
}

impl DefaultObserver {
    /// Create an observer with an empty event log.
    #[must_use]
    pub fn new() -> Self {
        DefaultObserver::default()
    }

    /// The events recorded so far, in emission order.
    #[must_use]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Consume the observer and return the recorded events.
    #[must_use]
    pub fn into_events(self) -> Vec<Event> {
        self.events
    }
}

impl Observer for DefaultObserver {
    fn tag_start(&mut self, raw_name: &str) {
        self.events.push(Event::TagStart(raw_name.to_owned()));
    }

    fn attr_parsed(&mut self, name: &str, value: Option<&str>, quote: Option<Quote>) {
        self.events.push(Event::AttrParsed {
            name: name.to_owned(),
            value: value.map(str::to_owned),
            quote,
        });
    }

    fn tag_end(&mut self, raw_name: &str, auto_close: bool) {
        self.events.push(Event::TagEnd {
            raw_name: raw_name.to_owned(),
            auto_close,
        });
    }

    fn text(&mut self, run: &str) {
        self.events.push(Event::Text(run.to_owned()));
    }

    fn comment(&mut self, raw: &str) {
        self.events.push(Event::Comment(raw.to_owned()));
    }

    fn doctype(&mut self, raw: &str) {
        self.events.push(Event::Doctype(raw.to_owned()));
    }

    fn whitespace(&mut self, run: &str) {
        self.events.push(Event::Whitespace(run.to_owned()));
    }

    fn invalid_markup(&mut self, run: &str) {
        self.events.push(Event::InvalidMarkup(run.to_owned()));
    }
}
