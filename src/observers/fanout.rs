//! Replay the event stream to several observers at once.
//!
//! The tokenizer core only ever talks to a single observer value; when more
//! than one party is interested, compose them here instead.
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! use html5scan::Tokenizer;
//! use html5scan::observers::callback::{CallbackObserver, ScanEvent};
//! use html5scan::observers::fanout::FanoutObserver;
//!
//! let tags = Rc::new(Cell::new(0usize));
//! let chars = Rc::new(Cell::new(0usize));
//!
//! let tag_counter = {
//!     let tags = Rc::clone(&tags);
//!     CallbackObserver::new(move |event| {
//!         if let ScanEvent::TagStart { .. } = event {
//!             tags.set(tags.get() + 1);
//!         }
//!     })
//! };
//! let char_counter = {
//!     let chars = Rc::clone(&chars);
//!     CallbackObserver::new(move |event| {
//!         if let ScanEvent::Text { run } = event {
//!             chars.set(chars.get() + run.chars().count());
//!         }
//!     })
//! };
//!
//! let fanout = FanoutObserver::new().with(tag_counter).with(char_counter);
//! Tokenizer::with_observer(fanout).scan("<p>one</p><p>two</p>").unwrap();
//!
//! assert_eq!(tags.get(), 4); // "/p" occurrences count too
//! assert_eq!(chars.get(), 6);
//! ```

use std::fmt::{Debug, Formatter};

use crate::observer::{Observer, Quote};

/// An [`Observer`](crate::Observer) that forwards every event, in order, to
/// each observer in an ordered list.
#[derive(Default)]
pub struct FanoutObserver {
    observers: Vec<Box<dyn Observer>>,
}

impl Debug for FanoutObserver {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FanoutObserver")
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl FanoutObserver {
    /// Create a fan-out with no observers yet.
    #[must_use]
    pub fn new() -> Self {
        FanoutObserver::default()
    }

    /// Add `observer` to the end of the fan-out list, builder-style.
    #[must_use]
    pub fn with(mut self, observer: impl Observer + 'static) -> Self {
        self.push(observer);
        self
    }

    /// Add `observer` to the end of the fan-out list.
    pub fn push(&mut self, observer: impl Observer + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// The number of composed observers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.observers.len()
    }

    /// Whether the fan-out list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

impl Observer for FanoutObserver {
    fn tag_start(&mut self, raw_name: &str) {
        for observer in &mut self.observers {
            observer.tag_start(raw_name);
        }
    }

    fn attr_parsed(&mut self, name: &str, value: Option<&str>, quote: Option<Quote>) {
        for observer in &mut self.observers {
            observer.attr_parsed(name, value, quote);
        }
    }

    fn tag_end(&mut self, raw_name: &str, auto_close: bool) {
        for observer in &mut self.observers {
            observer.tag_end(raw_name, auto_close);
        }
    }

    fn text(&mut self, run: &str) {
        for observer in &mut self.observers {
            observer.text(run);
        }
    }

    fn comment(&mut self, raw: &str) {
        for observer in &mut self.observers {
            observer.comment(raw);
        }
    }

    fn doctype(&mut self, raw: &str) {
        for observer in &mut self.observers {
            observer.doctype(raw);
        }
    }

    fn whitespace(&mut self, run: &str) {
        for observer in &mut self.observers {
            observer.whitespace(run);
        }
    }

    fn invalid_markup(&mut self, run: &str) {
        for observer in &mut self.observers {
            observer.invalid_markup(run);
        }
    }
}
