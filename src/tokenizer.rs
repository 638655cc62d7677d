use crate::cursor::Cursor;
use crate::machine::MachineState;
use crate::matcher::{self, AttrToken, TagToken, ValueToken};
use crate::state::LexState;
use crate::utils::trace_log;
use crate::{Error, Observer};

/// A markup tokenizer. See crate-level docs for basic usage.
///
/// A tokenizer is a single-use value: [`Tokenizer::scan`] consumes it, which
/// makes reusing one instance across inputs impossible by construction.
/// Create a fresh tokenizer per input.
#[derive(Debug)]
pub struct Tokenizer<O> {
    observer: Option<O>,
    machine: MachineState,
}

impl<O> Default for Tokenizer<O> {
    fn default() -> Self {
        Tokenizer {
            observer: None,
            machine: MachineState::default(),
        }
    }
}

impl<O: Observer> Tokenizer<O> {
    /// Create a tokenizer with no observer attached yet.
    ///
    /// [`Tokenizer::scan`] fails with [`Error::MissingObserver`] until one is
    /// attached.
    #[must_use]
    pub fn new() -> Self {
        Tokenizer::default()
    }

    /// Create a tokenizer that reports to `observer`.
    #[must_use]
    pub fn with_observer(observer: O) -> Self {
        Tokenizer {
            observer: Some(observer),
            machine: MachineState::default(),
        }
    }

    /// Attach `observer`, replacing any observer attached earlier.
    pub fn attach(&mut self, observer: O) {
        self.observer = Some(observer);
    }

    /// Scan `input` in a single pass, delivering the event stream to the
    /// attached observer, and hand the observer back.
    ///
    /// `input` can be a whole document or a fragment starting at any point of
    /// one, including midway through a tag. Malformed markup never fails the
    /// scan; it is demoted to `invalid_markup` or `text` events instead. The
    /// only error is scanning without an observer attached.
    pub fn scan(mut self, input: &str) -> Result<O, Error> {
        let mut observer = self.observer.take().ok_or(Error::MissingObserver)?;
        let mut cursor = Cursor::new(input);

        // Fragments that begin inside an already-open tag can't be scanned
        // structurally. Demote the whole mid-tag prefix in one go.
        if let Some(prefix) = matcher::starting_inside_tag(cursor.rest()) {
            trace_log!("bootstrap: demoting mid-tag prefix of {} bytes", prefix.len());
            observer.invalid_markup(prefix);
            cursor.advance(prefix.len());
        }

        loop {
            match self.machine.state {
                LexState::Text => {
                    let run = matcher::text_run(cursor.rest());
                    // deliberately emitted even when empty: adjacent tags
                    // produce a zero-length text event between them
                    observer.text(run);
                    cursor.advance(run.len());
                    self.machine.switch_to(LexState::TagOpen);
                }

                LexState::TagOpen => {
                    if !matcher::tag_open(cursor.rest()) {
                        break;
                    }
                    // structural marker only, no event
                    cursor.advance(1);
                    self.machine.switch_to(LexState::TagNameOrComment);
                }

                LexState::TagNameOrComment => {
                    let Some((token, consumed)) = matcher::tag_name_or_comment(cursor.rest())
                    else {
                        break;
                    };
                    match token {
                        TagToken::Declaration(decl) => {
                            // reconstruct the `<` the previous state consumed
                            let raw = format!("<{decl}");
                            if matcher::is_doctype(decl) {
                                observer.doctype(&raw);
                            } else {
                                observer.comment(&raw);
                            }
                            self.machine.switch_to(LexState::Text);
                        }
                        TagToken::Name(raw_name) => {
                            self.machine.begin_tag(raw_name, &mut observer);
                            self.machine.switch_to(LexState::AttrName);
                        }
                    }
                    cursor.advance(consumed);
                }

                LexState::AttrName => {
                    let Some(m) = matcher::attr_name(cursor.rest()) else {
                        break;
                    };
                    if !m.whitespace.is_empty() {
                        observer.whitespace(m.whitespace);
                    }
                    match m.token {
                        AttrToken::Terminator { auto_close } => {
                            self.machine.close_tag(auto_close, &mut observer);
                            self.machine.switch_to(LexState::Text);
                        }
                        AttrToken::Name(name) => {
                            self.machine.begin_attr(name);
                            self.machine.switch_to(LexState::AttrValueOrNextAttr);
                        }
                    }
                    cursor.advance(m.consumed);
                }

                LexState::AttrValueOrNextAttr => {
                    let Some(m) = matcher::attr_value_or_next(cursor.rest()) else {
                        break;
                    };
                    match m.token {
                        ValueToken::Terminator { auto_close } => {
                            // the pending attribute belongs before the
                            // whitespace that precedes the terminator
                            self.machine.flush_attr(&mut observer);
                            if !m.whitespace.is_empty() {
                                observer.whitespace(m.whitespace);
                            }
                            self.machine.close_tag(auto_close, &mut observer);
                            self.machine.switch_to(LexState::Text);
                        }
                        ValueToken::Value { value, quote } => {
                            if !m.whitespace.is_empty() {
                                observer.whitespace(m.whitespace);
                            }
                            self.machine.emit_value(value, quote, &mut observer);
                            self.machine.switch_to(LexState::AttrName);
                        }
                        ValueToken::NextName(name) => {
                            // the pending attribute had no value; report it,
                            // then stay in this state for the new name
                            self.machine.flush_attr(&mut observer);
                            if !m.whitespace.is_empty() {
                                observer.whitespace(m.whitespace);
                            }
                            self.machine.begin_attr(name);
                        }
                    }
                    cursor.advance(m.consumed);
                }
            }
        }

        // whatever survives the loop is malformed trailing markup
        if !cursor.is_empty() {
            trace_log!("demoting unconsumed remainder of {} bytes", cursor.rest().len());
            observer.invalid_markup(cursor.take_rest());
        }

        Ok(observer)
    }
}
