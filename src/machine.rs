use crate::observer::{Observer, Quote};
use crate::state::LexState;
use crate::utils::trace_log;

/// The scanner's mutable scratch: the current lexical state plus the two
/// single-slot trackers for the tag occurrence and the attribute in flight.
///
/// The grammar never lets a second tag occurrence begin before the previous
/// one's terminator is reached, so the "tag stack" is a plain optional slot.
#[derive(Debug, Default)]
pub(crate) struct MachineState {
    pub(crate) state: LexState,
    pending_tag: Option<String>,
    pending_attr: Option<String>,
}

impl MachineState {
    pub(crate) fn switch_to(&mut self, state: LexState) {
        trace_log!("switch_to: {:?} -> {:?}", self.state, state);
        self.state = state;
    }

    /// Record the tag occurrence now in flight and report it.
    pub(crate) fn begin_tag<O: Observer>(&mut self, raw_name: &str, observer: &mut O) {
        debug_assert!(self.pending_tag.is_none());
        observer.tag_start(raw_name);
        self.pending_tag = Some(raw_name.to_owned());
    }

    /// Track a new attribute name. Any pending attribute must have been
    /// flushed or resolved first.
    pub(crate) fn begin_attr(&mut self, name: &str) {
        debug_assert!(self.pending_attr.is_none());
        self.pending_attr = Some(name.to_owned());
    }

    /// Report a pending attribute that never got a value (name only), so no
    /// attribute is ever silently dropped. No-op when nothing is pending.
    pub(crate) fn flush_attr<O: Observer>(&mut self, observer: &mut O) {
        if let Some(name) = self.pending_attr.take() {
            observer.attr_parsed(&name, None, None);
        }
    }

    /// Resolve the pending attribute with a value.
    pub(crate) fn emit_value<O: Observer>(&mut self, value: &str, quote: Quote, observer: &mut O) {
        debug_assert!(self.pending_attr.is_some());
        if let Some(name) = self.pending_attr.take() {
            observer.attr_parsed(&name, Some(value), Some(quote));
        }
    }

    /// Flush any pending valueless attribute, then close the tag occurrence
    /// in flight.
    pub(crate) fn close_tag<O: Observer>(&mut self, auto_close: bool, observer: &mut O) {
        self.flush_attr(observer);
        debug_assert!(self.pending_tag.is_some());
        if let Some(raw_name) = self.pending_tag.take() {
            observer.tag_end(&raw_name, auto_close);
        }
    }
}
