//! Behavior tests for the event streams the scanner produces, exercised
//! through the public API only.

use html5scan::observers::callback::{CallbackObserver, ScanEvent};
use html5scan::observers::fanout::FanoutObserver;
use html5scan::{DefaultObserver, Event, Observer, Quote, Tokenizer};
use pretty_assertions::assert_eq;

fn events(input: &str) -> Vec<Event> {
    Tokenizer::with_observer(DefaultObserver::new())
        .scan(input)
        .unwrap()
        .into_events()
}

#[test]
fn empty_input_is_one_empty_text_run() {
    assert_eq!(events(""), vec![Event::Text("".into())]);
}

#[test]
fn plain_text() {
    assert_eq!(events("hello world"), vec![Event::Text("hello world".into())]);
}

#[test]
fn adjacent_tags_produce_a_zero_length_text_event() {
    assert_eq!(
        events("<a></a>"),
        vec![
            Event::Text("".into()),
            Event::TagStart("a".into()),
            Event::TagEnd {
                raw_name: "a".into(),
                auto_close: false,
            },
            Event::Text("".into()),
            Event::TagStart("/a".into()),
            Event::TagEnd {
                raw_name: "/a".into(),
                auto_close: false,
            },
            Event::Text("".into()),
        ]
    );
}

#[test]
fn attributes_with_and_without_values() {
    assert_eq!(
        events(r#"<div class="a b" disabled>"#),
        vec![
            Event::Text("".into()),
            Event::TagStart("div".into()),
            Event::Whitespace(" ".into()),
            Event::AttrParsed {
                name: "class".into(),
                value: Some("a b".into()),
                quote: Some(Quote::Double),
            },
            Event::Whitespace(" ".into()),
            Event::AttrParsed {
                name: "disabled".into(),
                value: None,
                quote: None,
            },
            Event::TagEnd {
                raw_name: "div".into(),
                auto_close: false,
            },
            Event::Text("".into()),
        ]
    );
}

#[test]
fn auto_closing_tag() {
    assert_eq!(
        events("<br/>"),
        vec![
            Event::Text("".into()),
            Event::TagStart("br".into()),
            Event::TagEnd {
                raw_name: "br".into(),
                auto_close: true,
            },
            Event::Text("".into()),
        ]
    );
}

#[test]
fn closing_tags_keep_the_raw_slash() {
    assert_eq!(
        events("</div>"),
        vec![
            Event::Text("".into()),
            Event::TagStart("/div".into()),
            Event::TagEnd {
                raw_name: "/div".into(),
                auto_close: false,
            },
            Event::Text("".into()),
        ]
    );
}

#[test]
fn doctype_is_detected_case_insensitively() {
    assert_eq!(
        events("<!DOCTYPE html>"),
        vec![
            Event::Text("".into()),
            Event::Doctype("<!DOCTYPE html>".into()),
            Event::Text("".into()),
        ]
    );
    assert_eq!(
        events("<!doctype HTML>"),
        vec![
            Event::Text("".into()),
            Event::Doctype("<!doctype HTML>".into()),
            Event::Text("".into()),
        ]
    );
}

#[test]
fn comments_and_other_declarations() {
    assert_eq!(
        events("<!-- hi -->"),
        vec![
            Event::Text("".into()),
            Event::Comment("<!-- hi -->".into()),
            Event::Text("".into()),
        ]
    );
    // unknown markup declarations fold into comments
    assert_eq!(
        events("<!ELEMENT foo>"),
        vec![
            Event::Text("".into()),
            Event::Comment("<!ELEMENT foo>".into()),
            Event::Text("".into()),
        ]
    );
}

#[test]
fn processing_instructions_fold_into_comments() {
    assert_eq!(
        events(r#"<?xml version="1.0"?>ok"#),
        vec![
            Event::Text("".into()),
            Event::Comment(r#"<?xml version="1.0"?>"#.into()),
            Event::Text("ok".into()),
        ]
    );
}

#[test]
fn unterminated_processing_instruction_is_demoted() {
    assert_eq!(
        events("<?xml never closed"),
        vec![
            Event::Text("".into()),
            Event::InvalidMarkup("?xml never closed".into()),
        ]
    );
}

#[test]
fn fragment_starting_inside_a_tag() {
    assert_eq!(
        events(r#"attr="val">rest"#),
        vec![
            Event::InvalidMarkup(r#"attr="val">"#.into()),
            Event::Text("rest".into()),
        ]
    );
}

#[test]
fn unterminated_quote_runs_to_end_of_input() {
    assert_eq!(
        events(r#"<a href="http://x"#),
        vec![
            Event::Text("".into()),
            Event::TagStart("a".into()),
            Event::Whitespace(" ".into()),
            Event::AttrParsed {
                name: "href".into(),
                value: Some("http://x".into()),
                quote: Some(Quote::Double),
            },
        ]
    );
}

#[test]
fn single_quoted_values() {
    assert_eq!(
        events("<a title='it is'>x</a>"),
        vec![
            Event::Text("".into()),
            Event::TagStart("a".into()),
            Event::Whitespace(" ".into()),
            Event::AttrParsed {
                name: "title".into(),
                value: Some("it is".into()),
                quote: Some(Quote::Single),
            },
            Event::TagEnd {
                raw_name: "a".into(),
                auto_close: false,
            },
            Event::Text("x".into()),
            Event::TagStart("/a".into()),
            Event::TagEnd {
                raw_name: "/a".into(),
                auto_close: false,
            },
            Event::Text("".into()),
        ]
    );
}

// Resolves the ambiguity in the source grammar: a bare attribute followed by
// another attribute name is *reported* (name only) before the new name takes
// its place, rather than silently dropped.
#[test]
fn bare_attribute_followed_by_another_is_still_reported() {
    assert_eq!(
        events("<a foo bar>"),
        vec![
            Event::Text("".into()),
            Event::TagStart("a".into()),
            Event::Whitespace(" ".into()),
            Event::AttrParsed {
                name: "foo".into(),
                value: None,
                quote: None,
            },
            Event::Whitespace(" ".into()),
            Event::AttrParsed {
                name: "bar".into(),
                value: None,
                quote: None,
            },
            Event::TagEnd {
                raw_name: "a".into(),
                auto_close: false,
            },
            Event::Text("".into()),
        ]
    );
}

#[test]
fn trailing_lt_is_consumed_without_an_event() {
    // the `<` is a structural marker; with nothing scannable behind it, the
    // scan just ends
    assert_eq!(events("a<"), vec![Event::Text("a".into())]);
}

#[test]
fn text_after_a_dead_tag_open_is_demoted() {
    assert_eq!(
        events("a < b"),
        vec![Event::Text("a ".into()), Event::InvalidMarkup(" b".into())]
    );
}

#[test]
fn multiline_whitespace_inside_tags() {
    assert_eq!(
        events("<a\n  href=\"x\"\n>go</a>"),
        vec![
            Event::Text("".into()),
            Event::TagStart("a".into()),
            Event::Whitespace("\n  ".into()),
            Event::AttrParsed {
                name: "href".into(),
                value: Some("x".into()),
                quote: Some(Quote::Double),
            },
            Event::Whitespace("\n".into()),
            Event::TagEnd {
                raw_name: "a".into(),
                auto_close: false,
            },
            Event::Text("go".into()),
            Event::TagStart("/a".into()),
            Event::TagEnd {
                raw_name: "/a".into(),
                auto_close: false,
            },
            Event::Text("".into()),
        ]
    );
}

#[test]
fn unicode_names_and_text() {
    assert_eq!(
        events("<täg ä='ö'>héllo</täg>"),
        vec![
            Event::Text("".into()),
            Event::TagStart("täg".into()),
            Event::Whitespace(" ".into()),
            Event::AttrParsed {
                name: "ä".into(),
                value: Some("ö".into()),
                quote: Some(Quote::Single),
            },
            Event::TagEnd {
                raw_name: "täg".into(),
                auto_close: false,
            },
            Event::Text("héllo".into()),
            Event::TagStart("/täg".into()),
            Event::TagEnd {
                raw_name: "/täg".into(),
                auto_close: false,
            },
            Event::Text("".into()),
        ]
    );
}

/// Observer that checks the single-in-flight-tag invariant as the stream
/// arrives.
#[derive(Default)]
struct InFlight {
    open: Option<String>,
    pairs: Vec<(String, String)>,
}

impl Observer for InFlight {
    fn tag_start(&mut self, raw_name: &str) {
        assert!(
            self.open.is_none(),
            "tag occurrence opened while another is in flight"
        );
        self.open = Some(raw_name.to_owned());
    }

    fn tag_end(&mut self, raw_name: &str, _auto_close: bool) {
        let started = self.open.take().expect("tag_end without tag_start");
        self.pairs.push((started, raw_name.to_owned()));
    }
}

#[test]
fn at_most_one_tag_occurrence_is_in_flight() {
    let observer = Tokenizer::with_observer(InFlight::default())
        .scan(r#"<html><body class="x"><p>one</p><br/><img src='y'></body></html>"#)
        .unwrap();

    assert!(observer.open.is_none());
    assert_eq!(observer.pairs.len(), 8);
    for (started, ended) in &observer.pairs {
        assert_eq!(started, ended);
    }
}

#[test]
fn callback_observer_sees_the_same_stream() {
    let mut names = Vec::new();
    let observer = CallbackObserver::new(|event| {
        if let ScanEvent::AttrParsed { name, .. } = event {
            names.push(name.to_owned());
        }
    });

    Tokenizer::with_observer(observer)
        .scan(r#"<a href="x" target=_blank download>"#)
        .unwrap();

    assert_eq!(names, vec!["href", "target", "download"]);
}

#[test]
fn fanout_replays_each_event_to_every_observer_in_order() {
    use std::cell::RefCell;
    use std::rc::Rc;

    let log = Rc::new(RefCell::new(Vec::new()));

    let label = |tag: &'static str, log: &Rc<RefCell<Vec<String>>>| {
        let log = Rc::clone(log);
        CallbackObserver::new(move |event: ScanEvent<'_>| {
            if let ScanEvent::TagStart { raw_name } = event {
                log.borrow_mut().push(format!("{tag}:{raw_name}"));
            }
        })
    };

    let fanout = FanoutObserver::new()
        .with(label("first", &log))
        .with(label("second", &log));
    assert_eq!(fanout.len(), 2);

    Tokenizer::with_observer(fanout).scan("<a><b>").unwrap();

    assert_eq!(
        *log.borrow(),
        vec!["first:a", "second:a", "first:b", "second:b"]
    );
}
