//! The round-trip property: concatenating the raw strings carried by the
//! event stream, with tag markers and quotes put back in place, reconstructs
//! the input exactly.
//!
//! Two kinds of spans are irrecoverable by construction and excluded here:
//! the structural `<` consumed just before the tag-name pattern fails (it
//! carries no event), and a pending attribute name that never resolves
//! before the scan dies (it is never reported).

use html5scan::{DefaultObserver, Event, Tokenizer};
use pretty_assertions::assert_eq;

fn reconstruct(events: &[Event]) -> String {
    let mut out = String::new();
    for event in events {
        match event {
            Event::Text(run) | Event::Whitespace(run) | Event::InvalidMarkup(run) => {
                out.push_str(run);
            }
            Event::TagStart(raw_name) => {
                out.push('<');
                out.push_str(raw_name);
            }
            Event::AttrParsed { name, value, quote } => {
                out.push_str(name);
                if let (Some(value), Some(quote)) = (value, quote) {
                    out.push('=');
                    out.push_str(quote.as_str());
                    out.push_str(value);
                    out.push_str(quote.as_str());
                }
            }
            Event::TagEnd { auto_close, .. } => {
                out.push_str(if *auto_close { "/>" } else { ">" });
            }
            // the leading `<` is already part of the raw text
            Event::Comment(raw) | Event::Doctype(raw) => out.push_str(raw),
        }
    }
    out
}

#[track_caller]
fn assert_roundtrip(input: &str) {
    let observer = Tokenizer::with_observer(DefaultObserver::new())
        .scan(input)
        .unwrap();
    assert_eq!(reconstruct(observer.events()), input);
}

#[test]
fn whole_documents() {
    assert_roundtrip(concat!(
        "<!DOCTYPE html>\n",
        "<html lang=\"en\">\n",
        "<head><title>t</title></head>\n",
        "<body class='x'>\n",
        "Hello, world<br/>\n",
        "<!-- bye -->\n",
        "</body>\n",
        "</html>\n",
    ));
}

#[test]
fn nested_lists() {
    assert_roundtrip("<ul><li>one</li><li>two</li></ul>");
}

#[test]
fn quote_styles() {
    assert_roundtrip(r#"<a one="1" two='2' three=3 four>x</a>"#);
}

#[test]
fn whitespace_runs_inside_tags() {
    assert_roundtrip("<a\n   href=\"x\"\n\t>go</a>");
}

#[test]
fn processing_instructions_and_declarations() {
    assert_roundtrip("<?xml version=\"1.0\"?><!ELEMENT foo>text");
}

#[test]
fn prefixed_and_unicode_names() {
    assert_roundtrip("<svg:circle r=\"1\"/><täg ä='ö'>héllo</täg>");
}

#[test]
fn fragment_starting_inside_a_tag() {
    assert_roundtrip("attr=\"val\">rest of the line");
}

#[test]
fn text_with_a_stray_gt() {
    // the non-`<` prefix up to the last `>` bootstraps as invalid markup,
    // then scanning resumes
    assert_roundtrip("x > y");
}

#[test]
fn bare_attributes() {
    assert_roundtrip("<a foo bar>");
}

#[test]
fn leading_garbage() {
    assert_roundtrip(">> x");
}

#[test]
fn empty_and_whitespace_only_inputs() {
    assert_roundtrip("");
    assert_roundtrip("   \n\t ");
}
