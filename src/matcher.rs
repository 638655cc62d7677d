//! The pattern set behind each lexical state.
//!
//! Every function here tries to match the longest applicable prefix of the
//! remaining input and reports how many bytes a successful match consumed.
//! `None` means the current state has no matching pattern, which ends the
//! scan loop; whatever is left over is malformed.

use crate::observer::Quote;

/// Result of a single pattern-match step.
pub(crate) struct Match<'a, T> {
    /// The leading whitespace run consumed as part of the match. Empty for
    /// patterns that don't skip whitespace.
    pub(crate) whitespace: &'a str,
    /// The state-specific token payload.
    pub(crate) token: T,
    /// Total number of bytes consumed, whitespace included.
    pub(crate) consumed: usize,
}

/// Token matched in the tag-name-or-comment state.
pub(crate) enum TagToken<'a> {
    /// A markup declaration (`!` up to the next `>`) or a processing
    /// instruction (`?` up to the next `?>`), terminator included, with any
    /// leading `/` kept.
    Declaration(&'a str),
    /// A tag name run, with any leading `/` kept.
    Name(&'a str),
}

/// Token matched in the attribute-name state.
pub(crate) enum AttrToken<'a> {
    /// The tag terminator, `>` or `/>`.
    Terminator {
        /// True iff the terminator was `/>`.
        auto_close: bool,
    },
    /// An attribute name.
    Name(&'a str),
}

/// Token matched in the value-or-next-attribute state.
pub(crate) enum ValueToken<'a> {
    /// The tag terminator, `>` or `/>`.
    Terminator {
        /// True iff the terminator was `/>`.
        auto_close: bool,
    },
    /// `=` followed by a value. The `=`, any whitespace after it and the
    /// enclosing quotes are consumed but not part of `value`.
    Value {
        /// The attribute value.
        value: &'a str,
        /// How the value was quoted.
        quote: Quote,
    },
    /// A bare run of name characters: the pending attribute had no value and
    /// this is the next attribute's name.
    NextName(&'a str),
}

/// Probe for input that starts midway through a tag: a run of non-`<`
/// characters immediately followed by `>`, with no `<` before it. Greedy on
/// the `>` (the longest such prefix wins), like the pattern it models.
///
/// Returns the whole prefix, `>` included.
pub(crate) fn starting_inside_tag(input: &str) -> Option<&str> {
    let bytes = input.as_bytes();
    let prefix_len = memchr::memchr(b'<', bytes).unwrap_or(bytes.len());
    let gt = memchr::memrchr(b'>', &bytes[..prefix_len])?;
    Some(&input[..=gt])
}

/// The text pattern: the longest run not containing `<`. Always matches, and
/// may match the empty string.
pub(crate) fn text_run(input: &str) -> &str {
    let len = memchr::memchr(b'<', input.as_bytes()).unwrap_or(input.len());
    &input[..len]
}

/// The tag-open pattern: the literal `<`.
pub(crate) fn tag_open(input: &str) -> bool {
    input.starts_with('<')
}

/// The tag-name-or-comment pattern: an optional leading `/`, then either a
/// markup declaration, a processing instruction, or a run of name characters.
pub(crate) fn tag_name_or_comment(input: &str) -> Option<(TagToken<'_>, usize)> {
    let bytes = input.as_bytes();
    let slash = usize::from(bytes.first() == Some(&b'/'));

    match bytes.get(slash) {
        // markup declaration: shortest run up to and including the next `>`
        Some(b'!') => {
            let gt = memchr::memchr(b'>', &bytes[slash + 1..])?;
            let end = slash + 1 + gt + 1;
            Some((TagToken::Declaration(&input[..end]), end))
        }
        // processing instruction: shortest run up to and including `?>`
        Some(b'?') => {
            let close = memchr::memmem::find(&bytes[slash + 1..], b"?>")?;
            let end = slash + 1 + close + 2;
            Some((TagToken::Declaration(&input[..end]), end))
        }
        _ => {
            let len = tag_name_len(&input[slash..]);
            if len == 0 {
                return None;
            }
            let end = slash + len;
            Some((TagToken::Name(&input[..end]), end))
        }
    }
}

/// The attribute-name pattern: optional leading whitespace, then the tag
/// terminator or an attribute name.
pub(crate) fn attr_name(input: &str) -> Option<Match<'_, AttrToken<'_>>> {
    let ws_len = leading_whitespace(input);
    let whitespace = &input[..ws_len];
    let rest = &input[ws_len..];

    if let Some((auto_close, len)) = terminator(rest) {
        return Some(Match {
            whitespace,
            token: AttrToken::Terminator { auto_close },
            consumed: ws_len + len,
        });
    }

    let len = attr_name_len(rest);
    if len == 0 {
        return None;
    }
    Some(Match {
        whitespace,
        token: AttrToken::Name(&rest[..len]),
        consumed: ws_len + len,
    })
}

/// The value-or-next-attribute pattern: optional leading whitespace, then the
/// tag terminator, `=` plus a (possibly unterminated) quoted or unquoted
/// value, or the next attribute's name.
pub(crate) fn attr_value_or_next(input: &str) -> Option<Match<'_, ValueToken<'_>>> {
    let ws_len = leading_whitespace(input);
    let whitespace = &input[..ws_len];
    let rest = &input[ws_len..];

    if let Some((auto_close, len)) = terminator(rest) {
        return Some(Match {
            whitespace,
            token: ValueToken::Terminator { auto_close },
            consumed: ws_len + len,
        });
    }

    if let Some(after_eq) = rest.strip_prefix('=') {
        let pad = leading_whitespace(after_eq);
        let value_input = &after_eq[pad..];
        let bytes = value_input.as_bytes();

        let (value, quote, len) = match bytes.first().copied() {
            Some(q @ (b'"' | b'\'')) => {
                let quote = if q == b'"' { Quote::Double } else { Quote::Single };
                match memchr::memchr(q, &bytes[1..]) {
                    Some(pos) => (&value_input[1..1 + pos], quote, pos + 2),
                    // unterminated: the value runs to end of input, the
                    // opening quote is still reported
                    None => (&value_input[1..], quote, value_input.len()),
                }
            }
            _ => {
                let len = unquoted_len(value_input);
                if len == 0 {
                    return None;
                }
                (&value_input[..len], Quote::Bare, len)
            }
        };

        return Some(Match {
            whitespace,
            token: ValueToken::Value { value, quote },
            consumed: ws_len + 1 + pad + len,
        });
    }

    let len = attr_name_len(rest);
    if len == 0 {
        return None;
    }
    Some(Match {
        whitespace,
        token: ValueToken::NextName(&rest[..len]),
        consumed: ws_len + len,
    })
}

/// Case-insensitive probe of exactly the first 8 bytes of a captured
/// declaration against `!DOCTYPE`.
pub(crate) fn is_doctype(declaration: &str) -> bool {
    declaration
        .as_bytes()
        .get(..8)
        .is_some_and(|head| head.eq_ignore_ascii_case(b"!DOCTYPE"))
}

/// `>` or `/>`. A lone `/` not followed by `>` is not a terminator.
fn terminator(rest: &str) -> Option<(bool, usize)> {
    if rest.starts_with("/>") {
        Some((true, 2))
    } else if rest.starts_with('>') {
        Some((false, 1))
    } else {
        None
    }
}

fn leading_whitespace(input: &str) -> usize {
    input.len() - input.trim_start().len()
}

fn tag_name_len(s: &str) -> usize {
    s.find(|c: char| !is_name_char(c)).unwrap_or(s.len())
}

/// Letters, digits, `_`, `-` and `:`, Unicode-aware.
fn is_name_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '_' | '-' | ':')
}

/// Anything up to whitespace, `=`, `/` or `>`.
fn attr_name_len(s: &str) -> usize {
    s.find(|c: char| c.is_whitespace() || matches!(c, '=' | '/' | '>'))
        .unwrap_or(s.len())
}

/// Anything up to whitespace or `>`.
fn unquoted_len(s: &str) -> usize {
    s.find(|c: char| c.is_whitespace() || c == '>').unwrap_or(s.len())
}
