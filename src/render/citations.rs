//! Citation marker resolution

use super::types::Reference;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static CITATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[(\d+)\]").expect("citation pattern is valid"));

/// Rewrite `[N]` markers into markdown links to `refs[N].link`.
///
/// Markers whose index has no reference, or whose reference has no link,
/// are kept as bracketed text, escaped so the markdown pass cannot turn them
/// into a link of their own.
pub fn resolve_citations(text: &str, refs: &[Reference]) -> String {
    CITATION
        .replace_all(text, |caps: &Captures| {
            let link = caps[1]
                .parse::<usize>()
                .ok()
                .and_then(|index| refs.get(index))
                .and_then(|reference| reference.link.as_deref());

            match link {
                Some(link) => format!("[{}]({})", &caps[0], link_destination(link)),
                None => format!("\\[{}\\]", &caps[1]),
            }
        })
        .into_owned()
}

/// Markdown link destination that the parser reads back as exactly `link`.
///
/// Backslashes and `&` are escaped so escape and entity rules leave them alone;
/// whitespace, control characters and angle brackets are percent-encoded.
fn link_destination(link: &str) -> String {
    let mut out = String::with_capacity(link.len());
    for c in link.chars() {
        match c {
            '\\' | '&' => {
                out.push('\\');
                out.push(c);
            }
            '<' | '>' => push_percent_encoded(&mut out, c),
            c if c.is_whitespace() || c.is_control() => push_percent_encoded(&mut out, c),
            c => out.push(c),
        }
    }

    if out.contains(|c| c == '(' || c == ')') {
        format!("<{}>", out)
    } else {
        out
    }
}

fn push_percent_encoded(out: &mut String, c: char) {
    let mut buf = [0u8; 4];
    for byte in c.encode_utf8(&mut buf).bytes() {
        out.push_str(&format!("%{:02X}", byte));
    }
}
