//! Output sanitizer: strips markup before a string reaches the screen.
//!
//! Removes complete tags, the contents of `<script>` and `<style>`
//! elements, stray angle brackets and ASCII control characters. The result
//! never contains `<`, `>` or a control character, so a second pass has
//! nothing left to remove.

/// Elements whose body is dropped along with the tags.
const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

/// Strip markup from `s`.
pub fn sanitize_for_display(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut rest = s;

    while let Some(open) = rest.find('<') {
        push_text(&mut out, &rest[..open]);
        let after = &rest[open + 1..];

        let Some(close) = after.find('>') else {
            // Unterminated '<': drop the bracket, keep scanning.
            rest = after;
            continue;
        };

        let tag = &after[..close];
        rest = &after[close + 1..];
        if let Some(name) = raw_text_element(tag) {
            rest = skip_element_body(rest, name);
        }
    }

    push_text(&mut out, rest);
    out
}

fn push_text(out: &mut String, text: &str) {
    out.extend(text.chars().filter(|c| *c != '>' && !c.is_ascii_control()));
}

/// The raw-text element opened by `tag`, if any.
fn raw_text_element(tag: &str) -> Option<&'static str> {
    let name = tag
        .trim_start()
        .split(|c: char| c.is_whitespace() || c == '/')
        .next()?;
    RAW_TEXT_ELEMENTS
        .iter()
        .copied()
        .find(|el| el.eq_ignore_ascii_case(name))
}

/// Skip past the closing tag of `name`, or to the end if it never closes.
fn skip_element_body<'a>(rest: &'a str, name: &str) -> &'a str {
    // ASCII lowercasing keeps byte offsets aligned with `rest`.
    let lower = rest.to_ascii_lowercase();
    let closing = format!("</{name}");
    match lower.find(&closing) {
        Some(start) => match rest[start..].find('>') {
            Some(end) => &rest[start + end + 1..],
            None => "",
        },
        None => "",
    }
}
