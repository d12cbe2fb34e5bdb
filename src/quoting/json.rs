//! JSON string quoting.

use alloc::string::String;

/// Quotes a value as a JSON string.
///
/// Besides `"` and `\`, the solidus is escaped so the output can be embedded
/// in HTML, and control characters use their short form or `\u00XX`. `None`
/// is rendered as `null`.
#[must_use]
pub fn quote_json(value: Option<&str>) -> String {
    let Some(value) = value else {
        return "null".into();
    };

    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str(r"\\"),
            '/' => out.push_str(r"\/"),
            '\u{8}' => out.push_str(r"\b"),
            '\u{c}' => out.push_str(r"\f"),
            '\n' => out.push_str(r"\n"),
            '\r' => out.push_str(r"\r"),
            '\t' => out.push_str(r"\t"),
            '\u{0}'..='\u{1f}' => {
                let code = u32::from(c);
                out.push_str(r"\u00");
                out.extend(char::from_digit(code >> 4, 16));
                out.extend(char::from_digit(code & 0xf, 16));
            }
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}
