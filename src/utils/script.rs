use std::fmt::Write;

/// Renders `value` as a single-quoted JavaScript string literal that is also
/// safe inside an HTML `<script>` element.
///
/// Double quotes are left alone so JSON payloads stay readable in the page.
pub fn js_string_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('\'');
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '<' | '>' | '&' | '\u{2028}' | '\u{2029}' => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c if c.is_control() => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('\'');
    out
}

/// A JavaScript array literal of string literals.
pub fn js_string_array(values: &[String]) -> String {
    let items: Vec<String> = values.iter().map(|v| js_string_literal(v)).collect();
    format!("[{}]", items.join(", "))
}
