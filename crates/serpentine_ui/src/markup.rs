//! Markup helpers for colored player names.
//!
//! Player names and colors arrive from other clients via the server, so
//! both are treated as untrusted: names are escaped, colors are only used
//! when they look like a CSS color.

/// HTML-escapes `text` into `out`.
pub fn escape_into(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
}

/// Returns an HTML-escaped copy of `text`.
#[must_use]
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    escape_into(&mut out, text);
    out
}

/// Returns the color if it is safe to place inside a `style` attribute.
///
/// Accepts hex (`#1a2b3c`), named colors and functional notation
/// (`rgb(1, 2, 3)`, `hsl(...)`). Anything else is dropped.
#[must_use]
pub fn sanitize_color(color: &str) -> Option<&str> {
    let color = color.trim();
    if color.is_empty() || color.len() > 64 {
        return None;
    }
    let safe = color
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '#' | '(' | ')' | ',' | '.' | '%' | ' '));
    safe.then_some(color)
}

/// Appends `<span style='color: C'>text</span>` to `out`.
///
/// Without a usable color the span carries no style.
pub fn push_colored(out: &mut String, text: &str, color: Option<&str>) {
    match color.and_then(sanitize_color) {
        Some(color) => {
            out.push_str("<span style='color: ");
            out.push_str(color);
            out.push_str("'>");
        }
        None => out.push_str("<span>"),
    }
    escape_into(out, text);
    out.push_str("</span>");
}

/// Returns a colored span for `text`.
#[must_use]
pub fn colored(text: &str, color: Option<&str>) -> String {
    let mut out = String::with_capacity(text.len() + 32);
    push_colored(&mut out, text, color);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_special_chars() {
        assert_eq!(escape("<b>&\"'"), "&lt;b&gt;&amp;&quot;&#39;");
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn test_colored_span() {
        assert_eq!(
            colored("viper", Some("#00ff00")),
            "<span style='color: #00ff00'>viper</span>"
        );
        assert_eq!(
            colored("viper", Some("rgb(0, 255, 0)")),
            "<span style='color: rgb(0, 255, 0)'>viper</span>"
        );
    }

    #[test]
    fn test_missing_or_hostile_color_degrades() {
        assert_eq!(colored("viper", None), "<span>viper</span>");
        assert_eq!(colored("viper", Some("")), "<span>viper</span>");
        assert_eq!(
            colored("viper", Some("red'><script>")),
            "<span>viper</span>"
        );
    }

    #[test]
    fn test_name_is_escaped() {
        assert_eq!(
            colored("<img>", Some("red")),
            "<span style='color: red'>&lt;img&gt;</span>"
        );
    }
}
