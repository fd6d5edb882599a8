//! Block post-processors for recursive template output, plus `dot_escape` for
//! values placed inside DOT double-quoted strings.
//!
//! `indent` and `collapse` are meant to be used as filter sections around the
//! output of recursive macros:
//!
//! ```text
//! {% filter indent %}{{ self::node(node=child) }}{% endfilter %}
//! {% filter collapse %}
//!   <TABLE>
//!     <TR><TD>x</TD></TR>
//!   </TABLE>
//! {% endfilter %}
//! ```
//!
//! If the section body fails to render, Tera never calls the filter, so no
//! partial output reaches the enclosing template.

use std::collections::HashMap;
use tera::{Tera, Value};

/// Padding applied by `indent` without a `padding` argument.
pub const DEFAULT_PADDING: &str = "  ";

/// Lines of `text`, accepting `\r\n`, without trailing empty lines.
fn split_lines(text: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = text.lines().collect();
    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    lines
}

/// Prefix every line with `padding` and terminate every line, the last included.
///
/// ```rust
/// use deptree_cli::templating::directives::indent;
///
/// assert_eq!(indent("a\nb", "  "), "  a\n  b\n");
/// ```
pub fn indent(text: &str, padding: &str) -> String {
    split_lines(text).into_iter().fold(String::with_capacity(text.len()), |mut out, line| {
        out.push_str(padding);
        out.push_str(line);
        out.push('\n');
        out
    })
}

/// Join all lines trimmed, keeping only the first line's leading whitespace.
///
/// ```rust
/// use deptree_cli::templating::directives::collapse;
///
/// assert_eq!(collapse("  <x>\n    <y/>\n  </x>"), "  <x><y/></x>\n");
/// ```
pub fn collapse(text: &str) -> String {
    let lines = split_lines(text);
    let Some(first) = lines.first() else {
        return String::new();
    };

    let mut out: String = first.chars().take_while(|c| c.is_whitespace()).collect();
    for line in &lines {
        out.push_str(line.trim());
    }
    out.push('\n');
    out
}

/// Escape `text` for use inside a DOT double-quoted string.
///
/// ```rust
/// use deptree_cli::templating::directives::dot_escape;
///
/// assert_eq!(dot_escape(r#"a "b" \ c"#), r#"a \"b\" \\ c"#);
/// ```
pub fn dot_escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '"' | '\\' => {
                out.push('\\');
                out.push(c);
            }
            '\n' => out.push_str("\\n"),
            '\r' => {}
            _ => out.push(c),
        }
    }
    out
}

fn body<'a>(value: &'a Value, filter: &str) -> tera::Result<&'a str> {
    value
        .as_str()
        .ok_or_else(|| tera::Error::msg(format!("Filter `{filter}` requires a string, got {value}")))
}

/// Tera filter: `indent(padding="  ")`.
pub fn indent_filter(value: &Value, args: &HashMap<String, Value>) -> tera::Result<Value> {
    let text = body(value, "indent")?;
    let padding = match args.get("padding") {
        Some(padding) => padding
            .as_str()
            .ok_or_else(|| tera::Error::msg("Filter `indent` expects `padding` to be a string"))?,
        None => DEFAULT_PADDING,
    };
    Ok(Value::String(indent(text, padding)))
}

/// Tera filter: `collapse`.
pub fn collapse_filter(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    let text = body(value, "collapse")?;
    Ok(Value::String(collapse(text)))
}

/// Tera filter: `dot_escape`.
pub fn dot_escape_filter(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    let text = body(value, "dot_escape")?;
    Ok(Value::String(dot_escape(text)))
}

/// Register the directives on a Tera instance.
pub fn register(tera: &mut Tera) {
    tera.register_filter("indent", indent_filter);
    tera.register_filter("collapse", collapse_filter);
    tera.register_filter("dot_escape", dot_escape_filter);
}
