use std::fmt::Write;

use lazy_static::lazy_static;
use regex::Regex;

/// Splits a source into its first line and everything after the first newline.
/// A source without a newline has an empty remainder.
pub fn split_first_line(source: &str) -> (&str, &str) {
    match source.split_once('\n') {
        Some((first, rest)) => (first, rest),
        None => (source, ""),
    }
}

/// Markdown heading line to title. Only one leading `# ` is removed.
pub fn strip_title(line: &str) -> &str {
    let line = line.strip_suffix('\r').unwrap_or(line);
    line.strip_prefix("# ").unwrap_or(line)
}

/// Quotes a value as a TOML string. Literal strings are preferred; values a literal
/// string cannot hold are written as basic strings.
pub fn toml_string(value: &str) -> String {
    let literal_ok = value.chars().all(|c| c != '\'' && (c == '\t' || !c.is_control()));
    if literal_ok {
        return format!("'{}'", value);
    }

    let mut buf = String::with_capacity(value.len() + 2);
    buf.push('"');
    for c in value.chars() {
        match c {
            '"' => buf.push_str("\\\""),
            '\\' => buf.push_str("\\\\"),
            '\n' => buf.push_str("\\n"),
            '\r' => buf.push_str("\\r"),
            '\t' => buf.push_str("\\t"),
            c if c.is_control() => {
                let _ = write!(&mut buf, "\\u{:04X}", c as u32);
            }
            c => buf.push(c),
        }
    }
    buf.push('"');
    buf
}

pub fn toml_string_array(values: &[String]) -> String {
    let items: Vec<String> = values.iter().map(|v| toml_string(v)).collect();
    format!("[{}]", items.join(", "))
}

/// File name friendly version of a title: `Hello, World!` becomes `hello-world`
pub fn slug_from_title(title: &str) -> String {
    lazy_static! {
        static ref SEPARATOR_REGEX: Regex = Regex::new(r"[^a-z0-9]+").unwrap();
    }

    let ascii = unidecode::unidecode(title).to_ascii_lowercase();
    let slug = SEPARATOR_REGEX.replace_all(&ascii, "-");
    slug.trim_matches('-').to_string()
}
