use chrono::Utc;
use serde_json::Value;

use super::TransformError;

/// Strips `//` and `/* */` comments from JSONC content.
///
/// Text inside string literals is preserved, including escaped quotes, so a
/// value like `"// not a comment"` survives untouched. Newlines ending
/// single-line comments are kept to preserve line numbers in parser errors.
pub fn strip_jsonc_comments(content: &str) -> String {
    let mut result = String::with_capacity(content.len());
    let mut chars = content.chars().peekable();
    let mut in_string = false;
    let mut escape_next = false;

    while let Some(ch) = chars.next() {
        if ch == '"' && !escape_next {
            in_string = !in_string;
            result.push(ch);
            continue;
        }

        if ch == '\\' && in_string {
            escape_next = !escape_next;
            result.push(ch);
            continue;
        }
        escape_next = false;

        if !in_string {
            if ch == '/' && chars.peek() == Some(&'/') {
                chars.next();
                for c in chars.by_ref() {
                    if c == '\n' {
                        result.push(c);
                        break;
                    }
                }
                continue;
            }

            if ch == '/' && chars.peek() == Some(&'*') {
                chars.next();
                let mut prev = ' ';
                for c in chars.by_ref() {
                    if prev == '*' && c == '/' {
                        break;
                    }
                    prev = c;
                }
                continue;
            }
        }

        result.push(ch);
    }

    result
}

/// Parses JSONC content into a JSON value.
///
/// # Errors
/// Returns [`TransformError::Parse`] if the content is not valid JSON after
/// comment stripping.
pub fn parse_jsonc(content: &str) -> Result<Value, TransformError> {
    let stripped = strip_jsonc_comments(content);
    serde_json::from_str(&stripped).map_err(|e| TransformError::Parse {
        details: e.to_string(),
    })
}

/// Prepends the generated-file header to serialized native JSON.
///
/// Waybar accepts JSONC, so saved files carry a comment identifying the
/// generator and write time.
pub fn with_generated_header(json: &str) -> String {
    format!(
        "// Waybar configuration\n// Generated by barforge on {}\n{json}",
        Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    )
}
