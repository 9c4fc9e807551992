use std::fmt::Write as _;

use crate::model::{CssProperty, StyleDefinition};

use super::TransformWarning;

/// Serializes structured styles into a stylesheet.
///
/// Each enabled style with at least one declaration becomes a
/// `selector { ... }` block; blocks are separated by blank lines. Disabled
/// styles and styles without declarations are skipped entirely.
pub fn serialize_styles(styles: &[StyleDefinition]) -> String {
    let mut blocks = Vec::new();

    for style in styles {
        if !style.enabled || style.properties.is_empty() {
            continue;
        }

        let mut block = String::new();
        let _ = writeln!(block, "{} {{", style.selector);
        for property in &style.properties {
            let importance = if property.important { " !important" } else { "" };
            let _ = writeln!(block, "  {}: {}{importance};", property.property, property.value);
        }
        block.push('}');
        blocks.push(block);
    }

    if blocks.is_empty() {
        String::new()
    } else {
        let mut out = blocks.join("\n\n");
        out.push('\n');
        out
    }
}

/// Parses a stylesheet into structured styles.
///
/// The scanner walks the input character by character: comments are removed
/// first, then each `selector { body }` block is extracted with brace-depth
/// tracking. Declarations are split on `;` and at the first `:`; a trailing
/// `!important` sets the importance flag. Malformed pieces become warnings
/// rather than errors, so a partially broken stylesheet still loads.
pub fn parse_stylesheet(input: &str) -> (Vec<StyleDefinition>, Vec<TransformWarning>) {
    let stripped = strip_css_comments(input);
    let mut styles = Vec::new();
    let mut warnings = Vec::new();

    let mut selector = String::new();
    let mut chars = stripped.char_indices();

    while let Some((offset, ch)) = chars.next() {
        if ch != '{' {
            selector.push(ch);
            continue;
        }

        let selector_text = selector.trim().to_string();
        selector.clear();

        let (body, nested) = consume_block(&mut chars);

        if selector_text.is_empty() {
            warnings.push(TransformWarning::CssMissingSelector { offset });
            continue;
        }
        if nested {
            warnings.push(TransformWarning::CssNestedBlock {
                selector: selector_text,
            });
            continue;
        }

        let properties = parse_declarations(&body, &mut warnings);
        if properties.is_empty() {
            warnings.push(TransformWarning::CssEmptyBlock {
                selector: selector_text,
            });
            continue;
        }

        let mut style = StyleDefinition::new(selector_text.clone(), selector_text);
        style.properties = properties;
        styles.push(style);
    }

    if styles.is_empty() && !stripped.trim().is_empty() {
        warnings.push(TransformWarning::CssNothingParsed);
    }

    (styles, warnings)
}

/// Consumes characters up to the brace closing the current block.
///
/// Returns the block body and whether nested blocks were encountered; the
/// structured model has no representation for nesting, so the caller skips
/// such blocks with a diagnostic.
fn consume_block(chars: &mut std::str::CharIndices<'_>) -> (String, bool) {
    let mut body = String::new();
    let mut depth = 1usize;
    let mut nested = false;

    for (_, ch) in chars.by_ref() {
        match ch {
            '{' => {
                depth += 1;
                nested = true;
                body.push(ch);
            }
            '}' => {
                depth -= 1;
                if depth == 0 {
                    break;
                }
                body.push(ch);
            }
            _ => body.push(ch),
        }
    }

    (body, nested)
}

fn parse_declarations(body: &str, warnings: &mut Vec<TransformWarning>) -> Vec<CssProperty> {
    let mut properties = Vec::new();

    for segment in body.split(';') {
        let segment = segment.trim();
        if segment.is_empty() {
            continue;
        }

        let Some((property, value)) = segment.split_once(':') else {
            warnings.push(TransformWarning::CssMissingColon {
                segment: segment.to_string(),
            });
            continue;
        };

        let mut value = value.trim().to_string();
        let mut important = false;
        if let Some(trimmed) = value.strip_suffix("!important") {
            important = true;
            value = trimmed.trim_end().to_string();
        }

        properties.push(CssProperty {
            property: property.trim().to_string(),
            value,
            important,
        });
    }

    properties
}

fn strip_css_comments(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    let mut in_string: Option<char> = None;

    while let Some(ch) = chars.next() {
        match in_string {
            Some(quote) => {
                if ch == quote {
                    in_string = None;
                }
                result.push(ch);
            }
            None => {
                if ch == '"' || ch == '\'' {
                    in_string = Some(ch);
                    result.push(ch);
                } else if ch == '/' && chars.peek() == Some(&'*') {
                    chars.next();
                    let mut prev = ' ';
                    for c in chars.by_ref() {
                        if prev == '*' && c == '/' {
                            break;
                        }
                        prev = c;
                    }
                } else {
                    result.push(ch);
                }
            }
        }
    }

    result
}
