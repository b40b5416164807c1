//! # Annotation Operations
//!
//! Internal logic for reading Java modifiers: annotations such as
//! `@JsonProperty("id")` and keyword modifiers such as `static`.

use crate::parser::models::Annotation;
use tree_sitter::Node;

/// Returns the source text covered by `node`.
pub(crate) fn node_text<'a>(node: &Node, source: &'a str) -> &'a str {
    source.get(node.byte_range()).unwrap_or("")
}

/// Finds the `modifiers` child of a declaration, if it has one.
fn find_modifiers<'t>(node: &Node<'t>) -> Option<Node<'t>> {
    let mut cursor = node.walk();
    let modifiers = node.children(&mut cursor).find(|c| c.kind() == "modifiers");
    modifiers
}

/// Whether the declaration carries the keyword modifier `keyword` (e.g. `static`).
pub(crate) fn has_modifier(node: &Node, keyword: &str) -> bool {
    let Some(modifiers) = find_modifiers(node) else {
        return false;
    };
    let mut cursor = modifiers.walk();
    let found = modifiers.children(&mut cursor).any(|c| c.kind() == keyword);
    found
}

/// Collects the annotations declared in the modifiers of `node`, in source order.
pub fn extract_annotations(node: &Node, source: &str) -> Vec<Annotation> {
    let Some(modifiers) = find_modifiers(node) else {
        return Vec::new();
    };
    let mut cursor = modifiers.walk();
    let annotations = modifiers
        .children(&mut cursor)
        .filter_map(|child| parse_annotation(&child, source))
        .collect();
    annotations
}

/// Parses a single `annotation` / `marker_annotation` node.
fn parse_annotation(node: &Node, source: &str) -> Option<Annotation> {
    if node.kind() != "annotation" && node.kind() != "marker_annotation" {
        return None;
    }

    let full = node_text(&node.child_by_field_name("name")?, source);
    // `@com.fasterxml.jackson.annotation.JsonProperty` is matched as `JsonProperty`
    let name = full.rsplit('.').next().unwrap_or(full).trim().to_string();

    let value = node
        .child_by_field_name("arguments")
        .and_then(|args| annotation_value(&args, source));

    Some(Annotation { name, value })
}

/// Picks the single value out of an `annotation_argument_list`.
///
/// A positional element wins; otherwise the element keyed `value`.
fn annotation_value(args: &Node, source: &str) -> Option<String> {
    let mut cursor = args.walk();
    let mut keyed = None;

    for child in args.named_children(&mut cursor) {
        match child.kind() {
            "line_comment" | "block_comment" => continue,
            "element_value_pair" => {
                let key = child.child_by_field_name("key").map(|k| node_text(&k, source));
                if key == Some("value") && keyed.is_none() {
                    keyed = child
                        .child_by_field_name("value")
                        .map(|v| literal_value(&v, source));
                }
            }
            _ => return Some(literal_value(&child, source)),
        }
    }

    keyed
}

/// Unquotes and unescapes string literals and keeps any other element verbatim.
fn literal_value(node: &Node, source: &str) -> String {
    let text = node_text(node, source).trim();
    if node.kind() != "string_literal" {
        return text.to_string();
    }
    for quote in ["\"\"\"", "\""] {
        if let Some(inner) = text
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            return unescape(inner);
        }
    }
    text.to_string()
}

/// Decodes Java escape sequences. Malformed escapes are kept as written.
fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('b') => out.push('\u{8}'),
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some('f') => out.push('\u{c}'),
            Some('r') => out.push('\r'),
            Some('s') => out.push(' '),
            Some('"') => out.push('"'),
            Some('\'') => out.push('\''),
            Some('\\') => out.push('\\'),
            // line continuation in text blocks
            Some('\n') => {}
            Some('u') => {
                while chars.peek() == Some(&'u') {
                    chars.next();
                }
                let hex: String = chars.by_ref().take(4).collect();
                match u32::from_str_radix(&hex, 16).ok().and_then(char::from_u32) {
                    Some(decoded) if hex.len() == 4 => out.push(decoded),
                    _ => {
                        out.push_str("\\u");
                        out.push_str(&hex);
                    }
                }
            }
            Some(d @ '0'..='7') => {
                let mut value = d.to_digit(8).unwrap_or(0);
                // at most three digits, and only `\0`..`\377`
                let max_digits = if d <= '3' { 2 } else { 1 };
                for _ in 0..max_digits {
                    match chars.peek().and_then(|n| n.to_digit(8)) {
                        Some(digit) => {
                            value = value * 8 + digit;
                            chars.next();
                        }
                        None => break,
                    }
                }
                out.push(char::from_u32(value).unwrap_or('\u{fffd}'));
            }
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}
