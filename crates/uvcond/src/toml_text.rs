// Copyright (c) Contributors to the uvcond project.
// SPDX-License-Identifier: Apache-2.0

//! Bounded TOML value formatting for the recipe and config writers.
//!
//! uvcond only ever writes two fixed-shape documents (recipes and the user
//! config), so this is not a general TOML serializer. Each record type owns
//! its own section layout and leans on these helpers for value syntax.

#[cfg(test)]
#[path = "./toml_text_test.rs"]
mod toml_text_test;

/// Lists whose summed item length exceeds this render one item per line.
const INLINE_LIST_LIMIT: usize = 60;

/// Format a string as a TOML value.
///
/// Strings containing a newline use the multi-line `"""` form, which needs
/// no further escaping; everything else is a basic string with backslash and
/// quote escapes.
pub fn string(value: &str) -> String {
    if value.contains('\n') {
        format!("\"\"\"\n{}\n\"\"\"", value)
    } else {
        let escaped = value.replace('\\', "\\\\").replace('"', "\\\"");
        format!("\"{}\"", escaped)
    }
}

/// Format a list of strings as a TOML array.
///
/// Short lists stay inline; long ones get one item per line for readability.
pub fn string_list(items: &[String]) -> String {
    if items.is_empty() {
        return "[]".to_string();
    }
    let total: usize = items.iter().map(|item| item.len()).sum();
    if total > INLINE_LIST_LIMIT {
        let mut lines = vec!["[".to_string()];
        for item in items {
            lines.push(format!("    {},", string(item)));
        }
        lines.push("]".to_string());
        lines.join("\n")
    } else {
        let inline: Vec<String> = items.iter().map(|item| string(item)).collect();
        format!("[{}]", inline.join(", "))
    }
}
