//! Shared text utilities for diagram building
//!
//! Id derivation, label casing and label measurement used across builders.

use std::collections::HashSet;

use unicode_width::UnicodeWidthStr;

/// Derive a node id from an element label: lowercase, spaces become underscores.
///
/// An empty derivation becomes `node` so ids are never blank.
///
/// # Example
/// ```
/// use sketchroute::core::node_id;
///
/// assert_eq!(node_id("Load Balancer"), "load_balancer");
/// ```
pub fn node_id(label: &str) -> String {
    let id = label.to_lowercase().replace(' ', "_");
    if id.is_empty() {
        "node".to_string()
    } else {
        id
    }
}

/// Title-case a label word by word, lowercasing the rest of each word.
///
/// Word boundaries are any non-alphabetic character, so `api-gateway`
/// becomes `Api-Gateway`.
pub fn title_case(label: &str) -> String {
    let mut out = String::with_capacity(label.len());
    let mut at_word_start = true;
    for ch in label.chars() {
        if ch.is_alphabetic() {
            if at_word_start {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(ch);
            at_word_start = true;
        }
    }
    out
}

/// Hands out ids that are unique within one diagram.
///
/// A repeated base id gets a `_2`, `_3`, … suffix.
#[derive(Debug, Default)]
pub struct IdAllocator {
    taken: HashSet<String>,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve an id that was assigned elsewhere (e.g. `__start__`)
    pub fn reserve(&mut self, id: &str) {
        self.taken.insert(id.to_string());
    }

    /// Allocate a unique id derived from `base`
    pub fn allocate(&mut self, base: &str) -> String {
        if self.taken.insert(base.to_string()) {
            return base.to_string();
        }
        let mut n = 2;
        loop {
            let candidate = format!("{}_{}", base, n);
            if self.taken.insert(candidate.clone()) {
                return candidate;
            }
            n += 1;
        }
    }
}

/// Display width of the widest line of a label, in terminal columns
pub fn label_width(label: &str) -> usize {
    label
        .lines()
        .map(UnicodeWidthStr::width)
        .max()
        .unwrap_or(0)
}

/// Wrap text to fit within a maximum width, breaking on word boundaries.
///
/// Returns a vector of lines, each fitting within `max_width` display columns.
/// If `max_width` is 0, or the label fits on one line, returns a single-element vector.
///
/// # Example
/// ```
/// use sketchroute::core::wrap_label;
///
/// let lines = wrap_label("This is a long label", 10);
/// assert_eq!(lines, vec!["This is a", "long label"]);
/// ```
pub fn wrap_label(label: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 || UnicodeWidthStr::width(label) <= max_width {
        return vec![label.to_string()];
    }

    let mut lines = Vec::new();
    let mut current_line = String::new();
    let mut current_width = 0;

    for word in label.split_whitespace() {
        let word_width = UnicodeWidthStr::width(word);

        if current_width == 0 {
            current_line = word.to_string();
            current_width = word_width;
        } else if current_width + 1 + word_width <= max_width {
            current_line.push(' ');
            current_line.push_str(word);
            current_width += 1 + word_width;
        } else {
            lines.push(current_line);
            current_line = word.to_string();
            current_width = word_width;
        }
    }

    if !current_line.is_empty() {
        lines.push(current_line);
    }

    if lines.is_empty() {
        vec![String::new()]
    } else {
        lines
    }
}
