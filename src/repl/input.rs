//! Input Tokenizer
//!
//! Normalizes one raw line from the prompt into command words.

/// Lowercases, trims, and splits a line on whitespace.
pub fn clean_input(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}
