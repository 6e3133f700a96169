//! Final-answer extraction from raw assistant responses.
//!
//! The assistant runs a ReAct-style loop and may embed its user-facing
//! answer in an `Action: finish(...)` marker. The keyword is
//! case-sensitive; the payload match is dot-all and greedy, so it may
//! span newlines and runs to the last closing paren.

use std::sync::OnceLock;

use regex::Regex;

fn finish_marker() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)Action:\s*finish\((.*)\)").expect("finish marker regex"))
}

/// Extract the displayable answer from a raw response.
///
/// Returns the trimmed `finish` payload when the marker is present and its
/// payload is non-empty; otherwise the raw response unchanged.
#[must_use]
pub fn extract_final_answer(raw: &str) -> &str {
    finish_marker()
        .captures(raw)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .filter(|payload| !payload.is_empty())
        .map_or(raw, str::trim)
}

#[cfg(test)]
#[path = "answer_test.rs"]
mod tests;
