// Shared prompt fragments.
// Each operation that needs LLM calls keeps its own templates in generation/prompts.rs.
// This file holds the cross-cutting pieces they all reuse.

/// Placeholder interpolated for any blank profile field.
pub const MISSING_FIELD: &str = "N/A";

/// Output-format instruction placed near the top of every document prompt.
pub const NO_CODE_BLOCKS: &str =
    "IMPORTANT: Do NOT wrap output in code blocks. Output plain markdown text only.";

/// Output-format instruction for plain-text documents (cover letters).
pub const PLAIN_TEXT_ONLY: &str = "IMPORTANT: Output plain text only, no code blocks.";

/// Returns `value` trimmed, or `fallback` when it is blank.
pub fn or_default<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        fallback
    } else {
        trimmed
    }
}

/// Returns `value` trimmed, or `"N/A"` when it is blank.
pub fn or_na(value: &str) -> &str {
    or_default(value, MISSING_FIELD)
}

/// Substitutes `{key}` placeholders in a single left-to-right pass.
///
/// Inserted values are never rescanned, so user text containing braces is
/// copied verbatim. Unknown placeholders are left as written.
pub fn fill(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len() + 256);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let replaced = after.find('}').and_then(|close| {
            let key = &after[..close];
            values
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| (*v, close))
        });
        match replaced {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_single_pass() {
        let out = fill("Hi {name}, role {role}", &[("name", "{role}"), ("role", "Dev")]);
        assert_eq!(out, "Hi {role}, role Dev");
    }

    #[test]
    fn test_fill_keeps_unknown_and_unclosed_braces() {
        assert_eq!(fill("{x} {y", &[("z", "1")]), "{x} {y");
    }

    #[test]
    fn test_or_na_replaces_blank() {
        assert_eq!(or_na("   "), "N/A");
        assert_eq!(or_na(""), "N/A");
        assert_eq!(or_na(" Rust "), "Rust");
    }
}
