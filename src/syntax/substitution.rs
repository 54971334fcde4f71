//! Argument substitution and the nested-delimiter-aware splitting primitives.
//!
//! These are the leaf utilities nearly every other component calls back into:
//! document arguments, macro-private arguments, attribute tokenization, and
//! `name=value` splitting all come through here.

use std::collections::HashMap;

use crate::syntax::Syntax;

// ---------------------------------------------------------------------------
// Argument substitution
// ---------------------------------------------------------------------------

/// Replace every recognized `{name}` placeholder in `content` with its bound
/// value.
///
/// Single left-to-right scan. On an opening delimiter the scanner
/// speculatively accumulates a candidate name until a closing delimiter whose
/// accumulated name is present in `arguments`; the replacement is emitted and
/// scanning resumes after that closing delimiter. A closing delimiter whose
/// candidate is *not* bound joins the candidate and scanning continues, so
/// overlapping placeholders are still considered. If no bound candidate is
/// ever found (including an unterminated placeholder), the opening delimiter
/// is emitted literally and scanning resumes one character past it.
///
/// Replacement values are never re-scanned, and name lookup is exact-match
/// (case-sensitive).
pub fn substitute(content: &str, arguments: &HashMap<String, String>, syntax: &Syntax) -> String {
    let chars: Vec<char> = content.chars().collect();
    let mut output = String::with_capacity(content.len());
    let mut index = 0;

    'main: while index < chars.len() {
        let character = chars[index];
        if character == syntax.argument_open {
            let mut candidate = String::new();
            for (scan, &scanned) in chars.iter().enumerate().skip(index + 1) {
                if scanned == syntax.argument_close {
                    if let Some(value) = arguments.get(&candidate) {
                        output.push_str(value);
                        index = scan + 1;
                        continue 'main;
                    }
                }
                candidate.push(scanned);
            }
        }
        output.push(character);
        index += 1;
    }
    output
}

// ---------------------------------------------------------------------------
// Splitting primitives
// ---------------------------------------------------------------------------

/// Split `content` on the first occurrence of `separator`.
///
/// When the separator does not occur, the first part is the whole content and
/// the second is empty. Both parts are always returned.
pub fn split_in_two<'a>(content: &'a str, separator: &str) -> (&'a str, &'a str) {
    match content.find(separator) {
        Some(at) => (&content[..at], &content[at + separator.len()..]),
        None => (content, ""),
    }
}

/// Split raw tag data into attribute tokens.
///
/// Separators nested inside argument-placeholder delimiters or double quotes
/// do not split; quotes are kept on the token so value parsing can strip them
/// later. Empty tokens (runs of separators) are dropped.
pub fn split_attributes(raw: &str, syntax: &Syntax) -> Vec<String> {
    split_top_level(raw, syntax, Syntax::is_attribute_separator)
}

/// Split an array literal on the array separator, with the same nesting and
/// quoting rules as [`split_attributes`].
pub fn split_array(raw: &str, syntax: &Syntax) -> Vec<String> {
    split_top_level(raw, syntax, |syntax, c| c == syntax.array_separator)
}

fn split_top_level(
    raw: &str,
    syntax: &Syntax,
    is_separator: impl Fn(&Syntax, char) -> bool,
) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut placeholder_depth = 0usize;
    let mut in_quotes = false;

    for c in raw.chars() {
        if c == syntax.quotation {
            in_quotes = !in_quotes;
            current.push(c);
            continue;
        }
        if !in_quotes {
            if c == syntax.argument_open {
                placeholder_depth += 1;
            } else if c == syntax.argument_close {
                placeholder_depth = placeholder_depth.saturating_sub(1);
            } else if placeholder_depth == 0 && is_separator(syntax, c) {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
                continue;
            }
        }
        current.push(c);
    }
    if !current.is_empty() {
        tokens.push(current);
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arguments(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn replaces_bound_placeholders() {
        let syntax = Syntax::default();
        let args = arguments(&[("name", "world")]);
        assert_eq!(substitute("hello {name}!", &args, &syntax), "hello world!");
    }

    #[test]
    fn idempotent_without_placeholders() {
        let syntax = Syntax::default();
        let args = arguments(&[("name", "world")]);
        let text = "no delimiters here at all";
        assert_eq!(substitute(text, &args, &syntax), text);
    }

    #[test]
    fn unknown_placeholders_pass_through() {
        let syntax = Syntax::default();
        let args = arguments(&[("known", "yes")]);
        assert_eq!(
            substitute("{unknown} {known}", &args, &syntax),
            "{unknown} yes"
        );
    }

    #[test]
    fn unterminated_placeholder_passes_through() {
        let syntax = Syntax::default();
        let args = arguments(&[("a", "1")]);
        assert_eq!(substitute("tail {a", &args, &syntax), "tail {a");
    }

    #[test]
    fn replacement_values_are_not_rescanned() {
        let syntax = Syntax::default();
        let args = arguments(&[("x", "{x}")]);
        // One replacement per occurrence, never infinite expansion.
        assert_eq!(substitute("{x}{x}", &args, &syntax), "{x}{x}");
    }

    #[test]
    fn overlapping_candidates_are_considered() {
        let syntax = Syntax::default();
        // First closing brace yields candidate "a" (unbound); the scan keeps
        // going and matches the longer "a}b".
        let args = arguments(&[("a}b", "ok")]);
        assert_eq!(substitute("{a}b}", &args, &syntax), "ok");
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let syntax = Syntax::default();
        let args = arguments(&[("Name", "x")]);
        assert_eq!(substitute("{name}", &args, &syntax), "{name}");
    }

    #[test]
    fn custom_delimiters() {
        let syntax = Syntax {
            argument_open: '%',
            argument_close: '%',
            ..Syntax::default()
        };
        let args = arguments(&[("arg", "value")]);
        assert_eq!(substitute("a %arg% b", &args, &syntax), "a value b");
    }

    #[test]
    fn split_in_two_basic() {
        assert_eq!(split_in_two("a::b::c", "::"), ("a", "b::c"));
    }

    #[test]
    fn split_in_two_missing_separator() {
        assert_eq!(split_in_two("abc", "::"), ("abc", ""));
    }

    #[test]
    fn split_in_two_leading_separator() {
        assert_eq!(split_in_two("=x", "="), ("", "x"));
    }

    #[test]
    fn split_attributes_plain() {
        let syntax = Syntax::default();
        assert_eq!(
            split_attributes("one two  three", &syntax),
            vec!["one", "two", "three"]
        );
    }

    #[test]
    fn split_attributes_skips_placeholder_separators() {
        let syntax = Syntax::default();
        assert_eq!(
            split_attributes("a={x y} b=2", &syntax),
            vec!["a={x y}", "b=2"]
        );
    }

    #[test]
    fn split_attributes_skips_quoted_separators() {
        let syntax = Syntax::default();
        assert_eq!(
            split_attributes("text=\"hello world\" pad=2", &syntax),
            vec!["text=\"hello world\"", "pad=2"]
        );
    }

    #[test]
    fn split_attributes_empty() {
        let syntax = Syntax::default();
        assert!(split_attributes("   ", &syntax).is_empty());
    }

    #[test]
    fn split_array_on_semicolons() {
        let syntax = Syntax::default();
        assert_eq!(split_array("a;b; c", &syntax), vec!["a", "b", " c"]);
        assert_eq!(split_array("\"x;y\";z", &syntax), vec!["\"x;y\"", "z"]);
    }
}
