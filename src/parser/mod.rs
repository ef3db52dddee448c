//! Command Line Tokenizer
//!
//! Turns a raw input line into a command name, arguments, and a flag set.
//! History event tokens of the form `!<n>` are expanded against the session
//! history before anything else; `-<letters>` groups are lifted out of the
//! word list into the flag set wherever they appear.

use indexmap::IndexSet;
use lazy_static::lazy_static;
use regex_lite::Regex;

lazy_static! {
    static ref EVENT_RE: Regex = Regex::new(r"^!(\d+)$").unwrap();
}

/// A tokenized command line ready for dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub name: String,
    pub args: Vec<String>,
    pub flags: IndexSet<char>,
}

/// Expand `!<n>` event tokens and split the line into words.
///
/// `history` must already contain the line being tokenized as its last
/// entry. A valid event substitutes the referenced line in place of the
/// token and rewrites the last history entry with the expansion; an
/// out-of-range event erases the just-recorded entry and fails.
fn expand_events(line: &str, history: &mut Vec<String>) -> Result<Vec<String>, String> {
    let mut words = Vec::new();
    for token in line.split_whitespace() {
        let Some(caps) = EVENT_RE.captures(token) else {
            words.push(token.to_string());
            continue;
        };

        let number: usize = caps[1].parse().unwrap_or(usize::MAX);
        // The line being entered is already recorded and is not a valid target.
        let last = history.len().saturating_sub(1);
        if number == 0 || number > last {
            history.pop();
            return Err(format!("{}: event not found", token));
        }

        let event = history[number - 1].clone();
        words.extend(event.split_whitespace().map(String::from));
        if let Some(entry) = history.last_mut() {
            *entry = entry.replace(token, &event);
        }
    }
    Ok(words)
}

/// Tokenize a raw line. Returns `Ok(None)` when nothing remains after
/// expansion, and `Err` with a message when a history event is not found.
pub fn tokenize(line: &str, history: &mut Vec<String>) -> Result<Option<Invocation>, String> {
    let words = expand_events(line, history)?;

    let mut flags = IndexSet::new();
    let mut rest = Vec::new();
    for word in words {
        match word.strip_prefix('-') {
            Some(letters) => {
                for c in letters.chars() {
                    if c.is_ascii_alphabetic() {
                        flags.insert(c);
                    }
                }
            }
            None => rest.push(word),
        }
    }

    let mut rest = rest.into_iter();
    let Some(name) = rest.next() else {
        return Ok(None);
    };
    Ok(Some(Invocation { name, args: rest.collect(), flags }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history_of(lines: &[&str]) -> Vec<String> {
        lines.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_plain_command() {
        let mut history = history_of(&["mkdir a b"]);
        let inv = tokenize("mkdir a b", &mut history).unwrap().unwrap();
        assert_eq!(inv.name, "mkdir");
        assert_eq!(inv.args, vec!["a", "b"]);
        assert!(inv.flags.is_empty());
    }

    #[test]
    fn test_flags_extracted_anywhere() {
        let mut history = history_of(&["ls -a docs"]);
        let inv = tokenize("ls -a docs", &mut history).unwrap().unwrap();
        assert_eq!(inv.name, "ls");
        assert_eq!(inv.args, vec!["docs"]);
        assert!(inv.flags.contains(&'a'));

        let mut history = history_of(&["ls docs -la"]);
        let inv = tokenize("ls docs -la", &mut history).unwrap().unwrap();
        assert!(inv.flags.contains(&'l'));
        assert!(inv.flags.contains(&'a'));
    }

    #[test]
    fn test_bare_dash_is_dropped() {
        let mut history = history_of(&["ls - docs"]);
        let inv = tokenize("ls - docs", &mut history).unwrap().unwrap();
        assert_eq!(inv.args, vec!["docs"]);
        assert!(inv.flags.is_empty());
    }

    #[test]
    fn test_blank_line_yields_nothing() {
        let mut history = Vec::new();
        assert_eq!(tokenize("   ", &mut history), Ok(None));
    }

    #[test]
    fn test_event_expansion() {
        let mut history = history_of(&["ls", "mkdir x", "!2"]);
        let inv = tokenize("!2", &mut history).unwrap().unwrap();
        assert_eq!(inv.name, "mkdir");
        assert_eq!(inv.args, vec!["x"]);
        // The recorded entry now holds the expansion, not the event token.
        assert_eq!(history.last().unwrap(), "mkdir x");
    }

    #[test]
    fn test_event_expansion_carries_flags() {
        let mut history = history_of(&["ls -a", "!1"]);
        let inv = tokenize("!1", &mut history).unwrap().unwrap();
        assert_eq!(inv.name, "ls");
        assert!(inv.flags.contains(&'a'));
    }

    #[test]
    fn test_event_out_of_range() {
        let mut history = history_of(&["ls", "!9"]);
        let err = tokenize("!9", &mut history).unwrap_err();
        assert_eq!(err, "!9: event not found");
        // The failed entry is erased from history.
        assert_eq!(history, history_of(&["ls"]));
    }

    #[test]
    fn test_event_zero_is_out_of_range() {
        let mut history = history_of(&["ls", "!0"]);
        let err = tokenize("!0", &mut history).unwrap_err();
        assert_eq!(err, "!0: event not found");
    }

    #[test]
    fn test_current_line_is_not_a_valid_event() {
        // `!1` with only itself recorded cannot refer to itself.
        let mut history = history_of(&["!1"]);
        assert!(tokenize("!1", &mut history).is_err());
        assert!(history.is_empty());
    }

    #[test]
    fn test_non_numeric_event_is_a_plain_word() {
        let mut history = history_of(&["ls !foo"]);
        let inv = tokenize("ls !foo", &mut history).unwrap().unwrap();
        assert_eq!(inv.args, vec!["!foo"]);
    }
}
