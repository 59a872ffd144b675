use std::fmt::Write;

use kosh_config::ui::UiConfig;
use kosh_types::{DisplayResult, LoadStatus};

pub fn render_status(status: &LoadStatus) -> String {
    match status {
        LoadStatus::Loading { source, attempt } if *attempt > 1 => {
            format!("Loading dictionary from {source} (attempt {attempt})...\n")
        }
        LoadStatus::Loading { source, .. } => format!("Loading dictionary from {source}...\n"),
        LoadStatus::Ready {
            name,
            entry_count,
            skipped,
        } => {
            let mut line = format!("{name}: {entry_count} entries");
            if *skipped > 0 {
                let _ = write!(line, " ({skipped} malformed records skipped)");
            }
            line.push('\n');
            line
        }
        LoadStatus::Failed { message } => {
            format!("Failed to load dictionary: {message}\nType :retry to try again.\n")
        }
    }
}

/// Result list. Nothing for an empty query, a notice when a real query has no matches.
pub fn render_results(query: &str, results: &[DisplayResult], config: &UiConfig) -> String {
    if query.trim().is_empty() {
        return String::new();
    }
    if results.is_empty() {
        return format!("No matches for \"{}\"\n", query.trim());
    }

    let mut out = String::new();
    for (idx, result) in results.iter().enumerate() {
        let _ = write!(out, "{:>2}. {}", idx + 1, result.headword);
        if config.show_romanization {
            if let Some(roman) = &result.romanization {
                let _ = write!(out, " ({roman})");
            }
        }
        if !result.entry_type.is_empty() {
            let _ = write!(out, " [{}]", result.entry_type);
        }
        let preview = preview(&result.definition, config.preview_chars);
        if !preview.is_empty() {
            let _ = write!(out, " - {preview}");
        }
        out.push('\n');
    }
    out
}

pub fn render_detail(entry: &DisplayResult) -> String {
    let mut out = String::from("----\n");
    let _ = writeln!(out, "{}", entry.headword);
    if let Some(roman) = &entry.romanization {
        let _ = writeln!(out, "  {roman}");
    }
    if !entry.entry_type.is_empty() {
        let _ = writeln!(out, "  type: {}", entry.entry_type);
    }
    if !entry.source.is_empty() {
        let _ = writeln!(out, "  source: {}", entry.source);
    }
    out.push('\n');
    for line in entry.definition.lines() {
        let _ = writeln!(out, "  {line}");
    }
    out.push_str("----\n");
    out
}

pub fn render_help() -> String {
    [
        "Type to search. Commands:",
        "  :N or :select N   show entry N of the list",
        "  :clear            clear the search",
        "  :retry            retry loading the dictionary",
        "  :help             this help",
        "  :quit             exit",
        "  ::text            search for text starting with ':'",
        "",
    ]
    .join("\n")
}

/// First `max_chars` characters of the first line
fn preview(text: &str, max_chars: usize) -> String {
    let first_line = text.lines().next().unwrap_or_default().trim();
    let mut chars = first_line.chars();
    let head: String = chars.by_ref().take(max_chars).collect();
    if chars.next().is_some() {
        format!("{head}...")
    } else {
        head
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(headword: &str, definition: &str) -> DisplayResult {
        DisplayResult {
            position: 0,
            headword: headword.to_string(),
            romanization: None,
            definition: definition.to_string(),
            entry_type: String::new(),
            source: String::new(),
        }
    }

    #[test]
    fn empty_query_renders_nothing() {
        assert_eq!(render_results("  ", &[], &UiConfig::default()), "");
    }

    #[test]
    fn no_matches_only_for_real_queries() {
        assert_eq!(
            render_results(" xyz ", &[], &UiConfig::default()),
            "No matches for \"xyz\"\n"
        );
    }

    #[test]
    fn results_are_numbered_from_one() {
        let mut first = result("आई", "mother");
        first.romanization = Some("āī".into());
        first.entry_type = "noun".into();
        let second = result("आईस", "");

        let out = render_results("आई", &[first, second], &UiConfig::default());
        assert_eq!(out, " 1. आई (āī) [noun] - mother\n 2. आईस\n");
    }

    #[test]
    fn romanization_can_be_hidden() {
        let mut first = result("आई", "");
        first.romanization = Some("āī".into());
        let config = UiConfig {
            show_romanization: false,
            ..Default::default()
        };

        assert_eq!(render_results("आ", &[first], &config), " 1. आई\n");
    }

    #[test]
    fn long_definitions_are_previewed() {
        assert_eq!(preview("abcdef\nsecond line", 3), "abc...");
        assert_eq!(preview("abc", 3), "abc");
        assert_eq!(preview("", 3), "");
    }

    #[test]
    fn failed_status_mentions_retry() {
        let out = render_status(&LoadStatus::Failed {
            message: "File not found: x.json".into(),
        });
        assert!(out.contains("x.json"));
        assert!(out.contains(":retry"));
    }

    #[test]
    fn detail_shows_all_fields() {
        let mut entry = result("आई", "mother\nalso: mom");
        entry.source = "Molesworth".into();
        let out = render_detail(&entry);

        assert!(out.contains("आई\n"));
        assert!(out.contains("source: Molesworth"));
        assert!(out.contains("  also: mom\n"));
    }
}
