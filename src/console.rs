// Interactive console input and comment submission.
//
// Each input line is either a comment or one of the `:command` words below.
// Anything else starting with a colon, such as ":) nice", is a comment. Submitting a comment
// runs the analyzer, appends the record to the session, and checks the
// negative-comment threshold.

use std::path::PathBuf;

use crate::analysis::CommentAnalyzer;
use crate::session::models::CommentRecord;
use crate::session::{Session, ThresholdWarning};

/// Help text listing the console commands.
pub const HELP: &str = "\
Type a comment and press Enter to submit it.
Commands:
  :history        show the comment history
  :chart          show the sentiment-over-time chart
  :save <path>    save the history as text
  :export <path>  export the history as CSV
  :help           show this message
  :quit           leave the session";

/// One parsed line of console input.
#[derive(Debug, Clone, PartialEq)]
pub enum Input {
    Comment(String),
    History,
    Chart,
    Save(PathBuf),
    Export(PathBuf),
    Help,
    Quit,
    /// Blank line
    Empty,
    /// A known command missing its argument, with a usage message
    Invalid(String),
}

/// Parse a line of console input.
pub fn parse_input(line: &str) -> Input {
    let line = line.trim();
    if line.is_empty() {
        return Input::Empty;
    }

    let Some(command) = line.strip_prefix(':') else {
        return Input::Comment(line.to_string());
    };

    let (name, arg) = match command.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg.trim()),
        None => (command, ""),
    };

    match (name, arg) {
        ("history", _) => Input::History,
        ("chart", _) => Input::Chart,
        ("help", _) => Input::Help,
        ("quit" | "exit" | "q", _) => Input::Quit,
        ("save", "") => Input::Invalid("Usage: :save <path>".to_string()),
        ("export", "") => Input::Invalid("Usage: :export <path>".to_string()),
        ("save", path) => Input::Save(PathBuf::from(path)),
        ("export", path) => Input::Export(PathBuf::from(path)),
        _ => Input::Comment(line.to_string()),
    }
}

/// What a successful submission produced.
#[derive(Debug, Clone)]
pub struct Submission {
    pub record: CommentRecord,
    /// Present whenever the session is at or over the negative limit
    pub warning: Option<ThresholdWarning>,
}

/// Analyze `comment`, record it, and check the threshold.
///
/// Blank comments are ignored and return `None`. Analysis failures still
/// produce a record, carrying the fixed error result.
pub async fn submit(
    analyzer: &CommentAnalyzer,
    session: &mut Session,
    comment: &str,
) -> Option<Submission> {
    let comment = comment.trim();
    if comment.is_empty() {
        return None;
    }

    let analysis = analyzer.analyze_or_fallback(comment).await;
    let record = CommentRecord::new(comment, analysis);
    session.append(record.clone());

    Some(Submission {
        record,
        warning: session.threshold_warning(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_a_comment() {
        assert_eq!(
            parse_input("  hello there  "),
            Input::Comment("hello there".to_string())
        );
    }

    #[test]
    fn test_commands_parse() {
        assert_eq!(parse_input(":history"), Input::History);
        assert_eq!(parse_input(":chart"), Input::Chart);
        assert_eq!(parse_input(":q"), Input::Quit);
        assert_eq!(
            parse_input(":save  out/history.txt "),
            Input::Save(PathBuf::from("out/history.txt"))
        );
        assert_eq!(
            parse_input(":export out.csv"),
            Input::Export(PathBuf::from("out.csv"))
        );
    }

    #[test]
    fn test_missing_path_is_invalid() {
        assert!(matches!(parse_input(":save"), Input::Invalid(_)));
        assert!(matches!(parse_input(":export  "), Input::Invalid(_)));
        assert_eq!(parse_input("   "), Input::Empty);
    }

    #[test]
    fn test_unknown_colon_words_are_comments() {
        assert_eq!(
            parse_input(":) this is great"),
            Input::Comment(":) this is great".to_string())
        );
        assert_eq!(
            parse_input(":frobnicate the thing"),
            Input::Comment(":frobnicate the thing".to_string())
        );
        assert_eq!(parse_input(":-("), Input::Comment(":-(".to_string()));
    }
}
