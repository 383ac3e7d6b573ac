// Unit tests for the session log, export formats and the text chart.
//
// File tests write into temporary directories so nothing touches the
// working directory.

use cybertron::analysis::Analysis;
use cybertron::output::chart::{render_chart, CHART_TITLE, MAX_POINTS};
use cybertron::output::truncate_chars;
use cybertron::sentiment::label::SentimentLabel;
use cybertron::sentiment::lexicon::LexiconScorer;
use cybertron::session::export::{
    autosave, render_blocks, render_history, write_csv, write_text, CSV_HEADER,
};
use cybertron::session::models::CommentRecord;
use cybertron::session::{Session, ThresholdWarning, DEFAULT_NEGATIVE_LIMIT};

fn record(original: &str, masked: &str, language: &str, sentiment: SentimentLabel) -> CommentRecord {
    CommentRecord::new(
        original,
        Analysis {
            masked: masked.to_string(),
            sentiment,
            language: language.to_string(),
        },
    )
}

// ============================================================
// Session: counting and threshold
// ============================================================

#[test]
fn new_session_is_empty() {
    let session = Session::default();
    assert!(session.is_empty());
    assert_eq!(session.negative_limit(), DEFAULT_NEGATIVE_LIMIT);
    assert!(session.threshold_warning().is_none());
}

#[test]
fn append_preserves_order() {
    let mut session = Session::new(3);
    session.append(record("first", "first", "en", SentimentLabel::Neutral));
    session.append(record("second", "second", "en", SentimentLabel::Positive));

    let originals: Vec<&str> = session.records().iter().map(|r| r.original.as_str()).collect();
    assert_eq!(originals, vec!["first", "second"]);
    assert_eq!(session.records().last().map(|r| r.sentiment), Some(SentimentLabel::Positive));
    assert_eq!(session.len(), 2);
}

#[test]
fn negative_count_ignores_other_labels() {
    let mut session = Session::new(3);
    session.append(record("a", "*", "en", SentimentLabel::Negative));
    session.append(record("b", "b", "en", SentimentLabel::Neutral));
    session.append(record("c", "c", "Unknown", SentimentLabel::Error));
    session.append(record("d", "*", "en", SentimentLabel::Negative));
    assert_eq!(session.negative_count(), 2);
    assert!(session.threshold_warning().is_none());
}

#[test]
fn warning_fires_at_limit_and_keeps_firing() {
    let mut session = Session::new(3);
    for _ in 0..2 {
        session.append(record("bad", "***", "en", SentimentLabel::Negative));
    }
    assert!(session.threshold_warning().is_none());

    session.append(record("bad", "***", "en", SentimentLabel::Negative));
    assert_eq!(
        session.threshold_warning(),
        Some(ThresholdWarning {
            negative_count: 3,
            limit: 3
        })
    );

    // A non-negative comment after the limit still re-triggers
    session.append(record("fine", "fine", "en", SentimentLabel::Positive));
    assert!(session.threshold_warning().is_some());
}

#[test]
fn warning_message_mentions_counts() {
    let warning = ThresholdWarning {
        negative_count: 4,
        limit: 3,
    };
    let message = warning.message();
    assert!(message.contains('4'));
    assert!(message.contains("24 hours"));
}

#[test]
fn sentiment_series_is_recomputed_from_originals() {
    let mut session = Session::new(3);
    session.append(record("I love this", "I love this", "en", SentimentLabel::Positive));
    session.append(record("I hate this war", "***************", "en", SentimentLabel::Negative));
    session.append(record("The table is wooden", "The table is wooden", "en", SentimentLabel::Neutral));

    let series = session.sentiment_series(&LexiconScorer::default());
    assert_eq!(series.len(), 3);
    assert!(series[0] > 0.0);
    assert!(series[1] < 0.0);
    assert_eq!(series[2], 0.0);
}

// ============================================================
// Export: text blocks
// ============================================================

#[test]
fn history_view_omits_sentiment() {
    let records = vec![record("hi war", "hi ***", "en", SentimentLabel::Neutral)];
    assert_eq!(
        render_history(&records),
        "Original: hi war\nMasked: hi ***\nLanguage: en\n\n"
    );
}

#[test]
fn saved_blocks_include_sentiment() {
    let records = vec![
        record("hi war", "hi ***", "en", SentimentLabel::Neutral),
        record("hola", "hola", "es", SentimentLabel::Positive),
    ];
    assert_eq!(
        render_blocks(&records),
        "Original: hi war\nMasked: hi ***\nLanguage: en\nSentiment: Neutral\n\n\
         Original: hola\nMasked: hola\nLanguage: es\nSentiment: Positive\n\n"
    );
}

#[test]
fn empty_history_renders_nothing() {
    assert_eq!(render_history(&[]), "");
    assert_eq!(render_blocks(&[]), "");
}

#[test]
fn write_text_overwrites_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.txt");
    std::fs::write(&path, "stale contents").unwrap();

    let records = vec![record("ok", "ok", "en", SentimentLabel::Positive)];
    write_text(&records, &path).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert_eq!(content, render_blocks(&records));
}

#[test]
fn write_text_to_missing_directory_errors() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("history.txt");
    let err = write_text(&[], &path).unwrap_err();
    assert!(err.to_string().contains("Failed to write history"));
}

// ============================================================
// Export: CSV
// ============================================================

#[test]
fn csv_has_header_and_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.csv");
    let records = vec![
        record("hi war", "hi ***", "en", SentimentLabel::Neutral),
        record("I hate it", "*********", "en", SentimentLabel::Negative),
    ];
    write_csv(&records, &path).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[0], CSV_HEADER.join(","));
    assert_eq!(lines[0], "Original Comment,Masked Comment,Language,Sentiment");
    assert_eq!(lines[1], "hi war,hi ***,en,Neutral");
    assert_eq!(lines[2], "I hate it,*********,en,Negative");
    assert_eq!(lines.len(), 3);
}

#[test]
fn csv_quotes_fields_with_commas_and_quotes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.csv");
    let records = vec![record(
        "Hello, \"world\"",
        "Hello, \"world\"",
        "en",
        SentimentLabel::Neutral,
    )];
    write_csv(&records, &path).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("\"Hello, \"\"world\"\"\""));
}

#[test]
fn csv_for_empty_session_is_header_only() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.csv");
    write_csv(&[], &path).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert_eq!(content.lines().count(), 1);
}

// ============================================================
// Auto-save
// ============================================================

#[test]
fn autosave_skips_empty_session() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("auto_saved_history.txt");

    assert!(!autosave(&[], &path).unwrap());
    assert!(!path.exists());
}

#[test]
fn autosave_writes_block_format() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("auto_saved_history.txt");
    let records = vec![record("hey", "hey", "en", SentimentLabel::Neutral)];

    assert!(autosave(&records, &path).unwrap());
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "Original: hey\nMasked: hey\nLanguage: en\nSentiment: Neutral\n\n"
    );
}

// ============================================================
// Chart
// ============================================================

/// Plot rows (below the title): the first `height` lines after it.
fn plot_rows(chart: &str, height: usize) -> Vec<String> {
    chart.lines().skip(1).take(height).map(str::to_string).collect()
}

/// Row index holding the marker for point `i`, if any.
fn marker_row(rows: &[String], i: usize) -> Option<usize> {
    // Rows look like "{label:5} |{plot}", so the plot starts at column 7
    let col = 7 + i * 2;
    rows.iter().position(|row| row.chars().nth(col) == Some('o'))
}

#[test]
fn empty_chart_has_title_and_message() {
    let chart = render_chart(&[], 9);
    assert!(chart.starts_with(CHART_TITLE));
    assert!(chart.contains("no comments yet"));
}

#[test]
fn higher_scores_plot_on_higher_rows() {
    let chart = render_chart(&[0.9, -0.9, 0.0], 9);
    let rows = plot_rows(&chart, 9);

    let first = marker_row(&rows, 0).unwrap();
    let second = marker_row(&rows, 1).unwrap();
    let third = marker_row(&rows, 2).unwrap();
    assert!(first < third && third < second);
    assert_eq!(third, 4, "Zero should land on the middle row");
}

#[test]
fn chart_axis_labels() {
    let chart = render_chart(&[0.5], 9);
    assert!(chart.contains(" 1.00 |"));
    assert!(chart.contains("-1.00 |"));
    assert!(chart.contains("Comment Count: 0..0"));
    assert!(chart.contains("Sentiment Score"));
}

#[test]
fn chart_keeps_most_recent_points() {
    let series: Vec<f64> = (0..100).map(|i| if i % 2 == 0 { 0.5 } else { -0.5 }).collect();
    let chart = render_chart(&series, 9);
    assert!(chart.contains(&format!("Comment Count: {}..99", 100 - MAX_POINTS)));
}

// ============================================================
// truncate_chars
// ============================================================

#[test]
fn truncate_chars_respects_utf8() {
    assert_eq!(truncate_chars("héllo wörld", 5), "héllo...");
    assert_eq!(truncate_chars("short", 10), "short");
}
