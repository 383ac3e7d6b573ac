// Colored terminal output for analyses, history, warnings and the chart.
//
// This module handles all terminal-specific formatting. The main.rs session
// loop and one-shot commands delegate here.

use colored::Colorize;

use crate::sentiment::label::SentimentLabel;
use crate::sentiment::traits::PolarityScores;
use crate::session::export::render_history;
use crate::session::models::CommentRecord;
use crate::session::ThresholdWarning;

/// Show the masked comment and its label/language line.
pub fn display_analysis(record: &CommentRecord) {
    println!("\n{}", "Blurred Comment (Masked):".bold());
    println!("  {}", record.masked);
    println!(
        "Sentiment: {} | Language: {}",
        colorize_label(record.sentiment),
        record.language
    );
}

/// Show the full session history in the block format.
pub fn display_history(records: &[CommentRecord]) {
    if records.is_empty() {
        println!("No comments yet. Type a comment and press Enter.");
        return;
    }

    println!(
        "\n{}",
        format!("=== Comment History ({} comments) ===", records.len()).bold()
    );
    print!("{}", render_history(records).dimmed());
}

/// Show the compound/proportion breakdown for a single text.
pub fn display_scores(scores: &PolarityScores) {
    let label = SentimentLabel::from_score(scores.compound);
    println!("  Compound: {:>7.4}  ({})", scores.compound, colorize_label(label));
    println!(
        "  {} {:.3}  {} {:.3}  {} {:.3}",
        "pos".green(),
        scores.pos,
        "neu".dimmed(),
        scores.neu,
        "neg".red(),
        scores.neg
    );
}

/// Show the text chart with a bold title line.
pub fn display_chart(chart: &str) {
    let mut lines = chart.lines();
    if let Some(title) = lines.next() {
        println!("\n{}", title.bold());
    }
    for line in lines {
        println!("{}", line.cyan());
    }
}

pub fn display_warning(warning: &ThresholdWarning) {
    println!("\n{} {}", "Warning:".red().bold(), warning.message().red());
}

/// Colorize a sentiment label.
fn colorize_label(label: SentimentLabel) -> colored::ColoredString {
    let text = label.as_str();
    match label {
        SentimentLabel::Positive => text.green(),
        SentimentLabel::Negative => text.red().bold(),
        SentimentLabel::Neutral => text.normal(),
        SentimentLabel::Error => text.yellow(),
    }
}
