// Unit tests for profanity masking and the sanitization pipeline.
//
// Masking is tested against the default blocked-word set. Sanitizer tests use
// a fixed-score scorer so the redaction cutoff can be tested exactly.

use cybertron::moderation::profanity::{ProfanitySet, DEFAULT_BLOCKED_WORDS};
use cybertron::moderation::sanitize::{redact, Sanitizer};
use cybertron::sentiment::lexicon::LexiconScorer;
use cybertron::sentiment::traits::{PolarityScores, SentimentScorer};

/// Scorer that returns the same compound score for every text.
struct FixedScorer(f64);

impl SentimentScorer for FixedScorer {
    fn polarity_scores(&self, _text: &str) -> PolarityScores {
        PolarityScores {
            compound: self.0,
            ..PolarityScores::default()
        }
    }
}

// ============================================================
// ProfanitySet: masking
// ============================================================

#[test]
fn default_set_has_built_in_words() {
    let set = ProfanitySet::default();
    assert_eq!(set.len(), DEFAULT_BLOCKED_WORDS.len());
    for word in DEFAULT_BLOCKED_WORDS {
        assert!(set.contains(word));
    }
}

#[test]
fn masking_is_case_insensitive() {
    let set = ProfanitySet::default();
    assert_eq!(set.mask_profanity("stop the WAR now"), "stop the *** now");
    assert_eq!(set.mask_profanity("Iran and Russia"), "**** and ******");
}

#[test]
fn masking_replaces_war_in_hate_sentence() {
    let set = ProfanitySet::default();
    assert_eq!(set.mask_profanity("I hate this war"), "I hate this ***");
}

#[test]
fn clean_text_is_unchanged() {
    let set = ProfanitySet::default();
    let text = "the weather is lovely today";
    assert_eq!(set.mask_profanity(text), text);
}

#[test]
fn empty_input_yields_empty_output() {
    let set = ProfanitySet::default();
    assert_eq!(set.mask_profanity(""), "");
    assert_eq!(set.mask_profanity("   "), "");
}

#[test]
fn word_count_is_preserved() {
    let set = ProfanitySet::default();
    let inputs = [
        "war war war",
        "  spaced   out\twar\nhere ",
        "nothing to see",
        "ukraine",
    ];
    for input in inputs {
        let masked = set.mask_profanity(input);
        assert_eq!(
            masked.split_whitespace().count(),
            input.split_whitespace().count(),
            "Word count changed for {input:?}"
        );
    }
}

#[test]
fn punctuation_attached_to_word_is_not_a_match() {
    // Matching is per whitespace token, so "war!" is a different token
    let set = ProfanitySet::default();
    assert_eq!(set.mask_profanity("no war!"), "no war!");
}

#[test]
fn extra_words_are_masked() {
    let set = ProfanitySet::with_extra(["darn"]);
    assert_eq!(set.mask_profanity("Darn it"), "**** it");
    assert!(set.contains("war"), "Defaults are kept alongside extras");
}

#[test]
fn contains_profanity_detects_any_token() {
    let set = ProfanitySet::default();
    assert!(set.contains_profanity("news about Ukraine today"));
    assert!(!set.contains_profanity("news about the weather"));
    assert!(!set.contains_profanity(""));
}

// ============================================================
// Sanitizer: redaction cutoff
// ============================================================

#[test]
fn negative_comment_is_fully_redacted() {
    let sanitizer = Sanitizer::default();
    let masked = sanitizer.mask_bad_comment("you are all wrong", &FixedScorer(-0.5));
    assert_eq!(masked, "*".repeat(17));
    assert_eq!(masked.chars().count(), "you are all wrong".chars().count());
}

#[test]
fn slightly_negative_comment_is_redacted_even_if_neutral_label() {
    // -0.03 sits inside the Neutral band but below the 0.0 redaction cutoff
    let sanitizer = Sanitizer::default();
    assert_eq!(sanitizer.mask_bad_comment("meh", &FixedScorer(-0.03)), "***");
}

#[test]
fn zero_score_is_not_redacted() {
    let sanitizer = Sanitizer::default();
    assert_eq!(
        sanitizer.mask_bad_comment("talk about war", &FixedScorer(0.0)),
        "talk about ***"
    );
}

#[test]
fn non_negative_comment_equals_profanity_mask() {
    let sanitizer = Sanitizer::default();
    let text = "peace after the war";
    assert_eq!(
        sanitizer.mask_bad_comment(text, &FixedScorer(0.4)),
        sanitizer.profanity.mask_profanity(text)
    );
}

#[test]
fn custom_cutoff_changes_redaction() {
    let sanitizer = Sanitizer::new(ProfanitySet::default(), -0.5);
    assert_eq!(sanitizer.mask_bad_comment("meh", &FixedScorer(-0.3)), "meh");
    assert_eq!(sanitizer.mask_bad_comment("ugh", &FixedScorer(-0.6)), "***");
}

#[test]
fn redaction_counts_characters() {
    assert_eq!(redact("héllo"), "*****");
    assert_eq!(redact(""), "");
}

#[test]
fn hate_war_scenario_with_lexicon_scorer() {
    let sanitizer = Sanitizer::default();
    let scorer = LexiconScorer::default();
    let input = "I hate this war";

    assert!(scorer.compound(input) < 0.0);
    let masked = sanitizer.mask_bad_comment(input, &scorer);
    assert_eq!(masked, "*".repeat(input.chars().count()));
    assert_eq!(masked.len(), 15);
}

#[test]
fn positive_comment_with_blocked_word_keeps_other_words() {
    let sanitizer = Sanitizer::default();
    let scorer = LexiconScorer::default();
    let input = "I love peace and war";

    assert!(scorer.compound(input) > 0.0);
    assert_eq!(
        sanitizer.mask_bad_comment(input, &scorer),
        "I love peace and ***"
    );
}
