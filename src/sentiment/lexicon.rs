// Rule-based lexicon scorer.
//
// Each token that appears in the lexicon contributes its valence, adjusted by
// the words around it: boosters and dampeners ("very", "slightly"), negations
// within the three preceding words, ALL-CAPS emphasis, and a contrastive "but"
// that shifts weight onto the clause after it. The summed valence is then
// squashed into a compound score in [-1, 1].
//
// The lexicon format is one `word<TAB>valence` entry per line; any further
// tab-separated columns are ignored, so full published lexicons load as-is.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, warn};

use super::traits::{PolarityScores, SentimentScorer};

/// Valence added (or removed) by a booster word like "very".
const B_INCR: f64 = 0.293;
/// Valence removed by a dampener word like "slightly".
const B_DECR: f64 = -0.293;
/// Extra valence for an ALL-CAPS word in otherwise mixed-case text.
const C_INCR: f64 = 0.733;
/// Multiplier applied to a negated word's valence.
const N_SCALAR: f64 = -0.74;
/// Normalization constant for the compound score.
const NORMALIZE_ALPHA: f64 = 15.0;

const BUILTIN_LEXICON: &str = include_str!("lexicon.tsv");

const NEGATIONS: &[&str] = &[
    "aint", "arent", "cannot", "cant", "couldnt", "darent", "didnt", "doesnt", "ain't", "aren't",
    "can't", "couldn't", "daren't", "didn't", "doesn't", "dont", "hadnt", "hasnt", "havent",
    "isnt", "mightnt", "mustnt", "neither", "don't", "hadn't", "hasn't", "haven't", "isn't",
    "mightn't", "mustn't", "neednt", "needn't", "never", "none", "nope", "nor", "not", "nothing",
    "nowhere", "oughtnt", "shant", "shouldnt", "uhuh", "wasnt", "werent", "oughtn't", "shan't",
    "shouldn't", "uh-uh", "wasn't", "weren't", "without", "wont", "wouldnt", "won't", "wouldn't",
    "rarely", "seldom", "despite",
];

const BOOSTERS: &[&str] = &[
    "absolutely", "amazingly", "awfully", "completely", "considerably", "decidedly", "deeply",
    "effing", "enormously", "entirely", "especially", "exceptionally", "extremely", "fabulously",
    "flipping", "flippin", "fricking", "frickin", "frigging", "friggin", "fully", "fucking",
    "greatly", "hella", "highly", "hugely", "incredibly", "intensely", "majorly", "more", "most",
    "particularly", "purely", "quite", "really", "remarkably", "so", "substantially",
    "thoroughly", "totally", "tremendously", "uber", "unbelievably", "unusually", "utterly",
    "very",
];

const DAMPENERS: &[&str] = &[
    "almost", "barely", "hardly", "kinda", "kindof", "kind-of", "less", "little", "marginally",
    "occasionally", "partly", "scarcely", "slightly", "somewhat", "sorta", "sortof", "sort-of",
];

/// Lexicon-based sentiment scorer.
///
/// Runs locally with no API calls. Used when `CYBERTRON_LEXICON_PATH` names a
/// lexicon file; the built-in table covers common and abusive vocabulary but
/// is a sample of the full VADER lexicon, see [`super::vader::VaderScorer`].
#[derive(Debug)]
pub struct LexiconScorer {
    lexicon: HashMap<String, f64>,
}

impl Default for LexiconScorer {
    fn default() -> Self {
        Self::from_tsv(BUILTIN_LEXICON)
    }
}

impl LexiconScorer {
    /// Build a scorer from lexicon text. Malformed lines are skipped.
    pub fn from_tsv(source: &str) -> Self {
        let mut lexicon = HashMap::new();

        for (line_no, line) in source.lines().enumerate() {
            let line = line.trim_end();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let mut columns = line.split('\t');
            let word = columns.next().unwrap_or_default().trim();
            match columns.next().map(|v| v.trim().parse::<f64>()) {
                Some(Ok(valence)) if !word.is_empty() => {
                    lexicon.insert(word.to_lowercase(), valence);
                }
                _ => {
                    warn!(line = line_no + 1, "Skipping malformed lexicon entry");
                }
            }
        }

        Self { lexicon }
    }

    /// Load a lexicon file from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read lexicon from {}", path.display()))?;

        let scorer = Self::from_tsv(&source);
        if scorer.lexicon.is_empty() {
            anyhow::bail!("Lexicon at {} contains no usable entries", path.display());
        }

        debug!(entries = scorer.lexicon.len(), path = %path.display(), "Loaded lexicon");
        Ok(scorer)
    }

    /// Number of words in the lexicon.
    pub fn len(&self) -> usize {
        self.lexicon.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lexicon.is_empty()
    }

    /// The raw valence of a word, if the lexicon knows it.
    pub fn valence(&self, word: &str) -> Option<f64> {
        self.lexicon.get(&word.to_lowercase()).copied()
    }

    fn knows(&self, word: &str) -> bool {
        self.lexicon.contains_key(word)
    }

    /// Valence of the token at `i`, adjusted for its neighbors.
    fn token_valence(&self, tokens: &[String], lower: &[String], i: usize, cap_diff: bool) -> f64 {
        let Some(&base) = self.lexicon.get(&lower[i]) else {
            return 0.0;
        };
        let mut valence = base;

        // A lone "no" before a sentiment word only negates it
        if lower[i] == "no" && i + 1 < lower.len() && self.knows(&lower[i + 1]) {
            valence = 0.0;
        }
        if (i > 0 && lower[i - 1] == "no")
            || (i > 1 && lower[i - 2] == "no")
            || (i > 2 && lower[i - 3] == "no" && (lower[i - 1] == "or" || lower[i - 1] == "nor"))
        {
            valence = base * N_SCALAR;
        }

        if cap_diff && is_all_caps(&tokens[i]) {
            if valence > 0.0 {
                valence += C_INCR;
            } else {
                valence -= C_INCR;
            }
        }

        for start in 0..3 {
            if i <= start {
                break;
            }
            let prev = i - (start + 1);
            if self.knows(&lower[prev]) {
                continue;
            }

            let mut scalar = booster_scalar(&tokens[prev], &lower[prev], valence, cap_diff);
            if start == 1 {
                scalar *= 0.95;
            } else if start == 2 {
                scalar *= 0.9;
            }
            valence += scalar;
            valence = negation_check(valence, lower, start, i);
        }

        self.least_check(valence, lower, i)
    }

    fn least_check(&self, valence: f64, lower: &[String], i: usize) -> f64 {
        if i > 1 && !self.knows(&lower[i - 1]) && lower[i - 1] == "least" {
            if lower[i - 2] != "at" && lower[i - 2] != "very" {
                return valence * N_SCALAR;
            }
        } else if i > 0 && !self.knows(&lower[i - 1]) && lower[i - 1] == "least" {
            return valence * N_SCALAR;
        }
        valence
    }
}

impl SentimentScorer for LexiconScorer {
    fn polarity_scores(&self, text: &str) -> PolarityScores {
        let tokens = tokenize(text);
        let lower: Vec<String> = tokens.iter().map(|t| t.to_lowercase()).collect();
        let cap_diff = has_cap_differential(&tokens);

        let mut sentiments = Vec::with_capacity(tokens.len());
        for i in 0..tokens.len() {
            let word = lower[i].as_str();
            // Boosters carry no sentiment of their own
            if BOOSTERS.contains(&word) || DAMPENERS.contains(&word) {
                sentiments.push(0.0);
                continue;
            }
            if word == "kind" && lower.get(i + 1).is_some_and(|next| next == "of") {
                sentiments.push(0.0);
                continue;
            }
            sentiments.push(self.token_valence(&tokens, &lower, i, cap_diff));
        }

        apply_but_contrast(&lower, &mut sentiments);
        score_valence(&sentiments, text)
    }
}

/// Split on whitespace, strip surrounding ASCII punctuation (unless that
/// leaves two characters or fewer), and drop single-character tokens.
fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|token| {
            let stripped = token.trim_matches(|c: char| c.is_ascii_punctuation());
            if stripped.chars().count() <= 2 {
                token
            } else {
                stripped
            }
        })
        .filter(|token| token.chars().count() > 1)
        .map(str::to_string)
        .collect()
}

fn is_all_caps(word: &str) -> bool {
    word.chars().any(char::is_alphabetic) && !word.chars().any(char::is_lowercase)
}

/// True when some, but not all, tokens are ALL-CAPS.
fn has_cap_differential(tokens: &[String]) -> bool {
    let caps = tokens.iter().filter(|t| is_all_caps(t)).count();
    caps > 0 && caps < tokens.len()
}

fn booster_scalar(token: &str, lower: &str, valence: f64, cap_diff: bool) -> f64 {
    let mut scalar = if BOOSTERS.contains(&lower) {
        B_INCR
    } else if DAMPENERS.contains(&lower) {
        B_DECR
    } else {
        return 0.0;
    };

    if valence < 0.0 {
        scalar = -scalar;
    }
    if cap_diff && is_all_caps(token) {
        if valence > 0.0 {
            scalar += C_INCR;
        } else {
            scalar -= C_INCR;
        }
    }
    scalar
}

fn is_negation(word: &str) -> bool {
    NEGATIONS.contains(&word) || word.contains("n't")
}

fn negation_check(valence: f64, lower: &[String], start: usize, i: usize) -> f64 {
    let is_so_or_this = |w: &str| w == "so" || w == "this";

    match start {
        0 => {
            if is_negation(&lower[i - 1]) {
                return valence * N_SCALAR;
            }
        }
        1 => {
            if lower[i - 2] == "never" && is_so_or_this(lower[i - 1].as_str()) {
                return valence * 1.25;
            }
            if lower[i - 2] == "without" && lower[i - 1] == "doubt" {
                return valence;
            }
            if is_negation(&lower[i - 2]) {
                return valence * N_SCALAR;
            }
        }
        2 => {
            if lower[i - 3] == "never"
                && (is_so_or_this(lower[i - 2].as_str()) || is_so_or_this(lower[i - 1].as_str()))
            {
                return valence * 1.25;
            }
            if lower[i - 3] == "without" && (lower[i - 2] == "doubt" || lower[i - 1] == "doubt") {
                return valence;
            }
            if is_negation(&lower[i - 3]) {
                return valence * N_SCALAR;
            }
        }
        _ => {}
    }
    valence
}

/// Halve sentiment before the first "but" and boost it by half after.
fn apply_but_contrast(lower: &[String], sentiments: &mut [f64]) {
    let Some(but_index) = lower.iter().position(|w| w == "but") else {
        return;
    };
    for (idx, sentiment) in sentiments.iter_mut().enumerate() {
        if idx < but_index {
            *sentiment *= 0.5;
        } else if idx > but_index {
            *sentiment *= 1.5;
        }
    }
}

fn punctuation_emphasis(text: &str) -> f64 {
    let exclamations = text.matches('!').count().min(4) as f64 * 0.292;

    let questions = text.matches('?').count();
    let question_emphasis = match questions {
        0 | 1 => 0.0,
        2 | 3 => questions as f64 * 0.18,
        _ => 0.96,
    };

    exclamations + question_emphasis
}

fn normalize(score: f64) -> f64 {
    (score / (score * score + NORMALIZE_ALPHA).sqrt()).clamp(-1.0, 1.0)
}

fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

fn score_valence(sentiments: &[f64], text: &str) -> PolarityScores {
    if sentiments.is_empty() {
        return PolarityScores::default();
    }

    let emphasis = punctuation_emphasis(text);

    let mut sum: f64 = sentiments.iter().sum();
    if sum > 0.0 {
        sum += emphasis;
    } else if sum < 0.0 {
        sum -= emphasis;
    }
    let compound = normalize(sum);

    let mut pos_sum = 0.0;
    let mut neg_sum = 0.0;
    let mut neu_count = 0usize;
    for &s in sentiments {
        if s > 0.0 {
            pos_sum += s + 1.0;
        } else if s < 0.0 {
            neg_sum += s - 1.0;
        } else {
            neu_count += 1;
        }
    }

    if pos_sum > neg_sum.abs() {
        pos_sum += emphasis;
    } else if pos_sum < neg_sum.abs() {
        neg_sum -= emphasis;
    }

    let total = pos_sum + neg_sum.abs() + neu_count as f64;

    PolarityScores {
        neg: round_to((neg_sum / total).abs(), 3),
        neu: round_to(neu_count as f64 / total, 3),
        pos: round_to((pos_sum / total).abs(), 3),
        compound: round_to(compound, 4),
    }
}
