//! Narration text preparation for the downstream synthesis stage.
//!
//! Pure text-to-SSML conversion: glossary-driven pronunciation
//! substitution, pause insertion after punctuation, and a `<speak>` /
//! `<prosody>` wrapper. No audio is produced here.

use std::collections::BTreeMap;

/// Pronunciation override for one glossary term.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct TermPronunciation {
    /// Ready-made SSML replacement for the term; takes precedence over
    /// `alias` when both are present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ssml: Option<String>,
    /// Plain-text replacement read aloud instead of the term.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
}

/// Glossary of domain terms with pronunciation overrides.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct Glossary {
    /// Term spelling → pronunciation override.
    #[serde(default)]
    pub terms: BTreeMap<String, TermPronunciation>,
}

/// Options controlling SSML generation.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct SsmlOptions {
    /// Prosody rate multiplier.
    pub speed: f64,
    /// Pause inserted after sentence-ending punctuation, in milliseconds.
    pub pause_after_sentence_ms: u32,
    /// Pause inserted after clause punctuation, in milliseconds.
    pub pause_after_clause_ms: u32,
}

impl Default for SsmlOptions {
    fn default() -> Self {
        Self {
            speed: 1.0,
            pause_after_sentence_ms: 300,
            pause_after_clause_ms: 150,
        }
    }
}

/// Sentence-ending punctuation, ASCII and CJK forms.
const SENTENCE_ENDERS: [char; 6] = ['.', '!', '?', '。', '！', '？'];

/// Clause punctuation, ASCII and CJK forms.
const CLAUSE_MARKS: [char; 4] = [',', ';', '，', '；'];

/// Convert narration text to SSML.
///
/// Glossary substitution runs first (longest spellings first, so a term
/// never clobbers a longer one containing it), then pauses are inserted
/// after punctuation, then the result is wrapped in `<speak>` and
/// `<prosody>` tags. ASCII sentence enders only count when followed by
/// whitespace or end of text, which keeps decimals like `0.5` intact.
pub fn prepare_ssml(text: &str, glossary: Option<&Glossary>, opts: &SsmlOptions) -> String {
    let mut prepared = text.to_string();

    if let Some(glossary) = glossary {
        let mut spellings: Vec<&String> = glossary.terms.keys().collect();
        spellings.sort_by_key(|s| std::cmp::Reverse(s.chars().count()));
        for spelling in spellings {
            let term = &glossary.terms[spelling];
            let replacement = match (&term.ssml, &term.alias) {
                (Some(ssml), _) => ssml.as_str(),
                (None, Some(alias)) => alias.as_str(),
                (None, None) => continue,
            };
            prepared = prepared.replace(spelling.as_str(), replacement);
        }
    }

    let with_pauses = insert_pauses(&prepared, opts);

    format!(
        "<speak>\n  <prosody rate=\"{}\">\n    {}\n  </prosody>\n</speak>",
        opts.speed, with_pauses
    )
}

fn insert_pauses(text: &str, opts: &SsmlOptions) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    for (i, &c) in chars.iter().enumerate() {
        out.push(c);
        let next_is_boundary = chars
            .get(i + 1)
            .map(|n| n.is_whitespace())
            .unwrap_or(true);
        if SENTENCE_ENDERS.contains(&c) && (!c.is_ascii() || next_is_boundary) {
            out.push_str(&format!("<break time=\"{}ms\"/>", opts.pause_after_sentence_ms));
        } else if CLAUSE_MARKS.contains(&c) && (!c.is_ascii() || next_is_boundary) {
            out.push_str(&format!("<break time=\"{}ms\"/>", opts.pause_after_clause_ms));
        }
    }
    out
}

/// Synthesis cost estimate for a narration text.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CostEstimate {
    /// Number of characters that will be billed.
    pub character_count: usize,
    /// Estimated cost at the given rate.
    pub estimated_cost: f64,
}

/// Estimate synthesis cost at `rate_per_10k_chars` per 10,000 characters.
pub fn estimate_cost(text: &str, rate_per_10k_chars: f64) -> CostEstimate {
    let character_count = text.chars().count();
    CostEstimate {
        character_count,
        estimated_cost: (character_count as f64 / 10_000.0) * rate_per_10k_chars,
    }
}
