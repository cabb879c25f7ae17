//! Username candidate generation.
//!
//! [`generate_candidates`] is a pure function of its options and of the
//! coin flips it draws. Vocabulary selection is a fixed modular scheme on
//! the attempt index; the only non-determinism is whether an attempt keeps
//! its third word, which is delegated to a [`CoinSource`].
//!
//! ```rust
//! use handlegen_core::domain::{GeneratorOptions, UsernameLength, generate_candidates};
//!
//! let options = GeneratorOptions::new()
//!     .keyword("Nova")
//!     .style("minimal")
//!     .length(UsernameLength::Short)
//!     .count(5);
//!
//! let names = generate_candidates(&options, &mut || true);
//! assert!(names.len() <= 5);
//! assert!(names.iter().all(|n| n.starts_with("Nova") && n.len() <= 8));
//! ```

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::domain::{
    value_objects::UsernameLength,
    vocabulary::{ADJECTIVES, NOUNS, SEPARATORS, SUFFIXES},
};

/// Keyword used when none is given or sanitisation leaves nothing.
pub const DEFAULT_KEYWORD: &str = "Nova";

/// Style used when the caller gives none at all.
pub const DEFAULT_STYLE: &str = "clean";

/// Number of suggestions requested when the caller gives no count.
pub const DEFAULT_COUNT: usize = 24;

/// Candidates shorter than this after clipping are dropped.
pub const MIN_CANDIDATE_LEN: usize = 4;

/// Chance that an attempt keeps its third word.
pub const THIRD_WORD_PROBABILITY: f64 = 0.65;

// ── Randomness seam ─────────────────────────────────────────────────────────

/// Source of the per-attempt "keep the third word" decision.
///
/// Any `FnMut() -> bool` is a coin, which keeps tests trivial:
///
/// ```rust
/// use handlegen_core::domain::CoinSource;
///
/// let mut heads = || true;
/// assert!(heads.flip());
/// ```
///
/// `handlegen-adapters` provides RNG-backed coins biased to
/// [`THIRD_WORD_PROBABILITY`].
pub trait CoinSource: Send {
    /// `true` keeps the third word for the current attempt.
    fn flip(&mut self) -> bool;
}

impl<F> CoinSource for F
where
    F: FnMut() -> bool + Send,
{
    fn flip(&mut self) -> bool {
        self()
    }
}

// ── Options ─────────────────────────────────────────────────────────────────

/// Inputs for one generator call. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorOptions {
    pub keyword: Option<String>,
    pub style: Option<String>,
    pub length: Option<UsernameLength>,
    pub count: Option<usize>,
}

impl GeneratorOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = Some(keyword.into());
        self
    }

    pub fn style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    pub fn length(mut self, length: UsernameLength) -> Self {
        self.length = Some(length);
        self
    }

    pub fn count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }

    /// Count after defaulting.
    pub fn effective_count(&self) -> usize {
        self.count.unwrap_or(DEFAULT_COUNT)
    }

    /// Length class after defaulting.
    pub fn effective_length(&self) -> UsernameLength {
        self.length.unwrap_or_default()
    }

    /// Sanitised keyword, never empty.
    pub fn effective_keyword(&self) -> String {
        let cleaned = sanitize(self.keyword.as_deref().unwrap_or(DEFAULT_KEYWORD));
        if cleaned.is_empty() {
            DEFAULT_KEYWORD.to_string()
        } else {
            cleaned
        }
    }

    /// Sanitised style hint; may be empty, in which case adjectives are used.
    pub fn effective_style(&self) -> String {
        sanitize(self.style.as_deref().unwrap_or(DEFAULT_STYLE))
    }
}

// ── Generation ──────────────────────────────────────────────────────────────

/// Result of one generator call, with pool statistics for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generation {
    /// Unique candidates, in pool order, at most `count` of them.
    pub candidates: Vec<String>,
    /// Raw attempts made (`2 × count`).
    pub attempts: usize,
    /// Attempts dropped for being shorter than [`MIN_CANDIDATE_LEN`].
    pub too_short: usize,
    /// Attempts that repeated an earlier candidate.
    pub duplicates: usize,
}

/// Generate up to `count` unique username candidates.
///
/// Never fails. May return fewer than `count` entries when clipping and
/// deduplication eliminate too many attempts.
pub fn generate_candidates<C>(options: &GeneratorOptions, coin: &mut C) -> Vec<String>
where
    C: CoinSource + ?Sized,
{
    generate(options, coin).candidates
}

/// Like [`generate_candidates`], also reporting how the pool was filtered.
pub fn generate<C>(options: &GeneratorOptions, coin: &mut C) -> Generation
where
    C: CoinSource + ?Sized,
{
    let count = options.effective_count();
    let budget = options.effective_length().budget();
    let keyword = title_case(&options.effective_keyword());
    let style = options.effective_style();
    let style_word = (!style.is_empty()).then(|| title_case(&style));

    let attempts = count.saturating_mul(2);
    let mut seen = HashSet::with_capacity(attempts);
    let mut candidates = Vec::with_capacity(count);
    let mut too_short = 0;
    let mut duplicates = 0;

    for i in 0..attempts {
        let adjective = ADJECTIVES[i.wrapping_mul(7) % ADJECTIVES.len()];
        let noun = NOUNS[(i.wrapping_mul(5).wrapping_add(3)) % NOUNS.len()];
        let suffix = SUFFIXES[(i.wrapping_mul(11).wrapping_add(2)) % SUFFIXES.len()];
        let separator = SEPARATORS[(i.wrapping_mul(13).wrapping_add(1)) % SEPARATORS.len()];

        let second = style_word.as_deref().unwrap_or(adjective);
        let mut words = vec![keyword.as_str(), second];
        if coin.flip() {
            words.push(noun);
        }

        let mut raw = words.join(separator);
        if !suffix.is_empty() {
            raw.push_str(separator);
            raw.push_str(suffix);
        }

        let clipped = clip(&raw, budget);
        if clipped.chars().count() < MIN_CANDIDATE_LEN {
            too_short += 1;
            continue;
        }

        if seen.insert(clipped.clone()) {
            candidates.push(clipped);
        } else {
            duplicates += 1;
        }
    }

    candidates.truncate(count);

    Generation {
        candidates,
        attempts,
        too_short,
        duplicates,
    }
}

// ── helpers ─────────────────────────────────────────────────────────────────

/// Keep ASCII letters and digits only.
pub fn sanitize(value: &str) -> String {
    value.chars().filter(char::is_ascii_alphanumeric).collect()
}

fn title_case(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn clip(value: &str, budget: usize) -> String {
    value.chars().take(budget).collect()
}
