//! Generator Service - runs the candidate generator with an injected coin.
//!
//! Owns the randomness source and a set of fallback options (typically from
//! user configuration). Per-call options win field by field.

use tracing::{debug, instrument};

use crate::domain::{CoinSource, GeneratorOptions, generate};

/// Service wrapping [`crate::domain::generate`].
pub struct GeneratorService {
    coin: Box<dyn CoinSource>,
    defaults: GeneratorOptions,
}

impl GeneratorService {
    /// Create a service with no configured defaults.
    pub fn new(coin: Box<dyn CoinSource>) -> Self {
        Self {
            coin,
            defaults: GeneratorOptions::default(),
        }
    }

    /// Use `defaults` for any option a call leaves unset.
    pub fn with_defaults(mut self, defaults: GeneratorOptions) -> Self {
        self.defaults = defaults;
        self
    }

    pub fn defaults(&self) -> &GeneratorOptions {
        &self.defaults
    }

    /// Generate candidates for `options`, falling back to the service
    /// defaults per field.
    #[instrument(skip_all)]
    pub fn generate(&mut self, options: &GeneratorOptions) -> Vec<String> {
        let merged = self.resolve(options);
        let generation = generate(&merged, self.coin.as_mut());

        debug!(
            keyword = %merged.effective_keyword(),
            style = %merged.effective_style(),
            length = %merged.effective_length(),
            count = merged.effective_count(),
            attempts = generation.attempts,
            too_short = generation.too_short,
            duplicates = generation.duplicates,
            kept = generation.candidates.len(),
            "Candidates generated"
        );

        generation.candidates
    }

    /// `options` with every unset field taken from the service defaults.
    pub fn resolve(&self, options: &GeneratorOptions) -> GeneratorOptions {
        GeneratorOptions {
            keyword: options.keyword.clone().or_else(|| self.defaults.keyword.clone()),
            style: options.style.clone().or_else(|| self.defaults.style.clone()),
            length: options.length.or(self.defaults.length),
            count: options.count.or(self.defaults.count),
        }
    }
}
