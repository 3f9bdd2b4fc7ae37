use rand::Rng;
use rand::seq::SliceRandom;

use crate::config::QuoteConfig;

pub const DEFAULT_QUOTES: [&str; 5] = [
    "Success is not final, failure is not fatal: it is the courage to continue that counts. - Winston Churchill",
    "The only way to do great work is to love what you do. - Steve Jobs",
    "Believe you can and you're halfway there. - Theodore Roosevelt",
    "Don't watch the clock; do what it does. Keep going. - Sam Levenson",
    "The future belongs to those who believe in the beauty of their dreams. - Eleanor Roosevelt",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteDeck {
    quotes: Vec<String>,
}

impl Default for QuoteDeck {
    fn default() -> Self {
        Self::new(&QuoteConfig::default())
    }
}

impl QuoteDeck {
    pub fn new(config: &QuoteConfig) -> Self {
        Self {
            quotes: config.items.clone(),
        }
    }

    pub fn quotes(&self) -> &[String] {
        &self.quotes
    }

    /// Uniform pick; the previous quote is not excluded.
    pub fn random<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
        self.quotes.choose(rng).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn every_pick_is_a_known_quote() {
        let deck = QuoteDeck::default();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let quote = deck.random(&mut rng).expect("non-empty deck");
            assert!(DEFAULT_QUOTES.contains(&quote));
        }
    }

    #[test]
    fn no_quote_is_starved() {
        let deck = QuoteDeck::default();
        let mut rng = StdRng::seed_from_u64(2024);
        let seen: BTreeSet<&str> = (0..500)
            .filter_map(|_| deck.random(&mut rng))
            .collect();
        assert_eq!(seen.len(), 5);
    }

    #[test]
    fn empty_deck_yields_nothing() {
        let deck = QuoteDeck::new(&QuoteConfig { items: vec![] });
        let mut rng = StdRng::seed_from_u64(1);
        assert!(deck.random(&mut rng).is_none());
    }
}
