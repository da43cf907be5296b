//! Memory game configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::card::DEFAULT_BONUS_TIME_LIMIT;

/// Smallest deck the game will build, in pairs.
pub const MIN_PAIRS: usize = 2;

/// Configuration for a memory game.
///
/// ```
/// use std::time::Duration;
/// use card_table::memorize::MemoryGameConfig;
///
/// let config = MemoryGameConfig::new(1).with_bonus_time_limit(Duration::from_secs(10));
/// assert_eq!(config.pair_count(), 2); // clamped
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryGameConfig {
    /// Requested number of pairs. Values below [`MIN_PAIRS`] are clamped.
    pub number_of_pairs: usize,

    /// Bonus window for every card.
    #[serde(default = "default_bonus_time_limit")]
    pub bonus_time_limit: Duration,
}

fn default_bonus_time_limit() -> Duration {
    DEFAULT_BONUS_TIME_LIMIT
}

impl MemoryGameConfig {
    /// Create a configuration with the default bonus window.
    #[must_use]
    pub fn new(number_of_pairs: usize) -> Self {
        Self {
            number_of_pairs,
            bonus_time_limit: DEFAULT_BONUS_TIME_LIMIT,
        }
    }

    /// Set the bonus window.
    #[must_use]
    pub fn with_bonus_time_limit(mut self, limit: Duration) -> Self {
        self.bonus_time_limit = limit;
        self
    }

    /// Number of pairs actually dealt.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.number_of_pairs.max(MIN_PAIRS)
    }
}

impl Default for MemoryGameConfig {
    fn default() -> Self {
        Self::new(8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_count_clamped() {
        assert_eq!(MemoryGameConfig::new(0).pair_count(), 2);
        assert_eq!(MemoryGameConfig::new(2).pair_count(), 2);
        assert_eq!(MemoryGameConfig::new(9).pair_count(), 9);
    }

    #[test]
    fn test_builder() {
        let config = MemoryGameConfig::new(4).with_bonus_time_limit(Duration::from_secs(3));
        assert_eq!(config.number_of_pairs, 4);
        assert_eq!(config.bonus_time_limit, Duration::from_secs(3));
    }

    #[test]
    fn test_serde_default_bonus() {
        let config: MemoryGameConfig = serde_json::from_str(r#"{"number_of_pairs": 5}"#).unwrap();
        assert_eq!(config, MemoryGameConfig::new(5));
    }
}
