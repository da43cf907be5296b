//! Emoji themes and a theme-driven game wrapper.
//!
//! A [`Theme`] is plain data handed to the engine, never a process-wide
//! table. [`ThemedGame`] owns one theme and restarts games from it.

use std::time::Duration;

use log::{debug, warn};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::card::MemoryCard;
use super::config::MemoryGameConfig;
use super::event::MemoryEvent;
use super::game::MemoryGame;
use crate::core::{Clock, EngineError, GameRng, Result, SystemClock};

/// Content used when a theme runs out of emojis.
pub const FALLBACK_CONTENT: &str = "⁉️";

/// A named set of card faces.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub emojis: Vec<String>,
    /// Pairs to deal. `None` deals one pair per emoji.
    #[serde(default)]
    pub number_of_pairs: Option<usize>,
    /// Card back color, as a name the presentation layer understands.
    #[serde(default = "default_color")]
    pub color: String,
}

fn default_color() -> String {
    "orange".to_string()
}

impl Theme {
    /// Create a theme dealing one pair per emoji.
    pub fn new<I, S>(name: impl Into<String>, emojis: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            emojis: emojis.into_iter().map(Into::into).collect(),
            number_of_pairs: None,
            color: default_color(),
        }
    }

    /// Deal a fixed number of pairs.
    #[must_use]
    pub fn with_pairs(mut self, pairs: usize) -> Self {
        self.number_of_pairs = Some(pairs);
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Parse and validate a theme from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let theme: Theme = serde_json::from_str(json)?;
        theme.validate()?;
        Ok(theme)
    }

    /// Check the theme can produce a game.
    ///
    /// Asking for more pairs than emojis is allowed, but logs a warning:
    /// the extra pairs all show [`FALLBACK_CONTENT`] and match each other.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(EngineError::InvalidTheme("name is empty".to_string()));
        }
        if self.emojis.is_empty() {
            return Err(EngineError::InvalidTheme(format!("{} has no emojis", self.name)));
        }
        let mut seen = FxHashSet::default();
        for emoji in &self.emojis {
            if !seen.insert(emoji.as_str()) {
                return Err(EngineError::InvalidTheme(format!(
                    "{} repeats {}",
                    self.name, emoji
                )));
            }
        }
        if self.fallback_pairs() > 0 {
            warn!(
                "Theme {} deals {} pairs with only {} emojis; {} pairs use {}",
                self.name,
                self.pair_count(),
                self.emojis.len(),
                self.fallback_pairs(),
                FALLBACK_CONTENT
            );
        }
        Ok(())
    }

    /// Number of pairs a game with this theme deals.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.number_of_pairs.unwrap_or(self.emojis.len())
    }

    /// Pairs beyond the emoji list, dealt with [`FALLBACK_CONTENT`].
    #[must_use]
    pub fn fallback_pairs(&self) -> usize {
        self.pair_count().saturating_sub(self.emojis.len())
    }

    /// Card content for a pair index.
    #[must_use]
    pub fn content_for(&self, pair_index: usize) -> String {
        self.emojis
            .get(pair_index)
            .cloned()
            .unwrap_or_else(|| FALLBACK_CONTENT.to_string())
    }

    /// Ghosts and pumpkins.
    ///
    /// Deals 12 pairs from 10 emojis, so the last two pairs are both
    /// [`FALLBACK_CONTENT`] and any two of those four cards match.
    #[must_use]
    pub fn halloween() -> Self {
        Self::new(
            "Halloween",
            ["👻", "🎃", "🕷", "😈", "👾", "👁", "🧛🏼", "👺", "🦇", "🧟‍♀️"],
        )
        .with_pairs(12)
    }

    /// All built-in themes.
    #[must_use]
    pub fn builtin() -> Vec<Theme> {
        vec![
            Self::halloween(),
            Self::new("Animals", ["🐶", "🐱", "🐭", "🐹", "🐰", "🦊", "🐻", "🐼"])
                .with_color("green"),
            Self::new(
                "Vehicles",
                ["🚗", "🚕", "🚙", "🚌", "🚎", "🏎", "🚓", "🚑", "🚒"],
            )
            .with_pairs(6)
            .with_color("blue"),
            Self::new("Faces", ["😀", "😂", "😍", "😎", "🤔", "😴"])
                .with_color("yellow"),
        ]
    }
}

/// A memory game bound to a theme.
///
/// ```
/// use card_table::core::{GameRng, ManualClock};
/// use card_table::memorize::{Theme, ThemedGame};
///
/// let mut game =
///     ThemedGame::new(Theme::halloween(), GameRng::new(3), ManualClock::new()).unwrap();
/// assert_eq!(game.cards().len(), 24);
///
/// game.new_game();
/// assert_eq!(game.score(), 0);
/// ```
#[derive(Clone, Debug)]
pub struct ThemedGame<K = SystemClock> {
    theme: Theme,
    config: MemoryGameConfig,
    rng: GameRng,
    clock: K,
    game: MemoryGame<String, K>,
}

impl ThemedGame<SystemClock> {
    /// Start a game on the wall clock with a fresh OS seed.
    pub fn with_system_clock(theme: Theme) -> Result<Self> {
        Self::new(theme, GameRng::from_entropy(), SystemClock::new())
    }
}

impl<K: Clock + Clone> ThemedGame<K> {
    /// Start a game with the given theme.
    pub fn new(theme: Theme, mut rng: GameRng, clock: K) -> Result<Self> {
        theme.validate()?;
        let config = MemoryGameConfig::new(theme.pair_count());
        let game = Self::deal(&theme, &config, rng.fork(), clock.clone());
        Ok(Self {
            theme,
            config,
            rng,
            clock,
            game,
        })
    }

    /// Change the bonus window and redeal.
    #[must_use]
    pub fn with_bonus_time_limit(mut self, limit: Duration) -> Self {
        self.config = self.config.clone().with_bonus_time_limit(limit);
        self.new_game();
        self
    }

    fn deal(
        theme: &Theme,
        config: &MemoryGameConfig,
        rng: GameRng,
        clock: K,
    ) -> MemoryGame<String, K> {
        MemoryGame::new(config, |pair| theme.content_for(pair), rng, clock)
    }

    /// Throw away the current game and deal a fresh one.
    pub fn new_game(&mut self) {
        debug!("New game with theme {}", self.theme.name);
        self.game = Self::deal(&self.theme, &self.config, self.rng.fork(), self.clock.clone());
    }

    pub fn choose(&mut self, card_id: &str) -> Vec<MemoryEvent> {
        self.game.choose(card_id)
    }

    pub fn shuffle(&mut self) -> Vec<MemoryEvent> {
        self.game.shuffle()
    }

    #[must_use]
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    #[must_use]
    pub fn game(&self) -> &MemoryGame<String, K> {
        &self.game
    }

    #[must_use]
    pub fn cards(&self) -> &[MemoryCard<String>] {
        self.game.cards()
    }

    #[must_use]
    pub fn score(&self) -> i64 {
        self.game.score()
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.game.is_game_over()
    }
}
