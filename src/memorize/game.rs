//! Memory game engine.

use log::{debug, trace};
use smallvec::SmallVec;

use super::card::MemoryCard;
use super::config::MemoryGameConfig;
use super::event::MemoryEvent;
use crate::core::{Clock, GameRng, SystemClock, Timestamp};

/// Points for a plain match, before bonuses.
pub const MATCH_POINTS: i64 = 2;

/// Points lost per already-seen card in a mismatch.
pub const MISMATCH_PENALTY: i64 = 1;

/// A memory ("concentration") game over cards carrying content `C`.
///
/// ## Rules
///
/// - Choosing a face-down card flips it face-up.
/// - If exactly one other unmatched card is face-up, the two are compared:
///   equal content scores [`MATCH_POINTS`] plus both cards' bonus points;
///   different content costs [`MISMATCH_PENALTY`] for each card that had
///   already been seen, and both are turned face-down again. Their bonus
///   clocks keep running until the next choice covers them for good.
/// - Otherwise every other card is turned face-down first.
///
/// Between calls at most one unmatched card is face-up.
///
/// ## Usage
///
/// ```
/// use card_table::core::{GameRng, ManualClock};
/// use card_table::memorize::{MemoryGame, MemoryGameConfig};
///
/// let mut game = MemoryGame::new(
///     &MemoryGameConfig::new(3),
///     |pair| ["🐶", "🐱", "🐭"][pair],
///     GameRng::new(1),
///     ManualClock::new(),
/// );
/// assert_eq!(game.cards().len(), 6);
///
/// let first = game.cards()[0].id().to_string();
/// game.choose(&first);
/// assert!(game.card(&first).unwrap().is_face_up());
/// ```
#[derive(Clone, Debug)]
pub struct MemoryGame<C, K = SystemClock> {
    cards: Vec<MemoryCard<C>>,
    /// Mismatched cards hidden by the last choice, covered by the next one.
    pending_cover: SmallVec<[String; 2]>,
    score: i64,
    rng: GameRng,
    clock: K,
}

impl<C, K> MemoryGame<C, K>
where
    C: Clone + PartialEq,
    K: Clock,
{
    /// Build a shuffled deck of `config.pair_count()` pairs.
    ///
    /// Both cards of pair `i` carry `content_factory(i)` and are named
    /// `"{i+1}a"` and `"{i+1}b"`.
    pub fn new<F>(config: &MemoryGameConfig, mut content_factory: F, rng: GameRng, clock: K) -> Self
    where
        F: FnMut(usize) -> C,
    {
        let pairs = config.pair_count();
        let mut cards = Vec::with_capacity(pairs * 2);

        for pair_index in 0..pairs {
            let content = content_factory(pair_index);
            cards.push(MemoryCard::new(
                format!("{}a", pair_index + 1),
                content.clone(),
                config.bonus_time_limit,
            ));
            cards.push(MemoryCard::new(
                format!("{}b", pair_index + 1),
                content,
                config.bonus_time_limit,
            ));
        }

        let mut game = Self {
            cards,
            pending_cover: SmallVec::new(),
            score: 0,
            rng,
            clock,
        };
        game.rng.shuffle(&mut game.cards);
        debug!("New memory game: {} pairs, seed {}", pairs, game.rng.seed());
        game
    }

    /// All cards, in table order.
    #[must_use]
    pub fn cards(&self) -> &[MemoryCard<C>] {
        &self.cards
    }

    /// Look up a card by id.
    #[must_use]
    pub fn card(&self, id: &str) -> Option<&MemoryCard<C>> {
        self.cards.iter().find(|c| c.id() == id)
    }

    #[must_use]
    pub fn score(&self) -> i64 {
        self.score
    }

    /// True once every card is matched.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.cards.iter().all(MemoryCard::is_matched)
    }

    /// The clock driving the bonus timers.
    #[must_use]
    pub fn clock(&self) -> &K {
        &self.clock
    }

    /// Bonus points a card would earn if matched now.
    #[must_use]
    pub fn card_bonus_points(&self, id: &str) -> Option<i64> {
        let now = self.clock.now();
        self.card(id).map(|c| c.bonus_points(now))
    }

    /// Ids of the mismatched pair still timing out, if the last choice
    /// was a mismatch.
    #[must_use]
    pub fn pending_cover(&self) -> &[String] {
        &self.pending_cover
    }

    /// Index of the single face-up unmatched card, if exactly one exists.
    #[must_use]
    pub fn index_of_only_face_up_card(&self) -> Option<usize> {
        let mut face_up = self
            .cards
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_face_up() && !c.is_matched())
            .map(|(i, _)| i);

        match (face_up.next(), face_up.next()) {
            (Some(index), None) => Some(index),
            _ => None,
        }
    }

    /// Choose a card.
    ///
    /// Unknown ids, face-up cards and matched cards are ignored and yield
    /// no events.
    pub fn choose(&mut self, card_id: &str) -> Vec<MemoryEvent> {
        let mut events = Vec::new();

        let Some(chosen) = self.cards.iter().position(|c| c.id() == card_id) else {
            trace!("Ignoring unknown card {}", card_id);
            return events;
        };
        if self.cards[chosen].is_face_up() || self.cards[chosen].is_matched() {
            trace!("Ignoring card {}: already face-up or matched", card_id);
            return events;
        }

        let now = self.clock.now();
        self.settle_pending_cover(now);

        match self.index_of_only_face_up_card() {
            Some(candidate) => {
                self.flip_up(chosen, &mut events);

                if self.cards[chosen].content() == self.cards[candidate].content() {
                    let points = MATCH_POINTS
                        + self.cards[chosen].bonus_points(now)
                        + self.cards[candidate].bonus_points(now);
                    self.cards[chosen].mark_matched(now);
                    self.cards[candidate].mark_matched(now);
                    self.score += points;

                    debug!(
                        "Matched {} and {} for {} points",
                        card_id,
                        self.cards[candidate].id(),
                        points
                    );
                    events.push(MemoryEvent::Matched {
                        first: self.cards[candidate].id().to_string(),
                        second: card_id.to_string(),
                        points,
                    });
                } else {
                    let penalty = [chosen, candidate]
                        .iter()
                        .filter(|&&i| self.cards[i].has_been_seen())
                        .count() as i64
                        * MISMATCH_PENALTY;
                    self.score -= penalty;

                    debug!(
                        "Mismatch {} / {}, penalty {}",
                        card_id,
                        self.cards[candidate].id(),
                        penalty
                    );
                    events.push(MemoryEvent::Mismatched {
                        first: self.cards[candidate].id().to_string(),
                        second: card_id.to_string(),
                        penalty,
                    });

                    self.hide_mismatched(candidate, &mut events);
                    self.hide_mismatched(chosen, &mut events);
                }
            }
            None => {
                self.turn_all_face_down_except(chosen, &mut events);
                self.flip_up(chosen, &mut events);
            }
        }

        if self.is_game_over() {
            debug!("Memory game over, final score {}", self.score);
            events.push(MemoryEvent::GameOver { score: self.score });
        }

        events
    }

    /// Randomly reorder the cards. Face, match and score state are kept.
    pub fn shuffle(&mut self) -> Vec<MemoryEvent> {
        self.rng.shuffle(&mut self.cards);
        trace!("Shuffled {} cards", self.cards.len());
        vec![MemoryEvent::Shuffled]
    }

    /// Stop the bonus clocks of the pair hidden by the previous mismatch.
    fn settle_pending_cover(&mut self, now: Timestamp) {
        for id in std::mem::take(&mut self.pending_cover) {
            if let Some(card) = self.cards.iter_mut().find(|c| c.id() == id) {
                card.settle_cover(now);
            }
        }
    }

    fn hide_mismatched(&mut self, index: usize, events: &mut Vec<MemoryEvent>) {
        if self.cards[index].hide() {
            let id = self.cards[index].id().to_string();
            self.pending_cover.push(id.clone());
            events.push(MemoryEvent::TurnedFaceDown { id });
        }
    }

    /// Turn every card except `keep` face-down.
    fn turn_all_face_down_except(&mut self, keep: usize, events: &mut Vec<MemoryEvent>) {
        for index in 0..self.cards.len() {
            if index != keep {
                self.flip_down(index, events);
            }
        }
    }

    fn flip_up(&mut self, index: usize, events: &mut Vec<MemoryEvent>) {
        let now = self.clock.now();
        if self.cards[index].turn_face_up(now) {
            events.push(MemoryEvent::TurnedFaceUp {
                id: self.cards[index].id().to_string(),
            });
        }
    }

    fn flip_down(&mut self, index: usize, events: &mut Vec<MemoryEvent>) {
        let now = self.clock.now();
        if self.cards[index].turn_face_down(now) {
            events.push(MemoryEvent::TurnedFaceDown {
                id: self.cards[index].id().to_string(),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::core::ManualClock;

    fn game(pairs: usize) -> MemoryGame<usize, ManualClock> {
        let config = MemoryGameConfig::new(pairs);
        MemoryGame::new(&config, |i| i, GameRng::new(42), ManualClock::new())
    }

    fn pair_ids(game: &MemoryGame<usize, ManualClock>, pair: usize) -> (String, String) {
        let a = format!("{}a", pair + 1);
        let b = format!("{}b", pair + 1);
        assert!(game.card(&a).is_some() && game.card(&b).is_some());
        (a, b)
    }

    #[test]
    fn test_deck_size_clamped() {
        assert_eq!(game(0).cards().len(), 4);
        assert_eq!(game(1).cards().len(), 4);
        assert_eq!(game(6).cards().len(), 12);
    }

    #[test]
    fn test_pairs_share_content() {
        let game = game(5);
        for pair in 0..5 {
            let (a, b) = pair_ids(&game, pair);
            assert_eq!(game.card(&a).unwrap().content(), game.card(&b).unwrap().content());
        }
    }

    #[test]
    fn test_first_choice_flips_card() {
        let mut game = game(3);
        let events = game.choose("1a");

        assert_eq!(events, vec![MemoryEvent::TurnedFaceUp { id: "1a".to_string() }]);
        let index = game.cards().iter().position(|c| c.id() == "1a");
        assert_eq!(game.index_of_only_face_up_card(), index);
    }

    #[test]
    fn test_match_scores_with_bonus() {
        let mut game = game(3);
        game.choose("2a");
        game.clock().advance(Duration::from_secs(1));
        let events = game.choose("2b");

        // 2 + (6 - 1) + 6
        assert_eq!(game.score(), 13);
        assert!(game.card("2a").unwrap().is_matched());
        assert!(game.card("2b").unwrap().is_matched());
        assert!(events.contains(&MemoryEvent::Matched {
            first: "2a".to_string(),
            second: "2b".to_string(),
            points: 13,
        }));
    }

    #[test]
    fn test_mismatch_turns_pair_down() {
        let mut game = game(3);
        game.choose("1a");
        let events = game.choose("2a");

        assert_eq!(game.score(), 0);
        assert!(!game.card("1a").unwrap().is_face_up());
        assert!(!game.card("2a").unwrap().is_face_up());
        assert_eq!(game.pending_cover().to_vec(), vec!["1a".to_string(), "2a".to_string()]);
        assert!(!game.card("1a").unwrap().has_been_seen());

        game.choose("3a");
        assert!(game.pending_cover().is_empty());
        assert!(game.card("1a").unwrap().has_been_seen());
        assert!(game.card("2a").unwrap().has_been_seen());
        assert!(events.contains(&MemoryEvent::Mismatched {
            first: "1a".to_string(),
            second: "2a".to_string(),
            penalty: 0,
        }));
    }

    #[test]
    fn test_mismatch_of_seen_cards_costs_two() {
        let mut game = game(3);
        game.choose("1a");
        game.choose("2a");

        game.choose("1a");
        game.choose("2a");
        assert_eq!(game.score(), -2);
    }

    #[test]
    fn test_mismatched_pair_spends_bonus_until_next_choice() {
        let mut game = game(3);
        game.choose("1a");
        game.choose("2a");
        game.clock().advance(Duration::from_secs(4));
        assert_eq!(game.card_bonus_points("1a"), Some(2));

        game.choose("3a");
        game.clock().advance(Duration::from_secs(100));
        assert_eq!(game.card_bonus_points("1a"), Some(2));
        assert_eq!(game.card_bonus_points("2a"), Some(2));
    }

    #[test]
    fn test_choose_face_up_or_matched_is_noop() {
        let mut game = game(2);
        game.choose("1a");
        assert!(game.choose("1a").is_empty());

        game.choose("1b");
        assert!(game.choose("1a").is_empty());
        assert!(game.choose("1b").is_empty());
        assert!(game.choose("nope").is_empty());
    }

    #[test]
    fn test_choice_after_match_covers_matched_cards() {
        let mut game = game(2);
        game.choose("1a");
        game.choose("1b");

        let events = game.choose("2a");
        assert!(events.contains(&MemoryEvent::TurnedFaceDown { id: "1a".to_string() }));
        assert!(!game.card("1a").unwrap().is_face_up());
        assert!(game.card("1a").unwrap().is_matched());
    }

    #[test]
    fn test_game_over_event() {
        let mut game = game(2);
        game.choose("1a");
        game.choose("1b");
        game.choose("2a");
        let events = game.choose("2b");

        assert!(game.is_game_over());
        assert_eq!(events.last(), Some(&MemoryEvent::GameOver { score: game.score() }));
    }

    #[test]
    fn test_shuffle_keeps_state() {
        let mut game = game(6);
        game.choose("3a");
        let before: Vec<_> = game.cards().iter().map(|c| c.id().to_string()).collect();

        assert_eq!(game.shuffle(), vec![MemoryEvent::Shuffled]);

        let after: Vec<_> = game.cards().iter().map(|c| c.id().to_string()).collect();
        assert_ne!(before, after);
        assert!(game.card("3a").unwrap().is_face_up());
        assert_eq!(game.score(), 0);
    }
}
