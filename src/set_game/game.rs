//! Set game engine.

use std::hash::Hash;

use log::{debug, trace};
use rustc_hash::FxHashSet;
use smallvec::SmallVec;
use uuid::Uuid;

use super::card::{generate_deck, SetCard};
use super::event::SetEvent;
use crate::core::GameRng;

/// Cards dealt at the start of a game.
pub const INITIAL_DEAL: usize = 12;

/// Cards in a set, and in a full selection.
pub const SET_SIZE: usize = 3;

/// Does this triple form a set?
///
/// For each attribute the three cards must be all the same or all
/// different. Anything other than exactly three cards is not a set.
///
/// ```
/// use card_table::set_game::{is_set, Color, Number, SetCard, Shading, Symbol};
/// use uuid::Uuid;
///
/// let card = |color| {
///     SetCard::new(Uuid::nil(), Symbol::Diamond, color, Number::One, Shading::Solid)
/// };
/// assert!(is_set([&card(Color::Red), &card(Color::Green), &card(Color::Purple)]));
/// assert!(!is_set([&card(Color::Red), &card(Color::Red), &card(Color::Purple)]));
/// ```
pub fn is_set<'a, I>(cards: I) -> bool
where
    I: IntoIterator<Item = &'a SetCard>,
{
    let cards: SmallVec<[&SetCard; SET_SIZE]> = cards.into_iter().collect();
    if cards.len() != SET_SIZE {
        return false;
    }

    let counts = [
        distinct(cards.iter().map(|c| c.symbol)),
        distinct(cards.iter().map(|c| c.color)),
        distinct(cards.iter().map(|c| c.number)),
        distinct(cards.iter().map(|c| c.shading)),
    ];
    counts.iter().all(|&n| n == 1 || n == SET_SIZE)
}

fn distinct<T: Eq + Hash>(values: impl Iterator<Item = T>) -> usize {
    values.collect::<FxHashSet<_>>().len()
}

/// The Set card game.
///
/// Cards move one way: deck → in play → matched. Selecting a third card
/// checks the selection; a set is moved to `matched_cards` and its slots
/// are refilled from the deck, anything else is simply deselected.
///
/// ## Usage
///
/// ```
/// use card_table::core::GameRng;
/// use card_table::set_game::SetGame;
///
/// let mut game = SetGame::new(GameRng::new(7));
/// assert_eq!(game.cards_in_play().len(), 12);
/// assert_eq!(game.deck().len(), 69);
///
/// game.deal_three_more();
/// assert_eq!(game.cards_in_play().len(), 15);
/// ```
#[derive(Clone, Debug)]
pub struct SetGame {
    /// Undealt cards; the end of the vec is dealt first.
    deck: Vec<SetCard>,
    cards_in_play: Vec<SetCard>,
    selected: SmallVec<[Uuid; SET_SIZE]>,
    matched_cards: Vec<SetCard>,
    rng: GameRng,
}

impl Default for SetGame {
    /// A game shuffled from a fresh OS seed.
    fn default() -> Self {
        Self::new(GameRng::from_entropy())
    }
}

impl SetGame {
    /// Shuffle a full deck and deal the opening cards.
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        let mut game = Self {
            deck: Vec::new(),
            cards_in_play: Vec::new(),
            selected: SmallVec::new(),
            matched_cards: Vec::new(),
            rng,
        };
        game.start_new_game();
        game
    }

    /// Undealt cards.
    #[must_use]
    pub fn deck(&self) -> &[SetCard] {
        &self.deck
    }

    #[must_use]
    pub fn cards_in_play(&self) -> &[SetCard] {
        &self.cards_in_play
    }

    /// Currently selected cards, in selection order.
    #[must_use]
    pub fn selected_cards(&self) -> Vec<&SetCard> {
        self.selected.iter().filter_map(|id| self.card_in_play(*id)).collect()
    }

    /// Every card that has been part of a found set.
    #[must_use]
    pub fn matched_cards(&self) -> &[SetCard] {
        &self.matched_cards
    }

    #[must_use]
    pub fn card_in_play(&self, id: Uuid) -> Option<&SetCard> {
        self.cards_in_play.iter().find(|c| c.id == id)
    }

    /// True while the deck has cards left.
    #[must_use]
    pub fn can_deal(&self) -> bool {
        !self.deck.is_empty()
    }

    /// Ids of the first set among the cards in play, if any.
    #[must_use]
    pub fn find_set(&self) -> Option<[Uuid; SET_SIZE]> {
        let cards = &self.cards_in_play;
        for i in 0..cards.len() {
            for j in i + 1..cards.len() {
                for k in j + 1..cards.len() {
                    if is_set([&cards[i], &cards[j], &cards[k]]) {
                        return Some([cards[i].id, cards[j].id, cards[k].id]);
                    }
                }
            }
        }
        None
    }

    /// The deck is empty and no set remains in play.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.deck.is_empty() && self.find_set().is_none()
    }

    /// Deal up to `count` cards; fewer if the deck runs short.
    pub fn deal_cards(&mut self, count: usize) -> Vec<SetEvent> {
        let count = count.min(self.deck.len());
        let mut ids = Vec::with_capacity(count);

        for _ in 0..count {
            if let Some(card) = self.deck.pop() {
                ids.push(card.id);
                self.cards_in_play.push(card);
            }
        }

        trace!("Dealt {} cards, {} left in deck", ids.len(), self.deck.len());
        if ids.is_empty() {
            Vec::new()
        } else {
            vec![SetEvent::Dealt { ids }]
        }
    }

    /// Deal three more cards, or whatever is left.
    pub fn deal_three_more(&mut self) -> Vec<SetEvent> {
        self.deal_cards(SET_SIZE.min(self.deck.len()))
    }

    /// Toggle selection of a card in play.
    ///
    /// Ids not in play are ignored.
    pub fn choose_card(&mut self, id: Uuid) -> Vec<SetEvent> {
        let mut events = Vec::new();

        let Some(index) = self.cards_in_play.iter().position(|c| c.id == id) else {
            trace!("Ignoring card {} not in play", id);
            return events;
        };

        if let Some(pos) = self.selected.iter().position(|&s| s == id) {
            self.selected.remove(pos);
            self.cards_in_play[index].is_selected = false;
            events.push(SetEvent::Deselected { id });
            return events;
        }

        self.selected.push(id);
        self.cards_in_play[index].is_selected = true;
        events.push(SetEvent::Selected { id });

        if self.selected.len() == SET_SIZE {
            let ids = [self.selected[0], self.selected[1], self.selected[2]];

            if is_set(self.selected_cards()) {
                debug!("Found a set: {:?}", ids);
                events.push(SetEvent::SetFound { ids });
                self.replace_or_remove_matched(&ids, &mut events);
            } else {
                debug!("Not a set: {:?}", ids);
                for card in self.cards_in_play.iter_mut().filter(|c| ids.contains(&c.id)) {
                    card.is_selected = false;
                }
                events.push(SetEvent::NotASet { ids });
            }

            self.selected.clear();
        }

        events
    }

    /// Move the matched cards out of play, refilling their slots from the deck.
    fn replace_or_remove_matched(&mut self, ids: &[Uuid; SET_SIZE], events: &mut Vec<SetEvent>) {
        for &id in ids {
            let Some(index) = self.cards_in_play.iter().position(|c| c.id == id) else {
                continue;
            };

            let mut matched = match self.deck.pop() {
                Some(next) => {
                    events.push(SetEvent::Replaced { old: id, new: next.id });
                    std::mem::replace(&mut self.cards_in_play[index], next)
                }
                None => {
                    events.push(SetEvent::Removed { id });
                    self.cards_in_play.remove(index)
                }
            };
            matched.is_selected = false;
            matched.is_matched = true;
            self.matched_cards.push(matched);
        }
    }

    /// Reshuffle a full deck and deal again. Matched cards are forgotten.
    pub fn start_new_game(&mut self) -> Vec<SetEvent> {
        self.deck = generate_deck(&mut self.rng);
        self.cards_in_play.clear();
        self.selected.clear();
        self.matched_cards.clear();
        debug!("New Set game, seed {}", self.rng.seed());

        let mut events = vec![SetEvent::NewGame];
        events.extend(self.deal_cards(INITIAL_DEAL));
        events
    }
}
