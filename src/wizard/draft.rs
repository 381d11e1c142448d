use crate::cards::card::Card;
use crate::cards::street::Street;
use crate::hand::action::Action;
use crate::hand::action::Actor;
use crate::records::record::WinLoss;
use crate::seating::position::Position;
use std::collections::BTreeSet;

/// The in-progress hand being transcribed.
///
/// Created empty when the wizard starts and mutated only through wizard
/// events; the action log grows by append and shrinks by truncating the
/// last entry, never otherwise. Abandoning the wizard just drops this.
#[derive(Debug, Clone)]
pub struct Draft {
    pub hero: Option<Position>,
    pub count: usize,
    pub hole: Vec<Card>,
    pub board: Vec<Card>,
    pub actions: Vec<Action>,
    pub tags: BTreeSet<String>,
    pub win_loss: WinLoss,
    pub note: String,
    pub tournament: Option<u64>,
}

impl Default for Draft {
    fn default() -> Self {
        Self {
            hero: None,
            count: 6,
            hole: Vec::with_capacity(2),
            board: Vec::with_capacity(5),
            actions: Vec::new(),
            tags: BTreeSet::new(),
            win_loss: WinLoss::Win,
            note: String::new(),
            tournament: None,
        }
    }
}

impl Draft {
    /// every seat with a fold on record, the hero's included
    pub fn folded(&self) -> BTreeSet<Position> {
        self.actions
            .iter()
            .filter(|a| a.is_fold())
            .filter_map(|a| match a.actor() {
                Actor::Hero => self.hero,
                Actor::Villain(seat) => Some(seat),
            })
            .collect()
    }

    pub fn street_actions(&self, street: Street) -> impl Iterator<Item = &Action> {
        self.actions.iter().filter(move |a| a.street() == street)
    }

    /// card already spoken for, in the hole or on the board
    pub fn contains(&self, card: Card) -> bool {
        self.hole.contains(&card) || self.board.contains(&card)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hand::action::Actor;
    use crate::hand::action::Kind;

    #[test]
    fn starts_empty_at_six_max() {
        let draft = Draft::default();
        assert!(draft.hero == None);
        assert!(draft.count == 6);
        assert!(draft.actions.is_empty());
        assert!(draft.tags.is_empty());
    }

    #[test]
    fn folded_resolves_hero_seat() {
        let mut draft = Draft::default();
        draft.hero = Some(Position::BTN);
        draft.actions = vec![
            Action::new(Street::Pref, Actor::Villain(Position::UTG), Kind::Fold, None).unwrap(),
            Action::new(Street::Pref, Actor::Hero, Kind::Fold, None).unwrap(),
        ];
        let folded = draft.folded();
        assert!(folded.contains(&Position::UTG));
        assert!(folded.contains(&Position::BTN));
        assert!(folded.len() == 2);
    }

    #[test]
    fn card_membership_spans_both_sets() {
        let mut draft = Draft::default();
        draft.hole.push(Card::try_from("As").unwrap());
        draft.board.push(Card::try_from("2h").unwrap());
        assert!(draft.contains(Card::try_from("As").unwrap()));
        assert!(draft.contains(Card::try_from("2h").unwrap()));
        assert!(!draft.contains(Card::try_from("Kd").unwrap()));
    }
}
