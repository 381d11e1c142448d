use super::action::Action;
use super::action::Kind;
use crate::cards::street::Street;

/// A descriptive label derivable from a finished action log.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Tag {
    SingleRaisedPot,
    ThreeBetPot,
    FourBetPot,
    CBet,
    DonkBet,
    CheckRaise,
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::SingleRaisedPot => write!(f, "Single Raised Pot"),
            Self::ThreeBetPot => write!(f, "3Bet Pot"),
            Self::FourBetPot => write!(f, "4Bet Pot"),
            Self::CBet => write!(f, "C-Bet"),
            Self::DonkBet => write!(f, "Donk Bet"),
            Self::CheckRaise => write!(f, "Check-Raise"),
        }
    }
}

/// Derive descriptive tags from a finished action log.
///
/// Pure and deterministic: only action kinds drive the classification,
/// amounts are never consulted. The preflop aggression count picks at most
/// one pot-size tag. The aggression patterns (C-Bet, Donk Bet, Check-Raise)
/// are read off the flop only, never turn or river.
pub fn infer_tags(actions: &[Action]) -> Vec<Tag> {
    let mut tags = Vec::new();

    // preflop: count aggressive actions and remember who was last aggressive
    let mut raises = 0usize;
    let mut hero_aggressed = None;
    for action in actions.iter().filter(|a| a.street() == Street::Pref) {
        if action.kind().is_aggressive() {
            raises += 1;
            hero_aggressed = Some(action.is_hero());
        }
    }
    match raises {
        0 => {}
        1 => tags.push(Tag::SingleRaisedPot),
        2 => tags.push(Tag::ThreeBetPot),
        _ => tags.push(Tag::FourBetPot),
    }

    let flop = actions
        .iter()
        .filter(|a| a.street() == Street::Flop)
        .collect::<Vec<_>>();

    // opening-bet tags: the hero's first flop action, when it opens the
    // street's aggression with a bet or shove, continues (hero was the
    // preflop aggressor) or donks (villain was)
    if let Some(h) = flop.iter().position(|a| a.is_hero()) {
        let unled = flop[..h].iter().all(|a| !a.kind().is_aggressive());
        let opening = matches!(flop[h].kind(), Kind::Bet | Kind::AllIn);
        if unled && opening {
            match hero_aggressed {
                Some(true) => tags.push(Tag::CBet),
                Some(false) => tags.push(Tag::DonkBet),
                None => {}
            }
        }
    }

    // check-raise: hero check, villain aggression, hero raise, in that order
    let mut hero_checked = false;
    let mut villain_bet_after_check = false;
    for action in flop.iter() {
        if action.is_hero() && action.kind() == Kind::Check {
            hero_checked = true;
        } else if !action.is_hero() && action.kind().is_aggressive() && hero_checked {
            villain_bet_after_check = true;
        } else if action.is_hero()
            && matches!(action.kind(), Kind::Raise | Kind::AllIn)
            && villain_bet_after_check
        {
            tags.push(Tag::CheckRaise);
            break;
        }
    }

    tags
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hand::action::Actor;
    use crate::seating::position::Position;

    fn hero(street: Street, kind: Kind, amount: &str) -> Action {
        let amount = (!amount.is_empty()).then(|| amount.to_string());
        Action::new(street, Actor::Hero, kind, amount).unwrap()
    }
    fn villain(street: Street, kind: Kind, amount: &str) -> Action {
        let amount = (!amount.is_empty()).then(|| amount.to_string());
        Action::new(street, Actor::Villain(Position::BB), kind, amount).unwrap()
    }

    #[test]
    fn limped_pot_gets_no_pot_tag() {
        let log = vec![
            villain(Street::Pref, Kind::Call, "1"),
            hero(Street::Pref, Kind::Check, ""),
        ];
        assert!(infer_tags(&log).is_empty());
    }

    #[test]
    fn single_raised_pot() {
        let log = vec![
            villain(Street::Pref, Kind::Raise, "2.5BB"),
            hero(Street::Pref, Kind::Call, "2.5BB"),
        ];
        assert!(infer_tags(&log) == vec![Tag::SingleRaisedPot]);
    }

    #[test]
    fn three_bet_pot() {
        let log = vec![
            villain(Street::Pref, Kind::Raise, "2.5BB"),
            hero(Street::Pref, Kind::Raise, "8BB"),
            villain(Street::Pref, Kind::Call, ""),
        ];
        assert!(infer_tags(&log) == vec![Tag::ThreeBetPot]);
    }

    #[test]
    fn four_bet_pot_at_three_or_more() {
        let log = vec![
            villain(Street::Pref, Kind::Raise, "2.5BB"),
            hero(Street::Pref, Kind::Raise, "8BB"),
            villain(Street::Pref, Kind::Raise, "20BB"),
            hero(Street::Pref, Kind::AllIn, "100BB"),
        ];
        assert!(infer_tags(&log) == vec![Tag::FourBetPot]);
    }

    #[test]
    fn cbet_when_hero_continues() {
        let log = vec![
            hero(Street::Pref, Kind::Raise, "2.5BB"),
            villain(Street::Pref, Kind::Call, ""),
            hero(Street::Flop, Kind::Bet, "33%"),
        ];
        let tags = infer_tags(&log);
        assert!(tags.contains(&Tag::SingleRaisedPot));
        assert!(tags.contains(&Tag::CBet));
    }

    #[test]
    fn cbet_allows_checks_before_hero() {
        let log = vec![
            hero(Street::Pref, Kind::Raise, "2.5BB"),
            villain(Street::Pref, Kind::Call, ""),
            villain(Street::Flop, Kind::Check, ""),
            hero(Street::Flop, Kind::Bet, "50%"),
        ];
        assert!(infer_tags(&log).contains(&Tag::CBet));
    }

    #[test]
    fn no_cbet_when_villain_leads_first() {
        let log = vec![
            hero(Street::Pref, Kind::Raise, "2.5BB"),
            villain(Street::Pref, Kind::Call, ""),
            villain(Street::Flop, Kind::Bet, "33%"),
            hero(Street::Flop, Kind::Call, ""),
        ];
        assert!(!infer_tags(&log).contains(&Tag::CBet));
    }

    #[test]
    fn donk_bet_against_the_aggressor() {
        let log = vec![
            villain(Street::Pref, Kind::Raise, "2.5BB"),
            hero(Street::Pref, Kind::Call, ""),
            hero(Street::Flop, Kind::Bet, "33%"),
        ];
        let tags = infer_tags(&log);
        assert!(tags.contains(&Tag::DonkBet));
        assert!(!tags.contains(&Tag::CBet));
    }

    #[test]
    fn check_raise_sequence() {
        let log = vec![
            hero(Street::Flop, Kind::Check, ""),
            villain(Street::Flop, Kind::Bet, "33%"),
            hero(Street::Flop, Kind::Raise, "100%"),
        ];
        assert!(infer_tags(&log).contains(&Tag::CheckRaise));
    }

    #[test]
    fn check_raise_at_most_once() {
        let log = vec![
            hero(Street::Flop, Kind::Check, ""),
            villain(Street::Flop, Kind::Bet, "33%"),
            hero(Street::Flop, Kind::Raise, "100%"),
            villain(Street::Flop, Kind::Raise, "300%"),
            hero(Street::Flop, Kind::AllIn, ""),
        ];
        let tags = infer_tags(&log);
        assert!(tags.iter().filter(|t| **t == Tag::CheckRaise).count() == 1);
    }

    #[test]
    fn no_check_raise_without_intervening_bet() {
        let log = vec![
            hero(Street::Flop, Kind::Check, ""),
            villain(Street::Flop, Kind::Check, ""),
            hero(Street::Turn, Kind::Raise, "100%"),
        ];
        assert!(infer_tags(&log).is_empty());
    }

    #[test]
    fn turn_and_river_aggression_is_ignored() {
        let log = vec![
            hero(Street::Pref, Kind::Raise, "2.5BB"),
            villain(Street::Pref, Kind::Call, ""),
            hero(Street::Turn, Kind::Bet, "50%"),
            hero(Street::Rive, Kind::Bet, "75%"),
        ];
        let tags = infer_tags(&log);
        assert!(tags == vec![Tag::SingleRaisedPot]);
    }

    #[test]
    fn deterministic() {
        let log = vec![
            hero(Street::Pref, Kind::Raise, "2.5BB"),
            villain(Street::Pref, Kind::Call, ""),
            hero(Street::Flop, Kind::Bet, "33%"),
        ];
        assert!(infer_tags(&log) == infer_tags(&log));
    }
}
