use super::action::Action;
use super::action::Actor;
use std::collections::BTreeSet;

/// Whether the hand has concluded early, recomputed from the full log.
///
/// True once the hero folds, or once every non-hero seat has a fold on
/// record. Amounts, streets, and ordering play no part; only folds do.
pub fn hand_ended(actions: &[Action], player_count: usize) -> bool {
    if actions.iter().any(|a| a.is_hero() && a.is_fold()) {
        return true;
    }
    let folded_villains = actions
        .iter()
        .filter(|a| a.is_fold())
        .filter_map(|a| match a.actor() {
            Actor::Villain(seat) => Some(seat),
            Actor::Hero => None,
        })
        .collect::<BTreeSet<_>>();
    folded_villains.len() == player_count - 1
}
