use super::position::Position;
use crate::cards::street::Street;
use std::collections::BTreeSet;

/// the given seat was never part of the resolved table for this player
/// count. distinct from "nobody left to act", which is an Ok(None).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("seat {seat} is not at a {count}-handed table")]
pub struct UnknownSeat {
    pub seat: Position,
    pub count: usize,
}

/// Rotation is the phase-specific betting order for one street of a hand.
///
/// Preflop, the blinds have already posted, so action opens on the first
/// non-blind seat and the blinds act last. Every later street reopens with
/// the first table seat (conventionally SB). Its immutable methods are pure
/// functions of the seating table, the street, and the folded set.
#[derive(Debug, Clone, Copy)]
pub struct Rotation {
    street: Street,
    count: usize,
}

impl From<(Street, usize)> for Rotation {
    fn from((street, count): (Street, usize)) -> Self {
        Self { street, count }
    }
}

impl Rotation {
    /// seats in the order they act on this street
    pub fn order(&self) -> Vec<Position> {
        let table = Position::table(self.count);
        match self.street {
            Street::Pref => table[2..].iter().chain(&table[..2]).copied().collect(),
            _ => table.to_vec(),
        }
    }

    /// who opens the street: the first seat in rotation that has not folded
    pub fn initial_actor(&self, folded: &BTreeSet<Position>) -> Option<Position> {
        self.order().into_iter().find(|seat| !folded.contains(seat))
    }

    /// who acts after `current`: scan forward circularly for at most one
    /// full orbit, skipping folded seats. Ok(None) means the orbit exhausted
    /// with nobody left to act, which only happens once the hand is over.
    pub fn next_actor(
        &self,
        current: Position,
        folded: &BTreeSet<Position>,
    ) -> Result<Option<Position>, UnknownSeat> {
        let order = self.order();
        let index = order
            .iter()
            .position(|seat| *seat == current)
            .ok_or(UnknownSeat {
                seat: current,
                count: self.count,
            })?;
        Ok(order
            .iter()
            .cycle()
            .skip(index + 1)
            .take(order.len())
            .find(|seat| !folded.contains(seat))
            .copied())
    }
}
