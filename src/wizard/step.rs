use crate::cards::street::Street;

/// The ten ordered steps of a hand transcription.
///
/// Seat and player count first, then hole cards, then each street's board
/// and action log in turn, then the result. Early hand endings jump the
/// cursor straight to [`Step::Result`].
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Step {
    Seat = 0,
    Hole = 1,
    PrefAction = 2,
    FlopBoard = 3,
    FlopAction = 4,
    TurnBoard = 5,
    TurnAction = 6,
    RiveBoard = 7,
    RiveAction = 8,
    Result = 9,
}

impl Default for Step {
    fn default() -> Self {
        Self::Seat
    }
}

impl Step {
    pub const fn all() -> &'static [Self] {
        &[
            Self::Seat,
            Self::Hole,
            Self::PrefAction,
            Self::FlopBoard,
            Self::FlopAction,
            Self::TurnBoard,
            Self::TurnAction,
            Self::RiveBoard,
            Self::RiveAction,
            Self::Result,
        ]
    }
    pub const fn next(&self) -> Self {
        match self {
            Self::Seat => Self::Hole,
            Self::Hole => Self::PrefAction,
            Self::PrefAction => Self::FlopBoard,
            Self::FlopBoard => Self::FlopAction,
            Self::FlopAction => Self::TurnBoard,
            Self::TurnBoard => Self::TurnAction,
            Self::TurnAction => Self::RiveBoard,
            Self::RiveBoard => Self::RiveAction,
            Self::RiveAction => Self::Result,
            Self::Result => panic!("terminal"),
        }
    }
    pub const fn prev(&self) -> Self {
        match self {
            Self::Seat => Self::Seat,
            Self::Hole => Self::Seat,
            Self::PrefAction => Self::Hole,
            Self::FlopBoard => Self::PrefAction,
            Self::FlopAction => Self::FlopBoard,
            Self::TurnBoard => Self::FlopAction,
            Self::TurnAction => Self::TurnBoard,
            Self::RiveBoard => Self::TurnAction,
            Self::RiveAction => Self::RiveBoard,
            Self::Result => Self::RiveAction,
        }
    }
    /// the street this step records, if any
    pub const fn street(&self) -> Option<Street> {
        match self {
            Self::PrefAction => Some(Street::Pref),
            Self::FlopBoard | Self::FlopAction => Some(Street::Flop),
            Self::TurnBoard | Self::TurnAction => Some(Street::Turn),
            Self::RiveBoard | Self::RiveAction => Some(Street::Rive),
            Self::Seat | Self::Hole | Self::Result => None,
        }
    }
    pub const fn is_action(&self) -> bool {
        matches!(
            self,
            Self::PrefAction | Self::FlopAction | Self::TurnAction | Self::RiveAction
        )
    }
    pub const fn is_board(&self) -> bool {
        matches!(self, Self::FlopBoard | Self::TurnBoard | Self::RiveBoard)
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Seat => write!(f, "seat"),
            Self::Hole => write!(f, "hole cards"),
            Self::PrefAction => write!(f, "preflop actions"),
            Self::FlopBoard => write!(f, "flop board"),
            Self::FlopAction => write!(f, "flop actions"),
            Self::TurnBoard => write!(f, "turn board"),
            Self::TurnAction => write!(f, "turn actions"),
            Self::RiveBoard => write!(f, "river board"),
            Self::RiveAction => write!(f, "river actions"),
            Self::Result => write!(f, "result"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ten_ordered_steps() {
        assert!(Step::all().len() == 10);
        assert!(Step::all().windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn next_walks_the_whole_sequence() {
        let mut step = Step::Seat;
        for expected in Step::all().iter().skip(1) {
            step = step.next();
            assert!(step == *expected);
        }
    }

    #[test]
    fn back_is_bounded_at_the_start() {
        assert!(Step::Seat.prev() == Step::Seat);
    }

    #[test]
    fn streets_line_up() {
        assert!(Step::PrefAction.street() == Some(Street::Pref));
        assert!(Step::FlopBoard.street() == Some(Street::Flop));
        assert!(Step::RiveAction.street() == Some(Street::Rive));
        assert!(Step::Result.street() == None);
    }
}
