use crate::cards::card::Card;
use crate::hand::action::Action;
use crate::seating::position::Position;
use crate::wizard::draft::Draft;
use std::collections::BTreeSet;
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum WinLoss {
    #[default]
    Win,
    Lose,
    Chop,
}

impl std::fmt::Display for WinLoss {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Win => write!(f, "Win"),
            Self::Lose => write!(f, "Lose"),
            Self::Chop => write!(f, "Chop"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RecordError {
    #[error("transcription is not at its result step")]
    Unfinished,
    #[error("expected exactly 2 hole cards, got {0}")]
    HoleArity(usize),
    #[error("board holds at most 5 cards, got {0}")]
    BoardOverflow(usize),
    #[error("player count {0} is outside 2..=10")]
    PlayerCount(usize),
    #[error("card {0} appears twice across hole and board")]
    DuplicateCard(Card),
}

/// A finalized, storable hand.
///
/// This is the shape the store persists and the export/import pair moves
/// around: dates travel as RFC 3339 text, cards as two-character tokens,
/// actions in the wire shape of [`Action`]. `id` is assigned by the store
/// on first save.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HandRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub uuid: Uuid,
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
    pub position: Position,
    pub hole_cards: Vec<Card>,
    pub board: Vec<Card>,
    pub actions: Vec<Action>,
    pub player_count: usize,
    pub win_loss: WinLoss,
    pub tags: BTreeSet<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tournament_id: Option<u64>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl HandRecord {
    pub fn validate(&self) -> Result<(), RecordError> {
        if !(2..=10).contains(&self.player_count) {
            return Err(RecordError::PlayerCount(self.player_count));
        }
        if self.hole_cards.len() != 2 {
            return Err(RecordError::HoleArity(self.hole_cards.len()));
        }
        if self.board.len() > 5 {
            return Err(RecordError::BoardOverflow(self.board.len()));
        }
        let mut seen = BTreeSet::new();
        for card in self.hole_cards.iter().chain(self.board.iter()) {
            if !seen.insert(*card) {
                return Err(RecordError::DuplicateCard(*card));
            }
        }
        Ok(())
    }
}

/// sealing a draft: the one-way conversion performed at explicit finish
impl TryFrom<&Draft> for HandRecord {
    type Error = RecordError;
    fn try_from(draft: &Draft) -> Result<Self, Self::Error> {
        let hero = draft.hero.ok_or(RecordError::Unfinished)?;
        let now = OffsetDateTime::now_utc();
        let record = Self {
            id: None,
            uuid: Uuid::new_v4(),
            date: now,
            position: hero,
            hole_cards: draft.hole.clone(),
            board: draft.board.clone(),
            actions: draft.actions.clone(),
            player_count: draft.count,
            win_loss: draft.win_loss,
            tags: draft.tags.clone(),
            note: (!draft.note.is_empty()).then(|| draft.note.clone()),
            tournament_id: draft.tournament,
            created_at: now,
            updated_at: now,
        };
        record.validate()?;
        Ok(record)
    }
}

/// Criteria for querying stored hands. All present criteria must match.
#[derive(Debug, Default, Clone)]
pub struct Filter {
    pub start: Option<OffsetDateTime>,
    pub end: Option<OffsetDateTime>,
    pub tags: Vec<String>,
    pub tournament: Option<u64>,
}

impl Filter {
    pub fn matches(&self, hand: &HandRecord) -> bool {
        if let Some(start) = self.start {
            if hand.date < start {
                return false;
            }
        }
        // inclusive on both ends
        if let Some(end) = self.end {
            if hand.date > end {
                return false;
            }
        }
        if let Some(tournament) = self.tournament {
            if hand.tournament_id != Some(tournament) {
                return false;
            }
        }
        self.tags.iter().all(|tag| hand.tags.contains(tag))
    }
}
