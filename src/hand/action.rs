use crate::cards::street::Street;
use crate::seating::position::Position;

/// who performed an action. the hero's seat lives on the draft, not here,
/// so a villain carries its seat while the hero carries none.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Actor {
    Hero,
    Villain(Position),
}

impl Actor {
    pub fn is_hero(&self) -> bool {
        matches!(self, Self::Hero)
    }
    /// the acting seat, resolving the hero against their chosen position
    pub fn seat(&self, hero: Position) -> Position {
        match self {
            Self::Hero => hero,
            Self::Villain(seat) => *seat,
        }
    }
}

impl std::fmt::Display for Actor {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Hero => write!(f, "Hero"),
            Self::Villain(seat) => write!(f, "Villain ({})", seat),
        }
    }
}

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Kind {
    Fold,
    Check,
    Call,
    Bet,
    Raise,
    #[serde(rename = "All-in")]
    AllIn,
}

impl Kind {
    /// bets, raises, and shoves all count as aggression
    pub fn is_aggressive(&self) -> bool {
        matches!(self, Self::Bet | Self::Raise | Self::AllIn)
    }
    /// folds and checks never carry a sizing
    pub fn takes_amount(&self) -> bool {
        !matches!(self, Self::Fold | Self::Check)
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Fold => write!(f, "Fold"),
            Self::Check => write!(f, "Check"),
            Self::Call => write!(f, "Call"),
            Self::Bet => write!(f, "Bet"),
            Self::Raise => write!(f, "Raise"),
            Self::AllIn => write!(f, "All-in"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ActionError {
    #[error("{kind} cannot carry an amount")]
    AmountNotAllowed { kind: Kind },
    #[error("villain action missing its seat")]
    MissingSeat,
}

/// One transcribed entry in a hand's action log.
///
/// Built only through [`Action::new`], which enforces the per-kind shape:
/// folds and checks carry no amount, everything else may carry a free-form
/// sizing string (never validated against stack or pot; transcription is
/// descriptive, not arithmetic). A villain's seat is present by construction
/// through [`Actor::Villain`].
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub struct Action {
    street: Street,
    actor: Actor,
    kind: Kind,
    amount: Option<String>,
}

impl Action {
    pub fn new(
        street: Street,
        actor: Actor,
        kind: Kind,
        amount: Option<String>,
    ) -> Result<Self, ActionError> {
        if amount.is_some() && !kind.takes_amount() {
            return Err(ActionError::AmountNotAllowed { kind });
        }
        Ok(Self {
            street,
            actor,
            kind,
            amount,
        })
    }

    pub fn street(&self) -> Street {
        self.street
    }
    pub fn actor(&self) -> Actor {
        self.actor
    }
    pub fn kind(&self) -> Kind {
        self.kind
    }
    pub fn amount(&self) -> Option<&str> {
        self.amount.as_deref()
    }
    pub fn is_hero(&self) -> bool {
        self.actor.is_hero()
    }
    pub fn is_fold(&self) -> bool {
        self.kind == Kind::Fold
    }
    /// the acting seat given the hero's chosen position
    pub fn seat(&self, hero: Position) -> Position {
        self.actor.seat(hero)
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} {} {}", self.street, self.actor, self.kind)?;
        match &self.amount {
            Some(amount) => write!(f, " {}", amount),
            None => Ok(()),
        }
    }
}

/// the legacy wire shape: actor label and isHero are both derived from the
/// same bit, position is present exactly when the actor is a villain.
#[derive(serde::Serialize, serde::Deserialize)]
struct Wire {
    phase: Street,
    actor: String,
    #[serde(rename = "type")]
    kind: Kind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    amount: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    position: Option<Position>,
    #[serde(rename = "isHero")]
    is_hero: bool,
}

impl serde::Serialize for Action {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let wire = Wire {
            phase: self.street,
            actor: match self.actor {
                Actor::Hero => "Hero".to_string(),
                Actor::Villain(_) => "Villain".to_string(),
            },
            kind: self.kind,
            amount: self.amount.clone(),
            position: match self.actor {
                Actor::Hero => None,
                Actor::Villain(seat) => Some(seat),
            },
            is_hero: self.actor.is_hero(),
        };
        wire.serialize(serializer)
    }
}

impl<'de> serde::Deserialize<'de> for Action {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let wire = Wire::deserialize(deserializer)?;
        let actor = match (wire.is_hero, wire.position) {
            (true, _) => Actor::Hero,
            (false, Some(seat)) => Actor::Villain(seat),
            (false, None) => return Err(serde::de::Error::custom(ActionError::MissingSeat)),
        };
        Action::new(wire.phase, actor, wire.kind, wire.amount).map_err(serde::de::Error::custom)
    }
}
