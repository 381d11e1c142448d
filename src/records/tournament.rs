use time::OffsetDateTime;

#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Active,
    Completed,
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Active => write!(f, "active"),
            Self::Completed => write!(f, "completed"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
#[error("tournament name must not be empty")]
pub struct EmptyName;

/// A tournament whose chip trajectory is being tracked.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tournament {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub name: String,
    #[serde(default = "Tournament::default_start_chips")]
    pub start_chips: u64,
    #[serde(with = "time::serde::rfc3339")]
    pub start_date: OffsetDateTime,
    #[serde(default)]
    pub status: Status,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl Tournament {
    pub const fn default_start_chips() -> u64 {
        30_000
    }

    pub fn new(name: impl Into<String>, start_date: OffsetDateTime) -> Result<Self, EmptyName> {
        let name = name.into();
        if name.is_empty() {
            return Err(EmptyName);
        }
        let now = OffsetDateTime::now_utc();
        Ok(Self {
            id: None,
            name,
            start_chips: Self::default_start_chips(),
            start_date,
            status: Status::Active,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn validate(&self) -> Result<(), EmptyName> {
        match self.name.is_empty() {
            true => Err(EmptyName),
            false => Ok(()),
        }
    }
}

/// One point on a tournament's chip trajectory: the stack and the blind
/// level at a moment in time.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChipRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub tournament_id: u64,
    pub chip_count: u64,
    pub sb: u64,
    pub bb: u64,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
}
