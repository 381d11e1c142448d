/// A canonical seat at the table, named by position rather than index.
///
/// The set of seats in play depends on how many players were dealt in; see
/// [`Position::table`]. Tables are listed in deal order starting from the
/// small blind, which is also the postflop betting order.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Position {
    SB,
    BB,
    UTG,
    UTG1,
    EP,
    MP,
    LJ,
    HJ,
    CO,
    BTN,
}

impl Position {
    const TWO_MAX: &'static [Self] = &[Self::SB, Self::BB];
    const SIX_MAX: &'static [Self] = &[
        Self::SB,
        Self::BB,
        Self::UTG,
        Self::MP,
        Self::CO,
        Self::BTN,
    ];
    const NINE_MAX: &'static [Self] = &[
        Self::SB,
        Self::BB,
        Self::UTG,
        Self::EP,
        Self::MP,
        Self::LJ,
        Self::HJ,
        Self::CO,
        Self::BTN,
    ];
    const TEN_MAX: &'static [Self] = &[
        Self::SB,
        Self::BB,
        Self::UTG,
        Self::UTG1,
        Self::EP,
        Self::MP,
        Self::LJ,
        Self::HJ,
        Self::CO,
        Self::BTN,
    ];

    /// the fixed seating table for a player count.
    /// total over any count; counts outside 2..=10 clamp to the nearest table.
    pub const fn table(count: usize) -> &'static [Self] {
        match count {
            0..=2 => Self::TWO_MAX,
            3..=6 => Self::SIX_MAX,
            7..=9 => Self::NINE_MAX,
            _ => Self::TEN_MAX,
        }
    }
}

/// str isomorphism
impl TryFrom<&str> for Position {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "SB" => Ok(Self::SB),
            "BB" => Ok(Self::BB),
            "UTG" => Ok(Self::UTG),
            "UTG+1" => Ok(Self::UTG1),
            "EP" => Ok(Self::EP),
            "MP" => Ok(Self::MP),
            "LJ" => Ok(Self::LJ),
            "HJ" => Ok(Self::HJ),
            "CO" => Ok(Self::CO),
            "BTN" => Ok(Self::BTN),
            _ => Err(format!("invalid position str: {}", s)),
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::SB => "SB",
                Self::BB => "BB",
                Self::UTG => "UTG",
                Self::UTG1 => "UTG+1",
                Self::EP => "EP",
                Self::MP => "MP",
                Self::LJ => "LJ",
                Self::HJ => "HJ",
                Self::CO => "CO",
                Self::BTN => "BTN",
            }
        )
    }
}

/// serialized as its seat token
impl serde::Serialize for Position {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}
impl<'de> serde::Deserialize<'de> for Position {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let token = String::deserialize(deserializer)?;
        Position::try_from(token.as_str()).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_fixed_tables() {
        assert!(Position::table(2).len() == 2);
        assert!(Position::table(6).len() == 6);
        assert!(Position::table(9).len() == 9);
        assert!(Position::table(10).len() == 10);
    }

    #[test]
    fn counts_round_up() {
        assert!(Position::table(3) == Position::table(6));
        assert!(Position::table(4) == Position::table(6));
        assert!(Position::table(7) == Position::table(9));
    }

    #[test]
    fn stable_under_repeated_calls() {
        for count in 2..=10 {
            assert!(Position::table(count) == Position::table(count));
        }
    }

    #[test]
    fn blinds_lead_every_table() {
        for count in 2..=10 {
            let table = Position::table(count);
            assert!(table[0] == Position::SB);
            assert!(table[1] == Position::BB);
        }
    }

    #[test]
    fn bijective_str() {
        for seat in Position::table(10) {
            assert!(*seat == Position::try_from(seat.to_string().as_str()).unwrap());
        }
    }

    #[test]
    fn wire_token() {
        assert!(serde_json::to_string(&Position::UTG1).unwrap() == "\"UTG+1\"");
    }
}
