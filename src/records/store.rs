use super::record::Filter;
use super::record::HandRecord;
use super::tournament::ChipRecord;
use super::tournament::Tournament;
use anyhow::Context;
use std::collections::BTreeSet;
use std::path::PathBuf;
use time::OffsetDateTime;

/// Local persistence for finalized records.
///
/// One JSON file per collection under a root directory, loaded eagerly on
/// open and rewritten whole after every mutation. The dataset is a personal
/// hand journal, small enough that rewriting beats anything cleverer.
#[derive(Debug)]
pub struct Store {
    root: PathBuf,
    hands: Vec<HandRecord>,
    tournaments: Vec<Tournament>,
    chips: Vec<ChipRecord>,
}

impl Store {
    const HANDS: &'static str = "hands.json";
    const TOURNAMENTS: &'static str = "tournaments.json";
    const CHIPS: &'static str = "chips.json";

    pub fn open(root: impl Into<PathBuf>) -> anyhow::Result<Self> {
        let root = root.into();
        std::fs::create_dir_all(&root)
            .with_context(|| format!("creating store directory {}", root.display()))?;
        let hands = Self::read(root.join(Self::HANDS))?;
        let tournaments = Self::read(root.join(Self::TOURNAMENTS))?;
        let chips = Self::read(root.join(Self::CHIPS))?;
        log::info!(
            "opened store at {} ({} hands, {} tournaments)",
            root.display(),
            hands.len(),
            tournaments.len()
        );
        Ok(Self {
            root,
            hands,
            tournaments,
            chips,
        })
    }

    fn read<T>(path: PathBuf) -> anyhow::Result<Vec<T>>
    where
        T: serde::de::DeserializeOwned,
    {
        match std::fs::read_to_string(&path) {
            Ok(json) => serde_json::from_str(&json)
                .with_context(|| format!("parsing {}", path.display())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e).with_context(|| format!("reading {}", path.display())),
        }
    }

    fn write<T>(&self, name: &str, rows: &[T]) -> anyhow::Result<()>
    where
        T: serde::Serialize,
    {
        let path = self.root.join(name);
        let json = serde_json::to_string_pretty(rows)?;
        std::fs::write(&path, json).with_context(|| format!("writing {}", path.display()))
    }

    fn next_id<I>(ids: I) -> u64
    where
        I: Iterator<Item = Option<u64>>,
    {
        ids.flatten().max().unwrap_or(0) + 1
    }
}

/// hands
impl Store {
    /// Insert or update. A record with an id updates in place, keeping its
    /// original creation time; a record without one is assigned the next id.
    pub fn save_hand(&mut self, mut hand: HandRecord) -> anyhow::Result<u64> {
        hand.validate()?;
        let now = OffsetDateTime::now_utc();
        hand.updated_at = now;
        let id = match hand.id {
            Some(id) => {
                match self.hands.iter_mut().find(|h| h.id == Some(id)) {
                    Some(slot) => {
                        hand.created_at = slot.created_at;
                        *slot = hand;
                    }
                    None => self.hands.push(hand),
                }
                id
            }
            None => {
                let id = Self::next_id(self.hands.iter().map(|h| h.id));
                hand.id = Some(id);
                hand.created_at = now;
                self.hands.push(hand);
                id
            }
        };
        self.write(Self::HANDS, &self.hands)?;
        log::info!("saved hand {}", id);
        Ok(id)
    }

    pub fn hand(&self, id: u64) -> Option<&HandRecord> {
        self.hands.iter().find(|h| h.id == Some(id))
    }

    pub fn hands(&self) -> &[HandRecord] {
        &self.hands
    }

    pub fn delete_hand(&mut self, id: u64) -> anyhow::Result<()> {
        self.hands.retain(|h| h.id != Some(id));
        self.write(Self::HANDS, &self.hands)?;
        log::info!("deleted hand {}", id);
        Ok(())
    }

    pub fn query(&self, filter: &Filter) -> Vec<&HandRecord> {
        self.hands.iter().filter(|h| filter.matches(h)).collect()
    }

    /// every tag on record, deduplicated and sorted
    pub fn unique_tags(&self) -> Vec<String> {
        self.hands
            .iter()
            .flat_map(|h| h.tags.iter())
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

/// tournaments and their chip trajectories
impl Store {
    pub fn save_tournament(&mut self, mut tournament: Tournament) -> anyhow::Result<u64> {
        tournament.validate()?;
        let now = OffsetDateTime::now_utc();
        tournament.updated_at = now;
        let id = match tournament.id {
            Some(id) => {
                match self.tournaments.iter_mut().find(|t| t.id == Some(id)) {
                    Some(slot) => {
                        tournament.created_at = slot.created_at;
                        *slot = tournament;
                    }
                    None => self.tournaments.push(tournament),
                }
                id
            }
            None => {
                let id = Self::next_id(self.tournaments.iter().map(|t| t.id));
                tournament.id = Some(id);
                tournament.created_at = now;
                self.tournaments.push(tournament);
                id
            }
        };
        self.write(Self::TOURNAMENTS, &self.tournaments)?;
        log::info!("saved tournament {}", id);
        Ok(id)
    }

    pub fn tournament(&self, id: u64) -> Option<&Tournament> {
        self.tournaments.iter().find(|t| t.id == Some(id))
    }

    pub fn tournaments(&self) -> &[Tournament] {
        &self.tournaments
    }

    pub fn delete_tournament(&mut self, id: u64) -> anyhow::Result<()> {
        self.tournaments.retain(|t| t.id != Some(id));
        self.chips.retain(|c| c.tournament_id != id);
        self.write(Self::TOURNAMENTS, &self.tournaments)?;
        self.write(Self::CHIPS, &self.chips)?;
        log::info!("deleted tournament {} and its chip history", id);
        Ok(())
    }

    pub fn save_chips(&mut self, mut chip: ChipRecord) -> anyhow::Result<u64> {
        let id = match chip.id {
            Some(id) => {
                match self.chips.iter_mut().find(|c| c.id == Some(id)) {
                    Some(slot) => *slot = chip,
                    None => self.chips.push(chip),
                }
                id
            }
            None => {
                let id = Self::next_id(self.chips.iter().map(|c| c.id));
                chip.id = Some(id);
                self.chips.push(chip);
                id
            }
        };
        self.write(Self::CHIPS, &self.chips)?;
        Ok(id)
    }

    /// a tournament's chip history, oldest first
    pub fn trajectory(&self, tournament: u64) -> Vec<&ChipRecord> {
        let mut points = self
            .chips
            .iter()
            .filter(|c| c.tournament_id == tournament)
            .collect::<Vec<_>>();
        points.sort_by_key(|c| c.timestamp);
        points
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::card::Card;
    use crate::records::record::WinLoss;
    use crate::records::tournament::Status;
    use crate::seating::position::Position;
    use time::Duration;
    use uuid::Uuid;

    fn record(tags: &[&str]) -> HandRecord {
        let now = OffsetDateTime::now_utc();
        HandRecord {
            id: None,
            uuid: Uuid::new_v4(),
            date: now,
            position: Position::BTN,
            hole_cards: vec![Card::try_from("As").unwrap(), Card::try_from("Ks").unwrap()],
            board: vec![],
            actions: vec![],
            player_count: 6,
            win_loss: WinLoss::Win,
            tags: tags.iter().map(|t| t.to_string()).collect(),
            note: None,
            tournament_id: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn ids_are_assigned_in_sequence() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = Store::open(dir.path()).unwrap();
        assert!(store.save_hand(record(&[])).unwrap() == 1);
        assert!(store.save_hand(record(&[])).unwrap() == 2);
        assert!(store.hand(1).is_some());
    }

    #[test]
    fn saves_survive_reopening() {
        let dir = tempfile::tempdir().unwrap();
        let id = {
            let mut store = Store::open(dir.path()).unwrap();
            store.save_hand(record(&["Single Raised Pot"])).unwrap()
        };
        let store = Store::open(dir.path()).unwrap();
        let hand = store.hand(id).unwrap();
        assert!(hand.tags.contains("Single Raised Pot"));
    }

    #[test]
    fn update_preserves_creation_time() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = Store::open(dir.path()).unwrap();
        let id = store.save_hand(record(&[])).unwrap();
        let created = store.hand(id).unwrap().created_at;
        let mut edited = store.hand(id).unwrap().clone();
        edited.note = Some("misplayed the river".to_string());
        store.save_hand(edited).unwrap();
        let hand = store.hand(id).unwrap();
        assert!(hand.created_at == created);
        assert!(hand.note.as_deref() == Some("misplayed the river"));
    }

    #[test]
    fn invalid_records_never_land() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = Store::open(dir.path()).unwrap();
        let mut broken = record(&[]);
        broken.hole_cards.pop();
        assert!(store.save_hand(broken).is_err());
        assert!(store.hands().is_empty());
    }

    #[test]
    fn delete_removes_the_hand() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = Store::open(dir.path()).unwrap();
        let id = store.save_hand(record(&[])).unwrap();
        store.delete_hand(id).unwrap();
        assert!(store.hand(id) == None);
    }

    #[test]
    fn query_by_tags_and_dates() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = Store::open(dir.path()).unwrap();
        store.save_hand(record(&["C-Bet"])).unwrap();
        store.save_hand(record(&["C-Bet", "3Bet Pot"])).unwrap();
        let tagged = Filter {
            tags: vec!["3Bet Pot".into()],
            ..Filter::default()
        };
        assert!(store.query(&tagged).len() == 1);
        let stale = Filter {
            end: Some(OffsetDateTime::now_utc() - Duration::days(1)),
            ..Filter::default()
        };
        assert!(store.query(&stale).is_empty());
    }

    #[test]
    fn unique_tags_sorted() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = Store::open(dir.path()).unwrap();
        store.save_hand(record(&["Donk Bet"])).unwrap();
        store.save_hand(record(&["C-Bet", "Donk Bet"])).unwrap();
        assert!(store.unique_tags() == vec!["C-Bet".to_string(), "Donk Bet".to_string()]);
    }

    #[test]
    fn tournament_insert_stamps_creation_update_keeps_it() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = Store::open(dir.path()).unwrap();
        let mut fresh = Tournament::new("Daily", OffsetDateTime::now_utc()).unwrap();
        fresh.created_at = OffsetDateTime::now_utc() - Duration::days(365);
        let stale = fresh.created_at;
        let id = store.save_tournament(fresh).unwrap();
        let created = store.tournament(id).unwrap().created_at;
        assert!(created != stale);

        let mut edited = store.tournament(id).unwrap().clone();
        edited.status = Status::Completed;
        store.save_tournament(edited).unwrap();
        let kept = store.tournament(id).unwrap();
        assert!(kept.created_at == created);
        assert!(kept.status == Status::Completed);
    }

    #[test]
    fn trajectory_sorts_by_timestamp() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = Store::open(dir.path()).unwrap();
        let id = store
            .save_tournament(Tournament::new("Daily", OffsetDateTime::now_utc()).unwrap())
            .unwrap();
        let now = OffsetDateTime::now_utc();
        for (count, minutes) in [(25_000u64, 60i64), (30_000, 0), (12_000, 120)] {
            store
                .save_chips(ChipRecord {
                    id: None,
                    tournament_id: id,
                    chip_count: count,
                    sb: 100,
                    bb: 200,
                    timestamp: now + Duration::minutes(minutes),
                })
                .unwrap();
        }
        let counts = store
            .trajectory(id)
            .iter()
            .map(|c| c.chip_count)
            .collect::<Vec<_>>();
        assert!(counts == vec![30_000, 25_000, 12_000]);
    }

    #[test]
    fn deleting_a_tournament_drops_its_chips() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = Store::open(dir.path()).unwrap();
        let id = store
            .save_tournament(Tournament::new("Daily", OffsetDateTime::now_utc()).unwrap())
            .unwrap();
        store
            .save_chips(ChipRecord {
                id: None,
                tournament_id: id,
                chip_count: 30_000,
                sb: 100,
                bb: 200,
                timestamp: OffsetDateTime::now_utc(),
            })
            .unwrap();
        store.delete_tournament(id).unwrap();
        assert!(store.tournament(id) == None);
        assert!(store.trajectory(id).is_empty());
    }
}
