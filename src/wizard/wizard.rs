use super::draft::Draft;
use super::step::Step;
use crate::cards::card::Card;
use crate::hand::action::Action;
use crate::hand::action::Actor;
use crate::hand::ending::hand_ended;
use crate::hand::tags::infer_tags;
use crate::records::record::HandRecord;
use crate::records::record::RecordError;
use crate::records::record::WinLoss;
use crate::seating::position::Position;
use crate::seating::rotation::Rotation;

/// everything the operator can do to an in-progress transcription
#[derive(Debug, Clone)]
pub enum Event {
    /// set how many players were dealt in (seat step only)
    Deal(usize),
    /// choose the hero's seat (seat step only)
    Sit(Position),
    /// toggle a card in the active set (hole or board steps)
    Pick(Card),
    /// append to the action log (action steps only)
    Act(Action),
    /// truncate the last logged action
    Undo,
    Next,
    Back,
    Tag(String),
    Untag(String),
    Score(WinLoss),
    Note(String),
}

/// Wizard drives a hand transcription through its ten steps.
///
/// It is a value, not a session: [`Wizard::apply`] is a pure transition from
/// one state to the next, and every mutation runs the same synchronous
/// pipeline the original flow ran as an implicit effect: append or truncate,
/// detect an early hand end, then refresh whose turn it is. Events that a
/// step does not admit are refused as no-ops, never errors.
#[derive(Debug, Clone, Default)]
pub struct Wizard {
    step: Step,
    draft: Draft,
    to_act: Option<Actor>,
}

impl Wizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> Step {
        self.step
    }
    pub fn draft(&self) -> &Draft {
        &self.draft
    }
    /// the suggested next actor, if any. a villain suggestion is advisory:
    /// the seat on the submitted action is what gets recorded.
    pub fn to_act(&self) -> Option<Actor> {
        self.to_act
    }
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.draft.tags.iter().map(String::as_str)
    }

    /// the forward gate for the current step
    pub fn is_step_valid(&self) -> bool {
        match self.step {
            Step::Seat => self.draft.hero.is_some(),
            Step::Hole => self.draft.hole.len() == 2,
            step if step.is_board() => match step.street() {
                Some(street) => self.draft.board.len() >= street.n_observed(),
                None => unreachable!(),
            },
            _ => true,
        }
    }

    /// seats a villain action may come from: the table, minus the hero,
    /// minus anyone already folded
    pub fn available_villains(&self) -> Vec<Position> {
        let folded = self.draft.folded();
        Position::table(self.draft.count)
            .iter()
            .filter(|seat| Some(**seat) != self.draft.hero)
            .filter(|seat| !folded.contains(seat))
            .copied()
            .collect()
    }

    /// the pure transition function: current state + event -> next state
    pub fn apply(&self, event: Event) -> Self {
        let mut next = self.clone();
        next.act(event);
        next
    }

    /// seal the transcription into a record for storage
    pub fn finish(&self) -> Result<HandRecord, RecordError> {
        match self.step {
            Step::Result => HandRecord::try_from(&self.draft),
            _ => Err(RecordError::Unfinished),
        }
    }
}

impl Wizard {
    fn act(&mut self, event: Event) {
        match event {
            Event::Deal(count) => self.deal(count),
            Event::Sit(seat) => self.sit(seat),
            Event::Pick(card) => self.pick(card),
            Event::Act(action) => self.record(action),
            Event::Undo => self.undo(),
            Event::Next => self.forward(),
            Event::Back => self.backward(),
            Event::Tag(tag) => {
                self.draft.tags.insert(tag);
            }
            Event::Untag(tag) => {
                self.draft.tags.remove(&tag);
            }
            Event::Score(win_loss) => self.draft.win_loss = win_loss,
            Event::Note(note) => self.draft.note = note,
        }
    }

    fn deal(&mut self, count: usize) {
        if self.step != Step::Seat || !(2..=10).contains(&count) {
            log::warn!("refused player count {} at step {}", count, self.step);
            return;
        }
        self.draft.count = count;
        // a seat chosen at a bigger table may not exist at the new one
        if let Some(hero) = self.draft.hero {
            if !Position::table(count).contains(&hero) {
                self.draft.hero = None;
            }
        }
    }

    fn sit(&mut self, seat: Position) {
        if self.step != Step::Seat {
            log::warn!("hero seat is immutable after step {}", Step::Seat);
            return;
        }
        if !Position::table(self.draft.count).contains(&seat) {
            log::warn!("seat {} is not at a {}-handed table", seat, self.draft.count);
            return;
        }
        self.draft.hero = Some(seat);
    }

    fn pick(&mut self, card: Card) {
        match self.step {
            Step::Hole => {
                if let Some(i) = self.draft.hole.iter().position(|c| *c == card) {
                    self.draft.hole.remove(i);
                } else if self.draft.hole.len() < 2 && !self.draft.board.contains(&card) {
                    self.draft.hole.push(card);
                }
            }
            step if step.is_board() => {
                let cap = match step.street() {
                    Some(street) => street.n_observed(),
                    None => unreachable!(),
                };
                if let Some(i) = self.draft.board.iter().position(|c| *c == card) {
                    self.draft.board.remove(i);
                } else if self.draft.board.len() < cap && !self.draft.hole.contains(&card) {
                    self.draft.board.push(card);
                }
            }
            step => log::warn!("no card to pick at step {}", step),
        }
    }

    fn record(&mut self, action: Action) {
        if !self.step.is_action() || self.step.street() != Some(action.street()) {
            log::warn!("refused {} at step {}", action, self.step);
            return;
        }
        let hero = match self.draft.hero {
            Some(hero) => hero,
            None => return,
        };
        if let Actor::Villain(seat) = action.actor() {
            if seat == hero || !Position::table(self.draft.count).contains(&seat) {
                log::error!("villain seat {} is not available in this hand", seat);
                return;
            }
        }
        self.draft.actions.push(action);
        if hand_ended(&self.draft.actions, self.draft.count) {
            self.conclude();
        } else {
            self.refresh();
        }
    }

    fn undo(&mut self) {
        if self.draft.actions.pop().is_some() {
            self.refresh();
        }
    }

    fn forward(&mut self) {
        if self.step == Step::Result || !self.is_step_valid() {
            return;
        }
        self.step = self.step.next();
        match self.step {
            Step::Result => self.conclude(),
            step if step.is_action() => self.refresh(),
            _ => {}
        }
    }

    fn backward(&mut self) {
        if self.step == Step::Seat {
            return;
        }
        self.step = self.step.prev();
        if self.step.is_action() {
            self.refresh();
        }
    }

    /// route to the result step and fold the inferred tags into whatever
    /// the operator already added. union only; inference never removes.
    fn conclude(&mut self) {
        self.step = Step::Result;
        self.to_act = None;
        for tag in infer_tags(&self.draft.actions) {
            self.draft.tags.insert(tag.to_string());
        }
    }

    /// recompute the suggested actor from scratch, exactly as a fresh
    /// replay of the current log would
    fn refresh(&mut self) {
        self.to_act = None;
        let street = match (self.step.is_action(), self.step.street()) {
            (true, Some(street)) => street,
            _ => return,
        };
        let hero = match self.draft.hero {
            Some(hero) => hero,
            None => return,
        };
        let folded = self.draft.folded();
        let rotation = Rotation::from((street, self.draft.count));
        let seat = match self.draft.street_actions(street).last() {
            None => rotation.initial_actor(&folded),
            Some(last) => match rotation.next_actor(last.seat(hero), &folded) {
                Ok(seat) => seat,
                Err(unknown) => {
                    // caller bug: the log holds a seat outside the table
                    log::error!("{}", unknown);
                    debug_assert!(false, "{}", unknown);
                    None
                }
            },
        };
        // a missing actor is only coherent once the hand is already over
        if seat.is_none() && !hand_ended(&self.draft.actions, self.draft.count) {
            log::error!("nobody to act on the {} of a live hand", street);
            debug_assert!(false, "nobody to act on the {} of a live hand", street);
        }
        self.to_act = seat.map(|seat| match seat == hero {
            true => Actor::Hero,
            false => Actor::Villain(seat),
        });
    }
}
