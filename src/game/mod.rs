//! Core game logic and state management

pub mod investigation;
pub mod narrative;

pub use investigation::{InfoReport, RevealedHints};
pub use narrative::Opening;

use crate::data::*;
use crate::{GameError, GameResult};
use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Interrogations plus elimination clues allowed per game
pub const MAX_CLUES: u8 = 5;

/// The state of one case, from the opening story to the verdict
#[derive(Debug, Clone)]
pub struct GameState {
    /// Case number
    pub id: Id,

    phase: GamePhase,
    solution: Solution,
    opening: Opening,
    alibis: AlibiTable,
    clues_spent: u8,
    revealed: RevealedHints,
    outcome: Option<GuessResult>,
    notes: Vec<CaseNote>,
    rng: StdRng,
}

/// Where the current case stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    InProgress,
    Resolved,
}

/// Outcome of the final accusation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessResult {
    pub correct: bool,
    /// Revealed whether or not the guess was right
    pub solution: Solution,
}

impl GuessResult {
    pub fn lines(&self) -> Vec<String> {
        let mut lines = if self.correct {
            vec!["Congratulations! You guessed correctly:".to_string()]
        } else {
            vec!["Wrong answer.".to_string(), "The truth was:".to_string()]
        };
        lines.push(format!("Culprit: {}", self.solution.suspect));
        lines.push(format!("Location: {}", self.solution.location));
        lines.push(format!("Weapon: {}", self.solution.weapon));
        lines.push(if self.correct {
            "The truth has been revealed!".to_string()
        } else {
            "Keep investigating and don't give up!".to_string()
        });
        lines
    }
}

/// Kind of notebook entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoteKind {
    Interrogation,
    Elimination,
    Verdict,
}

/// A timestamped entry in the case notebook
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseNote {
    pub timestamp: DateTime<Utc>,
    pub kind: NoteKind,
    pub text: String,
}

impl CaseNote {
    fn new(kind: NoteKind, text: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            kind,
            text: text.into(),
        }
    }
}

impl GameState {
    /// Deal a new case seeded from OS entropy
    pub fn new_game() -> Self {
        Self::deal(StdRng::from_entropy())
    }

    /// Deal a reproducible case
    pub fn with_seed(seed: u64) -> Self {
        Self::deal(StdRng::seed_from_u64(seed))
    }

    /// Replace this case with a fresh one drawn from the same random source
    pub fn play_again(self) -> Self {
        Self::deal(self.rng)
    }

    fn deal(mut rng: StdRng) -> Self {
        let solution = Solution::random(&mut rng);
        let opening = Opening::generate(&mut rng, &solution);
        let alibis = build_alibis(&mut rng, &solution);
        let id = Id::from_rng(&mut rng);

        info!(case = %id.short(), victim = %opening.victim, "case opened");

        Self {
            id,
            phase: GamePhase::InProgress,
            solution,
            opening,
            alibis,
            clues_spent: 0,
            revealed: RevealedHints::new(),
            outcome: None,
            notes: Vec::new(),
            rng,
        }
    }

    /// Question one suspect, location or weapon. Costs one clue.
    pub fn interrogate(&mut self, entity: Entity) -> GameResult<InfoReport> {
        self.ensure_open()?;
        self.ensure_budget()?;

        let report = InfoReport::compile(&self.alibis, entity);
        self.clues_spent += 1;
        self.notes.push(CaseNote::new(NoteKind::Interrogation, report.lines().join("\n")));

        info!(
            case = %self.id.short(),
            category = %entity.category(),
            subject = %entity,
            clues_left = self.clues_remaining(),
            "interrogation"
        );
        Ok(report)
    }

    /// Rule out one innocent name nobody has ruled out yet. Costs one clue.
    pub fn request_elimination_clue(&mut self) -> GameResult<String> {
        self.ensure_open()?;
        self.ensure_budget()?;

        let candidates = self.revealed.candidates(&self.solution);
        let Some(&entity) = candidates.choose(&mut self.rng) else {
            debug!(case = %self.id.short(), "no elimination candidates left");
            return Err(GameError::NoCluesRemaining);
        };

        self.revealed.insert(entity);
        self.clues_spent += 1;
        let sentence = narrative::elimination_sentence(entity);
        self.notes.push(CaseNote::new(NoteKind::Elimination, sentence.clone()));

        info!(
            case = %self.id.short(),
            category = %entity.category(),
            clues_left = self.clues_remaining(),
            "elimination clue"
        );
        Ok(sentence)
    }

    /// Make the final accusation. Missing selections are rejected without
    /// touching the case; any complete guess closes it.
    pub fn guess(
        &mut self,
        suspect: Option<Suspect>,
        location: Option<Location>,
        weapon: Option<Weapon>,
    ) -> GameResult<GuessResult> {
        self.ensure_open()?;
        let (Some(suspect), Some(location), Some(weapon)) = (suspect, location, weapon) else {
            debug!(case = %self.id.short(), "incomplete guess rejected");
            return Err(GameError::IncompleteGuess);
        };

        let correct = suspect == self.solution.suspect
            && location == self.solution.location
            && weapon == self.solution.weapon;
        let result = GuessResult {
            correct,
            solution: self.solution,
        };

        self.phase = GamePhase::Resolved;
        self.outcome = Some(result);
        let verdict = if correct { "correct" } else { "wrong" };
        self.notes.push(CaseNote::new(
            NoteKind::Verdict,
            format!("Accused {} at {} with {}: {}", suspect, location, weapon, verdict),
        ));

        info!(case = %self.id.short(), correct, clues_used = self.clues_spent, "case closed");
        Ok(result)
    }

    /// Guess by display names. An empty name counts as a missing selection.
    pub fn guess_by_name(&mut self, suspect: &str, location: &str, weapon: &str) -> GameResult<GuessResult> {
        fn selection<T: Catalog>(name: &str) -> GameResult<Option<T>> {
            if name.trim().is_empty() {
                Ok(None)
            } else {
                T::from_name(name).map(Some)
            }
        }

        let suspect = selection::<Suspect>(suspect)?;
        let location = selection::<Location>(location)?;
        let weapon = selection::<Weapon>(weapon)?;
        self.guess(suspect, location, weapon)
    }

    fn ensure_open(&self) -> GameResult<()> {
        if self.phase == GamePhase::Resolved {
            debug!(case = %self.id.short(), "operation on a closed case");
            return Err(GameError::GameResolved);
        }
        Ok(())
    }

    fn ensure_budget(&self) -> GameResult<()> {
        if self.clues_spent >= MAX_CLUES {
            debug!(case = %self.id.short(), "clue budget exhausted");
            return Err(GameError::BudgetExhausted);
        }
        Ok(())
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_resolved(&self) -> bool {
        self.phase == GamePhase::Resolved
    }

    /// The hidden answer. The frontend only shows it through a `GuessResult`.
    pub fn solution(&self) -> &Solution {
        &self.solution
    }

    pub fn opening(&self) -> &Opening {
        &self.opening
    }

    pub fn alibis(&self) -> &AlibiTable {
        &self.alibis
    }

    pub fn clues_spent(&self) -> u8 {
        self.clues_spent
    }

    pub fn clues_remaining(&self) -> u8 {
        MAX_CLUES.saturating_sub(self.clues_spent)
    }

    pub fn revealed_hints(&self) -> &RevealedHints {
        &self.revealed
    }

    pub fn outcome(&self) -> Option<&GuessResult> {
        self.outcome.as_ref()
    }

    pub fn notes(&self) -> &[CaseNote] {
        &self.notes
    }

    /// One-line summary for the status bar
    pub fn check_status(&self) -> String {
        format!(
            "Case {} | Clues: {}/{} | Ruled out: {} | {}",
            self.id.short(),
            self.clues_remaining(),
            MAX_CLUES,
            self.revealed.len(),
            match self.phase {
                GamePhase::InProgress => "Investigating",
                GamePhase::Resolved => "Closed",
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_game_has_full_budget() {
        let game = GameState::with_seed(1);
        assert_eq!(game.phase(), GamePhase::InProgress);
        assert_eq!(game.clues_spent(), 0);
        assert_eq!(game.clues_remaining(), MAX_CLUES);
        assert!(game.revealed_hints().is_empty());
        assert!(game.notes().is_empty());
        assert!(game.outcome().is_none());
    }

    #[test]
    fn budget_is_shared_between_interrogations_and_clues() {
        let mut game = GameState::with_seed(11);
        game.interrogate(Entity::Weapon(Weapon::Mjolnir)).unwrap();
        game.request_elimination_clue().unwrap();
        game.interrogate(Entity::Location(Location::Asgard)).unwrap();
        game.request_elimination_clue().unwrap();
        game.interrogate(Entity::Suspect(Suspect::CindyMoon)).unwrap();
        assert_eq!(game.clues_spent(), 5);

        assert_eq!(game.request_elimination_clue(), Err(GameError::BudgetExhausted));
        assert_eq!(
            game.interrogate(Entity::Weapon(Weapon::Mjolnir)),
            Err(GameError::BudgetExhausted)
        );
        assert_eq!(game.clues_spent(), 5);
        assert_eq!(game.revealed_hints().len(), 2);
        assert_eq!(game.notes().len(), 5);
    }

    #[test]
    fn no_clues_remaining_once_every_innocent_is_revealed() {
        let mut game = GameState::with_seed(5);
        let solution = *game.solution();
        for entity in Entity::all().filter(|e| !solution.contains(*e)) {
            game.revealed.insert(entity);
        }
        assert_eq!(game.request_elimination_clue(), Err(GameError::NoCluesRemaining));
        assert_eq!(game.clues_spent(), 0);
    }

    #[test]
    fn incomplete_guess_leaves_the_case_open() {
        let mut game = GameState::with_seed(8);
        game.request_elimination_clue().unwrap();
        let hints = game.revealed_hints().clone();

        assert_eq!(
            game.guess(None, Some(Location::Wakanda), Some(Weapon::Mjolnir)),
            Err(GameError::IncompleteGuess)
        );
        assert_eq!(game.phase(), GamePhase::InProgress);
        assert_eq!(game.clues_spent(), 1);
        assert_eq!(game.revealed_hints(), &hints);
        assert!(game.outcome().is_none());
    }

    #[test]
    fn guess_closes_the_case() {
        let mut game = GameState::with_seed(21);
        let s = *game.solution();
        let result = game.guess(Some(s.suspect), Some(s.location), Some(s.weapon)).unwrap();
        assert!(result.correct);
        assert_eq!(result.solution, s);
        assert!(game.is_resolved());
        assert_eq!(game.outcome(), Some(&result));
        assert_eq!(game.notes().last().map(|n| n.kind), Some(NoteKind::Verdict));

        assert_eq!(
            game.guess(Some(s.suspect), Some(s.location), Some(s.weapon)),
            Err(GameError::GameResolved)
        );
        assert_eq!(game.request_elimination_clue(), Err(GameError::GameResolved));
    }

    #[test]
    fn verdict_lines_reveal_the_solution_either_way() {
        let solution = Solution {
            suspect: Suspect::GwenStacy,
            location: Location::Wakanda,
            weapon: Weapon::Mjolnir,
        };
        let wrong = GuessResult { correct: false, solution }.lines();
        assert_eq!(wrong[0], "Wrong answer.");
        assert!(wrong.contains(&"Culprit: Gwen Stacy".to_string()));
        let right = GuessResult { correct: true, solution }.lines();
        assert!(right.contains(&"Weapon: Mjolnir".to_string()));
    }
}
