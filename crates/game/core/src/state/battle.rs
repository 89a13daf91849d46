/// Prompt shown before the first round of a session.
pub const INITIAL_PROMPT: &str = "Press 'Round' to begin.";
/// Prompt shown after a reset.
pub const RESET_PROMPT: &str = "New battle. Press 'Round'!";

/// How a finished battle ended, from the player's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    Victory,
    Defeat,
}

/// Battle lifecycle.
///
/// `InProgress` is the only phase that accepts a round. `Won` and `Lost` are
/// terminal until a reset brings the battle back to `InProgress`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattlePhase {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl BattlePhase {
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }

    /// Transition on a decisive blow. Terminal phases absorb further outcomes.
    #[must_use]
    pub const fn conclude(self, outcome: Outcome) -> Self {
        match (self, outcome) {
            (Self::InProgress, Outcome::Victory) => Self::Won,
            (Self::InProgress, Outcome::Defeat) => Self::Lost,
            (finished, _) => finished,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InProgress => "in_progress",
            Self::Won => "won",
            Self::Lost => "lost",
        }
    }
}

/// Battle aggregate bookkeeping: round counter, phase and the latest message.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleState {
    round: u32,
    phase: BattlePhase,
    message: String,
}

impl BattleState {
    pub fn new() -> Self {
        Self {
            round: 0,
            phase: BattlePhase::InProgress,
            message: INITIAL_PROMPT.to_owned(),
        }
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn phase(&self) -> BattlePhase {
        self.phase
    }

    pub fn is_over(&self) -> bool {
        self.phase.is_over()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Open the next round. Returns its number, or `None` once the battle is
    /// over, in which case nothing changes.
    pub fn begin_round(&mut self) -> Option<u32> {
        if self.is_over() {
            return None;
        }
        self.round += 1;
        Some(self.round)
    }

    pub fn conclude(&mut self, outcome: Outcome) {
        self.phase = self.phase.conclude(outcome);
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
    }

    pub fn reset(&mut self) {
        self.round = 0;
        self.phase = BattlePhase::InProgress;
        self.message = RESET_PROMPT.to_owned();
    }
}

impl Default for BattleState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_count_up_while_in_progress() {
        let mut battle = BattleState::new();
        assert_eq!(battle.begin_round(), Some(1));
        assert_eq!(battle.begin_round(), Some(2));
        assert_eq!(battle.round(), 2);
    }

    #[test]
    fn finished_battle_refuses_rounds() {
        let mut battle = BattleState::new();
        battle.begin_round();
        battle.conclude(Outcome::Defeat);

        let before = battle.clone();
        assert_eq!(battle.begin_round(), None);
        assert_eq!(battle, before);
    }

    #[test]
    fn terminal_phase_absorbs_later_outcomes() {
        assert_eq!(
            BattlePhase::Won.conclude(Outcome::Defeat),
            BattlePhase::Won
        );
        assert_eq!(
            BattlePhase::InProgress.conclude(Outcome::Victory),
            BattlePhase::Won
        );
        assert_eq!(
            BattlePhase::Lost.conclude(Outcome::Victory),
            BattlePhase::Lost
        );
    }

    #[test]
    fn reset_restores_counters() {
        let mut battle = BattleState::new();
        battle.begin_round();
        battle.begin_round();
        battle.conclude(Outcome::Victory);
        battle.set_message("Victory!");

        battle.reset();
        assert_eq!(battle.round(), 0);
        assert_eq!(battle.phase(), BattlePhase::InProgress);
        assert_eq!(battle.message(), RESET_PROMPT);
    }

    #[test]
    fn starts_with_prompt() {
        assert_eq!(BattleState::new().message(), INITIAL_PROMPT);
    }
}
