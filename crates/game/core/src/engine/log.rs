/// Closing line of a round the player won.
pub const VICTORY_TEXT: &str = "Victory! Enemy defeated.";
/// Closing line of a round the player lost.
pub const DEFEAT_TEXT: &str = "Defeat...";

/// Line-by-line narration of a single round.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RoundLog {
    lines: Vec<String>,
}

impl RoundLog {
    pub fn new(round: u32) -> Self {
        Self {
            lines: vec![format!("Round {round}")],
        }
    }

    pub fn player_attacks(&mut self, damage: u32) {
        self.lines.push(format!("You attack ({damage} dmg)."));
    }

    pub fn enemy_attacks(&mut self, damage: u32) {
        self.lines.push(format!("Enemy attacks ({damage} dmg)."));
    }

    pub fn player_stamina(&mut self, stamina: u32) {
        self.lines.push(format!("Your HP: {stamina}"));
    }

    pub fn victory(&mut self) {
        self.lines.push(VICTORY_TEXT.to_owned());
    }

    pub fn defeat(&mut self) {
        self.lines.push(DEFEAT_TEXT.to_owned());
    }

    pub fn into_message(self) -> String {
        self.lines.join("\n")
    }
}
