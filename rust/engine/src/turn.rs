/// The two commands a player may issue while their turn is live.
///
/// Anything else a user types is an input-validation matter for the caller;
/// the engine only ever sees these two.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnCommand {
    /// Roll the die, risking the turn's points on a 1
    Roll,
    /// Bank the turn's points and end the turn
    Hold,
}

/// Points accumulated within the current turn, not yet banked.
///
/// Zeroed at every turn boundary: transferred to the player on a hold,
/// discarded on a bust.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TurnState {
    total: u32,
}

impl TurnState {
    pub fn total(&self) -> u32 {
        self.total
    }

    pub(crate) fn add(&mut self, roll: u8) {
        self.total = self.total.saturating_add(u32::from(roll));
    }

    /// Hand over the accumulated total, leaving the state zeroed.
    pub(crate) fn take(&mut self) -> u32 {
        std::mem::take(&mut self.total)
    }

    pub(crate) fn clear(&mut self) {
        self.total = 0;
    }
}

/// What one roll command did to the turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RollOutcome {
    /// Rolled a 1: the turn's points are lost and the turn is over
    Bust { roll: u8 },
    /// Rolled 2..=6: the total keeps growing and the player chooses again
    Point {
        roll: u8,
        turn_total: u32,
        score_if_held: u32,
    },
}

/// What a hold command banked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoldOutcome {
    /// Points moved from the turn into the player's score (may be 0)
    pub banked: u32,
    /// The player's score after banking
    pub total_score: u32,
}
