/// A participant in the game: a display name and the points banked so far.
///
/// A score only grows while a round is underway; the game zeroes it through
/// [`Player::reset_score`] between rounds. Players are created once at game
/// construction and reused across rounds, never destroyed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    /// Display name, non-empty and unique within a game
    name: String,
    /// Banked points, 0 at the start of every round
    score: u32,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            score: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Bank points at a hold. Only the game calls this.
    pub(crate) fn add_score(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }

    /// Back to zero for a fresh round. Idempotent.
    pub fn reset_score(&mut self) {
        self.score = 0;
    }
}
