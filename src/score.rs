use crate::food::FruitKind;

/// Running score for one round, with a tally per fruit kind.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct Scoreboard {
    total: u32,
    eaten: [u32; FruitKind::COUNT],
}

impl Scoreboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the value of `kind` and returns the new total.
    pub fn record(&mut self, kind: FruitKind) -> u32 {
        self.total = self.total.saturating_add(kind.points());
        self.eaten[kind.index()] += 1;
        self.total
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.total
    }

    /// How many fruits of `kind` were eaten this round.
    #[must_use]
    pub fn eaten(&self, kind: FruitKind) -> u32 {
        self.eaten[kind.index()]
    }

    #[must_use]
    pub fn fruits_eaten(&self) -> u32 {
        self.eaten.iter().sum()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
