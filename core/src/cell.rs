/// State of a single board position.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Cell {
    Dead,
    Alive,
}

impl Cell {
    pub const fn is_alive(self) -> bool {
        matches!(self, Self::Alive)
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::Dead
    }
}
