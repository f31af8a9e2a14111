use super::*;

/// Seeds every cell independently, alive with probability `alive_percent/100`,
/// from an explicit seed so arrangements are reproducible.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RandomSeeder {
    seed: u64,
    alive_percent: u8,
}

impl RandomSeeder {
    pub fn new(seed: u64, alive_percent: u8) -> Self {
        Self {
            seed,
            alive_percent,
        }
    }
}

impl BoardSeeder for RandomSeeder {
    fn seed(self, board: &mut Board) -> Result<()> {
        use rand::prelude::*;

        if self.alive_percent > 100 {
            return Err(BoardError::InvalidProbability);
        }

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let (height, width) = board.size();
        for row in 0..height {
            for col in 0..width {
                if rng.random_range(0..100u8) < self.alive_percent {
                    board.set_alive((row, col))?;
                } else {
                    board.set_dead((row, col))?;
                }
            }
        }

        log::debug!(
            "seeded {} of {} cells alive at {}%",
            board.alive_count(),
            board.total_cells(),
            self.alive_percent
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded_board(seed: u64, alive_percent: u8) -> Result<Board> {
        let mut board = Board::new(10, 10, Topology::Circular).unwrap();
        RandomSeeder::new(seed, alive_percent).seed(&mut board)?;
        Ok(board)
    }

    #[test]
    fn zero_percent_leaves_every_cell_dead() {
        let board = seeded_board(7, 0).unwrap();

        assert_eq!(board.alive_count(), 0);
    }

    #[test]
    fn full_percent_makes_every_cell_alive() {
        let board = seeded_board(7, 100).unwrap();

        assert_eq!(board.alive_count(), board.total_cells());
    }

    #[test]
    fn rejects_probability_above_range() {
        assert_eq!(seeded_board(7, 101), Err(BoardError::InvalidProbability));
    }

    #[test]
    fn overwrites_previous_cell_states() {
        let mut board = Board::new(10, 10, Topology::Clipped).unwrap();
        board.set_alive((3, 3)).unwrap();

        RandomSeeder::new(1, 0).seed(&mut board).unwrap();

        assert_eq!(board.alive_count(), 0);
    }

    #[test]
    fn same_seed_gives_identical_arrangements() {
        let first = seeded_board(42, 33).unwrap();
        let second = seeded_board(42, 33).unwrap();

        assert_eq!(first, second);
        // a mid-range probability leaves both states present
        assert!(first.alive_count() > 0);
        assert!(first.alive_count() < first.total_cells());
    }
}
