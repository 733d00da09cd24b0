use tracing::debug;

use crate::{engine, Board};

/// Owns the two board buffers and alternates their roles on every step.
pub struct Runner {
    boards: [Board; 2],
    current: usize,
    generation: u32,
}

impl Runner {
    pub fn new(initial: Board) -> Self {
        Self {
            boards: [initial, Board::blank()],
            current: 0,
            generation: 0,
        }
    }

    pub fn current(&self) -> &Board {
        &self.boards[self.current]
    }

    /// Number of steps applied since construction.
    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Compute the next generation into the spare buffer and make it current.
    pub fn advance(&mut self) -> &Board {
        let [first, second] = &mut self.boards;
        let (src, dst) = if self.current == 0 {
            (&*first, second)
        } else {
            (&*second, first)
        };
        engine::step(src, dst);
        self.current ^= 1;
        self.generation += 1;
        debug!(
            generation = self.generation,
            population = self.current().population(),
            "step"
        );
        self.current()
    }

    /// Pass the current board to `sink`, then step `steps` times passing each
    /// new board. Stops at the first error returned by `sink`.
    pub fn run<E>(
        &mut self,
        steps: u32,
        mut sink: impl FnMut(&Board) -> Result<(), E>,
    ) -> Result<(), E> {
        sink(self.current())?;
        for _ in 0..steps {
            sink(self.advance())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Runner;
    use crate::{engine::next_generation, Board, Pattern};

    #[test]
    fn test_run_renders_steps_plus_one() {
        let mut runner = Runner::new(Board::from_pattern(Pattern::Toad, None));
        let mut seen = vec![];
        runner
            .run(3, |board| {
                seen.push(board.clone());
                Ok::<_, ()>(())
            })
            .unwrap();
        assert_eq!(seen.len(), 4);
        assert_eq!(runner.generation(), 3);
        for pair in seen.windows(2) {
            assert_eq!(pair[1], next_generation(&pair[0]));
        }
    }

    #[test]
    fn test_buffers_alternate() {
        let initial = Board::from_pattern(Pattern::Random, Some(11));
        let mut runner = Runner::new(initial.clone());
        let mut expected = initial;
        for generation in 1..=10 {
            expected = next_generation(&expected);
            assert_eq!(runner.advance(), &expected);
            assert_eq!(runner.generation(), generation);
        }
    }

    #[test]
    fn test_run_stops_on_sink_error() {
        let mut runner = Runner::new(Board::from_pattern(Pattern::Blinker, None));
        let mut calls = 0;
        let result = runner.run(5, |_| {
            calls += 1;
            if calls == 2 {
                Err("sink closed")
            } else {
                Ok(())
            }
        });
        assert_eq!(result, Err("sink closed"));
        assert_eq!(calls, 2);
        assert_eq!(runner.generation(), 1);
    }

    #[test]
    fn test_zero_steps() {
        let board = Board::from_pattern(Pattern::Beacon, None);
        let mut runner = Runner::new(board.clone());
        let mut seen = vec![];
        runner
            .run(0, |b| {
                seen.push(b.clone());
                Ok::<_, ()>(())
            })
            .unwrap();
        assert_eq!(seen, vec![board]);
        assert_eq!(runner.generation(), 0);
    }
}
