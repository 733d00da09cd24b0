/// Run settings that may differ between invocations.
///
/// The board side is not here: it is the compile-time constant [`crate::SIDE`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Number of generation steps after the initial board.
    pub steps: u32,
    /// Seed for [`crate::Pattern::Random`]; `None` means a fresh random seed.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            steps: Self::DEFAULT_STEPS,
            seed: None,
        }
    }
}

impl Config {
    pub const DEFAULT_STEPS: u32 = 3;

    pub const ALIVE_GLYPH: char = 'X';
    pub const DEAD_GLYPH: char = '.';
}
