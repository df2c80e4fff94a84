use std::ops::Range;

/// Operand range used by Add, Subtract and Multiply
pub const DEFAULT_OPERANDS: Range<i32> = 1..101;

/// Divisor and quotient range used by Divide
pub const DIVISION_FACTORS: Range<i64> = 1..11;

#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub operands: Range<i32>,
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            operands: DEFAULT_OPERANDS,
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn with_seed(seed: Option<u64>) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }
}
