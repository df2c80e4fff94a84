use crate::config::{DEFAULT_OPERANDS, DIVISION_FACTORS};
use crate::random::RandomSource;
use std::fmt;
use std::ops::Range;

/// The four arithmetic operators and what each one computes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum_macros::Display)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    pub fn apply(self, lhs: i64, rhs: i64) -> i64 {
        match self {
            Operator::Add => lhs + rhs,
            Operator::Subtract => lhs - rhs,
            Operator::Multiply => lhs * rhs,
            Operator::Divide => lhs / rhs,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => 'x',
            Operator::Divide => '/',
        }
    }
}

/// A single question: an operator and its two operands.
///
/// Divide questions always have a nonzero divisor that evenly divides
/// the dividend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MathOperation {
    operator: Operator,
    lhs: i64,
    rhs: i64,
}

impl MathOperation {
    pub fn generate<R: RandomSource>(operator: Operator, rng: &mut R) -> Self {
        Self::generate_in(operator, DEFAULT_OPERANDS, rng)
    }

    /// Draw both operands from `range`. Divide ignores the range and
    /// builds its operands from a divisor and a quotient instead.
    pub fn generate_in<R: RandomSource>(
        operator: Operator,
        range: Range<i32>,
        rng: &mut R,
    ) -> Self {
        if operator == Operator::Divide {
            return Self::generate_division(rng);
        }
        let (low, high) = (i64::from(range.start), i64::from(range.end));
        let lhs = rng.next(low, high);
        let rhs = rng.next(low, high);
        Self { operator, lhs, rhs }
    }

    fn generate_division<R: RandomSource>(rng: &mut R) -> Self {
        let mut lhs = 0;
        let mut rhs = 0;
        // Satisfied after the first pass; kept as the guard for the invariant.
        while rhs == 0 || lhs % rhs != 0 {
            rhs = rng.next(DIVISION_FACTORS.start, DIVISION_FACTORS.end);
            let quotient = rng.next(DIVISION_FACTORS.start, DIVISION_FACTORS.end);
            lhs = rhs * quotient;
        }
        Self {
            operator: Operator::Divide,
            lhs,
            rhs,
        }
    }

    pub fn division(divisor: i64, quotient: i64) -> Option<Self> {
        Self::from_operands(Operator::Divide, divisor * quotient, divisor)
    }

    /// Returns `None` for a Divide whose operands break the integer quotient rule.
    pub fn from_operands(operator: Operator, lhs: i64, rhs: i64) -> Option<Self> {
        if operator == Operator::Divide && (rhs == 0 || lhs % rhs != 0) {
            return None;
        }
        Some(Self { operator, lhs, rhs })
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    pub fn operands(&self) -> (i64, i64) {
        (self.lhs, self.rhs)
    }

    pub fn result(&self) -> i64 {
        self.operator.apply(self.lhs, self.rhs)
    }

    pub fn evaluate(&self, answer: i64) -> bool {
        self.result() == answer
    }
}

impl fmt::Display for MathOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.lhs, self.operator.symbol(), self.rhs)
    }
}
