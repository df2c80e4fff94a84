use crate::config::DEFAULT_OPERANDS;
use crate::operation::{MathOperation, Operator};
use crate::random::RandomSource;
use std::ops::Range;
use tracing::debug;

/// Main menu entries, numbered from 1 in declaration order
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum OperationType {
    Random,
    Addition,
    Subtraction,
    Multiplication,
    Division,
}

impl OperationType {
    pub const ALL: [OperationType; 5] = [
        OperationType::Random,
        OperationType::Addition,
        OperationType::Subtraction,
        OperationType::Multiplication,
        OperationType::Division,
    ];

    pub fn from_menu(choice: i64) -> Option<Self> {
        usize::try_from(choice)
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|idx| Self::ALL.get(idx).copied())
    }

    pub fn menu_number(self) -> i64 {
        match self {
            OperationType::Random => 1,
            OperationType::Addition => 2,
            OperationType::Subtraction => 3,
            OperationType::Multiplication => 4,
            OperationType::Division => 5,
        }
    }

    pub fn operator(self) -> Option<Operator> {
        match self {
            OperationType::Random => None,
            OperationType::Addition => Some(Operator::Add),
            OperationType::Subtraction => Some(Operator::Subtract),
            OperationType::Multiplication => Some(Operator::Multiply),
            OperationType::Division => Some(Operator::Divide),
        }
    }

    pub fn names() -> Vec<String> {
        Self::ALL.iter().map(|t| t.to_string()).collect()
    }
}

/// Build a question for a menu selection. `Random` picks one of the
/// four concrete kinds with equal probability.
pub fn make<R: RandomSource>(selection: OperationType, rng: &mut R) -> MathOperation {
    make_in(selection, DEFAULT_OPERANDS, rng)
}

pub fn make_in<R: RandomSource>(
    selection: OperationType,
    range: Range<i32>,
    rng: &mut R,
) -> MathOperation {
    match selection.operator() {
        Some(operator) => {
            let question = MathOperation::generate_in(operator, range, rng);
            debug!(%operator, %question, "generated question");
            question
        }
        None => {
            let concrete = rng.next(1, Operator::ALL.len() as i64 + 1);
            let kind = OperationType::from_menu(concrete + 1).unwrap_or(OperationType::Addition);
            make_in(kind, range, rng)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{SequenceRandom, StdRandom};
    use std::collections::HashMap;

    #[test]
    fn menu_numbers_round_trip() {
        for t in OperationType::ALL {
            assert_eq!(OperationType::from_menu(t.menu_number()), Some(t));
        }
        assert_eq!(OperationType::from_menu(0), None);
        assert_eq!(OperationType::from_menu(6), None);
        assert_eq!(OperationType::from_menu(-1), None);
    }

    #[test]
    fn names_follow_menu_order() {
        assert_eq!(
            OperationType::names(),
            vec!["Random", "Addition", "Subtraction", "Multiplication", "Division"]
        );
    }

    #[test]
    fn concrete_selections_build_matching_operator() {
        let mut rng = StdRandom::seeded(2);
        for t in OperationType::ALL.into_iter().skip(1) {
            let q = make(t, &mut rng);
            assert_eq!(Some(q.operator()), t.operator());
            assert!(q.evaluate(q.result()));
        }
    }

    #[test]
    fn random_dispatches_from_first_draw() {
        // 1 => Addition, then operands 3 and 4
        let mut rng = SequenceRandom::new(vec![1, 3, 4]);
        let q = make(OperationType::Random, &mut rng);
        assert_eq!(q.to_string(), "3 + 4");

        // 4 => Division, then divisor 5 and quotient 3
        let mut rng = SequenceRandom::new(vec![4, 5, 3]);
        let q = make(OperationType::Random, &mut rng);
        assert_eq!(q.to_string(), "15 / 5");
    }

    #[test]
    fn random_is_roughly_uniform() {
        let mut rng = StdRandom::seeded(2024);
        let mut counts: HashMap<Operator, usize> = HashMap::new();
        for _ in 0..4000 {
            let q = make(OperationType::Random, &mut rng);
            *counts.entry(q.operator()).or_insert(0) += 1;
        }
        assert_eq!(counts.len(), 4);
        for (op, n) in counts {
            assert!((850..=1150).contains(&n), "{op} drawn {n} times");
        }
    }
}
