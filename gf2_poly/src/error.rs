use thiserror::Error;

/// Ошибки арифметики над GF(2)[x]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Gf2Error {
    #[error("polynomial needs {required} bits, capacity is {capacity}")]
    CapacityOverflow { required: usize, capacity: usize },

    #[error("degenerate operand: {0}")]
    DegenerateOperand(&'static str),
}
