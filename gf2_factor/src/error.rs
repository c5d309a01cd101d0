use gf2_poly::Gf2Error;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FactorError {
    #[error(transparent)]
    Arithmetic(#[from] Gf2Error),

    #[error("cannot factor the zero polynomial")]
    ZeroPolynomial,

    #[error(
        "no split of a degree-{block_degree} block into degree-{degree} factors \
         after {trials} trials (retry with another seed)"
    )]
    SplitExhausted {
        degree: usize,
        block_degree: usize,
        trials: usize,
    },

    #[error("malformed input: {0}")]
    MalformedInput(String),

    #[error("factor of degree {degree} does not fit into {words} words")]
    FactorTooWide { degree: usize, words: usize },

    #[error("expected exactly two irreducible factors, found {0}")]
    UnexpectedFactorCount(usize),

    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl FactorError {
    /// Ошибка вероятностного алгоритма: повтор с другим зерном может помочь
    pub fn is_retryable(&self) -> bool {
        matches!(self, FactorError::SplitExhausted { .. })
    }
}
