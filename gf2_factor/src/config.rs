use crate::error::FactorError;

/// Как из множителей собираются строки ответа
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PairMode {
    /// Ровно два неприводимых множителя в обоих порядках,
    /// плюс пара (1, value), если во входе было нулевое слово
    #[default]
    Reference,
    /// Все разбиения мультимножества множителей на два произведения,
    /// помещающиеся в S бит
    Exhaustive,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverConfig {
    /// Предел попыток равностепенного расщепления для одного блока
    pub max_split_trials: usize,
    /// Сколько раз повторять факторизацию после `SplitExhausted`
    pub max_attempts: usize,
    /// Зерно генератора; `None`: энтропия ОС
    pub seed: Option<u64>,
    pub pair_mode: PairMode,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_split_trials: 256,
            max_attempts: 3,
            seed: None,
            pair_mode: PairMode::Reference,
        }
    }
}

impl SolverConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_max_split_trials(mut self, trials: usize) -> Self {
        self.max_split_trials = trials;
        self
    }

    pub fn with_max_attempts(mut self, attempts: usize) -> Self {
        self.max_attempts = attempts;
        self
    }

    pub fn with_pair_mode(mut self, pair_mode: PairMode) -> Self {
        self.pair_mode = pair_mode;
        self
    }

    pub fn validate(&self) -> Result<(), FactorError> {
        if self.max_split_trials == 0 {
            return Err(FactorError::InvalidConfig("max_split_trials must be positive"));
        }
        if self.max_attempts == 0 {
            return Err(FactorError::InvalidConfig("max_attempts must be positive"));
        }
        Ok(())
    }
}
