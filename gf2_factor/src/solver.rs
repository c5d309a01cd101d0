use gf2_poly::Poly;
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::codec::{encode, parse_problem, Decoded};
use crate::config::{PairMode, SolverConfig};
use crate::error::FactorError;
use crate::factor::Factorizer;

/// Решатель задачи "произведение двух двоичных полиномов":
/// по упакованному произведению находит пары множителей.
#[derive(Debug, Clone)]
pub struct Solver {
    config: SolverConfig,
    factorizer: Factorizer,
}

impl Solver {
    pub fn new(config: SolverConfig) -> Result<Self, FactorError> {
        config.validate()?;
        let factorizer = Factorizer::new(config.max_split_trials);
        Ok(Self { config, factorizer })
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Текст задачи → отсортированные строки ответа
    pub fn solve(&self, input: &str) -> Result<Vec<String>, FactorError> {
        let decoded: Decoded = parse_problem(input)?;
        info!(
            "decoded {}-bit problem, product degree {}",
            decoded.bit_width,
            decoded.value.degree()
        );

        let factors = self.factorize(&decoded.value)?;
        debug!("{} irreducible factor(s)", factors.len());
        answer_lines(&decoded, &factors, self.config.pair_mode)
    }

    /// Факторизация с повтором после исчерпания попыток расщепления.
    /// Каждая попытка получает свой генератор.
    pub fn factorize(&self, value: &Poly) -> Result<Vec<Poly>, FactorError> {
        let mut attempt = 0;
        loop {
            attempt += 1;
            let mut rng = self.rng_for_attempt(attempt);
            match self.factorizer.factorize(value, &mut rng) {
                Err(err) if err.is_retryable() && attempt < self.config.max_attempts => {
                    warn!("attempt {} failed: {}", attempt, err);
                }
                result => return result,
            }
        }
    }

    fn rng_for_attempt(&self, attempt: usize) -> StdRng {
        match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(attempt as u64 - 1)),
            None => StdRng::from_entropy(),
        }
    }
}

/// Строки ответа для разложенного произведения: отсортированы и без повторов.
pub fn answer_lines(
    decoded: &Decoded,
    factors: &[Poly],
    mode: PairMode,
) -> Result<Vec<String>, FactorError> {
    let words = decoded.factor_words();
    let mut lines = match mode {
        PairMode::Reference => reference_lines(decoded, factors, words)?,
        PairMode::Exhaustive => exhaustive_lines(decoded, factors, words)?,
    };
    lines.sort();
    lines.dedup();
    Ok(lines)
}

/// Пары (p, q) и (q, p). При нулевом слове во входе добавляется тривиальная
/// пара (1, value); обе её части, как и p и q, записываются в S/32 слов.
/// Неприводимое значение допустимо только вместе с нулевым словом.
fn reference_lines(
    decoded: &Decoded,
    factors: &[Poly],
    words: usize,
) -> Result<Vec<String>, FactorError> {
    let mut lines = match factors {
        [p, q] => {
            let p_hex = encode(p, words)?;
            let q_hex = encode(q, words)?;
            vec![format!("{} {}", p_hex, q_hex), format!("{} {}", q_hex, p_hex)]
        }
        [_] if decoded.has_zero_word => Vec::new(),
        _ => return Err(FactorError::UnexpectedFactorCount(factors.len())),
    };

    if decoded.has_zero_word {
        match encode(&decoded.value, words) {
            Ok(value_hex) => {
                let one_hex = encode(&Poly::one(), words)?;
                lines.push(format!("{} {}", one_hex, value_hex));
                lines.push(format!("{} {}", value_hex, one_hex));
            }
            Err(FactorError::FactorTooWide { degree, .. }) => {
                warn!(
                    "value of degree {} does not fit {} words, identity pair skipped",
                    degree, words
                );
            }
            Err(err) => return Err(err),
        }
    }

    if lines.is_empty() {
        return Err(FactorError::UnexpectedFactorCount(factors.len()));
    }
    Ok(lines)
}

fn exhaustive_lines(
    decoded: &Decoded,
    factors: &[Poly],
    words: usize,
) -> Result<Vec<String>, FactorError> {
    let grouped = group_factors(factors);
    let mut lines = Vec::new();
    collect_splits(&grouped, Poly::one(), &decoded.value, words, &mut lines)?;
    Ok(lines)
}

/// Одинаковые множители (список отсортирован) сворачиваются в пары (множитель, кратность)
fn group_factors(factors: &[Poly]) -> Vec<(Poly, usize)> {
    let mut grouped: Vec<(Poly, usize)> = Vec::new();
    for factor in factors {
        match grouped.last_mut() {
            Some((last, count)) if last == factor => *count += 1,
            _ => grouped.push((factor.clone(), 1)),
        }
    }
    grouped
}

/// Перебор делителей `left` с отсечением по ширине одного множителя
fn collect_splits(
    grouped: &[(Poly, usize)],
    left: Poly,
    value: &Poly,
    words: usize,
    lines: &mut Vec<String>,
) -> Result<(), FactorError> {
    let limit = words * 32;
    let Some(((factor, multiplicity), rest)) = grouped.split_first() else {
        let right = value.checked_div(&left)?;
        if right.degree() < limit {
            lines.push(format!("{} {}", encode(&left, words)?, encode(&right, words)?));
        }
        return Ok(());
    };

    let mut current = left;
    for taken in 0..=*multiplicity {
        if taken > 0 {
            if current.degree() + factor.degree() >= limit {
                break;
            }
            current = current.try_mul(factor)?;
        }
        collect_splits(rest, current.clone(), value, words, lines)?;
    }
    Ok(())
}
