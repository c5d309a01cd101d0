use gf2_poly::BinaryPolynomial;
use log::debug;
use rand::Rng;

use super::cantor_zassenhaus::EqualDegreeSplitter;
use super::ddf::{distinct_degree_chain, distinct_degree_factorization};
use super::squarefree::square_free_decomposition;
use crate::error::FactorError;

/// Факторизация: свободные от квадратов части → распределение по степеням →
/// равностепенное расщепление.
#[derive(Debug, Clone, Default)]
pub struct Factorizer {
    splitter: EqualDegreeSplitter,
}

impl Factorizer {
    pub fn new(max_split_trials: usize) -> Self {
        Self {
            splitter: EqualDegreeSplitter::new(max_split_trials),
        }
    }

    pub fn splitter(&self) -> &EqualDegreeSplitter {
        &self.splitter
    }

    /// Все неприводимые множители, повторённые по кратности и отсортированные.
    /// Для единицы результат пуст.
    pub fn factorize<const LIMBS: usize, R: Rng + ?Sized>(
        &self,
        f: &BinaryPolynomial<LIMBS>,
        rng: &mut R,
    ) -> Result<Vec<BinaryPolynomial<LIMBS>>, FactorError> {
        if f.is_zero() {
            return Err(FactorError::ZeroPolynomial);
        }

        let mut factors = Vec::new();
        for (part, multiplicity) in square_free_decomposition(f)? {
            debug!("square-free part of degree {} with multiplicity {}", part.degree(), multiplicity);

            for (block, degree) in distinct_degree_factorization(&part)? {
                debug!("block of degree {} holds factors of degree {}", block.degree(), degree);

                for factor in self.splitter.split(&block, degree, rng)? {
                    for _ in 0..multiplicity {
                        factors.push(factor.clone());
                    }
                }
            }
        }
        factors.sort();
        Ok(factors)
    }

    /// Разложение произведения двух неприводимых одной степени:
    /// равностепенное расщепление с d = deg f / 2.
    /// Полином нечётной степени такой парой быть не может и возвращается как есть.
    pub fn factorize_equal_degree<const LIMBS: usize, R: Rng + ?Sized>(
        &self,
        f: &BinaryPolynomial<LIMBS>,
        rng: &mut R,
    ) -> Result<Vec<BinaryPolynomial<LIMBS>>, FactorError> {
        if f.is_zero() {
            return Err(FactorError::ZeroPolynomial);
        }
        if f.degree() == 0 {
            return Ok(Vec::new());
        }

        let degree = if f.degree() % 2 == 0 {
            f.degree() / 2
        } else {
            f.degree()
        };
        let mut factors = self.splitter.split(f, degree, rng)?;
        factors.sort();
        Ok(factors)
    }

    /// Одиночное расщепление: первый нетривиальный блок цепочки распределения
    /// по степеням раскладывается на неприводимые множители этой степени.
    /// Для произведения двух неприводимых одной степени это и есть полный ответ.
    pub fn factorize_first_block<const LIMBS: usize, R: Rng + ?Sized>(
        &self,
        f: &BinaryPolynomial<LIMBS>,
        rng: &mut R,
    ) -> Result<Vec<BinaryPolynomial<LIMBS>>, FactorError> {
        let chain = distinct_degree_chain(f)?;
        match chain.last() {
            Some(block) if block.degree() > 0 => {
                let mut factors = self.splitter.split(block, chain.len(), rng)?;
                factors.sort();
                Ok(factors)
            }
            _ => Ok(Vec::new()),
        }
    }
}
