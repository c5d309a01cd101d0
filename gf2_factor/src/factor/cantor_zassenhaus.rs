use gf2_poly::{gcd, BinaryPolynomial, Gf2Error};
use log::{debug, trace};
use rand::Rng;

use crate::error::FactorError;

/// W = T + T^2 + T^4 + ... + T^(2^(degree-1)) mod modulus.
/// По модулю каждого неприводимого множителя степени `degree` это след, равный 0 или 1.
pub fn trace_map<const LIMBS: usize>(
    t: &BinaryPolynomial<LIMBS>,
    degree: usize,
    modulus: &BinaryPolynomial<LIMBS>,
) -> Result<BinaryPolynomial<LIMBS>, FactorError> {
    let mut term = t.checked_rem(modulus)?;
    let mut acc = term.clone();
    for _ in 1..degree {
        term = term.square_mod(modulus)?;
        acc += &term;
    }
    Ok(acc)
}

/// Равностепенное расщепление Кантора–Цассенхауса.
///
/// Вероятностный алгоритм: число попыток на каждый блок ограничено `max_trials`,
/// после чего возвращается `SplitExhausted`.
#[derive(Debug, Clone)]
pub struct EqualDegreeSplitter {
    max_trials: usize,
}

impl EqualDegreeSplitter {
    pub fn new(max_trials: usize) -> Self {
        Self { max_trials }
    }

    pub fn max_trials(&self) -> usize {
        self.max_trials
    }

    /// Разлагает `block` (произведение различных неприводимых полиномов степени `degree`)
    /// на сами эти полиномы.
    pub fn split<const LIMBS: usize, R: Rng + ?Sized>(
        &self,
        block: &BinaryPolynomial<LIMBS>,
        degree: usize,
        rng: &mut R,
    ) -> Result<Vec<BinaryPolynomial<LIMBS>>, FactorError> {
        if block.is_zero() {
            return Err(FactorError::ZeroPolynomial);
        }
        if degree == 0 || block.degree() % degree != 0 {
            return Err(Gf2Error::DegenerateOperand(
                "block degree is not a multiple of the factor degree",
            )
            .into());
        }

        let mut factors = Vec::new();
        self.split_into(block, degree, rng, &mut factors)?;
        Ok(factors)
    }

    fn split_into<const LIMBS: usize, R: Rng + ?Sized>(
        &self,
        block: &BinaryPolynomial<LIMBS>,
        degree: usize,
        rng: &mut R,
        factors: &mut Vec<BinaryPolynomial<LIMBS>>,
    ) -> Result<(), FactorError> {
        if block.degree() == degree {
            factors.push(block.clone());
            return Ok(());
        }

        for trial in 1..=self.max_trials {
            let candidate = BinaryPolynomial::random(block.degree(), 0.5, rng);
            let w = trace_map(&candidate, degree, block)?;
            let u = gcd(block, &w);

            if u.degree() > 0 && u.degree() < block.degree() {
                debug!(
                    "split degree-{} block into {} + {} after {} trial(s)",
                    block.degree(),
                    u.degree(),
                    block.degree() - u.degree(),
                    trial
                );
                let complement = block.checked_div(&u)?;
                self.split_into(&u, degree, rng, factors)?;
                self.split_into(&complement, degree, rng, factors)?;
                return Ok(());
            }
            trace!("trial {} gave gcd of degree {}", trial, u.degree());
        }

        Err(FactorError::SplitExhausted {
            degree,
            block_degree: block.degree(),
            trials: self.max_trials,
        })
    }
}

impl Default for EqualDegreeSplitter {
    fn default() -> Self {
        Self::new(256)
    }
}
