use gf2_poly::{gcd, BinaryPolynomial, Gf2Error};

use crate::error::FactorError;

/// Разложение на свободные от квадратов множители: пары (f_i, i),
/// где f = prod f_i^i, а f_i попарно взаимно просты и свободны от квадратов.
pub fn square_free_decomposition<const LIMBS: usize>(
    f: &BinaryPolynomial<LIMBS>,
) -> Result<Vec<(BinaryPolynomial<LIMBS>, u32)>, FactorError> {
    if f.is_zero() {
        return Err(FactorError::ZeroPolynomial);
    }

    let mut parts = Vec::new();
    decompose(f, 1, &mut parts)?;
    parts.sort_by_key(|(_, multiplicity)| *multiplicity);
    Ok(parts)
}

fn decompose<const LIMBS: usize>(
    f: &BinaryPolynomial<LIMBS>,
    multiplier: u32,
    parts: &mut Vec<(BinaryPolynomial<LIMBS>, u32)>,
) -> Result<(), FactorError> {
    // gcd(f, f') уменьшает кратность каждого множителя на единицу,
    // кроме множителей, входящих в степени, кратной двум
    let mut repeated = gcd(f, &f.derivative());
    let mut square_free = f.checked_div(&repeated)?;

    let mut multiplicity = 0;
    while square_free.degree() > 0 {
        let shared = gcd(&repeated, &square_free);
        let part = square_free.checked_div(&shared)?;

        repeated = repeated.checked_div(&shared)?;
        square_free = shared;
        multiplicity += multiplier;
        if part.degree() > 0 {
            parts.push((part, multiplicity));
        }
    }

    // остаток: полный квадрат: его производная равна нулю
    if repeated.degree() > 0 {
        let root = repeated
            .sqrt()
            .ok_or(Gf2Error::DegenerateOperand("repeated part is not a perfect square"))?;
        decompose(&root, multiplier * 2, parts)?;
    }
    Ok(())
}
