use gf2_poly::{gcd, BinaryPolynomial};
use log::trace;

use crate::error::FactorError;

/// Цепочка НОД распределения по степеням, остановленная на первом нетривиальном.
///
/// На шаге i вычисляется s = x^(2^i) mod f_i и g_i = gcd(s + x, f_i).
/// Если deg g_i > 0, то g_i есть произведение всех неприводимых множителей степени i,
/// и цепочка заканчивается. Вход предполагается свободным от квадратов.
pub fn distinct_degree_chain<const LIMBS: usize>(
    f: &BinaryPolynomial<LIMBS>,
) -> Result<Vec<BinaryPolynomial<LIMBS>>, FactorError> {
    if f.is_zero() {
        return Err(FactorError::ZeroPolynomial);
    }

    let x = BinaryPolynomial::<LIMBS>::x();
    let mut remaining = f.clone();
    let mut s = x.clone();
    let mut chain = Vec::new();

    for i in 1..=f.degree() {
        s = s.square_mod(&remaining)?;
        let g = gcd(&(&s + &x), &remaining);
        trace!("ddf step {}: gcd of degree {}", i, g.degree());

        if g.degree() > 0 {
            chain.push(g);
            break;
        }
        remaining = remaining.checked_div(&g)?;
        chain.push(g);
    }
    Ok(chain)
}

/// Полное распределение по степеням: блоки (произведение, степень множителей).
/// Вход должен быть свободен от квадратов.
pub fn distinct_degree_factorization<const LIMBS: usize>(
    f: &BinaryPolynomial<LIMBS>,
) -> Result<Vec<(BinaryPolynomial<LIMBS>, usize)>, FactorError> {
    if f.is_zero() {
        return Err(FactorError::ZeroPolynomial);
    }

    let x = BinaryPolynomial::<LIMBS>::x();
    let mut remaining = f.clone();
    let mut s = x.clone();
    let mut blocks = Vec::new();
    let mut degree = 0;

    while remaining.degree() > 0 {
        degree += 1;
        // множителей степени меньше degree не осталось, значит остаток неприводим
        if remaining.degree() < 2 * degree {
            let block_degree = remaining.degree();
            blocks.push((remaining, block_degree));
            break;
        }

        s = s.square_mod(&remaining)?;
        let g = gcd(&(&s + &x), &remaining);
        if g.degree() > 0 {
            trace!("ddf block of degree {}: {:x}", degree, g);
            remaining = remaining.checked_div(&g)?;
            s = s.checked_rem(&remaining)?;
            blocks.push((g, degree));
        }
    }
    Ok(blocks)
}
