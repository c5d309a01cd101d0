use super::arithmetic::gcd;
use super::polynomial::BinaryPolynomial;

/// Простые делители n
fn prime_divisors(mut n: usize) -> Vec<usize> {
    let mut primes = Vec::new();
    let mut d = 2;
    while d * d <= n {
        if n % d == 0 {
            primes.push(d);
            while n % d == 0 {
                n /= d;
            }
        }
        d += 1;
    }
    if n > 1 {
        primes.push(n);
    }
    primes
}

/// Проверка: является ли полином неприводимым над GF(2) (тест Рабина)
pub fn is_irreducible<const LIMBS: usize>(poly: &BinaryPolynomial<LIMBS>) -> bool {
    let n = poly.degree();
    if poly.is_zero() || n < 1 {
        return false;
    }
    let x = BinaryPolynomial::<LIMBS>::x();

    // 1) f(x) должно делить x^(2^n) - x
    let (Ok(xp), Ok(x_mod)) = (x.frobenius_mod(n, poly), x.checked_rem(poly)) else {
        return false;
    };
    if xp != x_mod {
        return false;
    }

    // 2) для каждого простого p | n: gcd(x^(2^(n/p)) - x, f) = 1
    for p in prime_divisors(n) {
        let Ok(xp_k) = x.frobenius_mod(n / p, poly) else {
            return false;
        };
        if !gcd(&(xp_k + &x), poly).is_one() {
            return false;
        }
    }
    true
}

/// Все неприводимые полиномы степени `n` (перебор, только для малых n)
pub fn list_irreducibles<const LIMBS: usize>(n: usize) -> Vec<BinaryPolynomial<LIMBS>> {
    if n == 0 || n > 62 || n >= BinaryPolynomial::<LIMBS>::CAPACITY {
        return Vec::new();
    }
    let top = 1u64 << n;
    (0..top)
        .map(|mask| BinaryPolynomial::from_u64(top | mask))
        .filter(|poly| is_irreducible(poly))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prime_divisors_of_small_numbers() {
        assert_eq!(prime_divisors(1), Vec::<usize>::new());
        assert_eq!(prime_divisors(12), vec![2, 3]);
        assert_eq!(prime_divisors(13), vec![13]);
        assert_eq!(prime_divisors(64), vec![2]);
    }
}
