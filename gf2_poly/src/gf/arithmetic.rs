use crate::error::Gf2Error;
use crate::gf::polynomial::BinaryPolynomial;

impl<const LIMBS: usize> BinaryPolynomial<LIMBS> {
    /// Умножение в GF(2)[x]: для каждого единичного бита i правого операнда
    /// прибавляем левый операнд, сдвинутый на i.
    /// Степень пересчитывается по битам результата.
    pub fn try_mul(&self, rhs: &Self) -> Result<Self, Gf2Error> {
        if self.is_zero() || rhs.is_zero() {
            return Ok(Self::zero());
        }
        let required = self.degree() + rhs.degree() + 1;
        if required > Self::CAPACITY {
            return Err(Gf2Error::CapacityOverflow {
                required,
                capacity: Self::CAPACITY,
            });
        }

        let mut product = Self::zero();
        for i in rhs.as_bits().iter_ones() {
            product.xor_shifted(self, i);
        }
        Ok(product)
    }

    /// Деление с остатком: (частное, остаток)
    pub fn div_rem(&self, divisor: &Self) -> Result<(Self, Self), Gf2Error> {
        if divisor.is_zero() {
            return Err(Gf2Error::DegenerateOperand("division by the zero polynomial"));
        }

        let mut quotient = Self::zero();
        let mut remainder = self.clone();
        while !remainder.is_zero() && remainder.degree() >= divisor.degree() {
            let shift = remainder.degree() - divisor.degree();
            quotient.set_bit(shift)?;
            remainder.xor_shifted(divisor, shift);
        }
        Ok((quotient, remainder))
    }

    pub fn checked_div(&self, divisor: &Self) -> Result<Self, Gf2Error> {
        self.div_rem(divisor).map(|(quotient, _)| quotient)
    }

    pub fn checked_rem(&self, divisor: &Self) -> Result<Self, Gf2Error> {
        if divisor.is_zero() {
            return Err(Gf2Error::DegenerateOperand("division by the zero polynomial"));
        }
        let mut remainder = self.clone();
        remainder.reduce(divisor);
        Ok(remainder)
    }

    /// (self * rhs) mod modulus без выхода за ёмкость:
    /// сдвиг накопителя и редукция выполняются на каждом шаге.
    pub fn mul_mod(&self, rhs: &Self, modulus: &Self) -> Result<Self, Gf2Error> {
        if modulus.is_zero() {
            return Err(Gf2Error::DegenerateOperand("reduction by the zero polynomial"));
        }
        if modulus.degree() == 0 {
            return Ok(Self::zero());
        }

        let lhs = self.checked_rem(modulus)?;
        let rhs = rhs.checked_rem(modulus)?;

        let mut acc = Self::zero();
        for i in (0..=rhs.degree()).rev() {
            acc = acc.shl(1)?;
            if !acc.is_zero() && acc.degree() == modulus.degree() {
                acc += modulus;
            }
            if rhs.bit(i) {
                acc += &lhs;
            }
        }
        Ok(acc)
    }

    pub fn square_mod(&self, modulus: &Self) -> Result<Self, Gf2Error> {
        self.mul_mod(self, modulus)
    }

    /// self^(2^k) mod modulus: k-кратное применение отображения Фробениуса
    pub fn frobenius_mod(&self, k: usize, modulus: &Self) -> Result<Self, Gf2Error> {
        let mut result = self.checked_rem(modulus)?;
        for _ in 0..k {
            result = result.square_mod(modulus)?;
        }
        Ok(result)
    }

    /// Возведение в степень: self^exp mod modulus
    pub fn pow_mod(&self, exp: u64, modulus: &Self) -> Result<Self, Gf2Error> {
        let mut result = Self::one().checked_rem(modulus)?;
        let mut base = self.checked_rem(modulus)?;
        let mut exp = exp;

        while exp > 0 {
            if exp & 1 == 1 {
                result = result.mul_mod(&base, modulus)?;
            }
            base = base.square_mod(modulus)?;
            exp >>= 1;
        }
        Ok(result)
    }

    /// Формальная производная: в характеристике 2 выживают только члены нечётной
    /// степени, после сдвига на один разряд они стоят на чётных позициях.
    pub fn derivative(&self) -> Self {
        let mut derived = self.shr(1);
        let bits = derived.as_bits_mut();
        for i in (1..Self::CAPACITY).step_by(2) {
            bits.set(i, false);
        }
        derived.recompute_degree();
        derived
    }

    /// gcd(f, f') равен 1, либо f' = 0 и gcd совпадает с самим f
    pub fn is_square_free(&self) -> bool {
        let g = gcd(self, &self.derivative());
        g.is_one() || g == *self
    }

    /// Квадратный корень: определён, только если все нечётные коэффициенты равны нулю
    pub fn sqrt(&self) -> Option<Self> {
        let bits = self.as_bits();
        if bits.iter_ones().any(|i| i % 2 == 1) {
            return None;
        }

        let mut root = Self::zero();
        for i in bits.iter_ones() {
            root.as_bits_mut().set(i / 2, true);
        }
        root.recompute_degree();
        Some(root)
    }

    /// Младшие `parts` 32-битных слов, старшее слово первым
    pub fn split(&self, parts: usize) -> Vec<u32> {
        (0..parts).rev().map(|i| self.word(i)).collect()
    }

    /// Остаток от деления на заведомо ненулевой divisor
    fn reduce(&mut self, divisor: &Self) {
        while !self.is_zero() && self.degree() >= divisor.degree() {
            let shift = self.degree() - divisor.degree();
            self.xor_shifted(divisor, shift);
        }
    }
}

/// НОД полиномов через алгоритм Евклида
pub fn gcd<const LIMBS: usize>(
    lhs: &BinaryPolynomial<LIMBS>,
    rhs: &BinaryPolynomial<LIMBS>,
) -> BinaryPolynomial<LIMBS> {
    let mut a = lhs.clone();
    let mut b = rhs.clone();
    while !b.is_zero() {
        a.reduce(&b);
        std::mem::swap(&mut a, &mut b);
    }
    a
}
