use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign};

use bitvec::prelude::*;
use rand::Rng;

use crate::error::Gf2Error;

/// Число 64-битных слов по умолчанию: 16 * 64 = 1024 бита.
pub const DEFAULT_LIMBS: usize = 16;

/// Полином ёмкостью 1024 бита.
pub type Poly = BinaryPolynomial<DEFAULT_LIMBS>;

/// Полином над GF(2), хранящийся в массиве из `LIMBS` слов.
/// Бит i: коэффициент при x^i.
///
/// `degree`: индекс старшего единичного бита (0 для нулевого и единичного полинома),
/// пересчитывается после каждой мутации.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BinaryPolynomial<const LIMBS: usize = DEFAULT_LIMBS> {
    limbs: [u64; LIMBS],
    degree: usize,
}

impl<const LIMBS: usize> BinaryPolynomial<LIMBS> {
    /// Ёмкость в битах
    pub const CAPACITY: usize = LIMBS * 64;

    pub fn zero() -> Self {
        Self {
            limbs: [0; LIMBS],
            degree: 0,
        }
    }

    pub fn one() -> Self {
        Self::from_u64(1)
    }

    /// Полином "x"
    pub fn x() -> Self {
        Self::from_u64(2)
    }

    /// Младшие 32 бита задаются значением напрямую
    pub fn from_u32(value: u32) -> Self {
        Self::from_u64(u64::from(value))
    }

    pub fn from_u64(value: u64) -> Self {
        let mut limbs = [0u64; LIMBS];
        limbs[0] = value;
        Self::from_limbs(limbs)
    }

    pub fn from_limbs(limbs: [u64; LIMBS]) -> Self {
        let mut poly = Self { limbs, degree: 0 };
        poly.recompute_degree();
        poly
    }

    /// Строит сумму x^e по всем показателям (повторы не сокращаются, бит просто ставится).
    pub fn from_exponents(exponents: &[usize]) -> Result<Self, Gf2Error> {
        let mut poly = Self::zero();
        for &e in exponents {
            poly.set_bit(e)?;
        }
        Ok(poly)
    }

    /// Случайный полином: каждый бит с индексом меньше `target_degree`
    /// независимо равен 1 с вероятностью `p`.
    pub fn random<R: Rng + ?Sized>(target_degree: usize, p: f64, rng: &mut R) -> Self {
        let mut poly = Self::zero();
        let bits = poly.limbs.view_bits_mut::<Lsb0>();
        for n in 0..target_degree.min(Self::CAPACITY) {
            bits.set(n, rng.gen_bool(p));
        }
        poly.recompute_degree();
        poly
    }

    pub fn capacity(&self) -> usize {
        Self::CAPACITY
    }

    pub fn degree(&self) -> usize {
        self.degree
    }

    pub fn is_zero(&self) -> bool {
        self.limbs.iter().all(|&limb| limb == 0)
    }

    pub fn is_one(&self) -> bool {
        self.degree == 0 && self.limbs[0] == 1
    }

    /// Коэффициент при x^index (за пределами ёмкости всегда 0)
    pub fn bit(&self, index: usize) -> bool {
        index < Self::CAPACITY && self.as_bits()[index]
    }

    pub fn set_bit(&mut self, index: usize) -> Result<(), Gf2Error> {
        self.check_fits(index)?;
        self.as_bits_mut().set(index, true);
        self.degree = self.degree.max(index);
        Ok(())
    }

    pub fn clear_bit(&mut self, index: usize) {
        if index >= Self::CAPACITY {
            return;
        }
        self.as_bits_mut().set(index, false);
        if index == self.degree {
            self.recompute_degree();
        }
    }

    /// 32-битное слово с номером `index`: биты `32 * index .. 32 * index + 32`
    pub fn word(&self, index: usize) -> u32 {
        match index.checked_mul(32) {
            Some(start) if start < Self::CAPACITY => {
                self.as_bits()[start..start + 32].load_le::<u32>()
            }
            _ => 0,
        }
    }

    pub fn hamming_weight(&self) -> usize {
        self.as_bits().count_ones()
    }

    /// Умножение на x^n. Старший бит не должен выйти за ёмкость.
    pub fn shl(&self, n: usize) -> Result<Self, Gf2Error> {
        if self.is_zero() || n == 0 {
            return Ok(self.clone());
        }
        let top = self.degree.saturating_add(n);
        self.check_fits(top)?;

        let mut shifted = self.clone();
        shifted.as_bits_mut().shift_right(n);
        shifted.degree = top;
        Ok(shifted)
    }

    /// Деление на x^n с отбрасыванием младших битов
    pub fn shr(&self, n: usize) -> Self {
        if n >= Self::CAPACITY {
            return Self::zero();
        }
        let mut shifted = self.clone();
        if n > 0 {
            shifted.as_bits_mut().shift_left(n);
            shifted.recompute_degree();
        }
        shifted
    }

    pub(crate) fn as_bits(&self) -> &BitSlice<u64, Lsb0> {
        self.limbs.view_bits::<Lsb0>()
    }

    pub(crate) fn as_bits_mut(&mut self) -> &mut BitSlice<u64, Lsb0> {
        self.limbs.view_bits_mut::<Lsb0>()
    }

    pub(crate) fn recompute_degree(&mut self) {
        self.degree = self.as_bits().last_one().unwrap_or(0);
    }

    /// self ^= divisor * x^shift, когда заранее известно, что результат помещается
    pub(crate) fn xor_shifted(&mut self, other: &Self, shift: usize) {
        let mut shifted = other.clone();
        if shift > 0 {
            shifted.as_bits_mut().shift_right(shift);
        }
        *self += &shifted;
    }

    fn check_fits(&self, index: usize) -> Result<(), Gf2Error> {
        if index >= Self::CAPACITY {
            return Err(Gf2Error::CapacityOverflow {
                required: index.saturating_add(1),
                capacity: Self::CAPACITY,
            });
        }
        Ok(())
    }
}

impl<const LIMBS: usize> Default for BinaryPolynomial<LIMBS> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<const LIMBS: usize> AddAssign<&BinaryPolynomial<LIMBS>> for BinaryPolynomial<LIMBS> {
    fn add_assign(&mut self, rhs: &Self) {
        for (lhs, rhs) in self.limbs.iter_mut().zip(rhs.limbs.iter()) {
            *lhs ^= *rhs;
        }
        self.recompute_degree();
    }
}

impl<const LIMBS: usize> AddAssign for BinaryPolynomial<LIMBS> {
    fn add_assign(&mut self, rhs: Self) {
        *self += &rhs;
    }
}

impl<const LIMBS: usize> Add<&BinaryPolynomial<LIMBS>> for &BinaryPolynomial<LIMBS> {
    type Output = BinaryPolynomial<LIMBS>;

    fn add(self, rhs: &BinaryPolynomial<LIMBS>) -> Self::Output {
        let mut output = self.clone();
        output += rhs;
        output
    }
}

impl<const LIMBS: usize> Add<&BinaryPolynomial<LIMBS>> for BinaryPolynomial<LIMBS> {
    type Output = BinaryPolynomial<LIMBS>;

    fn add(mut self, rhs: &BinaryPolynomial<LIMBS>) -> Self::Output {
        self += rhs;
        self
    }
}

impl<const LIMBS: usize> Add for BinaryPolynomial<LIMBS> {
    type Output = BinaryPolynomial<LIMBS>;

    fn add(mut self, rhs: Self) -> Self::Output {
        self += &rhs;
        self
    }
}

impl<const LIMBS: usize> Ord for BinaryPolynomial<LIMBS> {
    /// Сначала по степени, при равенстве: по битам от старшего к младшему
    fn cmp(&self, other: &Self) -> Ordering {
        self.degree.cmp(&other.degree).then_with(|| {
            let lhs = self.as_bits();
            let rhs = other.as_bits();
            for i in (0..=self.degree).rev() {
                match (lhs[i], rhs[i]) {
                    (true, false) => return Ordering::Greater,
                    (false, true) => return Ordering::Less,
                    _ => {}
                }
            }
            Ordering::Equal
        })
    }
}

impl<const LIMBS: usize> PartialOrd for BinaryPolynomial<LIMBS> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<const LIMBS: usize> fmt::LowerHex for BinaryPolynomial<LIMBS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let top = match self.limbs.iter().rposition(|&limb| limb != 0) {
            Some(top) => top,
            None => return write!(f, "0"),
        };
        write!(f, "{:x}", self.limbs[top])?;
        for limb in self.limbs[..top].iter().rev() {
            write!(f, "{:016x}", limb)?;
        }
        Ok(())
    }
}

impl<const LIMBS: usize> fmt::Display for BinaryPolynomial<LIMBS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(self, f)
    }
}

impl<const LIMBS: usize> fmt::Debug for BinaryPolynomial<LIMBS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BinaryPolynomial(0x{:x}, deg={})", self, self.degree)
    }
}

impl<const LIMBS: usize> From<u32> for BinaryPolynomial<LIMBS> {
    fn from(value: u32) -> Self {
        Self::from_u32(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    type Small = BinaryPolynomial<2>;

    #[test]
    fn degree_follows_highest_bit() {
        let mut p = Small::from_u64(0b1011);
        assert_eq!(p.degree(), 3);
        p.clear_bit(3);
        assert_eq!(p.degree(), 1);
        p.set_bit(100).unwrap();
        assert_eq!(p.degree(), 100);
        p.clear_bit(100);
        assert_eq!(p.degree(), 1);
    }

    #[test]
    fn zero_and_one_have_degree_zero() {
        assert_eq!(Small::zero().degree(), 0);
        assert_eq!(Small::one().degree(), 0);
        assert!(Small::zero().is_zero());
        assert!(Small::one().is_one());
        assert!(!Small::zero().is_one());
    }

    #[test]
    fn set_bit_past_capacity_fails() {
        let mut p = Small::zero();
        assert_eq!(
            p.set_bit(128),
            Err(Gf2Error::CapacityOverflow {
                required: 129,
                capacity: 128
            })
        );
        assert!(p.set_bit(127).is_ok());
    }

    #[test]
    fn shift_crosses_limb_boundary() {
        let p = Small::from_u64(0b11);
        let shifted = p.shl(63).unwrap();
        assert!(shifted.bit(63));
        assert!(shifted.bit(64));
        assert_eq!(shifted.degree(), 64);
        assert_eq!(shifted.shr(63), p);
        assert!(p.shl(127).is_err());
    }

    #[test]
    fn shr_drops_low_bits() {
        let p = Small::from_u64(0b1101);
        assert_eq!(p.shr(2), Small::from_u64(0b11));
        assert_eq!(p.shr(200), Small::zero());
    }

    #[test]
    fn words_are_little_endian() {
        let p = Small::from_u64(0x1234_5678_9abc_def0);
        assert_eq!(p.word(0), 0x9abc_def0);
        assert_eq!(p.word(1), 0x1234_5678);
        assert_eq!(p.word(4), 0);
    }

    #[test]
    fn hex_formatting() {
        assert_eq!(format!("{}", Small::zero()), "0");
        assert_eq!(format!("{:x}", Small::from_u64(0xab)), "ab");
        let wide = Small::one().shl(64).unwrap() + Small::from_u64(5);
        assert_eq!(format!("{}", wide), "10000000000000005");
    }

    #[test]
    fn random_respects_target_degree() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let p = Small::random(20, 0.5, &mut rng);
            assert!(p.is_zero() || p.degree() < 20);
        }
        assert_eq!(Small::random(20, 0.0, &mut rng), Small::zero());
        assert_eq!(Small::random(3, 1.0, &mut rng), Small::from_u64(0b111));
    }

    #[test]
    fn ordering_by_degree_then_bits() {
        let a = Small::from_u64(0b1010);
        let b = Small::from_u64(0b1001);
        let c = Small::from_u64(0b111);
        assert!(a > b);
        assert!(b > c);
        assert!(Small::one() > Small::zero());
        assert_eq!(a.cmp(&a.clone()), Ordering::Equal);
    }
}
