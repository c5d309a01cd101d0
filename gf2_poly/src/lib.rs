//! Арифметика в кольце GF(2)[x] на битовом векторе фиксированной ёмкости.

pub mod error;
pub mod gf;

pub use error::Gf2Error;
pub use gf::arithmetic::gcd;
pub use gf::irreducible::{is_irreducible, list_irreducibles};
pub use gf::polynomial::{BinaryPolynomial, Poly, DEFAULT_LIMBS};
