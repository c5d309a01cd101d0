pub mod arithmetic;
pub mod irreducible;
pub mod polynomial;
