//! Разложение произведения двух двоичных полиномов на множители:
//! разбор упакованного ввода, факторизация над GF(2) и печать пар.

pub mod codec;
pub mod config;
pub mod error;
pub mod factor;
pub mod solver;

pub use codec::{decode, encode, parse_problem, Decoded};
pub use config::{PairMode, SolverConfig};
pub use error::FactorError;
pub use factor::Factorizer;
pub use solver::{answer_lines, Solver};
