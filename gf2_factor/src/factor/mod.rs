pub mod cantor_zassenhaus;
pub mod ddf;
pub mod factorizer;
pub mod squarefree;

pub use cantor_zassenhaus::{trace_map, EqualDegreeSplitter};
pub use ddf::{distinct_degree_chain, distinct_degree_factorization};
pub use factorizer::Factorizer;
pub use squarefree::square_free_decomposition;
