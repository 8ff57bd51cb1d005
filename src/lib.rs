//! Motor off-chain de matemática de bonding curve.
//!
//! Reproduz bit a bit a potência em ponto fixo do contrato da curva, as fórmulas
//! de preço/cap/supply, a aproximação racional usada na criação de moedas e o
//! quoter de produto constante do par pós-listagem.

pub mod types;
pub mod error_catalog;
pub mod error;
pub mod guardrails;

pub mod curve;
pub mod rational;
pub mod amm;

pub mod config;
pub mod obs;

pub use error::{MathError, Result};
pub use error_catalog::MathErrorCode;
pub use types::{U256, U512, WAD};
