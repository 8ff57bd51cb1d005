pub mod types;      // estado do par e cotações
pub mod error_map;  // classificação das entradas do quoter
pub mod quoter;     // getAmountOut / getAmountIn
pub mod pricing;    // limites de slippage

pub use quoter::{get_amount_in, get_amount_out};
pub use types::{PoolState, SwapQuote};
