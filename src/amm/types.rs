//! Estado do par e cotações do quoter de produto constante.

use crate::types::U256;

/// Fee do par em "de 10000" (9970 = 0,30% de taxa).
pub type FeeOutOf10000 = u32;

/// Snapshot das reservas de um par Fraxswap-like.
/// `T` identifica o token (endereço, símbolo, ...); só precisa de `PartialEq`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PoolState<T> {
    pub reserve0: U256,
    pub reserve1: U256,
    pub token0: T,
    pub fee: FeeOutOf10000,
}

impl<T: PartialEq> PoolState<T> {
    pub fn new(reserve0: U256, reserve1: U256, token0: T, fee: FeeOutOf10000) -> Self {
        Self { reserve0, reserve1, token0, fee }
    }

    /// `(reserve_in, reserve_out)` quando `token_in` entra no par.
    #[inline]
    pub fn reserves_for_input(&self, token_in: &T) -> (U256, U256) {
        if *token_in == self.token0 {
            (self.reserve0, self.reserve1)
        } else {
            (self.reserve1, self.reserve0)
        }
    }

    /// `(reserve_in, reserve_out)` quando `token_out` sai do par.
    #[inline]
    pub fn reserves_for_output(&self, token_out: &T) -> (U256, U256) {
        if *token_out == self.token0 {
            (self.reserve1, self.reserve0)
        } else {
            (self.reserve0, self.reserve1)
        }
    }
}

/// Cotação com limite de slippage: `min_out` (exact input) ou `max_in` (exact output).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SwapQuote {
    pub amount: U256,
    pub limit: U256,
}
