//! Tipos inteiros de largura fixa e escalas usadas pelo motor.
//! U256 espelha a palavra do ledger; U512 só aparece em intermediários.

use uint::construct_uint;

construct_uint! {
    /// Inteiro de 256 bits (palavra do ledger).
    pub struct U256(4);
}

construct_uint! {
    /// Inteiro de 512 bits para produtos intermediários sem estouro.
    pub struct U512(8);
}

/// 1e18: decimais do token e da moeda nativa.
pub const WAD: U256 = U256([1_000_000_000_000_000_000u64, 0, 0, 0]);

/// Denominador da taxa do par (fee expressa em "de 10000").
pub const FEE_SCALE: u64 = 10_000;

/// Escala de basis points para slippage e progresso.
pub const BPS_SCALE: u64 = 10_000;

/// Parser hexadecimal `const` para as tabelas de calibração.
/// Aceita prefixo `0x`; qualquer outro caractere aborta a compilação.
pub const fn hex_u512(s: &str) -> U512 {
    let bytes = s.as_bytes();
    let mut limbs = [0u64; 8];
    let mut i = if bytes.len() > 2 && bytes[0] == b'0' && bytes[1] == b'x' { 2 } else { 0 };
    while i < bytes.len() {
        let nibble: u64 = match bytes[i] {
            b'0'..=b'9' => (bytes[i] - b'0') as u64,
            b'a'..=b'f' => (bytes[i] - b'a' + 10) as u64,
            b'A'..=b'F' => (bytes[i] - b'A' + 10) as u64,
            _ => panic!("dígito hexadecimal inválido"),
        };
        if limbs[7] >> 60 != 0 {
            panic!("constante excede 512 bits");
        }
        let mut j = 7;
        while j > 0 {
            limbs[j] = (limbs[j] << 4) | (limbs[j - 1] >> 60);
            j -= 1;
        }
        limbs[0] = (limbs[0] << 4) | nibble;
        i += 1;
    }
    U512(limbs)
}

/// Estende um U256 para U512 (sem perda).
#[inline]
pub fn widen(v: U256) -> U512 {
    let mut limbs = [0u64; 8];
    limbs[..4].copy_from_slice(&v.0);
    U512(limbs)
}

/// Reduz um U512 para U256; `None` se houver bits acima do 256º.
#[inline]
pub fn narrow(v: U512) -> Option<U256> {
    if v.0[4..].iter().any(|&limb| limb != 0) {
        return None;
    }
    let mut limbs = [0u64; 4];
    limbs.copy_from_slice(&v.0[..4]);
    Some(U256(limbs))
}
