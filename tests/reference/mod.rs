//! Referência de alta precisão baseada em BigInt/BigRational para o quoter
//! e para a aproximação racional. Fica fora do caminho de produção: serve
//! só como oráculo independente da aritmética U256/U512 do core.

#![allow(dead_code)]

use bonding_curve_core::U256;
use num_bigint::{BigInt, BigUint};
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};

// -------------------------
// Conversões
// -------------------------
pub fn big(v: U256) -> BigUint {
    BigUint::parse_bytes(v.to_string().as_bytes(), 10).expect("decimal")
}

pub fn big_int(v: U256) -> BigInt {
    BigInt::from(big(v))
}

pub fn q(v: U256) -> BigRational {
    BigRational::from_integer(big_int(v))
}

pub fn to_u256(v: &BigUint) -> U256 {
    U256::from_dec_str(&v.to_str_radix(10)).expect("cabe em 256 bits")
}

pub fn floor_to_u256(r: &BigRational) -> U256 {
    let f = r.floor().to_integer();
    assert!(!f.is_negative(), "valor negativo fora do domínio");
    to_u256(&f.to_biguint().expect("não-negativo"))
}

// -------------------------
// CPMM contínuo
// -------------------------
/// Saída exata (sem truncamento): a·f·R / (I·10000 + a·f).
pub fn amount_out_exact(reserve_in: U256, reserve_out: U256, fee: u32, amount_in: U256) -> BigRational {
    let with_fee = q(amount_in) * BigRational::from_integer(BigInt::from(fee));
    let den = q(reserve_in) * BigRational::from_integer(BigInt::from(10_000u32)) + with_fee.clone();
    if den.is_zero() {
        return BigRational::zero();
    }
    with_fee * q(reserve_out) / den
}

/// Input exato mínimo para receber `amount_out`: I·o·10000 / ((R−o)·f).
pub fn amount_in_exact(reserve_in: U256, reserve_out: U256, fee: u32, amount_out: U256) -> BigRational {
    let num = q(reserve_in) * q(amount_out) * BigRational::from_integer(BigInt::from(10_000u32));
    let den = (q(reserve_out) - q(amount_out)) * BigRational::from_integer(BigInt::from(fee));
    num / den
}

/// Produto das reservas em precisão arbitrária.
pub fn k(x: U256, y: U256) -> BigUint {
    big(x) * big(y)
}

// -------------------------
// Vizinhança de Farey
// -------------------------
/// Primeira fração `p/q` (q <= n) estritamente entre `x` e `numerator/denominator`, ignorando
/// frações a menos de `eps` de `x` (ruído de f64 na parte fracionária).
pub fn fraction_strictly_between(x: f64, numerator: u128, denominator: u128, n: u64, eps: &BigRational) -> Option<(BigInt, u64)> {
    let xq = BigRational::from_float(x).expect("finito");
    let r = BigRational::new(BigInt::from(numerator), BigInt::from(denominator));
    let (lo, hi) = if xq < r { (xq.clone(), r) } else { (r, xq.clone()) };
    for qd in 1..=n {
        let qq = BigRational::from_integer(BigInt::from(qd));
        let p = (lo.clone() * qq.clone()).floor().to_integer() + BigInt::one();
        let candidate = BigRational::new(p.clone(), BigInt::from(qd));
        if candidate < hi && (candidate.clone() - xq.clone()).abs() > *eps {
            return Some((p, qd));
        }
    }
    None
}
