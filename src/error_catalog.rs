//! Catálogo imutável de erros do motor de matemática.
use core::fmt;

/// Código de erro do motor.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum MathErrorCode {
    /// Base da potência fora do intervalo representável (`baseN >= MAX_NUM`).
    InvalidBase,
    /// Nenhuma precisão calibrada comporta o expoente.
    NoPrecisionFound,
    /// Divisor zero em alguma fórmula.
    ZeroDenominator,
    /// Saída pedida esgota a reserva do par.
    InsufficientReserve,
    /// Overflow ou underflow em cálculos numéricos.
    OverflowNumeric,
    /// Entrada fora do domínio do aproximador racional.
    InvalidApproximationInput,
    /// Conjunto de parâmetros de curva inválido.
    InvalidCurveParameters,
}

impl MathErrorCode {
    /// Código textual estável do erro.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidBase => "MATH-0001",
            Self::NoPrecisionFound => "MATH-0002",
            Self::ZeroDenominator => "MATH-0003",
            Self::InsufficientReserve => "MATH-0004",
            Self::OverflowNumeric => "MATH-0005",
            Self::InvalidApproximationInput => "MATH-0006",
            Self::InvalidCurveParameters => "MATH-0007",
        }
    }

    /// Título curto em português.
    pub const fn title(&self) -> &'static str {
        match self {
            Self::InvalidBase => "Base inválida",
            Self::NoPrecisionFound => "Precisão não encontrada",
            Self::ZeroDenominator => "Denominador zero",
            Self::InsufficientReserve => "Reserva insuficiente",
            Self::OverflowNumeric => "Overflow numérico",
            Self::InvalidApproximationInput => "Entrada de aproximação inválida",
            Self::InvalidCurveParameters => "Parâmetros de curva inválidos",
        }
    }

    /// Mensagem base em português.
    pub const fn message_pt(&self) -> &'static str {
        match self {
            Self::InvalidBase => "baseN deve ser < MAX_NUM",
            Self::NoPrecisionFound => "expoente acima de todas as precisões calibradas",
            Self::ZeroDenominator => "denominador deve ser > 0",
            Self::InsufficientReserve => "amount_out deve ser < reserva de saída",
            Self::OverflowNumeric => "overflow/underflow numérico",
            Self::InvalidApproximationInput => "x deve ser finito e > 0 e N >= 1",
            Self::InvalidCurveParameters => "factorN deve ser > 0",
        }
    }

    /// Retorna todas as variantes em ordem estável.
    pub fn all() -> &'static [MathErrorCode] {
        const ALL: &[MathErrorCode] = &[
            MathErrorCode::InvalidBase,
            MathErrorCode::NoPrecisionFound,
            MathErrorCode::ZeroDenominator,
            MathErrorCode::InsufficientReserve,
            MathErrorCode::OverflowNumeric,
            MathErrorCode::InvalidApproximationInput,
            MathErrorCode::InvalidCurveParameters,
        ];
        ALL
    }
}

impl fmt::Display for MathErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Mensagem padrão na localidade ativa (pt-BR).
pub fn default_locale_message(code: MathErrorCode) -> &'static str {
    code.message_pt()
}
