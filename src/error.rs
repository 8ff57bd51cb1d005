//! Tipo de erro unificado do motor com formatação estável.
use core::fmt;
use std::collections::BTreeMap;

use crate::error_catalog::{default_locale_message, MathErrorCode};

const CONTEXT_VALUE_MAX: usize = 256;

fn sanitize_value(input: &str) -> String {
    let cleaned: String = input
        .chars()
        .map(|ch| match ch {
            '\n' | '\r' | '\t' => ' ',
            _ => ch,
        })
        .collect();
    if cleaned.chars().count() > CONTEXT_VALUE_MAX {
        let mut truncated = cleaned
            .chars()
            .take(CONTEXT_VALUE_MAX - 1)
            .collect::<String>();
        truncated.push('…');
        truncated
    } else {
        cleaned
    }
}

fn escape_json(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len() + 8);
    for ch in input.chars() {
        match ch {
            '"' => escaped.push_str("\\\""),
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            c if c.is_control() => {
                use core::fmt::Write as _;
                let _ = write!(&mut escaped, "\\u{:04x}", c as u32);
            }
            _ => escaped.push(ch),
        }
    }
    escaped
}

fn render_template(template: &str, context: &BTreeMap<String, String>) -> String {
    let mut rendered = String::with_capacity(template.len());
    let mut chars = template.chars();
    while let Some(ch) = chars.next() {
        if ch != '{' {
            rendered.push(ch);
            continue;
        }
        let key: String = chars.by_ref().take_while(|&next| next != '}').collect();
        match context.get(&key) {
            Some(value) if !key.is_empty() => rendered.push_str(value),
            _ => {
                rendered.push('{');
                rendered.push_str(&key);
                rendered.push('}');
            }
        }
    }
    rendered
}

/// Erro do motor com contexto estruturado (valores numéricos em decimal).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MathError {
    pub code: MathErrorCode,
    pub context: BTreeMap<String, String>,
}

impl MathError {
    /// Cria um novo erro sem contexto adicional.
    pub fn new(code: MathErrorCode) -> Self {
        Self {
            code,
            context: BTreeMap::new(),
        }
    }

    /// Adiciona um par chave/valor ao contexto.
    pub fn with_context<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: ToString,
    {
        let key_string = key.into();
        if !key_string.is_empty() {
            let sanitized = sanitize_value(&value.to_string());
            self.context.insert(key_string, sanitized);
        }
        self
    }

    fn resolved_message(&self) -> String {
        render_template(default_locale_message(self.code), &self.context)
    }

    /// Mensagem curta para UI; repassada literalmente pelas camadas de cima.
    pub fn to_user_string(&self) -> String {
        format!("[{}] {}", self.code.code(), self.resolved_message())
    }

    /// Renderiza um template arbitrário usando o contexto atual.
    pub fn render_with_template(&self, template: &str) -> String {
        render_template(template, &self.context)
    }

    /// Serialização estável em JSON para logs.
    pub fn to_log_json(&self) -> String {
        let mut json = String::from("{");
        json.push_str("\"code\":\"");
        json.push_str(&escape_json(self.code.code()));
        json.push_str("\",\"title\":\"");
        json.push_str(&escape_json(self.code.title()));
        json.push_str("\",\"message\":\"");
        json.push_str(&escape_json(&self.resolved_message()));
        json.push_str("\",\"context\":{");
        for (i, (key, value)) in self.context.iter().enumerate() {
            if i > 0 {
                json.push(',');
            }
            json.push('"');
            json.push_str(&escape_json(key));
            json.push_str("\":\"");
            json.push_str(&escape_json(value));
            json.push('"');
        }
        json.push_str("}}");
        json
    }
}

impl From<MathErrorCode> for MathError {
    fn from(code: MathErrorCode) -> Self {
        Self::new(code)
    }
}

impl fmt::Display for MathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_user_string())
    }
}

impl std::error::Error for MathError {}

/// Resultado padrão das operações do motor.
pub type Result<T> = std::result::Result<T, MathError>;

#[macro_export]
macro_rules! math_err {
  ($code:expr) => {{
    $crate::error::MathError::new($code)
  }};
  ($code:expr, $($key:ident => $value:expr),+ $(,)?) => {{
    let mut err = $crate::error::MathError::new($code);
    $(
      err = err.with_context(stringify!($key), $value);
    )+
    err
  }};
}

#[macro_export]
macro_rules! math_bail {
  ($($tt:tt)*) => {
    return Err($crate::math_err!($($tt)*))
  };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_string_basic() {
        let err = MathError::new(MathErrorCode::InvalidBase);
        assert_eq!(err.to_user_string(), "[MATH-0001] baseN deve ser < MAX_NUM");
    }

    #[test]
    fn placeholder_subst() {
        let err = MathError::new(MathErrorCode::OverflowNumeric).with_context("op", "get_cap");
        assert_eq!(err.render_with_template("falha em {op}"), "falha em get_cap");
    }

    #[test]
    fn log_json_shape() {
        let err = MathError::new(MathErrorCode::ZeroDenominator).with_context("arg", "factor_d");
        let json = err.to_log_json();
        assert!(json.starts_with('{'));
        assert!(json.contains("\"code\":\"MATH-0003\""));
        assert!(json.contains("\"title\":"));
        assert!(json.contains("\"message\":"));
        assert!(json.contains("\"context\":{\"arg\":\"factor_d\"}"));
    }

    #[test]
    fn macro_collects_context() {
        let err = math_err!(MathErrorCode::InsufficientReserve, amount_out => 10, reserve_out => 5);
        assert_eq!(err.code, MathErrorCode::InsufficientReserve);
        assert_eq!(err.context.get("amount_out").map(String::as_str), Some("10"));
        assert_eq!(err.context.get("reserve_out").map(String::as_str), Some("5"));
    }

    #[test]
    fn from_code() {
        let err: MathError = MathErrorCode::NoPrecisionFound.into();
        assert!(err.context.is_empty());
        assert_eq!(err.to_string(), "[MATH-0002] expoente acima de todas as precisões calibradas");
    }
}
