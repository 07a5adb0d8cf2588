//! # mathcalc_rs
//!
//! Консольный калькулятор с проверяемой целочисленной арифметикой.
//!
//! Поддерживает:
//! - Операции: `add`, `sub`, `mul`, `div`, `pow`, `fact`
//! - Знаковые 64-битные операнды (i64), результат факториала — u64
//! - Обнаружение переполнения и деления на ноль вместо неопределённого
//!   поведения
//!
//! # Пример использования
//!
//! ```
//! use mathcalc_rs::{calculate, request::Operation};
//! use mathcalc_rs::mathlib::Value;
//!
//! assert_eq!(calculate(Operation::Add, 2, Some(3)).unwrap(), Value::Signed(5));
//! assert_eq!(calculate(Operation::Fact, 5, None).unwrap(), Value::Unsigned(120));
//! assert!(calculate(Operation::Div, 7, Some(0)).is_err());
//! ```

pub mod mathlib;
pub mod request;

use thiserror::Error;

use crate::mathlib::{MathError, Value};
use crate::request::{Operation, Request, RequestError};

/// Код выхода при успехе.
pub const EXIT_OK: u8 = 0;
/// Код выхода при ошибке использования (флаги, арность).
pub const EXIT_USAGE: u8 = 1;
/// Код выхода при математической ошибке или ошибке области определения.
pub const EXIT_MATH: u8 = 2;

/// Общий тип ошибки калькулятора.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalcError {
    /// Ошибка валидации запроса (арность, область определения).
    #[error("{0}")]
    Request(#[from] RequestError),

    /// Ошибка вычисления с указанием операции.
    #[error("{op}: {source}")]
    Math {
        /// Операция, при которой произошла ошибка.
        op: Operation,
        /// Ошибка ядра арифметики.
        source: MathError,
    },
}

impl CalcError {
    /// Код выхода процесса для этой ошибки.
    ///
    /// Ошибки использования — [`EXIT_USAGE`], математические и ошибки
    /// области определения — [`EXIT_MATH`].
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Request(e) if e.is_usage() => EXIT_USAGE,
            Self::Request(_) | Self::Math { .. } => EXIT_MATH,
        }
    }
}

/// Проверяет запрос и выполняет вычисление.
///
/// # Ошибки
///
/// Возвращает [`CalcError`] при ошибках валидации или вычисления.
///
/// # Примеры
///
/// ```
/// use mathcalc_rs::{calculate, request::Operation};
/// use mathcalc_rs::mathlib::Value;
///
/// assert_eq!(calculate(Operation::Pow, 2, Some(10)).unwrap(), Value::Signed(1024));
///
/// let err = calculate(Operation::Div, 7, Some(0)).unwrap_err();
/// assert_eq!(err.exit_code(), 2);
/// ```
pub fn calculate(op: Operation, a: i64, b: Option<i64>) -> Result<Value, CalcError> {
    let request = Request::new(op, a, b)?;
    let value = request
        .execute()
        .map_err(|source| CalcError::Math { op, source })?;
    Ok(value)
}
