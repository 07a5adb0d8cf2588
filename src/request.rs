//! Проверенный запрос на вычисление: операция и операнды.
//!
//! [`Request::new`] выполняет все проверки границы — арность (нужен ли
//! второй операнд) и область определения (неотрицательность показателя
//! степени и аргумента факториала) — до того, как будет вызвано ядро
//! [`crate::mathlib`].
//!
//! # Примеры
//!
//! ```
//! use mathcalc_rs::request::{Operation, Request};
//! use mathcalc_rs::mathlib::Value;
//!
//! let req = Request::new(Operation::Add, 2, Some(3)).unwrap();
//! assert_eq!(req.execute(), Ok(Value::Signed(5)));
//!
//! // факториал не принимает второй операнд
//! assert!(Request::new(Operation::Fact, 5, Some(1)).is_err());
//! ```

use std::fmt::Display;

use clap::ValueEnum;
use thiserror::Error;

use crate::mathlib::{self, MathError, Value};

/// Арифметическая операция.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Operation {
    /// Сложение `a + b`.
    Add,
    /// Вычитание `a - b`.
    Sub,
    /// Умножение `a * b`.
    Mul,
    /// Целочисленное деление `a / b`.
    Div,
    /// Возведение в степень `a ^ b` (b >= 0).
    Pow,
    /// Факториал `a!` (a >= 0).
    Fact,
}

impl Operation {
    /// Имя операции, как её вводит пользователь.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Sub => "sub",
            Self::Mul => "mul",
            Self::Div => "div",
            Self::Pow => "pow",
            Self::Fact => "fact",
        }
    }

    /// Требует ли операция второй операнд.
    #[must_use]
    pub const fn requires_b(self) -> bool {
        !matches!(self, Self::Fact)
    }
}

impl Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Ошибки валидации запроса.
///
/// Первые две — ошибки использования (код выхода 1), последние две —
/// ошибки области определения (код выхода 2, как у математических).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestError {
    /// Для операции обязателен второй операнд, но он не передан.
    #[error("{op}: требуется второй операнд (-b)")]
    MissingOperand {
        /// Операция, которой не хватило операнда.
        op: Operation,
    },

    /// Операции передан лишний второй операнд.
    #[error("{op}: второй операнд (-b) не используется")]
    ExtraOperand {
        /// Операция, получившая лишний операнд.
        op: Operation,
    },

    /// Отрицательный показатель степени.
    #[error("pow: ошибка области определения (b должен быть >= 0)")]
    NegativeExponent,

    /// Отрицательный аргумент факториала.
    #[error("fact: ошибка области определения (a должен быть >= 0)")]
    NegativeFactorial,
}

impl RequestError {
    /// Является ли ошибка ошибкой использования (а не области определения).
    #[must_use]
    pub const fn is_usage(&self) -> bool {
        matches!(self, Self::MissingOperand { .. } | Self::ExtraOperand { .. })
    }
}

/// Проверенный запрос: операция и операнды с выполненными предусловиями.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Request {
    op: Operation,
    a: i64,
    b: Option<i64>,
}

impl Request {
    /// Создаёт запрос, проверяя арность и область определения.
    ///
    /// # Ошибки
    ///
    /// - [`RequestError::MissingOperand`] — бинарной операции не передан `b`.
    /// - [`RequestError::ExtraOperand`] — факториалу передан `b`.
    /// - [`RequestError::NegativeExponent`] — `pow` с `b < 0`.
    /// - [`RequestError::NegativeFactorial`] — `fact` с `a < 0`.
    pub fn new(op: Operation, a: i64, b: Option<i64>) -> Result<Self, RequestError> {
        match (op.requires_b(), b) {
            (true, None) => return Err(RequestError::MissingOperand { op }),
            (false, Some(_)) => return Err(RequestError::ExtraOperand { op }),
            _ => {}
        }

        if op == Operation::Pow && b.is_some_and(|b| b < 0) {
            return Err(RequestError::NegativeExponent);
        }
        if op == Operation::Fact && a < 0 {
            return Err(RequestError::NegativeFactorial);
        }

        Ok(Self { op, a, b })
    }

    /// Операция запроса.
    #[must_use]
    pub const fn op(&self) -> Operation {
        self.op
    }

    /// Выполняет запрос, обращаясь к ядру арифметики.
    ///
    /// # Ошибки
    ///
    /// Возвращает [`MathError`] ядра (деление на ноль, переполнение).
    pub fn execute(&self) -> Result<Value, MathError> {
        match (self.op, self.b) {
            (Operation::Add, Some(b)) => mathlib::add(self.a, b),
            (Operation::Sub, Some(b)) => mathlib::sub(self.a, b),
            (Operation::Mul, Some(b)) => mathlib::mul(self.a, b),
            (Operation::Div, Some(b)) => mathlib::div(self.a, b),
            // Знаки проверены в new(): показатель и аргумент неотрицательны
            (Operation::Pow, Some(b)) => mathlib::pow(self.a, b as u64),
            (Operation::Fact, None) => mathlib::fact(self.a as u64),
            _ => unreachable!("арность проверена в Request::new"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binary_ops_require_b() {
        for op in [
            Operation::Add,
            Operation::Sub,
            Operation::Mul,
            Operation::Div,
            Operation::Pow,
        ] {
            assert_eq!(
                Request::new(op, 1, None),
                Err(RequestError::MissingOperand { op }),
                "операция {op} должна требовать -b"
            );
            assert!(Request::new(op, 1, Some(1)).is_ok());
        }
    }

    #[test]
    fn fact_rejects_b() {
        assert_eq!(
            Request::new(Operation::Fact, 5, Some(1)),
            Err(RequestError::ExtraOperand { op: Operation::Fact })
        );
        assert!(Request::new(Operation::Fact, 5, None).is_ok());
    }

    #[test]
    fn pow_rejects_negative_exponent() {
        assert_eq!(
            Request::new(Operation::Pow, 2, Some(-1)),
            Err(RequestError::NegativeExponent)
        );
        assert!(Request::new(Operation::Pow, 2, Some(0)).is_ok());
    }

    #[test]
    fn fact_rejects_negative_argument() {
        assert_eq!(
            Request::new(Operation::Fact, -1, None),
            Err(RequestError::NegativeFactorial)
        );
        assert!(Request::new(Operation::Fact, 0, None).is_ok());
    }

    #[test]
    fn execute_dispatches_to_engine() {
        let cases: &[(Operation, i64, Option<i64>, Value)] = &[
            (Operation::Add, 2, Some(3), Value::Signed(5)),
            (Operation::Sub, 5, Some(3), Value::Signed(2)),
            (Operation::Mul, 3, Some(4), Value::Signed(12)),
            (Operation::Div, 10, Some(3), Value::Signed(3)),
            (Operation::Pow, 2, Some(10), Value::Signed(1024)),
            (Operation::Fact, 5, None, Value::Unsigned(120)),
        ];

        for &(op, a, b, expected) in cases {
            let req = Request::new(op, a, b)
                .unwrap_or_else(|e| panic!("запрос {op} не прошёл проверку: {e}"));
            assert_eq!(req.execute(), Ok(expected), "операция: {op}");
        }
    }

    #[test]
    fn error_classes() {
        assert!(RequestError::MissingOperand { op: Operation::Add }.is_usage());
        assert!(RequestError::ExtraOperand { op: Operation::Fact }.is_usage());
        assert!(!RequestError::NegativeExponent.is_usage());
        assert!(!RequestError::NegativeFactorial.is_usage());
    }

    #[test]
    fn operation_names() {
        assert_eq!(Operation::Add.name(), "add");
        assert_eq!(Operation::Fact.to_string(), "fact");
    }
}
