//! Проверяемая целочисленная арифметика.
//!
//! Каждая функция — чистая: принимает операнды, возвращает помеченный
//! результат ([`Value`]) или ошибку ([`MathError`]). Никакого ввода-вывода,
//! никакого глобального состояния, переполнение обнаруживается проверкой
//! границ, а не анализом обёрнутого значения.
//!
//! # Примеры
//!
//! ```
//! use mathcalc_rs::mathlib::{self, Value};
//!
//! assert_eq!(mathlib::add(2, 3), Ok(Value::Signed(5)));
//! assert_eq!(mathlib::pow(2, 10), Ok(Value::Signed(1024)));
//! assert_eq!(mathlib::fact(5), Ok(Value::Unsigned(120)));
//! assert!(mathlib::div(7, 0).is_err());
//! ```

use std::fmt::Display;

use thiserror::Error;

/// Ошибки арифметических операций.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathError {
    /// Деление на ноль.
    #[error("деление на ноль")]
    DivisionByZero,
    /// Целочисленное переполнение.
    #[error("переполнение")]
    Overflow,
}

/// Успешный результат операции с пометкой знаковости.
///
/// Операции над знаковыми операндами (`add`, `sub`, `mul`, `div`, `pow`)
/// возвращают [`Value::Signed`]; факториал — беззнаковую величину
/// [`Value::Unsigned`]. Вывод в обоих случаях — десятичное число.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Value {
    /// Знаковое 64-битное значение.
    Signed(i64),
    /// Беззнаковое 64-битное значение.
    Unsigned(u64),
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Signed(v) => write!(f, "{v}"),
            Self::Unsigned(v) => write!(f, "{v}"),
        }
    }
}

/// Сложение `a + b`.
///
/// # Ошибки
///
/// Возвращает [`MathError::Overflow`], если сумма не представима в `i64`.
pub fn add(a: i64, b: i64) -> Result<Value, MathError> {
    a.checked_add(b).map(Value::Signed).ok_or(MathError::Overflow)
}

/// Вычитание `a - b`.
///
/// # Ошибки
///
/// Возвращает [`MathError::Overflow`], если разность не представима в `i64`.
pub fn sub(a: i64, b: i64) -> Result<Value, MathError> {
    a.checked_sub(b).map(Value::Signed).ok_or(MathError::Overflow)
}

/// Умножение `a * b`.
///
/// # Ошибки
///
/// Возвращает [`MathError::Overflow`], если произведение не представимо
/// в `i64` (включая случай `i64::MIN * -1`).
pub fn mul(a: i64, b: i64) -> Result<Value, MathError> {
    a.checked_mul(b).map(Value::Signed).ok_or(MathError::Overflow)
}

/// Целочисленное деление `a / b` (с усечением к нулю).
///
/// # Ошибки
///
/// - [`MathError::DivisionByZero`] при `b == 0`.
/// - [`MathError::Overflow`] для `i64::MIN / -1`.
pub fn div(a: i64, b: i64) -> Result<Value, MathError> {
    if b == 0 {
        return Err(MathError::DivisionByZero);
    }
    a.checked_div(b).map(Value::Signed).ok_or(MathError::Overflow)
}

/// Возведение в степень `base ^ exp` быстрым возведением в квадрат.
///
/// Отрицательные показатели отвергает вызывающая сторона до вызова,
/// поэтому показатель принимается беззнаковым. По соглашению `pow(0, 0) == 1`.
///
/// # Ошибки
///
/// Возвращает [`MathError::Overflow`] при первом же умножении, выходящем
/// за пределы `i64`.
pub fn pow(base: i64, exp: u64) -> Result<Value, MathError> {
    let mut acc: i64 = 1;
    let mut factor = base;
    let mut exp = exp;

    while exp > 0 {
        if exp & 1 == 1 {
            acc = acc.checked_mul(factor).ok_or(MathError::Overflow)?;
        }
        exp >>= 1;
        // Квадрат нужен только если остались биты показателя: иначе
        // factor * factor переполнился бы напрасно (например, для 2^62).
        if exp > 0 {
            factor = factor.checked_mul(factor).ok_or(MathError::Overflow)?;
        }
    }

    Ok(Value::Signed(acc))
}

/// Факториал `n!`.
///
/// Отрицательные аргументы отвергает вызывающая сторона до вызова.
/// `fact(0) == fact(1) == 1`.
///
/// # Ошибки
///
/// Возвращает [`MathError::Overflow`], как только произведение превысит
/// `u64::MAX` (первое такое `n` — 21).
pub fn fact(n: u64) -> Result<Value, MathError> {
    let mut acc: u64 = 1;
    for i in 2..=n {
        acc = acc.checked_mul(i).ok_or(MathError::Overflow)?;
    }
    Ok(Value::Unsigned(acc))
}
