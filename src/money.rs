//! Text boundary for Brazilian currency and percentage values.
//!
//! Forms hand over strings like `"R$ 1.234,56"` or `"10,5%"`; these are parsed
//! here into [`Decimal`] before reaching the engine, and the engine's results
//! are formatted back only for display. Rounding to cents happens in
//! [`format_currency`] and nowhere else.

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;

use crate::rates::percent_to_fraction;
use crate::{Money, Rate};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Empty value")]
    Empty,

    #[error("Invalid number: {0:?}")]
    Invalid(String),
}

/// Parses a pt-BR money string: `"R$ 1.234.567,89"`, `"1234,5"`, `"-R$ 10,00"`.
///
/// Without a comma, a single dot followed by at most two digits is read as a
/// decimal point (`"1234.56"`); any other dot is a thousands separator.
pub fn parse_currency(text: &str) -> Result<Money, ParseError> {
    let cleaned: String = text
        .replace("R$", "")
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();

    let (negative, digits) = split_sign(&cleaned);
    if digits.is_empty() {
        return Err(ParseError::Empty);
    }

    parse_normalized(&normalize_separators(digits), negative, text)
}

/// Parses a percentage string into a fraction: `"10,5%"` becomes `0.105`.
///
/// Separators follow [`parse_currency`], so `"1.000%"` is a thousand percent.
pub fn parse_percentage(text: &str) -> Result<Rate, ParseError> {
    let cleaned: String = text
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '%')
        .collect();

    let (negative, digits) = split_sign(&cleaned);
    if digits.is_empty() {
        return Err(ParseError::Empty);
    }

    parse_normalized(&normalize_separators(digits), negative, text).map(percent_to_fraction)
}

/// Formats money as `R$ 1.234,57`, rounding half away from zero to cents.
pub fn format_currency(value: Money) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded < Decimal::ZERO { "-" } else { "" };

    format!("{}R$ {}", sign, group_pt_br(rounded.abs(), 2))
}

/// Formats a value already in percent: `format_percentage(dec!(12.5), 2)` is `12,50%`.
pub fn format_percentage(percent: Decimal, decimals: u32) -> String {
    let rounded = percent.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded < Decimal::ZERO { "-" } else { "" };

    format!("{}{}%", sign, group_pt_br(rounded.abs(), decimals))
}

fn split_sign(text: &str) -> (bool, &str) {
    match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    }
}

/// Rewrites pt-BR separators into a plain `1234.56` form.
fn normalize_separators(digits: &str) -> String {
    if digits.contains(',') {
        digits.replace('.', "").replace(',', ".")
    } else if is_dot_decimal(digits) {
        digits.to_string()
    } else {
        digits.replace('.', "")
    }
}

fn is_dot_decimal(digits: &str) -> bool {
    let mut parts = digits.split('.');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(_), Some(fraction), None) => fraction.len() <= 2,
        _ => false,
    }
}

fn parse_normalized(normalized: &str, negative: bool, original: &str) -> Result<Decimal, ParseError> {
    let valid = !normalized.is_empty()
        && normalized.chars().all(|c| c.is_ascii_digit() || c == '.')
        && normalized.chars().any(|c| c.is_ascii_digit())
        && normalized.matches('.').count() <= 1;
    if !valid {
        return Err(ParseError::Invalid(original.to_string()));
    }

    let value = Decimal::from_str(normalized).map_err(|_| ParseError::Invalid(original.to_string()))?;
    Ok(if negative { -value } else { value })
}

/// Non-negative value with `.` thousands and `,` decimal separators.
fn group_pt_br(value: Decimal, decimals: u32) -> String {
    let fixed = format!("{:.*}", decimals as usize, value);
    let (integer, fraction) = match fixed.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (fixed.as_str(), None),
    };

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (index, digit) in integer.chars().enumerate() {
        if index > 0 && (integer.len() - index) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }

    match fraction {
        Some(fraction) => format!("{},{}", grouped, fraction),
        None => grouped,
    }
}
