// ABOUTME: Fixed-factor conversion catalogue with amount validation and result rounding
// ABOUTME: Pure functions shared by the HTTP handlers, benchmarks, and tests
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Conversion core
//!
//! Each [`Conversion`] is a constant multiplier, an optional rounding
//! precision, and the unit labels reported back to the client. Nothing here
//! touches the network or holds state.

use crate::constants::{factors, paths, precision, units};
use crate::errors::{AppError, AppResult};
use crate::models::{ConversionRequest, ConversionResponse};
use serde_json::Value;
use std::fmt;
use tracing::debug;

/// Supported conversions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Conversion {
    /// Colombian pesos to US dollars (stubbed rate)
    CopToUsd,
    /// Meters to centimeters
    MetersToCm,
    /// Kilograms to pounds
    KgToLbs,
    /// Kilometers per hour to miles per hour
    KmhToMph,
}

impl Conversion {
    /// Every supported conversion, in listing order
    pub const ALL: [Self; 4] = [Self::CopToUsd, Self::MetersToCm, Self::KgToLbs, Self::KmhToMph];

    /// Path segment naming this conversion
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::CopToUsd => "cop-to-usd",
            Self::MetersToCm => "meters-to-cm",
            Self::KgToLbs => "kg-to-lbs",
            Self::KmhToMph => "kmh-to-mph",
        }
    }

    /// Look a conversion up by its path segment
    #[must_use]
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.slug() == slug)
    }

    /// Source unit label
    #[must_use]
    pub const fn from_unit(self) -> &'static str {
        match self {
            Self::CopToUsd => units::COP,
            Self::MetersToCm => units::METERS,
            Self::KgToLbs => units::KILOGRAMS,
            Self::KmhToMph => units::KMH,
        }
    }

    /// Target unit label
    #[must_use]
    pub const fn to_unit(self) -> &'static str {
        match self {
            Self::CopToUsd => units::USD,
            Self::MetersToCm => units::CENTIMETERS,
            Self::KgToLbs => units::POUNDS,
            Self::KmhToMph => units::MPH,
        }
    }

    /// Multiplier applied to the amount
    #[must_use]
    pub const fn factor(self) -> f64 {
        match self {
            Self::CopToUsd => factors::COP_TO_USD_RATE,
            Self::MetersToCm => factors::CM_PER_METER,
            Self::KgToLbs => factors::LBS_PER_KG,
            Self::KmhToMph => factors::MPH_PER_KMH,
        }
    }

    /// Decimal places kept in the result, `None` for an unrounded product
    #[must_use]
    pub const fn precision(self) -> Option<i32> {
        match self {
            Self::CopToUsd => Some(precision::CURRENCY_DECIMALS),
            Self::MetersToCm => None,
            Self::KgToLbs | Self::KmhToMph => Some(precision::MEASURE_DECIMALS),
        }
    }

    /// Whether the response reports the factor as `rate`
    #[must_use]
    pub const fn exposes_rate(self) -> bool {
        matches!(self, Self::CopToUsd)
    }

    /// Short description used in the API listing
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::CopToUsd => "Convierte pesos colombianos (COP) a dólares (USD)",
            Self::MetersToCm => "Convierte metros a centímetros",
            Self::KgToLbs => "Convierte kilogramos a libras",
            Self::KmhToMph => "Convierte kilómetros por hora a millas por hora",
        }
    }

    /// Route path of this conversion's endpoint
    #[must_use]
    pub fn path(self) -> String {
        format!("{}/{}", paths::CONVERT_PREFIX, self.slug())
    }

    /// Multiply and round a validated amount
    ///
    /// # Errors
    ///
    /// Returns an internal error if the product is not finite
    pub fn apply(self, amount: f64) -> AppResult<f64> {
        let product = amount * self.factor();
        let result = self
            .precision()
            .map_or(product, |decimals| round_to(product, decimals));

        if result.is_finite() {
            Ok(result)
        } else {
            Err(AppError::internal(format!(
                "{} produced a non-finite result for amount {amount}",
                self.slug()
            )))
        }
    }
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Fixed-point notation switches to exponent form at this magnitude
const FIXED_NOTATION_LIMIT: f64 = 1e21;
/// 2^53
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Round to a fixed number of decimals the way fixed-point notation does
///
/// The exact decimal value of `value` is rounded, so a product such as
/// `551.155` (stored as `551.15499...`) rounds down. Exact ties round away
/// from zero. Magnitudes at or above 1e21 have no fractional digits and are
/// returned unchanged.
#[must_use]
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let Ok(places) = usize::try_from(decimals) else {
        return value;
    };
    if !value.is_finite() || value.abs() >= FIXED_NOTATION_LIMIT {
        return value;
    }

    // value * 2^(d+1) is exact and is an odd integer only on an exact tie,
    // in which case value * 2 * 10^d is odd as well
    let halves = value.abs() * 2_f64.powi(decimals + 1);
    let is_tie = halves.fract() == 0.0 && (halves / 2.0).fract() != 0.0;
    let twice_scaled = halves * 5_f64.powi(decimals);

    let rounded = if is_tie && twice_scaled < MAX_EXACT_INTEGER {
        ((twice_scaled + 1.0) / 2.0 / 10_f64.powi(decimals)).copysign(value)
    } else {
        format!("{value:.places$}").parse().unwrap_or(value)
    };

    // -0.0 renders as 0
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Validate the raw `amount` field
///
/// Accepts finite, non-zero JSON numbers and strings holding such a number.
///
/// # Errors
///
/// Returns [`AppError::invalid_amount`] for anything else
pub fn parse_amount(raw: Option<&Value>) -> AppResult<f64> {
    let amount = match raw {
        Some(Value::Number(number)) => number.as_f64(),
        Some(Value::String(text)) => text.trim().parse::<f64>().ok(),
        _ => None,
    };

    match amount {
        Some(value) if value.is_finite() && value != 0.0 => Ok(value),
        _ => {
            debug!(amount = ?raw, "Rejected conversion amount");
            Err(AppError::invalid_amount())
        }
    }
}

/// Run a conversion against a request body
///
/// # Errors
///
/// Returns a validation error for a bad amount, or an internal error if the
/// result cannot be represented
pub fn convert(
    conversion: Conversion,
    request: &ConversionRequest,
) -> AppResult<ConversionResponse> {
    let amount = parse_amount(request.amount.as_ref())?;
    let result = conversion.apply(amount)?;

    debug!(conversion = %conversion, amount, result, "Conversion completed");

    Ok(ConversionResponse {
        from: conversion.from_unit().to_owned(),
        to: conversion.to_unit().to_owned(),
        amount,
        result,
        rate: conversion.exposes_rate().then(|| conversion.factor()),
    })
}
