// ABOUTME: Property-based tests for the conversion core
// ABOUTME: Checks rounding and exact-multiplication properties across generated amounts
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use proptest::prelude::*;
use serde_json::json;
use unit_conversion_server::conversions::{convert, parse_amount, round_to, Conversion};
use unit_conversion_server::errors::ErrorCode;
use unit_conversion_server::models::ConversionRequest;

fn nonzero_amount() -> impl Strategy<Value = f64> {
    prop_oneof![1e-6..1e9_f64, -1e9..-1e-6_f64]
}

proptest! {
    #[test]
    fn kg_to_lbs_rounds_product_to_two_decimals(amount in 1e-6..1e9_f64) {
        let response = convert(Conversion::KgToLbs, &ConversionRequest::from_amount(amount)).unwrap();
        let expected: f64 = format!("{:.2}", amount * 2.204_62).parse().unwrap();

        prop_assert_eq!(response.result.to_bits(), expected.to_bits());
    }

    #[test]
    fn meters_to_cm_is_exact_product(amount in nonzero_amount()) {
        let response = convert(Conversion::MetersToCm, &ConversionRequest::from_amount(amount)).unwrap();

        prop_assert_eq!(response.result.to_bits(), (amount * 100.0).to_bits());
        prop_assert_eq!(response.amount.to_bits(), amount.to_bits());
    }

    #[test]
    fn rounded_results_have_bounded_error(amount in nonzero_amount()) {
        for conversion in Conversion::ALL {
            let Some(decimals) = conversion.precision() else { continue };
            let result = conversion.apply(amount).unwrap();
            let tolerance = 0.5 / 10_f64.powi(decimals) + amount.abs() * 1e-12;

            prop_assert!((result - amount * conversion.factor()).abs() <= tolerance);
            prop_assert_eq!(result.to_bits(), round_to(result, decimals).to_bits());
        }
    }

    #[test]
    fn alphabetic_strings_are_rejected(text in "[a-zA-Z]{1,12}") {
        let error = parse_amount(Some(&json!(text))).unwrap_err();
        prop_assert_eq!(error.code, ErrorCode::InvalidInput);
    }

    #[test]
    fn numeric_strings_match_numbers(amount in nonzero_amount()) {
        let from_string = parse_amount(Some(&json!(amount.to_string()))).unwrap();
        prop_assert_eq!(from_string.to_bits(), amount.to_bits());
    }
}
