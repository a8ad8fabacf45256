// ============================================================================
// Numeric Module
// Conversions between text and IEEE-754 doubles
// ============================================================================
//
// This module provides:
// - parse / parse_finite: leading-prefix float parsing
// - format: fixed, exponential and precision notations
// - to_default_string: shortest round-trippable representation
// - FormatError: error type for rejected format requests
// - Standard float constants and predicates
//
// Design principles:
// - Pure functions over f64 and &str, safe to call from any thread
// - Parse failures are `None`, format failures are `FormatError`
// - Rounding works on the exact binary value, half away from zero
// - Digit ranges are checked up front, never discovered by a failing call

mod constants;
mod digits;
mod errors;
mod format;
mod parse;

pub use constants::{
    is_finite, is_nan, EPSILON, INFINITY, MAX_VALUE, MIN_SUBNORMAL, MIN_VALUE, NAN, NEG_INFINITY,
};
pub use errors::{FormatError, FormatResult};
pub use format::{
    format, format_spec, to_default_string, to_exponential_shortest, FormatKind, FormatSpec,
    MAX_DIGITS,
};
pub use parse::{parse, parse_finite};

pub(crate) use format::{non_finite_literal, render};
