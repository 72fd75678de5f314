//! # calcengine
//!
//! calcengine is the numeric core of a scientific calculator written in Rust.
//! It tokenizes, parses and evaluates infix expressions with implicit
//! multiplication, multi-argument functions and angle-mode aware
//! trigonometry, and ships a small matrix toolkit, descriptive statistics and
//! locale-free number formatting.
//!
//! Every operation is a pure function of its inputs. Nothing is cached
//! between calls, so evaluations may run concurrently on any thread.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::interpreter::{evaluator::rpn::evaluate, lexer::tokenize, parser::parse};

/// Provides unified error types for every stage.
///
/// This module defines all errors that can be raised during tokenizing,
/// parsing, evaluating or while operating on matrices. Each stage has its own
/// enum; [`Error`](error::Error) joins the expression stages so they can be
/// propagated together.
///
/// # Responsibilities
/// - Defines error enums for all failure modes.
/// - Attaches the offending character, name or shape for context.
/// - Implements `std::error::Error` through `thiserror`.
pub mod error;
/// Number formatting for display.
///
/// Renders finite values in plain or scientific notation and everything else
/// as `Error`.
pub mod format;
/// Orchestrates the expression pipeline.
///
/// This module ties together the tokenizer, the operator and function
/// registry, the shunting-yard parser and the RPN evaluator.
///
/// # Responsibilities
/// - Converts text into tokens and tokens into RPN.
/// - Resolves variables and applies operators and functions.
/// - Reports lexical, syntax and runtime errors.
pub mod interpreter;
/// Matrix arithmetic, determinant and inverse.
///
/// Matrices are validated rectangular grids. Every operation returns a new
/// matrix and fails fast on incompatible shapes.
pub mod matrix;
/// Descriptive statistics over a list of numbers.
pub mod statistics;
/// Defines the token type shared by the tokenizer, parser and evaluator.
pub mod token;
/// General utilities for safe numeric conversion.
///
/// # Responsibilities
/// - Convert between `f64` and the integer types used for counting without
///   silent data loss.
pub mod util;

pub use error::Error;
pub use format::format_number;
pub use interpreter::evaluator::core::{AngleMode, Context};
pub use matrix::Matrix;
pub use statistics::{Statistics, compute_statistics};

/// Evaluates an expression against a context.
///
/// Empty or whitespace-only input evaluates to the context's `Ans` value,
/// so pressing "=" on an empty line repeats the last answer. Anything else
/// goes through tokenize, parse and evaluate. `Ans`, `pi`, `π` and `e` are
/// always bound, even when the context carries no variables.
///
/// # Errors
/// Returns the error of whichever stage failed: [`Error::Lex`],
/// [`Error::Syntax`] or [`Error::Runtime`].
///
/// # Examples
/// ```
/// use calcengine::{AngleMode, Context, evaluate_expression};
///
/// let context = Context::new();
/// assert_eq!(evaluate_expression("2+3*4", &context).unwrap(), 14.0);
/// assert_eq!(evaluate_expression("2^3^2", &context).unwrap(), 512.0);
/// assert_eq!(evaluate_expression("-2^2", &context).unwrap(), -4.0);
///
/// let degrees = Context::new().with_angle_mode(AngleMode::Deg);
/// assert!((evaluate_expression("sin(90)", &degrees).unwrap() - 1.0).abs() < 1e-12);
///
/// let previous = Context::new().with_ans(7.0);
/// assert_eq!(evaluate_expression("  ", &previous).unwrap(), 7.0);
///
/// // 'y' is not bound
/// assert!(evaluate_expression("y + 1", &context).is_err());
/// ```
pub fn evaluate_expression(text: &str, context: &Context) -> Result<f64, Error> {
    if text.trim().is_empty() {
        return Ok(context.ans);
    }

    let tokens = tokenize(text)?;
    let rpn = parse(tokens)?;
    Ok(evaluate(&rpn, context)?)
}
