use std::{collections::HashMap, str::FromStr};

use crate::error::RuntimeError;

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Unit in which trigonometric functions read and produce angles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AngleMode {
    /// Radians.
    #[default]
    Rad,
    /// Degrees.
    Deg,
}

impl AngleMode {
    /// Converts an angle given in this unit to radians.
    #[must_use]
    pub fn to_radians(self, angle: f64) -> f64 {
        match self {
            Self::Rad => angle,
            Self::Deg => angle.to_radians(),
        }
    }

    /// Converts an angle in radians to this unit.
    #[must_use]
    pub fn radians_to_unit(self, radians: f64) -> f64 {
        match self {
            Self::Rad => radians,
            Self::Deg => radians.to_degrees(),
        }
    }
}

impl FromStr for AngleMode {
    type Err = String;

    /// Parses `RAD` or `DEG`, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("rad") {
            Ok(Self::Rad)
        } else if s.eq_ignore_ascii_case("deg") {
            Ok(Self::Deg)
        } else {
            Err(format!("unknown angle mode '{s}', expected RAD or DEG"))
        }
    }
}

impl std::fmt::Display for AngleMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rad => write!(f, "RAD"),
            Self::Deg => write!(f, "DEG"),
        }
    }
}

/// Stores everything an evaluation may read.
///
/// ## Usage
///
/// A `Context` is built by the caller and only ever borrowed by the
/// evaluator, so one context can serve any number of evaluations, e.g. one
/// per sample point of a plot.
///
/// Variable lookup checks the caller's `variables` first and falls back to
/// the defaults `Ans`, `pi`, `π` and `e`. Caller bindings therefore win on a
/// name collision. Names are case-sensitive.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Context {
    /// Unit used by `sin`, `cos`, `tan` and their inverses.
    pub angle_mode: AngleMode,
    /// The previous answer, bound as `Ans`.
    pub ans:        f64,
    /// Caller-supplied bindings.
    pub variables:  HashMap<String, f64>,
}

impl Context {
    /// Creates a context in radian mode with `Ans = 0` and no variables.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_angle_mode(mut self, angle_mode: AngleMode) -> Self {
        self.angle_mode = angle_mode;
        self
    }

    #[must_use]
    pub fn with_ans(mut self, ans: f64) -> Self {
        self.ans = ans;
        self
    }

    /// Adds (or replaces) a caller binding.
    #[must_use]
    pub fn with_variable(mut self, name: impl Into<String>, value: f64) -> Self {
        self.variables.insert(name.into(), value);
        self
    }

    /// Resolves a variable name.
    ///
    /// # Example
    /// ```
    /// use calcengine::interpreter::evaluator::core::Context;
    ///
    /// let context = Context::new().with_ans(7.0).with_variable("x", 2.0);
    ///
    /// assert_eq!(context.get_variable("x"), Some(2.0));
    /// assert_eq!(context.get_variable("Ans"), Some(7.0));
    /// assert_eq!(context.get_variable("X"), None);
    /// ```
    #[must_use]
    pub fn get_variable(&self, name: &str) -> Option<f64> {
        if let Some(value) = self.variables.get(name) {
            return Some(*value);
        }
        match name {
            "Ans" => Some(self.ans),
            "pi" | "π" => Some(std::f64::consts::PI),
            "e" => Some(std::f64::consts::E),
            _ => None,
        }
    }
}
