use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{AngleMode, EvalResult},
        registry::combinatorics::{combinations, permutations},
    },
};

/// Defines the function registry from a single table.
///
/// Each entry provides:
/// - the enum variant,
/// - the canonical name (matched case-insensitively),
/// - the number of arguments.
///
/// The macro produces:
/// - the `Function` enum,
/// - `FUNCTION_TABLE` (static table for lookup),
/// - `FUNCTION_NAMES` (public list of canonical names).
///
/// Behavior is not part of the table; it lives in [`Function::apply`] so every
/// variant is matched exhaustively.
macro_rules! functions {
    (
        $(
            $(#[$meta:meta])*
            $variant:ident => {
                name: $name:literal,
                arity: $arity:literal $(,)?
            }
        ),* $(,)?
    ) => {
        /// Every named function the language knows.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Function {
            $(
                $(#[$meta])*
                $variant,
            )*
        }

        static FUNCTION_TABLE: &[(&str, Function, usize)] = &[
            $(
                ($name, Function::$variant, $arity),
            )*
        ];

        /// Canonical names of all functions, in registry order.
        pub const FUNCTION_NAMES: &[&str] = &[
            $($name,)*
        ];
    };
}

functions! {
    /// Sine; the argument is in the active angle unit.
    Sin     => { name: "sin",     arity: 1 },
    /// Cosine; the argument is in the active angle unit.
    Cos     => { name: "cos",     arity: 1 },
    /// Tangent; the argument is in the active angle unit.
    Tan     => { name: "tan",     arity: 1 },
    /// Inverse sine; the result is in the active angle unit.
    Asin    => { name: "asin",    arity: 1 },
    /// Inverse cosine; the result is in the active angle unit.
    Acos    => { name: "acos",    arity: 1 },
    /// Inverse tangent; the result is in the active angle unit.
    Atan    => { name: "atan",    arity: 1 },
    Sinh    => { name: "sinh",    arity: 1 },
    Cosh    => { name: "cosh",    arity: 1 },
    Tanh    => { name: "tanh",    arity: 1 },
    Asinh   => { name: "asinh",   arity: 1 },
    Acosh   => { name: "acosh",   arity: 1 },
    Atanh   => { name: "atanh",   arity: 1 },
    /// Natural logarithm.
    Ln      => { name: "ln",      arity: 1 },
    /// Base-10 logarithm.
    Log     => { name: "log",     arity: 1 },
    Sqrt    => { name: "sqrt",    arity: 1 },
    Cbrt    => { name: "cbrt",    arity: 1 },
    Abs     => { name: "abs",     arity: 1 },
    Exp     => { name: "exp",     arity: 1 },
    Floor   => { name: "floor",   arity: 1 },
    Ceil    => { name: "ceil",    arity: 1 },
    /// Rounds to the nearest integer, halves towards positive infinity.
    Round   => { name: "round",   arity: 1 },
    Sign    => { name: "sign",    arity: 1 },
    /// Permutations, `nPr(n, r)`.
    NPr     => { name: "nPr",     arity: 2 },
    /// Combinations, `nCr(n, r)`.
    NCr     => { name: "nCr",     arity: 2 },
    /// Real `n`-th root, `nthroot(x, n)`; odd roots of negatives are negative.
    NthRoot => { name: "nthroot", arity: 2 },
    /// Radians to degrees, independent of the angle mode.
    Deg     => { name: "deg",     arity: 1 },
    /// Degrees to radians, independent of the angle mode.
    Rad     => { name: "rad",     arity: 1 },
}

impl Function {
    /// Looks a function up by name, ignoring case.
    ///
    /// # Example
    /// ```
    /// use calcengine::interpreter::registry::function::Function;
    ///
    /// assert_eq!(Function::from_name("SIN"), Some(Function::Sin));
    /// assert_eq!(Function::from_name("ncr"), Some(Function::NCr));
    /// assert_eq!(Function::from_name("x"), None);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        FUNCTION_TABLE.iter()
                      .find(|(candidate, ..)| candidate.eq_ignore_ascii_case(name))
                      .map(|(_, function, _)| *function)
    }

    /// Canonical spelling of the function name.
    #[must_use]
    pub fn name(self) -> &'static str {
        FUNCTION_TABLE.iter()
                      .find(|(_, function, _)| *function == self)
                      .map_or("?", |(name, ..)| *name)
    }

    /// Number of arguments popped from the value stack.
    #[must_use]
    pub fn arity(self) -> usize {
        FUNCTION_TABLE.iter()
                      .find(|(_, function, _)| *function == self)
                      .map_or(1, |(.., arity)| *arity)
    }

    /// Applies the function to its arguments, given left to right.
    ///
    /// Trigonometric functions read and produce angles in `mode`; every other
    /// function ignores it. Like the operators, floating point results such
    /// as `ln(0) = -inf` or `sqrt(-1) = NaN` are passed through untouched.
    ///
    /// # Example
    /// ```
    /// use calcengine::interpreter::{evaluator::core::AngleMode, registry::function::Function};
    ///
    /// let s = Function::Sin.apply(&[90.0], AngleMode::Deg).unwrap();
    /// assert!((s - 1.0).abs() < 1e-12);
    ///
    /// assert_eq!(Function::NCr.apply(&[6.0, 3.0], AngleMode::Rad).unwrap(), 20.0);
    /// ```
    pub fn apply(self, args: &[f64], mode: AngleMode) -> EvalResult<f64> {
        if args.len() != self.arity() {
            return Err(RuntimeError::InvalidExpression { details: format!("function '{self}' expects {} argument(s), found {}",
                                                                          self.arity(),
                                                                          args.len()) });
        }

        let x = args[0];
        let value = match self {
            Self::Sin => mode.to_radians(x).sin(),
            Self::Cos => mode.to_radians(x).cos(),
            Self::Tan => mode.to_radians(x).tan(),
            Self::Asin => mode.radians_to_unit(x.asin()),
            Self::Acos => mode.radians_to_unit(x.acos()),
            Self::Atan => mode.radians_to_unit(x.atan()),
            Self::Sinh => x.sinh(),
            Self::Cosh => x.cosh(),
            Self::Tanh => x.tanh(),
            Self::Asinh => x.asinh(),
            Self::Acosh => x.acosh(),
            Self::Atanh => x.atanh(),
            Self::Ln => x.ln(),
            Self::Log => x.log10(),
            Self::Sqrt => x.sqrt(),
            Self::Cbrt => x.cbrt(),
            Self::Abs => x.abs(),
            Self::Exp => x.exp(),
            Self::Floor => x.floor(),
            Self::Ceil => x.ceil(),
            Self::Round => round_half_up(x),
            Self::Sign => sign(x),
            Self::NPr => permutations(x, args[1])?,
            Self::NCr => combinations(x, args[1])?,
            Self::NthRoot => sign(x) * x.abs().powf(1.0 / args[1]),
            Self::Deg => x.to_degrees(),
            Self::Rad => x.to_radians(),
        };

        Ok(value)
    }
}

/// Rounds to the nearest integer, resolving `.5` upwards (`-2.5 -> -2`).
fn round_half_up(x: f64) -> f64 {
    let floor = x.floor();
    if x - floor >= 0.5 { floor + 1.0 } else { floor }
}

/// `-1`, `0` or `1`; zero keeps its sign and NaN stays NaN.
fn sign(x: f64) -> f64 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        x
    }
}

impl std::fmt::Display for Function {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
