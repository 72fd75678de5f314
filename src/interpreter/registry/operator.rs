use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, registry::combinatorics::factorial},
};

/// Operator associativity, used by the parser to break precedence ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    /// `a - b - c` groups as `(a - b) - c`.
    Left,
    /// `a ^ b ^ c` groups as `a ^ (b ^ c)`.
    Right,
}

/// Every operator the language knows.
///
/// The set is closed: precedence, associativity, arity and behavior are
/// resolved by matching on the variant, so the table can never change at
/// runtime.
///
/// | Operator | Symbol | Precedence | Associativity | Arity |
/// |----------|--------|-----------:|---------------|------:|
/// | `Add`    | `+`    | 2          | left          | 2     |
/// | `Sub`    | `-`    | 2          | left          | 2     |
/// | `Mul`    | `*`    | 3          | left          | 2     |
/// | `Div`    | `/`    | 3          | left          | 2     |
/// | `Neg`    | `-`    | 4          | right         | 1     |
/// | `Pow`    | `^`    | 4          | right         | 2     |
/// | `Factorial` | `!` | 6          | left          | 1     |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
    /// Unary minus. Only produced by the parser, which retags a `Sub` found
    /// in prefix position.
    Neg,
    /// Postfix `!`.
    Factorial,
}

impl Operator {
    /// Binding strength; a higher value binds tighter.
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 2,
            Self::Mul | Self::Div => 3,
            Self::Pow | Self::Neg => 4,
            Self::Factorial => 6,
        }
    }

    #[must_use]
    pub const fn associativity(self) -> Associativity {
        match self {
            Self::Pow | Self::Neg => Associativity::Right,
            _ => Associativity::Left,
        }
    }

    /// Number of operands popped from the value stack.
    #[must_use]
    pub const fn arity(self) -> usize {
        match self {
            Self::Neg | Self::Factorial => 1,
            _ => 2,
        }
    }

    /// Applies the operator to its operands, given in the order they were
    /// pushed.
    ///
    /// Floating point results such as `1/0 = inf` are not trapped. Only the
    /// factorial can fail, for operands that are not non-negative integers.
    ///
    /// # Example
    /// ```
    /// use calcengine::interpreter::registry::operator::Operator;
    ///
    /// assert_eq!(Operator::Sub.apply(&[10.0, 4.0]).unwrap(), 6.0);
    /// assert_eq!(Operator::Factorial.apply(&[5.0]).unwrap(), 120.0);
    /// assert!(Operator::Factorial.apply(&[-1.0]).is_err());
    /// ```
    pub fn apply(self, args: &[f64]) -> EvalResult<f64> {
        if args.len() != self.arity() {
            return Err(RuntimeError::InvalidExpression { details: format!("operator '{self}' expects {} operand(s), found {}",
                                                                          self.arity(),
                                                                          args.len()) });
        }

        let value = match self {
            Self::Add => args[0] + args[1],
            Self::Sub => args[0] - args[1],
            Self::Mul => args[0] * args[1],
            Self::Div => args[0] / args[1],
            Self::Pow => args[0].powf(args[1]),
            Self::Neg => -args[0],
            Self::Factorial => factorial(args[0])?,
        };

        Ok(value)
    }

    /// Maps a source symbol to its binary operator.
    ///
    /// `-` always maps to `Sub`; the parser decides whether it is really a
    /// negation.
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Add),
            '-' => Some(Self::Sub),
            '*' | '×' => Some(Self::Mul),
            '/' | '÷' => Some(Self::Div),
            '^' => Some(Self::Pow),
            '!' => Some(Self::Factorial),
            _ => None,
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
            Self::Neg => "neg",
            Self::Factorial => "!",
        };
        write!(f, "{symbol}")
    }
}
