use crate::interpreter::registry::{function::Function, operator::Operator};

/// A named mathematical constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constant {
    /// `π`, also written `pi`, `PI` or `Pi`.
    Pi,
    /// Euler's number, written `e` or `E`.
    E,
}

impl Constant {
    /// Returns the numeric value of the constant.
    #[must_use]
    pub const fn value(self) -> f64 {
        match self {
            Self::Pi => std::f64::consts::PI,
            Self::E => std::f64::consts::E,
        }
    }
}

/// Represents a single unit of an expression.
///
/// Tokens are produced by the tokenizer in infix order and reordered by the
/// parser into postfix (RPN) order. The variant alone decides which registry
/// entry, if any, backs the token: operators and functions carry their
/// registry variant directly, so no lookup is repeated after tokenizing.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Numeric literal such as `3.14` or `.5`.
    Number(f64),
    /// Named constant such as `π`.
    Constant(Constant),
    /// Variable resolved through the evaluation context, e.g. `x` or `Ans`.
    Variable(String),
    /// Prefix, infix or postfix operator.
    Operator(Operator),
    /// Named function such as `sin` or `nCr`.
    Function(Function),
    /// `(`
    OpenParen,
    /// `)`
    CloseParen,
    /// `,` separating function arguments.
    Comma,
}

impl Token {
    /// Whether this token completes an operand, so that a following operand
    /// needs an implicit `*` in front of it.
    #[must_use]
    pub const fn ends_operand(&self) -> bool {
        matches!(self,
                 Self::Number(_)
                 | Self::Constant(_)
                 | Self::Variable(_)
                 | Self::CloseParen
                 | Self::Operator(Operator::Factorial))
    }

    /// Whether this token starts an operand.
    #[must_use]
    pub const fn starts_operand(&self) -> bool {
        matches!(self,
                 Self::Number(_)
                 | Self::Constant(_)
                 | Self::Variable(_)
                 | Self::Function(_)
                 | Self::OpenParen)
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Constant(Constant::Pi) => write!(f, "π"),
            Self::Constant(Constant::E) => write!(f, "e"),
            Self::Variable(name) => write!(f, "{name}"),
            Self::Operator(op) => write!(f, "{op}"),
            Self::Function(func) => write!(f, "{func}"),
            Self::OpenParen => write!(f, "("),
            Self::CloseParen => write!(f, ")"),
            Self::Comma => write!(f, ","),
        }
    }
}

/// Renders a token sequence as space separated text.
///
/// Mostly useful to inspect the parser's RPN output.
///
/// # Example
/// ```
/// use calcengine::{
///     interpreter::{lexer::tokenize, parser::parse},
///     token::to_rpn_string,
/// };
///
/// let rpn = parse(tokenize("2+3*4").unwrap()).unwrap();
/// assert_eq!(to_rpn_string(&rpn), "2 3 4 * +");
/// ```
#[must_use]
pub fn to_rpn_string(tokens: &[Token]) -> String {
    tokens.iter()
          .map(ToString::to_string)
          .collect::<Vec<_>>()
          .join(" ")
}
