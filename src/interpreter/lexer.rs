use log::debug;
use logos::Logos;

use crate::{
    error::LexError,
    interpreter::registry::{function::Function, operator::Operator},
    token::{Constant, Token},
};

pub type LexResult<T> = Result<T, LexError>;

/// Raw lexical unit recognized by the scanner.
///
/// Identifiers are not yet classified here; [`tokenize`] decides whether
/// each one is a function, a constant or a variable.
#[derive(Logos, Debug, PartialEq, Clone)]
enum Lexeme {
    /// Runs of digits and dots such as `3.14`, `.5` or `2.`. A run with more
    /// than one dot fails to parse and is reported as a malformed number.
    #[regex(r"[0-9][0-9.]*", parse_number)]
    #[regex(r"\.[0-9][0-9.]*", parse_number)]
    Number(f64),
    /// Names such as `x`, `sin`, `Ans` or `θ1`. Greek letters other than `π`
    /// may appear anywhere, digits anywhere but first.
    #[regex(r"[A-Za-z_µΑ-Ωα-ορ-ω][A-Za-z0-9_µΑ-Ωα-ορ-ω]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `π`
    #[token("π")]
    Pi,
    /// `√`, shorthand for `sqrt`.
    #[token("√")]
    Radical,
    /// `+ - * / ^ !` and the display glyphs `×` and `÷`.
    #[regex(r"[-+*/^!×÷]", |lex| lex.slice().chars().next().and_then(Operator::from_symbol))]
    Operator(Operator),
    /// `(`
    #[token("(")]
    OpenParen,
    /// `)`
    #[token(")")]
    CloseParen,
    /// `,`
    #[token(",")]
    Comma,
}

fn parse_number(lex: &mut logos::Lexer<Lexeme>) -> Option<f64> {
    lex.slice().parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Converts expression text into a sequence of tokens.
///
/// Whitespace is removed before scanning, so `1 2` reads as `12` and
/// `s i n(0)` as `sin(0)`. Identifiers are matched against the function
/// registry ignoring case, then against `ans`, `pi` and `e`; anything else
/// becomes a variable with its casing preserved.
///
/// Whenever an operand (number, constant, variable, function or `(`) directly
/// follows the end of another operand (number, constant, variable, `)` or
/// `!`), a `*` token is inserted between them.
///
/// # Errors
/// - `UnrecognizedCharacter` for a character that starts no token.
/// - `MalformedNumber` for a literal such as `1.2.3`.
///
/// # Example
/// ```
/// use calcengine::{
///     interpreter::{lexer::tokenize, registry::operator::Operator},
///     token::{Constant, Token},
/// };
///
/// let tokens = tokenize("2π").unwrap();
/// assert_eq!(tokens,
///            vec![Token::Number(2.0),
///                 Token::Operator(Operator::Mul),
///                 Token::Constant(Constant::Pi)]);
///
/// assert!(tokenize("2 $ 3").is_err());
/// ```
pub fn tokenize(text: &str) -> LexResult<Vec<Token>> {
    let sanitized: String = text.chars().filter(|c| !c.is_whitespace()).collect();

    let mut tokens = Vec::new();
    let mut lexer = Lexeme::lexer(&sanitized);

    while let Some(lexeme) = lexer.next() {
        let Ok(lexeme) = lexeme else {
            return Err(lex_error(&sanitized, lexer.span()));
        };

        let token = match lexeme {
            Lexeme::Number(value) => Token::Number(value),
            Lexeme::Identifier(name) => classify_identifier(name),
            Lexeme::Pi => Token::Constant(Constant::Pi),
            Lexeme::Radical => Token::Function(Function::Sqrt),
            Lexeme::Operator(op) => Token::Operator(op),
            Lexeme::OpenParen => Token::OpenParen,
            Lexeme::CloseParen => Token::CloseParen,
            Lexeme::Comma => Token::Comma,
        };
        push_token(&mut tokens, token);
    }

    debug!("tokenized {text:?} into {} token(s)", tokens.len());
    Ok(tokens)
}

/// Appends `token`, first inserting an implicit `*` when it starts an operand
/// right after another operand ended.
fn push_token(tokens: &mut Vec<Token>, token: Token) {
    if token.starts_operand() && tokens.last().is_some_and(Token::ends_operand) {
        tokens.push(Token::Operator(Operator::Mul));
    }
    tokens.push(token);
}

fn classify_identifier(name: String) -> Token {
    if let Some(function) = Function::from_name(&name) {
        Token::Function(function)
    } else if name.eq_ignore_ascii_case("ans") {
        Token::Variable("Ans".to_string())
    } else if name.eq_ignore_ascii_case("pi") {
        Token::Constant(Constant::Pi)
    } else if name.eq_ignore_ascii_case("e") {
        Token::Constant(Constant::E)
    } else {
        Token::Variable(name)
    }
}

/// Builds the error for a slice the scanner rejected.
fn lex_error(text: &str, span: std::ops::Range<usize>) -> LexError {
    // Spans from the scanner may end inside a multi-byte character.
    let slice = text.get(span.clone())
                    .or_else(|| text.get(span.start..))
                    .unwrap_or_default();
    let position = text.get(..span.start).map_or(0, |prefix| prefix.chars().count());

    let mut chars = slice.chars();
    match chars.next() {
        Some(first) if first.is_ascii_digit() || (first == '.' && chars.next().is_some()) => {
            LexError::MalformedNumber { literal: slice.to_string(),
                                        position }
        },
        Some(character) => LexError::UnrecognizedCharacter { character, position },
        None => LexError::UnrecognizedCharacter { character: '\u{FFFD}',
                                                  position },
    }
}
