use log::debug;

use crate::{
    error::SyntaxError,
    interpreter::registry::operator::{Associativity, Operator},
    token::{Token, to_rpn_string},
};

pub type ParseResult<T> = Result<T, SyntaxError>;

/// Reorders an infix token sequence into RPN with the shunting-yard
/// algorithm.
///
/// Operands go straight to the output. Functions, operators and `(` wait on a
/// side stack:
/// - an incoming operator first releases every function on top of the stack
///   and every operator that binds tighter, or equally tight when the
///   incoming operator is left-associative;
/// - `,` releases everything down to the enclosing `(`;
/// - `)` releases everything down to its `(`, drops it, and then releases the
///   function owning the argument list, if any.
///
/// A `-` at the start, after `(`, after `,` or after any operator, the
/// postfix `!` included, is a negation and is retagged as [`Operator::Neg`].
/// `3!-2` therefore leaves two values behind and fails to evaluate; write
/// `(3!)-2` instead.
///
/// # Errors
/// - `MismatchedParentheses` for a `)` without `(` or a `(` never closed.
/// - `MisplacedComma` for a `,` outside of any parentheses.
///
/// # Example
/// ```
/// use calcengine::{
///     interpreter::{lexer::tokenize, parser::parse},
///     token::to_rpn_string,
/// };
///
/// let rpn = parse(tokenize("2^3^2").unwrap()).unwrap();
/// assert_eq!(to_rpn_string(&rpn), "2 3 2 ^ ^");
///
/// let rpn = parse(tokenize("nCr(5, -2)").unwrap()).unwrap();
/// assert_eq!(to_rpn_string(&rpn), "5 2 neg nCr");
///
/// assert!(parse(tokenize("(1+2").unwrap()).is_err());
/// ```
pub fn parse(tokens: Vec<Token>) -> ParseResult<Vec<Token>> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut stack: Vec<Token> = Vec::new();
    let mut prefix_position = true;

    for token in tokens {
        let next_prefix_position = opens_operand_slot(&token);

        match token {
            Token::Number(_) | Token::Constant(_) | Token::Variable(_) => output.push(token),
            Token::Function(_) | Token::OpenParen => stack.push(token),
            Token::Operator(op) => {
                let op = if op == Operator::Sub && prefix_position { Operator::Neg } else { op };
                while stack.last().is_some_and(|top| yields_to(top, op)) {
                    output.extend(stack.pop());
                }
                stack.push(Token::Operator(op));
            },
            Token::Comma => {
                loop {
                    match stack.last() {
                        Some(Token::OpenParen) => break,
                        Some(_) => output.extend(stack.pop()),
                        None => return Err(SyntaxError::MisplacedComma),
                    }
                }
            },
            Token::CloseParen => {
                loop {
                    match stack.pop() {
                        Some(Token::OpenParen) => break,
                        Some(top) => output.push(top),
                        None => return Err(SyntaxError::MismatchedParentheses),
                    }
                }
                if matches!(stack.last(), Some(Token::Function(_))) {
                    output.extend(stack.pop());
                }
            },
        }

        prefix_position = next_prefix_position;
    }

    while let Some(top) = stack.pop() {
        if matches!(top, Token::OpenParen | Token::CloseParen) {
            return Err(SyntaxError::MismatchedParentheses);
        }
        output.push(top);
    }

    debug!("rpn: {}", to_rpn_string(&output));
    Ok(output)
}

/// Whether the stack entry `top` must be emitted before `incoming` is
/// pushed.
fn yields_to(top: &Token, incoming: Operator) -> bool {
    match top {
        Token::Function(_) => true,
        Token::Operator(top) => match incoming.associativity() {
            Associativity::Left => top.precedence() >= incoming.precedence(),
            Associativity::Right => top.precedence() > incoming.precedence(),
        },
        _ => false,
    }
}

/// Whether a `-` directly after `token` is a negation.
const fn opens_operand_slot(token: &Token) -> bool {
    match token {
        Token::Operator(_) | Token::OpenParen | Token::Comma => true,
        _ => false,
    }
}
