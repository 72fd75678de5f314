use log::trace;

use crate::{
    error::RuntimeError,
    interpreter::evaluator::core::{Context, EvalResult},
    token::Token,
};

/// Reduces an RPN token sequence to a single number.
///
/// Numbers and constants push their value, variables push their binding from
/// `context`. Operators and functions pop exactly as many operands as their
/// arity and hand them over in push order, so `10 4 -` computes `10 - 4`.
///
/// # Errors
/// - `UnknownVariable` when a variable has no binding.
/// - `Domain` when an operator or function rejects its operands.
/// - `InvalidExpression` when an operator lacks operands, when a
///   parenthesis or comma is still present, or when the stack does not end
///   with exactly one value.
///
/// # Example
/// ```
/// use calcengine::interpreter::{
///     evaluator::{core::Context, rpn::evaluate},
///     lexer::tokenize,
///     parser::parse,
/// };
///
/// let rpn = parse(tokenize("x^2 + 1").unwrap()).unwrap();
/// let context = Context::new().with_variable("x", 3.0);
///
/// assert_eq!(evaluate(&rpn, &context).unwrap(), 10.0);
/// ```
pub fn evaluate(rpn: &[Token], context: &Context) -> EvalResult<f64> {
    let mut stack: Vec<f64> = Vec::with_capacity(rpn.len());

    for token in rpn {
        let value = match token {
            Token::Number(value) => *value,
            Token::Constant(constant) => constant.value(),
            Token::Variable(name) => {
                context.get_variable(name)
                       .ok_or_else(|| RuntimeError::UnknownVariable { name: name.clone() })?
            },
            Token::Operator(op) => {
                let args = pop_operands(&mut stack, op.arity(), token)?;
                op.apply(&args)?
            },
            Token::Function(function) => {
                let args = pop_operands(&mut stack, function.arity(), token)?;
                function.apply(&args, context.angle_mode)?
            },
            Token::OpenParen | Token::CloseParen | Token::Comma => {
                return Err(RuntimeError::InvalidExpression { details: format!("unexpected '{token}' in postfix input") });
            },
        };
        trace!("{token} -> {value}");
        stack.push(value);
    }

    match stack.as_slice() {
        [value] => Ok(*value),
        [] => Err(RuntimeError::InvalidExpression { details: "no value produced".to_string() }),
        values => Err(RuntimeError::InvalidExpression { details: format!("{} values left on the stack",
                                                                         values.len()) }),
    }
}

/// Pops the top `count` operands, restoring push order.
fn pop_operands(stack: &mut Vec<f64>, count: usize, token: &Token) -> EvalResult<Vec<f64>> {
    if stack.len() < count {
        return Err(RuntimeError::InvalidExpression { details: format!("insufficient operands for '{token}'") });
    }
    Ok(stack.split_off(stack.len() - count))
}
