/// Evaluation context and result types.
///
/// Contains the angle mode, the `Ans` register and caller-supplied
/// variable bindings, plus the default bindings every evaluation sees.
pub mod core;

/// RPN stack machine.
///
/// Consumes a postfix token sequence and reduces it to a single number.
pub mod rpn;
