/// The evaluator module runs RPN sequences on a value stack.
///
/// It resolves variables through the [`Context`](evaluator::core::Context),
/// applies operators and functions, and reports runtime errors such as
/// domain violations or unbalanced stacks.
pub mod evaluator;
/// The lexer module tokenizes expression text.
///
/// The lexer strips whitespace, scans numbers, identifiers and symbols, and
/// inserts the implicit multiplications that make `2π` or `3(x+1)` valid.
pub mod lexer;
/// The parser module reorders infix tokens into RPN.
///
/// It implements the shunting-yard algorithm over the registry's precedence
/// and associativity, including unary-minus disambiguation and function
/// argument lists.
pub mod parser;
/// The registry module describes every operator and function.
///
/// The tables are closed enums fixed at compile time, safe to read from any
/// number of threads.
pub mod registry;
