/// Factorial and combinatorics kernels.
///
/// Shared by the `!` operator and the `nPr`/`nCr` functions; every kernel
/// checks its integer domain before computing.
pub mod combinatorics;
/// Named function table.
///
/// Maps case-insensitive names to [`Function`](function::Function) variants,
/// their arity and their (angle-mode aware) behavior.
pub mod function;
/// Operator table.
///
/// Precedence, associativity, arity and behavior of every operator.
pub mod operator;
