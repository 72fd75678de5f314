use std::process::ExitCode;

use calcengine::{
    AngleMode, Context, compute_statistics, evaluate_expression, format_number,
    matrix::{
        Matrix, add_matrices, determinant, format_matrix, inverse, multiply_matrices,
        subtract_matrices, transpose,
    },
};
use clap::{Parser, Subcommand, ValueEnum};

/// calcengine evaluates calculator expressions, matrix operations and
/// descriptive statistics from the command line.
///
/// Set `RUST_LOG=debug` to see tokens, RPN and matrix shapes.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluates an expression such as `2sin(30)+x^2`.
    Eval {
        #[arg(allow_hyphen_values = true)]
        expression: String,

        /// Reads and produces trigonometric angles in degrees.
        #[arg(short, long)]
        degrees: bool,

        /// Value bound to `Ans`.
        #[arg(short, long, default_value_t = 0.0, allow_negative_numbers = true)]
        ans: f64,

        /// Binds a variable, written `NAME=VALUE`. May be repeated.
        #[arg(short, long = "var", value_parser = parse_binding)]
        variables: Vec<(String, f64)>,
    },
    /// Prints descriptive statistics of a list of numbers.
    Stats {
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<f64>,
    },
    /// Applies a matrix operation. Matrices are written `1,2;3,4`.
    Matrix {
        operation: MatrixOperation,
        #[arg(allow_hyphen_values = true)]
        left:      Matrix,
        #[arg(allow_hyphen_values = true)]
        right:     Option<Matrix>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum MatrixOperation {
    Add,
    Sub,
    Mul,
    Det,
    Inv,
    Transpose,
}

fn parse_binding(binding: &str) -> Result<(String, f64), String> {
    let (name, value) = binding.split_once('=')
                               .ok_or_else(|| format!("expected NAME=VALUE, found '{binding}'"))?;
    let value = value.trim()
                     .parse::<f64>()
                     .map_err(|e| format!("invalid value for '{name}': {e}"))?;
    Ok((name.trim().to_string(), value))
}

fn run(command: Command) -> Result<String, Box<dyn std::error::Error>> {
    match command {
        Command::Eval { expression,
                        degrees,
                        ans,
                        variables, } => {
            let angle_mode = if degrees { AngleMode::Deg } else { AngleMode::Rad };
            let context = variables.into_iter()
                                   .fold(Context::new().with_angle_mode(angle_mode).with_ans(ans),
                                         |context, (name, value)| context.with_variable(name, value));
            let value = evaluate_expression(&expression, &context)?;
            Ok(format_number(value))
        },
        Command::Stats { values } => {
            let stats = compute_statistics(&values).ok_or("no values given")?;
            let rows = [("count", stats.count.to_string()),
                        ("min", format_number(stats.min)),
                        ("max", format_number(stats.max)),
                        ("sum", format_number(stats.sum)),
                        ("mean", format_number(stats.mean)),
                        ("median", format_number(stats.median)),
                        ("variance", format_number(stats.variance)),
                        ("std dev", format_number(stats.std_dev)),
                        ("sample variance", format_number(stats.sample_variance)),
                        ("sample std dev", format_number(stats.sample_std_dev))];
            Ok(rows.iter()
                   .map(|(label, value)| format!("{label:<16}{value}"))
                   .collect::<Vec<_>>()
                   .join("\n"))
        },
        Command::Matrix { operation,
                          left,
                          right, } => {
            let second = || right.as_ref().ok_or("this operation needs a second matrix");
            let result = match operation {
                MatrixOperation::Add => add_matrices(&left, second()?)?,
                MatrixOperation::Sub => subtract_matrices(&left, second()?)?,
                MatrixOperation::Mul => multiply_matrices(&left, second()?)?,
                MatrixOperation::Inv => inverse(&left)?,
                MatrixOperation::Transpose => transpose(&left),
                MatrixOperation::Det => return Ok(format_number(determinant(&left)?)),
            };
            Ok(format_matrix(&result))
        },
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(args.command) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}
