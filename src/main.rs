//! BigNumber - CLI Entry Point
//!
//! Commands:
//! - `bignum add <a> <b>` - Sum of two integers
//! - `bignum sub <a> <b>` - Difference of two integers
//! - `bignum mul <a> <b>` - Product of two integers
//! - `bignum div <a> <b>` - Quotient and remainder
//! - `bignum mod <a> <b>` - Remainder only
//! - `bignum pow <base> <exponent>` - Exponentiation
//! - `bignum cmp <a> <b>` - Compare two integers
//! - `bignum abs <a>` - Absolute value

use std::cmp::Ordering;
use clap::{Parser, Subcommand};
use bignumber::{BigNumber, NumError};

#[derive(Parser)]
#[command(name = "bignum")]
#[command(version = "0.1.0")]
#[command(about = "Arbitrary-precision signed decimal integer arithmetic")]
struct Cli {
    /// Emit results as JSON instead of plain text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Add two integers
    Add { a: String, b: String },
    /// Subtract the second integer from the first
    Sub { a: String, b: String },
    /// Multiply two integers
    Mul { a: String, b: String },
    /// Divide, printing quotient and remainder
    Div { a: String, b: String },
    /// Remainder of truncated division
    Mod { a: String, b: String },
    /// Raise the first integer to the second (non-negative) power
    Pow { base: String, exponent: String },
    /// Compare two integers
    Cmp { a: String, b: String },
    /// Absolute value
    Abs { a: String },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Add { a, b }) => {
            let (a, b) = parse_pair(&a, &b);
            print_value("sum", &a.add(&b), cli.json);
        }
        Some(Commands::Sub { a, b }) => {
            let (a, b) = parse_pair(&a, &b);
            print_value("difference", &a.sub(&b), cli.json);
        }
        Some(Commands::Mul { a, b }) => {
            let (a, b) = parse_pair(&a, &b);
            print_value("product", &a.mul(&b), cli.json);
        }
        Some(Commands::Div { a, b }) => {
            let (a, b) = parse_pair(&a, &b);
            let (quotient, remainder) = unwrap_or_exit(a.div_rem(&b));
            if cli.json {
                println!(
                    "{}",
                    serde_json::json!({
                        "quotient": quotient.to_string(),
                        "remainder": remainder.to_string(),
                    })
                );
            } else {
                println!("quotient:  {}", quotient);
                println!("remainder: {}", remainder);
            }
        }
        Some(Commands::Mod { a, b }) => {
            let (a, b) = parse_pair(&a, &b);
            print_value("remainder", &unwrap_or_exit(a.modulo(&b)), cli.json);
        }
        Some(Commands::Pow { base, exponent }) => {
            let (base, exponent) = parse_pair(&base, &exponent);
            print_value("power", &unwrap_or_exit(base.pow(&exponent)), cli.json);
        }
        Some(Commands::Cmp { a, b }) => {
            let (a, b) = parse_pair(&a, &b);
            let ordering = match a.compare(&b) {
                Ordering::Less => "lt",
                Ordering::Equal => "eq",
                Ordering::Greater => "gt",
            };
            if cli.json {
                println!("{}", serde_json::json!({ "ordering": ordering }));
            } else {
                println!("{}", ordering);
            }
        }
        Some(Commands::Abs { a }) => {
            print_value("abs", &parse_number(&a).abs(), cli.json);
        }
        None => {
            println!("bignum v0.1.0");
            println!("Arbitrary-precision signed decimal integer arithmetic");
            println!();
            println!("Use --help for available commands");
            println!();
            demo_arithmetic();
        }
    }
}

fn parse_number(input: &str) -> BigNumber {
    match input.parse() {
        Ok(number) => number,
        Err(e) => {
            eprintln!("error: {:?}: {}", input, e);
            std::process::exit(1);
        }
    }
}

fn parse_pair(a: &str, b: &str) -> (BigNumber, BigNumber) {
    (parse_number(a), parse_number(b))
}

fn unwrap_or_exit<T>(result: Result<T, NumError>) -> T {
    match result {
        Ok(value) => value,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}

fn print_value(label: &str, value: &BigNumber, json: bool) {
    if json {
        println!("{}", serde_json::json!({ label: value.to_string() }));
    } else {
        println!("{}", value);
    }
}

fn demo_arithmetic() {
    use bignumber::decimal::arith;

    println!("━━━ BigNumber Demo ━━━");
    println!();

    let a = BigNumber::from(123456789123456789i64);
    let b = BigNumber::from(-987654321i64);

    println!("Signed arithmetic:");
    println!("  {} + {} = {}", a, b, a.add(&b));
    println!("  {} - {} = {}", a, b, a.sub(&b));
    println!("  {} × {} = {}", a, b, a.mul(&b));
    println!();

    println!("Magnitude kernels:");
    let x = BigNumber::from(123u32);
    let y = BigNumber::from(456u32);
    println!("  123 × 456 = {}", arith::multiply(x.magnitude(), y.magnitude()));
    let hundred = BigNumber::from(100u32);
    let seven = BigNumber::from(7u32);
    let (q, r) = arith::div_rem(hundred.magnitude(), seven.magnitude());
    println!("  100 ÷ 7 = {} rest {}", q, r);
    println!();

    if let Ok(p) = BigNumber::from(2i64).pow(&BigNumber::from(64u32)) {
        println!("  2^64 = {}", p);
    }
}
