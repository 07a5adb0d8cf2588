use std::process::ExitCode;

use clap::Parser;

use mathcalc_rs::request::Operation;
use mathcalc_rs::{calculate, EXIT_USAGE};

/// Консольный калькулятор с проверяемой целочисленной арифметикой.
#[derive(Parser, Debug)]
#[command(
    name = "mathcalc",
    version,
    about = "Калькулятор с проверкой переполнения и деления на ноль",
    after_help = "Примеры:\n  mathcalc -o add  -a 2 -b 3\n  mathcalc -o pow  -a 2 -b 10\n  mathcalc -o fact -a 5"
)]
struct Cli {
    /// Операция: add, sub, mul, div, pow, fact
    #[arg(short = 'o', long = "op", value_enum)]
    op: Operation,

    /// Первый операнд
    #[arg(short = 'a', long = "a", allow_negative_numbers = true)]
    a: i64,

    /// Второй операнд (обязателен для add/sub/mul/div/pow)
    #[arg(short = 'b', long = "b", allow_negative_numbers = true)]
    b: Option<i64>,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // --help и --version — не ошибки; остальное — код выхода 1
            let is_usage = err.use_stderr();
            let _ = err.print();
            return if is_usage {
                ExitCode::from(EXIT_USAGE)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match calculate(cli.op, cli.a, cli.b) {
        Ok(value) => {
            println!("{value}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Ошибка: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}
