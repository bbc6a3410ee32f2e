use anyhow::Context;
use clap::{Parser, Subcommand};
use formath_fmt::{Arg, Formatter, Level};
use formath_math::{checked_factorial, factorial, fibonacci, is_prime, primes_up_to};

#[derive(Parser)]
#[command(name = "formath")]
#[command(about = "Formatting and math utilities", long_about = None)]
#[command(version = formath_fmt::VERSION)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Walk through every library operation
    Demo,
    /// Substitute ARGS into the `{}` placeholders of TEMPLATE
    Format {
        template: String,
        /// Integers, floats and booleans are detected; anything else is text
        #[arg(allow_negative_numbers = true)]
        args: Vec<String>,
    },
    /// Print a timestamped log line
    Log {
        /// Severity tag (TRACE, DEBUG, INFO, WARN, ERROR or any custom tag)
        level: String,
        template: String,
        #[arg(allow_negative_numbers = true)]
        args: Vec<String>,
        /// Emit the record as JSON instead of a log line
        #[arg(long)]
        json: bool,
    },
    /// Compute N!
    Factorial {
        #[arg(allow_negative_numbers = true)]
        n: i32,
        /// Fail on negative input or overflow instead of printing the raw value
        #[arg(long)]
        checked: bool,
    },
    /// Test each number for primality
    Prime {
        #[arg(required = true, allow_negative_numbers = true)]
        numbers: Vec<i32>,
    },
    /// List every prime up to LIMIT
    Primes {
        #[arg(allow_negative_numbers = true)]
        limit: i32,
    },
    /// Print the first N Fibonacci numbers
    Fibonacci {
        #[arg(allow_negative_numbers = true)]
        n: i32,
    },
    /// Print the library version and packaging
    Version,
}

/// Interprets a command-line word as the narrowest matching argument kind.
fn parse_arg(word: &str) -> Arg {
    if let Ok(v) = word.parse::<i64>() {
        Arg::Int(v)
    } else if let Ok(v) = word.parse::<u64>() {
        Arg::UInt(v)
    } else if let Ok(v) = word.parse::<f64>() {
        Arg::Float(v)
    } else if let Ok(v) = word.parse::<bool>() {
        Arg::Bool(v)
    } else {
        Arg::Text(word.to_string())
    }
}

fn join<T: ToString>(values: &[T]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn run_demo() {
    println!("=== Formath Demo ===\n");
    println!("Library Version: {}", Formatter::version());
    println!("Library Type: {}\n", Formatter::library_type());

    println!("=== String Formatter Demo ===");
    let formatter = Formatter::new();
    let formatted = formatter.format(
        "Hello, {}! The answer is {}.",
        &["World".into(), 42.into()],
    );
    println!("Formatted string: {}", formatted);

    println!("\n=== Logging Demo ===");
    formatter.log(Level::Info, "Application started successfully", &[]);
    formatter.log(
        Level::Warn,
        "This is a warning message with value: {}",
        &[123.into()],
    );
    formatter.log(
        Level::Error,
        "Error processing item {} with status {}",
        &["example.txt".into(), "failed".into()],
    );

    println!("\n=== Math Demo ===");
    let fact_input = 10;
    let fact_result = factorial(fact_input);
    println!("Factorial of {} = {}", fact_input, fact_result);

    println!("\nPrime number tests:");
    for n in [2, 17, 25, 29, 100, 101] {
        let verdict = if is_prime(n) { "prime" } else { "not prime" };
        println!("{} is {}", n, verdict);
    }

    let fib_count = 15;
    println!("\nFirst {} Fibonacci numbers:", fib_count);
    println!("{}", join(&fibonacci(fib_count)));

    println!("\n=== Combined Demo ===");
    formatter.log(
        Level::Info,
        "Calculated factorial({}) = {}",
        &[fact_input.into(), fact_result.into()],
    );
    formatter.log(Level::Info, "Generated {} Fibonacci numbers", &[fib_count.into()]);

    println!("\n=== Error Handling Demo ===");
    println!("Result: {}", formatter.format("Test message: {}", &["success".into()]));
    println!("Result: {}", formatter.format("Unclosed {", &["ignored".into()]));

    println!("\n=== Demo Complete ===");
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match &cli.command {
        Commands::Demo => run_demo(),
        Commands::Format { template, args } => {
            let args: Vec<Arg> = args.iter().map(|w| parse_arg(w)).collect();
            println!("{}", formath_fmt::format(template, &args));
        }
        Commands::Log {
            level,
            template,
            args,
            json,
        } => {
            let args: Vec<Arg> = args.iter().map(|w| parse_arg(w)).collect();
            if *json {
                let record = formath_fmt::record(level.as_str(), template, &args);
                println!("{}", serde_json::to_string_pretty(&record)?);
            } else {
                formath_fmt::log(level.as_str(), template, &args);
            }
        }
        Commands::Factorial { n, checked } => {
            let value = if *checked {
                checked_factorial(*n).with_context(|| format!("cannot compute {}!", n))?
            } else {
                factorial(*n)
            };
            println!("{}", value);
        }
        Commands::Prime { numbers } => {
            for n in numbers {
                let verdict = if is_prime(*n) { "prime" } else { "not prime" };
                println!("{} is {}", n, verdict);
            }
        }
        Commands::Primes { limit } => {
            log::debug!("sieving primes up to {}", limit);
            println!("{}", join(&primes_up_to(*limit)));
        }
        Commands::Fibonacci { n } => {
            println!("{}", join(&fibonacci(*n)));
        }
        Commands::Version => {
            println!("{} ({})", Formatter::version(), Formatter::library_type());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_arg_kinds() {
        assert_eq!(parse_arg("42"), Arg::Int(42));
        assert_eq!(parse_arg("-7"), Arg::Int(-7));
        assert_eq!(parse_arg("18446744073709551615"), Arg::UInt(u64::MAX));
        assert_eq!(parse_arg("2.5"), Arg::Float(2.5));
        assert_eq!(parse_arg("true"), Arg::Bool(true));
        assert_eq!(parse_arg("example.txt"), Arg::Text("example.txt".to_string()));
    }

    #[test]
    fn test_negative_factorial_parses() {
        let cli = Cli::try_parse_from(["formath", "factorial", "-3"]).unwrap();
        assert!(matches!(cli.command, Commands::Factorial { n: -3, checked: false }));
    }

    #[test]
    fn test_format_subcommand_args() {
        let cli = Cli::try_parse_from(["formath", "format", "{} {}", "World", "42"]).unwrap();
        match cli.command {
            Commands::Format { template, args } => {
                let args: Vec<Arg> = args.iter().map(|w| parse_arg(w)).collect();
                assert_eq!(formath_fmt::format(&template, &args), "World 42");
            }
            _ => panic!("Expected Format"),
        }
    }

    #[test]
    fn test_join() {
        assert_eq!(join(&fibonacci(5)), "0, 1, 1, 2, 3");
        assert_eq!(join::<i64>(&[]), "");
    }
}
