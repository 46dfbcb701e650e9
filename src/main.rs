use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use paramkit::{
    keys, FileHelper, JsonSanitizer, ParameterBag, ReturnHelper, SanitizerRegistry, Value,
};
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "paramkit")]
#[command(version)]
#[command(about = "Sanitize values and read typed parameters from JSON files")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run values through a registered sanitizer
    Sanitize {
        /// Sanitizer key (bool, int, float, string, json)
        #[arg(long = "as")]
        key: String,
        /// Values to sanitize, parsed as JSON when possible
        #[arg(required = true)]
        values: Vec<String>,
    },
    /// Read one parameter from a JSON object file
    Get {
        /// JSON file holding the parameters (`~` expands to the working directory)
        #[arg(long)]
        params: String,
        /// Parameter name
        #[arg(long)]
        key: String,
        /// Sanitizer key applied to the value
        #[arg(long = "as")]
        sanitizer: Option<String>,
        /// Value returned when the parameter is missing
        #[arg(long)]
        default: Option<String>,
    },
    /// Check that every key is present in a JSON object file
    Check {
        #[arg(long)]
        params: String,
        #[arg(required = true)]
        keys: Vec<String>,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let registry = Arc::new(build_registry());

    let ret = match cli.command {
        Commands::Sanitize { key, values } => sanitize(&registry, &key, &values),
        Commands::Get {
            params,
            key,
            sanitizer,
            default,
        } => {
            let bag = load_params(&params, registry)?;
            get(&bag, &key, sanitizer.as_deref(), default.as_deref())
        }
        Commands::Check { params, keys } => {
            let bag = load_params(&params, registry)?;
            check(&bag, &keys)
        }
    };

    println!("{}", serde_json::to_string_pretty(&ret)?);

    if ret.is_bad() {
        std::process::exit(1);
    }

    Ok(())
}

fn build_registry() -> SanitizerRegistry {
    let mut registry = SanitizerRegistry::new();
    registry.add_sanitizer(keys::JSON, JsonSanitizer::new());
    registry
}

/// JSON literal if it parses, plain string otherwise
fn parse_value(raw: &str) -> Value {
    serde_json::from_str::<serde_json::Value>(raw)
        .map(Value::from)
        .unwrap_or_else(|_| Value::Str(raw.to_string()))
}

fn load_params(path: &str, registry: Arc<SanitizerRegistry>) -> Result<ParameterBag> {
    let files = FileHelper::new(".")?;
    let text = files
        .get_contents(path)
        .with_context(|| format!("Failed to read parameters from {}", path))?;

    ParameterBag::from_json(&text, registry)
        .with_context(|| format!("Failed to load parameters from {}", path))
}

fn sanitize(registry: &SanitizerRegistry, key: &str, values: &[String]) -> ReturnHelper {
    let mut ret = ReturnHelper::new();

    if !registry.has_sanitizer(key) {
        ret.make_bad()
            .add_message(format!("No sanitizer registered for '{}'", key));
        return ret;
    }

    for raw in values {
        match registry.sanitize(&parse_value(raw), key) {
            Ok(value) => {
                ret.add_result(value);
            }
            Err(e) => {
                ret.make_bad().add_message(format!("{}: {}", raw, e));
            }
        }
    }

    ret
}

fn get(
    bag: &ParameterBag,
    key: &str,
    sanitizer: Option<&str>,
    default: Option<&str>,
) -> ReturnHelper {
    let mut ret = ReturnHelper::new();

    if !bag.has(key) {
        match default {
            Some(default) => {
                ret.add_message(format!("'{}' not set, using default", key))
                    .add_result(parse_value(default));
            }
            None => {
                ret.make_bad().add_message(format!("'{}' not set", key));
            }
        }
        return ret;
    }

    match bag.try_get(key, sanitizer) {
        Ok(Some(value)) => {
            ret.add_result(value);
        }
        Ok(None) => {
            ret.make_bad().add_message(format!("'{}' not set", key));
        }
        Err(e) => {
            ret.make_bad().add_message(format!("{}: {}", key, e));
        }
    }

    ret
}

fn check(bag: &ParameterBag, keys: &[String]) -> ReturnHelper {
    let mut ret = ReturnHelper::new();
    let wanted: Vec<&str> = keys.iter().map(String::as_str).collect();

    if !bag.has_all(&wanted) {
        ret.make_bad();
    }

    for key in &wanted {
        let present = bag.has(key);
        if !present {
            ret.add_message(format!("Missing '{}'", key));
        }
        ret.add_result(Value::Bool(present));
    }

    ret
}
