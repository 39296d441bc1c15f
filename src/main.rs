//! taxform-dispatch - build normalized action messages from the command line
//!
//! Reads a JSON form payload on stdin and prints the message the reducer
//! expects:
//!
//! ```text
//! echo '{"firstName":"Jane","lastName":"Doe","ssid":"123-45-6789"}' \
//!     | taxform-dispatch SAVE_EMPLOYEE_DATA
//! ```

use anyhow::{bail, Context, Result};
use serde_json::Value;
use std::io::{self, Read};
use taxform_state::config::DispatchConfig;
use taxform_state::{dispatch, ActionName};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const USAGE: &str = "usage: taxform-dispatch <ACTION_TYPE> < form.json\n       taxform-dispatch --list";

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let (config, config_err) = match DispatchConfig::load() {
        Ok(config) => (config, None),
        Err(err) => (DispatchConfig::default(), Some(err)),
    };

    // Logs go to stderr so stdout stays machine-readable
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    if let Some(err) = config_err {
        tracing::warn!("Ignoring unreadable config file: {err:#}");
    }

    let args: Vec<String> = std::env::args().skip(1).collect();
    let tag = match args.as_slice() {
        [flag] if flag == "--list" => {
            for name in ActionName::ALL {
                println!("{name}");
            }
            return Ok(());
        }
        [flag] if flag == "-h" || flag == "--help" => {
            println!("{USAGE}");
            return Ok(());
        }
        [tag] => tag,
        _ => bail!("{USAGE}"),
    };
    let name: ActionName = tag.parse()?;

    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("Failed to read form data from stdin")?;
    let form_data = if input.trim().is_empty() && name.is_signal() {
        Value::Null
    } else {
        serde_json::from_str(&input).context("Form data is not valid JSON")?
    };

    let action = dispatch(name, form_data)?;
    let output = if config.pretty() {
        action.to_json_pretty()?
    } else {
        action.to_json()?
    };
    println!("{output}");

    Ok(())
}
