// SPDX-License-Identifier: MPL-2.0
use agari_locale::error::Error;
use agari_locale::i18n::{I18n, AVAILABLE_LOCALES};
use agari_locale::paths;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
agari-locale: show or change the Agari display language

USAGE:
  agari-locale [OPTIONS]

OPTIONS:
  --config-dir DIR   Use DIR instead of the platform config directory
  --set CODE         Persist CODE (en, ja) as the preferred language
  --key KEY          Print the translation for KEY (e.g. windEast)
  --winds            Print the four wind names
  --list             List available languages
  -h, --help         Print this help
";

struct Flags {
    config_dir: Option<String>,
    set: Option<String>,
    key: Option<String>,
    winds: bool,
    list: bool,
}

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        config_dir: args.opt_value_from_str("--config-dir")?,
        set: args.opt_value_from_str("--set")?,
        key: args.opt_value_from_str("--key")?,
        winds: args.contains("--winds"),
        list: args.contains("--list"),
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        eprintln!("Warning: unused arguments left: {:?}", remaining);
    }
    Ok(Some(flags))
}

fn run(flags: Flags) -> Result<(), Error> {
    paths::init_cli_overrides(flags.config_dir);
    let i18n = I18n::system()?;

    if let Some(code) = flags.set.as_deref() {
        i18n.set_locale_code(code)?;
    }

    if flags.list {
        for info in AVAILABLE_LOCALES {
            let marker = if info.locale == i18n.locale() { '*' } else { ' ' };
            println!("{} {}  {} ({})", marker, info.locale, info.native_name, info.name);
        }
    }

    if flags.winds {
        let winds = i18n.wind_names(None);
        println!("{} {} {} {}", winds.east, winds.south, winds.west, winds.north);
    }

    match flags.key.as_deref() {
        Some(key) => match i18n.tr(key) {
            Some(value) => println!("{}", value),
            None => return Err(Error::Catalog(format!("unknown translation key: {}", key))),
        },
        None if !flags.list && !flags.winds => println!("{}", i18n.locale()),
        None => {}
    }

    Ok(())
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("agari_locale=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{}", HELP);
            return ExitCode::SUCCESS;
        }
        Err(error) => {
            eprintln!("Error: {}", error);
            return ExitCode::FAILURE;
        }
    };

    match run(flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("Error: {}", error);
            ExitCode::FAILURE
        }
    }
}
