use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use flash_core::model::Language;
use services::AppServices;
use ui::{App, UiApp, build_app_context};

const ASSETS_ENV: &str = "FLASHCARDS_ASSETS_DIR";
const PROGRESS_ENV: &str = "FLASHCARDS_PROGRESS_DIR";

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    MissingLanguage,
    InvalidLanguage { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::MissingLanguage => write!(f, "reset requires a language"),
            ArgsError::InvalidLanguage { raw } => write!(f, "unknown language: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn parse_language(raw: String) -> Result<Language, ArgsError> {
    raw.parse().map_err(|_| ArgsError::InvalidLanguage { raw })
}

struct DesktopApp {
    services: AppServices,
    language: Option<Language>,
}

impl UiApp for DesktopApp {
    fn services(&self) -> AppServices {
        self.services.clone()
    }

    fn initial_language(&self) -> Option<Language> {
        self.language
    }
}

/// Resolved settings: flags win over environment, environment over defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
struct AppConfig {
    assets_dir: PathBuf,
    progress_dir: PathBuf,
    language: Option<Language>,
}

impl AppConfig {
    fn from_env(env: impl Fn(&str) -> Option<String>) -> Self {
        let dir = |key: &str, default: &str| {
            env(key)
                .filter(|value| !value.trim().is_empty())
                .map_or_else(|| PathBuf::from(default), PathBuf::from)
        };
        Self {
            assets_dir: dir(ASSETS_ENV, "assets"),
            progress_dir: dir(PROGRESS_ENV, "progress"),
            language: None,
        }
    }

    fn services(&self) -> AppServices {
        AppServices::files(&self.assets_dir, &self.progress_dir)
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  flashcards [ui] [--assets <dir>] [--progress <dir>] [--language <name>]");
    eprintln!("  flashcards status [--assets <dir>] [--progress <dir>]");
    eprintln!("  flashcards reset <language> [--assets <dir>] [--progress <dir>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --assets assets");
    eprintln!("  --progress progress");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  {ASSETS_ENV}, {PROGRESS_ENV}, RUST_LOG");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
    Status,
    Reset,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "status" => Some(Self::Status),
            "reset" => Some(Self::Reset),
            _ => None,
        }
    }
}

#[derive(Debug)]
enum Parsed {
    Help,
    Run(Command, AppConfig),
}

fn parse_args(argv: Vec<String>, mut config: AppConfig) -> Result<Parsed, ArgsError> {
    let mut args = argv.into_iter().peekable();

    let cmd = match args.peek().map(String::as_str) {
        None => Command::Ui,
        Some("--help" | "-h") => return Ok(Parsed::Help),
        Some(first) if first.starts_with("--") => Command::Ui,
        Some(first) => {
            let cmd =
                Command::from_arg(first).ok_or_else(|| ArgsError::UnknownArg(first.to_owned()))?;
            args.next();
            cmd
        }
    };

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--assets" => config.assets_dir = require_value(&mut args, "--assets")?.into(),
            "--progress" => config.progress_dir = require_value(&mut args, "--progress")?.into(),
            "--language" if cmd == Command::Ui => {
                let value = require_value(&mut args, "--language")?;
                config.language = Some(parse_language(value)?);
            }
            "--help" | "-h" => return Ok(Parsed::Help),
            _ if cmd == Command::Reset && config.language.is_none() && !arg.starts_with("--") => {
                config.language = Some(parse_language(arg)?);
            }
            _ => return Err(ArgsError::UnknownArg(arg)),
        }
    }

    if cmd == Command::Reset && config.language.is_none() {
        return Err(ArgsError::MissingLanguage);
    }
    Ok(Parsed::Run(cmd, config))
}

fn print_status(services: &AppServices) {
    for status in services.overview().list() {
        let slug = status.language.slug();
        match status.progress {
            _ if !status.available => println!("{slug}: unavailable"),
            Some(progress) => println!("{slug}: {progress} remaining"),
            None => println!("{slug}: no progress"),
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let argv: Vec<String> = std::env::args().skip(1).collect();
    let defaults = AppConfig::from_env(|key| std::env::var(key).ok());

    let (cmd, config) = match parse_args(argv, defaults) {
        Ok(Parsed::Help) => {
            print_usage();
            return Ok(());
        }
        Ok(Parsed::Run(cmd, config)) => (cmd, config),
        Err(err) => {
            print_usage();
            return Err(err.into());
        }
    };
    log::debug!("{cmd:?} with {config:?}");

    let services = config.services();
    match cmd {
        Command::Ui => {
            let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
                services,
                language: config.language,
            });
            let context = build_app_context(&app);

            // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title("Flashcards")
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
        Command::Status => {
            print_status(&services);
            Ok(())
        }
        Command::Reset => {
            let language = config.language.ok_or(ArgsError::MissingLanguage)?;
            services.overview().reset(language)?;
            println!("{}: progress reset", language.slug());
            Ok(())
        }
    }
}

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|arg| (*arg).to_owned()).collect()
    }

    fn defaults() -> AppConfig {
        AppConfig::from_env(|_| None)
    }

    #[test]
    fn no_arguments_launch_ui_with_defaults() {
        let Parsed::Run(cmd, config) = parse_args(Vec::new(), defaults()).unwrap() else {
            panic!("expected a command");
        };
        assert_eq!(cmd, Command::Ui);
        assert_eq!(config.assets_dir, PathBuf::from("assets"));
        assert_eq!(config.progress_dir, PathBuf::from("progress"));
    }

    #[test]
    fn environment_overrides_defaults_and_flags_override_environment() {
        let env = AppConfig::from_env(|key| match key {
            ASSETS_ENV => Some("/data/tables".to_owned()),
            PROGRESS_ENV => Some("/data/progress".to_owned()),
            _ => None,
        });
        assert_eq!(env.assets_dir, PathBuf::from("/data/tables"));

        let Parsed::Run(_, config) =
            parse_args(args(&["--progress", "/tmp/p", "--language", "French"]), env).unwrap()
        else {
            panic!("expected a command");
        };
        assert_eq!(config.assets_dir, PathBuf::from("/data/tables"));
        assert_eq!(config.progress_dir, PathBuf::from("/tmp/p"));
        assert_eq!(config.language, Some(Language::French));
    }

    #[test]
    fn reset_takes_a_positional_language() {
        let Parsed::Run(cmd, config) =
            parse_args(args(&["reset", "spanish", "--progress", "p"]), defaults()).unwrap()
        else {
            panic!("expected a command");
        };
        assert_eq!(cmd, Command::Reset);
        assert_eq!(config.language, Some(Language::Spanish));
    }

    #[test]
    fn reset_without_language_is_rejected() {
        let err = parse_args(args(&["reset"]), defaults()).unwrap_err();
        assert!(matches!(err, ArgsError::MissingLanguage));
    }

    #[test]
    fn unknown_input_is_rejected() {
        assert!(matches!(
            parse_args(args(&["teach"]), defaults()),
            Err(ArgsError::UnknownArg(_))
        ));
        assert!(matches!(
            parse_args(args(&["status", "--language", "french"]), defaults()),
            Err(ArgsError::UnknownArg(_))
        ));
        assert!(matches!(
            parse_args(args(&["--language", "klingon"]), defaults()),
            Err(ArgsError::InvalidLanguage { .. })
        ));
        assert!(matches!(
            parse_args(args(&["--assets"]), defaults()),
            Err(ArgsError::MissingValue { flag: "--assets" })
        ));
    }
}
