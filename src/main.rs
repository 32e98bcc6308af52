// SPDX-License-Identifier: MPL-2.0
use iced_island::app::{self, autostart, config, paths, Flags};
use iced_island::infrastructure::{dbus, gate};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
iced_island - floating notification island

USAGE:
  iced_island [OPTIONS]

OPTIONS:
  --config-dir DIR   Read and write settings.toml in DIR
  --enable           Turn the island on, start it at login and exit
  --disable          Turn the island off, stop starting it at login and exit
  --exclude PKG      Stop showing notifications from PKG and exit
  --include PKG      Show notifications from PKG again and exit
  --status           Print service, display and bus status and exit
  --demo             Show a sample notification once the listener is up
  -h, --help         Print this help
";

/// A settings change requested on the command line.
enum SettingsCommand {
    Enable(bool),
    Exclude(String),
    Include(String),
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("iced_island=info")),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return ExitCode::SUCCESS;
    }

    let config_dir: Option<String> = match args.opt_value_from_str("--config-dir") {
        Ok(value) => value,
        Err(err) => return usage_error(&err),
    };
    paths::init_cli_overrides(config_dir);

    let command = if args.contains("--enable") {
        Some(SettingsCommand::Enable(true))
    } else if args.contains("--disable") {
        Some(SettingsCommand::Enable(false))
    } else {
        let exclude: Option<String> = match args.opt_value_from_str("--exclude") {
            Ok(value) => value,
            Err(err) => return usage_error(&err),
        };
        let include: Option<String> = match args.opt_value_from_str("--include") {
            Ok(value) => value,
            Err(err) => return usage_error(&err),
        };
        exclude
            .map(SettingsCommand::Exclude)
            .or(include.map(SettingsCommand::Include))
    };
    let status = args.contains("--status");
    let demo = args.contains("--demo");

    let rest = args.finish();
    if !rest.is_empty() {
        eprintln!("unexpected arguments: {rest:?}\n\n{HELP}");
        return ExitCode::FAILURE;
    }

    if let Some(command) = command {
        return apply_settings(command);
    }
    if status {
        return print_status();
    }

    match app::run(Flags { demo }) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "island exited with an error");
            ExitCode::FAILURE
        }
    }
}

fn usage_error(err: &pico_args::Error) -> ExitCode {
    eprintln!("{err}\n\n{HELP}");
    ExitCode::FAILURE
}

fn apply_settings(command: SettingsCommand) -> ExitCode {
    let (mut cfg, warning) = config::load();
    if let Some(warning) = warning {
        tracing::warn!("{warning}");
    }

    match &command {
        SettingsCommand::Enable(enabled) => {
            cfg.service.enabled = Some(*enabled);
            println!("island {}", if *enabled { "enabled" } else { "disabled" });
            update_autostart(*enabled);
        }
        SettingsCommand::Exclude(package) => {
            if cfg.exclude(package) {
                println!("excluded {package}");
            } else {
                println!("{package} was already excluded");
            }
        }
        SettingsCommand::Include(package) => {
            if cfg.include(package) {
                println!("included {package}");
            } else {
                println!("{package} was not excluded");
            }
        }
    }

    match config::save(&cfg) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("could not save settings: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Keeps the login autostart entry in line with the service switch.
///
/// A failure here is reported but does not fail the settings change.
fn update_autostart(enabled: bool) {
    if enabled {
        match autostart::install() {
            Ok(path) => println!("autostart: {}", path.display()),
            Err(err) => eprintln!("could not install autostart entry: {err}"),
        }
    } else {
        match autostart::remove() {
            Ok(true) => println!("autostart: removed"),
            Ok(false) => {}
            Err(err) => eprintln!("could not remove autostart entry: {err}"),
        }
    }
}

fn print_status() -> ExitCode {
    let (cfg, warning) = config::load();
    if let Some(warning) = warning {
        tracing::warn!("{warning}");
    }
    let settings = cfg.to_settings();

    println!(
        "service:  {}",
        if settings.service_enabled { "enabled" } else { "disabled" }
    );
    println!("duration: {} ms", settings.display_duration.millis());
    println!(
        "display:  {}",
        if gate::display_reachable() { "reachable" } else { "unavailable" }
    );
    if !settings.excluded_packages.is_empty() {
        let excluded: Vec<&str> = settings.excluded_packages.iter().map(String::as_str).collect();
        println!("excluded: {}", excluded.join(", "));
    }

    let owner = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(iced_island::error::Error::from)
        .and_then(|runtime| runtime.block_on(dbus::name_has_owner()));
    match owner {
        Ok(true) => println!("bus:      {} is owned", dbus::BUS_NAME),
        Ok(false) => println!("bus:      {} is free", dbus::BUS_NAME),
        Err(err) => println!("bus:      unreachable ({err})"),
    }

    ExitCode::SUCCESS
}
