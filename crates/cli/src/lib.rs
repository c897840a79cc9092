pub mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use chrono::{Datelike, Local, Weekday};
use clap::{Parser, Subcommand, ValueEnum};
use slicebot_core::ServiceMethod;

#[derive(Debug, Parser)]
#[command(
    name = "slicebot",
    about = "Slicebot order tooling",
    long_about = "Interpret free-text chat orders against a store menu snapshot and \
                  select the promotional deals the order qualifies for.",
    after_help = "Examples:\n  slicebot interpret --menu menu.json \"large pepperoni, no onion\"\n  \
                  slicebot deals --menu menu.json --service-method carryout \"pepperoni; margherita\"\n  \
                  slicebot profile"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ServiceMethodArg {
    Carryout,
    Delivery,
}

impl From<ServiceMethodArg> for ServiceMethod {
    fn from(value: ServiceMethodArg) -> Self {
        match value {
            ServiceMethodArg::Carryout => ServiceMethod::Carryout,
            ServiceMethodArg::Delivery => ServiceMethod::Delivery,
        }
    }
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "Interpret an order line against a menu snapshot")]
    Interpret {
        #[arg(long, help = "Path to a vendor menu snapshot JSON file")]
        menu: PathBuf,
        #[arg(help = "Free-text order line; sub-orders separated by ';'")]
        order: String,
        #[arg(long, help = "Emit the vendor wire JSON instead of a summary")]
        json: bool,
    },
    #[command(about = "Select the deals an order line qualifies for")]
    Deals {
        #[arg(long, help = "Path to a vendor menu snapshot JSON file")]
        menu: PathBuf,
        #[arg(long, value_enum, default_value_t = ServiceMethodArg::Carryout)]
        service_method: ServiceMethodArg,
        #[arg(long, help = "Weekday override (Mon..Sun); defaults to today")]
        weekday: Option<Weekday>,
        #[arg(long, help = "Vendor profile TOML; falls back to SLICEBOT_PROFILE, then defaults")]
        profile: Option<PathBuf>,
        #[arg(help = "Free-text order line; sub-orders separated by ';'")]
        order: String,
        #[arg(long, help = "Emit the vendor wire JSON instead of a summary")]
        json: bool,
    },
    #[command(about = "Show the effective vendor profile")]
    Profile {
        #[arg(long, help = "Vendor profile TOML; falls back to SLICEBOT_PROFILE, then defaults")]
        path: Option<PathBuf>,
    },
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Interpret { menu, order, json } => commands::interpret::run(&menu, &order, json),
        Command::Deals { menu, service_method, weekday, profile, order, json } => {
            let weekday = weekday.unwrap_or_else(|| Local::now().weekday());
            commands::deals::run(
                &menu,
                &order,
                service_method.into(),
                weekday,
                profile.as_deref(),
                json,
            )
        }
        Command::Profile { path } => commands::profile::run(path.as_deref()),
    };

    println!("{}", result.output);
    ExitCode::from(result.exit_code)
}
