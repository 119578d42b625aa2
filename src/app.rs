use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use clap::builder::RangedU64ValueParser;
use clap::{ArgAction, ArgGroup, Args, Parser, Subcommand};
use thiserror::Error;
use tracing::info;

use crate::config::{Config, ConfigError, OutputFormat, DEFAULT_CONFIG_PATH};
use crate::evaporator::{self, ProcessInput, MAX_EFFECTS};
use crate::i18n::Translator;
use crate::steam::{self, if97::If97Error};
use crate::ui_cli;
use crate::units::{pressure, PressureUnit};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("input file {}: {source}", path.display())]
    Input {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("JSON output failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("saturation reference: {0}")]
    Saturation(#[from] If97Error),
    #[error("either --temperature or --pressure is required")]
    MissingSaturationPoint,
}

/// 명령 실행 결과.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Completed,
    /// 설계 계산은 끝났지만 보고서에 오류가 기록됨
    Infeasible,
}

#[derive(Debug, Parser)]
#[command(name = "evaporator_cli")]
#[command(version, about = "Multi-effect evaporator pre-design calculator", long_about = None)]
pub struct Cli {
    /// Path to the TOML configuration file (created with defaults when missing)
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,
    /// UI language (ko, en, auto)
    #[arg(long, global = true)]
    pub lang: Option<String>,
    /// Directory with TOML language packs
    #[arg(long, global = true)]
    pub locales: Option<PathBuf>,
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compute the evaporator design for one input set
    Design(DesignArgs),
    /// Compare the design saturation model with IAPWS-IF97
    Saturation(SaturationArgs),
}

#[derive(Debug, Clone, Args)]
pub struct DesignArgs {
    /// Number of effects (2–4 recommended)
    #[arg(
        long,
        default_value_t = 3,
        value_parser = RangedU64ValueParser::<usize>::new().range(0..=MAX_EFFECTS as u64)
    )]
    pub effects: usize,
    /// Feed flow [m³/h]
    #[arg(long, default_value_t = 41.67)]
    pub feed_flow: f64,
    /// Feed dry matter [%]
    #[arg(long, default_value_t = 2.38)]
    pub feed_dm: f64,
    /// Feed total suspended solids [%]
    #[arg(long, default_value_t = 1.5)]
    pub feed_tss: f64,
    /// Feed temperature [°C]
    #[arg(long, default_value_t = 25.0, allow_negative_numbers = true)]
    pub feed_temp: f64,
    /// Product dry matter [%]
    #[arg(long, default_value_t = 15.0, allow_negative_numbers = true)]
    pub product_dm: f64,
    /// Heating steam gauge pressure, in --steam-unit
    #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
    pub steam_pressure: f64,
    /// Unit of --steam-pressure (gauge basis)
    #[arg(long, value_enum, default_value_t = PressureUnit::Bar)]
    pub steam_unit: PressureUnit,
    /// Read the process input from a TOML file instead of flags
    #[arg(long, conflicts_with = "interactive")]
    pub input: Option<PathBuf>,
    /// Prompt for every input on stdin
    #[arg(short, long)]
    pub interactive: bool,
    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

impl DesignArgs {
    /// 플래그 값으로 설계 입력을 만든다. 증기 압력은 bar(g)로 환산한다.
    pub fn to_process_input(&self) -> ProcessInput {
        ProcessInput {
            effects: self.effects,
            feed_flow_m3_per_h: self.feed_flow,
            feed_dm_pct: self.feed_dm,
            feed_tss_pct: self.feed_tss,
            feed_temp_c: self.feed_temp,
            product_dm_pct: self.product_dm,
            steam_pressure_barg: pressure::to_bar(self.steam_pressure, self.steam_unit),
        }
    }
}

#[derive(Debug, Clone, Args)]
#[command(group(ArgGroup::new("point").required(true).args(["temperature", "pressure"])))]
pub struct SaturationArgs {
    /// Saturation temperature [°C]
    #[arg(long, allow_negative_numbers = true)]
    pub temperature: Option<f64>,
    /// Absolute pressure [kPa]
    #[arg(long)]
    pub pressure: Option<f64>,
    /// Print the comparison as JSON
    #[arg(long)]
    pub json: bool,
}

/// 파싱된 명령을 실행한다.
pub fn run(cli: &Cli, config: &Config, tr: &Translator) -> Result<RunOutcome, AppError> {
    match &cli.command {
        Command::Design(args) => run_design(args, config, tr),
        Command::Saturation(args) => run_saturation(args, config, tr),
    }
}

fn run_design(args: &DesignArgs, config: &Config, tr: &Translator) -> Result<RunOutcome, AppError> {
    let input = if let Some(path) = &args.input {
        load_process_input(path)?
    } else if args.interactive {
        let stdin = io::stdin();
        let mut stdout = io::stdout();
        ui_cli::prompt_process_input(
            &mut stdin.lock(),
            &mut stdout,
            &args.to_process_input(),
            args.steam_unit,
            tr,
        )?
    } else {
        args.to_process_input()
    };
    info!(effects = input.effects, "running evaporator design");

    let report = evaporator::compute_design_with(&input, &config.design);
    if args.json || config.output == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", ui_cli::render_report(&report, tr));
    }

    Ok(if report.has_error() {
        RunOutcome::Infeasible
    } else {
        RunOutcome::Completed
    })
}

fn run_saturation(
    args: &SaturationArgs,
    config: &Config,
    tr: &Translator,
) -> Result<RunOutcome, AppError> {
    let comparison = match (args.temperature, args.pressure) {
        (Some(t), _) => steam::compare_at_temperature(t)?,
        (None, Some(p)) => steam::compare_at_pressure(p)?,
        (None, None) => return Err(AppError::MissingSaturationPoint),
    };
    if args.json || config.output == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&comparison)?);
    } else {
        print!(
            "{}",
            ui_cli::render_comparison(&comparison, args.temperature.is_some(), tr)
        );
    }
    Ok(RunOutcome::Completed)
}

/// TOML 입력 파일을 읽는다. 빠진 항목은 기본값으로 채운다.
pub fn load_process_input(path: &Path) -> Result<ProcessInput, AppError> {
    let content = fs::read_to_string(path)?;
    toml::from_str(&content).map_err(|source| AppError::Input {
        path: path.to_path_buf(),
        source,
    })
}
