use std::process::ExitCode;

use clap::Parser;
use evaporator_design_toolbox::app::{self, Cli, RunOutcome};
use evaporator_design_toolbox::{config, i18n};
use tracing::{debug, Level};

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 명령을 실행한다.
fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli);

    let cfg = match config::load_or_default(&cli.config) {
        Ok(cfg) => cfg,
        Err(err) => {
            eprintln!("Error: {err}");
            return ExitCode::FAILURE;
        }
    };
    let lang = i18n::resolve_language(cli.lang.as_deref(), cfg.language.as_deref());
    let tr = i18n::Translator::new_with_pack(&lang, cli.locales.as_deref());
    debug!(lang = tr.language().as_code(), "translator ready");

    match app::run(&cli, &cfg, &tr) {
        Ok(RunOutcome::Completed) => ExitCode::SUCCESS,
        Ok(RunOutcome::Infeasible) => ExitCode::from(2),
        Err(err) => {
            eprintln!("{}: {err}", tr.t(i18n::keys::ERROR_PREFIX));
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(cli: &Cli) {
    let level = if cli.quiet {
        Level::ERROR
    } else {
        match cli.verbose {
            0 => Level::WARN,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}
