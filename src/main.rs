// SPDX-License-Identifier: MPL-2.0
use iced_landing::app::{self, config, paths, Flags};
use iced_landing::export;
use iced_landing::i18n::I18n;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
iced_landing - localized landing page

USAGE:
  iced_landing [OPTIONS]

OPTIONS:
  --path <ROUTE>        Route to open on startup (default: /)
  --lang <TAG>          Preferred locale for the root redirect (en, hy, ru)
  --config-dir <DIR>    Directory holding settings.toml
  --i18n-dir <DIR>      Directory with .ftl files overriding the embedded catalogs
  --export <DIR>        Write the static HTML site to DIR and exit
  -h, --help            Print this help

ENVIRONMENT:
  ICED_LANDING_CONFIG_DIR   Config directory (overridden by --config-dir)
  ICED_LANDING_BASE_URL     Base URL for canonical links
  RUST_LOG                  Log filter (default: info)
";

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .init();
}

struct Args {
    flags: Flags,
    export: Option<PathBuf>,
}

fn parse_args() -> Result<Option<Args>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        path: args.opt_value_from_str("--path")?,
        i18n_dir: args.opt_value_from_str("--i18n-dir")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
    };
    let export: Option<PathBuf> = args.opt_value_from_str("--export")?;

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unexpected arguments");
    }

    Ok(Some(Args { flags, export }))
}

fn main() -> ExitCode {
    init_tracing();

    let args = match parse_args() {
        Ok(Some(args)) => args,
        Ok(None) => {
            print!("{HELP}");
            return ExitCode::SUCCESS;
        }
        Err(error) => {
            eprintln!("error: {error}\n\n{HELP}");
            return ExitCode::FAILURE;
        }
    };

    paths::init_cli_overrides(args.flags.config_dir.clone());

    let i18n = match I18n::load_with_dir(args.flags.i18n_dir.as_deref().map(Path::new)) {
        Ok(i18n) => i18n,
        Err(error) => {
            tracing::error!(%error, "failed to load translation catalogs");
            return ExitCode::FAILURE;
        }
    };

    if let Some(dir) = args.export {
        let (config, _warning) = config::load();
        let preferred = app::preferred_locale(args.flags.lang.as_deref(), &config);
        return match export::export_site(&dir, &i18n, &config, preferred) {
            Ok(_) => ExitCode::SUCCESS,
            Err(error) => {
                tracing::error!(%error, "export failed");
                ExitCode::FAILURE
            }
        };
    }

    match app::run(args.flags, i18n) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!(%error, "application error");
            ExitCode::FAILURE
        }
    }
}
