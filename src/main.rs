// SPDX-License-Identifier: MPL-2.0
use spotnxt::app::{self, config, paths, Flags};
use spotnxt::infrastructure::HttpBackend;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const HELP: &str = "\
SpotNxt - video thumbnail generator

USAGE:
  spotnxt [OPTIONS] [VIDEO]

OPTIONS:
  --lang <LOCALE>        UI language (e.g. en-US, fr)
  --backend-url <URL>    Thumbnail service address
  --config-dir <DIR>     Directory holding settings.toml
  --data-dir <DIR>       Directory holding application state
  -h, --help             Print this help

ARGS:
  <VIDEO>                Video file to pre-select
";

struct Args {
    lang: Option<String>,
    backend_url: Option<String>,
    config_dir: Option<String>,
    data_dir: Option<String>,
    file_path: Option<PathBuf>,
}

fn parse_args() -> Result<Option<Args>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let parsed = Args {
        lang: args.opt_value_from_str("--lang")?,
        backend_url: args.opt_value_from_str("--backend-url")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        data_dir: args.opt_value_from_str("--data-dir")?,
        file_path: args.opt_free_from_str()?,
    };

    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring extra arguments");
    }
    Ok(Some(parsed))
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = match parse_args() {
        Ok(Some(args)) => args,
        Ok(None) => {
            print!("{HELP}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            return ExitCode::FAILURE;
        }
    };

    paths::init_cli_overrides(args.data_dir, args.config_dir);

    let (mut config, config_warning) = config::load();
    if let Some(url) = args.backend_url {
        config.backend.base_url = url;
    }

    let backend = match HttpBackend::new(&config.backend.base_url, config.backend.request_timeout()) {
        Ok(backend) => backend,
        Err(err) => {
            tracing::error!(error = %err, base_url = %config.backend.base_url, "cannot create thumbnail backend");
            return ExitCode::FAILURE;
        }
    };
    tracing::info!(endpoint = backend.endpoint(), "using thumbnail service");

    let flags = Flags {
        lang: args.lang,
        file_path: args.file_path,
        config,
        config_warning,
        state_dir: None,
        backend: Arc::new(backend),
    };

    match app::run(flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "application exited with an error");
            ExitCode::FAILURE
        }
    }
}
