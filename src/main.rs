// SPDX-License-Identifier: MPL-2.0
use toast_showcase::app::{self, Flags};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "\
Usage: toast_showcase [OPTIONS]

Options:
  --config-dir <DIR>   Directory containing settings.toml
  --log <FILTER>       Log filter (overrides RUST_LOG), e.g. `toast_showcase=debug`
  -h, --help           Print this help
";

fn init_tracing(filter: Option<&str>) {
    let filter = match filter {
        Some(directives) => EnvFilter::try_new(directives).ok(),
        None => EnvFilter::try_from_default_env().ok(),
    }
    .unwrap_or_else(|| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{USAGE}");
        return Ok(());
    }

    let parsed = (|| -> Result<(Option<String>, Option<String>), pico_args::Error> {
        let config_dir = args.opt_value_from_str("--config-dir")?;
        let log = args.opt_value_from_str("--log")?;
        Ok((config_dir, log))
    })();

    let (config_dir, log) = match parsed {
        Ok(values) => values,
        Err(err) => {
            eprintln!("error: {err}\n\n{USAGE}");
            std::process::exit(2);
        }
    };

    init_tracing(log.as_deref());

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unexpected arguments");
    }

    app::run(Flags { config_dir })
}
