// SPDX-License-Identifier: MPL-2.0
use iced_folio::app::{self, paths, Flags};
use iced_folio::content::Portfolio;
use iced_folio::logging;
use std::path::PathBuf;
use std::process::ExitCode;

const HELP: &str = "\
iced_folio - animated personal portfolio

USAGE:
  iced_folio [OPTIONS]

OPTIONS:
  --lang <id>          UI language (e.g. en-US, fr)
  --anchor <#section>  Open at a section (e.g. #contact)
  --config-dir <dir>   Directory holding settings.toml
  --content <file>     Portfolio content file (TOML)
  --verbose            Debug logging
  -h, --help           Print this help
";

fn main() -> ExitCode {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return ExitCode::SUCCESS;
    }

    let verbose = args.contains("--verbose");
    let parsed = (|| -> Result<_, pico_args::Error> {
        Ok((
            args.opt_value_from_str::<_, String>("--lang")?,
            args.opt_value_from_str::<_, String>("--anchor")?,
            args.opt_value_from_str::<_, String>("--config-dir")?,
            args.opt_value_from_str::<_, PathBuf>("--content")?,
        ))
    })();

    logging::init(verbose);

    let (lang, anchor, config_dir, content) = match parsed {
        Ok(values) => values,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            return ExitCode::FAILURE;
        }
    };
    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring unexpected arguments");
    }

    paths::init_cli_overrides(config_dir);

    let (portfolio, content_warning) = match Portfolio::load_or_embedded(content.as_deref()) {
        Ok(loaded) => loaded,
        Err(err) => {
            tracing::error!(%err, "no usable portfolio content");
            return ExitCode::FAILURE;
        }
    };

    let flags = Flags {
        lang,
        anchor,
        portfolio,
        content_warning,
    };

    match app::run(flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "application exited with an error");
            ExitCode::FAILURE
        }
    }
}
