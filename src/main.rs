// SPDX-License-Identifier: MPL-2.0
use iced_gallery::app::{self, paths, Flags};

const HELP: &str = "\
iced_gallery

USAGE:
  iced_gallery [OPTIONS]

OPTIONS:
  --lang <id>          Interface language (e.g. en-US, pt-BR)
  --config-dir <dir>   Directory holding settings.toml
  --api-url <url>      Gallery backend base URL
  -h, --help           Print this help
";

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("iced_gallery=info"))
        .init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let lang: Option<String> = args.opt_value_from_str("--lang").unwrap_or_else(|err| {
        log::warn!("Ignoring --lang: {err}");
        None
    });
    let config_dir: Option<String> = args
        .opt_value_from_str("--config-dir")
        .unwrap_or_else(|err| {
            log::warn!("Ignoring --config-dir: {err}");
            None
        });
    let api_url: Option<String> = args.opt_value_from_str("--api-url").unwrap_or_else(|err| {
        log::warn!("Ignoring --api-url: {err}");
        None
    });

    let unused = args.finish();
    if !unused.is_empty() {
        log::warn!("Ignoring unknown arguments: {unused:?}");
    }

    paths::init_cli_overrides(config_dir);
    app::run(Flags { lang, api_url })
}
