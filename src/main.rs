// SPDX-License-Identifier: MPL-2.0
use iced_folio::app::{self, Flags};

const HELP: &str = "\
iced_folio - personal research portfolio

USAGE:
  iced_folio [OPTIONS]

OPTIONS:
  --lang <LOCALE>        UI language (e.g. en-US, fr)
  --site <PATH>          site manifest replacing the embedded one
  --orcid <ID>           ORCID iD whose works are listed
  --data-dir <PATH>      directory of the preference store
  --config-dir <PATH>    directory of settings.toml
  -h, --help             print this help
";

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(None);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        site: args.opt_value_from_str("--site")?,
        data_dir: args.opt_value_from_str("--data-dir")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        orcid: args.opt_value_from_str("--orcid")?,
    };

    let rest = args.finish();
    if !rest.is_empty() {
        log::warn!("ignoring unexpected arguments: {:?}", rest);
    }
    Ok(Some(flags))
}

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match parse_flags() {
        Ok(Some(flags)) => app::run(flags),
        Ok(None) => Ok(()),
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    }
}
