use crate::CLAP_STYLING;
use clap::{arg, command};
use url::Url;

pub(crate) fn command_argument_builder() -> clap::Command {
    clap::Command::new("pulse")
        .version(env!("CARGO_PKG_VERSION"))
        .bin_name("pulse")
        .styles(CLAP_STYLING)
        .arg(arg!(-q --"quiet" "Suppress banner and non-essential output").required(false))
        .subcommand_required(false)
        .subcommand(
            command!("check")
                .about(
                    "Probe each configured target for a reachable health-check endpoint, \
                in order, one at a time.",
                )
                .arg(
                    arg!(-u --"url" <URL>)
                        .required(false)
                        .help("A target URL to probe (repeatable)")
                        .value_parser(clap::value_parser!(Url))
                        .action(clap::ArgAction::Append)
                        .conflicts_with("targets-file"),
                )
                .arg(
                    arg!(-T --"targets-file" <PATH>)
                        .required(false)
                        .help("Path to a newline-delimited file of target URLs")
                        .value_parser(clap::value_parser!(std::path::PathBuf))
                        .conflicts_with("url"),
                )
                .arg(
                    arg!(--"timeout" <SECONDS>)
                        .required(false)
                        .help("Request timeout in seconds")
                        .value_parser(clap::value_parser!(u64))
                        .default_value("5"),
                )
                .arg(
                    arg!(--"no-spinner")
                        .required(false)
                        .help("Disable the progress spinner (plain line-by-line output)")
                        .action(clap::ArgAction::SetTrue),
                ),
        )
}
