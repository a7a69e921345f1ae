use clap::{arg, command};
use hometown_core::MenuId;

pub const CLAP_STYLING: clap::builder::styling::Styles = clap::builder::styling::Styles::styled()
    .header(clap_cargo::style::HEADER)
    .usage(clap_cargo::style::USAGE)
    .literal(clap_cargo::style::LITERAL)
    .placeholder(clap_cargo::style::PLACEHOLDER)
    .error(clap_cargo::style::ERROR)
    .valid(clap_cargo::style::VALID)
    .invalid(clap_cargo::style::INVALID);

pub fn command_argument_builder() -> clap::Command {
    clap::Command::new("hometown")
        .version(env!("CARGO_PKG_VERSION"))
        .bin_name("hometown")
        .styles(CLAP_STYLING)
        .arg(arg!(-q --"quiet" "Suppress banner and non-essential output").required(false))
        .subcommand_required(false)
        .subcommand(
            command!("ui")
                .about("Browse the storefront navbar in an interactive terminal UI")
                .arg(
                    arg!(-o --"open" <MENU>)
                        .required(false)
                        .help(
                            "Start with this dropdown open: furniture, kitchen, decor, \
                        furnishing, interiors, clearance",
                        )
                        .value_parser(clap::value_parser!(MenuId)),
                ),
        )
        .subcommand(
            command!("menu")
                .about("Print the category taxonomy as a tree")
                .arg(
                    arg!([MENU])
                        .required(false)
                        .help("Only print this menu (default: all menus)")
                        .value_parser(clap::value_parser!(MenuId)),
                ),
        )
        .subcommand(
            command!("sitemap")
                .about("Export every route of the storefront")
                .arg(
                    arg!(-f --"format" <FORMAT>)
                        .required(false)
                        .help("Sitemap format: text, json, csv, markdown")
                        .value_parser(["text", "json", "csv", "markdown", "md"])
                        .default_value("text"),
                )
                .arg(
                    arg!(-o --"output" <PATH>)
                        .required(false)
                        .help("Save sitemap to file (default: print to screen)"),
                )
                .arg(
                    arg!(--"base-url" <URL>)
                        .required(false)
                        .help("Make every link absolute against this URL"),
                ),
        )
        .subcommand(command!("about").about("Print the HomeTown story"))
        .subcommand(
            command!("resolve")
                .about("Show where a route sits in the category taxonomy")
                .arg(
                    arg!(<PATH>)
                        .required(true)
                        .help("Route to look up, e.g. /furniture/living-room/sofas"),
                ),
        )
}
