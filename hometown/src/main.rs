use colored::Colorize;
use hometown::command_argument_builder;
use hometown::handlers::{
    handle_about, handle_menu, handle_resolve, handle_sitemap, handle_ui, init_logging,
    print_banner,
};

fn main() {
    let cmd = command_argument_builder();
    let chosen_command = cmd.get_matches();
    let quiet = chosen_command.get_flag("quiet");

    // Show banner unless --quiet flag is set
    if !quiet {
        print_banner();
    }

    let result = match chosen_command.subcommand() {
        // No subcommand provided, just show the banner
        None => return,
        Some(("ui", primary_command)) => handle_ui(primary_command),
        Some((name, primary_command)) => {
            init_logging();
            match name {
                "menu" => handle_menu(primary_command),
                "sitemap" => handle_sitemap(primary_command),
                "about" => handle_about(),
                "resolve" => handle_resolve(primary_command),
                _ => unreachable!("clap should ensure we don't get here"),
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{} {:#}", "✗".red().bold(), e);
        std::process::exit(1);
    }
}
