mod cli_types;
mod cli_utils;
mod commands;

use cli_types::{ConfigArgs, ExtractArgs, TreeArgs};

use clap::{Parser, Subcommand, ValueEnum};

use tentmark_lib::exit_codes::exit;

#[derive(Parser)]
#[command(author, version, about, long_about = None, arg_required_else_help = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Control colored output
    #[arg(long, global = true, default_value_t, value_enum)]
    color: Color,

    /// Path to configuration file
    #[arg(long, global = true, help = "Path to configuration file", conflicts_with = "no_config")]
    config: Option<String>,

    /// Ignore configuration files and use built-in defaults
    #[arg(long, global = true, help = "Ignore configuration files and use built-in defaults")]
    no_config: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the URLs and hashtags that would be autolinked
    Extract(ExtractArgs),
    /// Print the autolinked document tree as JSON
    Tree(TreeArgs),
    /// Print the effective configuration as TOML
    Config(ConfigArgs),
}

#[derive(Clone, Default, ValueEnum)]
enum Color {
    #[default]
    Auto,
    Always,
    Never,
}

fn main() {
    // Reset SIGPIPE so piping into `head` terminates quietly instead of panicking.
    #[cfg(unix)]
    {
        // SAFETY: restoring the default SIGPIPE disposition before any output is written.
        unsafe {
            libc::signal(libc::SIGPIPE, libc::SIG_DFL);
        }
    }

    // RUST_LOG=debug shows discarded candidates and config discovery
    env_logger::Builder::from_default_env()
        .format_timestamp(None)
        .format_target(false)
        .init();

    let cli = Cli::parse();

    match cli.color {
        Color::Always => colored::control::set_override(true),
        Color::Never => colored::control::set_override(false),
        Color::Auto => colored::control::unset_override(),
    }

    let result = std::panic::catch_unwind(|| {
        let load_config = || cli_utils::load_config_with_cli_error_handling(cli.config.as_deref(), cli.no_config);
        match &cli.command {
            Commands::Extract(args) => commands::extract::handle_extract(args, load_config()),
            Commands::Tree(args) => commands::tree::handle_tree(args, load_config()),
            Commands::Config(args) if args.defaults => {
                commands::config::handle_config(tentmark_lib::Config::default())
            }
            Commands::Config(_) => commands::config::handle_config(load_config()),
        }
    });
    if let Err(e) = result {
        eprintln!("[tentmark panic handler] Uncaught panic: {e:?}");
        exit::tool_error();
    }
}
