//! packinstr render binary

use clap::{Parser, Subcommand};
use packinstr::exit_codes::{EXIT_INVALID_ARGS, EXIT_PANIC, EXIT_SUCCESS};
use packinstr::{CollInp, OutputFormat, RenderOptions, Result, render_instruction};
use std::io::{self, Write};
use std::{env, panic, process};

const VERSION: &str = packinstr::version::VERSION;

#[derive(Parser, Debug)]
#[command(version = VERSION, about = "Render collection packing instructions")]
struct Args {
    /// Output format (xml, json)
    #[arg(long, value_parser = parse_format)]
    format: Option<OutputFormat>,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,

    /// Log level (trace, debug, info, warn, error, json:<level>)
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Recursively delete a collection, moving contents to the trash
    RmRecursive {
        /// Absolute collection path
        path: String,
    },
    /// Recursively delete a collection, bypassing the trash
    RmForce {
        /// Absolute collection path
        path: String,
    },
    /// Unregister a collection registered in place
    Unregister {
        /// Absolute collection path
        path: String,
        #[arg(long)]
        force: bool,
        #[arg(long)]
        recursive: bool,
    },
    /// Collection operation with explicit flags
    Coll {
        /// Absolute collection path
        path: String,
        #[arg(long)]
        recursive: bool,
        #[arg(long)]
        force: bool,
    },
}

impl Command {
    fn instruction(&self) -> Result<CollInp> {
        match self {
            Command::RmRecursive { path } => CollInp::recursive_delete_no_force(path),
            Command::RmForce { path } => CollInp::recursive_delete_with_force(path),
            Command::Unregister {
                path,
                force,
                recursive,
            } => CollInp::unregister_collection(path, *force, *recursive),
            Command::Coll {
                path,
                recursive,
                force: false,
            } => CollInp::instance(path, *recursive),
            Command::Coll {
                path,
                recursive,
                force,
            } => CollInp::instance_with_force(path, *recursive, *force),
        }
    }
}

impl Args {
    /// Command-line flags override values taken from the environment
    fn render_options(&self, env_options: RenderOptions) -> RenderOptions {
        RenderOptions {
            format: self.format.unwrap_or(env_options.format),
            pretty: self.pretty || env_options.pretty,
        }
    }
}

fn parse_format(s: &str) -> std::result::Result<OutputFormat, String> {
    OutputFormat::parse(s).ok_or_else(|| format!("unknown format '{s}', expected xml or json"))
}

fn main() {
    // Set up panic handler to return specific exit code
    panic::set_hook(Box::new(|panic_info| {
        eprintln!("PANIC: {}", panic_info);
        process::exit(EXIT_PANIC);
    }));

    let result = panic::catch_unwind(run);

    match result {
        Ok(exit_code) => process::exit(exit_code),
        Err(_) => {
            eprintln!("Fatal: Unhandled panic in packinstr-render");
            process::exit(EXIT_PANIC);
        }
    }
}

fn run() -> i32 {
    // Handle --version before clap
    if env::args().nth(1).as_deref() == Some("--version") {
        println!("packinstr-render {}", packinstr::version::full_version());
        return EXIT_SUCCESS;
    }

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                EXIT_INVALID_ARGS
            } else {
                EXIT_SUCCESS
            };
        }
    };

    if let Some(ref level) = args.log_level {
        packinstr::logger::JsonLogger::init_with_level(level);
    } else {
        packinstr::logger::JsonLogger::init();
    }

    let options = args.render_options(RenderOptions::from_env());

    match render(&args.command, &options) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Render error: {e}");
            e.exit_code()
        }
    }
}

fn render(command: &Command, options: &RenderOptions) -> Result<()> {
    let instruction = command.instruction()?;
    let rendered = render_instruction(&instruction, options)?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use packinstr::PackError;

    const PATH: &str = "/zone/home/alice/data";

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("packinstr-render").chain(args.iter().copied()))
            .unwrap()
    }

    fn instruction(args: &[&str]) -> CollInp {
        parse(args).command.instruction().unwrap()
    }

    #[test]
    fn test_rm_subcommands_map_to_delete_factories() {
        assert_eq!(
            instruction(&["rm-recursive", PATH]),
            CollInp::recursive_delete_no_force(PATH).unwrap()
        );
        assert_eq!(
            instruction(&["rm-force", PATH]),
            CollInp::recursive_delete_with_force(PATH).unwrap()
        );
    }

    #[test]
    fn test_unregister_subcommand_passes_flags() {
        assert_eq!(
            instruction(&["unregister", PATH]),
            CollInp::unregister_collection(PATH, false, false).unwrap()
        );
        assert_eq!(
            instruction(&["unregister", PATH, "--force"]),
            CollInp::unregister_collection(PATH, true, false).unwrap()
        );
        assert_eq!(
            instruction(&["unregister", PATH, "--recursive", "--force"]),
            CollInp::unregister_collection(PATH, true, true).unwrap()
        );
    }

    #[test]
    fn test_coll_subcommand_picks_factory_by_force() {
        assert_eq!(
            instruction(&["coll", PATH]),
            CollInp::instance(PATH, false).unwrap()
        );
        assert_eq!(
            instruction(&["coll", PATH, "--recursive"]),
            CollInp::instance(PATH, true).unwrap()
        );
        assert_eq!(
            instruction(&["coll", PATH, "--force"]),
            CollInp::instance_with_force(PATH, false, true).unwrap()
        );
        assert_eq!(
            instruction(&["coll", PATH, "--recursive", "--force"]),
            CollInp::instance_with_force(PATH, true, true).unwrap()
        );
    }

    #[test]
    fn test_empty_path_is_a_validation_error() {
        let err = parse(&["rm-force", ""]).command.instruction().unwrap_err();
        assert!(matches!(err, PackError::Validation(_)));
        assert_eq!(err.exit_code(), packinstr::exit_codes::EXIT_VALIDATION_ERROR);
    }

    #[test]
    fn test_cli_flags_override_environment() {
        let from_env = RenderOptions {
            format: OutputFormat::Json,
            pretty: true,
        };

        let options = parse(&["--format", "xml", "coll", PATH]).render_options(from_env);
        assert_eq!(options.format, OutputFormat::Xml);
        // --pretty can only switch pretty printing on
        assert!(options.pretty);

        let options = parse(&["--pretty", "--format", "json", "rm-force", PATH])
            .render_options(RenderOptions::default());
        assert_eq!(options.format, OutputFormat::Json);
        assert!(options.pretty);
    }

    #[test]
    fn test_environment_applies_without_flags() {
        let from_env = RenderOptions {
            format: OutputFormat::Json,
            pretty: true,
        };
        let options = parse(&["rm-recursive", PATH]).render_options(from_env);
        assert_eq!(options.format, OutputFormat::Json);
        assert!(options.pretty);

        let options = parse(&["rm-recursive", PATH]).render_options(RenderOptions::default());
        assert_eq!(options.format, OutputFormat::Xml);
        assert!(!options.pretty);
    }

    #[test]
    fn test_unknown_format_flag_is_rejected() {
        let result = Args::try_parse_from(["packinstr-render", "--format", "yaml", "coll", PATH]);
        assert!(result.is_err());
    }
}
