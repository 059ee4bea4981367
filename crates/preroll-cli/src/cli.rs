//! Command-line definition

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use preroll_client::{GenerationParams, GenerationType};
use preroll_document::BudgetTier;
use std::path::PathBuf;

/// Build the `preroll` command
#[must_use]
pub fn command() -> Command {
    Command::new("preroll")
        .version(crate::VERSION)
        .about("Turn generation replies into navigable production documents")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::Count)
                .help("Log more (-v debug, -vv trace); RUST_LOG overrides"),
        )
        .arg(
            Arg::new("log-json")
                .long("log-json")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Write logs to stderr as JSON"),
        )
        .subcommand(
            Command::new("parse")
                .about("Print a reply as a formatted document")
                .arg(file_arg())
                .arg(json_arg()),
        )
        .subcommand(
            Command::new("section")
                .about("Print one section of a reply")
                .arg(file_arg())
                .arg(
                    Arg::new("id")
                        .long("id")
                        .required(true)
                        .help("Section id, e.g. key-actions-3"),
                ),
        )
        .subcommand(
            Command::new("budget")
                .about("Print the budget tiers of a reply")
                .arg(file_arg())
                .arg(
                    Arg::new("tier")
                        .long("tier")
                        .value_parser(value_parser!(BudgetTier))
                        .help("Only this tier: low, medium or high"),
                ),
        )
        .subcommand(
            Command::new("scenes")
                .about("Print the scene overview of a reply")
                .arg(file_arg()),
        )
        .subcommand(
            Command::new("characters")
                .about("Print the characters of a reply")
                .arg(file_arg()),
        )
        .subcommand(
            Command::new("export")
                .about("Write report, section and budget-tier text files")
                .arg(file_arg())
                .arg(
                    Arg::new("out")
                        .long("out")
                        .short('o')
                        .default_value(".")
                        .value_parser(value_parser!(PathBuf))
                        .help("Directory to write into"),
                ),
        )
        .subcommand(with_generation_args(
            Command::new("prompt").about("Print the prompt that would be sent"),
        ))
        .subcommand(with_generation_args(
            Command::new("generate")
                .about("Call the generation endpoint and print the document")
                .arg(json_arg())
                .arg(
                    Arg::new("api-base")
                        .long("api-base")
                        .help("Service base URL (default: PREROLL_API_BASE or http://127.0.0.1:8000)"),
                )
                .arg(
                    Arg::new("timeout")
                        .long("timeout")
                        .value_parser(value_parser!(u64))
                        .help("Request timeout in seconds"),
                ),
        ))
}

fn file_arg() -> Arg {
    Arg::new("file")
        .value_parser(value_parser!(PathBuf))
        .help("Reply file, or - for stdin (default: stdin)")
}

fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Output the canonical document as JSON")
}

fn with_generation_args(command: Command) -> Command {
    command
        .arg(
            Arg::new("prompt")
                .long("prompt")
                .short('p')
                .required(true)
                .help("Project brief"),
        )
        .arg(
            Arg::new("type")
                .long("type")
                .short('t')
                .default_value("Scene Breakdown")
                .value_parser(value_parser!(GenerationType))
                .help("Scene Breakdown, Sound Design, Budget Plan, Visual Direction or Production Notes"),
        )
        .arg(Arg::new("genre").long("genre").help("Genre"))
        .arg(Arg::new("budget-tier").long("budget-tier").help("Budget tier"))
        .arg(Arg::new("runtime").long("runtime").help("Runtime estimate"))
        .arg(Arg::new("locations").long("locations").help("Location count"))
        .arg(Arg::new("complexity").long("complexity").help("Scene complexity"))
        .arg(
            Arg::new("max-prompt-chars")
                .long("max-prompt-chars")
                .value_parser(value_parser!(usize))
                .help("Composed prompt limit (default: PREROLL_MAX_PROMPT_CHARS or 3000)"),
        )
}

/// Reply file argument, `None` for stdin
#[must_use]
pub fn reply_path(args: &ArgMatches) -> Option<PathBuf> {
    args.get_one::<PathBuf>("file").cloned()
}

/// Production parameters from generation arguments
#[must_use]
pub fn generation_params(args: &ArgMatches) -> GenerationParams {
    let text = |name: &str| args.get_one::<String>(name).cloned();
    GenerationParams {
        genre: text("genre"),
        budget_tier: text("budget-tier"),
        runtime_estimate: text("runtime"),
        location_count: text("locations"),
        scene_complexity: text("complexity"),
        generation_type: args
            .get_one::<GenerationType>("type")
            .copied()
            .unwrap_or_default(),
    }
}
