use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

#[derive(Debug, Parser)]
#[command(
    name = "docquery",
    about = "Answer questions from a folder of text files"
)]
pub struct Cli {
    /// Corpus directory (defaults to $DOCQUERY_CORPUS, then ./corpus)
    #[arg(long, global = true)]
    pub corpus: Option<PathBuf>,

    /// Increase log verbosity (can be repeated: -v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log warnings and errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Read queries from stdin and print the best sentence for each (default)
    Ask(AskArgs),
    /// Answer a single query
    Query(QueryArgs),
    /// Show corpus statistics
    Status(StatusArgs),
    /// Generate shell completions
    #[command(hide = true)]
    Completions(CompletionsArgs),
}

// -- Ask --

#[derive(Debug, Default, Parser)]
pub struct AskArgs {
    /// Print each answer as one line of JSON
    #[arg(long)]
    pub json: bool,
}

// -- Query --

#[derive(Debug, Parser)]
pub struct QueryArgs {
    /// The question or keywords
    pub query: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Also show query terms and every document's score
    #[arg(long)]
    pub explain: bool,
}

// -- Status --

#[derive(Debug, Parser)]
pub struct StatusArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

// -- Completions --

#[derive(Debug, Parser)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsArgs {
    /// Generate shell completions and print to stdout.
    pub fn generate(&self) {
        let mut cmd = Cli::command();
        clap_complete::generate(
            self.shell,
            &mut cmd,
            "docquery",
            &mut std::io::stdout(),
        );
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn no_subcommand_means_ask() {
        let cli = Cli::parse_from(["docquery"]);
        assert!(cli.command.is_none());
        assert!(cli.corpus.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn parse_query_with_flags() {
        let cli = Cli::parse_from([
            "docquery",
            "--corpus",
            "docs",
            "query",
            "where is the cat",
            "--explain",
        ]);
        assert_eq!(cli.corpus, Some(PathBuf::from("docs")));
        match cli.command {
            Some(Command::Query(args)) => {
                assert_eq!(args.query, "where is the cat");
                assert!(args.explain);
                assert!(!args.json);
            }
            _ => panic!("expected query command"),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from(["docquery", "status", "-vv", "--json"]);
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Some(Command::Status(args)) => assert!(args.json),
            _ => panic!("expected status command"),
        }
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["docquery", "-q", "-v"]).is_err());
    }

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }
}
