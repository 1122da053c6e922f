use std::{
    io::{self, BufRead, IsTerminal, Write},
    process::ExitCode,
};

use clap::Parser;
use docquery::{
    CorpusDir,
    QueryEngine,
    error,
    search::{self, format_human, format_json},
};
use tracing_subscriber::EnvFilter;

mod cli;

use cli::{AskArgs, Cli, Command, QueryArgs};

fn init_tracing(verbose: u8, quiet: bool) {
    let filter = if let Ok(env) = std::env::var("DOCQUERY_LOG") {
        EnvFilter::new(env)
    } else if quiet {
        EnvFilter::new("warn")
    } else {
        match verbose {
            0 => EnvFilter::new("info"),
            1 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> error::Result<()> {
    if let Some(Command::Completions(args)) = &cli.command {
        args.generate();
        return Ok(());
    }

    init_tracing(cli.verbose, cli.quiet);

    let corpus_dir = CorpusDir::resolve(cli.corpus.as_deref())?;
    let engine = QueryEngine::load(corpus_dir.root())?;

    match cli.command {
        None => cmd_ask(&engine, &AskArgs::default())?,
        Some(Command::Ask(args)) => cmd_ask(&engine, &args)?,
        Some(Command::Query(args)) => cmd_query(&engine, &args)?,
        Some(Command::Status(args)) => {
            cmd_status(&engine, &corpus_dir, args.json)?;
        }
        Some(Command::Completions(_)) => {}
    }

    Ok(())
}

/// Answer one query per input line until stdin is closed.
///
/// A query that fails, or a line that is not valid UTF-8, is reported on
/// stderr and the loop carries on.
fn cmd_ask(engine: &QueryEngine, args: &AskArgs) -> error::Result<()> {
    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    let mut input = stdin.lock();
    let mut stdout = io::stdout().lock();
    let mut line = String::new();

    loop {
        if interactive {
            write!(stdout, ">>> ")?;
            stdout.flush()?;
        }

        line.clear();
        match input.read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            // The offending line has been consumed; move on to the next one.
            Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                eprintln!("error: {e}");
                continue;
            }
            Err(e) => return Err(e.into()),
        }

        match engine.answer(line.trim()) {
            Ok(answer) => {
                let rendered = if args.json {
                    format_json(&answer)?
                } else {
                    format_human(&answer)
                };
                writeln!(stdout, "{rendered}")?;
            }
            Err(e) => eprintln!("error: {e}"),
        }
    }

    Ok(())
}

fn cmd_query(engine: &QueryEngine, args: &QueryArgs) -> error::Result<()> {
    if args.explain {
        let explanation = engine.explain(&args.query)?;
        if args.json {
            println!("{}", format_json(&explanation)?);
        } else {
            println!("{}", search::format_explain(&explanation));
        }
    } else {
        let answer = engine.answer(&args.query)?;
        if args.json {
            println!("{}", format_json(&answer)?);
        } else {
            println!("{}", format_human(&answer));
        }
    }
    Ok(())
}

fn cmd_status(
    engine: &QueryEngine,
    corpus_dir: &CorpusDir,
    json: bool,
) -> error::Result<()> {
    let status = engine.status();

    if json {
        let value = serde_json::json!({
            "corpus": corpus_dir.root().display().to_string(),
            "documents": status.documents,
            "vocabulary": status.vocabulary,
        });
        println!("{value}");
    } else {
        println!("Corpus directory: {}", corpus_dir.root().display());
        println!("Documents: {}", status.documents);
        println!("Vocabulary: {} terms", status.vocabulary);
    }
    Ok(())
}
