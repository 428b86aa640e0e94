mod diagnostics;
mod error;
mod logging;

use clap::Parser;
use error::{CliError, CliResult};
use lexer::token::Token;
use rewrite::DeclarationOracle;
use std::fs;
use std::path::PathBuf;
use std::process;
use tracing::{debug, info};

/// Rewrites convention calls (`a.equals(b)`, `a.plus(b)`, `a.compareTo(b) < 0`)
/// into binary operators
#[derive(Parser, Debug)]
#[command(name = "convop", version)]
struct Cli {
    /// Source file to analyze
    file: PathBuf,

    /// Print the source with every rewrite applied
    #[arg(long)]
    apply: bool,

    /// Write the rewritten program back to FILE (requires --apply)
    #[arg(long, requires = "apply")]
    in_place: bool,

    /// Exit with status 1 if any rewrite is available
    #[arg(long, conflicts_with = "apply")]
    check: bool,

    /// More logging: -v info, -vv debug, -vvv trace
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(&cli) {
        Ok(code) => process::exit(code),
        Err(err) => {
            eprintln!("error: {}", err);
            process::exit(err.exit_code());
        }
    }
}

fn run(cli: &Cli) -> CliResult<i32> {
    let source = fs::read_to_string(&cli.file).map_err(|source| CliError::Io {
        path: cli.file.clone(),
        source,
    })?;
    let filename = cli.file.display().to_string();

    let tokens = lexer::lex_spanned(&source);
    if parser::error::check_and_report_invalid_tokens(&filename, &source, &tokens)? {
        let count = tokens.iter().filter(|(token, _)| *token == Token::Error).count();
        return Err(CliError::Lex { file: filename, count });
    }

    let program = match parser::parse_tokens(source.len(), tokens) {
        Ok(program) => program,
        Err(errors) => {
            parser::error::report_errors(&filename, &source, &errors)?;
            return Err(CliError::Parse {
                file: filename,
                count: errors.len(),
            });
        }
    };
    debug!(file = %filename, statements = program.statements.len(), "parsed");

    let oracle = DeclarationOracle::from_program(&program);

    if cli.apply {
        let (output, applied) =
            rewrite::rewrite_source(&source, program, &oracle).map_err(|source| CliError::Reparse {
                file: filename.clone(),
                source,
            })?;

        if cli.in_place {
            if applied.is_empty() {
                info!(file = %filename, "nothing to rewrite");
            } else {
                fs::write(&cli.file, output).map_err(|source| CliError::Io {
                    path: cli.file.clone(),
                    source,
                })?;
            }
            eprintln!("{}: {} rewrite(s) applied", filename, applied.len());
        } else {
            print!("{}", output);
        }
        return Ok(0);
    }

    let rewrites = rewrite::find_rewrites(&program, &oracle);
    diagnostics::report_rewrites(&filename, &source, &rewrites)?;

    if cli.check && !rewrites.is_empty() {
        eprintln!("{}: {} rewrite(s) available", filename, rewrites.len());
        return Ok(1);
    }
    Ok(0)
}

#[cfg(test)]
mod tests;
