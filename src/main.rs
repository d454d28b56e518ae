use std::{path::PathBuf, time::Instant};

use anyhow::anyhow;
use clap::Parser;
use kaleido_lexer::{
    errors::errors::Error,
    lexer::{
        lexer::tokenize_buffer,
        tokens::{Token, TokenKind},
    },
    render_error,
    source::source::load_file,
};
use tracing::{error, info, metadata::LevelFilter};
use tracing_subscriber::{prelude::*, EnvFilter};

#[derive(Parser)]
#[clap(version, about)]
struct Args {
    /// Source file to tokenize.
    file: PathBuf,

    /// Only print the summary line, not every token.
    #[clap(short, long)]
    quiet: bool,
}

fn fallible_main() -> anyhow::Result<()> {
    let args = Args::parse();

    let start = Instant::now();
    let buffer = load_file(&args.file).map_err(|err| report(&err, None))?;

    info!("Loaded {} bytes in {:?}", buffer.len(), start.elapsed());

    let tokenize_start = Instant::now();
    let tokens = tokenize_buffer(&buffer).map_err(|err| report(&err, buffer.as_str()))?;

    info!("Tokenized in {:?}", tokenize_start.elapsed());

    if !args.quiet {
        for token in &tokens {
            println!("{}", token);
        }
    }
    println!("{}", summarize(&tokens));

    Ok(())
}

fn report(error: &Error, source: Option<&str>) -> anyhow::Error {
    anyhow!("{}", render_error(error, source).trim_end())
}

fn summarize(tokens: &[Token]) -> String {
    let (mut defs, mut externs, mut identifiers, mut numbers, mut other) = (0, 0, 0, 0, 0);

    for token in tokens {
        match token.kind {
            TokenKind::Eof => (),
            TokenKind::Def => defs += 1,
            TokenKind::Extern => externs += 1,
            TokenKind::Identifier(_) => identifiers += 1,
            TokenKind::Number(_) => numbers += 1,
            TokenKind::Char(_) => other += 1,
        }
    }

    format!(
        "{} tokens ({} def, {} extern, {} identifiers, {} numbers, {} other)",
        tokens.len(),
        defs,
        externs,
        identifiers,
        numbers,
        other
    )
}

fn main() {
    let subscriber = tracing_subscriber::registry()
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::DEBUG.into())
                .from_env_lossy(),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        );
    tracing::subscriber::set_global_default(subscriber)
        .expect("cannot set default tracing subscriber");

    info!("kaleido-lexer version {}", env!("CARGO_PKG_VERSION"));

    if let Err(err) = fallible_main() {
        error!("{err}");
    }
}
