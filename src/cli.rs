// src/cli.rs
use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
};

use clap::Parser;

use crate::{
    client::{IndexClient, Outcome},
    config::options::ClientOptions,
    core::{HttpIndexService, IndexService},
    error::ClientError,
    progress::Progress,
};

#[derive(Parser, Debug, Clone)]
#[command(
    name = "word_indexer_cli",
    version,
    about = "Index a URL through the word-indexing service and look up word counts"
)]
pub struct Args {
    /// Page to index (passed to the service as-is)
    #[arg(short, long)]
    pub url: String,

    /// Word to look up; repeatable. Case-sensitive.
    #[arg(short, long = "word", value_name = "WORD")]
    pub words: Vec<String>,

    /// Also print the N most frequent words
    #[arg(long, value_name = "N")]
    pub top: Option<usize>,

    /// Read words from stdin, one per line, after indexing
    #[arg(short, long)]
    pub interactive: bool,

    /// Indexing service base URL (overrides config)
    #[arg(long, value_name = "BASE_URL")]
    pub service: Option<String>,

    /// Request timeout in seconds, 0 for none (overrides config)
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Config file (default: ./word_indexer.toml if present)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Args {
    /// Config file first, then flags on top.
    pub fn options(&self) -> Result<ClientOptions, ClientError> {
        let mut opts = ClientOptions::load(self.config.as_deref())?;
        if let Some(service) = &self.service {
            opts.service_url = service.clone();
        }
        if let Some(secs) = self.timeout {
            opts.timeout_secs = secs;
        }
        Ok(opts)
    }
}

pub fn run() -> Result<(), ClientError> {
    let args = Args::parse();
    let options = args.options()?;
    let client = IndexClient::new(HttpIndexService::new(&options)?);

    let stdin = io::stdin();
    let stdout = io::stdout();
    execute(&client, &args, stdin.lock(), stdout.lock())
}

/// Index `args.url`, then print `word<TAB>count` lines for the requested words,
/// the top list, and (interactive) every word read from `input`.
pub fn execute<S, R, W>(
    client: &IndexClient<S>,
    args: &Args,
    input: R,
    mut out: W,
) -> Result<(), ClientError>
where
    S: IndexService + 'static,
    R: BufRead,
    W: Write,
{
    match client.request_index(&args.url, Box::new(CliProgress)).wait() {
        Outcome::Applied { .. } => {}
        Outcome::Failed(e) => return Err(e),
        // Only one request is ever issued here
        Outcome::Superseded => return Ok(()),
    }

    for word in &args.words {
        writeln!(out, "{}\t{}", word, client.lookup_word(word))?;
    }

    if let Some(n) = args.top {
        for (word, count) in client.top_words(n) {
            writeln!(out, "{word}\t{count}")?;
        }
    }

    if args.interactive {
        for line in input.lines() {
            let line = line?;
            let word = line.trim_end_matches('\r');
            if word.is_empty() {
                continue;
            }
            writeln!(out, "{}\t{}", word, client.lookup_word(word))?;
            out.flush()?;
        }
    }

    out.flush()?;
    Ok(())
}

struct CliProgress;

impl Progress for CliProgress {
    fn begin(&mut self, url: &str) {
        eprintln!("Indexing {url} …");
    }
    fn finish(&mut self, outcome: &Outcome) {
        if let Outcome::Applied { words } = outcome {
            eprintln!("Indexed {words} distinct words");
        }
    }
}
