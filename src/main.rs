use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use chunkvault::{
    combine_markdown, get_context_window, process_content_with, read_ledger, track_usage,
    DirStore, SplitConfig, DEFAULT_MAX_TOKENS, DEFAULT_OVERLAP_TOKENS,
};

#[derive(Parser)]
#[command(name = "chunkvault", version, about = "Chunk text into token-bounded segments and track token usage")]
struct Cli {
    /// Output directory holding chunk files, metadata and the usage ledger
    #[arg(short, long, default_value = "chunks")]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Split a text file (or a markdown tree) into chunks
    Chunk {
        /// Input file, or a directory whose markdown files are combined first
        input: PathBuf,

        #[arg(long, default_value_t = DEFAULT_MAX_TOKENS)]
        max_tokens: usize,

        #[arg(long, default_value_t = DEFAULT_OVERLAP_TOKENS)]
        overlap_tokens: usize,
    },
    /// Print the chunks surrounding an index
    Window {
        index: i64,

        /// Chunks to include on each side of the index
        #[arg(short, long, default_value_t = 1)]
        radius: usize,
    },
    /// Record a token usage event in the ledger
    Usage { tokens: i64, action: String },
    /// Print the current usage ledger
    Ledger,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Chunk {
            input,
            max_tokens,
            overlap_tokens,
        } => {
            let content = if input.is_dir() {
                combine_markdown(&input)
                    .with_context(|| format!("Failed to collect markdown from {}", input.display()))?
            } else {
                fs::read_to_string(&input)
                    .with_context(|| format!("Failed to read {}", input.display()))?
            };

            let config = SplitConfig {
                max_tokens,
                overlap_tokens,
            };
            let metadata = process_content_with(&content, &cli.output, config)?;

            println!(
                "✓ Wrote {} chunks ({} tokens total) to {}",
                metadata.total_chunks,
                metadata.total_tokens,
                cli.output.display()
            );
            for summary in &metadata.chunks {
                println!(
                    "  chunk {}: {} tokens - {}",
                    summary.index, summary.token_count, summary.first_words
                );
            }
        }

        Command::Window { index, radius } => {
            let window = get_context_window(index, radius, &cli.output)?;
            println!(
                "chunks {}..={} (~{} tokens)\n",
                window.range.start, window.range.end, window.estimated_tokens
            );
            println!("{}", window.content);
        }

        Command::Usage { tokens, action } => {
            let ledger = track_usage(&cli.output, tokens, &action)?;
            println!(
                "✓ Recorded {} tokens for '{}' (ledger total: {})",
                tokens, action, ledger.total
            );
        }

        Command::Ledger => {
            let store = DirStore::open(&cli.output);
            let ledger = read_ledger(&store)?;
            println!("Total tokens: {}", ledger.total);
            for event in &ledger.history {
                println!("  {}  {:>8}  {}", event.timestamp, event.tokens, event.action);
            }
        }
    }

    Ok(())
}
