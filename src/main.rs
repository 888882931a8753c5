use anyhow::Result;
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use embedding_heatmap_demo::heatmap::HeatmapRenderer;
use embedding_heatmap_demo::pipeline::run_pipeline;
use embedding_heatmap_demo::text_input::read_input;

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Tokenizer/embedding heatmap demo (txt/pdf/docx or stdin)",
    long_about = None
)]
struct Args {
    /// Path to a text, PDF, or DOCX file. Reads stdin when omitted.
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Inline input text (takes precedence over --input)
    #[arg(short, long)]
    text: Option<String>,

    /// Embedding dimension
    #[arg(short, long, default_value_t = 8)]
    dim: usize,

    /// Re-run the pipeline for every stdin line; an empty line clears the output
    #[arg(long, default_value_t = false)]
    interactive: bool,
}

/// The two triggers the demo responds to. Both dispatch synchronously to
/// one full pipeline run; there is no queue and no partial update.
enum Trigger {
    RunRequested(String),
    InputCleared,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    assert!(args.dim > 0, "dim must be at least 1");

    let mut renderer = HeatmapRenderer::new(io::stdout());

    if args.interactive {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = line?;
            let trigger = if line.trim().is_empty() {
                Trigger::InputCleared
            } else {
                Trigger::RunRequested(line)
            };
            dispatch(trigger, args.dim, &mut renderer)?;
        }
        return Ok(());
    }

    let text = match args.text {
        Some(text) => text,
        None => read_input(args.input.as_deref())?,
    };
    dispatch(Trigger::RunRequested(text), args.dim, &mut renderer)
}

fn dispatch<W: Write>(
    trigger: Trigger,
    dim: usize,
    renderer: &mut HeatmapRenderer<W>,
) -> Result<()> {
    let text = match trigger {
        Trigger::RunRequested(text) => text,
        Trigger::InputCleared => String::new(),
    };
    let run = run_pipeline(&text, dim);
    renderer.render(&run)
}
