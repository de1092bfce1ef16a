use clap::Parser;
use readshelf::{config::Config, pipeline};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "readshelf")]
#[command(about = "Static HTML gallery generator for plain-text reading lists")]
#[command(long_about = "\
Static HTML gallery generator for plain-text reading lists

The manifest is plain text: blank-line-separated blocks, one per entry.
The first line is the title; the rest are classified by keyword:

  Attention Is All You Need     # title
  paper                         # kind: paper | book | web | video
  https://arxiv.org/pdf/1706.03762
  read                          # optional read marker
  transformers, nlp             # comma-separated tags

  SICP
  book
  local                         # reference is a path next to the manifest
  books/sicp.pdf

Each entry gets a thumbnail: video entries fetch the platform thumbnail,
web entries are screenshotted in headless Chrome, papers and books render
page one of their PDF. Thumbnails are cached by reference hash; delete a
cached file to regenerate it. Entries whose thumbnail fails are skipped,
never fatal.")]
#[command(version)]
struct Cli {
    /// Reading-list manifest file
    #[arg(default_value = "readshelf.txt")]
    manifest: PathBuf,

    /// Output HTML file, overwritten each run
    #[arg(long, default_value = "index.html")]
    output: PathBuf,

    /// Thumbnail cache directory
    #[arg(long, default_value = "thumbnails")]
    thumb_dir: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = Config::new(cli.manifest, cli.output, cli.thumb_dir);

    let summary = pipeline::run(&config)?;

    println!(
        "\n✓ saved → {}  ({}/{} entries, {})",
        config.output_path.display(),
        summary.rendered,
        summary.parsed,
        summary.stats
    );
    Ok(())
}
