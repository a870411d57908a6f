use color_eyre::eyre::{Context, Result};
use log::{LevelFilter, info};
use sweden::{Outcome, cli::Cli, collect_documents};
use sweden_commonmark::MarkdownProcessor;
use sweden_config::Config;

fn main() -> Result<()> {
  color_eyre::install()?;

  // Parse command line arguments
  let cli = Cli::parse_args();

  // Initialize logging first so we can log while loading configuration
  env_logger::Builder::new()
    .filter_level(if cli.verbose {
      LevelFilter::Debug
    } else {
      LevelFilter::Info
    })
    .write_style(env_logger::WriteStyle::Always)
    .init();

  let config = Config::from_file(&cli.config).wrap_err_with(|| {
    format!("Failed to load configuration: {}", cli.config.display())
  })?;

  convert_documents(&cli, &config)
}

/// Convert every document found under the requested paths.
///
/// The first fatal error aborts the run; documents that are skipped are only
/// counted.
fn convert_documents(cli: &Cli, config: &Config) -> Result<()> {
  let processor = MarkdownProcessor::new(cli.markdown_options());
  let mut written = 0_usize;
  let mut skipped = 0_usize;

  for target in &cli.paths {
    let documents = collect_documents(
      target,
      &cli.category,
      &cli.doc_version,
      cli.output_dir.as_deref(),
    )
    .wrap_err_with(|| format!("Failed to collect documents: {}", target.display()))?;

    for document in &documents {
      let outcome = document.generate(config, &processor).wrap_err_with(|| {
        format!("Failed to convert {}", document.source_path.display())
      })?;

      match outcome {
        Outcome::Written(path) => {
          info!("Wrote {}", path.display());
          written += 1;
        },
        Outcome::Skipped => skipped += 1,
      }
    }
  }

  info!("Converted {written} document(s), skipped {skipped}");
  Ok(())
}
