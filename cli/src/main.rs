//! gdoc2md CLI - Google Docs JSON to Markdown converter

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;

use gdoc2md::{CleanupPreset, Gdoc2md, JsonFormat, RenderOptions};

#[derive(Parser)]
#[command(name = "gdoc2md")]
#[command(version)]
#[command(about = "Convert Google Docs API JSON to Markdown with front matter", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a document to Markdown
    #[command(alias = "md")]
    Markdown {
        /// Input document JSON (a `documents.get` response)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Omit the YAML front matter
        #[arg(long)]
        no_frontmatter: bool,

        /// Omit the cover entry from the front matter
        #[arg(long)]
        no_cover: bool,

        /// Body cleanup preset
        #[arg(long, value_enum)]
        cleanup: Option<CleanupLevel>,

        /// Extra front matter entry, repeatable
        #[arg(long = "meta", value_name = "KEY=VALUE", value_parser = parse_meta)]
        meta: Vec<(String, String)>,
    },

    /// Convert a document to intermediate JSON
    Json {
        /// Input document JSON
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Show document information
    Info {
        /// Input document JSON
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Convert several documents to `<stem>.md` files
    Convert {
        /// Input document JSON files
        #[arg(value_name = "FILE", required = true)]
        inputs: Vec<PathBuf>,

        /// Output directory
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        /// Body cleanup preset
        #[arg(long, value_enum)]
        cleanup: Option<CleanupLevel>,
    },

    /// Show version information
    Version,
}

#[derive(Copy, Clone, PartialEq, Eq, Debug, ValueEnum)]
enum CleanupLevel {
    /// Unicode normalization only
    Minimal,
    /// Normalization, trailing whitespace and blank line capping
    Standard,
}

impl From<CleanupLevel> for CleanupPreset {
    fn from(level: CleanupLevel) -> Self {
        match level {
            CleanupLevel::Minimal => CleanupPreset::Minimal,
            CleanupLevel::Standard => CleanupPreset::Standard,
        }
    }
}

/// Parse a `key=value` pair. The value may itself contain `=`.
fn parse_meta(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{}'", s))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("empty key in '{}'", s));
    }
    Ok((key.to_string(), value.to_string()))
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Markdown {
            input,
            output,
            no_frontmatter,
            no_cover,
            cleanup,
            meta,
        } => {
            let options = build_options(!no_frontmatter, !no_cover, cleanup, meta);
            cmd_markdown(&input, output.as_deref(), &options)
        }
        Commands::Json {
            input,
            output,
            compact,
        } => cmd_json(&input, output.as_deref(), compact),
        Commands::Info { input } => cmd_info(&input),
        Commands::Convert {
            inputs,
            output,
            cleanup,
        } => cmd_convert(&inputs, output.as_deref(), cleanup),
        Commands::Version => {
            cmd_version();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn build_options(
    frontmatter: bool,
    cover: bool,
    cleanup: Option<CleanupLevel>,
    meta: Vec<(String, String)>,
) -> RenderOptions {
    let mut options = RenderOptions::new()
        .with_frontmatter(frontmatter)
        .with_cover(cover);

    if let Some(level) = cleanup {
        options = options.with_cleanup_preset(level.into());
    }
    for (key, value) in meta {
        options = options.with_metadata(key, value);
    }
    options
}

fn cmd_markdown(
    input: &Path,
    output: Option<&Path>,
    options: &RenderOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = gdoc2md::parse_file(input)?;
    let markdown = gdoc2md::render::to_markdown(&doc, options)?;

    if let Some(path) = output {
        fs::write(path, &markdown)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        print!("{}", markdown);
    }

    Ok(())
}

fn cmd_json(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let json = gdoc2md::to_json(input, format)?;

    if let Some(path) = output {
        fs::write(path, &json)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", json);
    }

    Ok(())
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let result = Gdoc2md::new().parse(input)?;
    let doc = &result.document;

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    if let Some(ref title) = doc.title {
        println!("{}: {}", "Title".bold(), title);
    }
    if let Some(ref id) = doc.document_id {
        println!("{}: {}", "Document ID".bold(), id);
    }
    match result.cover() {
        Some(cover) => println!("{}: {}", "Cover".bold(), cover.image),
        None => println!("{}: {}", "Cover".bold(), "none".dimmed()),
    }
    println!("{}: {}", "List definitions".bold(), doc.lists.len());
    println!("{}: {}", "Inline objects".bold(), doc.inline_objects.len());

    let stats = result.stats();

    println!();
    println!("{}", "Content Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "Headings".bold(), stats.heading_count);
    println!("{}: {}", "Paragraphs".bold(), stats.paragraph_count);
    println!("{}: {}", "Quotes".bold(), stats.quote_count);
    println!(
        "{}: {} ({} items)",
        "Lists".bold(),
        stats.list_count,
        stats.list_item_count
    );
    println!("{}: {}", "Tables".bold(), stats.table_count);
    println!("{}: {}", "Images".bold(), stats.image_count);
    println!("{}: {}", "Words".bold(), stats.word_count);

    Ok(())
}

fn cmd_convert(
    inputs: &[PathBuf],
    output: Option<&Path>,
    cleanup: Option<CleanupLevel>,
) -> Result<(), Box<dyn std::error::Error>> {
    let output_dir = output
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."));
    fs::create_dir_all(&output_dir)?;

    let options = build_options(true, true, cleanup, Vec::new());

    let pb = ProgressBar::new(inputs.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );

    let results: Vec<Result<PathBuf, String>> = inputs
        .par_iter()
        .map(|input| {
            pb.set_message(input.display().to_string());
            let target = output_path(input, &output_dir);
            let result = convert_one(input, &target, &options)
                .map(|()| target)
                .map_err(|e| {
                    log::warn!("{}: {}", input.display(), e);
                    format!("{} {}: {}", "Failed".red(), input.display(), e)
                });
            pb.inc(1);
            result
        })
        .collect();

    let mut written = Vec::with_capacity(inputs.len());
    let mut failed = 0usize;
    for result in results {
        match result {
            Ok(path) => written.push(path),
            Err(message) => {
                pb.println(message);
                failed += 1;
            }
        }
    }

    pb.finish_with_message("Done!");

    println!("\n{}", "Output files:".green().bold());
    for (i, path) in written.iter().enumerate() {
        let branch = if i + 1 == written.len() {
            "└─"
        } else {
            "├─"
        };
        println!("  {} {}", branch.dimmed(), path.display());
    }

    if failed > 0 {
        return Err(format!("{} of {} documents failed", failed, inputs.len()).into());
    }
    Ok(())
}

fn convert_one(
    input: &Path,
    target: &Path,
    options: &RenderOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = gdoc2md::parse_file(input)?;
    let markdown = gdoc2md::render::to_markdown(&doc, options)?;
    fs::write(target, markdown)?;
    Ok(())
}

fn output_path(input: &Path, output_dir: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "document".to_string());
    output_dir.join(format!("{}.md", stem))
}

fn cmd_version() {
    println!("{} {}", "gdoc2md".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Google Docs JSON to Markdown converter");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_meta() {
        assert_eq!(
            parse_meta("layout=post").unwrap(),
            ("layout".to_string(), "post".to_string())
        );
        assert_eq!(
            parse_meta("query=a=b").unwrap(),
            ("query".to_string(), "a=b".to_string())
        );
        assert!(parse_meta("novalue").is_err());
        assert!(parse_meta("=x").is_err());
    }

    #[test]
    fn test_output_path() {
        let path = output_path(Path::new("in/report.json"), Path::new("out"));
        assert_eq!(path, PathBuf::from("out/report.md"));
    }

    #[test]
    fn test_build_options() {
        let options = build_options(
            false,
            true,
            Some(CleanupLevel::Minimal),
            vec![("layout".to_string(), "post".to_string())],
        );
        assert!(!options.include_frontmatter);
        assert!(options.include_cover);
        assert!(options.cleanup.is_some());
        assert_eq!(options.extra_metadata.len(), 1);
    }

    #[test]
    fn test_convert_one_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("doc.json");
        fs::write(
            &input,
            r#"{"title":"T","body":{"content":[{"paragraph":{
                "paragraphStyle":{"namedStyleType":"HEADING_1"},
                "elements":[{"textRun":{"content":"T\n","textStyle":{}}}]}}]}}"#,
        )
        .unwrap();

        let target = output_path(&input, dir.path());
        convert_one(&input, &target, &RenderOptions::default()).unwrap();
        assert_eq!(
            fs::read_to_string(target).unwrap(),
            "---\ntitle: T\n---\n\n# T\n"
        );
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
