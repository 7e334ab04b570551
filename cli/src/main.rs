//! pagemd CLI - shapes extracted page models into Markdown

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;

use pagemd::{Conversion, ConversionStats, Converter, OcrMode, Options};

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

#[derive(Parser)]
#[command(name = "pagemd")]
#[command(version)]
#[command(about = "Shape extracted page text into clean Markdown", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    /// Input page-model JSON files
    #[arg(value_name = "FILE")]
    inputs: Vec<PathBuf>,

    /// Output file, directory for several inputs, or "-" for stdout
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    #[command(flatten)]
    shaping: ShapingArgs,

    #[command(flatten)]
    verbosity: Verbosity,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert page-model JSON to Markdown
    #[command(alias = "md")]
    Convert {
        /// Input page-model JSON files
        #[arg(value_name = "FILE", required = true)]
        inputs: Vec<PathBuf>,

        /// Output file, directory for several inputs, or "-" for stdout
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,

        /// Print conversion statistics
        #[arg(long)]
        stats: bool,

        /// Hide progress bars
        #[arg(long)]
        no_progress: bool,

        #[command(flatten)]
        shaping: ShapingArgs,

        #[command(flatten)]
        verbosity: Verbosity,
    },

    /// Show document information and conversion statistics
    Info {
        /// Input page-model JSON file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        #[command(flatten)]
        shaping: ShapingArgs,
    },

    /// Print the effective options as JSON
    Options {
        #[command(flatten)]
        shaping: ShapingArgs,
    },

    /// Show version information
    Version,
}

#[derive(Args, Clone, Default)]
struct Verbosity {
    /// Only print errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Print debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Verbosity {
    fn filter(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose {
            "debug"
        } else {
            "warn"
        }
    }
}

#[derive(Args, Clone, Default)]
struct ShapingArgs {
    /// JSON options file; flags below override it
    #[arg(short, long, value_name = "FILE", env = "PAGEMD_CONFIG")]
    config: Option<PathBuf>,

    /// OCR mode recorded for the extractor
    #[arg(long, value_enum)]
    ocr: Option<OcrLevel>,

    /// Insert a horizontal rule between pages
    #[arg(long)]
    page_breaks: bool,

    /// Also join hyphen breaks before capitalized words
    #[arg(long)]
    aggressive_hyphen: bool,

    /// Do not promote capitalized blocks to headings
    #[arg(long)]
    no_caps_headings: bool,

    /// Keep running headers and footers
    #[arg(long)]
    keep_headers: bool,

    /// Rewrite fenced code like prose
    #[arg(long)]
    no_code_protection: bool,

    /// Do not merge orphan lines into paragraphs
    #[arg(long)]
    no_defragment: bool,

    /// Minimum block/body size ratio for headings
    #[arg(long, value_name = "RATIO")]
    heading_ratio: Option<f32>,

    /// Maximum length of an orphan line
    #[arg(long, value_name = "CHARS")]
    orphan_max_len: Option<usize>,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum OcrLevel {
    /// No OCR
    Off,
    /// OCR pages without a text layer
    Auto,
    /// Tesseract on every page
    Tesseract,
    /// Run ocrmypdf before extraction
    Ocrmypdf,
}

impl From<OcrLevel> for OcrMode {
    fn from(level: OcrLevel) -> Self {
        match level {
            OcrLevel::Off => OcrMode::Off,
            OcrLevel::Auto => OcrMode::Auto,
            OcrLevel::Tesseract => OcrMode::Tesseract,
            OcrLevel::Ocrmypdf => OcrMode::Ocrmypdf,
        }
    }
}

impl ShapingArgs {
    /// Build options from the config file, then apply the flags.
    fn to_options(&self) -> CliResult<Options> {
        let mut options = match &self.config {
            Some(path) => Options::from_json(&fs::read_to_string(path)?)?,
            None => Options::default(),
        };

        if let Some(level) = self.ocr {
            options = options.with_ocr_mode(level.into());
        }
        if self.page_breaks {
            options = options.with_page_breaks(true);
        }
        if self.aggressive_hyphen {
            options = options.with_aggressive_hyphen(true);
        }
        if self.no_caps_headings {
            options = options.with_caps_headings(false);
        }
        if self.keep_headers {
            options = options.with_header_footer_removal(false);
        }
        if self.no_code_protection {
            options = options.with_code_protection(false);
        }
        if self.no_defragment {
            options = options.with_defragment(false);
        }
        if let Some(ratio) = self.heading_ratio {
            options = options.with_heading_ratio(ratio);
        }
        if let Some(len) = self.orphan_max_len {
            options = options.with_orphan_max_len(len);
        }

        options.validate()?;
        Ok(options)
    }
}

fn main() {
    let cli = Cli::parse();

    let verbosity = match &cli.command {
        Some(Commands::Convert { verbosity, .. }) => verbosity.clone(),
        _ => cli.verbosity.clone(),
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(verbosity.filter()))
        .init();

    let result = match cli.command {
        Some(Commands::Convert {
            inputs,
            output,
            stats,
            no_progress,
            shaping,
            verbosity,
        }) => cmd_convert(
            &inputs,
            output.as_deref(),
            &shaping,
            stats,
            !(no_progress || verbosity.quiet),
        ),
        Some(Commands::Info { input, shaping }) => cmd_info(&input, &shaping),
        Some(Commands::Options { shaping }) => cmd_options(&shaping),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: convert if inputs are provided
            if cli.inputs.is_empty() {
                println!("{}", "Usage: pagemd <FILE>... [-o OUTPUT]".yellow());
                println!("       pagemd --help for more information");
                Ok(())
            } else {
                cmd_convert(
                    &cli.inputs,
                    cli.output.as_deref(),
                    &cli.shaping,
                    false,
                    !cli.verbosity.quiet,
                )
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn is_stdout(path: Option<&Path>) -> bool {
    path.map_or(true, |p| p == Path::new("-"))
}

/// Markdown path for `input` inside `dir`, or next to the input.
fn markdown_path(input: &Path, dir: Option<&Path>) -> PathBuf {
    let name = input.with_extension("md");
    match (dir, name.file_name()) {
        (Some(dir), Some(file)) => dir.join(file),
        _ => name,
    }
}

fn progress_bar(len: u64, unit: &str) -> CliResult<ProgressBar> {
    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(&format!(
                "{{spinner:.green}} [{{bar:40.cyan/blue}}] {{pos}}/{{len}} {}",
                unit
            ))?
            .progress_chars("#>-"),
    );
    Ok(pb)
}

fn convert_one(path: &Path, options: &Options, pb: Option<&ProgressBar>) -> CliResult<Conversion> {
    let doc = pagemd::read_document(path)?;
    let mut converter = Converter::new(options.clone())?;
    if let Some(pb) = pb {
        converter = converter.with_progress(move |done, total| {
            pb.set_length(total as u64);
            pb.set_position(done as u64);
        });
    }
    let conversion = converter.convert_document(&doc)?;
    log::info!(
        "{}: {} pages, {} failed",
        path.display(),
        conversion.stats.page_count,
        conversion.stats.failed_page_count
    );
    Ok(conversion)
}

fn cmd_convert(
    inputs: &[PathBuf],
    output: Option<&Path>,
    shaping: &ShapingArgs,
    stats: bool,
    show_progress: bool,
) -> CliResult<()> {
    let options = shaping.to_options()?;

    if let [input] = inputs {
        let pb = if show_progress {
            Some(progress_bar(0, "pages")?)
        } else {
            None
        };
        let conversion = convert_one(input, &options, pb.as_ref())?;
        if let Some(pb) = &pb {
            pb.finish_and_clear();
        }

        if is_stdout(output) {
            print!("{}", conversion.markdown);
        } else if let Some(path) = output {
            fs::write(path, &conversion.markdown)?;
            println!("{} {}", "Saved to".green(), path.display());
        }
        if stats {
            print_stats(&conversion.stats);
        }
        return Ok(());
    }

    // Several inputs always go to files.
    let dir = output.filter(|p| !is_stdout(Some(*p)));
    if let Some(dir) = dir {
        fs::create_dir_all(dir)?;
    }

    let pb = if show_progress {
        progress_bar(inputs.len() as u64, "files")?
    } else {
        ProgressBar::hidden()
    };

    let results: Vec<Result<(PathBuf, ConversionStats), String>> = inputs
        .par_iter()
        .map(|input| {
            let result = convert_one(input, &options, None)
                .and_then(|conversion| {
                    let path = markdown_path(input, dir);
                    fs::write(&path, &conversion.markdown)?;
                    Ok((path, conversion.stats))
                })
                .map_err(|e| format!("{}: {}", input.display(), e));
            pb.inc(1);
            result
        })
        .collect();
    pb.finish_and_clear();

    let mut total = ConversionStats::new();
    let mut failed = 0;
    for result in results {
        match result {
            Ok((path, file_stats)) => {
                println!("{} {}", "Saved to".green(), path.display());
                total.merge(&file_stats);
            }
            Err(e) => {
                eprintln!("{}: {}", "Failed".red(), e);
                failed += 1;
            }
        }
    }

    println!(
        "\n{} {} of {} files converted",
        "Done!".green().bold(),
        inputs.len() - failed,
        inputs.len()
    );
    if stats {
        println!();
        print_stats(&total);
    }
    if failed > 0 {
        return Err(format!("{} files could not be converted", failed).into());
    }
    Ok(())
}

fn cmd_info(input: &Path, shaping: &ShapingArgs) -> CliResult<()> {
    let options = shaping.to_options()?;
    let conversion = convert_one(input, &options, None)?;

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Pages".bold(), conversion.stats.page_count);
    println!("{}: {}", "Failed pages".bold(), conversion.stats.failed_page_count);
    if let Some(ref header) = conversion.header {
        println!("{}: {}", "Running header".bold(), header);
    }
    if let Some(ref footer) = conversion.footer {
        println!("{}: {}", "Running footer".bold(), footer);
    }

    println!();
    print_stats(&conversion.stats);
    Ok(())
}

fn print_stats(stats: &ConversionStats) {
    println!("{}", "Content Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    let rows = [
        ("Headings", stats.heading_count),
        ("Paragraphs", stats.paragraph_count),
        ("List items", stats.list_item_count),
        ("Callouts", stats.callout_count),
        ("Table rows", stats.table_row_count),
        ("Code blocks", stats.code_block_count),
        ("Rules", stats.horizontal_rule_count),
        ("Words", stats.word_count),
        ("Characters", stats.char_count),
    ];
    for (label, value) in rows {
        println!("{}: {}", label.bold(), value);
    }
}

fn cmd_options(shaping: &ShapingArgs) -> CliResult<()> {
    let options = shaping.to_options()?;
    println!("{}", serde_json::to_string_pretty(&options)?);
    Ok(())
}

fn cmd_version() {
    println!("{} {}", "pagemd".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Page text to Markdown shaping tool");
    println!();
    println!("License: MIT");
}
