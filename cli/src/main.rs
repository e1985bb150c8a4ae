//! resumark CLI - resume text segmentation tool

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use resumark::{
    JsonFormat, NormalizeOptions, ParseOptions, RenderOptions, ResumeDocument, ResumeParser,
    SegmentationStats, TextSize,
};

#[derive(Parser)]
#[command(name = "resumark")]
#[command(version)]
#[command(about = "Segment extracted resume text into Markdown, text, and JSON", long_about = None)]
struct Cli {
    /// Input text file ("-" for stdin)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    #[command(flatten)]
    common: CommonArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args, Clone)]
struct CommonArgs {
    /// Region used by location and name patterns
    #[arg(
        long,
        global = true,
        env = "RESUMARK_REGION",
        default_value = resumark::parser::DEFAULT_REGION
    )]
    region: String,

    /// Additional section heading to recognize (repeatable)
    #[arg(long = "heading", value_name = "NAME", global = true)]
    headings: Vec<String>,

    /// Do not build a contact block
    #[arg(long, global = true)]
    no_contacts: bool,

    /// Map foreign bullet glyphs to •
    #[arg(long, global = true)]
    standardize_bullets: bool,

    /// List marker character
    #[arg(long, global = true, default_value = "-")]
    list_marker: char,

    /// Markdown heading level (1-6)
    #[arg(long, global = true, default_value = "2")]
    heading_level: u8,

    /// Text size class for page-break blocks (sm, base, lg)
    #[arg(long, global = true, default_value = "sm", value_parser = TextSize::parse)]
    text_size: TextSize,

    /// Wrap sections in page-break-avoiding blocks
    #[arg(long, global = true)]
    page_breaks: bool,

    /// Include YAML frontmatter
    #[arg(long, global = true)]
    frontmatter: bool,
}

impl CommonArgs {
    fn parse_options(&self) -> ParseOptions {
        let mut options = ParseOptions::new()
            .with_region(self.region.clone())
            .with_normalize(
                NormalizeOptions::new().with_standardized_bullets(self.standardize_bullets),
            );
        for heading in &self.headings {
            options = options.with_heading(heading.clone());
        }
        if self.no_contacts {
            options = options.without_contacts();
        }
        options
    }

    fn render_options(&self) -> RenderOptions {
        RenderOptions::new()
            .with_list_marker(self.list_marker)
            .with_heading_level(self.heading_level)
            .with_text_size(self.text_size)
            .with_page_break_hints(self.page_breaks)
            .with_frontmatter(self.frontmatter)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Segment a resume and print Markdown
    #[command(alias = "md")]
    Markdown {
        /// Input text file ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Segment a resume and print plain text
    Text {
        /// Input text file ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Segment a resume and print JSON
    Json {
        /// Input text file ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// List detected sections with their line counts
    Sections {
        /// Input text file ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Print the listing as JSON
        #[arg(long)]
        json: bool,
    },

    /// Segment every .txt file in a directory
    Batch {
        /// Directory containing extracted resume text
        #[arg(value_name = "DIR")]
        input: PathBuf,

        /// Output directory
        #[arg(short, long, value_name = "DIR")]
        output: PathBuf,
    },

    /// Show version information
    Version,
}

type CliResult = Result<(), Box<dyn std::error::Error>>;

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let common = cli.common;

    let result = match cli.command {
        Some(Commands::Markdown { input, output }) => {
            cmd_markdown(&input, output.as_deref(), &common)
        }
        Some(Commands::Text { input, output }) => cmd_text(&input, output.as_deref(), &common),
        Some(Commands::Json {
            input,
            output,
            compact,
        }) => cmd_json(&input, output.as_deref(), compact, &common),
        Some(Commands::Sections { input, json }) => cmd_sections(&input, json, &common),
        Some(Commands::Batch { input, output }) => cmd_batch(&input, &output, &common),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: Markdown to stdout
            if let Some(input) = cli.input {
                cmd_markdown(&input, None, &common)
            } else {
                println!("{}", "Usage: resumark <FILE>".yellow());
                println!("       resumark --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn is_stdin(input: &Path) -> bool {
    input.as_os_str() == "-"
}

fn load_document(
    input: &Path,
    common: &CommonArgs,
) -> Result<ResumeDocument, Box<dyn std::error::Error>> {
    let parser = ResumeParser::new(common.parse_options())?;

    if is_stdin(input) {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        Ok(parser.parse_named(&text, "stdin"))
    } else {
        Ok(parser.parse_file(input)?)
    }
}

fn write_output(content: &str, output: Option<&Path>) -> CliResult {
    if let Some(path) = output {
        fs::write(path, content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}

fn cmd_markdown(input: &Path, output: Option<&Path>, common: &CommonArgs) -> CliResult {
    let doc = load_document(input, common)?;
    let markdown = resumark::render::to_markdown(&doc, &common.render_options())?;
    write_output(&markdown, output)
}

fn cmd_text(input: &Path, output: Option<&Path>, common: &CommonArgs) -> CliResult {
    let doc = load_document(input, common)?;
    let text = resumark::render::to_text(&doc, &common.render_options())?;
    write_output(&text, output)
}

fn cmd_json(input: &Path, output: Option<&Path>, compact: bool, common: &CommonArgs) -> CliResult {
    let doc = load_document(input, common)?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let json = resumark::render::to_json(&doc, format)?;
    write_output(&json, output)
}

fn cmd_sections(input: &Path, json: bool, common: &CommonArgs) -> CliResult {
    let doc = load_document(input, common)?;

    if json {
        let listing: Vec<_> = doc
            .iter()
            .map(|s| serde_json::json!({ "title": s.title, "lines": s.len() }))
            .collect();
        println!("{}", serde_json::to_string_pretty(&listing)?);
        return Ok(());
    }

    println!("{}", "Sections".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    for section in doc.iter() {
        println!("{}: {}", section.title.bold(), section.len());
    }

    println!();
    println!("{}", "Segmentation Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    let stats = &doc.stats;
    println!("{}: {}", "Lines".bold(), stats.line_count);
    println!("{}: {}", "Headings".bold(), stats.heading_count());
    println!("{}: {}", "Dropped".bold(), stats.dropped_line_count);
    println!("{}: {}", "Contact lines".bold(), stats.contact_line_count);
    println!(
        "{}: {}",
        "Fallback".bold(),
        if stats.used_fallback { "Yes" } else { "No" }
    );

    Ok(())
}

/// Text files directly inside `dir`, sorted by name.
fn collect_inputs(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut inputs: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| {
            path.is_file()
                && path
                    .extension()
                    .is_some_and(|ext| ext.eq_ignore_ascii_case("txt"))
        })
        .collect();
    inputs.sort();
    Ok(inputs)
}

/// Output path for `input` under `output_dir`.
fn markdown_path(input: &Path, output_dir: &Path) -> PathBuf {
    let stem = input.file_stem().unwrap_or_default().to_string_lossy();
    output_dir.join(format!("{}.md", stem))
}

/// Segmentation statistics summed over a batch.
fn batch_totals(docs: &[ResumeDocument]) -> SegmentationStats {
    docs.iter().fold(SegmentationStats::new(), |mut totals, doc| {
        totals.merge(&doc.stats);
        totals
    })
}

fn cmd_batch(input: &Path, output_dir: &Path, common: &CommonArgs) -> CliResult {
    let inputs = collect_inputs(input)?;
    if inputs.is_empty() {
        println!("{} {}", "No .txt files in".yellow(), input.display());
        return Ok(());
    }

    fs::create_dir_all(output_dir)?;

    let parser = ResumeParser::new(common.parse_options())?;
    let render_options = common.render_options();

    let pb = ProgressBar::new(inputs.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );

    pb.set_message("Reading...");
    let texts = inputs
        .iter()
        .map(fs::read_to_string)
        .collect::<io::Result<Vec<_>>>()?;

    pb.set_message("Segmenting...");
    let docs = parser.parse_batch(&texts);

    let totals = batch_totals(&docs);

    pb.set_message("Writing Markdown...");
    for (path, mut doc) in inputs.iter().zip(docs) {
        doc.metadata.source = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned());
        let markdown = resumark::render::to_markdown(&doc, &render_options)?;
        let target = markdown_path(path, output_dir);
        log::debug!("{} -> {}", path.display(), target.display());
        fs::write(&target, markdown)?;
        pb.inc(1);
    }

    pb.finish_with_message("Done!");

    println!(
        "\n{} {} resumes written to {}",
        "Done!".green().bold(),
        inputs.len(),
        output_dir.display()
    );
    println!("{}: {}", "Sections".bold(), totals.section_count);
    println!("{}: {}", "Headings".bold(), totals.heading_count());
    println!("{}: {}", "Dropped".bold(), totals.dropped_line_count);
    println!("{}: {}", "Contact lines".bold(), totals.contact_line_count);

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "resumark".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Resume text segmentation tool");
    println!();
    println!("License: MIT");
}
