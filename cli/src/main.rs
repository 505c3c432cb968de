//! slidecast CLI - PPTX to Reveal.js slideshow conversion
//!
//! A command-line tool for previewing, staging, and rendering PowerPoint
//! presentations as themed HTML slideshows.

use clap::{Parser, Subcommand, ValueEnum};
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use slidecast::markdown::{parse_markdown, rebase_dir};
use slidecast::render::{to_html, RenderOptions, Theme};
use slidecast::{batch, MediaMap, PptxParser};
use std::fs;
use std::path::{Path, PathBuf};

/// PPTX extraction and Reveal.js slideshow generation
#[derive(Parser)]
#[command(
    name = "slidecast",
    version,
    about = "Convert PPTX decks to themed HTML slideshows",
    long_about = "slidecast - Convert PowerPoint presentations into standalone,\n\
                  themed Reveal.js HTML slideshows, directly or via a Markdown\n\
                  staging directory."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print slide count and a short text preview per slide
    Preview {
        /// Input presentation (.pptx)
        input: PathBuf,
    },

    /// Stage a presentation: write images/ and slides.md to a directory
    Extract {
        /// Input presentation (.pptx)
        input: PathBuf,

        /// Staging directory (cleared and recreated)
        output: PathBuf,
    },

    /// Render a staged slides.md into an HTML slideshow
    Render {
        /// Path to slides.md
        input: PathBuf,

        /// Output HTML path
        output: PathBuf,

        /// Theme to apply
        #[arg(long, default_value = "cyberpunk")]
        theme: ThemeArg,

        /// Deck title
        #[arg(long, default_value = "Presentation")]
        title: String,

        /// Anchor directory image paths are re-based against
        #[arg(long)]
        base_dir: Option<PathBuf>,
    },

    /// Generate every deck listed in a JSON configuration file
    Batch {
        /// Path to the deck list (JSON array)
        config: PathBuf,
    },

    /// Show version information
    Version,
}

/// Theme choice on the command line.
#[derive(Clone, Copy, ValueEnum)]
enum ThemeArg {
    Cyberpunk,
    Blue,
    Light,
    Blueprint,
    Dracula,
    Christmas,
}

impl From<ThemeArg> for Theme {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Cyberpunk => Theme::Cyberpunk,
            ThemeArg::Blue => Theme::Blue,
            ThemeArg::Light => Theme::Light,
            ThemeArg::Blueprint => Theme::Blueprint,
            ThemeArg::Dracula => Theme::Dracula,
            ThemeArg::Christmas => Theme::Christmas,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Preview { input } => {
            if !input.exists() {
                println!("Error: File not found: {}", input.display());
                return Ok(());
            }

            let parser = PptxParser::open(&input)?;
            let records = parser.extract(&MediaMap::new())?;

            println!(
                "File: {}",
                input.file_name().unwrap_or_default().to_string_lossy()
            );
            println!("Found {} slides.", records.len());

            for (entry, record) in parser.slide_entries().iter().zip(&records) {
                let text: String = record.joined_text().chars().take(100).collect();
                println!("  Slide {}: {}...", entry.index, text);
            }
        }

        Commands::Extract { input, output } => {
            let pb = create_spinner("Extracting presentation...");

            let staged = slidecast::stage_file(&input, &output)?;

            pb.finish_and_clear();
            println!(
                "{} Staged {} slides and {} media files to {}",
                "✓".green().bold(),
                staged.slides.len(),
                staged.media_count,
                output.display()
            );
        }

        Commands::Render {
            input,
            output,
            theme,
            title,
            base_dir,
        } => {
            let pb = create_spinner("Rendering deck...");

            let text = fs::read_to_string(&input)?;
            let md_dir = input.parent().unwrap_or(Path::new(""));
            let image_base = match base_dir {
                Some(ref anchor) => rebase_dir(md_dir, anchor),
                None => md_dir.to_path_buf(),
            };
            let slides = parse_markdown(&text, &image_base);

            let theme: Theme = theme.into();
            let options = RenderOptions::new()
                .with_title(title.as_str())
                .with_theme(theme);
            fs::write(&output, to_html(&slides, &options))?;

            pb.finish_and_clear();
            println!(
                "{} Generated {} with {} slides using theme {}.",
                "✓".green().bold(),
                output.display(),
                slides.len(),
                theme
            );
        }

        Commands::Batch { config } => {
            let configs = batch::load_configs(&config)?;

            for deck in &configs {
                println!(
                    "Generating {} from {}...",
                    deck.title,
                    deck.pptx.display()
                );

                match batch::generate_deck(deck)? {
                    batch::BatchOutcome::Skipped => {
                        println!(
                            "{} Skipping {}, not found.",
                            "!".yellow().bold(),
                            deck.pptx.display()
                        );
                    }
                    batch::BatchOutcome::Generated(report) => {
                        if let Some(ref warning) = report.warning {
                            eprintln!("{} {}", "Warning".yellow().bold(), warning);
                        }
                        println!(
                            "{} Written {} slides to {}",
                            "✓".green().bold(),
                            report.slide_count,
                            deck.output.display()
                        );
                    }
                }
            }
        }

        Commands::Version => {
            print_version();
        }
    }

    Ok(())
}

fn print_version() {
    println!("{} {}", "slidecast".green().bold(), env!("CARGO_PKG_VERSION"));
    println!("PPTX to Reveal.js slideshow conversion");
    println!();
    let themes: Vec<&str> = Theme::ALL.iter().map(|t| t.name()).collect();
    println!("Themes: {}", themes.join(", "));
}

fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
            .template("{spinner:.blue} {msg}")
            .unwrap(),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}
