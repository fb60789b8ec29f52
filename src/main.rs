//! Payslip Generator CLI
//!
//! Usage:
//!   payslip-gen [OPTIONS] <JSON_DATA> <OUTPUT_PATH>
//!
//! The first argument is the JSON payload itself (not a file path); the
//! second is where the PDF is written. Exits 0 on success and 1 on usage
//! errors or generation failures.

use std::path::PathBuf;

use clap::Parser;

use payslip_gen::{generate_with_config, GenerateConfig, PageConfig, Theme};

#[derive(Parser)]
#[command(name = "payslip-gen")]
#[command(about = "Render an employee payslip PDF from a JSON payload")]
struct Cli {
    /// JSON payload describing the payslip (the document itself, not a path)
    json_data: String,

    /// Output path for the generated PDF
    output_path: PathBuf,

    /// Theme file for colors and fonts (TOML format)
    #[arg(short, long)]
    theme: Option<PathBuf>,

    /// Directory containing the TrueType font family
    #[arg(long)]
    fonts_dir: Option<PathBuf>,

    /// Debug mode: print the composed block plan to stderr
    #[arg(short, long)]
    debug: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // The exit-code contract is 1 for usage errors, not clap's default 2
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // --help and --version land here as non-error exits
            let _ = err.print();
            if err.use_stderr() {
                std::process::exit(1);
            }
            return;
        }
    };

    // Load theme
    let theme = match &cli.theme {
        Some(path) => match Theme::from_file(path) {
            Ok(theme) => theme,
            Err(e) => {
                eprintln!("Error loading theme '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => Theme::default(),
    };

    let mut page = PageConfig::default();
    if let Some(dir) = &cli.fonts_dir {
        page = page.with_fonts_dir(dir.clone());
    }

    let config = GenerateConfig::new()
        .with_page(page)
        .with_theme(theme)
        .with_debug(cli.debug);

    match generate_with_config(&cli.json_data, &cli.output_path, config) {
        Ok(()) => {
            println!("Payslip generated: {}", cli.output_path.display());
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
