//! ui-float gallery CLI
//!
//! Usage:
//!   ui-float [OPTIONS] [OUTPUT]
//!
//! Options:
//!   -t, --theme <FILE>   Theme file overriding the built-in tokens (TOML)
//!   -s, --story <NAME>   Render a single story instead of the full gallery
//!   -l, --list           List available story names
//!   -c, --compact        Disable pretty-printed output
//!   -h, --help           Print help

use std::fs;
use std::path::PathBuf;
use std::process;

use clap::Parser;

use ui_float::{render_gallery, stories, HtmlConfig, Theme};

#[derive(Parser)]
#[command(name = "ui-float")]
#[command(about = "Gallery generator for the Float component")]
struct Cli {
    /// Output file (writes to stdout if not provided)
    output: Option<PathBuf>,

    /// Theme file overriding the built-in design tokens (TOML format)
    #[arg(short, long)]
    theme: Option<PathBuf>,

    /// Render a single story by name instead of the full gallery
    #[arg(short, long)]
    story: Option<String>,

    /// List available story names
    #[arg(short, long)]
    list: bool,

    /// Disable pretty-printed output
    #[arg(short, long)]
    compact: bool,
}

fn main() {
    let cli = Cli::parse();

    if cli.list {
        for story in stories::all() {
            println!("{}\t{}", story.name, story.title);
        }
        return;
    }

    let theme = match &cli.theme {
        Some(path) => match Theme::from_file(path) {
            Ok(theme) => theme,
            Err(e) => {
                eprintln!("Error loading theme '{}': {}", path.display(), e);
                process::exit(1);
            }
        },
        None => Theme::default(),
    };

    let selected = match &cli.story {
        Some(name) => {
            let matched: Vec<_> = stories::all()
                .into_iter()
                .filter(|story| story.name == name)
                .collect();
            if matched.is_empty() {
                eprintln!("Error: unknown story '{}' (try --list)", name);
                process::exit(1);
            }
            matched
        }
        None => stories::all(),
    };

    let config = HtmlConfig::default().with_pretty_print(!cli.compact);
    let html = render_gallery(&selected, &config, &theme);

    match &cli.output {
        Some(path) => {
            if let Err(e) = fs::write(path, &html) {
                eprintln!("Error writing '{}': {}", path.display(), e);
                process::exit(1);
            }
        }
        None => println!("{}", html),
    }
}
