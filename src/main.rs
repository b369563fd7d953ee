use std::error;
use std::fs;

use bibprune::{strip, UnusedKeys};

use clap;
use clap::Parser as CLIParser;

#[cfg(not(feature = "serde_json"))]
#[derive(clap::Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Settings {
    /// Filepath to the checkcites report listing unused keys
    #[clap(short, long)]
    report: String,

    /// Filepath to the bibliography to clean
    #[clap(short, long)]
    bib: String,

    /// Filepath the cleaned bibliography is written to
    #[clap(short, long, default_value = "main_cleaned.bib")]
    output: String,

    /// Print every removed citation key
    #[clap(short, long)]
    verbose: bool,
}

#[cfg(feature = "serde_json")]
#[derive(clap::Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Settings {
    /// Filepath to the checkcites report listing unused keys
    #[clap(short, long)]
    report: String,

    /// Filepath to the bibliography to clean
    #[clap(short, long)]
    bib: String,

    /// Filepath the cleaned bibliography is written to
    #[clap(short, long, default_value = "main_cleaned.bib")]
    output: String,

    /// Print every removed citation key
    #[clap(short, long)]
    verbose: bool,

    /// Print a JSON summary instead of the human-readable report
    #[clap(long)]
    json: bool,
}

fn prune(s: &Settings) -> Result<(), Box<dyn error::Error>> {
    let unused = UnusedKeys::from_file(&s.report)?;
    let bib = fs::read_to_string(&s.bib)?;

    let outcome = strip(&unused, &bib);
    fs::write(&s.output, &outcome.bib)?;

    #[cfg(feature = "serde_json")]
    if s.json {
        return print_json(s, &unused, &outcome);
    }

    println!("found {} unused citation keys in '{}'", unused.len(), s.report);
    if s.verbose {
        for key in &outcome.removed {
            println!("removing: {}", key);
        }
    }
    println!("removed {} unused entries", outcome.removed_count());
    println!("cleaned bibliography written to '{}'", s.output);

    Ok(())
}

#[cfg(feature = "serde_json")]
fn print_json(
    s: &Settings,
    unused: &UnusedKeys,
    outcome: &bibprune::StripOutcome,
) -> Result<(), Box<dyn error::Error>> {
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize)]
    struct Summary {
        unused_keys: usize,
        removed_count: usize,
        removed: Vec<String>,
        output: String,
    }

    let summary = Summary {
        unused_keys: unused.len(),
        removed_count: outcome.removed_count(),
        removed: outcome.removed.clone(),
        output: s.output.clone(),
    };
    println!("{}", serde_json::to_string(&summary)?);

    Ok(())
}

fn main() -> Result<(), Box<dyn error::Error>> {
    let settings = Settings::parse();
    prune(&settings)
}
