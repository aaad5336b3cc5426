//! Phone number scanning CLI.
//!
//! Reads text from a file or stdin, scans it with the library matcher and
//! prints one line per hit: offset, raw span and the number in the chosen
//! output format.

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use phonescan::{Leniency, PhoneNumberFormat, PhoneNumberMatch, PhoneNumberMatcher, PhoneNumberUtil};

/// Phone Number Scanner
///
/// Finds telephone numbers in free-form text. Reads the given file, or
/// stdin when no file is supplied, and prints one match per line as
/// `offset<TAB>raw<TAB>formatted`.
#[derive(Parser)]
#[command(name = "phonescan")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Input text file (stdin when omitted)
    file: Option<PathBuf>,

    /// Region assumed for numbers written without a country code
    /// (e.g. US, CH). Without it only international forms match.
    #[arg(short, long, value_name = "REGION")]
    region: Option<String>,

    /// How much scrutiny a candidate must survive
    #[arg(short, long, value_enum, default_value = "valid")]
    leniency: LeniencyArg,

    /// Give up after this many rejected candidates
    #[arg(long, value_name = "N")]
    max_tries: Option<u32>,

    /// Output format for the third column
    #[arg(short, long, value_enum, default_value = "e164")]
    format: OutputFormat,

    /// Print a scan summary to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum LeniencyArg {
    Possible,
    Valid,
    StrictGrouping,
    ExactGrouping,
}

impl From<LeniencyArg> for Leniency {
    fn from(arg: LeniencyArg) -> Self {
        match arg {
            LeniencyArg::Possible => Leniency::Possible,
            LeniencyArg::Valid => Leniency::Valid,
            LeniencyArg::StrictGrouping => Leniency::StrictGrouping,
            LeniencyArg::ExactGrouping => Leniency::ExactGrouping,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// The span exactly as it appears in the input
    Raw,
    /// E.164, e.g. +41791234567
    E164,
    /// RFC3966, e.g. tel:+41-79-123-45-67
    Rfc3966,
}

/// Scan command handler.
struct ScanHandler {
    util: &'static PhoneNumberUtil,
    format: OutputFormat,
    verbose: bool,
}

impl ScanHandler {
    fn new(format: OutputFormat, verbose: bool) -> Self {
        Self {
            util: PhoneNumberUtil::instance(),
            format,
            verbose,
        }
    }

    fn render(&self, matched: &PhoneNumberMatch) -> String {
        match self.format {
            OutputFormat::Raw => matched.raw_string().to_string(),
            OutputFormat::E164 => self.util.format(matched.number(), PhoneNumberFormat::E164),
            OutputFormat::Rfc3966 => self.util.format(matched.number(), PhoneNumberFormat::Rfc3966),
        }
    }

    fn scan(&self, text: &str, region: Option<&str>, leniency: Leniency, max_tries: u32) -> usize {
        let matcher = PhoneNumberMatcher::new(self.util, text, region, leniency, max_tries);
        let mut found = 0;
        for matched in matcher {
            println!(
                "{}\t{}\t{}",
                matched.start(),
                matched.raw_string(),
                self.render(&matched)
            );
            found += 1;
        }
        if self.verbose {
            if found > 0 {
                eprintln!("✓ {} number(s) found in {} bytes", found, text.len());
            } else {
                eprintln!("⚠ No phone numbers found");
            }
        }
        found
    }
}

fn read_input(file: Option<&PathBuf>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            Ok(text)
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(region) = cli.region.as_deref() {
        if region != "ZZ" && PhoneNumberUtil::instance().metadata_for_region(region).is_none() {
            anyhow::bail!("Unsupported region: {region}");
        }
    }

    let text = read_input(cli.file.as_ref())?;
    let handler = ScanHandler::new(cli.format, cli.verbose);
    handler.scan(
        &text,
        cli.region.as_deref(),
        cli.leniency.into(),
        cli.max_tries.unwrap_or(u32::MAX),
    );

    Ok(())
}
