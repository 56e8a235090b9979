// src/cli.rs
use std::{env, error::Error, fs, path::PathBuf};

use crate::compare;
use crate::config::{ExportFormat, ReportOptions};
use crate::csv;
use crate::data::Dataset;
use crate::file;
use crate::narrative;
use crate::rank::RankedViews;
use crate::report;
use crate::report::charts::parse_hex_color;
use crate::scrape;

pub fn run() -> Result<(), Box<dyn Error>> {
    let mut opts = ReportOptions::default();
    parse_cli(&mut opts, env::args().skip(1))?;

    logf!("run: {:?} vs {:?}", opts.main_country, opts.other_country);
    let dataset = load_dataset(&opts)?;
    if dataset.is_empty() {
        return Err("no usable rows in the debt table".into());
    }
    logf!("dataset: {} countries", dataset.len());

    if opts.list_only {
        print_listing(&dataset);
        return Ok(());
    }

    let views = RankedViews::build(&dataset);
    let cmp = compare::build_comparison(&views, &opts.main_country, &opts.other_country)?;
    let text = narrative::render(&cmp);
    println!("{text}");

    let report_path = report::write_report(&opts, &views, &cmp, &text)?;
    println!("Wrote {}", report_path.display());

    if opts.export_dataset {
        let path = opts.dataset_path();
        let payload = csv::to_export_string(
            &csv::dataset_headers(),
            &csv::dataset_rows(&dataset),
            opts.include_headers,
            opts.format.delim(),
        );
        file::write_text(&path, &payload)?;
        println!("Wrote {}", path.display());
    }

    Ok(())
}

fn load_dataset(opts: &ReportOptions) -> Result<Dataset, Box<dyn Error>> {
    match &opts.from_file {
        Some(path) => {
            logf!("parsing saved page {}", path.display());
            let doc = fs::read_to_string(path)?;
            scrape::dataset_from_document(&doc)
        }
        None => scrape::fetch(),
    }
}

/// Every country on one TSV line: name, debt label, parsed figures.
fn print_listing(ds: &Dataset) {
    let out = std::io::stdout();
    let mut lock = out.lock();
    for row in csv::dataset_rows(ds) {
        let _ = csv::write_row(&mut lock, &row, '\t');
    }
}

pub fn parse_cli<I>(opts: &mut ReportOptions, mut args: I) -> Result<(), Box<dyn Error>>
where
    I: Iterator<Item = String>,
{
    while let Some(a) = args.next() {
        match a.as_str() {
            "-m" | "--main" => {
                opts.main_country = args.next().ok_or("Missing value for --main")?;
            }
            "-c" | "--compare" => {
                opts.other_country = args.next().ok_or("Missing value for --compare")?;
            }
            "--color-main" => {
                opts.main_color = take_color(&mut args, "--color-main")?;
            }
            "--color-other" => {
                opts.other_color = take_color(&mut args, "--color-other")?;
            }
            "-o" | "--out" => {
                opts.out = Some(PathBuf::from(args.next().ok_or("Missing output path")?));
            }
            "--csv" => opts.export_dataset = true,
            "--format" => {
                let v = args.next().ok_or("Missing value for --format")?;
                opts.format = match v.to_ascii_lowercase().as_str() {
                    "csv" => ExportFormat::Csv,
                    "tsv" => ExportFormat::Tsv,
                    other => return Err(format!("Unknown format: {}", other).into()),
                };
            }
            "--include-headers" => opts.include_headers = true,
            "--list" => opts.list_only = true,
            "--from-file" => {
                opts.from_file = Some(PathBuf::from(args.next().ok_or("Missing page path")?));
            }
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    if opts.main_country == opts.other_country {
        return Err(format!("Cannot compare {:?} with itself", opts.main_country).into());
    }
    Ok(())
}

fn take_color<I>(args: &mut I, flag: &str) -> Result<String, Box<dyn Error>>
where
    I: Iterator<Item = String>,
{
    let v = args.next().ok_or_else(|| format!("Missing value for {}", flag))?;
    if parse_hex_color(&v).is_none() {
        return Err(format!("Invalid color for {}: {} (expected #rrggbb)", flag, v).into());
    }
    // Stored value doubles as a CSS color, so keep the hash
    Ok(if v.starts_with('#') { v } else { format!("#{v}") })
}
