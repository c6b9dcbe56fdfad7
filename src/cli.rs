// src/cli.rs
use std::{
    fs,
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use chrono::{Local, NaiveDate};
use clap::{Parser, ValueEnum};
use color_eyre::eyre::{eyre, Result, WrapErr};

use crate::{
    config::{catalog, options::ExportFormat, Settings},
    criteria::{parse_date, SearchCriteria},
    csv,
    extract::{self, Format, ListingTable},
    file,
    progress::Progress,
    search::{self, NO_RESULTS},
    transport::TransportKind,
};

#[derive(Debug, Parser)]
#[command(name = "cli")]
#[command(about = "Search court real-estate auction listings and print them as CSV/TSV")]
#[command(version)]
pub struct Args {
    /// Court name, e.g. 서울중앙지방법원 (see --list-courts)
    #[arg(short, long)]
    pub court: Option<String>,

    /// Building type label (see --list-buildings)
    #[arg(short, long, default_value = "아파트")]
    pub building: String,

    /// First sale date (YYYY-MM-DD, YYYY.MM.DD or YYYYMMDD); today when omitted
    #[arg(long, value_parser = date_arg)]
    pub from: Option<NaiveDate>,

    /// Last sale date; today when omitted
    #[arg(long, value_parser = date_arg)]
    pub to: Option<NaiveDate>,

    /// browser | form | json
    #[arg(short, long, default_value = "form")]
    pub transport: TransportKind,

    #[arg(short, long, value_enum, default_value_t = OutFormat::Csv)]
    pub format: OutFormat,

    /// Output file or directory; stdout when omitted
    #[arg(short, long)]
    pub out: Option<String>,

    #[arg(long)]
    pub include_headers: bool,

    /// Extract from a saved response instead of querying the site
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// html | json; guessed from the file extension when omitted
    #[arg(long)]
    pub input_format: Option<Format>,

    #[arg(long)]
    pub list_courts: bool,

    #[arg(long)]
    pub list_buildings: bool,

    /// Only print errors
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutFormat {
    Csv,
    Tsv,
}

impl From<OutFormat> for ExportFormat {
    fn from(f: OutFormat) -> Self {
        match f {
            OutFormat::Csv => ExportFormat::Csv,
            OutFormat::Tsv => ExportFormat::Tsv,
        }
    }
}

fn date_arg(s: &str) -> Result<NaiveDate, String> {
    parse_date(s).map_err(|e| e.to_string())
}

/// Status lines on stderr so stdout stays clean for the table.
struct StderrProgress;

impl Progress for StderrProgress {
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
}

pub fn run() -> Result<()> {
    run_with(Args::parse())
}

pub fn run_with(args: Args) -> Result<()> {
    let cat = catalog();

    if args.list_courts {
        for c in &cat.courts {
            println!("{}\t{}", c.name, c.code);
        }
        return Ok(());
    }
    if args.list_buildings {
        for b in &cat.building_types {
            println!("{}\t{}", b.label, b.code);
        }
        return Ok(());
    }

    let (table, stem) = match &args.input {
        Some(path) => extract_file(path, args.input_format)?,
        None => search_site(&args)?,
    };

    if table.is_empty() {
        eprintln!("{NO_RESULTS}");
        return Ok(());
    }

    let format = ExportFormat::from(args.format);
    let sep = format.delim();

    match &args.out {
        Some(o) => {
            let default_name = join!(&stem, ".", format.ext());
            let path = file::resolve_out_path(o, &default_name)?;
            file::write_table_to(&path, &table, args.include_headers, sep)?;
            if !args.quiet {
                eprintln!("Wrote {} rows → {}", table.row_count(), path.display());
            }
        }
        None => {
            let mut out = BufWriter::new(io::stdout().lock());
            csv::write_table(&mut out, &table, args.include_headers, sep)?;
            out.flush()?;
        }
    }
    Ok(())
}

fn search_site(args: &Args) -> Result<(ListingTable, String)> {
    let court = args
        .court
        .as_deref()
        .ok_or_else(|| eyre!("--court is required (see --list-courts)"))?;
    let today = Local::now().date_naive();
    let criteria = SearchCriteria::from_labels(
        court,
        &args.building,
        args.from.unwrap_or(today),
        args.to.unwrap_or(today),
    )?;

    let settings = Settings::from_env()?;
    let table = if args.quiet {
        search::search(args.transport, &settings, &criteria, None)?
    } else {
        search::search(args.transport, &settings, &criteria, Some(&mut StderrProgress))?
    };
    Ok((table, file::default_stem(&criteria)))
}

fn extract_file(path: &Path, format: Option<Format>) -> Result<(ListingTable, String)> {
    let body = fs::read_to_string(path).wrap_err_with(|| format!("reading {}", path.display()))?;
    let format = format.unwrap_or_else(|| guess_format(path));
    logd!("Input: {} as {}", path.display(), format);

    let table = extract::extract(&body, format)?;
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| s!(crate::config::consts::DEFAULT_FILE));
    Ok((table, stem))
}

fn guess_format(path: &Path) -> Format {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => Format::Json,
        _ => Format::Html,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_invocation() {
        let args = Args::try_parse_from([
            "cli", "--court", "서울중앙지방법원", "--from", "2024.01.01", "--to", "20240131",
            "--transport", "json", "--format", "tsv", "--include-headers",
        ])
        .unwrap();
        assert_eq!(args.court.as_deref(), Some("서울중앙지방법원"));
        assert_eq!(args.building, "아파트");
        assert_eq!(args.from, NaiveDate::from_ymd_opt(2024, 1, 1));
        assert_eq!(args.to, NaiveDate::from_ymd_opt(2024, 1, 31));
        assert_eq!(args.transport, TransportKind::DirectJsonApi);
        assert_eq!(args.format, OutFormat::Tsv);
        assert!(args.include_headers);
    }

    #[test]
    fn rejects_bad_date() {
        assert!(Args::try_parse_from(["cli", "--from", "yesterday"]).is_err());
    }

    #[test]
    fn format_follows_extension() {
        assert_eq!(guess_format(Path::new("a/resp.JSON")), Format::Json);
        assert_eq!(guess_format(Path::new("a/resp.html")), Format::Html);
        assert_eq!(guess_format(Path::new("a/resp")), Format::Html);
    }

    #[test]
    fn missing_court_is_an_error() {
        let args = Args::try_parse_from(["cli"]).unwrap();
        assert!(search_site(&args).is_err());
    }
}
