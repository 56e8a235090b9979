// src/config/options.rs
use std::path::PathBuf;
use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
    // TODO: Json?
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> char {
        match self { ExportFormat::Csv => ',', ExportFormat::Tsv => '\t' }
    }
}

/// One run's worth of knobs. Defaults mirror the consts so a bare
/// invocation compares the stock country pair into `out/`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportOptions {
    pub main_country: String,
    pub other_country: String,
    pub main_color: String,
    pub other_color: String,
    /// `-o` value as given. File path, or directory hint (trailing
    /// separator / existing dir), or absent for the default.
    pub out: Option<PathBuf>,
    pub export_dataset: bool,
    pub format: ExportFormat,
    pub include_headers: bool,
    pub list_only: bool,
    /// Parse a saved page instead of fetching.
    pub from_file: Option<PathBuf>,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            main_country: s!(DEFAULT_MAIN_COUNTRY),
            other_country: s!(DEFAULT_OTHER_COUNTRY),
            main_color: s!(DEFAULT_MAIN_COLOR),
            other_color: s!(DEFAULT_OTHER_COLOR),
            out: None,
            export_dataset: false,
            format: ExportFormat::Csv,
            include_headers: false,
            list_only: false,
            from_file: None,
        }
    }
}

impl ReportOptions {
    /// Where the HTML page lands.
    pub fn report_path(&self) -> PathBuf {
        match &self.out {
            None => PathBuf::from(DEFAULT_OUT_DIR).join(DEFAULT_REPORT_FILE),
            Some(p) if crate::file::is_dir_hint(p) => p.join(DEFAULT_REPORT_FILE),
            Some(p) => p.clone(),
        }
    }

    /// Where `--csv` lands: next to the report, extension per format.
    pub fn dataset_path(&self) -> PathBuf {
        let mut path = self.report_path();
        path.pop();
        path.push(join!(DEFAULT_DATASET_STEM, ".", self.format.ext()));
        path
    }
}
