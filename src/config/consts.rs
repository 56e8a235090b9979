// src/config/consts.rs

// Net config
pub const SOURCE_URL: &str =
    "https://worldpopulationreview.com/country-rankings/countries-by-national-debt";
pub const USER_AGENT: &str = "debt_scrape/0.9";
pub const HTTP_TIMEOUT_SECS: u64 = 15;

// Default comparison pair
pub const DEFAULT_MAIN_COUNTRY: &str = "United States";
pub const DEFAULT_OTHER_COUNTRY: &str = "China";

// Bar and table colors; hex, same form the CLI accepts
pub const DEFAULT_MAIN_COLOR: &str = "#d62728";
pub const DEFAULT_OTHER_COLOR: &str = "#1f77b4";
pub const NEUTRAL_BAR_COLOR: &str = "#9aa5b1";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_REPORT_FILE: &str = "debt_report.html";
pub const DEFAULT_DATASET_STEM: &str = "countries";
