/// Configuration default values
///
/// All defaults live here so they can be changed in one place.
use std::time::Duration;

// Web server defaults
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;

// Data source defaults
pub const DEFAULT_DATA_PATH: &str = "./student-data/data.csv";
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(5 * 60);
pub const DEFAULT_DELIMITER: char = ',';
pub const DEFAULT_SERVE_STALE_ON_ERROR: bool = false;

// Lookup defaults
pub const DEFAULT_COHORT_LABEL: &str = "2024.2B";

// Query bounds, counted in characters after trimming
pub const MIN_QUERY_LENGTH: usize = 2;
pub const MAX_QUERY_LENGTH: usize = 50;
