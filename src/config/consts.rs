// src/config/consts.rs

// Target site
pub const TARGET_DOMAIN: &str = "linkedin.com";
pub const CANONICAL_PREFIX: &str = "https://www.linkedin.com/in/";

// Local cache
pub const STORE_DIR: &str = ".store";
pub const STORAGE_KEY: &str = "linkedinProfiles";

// Logging
pub const LOG_FILE: &str = "debug.log";
pub const LOG_ENV: &str = "PROFILE_HARVEST_LOG";
pub const DEFAULT_LOG_FILTER: &str = "profile_harvest=debug";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const EXPORT_PREFIX: &str = "linkedin_profiles_";
pub const EXPORT_EXT: &str = "csv";
pub const CSV_HEADER: &str = "Profile URL";
