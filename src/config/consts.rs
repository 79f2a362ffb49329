// src/config/consts.rs

// Indexing service
pub const DEFAULT_SERVICE_URL: &str = "http://127.0.0.1:5000";
pub const INDEX_PATH: &str = "index"; // relative to the service url
pub const INDEX_QUERY_PARAM: &str = "url";
pub const USER_AGENT: &str = concat!("word_indexer/", env!("CARGO_PKG_VERSION"));

// The service crawls linked pages too; give it time
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

// Local files
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = ".store/debug.log";
pub const CONFIG_FILE: &str = "word_indexer.toml";

// GUI
pub const TOP_WORDS: usize = 25;
pub const WINDOW_W: f32 = 560.0;
pub const WINDOW_H: f32 = 640.0;
