//! Runtime configuration: file locations and display limits.

use std::path::PathBuf;

use clap::Args;

pub const DEFAULT_MODEL_PATH: &str = "model.msgpack";
pub const DEFAULT_DATA_PATH: &str = "data_oversampled.csv";
pub const DEFAULT_PREVIEW_ROWS: usize = 20;

/// Settings shared by every subcommand. Each can come from a flag or from the
/// environment.
#[derive(Debug, Clone, Args)]
pub struct Config {
    /// Serialized classifier (MessagePack)
    #[arg(
        long = "model",
        env = "CHURN_MODEL_PATH",
        default_value = DEFAULT_MODEL_PATH,
        global = true
    )]
    pub model_path: PathBuf,

    /// Dataset CSV shown on the dataset page
    #[arg(long = "data", env = "CHURN_DATA_PATH", default_value = DEFAULT_DATA_PATH, global = true)]
    pub data_path: PathBuf,

    /// Maximum number of dataset rows to display
    #[arg(
        long = "rows",
        env = "CHURN_PREVIEW_ROWS",
        default_value_t = DEFAULT_PREVIEW_ROWS,
        global = true
    )]
    pub preview_rows: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            model_path: PathBuf::from(DEFAULT_MODEL_PATH),
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            preview_rows: DEFAULT_PREVIEW_ROWS,
        }
    }
}
