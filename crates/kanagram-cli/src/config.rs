//! Match configuration from flags, environment and config file
//!
//! Precedence: command-line flag, then environment variable, then the JSON
//! config file, then built-in defaults.
//!
//! Environment variables:
//! - `KANAGRAM_NGRAM_SIZE`: characters per n-gram (default: 2)
//! - `KANAGRAM_THRESHOLD`: minimum similarity 0.0-1.0 (default: 0.3)
//! - `KANAGRAM_METRIC`: `jaccard` or `dice` (default: jaccard)

use std::error::Error;
use std::path::PathBuf;
use std::str::FromStr;

use clap::Args;
use kanagram_core::{MatchConfig, Metric};
use tracing::{debug, warn};

pub const ENV_NGRAM_SIZE: &str = "KANAGRAM_NGRAM_SIZE";
pub const ENV_THRESHOLD: &str = "KANAGRAM_THRESHOLD";
pub const ENV_METRIC: &str = "KANAGRAM_METRIC";

#[derive(Args, Debug, Default, Clone)]
pub struct MatchArgs {
    /// Characters per n-gram [env: KANAGRAM_NGRAM_SIZE]
    #[arg(short = 'n', long)]
    pub ngram_size: Option<usize>,

    /// Minimum similarity 0.0-1.0 [env: KANAGRAM_THRESHOLD]
    #[arg(short, long)]
    pub threshold: Option<f64>,

    /// Similarity metric: jaccard or dice [env: KANAGRAM_METRIC]
    #[arg(short, long)]
    pub metric: Option<Metric>,

    /// JSON file with match settings
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl MatchArgs {
    /// Build a validated config, reading environment variables through `env`
    pub fn resolve<E>(&self, env: E) -> Result<MatchConfig, Box<dyn Error>>
    where
        E: Fn(&str) -> Option<String>,
    {
        let mut config = match &self.config {
            Some(path) => {
                let json = std::fs::read_to_string(path)
                    .map_err(|e| format!("cannot read config '{}': {}", path.display(), e))?;
                MatchConfig::from_json(&json)?
            }
            None => MatchConfig::default(),
        };

        if let Some(n) = self.ngram_size.or_else(|| env_parse(&env, ENV_NGRAM_SIZE)) {
            config.ngram_size = n;
        }
        if let Some(t) = self.threshold.or_else(|| env_parse(&env, ENV_THRESHOLD)) {
            config.threshold = t;
        }
        if let Some(m) = self.metric.or_else(|| env_parse(&env, ENV_METRIC)) {
            config.metric = m;
        }

        config.validate()?;
        debug!(?config, "resolved match config");
        Ok(config)
    }
}

/// Read and parse an environment variable. Unparseable values are logged
/// and ignored.
fn env_parse<T, E>(env: &E, key: &str) -> Option<T>
where
    T: FromStr,
    E: Fn(&str) -> Option<String>,
{
    let raw = env(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!(key, value = %raw, "ignoring unparseable environment variable");
            None
        }
    }
}
