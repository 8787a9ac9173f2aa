//! Silo configuration loaded from environment variables.

use std::env;

use blog_core::ports::DEFAULT_RECENT_POSTS;
use blog_infra::RuntimeConfig;

/// Upper bound on demo posts seeded at boot.
pub const MAX_SEED_DEMO_POSTS: usize = 10_000;

/// Silo configuration.
#[derive(Debug, Clone)]
pub struct SiloConfig {
    pub runtime: RuntimeConfig,
    /// Exit right after boot instead of waiting for Ctrl-C.
    pub no_wait: bool,
    /// Demo posts created at boot.
    pub seed_demo_posts: usize,
    /// How many posts the boot listing shows.
    pub recent_posts_count: usize,
}

impl Default for SiloConfig {
    fn default() -> Self {
        Self {
            runtime: RuntimeConfig::default(),
            no_wait: false,
            seed_demo_posts: 0,
            recent_posts_count: DEFAULT_RECENT_POSTS,
        }
    }
}

impl SiloConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key/value source, falling back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            runtime: RuntimeConfig::from_lookup(&lookup),
            no_wait: lookup("SILO_NO_WAIT")
                .map(|v| parse_flag(&v))
                .unwrap_or(false),
            seed_demo_posts: lookup("SEED_DEMO_POSTS")
                .and_then(|s| s.parse::<usize>().ok())
                .map(|n| n.min(MAX_SEED_DEMO_POSTS))
                .unwrap_or(0),
            recent_posts_count: lookup("RECENT_POSTS_COUNT")
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_RECENT_POSTS),
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(value.trim().to_lowercase().as_str(), "1" | "true" | "yes")
}
