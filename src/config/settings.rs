use anyhow::{Result, bail};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Which repository holds the ladder snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum StoreKind {
    #[default]
    Json,
    Sqlite,
}

impl StoreKind {
    pub fn default_path(&self) -> PathBuf {
        match self {
            StoreKind::Json => PathBuf::from("ladder_state.json"),
            StoreKind::Sqlite => PathBuf::from("ladder_state.db"),
        }
    }
}

impl fmt::Display for StoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreKind::Json => f.write_str("json"),
            StoreKind::Sqlite => f.write_str("sqlite"),
        }
    }
}

impl FromStr for StoreKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(StoreKind::Json),
            "sqlite" => Ok(StoreKind::Sqlite),
            other => bail!("Unknown ladder store '{other}', expected 'json' or 'sqlite'"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LadderSettings {
    pub store: StoreKind,
    pub state_path: PathBuf,
    explicit_path: bool,
}

impl Default for LadderSettings {
    fn default() -> Self {
        let store = StoreKind::default();
        Self {
            store,
            state_path: store.default_path(),
            explicit_path: false,
        }
    }
}

impl LadderSettings {
    /// Switches backend. A path that was never set explicitly follows the
    /// backend's default.
    fn use_store(&mut self, store: StoreKind) {
        if !self.explicit_path {
            self.state_path = store.default_path();
        }
        self.store = store;
    }

    fn use_path(&mut self, path: PathBuf) {
        self.state_path = path;
        self.explicit_path = true;
    }
}

#[derive(Debug, Clone)]
pub struct LabelSettings {
    pub webhook_url: Option<String>,
    pub user_agent: &'static str,
    pub timeout_secs: u64,
    pub rate_limit_ms: u64,
}

impl Default for LabelSettings {
    fn default() -> Self {
        Self {
            webhook_url: None,
            user_agent: "LadderRanking/1.0",
            timeout_secs: 10,
            rate_limit_ms: 250, // 4 label updates/sec
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub ladder: LadderSettings,
    pub labels: LabelSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            ladder: LadderSettings::default(),
            labels: LabelSettings::default(),
        }
    }

    /// Defaults overridden by `LADDER_STORE`, `LADDER_STATE_PATH` and
    /// `LADDER_LABEL_WEBHOOK`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::new();

        if let Some(store) = lookup("LADDER_STORE") {
            config.ladder.use_store(store.parse()?);
        }
        if let Some(path) = lookup("LADDER_STATE_PATH").filter(|p| !p.is_empty()) {
            config.ladder.use_path(PathBuf::from(path));
        }
        config.labels.webhook_url = lookup("LADDER_LABEL_WEBHOOK").filter(|url| !url.is_empty());

        Ok(config)
    }

    /// Applies command-line flags on top of the environment.
    pub fn with_overrides(mut self, store: Option<StoreKind>, state_path: Option<PathBuf>) -> Self {
        if let Some(store) = store {
            self.ladder.use_store(store);
        }
        if let Some(path) = state_path {
            self.ladder.use_path(path);
        }
        self
    }
}
