use std::fs;
use std::io;
use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const DEFAULT_ROWS: usize = 12;
pub const DEFAULT_COLS: usize = 5;
pub const DEFAULT_BLOCK_SIZE: u32 = 30;
pub const DEFAULT_DROP_INTERVAL: Duration = Duration::from_millis(1000);
pub const DEFAULT_REPEAT_COOLDOWN: Duration = Duration::from_millis(100);

/// The widest piece has to fit, or nothing could ever spawn.
const MIN_COLS: usize = 4;
const MIN_ROWS: usize = 2;
pub const MAX_COLS: usize = 64;
pub const MAX_ROWS: usize = 128;
pub const MAX_BLOCK_SIZE: u32 = 256;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct BoardSettings {
    pub rows: usize,
    pub cols: usize,
    pub block_size: u32,
}

impl Default for BoardSettings {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            block_size: DEFAULT_BLOCK_SIZE,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimingSettings {
    #[serde(with = "crate::serde_duration")]
    pub drop_interval: Duration,
    #[serde(with = "crate::serde_duration")]
    pub repeat_cooldown: Duration,
}

impl Default for TimingSettings {
    fn default() -> Self {
        Self {
            drop_interval: DEFAULT_DROP_INTERVAL,
            repeat_cooldown: DEFAULT_REPEAT_COOLDOWN,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct VideoSettings {
    pub vsync: bool,
}

impl Default for VideoSettings {
    fn default() -> Self {
        Self { vsync: true }
    }
}

/// Read once at startup; the running game never changes these.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameSettings {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default)]
    pub board: BoardSettings,
    #[serde(default)]
    pub timing: TimingSettings,
    #[serde(default)]
    pub video: VideoSettings,
    /// Fixed piece sequence when set; fresh entropy otherwise.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            version: default_version(),
            board: BoardSettings::default(),
            timing: TimingSettings::default(),
            video: VideoSettings::default(),
            seed: None,
        }
    }
}

impl GameSettings {
    pub fn sanitized(mut self) -> Self {
        self.version = default_version();
        self.board.rows = self.board.rows.clamp(MIN_ROWS, MAX_ROWS);
        self.board.cols = self.board.cols.clamp(MIN_COLS, MAX_COLS);
        self.board.block_size = self.board.block_size.clamp(1, MAX_BLOCK_SIZE);
        if self.timing.drop_interval.is_zero() {
            self.timing.drop_interval = DEFAULT_DROP_INTERVAL;
        }
        if self.timing.repeat_cooldown.is_zero() {
            self.timing.repeat_cooldown = DEFAULT_REPEAT_COOLDOWN;
        }
        self
    }
}

fn default_version() -> u32 {
    1
}

#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn from_env() -> Self {
        if let Some(explicit) = std::env::var_os("BLOCKFALL_SETTINGS_PATH") {
            return Self {
                path: PathBuf::from(explicit),
            };
        }

        let base = std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| {
                std::env::var_os("HOME").map(|home| {
                    let mut p = PathBuf::from(home);
                    p.push(".config");
                    p
                })
            })
            .unwrap_or_else(|| PathBuf::from("."));

        let mut path = base;
        path.push("blockfall");
        path.push("settings.json");
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Missing or unreadable settings fall back to defaults.
    pub fn load(&self) -> GameSettings {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log::debug!("no settings at {}, using defaults", self.path.display());
                return GameSettings::default();
            }
            Err(err) => {
                log::warn!("failed reading settings {}: {err}", self.path.display());
                return GameSettings::default();
            }
        };
        match serde_json::from_slice::<GameSettings>(&bytes) {
            Ok(settings) => settings.sanitized(),
            Err(err) => {
                log::warn!("ignoring malformed settings {}: {err}", self.path.display());
                GameSettings::default()
            }
        }
    }

    pub fn save(&self, settings: &GameSettings) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let text = serde_json::to_string_pretty(settings)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(&self.path, text)
    }
}
