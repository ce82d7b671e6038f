//! CLI configuration structures and loaders.
use std::env;
use std::path::PathBuf;

use crate::dirs;

/// Configuration required to bootstrap a tracker session.
#[derive(Clone, Debug)]
pub struct CliConfig {
    pub session_id: Option<String>,
    /// Directory for the session's turn order and ledger files.
    pub state_dir: Option<PathBuf>,
    pub enable_persistence: bool,
    /// Directory with `tracker.toml`, `markers.toml`, `token_markers.json`.
    pub content_dir: Option<PathBuf>,
    /// Marker set TOML overriding the content directory's.
    pub marker_set: Option<PathBuf>,
    /// Host marker library JSON overriding the content directory's.
    pub token_markers: Option<PathBuf>,
    pub gm_player: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            session_id: None,
            state_dir: None,
            enable_persistence: false,
            content_dir: None,
            marker_set: None,
            token_markers: None,
            gm_player: Self::DEFAULT_GM_PLAYER.to_owned(),
        }
    }
}

impl CliConfig {
    pub const DEFAULT_GM_PLAYER: &'static str = "gm";
    pub const DEFAULT_SESSION_ID: &'static str = "default";

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `TRACKER_SESSION_ID` - Session identifier for state and logs (default: "default")
    /// - `TRACKER_STATE_DIR` - Directory for session state (default: platform data dir)
    /// - `TRACKER_ENABLE_PERSISTENCE` - Keep state on disk (default: false)
    /// - `TRACKER_CONTENT_DIR` - Directory with tracker content files
    /// - `TRACKER_MARKER_SET` - Marker set TOML file
    /// - `TRACKER_TOKEN_MARKERS` - Host marker library JSON file
    /// - `TRACKER_GM_PLAYER` - Player id treated as the GM (default: "gm")
    pub fn from_env() -> Self {
        let mut config = Self::default();

        config.session_id = env::var("TRACKER_SESSION_ID").ok();
        config.state_dir = env::var("TRACKER_STATE_DIR")
            .ok()
            .map(PathBuf::from);

        if let Some(enable) = read_env::<bool>("TRACKER_ENABLE_PERSISTENCE") {
            config.enable_persistence = enable;
        } else if env::var("TRACKER_ENABLE_PERSISTENCE").is_ok() {
            // Also accept just setting the variable without value as "true"
            config.enable_persistence = true;
        }

        config.content_dir = env::var("TRACKER_CONTENT_DIR")
            .ok()
            .map(PathBuf::from);
        config.marker_set = env::var("TRACKER_MARKER_SET")
            .ok()
            .map(PathBuf::from);
        config.token_markers = env::var("TRACKER_TOKEN_MARKERS")
            .ok()
            .map(PathBuf::from);

        if let Ok(player) = env::var("TRACKER_GM_PLAYER")
            && !player.trim().is_empty()
        {
            config.gm_player = player;
        }

        config
    }

    pub fn session_id(&self) -> &str {
        self.session_id
            .as_deref()
            .unwrap_or(Self::DEFAULT_SESSION_ID)
    }

    /// State directory for this session, explicit or under the data dir.
    pub fn resolved_state_dir(&self) -> PathBuf {
        self.state_dir
            .clone()
            .unwrap_or_else(|| dirs::data_dir().join("sessions").join(self.session_id()))
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
