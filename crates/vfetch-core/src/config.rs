use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use url::Url;

const VIDEOLAN_BASE: &str = "https://download.videolan.org/pub/videolan/vlc";

/// HTTP timeout parameters (optional section in config.toml).
/// There is deliberately no retry section: a failed request fails the run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// TCP/TLS connect timeout in seconds.
    pub connect_timeout_secs: u64,
    /// Whole-transfer timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 15,
            timeout_secs: 300,
        }
    }
}

/// Coordinates of the pinned release: where the artifact and its published
/// checksum live, and the filename to save under. Keeping all three here means
/// the URL literals exist in exactly one place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReleaseCoordinates {
    /// Direct URL of the installer binary.
    pub artifact_url: String,
    /// URL of the plaintext checksum file published next to it.
    pub checksum_url: String,
    /// Filename to write in the destination directory.
    pub filename: String,
}

impl ReleaseCoordinates {
    /// Coordinates for a VideoLAN VLC Windows installer, derived from version
    /// and platform (e.g. `"3.0.17.4"`, `"win64"`).
    pub fn videolan(version: &str, platform: &str) -> Self {
        let filename = format!("vlc-{version}-{platform}.exe");
        let artifact_url = format!("{VIDEOLAN_BASE}/{version}/{platform}/{filename}");
        let checksum_url = format!("{artifact_url}.sha256");
        Self {
            artifact_url,
            checksum_url,
            filename,
        }
    }

    /// Check that both URLs parse with an http(s) scheme and the filename is a
    /// plain name. Config files are hand-editable, so this runs before the
    /// first network call.
    pub fn validate(&self) -> Result<()> {
        for u in [&self.artifact_url, &self.checksum_url] {
            let parsed = Url::parse(u).with_context(|| format!("invalid URL: {u}"))?;
            if parsed.scheme() != "https" && parsed.scheme() != "http" {
                anyhow::bail!("unsupported URL scheme {:?} in {u}", parsed.scheme());
            }
        }
        if self.filename.is_empty() {
            anyhow::bail!("release filename is empty");
        }
        if self.filename.contains('/') || self.filename.contains('\\') {
            anyhow::bail!("release filename must not contain path separators: {:?}", self.filename);
        }
        Ok(())
    }
}

impl Default for ReleaseCoordinates {
    fn default() -> Self {
        Self::videolan("3.0.17.4", "win64")
    }
}

/// Global configuration loaded from `~/.config/vfetch/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VfetchConfig {
    /// Destination directory for the verified artifact (None = platform temp dir).
    #[serde(default)]
    pub destination_dir: Option<PathBuf>,
    /// HTTP timeouts; if missing, built-in defaults are used.
    #[serde(default)]
    pub http: HttpConfig,
    /// Release to fetch; if missing, the built-in pinned release is used.
    #[serde(default)]
    pub release: ReleaseCoordinates,
}

impl VfetchConfig {
    /// Effective destination directory: the configured one, or the platform
    /// temp dir.
    pub fn destination(&self) -> PathBuf {
        self.destination_dir
            .clone()
            .unwrap_or_else(std::env::temp_dir)
    }

    /// Like `destination`, honoring a command-line override first.
    pub fn destination_with_override(&self, over: Option<&Path>) -> PathBuf {
        match over {
            Some(dir) => dir.to_path_buf(),
            None => self.destination(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("vfetch")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<VfetchConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = VfetchConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: VfetchConfig = toml::from_str(&data)?;
    Ok(cfg)
}
