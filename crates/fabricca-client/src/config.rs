//! SDK configuration and the CA client configuration artifact.

use std::io::Write;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use fabricca_core::{ConfigProvider, FabricCaError, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Environment variable naming the SDK config file
pub const CONFIG_ENV: &str = "FABRIC_SDK_CONFIG";

const DEFAULT_CA_URL: &str = "https://localhost:7054";

/// SDK configuration as read from `config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SdkConfig {
    /// Fabric CA connection settings.
    #[serde(default)]
    pub fabric_ca: FabricCaConfig,

    /// Directory for the generated CA client config (default: system temp dir).
    #[serde(default)]
    pub artifact_dir: Option<PathBuf>,
}

/// Connection settings for the Fabric CA server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FabricCaConfig {
    /// Server URL (default: https://localhost:7054).
    #[serde(default = "default_url")]
    pub url: String,

    /// CA name when the server hosts several CAs.
    #[serde(default)]
    pub ca_name: Option<String>,

    /// MSP directory holding the client's key store (default: msp).
    #[serde(default = "default_msp_dir")]
    pub msp_dir: PathBuf,

    #[serde(default)]
    pub tls: TlsConfig,
}

/// TLS settings for the CA connection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TlsConfig {
    #[serde(default)]
    pub enabled: bool,

    /// Trusted root certificate files.
    #[serde(default)]
    pub cert_files: Vec<PathBuf>,

    /// Client key pair for mutual TLS.
    #[serde(default)]
    pub client: Option<TlsClientConfig>,
}

/// Client key pair presented during mutual TLS.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TlsClientConfig {
    pub key_file: PathBuf,
    pub cert_file: PathBuf,
}

impl Default for FabricCaConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            ca_name: None,
            msp_dir: default_msp_dir(),
            tls: TlsConfig::default(),
        }
    }
}

impl SdkConfig {
    /// Load config from a TOML file, falling back to defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            toml::from_str(&content).map_err(|e| FabricCaError::Configuration(e.to_string()))
        } else {
            Ok(Self::default())
        }
    }

    /// Locate and load the SDK config.
    ///
    /// Checks `FABRIC_SDK_CONFIG` first, then `config.toml` in the platform
    /// config directory.
    pub fn discover() -> Result<Self> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            debug!(path = ?path, "loading SDK config from {CONFIG_ENV}");
            return Self::load(Path::new(&path));
        }

        match Self::default_path() {
            Some(path) => Self::load(&path),
            None => Ok(Self::default()),
        }
    }

    /// Platform config file path, if a home directory can be determined.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("org", "hyperledger", "fabricca")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Render the CA client configuration as YAML.
    pub fn render_ca_client_config(&self) -> Result<String> {
        let ca = &self.fabric_ca;
        if ca.url.trim().is_empty() {
            return Err(FabricCaError::Configuration(
                "fabric CA server URL is empty".to_string(),
            ));
        }

        let rendered = CaClientFile {
            url: &ca.url,
            caname: ca.ca_name.as_deref(),
            mspdir: &ca.msp_dir,
            tls: CaClientTls {
                enabled: ca.tls.enabled,
                certfiles: &ca.tls.cert_files,
                client: ca.tls.client.as_ref().map(|c| CaClientTlsKeyPair {
                    keyfile: &c.key_file,
                    certfile: &c.cert_file,
                }),
            },
        };

        serde_yaml::to_string(&rendered).map_err(|e| FabricCaError::Configuration(e.to_string()))
    }
}

impl ConfigProvider for SdkConfig {
    fn ca_client_config_path(&self) -> Result<PathBuf> {
        let rendered = self.render_ca_client_config()?;

        let mut builder = tempfile::Builder::new();
        builder.prefix("fabric-ca-client-").suffix(".yaml");
        let mut file = match &self.artifact_dir {
            Some(dir) => builder.tempfile_in(dir)?,
            None => builder.tempfile()?,
        };
        file.write_all(rendered.as_bytes())?;

        // Removal is the caller's job from here on.
        let (_, path) = file.keep().map_err(|e| FabricCaError::Io(e.error))?;
        debug!(path = %path.display(), "wrote CA client config");
        Ok(path)
    }
}

/// CA client config file layout.
#[derive(Serialize)]
struct CaClientFile<'a> {
    url: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    caname: Option<&'a str>,
    mspdir: &'a Path,
    tls: CaClientTls<'a>,
}

#[derive(Serialize)]
struct CaClientTls<'a> {
    enabled: bool,
    certfiles: &'a [PathBuf],
    #[serde(skip_serializing_if = "Option::is_none")]
    client: Option<CaClientTlsKeyPair<'a>>,
}

#[derive(Serialize)]
struct CaClientTlsKeyPair<'a> {
    keyfile: &'a Path,
    certfile: &'a Path,
}

/// Temporary CA client config file, removed when dropped.
#[derive(Debug)]
pub struct ConfigArtifact {
    path: PathBuf,
}

impl ConfigArtifact {
    /// Take ownership of the file at `path`
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for ConfigArtifact {
    fn drop(&mut self) {
        match std::fs::remove_file(&self.path) {
            Ok(()) => debug!(path = %self.path.display(), "removed CA client config"),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => warn!(
                path = %self.path.display(),
                error = %e,
                "failed to remove CA client config"
            ),
        }
    }
}

// Default value functions for serde.
fn default_url() -> String {
    String::from(DEFAULT_CA_URL)
}

fn default_msp_dir() -> PathBuf {
    PathBuf::from("msp")
}
