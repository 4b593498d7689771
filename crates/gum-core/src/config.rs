use crate::error::{BoxError, Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked up beside the executable and under the XDG config dir.
pub const CONFIG_FILE_NAME: &str = "configuration.json";

/// How one URI scheme is turned into a command and (optionally) a field file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProtocolDefinition {
    /// Scheme this entry handles; compared case-insensitively.
    pub protocol: String,
    /// Command template; element 0 is the executable.
    pub cmd: Vec<String>,
    /// Field file to assemble before launching. Empty means none.
    #[serde(default, rename = "outputfile")]
    pub output_file: String,
    /// Delimited file whose rows seed the field file. Empty means none.
    #[serde(default, rename = "basefile")]
    pub base_file: String,
    #[serde(default, rename = "filedelimiter", alias = "filedelimeter")]
    pub file_delimiter: String,
    #[serde(default, rename = "hostaddressfileline")]
    pub host_address_line: Vec<String>,
    #[serde(default, rename = "usernamefileline")]
    pub username_line: Vec<String>,
    #[serde(default, rename = "additionalfilelines")]
    pub additional_lines: Vec<Vec<String>>,
}

impl ProtocolDefinition {
    pub fn output_path(&self) -> Option<&Path> {
        (!self.output_file.is_empty()).then(|| Path::new(&self.output_file))
    }

    pub fn base_path(&self) -> Option<&Path> {
        (!self.base_file.is_empty()).then(|| Path::new(&self.base_file))
    }

    fn validate(&self, index: usize) -> std::result::Result<(), String> {
        if self.protocol.trim().is_empty() {
            return Err(format!("protocols[{index}] has no protocol name"));
        }
        if self.cmd.is_empty() {
            return Err(format!("protocol {} has an empty cmd", self.protocol));
        }
        if self.output_path().is_some() && self.file_delimiter.is_empty() {
            return Err(format!(
                "protocol {} sets outputfile but no filedelimiter",
                self.protocol
            ));
        }
        Ok(())
    }
}

/// Top-level configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GumConfig {
    /// Print full diagnostics and linger before exit.
    #[serde(default)]
    pub debug: bool,
    #[serde(default)]
    pub protocols: Vec<ProtocolDefinition>,
}

impl GumConfig {
    /// Parse configuration text. TOML is used for `.toml` paths, JSON otherwise.
    pub fn from_str_for(path: &Path, data: &str) -> Result<Self> {
        let parsed: std::result::Result<GumConfig, BoxError> =
            if path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("toml")) {
                toml::from_str(data).map_err(Into::into)
            } else {
                serde_json::from_str(data).map_err(Into::into)
            };
        let cfg = parsed.map_err(|source| Error::ConfigLoad {
            path: path.to_path_buf(),
            source,
        })?;
        cfg.validate(path)?;
        Ok(cfg)
    }

    fn validate(&self, path: &Path) -> Result<()> {
        for (i, proto) in self.protocols.iter().enumerate() {
            proto.validate(i).map_err(|msg| Error::ConfigLoad {
                path: path.to_path_buf(),
                source: msg.into(),
            })?;
        }
        Ok(())
    }
}

/// Read and validate the configuration at `path`.
pub fn load(path: &Path) -> Result<GumConfig> {
    let data = fs::read_to_string(path).map_err(|e| Error::ConfigLoad {
        path: path.to_path_buf(),
        source: e.into(),
    })?;
    GumConfig::from_str_for(path, &data)
}

/// Locate the configuration file.
///
/// `configuration.json` beside the running executable wins when it exists,
/// otherwise the XDG location `~/.config/gum/configuration.json` is used
/// (whether or not it exists yet).
pub fn config_path() -> anyhow::Result<PathBuf> {
    if let Some(beside) = beside_executable() {
        if beside.exists() {
            return Ok(beside);
        }
    }
    let xdg_dirs = xdg::BaseDirectories::with_prefix("gum")?;
    Ok(xdg_dirs.get_config_home().join("gum").join(CONFIG_FILE_NAME))
}

fn beside_executable() -> Option<PathBuf> {
    let exe = std::env::current_exe().ok()?;
    Some(exe.parent()?.join(CONFIG_FILE_NAME))
}
