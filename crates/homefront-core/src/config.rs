//! Site configuration
//!
//! Loaded from an optional TOML file (`homefront.toml`). Every field has a
//! default so an empty or absent file yields a working site.

use crate::error::SiteError;
use crate::locale::Locale;
use crate::navigation::DEFAULT_INLINE_GAP_PX;
use crate::viewport::{Breakpoint, DEFAULT_BREAKPOINT_PX};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Default config file name looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "homefront.toml";

/// Site-wide settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Brand name shown in the logo
    pub site_name: String,
    /// Widths at or below this are compact
    pub breakpoint_px: u32,
    /// Locale used before the visitor picks one
    pub default_locale: Locale,
    /// Spacing between inline navigation entries
    pub nav_gap_px: u16,
    /// Directory holding the compiled front end
    pub dist_dir: PathBuf,
    /// Ad slots rendered on the landing page
    pub ad_slots: Vec<String>,
    /// AdSense publisher id; ads are hidden when unset
    pub ad_client: Option<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_name: "Homefront".to_string(),
            breakpoint_px: DEFAULT_BREAKPOINT_PX,
            default_locale: Locale::En,
            nav_gap_px: DEFAULT_INLINE_GAP_PX,
            dist_dir: PathBuf::from("crates/homefront-web/dist"),
            ad_slots: vec!["4007518640".to_string(), "9340764048".to_string()],
            ad_client: None,
        }
    }
}

impl SiteConfig {
    /// Parse and validate a TOML file
    pub fn load(path: &Path) -> Result<Self, SiteError> {
        let content = std::fs::read_to_string(path).map_err(|source| SiteError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&content).map_err(|e| match e {
            ParseFailure::Toml(source) => SiteError::ConfigParse {
                path: path.to_path_buf(),
                message: source.message().to_string(),
                source,
            },
            ParseFailure::Invalid(err) => err,
        })?;
        debug!(path = %path.display(), "Loaded site config");
        Ok(config)
    }

    /// Load `path` if given, else `./homefront.toml` if present, else defaults.
    /// Unreadable files degrade to defaults; invalid ones are errors.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, SiteError> {
        let candidate = path
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME));

        match Self::load(&candidate) {
            Ok(config) => Ok(config),
            Err(e) if e.is_recoverable() => {
                if path.is_some() {
                    warn!(error = %e, "Using default site config");
                }
                Ok(Self::default())
            }
            Err(e) => Err(e),
        }
    }

    fn from_toml(content: &str) -> Result<Self, ParseFailure> {
        let config: Self = toml::from_str(content).map_err(ParseFailure::Toml)?;
        config.validate().map_err(ParseFailure::Invalid)?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), SiteError> {
        if self.breakpoint_px == 0 {
            return Err(SiteError::InvalidBreakpoint {
                value: self.breakpoint_px,
            });
        }
        Ok(())
    }

    pub fn breakpoint(&self) -> Breakpoint {
        Breakpoint::new(self.breakpoint_px)
    }

    /// Settings the browser needs; never includes server paths
    pub fn public(&self) -> PublicConfig {
        PublicConfig {
            site_name: self.site_name.clone(),
            breakpoint_px: self.breakpoint_px,
            default_locale: self.default_locale,
            nav_gap_px: self.nav_gap_px,
            ad_slots: self.ad_slots.clone(),
            ad_client: self.ad_client.clone(),
        }
    }
}

enum ParseFailure {
    Toml(toml::de::Error),
    Invalid(SiteError),
}

/// Client-facing subset of [`SiteConfig`], served as `/api/config`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicConfig {
    pub site_name: String,
    pub breakpoint_px: u32,
    pub default_locale: Locale,
    pub nav_gap_px: u16,
    #[serde(default)]
    pub ad_slots: Vec<String>,
    #[serde(default)]
    pub ad_client: Option<String>,
}

impl Default for PublicConfig {
    fn default() -> Self {
        SiteConfig::default().public()
    }
}

impl From<PublicConfig> for SiteConfig {
    fn from(public: PublicConfig) -> Self {
        Self {
            site_name: public.site_name,
            breakpoint_px: public.breakpoint_px,
            default_locale: public.default_locale,
            nav_gap_px: public.nav_gap_px,
            ad_slots: public.ad_slots,
            ad_client: public.ad_client,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_file_is_default() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file).unwrap();
        let config = SiteConfig::load(file.path()).unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn test_partial_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "breakpoint_px = 768\ndefault_locale = \"ar\"").unwrap();
        let config = SiteConfig::load(file.path()).unwrap();
        assert_eq!(config.breakpoint_px, 768);
        assert_eq!(config.default_locale, Locale::Ar);
        assert_eq!(config.site_name, "Homefront");
    }

    #[test]
    fn test_zero_breakpoint_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "breakpoint_px = 0").unwrap();
        let err = SiteConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, SiteError::InvalidBreakpoint { value: 0 }));
    }

    #[test]
    fn test_malformed_toml_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "breakpoint_px = \"wide\"").unwrap();
        let err = SiteConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, SiteError::ConfigParse { .. }));
    }

    #[test]
    fn test_missing_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let config = SiteConfig::load_or_default(Some(&dir.path().join("absent.toml"))).unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn test_public_config_round_trip() {
        let config = SiteConfig {
            breakpoint_px: 1024,
            ..SiteConfig::default()
        };
        let json = serde_json::to_string(&config.public()).unwrap();
        assert!(json.contains("\"breakpointPx\":1024"));

        let public: PublicConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(SiteConfig::from(public).breakpoint_px, 1024);
    }
}
