use gatekeeper_core::{Settings, UploadPolicy};
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid page config: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("{0} must not be empty")]
    Empty(&'static str),
    #[error("{0} must be greater than zero")]
    Zero(&'static str),
}

/// Page configuration, usually embedded as RON in the served page.
/// Every field is optional; missing fields keep their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub allowed_extension: String,
    pub max_upload_mib: u64,
    pub fallback_delay_ms: u32,
    pub dismiss_delay_ms: u32,
    pub processing_label: String,
    /// Element id of the file input checked against the upload policy.
    pub guarded_input_id: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        let settings = Settings::default();
        Self {
            allowed_extension: settings.policy.allowed_extension,
            max_upload_mib: settings.policy.max_size_mib,
            fallback_delay_ms: settings.fallback_delay_ms,
            dismiss_delay_ms: settings.dismiss_delay_ms,
            processing_label: settings.processing_label,
            guarded_input_id: "fileInput".to_string(),
        }
    }
}

impl PageConfig {
    pub fn from_ron_str(text: &str) -> Result<Self, ConfigError> {
        let mut config: PageConfig = ron::from_str(text)?;
        config.allowed_extension = config
            .allowed_extension
            .trim()
            .trim_start_matches('.')
            .to_string();
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.allowed_extension.is_empty() {
            return Err(ConfigError::Empty("allowed_extension"));
        }
        if self.guarded_input_id.is_empty() {
            return Err(ConfigError::Empty("guarded_input_id"));
        }
        if self.max_upload_mib == 0 {
            return Err(ConfigError::Zero("max_upload_mib"));
        }
        if self.fallback_delay_ms == 0 {
            return Err(ConfigError::Zero("fallback_delay_ms"));
        }
        Ok(())
    }

    pub fn settings(&self) -> Settings {
        Settings {
            policy: UploadPolicy {
                allowed_extension: self.allowed_extension.clone(),
                max_size_mib: self.max_upload_mib,
            },
            fallback_delay_ms: self.fallback_delay_ms,
            dismiss_delay_ms: self.dismiss_delay_ms,
            processing_label: self.processing_label.clone(),
        }
    }
}
