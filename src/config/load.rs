use crate::config::types::Configuration;
use anyhow::{Context, Result, bail};
use ini::Ini;
use std::path::Path;

impl Configuration {
    /// Opens the configuration file. A missing file is a fatal setup error;
    /// the caller is expected to terminate with the message.
    pub fn open(path: &Path) -> Result<Self> {
        if !path.exists() {
            bail!("Configuration file not found: {}", path.display());
        }
        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    pub(crate) fn read(&self) -> Result<Ini> {
        Ini::load_from_file(&self.path)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {e}", self.path.display()))
    }

    /// Section names in file order.
    pub fn sections(&self) -> Result<Vec<String>> {
        let ini = self.read()?;
        Ok(ini
            .sections()
            .flatten()
            .map(std::string::ToString::to_string)
            .collect())
    }

    /// All key/value pairs of a section, in file order.
    pub fn section(&self, section: &str) -> Result<Vec<(String, String)>> {
        let ini = self.read()?;
        let properties = ini
            .section(Some(section))
            .with_context(|| format!("Section not found: {section}"))?;
        Ok(properties
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect())
    }

    /// A single value. Missing sections and keys are surfaced as errors,
    /// not defaulted.
    pub fn value(&self, section: &str, key: &str) -> Result<String> {
        let ini = self.read()?;
        let properties = ini
            .section(Some(section))
            .with_context(|| format!("Section not found: {section}"))?;
        properties
            .get(key)
            .map(std::string::ToString::to_string)
            .with_context(|| format!("Key not found: [{section}] {key}"))
    }

    /// True iff every key of `keys` exists in `section`.
    pub fn present_keys(&self, section: &str, keys: &[&str]) -> Result<bool> {
        let ini = self.read()?;
        let Some(properties) = ini.section(Some(section)) else {
            return Ok(false);
        };
        Ok(keys.iter().all(|key| properties.contains_key(*key)))
    }
}
