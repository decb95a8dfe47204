use crate::config::types::Configuration;
use anyhow::{Context, Result};

impl Configuration {
    /// Writes or overwrites a single value and saves the file.
    pub fn set_value(&self, section: &str, key: &str, value: &str) -> Result<()> {
        let mut ini = self.read()?;
        ini.with_section(Some(section)).set(key, value);
        ini.write_to_file(&self.path)
            .with_context(|| format!("Failed to write {}", self.path.display()))?;
        Ok(())
    }

    /// Removes a key from a section and saves the file. Removing an absent
    /// key is a no-op.
    pub fn remove_value(&self, section: &str, key: &str) -> Result<()> {
        let mut ini = self.read()?;
        if let Some(properties) = ini.section_mut(Some(section)) {
            properties.remove(key);
        }
        ini.write_to_file(&self.path)
            .with_context(|| format!("Failed to write {}", self.path.display()))?;
        Ok(())
    }
}
