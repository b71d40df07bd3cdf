/// Configuration options for the engine
use anyhow::{bail, Result};

#[derive(Debug, Clone)]
pub struct EngineOptions {
    /// Whether command errors abort the session
    pub strict_mode: bool,
    /// Whether CSV exports include the header row
    pub headers: bool,
}

impl EngineOptions {
    pub fn new(strict_mode: bool, headers: bool) -> Self {
        Self {
            strict_mode,
            headers,
        }
    }

    pub fn set_option(&mut self, name: &str, value: &str) -> Result<()> {
        match name {
            "strictmode" => self.strict_mode = value.parse()?,
            "headers" => self.headers = value.parse()?,
            _ => bail!("Unknown option: {}", name),
        }

        Ok(())
    }
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            strict_mode: true,
            headers: true,
        }
    }
}
