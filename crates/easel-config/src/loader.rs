use std::path::Path;

use crate::Config;

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Reads the file, expands `{{ env.VAR }}` placeholders, then
    /// deserializes and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, environment variable
    /// expansion fails, TOML parsing fails, or validation fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

        Self::parse(&raw)
    }

    /// Parse configuration from TOML text
    ///
    /// # Errors
    ///
    /// Returns an error if environment variable expansion, TOML parsing, or
    /// validation fails
    pub fn parse(raw: &str) -> anyhow::Result<Self> {
        let expanded =
            crate::env::expand_env(raw).map_err(|e| anyhow::anyhow!("config variable expansion failed: {e}"))?;

        let config: Self = toml::from_str(&expanded).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate that the configuration is internally consistent
    ///
    /// # Errors
    ///
    /// Returns an error if a route path is malformed, the health route
    /// collides with the image route, or the timeout is unusable
    pub fn validate(&self) -> anyhow::Result<()> {
        self.validate_routes()?;
        self.validate_timeout()?;
        Ok(())
    }

    fn validate_routes(&self) -> anyhow::Result<()> {
        if !self.imagegen.path.starts_with('/') {
            anyhow::bail!("imagegen.path must start with '/': `{}`", self.imagegen.path);
        }

        let health = &self.server.health;
        if !health.enabled {
            return Ok(());
        }

        if !health.path.starts_with('/') {
            anyhow::bail!("server.health.path must start with '/': `{}`", health.path);
        }

        if health.path == self.imagegen.path {
            anyhow::bail!("server.health.path and imagegen.path must differ");
        }

        Ok(())
    }

    fn validate_timeout(&self) -> anyhow::Result<()> {
        if self.imagegen.timeout()?.is_zero() {
            anyhow::bail!("imagegen.timeout must be greater than zero");
        }

        Ok(())
    }
}
