//! Site config generation
//!
//! The dashboard web app reads its Azure AD registration from a generated
//! `config.js` artifact. During deployment the client and tenant IDs arrive
//! as environment variables and are rendered into the
//! `window.AZURE_CONFIG` object the app expects.

use crate::error::SaveError;
use std::env;
use std::fs;
use std::path::Path;

/// Default output path for the rendered artifact
pub const DEFAULT_CONFIG_PATH: &str = "config.js";

const CLIENT_ID_VAR: &str = "AZURE_CLIENT_ID";
const TENANT_ID_VAR: &str = "AZURE_TENANT_ID";

/// Azure AD app registration values embedded into the web app
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// Application (client) ID, empty for demo mode
    pub client_id: String,
    /// Directory (tenant) ID, empty for demo mode
    pub tenant_id: String,
    /// Skip the configuration modal and go straight to sign-in
    pub auto_init: bool,
}

impl SiteConfig {
    /// Create a config with `auto_init` enabled
    #[inline]
    #[must_use]
    pub fn new(client_id: impl Into<String>, tenant_id: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            tenant_id: tenant_id.into(),
            auto_init: true,
        }
    }

    /// Read the registration from `AZURE_CLIENT_ID` / `AZURE_TENANT_ID`
    ///
    /// Missing variables become empty strings, which the web app treats as
    /// demo mode.
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(
            env::var(CLIENT_ID_VAR).unwrap_or_default(),
            env::var(TENANT_ID_VAR).unwrap_or_default(),
        )
    }

    /// Render the `config.js` artifact
    #[must_use]
    pub fn render(&self) -> String {
        format!(
            "// Auto-generated configuration file\n// DO NOT COMMIT THIS FILE - it's generated during deployment\n\nwindow.AZURE_CONFIG = {{\n    CLIENT_ID: '{client_id}',\n    TENANT_ID: '{tenant_id}',\n    AUTO_INIT: {auto_init}\n}};\n",
            client_id = self.client_id,
            tenant_id = self.tenant_id,
            auto_init = self.auto_init,
        )
    }

    /// Write the rendered artifact to `path`
    ///
    /// # Errors
    /// - `SaveError::Io` if the destination cannot be written
    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<(), SaveError> {
        let path = path.as_ref();
        fs::write(path, self.render()).map_err(|e| SaveError::io_error(path, e))?;
        tracing::debug!("Generated site config at {}", path.display());
        Ok(())
    }
}

/// Mask a credential for console output
///
/// Shows the first 8 characters followed by `...`, or `(empty)` when blank.
#[must_use]
pub fn masked(credential: &str) -> String {
    if credential.is_empty() {
        "(empty)".to_owned()
    } else {
        let prefix: String = credential.chars().take(8).collect();
        format!("{prefix}...")
    }
}
