//! Command implementations.

pub mod config;
pub mod lookup;

use ipwho_client::IpwhoClient;

use crate::output::OutputMode;

/// Per-invocation settings shared by lookup commands.
#[derive(Debug, Clone, Default)]
pub struct Context {
    /// API base URL override
    pub api_url: Option<String>,

    /// Output mode
    pub output_mode: OutputMode,
}

impl Context {
    /// Create a client against the configured API base URL.
    pub fn client(&self) -> anyhow::Result<IpwhoClient> {
        let mut builder = IpwhoClient::builder();
        if let Some(url) = &self.api_url {
            builder = builder.base_url(url);
        }
        Ok(builder.build()?)
    }
}
