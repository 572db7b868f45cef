//! HTTP server command

use anyhow::{Context, Result};
use clap::Parser;
use std::net::SocketAddr;

use ironctl_core::IronConfig;
use ironctl_server::{run_server, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to (default from config, else 127.0.0.1:3040)
    #[arg(long, short = 'b', env = "IRONCTL_BIND")]
    pub bind: Option<SocketAddr>,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,
}

impl ServeArgs {
    /// Flags win over the config file
    fn server_config(&self, config: &IronConfig) -> ServerConfig {
        let mut server = ServerConfig::from(&config.server);
        if let Some(bind) = self.bind {
            server.bind_addr = bind;
        }
        if self.cors_permissive {
            server.cors_permissive = true;
        }
        server
    }
}

/// Run the HTTP server (blocks until shutdown)
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let config = IronConfig::load().context("Failed to load config")?;
    let server = args.server_config(&config);

    tracing::info!("Starting ironctl server on {}", server.bind_addr);

    run_server(server).await.context("Server error")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_config() {
        let config = IronConfig::default();
        let args = ServeArgs {
            bind: Some("0.0.0.0:9000".parse().unwrap()),
            cors_permissive: true,
        };

        let server = args.server_config(&config);
        assert_eq!(server.bind_addr.port(), 9000);
        assert!(server.cors_permissive);
    }

    #[test]
    fn config_used_without_flags() {
        let config = IronConfig::default();
        let args = ServeArgs {
            bind: None,
            cors_permissive: false,
        };

        let server = args.server_config(&config);
        assert_eq!(server.bind_addr, config.server.bind);
        assert!(!server.cors_permissive);
    }
}
