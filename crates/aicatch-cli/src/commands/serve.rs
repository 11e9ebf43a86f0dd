//! `aicatch serve` command.
//!
//! Starts the catalog HTTP server: JSON API under `/api/tools`, the
//! public browse page at `/`, and health probes.

use clap::Args;

use aicatch_config::{loader, AicatchConfig};
use aicatch_transport_http::{AccessControl, AppState, HttpServer};
use aicatch_types::{AccessPolicy, ThemeMode};

use crate::shared;

/// Start the catalog HTTP server.
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Interface to bind (overrides server.host).
    #[arg(long)]
    pub host: Option<String>,
    /// TCP port (overrides server.port).
    #[arg(long)]
    pub port: Option<u16>,
    /// Bearer token required by protected routes (overrides auth.token).
    #[arg(long)]
    pub token: Option<String>,
    /// Access policy: open, protect-mutations or protect-all.
    #[arg(long)]
    pub policy: Option<AccessPolicy>,
    /// Database path (overrides store.database_path).
    #[arg(long)]
    pub db: Option<String>,
    /// Browse page theme: light, dark or auto.
    #[arg(long)]
    pub theme: Option<ThemeMode>,
}

/// Applies command-line overrides on top of the loaded configuration.
fn effective_config(args: &ServeArgs, config: &AicatchConfig) -> anyhow::Result<AicatchConfig> {
    let mut config = config.clone();
    if let Some(host) = &args.host {
        config.server.host = host.clone();
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(token) = &args.token {
        config.auth.token = Some(token.clone());
    }
    if let Some(policy) = args.policy {
        config.auth.policy = policy;
    }
    if let Some(db) = &args.db {
        config.store.database_path = db.clone();
    }
    if let Some(theme) = args.theme {
        config.ui.theme = theme;
    }
    loader::validate(&config)?;
    Ok(config)
}

/// Executes the serve command.
pub async fn execute(args: &ServeArgs, config: &AicatchConfig) -> anyhow::Result<()> {
    let config = effective_config(args, config)?;
    let repo = shared::open_repository(&config.store.database_path)?;

    let state = AppState::new(repo)
        .with_access(AccessControl::new(
            config.auth.policy,
            config.auth.token.clone(),
        ))
        .with_theme(config.ui.theme);
    let server = HttpServer::new(state, config.server.bind_address());

    tokio::select! {
        result = server.run() => {
            result.map_err(|e| anyhow::anyhow!("server error: {e}"))?;
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("shutdown signal received");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_overrides() -> ServeArgs {
        ServeArgs {
            host: None,
            port: None,
            token: None,
            policy: None,
            db: None,
            theme: None,
        }
    }

    #[test]
    fn config_values_apply_without_flags() {
        let config = AicatchConfig::default();
        let effective = effective_config(&no_overrides(), &config).expect("valid");
        assert_eq!(effective.server.bind_address(), config.server.bind_address());
        assert_eq!(effective.auth.policy, AccessPolicy::Open);
    }

    #[test]
    fn flags_override_config() {
        let args = ServeArgs {
            host: Some("0.0.0.0".into()),
            port: Some(8080),
            token: Some("s3cret".into()),
            policy: Some(AccessPolicy::ProtectAll),
            db: Some("other.db".into()),
            theme: Some(ThemeMode::Dark),
        };
        let effective = effective_config(&args, &AicatchConfig::default()).expect("valid");
        assert_eq!(effective.server.bind_address(), "0.0.0.0:8080");
        assert_eq!(effective.auth.policy, AccessPolicy::ProtectAll);
        assert_eq!(effective.store.database_path, "other.db");
        assert_eq!(effective.ui.theme, ThemeMode::Dark);
    }

    #[test]
    fn protected_policy_needs_a_token() {
        let args = ServeArgs {
            policy: Some(AccessPolicy::ProtectMutations),
            ..no_overrides()
        };
        assert!(effective_config(&args, &AicatchConfig::default()).is_err());
    }

    #[tokio::test]
    async fn serve_fails_when_port_is_taken() {
        let taken = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
        let port = taken.local_addr().expect("addr").port();
        let dir = tempfile::tempdir().expect("tmp");
        let db = dir.path().join("serve.db").to_str().expect("u").to_string();
        let args = ServeArgs {
            host: Some("127.0.0.1".into()),
            port: Some(port),
            db: Some(db),
            ..no_overrides()
        };
        assert!(execute(&args, &AicatchConfig::default()).await.is_err());
    }
}
