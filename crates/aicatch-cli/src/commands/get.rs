//! `aicatch get` command.

use clap::Args;

use aicatch_config::AicatchConfig;
use aicatch_console::CatalogApi;
use aicatch_types::ToolId;

use crate::{output, shared};

/// Show one tool.
#[derive(Debug, Args)]
pub struct GetArgs {
    /// Tool ID.
    pub id: String,
    #[command(flatten)]
    pub client: shared::ClientArgs,
}

/// Executes the get command.
pub async fn execute(args: &GetArgs, config: &AicatchConfig) -> anyhow::Result<()> {
    let id = ToolId::new(&args.id).map_err(|e| anyhow::anyhow!("invalid tool ID: {e}"))?;
    let client = shared::build_client(&args.client, config)?;
    let tool = client
        .get(&id)
        .await
        .map_err(|e| shared::report(&format!("failed to get tool {id}"), e))?;
    output::print_tool(&tool);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::spawn_server;
    use aicatch_registry::ToolRepository;
    use aicatch_types::{ToolDraft, ToolFields};

    #[tokio::test]
    async fn get_existing_tool() {
        let (client, repo) = spawn_server().await;
        let tool = repo
            .create(&ToolDraft::from(ToolFields::new("A", "B", "C", "https://d.example")))
            .await
            .expect("seed");
        let args = GetArgs {
            id: tool.id.to_string(),
            client,
        };
        assert!(execute(&args, &AicatchConfig::default()).await.is_ok());
    }

    #[tokio::test]
    async fn get_missing_tool_fails() {
        let (client, _repo) = spawn_server().await;
        let args = GetArgs {
            id: "ghost".into(),
            client,
        };
        let err = execute(&args, &AicatchConfig::default()).await.unwrap_err();
        assert!(err.to_string().contains("Tool not found"));
    }

    #[tokio::test]
    async fn blank_id_is_rejected() {
        let args = GetArgs {
            id: " ".into(),
            client: shared::ClientArgs::default(),
        };
        let err = execute(&args, &AicatchConfig::default()).await.unwrap_err();
        assert!(err.to_string().contains("invalid tool ID"));
    }
}
