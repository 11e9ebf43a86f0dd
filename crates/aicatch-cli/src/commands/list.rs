//! `aicatch list` command.

use clap::Args;

use aicatch_config::AicatchConfig;
use aicatch_console::CatalogApi;

use crate::{output, shared};

/// List every tool in the catalog.
#[derive(Debug, Args)]
pub struct ListArgs {
    #[command(flatten)]
    pub client: shared::ClientArgs,
}

/// Executes the list command.
pub async fn execute(args: &ListArgs, config: &AicatchConfig) -> anyhow::Result<()> {
    let client = shared::build_client(&args.client, config)?;
    let tools = client
        .list()
        .await
        .map_err(|e| shared::report("failed to load tools", e))?;

    if tools.is_empty() {
        output::print_info("The catalog is empty.");
        return Ok(());
    }
    output::print_tool_table(&tools);
    println!();
    println!("{} tool(s)", tools.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::spawn_server;
    use aicatch_registry::ToolRepository;
    use aicatch_types::ToolDraft;

    #[tokio::test]
    async fn list_against_running_server() {
        let (client, repo) = spawn_server().await;
        repo.create(&ToolDraft::from(aicatch_types::ToolFields::new(
            "Alpha",
            "Text",
            "d",
            "https://a.example",
        )))
        .await
        .expect("seed");
        let args = ListArgs { client };
        assert!(execute(&args, &AicatchConfig::default()).await.is_ok());
    }

    #[tokio::test]
    async fn list_fails_when_server_is_down() {
        let args = ListArgs {
            client: shared::ClientArgs {
                url: Some("http://127.0.0.1:1".into()),
                token: None,
            },
        };
        assert!(execute(&args, &AicatchConfig::default()).await.is_err());
    }
}
