//! Fetch command - loads the users once and prints them

use clap::Args;
use tracing::info;

use crate::api::types::UserResponse;
use crate::infrastructure::services::DirectoryService;

use super::{init_logging, load_config};

#[derive(Args, Debug, Default)]
pub struct FetchArgs {
    /// Override the users endpoint
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Print compact JSON instead of pretty-printed
    #[arg(long)]
    pub compact: bool,
}

/// Load the directory and print the users as JSON on stdout
pub async fn run(args: FetchArgs) -> anyhow::Result<()> {
    let mut config = load_config();
    if let Some(endpoint) = args.endpoint {
        config.source.endpoint = endpoint;
    }
    init_logging(&config);

    let state = crate::create_app_state(&config)?;
    let output = load_and_render(&state.directory, args.compact).await?;
    println!("{}", output);

    Ok(())
}

/// Load once and render the list; a failed load is an error
pub async fn load_and_render(
    directory: &DirectoryService,
    compact: bool,
) -> anyhow::Result<String> {
    let status = directory.load().await?;
    info!(status = ?status, "Users loaded");

    let users: Vec<UserResponse> = directory
        .users()
        .await
        .into_iter()
        .map(UserResponse::from)
        .collect();

    let output = if compact {
        serde_json::to_string(&users)?
    } else {
        serde_json::to_string_pretty(&users)?
    };

    Ok(output)
}
