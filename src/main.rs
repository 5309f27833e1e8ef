mod cli;

use clap::Parser;
use cli::{Cli, Commands};
use log::info;
use sapling::{Config, Edit, Result, SaplingClient, SaplingError};
use std::process::ExitCode;
use tokio::io::AsyncReadExt;

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();
    match run(cli.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Commands) -> Result<()> {
    let config = Config::from_env()?;
    info!("Using Sapling at {}", config.url_endpoint());
    let client = SaplingClient::with_config(config)?;

    match command {
        Commands::Edits { text, session_id } => {
            let text = if text == "-" { read_stdin().await? } else { text };
            let edits = client.edits(&text, session_id.as_deref()).await?;
            println!("{}", render(&edits)?);
        }
        Commands::Accept {
            edit_id,
            session_id,
        } => {
            client.accept(&edit_id, session_id.as_deref()).await?;
            info!("Accepted edit {edit_id}");
        }
        Commands::Reject {
            edit_id,
            session_id,
        } => {
            client.reject(&edit_id, session_id.as_deref()).await?;
            info!("Rejected edit {edit_id}");
        }
    }

    Ok(())
}

async fn read_stdin() -> Result<String> {
    let mut text = String::new();
    tokio::io::stdin().read_to_string(&mut text).await?;
    Ok(text)
}

fn render(edits: &[Edit]) -> Result<String> {
    serde_json::to_string_pretty(edits).map_err(SaplingError::Encode)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_empty_edits() {
        assert_eq!(render(&[]).unwrap(), "[]");
    }

    #[test]
    fn test_encode_error_is_not_reported_as_decode() {
        let source = serde_json::from_str::<u8>("x").unwrap_err();
        let err = SaplingError::Encode(source);
        assert!(err.to_string().starts_with("failed to encode output"));
    }
}
