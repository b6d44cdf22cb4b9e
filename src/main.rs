use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use log::info;

use todolist::config::Config;
use todolist::logger;
use todolist::service::ToDoListService;
use todolist::storage::LocalStorage;
use todolist::web::{self, AppState};

const USAGE: &str = "Usage: todolist [--config <path>] [--generate-config [path]]";

/// What the command line asked for.
enum Command {
    Serve { config_path: Option<PathBuf> },
    GenerateConfig { path: Option<PathBuf> },
    Help,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Command> {
    let mut config_path = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" | "-c" => {
                let path = args.next().context("--config requires a path")?;
                config_path = Some(PathBuf::from(path));
            }
            "--generate-config" => {
                return Ok(Command::GenerateConfig {
                    path: args.next().map(PathBuf::from),
                });
            }
            "--help" | "-h" => return Ok(Command::Help),
            other => anyhow::bail!("Unknown argument '{}'\n{}", other, USAGE),
        }
    }

    Ok(Command::Serve { config_path })
}

#[tokio::main]
async fn main() -> Result<()> {
    let config_path = match parse_args(std::env::args().skip(1))? {
        Command::Help => {
            println!("{}", USAGE);
            return Ok(());
        }
        Command::GenerateConfig { path } => {
            let path = match path {
                Some(path) => path,
                None => Config::get_default_config_path()?,
            };
            return Config::generate_default_config(path);
        }
        Command::Serve { config_path } => config_path,
    };

    let config = match config_path {
        Some(path) => Config::load_from_file(path)?,
        None => Config::load()?,
    };
    config.validate()?;

    logger::init(&config.logging)?;

    let storage = LocalStorage::new(config.database.effective_url()).await?;
    if !storage.has_data().await? {
        info!("Store is empty");
    }

    let service = Arc::new(ToDoListService::new(&storage));
    let state = AppState::new(service, config.display.page_size);

    web::serve(state, config.socket_addr()?).await
}
