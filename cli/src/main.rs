mod command;
mod render;
mod settings;

use async_std::io::{self, prelude::BufReadExt, BufReader};
use async_std::stream::StreamExt;
use async_std::task;
use clap::Parser;
use command::{execute, Command, HELP};
use loader::{HomeListing, Loader, LoaderConfig};
use render::{render_episode, render_home, render_player};
use settings::Args;
use state::CurrentState;
use std::sync::Arc;
use tracing::{info, warn};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "podcastr=info,loader=info,state=warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = args.loader_config()?;
    info!(api_url = %config.api_url, "Starting Podcastr");

    task::block_on(run(config))
}

async fn run(config: LoaderConfig) -> anyhow::Result<()> {
    let (current, mut waiter) = CurrentState::new();
    let loader = Loader::new(Arc::clone(&current), config)?;
    let _revalidation = loader.spawn_revalidation();

    let mut home: Option<Arc<HomeListing>> = show_home(&loader).await;

    let player_state = Arc::clone(&current);
    task::spawn(async move {
        let mut last_bar = String::new();
        while waiter.next().await.is_some() {
            let bar = render_player(&player_state.get());
            if bar != last_bar {
                println!("{}", bar);
                last_bar = bar;
            }
        }
    });

    let mut lines = BufReader::new(io::stdin()).lines();
    while let Some(line) = lines.next().await {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                println!("{}", err);
                continue;
            }
        };

        match command {
            Command::List => match loader.home().await {
                Ok(fresh) => {
                    print!("{}", render_home(&fresh));
                    home = Some(fresh);
                }
                Err(err) => println!("{}", err),
            },
            Command::Refresh => {
                if let Some(fresh) = refresh_home(&loader).await {
                    home = Some(fresh);
                }
            }
            Command::Episode(row) => show_episode(&loader, home.as_deref(), row).await,
            Command::State => println!("{}", render_player(&current.get())),
            Command::Help => println!("{}", HELP),
            Command::Quit => break,
            command => {
                if let Some(message) = execute(&*current, home.as_deref(), command) {
                    println!("{}", message);
                }
            }
        }
    }

    Ok(())
}

async fn show_home(loader: &Loader) -> Option<Arc<HomeListing>> {
    match loader.home().await {
        Ok(home) => {
            print!("{}", render_home(&home));
            Some(home)
        }
        Err(err) => {
            println!("{} (try refresh)", err);
            None
        }
    }
}

async fn show_episode(loader: &Loader, home: Option<&HomeListing>, row: usize) {
    let id = match home.and_then(|home| home.get(row)) {
        Some(listing) => listing.id.clone(),
        None => {
            println!("There is no episode {}", row + 1);
            return;
        }
    };

    match loader.episode(&id).await {
        Ok(episode) => print!("{}", render_episode(&episode)),
        Err(err) => {
            warn!(%err, id = %id, "Could not load the episode");
            println!("{}", err);
        }
    }
}

async fn refresh_home(loader: &Loader) -> Option<Arc<HomeListing>> {
    match loader.refresh().await {
        Ok(home) => {
            print!("{}", render_home(&home));
            Some(home)
        }
        Err(err) => {
            warn!(%err, "Refresh failed");
            None
        }
    }
}
