use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use network_client::{
    models::{FollowView, PageSnapshot, PostId},
    services::ConsoleNotifier,
    utils::{csrf::extract_csrf_token, render::Renderer},
    AppState, Config,
};

#[derive(Parser)]
#[command(name = "network")]
#[command(about = "Compose, like, edit and follow on a Network server", long_about = None)]
struct Args {
    /// Page snapshot JSON, read before the command and written back afterwards
    #[arg(short, long, value_name = "FILE")]
    page: Option<PathBuf>,

    /// Server-rendered page to read the csrf-token meta tag from
    #[arg(long, value_name = "FILE")]
    page_html: Option<PathBuf>,

    /// Logged-in username (overrides the snapshot)
    #[arg(long)]
    viewer: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create a new post
    Compose { text: String },
    /// Toggle the like on a post
    Like { post_id: PostId },
    /// Replace the text of one of your posts
    Edit { post_id: PostId, text: String },
    /// Toggle following the profile's user
    Follow {
        /// Profile username when the snapshot has none
        username: Option<String>,
        /// Whether the viewer currently follows the user
        #[arg(long)]
        following: bool,
        #[arg(long, default_value_t = 0)]
        followers: u64,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // 加载配置
    let mut config = Config::from_env()?;

    // 初始化日志
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(config.log_level.clone()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    if let Some(path) = &args.page_html {
        let html = std::fs::read_to_string(path)?;
        config = config.with_csrf_token(extract_csrf_token(&html)?);
    }

    let mut snapshot = load_snapshot(args.page.as_deref())?;
    if let Some(viewer) = args.viewer.clone() {
        snapshot.viewer = Some(viewer);
    }
    if let Command::Follow { username: Some(username), following, followers } = &args.command {
        snapshot.profile = Some(FollowView {
            username: username.clone(),
            following: *following,
            num_followers: *followers,
        });
    }

    info!("Using server {}", config.base_url);
    let state = AppState::new(config, snapshot, Arc::new(ConsoleNotifier))?;
    let renderer = Renderer::new()?;

    let succeeded = match &args.command {
        Command::Compose { text } => {
            state.compose_service.toggle_form();
            state.compose_service.set_text(text);
            match state.compose_service.submit().await {
                Ok(Some(post_id)) => {
                    print_post(&state, &renderer, post_id)?;
                    true
                }
                Ok(None) => {
                    warn!("Nothing to post");
                    false
                }
                Err(_) => false,
            }
        }
        Command::Like { post_id } => match state.like_service.toggle(*post_id).await {
            Ok(Some(_)) => {
                print_post(&state, &renderer, *post_id)?;
                true
            }
            Ok(None) => {
                warn!("Like button for post {} is disabled", post_id);
                false
            }
            Err(_) => false,
        },
        Command::Edit { post_id, text } => {
            state.edit_service.begin(*post_id)?;
            state.edit_service.set_draft(*post_id, text)?;
            let saved = state.edit_service.save(*post_id).await;
            print_post(&state, &renderer, *post_id)?;
            matches!(saved, Ok(Some(_)))
        }
        Command::Follow { .. } => {
            let result = state.follow_service.toggle().await;
            if let Some(profile) = state.page.read().profile.as_ref() {
                println!("{}", renderer.follow_control(profile)?);
            }
            matches!(result, Ok(Some(_)))
        }
    };

    if let Some(path) = &args.page {
        std::fs::write(path, serde_json::to_string_pretty(&state.snapshot())?)?;
    }

    Ok(if succeeded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn load_snapshot(path: Option<&Path>) -> anyhow::Result<PageSnapshot> {
    match path {
        Some(path) if path.exists() => {
            let raw = std::fs::read_to_string(path)?;
            Ok(serde_json::from_str(&raw)?)
        }
        _ => Ok(PageSnapshot::default()),
    }
}

fn print_post(state: &AppState, renderer: &Renderer, post_id: PostId) -> anyhow::Result<()> {
    if let Some(card) = state.page.read().post(post_id) {
        println!("{}", renderer.post_card(card)?);
    }
    Ok(())
}
