use std::path::PathBuf;
use std::sync::OnceLock;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use macroquad::prelude::*;

use clipquiz::audio::{AudioDriver, ClipPlayer};
use clipquiz::playlist::ClipLibrary;
use clipquiz::scene::{RoundScene, Scene, SceneTransition, TitleScene};
use clipquiz::util::logging::init_logging;

const TARGET_FRAME_SECONDS: f32 = 1.0 / 60.0;

#[derive(Parser, Debug)]
#[command(name = "clipquiz", about = "Fullscreen sound-guessing party game")]
struct ExecArgs {
    /// Directory to scan for audio clips. Defaults to `sounds/` next to the
    /// executable.
    #[arg(long)]
    sounds_dir: Option<PathBuf>,

    /// Run in a window instead of fullscreen.
    #[arg(long)]
    windowed: bool,

    /// Enable debug logging.
    #[arg(long, short)]
    verbose: bool,

    /// Also write logs to a rolling file in this directory.
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

static ARGS: OnceLock<ExecArgs> = OnceLock::new();

fn args() -> &'static ExecArgs {
    ARGS.get().expect("args not initialized")
}

// Runs before main; macroquad needs the window config up front, so CLI
// parsing happens here and the result is stashed for main.
fn window_conf() -> Conf {
    let parsed = ExecArgs::parse();
    let fullscreen = !parsed.windowed;
    ARGS.set(parsed).expect("args already initialized");
    Conf {
        window_title: "clipquiz".to_owned(),
        window_width: 1280,
        window_height: 720,
        fullscreen,
        ..Default::default()
    }
}

fn default_sounds_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join("sounds")))
        .unwrap_or_else(|| PathBuf::from("sounds"))
}

fn load_title_scene() -> Result<TitleScene> {
    let dir = args().sounds_dir.clone().unwrap_or_else(default_sounds_dir);
    let library = ClipLibrary::scan(&dir)?;
    tracing::info!("loaded {} clips from {}", library.len(), dir.display());

    let mut audio = AudioDriver::new()?;
    let player = ClipPlayer::load(&mut audio, &library)?;
    Ok(TitleScene::new(RoundScene::new(library, audio, player)))
}

#[macroquad::main(window_conf)]
async fn main() {
    if let Err(e) = init_logging(args().log_dir.as_deref(), args().verbose) {
        eprintln!("logging init failed: {e}");
    }

    let title = match load_title_scene() {
        Ok(scene) => scene,
        Err(e) => {
            tracing::error!("startup failed: {e:#}");
            eprintln!("clipquiz: {e:#}");
            std::process::exit(1);
        }
    };

    let mut scenes: Vec<Box<dyn Scene>> = vec![Box::new(title)];
    while let Some(top) = scenes.last_mut() {
        match top.update() {
            SceneTransition::None => {}
            SceneTransition::Push(next) => scenes.push(next),
            SceneTransition::Pop => {
                scenes.pop();
            }
            SceneTransition::Replace(next) => {
                scenes.pop();
                scenes.push(next);
            }
        }

        let Some(top) = scenes.last() else {
            break;
        };
        top.draw();

        // Cap the loop at 60 Hz; vsync alone is display-dependent.
        let frame_time = get_frame_time();
        if frame_time < TARGET_FRAME_SECONDS {
            std::thread::sleep(Duration::from_secs_f32(TARGET_FRAME_SECONDS - frame_time));
        }
        next_frame().await;
    }
}
