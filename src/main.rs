//! Replays scripted drags against a headless frame and logs each settled
//! view as JSON.
//!
//! ```text
//! RUST_LOG=info feedframe-replay script.toml
//! ```
//!
//! A script names the frame size, the feed, the viewer's circles, and a
//! list of drags. Each drag is a list of cumulative samples; the last one
//! is the release.

use std::error::Error;
use std::path::{Path, PathBuf};

use feedframe::camera::CameraSignal;
use feedframe::engine::FeedFrame;
use feedframe::feed::circles::{circle_title, Circle};
use feedframe::feed::FeedItem;
use feedframe::input::{DragEvent, DragSample};
use feedframe::options::Options;
use glam::Vec2;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct Script {
    frame_size: f32,
    /// Options preset, relative to the script.
    #[serde(default)]
    options: Option<PathBuf>,
    #[serde(default)]
    feed: Vec<FeedItem>,
    #[serde(default)]
    circles: Vec<Circle>,
    #[serde(default)]
    drags: Vec<Vec<ScriptSample>>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
struct ScriptSample {
    #[serde(default)]
    dx: f32,
    dy: f32,
    #[serde(default)]
    vx: f32,
    #[serde(default)]
    vy: f32,
}

impl From<ScriptSample> for DragSample {
    fn from(s: ScriptSample) -> Self {
        Self {
            delta: Vec2::new(s.dx, s.dy),
            velocity: Vec2::new(s.vx, s.vy),
        }
    }
}

fn load_script(path: &Path) -> Result<Script, Box<dyn Error>> {
    let content = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

fn run(path: &Path) -> Result<(), Box<dyn Error>> {
    let script = load_script(path)?;
    let options = match &script.options {
        Some(preset) => {
            let dir = path.parent().unwrap_or_else(|| Path::new("."));
            Options::load(&dir.join(preset))?
        }
        None => Options::default(),
    };

    let mut frame = FeedFrame::new(
        options,
        script.frame_size,
        CameraSignal::ready(),
    )?;
    frame.set_feed(script.feed);

    for (n, drag) in script.drags.iter().enumerate() {
        let Some((release, moves)) = drag.split_last() else {
            continue;
        };
        let _ = frame.handle_drag(DragEvent::Start);
        for sample in moves {
            let _ = frame.handle_drag(DragEvent::Move((*sample).into()));
        }
        let command = frame.handle_drag(DragEvent::End((*release).into()));
        frame.settle();
        frame.camera_mut().mark_ready();

        let title = circle_title(frame.current_item(), &script.circles);
        log::info!("drag {n}: {command:?} -> \"{title}\"");
        log::info!("{}", serde_json::to_string(&frame.view())?);
    }
    Ok(())
}

fn main() {
    env_logger::init();

    let Some(path) = std::env::args().nth(1) else {
        log::error!("Usage: feedframe-replay <script.toml>");
        std::process::exit(1);
    };

    if let Err(e) = run(Path::new(&path)) {
        log::error!("{e}");
        std::process::exit(1);
    }
}
