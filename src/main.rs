// src/main.rs
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, info};

use hand_tracker::config::{PointerMode, TrackerConfig};
use hand_tracker::data::{default_output_dir, EventLog};
use hand_tracker::landmarks::{Hand, LandmarkProvider, SimulatedProvider};
use hand_tracker::metrics::FrameMetrics;
use hand_tracker::pointer::{EnigoPointer, NullPointer, PointerDevice};
use hand_tracker::session::TrackingSession;

#[derive(Parser, Debug)]
#[command(name = "hand_tracker", about = "Hand gesture recognition with pointer control")]
struct Args {
    /// Pointer-control mode: none, anchor-mouse or absolute-mouse
    #[arg(short = 'm', long, default_value = "none")]
    mode: PointerMode,

    /// Hand that drives pointer-control mode
    #[arg(long, default_value = "right")]
    control_hand: Hand,

    /// Frames to run the simulated landmark provider for
    #[arg(long, default_value_t = 300)]
    frames: usize,

    /// Consecutive identical frames before a gesture change is accepted
    #[arg(long, default_value_t = 3)]
    debounce_window: usize,

    /// Openness score a thumb must exceed to count as extended
    #[arg(long, default_value_t = 0.65)]
    thumb_threshold: f64,

    /// Write a per-session CSV of accepted gesture events
    #[arg(long)]
    export: bool,

    /// Where the event log goes; defaults to the documents directory
    #[arg(long)]
    export_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let config = TrackerConfig {
        frames_until_change: args.debounce_window,
        thumb_open_threshold: args.thumb_threshold,
        control_hand: args.control_hand,
        pointer_mode: args.mode,
        ..TrackerConfig::default()
    };

    let device: Box<dyn PointerDevice> = match args.mode {
        PointerMode::None => Box::new(NullPointer),
        _ => Box::new(EnigoPointer::new()?),
    };

    info!(mode = %args.mode, control_hand = %args.control_hand, "starting tracker");

    let mut provider = SimulatedProvider::new(args.frames);
    let mut session = TrackingSession::new(config, device);
    let mut event_log = args
        .export
        .then(|| EventLog::new(args.export_dir.unwrap_or_else(default_output_dir), None));
    let mut metrics = FrameMetrics::new();

    while let Some(frame) = provider.next_frame()? {
        let start = Instant::now();
        let events = session.process_frame(&frame)?;

        for event in &events {
            info!(hand = %event.hand, kind = %event.kind, gesture = %event.gesture, "event");
            if let Some(log) = event_log.as_mut() {
                log.record(session.frame_count(), event);
            }
        }

        metrics.record(start.elapsed().as_secs_f32());
        if session.frame_count() % 30 == 0 {
            debug!(fps = metrics.avg_fps(), "frame rate");
        }
    }

    info!(frames = session.frame_count(), "frame stream ended, shutting down");

    if let Some(log) = event_log {
        if !log.is_empty() {
            let path = log.export_csv()?;
            info!(path = %path.display(), events = log.len(), "event log written");
        }
    }

    Ok(())
}
