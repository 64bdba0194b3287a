//! Terminal viewer for the sorting visualizers.
//!
//! Wires one clock, control surface, and run lock to a chosen
//! algorithm driver and animates it with an ANSI text renderer, the
//! way the lesson pages wire theirs to a canvas.

use std::io::{self, Write};

use anyhow::Result;
use clap::{Parser, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lessonviz_core::{
    run_visualizer, AnimationClock, BubbleConfig, BubbleSortVisualizer, ControlSurface, Frame,
    FrameRenderer, RadixConfig, RadixSortVisualizer, RunLock, RunOutcome, StepVisualizer,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Algorithm {
    Bubble,
    Radix,
}

#[derive(Debug, Parser)]
#[command(
    name = "lessonviz-viewer",
    about = "Animated sorting visualizers in the terminal"
)]
struct Args {
    /// Algorithm to animate.
    #[arg(long, value_enum, default_value = "bubble")]
    algorithm: Algorithm,

    /// Number of elements (bars for bubble, cells for radix).
    #[arg(long)]
    size: Option<usize>,

    /// Speed multiplier, quarter steps in [0.25, 4].
    #[arg(long, default_value_t = 1.0)]
    speed: f64,
}

/// Repaints the whole frame on every step.
struct AnsiRenderer;

impl FrameRenderer for AnsiRenderer {
    fn render(&mut self, frame: &Frame) {
        let mut out = String::from("\x1b[2J\x1b[H");
        match &frame.buckets {
            None => {
                for (i, value) in frame.values.iter().enumerate() {
                    let marker = if frame.highlights.contains(&i) { '>' } else { ' ' };
                    out.push(marker);
                    out.push(' ');
                    for _ in 0..*value {
                        out.push('#');
                    }
                    out.push('\n');
                }
            }
            Some(buckets) => {
                for (i, value) in frame.values.iter().enumerate() {
                    if frame.highlights.contains(&i) {
                        out.push_str(&format!("[{value}] "));
                    } else {
                        out.push_str(&format!("{value} "));
                    }
                }
                out.push('\n');
                for (digit, bucket) in buckets.iter().enumerate() {
                    out.push_str(&format!("{digit} |"));
                    for value in bucket {
                        out.push_str(&format!(" {value}"));
                    }
                    out.push('\n');
                }
            }
        }
        print!("{out}");
        let _ = io::stdout().flush();
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    let mut driver: Box<dyn StepVisualizer> = match args.algorithm {
        Algorithm::Bubble => {
            let mut config = BubbleConfig::default();
            if let Some(size) = args.size {
                config.bar_count = size;
            }
            Box::new(BubbleSortVisualizer::new(config))
        }
        Algorithm::Radix => {
            let mut config = RadixConfig::default();
            if let Some(size) = args.size {
                config.size = size;
            }
            Box::new(RadixSortVisualizer::new(config))
        }
    };

    let clock = AnimationClock::new();
    let controls = ControlSurface::new(clock.clone());
    controls.set_speed_from_input(args.speed);
    let lock = RunLock::new();
    let mut renderer = AnsiRenderer;

    tracing::info!(
        algorithm = driver.name(),
        speed = clock.speed(),
        "starting run"
    );
    match run_visualizer(&mut *driver, &clock, &controls, &lock, &mut renderer).await {
        RunOutcome::Completed => tracing::info!("run complete"),
        RunOutcome::Busy => tracing::warn!("another run already held the lock"),
    }

    Ok(())
}
