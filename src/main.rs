//! Headless demo: autoplays one session and prints the final state as JSON.

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::{Path, PathBuf};

    use anyhow::{Context, Result};
    use clap::Parser;

    use cake_tower::platform::{App, HeadlessScheduler, LogScoreSink, VertexRenderer};
    use cake_tower::sim::{GameState, Viewport, seeded};
    use cake_tower::tuning::Tuning;

    #[derive(Debug, Parser)]
    #[command(name = "cake-tower")]
    #[command(about = "Autoplay a cake tower session and print the final state as JSON")]
    pub struct Args {
        /// Seed for skins and fragment physics
        #[arg(long, default_value_t = 0xCA4E)]
        pub seed: u64,

        /// Stop after this many frames even if the tower still stands
        #[arg(long, default_value_t = 60 * 60)]
        pub max_frames: u64,

        /// JSON balance overrides
        #[arg(long)]
        pub tuning: Option<PathBuf>,

        #[arg(long, default_value_t = 400.0)]
        pub width: f32,

        #[arg(long, default_value_t = 600.0)]
        pub height: f32,
    }

    pub fn load_tuning(path: Option<&Path>) -> Result<Tuning> {
        let Some(path) = path else {
            return Ok(Tuning::default());
        };
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read tuning file {}", path.display()))?;
        let tuning = Tuning::from_json(&json)
            .with_context(|| format!("Rejected tuning file {}", path.display()))?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    pub fn run(args: Args) -> Result<()> {
        let tuning = load_tuning(args.tuning.as_deref())?;
        let viewport = Viewport::new(args.width, args.height);
        anyhow::ensure!(
            viewport.is_valid(),
            "Viewport must be positive, got {}x{}",
            args.width,
            args.height
        );

        let mut app = App::new(
            GameState::new(viewport, tuning),
            seeded(args.seed),
            HeadlessScheduler::default(),
            VertexRenderer::default(),
            LogScoreSink::default(),
        );
        app.set_autoplay(true);
        log::info!("Game initialized with seed: {}", args.seed);

        let mut frames = 0;
        while frames < args.max_frames && app.frame() {
            frames += 1;
        }

        log::info!(
            "Stopped after {frames} frames: score {}, speed {}, {} vertices in last frame",
            app.state.score,
            app.state.speed,
            app.renderer().vertices.len()
        );
        let json = serde_json::to_string_pretty(&app.state).context("Failed to serialize state")?;
        println!("{json}");
        Ok(())
    }

}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use clap::Parser;

    env_logger::init();
    log::info!("Cake Tower (native) starting...");
    native::run(native::Args::parse())
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The web build embeds the library; there is no native loop to run
}
