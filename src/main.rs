use std::path::PathBuf;

use clap::Parser;
use kiss3d::light::Light;
use kiss3d::window::Window;
use tracing_subscriber::EnvFilter;

use neo_orrery::feed::{self, FeedConfig, FeedHandle};
use neo_orrery::gui::Simulation;
use neo_orrery::model::catalog;

#[derive(Debug, Parser)]
#[command(name = "neo-orrery")]
#[command(about = "Interactive 3D solar-system and near-Earth-object viewer")]
struct Args {
    /// Directory holding the body texture images.
    #[arg(long, default_value = "textures")]
    texture_dir: PathBuf,

    /// Start of the near-Earth-object feed window (YYYY-MM-DD).
    #[arg(long, default_value = "2024-10-01")]
    feed_start: String,

    /// End of the near-Earth-object feed window (YYYY-MM-DD).
    #[arg(long, default_value = "2024-10-05")]
    feed_end: String,

    /// NASA API key for the feed request.
    #[arg(long, default_value = "DEMO_KEY")]
    api_key: String,

    /// Skip the startup feed fetch entirely.
    #[arg(long)]
    no_feed: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    // Fire-and-forget: the render loop polls for the result each frame and
    // nothing below waits on it.
    let feed = if args.no_feed {
        FeedHandle::disabled()
    } else {
        feed::spawn_fetch(FeedConfig {
            endpoint: feed::DEFAULT_ENDPOINT.to_owned(),
            start_date: args.feed_start,
            end_date: args.feed_end,
            api_key: args.api_key,
        })
    };

    let mut rng = rand::thread_rng();
    let orrery = catalog::standard_orrery(&mut rng);

    let mut window = Window::new_with_size("Near-Earth Object Viewer", 1280, 800);
    window.set_light(Light::StickToCamera);
    window.set_background_color(0.0, 0.0, 0.02);

    let simulation = Simulation::new(orrery, feed, &mut window, &args.texture_dir);
    window.render_loop(simulation);
}
