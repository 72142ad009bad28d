use polysketch::hotkeys::Hotkeys;
use polysketch::{run_polysketch, SketchConfig};
use tracing::warn;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("polysketch=info")),
        )
        .init();

    let hotkeys = Hotkeys::load_or_default().unwrap_or_else(|e| {
        warn!(error = %e, "ignoring unreadable hotkeys file");
        Hotkeys::default()
    });

    let cfg = SketchConfig {
        hotkeys,
        ..Default::default()
    };
    run_polysketch(cfg).map_err(|e| anyhow::anyhow!("failed to run sketch window: {e}"))
}
