//! Nexus Digital intranet landing page, rendered in the terminal.

mod config;
mod content;
mod tui;

use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use is_terminal::IsTerminal;

use config::Config;
use tui::Runtime;
use tui::apps::landing::{LandingApp, LandingParams};
use tui::state::{RuntimeConfig, TerminalScheme, ThemeMode};
use tui::widgets::TriggerZone;

#[derive(Parser, Debug)]
#[command(
    name = "nexus-cli",
    version,
    about = "Terminal rendition of the Nexus Digital intranet landing page"
)]
struct Cli {
    /// Theme for this session (light, dark or system); overrides the
    /// persisted preference
    #[arg(long, value_enum)]
    theme: Option<ThemeMode>,

    /// Disable reveal and entrance animations
    #[arg(long)]
    no_animation: bool,

    /// Animation frame interval in milliseconds
    #[arg(long, default_value_t = 80)]
    tick_rate: u64,

    /// Events carousel auto-advance interval in seconds (0 disables it)
    #[arg(long, default_value_t = 8)]
    auto_advance: u64,

    /// Lower bound of the reveal trigger zone (visibility ratio)
    #[arg(long, default_value_t = 0.2)]
    reveal_lower: f64,

    /// Upper bound of the reveal trigger zone (visibility ratio)
    #[arg(long, default_value_t = 0.8)]
    reveal_upper: f64,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let stored_theme = cli.theme.or(Config::load_or_default().theme_mode);

    // Animations require a real terminal; content never depends on them
    let animations = !cli.no_animation && std::io::stdout().is_terminal();

    let runtime_config = RuntimeConfig {
        animations,
        tick_rate: Duration::from_millis(cli.tick_rate.max(16)),
        auto_advance: (cli.auto_advance > 0).then(|| Duration::from_secs(cli.auto_advance)),
        trigger_zone: TriggerZone::new(cli.reveal_lower, cli.reveal_upper),
    };

    let params = LandingParams {
        config: runtime_config,
        stored_theme,
        system: Box::new(TerminalScheme),
    };
    let mut runtime = Runtime::<LandingApp>::new(params);
    runtime.run().await
}
