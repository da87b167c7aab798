use std::path::PathBuf;

mod add;
mod config;
mod list;
mod locale;
mod menu;
mod prompt;
mod remove;
mod terminal;

use clap::ArgAction;
use config::Config;
use locale::Locale;
use menu::Menu;

#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// The path to the display configuration file
    #[arg(short, long, default_value = "equip.toml")]
    config: PathBuf,

    /// Override the display locale from the configuration
    #[arg(long, value_enum)]
    locale: Option<Locale>,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        let config = Config::load_or_default(&self.config);
        let locale = self.locale.unwrap_or(config.locale());

        Menu::new(locale).run()
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}
