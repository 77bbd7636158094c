//! CLI entry point for meshdash.

mod cli;

use clap::Parser;
use meshdash::browser::SystemBrowser;
use meshdash::config::load_config;
use meshdash::dashboard::{run_dashboard, DashboardOptions};
use meshdash::kubectl::Kubectl;
use meshdash::logging::init_logging;
use meshdash::render::Renderer;

#[tokio::main]
async fn main() {
    let args = cli::Args::parse();

    let loaded = match load_config(args.config.as_deref()) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };
    let mut config = loaded.config;
    args.apply_to(&mut config);

    init_logging(&config.logging.level);
    tracing::debug!(source = ?loaded.source, "configuration loaded");

    let renderer = Renderer::new(config.display.color);

    match &args.command {
        cli::Command::Dashboard(_) => {
            let options = DashboardOptions::from_config(&config);
            let mut kubectl = Kubectl::new(config.proxy.kubectl.clone());
            if let Err(e) = run_dashboard(&options, &mut kubectl, &SystemBrowser, &renderer).await
            {
                renderer.error(&e.to_string());
                std::process::exit(1);
            }
        }
    }
}
