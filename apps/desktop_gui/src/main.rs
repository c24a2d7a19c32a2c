use std::sync::Arc;

use anyhow::anyhow;
use clap::Parser;
use client_core::{HttpContactClient, LandingView};
use eframe::egui;
use shared::landing;

mod backend_bridge;
mod ui;

use backend_bridge::runtime::BackendRuntime;
use ui::LandingApp;

#[derive(Debug, Parser)]
#[command(name = "desktop_gui", about = "AgentEX landing page shell")]
struct Args {
    /// Base URL of the contact server.
    #[arg(long, default_value = "http://127.0.0.1:3000")]
    server_url: String,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let args = Args::parse();
    let transport = HttpContactClient::new(&args.server_url)?;
    tracing::info!(endpoint = %transport.endpoint(), "contact endpoint configured");

    let backend = BackendRuntime::start()?;
    let view = LandingView::new(Arc::new(transport), backend.handle());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(landing::PAGE_TITLE)
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([720.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        landing::PAGE_TITLE,
        options,
        Box::new(move |_cc| Ok(Box::new(LandingApp::new(view)))),
    )
    .map_err(|err| anyhow!("desktop shell exited with error: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_url_defaults_to_local_server() {
        let args = Args::try_parse_from(["desktop_gui"]).expect("args");
        assert_eq!(args.server_url, "http://127.0.0.1:3000");
    }

    #[test]
    fn server_url_flag_overrides_default() {
        let args = Args::try_parse_from(["desktop_gui", "--server-url", "https://agentex.com"])
            .expect("args");
        assert_eq!(args.server_url, "https://agentex.com");
    }
}
