//! Serve command: start the web UI.

use console::style;

use crate::config::Settings;
use crate::server;

pub async fn cmd_serve(settings: &Settings, bind: &str) -> anyhow::Result<()> {
    println!(
        "{} http://{}",
        style("Starting web UI at").bold(),
        bind
    );
    server::serve(settings, bind).await
}
