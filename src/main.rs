//! Otter Deploy - release packaging for Otter Browser.
//!
//! This binary turns a built `otter-browser` executable plus its resources and
//! the Qt runtime into an AppImage (Linux) or an installer with portable
//! archives (Windows).

use std::process;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Run CLI and get exit code
    let exit_code = match otter_deploy::cli::run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {}", e);
            1
        }
    };

    process::exit(exit_code);
}
