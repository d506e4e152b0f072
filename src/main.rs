//! Portfolio page - Dioxus app.
//! Browser: dx serve. Desktop: cargo run --features desktop.

#[cfg(any(all(target_arch = "wasm32", feature = "web"), feature = "desktop"))]
fn main() {
    use portfolio_frontend::app::App;
    portfolio_frontend::logging::init();
    dioxus::launch(App);
}

// `cargo run` on a native host with only the web feature: hand over to the
// Dioxus CLI, which builds the wasm bundle and serves it.
#[cfg(all(feature = "web", not(feature = "desktop"), not(target_arch = "wasm32")))]
fn main() -> anyhow::Result<()> {
    use anyhow::Context;
    portfolio_frontend::logging::init();
    tracing::info!("starting dx serve");
    let status = std::process::Command::new("dx")
        .arg("serve")
        .status()
        .context("could not run 'dx serve'; install the Dioxus CLI: cargo install dioxus-cli")?;
    if !status.success() {
        anyhow::bail!("dx serve exited with {status}");
    }
    Ok(())
}

#[cfg(not(any(feature = "web", feature = "desktop")))]
fn main() {
    eprintln!("portfolio-frontend was built without a UI; enable the `web` or `desktop` feature.");
    std::process::exit(1);
}
