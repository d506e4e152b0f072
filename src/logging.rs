//! Tracing setup. Browser: console output plus panic hook. Native:
//! fmt subscriber filtered by `RUST_LOG`.

#[cfg(target_arch = "wasm32")]
pub fn init() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
}

#[cfg(not(target_arch = "wasm32"))]
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "portfolio_frontend=debug".into()),
        )
        .try_init();
}
