//! Main application entry point (native).

#[cfg(feature = "native")]
fn main() {
    env_logger::init();
    log::info!("Starting NumTrace");

    pollster::block_on(numtrace_app::App::run());
}

#[cfg(not(feature = "native"))]
fn main() {
    eprintln!("Native feature not enabled. Use `cargo run --features native`");
}
