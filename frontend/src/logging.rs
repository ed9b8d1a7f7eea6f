// Routes `tracing` events from the roster state machine to the browser console

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use tracing_web::MakeWebConsoleWriter;

/// Installs the global subscriber. Fails if one is already set.
pub fn init_tracing() -> Result<(), TryInitError> {
    // wasm32 has no `SystemTime`, so events carry no timestamp.
    let console_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(MakeWebConsoleWriter::new());

    tracing_subscriber::registry()
        .with(LevelFilter::INFO)
        .with(console_layer)
        .try_init()
}
