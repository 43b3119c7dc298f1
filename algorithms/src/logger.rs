use std::sync::Once;

use env_logger::Builder;
use log::LevelFilter;

static INIT: Once = Once::new();

/// Install the `env_logger` backend once. `RUST_LOG` overrides the defaults.
pub fn initialize_logger() {
    INIT.call_once_force(|_| {
        let mut builder = default_builder();
        builder.parse_default_env();

        // Another logger may already be installed (tests, embedding binaries).
        let _ = builder.try_init();
    });
}

/// Info everywhere; `data_structures` also emits its debug messages
/// (table construction, duplicate keys).
fn default_builder() -> Builder {
    let mut builder = Builder::new();
    builder
        .filter_level(LevelFilter::Info)
        .filter_module("algorithms::data_structures", LevelFilter::Debug)
        .format_timestamp_millis();
    builder
}
