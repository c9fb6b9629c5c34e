//! Logger setup shared by the binaries.

/// Initialise `env_logger` on stderr.
///
/// Defaults to `warn` so stdout carries only program output; `RUST_LOG`
/// overrides the filter.
pub fn init() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .try_init();
}
