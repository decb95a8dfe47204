use env_logger::Env;

/// Initializes logging. `RUST_LOG` overrides the default `warn` filter.
pub fn init() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
}
