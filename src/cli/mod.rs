pub mod bin2h;
pub mod unzip;

pub use bin2h::*;
pub use unzip::*;

use std::sync::OnceLock;
use tracing_subscriber::EnvFilter;

/// Version info from build.rs
const VERSION: &str = env!("SABA_TOOLS_VERSION");
const PROFILE: &str = env!("SABA_TOOLS_PROFILE");
const GIT_HASH: &str = env!("SABA_TOOLS_GIT_HASH");

/// Combined version string shared by both binaries
pub fn version() -> &'static str {
    static VERSION_STRING: OnceLock<String> = OnceLock::new();
    VERSION_STRING.get_or_init(|| format!("{} {} ({})", PROFILE, VERSION, GIT_HASH))
}

/// Install the stderr log subscriber, filtered by `RUST_LOG` (default `warn`)
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
