mod cmd;
pub mod conf;
pub mod pkg;
mod prelude;

use tracing_subscriber::EnvFilter;

use crate::prelude::Result;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    cmd::run()?;
    Ok(())
}
