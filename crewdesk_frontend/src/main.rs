use anyhow::{anyhow, Result};

fn main() -> Result<()> {
    env_logger::init();
    crewdesk_frontend::run_frontend().map_err(|err| anyhow!(err.to_string()))
}
