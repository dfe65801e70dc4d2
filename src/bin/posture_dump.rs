//! Prints the host's posture record as JSON, for manual inspection and
//! for wiring into a fact-collection runtime via exec.

use anyhow::{bail, Result};

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let Some(record) = cis_posture::collect() else {
        bail!("unsupported platform: posture collection requires Linux");
    };

    println!("{}", serde_json::to_string_pretty(&record)?);
    Ok(())
}
