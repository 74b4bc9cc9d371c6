//! PIX payload demo.
//!
//! Builds the canonical static BR Code and prints the "copia e cola" text.
//! Feed the printed line to any QR image library to get a scannable code.

use anyhow::Result;
use ironpix::prelude::*;
use tracing::info;

/// Initializes logging for the example.
fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .try_init();
}

fn main() -> Result<()> {
    init_logging();

    let payload = PixPayload::new(
        "42a57095-84f3-4a42-b9fb-d08935c86f47",
        "RENATO MONTEIRO BATISTA",
        "NATAL",
    )
    .with_amount(Amount::coerce("10.00"))
    .with_description("Descricao");

    let encoded = payload.encode()?;
    info!("encoded {} bytes for {}", encoded.len(), payload.merchant_name);

    println!("{encoded}");
    Ok(())
}
