//! Gateway configuration from the environment.
//!
//! Missing or empty variables are a startup error; the client refuses to
//! assemble with empty credentials.

use anyhow::{bail, Context};
use std::env;

use ti_core::config::GatewayConfig;

pub const ENV_GATEWAY_URL: &str = "TRAVELINTRIPS_SUPABASE_URL";
pub const ENV_GATEWAY_ANON_KEY: &str = "TRAVELINTRIPS_SUPABASE_ANON_KEY";

/// Load the gateway configuration, honoring a local `.env` file.
pub fn gateway_config_from_env() -> anyhow::Result<GatewayConfig> {
    dotenvy::dotenv().ok();
    build_config(
        env::var(ENV_GATEWAY_URL).ok(),
        env::var(ENV_GATEWAY_ANON_KEY).ok(),
    )
}

fn build_config(url: Option<String>, anon_key: Option<String>) -> anyhow::Result<GatewayConfig> {
    let url = url
        .filter(|value| !value.trim().is_empty())
        .with_context(|| format!("{ENV_GATEWAY_URL} is not set"))?;
    let anon_key = anon_key
        .filter(|value| !value.trim().is_empty())
        .with_context(|| format!("{ENV_GATEWAY_ANON_KEY} is not set"))?;
    if !url.starts_with("http://") && !url.starts_with("https://") {
        bail!("{ENV_GATEWAY_URL} must be an http(s) URL, got {url:?}");
    }
    Ok(GatewayConfig::new(url, anon_key))
}
