use color_eyre::Result;
use config::{Config, Environment};
use secrecy::SecretString;
use std::env;
use tracing::{debug, info, warn};

#[tracing::instrument]
pub fn new_config() -> Result<Application> {
    let s = Config::builder()
        .add_source(Environment::default())
        .build()?;

    // You can deserialize (and thus freeze) the entire configuration as
    let base: relibot_cfg::Config = s.try_deserialize()?;
    debug!(supabase_url = %base.supabase_url, "Read base configuration");

    let anon_key = read_secret("SUPABASE_ANON_KEY");
    let service_role_key = read_secret("SUPABASE_SERVICE_ROLE_KEY");

    Ok(Application {
        base,
        anon_key,
        service_role_key,
    })
}

/// Missing secrets resolve to empty strings: the process still starts and
/// the insert is rejected by the store instead.
fn read_secret(name: &str) -> SecretString {
    match env::var(name) {
        Ok(value) => {
            info!(name, "Read secret");
            value.into()
        }
        Err(error) => {
            warn!(name, %error, "Secret is not set, failure log inserts will be rejected");
            String::new().into()
        }
    }
}

#[derive(Clone, Debug)]
pub struct Application {
    pub base: relibot_cfg::Config,
    pub anon_key: SecretString,
    pub service_role_key: SecretString,
}
