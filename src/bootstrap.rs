//! # Client assembly / 客户端装配
//!
//! Wires the environment configuration, the gateway adapters, and the use
//! cases together. `ClientDeps` is NOT a Builder - it is just parameter
//! grouping; all dependencies are required.
//! `ClientDeps` 不是 Builder 模式，仅用于参数打包；所有依赖都是必需的。

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;

use ti_app::usecases::{
    ChangeLocale, GetLocale, LoginUser, LogoutUser, RegisterUser, RegistrationWizard,
    ResetPassword,
};
use ti_core::ports::{
    AuthGatewayPort, DocumentStorePort, LocaleStorePort, ProfileRepositoryPort,
};
use ti_core::GatewayConfig;
use ti_infra::{gateway_config_from_env, FileLocaleStore, GatewayClient};

/// Where the password-reset email sends the user afterwards.
pub const PASSWORD_RESET_REDIRECT: &str = "https://app.travelintrips.co.id/reset-password";

/// Client dependency grouping (non-Builder, just parameter grouping)
/// 客户端依赖分组（非 Builder，仅参数打包）
pub struct ClientDeps {
    pub auth: Arc<dyn AuthGatewayPort>,
    pub documents: Arc<dyn DocumentStorePort>,
    pub profiles: Arc<dyn ProfileRepositoryPort>,
    pub locale_store: Arc<dyn LocaleStorePort>,
    pub password_reset_redirect: String,
}

/// The assembled client: every use case, ready to drive a UI.
pub struct Client {
    register_user: Arc<RegisterUser>,
    pub login_user: Arc<LoginUser>,
    pub logout_user: Arc<LogoutUser>,
    pub reset_password: Arc<ResetPassword>,
    pub get_locale: Arc<GetLocale>,
    pub change_locale: Arc<ChangeLocale>,
}

impl Client {
    /// Create a client from explicit dependencies.
    ///
    /// This constructor signature IS the dependency manifest.
    pub fn new(deps: ClientDeps) -> Self {
        let register_user = Arc::new(RegisterUser::new(
            deps.auth.clone(),
            deps.documents,
            deps.profiles,
        ));
        Self {
            register_user,
            login_user: Arc::new(LoginUser::new(deps.auth.clone())),
            logout_user: Arc::new(LogoutUser::new(deps.auth.clone())),
            reset_password: Arc::new(ResetPassword::new(
                deps.auth,
                deps.password_reset_redirect,
            )),
            get_locale: Arc::new(GetLocale::new(deps.locale_store.clone())),
            change_locale: Arc::new(ChangeLocale::new(deps.locale_store)),
        }
    }

    /// Assemble the production adapters from a gateway configuration.
    ///
    /// The one HTTP client serves all three gateway ports; the locale file
    /// lives under `data_dir`.
    pub fn from_config(config: GatewayConfig, data_dir: PathBuf) -> Result<Self> {
        let gateway = Arc::new(GatewayClient::new(config)?);
        let locale_store = Arc::new(FileLocaleStore::with_defaults(data_dir));
        Ok(Self::new(ClientDeps {
            auth: gateway.clone(),
            documents: gateway.clone(),
            profiles: gateway,
            locale_store,
            password_reset_redirect: PASSWORD_RESET_REDIRECT.to_string(),
        }))
    }

    /// Assemble from the environment (fails fast on missing credentials).
    pub fn from_env(data_dir: PathBuf) -> Result<Self> {
        Self::from_config(gateway_config_from_env()?, data_dir)
    }

    /// Start a fresh registration wizard session.
    pub fn registration_wizard(&self) -> RegistrationWizard {
        RegistrationWizard::new(self.register_user.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ti_core::Stage;

    #[test]
    fn from_config_assembles_a_working_client() {
        let config = GatewayConfig::new("https://example.supabase.co", "anon-key");
        let client = Client::from_config(config, std::env::temp_dir()).unwrap();

        let wizard = client.registration_wizard();
        assert_eq!(wizard.current_stage(), Stage::Personal);
        assert_eq!(
            wizard.sequence(),
            [Stage::Personal, Stage::Contact, Stage::Documents]
        );
    }
}
