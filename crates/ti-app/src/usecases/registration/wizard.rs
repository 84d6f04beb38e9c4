//! Registration wizard controller.
//!
//! Owns the draft and the navigation state for one registration session,
//! dispatches events through the pure state machine, and executes the
//! emitted actions. Exactly one banner (error or success) is visible at a
//! time; a successful submission resets the session and yields the role's
//! sign-in destination for the caller to redirect to.

use std::sync::Arc;

use tracing::{info, warn};

use ti_core::registration::{
    DocumentSlot, FieldError, RegistrationDraft, RegistrationError, Role, Stage, StagedFile,
    WizardAction, WizardEvent, WizardState, WizardStateMachine,
};

use crate::usecases::register_user::RegisterUser;

pub const SUCCESS_MESSAGE: &str = "Account created successfully! You can now login.";
pub const DEGRADED_SUFFIX: &str = "Some profile details could not be saved yet.";

/// The single form-level banner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Banner {
    Error(String),
    Success(String),
}

/// Where to send the user to sign in after a successful registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SigninDestination {
    StaffPortal,
    DriverApp,
}

impl SigninDestination {
    fn for_role(role: Role) -> Self {
        match role.family() {
            ti_core::RoleFamily::Driver => SigninDestination::DriverApp,
            _ => SigninDestination::StaffPortal,
        }
    }

    pub fn url(&self) -> &'static str {
        match self {
            SigninDestination::StaffPortal => "https://app.travelintrips.co.id/signin",
            SigninDestination::DriverApp => "https://driver.travelintrips.co.id/signin",
        }
    }
}

/// Controller for one registration session.
pub struct RegistrationWizard {
    register: Arc<RegisterUser>,
    state: WizardState,
    draft: RegistrationDraft,
    banner: Option<Banner>,
}

impl RegistrationWizard {
    pub fn new(register: Arc<RegisterUser>) -> Self {
        Self {
            register,
            state: WizardState::new(),
            draft: RegistrationDraft::new(),
            banner: None,
        }
    }

    pub fn draft(&self) -> &RegistrationDraft {
        &self.draft
    }

    /// Mutable access for field-by-field edits as the user types.
    pub fn draft_mut(&mut self) -> &mut RegistrationDraft {
        &mut self.draft
    }

    pub fn current_stage(&self) -> Stage {
        self.state.current
    }

    pub fn sequence(&self) -> &[Stage] {
        &self.state.sequence
    }

    /// Inline errors of the last rejected transition.
    pub fn stage_errors(&self) -> &[FieldError] {
        &self.state.stage_errors
    }

    pub fn banner(&self) -> Option<&Banner> {
        self.banner.as_ref()
    }

    fn dispatch(&mut self, event: WizardEvent) -> Vec<WizardAction> {
        let state = std::mem::take(&mut self.state);
        let (next, actions) = WizardStateMachine::transition(state, event, &self.draft);
        self.state = next;
        actions
    }

    /// Select a role: updates the draft and recomputes the tab sequence.
    pub fn select_role(&mut self, role: Role) {
        self.draft.role = Some(role);
        self.dispatch(WizardEvent::RoleSelected { role });
    }

    /// Select a role by its display label, as the form's select does.
    pub fn select_role_label(&mut self, label: &str) -> Result<(), RegistrationError> {
        let role = Role::from_label(label)?;
        self.select_role(role);
        Ok(())
    }

    /// Stage a file for a slot, replacing the previous one. No upload yet.
    pub fn stage_file(&mut self, slot: DocumentSlot, file: StagedFile) {
        self.draft.stage_file(slot, file);
    }

    /// Advance, gated on the active stage's validation.
    pub fn next(&mut self) {
        self.dispatch(WizardEvent::Next);
    }

    /// Go back one tab; always allowed off `personal`.
    pub fn previous(&mut self) {
        self.dispatch(WizardEvent::Previous);
    }

    /// Submit from the documents tab.
    ///
    /// On success the draft is reset and the role's sign-in destination is
    /// returned; on failure the classified message lands in the banner.
    pub async fn submit(&mut self) -> Option<SigninDestination> {
        self.banner = None;

        let actions = self.dispatch(WizardEvent::Submit);
        if !actions.contains(&WizardAction::SubmitRegistration) {
            return None;
        }

        match self.register.execute(&self.draft).await {
            Ok(outcome) => {
                let destination = self
                    .draft
                    .role
                    .map(SigninDestination::for_role)
                    .unwrap_or(SigninDestination::StaffPortal);
                info!(account_id = %outcome.account.id, "registration submitted");

                let message = match &outcome.profile_warning {
                    Some(warning) => {
                        warn!(%warning, "registration succeeded with degraded profile");
                        format!("{SUCCESS_MESSAGE} {DEGRADED_SUFFIX}")
                    }
                    None => SUCCESS_MESSAGE.to_string(),
                };
                self.banner = Some(Banner::Success(message));
                self.draft.reset();
                self.state = WizardState::new();
                Some(destination)
            }
            Err(err) => {
                self.banner = Some(Banner::Error(err.to_string()));
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use bytes::Bytes;
    use std::sync::Mutex;

    use ti_core::ports::{
        AuthGatewayPort, AuthSession, CreatedAccount, DocumentStorePort, GatewayError,
        ProfileRepositoryPort,
    };
    use ti_core::registration::profile::Row;
    use ti_core::registration::validate::Field;

    struct FakeGateway {
        auth_failure: Option<String>,
        accounts: Mutex<usize>,
    }

    impl FakeGateway {
        fn ok() -> Self {
            Self {
                auth_failure: None,
                accounts: Mutex::new(0),
            }
        }

        fn failing(message: &str) -> Self {
            Self {
                auth_failure: Some(message.to_string()),
                accounts: Mutex::new(0),
            }
        }
    }

    #[async_trait]
    impl AuthGatewayPort for FakeGateway {
        async fn create_account(
            &self,
            email: &str,
            _password: &str,
            _metadata: Row,
        ) -> Result<CreatedAccount, GatewayError> {
            if let Some(message) = &self.auth_failure {
                return Err(GatewayError::Service(message.clone()));
            }
            *self.accounts.lock().unwrap() += 1;
            Ok(CreatedAccount {
                id: "acc-9".into(),
                email: email.into(),
            })
        }

        async fn sign_in(
            &self,
            _email: &str,
            _password: &str,
        ) -> Result<AuthSession, GatewayError> {
            unimplemented!("not used by the wizard")
        }

        async fn sign_out(&self, _access_token: &str) -> Result<(), GatewayError> {
            Ok(())
        }

        async fn request_password_reset(
            &self,
            _email: &str,
            _redirect_to: &str,
        ) -> Result<(), GatewayError> {
            Ok(())
        }
    }

    struct NoopStore;

    #[async_trait]
    impl DocumentStorePort for NoopStore {
        async fn upload(
            &self,
            bucket: &str,
            path: &str,
            _content_type: &str,
            _bytes: Bytes,
        ) -> Result<String, GatewayError> {
            Ok(format!("https://cdn.example/{bucket}/{path}"))
        }
    }

    struct NoopProfiles;

    #[async_trait]
    impl ProfileRepositoryPort for NoopProfiles {
        async fn upsert_user(&self, _row: &Row) -> Result<(), GatewayError> {
            Ok(())
        }

        async fn insert_staff(&self, _row: &Row) -> Result<(), GatewayError> {
            Ok(())
        }

        async fn insert_driver(&self, _row: &Row) -> Result<(), GatewayError> {
            Ok(())
        }
    }

    fn wizard_with(gateway: FakeGateway) -> RegistrationWizard {
        let register = Arc::new(RegisterUser::new(
            Arc::new(gateway),
            Arc::new(NoopStore),
            Arc::new(NoopProfiles),
        ));
        RegistrationWizard::new(register)
    }

    fn fill_credentials(wizard: &mut RegistrationWizard) {
        let draft = wizard.draft_mut();
        draft.email = "a@b.com".into();
        draft.password = "secret1".into();
    }

    #[test]
    fn role_switch_removes_and_reinserts_the_vehicle_tab() {
        let mut wizard = wizard_with(FakeGateway::ok());
        wizard.select_role(Role::DriverMitra);
        assert_eq!(
            wizard.sequence(),
            [Stage::Personal, Stage::Contact, Stage::Vehicle, Stage::Documents]
        );

        wizard.select_role(Role::StaffTrips);
        assert_eq!(
            wizard.sequence(),
            [Stage::Personal, Stage::Contact, Stage::Documents]
        );

        wizard.select_role(Role::DriverMitra);
        assert_eq!(wizard.sequence()[2], Stage::Vehicle);
    }

    #[test]
    fn missing_vehicle_color_blocks_the_documents_stage() {
        let mut wizard = wizard_with(FakeGateway::ok());
        fill_credentials(&mut wizard);
        wizard.select_role(Role::DriverMitra);

        let draft = wizard.draft_mut();
        draft.vehicle_name = "Avanza".into();
        draft.vehicle_type = "MPV".into();
        draft.vehicle_brand = "Toyota".into();
        draft.license_plate = "B 1234 XYZ".into();
        draft.vehicle_year = "2020".into();
        draft.vehicle_status = "Owned".into();
        // vehicle_color left empty

        wizard.next();
        wizard.next();
        assert_eq!(wizard.current_stage(), Stage::Vehicle);

        wizard.next();
        assert_eq!(wizard.current_stage(), Stage::Vehicle);
        assert_eq!(wizard.stage_errors()[0].field, Field::VehicleColor);
    }

    #[tokio::test]
    async fn successful_submission_resets_the_session_and_redirects() {
        let mut wizard = wizard_with(FakeGateway::ok());
        fill_credentials(&mut wizard);
        wizard.select_role(Role::StaffTrips);
        wizard.draft_mut().full_name = "Budi Santoso".into();
        wizard.stage_file(
            DocumentSlot::SelfiePhoto,
            StagedFile::new("me.jpg", "image/jpeg", "bytes"),
        );

        wizard.next();
        wizard.next();
        assert_eq!(wizard.current_stage(), Stage::Documents);

        let destination = wizard.submit().await;
        assert_eq!(destination, Some(SigninDestination::StaffPortal));
        assert_eq!(
            wizard.banner(),
            Some(&Banner::Success(SUCCESS_MESSAGE.to_string()))
        );

        // Round-trip: everything back to its initial value.
        assert_eq!(wizard.draft(), &RegistrationDraft::default());
        assert_eq!(wizard.current_stage(), Stage::Personal);
        assert_eq!(wizard.draft().staged_count(), 0);
    }

    #[tokio::test]
    async fn driver_registration_redirects_to_the_driver_app() {
        let mut wizard = wizard_with(FakeGateway::ok());
        fill_credentials(&mut wizard);
        wizard.select_role(Role::DriverPerusahaan);

        wizard.next();
        wizard.next();
        let destination = wizard.submit().await;
        assert_eq!(destination, Some(SigninDestination::DriverApp));
    }

    #[tokio::test]
    async fn submit_off_the_documents_stage_is_a_noop() {
        let mut wizard = wizard_with(FakeGateway::ok());
        fill_credentials(&mut wizard);
        wizard.select_role(Role::StaffTrips);

        let destination = wizard.submit().await;
        assert_eq!(destination, None);
        assert_eq!(wizard.current_stage(), Stage::Personal);
        assert!(wizard.banner().is_none());
    }

    #[tokio::test]
    async fn classified_error_lands_in_the_banner_and_keeps_the_draft() {
        let mut wizard = wizard_with(FakeGateway::failing("User already registered"));
        fill_credentials(&mut wizard);
        wizard.select_role(Role::StaffTrips);

        wizard.next();
        wizard.next();
        let destination = wizard.submit().await;

        assert_eq!(destination, None);
        assert_eq!(
            wizard.banner(),
            Some(&Banner::Error(
                "An account with this email already exists".to_string()
            ))
        );
        assert_eq!(wizard.draft().email, "a@b.com");
    }
}
