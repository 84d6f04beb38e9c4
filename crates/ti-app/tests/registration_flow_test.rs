//! End-to-end registration flow over in-memory gateway fakes.
//!
//! Drives the wizard the way the form does: select a role, fill the tabs,
//! stage documents, advance tab by tab, submit.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bytes::Bytes;

use ti_app::usecases::registration::SigninDestination;
use ti_app::usecases::{RegisterUser, RegistrationWizard};
use ti_core::ports::{
    AuthGatewayPort, AuthSession, CreatedAccount, DocumentStorePort, GatewayError,
    ProfileRepositoryPort,
};
use ti_core::registration::profile::Row;
use ti_core::{DocumentSlot, RegistrationDraft, Role, Stage, StagedFile};

#[derive(Default)]
struct InMemoryBackend {
    accounts: Mutex<Vec<(String, Row)>>,
    objects: Mutex<Vec<String>>,
    users: Mutex<Vec<Row>>,
    staff: Mutex<Vec<Row>>,
    drivers: Mutex<Vec<Row>>,
}

#[async_trait]
impl AuthGatewayPort for InMemoryBackend {
    async fn create_account(
        &self,
        email: &str,
        _password: &str,
        metadata: Row,
    ) -> Result<CreatedAccount, GatewayError> {
        let mut accounts = self.accounts.lock().unwrap();
        if accounts.iter().any(|(existing, _)| existing == email) {
            return Err(GatewayError::Service("User already registered".into()));
        }
        accounts.push((email.to_string(), metadata));
        Ok(CreatedAccount {
            id: format!("acc-{}", accounts.len()),
            email: email.to_string(),
        })
    }

    async fn sign_in(&self, email: &str, _password: &str) -> Result<AuthSession, GatewayError> {
        Ok(AuthSession {
            access_token: "token".into(),
            refresh_token: "refresh".into(),
            user_id: "user-1".into(),
            email: email.into(),
        })
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

#[async_trait]
impl DocumentStorePort for InMemoryBackend {
    async fn upload(
        &self,
        bucket: &str,
        path: &str,
        _content_type: &str,
        _bytes: Bytes,
    ) -> Result<String, GatewayError> {
        self.objects.lock().unwrap().push(path.to_string());
        Ok(format!("https://cdn.example/{bucket}/{path}"))
    }
}

#[async_trait]
impl ProfileRepositoryPort for InMemoryBackend {
    async fn upsert_user(&self, row: &Row) -> Result<(), GatewayError> {
        self.users.lock().unwrap().push(row.clone());
        Ok(())
    }

    async fn insert_staff(&self, row: &Row) -> Result<(), GatewayError> {
        self.staff.lock().unwrap().push(row.clone());
        Ok(())
    }

    async fn insert_driver(&self, row: &Row) -> Result<(), GatewayError> {
        self.drivers.lock().unwrap().push(row.clone());
        Ok(())
    }
}

fn wizard_over(backend: Arc<InMemoryBackend>) -> RegistrationWizard {
    let register = Arc::new(RegisterUser::new(
        backend.clone(),
        backend.clone(),
        backend,
    ));
    RegistrationWizard::new(register)
}

#[tokio::test]
async fn driver_mitra_flow_uploads_documents_and_writes_both_rows() {
    let backend = Arc::new(InMemoryBackend::default());
    let mut wizard = wizard_over(backend.clone());

    wizard.select_role(Role::DriverMitra);
    {
        let draft = wizard.draft_mut();
        draft.email = "mitra@example.com".into();
        draft.password = "secret1".into();
        draft.full_name = "Andi Wijaya".into();
        draft.phone_number = "0812111222".into();
        draft.license_number = "SIM-77".into();
        draft.license_expiry = "2027-06-30".into();
        draft.vehicle_name = "Avanza".into();
        draft.vehicle_type = "MPV".into();
        draft.vehicle_brand = "Toyota".into();
        draft.license_plate = "B 77 AW".into();
        draft.vehicle_year = "2021".into();
        draft.vehicle_color = "Black".into();
        draft.vehicle_status = "Owned".into();
    }
    wizard.stage_file(
        DocumentSlot::SelfiePhoto,
        StagedFile::new("me.jpg", "image/jpeg", "selfie"),
    );
    wizard.stage_file(
        DocumentSlot::VehiclePhoto,
        StagedFile::new("car.png", "image/png", "car"),
    );

    wizard.next();
    wizard.next();
    wizard.next();
    assert_eq!(wizard.current_stage(), Stage::Documents);

    let destination = wizard.submit().await;
    assert_eq!(destination, Some(SigninDestination::DriverApp));

    // Uploads ran in slot order under their folders.
    let objects = backend.objects.lock().unwrap();
    assert_eq!(objects.len(), 2);
    assert!(objects[0].starts_with("selfies/"));
    assert!(objects[1].starts_with("vehicles/"));

    // One account with the metadata bag, one users row, one drivers row.
    let accounts = backend.accounts.lock().unwrap();
    assert_eq!(accounts.len(), 1);
    assert_eq!(accounts[0].1["role_id"], serde_json::json!(2));
    assert!(accounts[0].1["vehicle_photo_url"]
        .as_str()
        .unwrap()
        .contains("/user-documents/vehicles/"));

    assert_eq!(backend.users.lock().unwrap().len(), 1);
    assert!(backend.staff.lock().unwrap().is_empty());
    let drivers = backend.drivers.lock().unwrap();
    assert_eq!(drivers.len(), 1);
    assert_eq!(drivers[0]["vehicle_name"], serde_json::json!("Avanza"));

    // The session is ready for the next registration.
    assert_eq!(wizard.draft(), &RegistrationDraft::default());
    assert_eq!(wizard.current_stage(), Stage::Personal);
}

#[tokio::test]
async fn duplicate_email_surfaces_the_classified_banner() {
    let backend = Arc::new(InMemoryBackend::default());

    let mut first = wizard_over(backend.clone());
    first.select_role(Role::Customer);
    first.draft_mut().email = "dup@example.com".into();
    first.draft_mut().password = "secret1".into();
    first.next();
    first.next();
    assert!(first.submit().await.is_some());

    let mut second = wizard_over(backend.clone());
    second.select_role(Role::Customer);
    second.draft_mut().email = "dup@example.com".into();
    second.draft_mut().password = "secret1".into();
    second.next();
    second.next();

    assert_eq!(second.submit().await, None);
    match second.banner() {
        Some(ti_app::Banner::Error(message)) => {
            assert_eq!(message, "An account with this email already exists");
        }
        other => panic!("expected an error banner, got {other:?}"),
    }

    // Customer registrations write no family rows.
    assert!(backend.staff.lock().unwrap().is_empty());
    assert!(backend.drivers.lock().unwrap().is_empty());
}
