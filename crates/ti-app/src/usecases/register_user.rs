//! Registration submission pipeline.
//!
//! Turns a validated draft into a created account plus role-appropriate
//! profile rows. The order is fixed: staged documents upload first (one at
//! a time, so a failure is attributable to its slot), then the account is
//! created, then the profile rows are written. Profile-row failures do not
//! roll back the account; they degrade the outcome visibly instead.

use std::sync::Arc;

use chrono::Utc;
use tracing::{error, info, warn};
use uuid::Uuid;

use ti_core::ports::{AuthGatewayPort, CreatedAccount, DocumentStorePort, ProfileRepositoryPort};
use ti_core::registration::profile::{self, Row};
use ti_core::registration::validate::Field;
use ti_core::registration::{
    classify_auth_error, DocumentSlot, RegistrationDraft, RegistrationError, RoleFamily,
    StagedFile, UploadResult, DOCUMENT_BUCKET,
};

/// Result of a successful submission.
///
/// `profile_warning` is set when the account exists but one of the profile
/// rows could not be written; the flow still counts as a success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationOutcome {
    pub account: CreatedAccount,
    pub profile_warning: Option<RegistrationError>,
}

/// Use case for registering a new user.
pub struct RegisterUser {
    auth: Arc<dyn AuthGatewayPort>,
    documents: Arc<dyn DocumentStorePort>,
    profiles: Arc<dyn ProfileRepositoryPort>,
}

impl RegisterUser {
    pub fn new(
        auth: Arc<dyn AuthGatewayPort>,
        documents: Arc<dyn DocumentStorePort>,
        profiles: Arc<dyn ProfileRepositoryPort>,
    ) -> Self {
        Self {
            auth,
            documents,
            profiles,
        }
    }

    /// Run the full pipeline against a draft.
    ///
    /// Nothing here is idempotent: a retry after a partial failure can leave
    /// duplicate storage objects behind. Known limitation.
    pub async fn execute(
        &self,
        draft: &RegistrationDraft,
    ) -> Result<RegistrationOutcome, RegistrationError> {
        let role = draft
            .role
            .ok_or(RegistrationError::MissingRequiredField { field: Field::Role })?;
        if draft.email.trim().is_empty() {
            return Err(RegistrationError::MissingRequiredField {
                field: Field::Email,
            });
        }
        if draft.password.is_empty() {
            return Err(RegistrationError::MissingRequiredField {
                field: Field::Password,
            });
        }

        let uploads = self.upload_documents(draft).await?;

        let metadata = profile::account_metadata(draft, role, &uploads);
        let account = self
            .auth
            .create_account(draft.email.trim(), &draft.password, metadata)
            .await
            .map_err(|err| {
                let message = err.message();
                error!(%role, message, "account creation failed");
                classify_auth_error(&message)
            })?;
        info!(account_id = %account.id, %role, "account created");

        let profile_warning = self.write_profiles(&account, draft, role, &uploads).await;

        Ok(RegistrationOutcome {
            account,
            profile_warning,
        })
    }

    /// Upload every staged slot sequentially, in slot order.
    async fn upload_documents(
        &self,
        draft: &RegistrationDraft,
    ) -> Result<UploadResult, RegistrationError> {
        let mut uploads = UploadResult::default();
        for slot in DocumentSlot::ALL {
            let Some(file) = draft.staged(slot) else {
                continue;
            };
            let path = format!("{}/{}", slot.folder(), object_name(file));
            info!(%slot, path, "uploading registration document");
            let url = self
                .documents
                .upload(DOCUMENT_BUCKET, &path, &file.content_type, file.bytes.clone())
                .await
                .map_err(|err| RegistrationError::UploadFailure {
                    slot,
                    message: err.message(),
                })?;
            uploads.set(slot, url);
        }
        Ok(uploads)
    }

    /// Write the generic row and the role-family row.
    ///
    /// Failures are logged and reported as a warning on the outcome; the
    /// already-created account is never rolled back.
    async fn write_profiles(
        &self,
        account: &CreatedAccount,
        draft: &RegistrationDraft,
        role: ti_core::Role,
        uploads: &UploadResult,
    ) -> Option<RegistrationError> {
        let mut warning = None;

        let user = profile::user_row(&account.id, draft, role, uploads);
        self.record_write(&mut warning, "users", self.profiles.upsert_user(&user).await);

        match role.family() {
            RoleFamily::Staff => {
                let staff = profile::staff_row(&account.id, draft, role, uploads);
                self.record_write(&mut warning, "staff", self.profiles.insert_staff(&staff).await);
            }
            RoleFamily::Driver => {
                let driver = profile::driver_row(&account.id, draft, role, uploads);
                self.record_write(
                    &mut warning,
                    "drivers",
                    self.profiles.insert_driver(&driver).await,
                );
            }
            RoleFamily::General => {}
        }

        warning
    }

    fn record_write(
        &self,
        warning: &mut Option<RegistrationError>,
        table: &'static str,
        result: Result<(), ti_core::ports::GatewayError>,
    ) {
        if let Err(err) = result {
            warn!(table, message = %err.message(), "profile row write failed");
            warning.get_or_insert(RegistrationError::ProfileWriteFailure {
                table,
                message: err.message(),
            });
        }
    }
}

/// Unique object name keeping the staged file's extension.
fn object_name(file: &StagedFile) -> String {
    format!(
        "{}_{}.{}",
        Uuid::new_v4().simple(),
        Utc::now().timestamp_millis(),
        file.extension()
    )
}
