//! Validate, encode and send a form to its gateway

use super::encoder::encode;
use super::state::FormState;
use super::validation::{validate, FieldErrors};
use crate::shared::api::{ApiError, EntityGateway};
use crate::shared::dropdowns::DROPDOWN_CACHE;
use contracts::domain::common::EntityKey;
use serde_json::Value;
use thiserror::Error;

/// Per-field validation messages and a single server message never mix
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormError {
    #[error("{0}")]
    Validation(FieldErrors),
    #[error(transparent)]
    Submission(#[from] ApiError),
}

/// Update the entity addressed by `existing`, or create a new one.
/// Validation failures return before any request is made.
pub async fn submit<G: EntityGateway + ?Sized>(
    gateway: &G,
    state: &FormState,
    existing: Option<&EntityKey>,
) -> Result<Value, FormError> {
    validate(state, existing.is_none()).map_err(FormError::Validation)?;

    let payload = encode(state);
    let saved = match existing {
        Some(key) => gateway.update(key, payload).await?,
        None => gateway.create(payload).await?,
    };

    DROPDOWN_CACHE.invalidate_fed_by(state.descriptor());
    Ok(saved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::form::value::FieldValue;
    use async_trait::async_trait;
    use contracts::domain::a005_facility::FACILITY;
    use contracts::domain::a009_admission::ADMISSION;
    use contracts::shared::dropdown::{DropdownItem, DropdownKey};
    use contracts::shared::multipart::MultipartPayload;
    use serde_json::json;
    use std::cell::RefCell;

    #[derive(Debug, PartialEq)]
    enum Call {
        Create(MultipartPayload),
        Update(String, MultipartPayload),
    }

    #[derive(Default)]
    struct RecordingGateway {
        calls: RefCell<Vec<Call>>,
        fail_with: Option<ApiError>,
    }

    #[async_trait(?Send)]
    impl EntityGateway for RecordingGateway {
        async fn create(&self, payload: MultipartPayload) -> Result<Value, ApiError> {
            self.calls.borrow_mut().push(Call::Create(payload));
            match &self.fail_with {
                Some(e) => Err(e.clone()),
                None => Ok(json!({"id": 1, "slug": "fall-intake"})),
            }
        }

        async fn update(&self, key: &EntityKey, payload: MultipartPayload) -> Result<Value, ApiError> {
            self.calls
                .borrow_mut()
                .push(Call::Update(key.to_string(), payload));
            Ok(json!({"slug": key.to_string()}))
        }
    }

    fn admission(active_until: &str) -> FormState {
        let mut state = FormState::initialize(&ADMISSION, None);
        state.set_field("title", FieldValue::Text("Fall Intake".into()));
        state.set_field("published_date", FieldValue::Text("2025-01-01".into()));
        state.set_field("active_from", FieldValue::Text("2025-02-01".into()));
        state.set_field("active_until", FieldValue::Text(active_until.into()));
        state.set_field("school", FieldValue::Ref(Some(3)));
        state
    }

    #[tokio::test]
    async fn test_create_without_existing_key() {
        let gateway = RecordingGateway::default();
        let saved = submit(&gateway, &admission("2025-03-01"), None).await.unwrap();
        assert_eq!(saved["slug"], "fall-intake");

        let calls = gateway.calls.borrow();
        assert_eq!(calls.len(), 1);
        match &calls[0] {
            Call::Create(payload) => {
                assert_eq!(payload.text("title"), Some("Fall Intake"));
                assert_eq!(payload.text("slug"), Some("fall-intake"));
            }
            other => panic!("expected create, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_update_keyed_by_existing_slug() {
        let gateway = RecordingGateway::default();
        let key = EntityKey::slug("x");
        submit(&gateway, &admission("2025-03-01"), Some(&key))
            .await
            .unwrap();

        let calls = gateway.calls.borrow();
        assert!(matches!(&calls[..], [Call::Update(k, _)] if k == "x"));
    }

    #[tokio::test]
    async fn test_invalid_dates_never_reach_gateway() {
        let gateway = RecordingGateway::default();
        let err = submit(&gateway, &admission("2025-01-15"), None)
            .await
            .unwrap_err();

        match err {
            FormError::Validation(errors) => assert_eq!(
                errors.get("active_until"),
                Some("Active until date must be after active from date")
            ),
            other => panic!("expected validation error, got {:?}", other),
        }
        assert!(gateway.calls.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_server_message_is_surfaced_once() {
        let gateway = RecordingGateway {
            fail_with: Some(ApiError::Server("Slug already exists".to_string())),
            ..Default::default()
        };
        let err = submit(&gateway, &admission("2025-03-01"), None)
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Slug already exists");
        assert_eq!(gateway.calls.borrow().len(), 1);
    }

    #[tokio::test]
    async fn test_admission_with_only_schedule_fields() {
        let mut state = FormState::initialize(&ADMISSION, None);
        state.set_field("title", FieldValue::Text("Fall Intake".into()));
        state.set_field("published_date", FieldValue::Text("2025-01-01".into()));
        state.set_field("active_from", FieldValue::Text("2025-02-01".into()));
        state.set_field("active_until", FieldValue::Text("2025-01-15".into()));

        let gateway = RecordingGateway::default();
        let err = submit(&gateway, &state, None).await.unwrap_err();

        match err {
            FormError::Validation(errors) => assert_eq!(
                errors.get("active_until"),
                Some("Active until date must be after active from date")
            ),
            other => panic!("expected validation error, got {:?}", other),
        }
        assert!(gateway.calls.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_saving_a_facility_evicts_its_dropdown() {
        DROPDOWN_CACHE.put(
            DropdownKey::Facilities,
            vec![DropdownItem {
                id: 3,
                label: "Library".to_string(),
            }],
        );
        let mut state = FormState::initialize(&FACILITY, None);
        state.set_field("name", FieldValue::Text("Hostel".into()));

        submit(&RecordingGateway::default(), &state, None)
            .await
            .unwrap();
        assert!(DROPDOWN_CACHE.get(DropdownKey::Facilities).is_none());
    }
}
