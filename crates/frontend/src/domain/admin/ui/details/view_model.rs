use crate::domain::admin::model;
use crate::shared::api::{client, ApiError, HttpGateway, OwnProfileGateway};
use crate::shared::api::gateway::OWN_PROFILE_PATH;
use crate::shared::dropdowns::{self, DropdownMap};
use crate::shared::form::{submit, FieldErrors, FieldValue, FileField, FormError, FormState, Record};
use crate::system::auth::context::{use_auth, AuthState};
use contracts::domain::common::EntityKey;
use contracts::shared::metadata::EntityDescriptor;
use contracts::shared::multipart::FileBlob;
use leptos::prelude::*;
use serde_json::Value;
use uuid::Uuid;

/// Where the form reads its entity from and saves it to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SaveTarget {
    /// The descriptor's REST collection
    #[default]
    Collection,
    /// `schools/me`, the signed-in owner's school
    OwnProfile,
}

impl SaveTarget {
    async fn fetch(
        self,
        descriptor: &EntityDescriptor,
        key: Option<&EntityKey>,
    ) -> Result<Option<Value>, ApiError> {
        match (self, key) {
            (Self::OwnProfile, _) => client::get_json(OWN_PROFILE_PATH).await.map(Some),
            (Self::Collection, Some(key)) => model::fetch_entity(descriptor, key).await.map(Some),
            (Self::Collection, None) => Ok(None),
        }
    }

    async fn save(
        self,
        descriptor: &EntityDescriptor,
        state: &FormState,
        existing: Option<&EntityKey>,
    ) -> Result<Value, FormError> {
        match self {
            Self::Collection => submit(&HttpGateway::new(descriptor), state, existing).await,
            Self::OwnProfile => submit(&OwnProfileGateway, state, existing).await,
        }
    }
}

/// ViewModel for one entity form
#[derive(Clone, Copy)]
pub struct EntityDetailsViewModel {
    pub descriptor: &'static EntityDescriptor,
    pub target: SaveTarget,
    pub form: RwSignal<FormState>,
    pub dropdowns: RwSignal<DropdownMap>,
    pub errors: RwSignal<FieldErrors>,
    pub submit_error: RwSignal<Option<String>>,
    pub loading: RwSignal<bool>,
    pub saving: RwSignal<bool>,
    /// Key of the entity being edited; `None` while creating
    pub existing: RwSignal<Option<EntityKey>>,
    set_auth: WriteSignal<AuthState>,
}

impl EntityDetailsViewModel {
    pub fn new(descriptor: &'static EntityDescriptor, target: SaveTarget) -> Self {
        let (_, set_auth) = use_auth();
        Self {
            descriptor,
            target,
            form: RwSignal::new(FormState::initialize(descriptor, None)),
            dropdowns: RwSignal::new(DropdownMap::new()),
            errors: RwSignal::new(FieldErrors::new()),
            submit_error: RwSignal::new(None),
            loading: RwSignal::new(false),
            saving: RwSignal::new(false),
            existing: RwSignal::new(None),
            set_auth,
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.existing.with(Option::is_some)
    }

    /// Fetch reference lists and, when editing, the entity itself.
    /// A failed entity fetch is logged and reported through `on_failed`.
    pub fn load(&self, key: Option<EntityKey>, on_failed: Callback<()>) {
        let vm = *self;
        leptos::task::spawn_local(async move {
            let lists = dropdowns::load_for(vm.descriptor).await;
            vm.dropdowns.try_set(lists);
        });

        if key.is_none() && vm.target == SaveTarget::Collection {
            return;
        }
        vm.loading.set(true);
        leptos::task::spawn_local(async move {
            match vm.target.fetch(vm.descriptor, key.as_ref()).await {
                Ok(Some(entity)) => {
                    let kind = vm.descriptor.info.key_kind;
                    let existing = EntityKey::from_entity(kind, &entity).or(key);
                    vm.form
                        .try_set(FormState::initialize(vm.descriptor, Some(&entity)));
                    vm.existing.try_set(existing);
                }
                Ok(None) => {}
                Err(e) => {
                    log::error!("Failed to load {}: {}", vm.descriptor.info.entity_name, e);
                    vm.handle_unauthorized(&e);
                    on_failed.run(());
                }
            }
            vm.loading.try_set(false);
        });
    }

    fn handle_unauthorized(&self, e: &ApiError) {
        if *e == ApiError::Unauthorized {
            self.set_auth.try_set(AuthState::default());
        }
    }

    pub fn set_field(&self, name: &'static str, value: FieldValue) {
        self.form.update(|f| f.set_field(name, value));
        self.errors.update(|e| e.clear(name));
    }

    pub fn toggle_ref(&self, name: &'static str, id: i64, selected: bool) {
        self.form.update(|f| f.toggle_ref(name, id, selected));
        self.errors.update(|e| e.clear(name));
    }

    pub fn append_row(&self, name: &'static str) {
        self.form.update(|f| f.append_empty_row(name));
    }

    /// Rows are addressed by their stable key, never by a captured index
    pub fn remove_row(&self, name: &'static str, row_key: Uuid) {
        self.form.update(|f| {
            if let Some(index) = row_index(f, name, row_key) {
                f.remove_list_item(name, index);
            }
        });
    }

    pub fn set_row_value(&self, name: &'static str, row_key: Uuid, subfield: &str, value: FieldValue) {
        self.form.update(|f| {
            if let Some(index) = row_index(f, name, row_key) {
                f.set_list_item(name, index, subfield, value);
            }
        });
    }

    pub fn row_value(&self, name: &'static str, row_key: Uuid, subfield: &str) -> Option<FieldValue> {
        self.form.with(|f| {
            f.records(name)
                .iter()
                .find(|r| r.row_key == row_key)
                .and_then(|r| r.get(subfield).cloned())
        })
    }

    /// Read a picked file into memory, then store it as a pending upload
    pub fn pick_file(&self, file: web_sys::File, apply: impl FnOnce(FieldValue) + 'static) {
        let vm = *self;
        leptos::task::spawn_local(async move {
            match read_file(file).await {
                Ok(blob) => apply(FieldValue::File(FileField::Pending(blob))),
                Err(e) => {
                    log::error!("Failed to read file: {}", e);
                    vm.submit_error.try_set(Some(format!("Could not read file: {}", e)));
                }
            }
        });
    }

    /// Validate and send; the button stays disabled until the request ends
    pub fn save_command(&self, on_saved: Callback<Value>) {
        if self.saving.get_untracked() {
            return;
        }
        let vm = *self;
        let state = vm.form.get_untracked();
        let existing = vm.existing.get_untracked();
        vm.submit_error.set(None);
        vm.saving.set(true);

        leptos::task::spawn_local(async move {
            match vm.target.save(vm.descriptor, &state, existing.as_ref()).await {
                Ok(saved) => {
                    log::debug!("Saved {}", vm.descriptor.info.entity_name);
                    vm.errors.try_set(FieldErrors::new());
                    on_saved.run(saved);
                }
                Err(FormError::Validation(errors)) => {
                    vm.errors.try_set(errors);
                }
                Err(FormError::Submission(e)) => {
                    log::error!("Failed to save {}: {}", vm.descriptor.info.entity_name, e);
                    vm.handle_unauthorized(&e);
                    vm.submit_error.try_set(Some(e.to_string()));
                }
            }
            vm.saving.try_set(false);
        });
    }
}

fn row_index(state: &FormState, name: &str, row_key: Uuid) -> Option<usize> {
    state
        .records(name)
        .iter()
        .position(|r: &Record| r.row_key == row_key)
}

async fn read_file(file: web_sys::File) -> Result<FileBlob, gloo_file::FileReadError> {
    let file = gloo_file::File::from(file);
    let bytes = gloo_file::futures::read_as_bytes(&file).await?;
    Ok(FileBlob::new(file.name(), file.raw_mime_type(), bytes))
}
