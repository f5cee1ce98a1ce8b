//! Full screen controller: list + form + delete confirmation for one entity
//!
//! A `CrudScreen` owns everything one management page needs. Mutations go
//! through [`Mutator`]; after any successful mutation the list is refetched
//! rather than patched in place, so the table always reflects the server.

use std::sync::Arc;

use async_trait::async_trait;
use console_client::{Actor, ClientResult};
use shared::AppError;
use tracing::warn;

use crate::confirm::ConfirmGate;
use crate::form::{Draft, FormSession};
use crate::list::{Collection, ListStore};
use crate::notice::NoticeQueue;
use crate::record::Record;
use crate::DEFAULT_PAGE_SIZE;

/// An image selected in the form, not yet sent anywhere.
#[derive(Debug, Clone)]
pub struct PendingImage {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Write side of a [`Collection`].
#[async_trait]
pub trait Mutator: Collection {
    type Create: Send + Sync + 'static;
    type Update: Send + Sync + 'static;

    async fn create(&self, payload: &Self::Create) -> ClientResult<Self::Item>;

    async fn update(&self, id: &str, payload: &Self::Update) -> ClientResult<Self::Item>;

    async fn remove(&self, id: &str) -> ClientResult<()>;

    /// Image upload is a separate call and entities without one keep the no-op.
    async fn upload_image(&self, _id: &str, _image: &PendingImage) -> ClientResult<()> {
        Ok(())
    }
}

/// Screen-level deletion rule consulted in addition to the record's own
type RemoveGuard<T> = Box<dyn Fn(&T) -> Option<AppError> + Send + Sync>;

pub struct CrudScreen<C, D>
where
    C: Mutator,
    D: Draft<Entity = C::Item, Create = C::Create, Update = C::Update>,
{
    source: Arc<C>,
    list: ListStore<C>,
    form: Option<FormSession<D>>,
    confirm: ConfirmGate<C::Item>,
    actor: Actor,
    notices: NoticeQueue,
    remove_guard: Option<RemoveGuard<C::Item>>,
}

impl<C, D> CrudScreen<C, D>
where
    C: Mutator,
    D: Draft<Entity = C::Item, Create = C::Create, Update = C::Update>,
{
    pub fn new(source: Arc<C>, actor: Actor, notices: NoticeQueue) -> Self {
        let list = ListStore::new(source.clone(), DEFAULT_PAGE_SIZE, notices.clone());
        Self {
            source,
            list,
            form: None,
            confirm: ConfirmGate::new(),
            actor,
            notices,
            remove_guard: None,
        }
    }

    /// Install a deletion rule the screen checks over whole-collection
    /// state the record itself cannot see (e.g. a category still
    /// referenced by products). Replaces any previous rule.
    pub fn set_remove_guard<F>(&mut self, guard: F)
    where
        F: Fn(&C::Item) -> Option<AppError> + Send + Sync + 'static,
    {
        self.remove_guard = Some(Box::new(guard));
    }

    pub fn list(&self) -> &ListStore<C> {
        &self.list
    }

    pub fn form(&self) -> Option<&FormSession<D>> {
        self.form.as_ref()
    }

    pub fn form_mut(&mut self) -> Option<&mut FormSession<D>> {
        self.form.as_mut()
    }

    pub fn confirm(&self) -> &ConfirmGate<C::Item> {
        &self.confirm
    }

    pub fn notices(&self) -> &NoticeQueue {
        &self.notices
    }

    pub fn actor(&self) -> &Actor {
        &self.actor
    }

    // -------- form lifecycle --------

    pub fn start_create(&mut self) {
        self.form = Some(FormSession::create());
    }

    /// Opens the edit form, unless the record refuses this actor.
    pub fn start_edit(&mut self, entity: &C::Item) -> bool {
        if let Some(err) = entity.edit_blocked(&self.actor) {
            self.notices.error(err.message);
            return false;
        }
        self.form = Some(FormSession::edit(entity));
        true
    }

    pub fn cancel_form(&mut self) {
        self.form = None;
    }

    /// Validates and dispatches the open form.
    ///
    /// Validation failures never reach the network. On success the form
    /// closes, pending images upload (failures degrade to a warning), and
    /// the list refetches. On failure the draft survives for correction.
    pub async fn submit(&mut self, images: Vec<PendingImage>) -> bool {
        let Some(form) = self.form.as_mut() else {
            return false;
        };
        if !form.validate(&self.actor) {
            return false;
        }
        form.set_submitting(true);

        let draft = form.draft().clone();
        let result = match draft.entity_id() {
            None => self.source.create(&draft.to_create()).await,
            Some(id) => self.source.update(id, &draft.to_update()).await,
        };

        match result {
            Ok(entity) => {
                for image in &images {
                    if let Err(err) = self.source.upload_image(entity.record_id(), image).await {
                        warn!(file = %image.file_name, error = %err, "image upload failed");
                        self.notices.warning(format!(
                            "saved, but uploading {} failed",
                            image.file_name
                        ));
                    }
                }
                let message = match draft.entity_id() {
                    None => format!("Created {}", entity.display_name()),
                    Some(_) => format!("Updated {}", entity.display_name()),
                };
                self.form = None;
                self.list.load().await;
                self.notices.success(message);
                true
            }
            Err(err) => {
                if let Some(form) = self.form.as_mut() {
                    form.set_submitting(false);
                }
                self.notices.error(err.user_message());
                false
            }
        }
    }

    // -------- delete lifecycle --------

    /// Opens the confirmation gate, unless the record or the screen's
    /// deletion rule refuses this actor.
    pub fn request_remove(&mut self, entity: &C::Item) -> bool {
        if let Some(err) = entity.delete_blocked(&self.actor) {
            self.notices.error(err.message);
            return false;
        }
        if let Some(err) = self.remove_guard.as_ref().and_then(|guard| guard(entity)) {
            self.notices.error(err.message);
            return false;
        }
        self.confirm.request(entity.clone())
    }

    pub fn cancel_remove(&mut self) -> bool {
        self.confirm.cancel()
    }

    /// Runs the confirmed deletion and refetches on success.
    pub async fn confirm_remove(&mut self) -> bool {
        let Some(target) = self.confirm.begin() else {
            return false;
        };
        let result = self.source.remove(target.record_id()).await;
        self.confirm.resolve();
        match result {
            Ok(()) => {
                self.list.load().await;
                self.notices.success(format!("Deleted {}", target.display_name()));
                true
            }
            Err(err) => {
                self.notices.error(err.user_message());
                false
            }
        }
    }
}
