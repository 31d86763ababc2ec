//! Application wiring: bootstrap, list refresh and control dispatch.
//!
//! `App` owns the resource client, the form and the rendered list. The host
//! owns the `Prompt` and lends it to each call that may talk to the user, so
//! the same terminal can both read commands and answer prompts.

use tracing::{error, info};

use crate::api::{FoodApi, Transport};
use crate::error::ApiError;
use crate::form::{Field, FoodForm, SubmitOutcome};
use crate::prompt::{Prompt, CONFIRM_DELETE, FOOD_DELETED};
use crate::types::FoodId;
use crate::view::{Action, ListView};

/// Result of the delete flow.
#[derive(Debug)]
pub enum DeleteOutcome {
    Declined,
    Deleted,
    Failed(ApiError),
}

#[derive(Debug)]
pub struct App<T> {
    api: FoodApi<T>,
    form: FoodForm,
    list: ListView,
}

impl<T: Transport> App<T> {
    pub fn new(api: FoodApi<T>) -> Self {
        Self {
            api,
            form: FoodForm::new(),
            list: ListView::new(),
        }
    }

    pub fn api(&self) -> &FoodApi<T> {
        &self.api
    }

    pub fn api_mut(&mut self) -> &mut FoodApi<T> {
        &mut self.api
    }

    pub fn form(&self) -> &FoodForm {
        &self.form
    }

    pub fn list(&self) -> &ListView {
        &self.list
    }

    /// Initial load: exactly one list call, rendered if it succeeds.
    pub fn start(&mut self) {
        info!("loading foods");
        self.refresh();
    }

    /// Fetch everything and re-render. A failed fetch is logged and the
    /// previous rendering stays on screen.
    pub fn refresh(&mut self) -> bool {
        match self.api.list_all() {
            Ok(foods) => {
                self.list.render(&foods);
                true
            }
            Err(err) => {
                error!(error = %err, "failed to load foods");
                false
            }
        }
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.form.set_field(field, value);
    }

    /// Leave edit mode without saving.
    pub fn cancel_edit(&mut self) {
        self.form.reset();
    }

    pub fn submit<P: Prompt + ?Sized>(&mut self, prompt: &mut P) -> SubmitOutcome {
        let outcome = self.form.submit(&mut self.api, prompt);
        if outcome.needs_refresh() {
            self.refresh();
        }
        outcome
    }

    /// Route a list control to its flow.
    pub fn dispatch<P: Prompt + ?Sized>(&mut self, action: &Action, prompt: &mut P) {
        match action {
            Action::Edit(id) => {
                // failure is already logged and leaves the form untouched
                let _ = self.edit(id);
            }
            Action::Delete(id) => {
                self.delete(id, prompt);
            }
        }
    }

    pub fn edit(&mut self, id: &FoodId) -> Result<(), ApiError> {
        self.form.prepare_edit(&mut self.api, id)
    }

    /// Ask first; once confirmed, delete and reload even if the call failed.
    /// The form is never touched.
    pub fn delete<P: Prompt + ?Sized>(&mut self, id: &FoodId, prompt: &mut P) -> DeleteOutcome {
        if !prompt.confirm(CONFIRM_DELETE) {
            return DeleteOutcome::Declined;
        }

        let outcome = match self.api.remove(id) {
            Ok(()) => {
                prompt.alert(FOOD_DELETED);
                DeleteOutcome::Deleted
            }
            Err(err) => {
                error!(%id, error = %err, "failed to delete food");
                DeleteOutcome::Failed(err)
            }
        };
        self.refresh();
        outcome
    }
}
