//! The shared input form and its create/edit state machine.
//!
//! # Design
//! `FoodForm` is the single owner of both the field values and the mode.
//! Mode transitions:
//! - `Create` -> `Edit(id)` when `prepare_edit` fetches the record.
//! - `Edit(id)` -> `Create` after any submit that passed validation.
//! - `Create` -> `Create` after a create submit.
//!
//! A submit that fails validation changes nothing and makes no call.

use tracing::{error, warn};

use crate::api::{FoodApi, Transport};
use crate::error::{ApiError, ValidationError};
use crate::prompt::{Prompt, FILL_ALL_FIELDS, FOOD_ADDED, FOOD_UPDATED};
use crate::types::{Food, FoodId, FoodInput};

pub const CREATE_LABEL: &str = "Add";
pub const UPDATE_LABEL: &str = "Update";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormMode {
    #[default]
    Create,
    Edit(FoodId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Description,
    ImageUrl,
}

impl Field {
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Description => "description",
            Field::ImageUrl => "imageURL",
        }
    }
}

/// Raw, untrimmed field values as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub name: String,
    pub description: String,
    pub image_url: String,
}

impl FormFields {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Description => &self.description,
            Field::ImageUrl => &self.image_url,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Description => &mut self.description,
            Field::ImageUrl => &mut self.image_url,
        };
        *slot = value.into();
    }

    /// Trim every field; the first one left empty is reported.
    pub fn validate(&self) -> Result<FoodInput, ValidationError> {
        let trimmed = |field: Field| {
            let value = self.get(field).trim();
            if value.is_empty() {
                Err(ValidationError {
                    field: field.as_str(),
                })
            } else {
                Ok(value.to_string())
            }
        };
        Ok(FoodInput {
            name: trimmed(Field::Name)?,
            description: trimmed(Field::Description)?,
            image_url: trimmed(Field::ImageUrl)?,
        })
    }
}

impl From<&Food> for FormFields {
    fn from(food: &Food) -> Self {
        Self {
            name: food.name.clone(),
            description: food.description.clone(),
            image_url: food.image_url.clone(),
        }
    }
}

/// Result of a submit attempt.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Validation failed; nothing was sent and nothing changed.
    Rejected(ValidationError),
    Created(Food),
    Updated(Food),
    /// The call failed. The form was still reset.
    Failed(ApiError),
}

impl SubmitOutcome {
    /// Whether the list must be reloaded afterwards.
    pub fn needs_refresh(&self) -> bool {
        !matches!(self, SubmitOutcome::Rejected(_))
    }
}

#[derive(Debug, Clone, Default)]
pub struct FoodForm {
    mode: FormMode,
    fields: FormFields,
}

impl FoodForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.fields.set(field, value);
    }

    pub fn submit_label(&self) -> &'static str {
        match self.mode {
            FormMode::Create => CREATE_LABEL,
            FormMode::Edit(_) => UPDATE_LABEL,
        }
    }

    /// Back to `Create` with empty fields.
    pub fn reset(&mut self) {
        self.mode = FormMode::Create;
        self.fields = FormFields::default();
    }

    /// Fetch `id` and load it into the form. On failure the error is logged
    /// and both fields and mode are left as they were.
    pub fn prepare_edit<T: Transport>(
        &mut self,
        api: &mut FoodApi<T>,
        id: &FoodId,
    ) -> Result<(), ApiError> {
        let food = api.get_one(id).inspect_err(|err| {
            error!(%id, error = %err, "failed to fetch food for editing");
        })?;
        self.fields = FormFields::from(&food);
        self.mode = FormMode::Edit(id.clone());
        Ok(())
    }

    /// Validate, dispatch create or update, then reset. Success is announced
    /// only when the call returned Ok; failures go to the log.
    pub fn submit<T: Transport, P: Prompt + ?Sized>(
        &mut self,
        api: &mut FoodApi<T>,
        prompt: &mut P,
    ) -> SubmitOutcome {
        let input = match self.fields.validate() {
            Ok(input) => input,
            Err(err) => {
                warn!(field = err.field, "form submit rejected");
                prompt.alert(FILL_ALL_FIELDS);
                return SubmitOutcome::Rejected(err);
            }
        };

        let outcome = match &self.mode {
            FormMode::Create => match api.create(&input) {
                Ok(food) => {
                    prompt.alert(FOOD_ADDED);
                    SubmitOutcome::Created(food)
                }
                Err(err) => {
                    error!(error = %err, "failed to add food");
                    SubmitOutcome::Failed(err)
                }
            },
            FormMode::Edit(id) => match api.update(id, &input) {
                Ok(food) => {
                    prompt.alert(FOOD_UPDATED);
                    SubmitOutcome::Updated(food)
                }
                Err(err) => {
                    error!(%id, error = %err, "failed to update food");
                    SubmitOutcome::Failed(err)
                }
            },
        };

        self.reset();
        outcome
    }
}
