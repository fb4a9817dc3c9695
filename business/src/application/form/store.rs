use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::domain::form::state::{FormEvent, FormState};
use crate::domain::product::value_objects::{DraftField, ImageHandle};

/// Holds the form's draft and mode. The lock is never held across an await,
/// so completions of overlapping requests only ever see whole transitions.
#[derive(Debug, Default)]
pub struct FormStore {
    state: Mutex<FormState>,
}

impl FormStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> FormState {
        self.lock().clone()
    }

    /// Applies one transition and returns the resulting state.
    pub fn dispatch(&self, event: FormEvent) -> FormState {
        let mut guard = self.lock();
        let next = std::mem::take(&mut *guard).apply(event);
        *guard = next.clone();
        next
    }

    pub fn set_field(&self, field: DraftField, value: impl Into<String>) {
        self.dispatch(FormEvent::FieldChanged {
            field,
            value: value.into(),
        });
    }

    pub fn set_image(&self, handle: ImageHandle) {
        self.dispatch(FormEvent::ImageSelected(handle));
    }

    pub fn reset(&self) {
        self.dispatch(FormEvent::Reset);
    }

    fn lock(&self) -> MutexGuard<'_, FormState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::form::state::FormMode;
    use crate::domain::product::model::Product;
    use crate::domain::product::value_objects::ProductId;

    #[test]
    fn should_apply_field_changes_in_order() {
        let store = FormStore::new();

        store.set_field(DraftField::Name, "Chair");
        store.set_field(DraftField::Name, "Stool");
        store.set_field(DraftField::Color, "Red");

        let state = store.snapshot();
        assert_eq!(state.draft.name, "Stool");
        assert_eq!(state.draft.color, "Red");
        assert_eq!(state.mode, FormMode::Create);
    }

    #[test]
    fn should_clear_everything_on_reset() {
        let store = FormStore::new();
        store.dispatch(FormEvent::EditRequested(Product {
            id: ProductId::new("p-1"),
            name: "Chair".to_string(),
            color: "Red".to_string(),
            price: "20".to_string(),
            description: "Office chair".to_string(),
            image: None,
        }));
        store.set_image(ImageHandle::new("chair.png"));

        store.reset();

        assert_eq!(store.snapshot(), FormState::default());
    }

    #[test]
    fn should_return_new_state_from_dispatch() {
        let store = FormStore::new();

        let state = store.dispatch(FormEvent::FieldChanged {
            field: DraftField::Price,
            value: "3".to_string(),
        });

        assert_eq!(state, store.snapshot());
        assert_eq!(state.draft.price, "3");
    }
}
