use crate::domain::product::model::{Product, ProductDraft};
use crate::domain::product::value_objects::{DraftField, ImageHandle, ProductId};

/// Whether submitting the form creates a record or updates an existing one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormMode {
    #[default]
    Create,
    Edit(ProductId),
}

impl FormMode {
    pub fn editing_target(&self) -> Option<&ProductId> {
        match self {
            FormMode::Create => None,
            FormMode::Edit(id) => Some(id),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent {
    FieldChanged { field: DraftField, value: String },
    ImageSelected(ImageHandle),
    /// Replaces the draft with the record's fields, dropping unsaved edits.
    EditRequested(Product),
    Reset,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    pub draft: ProductDraft,
    pub mode: FormMode,
}

impl FormState {
    pub fn apply(self, event: FormEvent) -> Self {
        match event {
            FormEvent::FieldChanged { field, value } => {
                let mut draft = self.draft;
                draft.set_field(field, value);
                Self { draft, ..self }
            }
            FormEvent::ImageSelected(handle) => Self {
                draft: ProductDraft {
                    image: Some(handle),
                    ..self.draft
                },
                ..self
            },
            FormEvent::EditRequested(product) => Self {
                draft: ProductDraft::from_product(&product),
                mode: FormMode::Edit(product.id),
            },
            FormEvent::Reset => Self::default(),
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, FormMode::Edit(_))
    }
}
