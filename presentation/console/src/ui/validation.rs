use business::domain::product::model::ProductDraft;
use business::domain::product::value_objects::DraftField;

/// Input checks done by the surface before a submit reaches the form.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Required: {}", .0.iter().map(ToString::to_string).collect::<Vec<_>>().join(", "))]
    MissingFields(Vec<DraftField>),
}

pub fn check_required(draft: &ProductDraft) -> Result<(), ValidationError> {
    let missing = draft.missing_fields();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::MissingFields(missing))
    }
}
