use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// Identifier assigned by the remote service. Opaque to the client.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(String);

impl ProductId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ProductId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ProductId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A locally selected image file.
///
/// The handle is passed through unread; only the service adapter opens the
/// file, when it builds the request body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageHandle {
    path: PathBuf,
}

impl ImageHandle {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name sent along with the upload; falls back to `image`.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "image".to_string())
    }
}

/// Text fields of a product draft, named as they travel on the wire.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, AsRefStr,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum DraftField {
    Name,
    Color,
    Price,
    Description,
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn should_display_product_id() {
        let id = ProductId::new("65f1c0ffee");
        assert_eq!(id.to_string(), "65f1c0ffee");
        assert_eq!(id.as_str(), "65f1c0ffee");
    }

    #[test]
    fn should_compare_product_ids_for_equality() {
        assert_eq!(ProductId::from("a"), ProductId::from("a".to_string()));
        assert_ne!(ProductId::from("a"), ProductId::from("b"));
    }

    #[test]
    fn should_parse_draft_field_names() {
        assert_eq!("name".parse::<DraftField>(), Ok(DraftField::Name));
        assert_eq!("Price".parse::<DraftField>(), Ok(DraftField::Price));
        assert!("image".parse::<DraftField>().is_err());
    }

    #[test]
    fn should_list_fields_in_form_order() {
        let names: Vec<String> = DraftField::iter().map(|f| f.to_string()).collect();
        assert_eq!(names, vec!["name", "color", "price", "description"]);
    }

    #[test]
    fn should_use_file_name_of_image_handle() {
        let handle = ImageHandle::new("/tmp/photos/chair.png");
        assert_eq!(handle.file_name(), "chair.png");
        assert_eq!(handle.path(), Path::new("/tmp/photos/chair.png"));
    }

    #[test]
    fn should_fall_back_to_default_image_name() {
        let handle = ImageHandle::new("/");
        assert_eq!(handle.file_name(), "image");
    }
}
