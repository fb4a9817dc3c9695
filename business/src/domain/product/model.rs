use super::value_objects::{DraftField, ImageHandle, ProductId};

/// A product as persisted by the remote service.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub color: String,
    pub price: String,
    pub description: String,
    /// Relative asset path, served as a static file by the service host.
    pub image: Option<String>,
}

impl Product {
    pub fn field(&self, field: DraftField) -> &str {
        match field {
            DraftField::Name => &self.name,
            DraftField::Color => &self.color,
            DraftField::Price => &self.price,
            DraftField::Description => &self.description,
        }
    }
}

/// In-progress product data, not yet submitted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub color: String,
    pub price: String,
    pub description: String,
    pub image: Option<ImageHandle>,
}

impl ProductDraft {
    /// Copies the text fields of a record. The image stays empty: a stored
    /// asset path cannot be turned back into a local file.
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            color: product.color.clone(),
            price: product.price.clone(),
            description: product.description.clone(),
            image: None,
        }
    }

    pub fn field(&self, field: DraftField) -> &str {
        match field {
            DraftField::Name => &self.name,
            DraftField::Color => &self.color,
            DraftField::Price => &self.price,
            DraftField::Description => &self.description,
        }
    }

    pub fn set_field(&mut self, field: DraftField, value: String) {
        let slot = match field {
            DraftField::Name => &mut self.name,
            DraftField::Color => &mut self.color,
            DraftField::Price => &mut self.price,
            DraftField::Description => &mut self.description,
        };
        *slot = value;
    }

    /// Required fields that are blank. Enforced by the input surface, never
    /// by the form itself.
    pub fn missing_fields(&self) -> Vec<DraftField> {
        use strum::IntoEnumIterator;

        DraftField::iter()
            .filter(|field| self.field(*field).trim().is_empty())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
