use strum::IntoEnumIterator;

use business::domain::form::state::{FormMode, FormState};
use business::domain::product::model::Product;
use business::domain::product::value_objects::DraftField;
use rest_client::client::ApiClient;

pub fn product_list(products: &[Product], assets: Option<&ApiClient>) -> String {
    if products.is_empty() {
        return "Product List: (empty)".to_string();
    }

    let mut out = String::from("Product List:");
    for (position, product) in products.iter().enumerate() {
        out.push_str(&format!("\n#{} [{}]", position + 1, product.id));
        for field in DraftField::iter() {
            out.push_str(&format!("\n    {:<12} {}", label(field), product.field(field)));
        }
        if let Some(path) = &product.image {
            let shown = assets
                .and_then(|client| client.asset_url(path))
                .map(|url| url.to_string())
                .unwrap_or_else(|| path.clone());
            out.push_str(&format!("\n    {:<12} {}", "Image:", shown));
        }
    }
    out
}

pub fn form(state: &FormState) -> String {
    let mut out = match &state.mode {
        FormMode::Create => "Create Product".to_string(),
        FormMode::Edit(id) => format!("Update Product [{}]  (`cancel` to stop editing)", id),
    };
    for field in DraftField::iter() {
        out.push_str(&format!("\n    {:<12} {}", label(field), state.draft.field(field)));
    }
    let image = state
        .draft
        .image
        .as_ref()
        .map(|handle| handle.path().display().to_string())
        .unwrap_or_else(|| "-".to_string());
    out.push_str(&format!("\n    {:<12} {}", "Image:", image));
    out
}

fn label(field: DraftField) -> &'static str {
    match field {
        DraftField::Name => "Name:",
        DraftField::Color => "Color:",
        DraftField::Price => "Price:",
        DraftField::Description => "Description:",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::form::state::FormEvent;
    use business::domain::product::value_objects::{ImageHandle, ProductId};
    use std::time::Duration;
    use url::Url;

    fn pen() -> Product {
        Product {
            id: ProductId::new("65f1"),
            name: "Pen".to_string(),
            color: "Blue".to_string(),
            price: "2".to_string(),
            description: "Ballpoint".to_string(),
            image: Some("uploads/pen.png".to_string()),
        }
    }

    #[test]
    fn should_render_empty_list() {
        assert_eq!(product_list(&[], None), "Product List: (empty)");
    }

    #[test]
    fn should_resolve_image_against_service_host() {
        let client = ApiClient::new(
            Url::parse("http://localhost:3000").unwrap(),
            Duration::from_secs(1),
        );

        let out = product_list(&[pen()], Some(&client));

        assert!(out.contains("#1 [65f1]"));
        assert!(out.contains("Price:       2"));
        assert!(out.contains("http://localhost:3000/uploads/pen.png"));
    }

    #[test]
    fn should_show_relative_image_path_without_host() {
        let out = product_list(&[pen()], None);
        assert!(out.contains("Image:       uploads/pen.png"));
    }

    #[test]
    fn should_title_form_by_mode() {
        let create = FormState::default();
        let edit = FormState::default().apply(FormEvent::EditRequested(pen()));

        assert!(form(&create).starts_with("Create Product"));
        assert!(form(&edit).starts_with("Update Product [65f1]"));
        assert!(form(&edit).contains("Name:        Pen"));
    }

    #[test]
    fn should_show_selected_image_path() {
        let state = FormState::default()
            .apply(FormEvent::ImageSelected(ImageHandle::new("/tmp/pen.png")));
        assert!(form(&state).contains("Image:       /tmp/pen.png"));
    }
}
