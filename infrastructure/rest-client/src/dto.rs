use serde::{Deserialize, Deserializer};

use business::domain::product::model::Product;
use business::domain::product::value_objects::ProductId;

/// `GET /api/array/` body. The collection field is called `user` by the service.
#[derive(Debug, Deserialize)]
pub struct ProductListResponse {
    pub user: Vec<ProductDto>,
}

/// `GET /api/array/{id}` body.
#[derive(Debug, Deserialize)]
pub struct ProductResponse {
    pub user: ProductDto,
}

#[derive(Debug, Deserialize)]
pub struct ProductDto {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default, deserialize_with = "text")]
    pub name: String,
    #[serde(default, deserialize_with = "text")]
    pub color: String,
    #[serde(default, deserialize_with = "text")]
    pub price: String,
    #[serde(default, deserialize_with = "text")]
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
}

impl ProductDto {
    pub fn into_domain(self) -> Product {
        Product {
            id: ProductId::new(self.id),
            name: self.name,
            color: self.color,
            price: self.price,
            description: self.description,
            image: self.image.filter(|path| !path.trim().is_empty()),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Number(serde_json::Number),
    Bool(bool),
    Null(()),
}

/// Form fields are strings on our side; the service may store prices as numbers.
fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Scalar::deserialize(deserializer)? {
        Scalar::Text(s) => s,
        Scalar::Number(n) => n.to_string(),
        Scalar::Bool(b) => b.to_string(),
        Scalar::Null(()) => String::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn should_read_products_from_user_field() {
        let body = json!({
            "user": [
                {"_id": "65f1", "name": "Pen", "color": "Blue", "price": "2", "description": "Ballpoint", "image": "uploads/pen.png", "__v": 0},
                {"_id": "65f2", "name": "Chair", "color": "Red", "price": "20", "description": "Office chair"}
            ]
        });

        let response: ProductListResponse = serde_json::from_value(body).unwrap();
        let products: Vec<Product> = response.user.into_iter().map(ProductDto::into_domain).collect();

        assert_eq!(products.len(), 2);
        assert_eq!(products[0].id, ProductId::new("65f1"));
        assert_eq!(products[0].image.as_deref(), Some("uploads/pen.png"));
        assert_eq!(products[1].name, "Chair");
        assert_eq!(products[1].image, None);
    }

    #[test]
    fn should_accept_numeric_price() {
        let body = json!({"user": {"_id": "65f1", "name": "Pen", "color": "Blue", "price": 2.5, "description": "Ballpoint"}});

        let response: ProductResponse = serde_json::from_value(body).unwrap();

        assert_eq!(response.user.into_domain().price, "2.5");
    }

    #[test]
    fn should_treat_missing_and_null_fields_as_empty() {
        let body = json!({"user": {"id": "65f1", "name": null, "image": ""}});

        let product = serde_json::from_value::<ProductResponse>(body)
            .unwrap()
            .user
            .into_domain();

        assert_eq!(product.id.as_str(), "65f1");
        assert_eq!(product.name, "");
        assert_eq!(product.color, "");
        assert_eq!(product.image, None);
    }

    #[test]
    fn should_reject_record_without_identifier() {
        let body = json!({"user": [{"name": "Pen"}]});
        assert!(serde_json::from_value::<ProductListResponse>(body).is_err());
    }
}
