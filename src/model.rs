//! Product entity and request shapes.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A stored product. `id`, `created_at` and `modified_at` are assigned by the store.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    #[schema(value_type = String, example = "9.99")]
    pub price: Decimal,
    pub stock: i32,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

/// Body of `POST /`.
#[derive(Clone, Debug, Deserialize, ToSchema)]
pub struct CreateProduct {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[schema(value_type = String, example = "9.99")]
    pub price: Decimal,
    pub stock: i32,
}

/// Body of `PUT /{id}`. Absent (or null) fields keep the stored value.
#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
pub struct UpdateProduct {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>, example = "9.99")]
    pub price: Option<Decimal>,
    #[serde(default)]
    pub stock: Option<i32>,
}

/// Field set handed to the store on insert and update.
#[derive(Clone, Debug, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub stock: i32,
}

impl From<CreateProduct> for ProductDraft {
    fn from(input: CreateProduct) -> Self {
        ProductDraft {
            name: input.name,
            description: input.description,
            price: input.price,
            stock: input.stock,
        }
    }
}

impl UpdateProduct {
    /// Overlay the present fields on `current`.
    pub fn merge_onto(self, current: &Product) -> ProductDraft {
        ProductDraft {
            name: self.name.unwrap_or_else(|| current.name.clone()),
            description: self.description.or_else(|| current.description.clone()),
            price: self.price.unwrap_or(current.price),
            stock: self.stock.unwrap_or(current.stock),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn widget() -> Product {
        let now = Utc::now();
        Product {
            id: 1,
            name: "Widget".into(),
            description: Some("small".into()),
            price: Decimal::from_str("9.99").unwrap(),
            stock: 10,
            created_at: now,
            modified_at: now,
        }
    }

    #[test]
    fn merge_keeps_absent_fields() {
        let patch = UpdateProduct {
            stock: Some(5),
            ..Default::default()
        };
        let draft = patch.merge_onto(&widget());
        assert_eq!(draft.name, "Widget");
        assert_eq!(draft.description.as_deref(), Some("small"));
        assert_eq!(draft.price, Decimal::from_str("9.99").unwrap());
        assert_eq!(draft.stock, 5);
    }

    #[test]
    fn merge_replaces_every_present_field() {
        let patch = UpdateProduct {
            name: Some("Gadget".into()),
            description: Some("large".into()),
            price: Some(Decimal::from(20)),
            stock: Some(0),
        };
        let draft = patch.merge_onto(&widget());
        assert_eq!(
            draft,
            ProductDraft {
                name: "Gadget".into(),
                description: Some("large".into()),
                price: Decimal::from(20),
                stock: 0,
            }
        );
    }

    #[test]
    fn null_description_keeps_stored_value() {
        let patch: UpdateProduct = serde_json::from_str(r#"{"description": null}"#).unwrap();
        assert!(patch.name.is_none() && patch.description.is_none());
        assert_eq!(patch.merge_onto(&widget()).description.as_deref(), Some("small"));
    }

    #[test]
    fn create_accepts_numeric_or_string_price() {
        let a: CreateProduct = serde_json::from_str(r#"{"name":"W","price":9.99,"stock":1}"#).unwrap();
        let b: CreateProduct = serde_json::from_str(r#"{"name":"W","price":"9.99","stock":1}"#).unwrap();
        assert_eq!(a.price, b.price);
        assert!(a.description.is_none());
    }
}
