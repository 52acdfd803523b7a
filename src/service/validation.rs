//! Field checks applied to every draft before it reaches the store.

use crate::error::{AppError, FieldError};
use crate::model::ProductDraft;
use rust_decimal::Decimal;

pub const NAME_MAX_CHARS: usize = 100;
pub const DESCRIPTION_MAX_CHARS: usize = 500;
/// NUMERIC(10, 2)
pub const PRICE_SCALE: u32 = 2;

/// 9,999,999.99
pub fn price_max() -> Decimal {
    Decimal::new(999_999_999, PRICE_SCALE)
}

pub struct ProductValidator;

impl ProductValidator {
    /// Check every field and report all failures together.
    pub fn validate(draft: &ProductDraft) -> Result<(), AppError> {
        let mut errors = Vec::new();

        if draft.name.trim().is_empty() {
            errors.push(FieldError::new("name", "name is required"));
        } else if draft.name.chars().count() > NAME_MAX_CHARS {
            errors.push(FieldError::new(
                "name",
                format!("name must be at most {} characters", NAME_MAX_CHARS),
            ));
        }

        if let Some(description) = &draft.description {
            if description.chars().count() > DESCRIPTION_MAX_CHARS {
                errors.push(FieldError::new(
                    "description",
                    format!("description must be at most {} characters", DESCRIPTION_MAX_CHARS),
                ));
            }
        }

        if draft.price <= Decimal::ZERO {
            errors.push(FieldError::new("price", "price must be greater than 0"));
        } else if draft.price > price_max() {
            errors.push(FieldError::new(
                "price",
                format!("price must be at most {}", price_max()),
            ));
        } else if draft.price.normalize().scale() > PRICE_SCALE {
            errors.push(FieldError::new(
                "price",
                format!("price must have at most {} decimal places", PRICE_SCALE),
            ));
        }

        if draft.stock < 0 {
            errors.push(FieldError::new("stock", "stock must be at least 0"));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(AppError::InvalidInput(errors))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn draft() -> ProductDraft {
        ProductDraft {
            name: "Widget".into(),
            description: None,
            price: Decimal::from_str("9.99").unwrap(),
            stock: 10,
        }
    }

    fn fields(result: Result<(), AppError>) -> Vec<String> {
        match result {
            Err(AppError::InvalidInput(errors)) => errors.into_iter().map(|e| e.field).collect(),
            other => panic!("expected invalid input, got {:?}", other),
        }
    }

    #[test]
    fn accepts_valid_draft() {
        assert!(ProductValidator::validate(&draft()).is_ok());
    }

    #[test]
    fn accepts_boundaries() {
        let d = ProductDraft {
            name: "n".repeat(NAME_MAX_CHARS),
            description: Some("d".repeat(DESCRIPTION_MAX_CHARS)),
            price: price_max(),
            stock: 0,
        };
        assert!(ProductValidator::validate(&d).is_ok());
        let d = ProductDraft {
            price: Decimal::from_str("0.01").unwrap(),
            ..draft()
        };
        assert!(ProductValidator::validate(&d).is_ok());
    }

    #[test]
    fn trailing_zeros_do_not_count_as_scale() {
        let d = ProductDraft {
            price: Decimal::from_str("9.9900").unwrap(),
            ..draft()
        };
        assert!(ProductValidator::validate(&d).is_ok());
    }

    #[test]
    fn rejects_blank_and_long_names() {
        let d = ProductDraft { name: "   ".into(), ..draft() };
        assert_eq!(fields(ProductValidator::validate(&d)), vec!["name"]);
        let d = ProductDraft {
            name: "é".repeat(NAME_MAX_CHARS + 1),
            ..draft()
        };
        assert_eq!(fields(ProductValidator::validate(&d)), vec!["name"]);
    }

    #[test]
    fn rejects_long_description() {
        let d = ProductDraft {
            description: Some("x".repeat(DESCRIPTION_MAX_CHARS + 1)),
            ..draft()
        };
        assert_eq!(fields(ProductValidator::validate(&d)), vec!["description"]);
    }

    #[test]
    fn rejects_out_of_range_price() {
        for bad in ["0", "-1", "10000000", "9999999.991", "1.005"] {
            let d = ProductDraft {
                price: Decimal::from_str(bad).unwrap(),
                ..draft()
            };
            assert_eq!(fields(ProductValidator::validate(&d)), vec!["price"], "price {}", bad);
        }
    }

    #[test]
    fn reports_every_failing_field() {
        let d = ProductDraft {
            name: String::new(),
            description: None,
            price: Decimal::ZERO,
            stock: -1,
        };
        assert_eq!(fields(ProductValidator::validate(&d)), vec!["name", "price", "stock"]);
    }
}
