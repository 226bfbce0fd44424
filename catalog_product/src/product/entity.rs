use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use super::error::{Field, FieldError, ValidationError};

/// A catalog product.
///
/// A product without an `id` is transient: it was submitted by a client but has not been admitted into a store yet.
/// Once a store assigns an `id` the product is persisted and its identity never changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<u64>,
    #[serde(rename = "nome")]
    name: String,
    #[serde(rename = "preco")]
    price: f64,
}

impl Product {
    /// Creates a transient product. The name is kept exactly as given.
    pub fn new(name: impl AsRef<str>, price: f64) -> Result<Self, ValidationError> {
        let name = name.as_ref();

        match (check_name(name), check_price(price)) {
            (Ok(()), Ok(price)) => Ok(Self {
                id: None,
                name: name.to_string(),
                price,
            }),
            (name, price) => Err(ValidationError::new(
                [name.err(), price.err()].into_iter().flatten().collect(),
            )),
        }
    }

    /// Returns a copy of this product stamped with `id`.
    pub fn with_id(self, id: u64) -> Self {
        Self { id: Some(id), ..self }
    }

    pub fn id(&self) -> Option<u64> {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    /// `0` is treated the same as a missing identity.
    pub fn is_transient(&self) -> bool {
        matches!(self.id, None | Some(0))
    }
}

/// The decoded body of a create request before validation. Fields are kept as raw JSON so that missing or wrongly
/// typed values are reported per field.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
pub struct ProductPayload {
    #[serde(rename = "nome", default)]
    #[schema(value_type = String, example = "Smartphone Modelo X")]
    pub name: Option<Value>,
    #[serde(rename = "preco", default)]
    #[schema(value_type = f64, example = 1299.99)]
    pub price: Option<Value>,
}

impl ProductPayload {
    pub fn validate(&self) -> Result<Product, ValidationError> {
        let name = match &self.name {
            None | Some(Value::Null) => Err(FieldError::new(Field::Name, "is required")),
            Some(Value::String(name)) => check_name(name).map(|_| name.as_str()),
            Some(_) => Err(FieldError::new(Field::Name, "must be a string")),
        };

        let price = match &self.price {
            None | Some(Value::Null) => Err(FieldError::new(Field::Price, "is required")),
            Some(Value::Number(price)) => price
                .as_f64()
                .ok_or_else(|| FieldError::new(Field::Price, "must be a number"))
                .and_then(check_price),
            Some(_) => Err(FieldError::new(Field::Price, "must be a number")),
        };

        match (name, price) {
            (Ok(name), Ok(price)) => Product::new(name, price),
            (name, price) => Err(ValidationError::new(
                [name.err(), price.err()].into_iter().flatten().collect(),
            )),
        }
    }
}

fn check_name(name: &str) -> Result<(), FieldError> {
    if name.trim().is_empty() {
        return Err(FieldError::new(Field::Name, "must not be empty"));
    }
    Ok(())
}

fn check_price(price: f64) -> Result<f64, FieldError> {
    if !price.is_finite() {
        return Err(FieldError::new(Field::Price, "must be a finite number"));
    }
    if price < 0.0 {
        return Err(FieldError::new(Field::Price, "must not be negative"));
    }
    // -0.0 is zero.
    Ok(if price == 0.0 { 0.0 } else { price })
}
