use serde::Serialize;
use std::fmt;
use thiserror::Error;
use utoipa::ToSchema;

/// The client-facing fields of a product, named the way they appear on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub enum Field {
    #[serde(rename = "nome")]
    Name,
    #[serde(rename = "preco")]
    Price,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "nome",
            Field::Price => "preco",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct FieldError {
    pub field: Field,
    pub message: String,
}

impl FieldError {
    pub fn new(field: Field, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// One or more fields of a submitted product were rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid product: {}", describe(.errors))]
pub struct ValidationError {
    errors: Vec<FieldError>,
}

fn describe(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|FieldError { field, message }| format!("`{field}` {message}"))
        .collect::<Vec<_>>()
        .join(", ")
}

impl ValidationError {
    pub fn new(errors: Vec<FieldError>) -> Self {
        Self { errors }
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.errors.iter().map(|error| error.field)
    }

    pub fn names(&self, field: Field) -> bool {
        self.fields().any(|f| f == field)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProductError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Product already has identity `{0}` and cannot be inserted again")]
    InvalidState(u64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_names_every_field() {
        let error = ValidationError::new(vec![
            FieldError::new(Field::Name, "must not be empty"),
            FieldError::new(Field::Price, "must not be negative"),
        ]);

        assert!(error.names(Field::Name));
        assert!(error.names(Field::Price));
        assert_eq!(
            error.to_string(),
            "Invalid product: `nome` must not be empty, `preco` must not be negative"
        );
    }

    #[test]
    fn test_field_serializes_to_wire_name() {
        assert_eq!(serde_json::to_value(Field::Price).unwrap(), "preco");
        assert_eq!(Field::Name.to_string(), "nome");
    }
}
