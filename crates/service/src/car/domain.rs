use std::fmt::{Debug, Display};
use std::str::FromStr;

use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::errors::ServiceError;

/// Identifier type of a car store.
pub trait CarId:
    Clone + Debug + Display + FromStr + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// `true` when the store picks the id on insert, `false` when the caller must supply it.
    const STORE_ASSIGNED: bool;
}

impl CarId for i32 {
    const STORE_ASSIGNED: bool = true;
}

impl CarId for String {
    const STORE_ASSIGNED: bool = false;
}

/// A stored car as returned to callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Car<Id> {
    pub id: Id,
    pub title: String,
    pub color: String,
}

impl<Id> Car<Id> {
    pub fn new(id: Id, fields: CarFields) -> Self {
        Self { id, title: fields.title, color: fields.color }
    }
}

impl From<models::car::Model> for Car<i32> {
    fn from(m: models::car::Model) -> Self {
        Self { id: m.id, title: m.title, color: m.color }
    }
}

/// Validated `title`/`color` pair; both non-blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarFields {
    pub title: String,
    pub color: String,
}

impl CarFields {
    pub fn parse(title: Option<String>, color: Option<String>) -> Result<Self, ServiceError> {
        Ok(Self { title: required("title", title)?, color: required("color", color)? })
    }
}

fn required(field: &str, value: Option<String>) -> Result<String, ServiceError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        Some(_) => Err(ServiceError::invalid(format!("{field} must not be empty"))),
        None => Err(ServiceError::invalid(format!("{field} is required"))),
    }
}

/// Record handed to `CarRepository::insert`. `id` is only read by caller-assigned stores.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCar<Id> {
    pub id: Option<Id>,
    pub fields: CarFields,
}

/// POST body. Fields are optional at decode time so that missing values are
/// reported by validation with a field name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateCarInput<Id> {
    pub id: Option<Id>,
    pub title: Option<String>,
    pub color: Option<String>,
}

impl<Id> CreateCarInput<Id> {
    pub fn new(title: impl Into<String>, color: impl Into<String>) -> Self {
        Self { id: None, title: Some(title.into()), color: Some(color.into()) }
    }

    pub fn with_id(mut self, id: Id) -> Self {
        self.id = Some(id);
        self
    }
}

/// PUT body. Both fields replace the stored values; neither may be omitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateCarInput {
    pub title: Option<String>,
    pub color: Option<String>,
}

impl UpdateCarInput {
    pub fn new(title: impl Into<String>, color: impl Into<String>) -> Self {
        Self { title: Some(title.into()), color: Some(color.into()) }
    }
}
