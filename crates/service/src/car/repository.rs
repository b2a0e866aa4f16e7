use async_trait::async_trait;

use super::domain::{Car, CarFields, CarId, NewCar};
use crate::errors::ServiceError;

/// Storage abstraction for cars.
///
/// Implementations report backend faults as `ServiceError::StorageUnavailable`;
/// "no such car" is expressed through `None` or a zero row count, never as an error.
#[async_trait]
pub trait CarRepository: Send + Sync {
    type Id: CarId;

    /// All cars in storage-native order.
    async fn find_all(&self) -> Result<Vec<Car<Self::Id>>, ServiceError>;

    async fn find_by_id(&self, id: &Self::Id) -> Result<Option<Car<Self::Id>>, ServiceError>;

    /// Append one record and return its id.
    async fn insert(&self, car: NewCar<Self::Id>) -> Result<Self::Id, ServiceError>;

    /// Overwrite `title` and `color`; returns the number of rows touched.
    async fn replace_fields(&self, id: &Self::Id, fields: &CarFields) -> Result<u64, ServiceError>;

    /// Returns the number of rows removed.
    async fn remove(&self, id: &Self::Id) -> Result<u64, ServiceError>;
}
