//! Service layer for the car resource.
//! - `CarService` holds the business rules and validation.
//! - `CarRepository` is the storage seam, with SeaORM and in-memory implementations.
//! - All failures surface as `ServiceError`.

pub mod errors;
pub mod car;
#[cfg(test)]
pub mod test_support;

pub use car::{
    domain::{Car, CarFields, CarId, CreateCarInput, NewCar, UpdateCarInput},
    repo::{memory::MemoryCarRepository, seaorm::SeaOrmCarRepository},
    repository::CarRepository,
    service::CarService,
};
pub use errors::ServiceError;
