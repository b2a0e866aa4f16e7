use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::car::domain::{Car, CarFields, NewCar};
use crate::car::repository::CarRepository;
use crate::errors::ServiceError;

/// Process-local car list keyed by caller-supplied string ids.
///
/// Records keep insertion order and are looked up by linear scan. Every read and
/// mutation goes through one `RwLock`, and the duplicate-id check shares the write
/// guard with the append.
#[derive(Default)]
pub struct MemoryCarRepository {
    cars: RwLock<Vec<Car<String>>>,
}

impl MemoryCarRepository {
    pub fn new() -> Self { Self::default() }

    /// Start with a fixed set of records, kept in the given order.
    pub fn with_cars(cars: Vec<Car<String>>) -> Self {
        Self { cars: RwLock::new(cars) }
    }

    pub async fn len(&self) -> usize { self.cars.read().await.len() }

    pub async fn is_empty(&self) -> bool { self.cars.read().await.is_empty() }
}

#[async_trait]
impl CarRepository for MemoryCarRepository {
    type Id = String;

    async fn find_all(&self) -> Result<Vec<Car<String>>, ServiceError> {
        Ok(self.cars.read().await.clone())
    }

    async fn find_by_id(&self, id: &String) -> Result<Option<Car<String>>, ServiceError> {
        let cars = self.cars.read().await;
        Ok(cars.iter().find(|c| &c.id == id).cloned())
    }

    async fn insert(&self, car: NewCar<String>) -> Result<String, ServiceError> {
        let Some(id) = car.id else { return Err(ServiceError::invalid("id is required")); };
        let mut cars = self.cars.write().await;
        if cars.iter().any(|c| c.id == id) {
            return Err(ServiceError::Conflict(format!("Car with id {id} already exists")));
        }
        cars.push(Car::new(id.clone(), car.fields));
        Ok(id)
    }

    async fn replace_fields(&self, id: &String, fields: &CarFields) -> Result<u64, ServiceError> {
        let mut cars = self.cars.write().await;
        match cars.iter_mut().find(|c| &c.id == id) {
            Some(c) => {
                c.title = fields.title.clone();
                c.color = fields.color.clone();
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn remove(&self, id: &String) -> Result<u64, ServiceError> {
        let mut cars = self.cars.write().await;
        match cars.iter().position(|c| &c.id == id) {
            Some(idx) => {
                cars.remove(idx);
                Ok(1)
            }
            None => Ok(0),
        }
    }
}
