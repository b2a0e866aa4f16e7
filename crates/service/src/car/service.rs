use std::sync::Arc;

use tracing::{debug, info, instrument};

use super::domain::{Car, CarFields, CarId, CreateCarInput, NewCar, UpdateCarInput};
use super::repository::CarRepository;
use crate::errors::ServiceError;

/// Car business service independent of web framework and storage backend.
pub struct CarService<R: CarRepository> {
    repo: Arc<R>,
}

impl<R: CarRepository> Clone for CarService<R> {
    fn clone(&self) -> Self { Self { repo: Arc::clone(&self.repo) } }
}

impl<R: CarRepository> CarService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// Parse a path segment into this backend's id type.
    ///
    /// A segment that cannot be an id cannot match a record, so it is `NotFound`.
    pub fn parse_id(&self, raw: &str) -> Result<R::Id, ServiceError> {
        raw.parse::<R::Id>().map_err(|_| ServiceError::car_not_found())
    }

    pub async fn list(&self) -> Result<Vec<Car<R::Id>>, ServiceError> {
        self.repo.find_all().await
    }

    pub async fn get(&self, id: &R::Id) -> Result<Car<R::Id>, ServiceError> {
        self.repo.find_by_id(id).await?.ok_or_else(ServiceError::car_not_found)
    }

    /// Validate and store a new car.
    ///
    /// Store-assigned backends ignore `input.id`; caller-assigned backends require it.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use service::{CarService, CreateCarInput, MemoryCarRepository};
    /// let svc = CarService::new(Arc::new(MemoryCarRepository::new()));
    /// let input = CreateCarInput::new("Mercedes", "Blue").with_id("101".to_string());
    /// let car = tokio_test::block_on(svc.create(input)).unwrap();
    /// assert_eq!(car.id, "101");
    /// assert_eq!(car.title, "Mercedes");
    /// ```
    #[instrument(skip(self, input))]
    pub async fn create(&self, input: CreateCarInput<R::Id>) -> Result<Car<R::Id>, ServiceError> {
        let fields = CarFields::parse(input.title, input.color)?;
        let id = if <R::Id as CarId>::STORE_ASSIGNED {
            if let Some(ignored) = &input.id {
                debug!(%ignored, "client id ignored; store assigns ids");
            }
            None
        } else {
            match input.id {
                Some(id) if !id.to_string().trim().is_empty() => Some(id),
                Some(_) => return Err(ServiceError::invalid("id must not be empty")),
                None => return Err(ServiceError::invalid("id is required")),
            }
        };

        let assigned = self.repo.insert(NewCar { id, fields: fields.clone() }).await?;
        info!(id = %assigned, title = %fields.title, color = %fields.color, "car_created");
        Ok(Car::new(assigned, fields))
    }

    /// Replace `title` and `color` of an existing car. Nothing is written when validation fails.
    #[instrument(skip(self, id, input), fields(id = %id))]
    pub async fn update(&self, id: &R::Id, input: UpdateCarInput) -> Result<(), ServiceError> {
        let fields = CarFields::parse(input.title, input.color)?;
        let affected = self.repo.replace_fields(id, &fields).await?;
        if affected == 0 {
            return Err(ServiceError::car_not_found());
        }
        info!(title = %fields.title, color = %fields.color, "car_updated");
        Ok(())
    }

    #[instrument(skip(self, id), fields(id = %id))]
    pub async fn delete(&self, id: &R::Id) -> Result<(), ServiceError> {
        let removed = self.repo.remove(id).await?;
        if removed == 0 {
            return Err(ServiceError::car_not_found());
        }
        info!(removed, "car_deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{external_repo, memory_repo, sqlite_repo};

    /// Create input valid for either backend; caller-assigned stores get `key` as id.
    fn input<Id: CarId>(key: usize, title: &str, color: &str) -> CreateCarInput<Id> {
        let base = CreateCarInput::new(title, color);
        if Id::STORE_ASSIGNED { base } else { base.with_id(key.to_string().parse().ok().unwrap()) }
    }

    async fn create_then_get_round_trips<R: CarRepository>(svc: &CarService<R>) -> Result<(), ServiceError> {
        let created = svc.create(input(1, "Mercedes", "Blue")).await?;
        assert_eq!(created.title, "Mercedes");
        assert_eq!(created.color, "Blue");
        assert_eq!(svc.get(&created.id).await?, created);
        Ok(())
    }

    async fn delete_then_get_is_not_found<R: CarRepository>(svc: &CarService<R>) -> Result<(), ServiceError> {
        let created = svc.create(input(5, "Volvo", "Red")).await?;
        svc.delete(&created.id).await?;
        assert_eq!(svc.get(&created.id).await, Err(ServiceError::car_not_found()));
        assert_eq!(svc.delete(&created.id).await, Err(ServiceError::car_not_found()));
        Ok(())
    }

    async fn update_touches_only_target<R: CarRepository>(svc: &CarService<R>) -> Result<(), ServiceError> {
        let a = svc.create(input(10, "Mercedes", "Blue")).await?;
        let b = svc.create(input(11, "Volvo", "Red")).await?;
        svc.update(&a.id, UpdateCarInput::new("Mercedes", "Silver")).await?;
        assert_eq!(svc.get(&a.id).await?.color, "Silver");
        assert_eq!(svc.get(&b.id).await?, b);
        Ok(())
    }

    async fn list_counts_creates_minus_deletes<R: CarRepository>(svc: &CarService<R>) -> Result<(), ServiceError> {
        let before = svc.list().await?.len();
        let mut ids = Vec::new();
        for n in 0..5 {
            ids.push(svc.create(input(100 + n, &format!("car-{n}"), "Green")).await?.id);
        }
        for id in ids.iter().take(2) {
            svc.delete(id).await?;
        }
        assert_eq!(svc.list().await?.len(), before + 3);
        Ok(())
    }

    async fn invalid_update_writes_nothing<R: CarRepository>(svc: &CarService<R>) -> Result<(), ServiceError> {
        let a = svc.create(input(20, "Mercedes", "Blue")).await?;
        let missing_color = UpdateCarInput { title: Some("Audi".into()), color: None };
        assert!(matches!(svc.update(&a.id, missing_color).await, Err(ServiceError::InvalidInput(_))));
        let blank_title = UpdateCarInput::new(" ", "Black");
        assert!(matches!(svc.update(&a.id, blank_title).await, Err(ServiceError::InvalidInput(_))));
        assert_eq!(svc.get(&a.id).await?, a);
        Ok(())
    }

    #[tokio::test]
    async fn memory_backend_contract() -> Result<(), ServiceError> {
        let svc = CarService::new(memory_repo());
        create_then_get_round_trips(&svc).await?;
        delete_then_get_is_not_found(&svc).await?;
        update_touches_only_target(&svc).await?;
        list_counts_creates_minus_deletes(&svc).await?;
        invalid_update_writes_nothing(&svc).await?;
        Ok(())
    }

    #[tokio::test]
    async fn sqlite_backend_contract() -> anyhow::Result<()> {
        let svc = CarService::new(Arc::new(sqlite_repo().await?));
        create_then_get_round_trips(&svc).await?;
        delete_then_get_is_not_found(&svc).await?;
        update_touches_only_target(&svc).await?;
        list_counts_creates_minus_deletes(&svc).await?;
        invalid_update_writes_nothing(&svc).await?;
        Ok(())
    }

    #[tokio::test]
    async fn external_backend_contract() -> anyhow::Result<()> {
        let Some(repo) = external_repo().await else { return Ok(()); };
        let svc = CarService::new(Arc::new(repo));
        create_then_get_round_trips(&svc).await?;
        delete_then_get_is_not_found(&svc).await?;
        update_touches_only_target(&svc).await?;
        list_counts_creates_minus_deletes(&svc).await?;
        Ok(())
    }

    #[tokio::test]
    async fn get_unknown_id_is_not_found() -> anyhow::Result<()> {
        let mem = CarService::new(memory_repo());
        assert_eq!(mem.get(&"nope".to_string()).await, Err(ServiceError::car_not_found()));
        let db = CarService::new(Arc::new(sqlite_repo().await?));
        assert_eq!(db.get(&999).await, Err(ServiceError::car_not_found()));
        Ok(())
    }

    #[tokio::test]
    async fn update_absent_id_creates_nothing() -> anyhow::Result<()> {
        let svc = CarService::new(Arc::new(sqlite_repo().await?));
        let err = svc.update(&999, UpdateCarInput::new("Mercedes", "Blue")).await.unwrap_err();
        assert_eq!(err, ServiceError::car_not_found());
        assert!(svc.list().await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn durable_create_starts_at_one() -> anyhow::Result<()> {
        let svc = CarService::new(Arc::new(sqlite_repo().await?));
        let car = svc.create(CreateCarInput::new("Mercedes", "Blue").with_id(77)).await?;
        assert_eq!(car, Car { id: 1, title: "Mercedes".into(), color: "Blue".into() });
        Ok(())
    }

    #[tokio::test]
    async fn volatile_create_requires_id() {
        let svc = CarService::new(memory_repo());
        let err = svc.create(CreateCarInput::new("Mercedes", "Blue")).await.unwrap_err();
        assert_eq!(err, ServiceError::invalid("id is required"));
        let err = svc.create(CreateCarInput::new("Mercedes", "Blue").with_id("  ".to_string())).await.unwrap_err();
        assert_eq!(err, ServiceError::invalid("id must not be empty"));
        assert!(svc.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn volatile_duplicate_id_conflicts_but_duplicate_fields_do_not() -> Result<(), ServiceError> {
        let svc = CarService::new(memory_repo());
        svc.create(CreateCarInput::new("Mercedes", "Blue").with_id("101".to_string())).await?;
        let err = svc.create(CreateCarInput::new("Volvo", "Red").with_id("101".to_string())).await.unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(_)));
        svc.create(CreateCarInput::new("Mercedes", "Blue").with_id("102".to_string())).await?;
        assert_eq!(svc.list().await?.len(), 2);
        Ok(())
    }

    #[tokio::test]
    async fn create_rejects_blank_fields() {
        let svc = CarService::new(memory_repo());
        let err = svc.create(CreateCarInput::new("", "Blue").with_id("1".to_string())).await.unwrap_err();
        assert_eq!(err, ServiceError::invalid("title must not be empty"));
        assert!(svc.list().await.unwrap().is_empty());
    }

    #[test]
    fn parse_id_maps_garbage_to_not_found() {
        let mem = CarService::new(memory_repo());
        assert_eq!(mem.parse_id("abc"), Ok("abc".to_string()));
        let db = CarService::new(Arc::new(IntKeyedStub));
        assert_eq!(db.parse_id("12"), Ok(12));
        assert_eq!(db.parse_id("abc"), Err(ServiceError::car_not_found()));
    }

    /// Integer-keyed repository that is never called; only the id type matters.
    struct IntKeyedStub;

    #[async_trait::async_trait]
    impl CarRepository for IntKeyedStub {
        type Id = i32;
        async fn find_all(&self) -> Result<Vec<Car<i32>>, ServiceError> { Ok(vec![]) }
        async fn find_by_id(&self, _: &i32) -> Result<Option<Car<i32>>, ServiceError> { Ok(None) }
        async fn insert(&self, _: NewCar<i32>) -> Result<i32, ServiceError> { Err(ServiceError::storage("stub")) }
        async fn replace_fields(&self, _: &i32, _: &CarFields) -> Result<u64, ServiceError> { Ok(0) }
        async fn remove(&self, _: &i32) -> Result<u64, ServiceError> { Ok(0) }
    }
}
