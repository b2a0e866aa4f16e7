use async_trait::async_trait;
use sea_orm::{
    sea_query::Expr, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use models::car::{self, Entity as CarEntity};

use crate::car::domain::{Car, CarFields, NewCar};
use crate::car::repository::CarRepository;
use crate::errors::ServiceError;

/// SeaORM-backed repository over the `cars` table. Ids come from the table's autoincrement key.
#[derive(Clone)]
pub struct SeaOrmCarRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmCarRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl CarRepository for SeaOrmCarRepository {
    type Id = i32;

    async fn find_all(&self) -> Result<Vec<Car<i32>>, ServiceError> {
        let rows = CarEntity::find()
            .order_by_asc(car::Column::Id)
            .all(&self.db)
            .await
            .map_err(ServiceError::storage)?;
        Ok(rows.into_iter().map(Car::from).collect())
    }

    async fn find_by_id(&self, id: &i32) -> Result<Option<Car<i32>>, ServiceError> {
        let found = CarEntity::find_by_id(*id).one(&self.db).await.map_err(ServiceError::storage)?;
        Ok(found.map(Car::from))
    }

    async fn insert(&self, car: NewCar<i32>) -> Result<i32, ServiceError> {
        let am = car::ActiveModel {
            title: Set(car.fields.title),
            color: Set(car.fields.color),
            ..Default::default()
        };
        let res = CarEntity::insert(am).exec(&self.db).await.map_err(ServiceError::storage)?;
        Ok(res.last_insert_id)
    }

    async fn replace_fields(&self, id: &i32, fields: &CarFields) -> Result<u64, ServiceError> {
        let res = CarEntity::update_many()
            .col_expr(car::Column::Title, Expr::value(fields.title.clone()))
            .col_expr(car::Column::Color, Expr::value(fields.color.clone()))
            .filter(car::Column::Id.eq(*id))
            .exec(&self.db)
            .await
            .map_err(ServiceError::storage)?;
        Ok(res.rows_affected)
    }

    async fn remove(&self, id: &i32) -> Result<u64, ServiceError> {
        let res = CarEntity::delete_by_id(*id).exec(&self.db).await.map_err(ServiceError::storage)?;
        Ok(res.rows_affected)
    }
}
