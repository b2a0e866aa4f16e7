use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "cars")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub color: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;
    use sea_orm::{ActiveModelTrait, QueryOrder, Set};

    #[tokio::test]
    async fn insert_assigns_sequential_ids() -> anyhow::Result<()> {
        let conn = db::connect_sqlite_memory().await?;

        let first = ActiveModel { title: Set("Mercedes".into()), color: Set("Blue".into()), ..Default::default() }
            .insert(&conn)
            .await?;
        let second = ActiveModel { title: Set("Volvo".into()), color: Set("Red".into()), ..Default::default() }
            .insert(&conn)
            .await?;
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);

        let all = Entity::find().order_by_asc(Column::Id).all(&conn).await?;
        assert_eq!(all, vec![first, second]);
        Ok(())
    }
}
