use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::{EntityTrait, Schema};

use crate::entity::{Cashiers, Customers, OrderItems, Orders, Products, Returns, Suppliers};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let schema = Schema::new(manager.get_database_backend());

        // Parents first so the foreign keys resolve.
        create(manager, &schema, Suppliers).await?;
        create(manager, &schema, Customers).await?;
        create(manager, &schema, Cashiers).await?;
        create(manager, &schema, Products).await?;
        create(manager, &schema, Orders).await?;
        create(manager, &schema, OrderItems).await?;
        create(manager, &schema, Returns).await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        drop_table(manager, Returns).await?;
        drop_table(manager, OrderItems).await?;
        drop_table(manager, Orders).await?;
        drop_table(manager, Products).await?;
        drop_table(manager, Cashiers).await?;
        drop_table(manager, Customers).await?;
        drop_table(manager, Suppliers).await?;
        Ok(())
    }
}

async fn create<E: EntityTrait>(
    manager: &SchemaManager<'_>,
    schema: &Schema,
    entity: E,
) -> Result<(), DbErr> {
    manager
        .create_table(schema.create_table_from_entity(entity).if_not_exists().to_owned())
        .await
}

async fn drop_table<E: EntityTrait>(manager: &SchemaManager<'_>, entity: E) -> Result<(), DbErr> {
    manager
        .drop_table(Table::drop().table(entity).if_exists().to_owned())
        .await
}
