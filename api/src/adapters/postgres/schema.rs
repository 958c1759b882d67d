//! Schema bootstrap
//!
//! Creates the tables described by the SeaORM entities when they are missing.
//! Existing tables are left untouched.

use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, Schema};

use crate::entity::{clients, deliveries};

pub async fn ensure_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    let mut clients_table = schema.create_table_from_entity(clients::Entity);
    clients_table.if_not_exists();
    db.execute(backend.build(&clients_table)).await?;

    let mut deliveries_table = schema.create_table_from_entity(deliveries::Entity);
    deliveries_table.if_not_exists();
    db.execute(backend.build(&deliveries_table)).await?;

    for mut index in schema.create_index_from_entity(deliveries::Entity) {
        index.if_not_exists();
        db.execute(backend.build(&index)).await?;
    }

    tracing::info!("Database schema is up to date");
    Ok(())
}
