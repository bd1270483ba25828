use crate::infrastructure::repositories::{BLOGS_COLLECTION, CATALOGS_COLLECTION};
use bson::{Document, doc};
use mongodb::{Client, Database, IndexModel};

/// Connect and make sure the server answers before the router starts.
pub async fn connect(uri: &str, database: &str) -> Result<Database, mongodb::error::Error> {
    let client = Client::with_uri_str(uri).await?;
    let db = client.database(database);
    db.run_command(doc! { "ping": 1 }).await?;
    Ok(db)
}

/// Lookup indexes for the public pages. The slug index is not unique:
/// legacy documents may share a slug.
pub async fn ensure_indexes(db: &Database) -> Result<(), mongodb::error::Error> {
    for name in [BLOGS_COLLECTION, CATALOGS_COLLECTION] {
        let collection = db.collection::<Document>(name);
        collection
            .create_index(IndexModel::builder().keys(doc! { "slug": 1 }).build())
            .await?;
        collection
            .create_index(
                IndexModel::builder()
                    .keys(doc! { "published": 1, "createdAt": -1 })
                    .build(),
            )
            .await?;
    }
    Ok(())
}
