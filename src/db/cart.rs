use crate::error::AppResult;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, Document},
    results::InsertOneResult,
    Collection, Database,
};

const COLLECTION: &str = "cart";

fn collection(db: &Database) -> Collection<Document> {
    db.collection::<Document>(COLLECTION)
}

/// Cart payloads have no fixed shape; whatever the frontend sends is stored
/// as-is.
pub async fn insert_cart_item(db: &Database, item: Document) -> AppResult<InsertOneResult> {
    Ok(collection(db).insert_one(item).await?)
}

/// Lists every cart item. There is no per-user scoping on cart data.
pub async fn list_cart_items(db: &Database) -> AppResult<Vec<Document>> {
    let cursor = collection(db).find(doc! {}).await?;
    Ok(cursor.try_collect().await?)
}
