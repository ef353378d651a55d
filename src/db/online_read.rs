use crate::error::AppResult;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, Document},
    Database,
};

const COLLECTION: &str = "onlineRead";

/// The online-read list is reference data: listed in full, never written
/// through this surface.
pub async fn list_online_read_books(db: &Database) -> AppResult<Vec<Document>> {
    let cursor = db.collection::<Document>(COLLECTION).find(doc! {}).await?;
    Ok(cursor.try_collect().await?)
}
