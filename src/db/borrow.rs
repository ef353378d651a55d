use crate::db::models::BorrowRecord;
use crate::error::AppResult;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId, Document},
    results::{DeleteResult, InsertOneResult},
    Collection, Database,
};

const COLLECTION: &str = "borrow";

fn collection(db: &Database) -> Collection<Document> {
    db.collection::<Document>(COLLECTION)
}

/// Insert a borrow record. No uniqueness check: the same (book, email) pair
/// may be borrowed twice.
pub async fn insert_borrow(db: &Database, record: &BorrowRecord) -> AppResult<InsertOneResult> {
    let result = db
        .collection::<BorrowRecord>(COLLECTION)
        .insert_one(record)
        .await?;
    Ok(result)
}

pub async fn list_by_email(db: &Database, email: &str) -> AppResult<Vec<Document>> {
    let cursor = collection(db).find(doc! { "email": email }).await?;
    Ok(cursor.try_collect().await?)
}

/// Lookup for the `isBorrowed` check; both parameters are plain string
/// fields on the record, so no id parsing happens here.
pub async fn find_by_book_and_email(
    db: &Database,
    book_id: &str,
    email: &str,
) -> AppResult<Option<Document>> {
    Ok(collection(db)
        .find_one(doc! { "book_id": book_id, "email": email })
        .await?)
}

/// Delete a borrow record by its own `_id`. Deleting an absent id is not an
/// error; the result just reports zero deletions.
pub async fn delete_by_id(db: &Database, id: &str) -> AppResult<DeleteResult> {
    let oid = ObjectId::parse_str(id)?;
    let result = collection(db).delete_one(doc! { "_id": oid }).await?;
    Ok(result)
}
