use crate::db::models::{Book, BookUpdate};
use crate::error::AppResult;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId, to_document, Document},
    results::{InsertOneResult, UpdateResult},
    Collection, Database,
};

const COLLECTION: &str = "books";

fn collection(db: &Database) -> Collection<Document> {
    db.collection::<Document>(COLLECTION)
}

pub async fn insert_book(db: &Database, book: &Book) -> AppResult<InsertOneResult> {
    let result = db
        .collection::<Book>(COLLECTION)
        .insert_one(book)
        .await?;
    Ok(result)
}

pub async fn list_books(db: &Database) -> AppResult<Vec<Document>> {
    let cursor = collection(db).find(doc! {}).await?;
    Ok(cursor.try_collect().await?)
}

pub async fn list_books_by_category(db: &Database, category: &str) -> AppResult<Vec<Document>> {
    let cursor = collection(db)
        .find(doc! { "category_name": category })
        .await?;
    Ok(cursor.try_collect().await?)
}

pub async fn find_book_by_id(db: &Database, id: &str) -> AppResult<Option<Document>> {
    let oid = ObjectId::parse_str(id)?;
    Ok(collection(db).find_one(doc! { "_id": oid }).await?)
}

/// Replace the five descriptive fields, inserting the document if the id
/// matches nothing. `quantity` is never part of the `$set`.
pub async fn upsert_book(db: &Database, id: &str, update: &BookUpdate) -> AppResult<UpdateResult> {
    let oid = ObjectId::parse_str(id)?;
    let fields = to_document(update)?;
    let result = collection(db)
        .update_one(doc! { "_id": oid }, doc! { "$set": fields })
        .upsert(true)
        .await?;
    Ok(result)
}

/// Atomically add `delta` to the book's quantity (−1 on borrow, +1 on
/// return). No bounds: quantity may drift negative.
pub async fn adjust_quantity(db: &Database, id: &str, delta: i64) -> AppResult<UpdateResult> {
    let oid = ObjectId::parse_str(id)?;
    let result = collection(db)
        .update_one(doc! { "_id": oid }, doc! { "$inc": { "quantity": delta } })
        .await?;
    Ok(result)
}
