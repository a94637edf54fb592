//! Image record queries.
//!
//! This module provides the row-level operations behind the image store:
//! insert, point lookup, listing (natural and sorted), and removal. Removal
//! functions capture the artifact paths of the rows they delete and commit
//! before returning, so the caller can run file cleanup against rows that are
//! already gone from the database.

use chrono::{DateTime, Utc};
use imagevault_common::{Error, ImageId, Result, SortField, SortOrder};
use rusqlite::{Connection, TransactionBehavior};

use crate::models::{ImageRecord, NewImage};

const IMAGE_COLUMNS: &str = "id, image_path, thumbnail_path, embedding_path, size, uploaded_at";

/// Parse an image record from a database row.
///
/// Expects columns in [`IMAGE_COLUMNS`] order.
fn parse_image_row(row: &rusqlite::Row) -> rusqlite::Result<ImageRecord> {
    let uploaded_at: String = row.get(5)?;
    Ok(ImageRecord {
        id: ImageId::from(row.get::<_, i64>(0)?),
        image_path: row.get(1)?,
        thumbnail_path: row.get(2)?,
        embedding_path: row.get(3)?,
        size: row.get(4)?,
        uploaded_at: DateTime::parse_from_rfc3339(&uploaded_at)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(
                    5,
                    rusqlite::types::Type::Text,
                    Box::new(e),
                )
            })?,
    })
}

/// Insert a new image record.
///
/// `uploaded_at` defaults to the current time when the caller did not
/// supply one.
///
/// # Returns
///
/// * `Ok(ImageId)` - The store-assigned id of the inserted record
/// * `Err(Error)` - If a database error occurs
pub fn insert_image(conn: &Connection, image: &NewImage) -> Result<ImageId> {
    let uploaded_at = image.uploaded_at.unwrap_or_else(Utc::now);

    conn.execute(
        "INSERT INTO images (image_path, thumbnail_path, embedding_path, size, uploaded_at)
         VALUES (:image_path, :thumbnail_path, :embedding_path, :size, :uploaded_at)",
        rusqlite::named_params! {
            ":image_path": &image.image_path,
            ":thumbnail_path": &image.thumbnail_path,
            ":embedding_path": &image.embedding_path,
            ":size": image.size,
            ":uploaded_at": uploaded_at.to_rfc3339(),
        },
    )
    .map_err(|e| Error::database(e.to_string()))?;

    Ok(ImageId::from(conn.last_insert_rowid()))
}

/// Get an image record by id.
///
/// # Returns
///
/// * `Ok(Some(ImageRecord))` - The record if found
/// * `Ok(None)` - If no row matches the id
/// * `Err(Error)` - If a database error occurs
pub fn get_image(conn: &Connection, id: ImageId) -> Result<Option<ImageRecord>> {
    let result = conn.query_row(
        &format!("SELECT {IMAGE_COLUMNS} FROM images WHERE id = :id"),
        rusqlite::named_params! { ":id": id.as_i64() },
        parse_image_row,
    );

    match result {
        Ok(record) => Ok(Some(record)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(Error::database(e.to_string())),
    }
}

/// List all image records in natural (rowid) order.
pub fn list_images(conn: &Connection) -> Result<Vec<ImageRecord>> {
    let mut stmt = conn
        .prepare(&format!("SELECT {IMAGE_COLUMNS} FROM images"))
        .map_err(|e| Error::database(e.to_string()))?;

    let records = stmt
        .query_map([], parse_image_row)
        .map_err(|e| Error::database(e.to_string()))?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| Error::database(e.to_string()))?;

    Ok(records)
}

/// List all image records ordered by the given field and direction.
///
/// The field and direction come from the closed enums in
/// `imagevault_common`, so the ORDER BY clause is assembled from fixed
/// column identifiers only. Ties sort by ascending id, which keeps the
/// ordering stable with respect to insertion order.
pub fn list_images_sorted(
    conn: &Connection,
    field: SortField,
    order: SortOrder,
) -> Result<Vec<ImageRecord>> {
    let sql = match field {
        SortField::Id => format!("SELECT {IMAGE_COLUMNS} FROM images ORDER BY id {}", order.sql()),
        _ => format!(
            "SELECT {IMAGE_COLUMNS} FROM images ORDER BY {} {}, id ASC",
            field.column(),
            order.sql()
        ),
    };

    let mut stmt = conn
        .prepare(&sql)
        .map_err(|e| Error::database(e.to_string()))?;

    let records = stmt
        .query_map([], parse_image_row)
        .map_err(|e| Error::database(e.to_string()))?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| Error::database(e.to_string()))?;

    Ok(records)
}

/// Delete an image row, returning the record it held.
///
/// Lookup and delete run in one immediate transaction: concurrent removals
/// of the same id serialize on the write lock, and only the first observes
/// the row. The transaction is committed before this function returns, so
/// the caller can clean up the returned record's files knowing the row is
/// already gone. An uncommitted transaction rolls back on drop.
///
/// # Returns
///
/// * `Ok(Some(ImageRecord))` - The row existed and was deleted
/// * `Ok(None)` - No row matched the id
/// * `Err(Error)` - If a database error occurs
pub fn remove_image(conn: &mut Connection, id: ImageId) -> Result<Option<ImageRecord>> {
    let tx = conn
        .transaction_with_behavior(TransactionBehavior::Immediate)
        .map_err(|e| Error::database(e.to_string()))?;

    let record = match tx.query_row(
        &format!("SELECT {IMAGE_COLUMNS} FROM images WHERE id = :id"),
        rusqlite::named_params! { ":id": id.as_i64() },
        parse_image_row,
    ) {
        Ok(record) => record,
        Err(rusqlite::Error::QueryReturnedNoRows) => return Ok(None),
        Err(e) => return Err(Error::database(e.to_string())),
    };

    tx.execute(
        "DELETE FROM images WHERE id = :id",
        rusqlite::named_params! { ":id": id.as_i64() },
    )
    .map_err(|e| Error::database(e.to_string()))?;

    tx.commit().map_err(|e| Error::database(e.to_string()))?;

    Ok(Some(record))
}

/// Delete every image row, returning the records they held.
///
/// All rows are deleted in one transaction and committed together; the
/// returned records are exactly the rows that were removed. An empty table
/// returns an empty vec without writing anything.
pub fn remove_all_images(conn: &mut Connection) -> Result<Vec<ImageRecord>> {
    let tx = conn
        .transaction_with_behavior(TransactionBehavior::Immediate)
        .map_err(|e| Error::database(e.to_string()))?;

    let records = {
        let mut stmt = tx
            .prepare(&format!("SELECT {IMAGE_COLUMNS} FROM images"))
            .map_err(|e| Error::database(e.to_string()))?;

        let records = stmt
            .query_map([], parse_image_row)
            .map_err(|e| Error::database(e.to_string()))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| Error::database(e.to_string()))?;
        records
    };

    if records.is_empty() {
        return Ok(records);
    }

    tx.execute("DELETE FROM images", [])
        .map_err(|e| Error::database(e.to_string()))?;

    tx.commit().map_err(|e| Error::database(e.to_string()))?;

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{init_memory_pool, PooledConnection};
    use chrono::TimeZone;

    fn setup_test_db() -> PooledConnection {
        let pool = init_memory_pool().unwrap();
        pool.get().unwrap()
    }

    fn sample_image(stem: &str, size: i64) -> NewImage {
        NewImage {
            image_path: format!("uploads/{stem}.jpg"),
            thumbnail_path: format!("thumbnails/{stem}.jpg"),
            embedding_path: format!("embeddings/{stem}.bin"),
            size,
            uploaded_at: None,
        }
    }

    #[test]
    fn test_insert_and_get_roundtrip() {
        let conn = setup_test_db();
        let uploaded_at = Utc.with_ymd_and_hms(2026, 3, 14, 9, 26, 53).unwrap();
        let new = NewImage {
            uploaded_at: Some(uploaded_at),
            ..sample_image("cat", 204_800)
        };

        let id = insert_image(&conn, &new).unwrap();
        let found = get_image(&conn, id).unwrap().unwrap();

        assert_eq!(found.id, id);
        assert_eq!(found.image_path, "uploads/cat.jpg");
        assert_eq!(found.thumbnail_path, "thumbnails/cat.jpg");
        assert_eq!(found.embedding_path, "embeddings/cat.bin");
        assert_eq!(found.size, 204_800);
        assert_eq!(found.uploaded_at, uploaded_at);
    }

    #[test]
    fn test_insert_defaults_uploaded_at() {
        let conn = setup_test_db();
        let before = Utc::now();

        let id = insert_image(&conn, &sample_image("dog", 1)).unwrap();
        let found = get_image(&conn, id).unwrap().unwrap();

        assert!(found.uploaded_at >= before);
        assert!(found.uploaded_at <= Utc::now());
    }

    #[test]
    fn test_get_image_not_found() {
        let conn = setup_test_db();

        let found = get_image(&conn, ImageId::from(999)).unwrap();
        assert!(found.is_none());
    }

    #[test]
    fn test_list_images_natural_order() {
        let conn = setup_test_db();

        let a = insert_image(&conn, &sample_image("a", 1)).unwrap();
        let b = insert_image(&conn, &sample_image("b", 2)).unwrap();
        let c = insert_image(&conn, &sample_image("c", 3)).unwrap();

        let records = list_images(&conn).unwrap();
        let ids: Vec<_> = records.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![a, b, c]);
    }

    #[test]
    fn test_list_images_empty() {
        let conn = setup_test_db();
        assert!(list_images(&conn).unwrap().is_empty());
    }

    #[test]
    fn test_list_sorted_by_size() {
        let conn = setup_test_db();

        // Sizes [10, 5, 20] inserted as ids 1, 2, 3.
        insert_image(&conn, &sample_image("first", 10)).unwrap();
        insert_image(&conn, &sample_image("second", 5)).unwrap();
        insert_image(&conn, &sample_image("third", 20)).unwrap();

        let asc = list_images_sorted(&conn, SortField::Size, SortOrder::Asc).unwrap();
        let sizes: Vec<_> = asc.iter().map(|r| r.size).collect();
        let ids: Vec<_> = asc.iter().map(|r| r.id.as_i64()).collect();
        assert_eq!(sizes, vec![5, 10, 20]);
        assert_eq!(ids, vec![2, 1, 3]);

        let desc = list_images_sorted(&conn, SortField::Size, SortOrder::Desc).unwrap();
        let sizes: Vec<_> = desc.iter().map(|r| r.size).collect();
        let ids: Vec<_> = desc.iter().map(|r| r.id.as_i64()).collect();
        assert_eq!(sizes, vec![20, 10, 5]);
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_list_sorted_by_uploaded_at() {
        let conn = setup_test_db();

        let older = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        let newer = Utc.with_ymd_and_hms(2026, 6, 1, 0, 0, 0).unwrap();

        let late = insert_image(
            &conn,
            &NewImage {
                uploaded_at: Some(newer),
                ..sample_image("late", 1)
            },
        )
        .unwrap();
        let early = insert_image(
            &conn,
            &NewImage {
                uploaded_at: Some(older),
                ..sample_image("early", 1)
            },
        )
        .unwrap();

        let records = list_images_sorted(&conn, SortField::UploadedAt, SortOrder::Asc).unwrap();
        let ids: Vec<_> = records.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![early, late]);
    }

    #[test]
    fn test_list_sorted_ties_keep_insertion_order() {
        let conn = setup_test_db();

        let a = insert_image(&conn, &sample_image("a", 7)).unwrap();
        let b = insert_image(&conn, &sample_image("b", 7)).unwrap();
        let c = insert_image(&conn, &sample_image("c", 7)).unwrap();

        for order in [SortOrder::Asc, SortOrder::Desc] {
            let records = list_images_sorted(&conn, SortField::Size, order).unwrap();
            let ids: Vec<_> = records.iter().map(|r| r.id).collect();
            assert_eq!(ids, vec![a, b, c]);
        }
    }

    #[test]
    fn test_remove_image() {
        let mut conn = setup_test_db();

        let id = insert_image(&conn, &sample_image("doomed", 8)).unwrap();

        let removed = remove_image(&mut conn, id).unwrap().unwrap();
        assert_eq!(removed.id, id);
        assert_eq!(removed.image_path, "uploads/doomed.jpg");

        assert!(get_image(&conn, id).unwrap().is_none());
    }

    #[test]
    fn test_remove_image_not_found() {
        let mut conn = setup_test_db();

        insert_image(&conn, &sample_image("survivor", 8)).unwrap();

        let removed = remove_image(&mut conn, ImageId::from(999)).unwrap();
        assert!(removed.is_none());

        // Table is unchanged
        assert_eq!(list_images(&conn).unwrap().len(), 1);
    }

    #[test]
    fn test_remove_all_images() {
        let mut conn = setup_test_db();

        insert_image(&conn, &sample_image("a", 1)).unwrap();
        insert_image(&conn, &sample_image("b", 2)).unwrap();
        insert_image(&conn, &sample_image("c", 3)).unwrap();

        let removed = remove_all_images(&mut conn).unwrap();
        assert_eq!(removed.len(), 3);
        assert!(list_images(&conn).unwrap().is_empty());
    }

    #[test]
    fn test_remove_all_images_empty() {
        let mut conn = setup_test_db();

        let removed = remove_all_images(&mut conn).unwrap();
        assert!(removed.is_empty());
    }
}
