use pretty_assertions::assert_eq;
use tests::{insert_book, memory_db, models::*};
use trestle::Model;

#[test]
fn numeric_text_coerces_to_integer() {
    let db = memory_db();
    insert_book(&db, "Emma", None, 6.25);

    let books = Book::query()
        .sql(r#"SELECT "Title", '12abc' AS "Stock" FROM "Books""#)
        .all(&db)
        .unwrap();
    assert_eq!(books[0].stock, 12);
}

#[test]
fn non_numeric_text_coerces_to_zero() {
    let db = memory_db();
    insert_book(&db, "Emma", None, 6.25);

    let books = Book::query()
        .sql(r#"SELECT "Title", 'plenty' AS "Stock" FROM "Books""#)
        .all(&db)
        .unwrap();
    assert_eq!(books[0].stock, 0);
}

#[test]
fn reals_truncate_toward_zero_as_integers() {
    let db = memory_db();
    insert_book(&db, "Emma", None, 6.25);

    let books = Book::query()
        .sql(r#"SELECT "Title", 3.99 AS "Stock", -2.7 AS "BookID" FROM "Books""#)
        .all(&db)
        .unwrap();
    assert_eq!(books[0].stock, 3);
    assert_eq!(books[0].book_id, Some(-2));
}

#[test]
fn integers_widen_to_reals() {
    let db = memory_db();
    insert_book(&db, "Emma", None, 6.25);

    let books = Book::query()
        .sql(r#"SELECT "Title", 7 AS "Price" FROM "Books""#)
        .all(&db)
        .unwrap();
    assert_eq!(books[0].price, 7.0);
}

#[test]
fn numbers_render_as_text() {
    let db = memory_db();
    insert_book(&db, "Emma", None, 6.25);

    let books = Book::query()
        .sql(r#"SELECT 42 AS "Title" FROM "Books""#)
        .all(&db)
        .unwrap();
    assert_eq!(books[0].title, "42");
}

#[test]
fn blob_bytes_reinterpret_as_text() {
    let db = memory_db();
    insert_book(&db, "Emma", None, 6.25);

    let books = Book::query()
        .sql(r#"SELECT X'414243' AS "Title" FROM "Books""#)
        .all(&db)
        .unwrap();
    assert_eq!(books[0].title, "ABC");
}

#[test]
fn text_bytes_reinterpret_as_blob() {
    let db = memory_db();
    insert_book(&db, "Emma", None, 6.25);

    let books = Book::query()
        .sql(r#"SELECT "Title", 'abc' AS "Cover" FROM "Books""#)
        .all(&db)
        .unwrap();
    assert_eq!(books[0].cover.as_deref(), Some(&b"abc"[..]));
}

#[test]
fn null_in_a_not_null_column_becomes_the_default() {
    let db = memory_db();
    insert_book(&db, "Emma", None, 6.25);

    let books = Book::query()
        .sql(r#"SELECT "BookID", NULL AS "Title", NULL AS "Stock" FROM "Books""#)
        .all(&db)
        .unwrap();
    assert_eq!(books[0].title, "");
    assert_eq!(books[0].stock, 0);
}
