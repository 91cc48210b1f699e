use pretty_assertions::assert_eq;
use tests::models::*;
use tests::{insert_author, insert_book, memory_db};
use trestle::Model;

#[test]
fn projection_resolves_by_name_not_position() {
    let db = memory_db();
    let id = insert_book(&db, "Emma", None, 6.25);

    // Columns deliberately out of schema order.
    let books = Book::query()
        .sql(r#"SELECT "Price", "Title", "BookID" FROM "Books""#)
        .all(&db)
        .unwrap();

    assert_eq!(books.len(), 1);
    assert_eq!(books[0].book_id, Some(id));
    assert_eq!(books[0].title, "Emma");
    assert_eq!(books[0].price, 6.25);
}

#[test]
fn omitted_columns_fall_back_to_defaults() {
    let db = memory_db();
    let author = insert_author(&db, "Jane Austen", Some("UK"));
    db.insert(&Book {
        title: "Emma".to_string(),
        author_id: Some(author),
        price: 6.25,
        stock: 4,
        ..Book::default()
    })
    .unwrap();

    let books = Book::query()
        .sql(r#"SELECT "Title" FROM "Books""#)
        .all(&db)
        .unwrap();

    assert_eq!(
        books,
        vec![Book {
            book_id: None,
            title: "Emma".to_string(),
            author_id: None,
            price: 0.0,
            stock: 0,
            cover: None,
        }]
    );
}

#[test]
fn aliased_away_columns_are_treated_as_omitted() {
    let db = memory_db();
    insert_book(&db, "Emma", None, 6.25);

    let books = Book::query()
        .sql(r#"SELECT "Title" AS "BookTitle", "BookID" FROM "Books""#)
        .all(&db)
        .unwrap();

    assert_eq!(books[0].title, "");
    assert!(books[0].book_id.is_some());
}

#[test]
fn aliases_can_map_computed_columns() {
    let db = memory_db();
    insert_book(&db, "Emma", None, 6.25);

    let books = Book::query()
        .sql(r#"SELECT "BookID", "Price" * 2 AS "Price" FROM "Books""#)
        .all(&db)
        .unwrap();

    assert_eq!(books[0].price, 12.5);
}

#[test]
fn duplicate_result_names_resolve_to_the_last() {
    let db = memory_db();
    insert_book(&db, "Emma", None, 6.25);

    let books = Book::query()
        .sql(r#"SELECT 'first' AS "Title", 'second' AS "Title" FROM "Books""#)
        .all(&db)
        .unwrap();

    assert_eq!(books[0].title, "second");
}

#[test]
fn unknown_result_columns_are_ignored() {
    let db = memory_db();
    insert_book(&db, "Emma", None, 6.25);

    let books = Book::query()
        .sql(r#"SELECT "Title", 42 AS "NotAColumn" FROM "Books""#)
        .all(&db)
        .unwrap();

    assert_eq!(books[0].title, "Emma");
}

#[test]
fn custom_sql_with_a_where_clause() {
    let db = memory_db();
    insert_book(&db, "Cheap", None, 2.0);
    insert_book(&db, "Dear", None, 20.0);

    let books = Book::query()
        .sql(r#"SELECT "BookID", "Title", "Price" FROM "Books" WHERE "Price" > 10"#)
        .all(&db)
        .unwrap();

    assert_eq!(books.len(), 1);
    assert_eq!(books[0].title, "Dear");
}

#[test]
fn key_lookup_through_custom_sql() {
    let db = memory_db();
    let id = insert_book(&db, "Emma", None, 6.25);
    insert_book(&db, "Dune", None, 10.99);

    // The key predicate lands on the caller's projection.
    let book = Book::query()
        .sql(r#"SELECT "BookID", "Title" FROM "Books""#)
        .find(&db, id)
        .unwrap()
        .unwrap();
    assert_eq!(book.book_id, Some(id));
    assert_eq!(book.title, "Emma");
    assert_eq!(book.price, 0.0);

    let missing = Book::query()
        .sql(r#"SELECT "BookID", "Title" FROM "Books""#)
        .find(&db, 404)
        .unwrap();
    assert!(missing.is_none());
}

#[test]
fn view_rows_decode_like_any_table() {
    let db = memory_db();
    let author = insert_author(&db, "Frank Herbert", Some("USA"));
    insert_book(&db, "Dune", Some(author), 10.99);
    insert_book(&db, "Pamphlet", None, 0.50);

    let mut entries: Vec<CatalogEntry> = db.all().unwrap();
    entries.sort_by(|a, b| a.title.cmp(&b.title));

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].title, "Dune");
    assert_eq!(entries[0].author.as_deref(), Some("Frank Herbert"));
    assert_eq!(entries[1].title, "Pamphlet");
    assert_eq!(entries[1].author, None);
}
