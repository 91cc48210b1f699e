use pretty_assertions::assert_eq;
use tests::models::*;
use tests::{insert_author, insert_book, memory_db};

#[test]
fn empty_table_is_an_empty_vec() {
    let db = memory_db();

    let books: Vec<Book> = db.all().unwrap();
    assert_eq!(books, vec![]);
}

#[test]
fn fetches_every_row_in_full() {
    let db = memory_db();
    let amy = insert_author(&db, "Amy Tan", Some("USA"));
    let kazuo = insert_author(&db, "Kazuo Ishiguro", None);

    let authors: Vec<Author> = db.all().unwrap();
    assert_eq!(
        authors,
        vec![
            Author {
                author_id: Some(amy),
                name: "Amy Tan".to_string(),
                country: Some("USA".to_string()),
            },
            Author {
                author_id: Some(kazuo),
                name: "Kazuo Ishiguro".to_string(),
                country: None,
            },
        ]
    );
}

#[test]
fn every_column_type_round_trips() {
    let db = memory_db();
    let author_id = insert_author(&db, "Frank Herbert", Some("USA"));

    db.insert(&Book {
        book_id: None,
        title: "Dune".to_string(),
        author_id: Some(author_id),
        price: 10.99,
        stock: 7,
        cover: Some(vec![0x89, 0x50, 0x4e, 0x47]),
    })
    .unwrap();
    let book_id = db.last_insert_rowid();

    let books: Vec<Book> = db.all().unwrap();
    assert_eq!(
        books,
        vec![Book {
            book_id: Some(book_id),
            title: "Dune".to_string(),
            author_id: Some(author_id),
            price: 10.99,
            stock: 7,
            cover: Some(vec![0x89, 0x50, 0x4e, 0x47]),
        }]
    );
}

#[test]
fn null_columns_decode_to_none() {
    let db = memory_db();
    insert_book(&db, "Anonymous Pamphlet", None, 1.0);

    let books: Vec<Book> = db.all().unwrap();
    assert_eq!(books[0].author_id, None);
    assert_eq!(books[0].cover, None);
}
