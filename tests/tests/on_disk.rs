use pretty_assertions::assert_eq;
use tests::models::*;
use tests::DDL;
use trestle::{Connection, Sqlite};

#[test]
fn data_survives_reopening_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("library.db");

    {
        let db = Sqlite::open(&path).connect().unwrap();
        db.execute_batch(DDL).unwrap();
        db.insert(&Member {
            member_id: "M-001".to_string(),
            name: "Ada".to_string(),
            city: Some("London".to_string()),
        })
        .unwrap();
    }

    let db = Sqlite::open(&path).connect().unwrap();
    let member: Member = db.get("M-001").unwrap();
    assert_eq!(member.name, "Ada");
}

#[test]
fn file_urls_connect_to_the_same_database() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("library.db");

    {
        let db = Sqlite::open(&path).connect().unwrap();
        db.execute_batch(DDL).unwrap();
        db.insert(&Member {
            member_id: "M-002".to_string(),
            name: "Grace".to_string(),
            city: None,
        })
        .unwrap();
    }

    let locator = Sqlite::new(format!("sqlite:{}", path.display())).unwrap();
    let db = locator.connect().unwrap();
    assert!(db.find::<Member>("M-002").unwrap().is_some());
}

#[test]
fn memory_urls_open_a_private_database() {
    let db = Sqlite::new("sqlite::memory:").unwrap().connect().unwrap();
    db.execute_batch(DDL).unwrap();

    let members: Vec<Member> = db.all().unwrap();
    assert_eq!(members, vec![]);
}

#[test]
fn unreachable_paths_fail_at_open() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("library.db");

    let err = Connection::open(&path).unwrap_err();
    assert!(err.is_open());
    assert!(err.to_string().contains("failed to open database"));
}
