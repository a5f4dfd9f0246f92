use quotestore_core::db::open_db_in_memory;
use quotestore_core::{
    QuoteRepository, QuoteRow, QuoteService, RepoError, RepoResult, SqliteQuoteRepository,
};
use serde_json::{json, Value};
use std::cell::RefCell;

/// Records the rows the service hands to persistence.
#[derive(Default)]
struct RecordingRepo {
    rows: RefCell<Vec<QuoteRow>>,
}

impl QuoteRepository for RecordingRepo {
    fn list_rows(&self) -> RepoResult<Vec<QuoteRow>> {
        Ok(self.rows.borrow().clone())
    }

    fn get_row(&self, id: &str) -> RepoResult<Option<QuoteRow>> {
        Ok(self.rows.borrow().iter().find(|row| row.id == id).cloned())
    }

    fn find_row_by_input(&self, input: &str) -> RepoResult<Option<QuoteRow>> {
        Ok(self
            .rows
            .borrow()
            .iter()
            .find(|row| row.input == input)
            .cloned())
    }

    fn count_rows(&self) -> RepoResult<usize> {
        Ok(self.rows.borrow().len())
    }

    fn insert_unique_input(&mut self, row: &QuoteRow) -> RepoResult<()> {
        if let Some(existing) = self.find_row_by_input(&row.input)? {
            return Err(RepoError::DuplicateInput {
                existing_id: existing.id,
            });
        }
        self.rows.borrow_mut().push(row.clone());
        Ok(())
    }

    fn delete_row(&self, id: &str) -> RepoResult<bool> {
        let mut rows = self.rows.borrow_mut();
        let before = rows.len();
        rows.retain(|row| row.id != id);
        Ok(rows.len() != before)
    }
}

#[test]
fn service_assigns_id_and_default_name_before_persisting() {
    let mut service = QuoteService::new(RecordingRepo::default());
    let saved = service
        .add(json!({"x": 1, "y": [true, null]}), json!({"total": 10}), None)
        .unwrap();
    assert!(!saved.id.is_empty());

    let listed = service.list::<Value, Value>().unwrap();
    assert_eq!(listed, vec![saved.clone()]);
    assert_eq!(listed[0].quote_name, "Untitled Quote");

    let fetched = service.get::<Value, Value>(&saved.id).unwrap().unwrap();
    assert_eq!(fetched, saved);
    assert!(service.remove(&saved.id).unwrap());
    assert_eq!(service.count().unwrap(), 0);
}

#[test]
fn service_rejects_serialized_equal_input_via_repository() {
    let mut service = QuoteService::new(RecordingRepo::default());
    service.add(json!({"x": 1}), json!({}), None).unwrap();

    let err = service.add(json!({"x": 1}), json!({"other": 1}), None).unwrap_err();
    assert!(err.is_duplicate_input());
    assert_eq!(service.count().unwrap(), 1);
}

#[test]
fn service_over_sqlite_stores_serialized_text_verbatim() {
    let conn = open_db_in_memory().unwrap();
    let saved_id = {
        let repo = SqliteQuoteRepository::try_new(&conn).unwrap();
        let mut service = QuoteService::new(repo);
        service
            .add(json!({"x": 1}), json!({"total": 10}), None)
            .unwrap()
            .id
    };

    let (input, result, name): (String, String, String) = conn
        .query_row(
            "SELECT input, result, quoteName FROM quotes WHERE id = ?1;",
            [saved_id.as_str()],
            |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
        )
        .unwrap();
    assert_eq!(input, r#"{"x":1}"#);
    assert_eq!(result, r#"{"total":10}"#);
    assert_eq!(name, "Untitled Quote");
}

#[test]
fn rows_written_outside_the_service_are_listed() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO quotes (id, input, result, quoteName) VALUES ('legacy1', '{\"x\":3}', '{\"total\":30}', 'Old');",
        [],
    )
    .unwrap();

    let repo = SqliteQuoteRepository::try_new(&conn).unwrap();
    let mut service = QuoteService::new(repo);
    let listed = service.list::<Value, Value>().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, "legacy1");
    assert_eq!(listed[0].input, json!({"x": 3}));

    let err = service.add(json!({"x": 3}), json!({}), None).unwrap_err();
    assert!(matches!(err, RepoError::DuplicateInput { existing_id } if existing_id == "legacy1"));
}
