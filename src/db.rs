//! Course database: the worked example of streaming rows lazily.
//!
//! A thin rusqlite wrapper over a single `courses` table. Seeding clears
//! and repopulates the table inside one transaction; reading streams rows
//! as a [`Seq2`], surfacing a per-row decode failure as a carried error
//! next to a default-valued record instead of aborting the stream. Whether
//! to skip the bad row or stop is the consumer's decision.

use std::path::{Path, PathBuf};

use rand::Rng;
use rusqlite::{params, Connection, Row};
use thiserror::Error;

use crate::seq::Seq2;

const COURSE_NAMES: &[&str] = &[
    "Chem-1",
    "Chem-2",
    "Physics-1",
    "Physics-2",
    "Physics-3",
    "Calculus-1",
    "Calculus-2",
    "Calculus-3",
];

const INSTITUTIONS: &[&str] = &["SJSU", "SDSU", "UCB", "UCSF"];

const SELECT_SQL: &str = "SELECT id, name, institution FROM courses";
const INSERT_SQL: &str = "INSERT INTO courses (name, institution) VALUES (?1, ?2)";
const DROP_TABLE_SQL: &str = "DROP TABLE IF EXISTS courses";
const CREATE_TABLE_SQL: &str = "CREATE TABLE IF NOT EXISTS courses (
    id INTEGER NOT NULL PRIMARY KEY AUTOINCREMENT,
    name TEXT,
    institution TEXT
)";

#[derive(Debug, Error)]
pub enum DbError {
    #[error("failed to open database: {0}")]
    Open(#[source] rusqlite::Error),
    #[error("failed to seed courses: {0}")]
    Seed(#[source] rusqlite::Error),
    #[error("failed to query courses: {0}")]
    Query(#[source] rusqlite::Error),
    #[error("failed to decode row: {0}")]
    Decode(#[source] rusqlite::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Course {
    pub id: i64,
    pub name: String,
    pub institution: String,
}

pub struct CoursesDb {
    conn: Connection,
    path: PathBuf,
}

impl CoursesDb {
    /// Opens (creating if needed) `courses.db` inside `data_dir`.
    pub fn open(data_dir: &Path) -> Result<Self, DbError> {
        let path = data_dir.join("courses.db");
        let conn = Connection::open(&path).map_err(DbError::Open)?;
        Ok(CoursesDb { conn, path })
    }

    /// Drops and recreates the table, then inserts `count` randomly chosen
    /// name/institution pairs inside one all-or-nothing transaction.
    pub fn seed(&mut self, count: usize) -> Result<(), DbError> {
        self.conn.execute(DROP_TABLE_SQL, []).map_err(DbError::Seed)?;
        self.conn
            .execute(CREATE_TABLE_SQL, [])
            .map_err(DbError::Seed)?;

        let tx = self.conn.transaction().map_err(DbError::Seed)?;
        {
            let mut insert = tx.prepare(INSERT_SQL).map_err(DbError::Seed)?;
            let mut rng = rand::thread_rng();
            for _ in 0..count {
                let name = COURSE_NAMES[rng.gen_range(0..COURSE_NAMES.len())];
                let institution = INSTITUTIONS[rng.gen_range(0..INSTITUTIONS.len())];
                // Any failed insert drops the transaction unfinished, which
                // rolls the whole seed back.
                insert
                    .execute(params![name, institution])
                    .map_err(DbError::Seed)?;
            }
        }
        tx.commit().map_err(DbError::Seed)?;
        Ok(())
    }

    /// Streams every row lazily. The producer opens its own connection so
    /// the stream owns what it needs and can be handed to a pull adapter.
    ///
    /// A row that fails to decode is yielded as `(Course::default(),
    /// Some(err))` and the stream keeps going. A failure to run the query
    /// at all yields one errored element and ends the stream.
    pub fn courses(&self) -> Seq2<Course, DbError> {
        let path = self.path.clone();
        Seq2::new(move |yield_row| {
            let conn = match Connection::open(&path) {
                Ok(conn) => conn,
                Err(err) => {
                    yield_row(Course::default(), Some(DbError::Open(err)));
                    return;
                }
            };
            let mut select = match conn.prepare(SELECT_SQL) {
                Ok(select) => select,
                Err(err) => {
                    yield_row(Course::default(), Some(DbError::Query(err)));
                    return;
                }
            };
            let mut rows = match select.query([]) {
                Ok(rows) => rows,
                Err(err) => {
                    yield_row(Course::default(), Some(DbError::Query(err)));
                    return;
                }
            };

            loop {
                match rows.next() {
                    Ok(Some(row)) => {
                        let (course, err) = decode_course(row);
                        if !yield_row(course, err) {
                            return;
                        }
                    }
                    Ok(None) => return,
                    Err(err) => {
                        yield_row(Course::default(), Some(DbError::Query(err)));
                        return;
                    }
                }
            }
        })
    }
}

fn decode_course(row: &Row<'_>) -> (Course, Option<DbError>) {
    let decoded: Result<Course, rusqlite::Error> = (|| {
        Ok(Course {
            id: row.get(0)?,
            name: row.get(1)?,
            institution: row.get(2)?,
        })
    })();
    match decoded {
        Ok(course) => (course, None),
        Err(err) => (Course::default(), Some(DbError::Decode(err))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn seeded_db(count: usize) -> (TempDir, CoursesDb) {
        let dir = TempDir::new().unwrap();
        let mut db = CoursesDb::open(dir.path()).unwrap();
        db.seed(count).unwrap();
        (dir, db)
    }

    #[test]
    fn seeds_the_requested_number_of_rows() {
        let (_dir, db) = seeded_db(10);

        let mut courses = Vec::new();
        db.courses().run(|course, err| {
            assert!(err.is_none(), "unexpected row error: {err:?}");
            courses.push(course);
            true
        });

        assert_eq!(courses.len(), 10);
        for (i, course) in courses.iter().enumerate() {
            assert_eq!(course.id, i as i64 + 1);
            assert!(COURSE_NAMES.contains(&course.name.as_str()));
            assert!(INSTITUTIONS.contains(&course.institution.as_str()));
        }
    }

    #[test]
    fn reseeding_replaces_everything() {
        let (_dir, mut db) = seeded_db(5);
        db.seed(3).unwrap();

        let mut count = 0;
        db.courses().run(|_, _| {
            count += 1;
            true
        });
        assert_eq!(count, 3);
    }

    #[test]
    fn a_bad_row_is_carried_not_fatal() {
        let (_dir, db) = seeded_db(5);
        db.conn
            .execute("UPDATE courses SET name = NULL WHERE id = 3", [])
            .unwrap();

        let mut seen = Vec::new();
        db.courses().run(|course, err| {
            seen.push((course, err));
            true
        });

        // The consumer observes all five rows; only row 3 carries an error,
        // and it comes with the default record.
        assert_eq!(seen.len(), 5);
        for (i, (course, err)) in seen.iter().enumerate() {
            if i == 2 {
                assert_eq!(*course, Course::default());
                assert!(matches!(err, Some(DbError::Decode(_))));
            } else {
                assert!(err.is_none());
                assert_eq!(course.id, i as i64 + 1);
            }
        }
    }

    #[test]
    fn streams_pull_style_through_the_adapter() {
        let (_dir, db) = seeded_db(4);

        let mut rows = db.courses().pull();
        for expected_id in 1..=4 {
            let (course, err) = rows.next().expect("row should be present");
            assert!(err.is_none());
            assert_eq!(course.id, expected_id);
        }
        assert!(rows.next().is_none());
        assert!(rows.next().is_none());
    }

    #[test]
    fn disposing_the_adapter_early_releases_the_stream() {
        let (_dir, mut db) = seeded_db(100);

        let mut rows = db.courses().pull();
        let (first, err) = rows.next().expect("row should be present");
        assert!(err.is_none());
        assert_eq!(first.id, 1);
        rows.stop();
        assert!(rows.next().is_none());

        // The worker's connection is gone; the table can be rewritten.
        db.seed(1).unwrap();
    }

    #[test]
    fn seeding_zero_rows_leaves_an_empty_table() {
        let (_dir, db) = seeded_db(0);
        let mut count = 0;
        db.courses().run(|_, _| {
            count += 1;
            true
        });
        assert_eq!(count, 0);
    }
}
