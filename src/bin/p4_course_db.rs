//! Pattern 4: Streaming database rows lazily
//!
//! Seeds a SQLite table with random courses inside one transaction, then
//! streams the rows back through a pull adapter. A row that fails to
//! decode is reported and skipped; ending the stream is the consumer's
//! decision, never the producer's.
//!
//! Run with: cargo run --bin p4_course_db -- --data-dir /tmp --num-courses 25

use colored::Colorize;
use generator_patterns::db::CoursesDb;
use std::env;
use std::path::PathBuf;
use std::process;
use std::time::Instant;

/// The only two parameters any of these programs take: a storage directory
/// and a row count. Both optional.
fn parse_args() -> (PathBuf, usize) {
    let mut data_dir = PathBuf::from(".");
    let mut num_courses = 0;

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--data-dir" => {
                if let Some(value) = args.next() {
                    data_dir = PathBuf::from(value);
                }
            }
            "--num-courses" => {
                if let Some(value) = args.next() {
                    num_courses = value.parse().unwrap_or(0);
                }
            }
            other => {
                eprintln!("{} unknown argument: {other}", "error:".red().bold());
                process::exit(1);
            }
        }
    }

    (data_dir, num_courses)
}

fn main() {
    let (data_dir, num_courses) = parse_args();

    let mut db = match CoursesDb::open(&data_dir) {
        Ok(db) => db,
        Err(err) => {
            eprintln!("{} {err}", "error:".red().bold());
            process::exit(1);
        }
    };

    let started = Instant::now();
    if let Err(err) = db.seed(num_courses) {
        eprintln!("{} {err}", "error:".red().bold());
        process::exit(1);
    }
    println!(
        "{} seeded {num_courses} courses in {} ms",
        "ok:".green().bold(),
        started.elapsed().as_millis()
    );

    let mut rows = db.courses().pull();
    loop {
        match rows.next() {
            Some((course, None)) => {
                println!(
                    "received course: id={} name={} institution={}",
                    course.id, course.name, course.institution
                );
            }
            Some((_, Some(err))) => {
                // Skipping the bad row is this consumer's policy; stopping
                // would have been just as legal.
                eprintln!("{} failed to read course: {err}", "warn:".yellow().bold());
            }
            None => {
                println!("iteration has completed");
                break;
            }
        }
    }
}
