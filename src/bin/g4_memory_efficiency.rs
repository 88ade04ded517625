//! Generators 4: eager vectors vs lazy sequences
//!
//! Generating a million records into a Vec pays for all of them at once.
//! Generating them through a yield callback keeps exactly one record alive
//! at a time, no matter how long the sequence is.
//!
//! Run with: cargo run --release --bin g4_memory_efficiency

use generator_patterns::Seq;
use rand::Rng;
use std::mem;
use std::time::Instant;

const NUM_COURSES: usize = 1_000_000;

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

#[derive(Debug, Clone)]
struct Course {
    id: i64,
    name: String,
    institution: String,
}

fn random_course(id: usize, rng: &mut impl Rng) -> Course {
    Course {
        id: id as i64,
        name: COURSE_NAMES[rng.gen_range(0..COURSE_NAMES.len())].to_string(),
        institution: INSTITUTIONS[rng.gen_range(0..INSTITUTIONS.len())].to_string(),
    }
}

fn generate_courses_eager(n: usize) -> Vec<Course> {
    let mut rng = rand::thread_rng();
    (0..n).map(|id| random_course(id, &mut rng)).collect()
}

fn generate_courses_lazy(n: usize) -> Seq<Course> {
    Seq::new(move |yield_course| {
        let mut rng = rand::thread_rng();
        for id in 0..n {
            if !yield_course(random_course(id, &mut rng)) {
                return;
            }
        }
    })
}

fn main() {
    println!("=== Memory: Eager Vec vs Lazy Sequence ===\n");

    println!("--- eager: build the whole Vec first ---");
    let started = Instant::now();
    let courses = generate_courses_eager(NUM_COURSES);
    println!("built {} courses in {:?}", courses.len(), started.elapsed());

    let started = Instant::now();
    let mut max_id = 0;
    for course in &courses {
        max_id = max_id.max(course.id);
    }
    println!("walked them in {:?} (max id {max_id})", started.elapsed());

    let vec_bytes = courses.capacity() * mem::size_of::<Course>();
    println!(
        "the Vec alone holds at least {:.1} MB, before string heap data",
        vec_bytes as f64 / 1e6
    );
    drop(courses);

    println!("\n--- lazy: one course alive at a time ---");
    let started = Instant::now();
    let seq = generate_courses_lazy(NUM_COURSES);
    println!("created the sequence in {:?} (nothing computed yet)", started.elapsed());

    let started = Instant::now();
    let mut max_id = 0;
    seq.for_each(|course| max_id = max_id.max(course.id));
    println!("walked all courses in {:?} (max id {max_id})", started.elapsed());
    println!(
        "peak footprint per element: about {} bytes plus two short strings",
        mem::size_of::<Course>()
    );

    println!("\n=== Key Points ===");
    println!("1. Eager generation costs memory proportional to the sequence");
    println!("2. Lazy generation costs memory proportional to one element");
    println!("3. Creating a sequence is free; driving it does the work");
}
