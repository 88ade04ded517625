//! Pattern 1: Pull-style iteration with an index cursor
//!
//! The consumer asks for each element explicitly; the producer is nothing
//! but a position remembered between calls.
//!
//! Run with: cargo run --bin p1_pull_basics

/// A hand-rolled cursor over a fixed slice of numbers.
struct NumberIterator {
    idx: usize,
    data: Vec<i32>,
}

impl NumberIterator {
    fn new() -> Self {
        NumberIterator {
            idx: 0,
            data: vec![3, 2, 45, 4, 6, 7],
        }
    }

    /// Returns the next sequential value, or `None` when the values are
    /// exhausted. Every later call keeps returning `None`.
    fn next(&mut self) -> Option<i32> {
        let val = self.data.get(self.idx).copied()?;
        self.idx += 1;
        Some(val)
    }
}

fn main() {
    println!("=== Pull Iteration: Index Cursor ===\n");

    let mut it = NumberIterator::new();
    loop {
        match it.next() {
            Some(val) => println!("value: {val}"),
            None => {
                println!("no more values");
                break;
            }
        }
    }

    // Exhausted means exhausted; the cursor never rewinds on its own.
    assert_eq!(it.next(), None);
    assert_eq!(it.next(), None);

    println!("\n=== Key Points ===");
    println!("1. The consumer controls pacing: one next() call per element");
    println!("2. All iteration state lives in the cursor, not the call stack");
    println!("3. Option<T> is the (value, ok) protocol with the ok built in");
}
