//! Generators 3: a bounded Fibonacci generator
//!
//! The bound lives in the producer this time: the consumer asked for the
//! first n numbers up front, and the sequence simply ends when they have
//! all been offered.
//!
//! Run with: cargo run --bin g3_fibonacci

use generator_patterns::Seq;

fn fibonacci_sequence(n: usize) -> Seq<u64> {
    Seq::new(move |yield_val| {
        let (mut a, mut b) = (0u64, 1u64);
        for _ in 0..n {
            if !yield_val(a) {
                return;
            }
            let next = a + b;
            a = b;
            b = next;
        }
    })
}

fn main() {
    println!("=== Bounded Fibonacci Generator ===\n");

    fibonacci_sequence(10).for_each(|num| println!("num: {num}"));

    let collected = fibonacci_sequence(10).collect();
    assert_eq!(collected, vec![0, 1, 1, 2, 3, 5, 8, 13, 21, 34]);
    println!("\ncollected: {collected:?}");

    println!("\n=== Key Points ===");
    println!("1. State between offers is just local variables");
    println!("2. A bounded producer ends the sequence itself");
    println!("3. The same sequence can be driven, collected, or abandoned");
}
