//! Pattern 2: Yield-callback sequences
//!
//! The producer pushes values into a callback the consumer supplies. No
//! thread, no channel: suspension is just a function call waiting for its
//! answer. Returning `false` from the callback is the stop signal.
//!
//! Run with: cargo run --bin p2_yield_basics

use generator_patterns::Seq;

fn get_numbers() -> Seq<i32> {
    Seq::new(|yield_val| {
        let data = [3, 2, 45, 4, 6, 7];
        for val in data {
            if !yield_val(val) {
                return;
            }
        }
    })
}

/// The same idea wrapped in a type: the producer is a method, the data is
/// a field, and the sequence still owns nothing until it is driven.
struct Numbers {
    data: Vec<i32>,
}

impl Numbers {
    fn values(&self) -> Seq<i32> {
        let data = self.data.clone();
        Seq::of(data)
    }
}

fn main() {
    println!("=== Yield Callbacks: The Basics ===\n");

    println!("--- consuming everything ---");
    get_numbers().for_each(|val| println!("value: {val}"));
    println!("no more values");

    println!("\n--- stopping at 45 ---");
    get_numbers().run(|val| {
        println!("value: {val}");
        val != 45
    });
    println!("stopped early, producer already cleaned up");

    println!("\n--- a sequence as a method ---");
    let numbers = Numbers {
        data: vec![3, 2, 45, 4, 6, 7],
    };
    let total: i32 = numbers.values().collect().iter().sum();
    println!("total: {total}");

    println!("\n=== Key Points ===");
    println!("1. The producer drives; the callback's bool answer is the brake");
    println!("2. Early stop is orderly shutdown, not abandonment");
    println!("3. No thread is involved: this is plain control transfer");
}
