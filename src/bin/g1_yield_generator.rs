//! Generators 1: the same generator as a yield callback
//!
//! No thread, no channels, no cancellation protocol. The producer is an
//! ordinary function; the consumer's `false` answer is the whole shutdown
//! story. This is the model the previous two programs were building up to.
//!
//! Run with: cargo run --bin g1_yield_generator

use generator_patterns::Seq;

fn generate_numbers() -> Seq<i32> {
    Seq::new(|yield_val| {
        for n in 20..=25 {
            println!("producer: yielding number {n}");
            if !yield_val(n) {
                println!("producer: stopping now");
                return;
            }
            println!("producer: number was received\n");
        }
    })
}

fn main() {
    println!("=== The Generator, Yield-Callback Style ===\n");

    generate_numbers().run(|num| {
        println!("consumer: received {num}");
        num != 23
    });

    println!("\nnothing to join, nothing to leak");

    println!("\n=== Key Points ===");
    println!("1. Suspension is a function call in progress, not a parked thread");
    println!("2. Early stop cannot leak: there is no worker to strand");
    println!("3. Prefer this model unless you truly need concurrency");
}
