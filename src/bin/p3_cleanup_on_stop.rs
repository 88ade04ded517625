//! Pattern 3: Cleanup ordering on early stop
//!
//! The producer registers a cleanup action per element. When the consumer
//! breaks out early, the producer still shuts down in an orderly way: every
//! registered action runs, newest first, before its frame goes away.
//!
//! Run with: cargo run --bin p3_cleanup_on_stop

use generator_patterns::{Cleanup, Seq};

fn get_numbers() -> Seq<i32> {
    Seq::new(|yield_val| {
        let mut cleanup = Cleanup::new();
        let mut n = 20;
        while n <= 25 {
            cleanup.defer(move || println!("producer cleanup for n={n}"));
            println!("producer: offering n={n}");
            if !yield_val(n) {
                println!("producer: told to stop");
                return; // cleanup drops here, actions run in reverse
            }
            n += 1;
        }
    })
}

fn main() {
    println!("=== Cleanup Runs in Reverse on Early Stop ===\n");

    get_numbers().run(|val| {
        println!("consumer: got value {val}");
        val != 21
    });

    println!("consumer: back in control after the producer cleaned up");

    println!("\n=== Key Points ===");
    println!("1. Registered cleanups survive an early stop");
    println!("2. They run in reverse registration order, newest first");
    println!("3. All of it happens before control returns to the consumer");
}
