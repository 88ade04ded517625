//! Pattern 3: The exact sequence of events
//!
//! Prints from both sides of the yield boundary to show how control
//! transfers back and forth: the producer computes, offers, and waits; the
//! consumer handles the value and answers continue or stop.
//!
//! Run with: cargo run --bin p3_sequence_of_events

use generator_patterns::Seq;

fn get_numbers() -> Seq<i32> {
    Seq::new(|yield_val| {
        let mut n = 20;
        while n <= 21 {
            println!("producer: about to offer n={n}");
            if !yield_val(n) {
                println!("producer: told to stop, shutting down");
                return;
            }
            n += 1;
            println!("producer: resumed, incremented to n={n}");
        }
        println!("producer: ran out of values");
    })
}

fn main() {
    println!("=== Sequence of Events Across the Yield Boundary ===\n");

    get_numbers().run(|val| {
        println!("consumer: got value {val}");
        if val == 21 {
            println!("consumer: that is enough, answering stop");
            return false;
        }
        true
    });

    println!("\n=== Key Points ===");
    println!("1. The producer is suspended inside its own loop between offers");
    println!("2. The consumer's answer decides whether the producer resumes");
    println!("3. 'stop' reaches the producer as a return value, not an event");
}
