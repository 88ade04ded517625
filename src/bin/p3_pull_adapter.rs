//! Pattern 3: Turning a push producer into a pull cursor
//!
//! The producer below never stops on its own. The pull adapter lets the
//! consumer take exactly as many values as it wants and then dispose of
//! the producer, which shuts down cleanly instead of looping forever.
//!
//! Run with: cargo run --bin p3_pull_adapter

use generator_patterns::Seq;

fn get_numbers() -> Seq<u64> {
    Seq::new(|yield_val| {
        let mut n = 0;
        loop {
            if !yield_val(n) {
                println!("producer: done iterating");
                return;
            }
            n += 1;
        }
    })
}

fn main() {
    println!("=== Pull Adapter Over an Infinite Producer ===\n");

    let mut numbers = get_numbers().pull();

    for _ in 0..3 {
        match numbers.next() {
            Some(val) => println!("num: {val}"),
            None => unreachable!("the producer is infinite"),
        }
    }

    println!("consumer: three is plenty, disposing");
    numbers.stop();

    // Disposed means done: the producer is never resumed again.
    assert_eq!(numbers.next(), None);
    assert_eq!(numbers.next(), None);
    println!("after stop, next() reports no more values");

    println!("\n=== Key Points ===");
    println!("1. pull() inverts control: the consumer now asks for each value");
    println!("2. stop() is mandatory with an infinite producer");
    println!("3. After disposal, fetch-next answers 'no more values' forever");
}
