//! Pattern 3: Panics cross the yield boundary like any other unwind
//!
//! A panic raised inside the producer unwinds through the suspension
//! point. Pending cleanups still run, newest first, and the panic keeps
//! travelling until it hits a recovery boundary, or kills the process if
//! there is none.
//!
//! Run with: cargo run --bin p3_panic_unwind

use generator_patterns::{Cleanup, Seq};
use std::panic::{catch_unwind, AssertUnwindSafe};

fn get_numbers() -> Seq<i32> {
    Seq::new(|yield_val| {
        let mut cleanup = Cleanup::new();
        cleanup.defer(|| println!("producer cleanup: registered at the start"));

        let mut n = 20;
        while n <= 21 {
            cleanup.defer(move || println!("producer cleanup: registered for n={n}"));
            println!("producer: offering n={n}");
            if !yield_val(n) {
                return;
            }
            if n == 21 {
                panic!("fault inside the producer at n=21");
            }
            n += 1;
        }
    })
}

fn main() {
    println!("=== Panic Propagation Through the Yield Boundary ===\n");

    let result = catch_unwind(AssertUnwindSafe(|| {
        get_numbers().for_each(|val| println!("consumer: got value {val}"));
    }));

    match result {
        Ok(()) => println!("finished without a fault (unexpected here)"),
        Err(payload) => {
            let message = payload
                .downcast_ref::<&str>()
                .copied()
                .unwrap_or("unknown panic");
            println!("recovered from panic: {message}");
        }
    }

    println!("\n=== Key Points ===");
    println!("1. The consumer's frame is on the producer's unwind path");
    println!("2. Cleanups ran, in reverse, before the recovery point saw the fault");
    println!("3. Without catch_unwind the process would have died instead");
}
