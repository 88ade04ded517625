//! Generators 1: a channel generator that leaks its worker
//!
//! The producer thread pushes numbers through a rendezvous channel with no
//! way to be told the consumer left. When the consumer breaks early, the
//! producer stays parked on a handoff nobody will ever receive, until the
//! process exits.
//!
//! Run with: cargo run --bin g1_leaky_generator

use crossbeam::channel::{bounded, Receiver};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

fn generate_numbers(done: Arc<AtomicBool>) -> Receiver<i32> {
    let (tx, rx) = bounded(0);

    thread::spawn(move || {
        for n in 20..=25 {
            println!("producer: yielding number {n}");
            if tx.send(n).is_err() {
                break;
            }
            println!("producer: number was received\n");
        }
        println!("producer: finished");
        done.store(true, Ordering::SeqCst);
    });

    rx
}

fn main() {
    println!("=== A Generator With No Way to Cancel ===\n");

    let done = Arc::new(AtomicBool::new(false));
    let numbers = generate_numbers(Arc::clone(&done));

    for num in numbers.iter() {
        println!("consumer: received {num}");
        if num == 23 {
            println!("consumer: breaking early\n");
            break;
        }
    }

    // Give the producer every chance to finish. It cannot: it is parked on
    // a send while we still hold the receiving end.
    thread::sleep(Duration::from_millis(100));
    println!("producer finished: {}", done.load(Ordering::SeqCst));
    println!("the worker is still parked; only process exit will reap it");

    println!("\n=== Key Points ===");
    println!("1. A blocking send with no cancellation path can park forever");
    println!("2. The consumer breaking a loop tells the producer nothing");
    println!("3. Every thread you start needs a guaranteed way to finish");

    // Exit without dropping the receiver, exactly like the leak this
    // program is about: the parked worker is reaped by process teardown.
    std::process::exit(0);
}
