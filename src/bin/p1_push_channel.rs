//! Pattern 1: Push-style iteration over a channel
//!
//! The producer runs on its own thread and pushes elements through a
//! rendezvous channel. A cancellation channel lets the consumer walk away
//! early without stranding the producer on a handoff nobody will receive.
//!
//! Run with: cargo run --bin p1_push_channel

use crossbeam::channel::{bounded, Receiver};
use crossbeam::select;
use std::thread;

struct Numbers {
    data: Vec<i32>,
}

impl Numbers {
    fn new() -> Self {
        Numbers {
            data: vec![3, 2, 45, 4, 6, 7],
        }
    }

    /// Streams the numbers on a worker thread. The worker stops as soon as
    /// it observes `cancel`, or when the consumer drops the receiver.
    fn stream(&self, cancel: Receiver<()>) -> Receiver<i32> {
        let data = self.data.clone();
        let (tx, rx) = bounded(0);

        thread::spawn(move || {
            for val in data {
                select! {
                    send(tx, val) -> delivered => {
                        if delivered.is_err() {
                            return;
                        }
                    }
                    recv(cancel) -> _ => return,
                }
            }
        });

        rx
    }
}

fn main() {
    println!("=== Push Iteration: Channel + Cancellation ===\n");

    let numbers = Numbers::new();

    println!("--- consuming everything ---");
    let (_cancel_tx, cancel_rx) = bounded(0);
    for val in numbers.stream(cancel_rx) {
        println!("value: {val}");
    }
    println!("no more values");

    println!("\n--- cancelling after the third value ---");
    let (cancel_tx, cancel_rx) = bounded(0);
    let stream = numbers.stream(cancel_rx);
    for (received, val) in stream.iter().enumerate() {
        println!("value: {val}");
        if received == 2 {
            cancel_tx.send(()).expect("worker is still listening");
            break;
        }
    }
    println!("cancelled early, worker has exited");

    println!("\n=== Key Points ===");
    println!("1. The producer controls pacing; the channel is the handoff");
    println!("2. Every blocking send must race against a cancellation signal");
    println!("3. This buys concurrency at the price of a thread and a protocol");
}
