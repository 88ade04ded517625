//! Generators 1: the control channel fixes the leak
//!
//! Same generator as g1_leaky_generator, plus a second, control-direction
//! channel. Every blocking send now races against the cancellation signal,
//! so the worker always terminates once the consumer walks away.
//!
//! Run with: cargo run --bin g1_control_channel

use crossbeam::channel::{bounded, Receiver, Sender};
use crossbeam::select;
use std::thread;

fn generate_numbers(ctrl: Receiver<()>) -> (Receiver<i32>, thread::JoinHandle<()>) {
    let (tx, rx) = bounded(0);

    let worker = thread::spawn(move || {
        for n in 20..=25 {
            println!("producer: yielding number {n}");
            select! {
                send(tx, n) -> delivered => {
                    if delivered.is_err() {
                        println!("producer: consumer is gone");
                        return;
                    }
                    println!("producer: number was received\n");
                }
                recv(ctrl) -> _ => {
                    println!("producer: cancelled, shutting down");
                    return;
                }
            }
        }
        println!("producer: finished");
    });

    (rx, worker)
}

fn cancel_and_reap(ctrl: Sender<()>, worker: thread::JoinHandle<()>) {
    ctrl.send(()).expect("worker is still listening");
    worker.join().expect("worker exits cleanly");
}

fn main() {
    println!("=== A Generator With a Control Channel ===\n");

    let (ctrl_tx, ctrl_rx) = bounded(0);
    let (numbers, worker) = generate_numbers(ctrl_rx);

    for num in numbers.iter() {
        println!("consumer: received {num}");
        if num == 23 {
            println!("consumer: breaking early, sending cancel\n");
            cancel_and_reap(ctrl_tx, worker);
            break;
        }
    }

    println!("worker has been joined; nothing is parked");

    println!("\n=== Key Points ===");
    println!("1. Cancellation is its own channel, flowing consumer to producer");
    println!("2. select! makes every handoff interruptible");
    println!("3. Joining the worker proves the shutdown actually happened");
}
