//! Generators 2: an infinite prime generator
//!
//! The producer has no idea how many primes the consumer wants; it just
//! keeps offering them. The consumer stops the stream the moment it has
//! seen enough.
//!
//! Run with: cargo run --bin g2_primes

use generator_patterns::Seq;

fn is_prime(n: u64) -> bool {
    if n <= 1 {
        return false;
    }
    let mut i = 2;
    while i * i <= n {
        if n % i == 0 {
            return false;
        }
        i += 1;
    }
    true
}

fn generate_primes() -> Seq<u64> {
    Seq::new(|yield_val| {
        let mut n = 0;
        loop {
            if is_prime(n) && !yield_val(n) {
                return;
            }
            n += 1;
        }
    })
}

fn main() {
    println!("=== Infinite Prime Generator ===\n");

    generate_primes().run(|num| {
        println!("prime number received: {num}");
        num <= 20
    });

    println!("\n=== Key Points ===");
    println!("1. The producer is infinite; the consumer supplies the bound");
    println!("2. No prime is computed past the one the consumer stopped at");
    println!("3. The filter lives in the producer, the policy in the consumer");
}
