//! Pattern 2: Traversing a linked list both ways
//!
//! The same list walked push-style (a callback that can stop the walk) and
//! pull-style (a plain iterator the consumer advances).
//!
//! Run with: cargo run --bin p2_linked_list

use generator_patterns::list::LinkedList;

fn main() {
    println!("=== Linked List Traversal ===\n");

    let mut list = LinkedList::new();
    for value in [3, 2, 45, 4, 6, 7] {
        list.push_back(value);
    }
    println!("list has {} nodes", list.len());

    println!("\n--- push-style: each ---");
    list.each(|value| {
        println!("node: {value}");
        true
    });

    println!("\n--- push-style, stopping at 45 ---");
    list.each(|value| {
        println!("node: {value}");
        *value != 45
    });

    println!("\n--- pull-style: iter ---");
    let total: i32 = list.iter().sum();
    println!("sum of all nodes: {total}");
    let first_even = list.iter().find(|value| *value % 2 == 0);
    println!("first even node: {first_even:?}");

    println!("\n=== Key Points ===");
    println!("1. each() pushes values at a callback that can say stop");
    println!("2. iter() hands the consumer a cursor and gets out of the way");
    println!("3. The pull side composes with every standard adapter for free");
}
