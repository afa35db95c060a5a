//! Basic usage example for veb-min-queue.
//!
//! This example replays a small workload against the min-queue and shows the
//! universe tree underneath it.

use veb_min_queue::{Error, MinQueue, UniverseTree};

fn main() -> Result<(), Error> {
    env_logger::init();

    println!("=== veb-min-queue - Basic Usage Example ===\n");

    // Create a queue accepting values in [0, 2^15)
    let mut queue = MinQueue::<u32>::new(1 << 15)?;
    println!("Created empty queue over universe {:?}", queue.universe());

    let input = [3, 6, 7, 1, 12, 4, 5, 5, 5, 4, 2, 10, 2];
    println!("\nEnqueueing: {:?}", input);
    for value in input {
        queue.enqueue(value)?;
    }
    println!("  queue: {}", queue);
    println!("  size: {}, distinct: {}", queue.size(), queue.distinct());

    println!("\nDequeueing three values:");
    for _ in 0..3 {
        println!("  dequeued {}", queue.dequeue()?);
    }
    println!("  find_min: {}", queue.find_min()?);

    println!("\nDequeueing one more:");
    println!("  dequeued {}", queue.dequeue()?);
    println!("  queue: {}", queue);
    println!("  find_min: {}", queue.find_min()?);
    println!("  occurrences of 5: {}", queue.count(5));

    println!("\nUniverse boundary:");
    match queue.enqueue(1 << 15) {
        Ok(()) => println!("  enqueue(32768) unexpectedly succeeded"),
        Err(err) => println!("  enqueue(32768): {}", err),
    }

    println!("\nDraining:");
    while let Ok(value) = queue.dequeue() {
        print!("{} ", value);
    }
    println!();
    println!("  find_min on empty queue: {:?}", queue.find_min());

    // The set underneath, on its own
    println!("\nUniverse tree navigation:");
    let mut tree = UniverseTree::<u32>::new(1 << 16)?;
    for key in [100, 200, 150, 300] {
        tree.insert(key)?;
    }
    println!("  min: {:?}, max: {:?}", tree.min(), tree.max());
    println!("  successor(175): {:?}", tree.successor(175));
    println!("  predecessor(175): {:?}", tree.predecessor(175));
    println!("  ascending: {:?}", tree.iter().collect::<Vec<_>>());
    println!("  nodes allocated: {}", tree.node_count());

    println!("\n=== Example Complete ===");
    Ok(())
}
