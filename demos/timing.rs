//! Timing comparison between the universe tree queue and the BTreeSet queue.
//!
//! Enqueues 100k random values, then times find_min and dequeue over the
//! whole batch for both strategies.

use std::time::Instant;

use rand::Rng;
use veb_min_queue::{Error, MinQueue, MinSet, OrderedMinQueue};

const ELEMENTS: usize = 100_000;
const UNIVERSE: u64 = 1 << 17;

fn time<S: MinSet<u32>>(
    name: &str,
    mut queue: MinQueue<u32, S>,
    values: &[u32],
) -> Result<(), Error> {
    println!("{}:", name);

    let start = Instant::now();
    for &value in values {
        queue.enqueue(value)?;
    }
    println!("  enqueue {} values: {:?}", values.len(), start.elapsed());

    let start = Instant::now();
    for _ in values {
        std::hint::black_box(queue.find_min()?);
    }
    println!("  find_min x{}: {:?}", values.len(), start.elapsed());

    let start = Instant::now();
    for _ in values {
        std::hint::black_box(queue.dequeue()?);
    }
    println!("  dequeue x{}: {:?}", values.len(), start.elapsed());
    Ok(())
}

fn main() -> Result<(), Error> {
    env_logger::init();

    let mut rng = rand::thread_rng();
    let values: Vec<u32> = (0..ELEMENTS)
        .map(|_| rng.gen_range(0..ELEMENTS as u32))
        .collect();

    println!("log2(n) = {:.2}", (ELEMENTS as f64).log2());
    println!("log2(log2(U)) = {:.2}\n", (UNIVERSE as f64).log2().log2());

    time("MinQueue (universe tree)", MinQueue::new(UNIVERSE)?, &values)?;
    time(
        "OrderedMinQueue (BTreeSet)",
        OrderedMinQueue::<u32>::ordered(),
        &values,
    )?;
    Ok(())
}
