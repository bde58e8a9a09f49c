//! Using the linked list as a FIFO queue

use seqlist_core::LinkedList;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Seqlist Linked List Queue Example\n");

    let mut queue = LinkedList::new();
    for ticket in 1..=5 {
        queue.enqueue(ticket * 100)?;
    }
    println!("Waiting: {}", queue);

    // A priority ticket jumps to second place.
    queue.add(1, 999)?;
    println!("With priority ticket: {}", queue);

    while let Some(ticket) = queue.dequeue() {
        let next = queue
            .front()
            .map_or_else(|| "none".to_string(), |v| v.to_string());
        println!("Serving {} (next: {})", ticket, next);
    }

    println!("\nQueue empty: {}", queue.is_empty());
    Ok(())
}
