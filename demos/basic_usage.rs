//! Basic array list usage example

use seqlist_core::ArrayList;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Seqlist Array List Example\n");

    let mut list = ArrayList::new();
    let mut capacity = list.capacity();
    println!("size = {}\tcapacity = {}", list.len(), capacity);

    for i in 0..50 {
        list.push_back(i)?;
        if list.capacity() != capacity {
            capacity = list.capacity();
            println!("size = {}\tcapacity = {}", list.len(), capacity);
        }
    }
    print!("{}", list.dump());

    list.insert(0, 100)?;
    list.insert(1, 300)?;
    println!("\nAfter inserts: {}", list);

    let removed = list.erase(1)?;
    println!("Erased {} -> {}", removed, list);

    list.shrink_to_fit()?;
    println!("Shrunk: size = {}\tcapacity = {}", list.len(), list.capacity());

    match list.get(1_000) {
        Ok(v) => println!("Unexpected value {}", v),
        Err(e) => println!("Out-of-range access reported: {}", e),
    }

    Ok(())
}
