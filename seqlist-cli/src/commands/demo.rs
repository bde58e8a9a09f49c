use crate::ContainerArg;
use anyhow::Result;
use colored::*;
use seqlist_core::{ArrayList, LinkedList};
use tracing::info;

fn size_and_capacity(list: &ArrayList) -> String {
    format!("size = {}\tcapacity = {}", list.len(), list.capacity())
}

/// Walkthrough of every array list operation, one output line per entry
pub fn array_transcript() -> Result<Vec<String>> {
    let mut out = Vec::new();
    let mut list = ArrayList::new();

    out.push("Testing push_back:".to_string());
    out.push(size_and_capacity(&list));
    let mut capacity = list.capacity();
    for i in 0..50 {
        list.push_back(i)?;
        if list.capacity() != capacity {
            out.push(size_and_capacity(&list));
            capacity = list.capacity();
        }
    }
    out.push(list.to_string());

    out.push("Testing pop_back:".to_string());
    while list.len() > 10 {
        list.pop_back();
    }
    out.push(size_and_capacity(&list));
    out.push(list.to_string());

    out.push("Testing insert:".to_string());
    out.push("insert 100 to front:".to_string());
    list.insert(0, 100)?;
    out.push(list.to_string());
    out.push(size_and_capacity(&list));

    out.push("insert 200 to back:".to_string());
    list.insert(list.len(), 200)?;
    out.push(list.to_string());
    out.push(size_and_capacity(&list));

    out.push("insert 300 to index 1:".to_string());
    list.insert(1, 300)?;
    out.push(list.to_string());
    out.push(size_and_capacity(&list));

    out.push("Testing erase:".to_string());
    out.push("erase index 1:".to_string());
    list.erase(1)?;
    out.push(list.to_string());
    out.push("erase front:".to_string());
    list.erase(0)?;
    out.push(list.to_string());
    out.push("erase back:".to_string());
    list.erase(list.len() - 1)?;
    out.push(list.to_string());
    out.push(size_and_capacity(&list));

    out.push("Testing shrink_to_fit:".to_string());
    list.shrink_to_fit()?;
    out.push(size_and_capacity(&list));
    list.clear();
    list.shrink_to_fit()?;
    out.push(size_and_capacity(&list));

    out.push("Testing clear:".to_string());
    out.push("before clear:".to_string());
    for _ in 0..20 {
        list.insert(list.len(), 0)?;
    }
    out.push(size_and_capacity(&list));
    out.push("clearing...".to_string());
    list.clear();
    out.push(size_and_capacity(&list));
    out.push(list.to_string());

    Ok(out)
}

/// Walkthrough of every linked list operation, one output line per entry
pub fn linked_transcript() -> Result<Vec<String>> {
    let mut out = Vec::new();
    let mut list = LinkedList::new();

    out.push("Testing add:".to_string());
    list.add(0, 100)?;
    list.add(1, 200)?;
    list.add(1, 300)?;
    out.push(list.to_string());

    out.push("Testing get/set:".to_string());
    out.push(format!("get(1) = {}", list.get(1)?));
    out.push(format!("set(2, 250) replaced {}", list.set(2, 250)?));
    out.push(list.to_string());

    out.push("Testing index_of:".to_string());
    list.add(0, 250)?;
    out.push(list.to_string());
    out.push(format!("index_of(250) = {:?}", list.index_of(250)));
    out.push(format!("last_index_of(250) = {:?}", list.last_index_of(250)));
    out.push(format!("index_of(999) = {:?}", list.index_of(999)));

    out.push("Testing remove_node:".to_string());
    out.push(format!("remove_node(0) = {}", list.remove_node(0)?));
    out.push(format!("remove_node(2) = {}", list.remove_node(2)?));
    out.push(list.to_string());

    out.push("Testing queue:".to_string());
    list.enqueue(400)?;
    list.enqueue(500)?;
    out.push(list.to_string());
    out.push(format!("front = {:?}\trear = {:?}", list.front(), list.rear()));
    out.push(format!("dequeue = {:?}", list.dequeue()));
    out.push(format!("contains(500) = {}", list.contains(500)));
    out.push(list.to_string());

    out.push("Testing clear:".to_string());
    list.clear();
    out.push(format!("size = {}", list.len()));
    out.push(list.to_string());

    Ok(out)
}

pub fn execute(container: ContainerArg) -> Result<()> {
    info!("Running {:?} list demo", container);

    let lines = match container {
        ContainerArg::Array => array_transcript()?,
        ContainerArg::Linked => linked_transcript()?,
    };

    for line in &lines {
        if line.starts_with("Testing") {
            println!("\n{}", line.bold());
        } else {
            println!("{}", line);
        }
    }

    println!("\n{} Demo finished", "✓".green());
    Ok(())
}
