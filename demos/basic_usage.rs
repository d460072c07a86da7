//! Basic keel usage example
//!
//! Run with `RUST_LOG=keel=trace cargo run --example basic_usage --features tracing`
//! to see the library's own events.

use keel::{Graph, LinkedList, Priority, PriorityQueue, Queue, Stack, Tree};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "keel=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("Graph");
    println!("=====");
    let mut graph: Graph<i32> = Graph::new();
    for key in 1..=4 {
        graph.add_node(key);
    }
    graph.add_edge(&1, &2)?;
    graph.add_edge(&1, &3)?;
    graph.add_edge(&2, &4)?;
    println!("{graph}");

    // A duplicate key is rejected, not an error.
    assert!(graph.add_node(1).is_none());
    if let Err(err) = graph.add_edge(&1, &9) {
        println!("  add_edge: {err}");
    }

    print!("  breadth-first:");
    graph.traverse_breadth(&1, |node| print!(" {}", node.key()))?;
    print!("\n  depth-first:");
    graph.traverse_depth(&1, |node| print!(" {}", node.key()))?;
    println!("\n  edges: {:?}", graph.edges());

    println!("\nLinked list");
    println!("===========");
    let mut list: LinkedList<&str> = ["a", "c"].into_iter().collect();
    list.insert_after(&"a", "b")?;
    list.push_back("d");
    println!("  {list}");
    println!("  index of c: {:?}", list.find(&"c"));

    println!("\nStack");
    println!("=====");
    let mut stack = Stack::new();
    let mut next = 0u32;
    while !stack.is_full() {
        stack.push(next)?;
        next += 1;
    }
    if let Err(err) = stack.push(99) {
        println!("  push: {err}");
    }
    println!("  top: {:?}", stack.peek());

    println!("\nQueues");
    println!("======");
    let mut queue: Queue<char> = "fifo".chars().collect();
    queue.enqueue('!');
    println!("  queue: {queue:?}");

    let mut jobs = PriorityQueue::new();
    jobs.enqueue("compact", Priority::Low);
    jobs.enqueue("flush", Priority::High);
    jobs.enqueue("vacuum", Priority::Low);
    while let Some(job) = jobs.dequeue() {
        println!("  run {job}");
    }

    println!("\nTree");
    println!("====");
    let mut tree = Tree::new("src");
    let graph_dir = tree.add_child(tree.root(), "graph").unwrap_or(tree.root());
    tree.add_child(graph_dir, "traversal.rs");
    tree.add_child(tree.root(), "lib.rs");
    print!("{tree}");

    Ok(())
}
