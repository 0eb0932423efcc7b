//! Walkthrough of a small T=2 index.
//!
//! Inserts four records keyed by age (already in stable age order), then
//! reports the two level-1 children and the nodes visited searching for 27.
//!
//! Set `RUST_LOG=recordindex=trace` to see every split.

use std::process::ExitCode;

use recordindex::{Node, OrderedIndex, Record, Result};
use tracing_subscriber::EnvFilter;

fn install_tracing_subscriber() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

fn pair(node: &Node<Record>, idx: usize) -> String {
    match node.entry(idx) {
        Some((key, record)) => format!("({}, {})", key, record),
        None => String::from("(missing)"),
    }
}

fn run() -> Result<()> {
    let mut index = OrderedIndex::new(2)?;

    for record in [
        Record::new(1034, "Alice", 23),
        Record::new(1005, "David", 23),
        Record::new(1089, "Carol", 27),
        Record::new(1012, "Bob", 34),
    ] {
        index.insert(record.age_key(), record);
    }

    let root = index.root();
    let (first, second) = match root.children() {
        [first, second] => (first, second),
        _ => {
            tracing::error!(
                leaf = root.is_leaf(),
                children = root.children().len(),
                "unexpected shape: root should have exactly two children"
            );
            return Ok(());
        }
    };

    let found = index.search(27);

    println!(
        "The key-value pair in the first child at the level 1 of the BTree is {}.",
        pair(first, 0)
    );
    println!(
        "The key-value pairs in the second child at the level 1 of the BTree are {} and {}.",
        pair(second, 0),
        pair(second, 1)
    );
    println!(
        "When searching for the key 27 in the BTree, {} node(s) are visited.",
        found.nodes_visited()
    );

    tracing::info!(stats = %index.stats(), "done");
    Ok(())
}

fn main() -> ExitCode {
    install_tracing_subscriber();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "demo failed");
            ExitCode::FAILURE
        }
    }
}
