//! Demonstrates errstack chains in a layered application.
//!
//! Run with: cargo run --example stacked

use errstack::{BoxError, ResultExt, cause, error_stack, wrapf};
use std::io;

// Simulated storage layer
mod storage {
    use super::*;

    pub fn read_block(offset: u64) -> Result<Vec<u8>, BoxError> {
        Err(io::Error::other("device not ready"))
            .annotate_with(|| format!("reading block at {:#x}", offset))
    }
}

// Index layer
mod index {
    use super::*;

    pub fn lookup(key: &str) -> Result<Vec<u8>, BoxError> {
        storage::read_block(0x4000).annotate_with(|| format!("resolving index page for {}", key))
    }
}

fn main() {
    let err = match index::lookup("user:42") {
        Ok(_) => return,
        Err(err) => err,
    };
    let err = wrapf!(Some(err), "serving request {}", "abc1").unwrap();

    println!("=== Plain message ({{}}) ===\n");
    println!("{}\n", err);

    println!("=== Quoted message ({{:?}}) ===\n");
    println!("{:?}\n", err);

    println!("=== Full diagnostic ({{:#}}) ===\n");
    println!("{:#}\n", err);

    println!("=== Root cause ===\n");
    println!("{}\n", cause(Some(err.as_ref())).unwrap());

    println!("=== error_stack works on any error ===\n");
    let foreign = io::Error::other("no chain here");
    println!("{}", error_stack(Some(&foreign)));
}
