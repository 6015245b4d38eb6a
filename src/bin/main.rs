//! Membership-counting harness.
//!
//! Reads a key count followed by that many integer keys, then a query count
//! followed by that many integer queries, and prints the number of queries
//! that hit a stored key.

use std::io::{self, Read};

use splaytree::SplaySet;

fn main() {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .expect("failed to read stdin");

    let mut tokens = input
        .split_ascii_whitespace()
        .map(|tok| tok.parse::<i64>().expect("malformed integer in input"));

    let n_keys = tokens.next().expect("missing key count") as usize;
    let mut set = SplaySet::new();
    for _ in 0..n_keys {
        set.insert(tokens.next().expect("missing key"));
    }

    let n_queries = tokens.next().expect("missing query count") as usize;
    let mut hits = 0usize;
    for _ in 0..n_queries {
        if set.contains(&tokens.next().expect("missing query")) {
            hits += 1;
        }
    }

    println!("{hits}");
}
