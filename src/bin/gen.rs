//! Offline test-case generator.
//!
//! Writes `<prefix>.dat` holding a key count, that many unique uniform
//! random keys, a query count and that many normally distributed queries,
//! plus `<prefix>.ans` holding the expected hit count for validation.

use std::collections::BTreeSet;
use std::env;
use std::f64::consts::TAU;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::process;

use rand::Rng;

const DEV_FACTOR: i64 = 4;

// Box-Muller transform; one deviate of the pair is enough.
fn normal(rng: &mut impl Rng, mean: f64, dev: f64) -> f64 {
    let u1 = rng.gen_range(f64::EPSILON..1.0);
    let u2: f64 = rng.gen();
    mean + dev * (-2.0 * u1.ln()).sqrt() * (TAU * u2).cos()
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let (n_keys, n_queries, keymax, prefix) = match args.as_slice() {
        [_, n_keys, n_queries, keymax, prefix] => (
            n_keys.parse::<usize>().expect("malformed key count"),
            n_queries.parse::<usize>().expect("malformed query count"),
            keymax.parse::<i64>().expect("malformed keymax"),
            prefix.clone(),
        ),
        _ => {
            eprintln!("usage: gen <nkeys> <nqueries> <keymax> <prefix>");
            process::exit(2);
        }
    };

    assert!(
        keymax >= 0 && n_keys as u128 <= keymax as u128 + 1,
        "keymax too small for the requested key count"
    );

    let mut rng = rand::thread_rng();

    let mut dat = BufWriter::new(
        File::create(format!("{prefix}.dat")).expect("failed to create data file"),
    );

    let mut keys = BTreeSet::new();
    writeln!(dat, "{n_keys}").expect("write failed");
    while keys.len() < n_keys {
        let key = rng.gen_range(0..=keymax);
        if keys.insert(key) {
            write!(dat, "{key} ").expect("write failed");
        }
    }
    writeln!(dat).expect("write failed");

    let mean = (keymax / 2) as f64;
    let dev = (keymax / DEV_FACTOR) as f64;

    writeln!(dat, "{n_queries}").expect("write failed");
    let mut hits = 0usize;
    for _ in 0..n_queries {
        let query = normal(&mut rng, mean, dev).round() as i64;
        write!(dat, "{query} ").expect("write failed");
        if keys.contains(&query) {
            hits += 1;
        }
    }
    writeln!(dat).expect("write failed");

    let mut ans = BufWriter::new(
        File::create(format!("{prefix}.ans")).expect("failed to create answer file"),
    );
    writeln!(ans, "{hits}").expect("write failed");
}
