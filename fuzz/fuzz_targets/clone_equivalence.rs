#![no_main]
use libfuzzer_sys::fuzz_target;

use splaytree::model::run_clone_equivalence;

fuzz_target!(|values: Vec<u32>| { run_clone_equivalence(values) });
