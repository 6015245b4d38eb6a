//! Reference-model equivalence drivers shared by the proptest suite and the
//! fuzz targets.

use std::collections::BTreeSet;
use std::ops::Bound;

use arbitrary::Arbitrary;
use proptest::strategy::{Just, Strategy};

use crate::SplaySet;

#[derive(Copy, Clone, Debug, Arbitrary)]
pub enum ItemValue {
    Index(usize),
    Random(u32),
}

proptest::prop_compose! {
    fn index_strategy()(
        index in 0usize..1000,
    ) -> ItemValue {
        ItemValue::Index(index)
    }
}

proptest::prop_compose! {
    fn random_strategy()(
        random in 0u32..1000,
    ) -> ItemValue {
        ItemValue::Random(random)
    }
}

fn value_strategy() -> impl Strategy<Value = ItemValue> {
    proptest::prop_oneof![index_strategy(), random_strategy()]
}

#[derive(Copy, Clone, Debug, Arbitrary)]
pub enum Op {
    Insert(ItemValue),
    Contains(ItemValue),
    Remove(ItemValue),
    LowerBound(ItemValue),
    UpperBound(ItemValue),
    RangeCount(ItemValue, ItemValue),
    First,
    Last,
}

impl Op {
    fn finalize(self, sorted: &[u32]) -> FinalOp {
        fn get_value(v: &[u32], i: ItemValue) -> u32 {
            match i {
                ItemValue::Index(idx) => {
                    if v.is_empty() {
                        idx as u32
                    } else {
                        v[idx % v.len().max(1)]
                    }
                }
                ItemValue::Random(v) => v,
            }
        }

        match self {
            Op::Insert(item) => FinalOp::Insert(get_value(sorted, item)),
            Op::Contains(item) => FinalOp::Contains(get_value(sorted, item)),
            Op::Remove(item) => FinalOp::Remove(get_value(sorted, item)),
            Op::LowerBound(item) => FinalOp::LowerBound(get_value(sorted, item)),
            Op::UpperBound(item) => FinalOp::UpperBound(get_value(sorted, item)),
            Op::RangeCount(a, b) => {
                let a = get_value(sorted, a);
                let b = get_value(sorted, b);
                FinalOp::RangeCount(a.min(b), a.max(b))
            }
            Op::First => FinalOp::First,
            Op::Last => FinalOp::Last,
        }
    }
}

#[derive(Copy, Clone, Debug)]
enum FinalOp {
    Insert(u32),
    Contains(u32),
    Remove(u32),
    LowerBound(u32),
    UpperBound(u32),
    RangeCount(u32, u32),
    First,
    Last,
}

pub fn op_strategy() -> impl Strategy<Value = Op> {
    proptest::prop_oneof![
        value_strategy().prop_map(Op::Insert),
        value_strategy().prop_map(Op::Contains),
        value_strategy().prop_map(Op::Remove),
        value_strategy().prop_map(Op::LowerBound),
        value_strategy().prop_map(Op::UpperBound),
        (value_strategy(), value_strategy()).prop_map(|(a, b)| Op::RangeCount(a, b)),
        Just(Op::First),
        Just(Op::Last),
    ]
}

pub fn run_btree_equivalence(ops: Vec<Op>) {
    let mut sorted_values = Vec::with_capacity(ops.len());
    let mut btree = BTreeSet::new();
    let mut splay: SplaySet<u32> = SplaySet::new();

    fn insert_sorted(v: &mut Vec<u32>, value: u32) {
        if let Err(idx) = v.binary_search(&value) {
            v.insert(idx, value);
        }
    }

    fn remove_sorted(v: &mut Vec<u32>, value: u32) {
        if let Ok(idx) = v.binary_search(&value) {
            v.remove(idx);
        }
    }

    let mut final_ops = Vec::with_capacity(ops.len());
    for (op_id, op) in ops.into_iter().enumerate() {
        let final_op = op.finalize(&sorted_values);
        final_ops.push(final_op);

        match final_op {
            FinalOp::Insert(value) => {
                insert_sorted(&mut sorted_values, value);

                let from_btree = btree.insert(value);
                let from_splay = splay.insert(value);
                assert_eq!(from_btree, from_splay, "FinalOp #{op_id}: {op:?}");

                // Inserted or rejected, the touched key must be at the root.
                assert_eq!(splay.root_key(), Some(&value), "FinalOp #{op_id}: {op:?}");
            }

            FinalOp::Contains(value) => {
                let from_btree = btree.contains(&value);
                let from_splay = splay.contains(&value);
                assert_eq!(from_btree, from_splay, "FinalOp #{op_id}: {op:?}");

                if from_splay {
                    assert_eq!(splay.root_key(), Some(&value), "FinalOp #{op_id}: {op:?}");
                }
            }

            FinalOp::Remove(value) => {
                remove_sorted(&mut sorted_values, value);

                let from_btree = btree.remove(&value);
                let from_splay = splay.remove(&value);
                assert_eq!(from_btree, from_splay, "FinalOp #{op_id}: {op:?}");
            }

            FinalOp::LowerBound(value) => {
                let from_btree = btree.range(value..).next();
                let from_splay = splay.lower_bound(&value);
                assert_eq!(from_btree, from_splay, "FinalOp #{op_id}: {op:?}");
            }

            FinalOp::UpperBound(value) => {
                let from_btree = btree
                    .range((Bound::Excluded(value), Bound::Unbounded))
                    .next();
                let from_splay = splay.upper_bound(&value);
                assert_eq!(from_btree, from_splay, "FinalOp #{op_id}: {op:?}");
            }

            FinalOp::RangeCount(lo, hi) => {
                let from_btree = btree.range(lo..=hi).count();
                let from_splay = splay.range_count(&lo, &hi);
                assert_eq!(from_btree, from_splay, "FinalOp #{op_id}: {op:?}");
            }

            FinalOp::First => {
                assert_eq!(btree.first(), splay.first(), "FinalOp #{op_id}: {op:?}");
            }

            FinalOp::Last => {
                assert_eq!(btree.last(), splay.last(), "FinalOp #{op_id}: {op:?}");
            }
        }

        splay.assert_invariants();
        assert_eq!(btree.len(), splay.len());
        assert!(btree.iter().eq(splay.iter()));
    }
}

pub fn run_clone_equivalence(values: Vec<u32>) {
    let mut btree = BTreeSet::new();
    let mut splay: SplaySet<u32> = SplaySet::new();

    for value in values {
        btree.insert(value);
        splay.insert(value);
    }

    let copy = splay.clone();
    copy.assert_invariants();

    assert_eq!(copy.len(), btree.len());
    assert!(btree.iter().eq(copy.iter()));

    // Mutating the source must not disturb the copy.
    splay.clear();
    assert!(splay.is_empty());
    assert_eq!(copy.len(), btree.len());
    assert!(btree.iter().eq(copy.iter()));
}
