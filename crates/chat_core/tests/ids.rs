use std::collections::HashSet;

use chat_core::fresh_id;

#[test]
fn rapid_sequential_ids_are_pairwise_distinct() {
    let mut seen = HashSet::new();
    for _ in 0..1000 {
        assert!(seen.insert(fresh_id()));
    }
}
