//! Stress tests that push the queue through large operation counts
//!
//! Deterministic insertion patterns plus a seeded random churn, to catch
//! edge cases the small-scale tests miss.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashMap;

use indexed_heapq::IndexedHeapQueue;

#[test]
fn test_massive_insert_then_pop() {
    let mut queue = IndexedHeapQueue::new();

    for i in 0..10_000 {
        queue.insert(i, i).unwrap();
    }
    assert_eq!(queue.len(), 10_000);

    for i in 0..10_000 {
        assert_eq!(queue.pop(), Some((i, i)));
    }
    assert!(queue.is_empty());
}

#[test]
fn test_descending_insertion() {
    let mut queue = IndexedHeapQueue::new();

    for i in (0..10_000).rev() {
        queue.insert(i, i).unwrap();
    }

    for i in 0..10_000 {
        assert_eq!(queue.pop(), Some((i, i)));
    }
}

#[test]
fn test_alternating_insert_and_pop() {
    let mut queue = IndexedHeapQueue::new();

    for i in 0..2_000 {
        queue.insert(i * 2, i).unwrap();
        queue.insert(i * 2 + 1, i + 100_000).unwrap();
        assert!(queue.pop().is_some());
    }

    assert_eq!(queue.len(), 2_000);
    let mut last = i32::MIN;
    while let Some((_, p)) = queue.pop() {
        assert!(last <= p);
        last = p;
    }
}

/// Every key gets reprioritized once in each direction before draining.
#[test]
fn test_mass_updates_both_directions() {
    let mut queue = IndexedHeapQueue::new();

    for i in 0..5_000 {
        queue.insert(i, 100_000 + i).unwrap();
    }

    // decrease all
    for i in 0..5_000 {
        assert_eq!(queue.update(&i, i), Ok(100_000 + i));
    }
    assert_eq!(queue.peek(), Some((&0, &0)));

    // push a band back up
    for i in 0..1_000 {
        assert_eq!(queue.update(&i, 200_000 + i), Ok(i));
    }
    assert_eq!(queue.peek(), Some((&1_000, &1_000)));

    for i in 1_000..5_000 {
        assert_eq!(queue.pop(), Some((i, i)));
    }
    for i in 0..1_000 {
        assert_eq!(queue.pop(), Some((i, 200_000 + i)));
    }
    assert!(queue.is_empty());
}

#[test]
fn test_interleaved_removes() {
    let mut queue = IndexedHeapQueue::new();

    for i in 0..3_000 {
        queue.insert(i, i).unwrap();
    }
    for i in (0..3_000).step_by(3) {
        assert_eq!(queue.remove(&i), Some(i));
    }
    assert_eq!(queue.len(), 2_000);

    let mut last = i32::MIN;
    let mut count = 0;
    while let Some((k, p)) = queue.pop() {
        assert_ne!(k % 3, 0);
        assert!(last <= p);
        last = p;
        count += 1;
    }
    assert_eq!(count, 2_000);
}

/// Random churn against a HashMap model, then a full drain.
#[test]
fn test_random_churn() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut queue = IndexedHeapQueue::new();
    let mut model: HashMap<u16, i64> = HashMap::new();

    for _ in 0..50_000 {
        let key = rng.gen_range(0u16..2_000);
        match rng.gen_range(0u8..10) {
            0..=4 => {
                let priority = rng.gen_range(-1_000_000i64..1_000_000);
                assert_eq!(queue.upsert(key, priority), model.insert(key, priority));
            }
            5..=6 => {
                assert_eq!(queue.remove(&key), model.remove(&key));
            }
            7 => {
                assert_eq!(queue.get(&key), model.get(&key));
            }
            _ => match queue.pop() {
                Some((k, p)) => {
                    assert_eq!(model.remove(&k), Some(p));
                    assert!(model.values().all(|&other| p <= other));
                }
                None => assert!(model.is_empty()),
            },
        }
        assert_eq!(queue.len(), model.len());
    }

    let mut last = i64::MIN;
    while let Some((k, p)) = queue.pop() {
        assert_eq!(model.remove(&k), Some(p));
        assert!(last <= p);
        last = p;
    }
    assert!(model.is_empty());
}
