//! Policy Dispatch Tests.
//!
//! Uses a mock `ReplacementPolicy` to verify the contract between the cache
//! and its policy: every fill and hit is reported, and a victim is requested
//! only when the target set has no empty way.

use cachesim_core::cache::{AccessOutcome, Cache, MissKind};
use cachesim_core::config::ReplacementPolicy as PolicyType;
use mockall::predicate::eq;

use crate::common::mocks::MockPolicy;
use crate::common::{addr, config, init_logging};

#[test]
fn victim_requested_only_for_full_set() {
    init_logging();
    let cfg = config(2, 16, 2, PolicyType::Lru);
    let layout = cfg.layout();
    let (a, b, c) = (addr(layout, 1, 1), addr(layout, 2, 1), addr(layout, 3, 1));

    let mut policy = MockPolicy::new();
    let _ = policy
        .expect_on_fill()
        .withf(|&set, &way| set == 1 && way < 2)
        .times(3)
        .return_const(());
    let _ = policy
        .expect_on_hit()
        .with(eq(1), eq(0))
        .times(1)
        .return_const(());
    let _ = policy
        .expect_select_victim()
        .with(eq(1))
        .times(1)
        .return_const(1usize);

    let mut cache = Cache::with_policy(cfg, Box::new(policy));
    let _ = cache.access(a);
    let _ = cache.access(b);
    assert!(cache.access(a).is_hit());
    assert_eq!(
        cache.access(c),
        AccessOutcome::Miss {
            kind: MissKind::Conflict,
            way: 1,
            evicted: Some(2),
        }
    );
    assert!(cache.contains(a));
    assert!(!cache.contains(b));
}

#[test]
fn cold_fills_never_consult_victim_selection() {
    let cfg = config(4, 16, 4, PolicyType::Fifo);
    let layout = cfg.layout();

    let mut policy = MockPolicy::new();
    let _ = policy.expect_on_fill().times(16).return_const(());
    let _ = policy.expect_on_hit().times(0);
    let _ = policy.expect_select_victim().times(0);

    let mut cache = Cache::with_policy(cfg, Box::new(policy));
    for set in 0..4 {
        for tag in 0..4 {
            let _ = cache.access(addr(layout, tag, set));
        }
    }
    assert!(cache.is_full());
    assert_eq!(cache.stats().compulsory_misses, 16);
}
