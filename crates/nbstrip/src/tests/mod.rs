
mod property_idempotence;
mod property_independence;

fn test_count() -> u64 {
    if is_ci::cached() { 10_000 } else { 1_000 }
}
