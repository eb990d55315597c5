//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `leadledger_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use leadledger_core::{ActivityLog, MemoryStorage};

fn main() {
    println!("leadledger_core version={}", leadledger_core::core_version());

    // In-memory smoke: record one activity and read it back.
    let mut storage = MemoryStorage::new();
    let mut log = ActivityLog::new(&mut storage);
    let outcome = log.record("cli smoke check");
    match outcome.and(log.recent(1)) {
        Ok(entries) => println!("leadledger_core activity_smoke={}", entries.len()),
        Err(err) => eprintln!("leadledger_core activity_smoke failed: {err}"),
    }
}
