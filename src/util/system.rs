//! Process-level metrics for the deep health check.

use sysinfo::{ProcessesToUpdate, System};

use crate::model::health::MemoryDto;

const BYTES_PER_MIB: u64 = 1024 * 1024;

/// Memory usage of the current process in mebibytes.
///
/// Returns `None` when the platform does not expose process information; the
/// health endpoint then simply omits the memory section.
pub fn process_memory() -> Option<MemoryDto> {
    let pid = sysinfo::get_current_pid().ok()?;

    let mut system = System::new();
    system.refresh_processes(ProcessesToUpdate::Some(&[pid]), true);

    let process = system.process(pid)?;

    Some(MemoryDto {
        resident_mb: process.memory() / BYTES_PER_MIB,
        virtual_mb: process.virtual_memory() / BYTES_PER_MIB,
    })
}
