// NØNOS Operating System
// Copyright (C) 2026 NØNOS Contributors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.
//
//! Low-level volatile MMIO register access.

use core::ptr;
use core::sync::atomic::{AtomicU64, Ordering};
use x86_64::VirtAddr;

// ============================================================================
// GLOBAL STATISTICS TRACKER
// ============================================================================

pub static MMIO_STATS: MmioStats = MmioStats::new();

pub struct MmioStats {
    read_operations: AtomicU64,
    write_operations: AtomicU64,
}

impl MmioStats {
    pub const fn new() -> Self {
        Self {
            read_operations: AtomicU64::new(0),
            write_operations: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn record_read(&self) {
        self.read_operations.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn record_write(&self) {
        self.write_operations.fetch_add(1, Ordering::Relaxed);
    }

    pub fn reads(&self) -> u64 {
        self.read_operations.load(Ordering::Relaxed)
    }

    pub fn writes(&self) -> u64 {
        self.write_operations.load(Ordering::Relaxed)
    }
}

// ============================================================================
// REGISTER ACCESS PRIMITIVES
// ============================================================================

#[inline]
pub fn mmio_r32(va: VirtAddr) -> u32 {
    MMIO_STATS.record_read();
    // SAFETY: Caller ensures address is valid MMIO and aligned
    unsafe { ptr::read_volatile(va.as_ptr()) }
}

#[inline]
pub fn mmio_w32(va: VirtAddr, value: u32) {
    MMIO_STATS.record_write();
    // SAFETY: Caller ensures address is valid MMIO and aligned
    unsafe { ptr::write_volatile(va.as_mut_ptr(), value) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_and_counters() {
        let mut cell: u32 = 0;
        let va = VirtAddr::new(&mut cell as *mut u32 as u64);

        let reads_before = MMIO_STATS.reads();
        let writes_before = MMIO_STATS.writes();

        mmio_w32(va, 0xDEAD_BEEF);
        assert_eq!(mmio_r32(va), 0xDEAD_BEEF);

        assert!(MMIO_STATS.reads() > reads_before);
        assert!(MMIO_STATS.writes() > writes_before);
    }
}
