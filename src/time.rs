// NØNOS Operating System
// Copyright (C) 2025 NØNOS Contributors
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
//! Time Management Module
//!
//! Coarse monotonic clock derived from the CPU timestamp counter.

#![allow(dead_code)]

/// TSC ticks per nanosecond (assumes ~2GHz invariant TSC).
const TSC_TICKS_PER_NS: u64 = 2;

#[cfg(target_arch = "x86_64")]
fn read_tsc() -> u64 {
    // SAFETY: _rdtsc reads the timestamp counter, which is always safe
    unsafe { core::arch::x86_64::_rdtsc() }
}

#[cfg(not(target_arch = "x86_64"))]
fn read_tsc() -> u64 {
    0
}

/// Get current time in nanoseconds since boot
pub fn now_ns() -> u64 {
    read_tsc() / TSC_TICKS_PER_NS
}

/// Get current timestamp in milliseconds
pub fn timestamp_millis() -> u64 {
    now_ns() / 1_000_000
}

/// Get current uptime in seconds
pub fn current_uptime() -> u64 {
    now_ns() / 1_000_000_000
}
