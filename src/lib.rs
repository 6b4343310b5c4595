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
//! AHCI SATA link power state accounting driver.
//!
//! Observes a port's reported link power state (active / partial / slumber /
//! no-link) and maintains cumulative time-in-state counters, exposed through
//! per-port control endpoints. Counters refresh lazily on every read and on
//! PhyRdy-change interrupts, so no background timer is needed.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_op_in_unsafe_fn)]
#![deny(unused_must_use)]

extern crate alloc;

pub mod drivers;
pub mod log;
pub mod memory;
pub mod time;
