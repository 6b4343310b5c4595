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
//! Low-level MMIO register access.

use x86_64::VirtAddr;

use crate::memory::mmio::{mmio_r32, mmio_w32};

use super::super::constants::{
    PORT_REGS_BASE, PORT_REGS_STRIDE, PORT_SSTS, SSTS_IPM_MASK, SSTS_IPM_SHIFT,
};

/// Trait for AHCI register access operations.
///
/// Everything the link monitor needs from the hardware goes through this
/// seam: register reads/writes against the HBA window and the monotonic
/// clock used to timestamp observations.
pub trait RegisterAccess {
    /// Get the MMIO base address.
    fn base_addr(&self) -> usize;

    /// Read an HBA register.
    fn read_hba_reg(&self, offset: u32) -> u32 {
        mmio_r32(VirtAddr::new((self.base_addr() + offset as usize) as u64))
    }

    /// Write an HBA register.
    fn write_hba_reg(&self, offset: u32, value: u32) {
        mmio_w32(
            VirtAddr::new((self.base_addr() + offset as usize) as u64),
            value,
        )
    }

    /// Read a port register.
    fn read_port_reg(&self, port: u32, offset: u32) -> u32 {
        let port_offset = PORT_REGS_BASE + (port * PORT_REGS_STRIDE) + offset;
        self.read_hba_reg(port_offset)
    }

    /// Write a port register.
    fn write_port_reg(&self, port: u32, offset: u32, value: u32) {
        let port_offset = PORT_REGS_BASE + (port * PORT_REGS_STRIDE) + offset;
        self.write_hba_reg(port_offset, value)
    }

    /// Non-blocking read of the port's interface power management substate.
    fn read_link_ipm(&self, port: u32) -> u32 {
        (self.read_port_reg(port, PORT_SSTS) >> SSTS_IPM_SHIFT) & SSTS_IPM_MASK
    }

    /// Get a monotonic timestamp in milliseconds.
    fn now_ms(&self) -> u64 {
        crate::time::timestamp_millis()
    }
}
