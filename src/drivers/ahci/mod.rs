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
//! AHCI (Advanced Host Controller Interface) link power monitor.
//!
//! # References
//! - AHCI 1.3.1 Specification (Intel)
//! - Serial ATA Revision 3.0 Specification
//!
//! Tracks how long each port's SATA link spends in the active, partial and
//! slumber power states. The record is refreshed from two directions: the
//! PhyRdy-change interrupt path, and lazily on every read of a counter.
//! Enabling accounting for a port keeps the PhyRdy-change interrupt
//! unmasked even under an aggressive link power management policy.

pub mod constants;
pub mod control;
pub mod controller;
pub mod errors;
pub mod power;
pub mod stats;
pub mod types;


// Re-export main types at module root for convenience
pub use controller::{AhciController, RegisterAccess};
pub use errors::AhciError;
pub use power::LinkPowerAccounting;
pub use stats::LinkPowerStats;
pub use types::{LinkPowerState, LpmPolicy, PortLinkState};

use spin::Once;

/// Global AHCI link monitor instance (initialized once via Once).
///
/// Using spin::Once ensures thread-safe, one-time initialization without
/// requiring unsafe static mut access patterns.
static AHCI_CONTROLLER: Once<AhciController> = Once::new();

/// Initializes the AHCI link power monitor over an HBA MMIO window.
pub fn init_ahci(mmio_base: usize) -> Result<(), AhciError> {
    // Check if already initialized
    if AHCI_CONTROLLER.is_completed() {
        return Ok(());
    }

    let controller = AhciController::new(mmio_base)?;
    controller.init()?;

    // Store in global instance (Once ensures this only happens once)
    AHCI_CONTROLLER.call_once(|| controller);

    crate::log::logger::log_critical("AHCI link power accounting online");
    Ok(())
}

#[inline]
pub fn get_controller() -> Option<&'static AhciController> {
    AHCI_CONTROLLER.get()
}
