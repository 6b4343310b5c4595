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
//! HBA and port bring-up for link monitoring.

use alloc::collections::BTreeMap;
use alloc::format;
use spin::Mutex;

use super::super::constants::*;
use super::super::errors::AhciError;
use super::super::types::{LpmPolicy, PortLinkState};
use super::helpers::RegisterAccess;
use super::lpm;

/// Initialize the HBA for link monitoring and return the implemented-ports
/// bitmap.
pub fn init_hba<T: RegisterAccess>(ctrl: &T) -> Result<u32, AhciError> {
    // Enable AHCI mode before touching any port register.
    ctrl.write_hba_reg(HBA_GHC, ctrl.read_hba_reg(HBA_GHC) | GHC_AE);

    let cap = ctrl.read_hba_reg(HBA_CAP);
    let vs = ctrl.read_hba_reg(HBA_VS);
    let ports_impl = ctrl.read_hba_reg(HBA_PI);

    crate::log::logger::log_critical(&format!(
        "AHCI: CAP=0x{:08x}, VS=0x{:08x}, PI=0x{:08x}",
        cap, vs, ports_impl
    ));

    if ports_impl == 0 {
        return Err(AhciError::NoPortsImplemented);
    }

    Ok(ports_impl)
}

/// Enable HBA-level interrupt delivery.
pub fn enable_interrupts<T: RegisterAccess>(ctrl: &T) {
    ctrl.write_hba_reg(HBA_GHC, ctrl.read_hba_reg(HBA_GHC) | GHC_IE);
}

/// Bring up one port for link monitoring.
///
/// Creates the port's accounting record (zeroed, previous state no-link),
/// applies the initial LPM policy, and programs the interrupt mask.
pub fn init_port<T: RegisterAccess>(
    ctrl: &T,
    ports: &Mutex<BTreeMap<u32, PortLinkState>>,
    policy: LpmPolicy,
    accounting_enabled: bool,
    port: u32,
) {
    // Drop status latched before we owned the port.
    ctrl.write_port_reg(port, PORT_IS, 0xFFFF_FFFF);
    ctrl.write_port_reg(port, PORT_SERR, 0xFFFF_FFFF);

    let mut state = PortLinkState::new(port);
    state.accounting.set_accounting_enabled(accounting_enabled);
    lpm::apply_policy(ctrl, &mut state, policy);

    let det = ctrl.read_port_reg(port, PORT_SSTS) & SSTS_DET_MASK;
    crate::log::logger::log_info(&format!(
        "AHCI: Port {} monitored, link {}",
        port,
        if det == SSTS_DET_ESTABLISHED { "up" } else { "down" }
    ));

    ports.lock().insert(port, state);
}
