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
//! Link power management policy application and interrupt-mask coordination.
//!
//! Reduced-power policies mask the PhyRdy-change interrupt so the host is
//! not woken on every partial/slumber transition. Accounting depends on
//! exactly those interrupts, so an enabled accounting record overrides the
//! masking. Callers hold the port-map lock for every function here; the
//! PxIE read-modify-write and its in-memory shadow must not race the
//! interrupt handler.

use alloc::format;

use super::super::constants::{
    CMD_ALPE, CMD_ASP, IE_PRCE, PORT_CMD, PORT_IE, PORT_SCTL, SCTL_IPM_MASK, SCTL_IPM_NO_PARTIAL,
    SCTL_IPM_NO_SLUMBER, SCTL_IPM_SHIFT,
};
use super::super::types::{LpmPolicy, PortLinkState};
use super::helpers::RegisterAccess;

/// Apply `policy` to the port: program the transition bits, then recompute
/// the PhyRdy-change interrupt mask.
pub fn apply_policy<T: RegisterAccess>(ctrl: &T, state: &mut PortLinkState, policy: LpmPolicy) {
    let mut cmd = ctrl.read_port_reg(state.port, PORT_CMD) & !(CMD_ALPE | CMD_ASP);
    let mut sctl = ctrl.read_port_reg(state.port, PORT_SCTL) & !(SCTL_IPM_MASK << SCTL_IPM_SHIFT);

    match policy {
        LpmPolicy::MaxPerformance => {
            sctl |= (SCTL_IPM_NO_PARTIAL | SCTL_IPM_NO_SLUMBER) << SCTL_IPM_SHIFT;
        }
        LpmPolicy::MediumPower => {
            cmd |= CMD_ALPE;
        }
        LpmPolicy::MinPower => {
            cmd |= CMD_ALPE | CMD_ASP;
        }
    }

    ctrl.write_port_reg(state.port, PORT_SCTL, sctl);
    ctrl.write_port_reg(state.port, PORT_CMD, cmd);
    state.policy = policy;

    let mask = if policy.is_low_power() && !state.accounting.accounting_enabled() {
        state.irq_mask & !IE_PRCE
    } else {
        state.irq_mask | IE_PRCE
    };
    write_irq_mask(ctrl, state, mask);

    crate::log::logger::log_info(&format!(
        "AHCI: Port {} LPM policy {}",
        state.port,
        policy.as_str()
    ));
}

/// Keep the PhyRdy-change interrupt source alive for accounting.
///
/// Called on the accounting-enable transition; disabling accounting never
/// re-masks, that is left to the next policy application.
pub fn unmask_phyrdy<T: RegisterAccess>(ctrl: &T, state: &mut PortLinkState) {
    let mask = state.irq_mask | IE_PRCE;
    write_irq_mask(ctrl, state, mask);
}

fn write_irq_mask<T: RegisterAccess>(ctrl: &T, state: &mut PortLinkState, mask: u32) {
    state.irq_mask = mask;
    ctrl.write_port_reg(state.port, PORT_IE, mask);
}
