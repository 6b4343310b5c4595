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
//! AHCI link monitor controller - thin orchestration module.

mod helpers;
mod init;
mod lpm;

use alloc::collections::BTreeMap;
use alloc::format;
use core::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use spin::Mutex;

use super::constants::*;
use super::errors::AhciError;
use super::power::LinkPowerAccounting;
use super::stats::LinkPowerStats;
use super::types::{LinkPowerState, LpmPolicy, PortLinkState};

pub use helpers::RegisterAccess;

/// AHCI link power monitor.
///
/// One port-map lock serializes accounting updates, accounting reads,
/// policy changes and interrupt-mask writes; the interrupt handler and the
/// control surface both take it, so the PxIE read-modify-write can never
/// race between them.
pub struct AhciController {
    base_addr: usize,
    ports: Mutex<BTreeMap<u32, PortLinkState>>,
    phyrdy_events: AtomicU64,
    default_policy: Mutex<LpmPolicy>,
    accounting_default: AtomicBool,
}

impl RegisterAccess for AhciController {
    fn base_addr(&self) -> usize {
        self.base_addr
    }
}

impl AhciController {
    /// Creates a new controller over an HBA MMIO window.
    pub fn new(mmio_base: usize) -> Result<Self, AhciError> {
        if mmio_base == 0 {
            return Err(AhciError::Bar5NotConfigured);
        }

        Ok(Self {
            base_addr: mmio_base,
            ports: Mutex::new(BTreeMap::new()),
            phyrdy_events: AtomicU64::new(0),
            default_policy: Mutex::new(LpmPolicy::MaxPerformance),
            accounting_default: AtomicBool::new(false),
        })
    }

    /// Initializes the HBA and brings up every implemented port for link
    /// monitoring.
    pub fn init(&self) -> Result<(), AhciError> {
        let ports_impl = init::init_hba(self)?;
        let policy = *self.default_policy.lock();
        let accounting = self.accounting_default.load(Ordering::Relaxed);

        for port in 0..MAX_PORTS {
            if (ports_impl & (1 << port)) != 0 {
                init::init_port(self, &self.ports, policy, accounting, port);
            }
        }

        init::enable_interrupts(self);
        Ok(())
    }

    /// Interrupt-path entry: ack a PhyRdy-change event and fold the elapsed
    /// interval into the port's accounting record.
    pub fn handle_port_interrupt(&self, port: u32) {
        let is = self.read_port_reg(port, PORT_IS);
        if is & IS_PRCS == 0 {
            return;
        }

        // DIAG.N latches the Phy transition; clear it before acking PxIS or
        // the interrupt re-fires immediately.
        self.write_port_reg(port, PORT_SERR, SERR_DIAG_N);
        self.write_port_reg(port, PORT_IS, IS_PRCS);
        self.phyrdy_events.fetch_add(1, Ordering::Relaxed);

        let mut ports = self.ports.lock();
        let state = match ports.get_mut(&port) {
            Some(state) => state,
            None => {
                crate::log::logger::log_warn(&format!(
                    "AHCI: PhyRdy change on unmonitored port {}",
                    port
                ));
                return;
            }
        };

        if state.policy.is_low_power() || state.accounting.accounting_enabled() {
            let current = LinkPowerState::from_ipm(self.read_link_ipm(port));
            let now = self.now_ms();
            state.accounting.record(current, now);
        }
    }

    /// Refresh the port's accounting from current hardware state, then
    /// snapshot it. Readers always observe up-to-date totals even if no
    /// interrupt has fired since the last read.
    pub fn link_power_stats(&self, port: u32) -> Result<LinkPowerStats, AhciError> {
        let mut ports = self.ports.lock();
        let state = ports
            .get_mut(&port)
            .ok_or(AhciError::PortNotInitialized)?;

        let current = LinkPowerState::from_ipm(self.read_link_ipm(port));
        let now = self.now_ms();
        state.accounting.record(current, now);

        Ok(Self::snapshot(
            &state.accounting,
            self.phyrdy_events.load(Ordering::Relaxed),
        ))
    }

    fn snapshot(accounting: &LinkPowerAccounting, phyrdy_events: u64) -> LinkPowerStats {
        LinkPowerStats {
            active_ms: accounting.active_ms(),
            partial_ms: accounting.partial_ms(),
            slumber_ms: accounting.slumber_ms(),
            state: accounting.previous_state(),
            accounting_enabled: accounting.accounting_enabled(),
            phyrdy_events,
        }
    }

    /// Current accounting enablement; no refresh side effect.
    pub fn accounting_enabled(&self, port: u32) -> Result<bool, AhciError> {
        let ports = self.ports.lock();
        let state = ports.get(&port).ok_or(AhciError::PortNotInitialized)?;
        Ok(state.accounting.accounting_enabled())
    }

    /// Toggle accounting for a port.
    ///
    /// Enabling unmasks the PhyRdy-change interrupt under the port lock so
    /// the record keeps receiving events regardless of the LPM policy.
    /// Disabling changes no mask; the next policy application re-masks.
    pub fn set_accounting(&self, port: u32, enabled: bool) -> Result<(), AhciError> {
        let mut ports = self.ports.lock();
        let state = ports
            .get_mut(&port)
            .ok_or(AhciError::PortNotInitialized)?;

        let was_enabled = state.accounting.accounting_enabled();
        state.accounting.set_accounting_enabled(enabled);

        if enabled && !was_enabled {
            lpm::unmask_phyrdy(self, state);
        }
        Ok(())
    }

    /// Apply a link power management policy to a port.
    pub fn set_lpm_policy(&self, port: u32, policy: LpmPolicy) -> Result<(), AhciError> {
        let mut ports = self.ports.lock();
        let state = ports
            .get_mut(&port)
            .ok_or(AhciError::PortNotInitialized)?;
        lpm::apply_policy(self, state, policy);
        Ok(())
    }

    /// Currently applied policy for a port.
    pub fn lpm_policy(&self, port: u32) -> Result<LpmPolicy, AhciError> {
        let ports = self.ports.lock();
        let state = ports.get(&port).ok_or(AhciError::PortNotInitialized)?;
        Ok(state.policy)
    }

    pub fn has_port(&self, port: u32) -> bool {
        self.ports.lock().contains_key(&port)
    }

    /// Policy applied to ports brought up by a later `init`.
    pub fn set_default_lpm_policy(&self, policy: LpmPolicy) {
        *self.default_policy.lock() = policy;
    }

    /// Accounting enablement applied to ports brought up by a later `init`.
    pub fn set_accounting_default(&self, enabled: bool) {
        self.accounting_default.store(enabled, Ordering::Relaxed);
    }

    pub fn phyrdy_events(&self) -> u64 {
        self.phyrdy_events.load(Ordering::Relaxed)
    }
}
