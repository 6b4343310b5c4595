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
//! Per-port control-file endpoints for link power accounting.
//!
//! Four attributes per monitored port: three read-only time counters
//! (decimal milliseconds) and the read/write accounting-enabled flag.
//! Every time read refreshes the record first, so the reported totals are
//! current at the moment of the read.

use alloc::format;
use alloc::string::String;

use super::controller::AhciController;
use super::errors::AhciError;

/// `active-time` attribute: milliseconds spent with the link active.
pub fn show_active_time(ctrl: &AhciController, port: u32) -> Result<String, AhciError> {
    Ok(format!("{}", ctrl.link_power_stats(port)?.active_ms))
}

/// `partial-time` attribute: milliseconds spent in partial.
pub fn show_partial_time(ctrl: &AhciController, port: u32) -> Result<String, AhciError> {
    Ok(format!("{}", ctrl.link_power_stats(port)?.partial_ms))
}

/// `slumber-time` attribute: milliseconds spent in slumber.
pub fn show_slumber_time(ctrl: &AhciController, port: u32) -> Result<String, AhciError> {
    Ok(format!("{}", ctrl.link_power_stats(port)?.slumber_ms))
}

/// `accounting-enabled` attribute, read side: `"0"` or `"1"`.
pub fn show_accounting(ctrl: &AhciController, port: u32) -> Result<String, AhciError> {
    let enabled = ctrl.accounting_enabled(port)?;
    Ok(String::from(if enabled { "1" } else { "0" }))
}

/// `accounting-enabled` attribute, write side.
///
/// The first byte decides: `'0'` disables, `'1'` enables. Any other
/// payload is silently ignored and leaves the flag unchanged.
pub fn store_accounting(
    ctrl: &AhciController,
    port: u32,
    buf: &[u8],
) -> Result<(), AhciError> {
    if !ctrl.has_port(port) {
        return Err(AhciError::PortNotInitialized);
    }

    match buf.first() {
        Some(b'0') => ctrl.set_accounting(port, false),
        Some(b'1') => ctrl.set_accounting(port, true),
        _ => Ok(()),
    }
}
