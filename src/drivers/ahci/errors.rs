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
//! AHCI link monitor error types.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AhciError {
    /// PCI BAR5 (AHCI MMIO base) is not configured
    Bar5NotConfigured,
    /// HBA reports no implemented ports
    NoPortsImplemented,
    /// Specified port is not initialized for link monitoring
    PortNotInitialized,
}

/// Returns a human-readable description of the error.
impl AhciError {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Bar5NotConfigured => "AHCI BAR5 not configured",
            Self::NoPortsImplemented => "No AHCI ports implemented",
            Self::PortNotInitialized => "Port not initialized",
        }
    }
}

impl fmt::Display for AhciError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
