//! Machine-bound encryption key derivation.
//!
//! The preference file is encrypted with a key derived from stable machine
//! identifiers, so the file is only readable on the machine that wrote it.
//! The key is recomputed at every process start and never persisted; if the
//! identifiers change (say the file was copied to another machine), the
//! store resets instead of failing.

use sha2::{Digest, Sha256};
use sysinfo::System;

/// Length of the derived key material in hex characters.
const KEY_LEN: usize = 32;

/// Symmetric key material derived from the current machine's identifiers.
#[derive(Clone, PartialEq, Eq)]
pub struct MachineKey(String);

impl MachineKey {
    /// Derive the key for the current machine: hostname, OS name, CPU
    /// architecture, first CPU model string, and home directory, hashed
    /// together. Same machine state, same key, every start.
    pub fn derive() -> Self {
        let hostname =
            whoami::fallible::hostname().unwrap_or_else(|_| "unknown".to_string());
        let cpu_model = first_cpu_model();
        let home_dir = dirs::home_dir()
            .map(|path| path.to_string_lossy().into_owned())
            .unwrap_or_else(|| "unknown".to_string());

        Self::from_identifiers(&[
            &hostname,
            std::env::consts::OS,
            std::env::consts::ARCH,
            &cpu_model,
            &home_dir,
        ])
    }

    /// Hash the identifier list into fixed-length key material.
    pub fn from_identifiers(identifiers: &[&str]) -> Self {
        let machine_id = identifiers.join("|");
        let digest = Sha256::digest(machine_id.as_bytes());
        let mut material = hex::encode(digest);
        material.truncate(KEY_LEN);
        Self(material)
    }

    /// The raw key material.
    pub fn material(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for MachineKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Key material stays out of logs.
        f.write_str("MachineKey(..)")
    }
}

fn first_cpu_model() -> String {
    let mut system = System::new();
    system.refresh_cpu_all();
    system
        .cpus()
        .first()
        .map(|cpu| cpu.brand().trim().to_string())
        .filter(|brand| !brand.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_is_deterministic() {
        assert_eq!(MachineKey::derive(), MachineKey::derive());
    }

    #[test]
    fn test_fixed_length() {
        let key = MachineKey::derive();
        assert_eq!(key.material().len(), KEY_LEN);
        assert!(key.material().chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_any_identifier_change_changes_key() {
        let base = ["host", "linux", "x86_64", "SomeCPU", "/home/me"];
        let key = MachineKey::from_identifiers(&base);

        for i in 0..base.len() {
            let mut changed = base;
            changed[i] = "different";
            assert_ne!(
                key,
                MachineKey::from_identifiers(&changed),
                "changing identifier {} did not change the key",
                i
            );
        }
    }

    #[test]
    fn test_separator_prevents_ambiguity() {
        let a = MachineKey::from_identifiers(&["ab", "c"]);
        let b = MachineKey::from_identifiers(&["a", "bc"]);
        assert_ne!(a, b);
    }

    #[test]
    fn test_debug_does_not_leak_material() {
        let key = MachineKey::derive();
        let debug = format!("{:?}", key);
        assert!(!debug.contains(key.material()));
    }
}
