//! Encrypted local preference storage
//!
//! One encrypted file holds window bounds, user preferences, and the last
//! access time. The encryption key comes from [`MachineKey`], so the file
//! is bound to the machine that wrote it: after a hardware or identity
//! change the record no longer decrypts and the store resets to defaults
//! rather than erroring. Login cookies are not kept here — they live in the
//! browser engine's persistent session partition.

pub mod machine_key;

pub use machine_key::MachineKey;

use aes_gcm::{
    aead::{Aead, KeyInit, OsRng},
    Aes256Gcm, Nonce,
};
use rand::RngCore;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};
use studiodesk_core::{StudioDeskError, StudioDeskResult};

const NONCE_LEN: usize = 12;

/// Window width used when nothing is persisted.
pub const DEFAULT_WIDTH: u32 = 1400;
/// Window height used when nothing is persisted.
pub const DEFAULT_HEIGHT: u32 = 900;

/// Well-known preference keys.
pub mod keys {
    /// Launch the shell when the user logs in.
    pub const AUTO_START: &str = "autoStart";
    /// Start hidden in the tray instead of showing the window.
    pub const START_MINIMIZED: &str = "startMinimized";
}

/// Persisted window geometry. Position is optional; absence means the OS
/// places the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowBounds {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<i32>,
    pub width: u32,
    pub height: u32,
}

impl Default for WindowBounds {
    fn default() -> Self {
        Self {
            x: None,
            y: None,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

/// On-disk record, serialized to JSON before encryption.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct StoreRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    window_bounds: Option<WindowBounds>,
    #[serde(default)]
    preferences: BTreeMap<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    last_access: Option<u64>,
}

/// Encrypted key-value store for shell state.
pub struct PreferenceStore {
    path: PathBuf,
    cipher: Aes256Gcm,
    record: StoreRecord,
}

impl PreferenceStore {
    /// Open (or create) the store at `path`, keyed to the given machine
    /// key. A record that fails to decrypt or parse is discarded and the
    /// store starts empty. Every open stamps the last-access time.
    pub fn open<P: AsRef<Path>>(path: P, key: &MachineKey) -> StudioDeskResult<Self> {
        let path = path.as_ref().to_path_buf();
        log::info!("Opening preference store at {:?}", path);

        let digest = Sha256::digest(key.material().as_bytes());
        let mut cipher_key = [0u8; 32];
        cipher_key.copy_from_slice(&digest);
        let cipher = Aes256Gcm::new(&cipher_key.into());

        let record = match std::fs::read(&path) {
            Ok(data) => match decrypt_record(&cipher, &data) {
                Ok(record) => record,
                Err(e) => {
                    log::warn!("Preference store unreadable ({}), resetting", e);
                    StoreRecord::default()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => StoreRecord::default(),
            Err(e) => return Err(e.into()),
        };

        let mut store = Self {
            path,
            cipher,
            record,
        };
        store.record.last_access = Some(current_timestamp());
        store.save()?;

        Ok(store)
    }

    /// Saved window bounds, or the fixed fallback when nothing is stored.
    pub fn window_bounds(&self) -> WindowBounds {
        self.record.window_bounds.unwrap_or_default()
    }

    /// Persist window bounds.
    pub fn set_window_bounds(&mut self, bounds: WindowBounds) -> StudioDeskResult<()> {
        self.record.window_bounds = Some(bounds);
        self.save()
    }

    /// Look up a preference, falling back to the supplied default.
    pub fn get_preference(&self, key: &str, default: Value) -> Value {
        self.record
            .preferences
            .get(key)
            .cloned()
            .unwrap_or(default)
    }

    /// Boolean preference helper.
    pub fn preference_bool(&self, key: &str, default: bool) -> bool {
        self.record
            .preferences
            .get(key)
            .and_then(Value::as_bool)
            .unwrap_or(default)
    }

    /// Set a preference and persist.
    pub fn set_preference(
        &mut self,
        key: &str,
        value: impl Into<Value>,
    ) -> StudioDeskResult<()> {
        self.record.preferences.insert(key.to_string(), value.into());
        self.save()
    }

    /// Unix timestamp of the most recent open.
    pub fn last_access(&self) -> Option<u64> {
        self.record.last_access
    }

    /// Discard everything persisted here. Clearing the engine's session
    /// partition (cookies, cache, auth state) is the shell's job, not the
    /// store's.
    pub fn clear_all(&mut self) -> StudioDeskResult<()> {
        log::info!("Clearing preference store");
        self.record = StoreRecord::default();
        self.save()
    }

    fn save(&self) -> StudioDeskResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let plaintext = serde_json::to_vec(&self.record)
            .map_err(|e| StudioDeskError::Store(format!("Failed to serialize record: {}", e)))?;

        let mut nonce_bytes = [0u8; NONCE_LEN];
        OsRng.fill_bytes(&mut nonce_bytes);
        let nonce = Nonce::from_slice(&nonce_bytes);

        let ciphertext = self
            .cipher
            .encrypt(nonce, plaintext.as_slice())
            .map_err(|e| StudioDeskError::Store(format!("Encryption failed: {}", e)))?;

        let mut data = Vec::with_capacity(NONCE_LEN + ciphertext.len());
        data.extend_from_slice(&nonce_bytes);
        data.extend_from_slice(&ciphertext);

        std::fs::write(&self.path, data)?;
        Ok(())
    }
}

fn decrypt_record(cipher: &Aes256Gcm, data: &[u8]) -> StudioDeskResult<StoreRecord> {
    if data.len() <= NONCE_LEN {
        return Err(StudioDeskError::Store("Record too short".to_string()));
    }

    let (nonce_bytes, ciphertext) = data.split_at(NONCE_LEN);
    let nonce = Nonce::from_slice(nonce_bytes);

    let plaintext = cipher
        .decrypt(nonce, ciphertext)
        .map_err(|e| StudioDeskError::Store(format!("Decryption failed: {}", e)))?;

    serde_json::from_slice(&plaintext)
        .map_err(|e| StudioDeskError::Store(format!("Failed to parse record: {}", e)))
}

fn current_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn test_key() -> MachineKey {
        MachineKey::from_identifiers(&["host", "linux", "x86_64", "TestCPU", "/home/t"])
    }

    #[test]
    fn test_window_bounds_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.dat");
        let key = test_key();

        let bounds = WindowBounds {
            x: Some(120),
            y: Some(80),
            width: 1600,
            height: 1000,
        };

        {
            let mut store = PreferenceStore::open(&path, &key).unwrap();
            store.set_window_bounds(bounds).unwrap();
        }

        let store = PreferenceStore::open(&path, &key).unwrap();
        assert_eq!(store.window_bounds(), bounds);
    }

    #[test]
    fn test_preference_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.dat");
        let key = test_key();

        {
            let mut store = PreferenceStore::open(&path, &key).unwrap();
            store.set_preference(keys::AUTO_START, true).unwrap();
            store.set_preference("theme", "dark").unwrap();
        }

        let store = PreferenceStore::open(&path, &key).unwrap();
        assert!(store.preference_bool(keys::AUTO_START, false));
        assert_eq!(store.get_preference("theme", json!("light")), json!("dark"));
        // The supplied default does not shadow a stored value.
        assert!(store.preference_bool(keys::AUTO_START, false));
    }

    #[test]
    fn test_missing_key_returns_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.dat");
        let store = PreferenceStore::open(&path, &test_key()).unwrap();

        assert!(!store.preference_bool(keys::START_MINIMIZED, false));
        assert!(store.preference_bool(keys::START_MINIMIZED, true));
        assert_eq!(store.get_preference("missing", json!(42)), json!(42));
    }

    #[test]
    fn test_clear_all_restores_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.dat");
        let key = test_key();

        let mut store = PreferenceStore::open(&path, &key).unwrap();
        store.set_preference(keys::AUTO_START, true).unwrap();
        store
            .set_window_bounds(WindowBounds {
                x: Some(5),
                y: Some(5),
                width: 900,
                height: 700,
            })
            .unwrap();

        store.clear_all().unwrap();

        assert!(!store.preference_bool(keys::AUTO_START, false));
        let bounds = store.window_bounds();
        assert_eq!(bounds.width, 1400);
        assert_eq!(bounds.height, 900);
        assert_eq!(bounds.x, None);
    }

    #[test]
    fn test_key_change_resets_instead_of_failing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.dat");

        {
            let mut store = PreferenceStore::open(&path, &test_key()).unwrap();
            store.set_preference(keys::AUTO_START, true).unwrap();
        }

        // Same file, different machine identity.
        let other_key =
            MachineKey::from_identifiers(&["other", "linux", "x86_64", "TestCPU", "/home/t"]);
        let store = PreferenceStore::open(&path, &other_key).unwrap();
        assert!(!store.preference_bool(keys::AUTO_START, false));
    }

    #[test]
    fn test_corrupt_file_resets() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.dat");
        std::fs::write(&path, b"definitely not ciphertext").unwrap();

        let store = PreferenceStore::open(&path, &test_key()).unwrap();
        assert_eq!(store.window_bounds(), WindowBounds::default());
    }

    #[test]
    fn test_file_is_not_plaintext() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.dat");

        let mut store = PreferenceStore::open(&path, &test_key()).unwrap();
        store.set_preference("marker-pref", "marker-value").unwrap();

        let raw = std::fs::read(&path).unwrap();
        let raw_str = String::from_utf8_lossy(&raw);
        assert!(!raw_str.contains("marker-pref"));
        assert!(!raw_str.contains("preferences"));
    }

    #[test]
    fn test_last_access_stamped_on_open() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.dat");

        let store = PreferenceStore::open(&path, &test_key()).unwrap();
        let stamp = store.last_access().expect("last access set");
        assert!(stamp > 0);
    }
}
