use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Display;
use std::time::Instant;
use tracing::log;

/// One JSON file per key under `<base_dir>/<name>/`. Enough persistence for
/// the gateway's last-good snapshots; the services own the real data.
pub struct Db<K: Display, V: DeserializeOwned + Serialize> {
    pub name: String,
    base_dir: String,
    key_type: std::marker::PhantomData<K>,
    value_type: std::marker::PhantomData<V>,
}

impl<K: Display, V: DeserializeOwned + Serialize> Db<K, V> {
    pub fn new(name: &str, base_dir: &str) -> Db<K, V> {
        Db {
            name: name.to_string(),
            base_dir: base_dir.trim_end_matches('/').to_string(),
            key_type: std::marker::PhantomData,
            value_type: std::marker::PhantomData,
        }
    }

    pub fn read(&self, key: &K) -> Option<V> {
        let before = Instant::now();
        let path = self.get_path(&key.to_string());
        let data = std::fs::read_to_string(&path).ok()?;
        let res = match serde_json::from_str(&data) {
            Ok(e) => Some(e),
            Err(e) => {
                log::error!("[DB] Read failed {} {}", path, e);
                None
            }
        };
        log::debug!("[DB] Read from file {path} {:.2?}", before.elapsed());
        res
    }

    pub fn write(&self, key: &K, obj: &V) -> std::io::Result<()> {
        let before = Instant::now();
        let json = serde_json::to_string(&obj)?;
        let path = std::path::PathBuf::from(self.get_path(&key.to_string()));
        std::fs::create_dir_all(path.parent().unwrap())?;
        match std::fs::write(path, json) {
            Ok(e) => {
                log::debug!("[DB] Wrote to file {}/{} {:.2?}", self.name, key, before.elapsed());
                Ok(e)
            }
            Err(e) => {
                log::debug!("[DB] Write failed {}/{} {}", self.name, key, e);
                Ok(())
            }
        }
    }

    fn get_path(&self, key: &str) -> String {
        format!("{}/{}/{}", self.base_dir, self.name, key)
    }
}
