use serde_json::Value;
use tracing::log;
use walkdir::WalkDir;

const OLD_DATE_FIELD: &str = "date_match";
const NEW_DATE_FIELD: &str = "date_match_utc";

/// The upcoming-snapshot schema renamed its date field to make the UTC
/// contract explicit. Old snapshot files are rewritten in place; running on
/// an already-migrated tree is a no-op.
pub struct Migrate {}

impl Migrate {
    pub fn up(db_path: &str) {
        Migrate::rename_date_field(db_path, OLD_DATE_FIELD, NEW_DATE_FIELD);
    }

    pub fn down(db_path: &str) {
        Migrate::rename_date_field(db_path, NEW_DATE_FIELD, OLD_DATE_FIELD);
    }

    fn rename_date_field(db_path: &str, from: &str, to: &str) {
        let root = format!("{db_path}/upcoming");
        let mut migrated = 0;
        for entry in WalkDir::new(root)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
        {
            let path = entry.path();
            let data = match std::fs::read_to_string(path) {
                Ok(data) => data,
                Err(_) => continue,
            };
            let mut value: Value = match serde_json::from_str(&data) {
                Ok(value) => value,
                Err(e) => {
                    log::error!("[MIGRATE] Skipping {} {}", path.display(), e);
                    continue;
                }
            };
            if !Migrate::rename_in(&mut value, from, to) {
                continue;
            }
            match serde_json::to_string(&value) {
                Ok(json) => {
                    if std::fs::write(path, json).is_ok() {
                        migrated += 1;
                    }
                }
                Err(e) => log::error!("[MIGRATE] Could not encode {} {}", path.display(), e),
            }
        }
        if migrated > 0 {
            log::info!("[MIGRATE] Renamed {from} -> {to} in {migrated} snapshot files");
        }
    }

    fn rename_in(value: &mut Value, from: &str, to: &str) -> bool {
        match value {
            Value::Array(rows) => {
                let mut changed = false;
                for row in rows {
                    changed |= Migrate::rename_in(row, from, to);
                }
                changed
            }
            Value::Object(map) => {
                if !map.contains_key(from) || map.contains_key(to) {
                    return false;
                }
                match map.remove(from) {
                    Some(v) => {
                        map.insert(to.to_string(), v);
                        true
                    }
                    None => false,
                }
            }
            _ => false,
        }
    }
}
