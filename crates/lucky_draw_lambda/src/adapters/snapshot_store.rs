use serde_json::json;

use lucky_draw_core::stock::{initial_stock, StockItem, StockSnapshot};

use crate::adapters::object_store::ObjectStore;

/// Load/save policy around the persisted snapshot.
///
/// Persistence is best-effort: every backend failure is absorbed here, so a
/// storage outage can never block returning an otherwise valid computed
/// result. There is no lock or version token on the snapshot key; concurrent
/// invocations race load→save and the last writer wins.
pub struct SnapshotStore<'a, S: ObjectStore> {
    store: &'a S,
    key: String,
}

impl<'a, S: ObjectStore> SnapshotStore<'a, S> {
    pub fn new(store: &'a S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Reads the persisted snapshot, falling back to the built-in default.
    ///
    /// Absent key (first run): the default is persisted before returning so
    /// later reads are stable. Unparseable value: logged as corruption and
    /// overwritten with the default. Unreachable backend: the default is
    /// returned without a persist attempt.
    pub fn load(&self) -> StockSnapshot {
        let body = match self.store.read_object(&self.key) {
            Ok(value) => value,
            Err(error) => {
                log_store_error(
                    "snapshot_read_failed",
                    json!({ "key": self.key, "error": error }),
                );
                return initial_stock();
            }
        };

        let Some(bytes) = body else {
            log_store_info("snapshot_initialized", json!({ "key": self.key }));
            let stock = initial_stock();
            self.save(&stock);
            return stock;
        };

        match serde_json::from_slice::<StockSnapshot>(&bytes) {
            Ok(stock) => stock,
            Err(error) => {
                log_store_error(
                    "snapshot_corrupt",
                    json!({ "key": self.key, "error": error.to_string() }),
                );
                let stock = initial_stock();
                self.save(&stock);
                stock
            }
        }
    }

    /// Best-effort persist: a write failure is logged and swallowed.
    pub fn save(&self, stock: &[StockItem]) {
        let body = match serde_json::to_vec(stock) {
            Ok(value) => value,
            Err(error) => {
                log_store_error(
                    "snapshot_encode_failed",
                    json!({ "key": self.key, "error": error.to_string() }),
                );
                return;
            }
        };

        if let Err(error) = self.store.write_object(&self.key, &body) {
            log_store_error(
                "snapshot_write_failed",
                json!({ "key": self.key, "error": error }),
            );
        }
    }
}

fn log_store_info(event: &str, details: serde_json::Value) {
    eprintln!(
        "{}",
        json!({
            "component": "snapshot_store",
            "event": event,
            "timestamp": chrono::Utc::now().to_rfc3339(),
            "details": details,
        })
    );
}

fn log_store_error(event: &str, details: serde_json::Value) {
    eprintln!(
        "{}",
        json!({
            "component": "snapshot_store",
            "level": "error",
            "event": event,
            "timestamp": chrono::Utc::now().to_rfc3339(),
            "details": details,
        })
    );
}
