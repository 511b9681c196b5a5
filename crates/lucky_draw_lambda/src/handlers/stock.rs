use rand::Rng;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use lucky_draw_core::contract::{
    clamp_draw_count, DrawAccepted, NoStockRejection, StockResponse, UpdateAccepted,
};
use lucky_draw_core::engine::draw;
use lucky_draw_core::stock::coerce_replacement_items;

use crate::adapters::object_store::ObjectStore;
use crate::adapters::snapshot_store::SnapshotStore;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiGatewayResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub headers: Value,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockHandlerConfig {
    /// Object key of the persisted snapshot.
    pub snapshot_key: String,
    /// Configured admin secret. `None` or empty fails every update closed.
    pub admin_token: Option<String>,
}

/// Single-endpoint dispatch: method plus `action` query parameter select one
/// of list, draw, or admin update. Anything else is a 400.
pub fn handle_stock_event(
    event: &Value,
    config: &StockHandlerConfig,
    store: &impl ObjectStore,
    rng: &mut impl Rng,
) -> ApiGatewayResponse {
    let snapshots = SnapshotStore::new(store, config.snapshot_key.clone());
    let method = event
        .get("httpMethod")
        .and_then(Value::as_str)
        .unwrap_or("");
    let action = query_parameter(event, "action");

    match (method, action.as_deref()) {
        ("GET", _) => handle_list(&snapshots),
        ("POST", Some("draw")) => handle_draw(event, &snapshots, rng),
        ("POST", Some("update")) => handle_update(event, config, &snapshots),
        _ => plain_response(400, "bad request"),
    }
}

fn handle_list<S: ObjectStore>(snapshots: &SnapshotStore<'_, S>) -> ApiGatewayResponse {
    json_response(
        200,
        &StockResponse {
            stock: snapshots.load(),
        },
    )
}

fn handle_draw<S: ObjectStore>(
    event: &Value,
    snapshots: &SnapshotStore<'_, S>,
    rng: &mut impl Rng,
) -> ApiGatewayResponse {
    let body = request_body_value(event).unwrap_or(Value::Null);
    let count = clamp_draw_count(body.get("count"));

    let mut stock = snapshots.load();
    match draw(&mut stock, count, rng) {
        Ok(results) => {
            // Engine result stands even if this save fails; persistence is
            // best-effort by contract.
            snapshots.save(&stock);
            json_response(
                200,
                &DrawAccepted {
                    ok: true,
                    results,
                    stock,
                },
            )
        }
        Err(_) => json_response(400, &NoStockRejection::default()),
    }
}

fn handle_update<S: ObjectStore>(
    event: &Value,
    config: &StockHandlerConfig,
    snapshots: &SnapshotStore<'_, S>,
) -> ApiGatewayResponse {
    let configured = config.admin_token.as_deref().unwrap_or("");
    if configured.is_empty() {
        log_handler_error("admin_token_unset", json!({}));
        return plain_response(403, "forbidden");
    }

    let supplied = header_value(event, "x-admin-token").unwrap_or_default();
    if supplied != configured {
        return plain_response(403, "forbidden");
    }

    let Some(items) = request_body_value(event) else {
        return plain_response(400, "bad format");
    };

    match coerce_replacement_items(&items) {
        Ok(stock) => {
            snapshots.save(&stock);
            json_response(200, &UpdateAccepted { ok: true, stock })
        }
        Err(_) => plain_response(400, "bad format"),
    }
}

/// The body arrives either as a JSON string or as an embedded JSON value.
/// Malformed JSON is treated the same as an absent body.
fn request_body_value(event: &Value) -> Option<Value> {
    match event.get("body") {
        Some(Value::String(text)) => serde_json::from_str(text).ok(),
        Some(Value::Null) | None => None,
        Some(other) => Some(other.clone()),
    }
}

fn query_parameter(event: &Value, name: &str) -> Option<String> {
    event
        .get("queryStringParameters")?
        .get(name)?
        .as_str()
        .map(str::to_string)
}

/// API Gateway does not normalize header case, so the lookup must not either.
fn header_value(event: &Value, name: &str) -> Option<String> {
    let headers = event.get("headers")?.as_object()?;
    headers.iter().find_map(|(key, value)| {
        if key.eq_ignore_ascii_case(name) {
            value.as_str().map(str::to_string)
        } else {
            None
        }
    })
}

fn json_response(status_code: u16, payload: &impl Serialize) -> ApiGatewayResponse {
    ApiGatewayResponse {
        status_code,
        headers: json!({"Content-Type": "application/json"}),
        body: serde_json::to_string(payload).expect("response payload should serialize"),
    }
}

fn plain_response(status_code: u16, body: &str) -> ApiGatewayResponse {
    ApiGatewayResponse {
        status_code,
        headers: json!({"Content-Type": "text/plain"}),
        body: body.to_string(),
    }
}

fn log_handler_error(event: &str, details: Value) {
    eprintln!(
        "{}",
        json!({
            "component": "stock_handler",
            "level": "error",
            "event": event,
            "timestamp": chrono::Utc::now().to_rfc3339(),
            "details": details,
        })
    );
}
