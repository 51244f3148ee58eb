//! JSON envelopes for `--format json` output.
//!
//! Every envelope carries `envelope_version`, `ts` (unix seconds with a `Z`
//! suffix), `event_id` (a ULID), `cmd` and `status`, followed by the command's
//! own fields. `ts` is taken from the ULID, so the two always agree.

use serde_json::Value as JsonValue;
use ulid::Ulid;

pub const ENVELOPE_VERSION: &str = "1.0.0";

fn epoch_seconds_z(id: Ulid) -> String {
    format!("{}Z", id.timestamp_ms() / 1000)
}

/// Wrap a command payload. Keys of `payload` are merged into the top level;
/// a non-object payload lands under `data`.
pub fn command_envelope(cmd: &str, status: &str, payload: JsonValue) -> JsonValue {
    let id = Ulid::new();
    let mut envelope = serde_json::Map::new();
    envelope.insert("envelope_version".into(), ENVELOPE_VERSION.into());
    envelope.insert("ts".into(), epoch_seconds_z(id).into());
    envelope.insert("event_id".into(), id.to_string().into());
    envelope.insert("cmd".into(), cmd.into());
    envelope.insert("status".into(), status.into());
    match payload {
        JsonValue::Object(fields) => envelope.extend(fields),
        JsonValue::Null => {}
        other => {
            envelope.insert("data".into(), other);
        }
    }
    JsonValue::Object(envelope)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ts_matches_event_id() {
        let env = command_envelope("sections", "ok", JsonValue::Null);
        let id = Ulid::from_string(env["event_id"].as_str().expect("event_id")).expect("ulid");
        let ts = env["ts"].as_str().expect("ts");
        assert_eq!(ts, format!("{}Z", id.timestamp_ms() / 1000));
        assert!(env.get("data").is_none());
    }

    #[test]
    fn test_event_ids_are_unique() {
        let a = command_envelope("stats", "ok", JsonValue::Null);
        let b = command_envelope("stats", "ok", JsonValue::Null);
        assert_ne!(a["event_id"], b["event_id"]);
    }

    #[test]
    fn test_envelope_merges_object_and_wraps_others() {
        let env = command_envelope("stats", "ok", serde_json::json!({ "sections": 8 }));
        assert_eq!(env["envelope_version"], ENVELOPE_VERSION);
        assert_eq!(env["cmd"], "stats");
        assert_eq!(env["status"], "ok");
        assert_eq!(env["sections"], 8);

        let env = command_envelope("search", "ok", serde_json::json!([1, 2]));
        assert_eq!(env["data"], serde_json::json!([1, 2]));
    }
}
