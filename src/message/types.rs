use serde::{Serialize, Serializer};

/// Channel type tag the messaging core uses for group chats
pub const CHANNEL_TYPE_GROUP: u8 = 2;

/// Delivery flags carried in every message header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
pub struct MsgHeader {
    /// 1 when the message must not be stored
    pub no_persist: u8,
    /// 1 when the message should raise a badge / red dot
    pub red_dot: u8,
    /// 1 when the message is only synced once
    pub sync_once: u8,
}

impl MsgHeader {
    /// Persisted, badge-raising header used by all group notifications
    pub fn notice() -> Self {
        Self {
            no_persist: 0,
            red_dot: 1,
            sync_once: 0,
        }
    }
}

/// Per-message delivery settings, packed into a single byte on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Setting {
    /// Message requires read receipts
    pub receipt: bool,
    /// Do not touch the recipients' recent-conversation list
    pub no_update_conversation: bool,
    /// Signal-encrypted payload
    pub signal: bool,
}

impl Setting {
    pub fn to_u8(self) -> u8 {
        (u8::from(self.receipt) << 7)
            | (u8::from(self.no_update_conversation) << 6)
            | (u8::from(self.signal) << 5)
    }
}

/// Envelope handed to the messaging core's send primitive
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MessageSendRequest {
    pub header: MsgHeader,
    pub setting: u8,
    pub channel_id: String,
    pub channel_type: u8,
    /// Explicit recipients; empty means every channel subscriber
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub subscribers: Vec<String>,
    /// JSON object encoded as bytes
    #[serde(serialize_with = "serialize_payload")]
    pub payload: Vec<u8>,
}

impl MessageSendRequest {
    /// Decode the payload back into JSON
    pub fn payload_json(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::from_slice(&self.payload)
    }
}

/// Command signal handed to the messaging core's command primitive
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommandRequest {
    pub channel_id: String,
    pub channel_type: u8,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub subscribers: Vec<String>,
    pub cmd: String,
    pub param: serde_json::Value,
}

// Payloads are always JSON, so they travel as text rather than a byte array.
fn serialize_payload<S>(payload: &[u8], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&String::from_utf8_lossy(payload))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_setting_bits() {
        assert_eq!(Setting::default().to_u8(), 0);

        let setting = Setting {
            no_update_conversation: true,
            ..Default::default()
        };
        assert_eq!(setting.to_u8(), 0b0100_0000);

        let setting = Setting {
            receipt: true,
            no_update_conversation: true,
            signal: true,
        };
        assert_eq!(setting.to_u8(), 0b1110_0000);
    }

    #[test]
    fn test_envelope_serialization() {
        let req = MessageSendRequest {
            header: MsgHeader::notice(),
            setting: 0,
            channel_id: "g1".to_string(),
            channel_type: CHANNEL_TYPE_GROUP,
            subscribers: vec![],
            payload: br#"{"type":1001}"#.to_vec(),
        };

        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(
            value,
            json!({
                "header": { "no_persist": 0, "red_dot": 1, "sync_once": 0 },
                "setting": 0,
                "channel_id": "g1",
                "channel_type": 2,
                "payload": "{\"type\":1001}"
            })
        );
        assert_eq!(req.payload_json().unwrap()["type"], 1001);
    }
}
