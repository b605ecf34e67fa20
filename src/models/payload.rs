use serde_json::Value;

/// The two fields of interest in a platform callback:
/// `payload.payload.payload.text` and `payload.sender.phone`.
#[derive(Debug, PartialEq, Eq)]
pub struct InboundMessage {
    pub text: Option<String>,
    pub operator_phone: Option<String>,
}

impl InboundMessage {
    // Pointer descent short-circuits on a missing or wrong-typed node.
    #[must_use]
    pub fn from_value(body: &Value) -> Self {
        let text = body
            .pointer("/payload/payload/payload/text")
            .and_then(Value::as_str)
            .map(str::to_owned);
        let operator_phone = body
            .pointer("/payload/sender/phone")
            .and_then(Value::as_str)
            .map(str::to_owned);
        Self {
            text,
            operator_phone,
        }
    }
}
