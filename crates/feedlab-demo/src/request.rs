use feedlab_error::{FeedlabError, parse_error};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One demo operation, tagged by `op` on the wire.
///
/// Missing `value` fields read as `null`. Tree ids are taken as raw JSON:
/// only a string can name a node, so a missing or non-string id never
/// matches and the operation becomes a no-op.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op")]
pub enum DemoRequest {
    #[serde(rename = "queue.enqueue")]
    QueueEnqueue {
        #[serde(default)]
        value: Value,
    },
    #[serde(rename = "queue.dequeue")]
    QueueDequeue,
    #[serde(rename = "stack.push")]
    StackPush {
        #[serde(default)]
        value: Value,
    },
    #[serde(rename = "stack.pop")]
    StackPop,
    #[serde(rename = "tree.add_root")]
    TreeAddRoot {
        #[serde(default)]
        value: Value,
    },
    #[serde(rename = "tree.add_child")]
    TreeAddChild {
        #[serde(default, alias = "targetId")]
        target: Value,
        #[serde(default)]
        value: Value,
    },
    #[serde(rename = "bt.add_left")]
    BtAddLeft {
        #[serde(default, alias = "parentId")]
        parent: Value,
        #[serde(default)]
        value: Value,
    },
    #[serde(rename = "bt.add_right")]
    BtAddRight {
        #[serde(default, alias = "parentId")]
        parent: Value,
        #[serde(default)]
        value: Value,
    },
    #[serde(rename = "bt.reset")]
    BtReset,
    #[serde(rename = "bst.insert")]
    BstInsert {
        #[serde(default)]
        value: Value,
    },
    #[serde(rename = "bst.reset")]
    BstReset,
}

impl DemoRequest {
    pub fn op(&self) -> &'static str {
        match self {
            DemoRequest::QueueEnqueue { .. } => "queue.enqueue",
            DemoRequest::QueueDequeue => "queue.dequeue",
            DemoRequest::StackPush { .. } => "stack.push",
            DemoRequest::StackPop => "stack.pop",
            DemoRequest::TreeAddRoot { .. } => "tree.add_root",
            DemoRequest::TreeAddChild { .. } => "tree.add_child",
            DemoRequest::BtAddLeft { .. } => "bt.add_left",
            DemoRequest::BtAddRight { .. } => "bt.add_right",
            DemoRequest::BtReset => "bt.reset",
            DemoRequest::BstInsert { .. } => "bst.insert",
            DemoRequest::BstReset => "bst.reset",
        }
    }
}

/// The node id a raw `target`/`parent` field names. Anything that is not a
/// string names no node.
pub fn node_ref(raw: &Value) -> &str {
    raw.as_str().unwrap_or_default()
}

/// Parse one JSON request. Malformed JSON and unknown ops are parse errors.
pub fn parse_request(raw: &str) -> Result<DemoRequest, FeedlabError> {
    serde_json::from_str(raw).map_err(|err| parse_error(format!("invalid demo request: {err}")))
}

/// HTTP-style status plus a JSON body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DemoResponse {
    pub status: u16,
    pub body: Value,
}

impl DemoResponse {
    pub fn ok(body: Value) -> Self {
        Self { status: 200, body }
    }

    /// `{key: snapshot}` with status 200.
    pub fn snapshot(key: &str, snapshot: Value) -> Self {
        let mut body = Map::new();
        body.insert(key.to_string(), snapshot);
        Self::ok(Value::Object(body))
    }

    pub fn reset() -> Self {
        Self::snapshot("status", Value::from("reset"))
    }

    /// `{"error": message}` with the error's status code.
    pub fn error(err: &FeedlabError) -> Self {
        let mut body = Map::new();
        body.insert("error".to_string(), Value::from(err.message()));
        Self {
            status: err.status_code(),
            body: Value::Object(body),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status < 400
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_every_op() {
        let cases = [
            (r#"{"op":"queue.enqueue","value":1}"#, "queue.enqueue"),
            (r#"{"op":"queue.dequeue"}"#, "queue.dequeue"),
            (r#"{"op":"stack.push","value":"a"}"#, "stack.push"),
            (r#"{"op":"stack.pop"}"#, "stack.pop"),
            (r#"{"op":"tree.add_root","value":"r"}"#, "tree.add_root"),
            (r#"{"op":"tree.add_child","target":"x","value":2}"#, "tree.add_child"),
            (r#"{"op":"bt.add_left","parent":"x","value":3}"#, "bt.add_left"),
            (r#"{"op":"bt.add_right","parent":"x","value":4}"#, "bt.add_right"),
            (r#"{"op":"bt.reset"}"#, "bt.reset"),
            (r#"{"op":"bst.insert","value":"5"}"#, "bst.insert"),
            (r#"{"op":"bst.reset"}"#, "bst.reset"),
        ];
        for (raw, op) in cases {
            assert_eq!(parse_request(raw).unwrap().op(), op, "{raw}");
        }
    }

    #[test]
    fn camel_case_id_aliases() {
        let req = parse_request(r#"{"op":"tree.add_child","targetId":"abc","value":1}"#).unwrap();
        assert_eq!(
            req,
            DemoRequest::TreeAddChild {
                target: json!("abc"),
                value: json!(1)
            }
        );
        let req = parse_request(r#"{"op":"bt.add_right","parentId":"p"}"#).unwrap();
        assert_eq!(
            req,
            DemoRequest::BtAddRight {
                parent: json!("p"),
                value: Value::Null
            }
        );
    }

    #[test]
    fn ids_of_any_json_type_parse() {
        let req = parse_request(r#"{"op":"tree.add_child","target":5,"value":1}"#).unwrap();
        assert_eq!(
            req,
            DemoRequest::TreeAddChild {
                target: json!(5),
                value: json!(1)
            }
        );
        let req = parse_request(r#"{"op":"bt.add_left","parent":{"id":"x"}}"#).unwrap();
        assert_eq!(req.op(), "bt.add_left");
    }

    #[test]
    fn node_ref_only_reads_strings() {
        assert_eq!(node_ref(&json!("abc")), "abc");
        assert_eq!(node_ref(&json!(7)), "");
        assert_eq!(node_ref(&Value::Null), "");
    }

    #[test]
    fn missing_value_is_null() {
        let req = parse_request(r#"{"op":"stack.push"}"#).unwrap();
        assert_eq!(req, DemoRequest::StackPush { value: Value::Null });
    }

    #[test]
    fn rejects_unknown_op_and_malformed_json() {
        for raw in [
            r#"{"op":"heap.push","value":1}"#,
            r#"{"value":1}"#,
            "not json",
            "[1,2]",
            "",
        ] {
            let err = parse_request(raw).unwrap_err();
            assert_eq!(err.status_code(), 400, "{raw}");
        }
    }

    #[test]
    fn error_response_body() {
        let resp = DemoResponse::error(&feedlab_error::validation_error("value must be integer"));
        assert_eq!(resp.status, 400);
        assert_eq!(resp.body, json!({"error": "value must be integer"}));
        assert!(!resp.is_success());
    }

    #[test]
    fn reset_response_body() {
        assert_eq!(DemoResponse::reset().body, json!({"status": "reset"}));
    }
}
