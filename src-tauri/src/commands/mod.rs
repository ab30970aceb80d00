pub mod browser;
pub mod settings;
pub mod window;

use serde_json::Value;

/// IPC response envelope for window commands:
/// { success: bool, data?: any, error?: string }
#[derive(Debug, serde::Serialize)]
pub struct IpcResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl IpcResponse {
    pub fn ok(data: Value) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn err(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(msg.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_omits_error() {
        let json = serde_json::to_value(IpcResponse::ok(serde_json::json!({ "visible": true }))).unwrap();
        assert_eq!(json, serde_json::json!({ "success": true, "data": { "visible": true } }));
    }

    #[test]
    fn test_err_omits_data() {
        let json = serde_json::to_value(IpcResponse::err("Panel window not found")).unwrap();
        assert_eq!(json, serde_json::json!({ "success": false, "error": "Panel window not found" }));
    }
}
