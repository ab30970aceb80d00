//! Event suppression as applied by the page-side listeners.

use serde::Serialize;

/// Which of the event-suppression calls a handler makes on the original event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Suppression {
    pub prevent_default: bool,
    pub stop_propagation: bool,
    pub stop_immediate_propagation: bool,
}

impl Suppression {
    /// Cancel the default action and keep ancestors from seeing the event.
    pub const DEFAULT_AND_PROPAGATION: Self = Self {
        prevent_default: true,
        stop_propagation: true,
        stop_immediate_propagation: false,
    };

    /// Additionally stop other listeners on the same node.
    pub const ALL: Self = Self {
        prevent_default: true,
        stop_propagation: true,
        stop_immediate_propagation: true,
    };

    /// JavaScript statements applying this suppression to the event bound
    /// to `var`.
    pub fn to_js(&self, var: &str) -> String {
        let mut out = String::new();
        if self.prevent_default {
            out.push_str(&format!("{}.preventDefault();", var));
        }
        if self.stop_propagation {
            out.push_str(&format!("{}.stopPropagation();", var));
        }
        if self.stop_immediate_propagation {
            out.push_str(&format!("{}.stopImmediatePropagation();", var));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suppression_to_js() {
        assert_eq!(Suppression::default().to_js("e"), "");
        assert_eq!(
            Suppression::DEFAULT_AND_PROPAGATION.to_js("e"),
            "e.preventDefault();e.stopPropagation();"
        );
        assert_eq!(
            Suppression::ALL.to_js("ev"),
            "ev.preventDefault();ev.stopPropagation();ev.stopImmediatePropagation();"
        );
    }
}
