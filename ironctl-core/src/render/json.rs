use crate::error::{IronError, Result};
use crate::page::Page;

/// Pretty-printed JSON of the page model
pub fn to_json(page: &Page) -> Result<String> {
    serde_json::to_string_pretty(page).map_err(|e| IronError::json("page", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn json_shape() {
        let json = to_json(&Page::new()).unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["title"], "Smart Ironing System");
        assert_eq!(value["label"], "Dashboard");

        let widgets = value["dashboard"]["widgets"].as_array().unwrap();
        let kinds: Vec<&str> = widgets.iter().map(|w| w["kind"].as_str().unwrap()).collect();
        assert_eq!(kinds, vec!["status", "schedule", "impact"]);

        assert_eq!(widgets[1]["entries"][1]["time"], "05:00 PM");
        assert_eq!(widgets[2]["tiles"][1]["accent"], "green");
    }
}
