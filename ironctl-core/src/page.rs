//! Page shell: heading plus the dashboard region

use serde::Serialize;

use crate::dashboard::{Dashboard, WIDGET_COUNT};
use crate::widgets::Widget;

pub const TITLE: &str = "Smart Ironing System";
pub const LABEL: &str = "Dashboard";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Page {
    pub title: &'static str,
    pub label: &'static str,
    #[serde(serialize_with = "serialize_dashboard")]
    pub dashboard: Dashboard,
}

impl Page {
    pub fn new() -> Self {
        Self {
            title: TITLE,
            label: LABEL,
            dashboard: Dashboard::new(),
        }
    }

    pub fn widgets(&self) -> [Widget; WIDGET_COUNT] {
        self.dashboard.widgets()
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}

// The dashboard has no fields of its own; expose its widgets instead.
fn serialize_dashboard<S>(dashboard: &Dashboard, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    use serde::ser::SerializeStruct;

    let mut state = serializer.serialize_struct("Dashboard", 1)?;
    state.serialize_field("widgets", &dashboard.widgets())?;
    state.end()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_and_label() {
        let page = Page::new();
        assert_eq!(page.title, "Smart Ironing System");
        assert_eq!(page.label, "Dashboard");
    }

    #[test]
    fn serializes_widgets_under_dashboard() {
        let value = serde_json::to_value(Page::new()).unwrap();
        let widgets = value["dashboard"]["widgets"].as_array().unwrap();
        assert_eq!(widgets.len(), WIDGET_COUNT);
        assert_eq!(widgets[2]["tiles"][0]["value"], "12%");
    }
}
