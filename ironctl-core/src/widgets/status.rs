use super::Widget;

pub const TITLE: &str = "Status";
pub const MESSAGE: &str = "System is active";

/// Status panel: a single fixed message.
pub fn status_panel() -> Widget {
    Widget::Status {
        title: TITLE,
        message: MESSAGE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_fixed_message() {
        match status_panel() {
            Widget::Status { message, .. } => assert_eq!(message, "System is active"),
            other => panic!("unexpected widget: {:?}", other),
        }
    }

    #[test]
    fn is_idempotent() {
        assert_eq!(status_panel(), status_panel());
    }
}
