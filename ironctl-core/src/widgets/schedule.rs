use super::{ScheduleEntry, Widget};

pub const TITLE: &str = "Daily Schedule";

/// Placeholder entries until a scheduling backend exists
pub const ENTRIES: [ScheduleEntry; 2] = [
    ScheduleEntry {
        time: "09:00 AM",
        label: "Start Ironing",
    },
    ScheduleEntry {
        time: "05:00 PM",
        label: "End Session",
    },
];

/// Daily schedule: two stacked time/label rows.
pub fn daily_schedule() -> Widget {
    Widget::Schedule {
        title: TITLE,
        entries: &ENTRIES,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_two_rows_in_order() {
        let Widget::Schedule { entries, .. } = daily_schedule() else {
            panic!("expected schedule widget");
        };

        let rows: Vec<(&str, &str)> = entries.iter().map(|e| (e.time, e.label)).collect();
        assert_eq!(
            rows,
            vec![("09:00 AM", "Start Ironing"), ("05:00 PM", "End Session")]
        );
    }
}
