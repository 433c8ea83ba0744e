use super::formatter::FormattedSession;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn sessions(sessions: &[FormattedSession]) {
        let mut table = Table::new();

        table.add_row(row!["ID", "START", "END", "DURATION", "QUALITY"]);
        for session in sessions {
            table.add_row(row![session.id, session.start, session.end, session.duration, session.quality]);
        }
        table.printstd();
    }
}
