use std::fmt;
use colored::Colorize;

use super::assign::Assignment;
use super::stats::LoadSummary;

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        for (id, items) in self.staff() {
            let mut items = items.to_vec();
            items.sort();
            let list = items
                .iter()
                .map(|item| item.to_string())
                .collect::<Vec<_>>()
                .join(", ");
            writeln!(f, "{}: {}", id, list)?;
        }
        Ok(())
    }
}

impl fmt::Display for LoadSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "=== Assignment Statistics ===")?;
        for (id, count) in self.counts() {
            writeln!(f, "{}: {}", id, count)?;
        }
        writeln!(f)?;
        writeln!(f, "Total items: {}", self.total())?;
        writeln!(
            f,
            "Distribution: between {} and {} per staff member",
            self.min().to_string().bright_blue(),
            self.max().to_string().bright_red()
        )?;
        write!(f, "Average: {:.2} per staff member", self.mean())
    }
}
