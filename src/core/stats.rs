use super::assign::Assignment;
use super::staff::Assignee;

/// Distribution summary of a finished assignment
#[derive(Debug, Clone)]
pub struct LoadSummary {
    counts: Vec<(Assignee, usize)>,
    total: usize,
    min: usize,
    max: usize,
}

impl LoadSummary {
    pub fn new(assignment: &Assignment) -> Self {
        let counts: Vec<(Assignee, usize)> = assignment
            .staff()
            .map(|(id, items)| (id.clone(), items.len()))
            .collect();
        let total = counts.iter().map(|(_, count)| count).sum();
        let min = counts.iter().map(|(_, count)| *count).min().unwrap_or(0);
        let max = counts.iter().map(|(_, count)| *count).max().unwrap_or(0);

        Self {
            counts,
            total,
            min,
            max,
        }
    }

    /// Per-staff item counts, zero-holders included, in staff id order
    pub fn counts(&self) -> &[(Assignee, usize)] {
        &self.counts
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn min(&self) -> usize {
        self.min
    }

    pub fn max(&self) -> usize {
        self.max
    }

    pub fn mean(&self) -> f64 {
        if self.counts.is_empty() {
            return 0.0;
        }
        self.total as f64 / self.counts.len() as f64
    }
}
