//! Dashboard progress statistics.

use crate::record::{TaskRecord, TaskStatus};

/// Bucket counts plus overall completion for the stat cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TaskStats {
    /// Rounded mean of task progress, percent.
    pub overall: u8,
    pub completed: usize,
    /// In Progress and In Review both count as in progress.
    pub in_progress: usize,
    pub not_started: usize,
}

/// Compute the dashboard summary. An empty set is 0 across the board;
/// there is no division by zero to trip over.
pub fn task_stats(tasks: &[TaskRecord]) -> TaskStats {
    if tasks.is_empty() {
        return TaskStats::default();
    }

    let completed = tasks
        .iter()
        .filter(|t| t.status == TaskStatus::Completed)
        .count();
    let in_progress = tasks
        .iter()
        .filter(|t| matches!(t.status, TaskStatus::InProgress | TaskStatus::InReview))
        .count();
    let not_started = tasks
        .iter()
        .filter(|t| t.status == TaskStatus::NotStarted)
        .count();

    let sum: u32 = tasks.iter().map(|t| u32::from(t.progress)).sum();
    let overall = (f64::from(sum) / tasks.len() as f64).round() as u8;

    TaskStats {
        overall,
        completed,
        in_progress,
        not_started,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: &str, status: TaskStatus, progress: u8) -> TaskRecord {
        TaskRecord {
            id: id.to_string(),
            name: format!("Task {}", id),
            status,
            progress,
            assignee: String::new(),
        }
    }

    #[test]
    fn test_empty_set_is_all_zeros() {
        assert_eq!(task_stats(&[]), TaskStats::default());
    }

    #[test]
    fn test_mock_dashboard_scenario() {
        // The five mock tasks: progress 75/100/0/30/90.
        let tasks = vec![
            task("1", TaskStatus::InProgress, 75),
            task("2", TaskStatus::Completed, 100),
            task("3", TaskStatus::NotStarted, 0),
            task("4", TaskStatus::InProgress, 30),
            task("5", TaskStatus::InReview, 90),
        ];
        let stats = task_stats(&tasks);
        assert_eq!(stats.overall, 59); // round(295 / 5)
        assert_eq!(stats.completed, 1);
        assert_eq!(stats.in_progress, 3); // In Review counts here
        assert_eq!(stats.not_started, 1);
    }

    #[test]
    fn test_rounding() {
        let tasks = vec![
            task("1", TaskStatus::InProgress, 33),
            task("2", TaskStatus::InProgress, 34),
        ];
        // 33.5 rounds away from zero.
        assert_eq!(task_stats(&tasks).overall, 34);
    }

    #[test]
    fn test_all_completed() {
        let tasks = vec![
            task("1", TaskStatus::Completed, 100),
            task("2", TaskStatus::Completed, 100),
        ];
        let stats = task_stats(&tasks);
        assert_eq!(stats.overall, 100);
        assert_eq!(stats.completed, 2);
        assert_eq!(stats.in_progress, 0);
        assert_eq!(stats.not_started, 0);
    }
}
