// src/domain/grouping.rs

use crate::domain::location::LocationFilter;
use crate::domain::project::Project;
use crate::domain::status::Bucket;

/// Filtered projects split into the three page sections, each sorted by title.
#[derive(Debug, Default)]
pub struct GroupedProjects<'a> {
    pub current: Vec<&'a Project>,
    pub completed: Vec<&'a Project>,
    pub future: Vec<&'a Project>,
}

/// Projects passing the filter, ordered by title.
///
/// The sort is stable, so rows with equal titles keep their sheet order.
pub fn filter_and_sort<'a>(projects: &'a [Project], filter: &LocationFilter) -> Vec<&'a Project> {
    let mut selected: Vec<&Project> = projects.iter().filter(|p| filter.matches(p)).collect();
    selected.sort_by(|a, b| a.title.cmp(&b.title));
    selected
}

pub fn group_projects<'a>(projects: &'a [Project], filter: &LocationFilter) -> GroupedProjects<'a> {
    let mut grouped = GroupedProjects::default();
    for project in filter_and_sort(projects, filter) {
        match project.status.bucket() {
            Bucket::Current => grouped.current.push(project),
            Bucket::Completed => grouped.completed.push(project),
            Bucket::Future => grouped.future.push(project),
        }
    }
    grouped
}
