use crate::domain::{group_projects, LocationFilter, Project};
use crate::templates::components::project_card;
use maud::{html, Markup};

/// Shown in place of an empty section.
pub const EMPTY_SECTION: &str = "None with current filter";

/// Content of `#projects`: the current, completed, and future sections.
///
/// The whole region is regenerated on every call; nothing is diffed.
pub fn project_sections(projects: &[Project], filter: &LocationFilter) -> Markup {
    let grouped = group_projects(projects, filter);

    html! {
        (section("Current Projects", &grouped.current))
        (section("Completed Projects", &grouped.completed))
        (section("Future/Desired Projects", &grouped.future))
    }
}

fn section(heading: &str, projects: &[&Project]) -> Markup {
    html! {
        hr;
        h2 { (heading) }
        @if projects.is_empty() {
            (EMPTY_SECTION)
        } @else {
            @for project in projects {
                (project_card(project))
            }
        }
    }
}
