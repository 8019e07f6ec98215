use crate::domain::status::{ProgressTone, COMPLETE_ORDINAL};
use crate::domain::Project;
use maud::{html, Markup};

/// Collapsible entry for one project: heading, link, progress gauge, and details.
pub fn project_card(project: &Project) -> Markup {
    let status = project.status;
    let graphic = status.icon().zip(status.icon_offset_percent());
    let tone = status.progress_tone().map(ProgressTone::class_name);

    html! {
        details {
            summary {
                h3 { (project.heading()) }
                div class="project-actions" {
                    @if let Some(url) = project.link() {
                        a href=(url) target="_blank" rel="noopener" { "🔗" }
                    }
                    div class="project-expand-button" aria-hidden="true" tabindex="-1" { "⮟" }
                }
                div class="progress-wrapper" {
                    @if let Some((icon, left)) = graphic {
                        img
                            src=(format!("images/{}", icon.file_name()))
                            alt=""
                            class="status-graphic"
                            style=(format!("left: {left}%"));
                    }
                    progress max=(COMPLETE_ORDINAL) value=(status.ordinal()) class=[tone] {}
                    small class="project-status-text" {
                        span { (status.as_str()) }
                        span { (project.display_completion_date()) }
                    }
                }
            }
            dl {
                dt { "City/Boston Neighborhood" }
                dd { (project.city_or_neighborhood) }
                dt { "Owner" }
                dd { (project.owners_display()) }
                dt { "Designer" }
                dd { (project.designer) }
                dt { "Constructor" }
                dd { (project.constructor) }
                dt { "Est. Construction Start" }
                dd { (project.construction_start_date) }
                dt { "Est. Completion" }
                dd { (project.completion_date) }
                dt { "Point(s) Of Contact" }
                dd { (project.contacts) }
            }
        }
    }
}
