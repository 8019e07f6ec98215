// templates/pages/home.rs

use crate::domain::{location_options, LocationFilter};
use crate::state::AppContext;
use crate::templates::{components::filter_form, desktop_layout, pages::project_sections};
use maud::{html, Markup};

pub fn home_page(ctx: &AppContext, filter: &LocationFilter) -> Markup {
    let projects = ctx.projects().unwrap_or_default();

    desktop_layout(
        "Micromobility Project Tracker",
        html! {
            main class="container" {
                (filter_form(&location_options(projects), filter))

                p id="error-message" class="error" {
                    @if let Some(message) = ctx.load_error() {
                        (message)
                    }
                }

                div id="projects" {
                    @if ctx.load_error().is_none() {
                        (project_sections(projects, filter))
                    }
                }

                @if let Some(loaded_at) = ctx.loaded_at() {
                    footer {
                        small { "Data loaded " (loaded_at.format("%Y-%m-%d %H:%M UTC").to_string()) }
                    }
                }
            }
        },
    )
}
