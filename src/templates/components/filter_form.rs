use crate::domain::LocationFilter;
use maud::{html, Markup};

/// The location picker. With htmx it swaps `#projects` in place and pushes `/?location=...`
/// into the history; without it the form submits back to `/`.
pub fn filter_form(options: &[(String, String)], filter: &LocationFilter) -> Markup {
    let selected = filter.query().unwrap_or("");
    // A location typed into the URL that no project uses still gets shown as picked.
    let unlisted = filter
        .query()
        .filter(|query| !options.iter().any(|(value, _)| value.as_str() == *query));

    html! {
        form
            id="filters"
            method="get"
            action="/"
            hx-get="/"
            hx-target="#projects"
            hx-swap="innerHTML"
            hx-trigger="change"
            hx-push-url="true"
        {
            label for="location" { "Location" }
            select name="location" id="location" {
                @for (value, label) in options {
                    option value=(value) selected[value == selected] { (label) }
                }
                @if let Some(query) = unlisted {
                    option value=(query) selected { (query) }
                }
            }
            noscript {
                button type="submit" { "Filter" }
            }
        }
    }
}
