use crate::domain::LocationFilter;
use crate::errors::{ResultResp, ServerError};
use crate::responses::{html_response, htmx_aware_response, static_file_response};
use crate::spreadsheets::export_projects_xlsx;
use crate::state::AppContext;
use crate::templates::pages;
use astra::Request;

pub fn handle(req: Request, ctx: &AppContext) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();

    match (method, path) {
        // The filter form swaps #projects from here so the pushed URL reloads to the same view.
        ("GET", "/") if is_htmx_swap(&req) => {
            let projects = ctx.projects()?;
            htmx_aware_response(pages::project_sections(projects, &location_filter(&req)))
        }
        ("GET", "/") => htmx_aware_response(pages::home_page(ctx, &location_filter(&req))),

        // Fragment for htmx swaps of #projects.
        ("GET", "/projects") => {
            let projects = ctx.projects()?;
            html_response(pages::project_sections(projects, &location_filter(&req)))
        }

        ("GET", "/projects.xlsx") => export_projects_xlsx(ctx.projects()?, &location_filter(&req)),

        ("GET", p) if p.starts_with("/images/") => {
            static_file_response(&ctx.static_dir, p.trim_start_matches('/'))
        }
        ("GET", p) if p.starts_with("/static/") => {
            static_file_response(&ctx.static_dir, &p["/static/".len()..])
        }

        (_, "/" | "/projects" | "/projects.xlsx") => {
            Err(ServerError::MethodNotAllowed(method.to_string()))
        }
        _ => Err(ServerError::NotFound),
    }
}

/// htmx history restores also send `HX-Request` but need the whole page.
fn is_htmx_swap(req: &Request) -> bool {
    let headers = req.headers();
    headers.contains_key("HX-Request") && !headers.contains_key("HX-History-Restore-Request")
}

fn location_filter(req: &Request) -> LocationFilter {
    let location = req.uri().query().and_then(|q| {
        url::form_urlencoded::parse(q.as_bytes())
            .find(|(k, _)| k == "location")
            .map(|(_, v)| v.into_owned())
    });
    LocationFilter::new(location.as_deref())
}
