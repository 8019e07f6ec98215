use crate::domain::{Project, Status};
use crate::router::handle;
use crate::state::AppContext;
use astra::{Body, Request, Response};
use http::Method;
use std::io::Read;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

/// A fresh, empty directory under the system temp dir.
pub fn temp_dir(prefix: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "{prefix}_{}",
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    std::fs::create_dir_all(&path).unwrap();
    path
}

pub fn project(title: &str, status: Status, location: &str) -> Project {
    Project {
        title: title.to_string(),
        section: None,
        status,
        completion_date: "2026".to_string(),
        city_or_neighborhood: location.to_string(),
        owners: vec!["City of Boston".to_string()],
        designer: "Toole Design".to_string(),
        constructor: "TBD".to_string(),
        construction_start_date: "2025".to_string(),
        contacts: "streets@example.org".to_string(),
        website: None,
    }
}

/// A small sheet covering every section and a few locations.
pub fn sample_projects() -> Vec<Project> {
    let mut glx = project("Green Line Ext", Status::Complete, "Somerville");
    glx.website = Some("N/A".to_string());
    glx.completion_date = "2025 Unannounced".to_string();

    let mut mass_ave = project("Mass Ave Bike Lanes", Status::UnderConstruction, "Back Bay");
    mass_ave.website = Some("https://example.org/mass-ave".to_string());

    vec![
        mass_ave,
        glx,
        project("Blue Hill Ave Bus Lanes", Status::Design75, "Mattapan"),
        project("Allston Multimodal", Status::Proposed, "Allston"),
        project("Grand Junction Path", Status::Unannounced, "Cambridge"),
        project("Arborway", Status::PreDesign, "Jamaica Plain"),
    ]
}

pub fn test_context() -> AppContext {
    AppContext::loaded(sample_projects(), temp_dir("static"))
}

pub fn request(method: Method, uri: &str) -> Request {
    http::Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn body_string(resp: &mut Response) -> String {
    let mut body_bytes = Vec::new();
    resp.body_mut()
        .reader()
        .read_to_end(&mut body_bytes)
        .unwrap();
    String::from_utf8(body_bytes).unwrap()
}

/// GET `uri` and return the status and body. Handler errors go through the error page.
pub fn get(ctx: &AppContext, uri: &str) -> (u16, String) {
    let mut resp = match handle(request(Method::GET, uri), ctx) {
        Ok(resp) => resp,
        Err(err) => crate::templates::html_error_response(err),
    };
    let status = resp.status().as_u16();
    (status, body_string(&mut resp))
}
