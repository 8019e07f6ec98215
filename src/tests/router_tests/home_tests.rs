use crate::router::handle;
use crate::state::AppContext;
use crate::tests::utils::{body_string, get, temp_dir, test_context};
use astra::Body;
use scraper::{Html, Selector};

fn select_texts(doc: &Html, selector: &str) -> Vec<String> {
    let sel = Selector::parse(selector).unwrap();
    doc.select(&sel)
        .map(|el| el.text().collect::<String>().trim().to_string())
        .collect()
}

#[test]
fn home_page_renders_filter_and_sections() {
    let ctx = test_context();
    let (status, body) = get(&ctx, "/");
    assert_eq!(status, 200);

    let doc = Html::parse_document(&body);
    assert_eq!(
        select_texts(&doc, "#projects h2"),
        vec!["Current Projects", "Completed Projects", "Future/Desired Projects"]
    );

    let options = select_texts(&doc, "form#filters select[name=location] option");
    assert_eq!(options[0], "All");
    assert_eq!(options[1], "Boston");
    assert!(options.contains(&"Somerville".to_string()));
    assert!(options.contains(&"Back Bay".to_string()));

    assert_eq!(select_texts(&doc, "#error-message"), vec![""]);
    assert_eq!(select_texts(&doc, "#projects details").len(), 6);
}

#[test]
fn selected_location_is_preselected_and_applied() {
    let ctx = test_context();
    let (_, body) = get(&ctx, "/?location=Boston");
    let doc = Html::parse_document(&body);

    assert_eq!(select_texts(&doc, "option[selected]"), vec!["Boston"]);

    let titles = select_texts(&doc, "#projects h3");
    assert!(titles.contains(&"Mass Ave Bike Lanes".to_string()));
    assert!(!titles.contains(&"Green Line Ext".to_string()));
    assert!(!titles.contains(&"Grand Junction Path".to_string()));
}

#[test]
fn unlisted_location_stays_selected() {
    let ctx = test_context();
    let (_, body) = get(&ctx, "/?location=Narnia");
    let doc = Html::parse_document(&body);

    assert_eq!(select_texts(&doc, "option[selected]"), vec!["Narnia"]);
    assert!(select_texts(&doc, "#projects h3").is_empty());
}

#[test]
fn filter_form_pushes_the_page_url() {
    let ctx = test_context();
    let (_, body) = get(&ctx, "/");
    let doc = Html::parse_document(&body);
    let form = doc
        .select(&Selector::parse("form#filters").unwrap())
        .next()
        .unwrap();

    assert_eq!(form.value().attr("hx-get"), Some("/"));
    assert_eq!(form.value().attr("hx-push-url"), Some("true"));
    assert_eq!(form.value().attr("hx-target"), Some("#projects"));
}

#[test]
fn htmx_swap_of_home_returns_sections_only() {
    let ctx = test_context();
    let req = http::Request::builder()
        .uri("/?location=Back+Bay")
        .header("HX-Request", "true")
        .body(Body::empty())
        .unwrap();
    let mut resp = handle(req, &ctx).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Vary").and_then(|v| v.to_str().ok()),
        Some("HX-Request")
    );

    let body = body_string(&mut resp);
    assert!(!body.contains("<html"));
    assert!(!body.contains("<form"));

    let doc = Html::parse_fragment(&body);
    assert_eq!(select_texts(&doc, "h3"), vec!["Mass Ave Bike Lanes"]);
}

#[test]
fn load_failure_shows_message_and_empty_region() {
    let ctx = AppContext::failed("Sheets API returned 403: forbidden", temp_dir("static"));
    let (status, body) = get(&ctx, "/");
    assert_eq!(status, 200);

    let doc = Html::parse_document(&body);
    assert_eq!(
        select_texts(&doc, "#error-message"),
        vec!["Sheets API returned 403: forbidden"]
    );
    assert_eq!(select_texts(&doc, "#projects"), vec![""]);
    assert!(!body.contains("Loading..."));
}

#[test]
fn unknown_route_is_404() {
    let ctx = test_context();
    let (status, body) = get(&ctx, "/admin");
    assert_eq!(status, 404);
    assert!(body.contains("Not Found"));
}
