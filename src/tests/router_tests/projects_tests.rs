use crate::errors::ServerError;
use crate::router::handle;
use crate::state::AppContext;
use crate::templates::pages::EMPTY_SECTION;
use crate::tests::utils::{get, request, temp_dir, test_context};
use http::Method;
use scraper::{ElementRef, Html, Selector};

/// Titles listed under each `h2`, in page order.
fn section_titles(body: &str) -> Vec<(String, Vec<String>)> {
    let doc = Html::parse_fragment(body);
    let h3 = Selector::parse("h3").unwrap();
    let mut out: Vec<(String, Vec<String>)> = Vec::new();

    for node in doc.root_element().children() {
        let Some(el) = ElementRef::wrap(node) else {
            continue;
        };
        match el.value().name() {
            "h2" => out.push((el.text().collect(), Vec::new())),
            "details" => {
                if let (Some(last), Some(title)) = (out.last_mut(), el.select(&h3).next()) {
                    last.1.push(title.text().collect());
                }
            }
            _ => {}
        }
    }
    out
}

#[test]
fn fragment_groups_and_sorts() {
    let ctx = test_context();
    let (status, body) = get(&ctx, "/projects");
    assert_eq!(status, 200);
    assert!(!body.contains("<html"));

    let sections = section_titles(&body);
    assert_eq!(sections.len(), 3);
    assert_eq!(sections[0].0, "Current Projects");
    assert_eq!(
        sections[0].1,
        vec![
            "Allston Multimodal",
            "Arborway",
            "Blue Hill Ave Bus Lanes",
            "Mass Ave Bike Lanes",
        ]
    );
    assert_eq!(sections[1].0, "Completed Projects");
    assert_eq!(sections[1].1, vec!["Green Line Ext"]);
    assert_eq!(sections[2].0, "Future/Desired Projects");
    assert_eq!(sections[2].1, vec!["Grand Junction Path"]);

    for (_, titles) in &sections {
        assert!(titles.windows(2).all(|w| w[0] <= w[1]));
    }
}

#[test]
fn boston_filter_covers_neighborhoods() {
    let ctx = test_context();
    let (_, body) = get(&ctx, "/projects?location=Boston");
    let sections = section_titles(&body);

    assert_eq!(
        sections[0].1,
        vec![
            "Allston Multimodal",
            "Arborway",
            "Blue Hill Ave Bus Lanes",
            "Mass Ave Bike Lanes",
        ]
    );
    assert!(sections[1].1.is_empty());
    assert!(sections[2].1.is_empty());
    assert_eq!(body.matches(EMPTY_SECTION).count(), 2);
}

#[test]
fn single_place_filter() {
    let ctx = test_context();
    let (_, body) = get(&ctx, "/projects?location=Back+Bay");
    let sections = section_titles(&body);
    assert_eq!(sections[0].1, vec!["Mass Ave Bike Lanes"]);

    let (_, body) = get(&ctx, "/projects?location=Cambridge");
    let sections = section_titles(&body);
    assert!(sections[0].1.is_empty());
    assert_eq!(sections[2].1, vec!["Grand Junction Path"]);
}

#[test]
fn no_match_gives_three_placeholders() {
    let ctx = test_context();
    let (status, body) = get(&ctx, "/projects?location=Narnia");
    assert_eq!(status, 200);
    assert_eq!(body.matches(EMPTY_SECTION).count(), 3);
    assert!(!body.contains("<details>"));
}

#[test]
fn completed_scenario_has_full_gauge_and_no_link() {
    let ctx = test_context();
    let (_, body) = get(&ctx, "/projects?location=Somerville");
    let doc = Html::parse_fragment(&body);

    let details = Selector::parse("details").unwrap();
    let cards: Vec<ElementRef> = doc.select(&details).collect();
    assert_eq!(cards.len(), 1);
    let card = cards[0];

    assert!(card.select(&Selector::parse("a").unwrap()).next().is_none());

    let progress = card
        .select(&Selector::parse("progress").unwrap())
        .next()
        .unwrap();
    assert_eq!(progress.value().attr("max"), progress.value().attr("value"));

    let date: String = card
        .select(&Selector::parse(".project-status-text span:nth-child(2)").unwrap())
        .next()
        .unwrap()
        .text()
        .collect();
    assert_eq!(date, "2025 ");
}

#[test]
fn fragment_needs_loaded_data() {
    let ctx = AppContext::failed("boom", temp_dir("static"));
    let (status, body) = get(&ctx, "/projects");
    assert_eq!(status, 503);
    assert!(body.contains("boom"));
}

#[test]
fn post_is_not_allowed() {
    let ctx = test_context();
    match handle(request(Method::POST, "/projects"), &ctx) {
        Err(err) => {
            assert!(matches!(err, ServerError::MethodNotAllowed(_)));
            assert_eq!(err.status_code(), 405);
        }
        Ok(_) => panic!("POST /projects should be rejected"),
    }
}
