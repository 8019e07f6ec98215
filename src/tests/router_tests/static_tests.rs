use crate::state::AppContext;
use crate::tests::utils::{get, sample_projects, temp_dir};

fn context_with_assets() -> AppContext {
    let dir = temp_dir("static_assets");
    std::fs::create_dir_all(dir.join("images")).unwrap();
    std::fs::write(dir.join("images/pencil.svg"), "<svg></svg>").unwrap();
    std::fs::write(dir.join("main.css"), "body { margin: 0; }").unwrap();
    AppContext::loaded(sample_projects(), dir)
}

#[test]
fn serves_icons_and_stylesheet() {
    let ctx = context_with_assets();

    let (status, body) = get(&ctx, "/images/pencil.svg");
    assert_eq!(status, 200);
    assert_eq!(body, "<svg></svg>");

    let (status, body) = get(&ctx, "/static/main.css");
    assert_eq!(status, 200);
    assert!(body.contains("margin"));
}

#[test]
fn missing_and_escaping_paths_are_404() {
    let ctx = context_with_assets();
    assert_eq!(get(&ctx, "/images/nope.svg").0, 404);
    assert_eq!(get(&ctx, "/static/../main.css").0, 404);
    assert_eq!(get(&ctx, "/images/../../etc/passwd").0, 404);
}
