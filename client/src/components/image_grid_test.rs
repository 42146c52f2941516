use super::*;

#[test]
fn mixed_entries_classify_in_order() {
    let entries = ["http://x/a.png", "plainword", "data:image/png;base64,AAA"];
    let cells: Vec<_> = entries.iter().map(|e| classify(e)).collect();
    assert_eq!(
        cells,
        vec![
            GridCell::Image("http://x/a.png"),
            GridCell::Text("plainword"),
            GridCell::Image("data:image/png;base64,AAA"),
        ]
    );
}

#[test]
fn https_urls_are_images() {
    assert!(is_image_source("https://picsum.photos/seed/sun/600/400"));
}

#[test]
fn prefix_match_is_case_sensitive() {
    assert!(!is_image_source("HTTP://x/a.png"));
    assert!(!is_image_source("Data:image/png;base64,AAA"));
}

#[test]
fn scene_prompts_render_as_text() {
    assert_eq!(classify("rainy window, soft light"), GridCell::Text("rainy window, soft light"));
    assert_eq!(classify(""), GridCell::Text(""));
}

#[test]
fn non_image_data_urls_render_as_text() {
    assert_eq!(classify("data:text/plain,hello"), GridCell::Text("data:text/plain,hello"));
}
