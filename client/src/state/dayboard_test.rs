use super::*;
use crate::components::image_grid::{GridCell, classify};

fn board(mood: &str, coffee: &str) -> Dayboard {
    Dayboard {
        mood_word: mood.to_owned(),
        coffee: coffee.to_owned(),
        songs: vec!["Khalid – Better".to_owned()],
        outfits: vec!["Linen shirt + chinos".to_owned()],
        images: vec!["https://picsum.photos/seed/sun/600/400".to_owned()],
    }
}

fn server_error() -> RequestError {
    RequestError::Status { status: 500, status_text: "Internal Server Error".to_owned() }
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_state_is_ready_and_empty() {
    let state = DayboardState::default();
    assert!(state.data.is_none());
    assert!(!state.loading);
    assert!(state.error.is_none());
    assert_eq!(state.status(), RequestStatus::Ready);
}

// =============================================================
// Transitions
// =============================================================

#[test]
fn begin_sets_loading_and_clears_error() {
    let mut state = DayboardState { error: Some("boom".to_owned()), ..DayboardState::default() };
    state.begin();
    assert!(state.loading);
    assert!(state.error.is_none());
    assert_eq!(state.status(), RequestStatus::Loading);
}

#[test]
fn success_stores_board_and_clears_loading() {
    let mut state = DayboardState::default();
    state.begin();
    state.settle("happy", Ok(board("happy", "Iced vanilla latte")));
    assert!(!state.loading);
    assert!(state.error.is_none());
    assert_eq!(state.data, Some(board("happy", "Iced vanilla latte")));
    assert_eq!(state.status(), RequestStatus::Ready);
}

#[test]
fn success_without_mood_word_uses_submitted_word() {
    let mut state = DayboardState::default();
    state.begin();
    state.settle("sleepy", Ok(board("", "Latte")));
    assert_eq!(state.mood_word().as_deref(), Some("sleepy"));
}

#[test]
fn status_failure_keeps_previous_board() {
    let mut state = DayboardState::default();
    state.begin();
    state.settle("happy", Ok(board("happy", "Iced vanilla latte")));

    state.begin();
    state.settle("sad", Err(server_error()));

    assert!(!state.loading);
    assert_eq!(state.error.as_deref(), Some("500 Internal Server Error"));
    assert_eq!(state.data, Some(board("happy", "Iced vanilla latte")));
    assert_eq!(state.status(), RequestStatus::Error);
}

#[test]
fn failure_before_any_success_leaves_data_empty() {
    let mut state = DayboardState::default();
    state.begin();
    state.settle("happy", Err(RequestError::Network("TypeError: Failed to fetch".to_owned())));
    assert!(state.data.is_none());
    assert_eq!(state.error.as_deref(), Some("TypeError: Failed to fetch"));
}

#[test]
fn next_submission_clears_previous_error() {
    let mut state = DayboardState::default();
    state.begin();
    state.settle("happy", Err(server_error()));
    state.begin();
    assert!(state.error.is_none());
    state.settle("happy", Ok(board("happy", "Latte")));
    assert_eq!(state.status(), RequestStatus::Ready);
}

#[test]
fn later_resolving_response_wins() {
    let mut state = DayboardState::default();
    state.begin();
    state.begin();
    state.settle("sad", Ok(board("sad", "Hot mocha")));
    state.settle("chill", Ok(board("chill", "Iced americano")));
    assert_eq!(state.mood_word().as_deref(), Some("chill"));
    assert!(!state.loading);
}

// =============================================================
// Status
// =============================================================

#[test]
fn loading_outranks_error() {
    let state = DayboardState { loading: true, error: Some("x".to_owned()), ..DayboardState::default() };
    assert_eq!(state.status(), RequestStatus::Loading);
}

#[test]
fn status_labels() {
    assert_eq!(RequestStatus::Loading.label(), "Loading…");
    assert_eq!(RequestStatus::Error.label(), "Error");
    assert_eq!(RequestStatus::Ready.label(), "Ready");
}

#[test]
fn mood_word_absent_without_data() {
    assert_eq!(DayboardState::default().mood_word(), None);
}

// =============================================================
// Full submission
// =============================================================

#[test]
fn happy_submission_renders_latte_board() {
    let mut state = DayboardState::default();

    state.begin();
    assert_eq!(state.status().label(), "Loading…");

    let body = r#"{"coffee":"Latte","songs":["A"],"outfits":["B"],"images":["http://x/1.png"]}"#;
    let decoded: Dayboard = serde_json::from_str(body).unwrap();
    state.settle("happy", Ok(decoded));

    assert_eq!(state.status().label(), "Ready");
    let data = state.data.as_ref().unwrap();
    assert_eq!(data.mood_word, "happy");
    assert_eq!(data.coffee, "Latte");
    assert_eq!(data.songs, vec!["A".to_owned()]);
    assert_eq!(data.outfits, vec!["B".to_owned()]);
    let cells: Vec<_> = data.images.iter().map(|i| classify(i)).collect();
    assert_eq!(cells, vec![GridCell::Image("http://x/1.png")]);
}
