use super::*;

#[test]
fn dayboard_decodes_full_payload() {
    let raw = r#"{
        "mood_word": "sad",
        "coffee": "Hot mocha",
        "songs": ["Adele – Someone Like You"],
        "outfits": ["Oversized hoodie + joggers", "Beanie + flannel"],
        "images": ["https://picsum.photos/seed/rain/600/400"]
    }"#;
    let board: Dayboard = serde_json::from_str(raw).unwrap();
    assert_eq!(board.mood_word, "sad");
    assert_eq!(board.coffee, "Hot mocha");
    assert_eq!(board.songs.len(), 1);
    assert_eq!(board.outfits.len(), 2);
    assert_eq!(board.images, vec!["https://picsum.photos/seed/rain/600/400".to_owned()]);
}

#[test]
fn dayboard_missing_mood_word_decodes_empty() {
    let raw = r#"{"coffee":"Latte","songs":["A"],"outfits":["B"],"images":["http://x/1.png"]}"#;
    let board: Dayboard = serde_json::from_str(raw).unwrap();
    assert!(board.mood_word.is_empty());
    assert_eq!(board.coffee, "Latte");
}

#[test]
fn dayboard_null_fields_decode_to_defaults() {
    let raw = r#"{"mood_word":null,"coffee":"Latte","songs":null,"outfits":[],"images":null}"#;
    let board: Dayboard = serde_json::from_str(raw).unwrap();
    assert!(board.mood_word.is_empty());
    assert!(board.songs.is_empty());
    assert!(board.images.is_empty());
}

#[test]
fn dayboard_ignores_unknown_fields() {
    let raw = r#"{"mood_word":"chill","coffee":"Iced americano","id":7,"note":"x"}"#;
    let board: Dayboard = serde_json::from_str(raw).unwrap();
    assert_eq!(board.mood_word, "chill");
}

#[test]
fn with_fallback_mood_fills_empty_word() {
    let board = Dayboard::default().with_fallback_mood("happy");
    assert_eq!(board.mood_word, "happy");
}

#[test]
fn with_fallback_mood_keeps_server_word() {
    let board = Dayboard { mood_word: "Chill".to_owned(), ..Dayboard::default() };
    assert_eq!(board.with_fallback_mood("chill").mood_word, "Chill");
}

#[test]
fn request_body_encodes_mood_word_key() {
    let body = DayboardRequest { mood_word: "focused".to_owned() };
    assert_eq!(serde_json::to_string(&body).unwrap(), r#"{"mood_word":"focused"}"#);
}
