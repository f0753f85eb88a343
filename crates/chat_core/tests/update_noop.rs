use chat_core::{update, AppState, Msg};

#[test]
fn update_is_noop() {
    let state = AppState::new();
    let (next, effects) = update(state.clone(), Msg::NoOp);

    assert_eq!(state, next);
    assert!(effects.is_empty());
}

#[test]
fn out_of_range_quick_reply_is_noop() {
    let state = AppState::new();
    let (next, effects) = update(state.clone(), Msg::QuickReplySelected(99));

    assert_eq!(state, next);
    assert!(effects.is_empty());
}
