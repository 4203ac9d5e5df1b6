use hanoi_core::{update, AppState, Msg};

#[test]
fn closing_a_closed_panel_is_noop() {
    let mut state = AppState::new(Default::default());
    state.consume_dirty();
    let before = state.view();
    let (mut next, effects) = update(state, Msg::InfoClosed);

    assert_eq!(next.view(), before);
    assert!(effects.is_empty());
    assert!(!next.consume_dirty());
}
