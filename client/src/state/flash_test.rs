use super::*;

#[test]
fn flash_state_default_is_empty() {
    assert!(FlashState::default().current.is_none());
}

#[test]
fn latest_flash_replaces_previous() {
    let mut state = FlashState::default();
    state.error("Username or password is wrong");
    state.success("User successfully registered");
    let flash = state.current.clone().unwrap();
    assert_eq!(flash.kind, FlashKind::Success);
    assert_eq!(flash.text, "User successfully registered");
}

#[test]
fn dismiss_clears_flash() {
    let mut state = FlashState::default();
    state.error("boom");
    state.dismiss();
    assert!(state.current.is_none());
}

#[test]
fn kinds_map_to_distinct_classes() {
    assert_ne!(FlashKind::Success.class(), FlashKind::Error.class());
}
