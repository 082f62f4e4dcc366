use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::{
    core::{
        msg::{home::HomeMsg, system::SystemMsg, ui::UiMsg, Msg},
        raw_msg::RawMsg,
        state::AppState,
    },
    presentation::config::keybindings::Action,
};

/// Translates raw external events into domain messages
/// This function is pure and contains no side effects
pub fn translate_raw_to_domain(raw: RawMsg, state: &AppState) -> Vec<Msg> {
    match raw {
        // System events - direct mapping
        RawMsg::Quit => vec![Msg::System(SystemMsg::Quit)],
        RawMsg::Suspend => vec![Msg::System(SystemMsg::Suspend)],
        RawMsg::Resume => vec![Msg::System(SystemMsg::Resume)],
        RawMsg::Resize(width, height) => vec![Msg::System(SystemMsg::Resize(width, height))],
        RawMsg::Tick => vec![Msg::System(SystemMsg::Tick)],

        // User input - translate based on context and key bindings
        RawMsg::Key(key) => translate_key_event(key, state),
        RawMsg::Paste(text) => translate_paste(text, state),

        // Network results
        RawMsg::VideosLoaded { request_id, videos } => {
            vec![Msg::Home(HomeMsg::VideosLoaded { request_id, videos })]
        }
        RawMsg::VideosFailed { request_id, reason } => {
            vec![Msg::Home(HomeMsg::VideosFailed { request_id, reason })]
        }

        // System events
        RawMsg::SystemMessage(msg) => vec![Msg::System(SystemMsg::UpdateStatusMessage(msg))],
        RawMsg::Error(error) => vec![Msg::System(SystemMsg::ShowError(error))],
    }
}

/// Translates keyboard input to domain events based on current application state
fn translate_key_event(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    // Handle global key bindings first
    match key {
        KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => return vec![Msg::System(SystemMsg::Quit)],

        KeyEvent {
            code: KeyCode::Char('z'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => return vec![Msg::System(SystemMsg::Suspend)],

        _ => {}
    }

    if state.home.search_focused {
        translate_search_mode_keys(key)
    } else {
        translate_normal_mode_keys(key, state)
    }
}

/// Key bindings while the search box has focus
fn translate_search_mode_keys(key: KeyEvent) -> Vec<Msg> {
    match key.code {
        KeyCode::Enter => vec![Msg::Home(HomeMsg::SubmitSearch)],
        KeyCode::Esc => vec![Msg::Home(HomeMsg::BlurSearch)],
        KeyCode::Backspace => vec![Msg::Home(HomeMsg::DeleteSearchChar)],
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            vec![Msg::Home(HomeMsg::InsertSearchChar(c))]
        }
        _ => vec![],
    }
}

fn translate_paste(text: String, state: &AppState) -> Vec<Msg> {
    if !state.home.search_focused {
        return vec![];
    }

    // The search box is a single line
    let pasted: String = text.chars().filter(|c| !c.is_control()).collect();
    vec![Msg::Home(HomeMsg::UpdateSearchText(format!(
        "{}{pasted}",
        state.home.search_text
    )))]
}

/// Key bindings when in normal navigation mode
fn translate_normal_mode_keys(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    if let Some(action) = state.config.config.keybindings.get(&vec![key]) {
        return translate_action_to_msg(action, state);
    }

    vec![] // No matching keybinding found
}

fn translate_action_to_msg(action: &Action, state: &AppState) -> Vec<Msg> {
    match action {
        Action::Quit => vec![Msg::System(SystemMsg::Quit)],
        Action::Suspend => vec![Msg::System(SystemMsg::Suspend)],
        Action::FocusSearch => vec![Msg::Home(HomeMsg::FocusSearch)],
        Action::SubmitSearch => vec![Msg::Home(HomeMsg::SubmitSearch)],
        Action::Retry => translate_retry_key(state),
        Action::CloseBanner => {
            if state.home.banner_visible {
                vec![Msg::Home(HomeMsg::CloseBanner)]
            } else {
                vec![]
            }
        }
        Action::ToggleTheme => vec![Msg::Ui(UiMsg::ToggleTheme)],
        Action::ScrollUp => vec![Msg::Home(HomeMsg::ScrollUp)],
        Action::ScrollDown => vec![Msg::Home(HomeMsg::ScrollDown)],
        Action::ScrollToTop => vec![Msg::Home(HomeMsg::ScrollToTop)],
        Action::ScrollToBottom => vec![Msg::Home(HomeMsg::ScrollToBottom)],
    }
}

/// Retry is only offered by the failure and empty results views
fn translate_retry_key(state: &AppState) -> Vec<Msg> {
    if state.home.can_retry() {
        vec![
            Msg::System(SystemMsg::ClearStatusMessage),
            Msg::Home(HomeMsg::Retry),
        ]
    } else {
        vec![Msg::System(SystemMsg::UpdateStatusMessage(
            "Nothing to retry".to_string(),
        ))]
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::{
        domain::fetch::{FetchStatus, RequestId},
        infrastructure::config::Config,
    };

    fn create_test_state() -> AppState {
        AppState::new_with_config(Config::embedded().expect("embedded config parses"))
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[rstest]
    #[case(ctrl('c'), SystemMsg::Quit)]
    #[case(ctrl('z'), SystemMsg::Suspend)]
    fn test_global_keys_apply_in_every_mode(#[case] event: KeyEvent, #[case] expected: SystemMsg) {
        let mut state = create_test_state();
        assert_eq!(
            translate_raw_to_domain(RawMsg::Key(event), &state),
            vec![Msg::System(expected.clone())]
        );

        state.home.search_focused = true;
        assert_eq!(
            translate_raw_to_domain(RawMsg::Key(event), &state),
            vec![Msg::System(expected)]
        );
    }

    #[test]
    fn test_quit_keybinding() {
        let state = create_test_state();
        let result = translate_raw_to_domain(RawMsg::Key(key(KeyCode::Char('q'))), &state);
        assert_eq!(result, vec![Msg::System(SystemMsg::Quit)]);
    }

    #[rstest]
    #[case(key(KeyCode::Char('/')), Msg::Home(HomeMsg::FocusSearch))]
    #[case(key(KeyCode::Enter), Msg::Home(HomeMsg::SubmitSearch))]
    #[case(key(KeyCode::Char('x')), Msg::Home(HomeMsg::CloseBanner))]
    #[case(key(KeyCode::Char('t')), Msg::Ui(UiMsg::ToggleTheme))]
    #[case(key(KeyCode::Char('j')), Msg::Home(HomeMsg::ScrollDown))]
    #[case(key(KeyCode::Down), Msg::Home(HomeMsg::ScrollDown))]
    #[case(key(KeyCode::Char('k')), Msg::Home(HomeMsg::ScrollUp))]
    #[case(key(KeyCode::Char('g')), Msg::Home(HomeMsg::ScrollToTop))]
    #[case(
        KeyEvent::new(KeyCode::Char('G'), KeyModifiers::SHIFT),
        Msg::Home(HomeMsg::ScrollToBottom)
    )]
    fn test_normal_mode_keybindings(#[case] event: KeyEvent, #[case] expected: Msg) {
        let state = create_test_state();
        assert_eq!(
            translate_raw_to_domain(RawMsg::Key(event), &state),
            vec![expected]
        );
    }

    #[test]
    fn test_unbound_key_is_ignored() {
        let state = create_test_state();
        let result = translate_raw_to_domain(RawMsg::Key(key(KeyCode::Char('?'))), &state);
        assert!(result.is_empty());
    }

    #[test]
    fn test_close_banner_once() {
        let mut state = create_test_state();
        state.home.banner_visible = false;
        let result = translate_raw_to_domain(RawMsg::Key(key(KeyCode::Char('x'))), &state);
        assert!(result.is_empty());
    }

    #[rstest]
    #[case(key(KeyCode::Char('q')), Msg::Home(HomeMsg::InsertSearchChar('q')))]
    #[case(
        KeyEvent::new(KeyCode::Char('Q'), KeyModifiers::SHIFT),
        Msg::Home(HomeMsg::InsertSearchChar('Q'))
    )]
    #[case(key(KeyCode::Backspace), Msg::Home(HomeMsg::DeleteSearchChar))]
    #[case(key(KeyCode::Enter), Msg::Home(HomeMsg::SubmitSearch))]
    #[case(key(KeyCode::Esc), Msg::Home(HomeMsg::BlurSearch))]
    fn test_search_mode_keys(#[case] event: KeyEvent, #[case] expected: Msg) {
        let mut state = create_test_state();
        state.home.search_focused = true;
        assert_eq!(
            translate_raw_to_domain(RawMsg::Key(event), &state),
            vec![expected]
        );
    }

    #[test]
    fn test_paste_appends_to_search_text() {
        let mut state = create_test_state();
        state.home.search_focused = true;
        state.home.search_text = "funny ".to_string();

        let result = translate_raw_to_domain(RawMsg::Paste("cats\n".to_string()), &state);

        assert_eq!(
            result,
            vec![Msg::Home(HomeMsg::UpdateSearchText("funny cats".to_string()))]
        );
    }

    #[test]
    fn test_paste_outside_search_is_ignored() {
        let state = create_test_state();
        assert!(translate_raw_to_domain(RawMsg::Paste("cats".to_string()), &state).is_empty());
    }

    #[test]
    fn test_retry_only_when_offered() {
        let mut state = create_test_state();
        state.home.status = FetchStatus::Loading;
        let result = translate_raw_to_domain(RawMsg::Key(key(KeyCode::Char('r'))), &state);
        assert_eq!(
            result,
            vec![Msg::System(SystemMsg::UpdateStatusMessage(
                "Nothing to retry".to_string()
            ))]
        );

        state.home.status = FetchStatus::Failure;
        let result = translate_raw_to_domain(RawMsg::Key(key(KeyCode::Char('r'))), &state);
        assert_eq!(
            result,
            vec![
                Msg::System(SystemMsg::ClearStatusMessage),
                Msg::Home(HomeMsg::Retry)
            ]
        );
    }

    #[test]
    fn test_network_results_forwarded_to_home() {
        let state = create_test_state();
        let result = translate_raw_to_domain(
            RawMsg::VideosFailed {
                request_id: RequestId::new(2),
                reason: "401".to_string(),
            },
            &state,
        );
        assert_eq!(
            result,
            vec![Msg::Home(HomeMsg::VideosFailed {
                request_id: RequestId::new(2),
                reason: "401".to_string(),
            })]
        );
    }

    #[test]
    fn test_tick() {
        let state = create_test_state();
        assert_eq!(
            translate_raw_to_domain(RawMsg::Tick, &state),
            vec![Msg::System(SystemMsg::Tick)]
        );
    }
}
