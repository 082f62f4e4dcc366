use crate::core::{
    cmd::Cmd,
    msg::Msg,
    state::AppState,
};

/// Elm-like update function
/// Returns new state and list of commands from current state and message
pub fn update(msg: Msg, mut state: AppState) -> (AppState, Vec<Cmd>) {
    match msg {
        // System messages (delegated to SystemState)
        Msg::System(system_msg) => {
            let commands = state.system.update(system_msg);
            (state, commands)
        }

        // Home messages (delegated to HomeState)
        Msg::Home(home_msg) => {
            let commands = state.home.update(home_msg);
            (state, commands)
        }

        // UI messages (delegated to UiState)
        Msg::Ui(ui_msg) => {
            let commands = state.ui.update(ui_msg);
            (state, commands)
        }
    }
}
