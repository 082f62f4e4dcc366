use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pretty_assertions::assert_eq;
use tokio::sync::mpsc;

use nxtwatch::{
    core::{msg::home::HomeMsg, msg::ui::UiMsg},
    domain::{
        fetch::{FetchStatus, RequestId},
        video::Video,
    },
    infrastructure::{config::Config, video_service::VideoOperation},
    AppState, ElmRuntime, Msg, RawMsg,
};

fn video(id: &str) -> Video {
    Video {
        id: id.to_string(),
        title: format!("Video {id}"),
        thumbnail_url: String::new(),
        view_count: "10K".to_string(),
        published_at: "Apr 19, 2019".to_string(),
        channel_name: "Channel".to_string(),
        profile_image_url: String::new(),
    }
}

fn runtime() -> (ElmRuntime, mpsc::UnboundedReceiver<VideoOperation>) {
    let config = Config::embedded().expect("embedded config parses");
    let (video_tx, video_rx) = mpsc::unbounded_channel();
    let runtime = ElmRuntime::new_with_video_executor(AppState::new_with_config(config), video_tx);
    (runtime, video_rx)
}

fn press(runtime: &mut ElmRuntime, code: KeyCode) {
    runtime.send_raw_msg(RawMsg::Key(KeyEvent::new(code, KeyModifiers::NONE)));
    runtime.run_update_cycle().expect("update cycle");
}

fn type_text(runtime: &mut ElmRuntime, text: &str) {
    for c in text.chars() {
        press(runtime, KeyCode::Char(c));
    }
}

fn drain(rx: &mut mpsc::UnboundedReceiver<VideoOperation>) -> Vec<VideoOperation> {
    let mut ops = Vec::new();
    while let Ok(op) = rx.try_recv() {
        ops.push(op);
    }
    ops
}

fn fetch(id: u64, search: &str) -> VideoOperation {
    VideoOperation::FetchVideos {
        request_id: RequestId::new(id),
        search: search.to_string(),
    }
}

#[test]
fn test_search_edits_do_not_fetch_until_submitted() {
    let (mut runtime, mut video_rx) = runtime();
    runtime.send_msg(Msg::Home(HomeMsg::FetchVideos));
    runtime.run_update_cycle().expect("update cycle");
    assert_eq!(drain(&mut video_rx), vec![fetch(1, "")]);

    press(&mut runtime, KeyCode::Char('/'));
    type_text(&mut runtime, "cats");
    assert_eq!(runtime.state().home.search_text, "cats");
    assert!(drain(&mut video_rx).is_empty());

    press(&mut runtime, KeyCode::Enter);
    assert_eq!(drain(&mut video_rx), vec![fetch(2, "cats")]);
    assert!(!runtime.state().home.search_focused);
    assert_eq!(runtime.state().home.status, FetchStatus::Loading);
}

#[test]
fn test_stale_response_is_ignored() {
    let (mut runtime, mut video_rx) = runtime();
    runtime.send_msg(Msg::Home(HomeMsg::FetchVideos));
    runtime.send_msg(Msg::Home(HomeMsg::UpdateSearchText("dogs".to_string())));
    runtime.send_msg(Msg::Home(HomeMsg::SubmitSearch));
    runtime.run_update_cycle().expect("update cycle");
    assert_eq!(drain(&mut video_rx), vec![fetch(1, ""), fetch(2, "dogs")]);

    // The second request finishes first, then the first one
    runtime.send_raw_msg(RawMsg::VideosLoaded {
        request_id: RequestId::new(2),
        videos: vec![video("dog")],
    });
    runtime.send_raw_msg(RawMsg::VideosFailed {
        request_id: RequestId::new(1),
        reason: "timeout".to_string(),
    });
    runtime.run_update_cycle().expect("update cycle");

    let home = &runtime.state().home;
    assert_eq!(home.status, FetchStatus::Success);
    assert_eq!(home.videos, vec![video("dog")]);
}

#[test]
fn test_retry_after_failure_clears_search() {
    let (mut runtime, mut video_rx) = runtime();
    runtime.send_msg(Msg::Home(HomeMsg::UpdateSearchText("cats".to_string())));
    runtime.send_msg(Msg::Home(HomeMsg::FetchVideos));
    runtime.run_update_cycle().expect("update cycle");
    drain(&mut video_rx);

    // Retry is not offered while loading
    press(&mut runtime, KeyCode::Char('r'));
    assert!(drain(&mut video_rx).is_empty());
    assert_eq!(
        runtime.state().system.status_message.as_deref(),
        Some("Nothing to retry")
    );

    runtime.send_raw_msg(RawMsg::VideosFailed {
        request_id: RequestId::new(1),
        reason: "HTTP status client error (401 Unauthorized)".to_string(),
    });
    runtime.run_update_cycle().expect("update cycle");
    assert_eq!(runtime.state().home.status, FetchStatus::Failure);

    press(&mut runtime, KeyCode::Char('r'));
    assert_eq!(drain(&mut video_rx), vec![fetch(2, "")]);
    assert_eq!(runtime.state().home.search_text, "");
    assert!(runtime.state().system.status_message.is_none());
}

#[test]
fn test_retry_from_empty_results() {
    let (mut runtime, mut video_rx) = runtime();
    runtime.send_msg(Msg::Home(HomeMsg::UpdateSearchText("zzz".to_string())));
    runtime.send_msg(Msg::Home(HomeMsg::FetchVideos));
    runtime.send_raw_msg(RawMsg::VideosLoaded {
        request_id: RequestId::new(1),
        videos: vec![],
    });
    runtime.run_update_cycle().expect("update cycle");
    drain(&mut video_rx);
    assert!(runtime.state().home.can_retry());

    press(&mut runtime, KeyCode::Char('r'));

    assert_eq!(drain(&mut video_rx), vec![fetch(2, "")]);
}

#[test]
fn test_failure_keeps_previous_videos() {
    let (mut runtime, _video_rx) = runtime();
    runtime.send_msg(Msg::Home(HomeMsg::FetchVideos));
    runtime.send_raw_msg(RawMsg::VideosLoaded {
        request_id: RequestId::new(1),
        videos: vec![video("a"), video("b")],
    });
    runtime.run_update_cycle().expect("update cycle");

    runtime.send_msg(Msg::Home(HomeMsg::SubmitSearch));
    runtime.send_raw_msg(RawMsg::VideosFailed {
        request_id: RequestId::new(2),
        reason: "500".to_string(),
    });
    runtime.run_update_cycle().expect("update cycle");

    let home = &runtime.state().home;
    assert_eq!(home.status, FetchStatus::Failure);
    assert_eq!(home.videos.len(), 2);
}

#[test]
fn test_banner_close_and_theme_do_not_touch_fetch_state() {
    let (mut runtime, mut video_rx) = runtime();
    runtime.send_msg(Msg::Home(HomeMsg::FetchVideos));
    runtime.run_update_cycle().expect("update cycle");
    drain(&mut video_rx);
    let before = runtime.state().home.clone();

    press(&mut runtime, KeyCode::Char('x'));
    runtime.send_msg(Msg::Ui(UiMsg::ToggleTheme));
    runtime.run_update_cycle().expect("update cycle");

    let home = &runtime.state().home;
    assert!(!home.banner_visible);
    assert_eq!(home.status, before.status);
    assert_eq!(home.latest_request, before.latest_request);
    assert_eq!(home.search_text, before.search_text);
    assert!(runtime.state().ui.dark_theme);
    assert!(drain(&mut video_rx).is_empty());
}

#[test]
fn test_scrolling_through_results() {
    let (mut runtime, _video_rx) = runtime();
    runtime.send_msg(Msg::Home(HomeMsg::FetchVideos));
    runtime.send_raw_msg(RawMsg::VideosLoaded {
        request_id: RequestId::new(1),
        videos: vec![video("a"), video("b"), video("c")],
    });
    runtime.run_update_cycle().expect("update cycle");
    assert_eq!(runtime.state().home.selected_index, Some(0));

    press(&mut runtime, KeyCode::Char('j'));
    press(&mut runtime, KeyCode::Down);
    assert_eq!(runtime.state().home.selected_index, Some(2));

    press(&mut runtime, KeyCode::Char('g'));
    assert_eq!(
        runtime.state().home.selected_video().map(|v| v.id.as_str()),
        Some("a")
    );
}

#[test]
fn test_events_batched_into_one_cycle_see_each_others_effects() {
    let (mut runtime, mut video_rx) = runtime();
    let key = |code| RawMsg::Key(KeyEvent::new(code, KeyModifiers::NONE));

    // Focus, type, paste and submit without an update cycle in between
    runtime.send_raw_msg(key(KeyCode::Char('/')));
    runtime.send_raw_msg(key(KeyCode::Char('q')));
    runtime.send_raw_msg(RawMsg::Paste("uiet ".to_string()));
    runtime.send_raw_msg(RawMsg::Paste("cats".to_string()));
    runtime.send_raw_msg(key(KeyCode::Enter));
    runtime.run_update_cycle().expect("update cycle");

    assert!(!runtime.state().system.should_quit);
    assert_eq!(runtime.state().home.search_text, "quiet cats");
    assert_eq!(drain(&mut video_rx), vec![fetch(1, "quiet cats")]);

    runtime.send_msg(Msg::Home(HomeMsg::VideosFailed {
        request_id: RequestId::new(1),
        reason: "503".to_string(),
    }));
    runtime.run_update_cycle().expect("update cycle");

    // Only the first retry is offered; the second sees the new Loading state
    runtime.send_raw_msg(key(KeyCode::Char('r')));
    runtime.send_raw_msg(key(KeyCode::Char('r')));
    runtime.run_update_cycle().expect("update cycle");

    assert_eq!(drain(&mut video_rx), vec![fetch(2, "")]);
    assert_eq!(runtime.state().home.status, FetchStatus::Loading);
}
