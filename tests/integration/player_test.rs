//! Headless end-to-end tests of a playback session

use std::time::Duration;

use eduaudio::media::{MediaElement, PlayPolicy};
use eduaudio::player::{prepare_player, PlayOptions, PlaybackRate};
use eduaudio::share::{share_url, start_position};
use eduaudio::Lecture;
use url::Url;

#[test]
fn shared_link_round_trip() {
    let lecture = Lecture::sample();
    let page = Url::parse(&lecture.page_url).unwrap();

    // Listener A shares the position they reached
    let link = share_url(&page, 125.7);
    assert_eq!(start_position(&link), Some(125));

    // Listener B opens the link
    let options = PlayOptions {
        start_url: Some(link),
        ..PlayOptions::default()
    };
    let mut player = prepare_player(lecture, &options, 80, 24);
    player.tick(Duration::ZERO);

    assert_eq!(player.state.current_time, 125.0);
    assert!(!player.state.is_playing);
    assert_eq!(player.current_chapter().unwrap().title, "Introduction");
    assert_eq!(player.current_segment(), Some(2));
}

#[test]
fn playing_at_double_speed_crosses_chapter() {
    let options = PlayOptions {
        start: Some(170.0),
        rate: PlaybackRate::Double,
        ..PlayOptions::default()
    };
    let mut player = prepare_player(Lecture::sample(), &options, 80, 24);
    player.tick(Duration::ZERO);
    player.toggle_play();

    for _ in 0..10 {
        player.tick(Duration::from_secs(1));
        player.follow_active_row();
    }

    assert_eq!(player.state.current_time, 190.0);
    assert_eq!(player.current_chapter().unwrap().id, "2");
    assert_eq!(player.state.selected, 3);
}

#[test]
fn blocked_playback_is_reported() {
    let mut player = prepare_player(Lecture::sample(), &PlayOptions::default(), 80, 24);
    player
        .media_mut()
        .set_policy(PlayPolicy::Deny("no audio device".to_string()));

    player.toggle_play();
    player.tick(Duration::from_millis(100));

    assert!(!player.state.is_playing);
    assert!(player.media().paused());
    let note = player.state.notification.as_ref().unwrap();
    assert!(note.message.contains("no audio device"));
}

#[test]
fn playback_stops_at_end() {
    let options = PlayOptions {
        start: Some(1495.0),
        ..PlayOptions::default()
    };
    let mut player = prepare_player(Lecture::sample(), &options, 80, 24);
    player.tick(Duration::ZERO);
    player.toggle_play();
    player.tick(Duration::from_secs(10));

    assert_eq!(player.state.current_time, 1500.0);
    assert!(!player.state.is_playing);
    assert_eq!(player.progress_percent(), 100.0);
}
