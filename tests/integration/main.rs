//! Integration tests for eduaudio

mod cli_test;
mod helpers;
mod info_test;
mod lecture_test;
mod player_test;
mod share_test;
