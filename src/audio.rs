//! Music collaborator
//!
//! Rotates through a small playlist, best-effort. Tracks that fail to load
//! are skipped silently and a fully empty playlist disables the player;
//! nothing here can fail the game. macroquad has no end-of-track event, so
//! rotation runs on a fixed per-track timer.

use macroquad::audio::{load_sound, play_sound, stop_sound, PlaySoundParams, Sound};
use macroquad::time::get_time;

/// Playlist files, tried relative to the working directory
const TRACKS: [&str; 3] = [
    "assets/music/track_a.ogg",
    "assets/music/track_b.ogg",
    "assets/music/track_c.ogg",
];

/// Seconds before advancing to the next track
const TRACK_SECONDS: f64 = 150.0;

pub struct MusicPlayer {
    tracks: Vec<Sound>,
    current: usize,
    started_at: f64,
    playing: bool,
}

impl MusicPlayer {
    /// Try to load the playlist. Missing files are skipped without noise.
    pub async fn load() -> Self {
        let mut tracks = Vec::new();
        for path in TRACKS {
            if let Ok(sound) = load_sound(path).await {
                tracks.push(sound);
            }
        }
        Self {
            tracks,
            current: 0,
            started_at: 0.0,
            playing: false,
        }
    }

    /// Start or resume the playlist if sound is enabled
    pub fn update(&mut self, sound_enabled: bool) {
        if self.tracks.is_empty() {
            return;
        }
        if !sound_enabled {
            if self.playing {
                stop_sound(&self.tracks[self.current]);
                self.playing = false;
            }
            return;
        }
        let now = get_time();
        if !self.playing {
            self.start_current(now);
        } else if now - self.started_at > TRACK_SECONDS {
            stop_sound(&self.tracks[self.current]);
            self.current = (self.current + 1) % self.tracks.len();
            self.start_current(now);
        }
    }

    fn start_current(&mut self, now: f64) {
        play_sound(
            &self.tracks[self.current],
            PlaySoundParams {
                looped: false,
                volume: 0.5,
            },
        );
        self.started_at = now;
        self.playing = true;
    }
}
