//! Duration-constrained track selection.
//!
//! This is the one piece of the service that is neither routing nor provider
//! plumbing: given the entries of a source playlist and a target listening
//! time, pick a random subset whose combined play time just reaches the
//! target. The randomness source is a parameter so callers can seed it;
//! the HTTP layer passes the thread RNG, tests pass a fixed-seed generator.

use rand::{Rng, seq::SliceRandom};

use crate::types::{PlaylistEntry, Track};

const MS_PER_MINUTE: u64 = 60_000;

/// Outcome of a selection run.
///
/// `total_duration_ms` is always the exact sum of the durations of `tracks`,
/// accumulated in the order they were appended.
#[derive(Debug, Clone)]
pub struct Selection {
    pub tracks: Vec<Track>,
    pub total_duration_ms: u64,
}

/// Selects tracks from `entries` until their combined duration reaches
/// `minutes`.
///
/// Entries without underlying track data (items whose track has disappeared
/// from the catalogue) are dropped up front. The remaining tracks are
/// shuffled uniformly with `rng`, then accumulated greedily: every track
/// that still fits inside the budget is taken, and the first track that
/// would overflow the budget is taken as well, ending the walk. The result
/// therefore meets or overshoots the target whenever the playlist holds
/// enough material; it only falls short when the whole playlist is shorter
/// than the requested duration, in which case every track is returned.
///
/// # Arguments
///
/// * `entries` - Playlist items as returned by the provider for one playlist
/// * `minutes` - Target listening time in minutes
/// * `rng` - Randomness source for the shuffle
///
/// # Behavioral contract
///
/// The overflowing track is appended, not skipped: a generated session may
/// run a few minutes long but never cuts out early. Changing this to "stop
/// before the overflowing track" silently breaks the product promise, which
/// is why the tests pin it down.
///
/// # Example
///
/// ```
/// let selection = select_for_duration(&entries, 25, &mut rand::rng());
/// println!(
///     "{} tracks, {} ms total",
///     selection.tracks.len(),
///     selection.total_duration_ms
/// );
/// ```
pub fn select_for_duration<R: Rng + ?Sized>(
    entries: &[PlaylistEntry],
    minutes: u32,
    rng: &mut R,
) -> Selection {
    let mut candidates: Vec<Track> = entries
        .iter()
        .filter_map(|entry| entry.track.as_ref())
        .map(Track::from)
        .collect();

    candidates.shuffle(rng);

    let limit = u64::from(minutes) * MS_PER_MINUTE;
    let mut tracks: Vec<Track> = Vec::new();
    let mut total_duration_ms: u64 = 0;

    for track in candidates {
        let fits = total_duration_ms + track.duration_ms <= limit;
        total_duration_ms += track.duration_ms;
        tracks.push(track);
        if !fits {
            // Keep the overflowing track so the session never runs short.
            break;
        }
    }

    Selection {
        tracks,
        total_duration_ms,
    }
}
