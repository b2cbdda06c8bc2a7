use rand::{SeedableRng, rngs::StdRng};

use focusmix::selector::select_for_duration;
use focusmix::types::{PlaylistEntry, PlaylistTrack, TrackArtist};

// Helper function to create a playlist entry with an intact track
fn entry(uri: &str, duration_ms: u64) -> PlaylistEntry {
    PlaylistEntry {
        track: Some(PlaylistTrack {
            uri: format!("spotify:track:{uri}"),
            name: format!("Track {uri}"),
            duration_ms,
            artists: vec![TrackArtist {
                name: "Test Artist".to_string(),
            }],
        }),
    }
}

// Helper function to create an entry whose track has been removed from the
// catalogue (the provider sends these as null)
fn dead_entry() -> PlaylistEntry {
    PlaylistEntry { track: None }
}

#[test]
fn test_total_is_exact_sum_of_selected_tracks() {
    let entries: Vec<PlaylistEntry> = (0..20).map(|i| entry(&i.to_string(), 180_000)).collect();

    // Run with several seeds; the invariant must hold for every permutation
    for seed in 0..16 {
        let mut rng = StdRng::seed_from_u64(seed);
        let selection = select_for_duration(&entries, 10, &mut rng);

        let sum: u64 = selection.tracks.iter().map(|t| t.duration_ms).sum();
        assert_eq!(selection.total_duration_ms, sum);
    }
}

#[test]
fn test_short_playlist_returns_every_track() {
    // 3 tracks, 9 minutes of material, 60-minute target
    let entries = vec![
        entry("a", 180_000),
        entry("b", 180_000),
        entry("c", 180_000),
    ];

    let mut rng = StdRng::seed_from_u64(7);
    let selection = select_for_duration(&entries, 60, &mut rng);

    // Everything is taken and the total stays below the limit
    assert_eq!(selection.tracks.len(), 3);
    assert_eq!(selection.total_duration_ms, 540_000);
    assert!(selection.total_duration_ms < 60 * 60_000);
}

#[test]
fn test_selection_overshoots_by_exactly_one_track() {
    // Plenty of material, so the walk must end on an overflowing track
    let entries: Vec<PlaylistEntry> = (0..40u64)
        .map(|i| entry(&i.to_string(), 150_000 + u64::from(i) * 7_000))
        .collect();
    let limit = 25 * 60_000;

    for seed in 0..32 {
        let mut rng = StdRng::seed_from_u64(seed);
        let selection = select_for_duration(&entries, 25, &mut rng);

        // The result never undershoots
        assert!(selection.total_duration_ms >= limit);

        // The overflowing track is appended, not skipped: removing the last
        // track must bring the total back within the limit
        let last = selection.tracks.last().expect("selection is non-empty");
        assert!(selection.total_duration_ms - last.duration_ms <= limit);
    }
}

#[test]
fn test_dead_entries_are_dropped_silently() {
    let entries = vec![
        dead_entry(),
        entry("a", 120_000),
        dead_entry(),
        entry("b", 240_000),
        dead_entry(),
    ];

    let mut rng = StdRng::seed_from_u64(3);
    let selection = select_for_duration(&entries, 30, &mut rng);

    // Only the two intact tracks survive
    assert_eq!(selection.tracks.len(), 2);
    assert_eq!(selection.total_duration_ms, 360_000);
}

#[test]
fn test_empty_input_yields_empty_selection() {
    let mut rng = StdRng::seed_from_u64(0);

    let selection = select_for_duration(&[], 25, &mut rng);
    assert!(selection.tracks.is_empty());
    assert_eq!(selection.total_duration_ms, 0);

    // A playlist of only dead entries behaves the same
    let dead = vec![dead_entry(), dead_entry()];
    let selection = select_for_duration(&dead, 25, &mut rng);
    assert!(selection.tracks.is_empty());
    assert_eq!(selection.total_duration_ms, 0);
}

#[test]
fn test_zero_minute_target_takes_a_single_track() {
    // With a zero budget the very first track already overflows; it is
    // appended anyway, then the walk stops
    let entries = vec![entry("a", 180_000), entry("b", 200_000)];

    let mut rng = StdRng::seed_from_u64(11);
    let selection = select_for_duration(&entries, 0, &mut rng);

    assert_eq!(selection.tracks.len(), 1);
    assert_eq!(
        selection.total_duration_ms,
        selection.tracks[0].duration_ms
    );
}

#[test]
fn test_one_minute_target_over_three_short_tracks() {
    // 30s/40s/50s tracks against a 60s target: every permutation takes two
    // tracks, so the total is one of 70s, 80s or 90s and never below 60s
    let entries = vec![entry("a", 30_000), entry("b", 40_000), entry("c", 50_000)];

    for seed in 0..64 {
        let mut rng = StdRng::seed_from_u64(seed);
        let selection = select_for_duration(&entries, 1, &mut rng);

        assert_eq!(selection.tracks.len(), 2);
        assert!([70_000, 80_000, 90_000].contains(&selection.total_duration_ms));
    }
}

#[test]
fn test_same_seed_reproduces_the_selection() {
    let entries: Vec<PlaylistEntry> = (0..30).map(|i| entry(&i.to_string(), 200_000)).collect();

    let mut first_rng = StdRng::seed_from_u64(42);
    let first = select_for_duration(&entries, 20, &mut first_rng);

    let mut second_rng = StdRng::seed_from_u64(42);
    let second = select_for_duration(&entries, 20, &mut second_rng);

    assert_eq!(first.total_duration_ms, second.total_duration_ms);
    let first_uris: Vec<&str> = first.tracks.iter().map(|t| t.uri.as_str()).collect();
    let second_uris: Vec<&str> = second.tracks.iter().map(|t| t.uri.as_str()).collect();
    assert_eq!(first_uris, second_uris);
}

#[test]
fn test_track_fields_are_carried_over_from_the_entry() {
    let entries = vec![entry("abc123", 210_000)];

    let mut rng = StdRng::seed_from_u64(1);
    let selection = select_for_duration(&entries, 5, &mut rng);

    let track = &selection.tracks[0];
    assert_eq!(track.uri, "spotify:track:abc123");
    assert_eq!(track.name, "Track abc123");
    assert_eq!(track.artist, "Test Artist");
    assert_eq!(track.duration_ms, 210_000);
}
