mod common;
use common::{avail, dt, gap};

use ecocharge::core::calculator::gaps::{GapPolicy, day_bounds, find_gaps, find_gaps_with};
use ecocharge::errors::AppError;
use ecocharge::models::charging_window::ChargingWindow;

const END_OF_DAY: &str = "23:59:59.999";

fn eod(day: &str) -> String {
    format!("{day} {END_OF_DAY}")
}

#[test]
fn test_single_window_closes_the_day() {
    let input = vec![avail("2024-02-02 08:00", "2024-02-02 12:00", 333.0)];

    let gaps = find_gaps(&input).expect("gaps");

    assert_eq!(gaps, vec![gap("2024-02-02 12:00", &eod("2024-02-02"))]);
}

#[test]
fn test_two_windows_same_day() {
    let input = vec![
        avail("2024-02-03 08:00", "2024-02-03 12:00", 50.0),
        avail("2024-02-03 14:00", "2024-02-03 18:00", 60.0),
    ];

    let gaps = find_gaps(&input).expect("gaps");

    assert_eq!(
        gaps,
        vec![
            gap("2024-02-03 12:00", "2024-02-03 14:00"),
            gap("2024-02-03 18:00", &eod("2024-02-03")),
        ]
    );
}

#[test]
fn test_each_day_closes_independently() {
    let input = vec![
        avail("2024-02-02 08:00", "2024-02-02 12:00", 333.0),
        avail("2024-02-04 14:00", "2024-02-04 18:00", 33.0),
    ];

    let gaps = find_gaps(&input).expect("gaps");

    assert_eq!(
        gaps,
        vec![
            gap("2024-02-02 12:00", &eod("2024-02-02")),
            gap("2024-02-04 18:00", &eod("2024-02-04")),
        ]
    );
    // nothing for the day without windows
    assert!(gaps.iter().all(|g| g.day() != dt("2024-02-03 00:00").date()));
}

#[test]
fn test_unsorted_input_gives_sorted_gaps() {
    let sorted = vec![
        avail("2024-02-03 08:00", "2024-02-03 12:00", 50.0),
        avail("2024-02-03 14:00", "2024-02-03 18:00", 60.0),
        avail("2024-02-04 14:00", "2024-02-04 18:00", 33.0),
    ];
    let shuffled = vec![sorted[2].clone(), sorted[0].clone(), sorted[1].clone()];

    let a = find_gaps(&sorted).expect("gaps");
    let b = find_gaps(&shuffled).expect("gaps");

    assert_eq!(a, b);
    assert!(b.windows(2).all(|w| w[0].start() <= w[1].start()));
}

#[test]
fn test_caller_input_is_not_reordered() {
    let input = vec![
        avail("2024-02-03 14:00", "2024-02-03 18:00", 60.0),
        avail("2024-02-03 08:00", "2024-02-03 12:00", 50.0),
    ];
    let before = input.clone();

    find_gaps(&input).expect("gaps");

    assert_eq!(input, before);
}

#[test]
fn test_idempotent() {
    let input = vec![
        avail("2024-02-03 14:00", "2024-02-03 18:00", 60.0),
        avail("2024-02-03 08:00", "2024-02-03 12:00", 50.0),
        avail("2024-02-02 08:00", "2024-02-02 12:00", 333.0),
    ];

    assert_eq!(find_gaps(&input).unwrap(), find_gaps(&input).unwrap());
}

#[test]
fn test_no_gap_before_first_window_by_default() {
    let input = vec![
        avail("2024-02-03 08:00", "2024-02-03 12:00", 50.0),
        avail("2024-02-04 14:00", "2024-02-04 18:00", 33.0),
    ];

    let gaps = find_gaps(&input).expect("gaps");

    for first in &input {
        assert!(
            gaps.iter()
                .filter(|g| g.day() == first.day())
                .all(|g| g.end() > first.start()),
            "unexpected leading gap on {}",
            first.day()
        );
    }
}

#[test]
fn test_adjacent_windows_produce_no_gap() {
    let input = vec![
        avail("2024-02-03 08:00", "2024-02-03 12:00", 50.0),
        avail("2024-02-03 12:00", "2024-02-03 18:00", 60.0),
    ];

    let gaps = find_gaps(&input).expect("gaps");

    assert_eq!(gaps, vec![gap("2024-02-03 18:00", &eod("2024-02-03"))]);
}

#[test]
fn test_window_until_end_of_day_needs_no_closing_gap() {
    let input = vec![avail("2024-02-03 20:00", &eod("2024-02-03"), 10.0)];

    let gaps = find_gaps(&input).expect("gaps");

    assert!(gaps.is_empty());
}

#[test]
fn test_every_gap_is_a_positive_gap_window() {
    let input = vec![
        avail("2024-02-03 08:00", "2024-02-03 12:00", 50.0),
        avail("2024-02-03 12:00", "2024-02-03 12:00", 0.0),
        avail("2024-02-03 14:00", "2024-02-03 18:00", 60.0),
        avail("2024-02-05 00:00", "2024-02-05 03:00", 5.0),
    ];

    let gaps = find_gaps(&input).expect("gaps");

    assert!(!gaps.is_empty());
    for g in &gaps {
        assert!(g.is_gap());
        assert_eq!(g.emissions(), None);
        assert!(g.end() > g.start());
    }
}

#[test]
fn test_empty_input_is_rejected() {
    let err = find_gaps(&[]).unwrap_err();
    assert!(matches!(err, AppError::InvalidInput(_)));
}

#[test]
fn test_malformed_interval_is_rejected() {
    let err = ChargingWindow::available(dt("2024-02-03 12:00"), dt("2024-02-03 08:00"), 1.0)
        .unwrap_err();
    assert!(matches!(err, AppError::MalformedInterval { .. }));

    let err = ChargingWindow::gap(dt("2024-02-03 12:00"), dt("2024-02-03 11:59")).unwrap_err();
    assert!(matches!(err, AppError::MalformedInterval { .. }));
}

#[test]
fn test_negative_emissions_are_rejected() {
    let err = ChargingWindow::available(dt("2024-02-03 08:00"), dt("2024-02-03 12:00"), -1.0)
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidInput(_)));

    let err = ChargingWindow::available(dt("2024-02-03 08:00"), dt("2024-02-03 12:00"), f64::NAN)
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidInput(_)));
}

#[test]
fn test_leading_gap_policy_covers_whole_day() {
    let input = vec![
        avail("2024-02-03 14:00", "2024-02-03 18:00", 60.0),
        avail("2024-02-03 08:00", "2024-02-03 12:00", 50.0),
    ];

    let gaps = find_gaps_with(&input, GapPolicy::with_leading_gap(true)).expect("gaps");

    assert_eq!(gaps.first(), Some(&gap("2024-02-03 00:00", "2024-02-03 08:00")));

    let mut all: Vec<ChargingWindow> = input.iter().cloned().chain(gaps).collect();
    all.sort_by_key(|w| w.start());

    let (day_start, day_end) = day_bounds(dt("2024-02-03 00:00").date());
    assert_eq!(all.first().map(|w| w.start()), Some(day_start));
    assert_eq!(all.last().map(|w| w.end()), Some(day_end));
    for pair in all.windows(2) {
        assert_eq!(pair[0].end(), pair[1].start(), "hole or overlap at {}", pair[0].end());
    }
}

#[test]
fn test_leading_gap_skipped_when_day_starts_at_midnight() {
    let input = vec![avail("2024-02-03 00:00", "2024-02-03 06:00", 12.0)];

    let gaps = find_gaps_with(&input, GapPolicy::with_leading_gap(true)).expect("gaps");

    assert_eq!(gaps, vec![gap("2024-02-03 06:00", &eod("2024-02-03"))]);
}

#[test]
fn test_leading_gap_starts_after_window_crossing_midnight() {
    let input = vec![
        avail("2024-02-03 22:00", "2024-02-04 02:00", 7.0),
        avail("2024-02-04 08:00", "2024-02-04 10:00", 9.0),
    ];

    let gaps = find_gaps_with(&input, GapPolicy::with_leading_gap(true)).expect("gaps");

    assert_eq!(
        gaps,
        vec![
            gap("2024-02-03 00:00", "2024-02-03 22:00"),
            gap("2024-02-04 02:00", "2024-02-04 08:00"),
            gap("2024-02-04 10:00", &eod("2024-02-04")),
        ]
    );
}

#[test]
fn test_leading_gap_respects_latest_end_of_earlier_windows() {
    let input = vec![
        avail("2024-02-03 20:00", "2024-02-04 03:00", 5.0),
        avail("2024-02-03 21:00", "2024-02-03 22:00", 6.0),
        avail("2024-02-04 08:00", "2024-02-04 10:00", 9.0),
    ];

    let gaps = find_gaps_with(&input, GapPolicy::with_leading_gap(true)).expect("gaps");

    assert_eq!(
        gaps,
        vec![
            gap("2024-02-03 00:00", "2024-02-03 20:00"),
            gap("2024-02-03 22:00", &eod("2024-02-03")),
            gap("2024-02-04 03:00", "2024-02-04 08:00"),
            gap("2024-02-04 10:00", &eod("2024-02-04")),
        ]
    );
}

#[test]
fn test_equal_starts_keep_input_order() {
    let instant = avail("2024-02-02 08:00", "2024-02-02 08:00", 1.0);
    let long = avail("2024-02-02 08:00", "2024-02-02 12:00", 2.0);

    // the later of the two tied windows closes the day
    let gaps = find_gaps(&[instant.clone(), long.clone()]).expect("gaps");
    assert_eq!(gaps, vec![gap("2024-02-02 12:00", &eod("2024-02-02"))]);

    let gaps = find_gaps(&[long, instant]).expect("gaps");
    assert_eq!(gaps, vec![gap("2024-02-02 08:00", &eod("2024-02-02"))]);
}
