mod common;

use common::{FakeNavigator, MemoryClipboard, controller, locs, with_clipboard};
use dirhist::controller::{Intent, NavigationController, Outcome};
use dirhist::error::{Direction, HistoryError};
use dirhist::formatter::HistoryRow;
use dirhist::history::{HistoryStore, MAX_HISTORY_SIZE};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn go(path: &str) -> Intent {
    Intent::Path {
        path: path.to_string(),
        literal: false,
    }
}

#[test]
fn test_plain_move_records_old_location() {
    let mut nav = controller("home", &["src"]);
    let mut store = HistoryStore::new();

    let outcome = nav.execute(&mut store, go("src"), false).unwrap();

    assert_eq!(
        outcome,
        Outcome::Moved {
            from: "home".to_string(),
            to: "src".to_string(),
            copied: false,
        }
    );
    assert_eq!(store.backward(), locs(&["home"]).as_slice());
    assert!(store.forward().is_empty());
}

#[test]
fn test_back_then_forward_round_trip() {
    let mut nav = controller("A", &["B"]);
    let mut store = HistoryStore::new();

    nav.execute(&mut store, go("B"), false).unwrap();
    let after_move = store.clone();

    nav.execute(&mut store, Intent::Backward, false).unwrap();
    assert_eq!(nav.current_location(), "A");
    assert_eq!(store.forward(), locs(&["B"]).as_slice());

    nav.execute(&mut store, Intent::Forward, false).unwrap();
    assert_eq!(nav.current_location(), "B");
    assert_eq!(store, after_move);
}

#[test]
fn test_eviction_drops_oldest_entry() {
    let names: Vec<String> = (0..=MAX_HISTORY_SIZE).map(|i| format!("d{i}")).collect();
    let refs: Vec<&str> = names.iter().map(String::as_str).collect();
    let mut nav = controller("d0", &refs);
    let mut store = HistoryStore::new();

    for name in &names[1..MAX_HISTORY_SIZE] {
        nav.execute(&mut store, go(name), false).unwrap();
    }
    assert_eq!(store.len(), MAX_HISTORY_SIZE);
    assert_eq!(store.backward()[0], "d0");

    nav.execute(&mut store, go(&names[MAX_HISTORY_SIZE]), false).unwrap();

    assert_eq!(store.len(), MAX_HISTORY_SIZE);
    assert_eq!(store.backward()[0], "d1");
    assert_eq!(store.backward().last().unwrap(), &names[MAX_HISTORY_SIZE - 1]);
}

#[test]
fn test_manual_move_folds_forward_history() {
    let mut nav = controller("E", &["F"]);
    let mut store = HistoryStore::from_stacks(locs(&["A", "B"]), locs(&["C", "D"]));

    nav.execute(&mut store, go("F"), false).unwrap();

    assert_eq!(nav.current_location(), "F");
    assert_eq!(store.backward(), locs(&["A", "B", "E", "C", "D"]).as_slice());
    assert!(store.forward().is_empty());
}

#[test]
fn test_go_to_id_in_backward_history() {
    let mut nav = controller("D", &["A", "B", "C"]);
    let mut store = HistoryStore::from_stacks(locs(&["A", "B", "C"]), Vec::new());

    nav.execute(&mut store, Intent::ById(1), false).unwrap();

    assert_eq!(nav.current_location(), "B");
    assert_eq!(store.backward(), locs(&["A"]).as_slice());
    assert_eq!(store.forward(), locs(&["C", "D"]).as_slice());
}

#[test]
fn test_go_to_current_id_does_not_navigate() {
    let (mut nav, clipboard) = with_clipboard("C", &["A", "B"]);
    let mut store = HistoryStore::from_stacks(locs(&["A", "B"]), Vec::new());
    let before = store.clone();

    let outcome = nav.execute(&mut store, Intent::ById(2), true).unwrap();

    assert_eq!(outcome, Outcome::Unchanged);
    assert_eq!(store, before);
    assert!(nav.navigator().attempts.is_empty());
    assert_eq!(clipboard.text(), None);
}

#[test]
fn test_remove_current_location_is_protected() {
    let nav = controller("C", &[]);
    let mut store = HistoryStore::from_stacks(locs(&["A", "B"]), Vec::new());
    let before = store.clone();

    let result = nav.remove(&mut store, 2);

    assert!(matches!(
        result,
        Err(HistoryError::CurrentLocationProtected { id: 2 })
    ));
    assert_eq!(store, before);
}

#[test]
fn test_empty_intent_lists_history() {
    let mut nav = controller("C", &[]);
    let mut store = HistoryStore::from_stacks(locs(&["A", "B"]), locs(&["D"]));

    let outcome = nav.execute(&mut store, Intent::Empty, false).unwrap();

    let row = |marker: Option<&str>, id: usize, path: &str| HistoryRow {
        marker: marker.map(str::to_string),
        id,
        path: path.to_string(),
    };
    assert_eq!(
        outcome,
        Outcome::Listed(vec![
            row(None, 0, "A"),
            row(None, 1, "B"),
            row(Some("*"), 2, "C"),
            row(None, 3, "D"),
        ])
    );
    assert!(nav.navigator().attempts.is_empty());
}

#[test]
fn test_empty_intent_with_copy_copies_current() {
    let (mut nav, clipboard) = with_clipboard("C", &[]);
    let mut store = HistoryStore::new();

    let outcome = nav.execute(&mut store, Intent::Empty, true).unwrap();

    assert_eq!(outcome, Outcome::Copied("C".to_string()));
    assert_eq!(clipboard.text().as_deref(), Some("C"));
    assert!(nav.navigator().attempts.is_empty());
}

#[test]
fn test_failed_navigation_leaves_history() {
    let (mut nav, clipboard) = with_clipboard("A", &["B"]);
    let mut store = HistoryStore::from_stacks(locs(&["X"]), locs(&["Y"]));
    let before = store.clone();

    let result = nav.execute(&mut store, go("missing"), true);

    assert!(matches!(result, Err(HistoryError::NavigationFailed { .. })));
    assert_eq!(store, before);
    assert_eq!(nav.current_location(), "A");
    assert_eq!(clipboard.text(), None);
}

#[test]
fn test_failed_backward_navigation_leaves_history() {
    // "gone" was deleted since it was visited.
    let mut nav = controller("A", &[]);
    let mut store = HistoryStore::from_stacks(locs(&["gone"]), Vec::new());
    let before = store.clone();

    let result = nav.execute(&mut store, Intent::Backward, false);

    assert!(matches!(result, Err(HistoryError::NavigationFailed { .. })));
    assert_eq!(store, before);
}

#[test]
fn test_silent_failure_leaves_history() {
    let mut nav = controller("A", &["B"]);
    nav.navigator_mut().stuck = true;
    let mut store = HistoryStore::new();

    let outcome = nav.execute(&mut store, go("B"), false).unwrap();

    assert_eq!(outcome, Outcome::Unchanged);
    assert!(store.is_empty());
    assert_eq!(nav.navigator().attempts, vec!["B".to_string()]);
}

#[test]
fn test_move_to_same_location_is_not_recorded() {
    let mut nav = controller("A", &[]);
    let mut store = HistoryStore::new();

    let outcome = nav.execute(&mut store, go("A"), false).unwrap();

    assert_eq!(outcome, Outcome::Unchanged);
    assert!(store.is_empty());
}

#[test]
fn test_empty_history_makes_no_attempt() {
    let mut nav = controller("A", &[]);
    let mut store = HistoryStore::new();

    let back = nav.execute(&mut store, Intent::Backward, false);
    let forward = nav.execute(&mut store, Intent::Forward, false);

    assert!(matches!(
        back,
        Err(HistoryError::EmptyHistory {
            direction: Direction::Backward
        })
    ));
    assert!(matches!(
        forward,
        Err(HistoryError::EmptyHistory {
            direction: Direction::Forward
        })
    ));
    assert!(nav.navigator().attempts.is_empty());
}

#[test]
fn test_invalid_id_makes_no_attempt() {
    let mut nav = controller("A", &[]);
    let mut store = HistoryStore::from_stacks(locs(&["X"]), Vec::new());

    let result = nav.execute(&mut store, Intent::ById(7), false);

    assert!(matches!(result, Err(HistoryError::InvalidId { id: 7 })));
    assert!(nav.navigator().attempts.is_empty());
}

#[test]
fn test_copy_after_successful_move() {
    let (mut nav, clipboard) = with_clipboard("A", &["B"]);
    let mut store = HistoryStore::new();

    let outcome = nav.execute(&mut store, go("B"), true).unwrap();

    assert!(matches!(outcome, Outcome::Moved { copied: true, .. }));
    assert_eq!(clipboard.text().as_deref(), Some("B"));
}

#[test]
fn test_broken_clipboard_still_commits_move() {
    let mut nav = NavigationController::new(
        FakeNavigator::new("A", &["B"]),
        MemoryClipboard::broken(),
    );
    let mut store = HistoryStore::new();

    let outcome = nav.execute(&mut store, go("B"), true).unwrap();

    assert!(matches!(outcome, Outcome::Moved { copied: false, .. }));
    assert_eq!(store.backward(), locs(&["A"]).as_slice());
}

#[test]
fn test_history_targets_are_navigated_verbatim() {
    let mut nav = controller("A", &["..."]);
    let mut store = HistoryStore::from_stacks(locs(&["..."]), Vec::new());

    nav.execute(&mut store, Intent::Backward, false).unwrap();

    assert_eq!(nav.current_location(), "...");
}

#[test]
fn test_marker_is_configurable() {
    let mut nav = controller("A", &[]).with_marker("->");
    let mut store = HistoryStore::new();

    let rows = match nav.execute(&mut store, Intent::Empty, false).unwrap() {
        Outcome::Listed(rows) => rows,
        other => panic!("expected listing, got {other:?}"),
    };
    assert_eq!(rows[0].marker.as_deref(), Some("->"));
}

#[derive(Debug, Clone)]
enum Op {
    Go(usize),
    Back,
    Forward,
    ToId(usize),
    Remove(usize),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (0usize..14).prop_map(Op::Go),
        2 => Just(Op::Back),
        2 => Just(Op::Forward),
        1 => (0usize..120).prop_map(Op::ToId),
        1 => (0usize..120).prop_map(Op::Remove),
    ]
}

proptest! {
    #[test]
    fn prop_history_stays_bounded_and_rejections_change_nothing(
        ops in prop::collection::vec(op(), 1..400)
    ) {
        // d12 and d13 never exist.
        let names: Vec<String> = (0..12).map(|i| format!("d{i}")).collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let mut nav = controller("d0", &refs);
        let mut store = HistoryStore::new();

        for op in ops {
            let before = store.clone();
            let result = match op {
                Op::Go(n) => nav.execute(&mut store, go(&format!("d{n}")), false),
                Op::Back => nav.execute(&mut store, Intent::Backward, false),
                Op::Forward => nav.execute(&mut store, Intent::Forward, false),
                Op::ToId(id) => nav.execute(&mut store, Intent::ById(id), false),
                Op::Remove(id) => nav.remove(&mut store, id).map(|_| Outcome::Unchanged),
            };

            prop_assert!(store.len() <= MAX_HISTORY_SIZE);
            match (&op, result) {
                (Op::Remove(_), Ok(_)) => prop_assert_eq!(store.len() + 1, before.len()),
                (_, Ok(Outcome::Moved { to, .. })) => {
                    prop_assert_eq!(to, nav.current_location());
                }
                (_, Ok(_)) | (_, Err(_)) => prop_assert_eq!(&store, &before),
            }
        }
    }
}
