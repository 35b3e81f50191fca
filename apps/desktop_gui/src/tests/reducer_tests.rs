use super::*;
use shared::error::LoadFailure;

fn flight(id: i64, airline: &str, price: f64) -> FlightRecord {
    FlightRecord {
        id: FlightId::from(id),
        airline: airline.to_string(),
        price,
        ..FlightRecord::default()
    }
}

fn sample() -> Vec<FlightRecord> {
    vec![
        flight(1, "Delta", 300.0),
        flight(2, "delta Air", 100.0),
        flight(3, "United", 50.0),
    ]
}

fn row_ids(state: &FlightListState) -> Vec<String> {
    state.rows().iter().map(|flight| flight.id.to_string()).collect()
}

fn loaded_state() -> FlightListState {
    let mut state = FlightListState::new();
    let mount = state.mount().expect("mount");
    state.handle_event(UiEvent::FlightsLoaded {
        mount,
        flights: sample(),
    });
    state
}

#[test]
fn starts_empty_and_requests_one_load() {
    let mut state = FlightListState::new();
    assert_eq!(state.phase(), LoadPhase::Idle);
    assert!(state.rows().is_empty());

    assert!(state.mount().is_some());
    assert!(state.mount().is_none());
    assert_eq!(state.phase(), LoadPhase::Requested);
}

#[test]
fn successful_load_populates_rows_in_load_order() {
    let state = loaded_state();
    assert_eq!(state.phase(), LoadPhase::Loaded);
    assert_eq!(state.total(), 3);
    assert_eq!(row_ids(&state), vec!["1", "2", "3"]);
}

#[test]
fn failed_load_leaves_rows_empty() {
    let mut state = FlightListState::new();
    let mount = state.mount().expect("mount");
    state.handle_event(UiEvent::LoadFailed {
        mount,
        failure: LoadFailure::transport("http://flights.invalid", "connection refused"),
    });

    assert_eq!(state.phase(), LoadPhase::Failed);
    assert_eq!(state.total(), 0);
    assert!(state.rows().is_empty());
}

#[test]
fn second_result_for_same_mount_does_not_replace_rows() {
    let mut state = FlightListState::new();
    let mount = state.mount().expect("mount");
    state.handle_event(UiEvent::FlightsLoaded {
        mount,
        flights: sample(),
    });
    state.handle_event(UiEvent::FlightsLoaded {
        mount,
        flights: vec![flight(9, "Other", 1.0)],
    });
    state.handle_event(UiEvent::LoadFailed {
        mount,
        failure: LoadFailure::status("http://flights.invalid", 503),
    });

    assert_eq!(state.phase(), LoadPhase::Loaded);
    assert_eq!(row_ids(&state), vec!["1", "2", "3"]);
}

#[test]
fn results_for_a_torn_down_mount_are_discarded() {
    let mut state = FlightListState::new();
    let stale = state.mount().expect("mount");
    state.teardown();
    let current = state.mount().expect("remount");

    state.handle_event(UiEvent::FlightsLoaded {
        mount: stale,
        flights: sample(),
    });
    assert_eq!(state.total(), 0);
    assert_eq!(state.phase(), LoadPhase::Requested);

    state.handle_event(UiEvent::FlightsLoaded {
        mount: current,
        flights: vec![flight(7, "KLM", 80.0)],
    });
    assert_eq!(row_ids(&state), vec!["7"]);
}

#[test]
fn teardown_resets_collection_and_controls() {
    let mut state = loaded_state();
    state.apply(TableIntent::SortByPrice);
    state.apply(TableIntent::FilterChanged("delta".to_string()));

    state.teardown();
    assert_eq!(state.total(), 0);
    assert_eq!(state.phase(), LoadPhase::Idle);
    assert_eq!(state.controls(), &ViewControls::default());
    assert!(state.mount().is_some());
}

#[test]
fn filter_and_sort_combine() {
    let mut state = loaded_state();
    state.apply(TableIntent::FilterChanged("delta".to_string()));
    assert_eq!(row_ids(&state), vec!["1", "2"]);

    state.apply(TableIntent::SortByPrice);
    assert_eq!(row_ids(&state), vec!["2", "1"]);

    state.apply(TableIntent::FilterChanged(String::new()));
    assert_eq!(row_ids(&state), vec!["3", "2", "1"]);
}

#[test]
fn controls_are_independent() {
    let mut state = loaded_state();

    state.apply(TableIntent::FilterChanged("uni".to_string()));
    assert!(!state.controls().sort_active);

    state.apply(TableIntent::SortByPrice);
    assert_eq!(state.controls().filter_text, "uni");

    state.apply(TableIntent::FilterChanged("d".to_string()));
    assert!(state.controls().sort_active);
}

#[test]
fn sorting_is_one_way_and_idempotent() {
    let mut state = loaded_state();
    state.apply(TableIntent::SortByPrice);
    let once = row_ids(&state);
    state.apply(TableIntent::SortByPrice);
    assert_eq!(row_ids(&state), once);
    assert!(state.controls().sort_active);
}

#[test]
fn sort_applied_before_load_orders_the_loaded_rows() {
    let mut state = FlightListState::new();
    let mount = state.mount().expect("mount");
    state.apply(TableIntent::SortByPrice);
    state.handle_event(UiEvent::FlightsLoaded {
        mount,
        flights: sample(),
    });
    assert_eq!(row_ids(&state), vec!["3", "2", "1"]);
}

#[test]
fn book_intent_does_not_touch_view_state() {
    let mut state = loaded_state();
    state.apply(TableIntent::Book(FlightId::from(2)));
    assert_eq!(state.controls(), &ViewControls::default());
    assert_eq!(row_ids(&state), vec!["1", "2", "3"]);
    assert_eq!(state.flight(&FlightId::from(2)).map(|f| f.price), Some(100.0));
    assert!(state.flight(&FlightId::from(99)).is_none());
}
