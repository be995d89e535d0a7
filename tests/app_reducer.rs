use pagestore::app::{transition, AppAction, AppReducer, AppState};
use pagestore::mvi::Reducer;
use serde_json::json;

fn state(value: serde_json::Value) -> AppState {
    serde_json::from_value(value).unwrap()
}

fn action(value: serde_json::Value) -> AppAction {
    serde_json::from_value(value).unwrap()
}

#[test]
fn unrecognized_actions_return_input_state() {
    let inputs = [
        state(json!({ "foo": "" })),
        state(json!({ "foo": "x", "other": 1 })),
        state(json!({ "foo": "y", "list": [1, 2, 3], "nested": { "a": null } })),
    ];
    let actions = [
        action(json!({ "type": "anything" })),
        action(json!({ "type": "foo", "payload": "lowercase is not FOO" })),
        action(json!({ "payload": "no type" })),
        action(json!({ "type": null })),
        action(json!({ "type": "FOO" })),
        action(json!(42)),
    ];

    for input in &inputs {
        for a in &actions {
            assert_eq!(&AppReducer::reduce(input.clone(), a.clone()), input, "{:?}", a);
        }
    }
}

#[test]
fn missing_state_defaults_to_empty_foo() {
    let new = transition(None, action(json!({ "type": "anything" })));
    assert_eq!(serde_json::to_value(&new).unwrap(), json!({ "foo": "" }));
}

#[test]
fn foo_sets_payload() {
    let new = transition(
        Some(state(json!({ "foo": "x" }))),
        action(json!({ "type": "FOO", "payload": "y" })),
    );
    assert_eq!(serde_json::to_value(&new).unwrap(), json!({ "foo": "y" }));
}

#[test]
fn change_store_value_preserves_fields() {
    let new = transition(
        Some(state(json!({ "foo": "x", "other": 1 }))),
        action(json!({ "type": "CHANGE_STORE_VALUE", "storeValue": "z" })),
    );
    assert_eq!(
        serde_json::to_value(&new).unwrap(),
        json!({ "foo": "z", "other": 1 })
    );
}

#[test]
fn foo_ignores_store_value_field() {
    // FOO reads `payload`, never `storeValue`.
    let new = transition(
        Some(AppState::new("x")),
        action(json!({ "type": "FOO", "payload": "p", "storeValue": "s" })),
    );
    assert_eq!(new.foo, "p");
}
