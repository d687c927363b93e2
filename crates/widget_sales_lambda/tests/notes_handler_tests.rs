use lambda_runtime::Context;
use serde_json::{json, Value};
use widget_sales_core::contract::REQUIRED_FIELDS;
use widget_sales_lambda::handlers::notes::handle_notes_event;

fn submission(date: Value, location: Value, red: Value, blue: Value, green: Value) -> Value {
    json!({
        "date": date,
        "location": location,
        "red_sold": red,
        "blue_sold": blue,
        "green_sold": green
    })
}

fn notes_for(event: Value) -> String {
    handle_notes_event(event, &Context::default())
        .expect("well-formed submission should succeed")
        .notes
}

#[test]
fn store_a_submission_produces_full_sentence() {
    let notes = notes_for(submission(
        json!("2024-01-05"),
        json!("Store A"),
        json!(10),
        json!(5),
        json!(2),
    ));

    assert_eq!(
        notes,
        "Thank you for submitting data. You submitted the following. Date 2024-01-05 at \
         location Store A, number of red widgets sold was 10, number of blue widgets sold was 5, \
         number of green widgets sold was 2."
    );
}

#[test]
fn zero_counts_are_rendered() {
    let notes = notes_for(submission(
        json!("2024-02-01"),
        json!("Store B"),
        json!(0),
        json!(0),
        json!(0),
    ));

    assert!(notes.contains(
        "was 0, number of blue widgets sold was 0, number of green widgets sold was 0."
    ));
}

#[test]
fn non_numeric_count_is_embedded_verbatim() {
    let notes = notes_for(submission(
        json!("2024-03-10"),
        json!("Store C"),
        json!("many"),
        json!(4),
        json!("abc"),
    ));

    assert!(notes.contains("number of red widgets sold was many,"));
    assert!(notes.contains("number of green widgets sold was abc."));
}

#[test]
fn missing_location_names_the_field() {
    let event = json!({
        "date": "2024-01-05",
        "red_sold": 10,
        "blue_sold": 5,
        "green_sold": 2
    });

    let error = handle_notes_event(event, &Context::default())
        .expect_err("missing location should fail");
    assert_eq!(error.field(), "location");
}

#[test]
fn empty_event_fails_for_every_subset_of_fields() {
    let error = handle_notes_event(json!({}), &Context::default())
        .expect_err("empty event should fail");
    assert_eq!(error.field(), REQUIRED_FIELDS[0]);

    let full = submission(json!("d"), json!("l"), json!(1), json!(2), json!(3));
    for (index, field) in REQUIRED_FIELDS.iter().enumerate() {
        let mut event = full.clone();
        let object = event.as_object_mut().expect("fixture is an object");
        for later in &REQUIRED_FIELDS[index..] {
            object.remove(*later);
        }

        let error = handle_notes_event(event, &Context::default())
            .expect_err("truncated event should fail");
        assert_eq!(error.field(), *field);
    }
}

#[test]
fn field_order_follows_template_not_input() {
    let shuffled: Value = serde_json::from_str(
        r#"{"green_sold": 3, "location": "Depot", "blue_sold": 2, "date": "2024-04-01", "red_sold": 1}"#,
    )
    .expect("fixture should parse");

    let notes = notes_for(shuffled);
    let positions: Vec<usize> = [
        "Date 2024-04-01",
        "location Depot",
        "red widgets sold was 1",
        "blue widgets sold was 2",
        "green widgets sold was 3",
    ]
    .iter()
    .map(|needle| notes.find(needle).expect("fragment should be present"))
    .collect();

    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn extra_fields_are_ignored_and_output_is_deterministic() {
    let mut event = submission(
        json!("2024-05-20"),
        json!("Kiosk 9"),
        json!(7),
        json!(8),
        json!(9),
    );
    event["cashier"] = json!("pat");

    let first = notes_for(event.clone());
    let second = notes_for(event);

    assert_eq!(first, second);
    assert!(!first.contains("pat"));
}
