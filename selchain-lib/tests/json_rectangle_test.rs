use pretty_assertions::assert_eq;
use selchain_lib::json::{deserialize, deserialize_values, serialize, JsonError};
use selchain_lib::rectangle::Rectangle;
use serde::{Deserialize, Serialize};

/// Field order matches the JSON key order below.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Box2 {
    height: u32,
    width: u32,
}

#[test]
fn test_height_width_round_trip() {
    let text = serialize(&Box2 {
        height: 10,
        width: 20,
    })
    .unwrap();
    assert_eq!(text, r#"{"height":10,"width":20}"#);

    let back: Box2 = deserialize(&text).unwrap();
    assert_eq!(
        back,
        Box2 {
            height: 10,
            width: 20
        }
    );
}

#[test]
fn test_rectangle_round_trip() {
    let rect = Rectangle::new(3.5, 2.0);
    let text = serialize(&rect).unwrap();
    assert_eq!(text, r#"{"width":3.5,"height":2.0}"#);
    let back: Rectangle = deserialize(&text).unwrap();
    assert_eq!(back, rect);
    assert_eq!(back.area(), 7.0);
}

#[test]
fn test_rectangle_from_mismatched_key_order() {
    // Rectangle's fields are (width, height); the text lists height first.
    let rect: Rectangle = deserialize(r#"{"height":10,"width":20}"#).unwrap();
    assert_eq!(rect, Rectangle::new(10.0, 20.0));
}

#[test]
fn test_rectangle_area_after_mutation() {
    let mut rect = Rectangle::new(10.0, 20.0);
    assert_eq!(rect.area(), 200.0);
    rect.width = 5.0;
    assert_eq!(rect.area(), 100.0);
}

#[test]
fn test_positional_values() {
    let values = deserialize_values(r#"{"z":"last?","a":null}"#).unwrap();
    assert_eq!(values, vec![serde_json::json!("last?"), serde_json::Value::Null]);
}

#[test]
fn test_failures_propagate() {
    assert!(matches!(
        deserialize::<Rectangle>(r#"{"width":1}"#),
        Err(JsonError::Json(_))
    ));
    assert!(matches!(
        deserialize::<Rectangle>(r#"{"width":"wide","height":1}"#),
        Err(JsonError::Json(_))
    ));
    assert!(matches!(
        deserialize::<Rectangle>("42"),
        Err(JsonError::NotAnObject("a number"))
    ));
}
