//! Payload validation for `POST /api/1/item`.
//!
//! The body is checked as untyped JSON rather than through a serde DTO so
//! that each failure maps to its own 400 message, the way the live service
//! reports them.

use serde_json::{Map, Value};

use crate::Statistics;

const ITEM_FIELDS: [&str; 4] = ["sellerId", "name", "price", "statistics"];
const STATISTICS_FIELDS: [&str; 3] = ["likes", "viewCount", "contacts"];

/// A create payload that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewItem {
    pub seller_id: i64,
    pub name: String,
    pub price: i64,
    pub statistics: Statistics,
}

/// Validate a raw request body. `Err` carries the message returned to the
/// caller under `result.message`.
pub fn validate_create(body: &[u8]) -> Result<NewItem, String> {
    let value: Value =
        serde_json::from_slice(body).map_err(|_| "тело запроса не является корректным JSON".to_string())?;
    let obj = value
        .as_object()
        .ok_or_else(|| "тело запроса должно быть объектом".to_string())?;
    reject_unknown(obj, &ITEM_FIELDS)?;

    let seller_id = required(obj, "sellerId")?
        .as_i64()
        .ok_or_else(|| "поле sellerId должно быть целым числом".to_string())?;
    let name = required(obj, "name")?
        .as_str()
        .ok_or_else(|| "поле name должно быть строкой".to_string())?
        .to_string();
    let price = required(obj, "price")?
        .as_i64()
        .ok_or_else(|| "поле price должно быть целым числом".to_string())?;
    if price < 0 {
        return Err("поле price не может быть отрицательным".to_string());
    }

    let statistics = match obj.get("statistics") {
        None | Some(Value::Null) => Statistics::default(),
        Some(Value::Object(stats)) => {
            reject_unknown(stats, &STATISTICS_FIELDS)?;
            Statistics {
                likes: counter(stats, "likes")?,
                view_count: counter(stats, "viewCount")?,
                contacts: counter(stats, "contacts")?,
            }
        }
        Some(_) => return Err("поле statistics должно быть объектом".to_string()),
    };

    Ok(NewItem {
        seller_id,
        name,
        price,
        statistics,
    })
}

fn reject_unknown(obj: &Map<String, Value>, allowed: &[&str]) -> Result<(), String> {
    match obj.keys().find(|k| !allowed.contains(&k.as_str())) {
        Some(key) => Err(format!("неизвестное поле {key}")),
        None => Ok(()),
    }
}

fn required<'a>(obj: &'a Map<String, Value>, field: &str) -> Result<&'a Value, String> {
    match obj.get(field) {
        None | Some(Value::Null) => Err(format!("поле {field} обязательно")),
        Some(value) => Ok(value),
    }
}

fn counter(stats: &Map<String, Value>, field: &str) -> Result<i64, String> {
    match stats.get(field) {
        None => Ok(0),
        Some(value) => value
            .as_i64()
            .filter(|n| *n >= 0)
            .ok_or_else(|| format!("поле statistics.{field} должно быть неотрицательным целым числом")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validate(body: &str) -> Result<NewItem, String> {
        validate_create(body.as_bytes())
    }

    #[test]
    fn accepts_full_payload() {
        let item = validate(
            r#"{"sellerId":234567,"name":"X","price":99,
                "statistics":{"likes":1,"viewCount":2,"contacts":3}}"#,
        )
        .unwrap();
        assert_eq!(item.seller_id, 234567);
        assert_eq!(item.name, "X");
        assert_eq!(item.price, 99);
        assert_eq!(item.statistics.view_count, 2);
    }

    #[test]
    fn statistics_default_to_zero() {
        let item = validate(r#"{"sellerId":1,"name":"X","price":0}"#).unwrap();
        assert_eq!(item.statistics, Statistics::default());
    }

    #[test]
    fn missing_seller_id_is_required() {
        let err = validate(r#"{"name":"X","price":1}"#).unwrap_err();
        assert!(err.contains("обязательно"), "{err}");
        assert!(err.contains("sellerId"), "{err}");
    }

    #[test]
    fn empty_object_is_rejected() {
        assert!(validate("{}").is_err());
    }

    #[test]
    fn non_object_body_is_rejected() {
        assert!(validate("[]").is_err());
        assert!(validate("not json").is_err());
    }

    #[test]
    fn wrong_types_are_rejected() {
        assert!(validate(r#"{"sellerId":"abc","name":"X","price":1}"#).is_err());
        assert!(validate(r#"{"sellerId":1,"name":123,"price":1}"#).is_err());
        assert!(validate(r#"{"sellerId":1,"name":true,"price":1}"#).is_err());
        assert!(validate(r#"{"sellerId":1,"name":"X","price":"1"}"#).is_err());
        assert!(validate(r#"{"sellerId":1.5,"name":"X","price":1}"#).is_err());
    }

    #[test]
    fn negative_price_is_rejected() {
        let err = validate(r#"{"sellerId":1,"name":"X","price":-100}"#).unwrap_err();
        assert!(err.contains("price"), "{err}");
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = validate(r#"{"sellerId":1,"name":"X","price":1,"color":"red"}"#).unwrap_err();
        assert!(err.contains("color"), "{err}");
        assert!(validate(r#"{"sellerId":1,"name":"X","price":1,"statistics":{"shares":1}}"#).is_err());
    }

    #[test]
    fn negative_counter_is_rejected() {
        assert!(validate(r#"{"sellerId":1,"name":"X","price":1,"statistics":{"likes":-1}}"#).is_err());
    }
}
