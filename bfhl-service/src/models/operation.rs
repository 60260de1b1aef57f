use crate::error::BfhlError;
use crate::services::math::Numeric;
use serde::Serialize;
use serde_json::{Map, Value};

pub const FIBONACCI_KEY: &str = "fibonacci";
pub const PRIME_KEY: &str = "prime";
pub const LCM_KEY: &str = "lcm";
pub const HCF_KEY: &str = "hcf";
pub const AI_KEY: &str = "AI";

/// A validated `/bfhl` request, selected by its single dispatch key.
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    Fibonacci(usize),
    /// Integer elements only; anything else in the input array is dropped.
    Prime(Vec<i64>),
    Lcm(Vec<i64>),
    Hcf(Vec<i64>),
    Ai(String),
}

/// Result payload placed in the envelope's `data` field.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum OperationOutput {
    Terms(Vec<Numeric>),
    Integers(Vec<i64>),
    Integer(i64),
    Number(Numeric),
    Text(String),
}

impl Operation {
    /// Validate the whole request body.
    ///
    /// Anything but a JSON object counts as having no keys.
    pub fn from_body(body: Value) -> Result<Self, BfhlError> {
        let map = match body {
            Value::Object(map) => map,
            _ => Map::new(),
        };

        if map.len() != 1 {
            return Err(BfhlError::KeyCount);
        }

        let Some((key, value)) = map.into_iter().next() else {
            return Err(BfhlError::KeyCount);
        };

        Self::from_entry(&key, value)
    }

    /// Validate one dispatch key and its value.
    pub fn from_entry(key: &str, value: Value) -> Result<Self, BfhlError> {
        match key {
            FIBONACCI_KEY => as_integer(&value)
                .and_then(|n| usize::try_from(n).ok())
                .map(Operation::Fibonacci)
                .ok_or(BfhlError::InvalidInput("Invalid fibonacci input")),
            PRIME_KEY => match value {
                Value::Array(items) => Ok(Operation::Prime(
                    items.iter().filter_map(as_integer).collect(),
                )),
                _ => Err(BfhlError::InvalidInput("Invalid prime input")),
            },
            LCM_KEY => integer_list(value)
                .map(Operation::Lcm)
                .ok_or(BfhlError::InvalidInput("Invalid lcm input")),
            HCF_KEY => integer_list(value)
                .map(Operation::Hcf)
                .ok_or(BfhlError::InvalidInput("Invalid hcf input")),
            AI_KEY => match value {
                Value::String(prompt) => Ok(Operation::Ai(prompt)),
                _ => Err(BfhlError::InvalidInput("Invalid AI input")),
            },
            _ => Err(BfhlError::InvalidKey),
        }
    }

    /// Dispatch key this operation was parsed from.
    pub fn key(&self) -> &'static str {
        match self {
            Operation::Fibonacci(_) => FIBONACCI_KEY,
            Operation::Prime(_) => PRIME_KEY,
            Operation::Lcm(_) => LCM_KEY,
            Operation::Hcf(_) => HCF_KEY,
            Operation::Ai(_) => AI_KEY,
        }
    }
}

/// A JSON number with no fractional part that fits in an `i64`.
/// `5` and `5.0` qualify, `5.5` and `"5"` do not.
pub fn as_integer(value: &Value) -> Option<i64> {
    let Value::Number(number) = value else {
        return None;
    };
    if let Some(n) = number.as_i64() {
        return Some(n);
    }
    if number.is_u64() {
        return None;
    }
    let f = number.as_f64()?;
    // 2^63 is exactly representable; anything at or above it does not fit.
    if f.fract() == 0.0 && f >= -9_223_372_036_854_775_808.0 && f < 9_223_372_036_854_775_808.0 {
        Some(f as i64)
    } else {
        None
    }
}

/// Non-empty array made only of integers.
fn integer_list(value: Value) -> Option<Vec<i64>> {
    let Value::Array(items) = value else {
        return None;
    };
    if items.is_empty() {
        return None;
    }
    items.iter().map(as_integer).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(body: Value) -> Result<Operation, BfhlError> {
        Operation::from_body(body)
    }

    #[test]
    fn test_key_count() {
        assert!(matches!(parse(json!({})), Err(BfhlError::KeyCount)));
        assert!(matches!(parse(json!({"a": 1, "b": 2})), Err(BfhlError::KeyCount)));
        assert!(matches!(parse(json!([1, 2])), Err(BfhlError::KeyCount)));
        assert!(matches!(parse(json!("fibonacci")), Err(BfhlError::KeyCount)));
    }

    #[test]
    fn test_unknown_key() {
        assert!(matches!(parse(json!({"unknown": 1})), Err(BfhlError::InvalidKey)));
        // keys are case sensitive
        assert!(matches!(parse(json!({"ai": "hi"})), Err(BfhlError::InvalidKey)));
    }

    #[test]
    fn test_fibonacci_input() {
        assert_eq!(parse(json!({"fibonacci": 5})).unwrap(), Operation::Fibonacci(5));
        assert_eq!(parse(json!({"fibonacci": 3.0})).unwrap(), Operation::Fibonacci(3));
        for bad in [json!(-1), json!(2.5), json!("5"), json!(null), json!([5])] {
            let err = parse(json!({ "fibonacci": bad })).unwrap_err();
            assert_eq!(err.to_string(), "Invalid fibonacci input");
        }
    }

    #[test]
    fn test_prime_drops_non_integers() {
        let op = parse(json!({"prime": [2, "3", 5.0, 7.5, null, -3, 11]})).unwrap();
        assert_eq!(op, Operation::Prime(vec![2, 5, -3, 11]));
        assert_eq!(parse(json!({"prime": []})).unwrap(), Operation::Prime(vec![]));

        let err = parse(json!({"prime": 7})).unwrap_err();
        assert_eq!(err.to_string(), "Invalid prime input");
    }

    #[test]
    fn test_lcm_and_hcf_input() {
        assert_eq!(parse(json!({"lcm": [4, 6, 8]})).unwrap(), Operation::Lcm(vec![4, 6, 8]));
        assert_eq!(parse(json!({"hcf": [12, 18]})).unwrap(), Operation::Hcf(vec![12, 18]));

        for bad in [json!([]), json!(4), json!([4, "6"]), json!([1.5])] {
            assert_eq!(
                parse(json!({ "lcm": bad.clone() })).unwrap_err().to_string(),
                "Invalid lcm input"
            );
            assert_eq!(
                parse(json!({ "hcf": bad })).unwrap_err().to_string(),
                "Invalid hcf input"
            );
        }
    }

    #[test]
    fn test_ai_input() {
        assert_eq!(
            parse(json!({"AI": "What is the capital of France?"})).unwrap(),
            Operation::Ai("What is the capital of France?".to_string())
        );
        let err = parse(json!({"AI": 42})).unwrap_err();
        assert_eq!(err.to_string(), "Invalid AI input");
    }

    #[test]
    fn test_as_integer() {
        assert_eq!(as_integer(&json!(7)), Some(7));
        assert_eq!(as_integer(&json!(-7)), Some(-7));
        assert_eq!(as_integer(&json!(7.0)), Some(7));
        assert_eq!(as_integer(&json!(7.1)), None);
        assert_eq!(as_integer(&json!(u64::MAX)), None);
        assert_eq!(as_integer(&json!(1e300)), None);
        assert_eq!(as_integer(&json!(true)), None);
    }

    #[test]
    fn test_output_serializes_untagged() {
        assert_eq!(serde_json::to_value(OperationOutput::Integer(24)).unwrap(), json!(24));
        assert_eq!(
            serde_json::to_value(OperationOutput::Terms(vec![
                Numeric::Unsigned(0),
                Numeric::Unsigned(1),
                Numeric::Float(1.5e20),
            ]))
            .unwrap(),
            json!([0, 1, 1.5e20])
        );
        assert_eq!(
            serde_json::to_value(OperationOutput::Number(Numeric::Float(f64::INFINITY))).unwrap(),
            Value::Null
        );
        assert_eq!(
            serde_json::to_value(OperationOutput::Text("Paris".to_string())).unwrap(),
            json!("Paris")
        );
    }
}
