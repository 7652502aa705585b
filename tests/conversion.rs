use std::{
    collections::{BTreeMap, BTreeSet, HashMap},
    error::Error,
    num::ParseFloatError,
    sync::Arc,
    thread,
};

use floatconv::{
    Conv, ConvResult, ConversionError, Value, float, float_or_zero, float32, float64,
    value::{ComplexNumber, Float64Convertible, StructValue},
};

/// Reports its reading shifted by five.
#[derive(Debug)]
struct Offset(f64);

impl Float64Convertible for Offset {
    fn float64(&self) -> ConvResult<f64> {
        Ok(self.0 + 5.0)
    }
}

/// A capability that always refuses.
#[derive(Debug)]
struct Broken;

impl Float64Convertible for Broken {
    fn float64(&self) -> ConvResult<f64> {
        Err(ConversionError::custom("sensor offline"))
    }

    fn type_name(&self) -> &str {
        "Broken"
    }
}

/// A capability whose own conversion disagrees with what its payload would
/// give under the built-in rules.
#[derive(Debug)]
struct TextReading(&'static str);

impl Float64Convertible for TextReading {
    fn float64(&self) -> ConvResult<f64> {
        Ok(-1.0)
    }
}

fn assert_converts(value: &Value, expected_f32: f32, expected_f64: f64) {
    assert_eq!(float::<f32>(value), Ok(expected_f32), "f32 of {value}");
    assert_eq!(float::<f64>(value), Ok(expected_f64), "f64 of {value}");
}

fn assert_rejected(value: &Value, rendered: &str, type_name: &str) {
    for (target, err) in [("f32", float::<f32>(value).map(f64::from).unwrap_err()),
                          ("f64", float::<f64>(value).unwrap_err())]
    {
        assert_eq!(err.to_string(),
                   format!("cannot convert {rendered} (type {type_name}) to {target}"));
    }
}

#[test]
fn capability_takes_precedence() {
    assert_converts(&Value::custom(Offset(10.0)), 15.0, 15.0);
    let reading = TextReading("3.5");
    assert_eq!(float64(reading.0).unwrap(), 3.5);
    assert_converts(&Value::custom(reading), -1.0, -1.0);

    let shared: Arc<dyn Float64Convertible> = Arc::new(Offset(-5.0));
    assert_eq!(float64(shared).unwrap(), 0.0);
}

#[test]
fn capability_errors_pass_through_untouched() {
    let value = Value::custom(Broken);
    assert_eq!(float::<f32>(&value), Err(ConversionError::custom("sensor offline")));
    assert_eq!(float::<f64>(&value).unwrap_err().to_string(), "sensor offline");
    assert_eq!(value.type_name(), "Broken");
}

#[test]
fn capability_error_types_survive_as_source() {
    /// Parses its reading lazily and reports the parser's own error.
    #[derive(Debug)]
    struct Raw(&'static str);

    impl Float64Convertible for Raw {
        fn float64(&self) -> ConvResult<f64> {
            self.0.parse::<f64>().map_err(ConversionError::custom)
        }
    }

    assert_eq!(float64(Value::custom(Raw("2.5"))), Ok(2.5));

    let err = float32(Value::custom(Raw("2,5"))).unwrap_err();
    let expected = "2,5".parse::<f64>().unwrap_err();
    assert_eq!(err.to_string(), expected.to_string());
    assert_eq!(err.source().and_then(|e| e.downcast_ref::<ParseFloatError>()),
               Some(&expected));
}

#[test]
fn booleans_are_zero_and_one() {
    assert_converts(&Value::from(true), 1.0, 1.0);
    assert_converts(&Value::from(false), 0.0, 0.0);
}

#[test]
#[allow(clippy::cast_possible_truncation)]
fn signed_integers_of_every_width() {
    let cases = [(Value::from(-3_i8), -3.0),
                 (Value::from(i8::MIN), -128.0),
                 (Value::from(i16::MAX), 32767.0),
                 (Value::from(-40_000_i32), -40_000.0),
                 (Value::from(-1_i64), -1.0),
                 (Value::from(7_i128), 7.0),
                 (Value::from(-12_isize), -12.0)];

    for (value, expected) in cases {
        assert_converts(&value, expected as f32, expected);
    }
}

#[test]
#[allow(clippy::cast_possible_truncation)]
fn unsigned_integers_of_every_width() {
    let cases = [(Value::from(255_u8), 255.0),
                 (Value::from(u16::MAX), 65535.0),
                 (Value::from(4_000_000_000_u32), 4_000_000_000.0),
                 (Value::from(10_u64), 10.0),
                 (Value::from(3_u128), 3.0),
                 (Value::from(0_usize), 0.0)];

    for (value, expected) in cases {
        assert_converts(&value, expected as f32, expected);
    }
}

#[test]
fn wide_integers_round_to_nearest() {
    assert_eq!(float64(u64::MAX).unwrap(), 18_446_744_073_709_551_616.0);
    assert_eq!(float64(i64::MIN).unwrap(), -9_223_372_036_854_775_808.0);
    assert_eq!(float64(u128::MAX).unwrap(), 2.0_f64.powi(128));
    assert_eq!(float32(u128::MAX).unwrap(), f32::INFINITY);
}

#[test]
fn float_boundaries() {
    assert_converts(&Value::from(f64::MAX), f32::INFINITY, f64::MAX);
    assert_converts(&Value::from(-f64::MAX), f32::NEG_INFINITY, -f64::MAX);
    assert_converts(&Value::from(f32::MAX), f32::MAX, f64::from(f32::MAX));
    assert_converts(&Value::from(f32::MIN_POSITIVE),
                    f32::MIN_POSITIVE,
                    f64::from(f32::MIN_POSITIVE));
    assert_converts(&Value::from(f64::INFINITY), f32::INFINITY, f64::INFINITY);
    assert_eq!(float32(f64::MIN_POSITIVE).unwrap(), 0.0);
}

#[test]
fn nan_stays_nan() {
    assert!(float32(f64::NAN).unwrap().is_nan());
    assert!(float64(f32::NAN).unwrap().is_nan());
    assert!(float64("NaN").unwrap().is_nan());
}

#[test]
fn complex_numbers_yield_their_real_part() {
    assert_converts(&Value::from(ComplexNumber::new(1.5_f32, 2.0)), 1.5, 1.5);
    assert_converts(&Value::from(ComplexNumber::new(-4.25, 1e300)), -4.25, -4.25);
    assert_converts(&Value::from(ComplexNumber::new(0.0, 9.0)), 0.0, 0.0);
}

#[test]
fn strings_parse_as_numbers_or_boolean_words() {
    let cases = [("3.5", 3.5),
                 ("-2", -2.0),
                 ("1e3", 1000.0),
                 ("inf", f64::INFINITY),
                 ("1", 1.0),
                 ("t", 1.0),
                 ("T", 1.0),
                 ("TRUE", 1.0),
                 ("true", 1.0),
                 ("True", 1.0),
                 ("0", 0.0),
                 ("f", 0.0),
                 ("F", 0.0),
                 ("FALSE", 0.0),
                 ("false", 0.0),
                 ("False", 0.0)];

    for (text, expected) in cases {
        assert_eq!(float64(text), Ok(expected), "{text:?}");
    }
    assert_eq!(float64(String::from("0.25")).unwrap(), 0.25);
}

#[test]
fn strings_that_are_not_numbers_are_rejected() {
    for text in ["foo", "", " 1", "1 ", "yes", "tRUE", "0x10"] {
        assert_rejected(&Value::from(text), &format!("{text:?}"), "string");
    }
}

#[test]
fn containers_convert_to_their_length() {
    assert_converts(&Value::from(vec!["one", "two"]), 2.0, 2.0);
    assert_converts(&Value::from([1_u8, 2, 3]), 3.0, 3.0);
    assert_converts(&Value::List(Vec::new()), 0.0, 0.0);

    let map: HashMap<i64, &str> = [(1, "one"), (2, "two"), (3, "three")].into_iter().collect();
    assert_converts(&Value::from(map), 3.0, 3.0);

    let set: BTreeSet<&str> = ["a"].into_iter().collect();
    assert_converts(&Value::from(set), 1.0, 1.0);

    // Elements are never inspected.
    assert_converts(&Value::from(vec![Value::Nil, Value::from("foo")]), 2.0, 2.0);
}

#[test]
fn unsupported_values_are_rejected_with_uniform_messages() {
    assert_rejected(&Value::Nil, "<nil>", "<nil>");
    assert_rejected(&Value::from(None::<f64>), "<nil>", "<nil>");
    assert_rejected(&Value::from(StructValue::empty()), "struct {}{}", "struct {}");
    assert_rejected(&Value::from(StructValue::anonymous([("x", Value::from(1_i64))])),
                    "struct { x i64 }{x: 1}",
                    "struct { x i64 }");
    assert_rejected(&Value::from(StructValue::named("Point", [("x", Value::from(1.5))])),
                    "Point{x: 1.5}",
                    "Point");
}

#[test]
fn documented_scenarios() {
    assert_eq!(float64("3.5"), Ok(3.5));
    assert_eq!(float32(f64::MAX), Ok(f32::INFINITY));

    let result = float32(StructValue::empty());
    let err = result.clone().unwrap_err().to_string();
    assert!(err.contains("cannot convert struct {}{} (type struct {}) to"), "{err}");
    assert_eq!(result.unwrap_or_default(), 0.0);

    let result = float64(Value::Nil);
    let err = result.clone().unwrap_err().to_string();
    assert!(err.contains("cannot convert <nil> (type <nil>) to"), "{err}");
    assert_eq!(result.unwrap_or_default(), 0.0);
}

#[test]
fn errors_pair_with_zero() {
    let (n, err) = float_or_zero::<f32>(&Value::from("foo"));
    assert_eq!(n, 0.0);
    assert_eq!(err, Some(ConversionError::unsupported(&Value::from("foo"), "f32")));

    let (n, err) = float_or_zero::<f64>(&Value::from(vec![1]));
    assert_eq!((n, err), (1.0, None));
}

#[test]
fn converter_object_matches_free_functions() {
    let conv = Conv::new();
    let inputs = [Value::Nil,
                  Value::from(true),
                  Value::from(-3_i8),
                  Value::from(u64::MAX),
                  Value::from(f64::MAX),
                  Value::from(ComplexNumber::new(1.0, 2.0)),
                  Value::from("3.5"),
                  Value::from("foo"),
                  Value::from(vec!["one", "two"]),
                  Value::from(StructValue::empty()),
                  Value::custom(Offset(1.0)),
                  Value::custom(Broken)];

    for value in inputs {
        assert_eq!(conv.float32(&value), float32(&value), "{value}");
        assert_eq!(conv.float64(&value), float64(&value), "{value}");
        assert_eq!(conv.float::<f32>(&value), float::<f32>(&value), "{value}");
    }
}

#[test]
fn converting_a_result_again_is_identity() {
    for value in [Value::from("0.1"), Value::from(u64::MAX), Value::from(f64::MAX)] {
        let once = float32(&value).unwrap();
        assert_eq!(float32(once), Ok(once));

        let once = float64(&value).unwrap();
        assert_eq!(float64(once), Ok(once));
    }
}

#[test]
fn conversions_agree_across_threads() {
    let mut map = BTreeMap::new();
    map.insert(Value::from("k"), Value::from(1_u8));
    let inputs = vec![Value::from(42_i32),
                      Value::from("2.5"),
                      Value::from(map),
                      Value::custom(Offset(0.5)),
                      Value::Nil];
    let expected: Vec<_> = inputs.iter().map(float::<f64>).collect();

    thread::scope(|scope| {
        let handles: Vec<_> = (0..4).map(|_| {
                                        scope.spawn(|| {
                                                 inputs.iter()
                                                       .map(float::<f64>)
                                                       .collect::<Vec<_>>()
                                             })
                                    })
                                    .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
