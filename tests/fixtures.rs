use std::{fmt::Debug, fs};

use floatconv::{Conv, ConvResult, float, float32, float64, literal::parse_value};
use walkdir::WalkDir;

/// Runs every line of every `tests/fixtures/*.conv` file.
///
/// A fixture line reads `<literal> => <f32> | <f64>`, where each expected
/// result is either a float in `{:?}` form or `error: <message>`. Blank lines
/// and lines starting with `//` are skipped. Each line is converted through
/// every calling style, the `Conv` methods and the free functions alike, and
/// all of them must produce the recorded result.
#[test]
fn fixture_files_convert_as_recorded() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/fixtures").into_iter()
                                      .filter_map(Result::ok)
                                      .filter(|e| e.path().extension().is_some_and(|ext| ext == "conv"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with("//") {
                continue;
            }
            count += 1;

            let (literal, expected) =
                line.split_once(" => ")
                    .unwrap_or_else(|| panic!("{path:?}:{}: missing ' => '", i + 1));
            let (expected32, expected64) =
                expected.split_once(" | ")
                        .unwrap_or_else(|| panic!("{path:?}:{}: missing ' | '", i + 1));

            let value = parse_value(literal).unwrap_or_else(|e| {
                                                panic!("{path:?}:{}: bad literal {literal}: {e}",
                                                       i + 1)
                                            });

            let conv = Conv::new();
            let results32 = [float::<f32>(&value), conv.float::<f32>(&value), conv.float32(&value),
                             float32(&value)];
            let results64 = [float::<f64>(&value), conv.float64(&value), float64(&value)];

            for result in results32 {
                assert_eq!(outcome(result), expected32, "{path:?}:{} f32 of {literal}", i + 1);
            }
            for result in results64 {
                assert_eq!(outcome(result), expected64, "{path:?}:{} f64 of {literal}", i + 1);
            }
        }
    }

    assert!(count > 0, "No fixture lines found in tests/fixtures");
}

fn outcome<T: Debug>(result: ConvResult<T>) -> String {
    match result {
        Ok(n) => format!("{n:?}"),
        Err(e) => format!("error: {e}"),
    }
}
