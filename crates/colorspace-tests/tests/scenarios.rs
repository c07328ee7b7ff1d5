//! Exact conversion scenarios
//!
//! Literal expected outputs, both inline and from `data/scenarios.json`.

use colorspace_core::{Color, ColorSpace, ColorSpaceConverter, Error};
use colorspace_tests::fixtures::default_scenarios_path;
use colorspace_tests::{init_logging, load_scenarios};

fn color(space: &str, values: &[i64]) -> anyhow::Result<Color> {
    Ok(Color::new(space.parse()?, values)?)
}

#[test]
fn test_literal_scenarios() -> anyhow::Result<()> {
    init_logging();
    let converter = ColorSpaceConverter::new();

    let cases: [((&str, [i64; 3]), (&str, [i64; 3])); 7] = [
        (("RGB", [0, 0, 0]), ("HSV", [0, 0, 0])),
        (("RGB", [0, 100, 0]), ("HSV", [60, 255, 100])),
        (("RGB", [91, 71, 123]), ("HSV", [132, 108, 123])),
        (("HSV", [0, 0, 0]), ("RGB", [0, 0, 0])),
        (("HSV", [40, 108, 123]), ("RGB", [106, 123, 71])),
        (("RGB", [0, 0, 0]), ("LAB", [0, 128, 128])),
        (("RGB", [91, 71, 123]), ("LAB", [159, 142, 109])),
    ];

    for ((from, input), (to, expected)) in cases {
        let input = color(from, &input)?;
        let expected = color(to, &expected)?;
        let output = converter.convert(&input, expected.space())?;
        assert_eq!(output, expected, "{} -> {}", input, to);
    }

    Ok(())
}

#[test]
fn test_fixture_conversions() -> anyhow::Result<()> {
    init_logging();
    let scenarios = load_scenarios(default_scenarios_path())?;
    let converter = ColorSpaceConverter::new();

    for case in &scenarios.conversions {
        let result = converter.convert(&case.input, case.target);
        match case.expected {
            Some(expected) => {
                assert_eq!(result?, expected, "{} -> {}", case.input, case.target);
            }
            None => {
                assert_eq!(
                    result,
                    Err(Error::InvalidConversion {
                        from: case.input.space(),
                        to: case.target,
                    }),
                    "{} -> {} should be rejected",
                    case.input,
                    case.target
                );
            }
        }
    }

    Ok(())
}

#[test]
fn test_fixture_invalid_colors() -> anyhow::Result<()> {
    let scenarios = load_scenarios(default_scenarios_path())?;

    for raw in &scenarios.invalid_colors {
        let parsed = serde_json::from_value::<Color>(raw.clone());
        assert!(parsed.is_err(), "{} should not parse", raw);
    }

    Ok(())
}

#[test]
fn test_fixture_invalid_spaces() -> anyhow::Result<()> {
    let scenarios = load_scenarios(default_scenarios_path())?;

    for name in &scenarios.invalid_spaces {
        assert_eq!(
            name.parse::<ColorSpace>(),
            Err(Error::InvalidColorSpace(name.clone()))
        );
    }

    Ok(())
}

#[test]
fn test_string_forms() -> anyhow::Result<()> {
    assert_eq!(ColorSpace::default().to_string(), "RGB");
    assert_eq!(Color::default().to_string(), "RGB [0, 0, 0]");
    assert_eq!(Color::black("HSV".parse()?).to_string(), "HSV [0, 0, 0]");
    assert_eq!(Color::black("LAB".parse()?).to_string(), "LAB [0, 0, 0]");
    assert_eq!(color("RGB", &[123, 45, 67])?.to_string(), "RGB [123, 45, 67]");
    Ok(())
}
