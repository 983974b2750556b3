use numeric::{Compiler, CompilerConfig, UnitSystem};

fn display(system: UnitSystem, input: &str) -> String {
    let mut compiler = Compiler::new();
    compiler.set_unit_out(system);
    let solution = compiler.eval(input, None).unwrap();
    compiler.format(&solution)
}

#[test]
fn test_imperial_display() {
    let cases = vec![
        ("3ft 6in", "3'6\""),
        ("-3.5ft", "-3'6\""),
        ("6\"", "6in"),
        ("1.125in", "1+1/8in"),
        ("0.5in", "1/2in"),
        ("18in", "18in"),
        ("24in", "2ft"),
        ("73in", "6'1\""),
        ("5280ft", "1mi"),
        ("3yd", "9ft"),
        ("1 thou", "1th"),
        ("1500 thou", "1+1/2in"),
        ("2", "2ft"),
        ("0", "0ft"),
        ("0.125ft", "1/8ft"),
        ("3ft 6in * 2", "7ft"),
        ("2 * 3ft 6in", "7ft"),
        ("3ft 6in / 2", "1'9\""),
        ("-3ft 6in", "-3'6\""),
        ("1mi - 1in", "5279'11\""),
        ("1mi - 1ft", "5279ft"),
    ];

    for (input, expected) in cases {
        assert_eq!(display(UnitSystem::Imperial, input), expected, "{}", input);
    }
}

#[test]
fn test_metric_display() {
    let cases = vec![
        ("1500m", "1.5km"),
        ("0.5m", "500mm"),
        ("250cm", "2.5m"),
        ("1500000m", "1.5Mm"),
        ("2km", "2km"),
        ("5mm", "5mm"),
        ("12in", "304.8mm"),
        ("0", "0m"),
        ("1 + 2", "3m"),
        ("1m - 20cm", "800mm"),
        ("1km - 1mm", "999.999m"),
    ];

    for (input, expected) in cases {
        assert_eq!(display(UnitSystem::Metric, input), expected, "{}", input);
    }
}

#[test]
fn test_generic_display() {
    assert_eq!(display(UnitSystem::Generic, "7/2"), "3.5");
    assert_eq!(display(UnitSystem::Generic, "0"), "0");
    assert_eq!(display(UnitSystem::Generic, "1/3"), "0.333333");
}

#[test]
fn test_decimal_fallback_without_fractions() {
    let config = CompilerConfig {
        imperial_fractions: false,
        ..CompilerConfig::new().with_unit_system(UnitSystem::Imperial)
    };
    let compiler = Compiler::with_config(config);

    let solution = compiler.eval("3ft 6in", None).unwrap();
    assert_eq!(compiler.format(&solution), "3.5ft");
}

#[test]
fn test_decimal_point_on_output() {
    let config = CompilerConfig {
        decimal_point: ',',
        ..CompilerConfig::new().with_unit_system(UnitSystem::Metric)
    };
    let compiler = Compiler::with_config(config);

    let solution = compiler.eval("1,5m", None).unwrap();
    assert_eq!(compiler.format(&solution), "1,5m");
}
