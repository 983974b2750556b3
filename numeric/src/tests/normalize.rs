use crate::evaluator::normalize;
use crate::solution::Solution;
use crate::units::{scale, Unit, UnitSystem, UnitTable};

fn imperial(magnitude: f64, unit_scale: f64) -> Solution {
    Solution::new(magnitude * unit_scale, Unit::new(unit_scale, UnitSystem::Imperial))
}

fn metric(magnitude: f64, unit_scale: f64) -> Solution {
    Solution::new(magnitude * unit_scale, Unit::new(unit_scale, UnitSystem::Metric))
}

#[test]
fn test_metric_rescaling() {
    use scale::metric::*;
    let table = UnitTable::for_system(UnitSystem::Metric);

    let cases = vec![
        (metric(1500.0, METRE), KILOMETRE),
        (metric(1_500_000.0, METRE), MEGAMETRE),
        (metric(2500.0, MILLIMETRE), METRE),
        (metric(0.5, METRE), MILLIMETRE),
        (metric(0.0005, KILOMETRE), MILLIMETRE),
        (metric(0.5, MEGAMETRE), KILOMETRE),
        (metric(250.0, CENTIMETRE), METRE),
        (metric(50.0, CENTIMETRE), MILLIMETRE),
        (metric(12.0, METRE), METRE),
        (metric(-1500.0, METRE), KILOMETRE),
    ];

    for (solution, expected) in cases {
        let normalized = normalize(solution, &table);
        assert_eq!(normalized.units.scale, expected, "{:?}", solution);
        assert_eq!(normalized.value, solution.value);
    }
}

#[test]
fn test_imperial_rescaling() {
    use scale::imperial::*;
    let table = UnitTable::for_system(UnitSystem::Imperial);

    let cases = vec![
        (imperial(1500.0, THOU), INCH),
        (imperial(500.0, THOU), THOU),
        (imperial(73.0, INCH), FOOT),
        (imperial(24.0, INCH), FOOT),
        (imperial(18.0, INCH), INCH),
        (imperial(72.0, INCH), FOOT),
        (imperial(2.0, YARD), FOOT),
        (imperial(10560.0, FOOT), MILE),
        (imperial(5281.0, FOOT), FOOT),
        (imperial(-24.0, INCH), FOOT),
    ];

    for (solution, expected) in cases {
        let normalized = normalize(solution, &table);
        assert_eq!(normalized.units.scale, expected, "{:?}", solution);
        assert_eq!(normalized.value, solution.value);
    }
}

#[test]
fn test_zero_takes_default_unit() {
    let table = UnitTable::for_system(UnitSystem::Imperial);
    let normalized = normalize(imperial(0.0, scale::imperial::INCH), &table);
    assert_eq!(normalized.units, table.default_unit());

    let table = UnitTable::for_system(UnitSystem::Metric);
    let normalized = normalize(metric(0.0, scale::metric::KILOMETRE), &table);
    assert_eq!(normalized.units, Unit::base(UnitSystem::Metric));
}

#[test]
fn test_generic_is_untouched() {
    let table = UnitTable::for_system(UnitSystem::Generic);
    let solution = Solution::new(1_000_000.0, Unit::GENERIC);
    assert_eq!(normalize(solution, &table), solution);
}

#[test]
fn test_normalize_is_idempotent() {
    let table = UnitTable::for_system(UnitSystem::Imperial);
    for solution in [
        imperial(73.0, scale::imperial::INCH),
        imperial(3.0, scale::imperial::YARD),
        imperial(1500.0, scale::imperial::THOU),
    ] {
        let once = normalize(solution, &table);
        assert_eq!(normalize(once, &table), once);
    }
}
