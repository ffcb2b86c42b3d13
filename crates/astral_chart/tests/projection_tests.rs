use approx::assert_abs_diff_eq;
use astral_chart::projection::project;
use astral_chart::{Point, PolarProjector};

const CENTER: Point = Point::new(200.0, 200.0);

#[test]
fn test_zero_rotation_matches_unrotated_formula() {
    for degree in [0.0, 45.0, 90.0, 181.5, 270.0, 359.0] {
        let r = 120.0;
        let p = project(CENTER, degree, r, 0.0);
        let theta = (degree - 90.0_f64).to_radians();
        assert_abs_diff_eq!(p.x, CENTER.x + r * theta.cos(), epsilon = 1e-9);
        assert_abs_diff_eq!(p.y, CENTER.y + r * theta.sin(), epsilon = 1e-9);
    }
}

#[test]
fn test_ascendant_lands_at_nine_o_clock() {
    let projector = PolarProjector::for_ascendant(CENTER, 100.0);
    assert_eq!(projector.rotation(), -170.0);
    assert_eq!(projector.rotated_degree(100.0), 270.0);

    let p = projector.project(100.0, 100.0);
    assert_abs_diff_eq!(p.x, CENTER.x - 100.0, epsilon = 1e-9);
    assert_abs_diff_eq!(p.y, CENTER.y, epsilon = 1e-9);
}

#[test]
fn test_descendant_opposite_ascendant() {
    let projector = PolarProjector::for_ascendant(CENTER, 100.0);
    let p = projector.project(280.0, 100.0);
    assert_abs_diff_eq!(p.x, CENTER.x + 100.0, epsilon = 1e-9);
    assert_abs_diff_eq!(p.y, CENTER.y, epsilon = 1e-9);
}

#[test]
fn test_equivalent_degrees_project_identically() {
    let projector = PolarProjector::for_ascendant(CENTER, 42.0);
    let a = projector.project(10.0, 80.0);
    let b = projector.project(370.0, 80.0);
    let c = projector.project(-350.0, 80.0);
    assert_abs_diff_eq!(a.x, b.x, epsilon = 1e-9);
    assert_abs_diff_eq!(a.y, b.y, epsilon = 1e-9);
    assert_abs_diff_eq!(a.x, c.x, epsilon = 1e-9);
    assert_abs_diff_eq!(a.y, c.y, epsilon = 1e-9);
}
