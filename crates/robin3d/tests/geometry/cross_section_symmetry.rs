use approx::assert_relative_eq;
use robin3d::na::RealField;
use robin3d::shape::{CrossSection, RobinBody};

type Real = f32;

#[test]
fn radius_is_periodic_and_even_symmetric() {
    let pi = Real::pi();
    let section = RobinBody::Fuselage.cross_section(1.0).unwrap();
    let mut rng = oorandom::Rand32::new(0xb0b);

    for _ in 0..100 {
        let theta = rng.rand_float() * Real::two_pi();
        let r = section.radius(theta);

        assert!(r > 0.0);
        assert_relative_eq!(r, section.radius(-theta), max_relative = 1.0e-4);
        assert_relative_eq!(r, section.radius(pi - theta), max_relative = 1.0e-4);
        assert_relative_eq!(
            r,
            section.radius(theta + Real::two_pi()),
            max_relative = 1.0e-4
        );
    }
}

#[test]
fn degenerate_half_axes_keep_the_radius_finite() {
    let tip = CrossSection::new(0.0, 0.0, 0.0, 2.0);
    for i in 0..8 {
        let r = tip.radius(Real::two_pi() * (i as Real) / 8.0);
        assert!(r.is_finite());
        assert_eq!(r, 0.0);
    }
}

#[test]
fn tip_sections_collapse_to_the_axis() {
    // Both half-axes vanish at the fuselage nose and tail.
    let nose = RobinBody::Fuselage.cross_section(0.0).unwrap();
    assert_eq!(nose.half_height, 0.0);
    assert_eq!(nose.half_width, 0.0);

    // The tail station sits on the clamp boundary of its section, so the
    // half-axes only vanish up to the rounding of the power terms.
    let tail = RobinBody::Fuselage.cross_section(2.0).unwrap();
    assert_relative_eq!(tail.half_height, 0.0, epsilon = 1.0e-3);
    assert_relative_eq!(tail.half_width, 0.0, epsilon = 1.0e-3);
}
