use crate::collision::Contact;
use crate::dynamics::{Body, WorldConfig};

/// Resolve one disc pair with the default configuration.
#[inline]
pub fn resolve(a: &mut Body, b: &mut Body) -> Option<Contact> {
    resolve_with_config(a, b, &WorldConfig::default())
}

/// Impulse response plus mass-weighted overlap correction for two discs.
///
/// Returns `None`, leaving both bodies untouched, when the discs do not
/// overlap, when their centres coincide exactly (no usable normal), or when
/// they are already separating along the normal.
pub fn resolve_with_config(a: &mut Body, b: &mut Body, config: &WorldConfig) -> Option<Contact> {
    let delta = b.position - a.position;
    let dist = delta.length();
    let min_dist = a.radius() + b.radius();

    if dist == 0.0 || dist >= min_dist {
        return None;
    }

    let normal = delta * (1.0 / dist);

    let rv = b.velocity - a.velocity;
    let vel_along_normal = rv.dot(normal);
    if vel_along_normal > 0.0 {
        return None;
    }

    // The pair is as bouncy as its least bouncy member.
    let elasticity = a.restitution.min(b.restitution);

    let (ma, mb) = (a.mass(), b.mass());
    let impulse = -(1.0 + elasticity) * vel_along_normal / (1.0 / ma + 1.0 / mb);

    let overlap = min_dist - dist;
    let contact = Contact {
        position: a.position + normal * a.radius(),
        normal,
        overlap,
        impulse,
    };

    a.velocity = a.velocity - (impulse / ma) * normal;
    b.velocity = b.velocity + (impulse / mb) * normal;

    if config.position_correction {
        // Heavier body moves less.
        let correction = overlap / (ma + mb);
        a.position = a.position - (correction * mb) * normal;
        b.position = b.position + (correction * ma) * normal;
    }

    Some(contact)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dynamics::BodyDef;
    use crate::math::Vec2;
    use approx::assert_relative_eq;

    fn disc(position: Vec2, velocity: Vec2, radius: f32, restitution: f32) -> Body {
        Body::from_def(BodyDef {
            position,
            velocity,
            radius,
            restitution,
            ..Default::default()
        })
        .unwrap()
    }

    fn assert_unchanged(before: &Body, after: &Body) {
        assert_eq!(before.position, after.position);
        assert_eq!(before.velocity, after.velocity);
    }

    #[test]
    fn overlapping_pair_is_pushed_apart() {
        let mut a = disc(Vec2::new(0.0, 0.0), Vec2::new(5.0, 0.0), 10.0, 1.0);
        let mut b = disc(Vec2::new(19.0, 0.0), Vec2::ZERO, 10.0, 1.0);

        let contact = resolve(&mut a, &mut b).expect("discs overlap");

        assert_relative_eq!(contact.overlap, 1.0, epsilon = 1e-6);
        assert_relative_eq!(contact.normal.x, 1.0);
        assert_relative_eq!(contact.normal.y, 0.0);
        assert_relative_eq!(contact.position.x, 10.0);

        // Equal masses, fully elastic: a stops, b takes its velocity.
        assert_relative_eq!(a.velocity.x, 0.0, epsilon = 1e-4);
        assert_relative_eq!(b.velocity.x, 5.0, epsilon = 1e-4);
        assert!((b.velocity - a.velocity).dot(contact.normal) > 0.0);

        // Overlap split evenly.
        assert_relative_eq!(a.position.x, -0.5, epsilon = 1e-5);
        assert_relative_eq!(b.position.x, 19.5, epsilon = 1e-5);
        assert!((b.position - a.position).length() > 19.0);
    }

    #[test]
    fn head_on_equal_masses_swap_velocities() {
        let mut a = disc(Vec2::new(0.0, 0.0), Vec2::new(3.0, 0.0), 10.0, 1.0);
        let mut b = disc(Vec2::new(15.0, 0.0), Vec2::new(-2.0, 0.0), 10.0, 1.0);

        resolve(&mut a, &mut b).unwrap();

        assert_relative_eq!(a.velocity.x, -2.0, epsilon = 1e-4);
        assert_relative_eq!(b.velocity.x, 3.0, epsilon = 1e-4);
        assert_relative_eq!(a.velocity.y, 0.0);
        assert_relative_eq!(b.velocity.y, 0.0);
    }

    #[test]
    fn no_op_when_not_touching() {
        let a0 = disc(Vec2::new(0.0, 0.0), Vec2::new(5.0, 0.0), 10.0, 1.0);
        let b0 = disc(Vec2::new(20.0, 0.0), Vec2::new(-5.0, 0.0), 10.0, 1.0);
        let (mut a, mut b) = (a0, b0);

        // Exactly touching counts as not overlapping.
        assert!(resolve(&mut a, &mut b).is_none());
        assert_unchanged(&a0, &a);
        assert_unchanged(&b0, &b);
    }

    #[test]
    fn no_op_when_centres_coincide() {
        let a0 = disc(Vec2::new(7.0, 7.0), Vec2::new(1.0, 0.0), 5.0, 1.0);
        let b0 = disc(Vec2::new(7.0, 7.0), Vec2::new(-1.0, 0.0), 5.0, 1.0);
        let (mut a, mut b) = (a0, b0);

        assert!(resolve(&mut a, &mut b).is_none());
        assert_unchanged(&a0, &a);
        assert_unchanged(&b0, &b);
    }

    #[test]
    fn no_op_when_already_separating() {
        let a0 = disc(Vec2::new(0.0, 0.0), Vec2::new(-1.0, 0.0), 10.0, 1.0);
        let b0 = disc(Vec2::new(15.0, 0.0), Vec2::new(1.0, 0.0), 10.0, 1.0);
        let (mut a, mut b) = (a0, b0);

        // Overlapping but moving apart: no impulse and no positional push.
        assert!(resolve(&mut a, &mut b).is_none());
        assert_unchanged(&a0, &a);
        assert_unchanged(&b0, &b);
    }

    #[test]
    fn resting_overlap_still_gets_corrected() {
        let mut a = disc(Vec2::new(0.0, 0.0), Vec2::ZERO, 10.0, 1.0);
        let mut b = disc(Vec2::new(0.0, 12.0), Vec2::ZERO, 10.0, 1.0);

        let contact = resolve(&mut a, &mut b).unwrap();

        assert_relative_eq!(contact.impulse, 0.0);
        assert_eq!(a.velocity, Vec2::ZERO);
        assert_relative_eq!((b.position - a.position).length(), 20.0, epsilon = 1e-4);
    }

    #[test]
    fn momentum_is_conserved_for_unequal_masses() {
        let mut a = disc(Vec2::new(0.0, 0.0), Vec2::new(4.0, 1.0), 6.0, 0.8);
        let mut b = disc(Vec2::new(12.0, 5.0), Vec2::new(-3.0, -2.0), 9.0, 0.5);

        let before = a.momentum() + b.momentum();
        resolve(&mut a, &mut b).unwrap();
        let after = a.momentum() + b.momentum();

        assert_relative_eq!(before.x, after.x, epsilon = 1e-2, max_relative = 1e-5);
        assert_relative_eq!(before.y, after.y, epsilon = 1e-2, max_relative = 1e-5);
    }

    #[test]
    fn less_bouncy_member_sets_elasticity() {
        let mut a = disc(Vec2::new(0.0, 0.0), Vec2::new(2.0, 0.0), 10.0, 1.0);
        let mut b = disc(Vec2::new(18.0, 0.0), Vec2::new(-2.0, 0.0), 10.0, 0.0);

        resolve(&mut a, &mut b).unwrap();

        // Perfectly inelastic along the normal: relative normal velocity vanishes.
        assert_relative_eq!(b.velocity.x - a.velocity.x, 0.0, epsilon = 1e-4);
    }

    #[test]
    fn kinetic_energy_does_not_grow_for_sane_restitution() {
        let mut a = disc(Vec2::new(0.0, 0.0), Vec2::new(6.0, -2.0), 8.0, 0.9);
        let mut b = disc(Vec2::new(10.0, 4.0), Vec2::new(-1.0, 3.0), 5.0, 0.7);

        let before = a.kinetic_energy() + b.kinetic_energy();
        resolve(&mut a, &mut b).unwrap();
        let after = a.kinetic_energy() + b.kinetic_energy();

        assert!(after <= before * (1.0 + 1e-5), "{after} > {before}");
    }

    #[test]
    fn heavier_body_moves_less() {
        let mut small = disc(Vec2::new(0.0, 0.0), Vec2::ZERO, 5.0, 1.0);
        let mut big = disc(Vec2::new(20.0, 0.0), Vec2::ZERO, 20.0, 1.0);

        resolve(&mut small, &mut big).unwrap();

        let small_shift = small.position.x.abs();
        let big_shift = (big.position.x - 20.0).abs();
        assert!(small_shift > big_shift);
        assert_relative_eq!(small_shift + big_shift, 5.0, epsilon = 1e-4);
        assert_relative_eq!(small_shift / big_shift, 16.0, epsilon = 1e-2);
    }

    #[test]
    fn correction_never_shrinks_distance() {
        let mut a = disc(Vec2::new(3.0, 4.0), Vec2::new(1.0, 1.0), 7.0, 0.3);
        let mut b = disc(Vec2::new(9.0, 9.0), Vec2::new(-1.0, 0.0), 4.0, 0.9);

        let dist = (b.position - a.position).length();
        resolve(&mut a, &mut b).unwrap();
        let dist_after = (b.position - a.position).length();

        assert!(dist_after >= dist);
        assert_relative_eq!(dist_after, 11.0, epsilon = 1e-4);
    }

    #[test]
    fn position_correction_can_be_disabled() {
        let config = WorldConfig {
            position_correction: false,
            ..WorldConfig::default()
        };
        let mut a = disc(Vec2::new(0.0, 0.0), Vec2::new(5.0, 0.0), 10.0, 1.0);
        let mut b = disc(Vec2::new(19.0, 0.0), Vec2::ZERO, 10.0, 1.0);

        resolve_with_config(&mut a, &mut b, &config).unwrap();

        assert_eq!(a.position, Vec2::new(0.0, 0.0));
        assert_eq!(b.position, Vec2::new(19.0, 0.0));
        assert_relative_eq!(b.velocity.x, 5.0, epsilon = 1e-4);
    }
}
