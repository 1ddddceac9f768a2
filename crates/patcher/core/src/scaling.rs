//! Magnitude scaling used by the intensity stage.
//!
//! Damage modifiers are multipliers around a neutral `1.0`; resistances are
//! additive percentages around a neutral `0.0`. Both functions are pure.

/// Scales a damage multiplier by `scale`.
///
/// Increases scale their excess over `1.0` linearly. Decreases are reflected
/// through the reciprocal so that `0.5` scales the same way as `2.0`.
/// Non-positive magnitudes have no reciprocal reflection and are returned
/// unchanged.
pub fn adjust_damage_mod(magnitude: f32, scale: f32) -> f32 {
    if (magnitude - 1.0).abs() < f32::EPSILON || magnitude <= 0.0 {
        return magnitude;
    }
    if magnitude > 1.0 {
        return (magnitude - 1.0) * scale + 1.0;
    }
    1.0 / adjust_damage_mod(1.0 / magnitude, scale)
}

/// Scales a resistance or weakness magnitude linearly; zero stays zero.
pub fn adjust_magic_resist(magnitude: f32, scale: f32) -> f32 {
    if magnitude == 0.0 {
        return magnitude;
    }
    magnitude * scale
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn neutral_damage_mod_is_fixed_point() {
        for scale in [0.0, 0.5, 1.0, 2.0, 10.0] {
            assert_eq!(adjust_damage_mod(1.0, scale), 1.0);
        }
    }

    #[test]
    fn damage_increase_scales_excess() {
        assert_eq!(adjust_damage_mod(1.5, 2.0), 2.0);
        assert!(approx(adjust_damage_mod(1.25, 0.5), 1.125));
    }

    #[test]
    fn damage_decrease_reflects_through_reciprocal() {
        // 0.5 -> 1/0.5 = 2.0 -> (2-1)*2+1 = 3.0 -> 1/3
        assert!(approx(adjust_damage_mod(0.5, 2.0), 1.0 / 3.0));

        for m in [0.25_f32, 0.5, 0.8, 1.2, 2.0, 4.0] {
            for s in [0.5_f32, 1.5, 3.0] {
                let lhs = adjust_damage_mod(m, s);
                let rhs = 1.0 / adjust_damage_mod(1.0 / m, s);
                assert!(approx(lhs, rhs), "m={m} s={s}: {lhs} != {rhs}");
            }
        }
    }

    #[test]
    fn unit_scale_is_identity() {
        for m in [0.25_f32, 0.5, 1.0, 1.5, 3.0] {
            assert!(approx(adjust_damage_mod(m, 1.0), m));
        }
    }

    #[test]
    fn non_positive_damage_mod_is_untouched() {
        assert_eq!(adjust_damage_mod(0.0, 2.0), 0.0);
        assert_eq!(adjust_damage_mod(-2.0, 2.0), -2.0);
    }

    #[test]
    fn magic_resist_scales_linearly() {
        assert_eq!(adjust_magic_resist(0.0, 3.0), 0.0);
        assert_eq!(adjust_magic_resist(0.5, 0.5), 0.25);
        assert_eq!(adjust_magic_resist(-50.0, 1.5), -75.0);
    }
}
