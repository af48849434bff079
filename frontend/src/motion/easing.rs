/// Quartic ease-out: fast start, slow finish. `p` is clamped to `[0, 1]`.
pub fn ease_out_quart(p: f64) -> f64 {
    let p = p.clamp(0.0, 1.0);
    1.0 - (1.0 - p).powi(4)
}

/// Fraction of `duration_ms` covered by `elapsed_ms`, clamped to `[0, 1]`.
pub fn progress(elapsed_ms: f64, duration_ms: u32) -> f64 {
    if duration_ms == 0 {
        return 1.0;
    }
    (elapsed_ms.max(0.0) / f64::from(duration_ms)).min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_exact() {
        assert_eq!(ease_out_quart(0.0), 0.0);
        assert_eq!(ease_out_quart(1.0), 1.0);
    }

    #[test]
    fn halfway_is_fifteen_sixteenths() {
        assert_eq!(ease_out_quart(0.5), 0.9375);
    }

    #[test]
    fn out_of_range_input_is_clamped() {
        assert_eq!(ease_out_quart(-3.0), 0.0);
        assert_eq!(ease_out_quart(7.5), 1.0);
    }

    #[test]
    fn progress_clamps_both_ends() {
        assert_eq!(progress(-10.0, 2500), 0.0);
        assert_eq!(progress(1250.0, 2500), 0.5);
        assert_eq!(progress(9000.0, 2500), 1.0);
        assert_eq!(progress(5.0, 0), 1.0);
    }
}
