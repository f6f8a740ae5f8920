/// Overtime beyond the standard day. Never negative: a short day is 0, not a deficit.
pub fn compute_overtime(worked_hours: f64, standard_hours_per_day: f64) -> f64 {
    (worked_hours - standard_hours_per_day).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overtime_only_above_standard() {
        assert_eq!(compute_overtime(9.0, 8.0), 1.0);
        assert_eq!(compute_overtime(6.0, 8.0), 0.0);
        assert_eq!(compute_overtime(8.0, 8.0), 0.0);
        assert_eq!(compute_overtime(10.5, 7.5), 3.0);
        assert_eq!(compute_overtime(-3.0, 8.0), 0.0);
    }
}
