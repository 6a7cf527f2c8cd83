use chrono::{Days, Months, NaiveDate};
use rand::Rng;

mod inventory;

pub use inventory::{InventoryGenerator, NAME_PATTERNS};

/// Uniformly pick one entry of a non-empty reference table.
pub(crate) fn pick<'a, T, R>(values: &'a [T], rng: &mut R) -> &'a T
where
    R: Rng + ?Sized,
{
    let idx = rng.random_range(0..values.len());
    &values[idx]
}

/// Uniform date in `[start, end]`. Returns `start` when the range is empty.
pub(crate) fn date_between<R>(start: NaiveDate, end: NaiveDate, rng: &mut R) -> NaiveDate
where
    R: Rng + ?Sized,
{
    let span = (end - start).num_days();
    if span <= 0 {
        return start;
    }
    let offset = rng.random_range(0..=span) as u64;
    start.checked_add_days(Days::new(offset)).unwrap_or(end)
}

/// Integer price in `[min, max]` rounded up to the next thousand.
pub(crate) fn price_between<R>(min: u32, max: u32, rng: &mut R) -> u32
where
    R: Rng + ?Sized,
{
    let raw = rng.random_range(min..=max);
    raw.div_ceil(1_000) * 1_000
}

/// First day of the release window ending at `today`.
pub(crate) fn window_start(today: NaiveDate) -> NaiveDate {
    today.checked_sub_months(Months::new(36)).unwrap_or(today)
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
    }

    #[test]
    fn date_between_stays_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let start = date(2023, 1, 1);
        let end = date(2023, 2, 1);
        for _ in 0..500 {
            let value = date_between(start, end, &mut rng);
            assert!(value >= start && value <= end);
        }
    }

    #[test]
    fn date_between_collapses_empty_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let day = date(2024, 5, 5);
        assert_eq!(date_between(day, day, &mut rng), day);
        assert_eq!(date_between(day, date(2024, 5, 1), &mut rng), day);
    }

    #[test]
    fn prices_round_up_to_thousands() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        for _ in 0..500 {
            let price = price_between(3_000, 30_000, &mut rng);
            assert_eq!(price % 1_000, 0);
            assert!((3_000..=30_000).contains(&price));
        }
    }

    #[test]
    fn window_spans_three_years() {
        assert_eq!(window_start(date(2026, 10, 18)), date(2023, 10, 18));
    }
}
