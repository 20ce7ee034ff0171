use crate::domain::model::SamjaeInfo;

/// Zodiac indexes (year % 12) that sit in the Samjae window for the 2026
/// anchor year: 돼지(3), 토끼(7), 양(11).
const SAMJAE_INDEXES: [i32; 3] = [3, 7, 11];

const STATUS_IN: &str = "눌삼재 (Middle Samjae)";
const PERIOD_IN: &str = "2025년 ~ 2027년";
const YEAR_TH_IN: &str = "2년차";

const STATUS_OUT: &str = "해당 없음";
const NOT_APPLICABLE: &str = "-";

/// Classifies a birth year against the fixed 2026 (병오년) Samjae window.
///
/// The anchor year is deliberately hard-coded: the labels describe the 2026
/// target year, not whatever year the program happens to run in. Only the
/// middle position of the three-year window is modeled.
pub fn classify(year: i32) -> SamjaeInfo {
    let zodiac_idx = year.rem_euclid(12);
    if SAMJAE_INDEXES.contains(&zodiac_idx) {
        SamjaeInfo {
            is_samjae: true,
            status: STATUS_IN,
            period: PERIOD_IN,
            year_th: YEAR_TH_IN,
        }
    } else {
        SamjaeInfo {
            is_samjae: false,
            status: STATUS_OUT,
            period: NOT_APPLICABLE,
            year_th: NOT_APPLICABLE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_1999_is_middle_samjae() {
        let info = classify(1999);
        assert!(info.is_samjae);
        assert_eq!(info.status, "눌삼재 (Middle Samjae)");
        assert_eq!(info.period, "2025년 ~ 2027년");
        assert_eq!(info.year_th, "2년차");
    }

    #[test]
    fn test_2000_is_not_samjae() {
        let info = classify(2000);
        assert!(!info.is_samjae);
        assert_eq!(info.status, "해당 없음");
        assert_eq!(info.period, "-");
        assert_eq!(info.year_th, "-");
    }

    #[test]
    fn test_periodicity() {
        for year in 1940..=2030 {
            assert_eq!(classify(year).is_samjae, classify(year + 12).is_samjae);
        }
    }

    #[test]
    fn test_exactly_three_of_twelve() {
        for start in [1940, 1951, 1999, 2014] {
            let hits = (start..start + 12)
                .filter(|&y| classify(y).is_samjae)
                .count();
            assert_eq!(hits, 3);
        }
    }

    #[test]
    fn test_negative_years() {
        // -9 % 12 == 3 under euclidean modulo
        assert!(classify(-9).is_samjae);
        assert_eq!(classify(-9).is_samjae, classify(3).is_samjae);
    }
}
