use serde::Serialize;
use std::fmt;

/// The twelve-animal zodiac cycle, anchored so that `year % 12 == 0` maps to
/// Monkey (e.g. 2016). Ordering matches the traditional Korean table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Zodiac {
    Monkey = 0,
    Rooster,
    Dog,
    Pig,
    Rat,
    Ox,
    Tiger,
    Rabbit,
    Dragon,
    Snake,
    Horse,
    Sheep,
}

const ZODIACS: [Zodiac; 12] = [
    Zodiac::Monkey,
    Zodiac::Rooster,
    Zodiac::Dog,
    Zodiac::Pig,
    Zodiac::Rat,
    Zodiac::Ox,
    Zodiac::Tiger,
    Zodiac::Rabbit,
    Zodiac::Dragon,
    Zodiac::Snake,
    Zodiac::Horse,
    Zodiac::Sheep,
];

impl Zodiac {
    /// Total over all integer years. rem_euclid keeps the index non-negative
    /// for years before the epoch.
    pub fn from_year(year: i32) -> Zodiac {
        ZODIACS[year.rem_euclid(12) as usize]
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn korean(self) -> &'static str {
        match self {
            Zodiac::Monkey => "원숭이",
            Zodiac::Rooster => "닭",
            Zodiac::Dog => "개",
            Zodiac::Pig => "돼지",
            Zodiac::Rat => "쥐",
            Zodiac::Ox => "소",
            Zodiac::Tiger => "범",
            Zodiac::Rabbit => "토끼",
            Zodiac::Dragon => "용",
            Zodiac::Snake => "뱀",
            Zodiac::Horse => "말",
            Zodiac::Sheep => "양",
        }
    }

    pub fn english(self) -> &'static str {
        match self {
            Zodiac::Monkey => "Monkey",
            Zodiac::Rooster => "Rooster",
            Zodiac::Dog => "Dog",
            Zodiac::Pig => "Pig",
            Zodiac::Rat => "Rat",
            Zodiac::Ox => "Ox",
            Zodiac::Tiger => "Tiger",
            Zodiac::Rabbit => "Rabbit",
            Zodiac::Dragon => "Dragon",
            Zodiac::Snake => "Snake",
            Zodiac::Horse => "Horse",
            Zodiac::Sheep => "Sheep",
        }
    }
}

impl fmt::Display for Zodiac {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.korean())
    }
}
