//! Chinese year cycle: animal, element and polarity of a birth year.
//!
//! The year boundary is approximated by Lichun on February 4; births before
//! it count toward the previous year. True lunisolar new-year dates are not
//! modelled.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChineseAnimal {
    Rat,
    Ox,
    Tiger,
    Rabbit,
    Dragon,
    Snake,
    Horse,
    Goat,
    Monkey,
    Rooster,
    Dog,
    Pig,
}

const ANIMALS: [ChineseAnimal; 12] = [
    ChineseAnimal::Rat,
    ChineseAnimal::Ox,
    ChineseAnimal::Tiger,
    ChineseAnimal::Rabbit,
    ChineseAnimal::Dragon,
    ChineseAnimal::Snake,
    ChineseAnimal::Horse,
    ChineseAnimal::Goat,
    ChineseAnimal::Monkey,
    ChineseAnimal::Rooster,
    ChineseAnimal::Dog,
    ChineseAnimal::Pig,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChineseElement {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

const ELEMENTS: [ChineseElement; 5] = [
    ChineseElement::Wood,
    ChineseElement::Fire,
    ChineseElement::Earth,
    ChineseElement::Metal,
    ChineseElement::Water,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    Yang,
    Yin,
}

impl fmt::Display for ChineseAnimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl fmt::Display for ChineseElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl fmt::Display for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChineseYearCycle {
    pub animal: ChineseAnimal,
    pub element: ChineseElement,
    pub polarity: Polarity,
    /// "Fire Horse"
    pub full: String,
    /// Calendar year after the February 4 adjustment
    #[serde(rename = "effectiveYear")]
    pub effective_year: i32,
}

/// Year the cycle counts a birth date toward.
pub fn effective_year(year: i32, month: u32, day: u32) -> i32 {
    if month < 2 || (month == 2 && day < 4) {
        year - 1
    } else {
        year
    }
}

/// Classify a Gregorian birth date.
pub fn chinese_year(year: i32, month: u32, day: u32) -> ChineseYearCycle {
    let effective = effective_year(year, month, day);
    let offset = effective - 4;

    let animal = ANIMALS[offset.rem_euclid(12) as usize];
    let element = ELEMENTS[(offset.rem_euclid(10) / 2) as usize];
    let polarity = if effective.rem_euclid(2) == 0 {
        Polarity::Yang
    } else {
        Polarity::Yin
    };

    ChineseYearCycle {
        animal,
        element,
        polarity,
        full: format!("{element} {animal}"),
        effective_year: effective,
    }
}

/// Classify a whole calendar year, using a mid-year date.
pub fn chinese_year_for(year: i32) -> ChineseYearCycle {
    chinese_year(year, 6, 15)
}
