//! Western decans.
//!
//! Each sign is divided into 3 decans of 10 degrees. Decan rulers rotate
//! through the rulers of the sign's element group (triplicity), starting
//! with the sign itself.

use crate::ephemeris::Body;
use crate::zodiac::{Element, Sign};
use serde::{Deserialize, Serialize};

pub const DECAN_SPAN: f64 = 10.0;

lazy_static::lazy_static! {
    // Signs of each element in zodiac order, e.g. fire = [Aries, Leo, Sagittarius].
    static ref TRIPLICITIES: Vec<(Element, [Sign; 3])> = {
        [Element::Fire, Element::Earth, Element::Air, Element::Water]
            .into_iter()
            .map(|element| {
                let mut group = Sign::all().filter(|s| s.element() == element);
                let first = group.next().unwrap_or(Sign::Aries);
                let second = group.next().unwrap_or(first);
                let third = group.next().unwrap_or(second);
                (element, [first, second, third])
            })
            .collect()
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Decan {
    /// 1, 2 or 3
    pub index: u8,
    pub ruler: Body,
}

/// Decan number for a degree inside a sign.
///
/// Inputs outside [0, 30) are clamped to the first or last decan.
pub fn decan_index(degree_in_sign: f64) -> u8 {
    if degree_in_sign < DECAN_SPAN {
        1
    } else if degree_in_sign < 2.0 * DECAN_SPAN {
        2
    } else {
        3
    }
}

/// Ruler of the `index`-th decan (1-based) of `sign`.
pub fn decan_ruler(sign: Sign, index: u8) -> Body {
    let group = TRIPLICITIES
        .iter()
        .find(|(element, _)| *element == sign.element())
        .map(|(_, signs)| *signs)
        .unwrap_or([sign; 3]);
    let position = group.iter().position(|s| *s == sign).unwrap_or(0);
    let step = index.clamp(1, 3) as usize - 1;
    group[(position + step) % 3].ruler()
}

pub fn decan_for(sign: Sign, degree_in_sign: f64) -> Decan {
    let index = decan_index(degree_in_sign);
    Decan {
        index,
        ruler: decan_ruler(sign, index),
    }
}
