// src/noyau/trig.rs
//
// Trigonométrie en flottants avec unité d’angle explicite
// -------------------------------------------------------
// - sin/cos/tan/sec/csc/cot : l’argument est converti de son unité vers les radians
// - asin/acos/atan          : l’unité désigne l’unité du RÉSULTAT
// - sinh/cosh/tanh          : un argument annoté est converti vers les radians
// - Angles “spéciaux” (multiples de 30° et 45°) : valeurs exactes de table,
//   pour que sin(30 deg) donne 0.5 et non 0.49999999999999994.

use std::f64::consts::{FRAC_1_SQRT_2, PI};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UniteAngle {
    Deg,
    Rad,
}

impl UniteAngle {
    pub fn suffixe(self) -> &'static str {
        match self {
            UniteAngle::Deg => "deg",
            UniteAngle::Rad => "rad",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrigFn {
    Sin,
    Cos,
    Tan,
    Sec,
    Csc,
    Cot,
    Asin,
    Acos,
    Atan,
    Sinh,
    Cosh,
    Tanh,
}

/// Tolérance de reconnaissance d’un angle spécial (en douzièmes de π).
const TOLERANCE_SPECIAL: f64 = 1e-10;

/// Convertit un angle annoté vers les radians (sans unité = radians).
pub fn vers_radians(x: f64, unite: Option<UniteAngle>) -> f64 {
    match unite {
        Some(UniteAngle::Deg) => x.to_radians(),
        Some(UniteAngle::Rad) | None => x,
    }
}

impl TrigFn {
    /// Applique la fonction à `x`, annoté ou non d’une unité.
    pub fn appliquer(self, x: f64, unite: Option<UniteAngle>) -> f64 {
        use TrigFn::*;

        match self {
            Sin | Cos | Tan | Sec | Csc | Cot => {
                let (s, c) = sin_cos_angle(x, unite);
                match self {
                    Sin => s,
                    Cos => c,
                    Tan => s / c,
                    Sec => 1.0 / c,
                    Csc => 1.0 / s,
                    _ => c / s,
                }
            }

            Asin => resultat_angle(x.asin(), unite),
            Acos => resultat_angle(x.acos(), unite),
            Atan => resultat_angle(x.atan(), unite),

            Sinh => vers_radians(x, unite).sinh(),
            Cosh => vers_radians(x, unite).cosh(),
            Tanh => vers_radians(x, unite).tanh(),
        }
    }
}

/// (sin, cos) d’un angle ; table exacte si l’angle est un multiple de 30° ou 45°.
///
/// Sur un angle spécial, un zéro est un VRAI zéro (tan(90 deg) => ±inf => rejeté en amont).
fn sin_cos_angle(x: f64, unite: Option<UniteAngle>) -> (f64, f64) {
    // angle en douzièmes de π (15°)
    let douziemes = match unite {
        Some(UniteAngle::Deg) => x / 15.0,
        Some(UniteAngle::Rad) | None => x * 12.0 / PI,
    };
    let k = douziemes.round();

    if (douziemes - k).abs() < TOLERANCE_SPECIAL && douziemes.abs() < 1e12 {
        let k = (k as i64).rem_euclid(24);
        if k % 2 == 0 || k % 3 == 0 {
            return (sin_special(k), sin_special((k + 6).rem_euclid(24)));
        }
    }

    let r = vers_radians(x, unite);
    (r.sin(), r.cos())
}

/// sin(k·15°) pour k multiple de 2 ou 3, k ∈ [0, 24).
fn sin_special(k: i64) -> f64 {
    let racine3_sur_2 = 3f64.sqrt() / 2.0;

    // premier quadrant (k ∈ [0, 6]) puis symétries
    let q = match k {
        0..=6 => k,
        7..=12 => 12 - k,
        13..=18 => k - 12,
        _ => 24 - k,
    };
    let v = match q {
        0 => 0.0,
        2 => 0.5,
        3 => FRAC_1_SQRT_2,
        4 => racine3_sur_2,
        6 => 1.0,
        // non spécial : jamais atteint (filtré par l’appelant)
        _ => (q as f64 * PI / 12.0).sin(),
    };
    if k > 12 {
        -v
    } else {
        v
    }
}

/// Exprime un angle (radians) dans l’unité demandée ; en degrés, un résultat
/// à 1e-9 près d’un entier est arrondi (asin(0.5 deg) = 30, pas 30.000000000000004).
fn resultat_angle(r: f64, unite: Option<UniteAngle>) -> f64 {
    match unite {
        Some(UniteAngle::Deg) => {
            let d = r.to_degrees();
            let n = d.round();
            if (d - n).abs() < 1e-9 {
                n
            } else {
                d
            }
        }
        Some(UniteAngle::Rad) | None => r,
    }
}
