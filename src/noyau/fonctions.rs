// src/noyau/fonctions.rs
//
// Fonctions nommées reconnues par le moteur.

use super::trig::{TrigFn, UniteAngle};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FonctionMath {
    Trig(TrigFn),
    Asinh,
    Acosh,
    Atanh,
    Log, // base 10
    Ln,
    Sqrt,
    Abs,
    Floor,
    Ceil,
    Exp,
}

const TABLE: &[(&str, FonctionMath)] = &[
    ("sin", FonctionMath::Trig(TrigFn::Sin)),
    ("cos", FonctionMath::Trig(TrigFn::Cos)),
    ("tan", FonctionMath::Trig(TrigFn::Tan)),
    ("sec", FonctionMath::Trig(TrigFn::Sec)),
    ("csc", FonctionMath::Trig(TrigFn::Csc)),
    ("cot", FonctionMath::Trig(TrigFn::Cot)),
    ("asin", FonctionMath::Trig(TrigFn::Asin)),
    ("acos", FonctionMath::Trig(TrigFn::Acos)),
    ("atan", FonctionMath::Trig(TrigFn::Atan)),
    ("sinh", FonctionMath::Trig(TrigFn::Sinh)),
    ("cosh", FonctionMath::Trig(TrigFn::Cosh)),
    ("tanh", FonctionMath::Trig(TrigFn::Tanh)),
    ("asinh", FonctionMath::Asinh),
    ("acosh", FonctionMath::Acosh),
    ("atanh", FonctionMath::Atanh),
    ("log", FonctionMath::Log),
    ("ln", FonctionMath::Ln),
    ("sqrt", FonctionMath::Sqrt),
    ("abs", FonctionMath::Abs),
    ("floor", FonctionMath::Floor),
    ("ceil", FonctionMath::Ceil),
    ("exp", FonctionMath::Exp),
];

impl FonctionMath {
    /// Nom (minuscules) -> fonction.
    pub fn depuis_nom(nom: &str) -> Option<Self> {
        TABLE.iter().find(|(n, _)| *n == nom).map(|(_, f)| *f)
    }

    pub fn nom(self) -> &'static str {
        TABLE
            .iter()
            .find(|(_, f)| *f == self)
            .map(|(n, _)| *n)
            .unwrap_or("?")
    }

    /// Seules les fonctions trigonométriques acceptent un argument annoté d’une unité.
    pub fn accepte_unite(self) -> bool {
        matches!(self, FonctionMath::Trig(_))
    }

    pub fn appliquer(self, x: f64, unite: Option<UniteAngle>) -> f64 {
        match self {
            FonctionMath::Trig(t) => t.appliquer(x, unite),
            FonctionMath::Asinh => x.asinh(),
            FonctionMath::Acosh => x.acosh(),
            FonctionMath::Atanh => x.atanh(),
            FonctionMath::Log => x.log10(),
            FonctionMath::Ln => x.ln(),
            FonctionMath::Sqrt => x.sqrt(),
            FonctionMath::Abs => x.abs(),
            FonctionMath::Floor => x.floor(),
            FonctionMath::Ceil => x.ceil(),
            FonctionMath::Exp => x.exp(),
        }
    }
}
