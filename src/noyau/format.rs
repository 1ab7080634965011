// src/noyau/format.rs
//
// Forme texte canonique d’un résultat
// - décimal le plus court qui relit exactement la même valeur
// - entier sans ".0"
// - "-0" => "0"
// - notation scientifique (exposant signé) si |x| >= 1e21 ou 0 < |x| < 1e-6
//
// Le tokenizer relit cette forme telle quelle (mémoire, enchaînement).

const SEUIL_GRAND: f64 = 1e21;
const SEUIL_PETIT: f64 = 1e-6;

/// Texte canonique d’un f64 fini.
pub fn formater_nombre(x: f64) -> String {
    if x == 0.0 {
        return "0".to_string();
    }

    let a = x.abs();
    if a >= SEUIL_GRAND || a < SEUIL_PETIT {
        let s = format!("{x:e}");
        return match s.split_once('e') {
            Some((mantisse, exp)) if !exp.starts_with('-') => format!("{mantisse}e+{exp}"),
            _ => s,
        };
    }

    format!("{x}")
}
