// src/editeur/annotation.rs
//
// Annotation des unités d’angle avant évaluation
// ----------------------------------------------
// "sin(30" (fermé en "sin(30)") + mode DEG => "sin(30 deg)"
//
// - appariement des parenthèses par profondeur (pas de regex)
// - récursif : les appels internes sont annotés AVANT le suffixe de l’appel externe
// - mots entiers seulement : "asinh(" n’est pas un "sinh(" ni un "asin("

use crate::noyau::trig::UniteAngle;

/// Fonctions dont l’argument reçoit l’unité d’angle.
const FONCTIONS_ANGLE: &[&str] = &[
    "sin", "cos", "tan", "sec", "csc", "cot", "asin", "acos", "atan", "sinh", "cosh", "tanh",
];

/// Ajoute ` <unité>` en fin d’argument de chaque appel trigonométrique.
pub fn annoter_angles(texte: &str, unite: UniteAngle) -> String {
    let chars: Vec<char> = texte.chars().collect();
    let mut out = String::with_capacity(texte.len() + 8);
    annoter(&chars, unite.suffixe(), &mut out);
    out
}

fn annoter(chars: &[char], suffixe: &str, out: &mut String) {
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if !c.is_ascii_alphabetic() {
            out.push(c);
            i += 1;
            continue;
        }

        // mot entier
        let debut = i;
        while i < chars.len() && chars[i].is_ascii_alphanumeric() {
            i += 1;
        }
        let mot: String = chars[debut..i].iter().collect();

        // espaces éventuels entre le nom et '('
        let mut j = i;
        while j < chars.len() && chars[j].is_whitespace() {
            j += 1;
        }

        let est_angle = FONCTIONS_ANGLE.contains(&mot.to_lowercase().as_str());
        if !est_angle || j >= chars.len() || chars[j] != '(' {
            out.push_str(&mot);
            continue;
        }

        // argument : de j+1 jusqu’à la ')' appariée (ou la fin si non fermée)
        let debut_arg = j + 1;
        let mut profondeur = 1usize;
        let mut k = debut_arg;
        while k < chars.len() {
            match chars[k] {
                '(' => profondeur += 1,
                ')' => {
                    profondeur -= 1;
                    if profondeur == 0 {
                        break;
                    }
                }
                _ => {}
            }
            k += 1;
        }
        let fin_arg = k.min(chars.len());

        let interieur: String = chars[debut_arg..fin_arg].iter().collect();
        let interieur: Vec<char> = interieur.trim().chars().collect();

        out.push_str(&mot);
        out.push('(');
        annoter(&interieur, suffixe, out);
        out.push(' ');
        out.push_str(suffixe);
        out.push(')');

        // saute la ')' appariée
        i = (fin_arg + 1).min(chars.len());
    }
}
