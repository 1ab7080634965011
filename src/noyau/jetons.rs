// src/noyau/jetons.rs

use super::erreur::ErreurEval;
use super::fonctions::FonctionMath;
use super::trig::UniteAngle;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Constante {
    Pi,
    E,
}

impl Constante {
    pub fn valeur(self) -> f64 {
        match self {
            Constante::Pi => std::f64::consts::PI,
            Constante::E => std::f64::consts::E,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    Num(f64),
    Const(Constante),
    Fonction(FonctionMath),

    // Suffixe d’unité d’angle : "30 deg", "(pi/6 rad)"
    Unite(UniteAngle),

    Plus,
    Minus,
    Star,
    Slash,
    Caret, // ^

    // Moins unaire : jamais produit par tokenize(), injecté par to_rpn()
    Neg,

    LPar,
    RPar,
}

/// Tokenize une chaîne en jetons.
/// Supporte:
/// - décimaux (ex: 12, 0.5, .5, 3.)
/// - notation scientifique du formateur (ex: 1e+21, 1.5e-7)
/// - opérateurs + - * / ^
/// - parenthèses ( )
/// - constantes π / pi, e
/// - fonctions connues (sin, asin, sinh, log, ln, sqrt, …) insensibles à la casse
/// - unités d’angle deg / rad
pub fn tokenize(s: &str) -> Result<Vec<Tok>, ErreurEval> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        let simple = match c {
            '(' => Some(Tok::LPar),
            ')' => Some(Tok::RPar),
            '+' => Some(Tok::Plus),
            '-' => Some(Tok::Minus),
            '*' => Some(Tok::Star),
            '/' => Some(Tok::Slash),
            '^' => Some(Tok::Caret),
            'π' => Some(Tok::Const(Constante::Pi)),
            _ => None,
        };
        if let Some(t) = simple {
            out.push(t);
            i += 1;
            continue;
        }

        // Nombre décimal (+ exposant éventuel)
        if c.is_ascii_digit() || (c == '.' && i + 1 < chars.len() && chars[i + 1].is_ascii_digit())
        {
            let start = i;
            while i < chars.len() && chars[i].is_ascii_digit() {
                i += 1;
            }
            if i < chars.len() && chars[i] == '.' {
                i += 1;
                while i < chars.len() && chars[i].is_ascii_digit() {
                    i += 1;
                }
            }
            i = fin_exposant(&chars, i);

            let texte: String = chars[start..i].iter().collect();
            let v = texte
                .parse::<f64>()
                .map_err(|_| ErreurEval::NombreInvalide(texte.clone()))?;
            out.push(Tok::Num(v));
            continue;
        }

        // Identifiants ASCII : [a-zA-Z_][a-zA-Z0-9_]*
        if c.is_ascii_alphabetic() || c == '_' {
            let start = i;
            i += 1;
            while i < chars.len() && (chars[i].is_ascii_alphanumeric() || chars[i] == '_') {
                i += 1;
            }
            let word: String = chars[start..i].iter().collect();
            out.push(classer_mot(&word.to_lowercase())?);
            continue;
        }

        return Err(ErreurEval::CaractereInattendu(c));
    }

    Ok(out)
}

/// Avance après un exposant "e±ddd" si présent ; sinon rend `i` tel quel
/// (le "e" sera alors lu comme la constante).
fn fin_exposant(chars: &[char], i: usize) -> usize {
    if i >= chars.len() || !(chars[i] == 'e' || chars[i] == 'E') {
        return i;
    }
    let mut j = i + 1;
    if j < chars.len() && (chars[j] == '+' || chars[j] == '-') {
        j += 1;
    }
    if j >= chars.len() || !chars[j].is_ascii_digit() {
        return i;
    }
    while j < chars.len() && chars[j].is_ascii_digit() {
        j += 1;
    }
    j
}

fn classer_mot(w: &str) -> Result<Tok, ErreurEval> {
    match w {
        "pi" => Ok(Tok::Const(Constante::Pi)),
        "e" => Ok(Tok::Const(Constante::E)),
        "deg" => Ok(Tok::Unite(UniteAngle::Deg)),
        "rad" => Ok(Tok::Unite(UniteAngle::Rad)),
        _ => FonctionMath::depuis_nom(w)
            .map(Tok::Fonction)
            .ok_or_else(|| ErreurEval::IdentifiantInconnu(w.to_string())),
    }
}

/// Format utilitaire (debug) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    let mut out = Vec::new();
    for t in tokens {
        let s = match t {
            Tok::Num(v) => format!("{v}"),
            Tok::Const(Constante::Pi) => "π".to_string(),
            Tok::Const(Constante::E) => "e".to_string(),
            Tok::Fonction(f) => f.nom().to_string(),
            Tok::Unite(u) => u.suffixe().to_string(),

            Tok::Plus => "+".to_string(),
            Tok::Minus => "-".to_string(),
            Tok::Star => "*".to_string(),
            Tok::Slash => "/".to_string(),
            Tok::Caret => "^".to_string(),
            Tok::Neg => "neg".to_string(),

            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimaux_et_exposants() {
        let t = tokenize("3. + .5 * 1e+21 - 1.5e-7").unwrap();
        assert_eq!(
            t,
            vec![
                Tok::Num(3.0),
                Tok::Plus,
                Tok::Num(0.5),
                Tok::Star,
                Tok::Num(1e21),
                Tok::Minus,
                Tok::Num(1.5e-7),
            ]
        );
    }

    #[test]
    fn e_seul_est_la_constante() {
        let t = tokenize("2*e").unwrap();
        assert_eq!(t, vec![Tok::Num(2.0), Tok::Star, Tok::Const(Constante::E)]);

        // "2e" sans exposant : nombre puis constante (rejeté plus tard par le RPN)
        let t = tokenize("2e").unwrap();
        assert_eq!(t, vec![Tok::Num(2.0), Tok::Const(Constante::E)]);
    }

    #[test]
    fn fonctions_unites_casse() {
        let t = tokenize("SIN(30 DEG)").unwrap();
        assert_eq!(format_tokens(&t), "sin ( 30 deg )");
    }

    #[test]
    fn identifiant_inconnu() {
        assert_eq!(
            tokenize("foo(2)"),
            Err(ErreurEval::IdentifiantInconnu("foo".into()))
        );
        assert_eq!(tokenize("2 $ 3"), Err(ErreurEval::CaractereInattendu('$')));
    }
}
