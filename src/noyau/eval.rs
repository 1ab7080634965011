//! Noyau: évaluation numérique (pipeline réel)
//!
//! tokenize -> RPN -> pile de valeurs f64 (annotées d’une unité d’angle éventuelle)
//!
//! Le moteur ne juge pas la finitude : `1/0` rend `inf`, `sqrt(-1)` rend `NaN`.
//! C’est l’éditeur qui rejette ces valeurs.

use tracing::trace;

use super::erreur::ErreurEval;
use super::jetons::{format_tokens, tokenize, Tok};
use super::rpn::to_rpn;
use super::trig::UniteAngle;

/// Frontière avec l’éditeur : texte d’expression -> nombre, ou échec.
pub trait Evaluateur {
    fn evaluer(&self, texte: &str) -> Result<f64, ErreurEval>;
}

/// Toute fermeture `Fn(&str) -> Result<f64, ErreurEval>` est un évaluateur (doublures de test).
impl<F> Evaluateur for F
where
    F: Fn(&str) -> Result<f64, ErreurEval>,
{
    fn evaluer(&self, texte: &str) -> Result<f64, ErreurEval> {
        self(texte)
    }
}

/// Moteur f64 livré avec la calculatrice.
#[derive(Clone, Copy, Debug, Default)]
pub struct MoteurNumerique;

impl Evaluateur for MoteurNumerique {
    fn evaluer(&self, texte: &str) -> Result<f64, ErreurEval> {
        eval_expression(texte)
    }
}

#[derive(Clone, Copy, Debug)]
struct Valeur {
    x: f64,
    unite: Option<UniteAngle>,
}

impl Valeur {
    fn nue(x: f64) -> Self {
        Self { x, unite: None }
    }

    /// Valeur sans unité, sinon erreur (l’arithmétique n’accepte pas les angles annotés).
    fn scalaire(self) -> Result<f64, ErreurEval> {
        match self.unite {
            None => Ok(self.x),
            Some(_) => Err(ErreurEval::UniteMalPlacee),
        }
    }
}

/// API publique : évalue une expression texte en f64.
pub fn eval_expression(expr_str: &str) -> Result<f64, ErreurEval> {
    let s = expr_str.trim();
    if s.is_empty() {
        return Err(ErreurEval::EntreeVide);
    }

    let jetons = tokenize(s)?;
    let rpn = to_rpn(&jetons)?;
    trace!(rpn = %format_tokens(&rpn), "expression en RPN");

    eval_rpn(&rpn)
}

fn eval_rpn(rpn: &[Tok]) -> Result<f64, ErreurEval> {
    let mut st: Vec<Valeur> = Vec::new();

    for tok in rpn {
        match tok {
            Tok::Num(v) => st.push(Valeur::nue(*v)),
            Tok::Const(c) => st.push(Valeur::nue(c.valeur())),

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash | Tok::Caret => {
                let b = st.pop().ok_or(ErreurEval::ExpressionInvalide)?.scalaire()?;
                let a = st.pop().ok_or(ErreurEval::ExpressionInvalide)?.scalaire()?;

                let r = match tok {
                    Tok::Plus => a + b,
                    Tok::Minus => a - b,
                    Tok::Star => a * b,
                    Tok::Slash => a / b,
                    _ => a.powf(b),
                };
                st.push(Valeur::nue(r));
            }

            Tok::Neg => {
                let v = st.pop().ok_or(ErreurEval::ExpressionInvalide)?;
                st.push(Valeur { x: -v.x, ..v });
            }

            Tok::Unite(u) => {
                let v = st.pop().ok_or(ErreurEval::ExpressionInvalide)?;
                st.push(Valeur {
                    x: v.scalaire()?,
                    unite: Some(*u),
                });
            }

            Tok::Fonction(f) => {
                let v = st.pop().ok_or(ErreurEval::ExpressionInvalide)?;
                if v.unite.is_some() && !f.accepte_unite() {
                    return Err(ErreurEval::UniteMalPlacee);
                }
                st.push(Valeur::nue(f.appliquer(v.x, v.unite)));
            }

            Tok::LPar | Tok::RPar => return Err(ErreurEval::ExpressionInvalide),
        }
    }

    match (st.pop(), st.is_empty()) {
        (Some(v), true) => v.scalaire(),
        _ => Err(ErreurEval::ExpressionInvalide),
    }
}
