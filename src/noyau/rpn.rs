// src/noyau/rpn.rs
//
// Shunting-yard -> RPN
// Objectif:
// - Convertir une suite de Tok en RPN (postfix)
//
// Règles:
// - Fonction(f) : opérateur unaire “collé” à son argument, sortie après la parenthèse fermante
// - Moins unaire : si '-' arrive quand on n’attend PAS une valeur => Tok::Neg (préfixe)
//   priorité entre * / et ^ : "2*-3" => -6, "-2^2" => -4, "2^-1" => 0.5
// - Plus unaire : ignoré
// - Unite(u) : suffixe de plus FAIBLE priorité, s’applique à tout le groupe parenthésé
//   qui le précède : "sin(30+15 deg)" => sin((30+15) deg)

use super::erreur::ErreurEval;
use super::jetons::Tok;

fn precedence(t: &Tok) -> i32 {
    match t {
        Tok::Plus | Tok::Minus => 1,
        Tok::Star | Tok::Slash => 2,
        Tok::Neg => 3,
        Tok::Caret => 4,
        _ => 0,
    }
}

fn is_right_associative(t: &Tok) -> bool {
    matches!(t, Tok::Caret)
}

/// Les opérateurs binaires ne traversent ni '(' ni une fonction en attente d’argument.
fn bloque_depilement(t: &Tok) -> bool {
    matches!(t, Tok::LPar | Tok::Fonction(_))
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Fonction(sin), LPar, Num(30), Unite(deg), RPar]
///   rpn:    [Num(30), Unite(deg), Fonction(sin)]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<Tok>, ErreurEval> {
    let mut out: Vec<Tok> = Vec::new();
    let mut ops: Vec<Tok> = Vec::new();

    // “valeur” = un atome ou une expression fermée.
    // Sert à détecter le moins unaire.
    let mut prev_was_value = false;

    for tok in tokens.iter().cloned() {
        match tok {
            Tok::Num(_) | Tok::Const(_) => {
                out.push(tok);
                prev_was_value = true;
            }

            Tok::Fonction(_) | Tok::LPar => {
                ops.push(tok);
                prev_was_value = false;
            }

            Tok::RPar => {
                // dépile jusqu’à '('
                loop {
                    match ops.pop() {
                        Some(Tok::LPar) => break,
                        Some(top) => out.push(top),
                        None => return Err(ErreurEval::ParentheseNonOuverte),
                    }
                }

                // si une fonction est au sommet, on la sort aussi
                if let Some(Tok::Fonction(_)) = ops.last() {
                    out.extend(ops.pop());
                }

                prev_was_value = true;
            }

            Tok::Unite(_) => {
                // l’unité porte sur tout ce qui précède dans le groupe courant
                while let Some(top) = ops.last() {
                    if bloque_depilement(top) {
                        break;
                    }
                    out.extend(ops.pop());
                }
                out.push(tok);
                prev_was_value = true;
            }

            Tok::Minus | Tok::Plus if !prev_was_value => {
                // unaire : '-' devient Neg (préfixe, pas de dépilement), '+' disparaît
                if matches!(tok, Tok::Minus) {
                    ops.push(Tok::Neg);
                }
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash | Tok::Caret => {
                // dépile tant que la précédence/associativité exige de sortir l'opérateur du haut
                while let Some(top) = ops.last() {
                    if bloque_depilement(top) {
                        break;
                    }

                    let p_top = precedence(top);
                    let p_tok = precedence(&tok);

                    let doit_pop = if is_right_associative(&tok) {
                        p_top > p_tok
                    } else {
                        p_top >= p_tok
                    };

                    if !doit_pop {
                        break;
                    }
                    out.extend(ops.pop());
                }

                ops.push(tok);
                prev_was_value = false;
            }

            Tok::Neg => return Err(ErreurEval::ExpressionInvalide),
        }
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if matches!(op, Tok::LPar) {
            return Err(ErreurEval::ParentheseNonFermee);
        }
        out.push(op);
    }

    Ok(out)
}
