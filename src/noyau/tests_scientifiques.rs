//! Tests scientifiques (campagne) : le moteur numérique contre des valeurs connues.
//!
//! Notes :
//! - Les angles “spéciaux” (multiples de 30° / 45°) sont exacts ; les autres sont comparés
//!   avec une tolérance.
//! - Un résultat non fini n’est pas une erreur du moteur : on vérifie la valeur rendue.

use super::eval::eval_expression;
use super::ErreurEval;

fn ok(expr: &str) -> f64 {
    eval_expression(expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
}

fn assert_proche(expr: &str, attendu: f64) {
    let v = ok(expr);
    assert!(
        (v - attendu).abs() <= 1e-12 * attendu.abs().max(1.0),
        "expr={expr:?} v={v} attendu={attendu}"
    );
}

/* ------------------------ Arithmétique ------------------------ */

#[test]
fn sci_priorites() {
    assert_eq!(ok("2+3*4"), 14.0);
    assert_eq!(ok("(2+3)*4"), 20.0);
    assert_eq!(ok("10/4"), 2.5);
    assert_eq!(ok("2^10"), 1024.0);
    assert_eq!(ok("2^3^2"), 512.0);
    assert_eq!(ok("8-3-2"), 3.0);
    assert_eq!(ok("8/2/2"), 2.0);
}

#[test]
fn sci_signes() {
    assert_eq!(ok("3*-2"), -6.0);
    assert_eq!(ok("3/-2"), -1.5);
    assert_eq!(ok("5+-4"), 1.0);
    assert_eq!(ok("-2^2"), -4.0);
    assert_eq!(ok("2^-1"), 0.5);
    assert_eq!(ok("-(3)"), -3.0);
    assert_eq!(ok("--3"), 3.0);
}

#[test]
fn sci_non_finis_rendus_tels_quels() {
    assert!(ok("1/0").is_infinite());
    assert!(ok("0/0").is_nan());
    assert!(ok("sqrt(-1)").is_nan());
    assert!(ok("log(0)").is_infinite());
}

/* ------------------------ Constantes et fonctions ------------------------ */

#[test]
fn sci_constantes() {
    assert_eq!(ok("pi"), std::f64::consts::PI);
    assert_eq!(ok("e"), std::f64::consts::E);
    assert_eq!(ok("2*pi"), std::f64::consts::TAU);
    assert_eq!(ok("π"), std::f64::consts::PI);
}

#[test]
fn sci_fonctions() {
    assert_eq!(ok("sqrt(16)"), 4.0);
    assert_proche("log(100)", 2.0);
    assert_proche("ln(e)", 1.0);
    assert_eq!(ok("abs(-3.5)"), 3.5);
    assert_eq!(ok("floor(-2.5)"), -3.0);
    assert_eq!(ok("ceil(2.1)"), 3.0);
    assert_proche("exp(1)", std::f64::consts::E);
    assert_proche("asinh(1)", 1f64.asinh());
}

/* ------------------------ Trig avec unités ------------------------ */

#[test]
fn sci_trig_degres() {
    assert_eq!(ok("sin(30 deg)"), 0.5);
    assert_eq!(ok("cos(60 deg)"), 0.5);
    assert_eq!(ok("tan(45 deg)"), 1.0);
    assert_eq!(ok("sec(60 deg)"), 2.0);
    assert_eq!(ok("csc(30 deg)"), 2.0);
    assert_eq!(ok("cot(45 deg)"), 1.0);
    assert!(!ok("tan(90 deg)").is_finite());
}

#[test]
fn sci_trig_radians() {
    assert_eq!(ok("sin(pi/6 rad)"), 0.5);
    assert_eq!(ok("cos(pi rad)"), -1.0);
    assert_proche("sin(1 rad)", 1f64.sin());
    // sans unité : radians
    assert_proche("sin(1)", 1f64.sin());
}

#[test]
fn sci_unite_sur_argument_compose() {
    assert_eq!(ok("sin(10+20 deg)"), 0.5);
    assert_eq!(ok("sin((15*2) deg)"), 0.5);
    assert_eq!(ok("2*sin(30 deg)+1"), 2.0);
}

#[test]
fn sci_trig_imbriquee() {
    // asin rend des degrés quand son argument est annoté "deg"
    assert_eq!(ok("sin(asin(0.5 deg) deg)"), 0.5);
    assert_eq!(ok("cos(atan(1 deg)*2 deg)"), 0.0);
}

#[test]
fn sci_hyperboliques() {
    assert_eq!(ok("sinh(0 deg)"), 0.0);
    assert_proche("cosh(1 rad)", 1f64.cosh());
    assert_proche("tanh(180 deg)", std::f64::consts::PI.tanh());
}

/* ------------------------ Échecs ------------------------ */

#[test]
fn sci_echecs() {
    assert_eq!(eval_expression(""), Err(ErreurEval::EntreeVide));
    assert_eq!(eval_expression("sin("), Err(ErreurEval::ParentheseNonFermee));
    assert_eq!(eval_expression("2)"), Err(ErreurEval::ParentheseNonOuverte));
    assert_eq!(eval_expression("2**3"), Err(ErreurEval::ExpressionInvalide));
    assert_eq!(eval_expression("3."), Ok(3.0));
    assert_eq!(eval_expression("3.."), Err(ErreurEval::CaractereInattendu('.')));
    assert_eq!(
        eval_expression("x+1"),
        Err(ErreurEval::IdentifiantInconnu("x".into()))
    );
}
