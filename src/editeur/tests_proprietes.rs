//! Propriétés de la saisie (proptest).

use proptest::prelude::*;

use super::{Editeur, ErreurSaisie, Operateur, Reglages};
use crate::noyau::{formater_nombre, MoteurNumerique};

fn editeur() -> Editeur {
    Editeur::avec_reglages(MoteurNumerique, Reglages::default().avec_graine(1))
}

// Nombre sans zéro de tête (le "0" initial est remplacé, pas préfixé)
fn nombre_tape() -> impl Strategy<Value = String> {
    "[1-9][0-9]{0,8}"
}

fn operateur() -> impl Strategy<Value = Operateur> {
    prop_oneof![
        Just(Operateur::Plus),
        Just(Operateur::Moins),
        Just(Operateur::Fois),
        Just(Operateur::Divise),
    ]
}

#[derive(Clone, Copy, Debug)]
enum Touche {
    Ouvrir,
    Fermer,
    Chiffre(char),
    Plus,
}

fn touche() -> impl Strategy<Value = Touche> {
    prop_oneof![
        Just(Touche::Ouvrir),
        Just(Touche::Fermer),
        (0u8..10).prop_map(|d| Touche::Chiffre(char::from(b'0' + d))),
        Just(Touche::Plus),
    ]
}

proptest! {
    #[test]
    fn chiffres_concatenes(n in nombre_tape()) {
        let mut e = editeur();
        for c in n.chars() {
            e.chiffre(c).unwrap();
        }
        prop_assert_eq!(e.affichage(), n.as_str());

        let attendu: f64 = n.parse().unwrap();
        prop_assert_eq!(e.evaluer(), Ok(attendu));
    }

    #[test]
    fn operateurs_fusionnes(ops in prop::collection::vec(operateur(), 1..8)) {
        let mut e = editeur();
        e.chiffre('7').unwrap();
        for op in &ops {
            e.operateur(*op);
        }

        let texte = e.affichage();
        let queue = &texte[1..];
        let dernier = ops[ops.len() - 1].symbole();

        // au plus deux opérateurs, et le dernier tapé est en fin
        prop_assert!(queue.len() == 1 || queue.len() == 2, "queue: {:?}", queue);
        prop_assert!(texte.ends_with(dernier));
        if queue.len() == 2 {
            // seule forme double : "<op non '-'>-"
            prop_assert_eq!(dernier, '-');
            prop_assert_ne!(queue.chars().next(), Some('-'));
        }
    }

    #[test]
    fn une_seule_virgule(avant in nombre_tape(), apres in "[0-9]{1,4}", n in 1usize..5) {
        let mut e = editeur();
        for c in avant.chars() {
            e.chiffre(c).unwrap();
        }
        for _ in 0..n {
            e.virgule();
        }
        for c in apres.chars() {
            e.chiffre(c).unwrap();
        }
        prop_assert_eq!(e.affichage(), format!("{avant}.{apres}"));
    }

    #[test]
    fn parentheses_equilibrees(touches in prop::collection::vec(touche(), 0..40)) {
        let mut e = editeur();
        let mut ouvertes = 0usize;

        for t in touches {
            match t {
                Touche::Ouvrir => {
                    e.ouvrir_parenthese();
                    ouvertes += 1;
                }
                Touche::Fermer => {
                    let r = e.fermer_parenthese();
                    if ouvertes == 0 {
                        prop_assert_eq!(r, Err(ErreurSaisie::ParentheseNonOuverte));
                    } else {
                        prop_assert_eq!(r, Ok(()));
                        ouvertes -= 1;
                    }
                }
                Touche::Chiffre(d) => e.chiffre(d).unwrap(),
                Touche::Plus => e.operateur(Operateur::Plus),
            }
            prop_assert_eq!(e.etat().parentheses_ouvertes, ouvertes);
        }
    }

    #[test]
    fn somme_d_entiers(a in 0i64..100_000, b in 0i64..100_000) {
        let mut e = editeur();
        for c in a.to_string().chars() {
            e.chiffre(c).unwrap();
        }
        e.operateur(Operateur::Plus);
        for c in b.to_string().chars() {
            e.chiffre(c).unwrap();
        }
        prop_assert_eq!(e.evaluer(), Ok((a + b) as f64));
        prop_assert_eq!(e.affichage(), (a + b).to_string());
    }

    #[test]
    fn texte_canonique_relu_a_l_identique(x in prop::num::f64::NORMAL) {
        let texte = formater_nombre(x);
        let relu: f64 = texte.parse().unwrap();
        prop_assert_eq!(relu, x);
    }
}
