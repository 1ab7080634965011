//! Tests fuzz safe : séquences de touches aléatoires sur l’éditeur complet.
//!
//! - RNG déterministe (seed fixe, `StdRng`)
//! - longueur de séquence bornée
//! - budget temps global
//! - invariants vérifiés après CHAQUE commande

use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{
    Commande, Constante, Editeur, ErreurCalcul, ErreurCommande, ErreurSaisie, Fonction,
    FonctionUnaire, Operateur, Reglages,
};
use crate::noyau::MoteurNumerique;

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération de commandes ------------------------ */

const OPERATEURS: [Operateur; 4] = [
    Operateur::Plus,
    Operateur::Moins,
    Operateur::Fois,
    Operateur::Divise,
];

fn gen_commande(rng: &mut StdRng) -> Commande {
    // chiffres et opérateurs dominent, comme au clavier
    match rng.gen_range(0..20) {
        0..=5 => Commande::Chiffre(char::from(b'0' + rng.gen_range(0..10u8))),
        6..=8 => Commande::Operateur(OPERATEURS[rng.gen_range(0..OPERATEURS.len())]),
        9 => Commande::Virgule,
        10 => Commande::Fonction(Fonction::TOUTES[rng.gen_range(0..Fonction::TOUTES.len())]),
        11 => Commande::OuvrirParenthese,
        12 => Commande::FermerParenthese,
        13 => {
            if rng.gen_bool(0.5) {
                Commande::Constante(Constante::Pi)
            } else {
                Commande::Constante(Constante::E)
            }
        }
        14 => Commande::Evaluer,
        15 => Commande::Backspace,
        16 => {
            let f = FonctionUnaire::TOUTES[rng.gen_range(0..FonctionUnaire::TOUTES.len())];
            Commande::Unaire(f)
        }
        17 => match rng.gen_range(0..5) {
            0 => Commande::MemoireStocker,
            1 => Commande::MemoireRappeler,
            2 => Commande::MemoireAjouter,
            3 => Commande::MemoireSoustraire,
            _ => Commande::MemoireEffacer,
        },
        18 => match rng.gen_range(0..4) {
            0 => Commande::Aleatoire,
            1 => Commande::Factorielle,
            2 => Commande::BasculerAngle,
            _ => Commande::Clear,
        },
        _ => Commande::Reinitialiser,
    }
}

/* ------------------------ Invariants ------------------------ */

fn verifier_invariants(e: &Editeur, apres: Commande) {
    let s = e.etat();

    assert!(!s.affichage.is_empty(), "affichage vide après {apres:?}");
    assert!(!s.memoire.is_empty(), "mémoire vide (texte) après {apres:?}");
    assert!(s.historique.len() <= e.reglages().historique_max);

    if s.gele {
        assert_eq!(s.affichage, "Error", "gel sans sentinelle après {apres:?}");
        assert!(e.reprise_dans().is_some(), "gel sans reprise armée");
        return;
    }

    assert_ne!(s.affichage, "Error", "sentinelle hors gel après {apres:?}");

    let ouvrantes = s.affichage.matches('(').count();
    let fermantes = s.affichage.matches(')').count();
    assert_eq!(
        s.parentheses_ouvertes + fermantes,
        ouvrantes,
        "compte de parenthèses incohérent: {:?} après {apres:?}",
        s.affichage
    );

    if !s.memoire_vide() {
        let m: f64 = s
            .memoire
            .parse()
            .unwrap_or_else(|_| panic!("mémoire non numérique: {:?}", s.memoire));
        assert!(m.is_finite());
    }
}

fn erreur_attendue(err: &ErreurCommande) -> bool {
    matches!(
        err,
        ErreurCommande::Saisie(ErreurSaisie::ParentheseNonOuverte)
            | ErreurCommande::Calcul(
                ErreurCalcul::Evaluation(_)
                    | ErreurCalcul::NonFini
                    | ErreurCalcul::Domaine(_)
                    | ErreurCalcul::Gele
            )
    )
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_invariants_de_l_editeur() {
    let t0 = Instant::now();
    let max = Duration::from_secs(3);

    let mut rng = StdRng::seed_from_u64(0xC0FFEE);
    let mut horloge = 0.0;

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..60 {
        budget(t0, max);
        let mut e = Editeur::avec_reglages(MoteurNumerique, Reglages::default().avec_graine(9));

        for _ in 0..80 {
            let c = gen_commande(&mut rng);
            match e.executer(c) {
                Ok(()) => seen_ok += 1,
                Err(err) => {
                    assert!(erreur_attendue(&err), "erreur non attendue: {err:?}");
                    seen_err += 1;
                }
            }
            verifier_invariants(&e, c);

            // le temps avance par pas irréguliers : le gel finit par se lever
            horloge += rng.gen_range(0.0..0.6);
            e.tick(horloge);
            verifier_invariants(&e, c);
        }
    }

    assert!(seen_ok > 1000, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 0, "aucune erreur vue: fuzz trop sage");
}

#[test]
fn fuzz_safe_determinisme() {
    fn rejouer(graine: u64) -> (String, String, usize) {
        let mut rng = StdRng::seed_from_u64(graine);
        let mut e = Editeur::avec_reglages(MoteurNumerique, Reglages::default().avec_graine(5));
        let mut t = 0.0;
        for _ in 0..300 {
            let _ = e.executer(gen_commande(&mut rng));
            t += 0.25;
            e.tick(t);
        }
        let s = e.etat();
        (s.affichage.clone(), s.memoire.clone(), s.historique.len())
    }

    assert_eq!(rejouer(0xBADC0DE), rejouer(0xBADC0DE));
}

#[test]
fn fuzz_safe_gel_toujours_leve() {
    let t0 = Instant::now();
    let max = Duration::from_secs(1);
    let mut rng = StdRng::seed_from_u64(0xFEED);

    for _ in 0..200 {
        budget(t0, max);
        let mut e = Editeur::new(MoteurNumerique);
        e.tick(0.0);
        let _ = e.executer(Commande::Chiffre('1'));
        let _ = e.executer(Commande::Operateur(Operateur::Divise));
        let _ = e.executer(Commande::Chiffre('0'));
        assert!(e.executer(Commande::Evaluer).is_err());

        // touches pendant le gel : aucune ne le lève
        for _ in 0..10 {
            let c = gen_commande(&mut rng);
            if c == Commande::Reinitialiser {
                continue;
            }
            let _ = e.executer(c);
            assert!(e.est_gele(), "gel levé par {c:?}");
        }

        e.tick(1.5);
        assert!(!e.est_gele());
        assert_eq!(e.affichage(), "0");
    }
}
