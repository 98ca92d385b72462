//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le convertisseur sans brûler la machine.
//! - expressions générées par proptest (profondeur bornée)
//! - budget temps global sur les cas "anti pile"
//! - invariant clé : longueur de sortie = jetons hors parenthèses

use std::time::{Duration, Instant};

use proptest::prelude::*;

use super::erreur::NotationError;
use super::prefixe::{miroir, to_prefix, to_prefix_tolerant};
use super::rpn::{to_postfix, to_postfix_tolerant, Mode};

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération d'expressions (bornée) ------------------------ */

fn operande() -> impl Strategy<Value = String> {
    prop::sample::select(vec!['a', 'b', 'c', 'x', 'y', 'z', '0', '7']).prop_map(String::from)
}

fn operateur() -> impl Strategy<Value = char> {
    prop::sample::select(vec!['+', '-', '*', '/', '^'])
}

/// Expressions bien formées (parenthèses équilibrées).
fn expression() -> impl Strategy<Value = String> {
    operande().prop_recursive(6, 64, 2, |inner| {
        prop_oneof![
            (inner.clone(), operateur(), inner.clone())
                .prop_map(|(a, op, b)| format!("{a}{op}{b}")),
            inner.prop_map(|e| format!("({e})")),
        ]
    })
}

/* ------------------------ Helpers ------------------------ */

fn hors_parentheses(e: &str) -> usize {
    e.chars().filter(|c| *c != '(' && *c != ')').count()
}

fn operandes(e: &str) -> String {
    e.chars().filter(|c| c.is_alphanumeric()).collect()
}

fn operateurs_tries(e: &str) -> Vec<char> {
    let mut ops: Vec<char> = e.chars().filter(|c| "+-*/^".contains(*c)).collect();
    ops.sort_unstable();
    ops
}

/// Postfixe valide : chaque opérateur trouve ses deux opérandes, il reste une valeur.
fn postfixe_bien_forme(p: &str) -> bool {
    let mut profondeur: usize = 0;
    for c in p.chars() {
        if c.is_alphanumeric() {
            profondeur += 1;
        } else if profondeur < 2 {
            return false;
        } else {
            profondeur -= 1;
        }
    }
    profondeur == 1
}

/* ------------------------ Propriétés ------------------------ */

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn fuzz_postfixe_conserve_les_jetons(e in expression()) {
        let p = to_postfix(&e, Mode::Strict).unwrap();
        prop_assert_eq!(p.chars().count(), hors_parentheses(&e));
        prop_assert_eq!(operandes(&p), operandes(&e));
        prop_assert_eq!(operateurs_tries(&p), operateurs_tries(&e));
        prop_assert!(postfixe_bien_forme(&p), "e={:?} p={:?}", e, p);
    }

    #[test]
    fn fuzz_prefixe_par_construction(e in expression()) {
        let pre = to_prefix(&e, Mode::Strict).unwrap();
        let inverse: String = pre.chars().rev().collect();
        prop_assert_eq!(inverse, to_postfix(&miroir(&e), Mode::Strict).unwrap());
        prop_assert_eq!(pre.chars().count(), hors_parentheses(&e));
        prop_assert_eq!(operandes(&pre), operandes(&e));
    }

    #[test]
    fn fuzz_strict_et_tolerant_identiques_si_bien_forme(e in expression()) {
        prop_assert_eq!(to_postfix(&e, Mode::Strict).unwrap(), to_postfix_tolerant(&e));
        prop_assert_eq!(to_prefix(&e, Mode::Strict).unwrap(), to_prefix_tolerant(&e));
    }

    #[test]
    fn fuzz_entree_quelconque_deterministe(e in "[abc()+*/^ %-]{0,24}") {
        // tolérant : jamais d'échec, même entrée => même sortie
        let p = to_postfix_tolerant(&e);
        prop_assert_eq!(&p, &to_postfix_tolerant(&e));
        prop_assert!(!p.contains(')'));
        prop_assert_eq!(operandes(&p), operandes(&e));

        // strict : soit un résultat, soit une erreur localisée dans l'entrée
        let n = e.chars().count();
        for r in [to_postfix(&e, Mode::Strict), to_prefix(&e, Mode::Strict)] {
            match r {
                Ok(s) => prop_assert_eq!(s.chars().count(), hors_parentheses(&e)),
                Err(err) => {
                    prop_assert!(err.position() < n, "e={:?} err={}", e, err);
                    if let NotationError::UnknownToken { caractere, position } = err {
                        prop_assert_eq!(e.chars().nth(position), Some(caractere));
                    }
                }
            }
        }
    }
}

/* ------------------------ Tests anti pile ------------------------ */

#[test]
fn fuzz_safe_imbrication_profonde() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let n = 20_000;
    let expr = format!("{}a{}", "(".repeat(n), ")".repeat(n));
    let p = to_postfix(&expr, Mode::Strict).unwrap_or_else(|e| panic!("err: {e}"));
    let pre = to_prefix(&expr, Mode::Strict).unwrap_or_else(|e| panic!("err: {e}"));
    budget(t0, max);

    assert_eq!(p, "a");
    assert_eq!(pre, "a");
}

#[test]
fn fuzz_safe_longue_chaine_meme_rang() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    // a+a+a+... : la pile ne dépasse jamais un opérateur (règle ">=")
    let n = 50_000;
    let expr = vec!["a"; n].join("+");
    let p = to_postfix(&expr, Mode::Strict).unwrap_or_else(|e| panic!("err: {e}"));
    budget(t0, max);

    assert_eq!(p.len(), 2 * n - 1);
    assert!(p.starts_with("aa+a+"));
    assert!(postfixe_bien_forme(&p));
}
