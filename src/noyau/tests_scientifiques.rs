//! Tests scientifiques (campagne) : cas de référence + invariants.
//!
//! Notes importantes (aligné avec l'état actuel du noyau) :
//! - Règle ">=" partout : associativité gauche, '^' compris. "a^b^c" => "ab^c^".
//!   Ce n'est pas l'exponentiation mathématique (droite) : on verrouille le comportement.
//! - Préfixe = miroir du postfixe du miroir : il hérite de la même règle.
//! - Mode tolérant = référence : jamais d'erreur, sortie déterministe.

use super::erreur::{Desequilibre, NotationError};
use super::prefixe::{miroir, to_prefix, to_prefix_tolerant};
use super::rpn::{to_postfix, to_postfix_tolerant, Mode};

fn post_ok(expr: &str) -> String {
    to_postfix(expr, Mode::Strict).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
}

fn pre_ok(expr: &str) -> String {
    to_prefix(expr, Mode::Strict).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
}

fn assert_malformee(expr: &str) {
    for r in [to_postfix(expr, Mode::Strict), to_prefix(expr, Mode::Strict)] {
        assert!(
            matches!(r, Err(NotationError::MalformedExpression { .. })),
            "expr={expr:?} r={r:?}"
        );
    }
}

/* ------------------------ Cas de référence ------------------------ */

#[test]
fn sci_cas_de_reference() {
    assert_eq!(post_ok("a+b"), "ab+");
    assert_eq!(post_ok("a+b*c"), "abc*+");
    assert_eq!(post_ok("(a+b)*c"), "ab+c*");
    assert_eq!(post_ok("a+b+c"), "ab+c+");
    assert_eq!(post_ok("a^b^c"), "ab^c^");
    assert_eq!(pre_ok("a+b*c"), "+a*bc");
    assert_eq!(post_ok(""), "");
    assert_eq!(pre_ok(""), "");
}

#[test]
fn sci_expressions_mixtes() {
    assert_eq!(post_ok("a+b*(c^d-e)^(f+g*h)-i"), "abcd^e-fgh*+^*+i-");
    // préfixe : via le miroir, "+" et "-" se regroupent à droite (a + ((b*..) - i))
    assert_eq!(pre_ok("a+b*(c^d-e)^(f+g*h)-i"), "+a-*b^-^cde+f*ghi");
    assert_eq!(post_ok("1+2*3"), "123*+");
    assert_eq!(pre_ok("(a-b)/(c+d)"), "/-ab+cd");
}

/* ------------------------ Invariants ------------------------ */

#[test]
fn sci_longueur_sans_parentheses() {
    for e in ["a", "(a)", "((a+b))*(c-d)", "a^(b^(c^d))", "x/y/z"] {
        let sans = e.chars().filter(|c| *c != '(' && *c != ')').count();
        assert_eq!(post_ok(e).chars().count(), sans, "expr={e:?}");
        assert_eq!(pre_ok(e).chars().count(), sans, "expr={e:?}");
    }
}

#[test]
fn sci_prefixe_par_construction() {
    for e in ["a+b*c", "(a+b)*c", "a-b-c", "a^b^c", "p*(q+r)/s"] {
        let inverse: String = pre_ok(e).chars().rev().collect();
        assert_eq!(inverse, post_ok(&miroir(e)), "expr={e:?}");
    }
}

#[test]
fn sci_parentheses_forcent_droite() {
    // la seule façon d'obtenir l'associativité droite : l'écrire
    assert_eq!(post_ok("a^(b^c)"), "abc^^");
    assert_eq!(post_ok("a-(b-c)"), "abc--");
}

/* ------------------------ Entrées malformées ------------------------ */

#[test]
fn sci_desequilibres_strict() {
    assert_malformee("a+b)");
    assert_malformee("(a+b");
    assert_malformee(")(");
    assert_malformee("((a)");
    assert_eq!(
        to_postfix(")a", Mode::Strict),
        Err(NotationError::MalformedExpression {
            position: 0,
            cause: Desequilibre::FermanteOrpheline,
        })
    );
}

#[test]
fn sci_tolerant_reproduit_la_reference() {
    assert_eq!(to_postfix_tolerant("a+b)"), "ab+");
    assert_eq!(to_postfix_tolerant("a+b)*c"), "ab+c*");
    assert_eq!(to_postfix_tolerant("(a"), "a(");
    assert_eq!(to_postfix_tolerant("a.b"), "ab.");
    assert_eq!(to_prefix_tolerant("a+b*c"), "+a*bc");
}

#[test]
fn sci_inconnu_strict() {
    assert_eq!(
        to_postfix("a+b=c", Mode::Strict),
        Err(NotationError::UnknownToken {
            caractere: '=',
            position: 3,
        })
    );
    assert!(matches!(
        to_postfix("a b", Mode::Strict),
        Err(NotationError::UnknownToken { caractere: ' ', .. })
    ));
}
