// src/noyau/prefixe.rs
//
// Préfixe = miroir du postfixe du miroir.
// inverser -> échanger '(' et ')' -> postfixe -> inverser
//
// Aucune logique de précédence ici : tout passe par rpn::to_postfix,
// donc les deux notations ne peuvent pas diverger (même règle ">=").

use super::erreur::NotationError;
use super::rpn::{to_postfix, to_postfix_tolerant, Mode};

/// Miroir d'une expression : ordre inversé + parenthèses échangées.
///
/// Exemple: "(a+b)*c" => "c*(b+a)"
pub fn miroir(expression: &str) -> String {
    expression
        .chars()
        .rev()
        .map(|c| match c {
            '(' => ')',
            ')' => '(',
            c => c,
        })
        .collect()
}

/// Infixe -> préfixe.
///
/// En mode strict, la position d'une erreur est donnée dans l'entrée d'origine
/// (pas dans le miroir).
pub fn to_prefix(expression: &str, mode: Mode) -> Result<String, NotationError> {
    let postfixe = to_postfix(&miroir(expression), mode)
        .map_err(|e| e.depuis_miroir(expression.chars().count()))?;
    Ok(postfixe.chars().rev().collect())
}

/// Mode tolérant : ne peut pas échouer.
pub fn to_prefix_tolerant(expression: &str) -> String {
    to_postfix_tolerant(&miroir(expression)).chars().rev().collect()
}
