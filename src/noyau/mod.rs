//! Noyau du convertisseur de notation
//!
//! Organisation interne :
//! - jetons.rs    : classement caractère -> jeton + table de précédence
//! - rpn.rs       : shunting -> postfixe (+ modes strict / tolérant, démarche)
//! - prefixe.rs   : préfixe = miroir du postfixe du miroir
//! - erreur.rs    : erreurs typées (mode strict)
//! - operation.rs : contrat JSON de l'appelant (infix_to_postfix / infix_to_prefix)
//! - eval.rs      : pipeline complet pour l'UI

pub mod erreur;
pub mod eval;
pub mod jetons;
pub mod operation;
pub mod prefixe;
pub mod rpn;

#[cfg(test)]
mod tests_scientifiques;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreur::{Desequilibre, NotationError};
pub use eval::convertir;
pub use operation::Operation;
pub use prefixe::{to_prefix, to_prefix_tolerant};
pub use rpn::{to_postfix, to_postfix_tolerant, Mode};
