//! Convertisseur de notation Q-pur : infixe -> postfixe (RPN) / préfixe.
//!
//! Le noyau est pur (aucune E/S, aucun état partagé) : chaque appel possède
//! sa pile et sa sortie, appelable depuis plusieurs fils sans verrou.

pub mod noyau;
