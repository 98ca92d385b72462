// src/noyau/erreur.rs
//
// Erreurs du convertisseur (mode strict seulement).
// Positions = index en caractères dans l'entrée d'origine.

use thiserror::Error;

/// Cause d'un déséquilibre de parenthèses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Desequilibre {
    /// `)` sans `(` correspondante.
    FermanteOrpheline,
    /// `(` encore ouverte en fin d'entrée.
    OuvranteNonFermee,
}

impl Desequilibre {
    /// Cause vue dans l'expression miroir (inversée, parenthèses échangées).
    pub const fn miroir(self) -> Self {
        match self {
            Desequilibre::FermanteOrpheline => Desequilibre::OuvranteNonFermee,
            Desequilibre::OuvranteNonFermee => Desequilibre::FermanteOrpheline,
        }
    }

    const fn libelle(self) -> &'static str {
        match self {
            Desequilibre::FermanteOrpheline => "parenthèse fermante sans ouvrante",
            Desequilibre::OuvranteNonFermee => "parenthèse non fermée",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    #[error("expression malformée : {} (position {position})", .cause.libelle())]
    MalformedExpression {
        position: usize,
        cause: Desequilibre,
    },

    #[error("caractère inattendu: '{caractere}' (position {position})")]
    UnknownToken { caractere: char, position: usize },
}

impl NotationError {
    pub fn position(&self) -> usize {
        match self {
            NotationError::MalformedExpression { position, .. }
            | NotationError::UnknownToken { position, .. } => *position,
        }
    }

    /// Ramène une erreur levée sur l'expression miroir vers l'entrée d'origine.
    /// `longueur` : nombre de caractères de l'entrée.
    pub(crate) fn depuis_miroir(self, longueur: usize) -> Self {
        let retourne = |p: usize| longueur.saturating_sub(1).saturating_sub(p);
        match self {
            NotationError::MalformedExpression { position, cause } => {
                NotationError::MalformedExpression {
                    position: retourne(position),
                    cause: cause.miroir(),
                }
            }
            NotationError::UnknownToken {
                caractere,
                position,
            } => NotationError::UnknownToken {
                caractere,
                position: retourne(position),
            },
        }
    }
}
