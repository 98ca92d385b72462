//! Noyau — conversion (pipeline réel)
//!
//! tokenize -> (miroir si préfixe) -> shunting + démarche -> (inversion si préfixe)
//!
//! Remarque : la démarche montre le passage postfixe. En préfixe, ce passage
//! porte sur le miroir, c'est donc le miroir qui est affiché à côté.

use log::debug;

use super::erreur::NotationError;
use super::jetons::{format_tokens, tokenize};
use super::operation::Operation;
use super::prefixe::miroir;
use super::rpn::{to_postfix_trace, Etape, Mode};

#[derive(Default, Clone, Debug)]
pub struct DemarcheNoyau {
    pub jetons: String,
    /// Vide en postfixe.
    pub miroir: String,
    pub etapes: Vec<Etape>,
    pub note: String,
}

/// API publique : convertit une expression et retourne:
/// - le résultat (postfixe ou préfixe, chaîne dense sans séparateur)
/// - la démarche (jetons, miroir, pile/sortie pas à pas)
pub fn convertir(
    expression: &str,
    operation: Operation,
    mode: Mode,
) -> Result<(String, DemarcheNoyau), NotationError> {
    // 1) Jetons
    let jetons_txt = format_tokens(&tokenize(expression));

    let (resultat, miroir_txt, etapes) = match operation {
        // 2) Postfixe direct
        Operation::InfixToPostfix => {
            let (postfixe, etapes) = to_postfix_trace(expression, mode)?;
            (postfixe, String::new(), etapes)
        }

        // 2') Préfixe : miroir -> postfixe -> inversion
        Operation::InfixToPrefix => {
            let m = miroir(expression);
            let longueur = expression.chars().count();
            let (postfixe, etapes) =
                to_postfix_trace(&m, mode).map_err(|e| e.depuis_miroir(longueur))?;
            (postfixe.chars().rev().collect(), m, etapes)
        }
    };

    debug!("{operation} ({mode}): {expression:?} -> {resultat:?}");

    let note = match operation {
        Operation::InfixToPostfix => {
            "Pipeline: jetons -> pile d'opérateurs (rang >= dépile) -> postfixe."
        }
        Operation::InfixToPrefix => {
            "Pipeline: miroir (inversé, ( <-> )) -> postfixe du miroir -> inversion -> préfixe."
        }
    };

    let d = DemarcheNoyau {
        jetons: jetons_txt,
        miroir: miroir_txt,
        etapes,
        note: note.into(),
    };

    Ok((resultat, d))
}

/// Démarche en texte (une ligne par étape).
pub fn format_etapes(etapes: &[Etape]) -> String {
    etapes
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}
