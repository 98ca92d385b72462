// src/noyau/rpn.rs
//
// Shunting -> postfixe (RPN)
// Objectif:
// - Convertir une expression infixe (un caractère = un jeton) en postfixe
// - Une seule passe gauche -> droite, pile d'opérateurs locale à l'appel
//
// Règles:
// - Opérande : sortie directe
// - '(' : empilée sans condition
// - ')' : dépile jusqu'à '(' (la '(' est jetée, jamais sortie)
// - Opérateur : dépile tant que le sommet n'est pas '(' ET rang(sommet) >= rang(courant)
//
// NOTE:
// - ">=" pour TOUS les opérateurs, '^' compris : "a^b^c" => "ab^c^".
//   Associativité gauche partout, c'est la sémantique de référence (pas de cas droit pour '^').
// - Mode tolérant : reproduit la référence à l'identique (')' orpheline ignorée,
//   caractère inconnu = opérateur de rang 0, '(' restante sortie telle quelle).

use std::fmt;
use std::str::FromStr;

use log::debug;

use super::erreur::{Desequilibre, NotationError};
use super::jetons::{precedence, tokenize, Tok};

/// Comportement face à une entrée malformée.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    /// Parenthèses déséquilibrées / caractère inconnu => erreur typée.
    #[default]
    Strict,
    /// Comportement de référence : jamais d'erreur, sortie déterministe.
    Tolerant,
}

impl Mode {
    pub const TOUS: [Mode; 2] = [Mode::Strict, Mode::Tolerant];

    pub const fn nom(self) -> &'static str {
        match self {
            Mode::Strict => "strict",
            Mode::Tolerant => "tolerant",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.nom())
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "strict" => Ok(Mode::Strict),
            "tolerant" | "tolérant" | "lenient" => Ok(Mode::Tolerant),
            autre => Err(format!("mode inconnu: '{autre}'")),
        }
    }
}

/// Une étape de la démarche : état après traitement d'un caractère.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Etape {
    /// Caractère lu ; `None` = vidage final de la pile.
    pub jeton: Option<char>,
    pub pile: String,
    pub sortie: String,
}

impl fmt::Display for Etape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.jeton {
            Some(c) => write!(f, "{c:<3}")?,
            None => write!(f, "fin")?,
        }
        write!(f, " | pile: {:<12} | sortie: {}", self.pile, self.sortie)
    }
}

/// Infixe -> postfixe.
///
/// Exemples:
///   "a+b*c"   => "abc*+"
///   "(a+b)*c" => "ab+c*"
///   ""        => ""
pub fn to_postfix(expression: &str, mode: Mode) -> Result<String, NotationError> {
    let jetons = tokenize(expression);
    shunting(&jetons, mode, None)
}

/// Comme `to_postfix`, avec la démarche pas à pas (pile + sortie après chaque caractère).
pub fn to_postfix_trace(
    expression: &str,
    mode: Mode,
) -> Result<(String, Vec<Etape>), NotationError> {
    let jetons = tokenize(expression);
    let mut etapes = Vec::with_capacity(jetons.len() + 1);
    let sortie = shunting(&jetons, mode, Some(&mut etapes))?;
    Ok((sortie, etapes))
}

/// Mode tolérant : ne peut pas échouer.
pub fn to_postfix_tolerant(expression: &str) -> String {
    let jetons = tokenize(expression);
    // Le mode tolérant ne construit aucune erreur.
    shunting(&jetons, Mode::Tolerant, None).unwrap_or_default()
}

fn shunting(
    jetons: &[Tok],
    mode: Mode,
    mut trace: Option<&mut Vec<Etape>>,
) -> Result<String, NotationError> {
    let mut sortie = String::with_capacity(jetons.len());
    // (jeton, position dans l'entrée) ; jamais d'opérande ici
    let mut pile: Vec<(Tok, usize)> = Vec::new();

    for (position, tok) in jetons.iter().copied().enumerate() {
        match tok {
            Tok::Operande(c) => sortie.push(c),

            Tok::LPar => pile.push((tok, position)),

            Tok::RPar => {
                // dépile jusqu'à '('
                let mut fermee = false;
                while let Some((top, _)) = pile.pop() {
                    if top == Tok::LPar {
                        fermee = true;
                        break;
                    }
                    sortie.push(top.symbole());
                }

                // pile vidée sans '(' : la référence ignore, le strict refuse
                if !fermee && mode == Mode::Strict {
                    return Err(NotationError::MalformedExpression {
                        position,
                        cause: Desequilibre::FermanteOrpheline,
                    });
                }
            }

            Tok::Inconnu(caractere) if mode == Mode::Strict => {
                return Err(NotationError::UnknownToken {
                    caractere,
                    position,
                });
            }

            Tok::Op(_) | Tok::Inconnu(_) => {
                let p_tok = precedence(&tok);
                while let Some(&(top, _)) = pile.last() {
                    if top == Tok::LPar || precedence(&top) < p_tok {
                        break;
                    }
                    sortie.push(top.symbole());
                    pile.pop();
                }
                pile.push((tok, position));
            }
        }

        if let Some(etapes) = trace.as_deref_mut() {
            etapes.push(Etape {
                jeton: Some(tok.symbole()),
                pile: texte_pile(&pile),
                sortie: sortie.clone(),
            });
        }
    }

    // vide la pile
    while let Some((top, position)) = pile.pop() {
        if top == Tok::LPar && mode == Mode::Strict {
            return Err(NotationError::MalformedExpression {
                position,
                cause: Desequilibre::OuvranteNonFermee,
            });
        }
        sortie.push(top.symbole());
    }

    if let Some(etapes) = trace {
        etapes.push(Etape {
            jeton: None,
            pile: String::new(),
            sortie: sortie.clone(),
        });
    }

    debug!("postfixe ({mode}): {} jetons -> {sortie:?}", jetons.len());
    Ok(sortie)
}

fn texte_pile(pile: &[(Tok, usize)]) -> String {
    pile.iter().map(|(t, _)| t.symbole()).collect()
}
