// src/noyau/operation.rs
//
// Contrat de l'appelant : requête JSON -> réponse JSON.
//
//   {"operation": "infix_to_postfix", "inputs": {"expression": "a+b"}}
//   => {"success": true, "result": "ab+"}
//
// `inputs` / `expression` absents => "" (résultat "").

use std::fmt;
use std::str::FromStr;

use log::warn;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::erreur::NotationError;
use super::prefixe::to_prefix;
use super::rpn::{to_postfix, Mode};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Operation {
    #[default]
    InfixToPostfix,
    InfixToPrefix,
}

impl Operation {
    pub const TOUTES: [Operation; 2] = [Operation::InfixToPostfix, Operation::InfixToPrefix];

    /// Identifiant côté requête.
    pub const fn nom(self) -> &'static str {
        match self {
            Operation::InfixToPostfix => "infix_to_postfix",
            Operation::InfixToPrefix => "infix_to_prefix",
        }
    }

    /// Libellé court (UI).
    pub const fn libelle(self) -> &'static str {
        match self {
            Operation::InfixToPostfix => "Postfixe",
            Operation::InfixToPrefix => "Préfixe",
        }
    }

    pub fn executer(self, expression: &str, mode: Mode) -> Result<String, NotationError> {
        match self {
            Operation::InfixToPostfix => to_postfix(expression, mode),
            Operation::InfixToPrefix => to_prefix(expression, mode),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.nom())
    }
}

impl FromStr for Operation {
    type Err = RequeteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operation::TOUTES
            .into_iter()
            .find(|op| op.nom() == s)
            .ok_or_else(|| RequeteError::OperationNonSupportee(s.to_string()))
    }
}

#[derive(Error, Debug)]
pub enum RequeteError {
    #[error("Invalid request: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported operation")]
    OperationNonSupportee(String),

    #[error(transparent)]
    Notation(#[from] NotationError),
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Entrees {
    #[serde(default)]
    pub expression: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Requete {
    #[serde(default)]
    pub operation: String,
    #[serde(default)]
    pub inputs: Entrees,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Reponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Reponse {
    pub fn succes(result: String) -> Self {
        Self {
            success: true,
            result: Some(result),
            message: None,
        }
    }

    pub fn echec(err: &RequeteError) -> Self {
        Self {
            success: false,
            result: None,
            message: Some(err.to_string()),
        }
    }
}

/// Dispatch d'une requête déjà désérialisée.
pub fn traiter(requete: &Requete, mode: Mode) -> Result<String, RequeteError> {
    let operation: Operation = requete.operation.parse()?;
    Ok(operation.executer(&requete.inputs.expression, mode)?)
}

/// Corps JSON -> réponse JSON. Toute erreur de requête devient `success: false`.
pub fn traiter_json(corps: &str, mode: Mode) -> Result<String, serde_json::Error> {
    let reponse = match serde_json::from_str::<Requete>(corps)
        .map_err(RequeteError::from)
        .and_then(|r| traiter(&r, mode))
    {
        Ok(result) => Reponse::succes(result),
        Err(e) => {
            warn!("requête refusée: {e}");
            Reponse::echec(&e)
        }
    };
    serde_json::to_string(&reponse)
}
