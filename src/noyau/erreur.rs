// src/noyau/erreur.rs

use std::error::Error;
use std::fmt;

/// Erreur d’évaluation, remontée à l’appelant (UI) — jamais un panic.
///
/// Contrat : une évaluation en erreur ne modifie PAS la séquence de jetons,
/// l’utilisateur garde sa saisie pour la corriger.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErreurEval {
    /// Évaluation demandée sur une séquence vide.
    ExpressionVide,
    /// `)` sans `(` correspondante, ou `(` jamais fermée.
    ParentheseNonAppariee,
    /// Pile de valeurs incohérente (opérande manquante ou en trop),
    /// ou nombre non lisible au moment de l’évaluation.
    ExpressionMalFormee,
}

impl fmt::Display for ErreurEval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            ErreurEval::ExpressionVide => "expression vide",
            ErreurEval::ParentheseNonAppariee => "parenthèses non appariées",
            ErreurEval::ExpressionMalFormee => "expression mal formée",
        };
        f.write_str(msg)
    }
}

impl Error for ErreurEval {}
