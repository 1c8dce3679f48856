//! Noyau de la calculatrice (aucune dépendance UI)
//!
//! Organisation interne :
//! - jetons.rs   : modèle de jeton (nombre / opérateur / parenthèse)
//! - moteur.rs   : machine de saisie touche par touche + historique + évaluation
//! - postfixe.rs : shunting-yard + évaluation postfixe
//! - format.rs   : affichage du résultat (seuils scientifiques, milliers)
//! - erreur.rs   : erreurs d’évaluation

pub mod erreur;
pub mod format;
pub mod jetons;
pub mod moteur;
pub mod postfixe;

#[cfg(test)]
mod tests_moteur;

// API publique minimale
pub use erreur::ErreurEval;
pub use moteur::Moteur;
