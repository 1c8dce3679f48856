//! src/app/etat.rs
//!
//! État UI (sans vue) : le moteur + ce qu’il faut afficher.
//!
//! Rôle : router chaque touche vers le moteur et retenir la dernière sortie
//! (résultat formaté ou message d’erreur). Aucune logique d’expression ici,
//! toute la validation vit dans le noyau.

use crate::noyau::Moteur;

#[derive(Clone, Debug)]
pub struct AppCalc {
    pub moteur: Moteur,

    /// Dernier résultat formaté (vide tant que rien n’a été évalué).
    pub resultat: String,

    /// Message d’erreur d’évaluation (vide si la dernière évaluation a réussi).
    pub erreur: String,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            moteur: Moteur::new(),
            resultat: String::new(),
            erreur: String::new(),
        }
    }
}

impl AppCalc {
    /* ------------------------ Actions « touches » ------------------------ */

    /// Chiffre / opérateur / parenthèse. Une touche refusée est ignorée
    /// (contrat du moteur : refus = aucune mutation).
    pub fn touche(&mut self, c: &str) {
        self.moteur.ajouter_caractere(c);
    }

    pub fn point(&mut self) {
        self.moteur.ajouter_point();
    }

    pub fn signe(&mut self) {
        self.moteur.basculer_signe();
    }

    pub fn retour(&mut self) {
        self.moteur.retour_arriere();
    }

    /// CE : retire le dernier jeton.
    pub fn efface_saisie(&mut self) {
        self.moteur.effacer_saisie();
    }

    /// C : vide la saisie et le message d’erreur. L’historique survit.
    pub fn efface_tout(&mut self) {
        self.moteur.effacer();
        self.erreur.clear();
    }

    /// « = » : évalue et dépose résultat OU erreur (jamais les deux).
    pub fn egal(&mut self) {
        match self.moteur.evaluer() {
            Ok(resultat) => {
                self.resultat = resultat;
                self.erreur.clear();
            }
            Err(e) => {
                // la saisie reste intacte côté moteur ; on garde aussi
                // le dernier résultat affiché
                self.erreur = e.to_string();
            }
        }
    }
}
