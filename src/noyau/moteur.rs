// src/noyau/moteur.rs
//
// Moteur d’expression : séquence infixe de jetons éditée touche par touche,
// conversion postfixe + évaluation à la demande, historique borné.
//
// Politique opérateurs : STRICTE — un opérateur est refusé si la séquence
// est vide ou si le dernier jeton est déjà un opérateur. (L’alternative
// « le dernier opérateur gagne » se rencontre ailleurs ; refuser garde la
// séquence toujours bien formée.)
//
// Multiplication implicite : 5( devient 5 * ( — seulement quand le jeton
// précédent est un nombre ET que la parenthèse entrante est ouvrante.

use super::erreur::ErreurEval;
use super::format::format_resultat;
use super::jetons::{format_jetons, jeton_operateur, jeton_parenthese, Jeton};
use super::postfixe::{en_postfixe, evaluer_postfixe};

/// Taille maximale de l’historique (les plus anciens sortent d’abord).
const HISTORIQUE_MAX: usize = 6;

/// Moteur de calcul : propriétaire exclusif des jetons et de l’historique.
///
/// Une instance par session ; `effacer()` vide la saisie mais l’historique
/// survit toute la vie du moteur.
#[derive(Clone, Debug, Default)]
pub struct Moteur {
    jetons: Vec<Jeton>,
    derniere_eval: bool,
    historique: Vec<String>, // plus récent en tête, len <= HISTORIQUE_MAX
    derniere_postfixe: String,
}

impl Moteur {
    pub fn new() -> Self {
        Self::default()
    }

    /* ------------------------ Saisie (une touche = une mutation) ------------------------ */

    /// Une touche « caractère » : chiffre, opérateur ou parenthèse.
    ///
    /// Retourne false (aucune mutation) si la touche est refusée :
    /// saisie vide, caractère hors alphabet, opérateur mal placé.
    pub fn ajouter_caractere(&mut self, saisie: &str) -> bool {
        let saisie = saisie.trim();
        let mut it = saisie.chars();
        let c = match (it.next(), it.next()) {
            (Some(c), None) => c,
            _ => return false,
        };

        let operateur = jeton_operateur(c);
        let parenthese = jeton_parenthese(c);

        // alphabet fermé : on refuse AVANT toute mutation
        if operateur.is_none() && parenthese.is_none() && !c.is_ascii_digit() {
            return false;
        }

        // après « = » : un opérateur enchaîne sur le résultat,
        // tout le reste repart d’une saisie vierge
        if self.derniere_eval && operateur.is_none() {
            self.jetons.clear();
        }
        self.derniere_eval = false;

        if let Some(op) = operateur {
            match self.jetons.last() {
                None => return false,
                Some(dernier) if dernier.est_operateur() => return false,
                _ => {}
            }
            self.jetons.push(op);
            return true;
        }

        if let Some(par) = parenthese {
            if par == Jeton::ParG && matches!(self.jetons.last(), Some(j) if j.est_nombre()) {
                self.jetons.push(Jeton::Fois);
            }
            self.jetons.push(par);
            return true;
        }

        // chiffre : prolonge le dernier nombre, sinon en commence un
        match self.jetons.last() {
            Some(Jeton::Nombre(texte)) => {
                let mut nouveau = texte.clone();
                nouveau.push(c);
                self.remplace_dernier(Jeton::Nombre(nouveau));
            }
            _ => self.jetons.push(Jeton::Nombre(c.to_string())),
        }
        true
    }

    /// Point décimal : au plus un par nombre ; sans nombre en cours, démarre "0.".
    pub fn ajouter_point(&mut self) -> bool {
        match self.jetons.last() {
            Some(Jeton::Nombre(texte)) => {
                if texte.contains('.') {
                    return false;
                }
                let mut nouveau = texte.clone();
                nouveau.push('.');
                self.remplace_dernier(Jeton::Nombre(nouveau));
                true
            }
            _ => {
                self.jetons.push(Jeton::Nombre("0.".to_string()));
                true
            }
        }
    }

    /// ± : remplace le dernier nombre par son opposé (re-rendu décimal signé).
    pub fn basculer_signe(&mut self) -> bool {
        let valeur = match self.jetons.last() {
            Some(Jeton::Nombre(texte)) => match texte.parse::<f64>() {
                Ok(v) => v,
                Err(_) => return false,
            },
            _ => return false,
        };
        self.remplace_dernier(Jeton::Nombre(format!("{}", -valeur)));
        true
    }

    /// Retour arrière : ronge le dernier nombre caractère par caractère,
    /// retire les autres jetons d’un coup. Après « = » : tout effacer et
    /// repartir à neuf (on n’édite pas un résultat au caractère près).
    pub fn retour_arriere(&mut self) -> bool {
        if self.jetons.is_empty() || self.derniere_eval {
            self.effacer();
            return false;
        }

        match self.jetons.last() {
            Some(Jeton::Nombre(texte)) if texte.chars().count() > 1 => {
                let mut nouveau = texte.clone();
                nouveau.pop();
                self.remplace_dernier(Jeton::Nombre(nouveau));
            }
            _ => {
                self.jetons.pop();
            }
        }
        true
    }

    /// CE : retire seulement le dernier jeton.
    pub fn effacer_saisie(&mut self) -> bool {
        self.jetons.pop().is_some()
    }

    /// C : vide la saisie. L’historique n’est PAS touché.
    pub fn effacer(&mut self) {
        self.jetons.clear();
    }

    /// Rendu de la saisie en cours : textes canoniques concaténés, sans séparateur.
    pub fn calcul_courant(&self) -> String {
        self.jetons.iter().map(Jeton::texte).collect()
    }

    /* ------------------------ Évaluation + historique ------------------------ */

    /// « = » : infixe -> postfixe -> f64 -> chaîne formatée.
    ///
    /// En cas d’erreur, la saisie reste intacte. En cas de succès, la
    /// séquence est remplacée par l’unique nombre résultat (texte brut
    /// ré-éditable, pas la forme groupée) et l’historique reçoit la forme
    /// formatée en tête.
    pub fn evaluer(&mut self) -> Result<String, ErreurEval> {
        if self.jetons.is_empty() {
            return Err(ErreurEval::ExpressionVide);
        }

        let postfixe = en_postfixe(&self.jetons)?;
        let valeur = evaluer_postfixe(&postfixe)?;
        self.derniere_postfixe = format_jetons(&postfixe);

        self.jetons.clear();
        self.jetons.push(Jeton::Nombre(format!("{valeur}")));
        self.derniere_eval = true;

        let affichage = format_resultat(valeur);
        self.ajouter_historique(affichage.clone());
        Ok(affichage)
    }

    /// Historique : plus récent en tête, joint par retour à la ligne.
    pub fn historique(&self) -> String {
        self.historique.join("\n")
    }

    /// Forme postfixe de la dernière évaluation réussie (vide avant la première).
    pub fn derniere_postfixe(&self) -> &str {
        &self.derniere_postfixe
    }

    fn ajouter_historique(&mut self, resultat: String) {
        self.historique.insert(0, resultat);
        self.historique.truncate(HISTORIQUE_MAX);
    }

    /// Remplace le dernier jeton (jetons immuables : jamais de mutation en place).
    fn remplace_dernier(&mut self, jeton: Jeton) {
        let fin = self.jetons.len() - 1;
        self.jetons[fin] = jeton;
    }
}
