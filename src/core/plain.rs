// =============================================================================
// PLAIN — Les données "simples" et les lignes de la table de comportement
// =============================================================================
//
// Une donnée simple (PlainData) est tout ce qu'un format d'échange standard
// sait exprimer : nombres, chaînes, booléens, null, tableaux ordonnés et
// objets à clés textuelles. On réutilise directement serde_json::Value.
//
// Une Pair est UNE ligne de la table de comportement d'une fonction :
//
//   { "domain": <valeur d'entrée sérialisée>, "codomain": <sortie sérialisée> }
//
// La table complète (BehaviorTable) est la suite ordonnée des Pair, dans
// l'ordre EXACT de l'énumération du domaine. Cet ordre est un contrat :
//   énumération → ordre des lignes → ordre du tableau JSON
//
// =============================================================================

use std::fmt;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Forme sérialisée d'une valeur (scalaires, tableaux, objets).
pub type PlainData = Value;

/// Table de comportement : une Pair par valeur du domaine, dans l'ordre
/// d'énumération.
pub type BehaviorTable = Vec<Pair>;

/// Plus grand entier représentable exactement par un f64 (2^53).
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Une ligne de la table : entrée sérialisée ↦ sortie sérialisée.
///
/// L'ordre des champs fixe l'ordre des clés à l'encodage :
/// `domain` d'abord, `codomain` ensuite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pair {
    pub domain: PlainData,
    pub codomain: PlainData,
}

impl Pair {
    pub fn new(domain: PlainData, codomain: PlainData) -> Self {
        Pair { domain, codomain }
    }
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ↦ {}", self.domain, self.codomain)
    }
}

/// Convertit un flottant en donnée simple.
///
/// Les flottants entiers dans ±2^53 deviennent des entiers JSON
/// (`1.0` → `1`, `-0.0` → `0`), comme le fait l'encodage texte standard.
/// NaN et ±∞ n'ont pas de forme JSON : on renvoie `None`.
pub fn number_from_f64(x: f64) -> Option<PlainData> {
    if !x.is_finite() {
        return None;
    }
    if x.fract() == 0.0 && x.abs() < MAX_SAFE_INTEGER {
        return Some(Value::from(x as i64));
    }
    serde_json::Number::from_f64(x).map(Value::Number)
}

// =============================================================================
// TESTS
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_pair_key_order() {
        let p = Pair::new(json!(false), json!(true));
        let text = serde_json::to_string(&p).unwrap();
        assert_eq!(text, r#"{"domain":false,"codomain":true}"#);
    }

    #[test]
    fn test_pair_display() {
        let p = Pair::new(json!(1), json!("un"));
        assert_eq!(p.to_string(), "1 ↦ \"un\"");
    }

    #[test]
    fn test_pair_reads_back() {
        let p: Pair = serde_json::from_str(r#"{"domain":[1,2],"codomain":null}"#).unwrap();
        assert_eq!(p.domain, json!([1, 2]));
        assert_eq!(p.codomain, Value::Null);
    }

    #[test]
    fn test_integral_floats_become_integers() {
        assert_eq!(number_from_f64(1.0), Some(json!(1)));
        assert_eq!(number_from_f64(-0.0), Some(json!(0)));
        assert_eq!(number_from_f64(-42.0), Some(json!(-42)));
        assert_eq!(number_from_f64(0.5), Some(json!(0.5)));
    }

    #[test]
    fn test_non_finite_floats_have_no_form() {
        assert_eq!(number_from_f64(f64::NAN), None);
        assert_eq!(number_from_f64(f64::INFINITY), None);
        assert_eq!(number_from_f64(f64::NEG_INFINITY), None);
    }
}
