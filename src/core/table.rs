// =============================================================================
// TABLE — Le moteur d'énumération
// =============================================================================
//
// Étant donnés :
//   - un dictionnaire de DOMAINE (qui sait énumérer et sérialiser)
//   - un dictionnaire de CODOMAINE (qui sait sérialiser)
//   - une fonction f : Domaine → Codomaine, pure et totale
//
// le moteur construit la table de comportement de f :
//
//   1. values = domain.enumerate()
//   2. pour chaque v de values, DANS L'ORDRE :
//        image = f(v)                       (une seule application)
//        ligne = { domain:   domain.serialize(v),
//                  codomain: codomain.serialize(image) }
//   3. renvoyer les lignes, sans tri, sans dédoublonnage, sans filtre
//
// GARANTIES :
//   - nombre de lignes = nombre de valeurs énumérées
//   - la i-ème ligne correspond à la i-ème valeur énumérée
//   - f est appliquée exactement une fois par valeur (pas de cache)
//
// ÉCHECS : la première erreur (énumération, application, sérialisation)
// interrompt tout. Aucune table partielle n'est jamais renvoyée.
//
// =============================================================================

use tracing::{debug, trace};
use super::dictionary::{Enumerator, Serializer};
use super::error::TableError;
use super::plain::{BehaviorTable, Pair};

/// Construit la table de comportement d'une fonction faillible.
///
/// L'erreur renvoyée par `f` remonte telle quelle, sans enveloppe.
/// Les erreurs des dictionnaires sont converties dans le type d'erreur
/// de l'appelant via `From<TableError>`.
pub fn try_serialize_function_table<A, B, E, D, C, F>(
    domain: &D,
    codomain: &C,
    mut f: F,
) -> Result<BehaviorTable, E>
where
    D: Enumerator<A> + Serializer<A> + ?Sized,
    C: Serializer<B> + ?Sized,
    F: FnMut(&A) -> Result<B, E>,
    E: From<TableError>,
{
    let values = domain.enumerate()?;
    let mut table = Vec::with_capacity(values.len());

    for (index, value) in values.iter().enumerate() {
        let image = f(value)?;
        let pair = Pair::new(domain.serialize(value)?, codomain.serialize(&image)?);
        trace!(index, %pair, "ligne énumérée");
        table.push(pair);
    }

    debug!(
        domain = domain.name(),
        codomain = codomain.name(),
        rows = table.len(),
        "table de comportement construite"
    );
    Ok(table)
}

/// Construit la table de comportement d'une fonction totale.
///
/// ```
/// use enumfn::core::dictionary::Boolean;
/// use enumfn::core::table::serialize_function_table;
///
/// let table = serialize_function_table(&Boolean, &Boolean, |b: &bool| !b).unwrap();
/// assert_eq!(table.len(), 2);
/// ```
pub fn serialize_function_table<A, B, D, C, F>(
    domain: &D,
    codomain: &C,
    mut f: F,
) -> Result<BehaviorTable, TableError>
where
    D: Enumerator<A> + Serializer<A> + ?Sized,
    C: Serializer<B> + ?Sized,
    F: FnMut(&A) -> B,
{
    try_serialize_function_table(domain, codomain, |value: &A| Ok::<B, TableError>(f(value)))
}

// =============================================================================
// TESTS
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::dictionary::{Boolean, Number, String as Text};
    use crate::core::finite::{IntRange, Product};
    use crate::core::registry::builtin_dictionaries;
    use serde_json::json;

    #[derive(Debug, PartialEq)]
    enum Boom {
        At(i64),
        Table(std::string::String),
    }

    impl From<TableError> for Boom {
        fn from(err: TableError) -> Self {
            Boom::Table(err.to_string())
        }
    }

    #[test]
    fn test_negation_table() {
        let table = serialize_function_table(&Boolean, &Boolean, |b: &bool| !b).unwrap();
        assert_eq!(
            serde_json::to_value(&table).unwrap(),
            json!([
                {"domain": false, "codomain": true},
                {"domain": true, "codomain": false}
            ])
        );
    }

    #[test]
    fn test_length_matches_enumeration() {
        let range = IntRange::new(0, 9);
        let table = serialize_function_table(&range, &Number, |n: &i64| n * n).unwrap();
        assert_eq!(table.len(), 10);
        assert_eq!(table[3].codomain, json!(9));
    }

    #[test]
    fn test_order_is_preserved() {
        let range = IntRange::new(-3, 3);
        let table = serialize_function_table(&range, &Text, |n: &i64| n.to_string()).unwrap();
        let values = range.enumerate().unwrap();
        for (i, pair) in table.iter().enumerate() {
            assert_eq!(pair.domain, range.serialize(&values[i]).unwrap());
        }
    }

    #[test]
    fn test_one_application_per_value() {
        let mut calls = 0;
        let table = serialize_function_table(&IntRange::new(1, 5), &Boolean, |n: &i64| {
            calls += 1;
            n % 2 == 0
        })
        .unwrap();
        assert_eq!(calls, 5);
        assert_eq!(table.len(), 5);
    }

    #[test]
    fn test_empty_domain_gives_empty_table() {
        let table = serialize_function_table(&IntRange::new(1, 0), &Number, |n: &i64| *n).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_two_argument_function_through_product() {
        let domain = Product::new(Boolean, Boolean);
        let table = serialize_function_table(&domain, &Boolean, |(a, b): &(bool, bool)| *a && *b)
            .unwrap();
        assert_eq!(table.len(), 4);
        assert_eq!(table[3].domain, json!([true, true]));
        assert_eq!(table[3].codomain, json!(true));
        assert_eq!(table[1].codomain, json!(false));
    }

    #[test]
    fn test_domain_without_enumerate_is_unsupported() {
        let dicts = builtin_dictionaries();
        let number = dicts.get("Number").unwrap();
        let boolean = dicts.get("Boolean").unwrap();

        let mut calls = 0;
        let err = serialize_function_table(number, boolean, |v: &serde_json::Value| {
            calls += 1;
            v.clone()
        })
        .unwrap_err();

        assert!(err.is_unsupported());
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_application_failure_aborts_without_partial_table() {
        let mut calls = 0;
        let result = try_serialize_function_table(&IntRange::new(0, 2), &Number, |n: &i64| {
            calls += 1;
            if *n == 1 {
                Err(Boom::At(*n))
            } else {
                Ok(*n)
            }
        });
        // L'erreur de f remonte telle quelle ; la troisième valeur n'est jamais visitée
        assert_eq!(result, Err(Boom::At(1)));
        assert_eq!(calls, 2);
    }

    #[test]
    fn test_serialization_failure_aborts() {
        let result = serialize_function_table(&Boolean, &Number, |b: &bool| {
            if *b { f64::NAN } else { 0.0 }
        });
        assert!(matches!(result, Err(TableError::Serialization { .. })));
    }

    #[test]
    fn test_dictionary_errors_convert_into_caller_error() {
        let number = builtin_dictionaries().get("Number").unwrap();
        let result = try_serialize_function_table(number, number, |v: &serde_json::Value| {
            Ok::<_, Boom>(v.clone())
        });
        assert!(matches!(result, Err(Boom::Table(msg)) if msg.contains("enumerate")));
    }

    #[test]
    fn test_dynamic_dictionaries() {
        let boolean = builtin_dictionaries().get("Boolean").unwrap();
        let table = serialize_function_table(boolean, boolean, |v: &serde_json::Value| {
            json!(!v.as_bool().unwrap_or(false))
        })
        .unwrap();
        assert_eq!(
            serde_json::to_string(&table).unwrap(),
            r#"[{"domain":false,"codomain":true},{"domain":true,"codomain":false}]"#
        );
    }

    #[test]
    #[should_panic(expected = "panique dans f")]
    fn test_panic_in_function_propagates() {
        let _ = serialize_function_table(&Boolean, &Boolean, |_: &bool| -> bool {
            panic!("panique dans f")
        });
    }
}
