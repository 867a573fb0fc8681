// =============================================================================
// REGISTRY — Dictionnaires dynamiques, rangés par nom
// =============================================================================
//
// Les dictionnaires typés (core::dictionary) vérifient tout à la compilation.
// Mais on veut aussi pouvoir :
//   - retrouver un dictionnaire par son NOM ("Boolean", "Number", "String")
//   - en ajouter à la volée, sans déclarer de nouveau type Rust
//
// Un DynDictionary travaille directement sur des PlainData :
//   serialize : PlainData → PlainData      (toujours présent)
//   enumerate : () → Vec<PlainData>        (OPTIONNEL)
//
// Si `enumerate` est absent, l'erreur "opération non supportée" est levée
// au moment de l'appel, pas avant : c'est le moteur qui la rencontre en
// essayant d'énumérer le domaine.
//
// Le registre intégré est construit une seule fois, puis partagé en
// lecture seule par tout le processus.
//
// =============================================================================

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, OnceLock};
use serde_json::Value;
use super::dictionary::{Dictionary, Enumerator, Serializer};
use super::error::TableError;
use super::plain::PlainData;

type SerializeFn = dyn Fn(&PlainData) -> Result<PlainData, TableError> + Send + Sync;
type EnumerateFn = dyn Fn() -> Vec<PlainData> + Send + Sync;

/// Dictionnaire nommé, sans type Rust associé.
#[derive(Clone)]
pub struct DynDictionary {
    name: String,
    serialize: Arc<SerializeFn>,
    enumerate: Option<Arc<EnumerateFn>>,
}

impl DynDictionary {
    /// Crée un dictionnaire qui sait seulement sérialiser.
    pub fn new<S>(name: &str, serialize: S) -> Self
    where
        S: Fn(&PlainData) -> Result<PlainData, TableError> + Send + Sync + 'static,
    {
        DynDictionary {
            name: name.to_string(),
            serialize: Arc::new(serialize),
            enumerate: None,
        }
    }

    /// Ajoute la capacité d'énumération.
    pub fn with_enumerate<E>(mut self, enumerate: E) -> Self
    where
        E: Fn() -> Vec<PlainData> + Send + Sync + 'static,
    {
        self.enumerate = Some(Arc::new(enumerate));
        self
    }

    /// Dictionnaire fini ad hoc : les valeurs données, dans cet ordre,
    /// sérialisées par identité.
    pub fn from_values(name: &str, values: Vec<PlainData>) -> Self {
        DynDictionary::new(name, |v| Ok(v.clone())).with_enumerate(move || values.clone())
    }

    pub fn can_enumerate(&self) -> bool {
        self.enumerate.is_some()
    }
}

impl fmt::Debug for DynDictionary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynDictionary")
            .field("name", &self.name)
            .field("enumerate", &self.can_enumerate())
            .finish()
    }
}

impl Dictionary for DynDictionary {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Serializer<PlainData> for DynDictionary {
    fn serialize(&self, value: &PlainData) -> Result<PlainData, TableError> {
        (self.serialize)(value)
    }
}

impl Enumerator<PlainData> for DynDictionary {
    fn enumerate(&self) -> Result<Vec<PlainData>, TableError> {
        match &self.enumerate {
            Some(enumerate) => Ok(enumerate()),
            None => Err(TableError::unsupported(&self.name, "enumerate")),
        }
    }
}

/// Identité restreinte à un genre de valeur JSON.
fn identity_of_kind(
    name: &'static str,
    kind: &'static str,
    accepts: fn(&Value) -> bool,
) -> impl Fn(&PlainData) -> Result<PlainData, TableError> + Send + Sync + 'static {
    move |value| {
        if accepts(value) {
            Ok(value.clone())
        } else {
            Err(TableError::serialization(
                name,
                format!("{} n'est pas {}", value, kind),
            ))
        }
    }
}

/// Le registre : nom → dictionnaire.
///
/// Extensible par l'appelant ; les dictionnaires ad hoc peuvent aussi
/// être passés directement au moteur sans enregistrement.
#[derive(Debug, Clone)]
pub struct Dictionaries {
    entries: HashMap<String, DynDictionary>,
}

impl Dictionaries {
    /// Registre contenant Boolean, Number et String.
    pub fn builtin() -> Self {
        let mut dicts = Dictionaries::empty();
        dicts
            .insert(
                DynDictionary::new("Boolean", identity_of_kind("Boolean", "un booléen", Value::is_boolean))
                    .with_enumerate(|| vec![Value::Bool(false), Value::Bool(true)]),
            )
            .insert(DynDictionary::new(
                "Number",
                identity_of_kind("Number", "un nombre", Value::is_number),
            ))
            .insert(DynDictionary::new(
                "String",
                identity_of_kind("String", "une chaîne", Value::is_string),
            ));
        dicts
    }

    /// Registre vide (utile pour les tests)
    pub fn empty() -> Self {
        Dictionaries {
            entries: HashMap::new(),
        }
    }

    /// Ajoute (ou remplace) un dictionnaire, indexé par son nom.
    pub fn insert(&mut self, dict: DynDictionary) -> &mut Self {
        self.entries.insert(dict.name.clone(), dict);
        self
    }

    pub fn get(&self, name: &str) -> Option<&DynDictionary> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Noms enregistrés, triés
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(|k| k.as_str()).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Dictionaries {
    fn default() -> Self {
        Dictionaries::builtin()
    }
}

/// Registre intégré, partagé par tout le processus.
pub fn builtin_dictionaries() -> &'static Dictionaries {
    static BUILTIN: OnceLock<Dictionaries> = OnceLock::new();
    BUILTIN.get_or_init(Dictionaries::builtin)
}

// =============================================================================
// TESTS
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_builtin_names() {
        let dicts = Dictionaries::builtin();
        assert_eq!(dicts.names(), vec!["Boolean", "Number", "String"]);
        assert!(dicts.contains("Boolean"));
        assert!(!dicts.contains("Date"));
    }

    #[test]
    fn test_builtin_boolean_enumerates() {
        let boolean = builtin_dictionaries().get("Boolean").unwrap();
        assert!(boolean.can_enumerate());
        assert_eq!(boolean.enumerate().unwrap(), vec![json!(false), json!(true)]);
        // Même résultat au second appel
        assert_eq!(boolean.enumerate().unwrap(), vec![json!(false), json!(true)]);
    }

    #[test]
    fn test_builtin_identity() {
        let dicts = builtin_dictionaries();
        assert_eq!(dicts.get("Boolean").unwrap().serialize(&json!(true)).unwrap(), json!(true));
        assert_eq!(dicts.get("Number").unwrap().serialize(&json!(3.25)).unwrap(), json!(3.25));
        assert_eq!(dicts.get("String").unwrap().serialize(&json!("abc")).unwrap(), json!("abc"));
    }

    #[test]
    fn test_builtin_rejects_wrong_kind() {
        let number = builtin_dictionaries().get("Number").unwrap();
        let err = number.serialize(&json!("pas un nombre")).unwrap_err();
        assert!(matches!(err, TableError::Serialization { .. }));
    }

    #[test]
    fn test_number_cannot_enumerate() {
        let number = builtin_dictionaries().get("Number").unwrap();
        assert!(!number.can_enumerate());
        let err = number.enumerate().unwrap_err();
        assert!(err.is_unsupported());
        assert!(err.to_string().contains("Number"));
    }

    #[test]
    fn test_add_custom_dictionary() {
        let mut dicts = Dictionaries::builtin();
        dicts.insert(DynDictionary::from_values(
            "Color",
            vec![json!("red"), json!("green"), json!("blue")],
        ));
        assert_eq!(dicts.len(), 4);
        let color = dicts.get("Color").unwrap();
        assert_eq!(color.enumerate().unwrap()[1], json!("green"));
        assert_eq!(format!("{:?}", color), "DynDictionary { name: \"Color\", enumerate: true }");
    }

    #[test]
    fn test_insert_replaces_same_name() {
        let mut dicts = Dictionaries::empty();
        dicts.insert(DynDictionary::new("X", |v| Ok(v.clone())));
        dicts.insert(DynDictionary::from_values("X", vec![json!(1)]));
        assert_eq!(dicts.len(), 1);
        assert!(dicts.get("X").unwrap().can_enumerate());
    }
}
