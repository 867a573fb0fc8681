// =============================================================================
// DICTIONARY — Les capacités d'un type : sérialiser, énumérer
// =============================================================================
//
// Un "dictionnaire" regroupe ce que le moteur sait faire avec un type :
//
//   Serializer<T>  → valeur → donnée simple (PlainData)
//   Enumerator<T>  → () → toutes les valeurs du type, dans un ordre fixe
//
// Un type de dictionnaire implémente l'un, l'autre ou les deux.
// Le moteur exige Enumerator + Serializer côté DOMAINE et seulement
// Serializer côté CODOMAINE : ces contraintes sont vérifiées à la
// compilation. (La variante dynamique, nommée, est dans core::registry.)
//
// Dictionnaires fournis :
//   Boolean → énumère [false, true], sérialise par identité
//   Number  → sérialise par identité, pas d'énumération (domaine infini)
//   String  → sérialise par identité, pas d'énumération
//
// Les dictionnaires sont des valeurs immuables, partagées, jamais modifiées.
//
// =============================================================================

use serde_json::Value;
use super::error::TableError;
use super::plain::{number_from_f64, PlainData};

/// Ce que tout dictionnaire possède : un nom, utilisé dans les erreurs
/// et les traces.
pub trait Dictionary {
    fn name(&self) -> &str;
}

/// Capacité de sérialisation d'un type.
pub trait Serializer<T: ?Sized>: Dictionary {
    /// Convertit une valeur en donnée simple.
    fn serialize(&self, value: &T) -> Result<PlainData, TableError>;
}

/// Capacité d'énumération d'un type FINI.
///
/// L'ordre renvoyé est significatif : c'est celui des lignes de la table.
pub trait Enumerator<T>: Dictionary {
    /// Produit toutes les valeurs du type, dans un ordre stable.
    fn enumerate(&self) -> Result<Vec<T>, TableError>;
}

impl<D: Dictionary + ?Sized> Dictionary for &D {
    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<T: ?Sized, D: Serializer<T> + ?Sized> Serializer<T> for &D {
    fn serialize(&self, value: &T) -> Result<PlainData, TableError> {
        (**self).serialize(value)
    }
}

impl<T, D: Enumerator<T> + ?Sized> Enumerator<T> for &D {
    fn enumerate(&self) -> Result<Vec<T>, TableError> {
        (**self).enumerate()
    }
}

// ─── Boolean ─────────────────────────────────────────────────────────────────

/// Dictionnaire des booléens.
///
/// L'énumération vaut toujours `[false, true]` : false AVANT true.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Boolean;

impl Dictionary for Boolean {
    fn name(&self) -> &str {
        "Boolean"
    }
}

impl Serializer<bool> for Boolean {
    fn serialize(&self, value: &bool) -> Result<PlainData, TableError> {
        Ok(Value::Bool(*value))
    }
}

impl Enumerator<bool> for Boolean {
    fn enumerate(&self) -> Result<Vec<bool>, TableError> {
        Ok(vec![false, true])
    }
}

// ─── Number ──────────────────────────────────────────────────────────────────

/// Dictionnaire des nombres : sérialisation seulement (domaine non borné).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Number;

impl Dictionary for Number {
    fn name(&self) -> &str {
        "Number"
    }
}

macro_rules! number_serializers {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Serializer<$ty> for Number {
                fn serialize(&self, value: &$ty) -> Result<PlainData, TableError> {
                    Ok(Value::from(*value))
                }
            }
        )*
    };
}

number_serializers!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl Serializer<f64> for Number {
    fn serialize(&self, value: &f64) -> Result<PlainData, TableError> {
        number_from_f64(*value).ok_or_else(|| {
            TableError::serialization(self.name(), format!("{} n'a pas de forme JSON", value))
        })
    }
}

impl Serializer<f32> for Number {
    fn serialize(&self, value: &f32) -> Result<PlainData, TableError> {
        self.serialize(&f64::from(*value))
    }
}

// ─── String ──────────────────────────────────────────────────────────────────

/// Dictionnaire des chaînes : sérialisation seulement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct String;

impl Dictionary for String {
    fn name(&self) -> &str {
        "String"
    }
}

impl Serializer<str> for String {
    fn serialize(&self, value: &str) -> Result<PlainData, TableError> {
        Ok(Value::String(value.to_owned()))
    }
}

impl Serializer<std::string::String> for String {
    fn serialize(&self, value: &std::string::String) -> Result<PlainData, TableError> {
        Ok(Value::String(value.clone()))
    }
}

impl<'a> Serializer<&'a str> for String {
    fn serialize(&self, value: &&'a str) -> Result<PlainData, TableError> {
        Ok(Value::String((*value).to_owned()))
    }
}
