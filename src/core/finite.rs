// =============================================================================
// FINITE — Dictionnaires composables pour des types finis "maison"
// =============================================================================
//
// Boolean ne suffit pas toujours. Pour décrire d'autres domaines finis, on
// compose des dictionnaires :
//
//   Unit              → le type () : une seule valeur, sérialisée en null
//   IntRange          → un intervalle borné d'entiers [start, end]
//   Product(A, B)     → les couples (a, b), ordre lexicographique
//   Maybe(D)          → Option<T> : None puis Some(x) pour chaque x
//   Listed<T>         → une liste explicite de valeurs serde
//   Serde             → sérialiseur générique pour tout T: Serialize
//
// EXEMPLE :
//   Product::new(Boolean, Boolean) énumère
//     (false, false), (false, true), (true, false), (true, true)
//   et sérialise (true, false) en [true, false].
//
// Les fonctions à plusieurs arguments se modélisent ainsi : un seul
// argument, de type produit.
//
// =============================================================================

use serde::Serialize;
use serde_json::Value;
use super::dictionary::{Dictionary, Enumerator, Serializer};
use super::error::TableError;
use super::plain::PlainData;

// ─── Unit ────────────────────────────────────────────────────────────────────

/// Le type à une seule valeur.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Unit;

impl Dictionary for Unit {
    fn name(&self) -> &str {
        "Unit"
    }
}

impl Serializer<()> for Unit {
    fn serialize(&self, _value: &()) -> Result<PlainData, TableError> {
        Ok(Value::Null)
    }
}

impl Enumerator<()> for Unit {
    fn enumerate(&self) -> Result<Vec<()>, TableError> {
        Ok(vec![()])
    }
}

// ─── IntRange ────────────────────────────────────────────────────────────────

/// Intervalle d'entiers, bornes incluses, énuméré par ordre croissant.
///
/// Si `start > end`, l'intervalle est vide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntRange {
    pub start: i64,
    pub end: i64,
}

impl IntRange {
    pub fn new(start: i64, end: i64) -> Self {
        IntRange { start, end }
    }

    pub fn contains(&self, value: i64) -> bool {
        self.start <= value && value <= self.end
    }

    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }
}

impl Dictionary for IntRange {
    fn name(&self) -> &str {
        "IntRange"
    }
}

impl Serializer<i64> for IntRange {
    fn serialize(&self, value: &i64) -> Result<PlainData, TableError> {
        if !self.contains(*value) {
            return Err(TableError::serialization(
                self.name(),
                format!("{} hors de [{}, {}]", value, self.start, self.end),
            ));
        }
        Ok(Value::from(*value))
    }
}

impl Enumerator<i64> for IntRange {
    fn enumerate(&self) -> Result<Vec<i64>, TableError> {
        Ok((self.start..=self.end).collect())
    }
}

// ─── Product ─────────────────────────────────────────────────────────────────

/// Produit de deux dictionnaires : le type des couples `(A, B)`.
///
/// L'énumération parcourt le premier composant à l'extérieur :
/// tous les couples `(a0, _)` avant `(a1, _)`.
#[derive(Debug, Clone)]
pub struct Product<DA, DB> {
    pub first: DA,
    pub second: DB,
    name: String,
}

impl<DA: Dictionary, DB: Dictionary> Product<DA, DB> {
    pub fn new(first: DA, second: DB) -> Self {
        let name = format!("{} × {}", first.name(), second.name());
        Product { first, second, name }
    }
}

impl<DA, DB> Dictionary for Product<DA, DB> {
    fn name(&self) -> &str {
        &self.name
    }
}

impl<A, B, DA, DB> Serializer<(A, B)> for Product<DA, DB>
where
    DA: Serializer<A>,
    DB: Serializer<B>,
{
    fn serialize(&self, value: &(A, B)) -> Result<PlainData, TableError> {
        Ok(Value::Array(vec![
            self.first.serialize(&value.0)?,
            self.second.serialize(&value.1)?,
        ]))
    }
}

impl<A, B, DA, DB> Enumerator<(A, B)> for Product<DA, DB>
where
    A: Clone,
    B: Clone,
    DA: Enumerator<A>,
    DB: Enumerator<B>,
{
    fn enumerate(&self) -> Result<Vec<(A, B)>, TableError> {
        let firsts = self.first.enumerate()?;
        let seconds = self.second.enumerate()?;

        let mut values = Vec::with_capacity(firsts.len() * seconds.len());
        for a in &firsts {
            for b in &seconds {
                values.push((a.clone(), b.clone()));
            }
        }
        Ok(values)
    }
}

// ─── Maybe ───────────────────────────────────────────────────────────────────

/// `Option<T>` au-dessus d'un dictionnaire de `T`.
/// `None` est énuméré en premier et sérialisé en `null`.
#[derive(Debug, Clone)]
pub struct Maybe<D> {
    pub inner: D,
    name: String,
}

impl<D: Dictionary> Maybe<D> {
    pub fn new(inner: D) -> Self {
        let name = format!("Maybe {}", inner.name());
        Maybe { inner, name }
    }
}

impl<D> Dictionary for Maybe<D> {
    fn name(&self) -> &str {
        &self.name
    }
}

impl<T, D: Serializer<T>> Serializer<Option<T>> for Maybe<D> {
    fn serialize(&self, value: &Option<T>) -> Result<PlainData, TableError> {
        match value {
            None => Ok(Value::Null),
            Some(x) => self.inner.serialize(x),
        }
    }
}

impl<T, D: Enumerator<T>> Enumerator<Option<T>> for Maybe<D> {
    fn enumerate(&self) -> Result<Vec<Option<T>>, TableError> {
        let mut values = vec![None];
        values.extend(self.inner.enumerate()?.into_iter().map(Some));
        Ok(values)
    }
}

// ─── Listed ──────────────────────────────────────────────────────────────────

/// Type fini décrit par la liste explicite de ses valeurs, dans l'ordre
/// voulu. La sérialisation passe par serde.
#[derive(Debug, Clone)]
pub struct Listed<T> {
    name: String,
    values: Vec<T>,
}

impl<T> Listed<T> {
    pub fn new(name: &str, values: Vec<T>) -> Self {
        Listed {
            name: name.to_string(),
            values,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<T> Dictionary for Listed<T> {
    fn name(&self) -> &str {
        &self.name
    }
}

impl<T: Serialize> Serializer<T> for Listed<T> {
    fn serialize(&self, value: &T) -> Result<PlainData, TableError> {
        serde_json::to_value(value)
            .map_err(|e| TableError::serialization(&self.name, e.to_string()))
    }
}

impl<T: Clone> Enumerator<T> for Listed<T> {
    fn enumerate(&self) -> Result<Vec<T>, TableError> {
        Ok(self.values.clone())
    }
}

// ─── Serde ───────────────────────────────────────────────────────────────────

/// Sérialiseur générique (pas d'énumération) pour tout type `Serialize`.
/// Pratique côté codomaine pour des structures ou des enums.
#[derive(Debug, Clone)]
pub struct Serde {
    name: String,
}

impl Serde {
    pub fn new(name: &str) -> Self {
        Serde {
            name: name.to_string(),
        }
    }
}

impl Default for Serde {
    fn default() -> Self {
        Serde::new("Serde")
    }
}

impl Dictionary for Serde {
    fn name(&self) -> &str {
        &self.name
    }
}

impl<T: Serialize + ?Sized> Serializer<T> for Serde {
    fn serialize(&self, value: &T) -> Result<PlainData, TableError> {
        serde_json::to_value(value)
            .map_err(|e| TableError::serialization(&self.name, e.to_string()))
    }
}
