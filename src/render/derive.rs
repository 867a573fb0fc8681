// =============================================================================
// DERIVE — Donner à une fonction un affichage tiré de sa table
// =============================================================================
//
// Deux façons d'obtenir le texte d'une fonction :
//
//   1. Un THUNK : derive_display_thunk(domain, codomain, f) renvoie une
//      closure sans argument. À CHAQUE appel, elle relance l'énumération
//      complète et encode la table en JSON compact. Rien n'est mis en
//      cache : l'énumération n'a lieu qu'au moment de l'affichage.
//
//   2. Un WRAPPER : Tabulated regroupe la fonction et ses dictionnaires.
//      Il s'applique comme la fonction (`call`) et s'affiche comme sa
//      table (`Display`, `{:#}` pour la version indentée). Il se
//      sérialise aussi en JSON comme sa table (serde::Serialize).
//
// ATTENTION : l'affichage n'est pas tolérant aux pannes. Si l'énumération
// échoue, le thunk renvoie l'erreur et `Display` renvoie fmt::Error.
//
// =============================================================================

use std::fmt;
use std::marker::PhantomData;
use serde::ser::Error as _;
use serde::Serialize;
use crate::core::dictionary::{Dictionary, Enumerator, Serializer};
use crate::core::error::TableError;
use crate::core::plain::BehaviorTable;
use crate::core::table::{serialize_function_table, try_serialize_function_table};
use super::json::Json;
use super::Renderer;

/// Thunk de rendu pour une fonction faillible, avec un renderer au choix.
pub fn try_derive_rendered_thunk<A, B, E, R, D, C, F>(
    renderer: R,
    domain: D,
    codomain: C,
    f: F,
) -> impl Fn() -> Result<String, E>
where
    R: Renderer,
    D: Enumerator<A> + Serializer<A>,
    C: Serializer<B>,
    F: Fn(&A) -> Result<B, E>,
    E: From<TableError>,
{
    move || {
        let table = try_serialize_function_table(&domain, &codomain, &f)?;
        Ok(renderer.render(&table)?)
    }
}

/// Thunk de rendu pour une fonction totale, avec un renderer au choix.
pub fn derive_rendered_thunk<A, B, R, D, C, F>(
    renderer: R,
    domain: D,
    codomain: C,
    f: F,
) -> impl Fn() -> Result<String, TableError>
where
    R: Renderer,
    D: Enumerator<A> + Serializer<A>,
    C: Serializer<B>,
    F: Fn(&A) -> B,
{
    try_derive_rendered_thunk(renderer, domain, codomain, move |value: &A| {
        Ok::<B, TableError>(f(value))
    })
}

/// Thunk d'affichage JSON compact d'une fonction faillible.
pub fn try_derive_display_thunk<A, B, E, D, C, F>(
    domain: D,
    codomain: C,
    f: F,
) -> impl Fn() -> Result<String, E>
where
    D: Enumerator<A> + Serializer<A>,
    C: Serializer<B>,
    F: Fn(&A) -> Result<B, E>,
    E: From<TableError>,
{
    try_derive_rendered_thunk(Json::compact(), domain, codomain, f)
}

/// Thunk d'affichage JSON compact d'une fonction totale.
///
/// ```
/// use enumfn::core::dictionary::Boolean;
/// use enumfn::render::derive::derive_display_thunk;
///
/// let show = derive_display_thunk(Boolean, Boolean, |b: &bool| !b);
/// assert_eq!(
///     show().unwrap(),
///     r#"[{"domain":false,"codomain":true},{"domain":true,"codomain":false}]"#
/// );
/// ```
pub fn derive_display_thunk<A, B, D, C, F>(
    domain: D,
    codomain: C,
    f: F,
) -> impl Fn() -> Result<String, TableError>
where
    D: Enumerator<A> + Serializer<A>,
    C: Serializer<B>,
    F: Fn(&A) -> B,
{
    derive_rendered_thunk(Json::compact(), domain, codomain, f)
}

// ─── Tabulated ───────────────────────────────────────────────────────────────

/// Une fonction accompagnée de ses dictionnaires de domaine et de codomaine.
///
/// Plutôt que de modifier la fonction, on l'enveloppe : le wrapper
/// s'applique comme elle et s'affiche comme sa table de comportement.
pub struct Tabulated<A, B, D, C, F> {
    domain: D,
    codomain: C,
    apply: F,
    _signature: PhantomData<fn(&A) -> B>,
}

impl<A, B, D, C, F> Tabulated<A, B, D, C, F>
where
    D: Enumerator<A> + Serializer<A>,
    C: Serializer<B>,
    F: Fn(&A) -> B,
{
    pub fn new(domain: D, codomain: C, apply: F) -> Self {
        Tabulated {
            domain,
            codomain,
            apply,
            _signature: PhantomData,
        }
    }

    /// Applique la fonction enveloppée.
    pub fn call(&self, value: &A) -> B {
        (self.apply)(value)
    }

    /// Table de comportement, recalculée à chaque appel.
    pub fn table(&self) -> Result<BehaviorTable, TableError> {
        serialize_function_table(&self.domain, &self.codomain, &self.apply)
    }

    pub fn render_with<R: Renderer>(&self, renderer: &R) -> Result<String, TableError> {
        renderer.render(&self.table()?)
    }

    /// Texte JSON compact, identique à celui de `derive_display_thunk`.
    pub fn to_text(&self) -> Result<String, TableError> {
        self.render_with(&Json::compact())
    }
}

impl<A, B, D, C, F> fmt::Display for Tabulated<A, B, D, C, F>
where
    D: Enumerator<A> + Serializer<A>,
    C: Serializer<B>,
    F: Fn(&A) -> B,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let renderer = if f.alternate() { Json::pretty() } else { Json::compact() };
        let text = self.render_with(&renderer).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}

impl<A, B, D: Dictionary, C: Dictionary, F> fmt::Debug for Tabulated<A, B, D, C, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tabulated")
            .field("domain", &self.domain.name())
            .field("codomain", &self.codomain.name())
            .finish()
    }
}

impl<A, B, D, C, F> Serialize for Tabulated<A, B, D, C, F>
where
    D: Enumerator<A> + Serializer<A>,
    C: Serializer<B>,
    F: Fn(&A) -> B,
{
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let table = self.table().map_err(S::Error::custom)?;
        Serialize::serialize(&table, serializer)
    }
}
