// =============================================================================
// ENUMFN — Représenter une fonction pure par sa table de comportement
// =============================================================================
//
// Plutôt que d'afficher le code source d'une fonction, on affiche ce
// qu'elle FAIT : on énumère son domaine fini, on l'applique à chaque
// valeur, et on sérialise les couples (entrée, sortie).
//
//   fn not(b: bool) -> bool    ──►    [{"domain":false,"codomain":true},
//                                      {"domain":true,"codomain":false}]
//
// Architecture :
//   core/     → le protocole pur (dictionnaires, registre, moteur)
//   render/   → la mise en texte (JSON, Markdown, thunk, wrapper)
//
// Concepts fondamentaux :
//   Dictionnaire = les capacités d'un type (sérialiser, énumérer)
//   Moteur       = domaine → énumération → application → sérialisation
//   Dériveur     = la table, recalculée et encodée à chaque affichage
//
// =============================================================================

pub mod core;
pub mod render;

pub use crate::core::dictionary::{Dictionary, Enumerator, Serializer};
pub use crate::core::error::TableError;
pub use crate::core::plain::{BehaviorTable, Pair, PlainData};
pub use crate::core::registry::{builtin_dictionaries, Dictionaries, DynDictionary};
pub use crate::core::table::{serialize_function_table, try_serialize_function_table};
pub use crate::render::derive::{derive_display_thunk, try_derive_display_thunk, Tabulated};
