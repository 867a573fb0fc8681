// =============================================================================
// CORE — Le protocole d'énumération
// =============================================================================
//
// Ce module regroupe toute la logique pure :
// pas de texte, pas d'I/O, aucun état mutable partagé.
//
// Architecture :
//   plain       → les données simples et les lignes (Pair) de la table
//   error       → la taxonomie des échecs
//   dictionary  → les traits Serializer / Enumerator + Boolean, Number, String
//   finite      → dictionnaires composables (Unit, IntRange, Product...)
//   registry    → dictionnaires dynamiques, rangés par nom
//   table       → le moteur : domaine → table de comportement
//
// =============================================================================

pub mod plain;
pub mod error;
pub mod dictionary;
pub mod finite;
pub mod registry;
pub mod table;
