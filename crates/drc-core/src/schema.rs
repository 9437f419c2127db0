//! External collaborator types (§3, §6).
//!
//! The core only reads these; it never constructs or mutates them. They
//! are supplied once per query by the caller (a loader or CLI reading a
//! schema description and whatever values the caller wants pre-bound).

use std::collections::HashMap;

/// Relation name → ordered column names. Arity of a relation is the
/// length of its column list.
pub type Schema = HashMap<String, Vec<String>>;

/// Variable name → externally supplied string value.
pub type BoundVars = HashMap<String, String>;

/// The ordered projection list; duplicates are permitted.
pub type Wants = Vec<String>;
