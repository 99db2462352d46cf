//! Role-based visibility policy.
//!
//! The schema stores roles but enforces nothing; visibility is a per-request
//! policy decision made here. Regular users see their own rows, supervisors
//! additionally see their direct supervisees' rows, admins see everything.

use serde::Serialize;

use crate::reference::Role;

/// The set of owning users a viewer may see rows for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "scope", content = "users", rename_all = "lowercase")]
pub enum Scope {
  All,
  Users(Vec<i64>),
}

impl Scope {
  pub fn allows(&self, user_id: i64) -> bool {
    match self {
      Self::All => true,
      Self::Users(ids) => ids.contains(&user_id),
    }
  }
}

/// Compute the viewer's scope from their role and direct supervisees.
///
/// `supervisees` is ignored unless the role actually supervises; a regular
/// user with stale supervisee rows still sees only their own data.
pub fn scope_for(role: Role, viewer_id: i64, supervisees: Vec<i64>) -> Scope {
  match role {
    Role::Admin => Scope::All,
    Role::Supervisor => {
      let mut ids = supervisees;
      ids.push(viewer_id);
      ids.sort_unstable();
      ids.dedup();
      Scope::Users(ids)
    }
    Role::Regular => Scope::Users(vec![viewer_id]),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn admin_sees_all() {
    assert_eq!(scope_for(Role::Admin, 1, vec![2, 3]), Scope::All);
  }

  #[test]
  fn supervisor_sees_self_and_supervisees() {
    let scope = scope_for(Role::Supervisor, 5, vec![7, 2, 7]);
    assert_eq!(scope, Scope::Users(vec![2, 5, 7]));
    assert!(scope.allows(5));
    assert!(scope.allows(7));
    assert!(!scope.allows(9));
  }

  #[test]
  fn regular_sees_only_self() {
    let scope = scope_for(Role::Regular, 5, vec![7]);
    assert_eq!(scope, Scope::Users(vec![5]));
  }
}
