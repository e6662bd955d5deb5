//! Role-based access decisions
//!
//! Pure functions over an already-verified principal. Token signature and
//! expiry checks happen in [`super::TokenService`]; by the time these run,
//! the caller either holds a valid principal or an explicit absence.

use tracing::debug;

use crate::core::{Principal, PrincipalRole, Role};
use crate::error::{HelpdeskError, Result};

/// Gate an action on a principal being present at all
///
/// Fails with `Unauthenticated` when no valid principal was presented.
pub fn require_authenticated(principal: Option<&Principal>) -> Result<&Principal> {
    principal.ok_or(HelpdeskError::Unauthenticated)
}

/// Gate an action restricted to a single staff role
///
/// Fails with `Unauthenticated` when no principal is present and with
/// `Forbidden` when the principal's role does not match. A customer
/// principal never satisfies a staff role requirement.
pub fn authorize(principal: Option<&Principal>, required: Role) -> Result<()> {
    let principal = require_authenticated(principal)?;
    let matches = matches!(
        (principal.role, required),
        (PrincipalRole::Admin, Role::Admin) | (PrincipalRole::Agent, Role::Agent)
    );
    if !matches {
        debug!(
            principal = %principal.role,
            required = %required,
            "authorization denied"
        );
        return Err(HelpdeskError::Forbidden);
    }
    Ok(())
}
