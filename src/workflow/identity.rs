//! Identity registration and login
//!
//! Users (staff) and customers are registered into separate identity
//! spaces with independent email uniqueness. Passwords are hashed before
//! the record is written; the plaintext never reaches storage.

use tracing::info;

use crate::auth::{hash_password, verify_password};
use crate::core::{Customer, Role, User, validate_email, validate_length};
use crate::error::{HelpdeskError, Result};
use crate::storage::{CustomerRepository, UserRepository};

/// Registers identities and checks login credentials
pub struct IdentityWorkflow<'a, S> {
    storage: &'a S,
}

impl<'a, S> IdentityWorkflow<'a, S>
where
    S: UserRepository + CustomerRepository,
{
    /// Create a workflow over the given storage handle
    pub const fn new(storage: &'a S) -> Self {
        Self { storage }
    }

    /// Register a staff user; the role is fixed at creation
    pub fn register_user(
        &self,
        name: &str,
        email: &str,
        password: &str,
        role: Role,
    ) -> Result<User> {
        validate_length("name", name, 5, 50)?;
        validate_email("email", email)?;
        validate_length("password", password, 5, 255)?;

        if UserRepository::find_by_email(self.storage, email)?.is_some() {
            return Err(HelpdeskError::DuplicateEmail {
                email: email.to_string(),
            });
        }

        let user = User::new(
            name.to_string(),
            email.to_string(),
            hash_password(password)?,
            role,
        );
        UserRepository::save(self.storage, &user)?;
        info!(user = %user.id, role = %user.role, "user registered");
        Ok(user)
    }

    /// Register a customer
    pub fn register_customer(
        &self,
        name: &str,
        email: &str,
        password: &str,
        phone: &str,
    ) -> Result<Customer> {
        validate_length("name", name, 5, 50)?;
        validate_email("email", email)?;
        validate_length("password", password, 5, 255)?;
        validate_length("phone", phone, 1, 12)?;

        // Uniqueness is per identity space; the user space is not checked
        if CustomerRepository::find_by_email(self.storage, email)?.is_some() {
            return Err(HelpdeskError::DuplicateEmail {
                email: email.to_string(),
            });
        }

        let customer = Customer::new(
            name.to_string(),
            email.to_string(),
            hash_password(password)?,
            phone.to_string(),
        );
        CustomerRepository::save(self.storage, &customer)?;
        info!(customer = %customer.id, "customer registered");
        Ok(customer)
    }

    /// Check staff login credentials
    pub fn login(&self, email: &str, password: &str) -> Result<User> {
        let user = UserRepository::find_by_email(self.storage, email)?.ok_or_else(|| {
            HelpdeskError::UserNotFound {
                id: email.to_string(),
            }
        })?;

        if !verify_password(password, &user.password_hash)? {
            return Err(HelpdeskError::InvalidCredentials);
        }
        Ok(user)
    }

    /// All staff users
    pub fn list_users(&self) -> Result<Vec<User>> {
        UserRepository::load_all(self.storage)
    }

    /// All customers
    pub fn list_customers(&self) -> Result<Vec<Customer>> {
        CustomerRepository::load_all(self.storage)
    }

    /// Resolve a customer by email
    pub fn find_customer_by_email(&self, email: &str) -> Result<Customer> {
        CustomerRepository::find_by_email(self.storage, email)?.ok_or_else(|| {
            HelpdeskError::CustomerNotFound {
                reference: email.to_string(),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestEnv;

    #[test]
    fn test_register_user_hashes_password() {
        let env = TestEnv::new();
        let workflow = IdentityWorkflow::new(&env.storage);

        let user = workflow
            .register_user("Agent Smith", "smith@example.com", "s3cret-pass", Role::Agent)
            .unwrap();
        assert_ne!(user.password_hash, "s3cret-pass");
        assert!(verify_password("s3cret-pass", &user.password_hash).unwrap());
    }

    #[test]
    fn test_duplicate_email_rejected_per_space() {
        let env = TestEnv::new();
        let workflow = IdentityWorkflow::new(&env.storage);

        workflow
            .register_user("Agent Smith", "smith@example.com", "s3cret-pass", Role::Agent)
            .unwrap();
        assert!(matches!(
            workflow.register_user("Agent Jones", "smith@example.com", "other-pass", Role::Agent),
            Err(HelpdeskError::DuplicateEmail { .. })
        ));
    }

    #[test]
    fn test_same_email_allowed_across_spaces() {
        let env = TestEnv::new();
        let workflow = IdentityWorkflow::new(&env.storage);

        workflow
            .register_user("Agent Smith", "shared@example.com", "s3cret-pass", Role::Agent)
            .unwrap();
        // The customer space is validated independently
        assert!(
            workflow
                .register_customer("Carol Jones", "shared@example.com", "other-pass", "080123456")
                .is_ok()
        );
    }

    #[test]
    fn test_login_paths() {
        let env = TestEnv::new();
        let workflow = IdentityWorkflow::new(&env.storage);
        workflow
            .register_user("Agent Smith", "smith@example.com", "s3cret-pass", Role::Agent)
            .unwrap();

        assert!(workflow.login("smith@example.com", "s3cret-pass").is_ok());
        assert!(matches!(
            workflow.login("smith@example.com", "wrong-pass"),
            Err(HelpdeskError::InvalidCredentials)
        ));
        assert!(matches!(
            workflow.login("nobody@example.com", "s3cret-pass"),
            Err(HelpdeskError::UserNotFound { .. })
        ));
    }

    #[test]
    fn test_validation_rejects_short_fields() {
        let env = TestEnv::new();
        let workflow = IdentityWorkflow::new(&env.storage);

        assert!(matches!(
            workflow.register_customer("Bob", "bob@example.com", "s3cret-pass", "080123456"),
            Err(HelpdeskError::Validation { .. })
        ));
        assert!(matches!(
            workflow.register_customer("Bob Brown", "bad-email", "s3cret-pass", "080123456"),
            Err(HelpdeskError::Validation { .. })
        ));
        assert!(env.storage.load_all_customers().unwrap().is_empty());
    }
}
