use serde::Serialize;
use std::sync::Arc;
use tracing::{info, warn};

use crate::auth::{authorize, AuthContext, AuthError, AuthUser, CredentialStore, JwtKeys, Role};
use crate::config::AppConfig;
use crate::directory::{DirectoryError, DirectoryStore, Employee, EmployeeInput, SharedDirectory};
use crate::query::{Filter, FilterData, Page, QueryError};

/// Roles allowed to create or edit employees
const WRITE_ROLES: &[Role] = &[Role::Admin];

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error(transparent)]
    Directory(#[from] DirectoryError),
    #[error(transparent)]
    Query(#[from] QueryError),
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginResult {
    pub token: String,
    pub user: AuthUser,
}

/// Operations offered to the transport layer. Cheap to clone.
#[derive(Clone)]
pub struct DirectoryService {
    directory: SharedDirectory,
    credentials: Arc<CredentialStore>,
    keys: JwtKeys,
    config: Arc<AppConfig>,
}

impl DirectoryService {
    pub fn new(
        directory: SharedDirectory,
        credentials: Arc<CredentialStore>,
        config: Arc<AppConfig>,
    ) -> Result<Self, AuthError> {
        let keys = JwtKeys::from_config(&config.security)?;
        Ok(Self { directory, credentials, keys, config })
    }

    /// Seeded directory and demo accounts
    pub fn demo(config: Arc<AppConfig>) -> Result<Self, AuthError> {
        Self::new(DirectoryStore::seeded().into_shared(), CredentialStore::demo()?, config)
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn login(&self, username: &str, password: &str) -> Result<LoginResult, AuthError> {
        let audit = self.config.security.enable_audit_logging;
        let user = match self.credentials.verify(username, password) {
            Ok(user) => user,
            Err(e) => {
                if audit {
                    warn!(target: "audit", username, "login rejected");
                }
                return Err(e);
            }
        };

        let token = self.keys.generate_jwt(&user)?;
        if audit {
            info!(target: "audit", username, role = %user.role, "login succeeded");
        }
        Ok(LoginResult { token, user })
    }

    pub fn resolve_context(&self, bearer: Option<&str>) -> AuthContext {
        let context = AuthContext::resolve(bearer, &self.keys);
        if let Some(reason) = context.invalid_reason() {
            warn!("Bearer credential rejected: {}", reason);
        }
        context
    }

    /// Reads are open to every caller, authenticated or not
    pub async fn list_employees(&self, data: FilterData) -> Result<Page<Employee>, ServiceError> {
        let mut filter = Filter::new(&self.config.query);
        filter.assign(data)?;

        let directory = self.directory.read().await;
        Ok(filter.execute(directory.all()))
    }

    pub async fn get_employee(&self, id: &str) -> Option<Employee> {
        self.directory.read().await.find_by_id(id).cloned()
    }

    pub async fn add_employee(&self, input: EmployeeInput, context: &AuthContext) -> Result<Employee, ServiceError> {
        let caller = authorize(context, WRITE_ROLES)?;
        let employee = self.directory.write().await.append(input)?;
        info!("Employee {} created by {}", employee.id, caller.username);
        Ok(employee)
    }

    pub async fn update_employee(
        &self,
        id: &str,
        input: EmployeeInput,
        context: &AuthContext,
    ) -> Result<Employee, ServiceError> {
        let caller = authorize(context, WRITE_ROLES)?;
        let employee = self.directory.write().await.update(id, input)?;
        info!("Employee {} updated by {}", employee.id, caller.username);
        Ok(employee)
    }

    pub async fn employee_count(&self) -> usize {
        self.directory.read().await.len()
    }
}
