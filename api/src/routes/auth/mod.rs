//! Auth routes

pub mod forgot_password;
pub mod login;
pub mod register;
pub mod reset_password;
pub mod verify_code;

use std::sync::Arc;

use vg_core::repositories::account::repository::AccountRepository;
use vg_core::services::auth::dispatcher::NotificationDispatcher;
use vg_core::services::auth::AuthService;
use vg_core::services::verification::traits::ChallengeStore;

/// Application state shared by every handler.
pub struct AppState<A, C, N>
where
    A: AccountRepository,
    C: ChallengeStore,
    N: NotificationDispatcher,
{
    pub auth_service: Arc<AuthService<A, C, N>>,
}
