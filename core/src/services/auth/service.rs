//! Auth orchestration service
//!
//! Coordinates the account repository, the verification code manager, the
//! notification dispatcher and the token service. Every collaborator is an
//! injected trait behind an `Arc`, so the whole service runs against mocks
//! in tests.

use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::entities::account::Account;
use crate::domain::entities::challenge::Channel;
use crate::domain::value_objects::auth_tokens::AuthTokens;
use crate::errors::{AuthError, DomainResult};
use crate::repositories::account::repository::AccountRepository;
use crate::services::auth::dispatcher::NotificationDispatcher;
use crate::services::auth::password::{hash_password, verify_password};
use crate::services::auth::types::{
    CodePurpose, NewRegistration, RegistrationOutcome, ResetRequested,
};
use crate::services::classifier::{classify_contact, mask_identifier};
use crate::services::token::TokenService;
use crate::services::verification::manager::VerificationCodeManager;
use crate::services::verification::traits::ChallengeStore;

pub struct AuthService<A, C, N>
where
    A: AccountRepository,
    C: ChallengeStore,
    N: NotificationDispatcher,
{
    accounts: Arc<A>,
    challenges: Arc<VerificationCodeManager<C>>,
    dispatcher: Arc<N>,
    tokens: Arc<TokenService>,
}

impl<A, C, N> AuthService<A, C, N>
where
    A: AccountRepository,
    C: ChallengeStore,
    N: NotificationDispatcher,
{
    pub fn new(
        accounts: Arc<A>,
        challenges: Arc<VerificationCodeManager<C>>,
        dispatcher: Arc<N>,
        tokens: Arc<TokenService>,
    ) -> Self {
        Self {
            accounts,
            challenges,
            dispatcher,
            tokens,
        }
    }

    /// Register a new account, or reissue the challenge for a pending one.
    ///
    /// - unknown identifier: create an inactive account, issue and dispatch
    ///   a challenge (`resent == false`);
    /// - pending account: reissue a fresh challenge, invalidating the prior
    ///   one, and redispatch (`resent == true`);
    /// - active account: `AlreadyRegistered`, no side effects.
    pub async fn register(&self, registration: NewRegistration) -> DomainResult<RegistrationOutcome> {
        let channel = classify_contact(&registration.identifier)?;

        if let Some(existing) = self
            .accounts
            .find_by_identifier(&registration.identifier)
            .await?
        {
            if existing.is_active {
                return Err(AuthError::AlreadyRegistered.into());
            }
            // Pending verification: resend with a brand-new code.
            self.send_challenge(
                existing.id,
                channel,
                &existing.identifier,
                CodePurpose::Registration,
            )
            .await?;
            info!(
                account_id = %existing.id,
                identifier = %mask_identifier(&existing.identifier),
                "registration challenge resent"
            );
            return Ok(RegistrationOutcome {
                account_id: existing.id,
                channel,
                resent: true,
            });
        }

        let password_hash = hash_password(&registration.password)?;
        let account = Account::new(
            registration.identifier.clone(),
            password_hash,
            registration.profile,
        );
        self.accounts.create(&account).await?;

        self.send_challenge(account.id, channel, &account.identifier, CodePurpose::Registration)
            .await?;
        info!(
            account_id = %account.id,
            identifier = %mask_identifier(&account.identifier),
            channel = %channel,
            "account created, verification pending"
        );
        Ok(RegistrationOutcome {
            account_id: account.id,
            channel,
            resent: false,
        })
    }

    /// Complete registration by verifying the challenge and activating the
    /// account. Any failure leaves the account state untouched.
    pub async fn verify_registration(&self, account_id: Uuid, code: &str) -> DomainResult<()> {
        let account = self
            .accounts
            .find_by_id(account_id)
            .await?
            .ok_or(AuthError::NotFound)?;

        self.challenges.verify(&account.id.to_string(), code).await?;
        self.accounts.set_active(account.id, true).await?;
        info!(account_id = %account.id, "account activated");
        Ok(())
    }

    /// Authenticate and issue a token pair.
    ///
    /// A missing account, an inactive account and a wrong password all
    /// collapse into the same `InvalidCredentials` error.
    pub async fn login(&self, identifier: &str, password: &str) -> DomainResult<AuthTokens> {
        let account = self
            .accounts
            .find_by_identifier(identifier)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !account.is_active || !verify_password(password, &account.password_hash) {
            warn!(
                identifier = %mask_identifier(identifier),
                "login rejected"
            );
            return Err(AuthError::InvalidCredentials.into());
        }

        let tokens = self.tokens.issue_pair(account.id)?;
        info!(account_id = %account.id, "login successful");
        Ok(tokens)
    }

    /// Start the password-reset flow for a known account.
    pub async fn forgot_password(&self, identifier: &str) -> DomainResult<ResetRequested> {
        let account = self
            .accounts
            .find_by_identifier(identifier)
            .await?
            .ok_or(AuthError::NotFound)?;

        // Classify the raw identifier again; the reset channel is decided
        // here, not inherited from registration.
        let channel = classify_contact(identifier)?;
        self.send_challenge(account.id, channel, &account.identifier, CodePurpose::PasswordReset)
            .await?;

        let message = match channel {
            Channel::Phone => "Verification code sent to your phone.".to_string(),
            Channel::Email => "Verification code sent to your email.".to_string(),
        };
        info!(
            account_id = %account.id,
            channel = %channel,
            "password reset challenge sent"
        );
        Ok(ResetRequested { channel, message })
    }

    /// Complete the password-reset flow.
    ///
    /// The challenge is consumed by the manager before the credential is
    /// replaced; a manager failure leaves the credential untouched. The
    /// active flag is never modified here.
    pub async fn reset_password(
        &self,
        identifier: &str,
        code: &str,
        new_password: &str,
    ) -> DomainResult<()> {
        let account = self
            .accounts
            .find_by_identifier(identifier)
            .await?
            .ok_or(AuthError::NotFound)?;

        self.challenges.verify(&account.id.to_string(), code).await?;

        let password_hash = hash_password(new_password)?;
        self.accounts
            .set_password_hash(account.id, &password_hash)
            .await?;
        info!(account_id = %account.id, "password reset completed");
        Ok(())
    }

    /// Issue a challenge keyed by the account id, then dispatch it on the
    /// given channel. Dispatch failure surfaces as `DeliveryFailed`.
    async fn send_challenge(
        &self,
        account_id: Uuid,
        channel: Channel,
        to: &str,
        purpose: CodePurpose,
    ) -> DomainResult<()> {
        let ttl = match purpose {
            CodePurpose::Registration => self.challenges.config().registration_ttl,
            CodePurpose::PasswordReset => self.challenges.config().reset_ttl,
        };
        let challenge = self
            .challenges
            .issue(&account_id.to_string(), channel, ttl)
            .await?;

        let body = purpose.body(&challenge.code);
        let result = match channel {
            Channel::Email => {
                self.dispatcher
                    .send_email(to, purpose.subject(), &body)
                    .await
            }
            Channel::Phone => self.dispatcher.send_sms(to, &body).await,
        };

        match result {
            Ok(message_id) => {
                info!(
                    account_id = %account_id,
                    channel = %channel,
                    message_id = %message_id,
                    "verification code dispatched"
                );
                Ok(())
            }
            Err(e) => {
                warn!(
                    account_id = %account_id,
                    channel = %channel,
                    error = %e,
                    "verification code dispatch failed"
                );
                Err(AuthError::DeliveryFailed { channel }.into())
            }
        }
    }
}
