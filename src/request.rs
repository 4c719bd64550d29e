use crate::error::ValidationError;

/// Shamir splitting rejects more than this many shares.
pub const MAX_SHARES: u32 = 255;

pub const DEFAULT_SECRET_SHARES: u32 = 5;
pub const DEFAULT_SECRET_THRESHOLD: u32 = 3;

/// Unvalidated initialization parameters as collected from config and flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitParams {
    pub secret_shares: u32,
    pub secret_threshold: u32,
    pub stored_shares: u32,
    pub pgp_keys: Vec<String>,
    pub recovery_shares: u32,
    pub recovery_threshold: u32,
    pub recovery_pgp_keys: Vec<String>,
}

impl Default for InitParams {
    fn default() -> Self {
        Self {
            secret_shares: DEFAULT_SECRET_SHARES,
            secret_threshold: DEFAULT_SECRET_THRESHOLD,
            stored_shares: 0,
            pgp_keys: Vec::new(),
            recovery_shares: 0,
            recovery_threshold: 0,
            recovery_pgp_keys: Vec::new(),
        }
    }
}

/// Validated, immutable initialization request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitRequest {
    params: InitParams,
}

impl InitRequest {
    /// Validates `params` and freezes them into a request.
    ///
    /// # Errors
    /// Returns [`ValidationError`] when a share/threshold invariant does not
    /// hold or a PGP key list length does not match its share count.
    pub fn new(params: InitParams) -> Result<Self, ValidationError> {
        validate_shares(
            "secret_shares",
            "secret_threshold",
            params.secret_shares,
            params.secret_threshold,
        )?;
        if params.stored_shares > params.secret_shares {
            return Err(ValidationError::StoredSharesExceedShares {
                stored: params.stored_shares,
                shares: params.secret_shares,
            });
        }
        validate_pgp_keys("pgp_keys", &params.pgp_keys, params.secret_shares)?;

        if params.recovery_shares == 0 {
            if params.recovery_threshold != 0 {
                return Err(ValidationError::RecoveryNotRequested {
                    field: "recovery_threshold",
                });
            }
            if !params.recovery_pgp_keys.is_empty() {
                return Err(ValidationError::RecoveryNotRequested {
                    field: "recovery_pgp_keys",
                });
            }
        } else {
            validate_shares(
                "recovery_shares",
                "recovery_threshold",
                params.recovery_shares,
                params.recovery_threshold,
            )?;
            validate_pgp_keys(
                "recovery_pgp_keys",
                &params.recovery_pgp_keys,
                params.recovery_shares,
            )?;
        }

        Ok(Self { params })
    }

    #[must_use]
    pub fn secret_shares(&self) -> u32 {
        self.params.secret_shares
    }

    #[must_use]
    pub fn secret_threshold(&self) -> u32 {
        self.params.secret_threshold
    }

    #[must_use]
    pub fn stored_shares(&self) -> u32 {
        self.params.stored_shares
    }

    #[must_use]
    pub fn pgp_keys(&self) -> &[String] {
        &self.params.pgp_keys
    }

    #[must_use]
    pub fn recovery_shares(&self) -> u32 {
        self.params.recovery_shares
    }

    #[must_use]
    pub fn recovery_threshold(&self) -> u32 {
        self.params.recovery_threshold
    }

    #[must_use]
    pub fn recovery_pgp_keys(&self) -> &[String] {
        &self.params.recovery_pgp_keys
    }

    #[must_use]
    pub fn recovery_requested(&self) -> bool {
        self.params.recovery_shares > 0
    }

    /// Number of unseal keys the server hands back. The server keeps
    /// `stored_shares` of the `secret_shares` in its seal and returns only
    /// the rest, so this is `secret_shares - stored_shares`.
    #[must_use]
    pub fn expected_unseal_keys(&self) -> usize {
        (self.params.secret_shares - self.params.stored_shares) as usize
    }

    #[must_use]
    pub fn expected_recovery_keys(&self) -> usize {
        self.params.recovery_shares as usize
    }
}

fn validate_shares(
    shares_field: &'static str,
    threshold_field: &'static str,
    shares: u32,
    threshold: u32,
) -> Result<(), ValidationError> {
    if shares == 0 {
        return Err(ValidationError::ZeroShares {
            field: shares_field,
        });
    }
    if shares > MAX_SHARES {
        return Err(ValidationError::TooManyShares {
            field: shares_field,
            value: shares,
            max: MAX_SHARES,
        });
    }
    if threshold == 0 || threshold > shares {
        return Err(ValidationError::ThresholdOutOfRange {
            field: threshold_field,
            threshold,
            shares,
        });
    }
    Ok(())
}

fn validate_pgp_keys(
    field: &'static str,
    keys: &[String],
    shares: u32,
) -> Result<(), ValidationError> {
    if !keys.is_empty() && keys.len() != shares as usize {
        return Err(ValidationError::PgpKeyCountMismatch {
            field,
            keys: keys.len(),
            shares,
        });
    }
    Ok(())
}
