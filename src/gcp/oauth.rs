use crate::gcp::constants;

pub struct OAuth {
    pub(crate) token: String,
    pub(crate) project_id: String,
}

#[derive(Debug)]
pub enum CredentialError {
    Key { error: std::io::Error },
    Token { error: yup_oauth2::Error },
    MissingProjectId,
}

/// Exchange the service account key for a messaging-scoped access token.
///
/// The token is fetched fresh on every call; the project id travels with it
/// so callers can address the project's send endpoint without extra
/// configuration.
pub async fn get_oauth_token() -> Result<OAuth, CredentialError> {
    let secret = read_service_account_key().await?;
    let project_id = secret
        .project_id
        .clone()
        .ok_or(CredentialError::MissingProjectId)?;

    let auth = yup_oauth2::ServiceAccountAuthenticator::builder(secret)
        .build()
        .await
        .map_err(|error| CredentialError::Key { error })?;

    let scopes = &[constants::MESSAGING_SCOPE];

    // token(<scopes>) is the one important function of this crate; it does everything to
    // obtain a token that can be sent e.g. as Bearer token.
    let token = auth
        .token(scopes)
        .await
        .map_err(|error| CredentialError::Token { error })?;
    log::debug!("Obtained access token for project {}", project_id);
    Ok(OAuth {
        token: token.as_str().to_string(),
        project_id,
    })
}

/// Read the key from the path in `GOOGLE_APPLICATION_CREDENTIALS` (default
/// `./service_account.json`), falling back to inline JSON in
/// `GOOGLE_CREDENTIALS` when no file is readable.
async fn read_service_account_key() -> Result<yup_oauth2::ServiceAccountKey, CredentialError> {
    let path = std::env::var(constants::CREDENTIALS_PATH_VAR)
        .unwrap_or_else(|_| constants::SERVICE_ACCOUNT_FILE.to_string());
    match yup_oauth2::read_service_account_key(&path).await {
        Ok(secret) => Ok(secret),
        Err(read_error) => std::env::var(constants::CREDENTIALS_JSON_VAR)
            .map_err(|_| CredentialError::Key { error: read_error })
            .and_then(|json| {
                yup_oauth2::parse_service_account_key(json)
                    .map_err(|error| CredentialError::Key { error })
            }),
    }
}
