use reqwest::Client;

use crate::{
    config, error, management::TokenManager, spotify::auth::Credentials, success, utils,
};

pub async fn auth() {
    let credentials = match Credentials::from_env() {
        Ok(c) => c,
        Err(e) => error!(
            "{}\nAdd your app credentials to {}",
            e,
            config::env_path().display()
        ),
    };

    let http = match Client::builder().timeout(config::request_timeout()).build() {
        Ok(http) => http,
        Err(e) => error!("Cannot create HTTP client. Err: {}", e),
    };

    let pb = utils::spinner("Requesting access token...");
    let mut token_mgr = TokenManager::new(credentials, None);
    let result = token_mgr.get_valid_token(&http).await;
    pb.finish_and_clear();

    if let Err(e) = result {
        error!("Authentication failed. Err: {}", e);
    }

    let minutes = token_mgr
        .current_token()
        .map(|t| t.expires_in / 60)
        .unwrap_or_default();
    success!("Authentication successful! Token valid for {} minutes.", minutes);
}
