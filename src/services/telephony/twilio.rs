use anyhow::Context;
use async_trait::async_trait;

use super::TelephonyProvider;

const API_BASE: &str = "https://api.twilio.com/2010-04-01";

pub struct TwilioVoiceProvider {
    account_sid: String,
    auth_token: String,
    client: reqwest::Client,
}

impl TwilioVoiceProvider {
    pub fn new(account_sid: String, auth_token: String) -> Self {
        Self {
            account_sid,
            auth_token,
            client: reqwest::Client::new(),
        }
    }

    fn account_url(&self) -> String {
        format!("{API_BASE}/Accounts/{}.json", self.account_sid)
    }
}

#[async_trait]
impl TelephonyProvider for TwilioVoiceProvider {
    async fn verify_credentials(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            !self.account_sid.is_empty() && !self.auth_token.is_empty(),
            "Twilio account SID and auth token must both be set"
        );

        self.client
            .get(self.account_url())
            .basic_auth(&self.account_sid, Some(&self.auth_token))
            .send()
            .await
            .context("failed to reach Twilio API")?
            .error_for_status()
            .context("Twilio rejected account credentials")?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_url() {
        let provider = TwilioVoiceProvider::new("AC123".to_string(), "secret".to_string());
        assert_eq!(
            provider.account_url(),
            "https://api.twilio.com/2010-04-01/Accounts/AC123.json"
        );
    }

    #[tokio::test]
    async fn test_missing_credentials_rejected_without_request() {
        let provider = TwilioVoiceProvider::new(String::new(), "secret".to_string());
        let err = provider.verify_credentials().await.unwrap_err();
        assert!(err.to_string().contains("must both be set"));
    }
}
