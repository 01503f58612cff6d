pub mod twilio;

use async_trait::async_trait;

/// Outbound calls to the voice provider's REST API. Not used on the dialogue
/// path; webhook responses are plain TwiML.
#[async_trait]
pub trait TelephonyProvider: Send + Sync {
    async fn verify_credentials(&self) -> anyhow::Result<()>;
}
