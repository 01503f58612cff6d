use std::env;

/// Which set of webhook endpoints this process serves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeploymentMode {
    /// The hotel reservation IVR (`/answer`, `/handle-*`, `/confirm-booking`).
    Hotel,
    /// The single-turn greeter (`/voice`).
    Greeter,
}

impl DeploymentMode {
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "greeter" | "voice" => DeploymentMode::Greeter,
            _ => DeploymentMode::Hotel,
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub mode: DeploymentMode,
    pub rooms_csv_path: String,
    pub tts_voice: String,
    pub speech_language: String,
    pub reservation_desk_number: Option<String>,
    pub twilio_account_sid: String,
    pub twilio_auth_token: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            mode: env::var("APP_MODE")
                .map(|v| DeploymentMode::parse(&v))
                .unwrap_or(DeploymentMode::Hotel),
            rooms_csv_path: env::var("ROOMS_CSV_PATH")
                .unwrap_or_else(|_| "hotel_rooms.csv".to_string()),
            tts_voice: env::var("TTS_VOICE").unwrap_or_else(|_| "Polly.Amy-Neural".to_string()),
            speech_language: env::var("SPEECH_LANGUAGE").unwrap_or_else(|_| "en-US".to_string()),
            reservation_desk_number: env::var("RESERVATION_DESK_NUMBER")
                .ok()
                .filter(|v| !v.trim().is_empty()),
            twilio_account_sid: env::var("TWILIO_ACCOUNT_SID").unwrap_or_default(),
            twilio_auth_token: env::var("TWILIO_AUTH_TOKEN").unwrap_or_default(),
        }
    }

    pub fn has_twilio_credentials(&self) -> bool {
        !self.twilio_account_sid.is_empty() && !self.twilio_auth_token.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_parse() {
        assert_eq!(DeploymentMode::parse("greeter"), DeploymentMode::Greeter);
        assert_eq!(DeploymentMode::parse(" Voice "), DeploymentMode::Greeter);
        assert_eq!(DeploymentMode::parse("hotel"), DeploymentMode::Hotel);
        assert_eq!(DeploymentMode::parse("anything"), DeploymentMode::Hotel);
    }
}
