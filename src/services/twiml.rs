//! TwiML rendering for voice webhook responses.

use crate::models::{DialogueResponse, Next};

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

#[derive(Debug, Clone)]
pub struct Say {
    pub voice: Option<String>,
    pub text: String,
}

#[derive(Debug, Clone)]
pub struct Gather {
    pub action: String,
    pub language: Option<String>,
    pub prompt: Say,
}

#[derive(Debug, Clone)]
enum Verb {
    Say(Say),
    Gather(Gather),
    Dial(String),
}

#[derive(Debug, Clone, Default)]
pub struct VoiceResponse {
    verbs: Vec<Verb>,
}

impl VoiceResponse {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn say(mut self, say: Say) -> Self {
        self.verbs.push(Verb::Say(say));
        self
    }

    pub fn gather(mut self, gather: Gather) -> Self {
        self.verbs.push(Verb::Gather(gather));
        self
    }

    pub fn dial(mut self, number: impl Into<String>) -> Self {
        self.verbs.push(Verb::Dial(number.into()));
        self
    }

    /// Build the document for one dialogue turn. The prompt is nested inside
    /// the gather when the dialogue continues, so the caller can barge in.
    pub fn from_dialogue(response: &DialogueResponse, voice: &str, language: &str) -> Self {
        let prompt = Say {
            voice: Some(voice.to_string()),
            text: response.prompt.clone(),
        };

        let twiml = match response.next {
            Next::Gather(stage) => VoiceResponse::new().gather(Gather {
                action: stage.endpoint().to_string(),
                language: Some(language.to_string()),
                prompt,
            }),
            Next::Hangup => VoiceResponse::new().say(prompt),
        };

        match &response.dial {
            Some(number) => twiml.dial(number.clone()),
            None => twiml,
        }
    }

    pub fn render(&self) -> String {
        let mut out = String::from(XML_DECLARATION);
        out.push_str("<Response>");
        for verb in &self.verbs {
            match verb {
                Verb::Say(say) => render_say(&mut out, say),
                Verb::Gather(gather) => {
                    out.push_str(r#"<Gather input="speech" action=""#);
                    out.push_str(&escape_attr(&gather.action));
                    out.push_str(r#"" speechTimeout="auto""#);
                    if let Some(language) = &gather.language {
                        out.push_str(r#" language=""#);
                        out.push_str(&escape_attr(language));
                        out.push('"');
                    }
                    out.push('>');
                    render_say(&mut out, &gather.prompt);
                    out.push_str("</Gather>");
                }
                Verb::Dial(number) => {
                    out.push_str("<Dial>");
                    out.push_str(&escape_text(number));
                    out.push_str("</Dial>");
                }
            }
        }
        out.push_str("</Response>");
        out
    }
}

fn render_say(out: &mut String, say: &Say) {
    match &say.voice {
        Some(voice) => {
            out.push_str(r#"<Say voice=""#);
            out.push_str(&escape_attr(voice));
            out.push_str(r#"">"#);
        }
        None => out.push_str("<Say>"),
    }
    out.push_str(&escape_text(&say.text));
    out.push_str("</Say>");
}

fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

fn escape_attr(s: &str) -> String {
    escape_text(s).replace('"', "&quot;")
}
