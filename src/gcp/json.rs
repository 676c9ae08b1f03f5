use serde::{Deserialize, Serialize};

pub const ANDROID_CLICK_ACTION: &str = "android.intent.action.MAIN";
pub const APNS_PRIORITY: &str = "10";
pub const APNS_BADGE: u32 = 1;

/// One notification to deliver, addressed to a device token or a topic.
///
/// A non-blank token wins over a topic; with neither the built envelope has
/// no target and FCM rejects it at send time.
#[derive(Debug, Clone)]
pub struct PushNotification {
    pub(crate) title: String,
    pub(crate) body: String,
    pub(crate) token: Option<String>,
    pub(crate) topic: Option<String>,
}

impl PushNotification {
    pub fn new(title: &str, body: &str) -> PushNotification {
        PushNotification {
            title: title.to_string(),
            body: body.to_string(),
            token: None,
            topic: None,
        }
    }

    pub fn with_token(self, token: &str) -> PushNotification {
        PushNotification {
            token: Some(token.to_string()),
            ..self
        }
    }

    pub fn with_topic(self, topic: &str) -> PushNotification {
        PushNotification {
            topic: Some(topic.to_string()),
            ..self
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Envelope {
    pub(crate) message: MessagePayload,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct MessagePayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) topic: Option<String>,
    pub(crate) notification: NotificationPayload,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) android: Option<AndroidPayload>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) apns: Option<ApnsPayload>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct NotificationPayload {
    pub(crate) title: String,
    pub(crate) body: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AndroidPayload {
    pub(crate) notification: AndroidNotification,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AndroidNotification {
    pub(crate) click_action: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ApnsPayload {
    pub(crate) headers: ApnsHeaders,
    pub(crate) payload: ApnsContent,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ApnsHeaders {
    #[serde(rename = "apns-priority")]
    pub(crate) apns_priority: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ApnsContent {
    pub(crate) aps: Aps,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Aps {
    pub(crate) badge: u32,
}

/// Success body of `messages:send`, e.g. `projects/<p>/messages/<id>`.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SendResponse {
    pub name: String,
}

impl Envelope {
    /// Wrap the notification for the wire. Title and body are carried
    /// verbatim; the token is used only when non-blank after trimming,
    /// otherwise the topic.
    pub fn notification_message(request: &PushNotification) -> Envelope {
        let token = request
            .token
            .as_ref()
            .filter(|t| !t.trim().is_empty())
            .cloned();
        let topic = if token.is_some() {
            None
        } else {
            request.topic.clone()
        };
        Envelope {
            message: MessagePayload {
                token,
                topic,
                notification: NotificationPayload {
                    title: request.title.clone(),
                    body: request.body.clone(),
                },
                android: None,
                apns: None,
            },
        }
    }

    /// The base envelope plus the fixed android and apns delivery hints,
    /// always all three together.
    pub fn override_message(request: &PushNotification) -> Envelope {
        let mut envelope = Envelope::notification_message(request);
        envelope.message.android = Some(AndroidPayload {
            notification: AndroidNotification {
                click_action: ANDROID_CLICK_ACTION.to_string(),
            },
        });
        envelope.message.apns = Some(ApnsPayload {
            headers: ApnsHeaders {
                apns_priority: APNS_PRIORITY.to_string(),
            },
            payload: ApnsContent {
                aps: Aps { badge: APNS_BADGE },
            },
        });
        envelope
    }
}

#[cfg(test)]
pub mod fixtures {
    use super::*;

    pub fn token_notification() -> PushNotification {
        PushNotification::new("testTitle", "testBody").with_token("abc")
    }

    pub fn topic_notification() -> PushNotification {
        PushNotification::new("testTitle", "testBody")
            .with_token("")
            .with_topic("news")
    }
}
