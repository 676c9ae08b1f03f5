use clap::{Arg, ArgAction};

use notifier::gcp::api::FcmApi;
use notifier::gcp::client::get_fcm_client;
use notifier::gcp::json::{Envelope, PushNotification};

#[tokio::main]
async fn main() {
    env_logger::init();
    let matches = clap::Command::new("push")
        .version("1.0.0")
        .about("Send a notification through Firebase Cloud Messaging")
        .arg(
            Arg::new("title")
                .long("title")
                .default_value("testTitle")
                .help("Notification title"),
        )
        .arg(
            Arg::new("body")
                .long("body")
                .default_value("testBody")
                .help("Notification body"),
        )
        .arg(
            Arg::new("token")
                .short('t')
                .long("token")
                .help("Target device registration token"),
        )
        .arg(
            Arg::new("topic")
                .long("topic")
                .help("Target topic, used when no device token is given"),
        )
        .arg(
            Arg::new("override")
                .long("override")
                .action(ArgAction::SetTrue)
                .help("Attach the fixed android and apns delivery overrides"),
        )
        .get_matches();

    let mut request = PushNotification::new(
        matches.get_one::<String>("title").unwrap(),
        matches.get_one::<String>("body").unwrap(),
    );
    let token = matches
        .get_one::<String>("token")
        .map(|a| a.to_string())
        .or_else(|| std::env::var("FCM_DEVICE_TOKEN").ok());
    if let Some(token) = token {
        request = request.with_token(&token);
    }
    if let Some(topic) = matches.get_one::<String>("topic") {
        request = request.with_topic(topic);
    }

    let envelope = if matches.get_flag("override") {
        Envelope::override_message(&request)
    } else {
        Envelope::notification_message(&request)
    };
    println!("FCM request body:");
    println!("{}", serde_json::to_string_pretty(&envelope).unwrap());

    let client = get_fcm_client()
        .await
        .expect("Could not authenticate with the service account");
    match client.send_message(&envelope).await {
        Ok(response) => {
            println!("Message sent to Firebase for delivery, response:");
            println!("{}", serde_json::to_string_pretty(&response).unwrap());
        }
        Err(e) => {
            println!("Unable to send message to Firebase:");
            println!("{e:?}");
        }
    }
}
