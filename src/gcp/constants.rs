pub(crate) const BASE_URL: &str = "https://fcm.googleapis.com";

pub(crate) const MESSAGING_SCOPE: &str = "https://www.googleapis.com/auth/firebase.messaging";

pub(crate) const SERVICE_ACCOUNT_FILE: &str = "./service_account.json";

pub(crate) const CREDENTIALS_PATH_VAR: &str = "GOOGLE_APPLICATION_CREDENTIALS";

pub(crate) const CREDENTIALS_JSON_VAR: &str = "GOOGLE_CREDENTIALS";
