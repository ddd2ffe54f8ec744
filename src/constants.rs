// UI Constants
pub const APP_TITLE: &str = "Weather Chatbot";
pub const INPUT_PLACEHOLDER: &str = "Type a city name...";
pub const TYPING_INDICATOR: &str = "Typing...";
pub const USER_LABEL: &str = "You";
pub const BOT_LABEL: &str = "Weather Bot";
pub const USER_INDENT: &str = "    ";

pub const TICK_RATE_MS: u64 = 100;
pub const SCROLL_STEP: u16 = 5;

// Conversation Constants
pub const GREETING: &str =
    "Hello! I'm your Weather Bot. Ask me about the temperature in any city.";
pub const CONNECTION_ERROR_MESSAGE: &str =
    "Sorry, I'm having trouble connecting to the server.";

// API Constants
pub const DEFAULT_SERVICE_URL: &str = "http://127.0.0.1:8001";
pub const CHAT_PATH: &str = "/chat";
pub const SERVICE_URL_ENV: &str = "WEATHER_CHAT_SERVICE_URL";
