pub const API_BASE: &str = "https://api.openai.com";
pub const API_KEY_ENV_VAR: &str = "OPENAI_API_KEY";
pub const ORGANIZATION_ENV_VAR: &str = "OPENAI_ORGANIZATION";
pub const BASE_URL_ENV_VAR: &str = "OPENAI_BASE_URL";
/// `OpenAI-Organization`, lowercased as header names are stored
pub const ORGANIZATION_HEADER: &str = "openai-organization";

pub const MODELS_ENDPOINT: &str = "/v1/models";
pub const CHAT_COMPLETIONS_ENDPOINT: &str = "/v1/chat/completions";
pub const FILES_ENDPOINT: &str = "/v1/files";
pub const IMAGES_GENERATIONS_ENDPOINT: &str = "/v1/images/generations";
pub const AUDIO_TRANSCRIPTIONS_ENDPOINT: &str = "/v1/audio/transcriptions";
