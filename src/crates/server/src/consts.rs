pub const URL_PATH_API: &str = "/v1";

pub const BEARER_PREFIX: &str = "Bearer ";
