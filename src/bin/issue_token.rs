//! Prints a signed bearer token for the configured secret, for use
//! against the mutating endpoints:
//!
//! ```sh
//! curl -H "Authorization: Bearer $(cargo run --bin issue_token)" ...
//! ```

use domain::auth::TokenService;
use infra::auth::JwtTokenService;
use infra::config::AppConfig;

fn main() {
    let cfg = AppConfig::load().expect("failed to load configuration");
    let subject = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "api-client".to_string());
    let token_svc = JwtTokenService::new(cfg.jwt_secret(), cfg.jwt_expire_secs());
    let token = token_svc.issue(&subject).expect("failed to sign token");
    println!("{}", token);
}
