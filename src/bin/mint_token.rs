//! Development helper — mints an admin session token for local testing.
//!
//! Usage: `cargo run --bin mint_token -- [username] [expiry_secs]`
//!
//! Requires the `JWT_SECRET` environment variable (reads .env).

use dealdash::models::user::UserRole;
use dealdash::services::auth::issue_access_token;
use uuid::Uuid;

const DEFAULT_USERNAME: &str = "admin";
const DEFAULT_EXPIRY_SECS: i64 = 3600;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let secret = std::env::var("JWT_SECRET")?;
    let mut args = std::env::args().skip(1);
    let username = args.next().unwrap_or_else(|| DEFAULT_USERNAME.to_string());
    let expiry_secs = match args.next() {
        Some(raw) => raw.parse()?,
        None => DEFAULT_EXPIRY_SECS,
    };

    let token = issue_access_token(Uuid::new_v4(), &username, UserRole::Admin, &secret, expiry_secs)?;

    eprintln!("Admin token for {username} (expires in {expiry_secs}s):");
    println!("{token}");

    Ok(())
}
