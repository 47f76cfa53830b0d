//! User prompts for first-time configuration
//!
//! Used when no config file exists and no environment override is set.

use crate::error::AppError;
use tokio::io::{self, AsyncBufReadExt};

/// Prompts the user for the hub API base URL and returns the trimmed input.
///
/// # Example
/// ```no_run
/// use big_playoff_hub::config::user_prompts::prompt_for_api_url;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let api_url = prompt_for_api_url().await?;
/// println!("Got API URL: {}", api_url);
/// # Ok(())
/// # }
/// ```
pub async fn prompt_for_api_url() -> Result<String, AppError> {
    println!("Please enter the hub API base URL (e.g. https://hub.example.com/api): ");
    let mut input = String::new();
    let stdin = io::stdin();
    let mut reader = io::BufReader::new(stdin);
    reader.read_line(&mut input).await?;
    Ok(input.trim().to_string())
}
