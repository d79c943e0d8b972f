//! Release-hosting API URLs

/// GitHub REST API base URL
pub const GITHUB_API: &str = "https://api.github.com";

/// Environment variable that overrides [`GITHUB_API`]
pub const GITHUB_API_ENV: &str = "STAGEGEN_API_URL";

/// Environment variable holding the optional bearer token
pub const GITHUB_TOKEN_ENV: &str = "GITHUB_TOKEN";

/// Build the "latest release" endpoint for a repository
pub fn latest_release(api: &str, owner: &str, name: &str) -> String {
    format!(
        "{}/repos/{owner}/{name}/releases/latest",
        api.trim_end_matches('/')
    )
}
