//! Reloading a Profile
//!
//! This example walks a user profile through load, refresh and a failed
//! refresh, rendering it the way a UI would after every step.
//!
//! Key concepts:
//! - Loaders are Stillwater effects over an environment
//! - A failed refresh keeps the last good profile on screen
//! - Rendering only uses the query functions, never the six variants
//!
//! Run with: RUST_LOG=debug cargo run --example reload_profile

use loadable::{Loadable, ResourceBuilder};
use std::fmt;
use stillwater::effect::Effect;
use stillwater::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct Profile {
    handle: String,
    followers: u32,
}

#[derive(Clone, Debug, PartialEq)]
enum HttpError {
    Status(u16),
}

impl fmt::Display for HttpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Status(code) => write!(f, "HTTP {code}"),
        }
    }
}

// Environment standing in for the network
#[derive(Clone)]
struct Api {
    status: u16,
    followers: u32,
}

fn fetch_profile() -> impl Effect<Output = Profile, Error = HttpError, Env = Api> {
    from_fn(|api: &Api| {
        if api.status == 200 {
            Ok(Profile {
                handle: "@ada".to_string(),
                followers: api.followers,
            })
        } else {
            Err(HttpError::Status(api.status))
        }
    })
}

fn render(state: &Loadable<HttpError, Profile>) -> String {
    let body = match state.value() {
        Some(profile) => format!("{} ({} followers)", profile.handle, profile.followers),
        None if state.is_loading() => "<spinner>".to_string(),
        None => "<empty>".to_string(),
    };

    let mut badges = Vec::new();
    if state.is_stale() && state.is_loading() {
        badges.push("refreshing".to_string());
    }
    if let Some(error) = state.error() {
        badges.push(format!("error: {error}"));
    }

    if badges.is_empty() {
        body
    } else {
        format!("{body} [{}]", badges.join(", "))
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("=== Reload Profile Example ===\n");

    let mut profile = ResourceBuilder::new().name("profile").build()?;
    println!("initial:          {}", render(profile.state()));

    println!("begin:            {}", render(profile.begin()));
    let online = Api {
        status: 200,
        followers: 120,
    };
    let state = profile.settle(fetch_profile().run(&online).await);
    println!("loaded:           {}", render(state));

    println!("refresh begins:   {}", render(profile.begin()));
    let degraded = Api {
        status: 503,
        followers: 0,
    };
    let state = profile.settle(fetch_profile().run(&degraded).await);
    println!("refresh failed:   {}", render(state));

    let recovered = Api {
        status: 200,
        followers: 121,
    };
    let state = profile.fetch(fetch_profile(), &recovered).await;
    println!("fetched again:    {}", render(state));

    if let Some(history) = profile.history() {
        let path: Vec<String> = history.get_path().iter().map(|p| p.to_string()).collect();
        println!("\nPhases: {}", path.join(" -> "));
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
