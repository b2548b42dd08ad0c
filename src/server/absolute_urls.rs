//! Absolute avatar URLs
//!
//! Team member avatars may be stored as paths relative to the serving host.
//! Before a role leaves the API those paths are resolved against the
//! scheme and host the client used, so clients never resolve them
//! themselves. The rewrite works on a copy; the shared store is never
//! touched.

use crate::core::models::{Role, TeamMember};
use crate::utils::error::Result;
use actix_web::HttpRequest;
use actix_web::http::header;
use tracing::{debug, warn};
use url::Url;

/// Origin of the current request, used to resolve relative paths
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestBase {
    url: Url,
}

impl RequestBase {
    /// Build a base from a scheme and a `host[:port]` authority
    pub fn new(scheme: &str, host: &str) -> Result<Self> {
        let url = Url::parse(&format!("{}://{}/", scheme, host))?;
        Ok(Self { url })
    }

    /// Derive the base from an incoming request.
    ///
    /// With `trust_proxy` the `Forwarded` and `X-Forwarded-*` headers are
    /// tried first. Candidates that do not form a valid URL are skipped in
    /// favour of the `Host` header, then the server's configured host.
    /// `None` when nothing usable is left.
    pub fn from_request(req: &HttpRequest, trust_proxy: bool) -> Option<Self> {
        let app_config = req.app_config();
        let scheme = if app_config.secure() { "https" } else { "http" };

        let mut candidates = Vec::with_capacity(3);
        if trust_proxy {
            let info = req.connection_info();
            candidates.push((info.scheme().to_string(), info.host().to_string()));
        }
        if let Some(host) = req
            .headers()
            .get(header::HOST)
            .and_then(|value| value.to_str().ok())
            .or_else(|| req.uri().authority().map(|authority| authority.as_str()))
        {
            candidates.push((scheme.to_string(), host.to_string()));
        }
        candidates.push((scheme.to_string(), app_config.host().to_string()));

        candidates
            .into_iter()
            .find_map(|(scheme, host)| match Self::new(&scheme, &host) {
                Ok(base) => Some(base),
                Err(e) => {
                    debug!(%scheme, %host, "Skipping unusable request base: {}", e);
                    None
                }
            })
    }

    /// Resolve `reference` against this base.
    ///
    /// Empty values and values that already carry a scheme come back
    /// unchanged.
    pub fn resolve(&self, reference: &str) -> Result<String> {
        if reference.is_empty() || is_absolute(reference) {
            return Ok(reference.to_string());
        }

        Ok(self.url.join(reference)?.to_string())
    }

    pub fn as_str(&self) -> &str {
        self.url.as_str()
    }
}

fn is_absolute(reference: &str) -> bool {
    Url::parse(reference).is_ok()
}

/// Copy of `member` with its avatar resolved against `base`.
///
/// An avatar that cannot be joined is kept as stored.
pub fn absolutize_member(base: &RequestBase, member: &TeamMember) -> TeamMember {
    let avatar = base.resolve(&member.avatar).unwrap_or_else(|e| {
        warn!(member_id = %member.id, avatar = %member.avatar, "Avatar left relative: {}", e);
        member.avatar.clone()
    });

    TeamMember {
        avatar,
        ..member.clone()
    }
}

/// Copy of `role` with every team member avatar resolved against `base`
pub fn absolutize(base: &RequestBase, role: &Role) -> Role {
    Role {
        team_members: role
            .team_members
            .iter()
            .map(|member| absolutize_member(base, member))
            .collect(),
        ..role.clone()
    }
}
