//! Shared wire DTOs for the client/service boundary.
//!
//! DESIGN
//! ======
//! These types mirror the identity and marketplace service payloads so
//! serde handles the boundary and the rest of the client works with typed
//! values. Role strings coming off the wire collapse into a closed enum
//! with an explicit `Unknown` fallback rather than being trusted as-is.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Account role. Exactly one per account, sourced from the credential or
/// the identity service — never from anything the user typed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Athlete,
    StudentAthlete,
    Sponsor,
    Fan,
    Influencer,
    Admin,
    SchoolAdmin,
    Agency,
    /// Any role string this build does not recognize. Routed to the
    /// default landing view, never treated as an error.
    #[serde(other)]
    Unknown,
}

impl Role {
    /// Parse a wire role string, folding unrecognized values to `Unknown`.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "athlete" => Self::Athlete,
            "student_athlete" => Self::StudentAthlete,
            "sponsor" => Self::Sponsor,
            "fan" => Self::Fan,
            "influencer" => Self::Influencer,
            "admin" => Self::Admin,
            "school_admin" => Self::SchoolAdmin,
            "agency" => Self::Agency,
            _ => Self::Unknown,
        }
    }

    /// Wire form of the role.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Athlete => "athlete",
            Self::StudentAthlete => "student_athlete",
            Self::Sponsor => "sponsor",
            Self::Fan => "fan",
            Self::Influencer => "influencer",
            Self::Admin => "admin",
            Self::SchoolAdmin => "school_admin",
            Self::Agency => "agency",
            Self::Unknown => "unknown",
        }
    }

    /// Human-readable label for badges and dashboards.
    pub fn label(self) -> &'static str {
        match self {
            Self::Athlete => "Athlete",
            Self::StudentAthlete => "Student Athlete",
            Self::Sponsor => "Sponsor",
            Self::Fan => "Fan",
            Self::Influencer => "Influencer",
            Self::Admin => "Admin",
            Self::SchoolAdmin => "School Admin",
            Self::Agency => "Agency",
            Self::Unknown => "Member",
        }
    }
}

/// An account as returned by the identity service's `/me` endpoint, and as
/// reconstructed client-side from credential claims.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Stable account identifier.
    pub id: String,
    /// Account email; doubles as the credential subject.
    pub email: String,
    /// Display name, if set.
    #[serde(default)]
    pub name: Option<String>,
    /// Account role.
    pub role: Role,
}

impl User {
    /// Name to show in the UI, falling back to the email local part.
    pub fn display_name(&self) -> &str {
        if let Some(name) = self.name.as_deref()
            && !name.is_empty()
        {
            return name;
        }
        self.email.split('@').next().unwrap_or(&self.email)
    }
}

/// Registration request body for the identity service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}
