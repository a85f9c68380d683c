//! Stack request model: the parsed input document and its validated form.

use serde::Deserialize;

/// Service tier of a Datadog stack, validated against a closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Minimal,
    Standard,
    Full,
}

impl Tier {
    pub const ALL: [Tier; 3] = [Tier::Minimal, Tier::Standard, Tier::Full];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Minimal => "minimal",
            Tier::Standard => "standard",
            Tier::Full => "full",
        }
    }

    /// Filename of the bundled Helm values preset for this tier.
    pub fn values_filename(&self) -> String {
        format!("values-{}.yaml", self.as_str())
    }

    fn parse(raw: &str) -> Option<Tier> {
        match raw {
            "minimal" => Some(Tier::Minimal),
            "standard" => Some(Tier::Standard),
            "full" => Some(Tier::Full),
            _ => None,
        }
    }
}

/// The `DatadogStack` resource request as it arrives on disk.
///
/// Every field tolerates being absent; defaulting happens in
/// [`ResolvedStack::from_request`], not during deserialization.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct StackRequest {
    #[serde(rename = "apiVersion")]
    pub api_version: String,
    pub kind: String,
    pub metadata: StackMetadata,
    pub spec: StackSpec,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct StackMetadata {
    pub name: String,
    pub namespace: String,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct StackSpec {
    pub tier: String,
    pub environment: String,
    #[serde(rename = "clusterName")]
    pub cluster_name: String,
}

/// Record of an unrecognized tier replaced during validation.
///
/// The requested value is discarded from the resolved stack; it survives
/// only here so the caller can report the substitution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierFallback {
    pub requested: String,
}

/// The request after defaulting and tier validation, ready for rendering.
#[derive(Debug, Clone)]
pub struct ResolvedStack {
    pub name: String,
    pub tier: Tier,
    pub environment: String,
    pub cluster_name: String,
}

impl ResolvedStack {
    /// Apply the defaulting and validation rules to a parsed request.
    ///
    /// Rules, per field: empty tier becomes "minimal", empty environment
    /// becomes "dev", empty clusterName becomes "default". A non-empty tier
    /// outside the recognized set also becomes "minimal", and the discarded
    /// value is returned as a [`TierFallback`] for the caller to report.
    /// `name` is passed through untouched.
    pub fn from_request(request: &StackRequest) -> (ResolvedStack, Option<TierFallback>) {
        let raw_tier = request.spec.tier.as_str();

        let (tier, fallback) = if raw_tier.is_empty() {
            (Tier::Minimal, None)
        } else {
            match Tier::parse(raw_tier) {
                Some(tier) => (tier, None),
                None => (Tier::Minimal, Some(TierFallback { requested: raw_tier.to_string() })),
            }
        };

        let environment = if request.spec.environment.is_empty() {
            "dev".to_string()
        } else {
            request.spec.environment.clone()
        };

        let cluster_name = if request.spec.cluster_name.is_empty() {
            "default".to_string()
        } else {
            request.spec.cluster_name.clone()
        };

        let resolved = ResolvedStack {
            name: request.metadata.name.clone(),
            tier,
            environment,
            cluster_name,
        };

        (resolved, fallback)
    }

    /// Namespace every rendered document lives in: `datadog-<name>`.
    pub fn namespace(&self) -> String {
        format!("datadog-{}", self.name)
    }
}
