//! Manifest rendering: four fixed document shapes built by string formatting.
//!
//! Each generator is deterministic; identical inputs yield byte-identical
//! text. The preset fragment is embedded textually, never parsed.

use crate::domain::ResolvedStack;

const CHART_REPOSITORY_URL: &str = "https://helm.datadoghq.com";

/// Namespace document carrying the promise and resource labels.
pub fn namespace(stack: &ResolvedStack) -> String {
    format!(
        r#"apiVersion: v1
kind: Namespace
metadata:
  name: datadog-{name}
  labels:
    kratix.io/promise: datadog-stack
    kratix.io/resource-name: {name}
    environment: {environment}
    tier: {tier}
"#,
        name = stack.name,
        environment = stack.environment,
        tier = stack.tier.as_str(),
    )
}

/// HelmRepository document pointing Flux at the Datadog chart repository.
pub fn helm_repository(stack: &ResolvedStack) -> String {
    format!(
        r#"apiVersion: source.toolkit.fluxcd.io/v1
kind: HelmRepository
metadata:
  name: datadog
  namespace: datadog-{name}
spec:
  interval: 1h
  url: {url}
"#,
        name = stack.name,
        url = CHART_REPOSITORY_URL,
    )
}

/// HelmRelease document for the Datadog chart.
///
/// Pulls the API/app keys from the `datadog-api-key` Secret via `valuesFrom`
/// and appends the tier preset under the values block, re-indented to sit at
/// the same depth as the `datadog` key.
pub fn helm_release(stack: &ResolvedStack, tier_values: &str) -> String {
    let indented_values = indent_yaml(tier_values, 4);

    format!(
        r#"apiVersion: helm.toolkit.fluxcd.io/v2
kind: HelmRelease
metadata:
  name: datadog
  namespace: datadog-{name}
  labels:
    kratix.io/promise: datadog-stack
    kratix.io/resource-name: {name}
    tier: {tier}
    environment: {environment}
spec:
  interval: 5m
  chart:
    spec:
      chart: datadog
      version: "3.x"
      sourceRef:
        kind: HelmRepository
        name: datadog
        namespace: datadog-{name}
  valuesFrom:
    - kind: Secret
      name: datadog-api-key
      valuesKey: api-key
      targetPath: datadog.apiKey
    - kind: Secret
      name: datadog-api-key
      valuesKey: app-key
      targetPath: datadog.appKey
      optional: true
  values:
    datadog:
      clusterName: {cluster_name}
      tags:
        - "env:{environment}"
        - "tier:{tier}"
        - "managed-by:kratix"
{indented_values}
"#,
        name = stack.name,
        tier = stack.tier.as_str(),
        environment = stack.environment,
        cluster_name = stack.cluster_name,
    )
}

/// ExternalSecret document syncing the Datadog API keys from AWS Secrets
/// Manager into the stack namespace.
pub fn external_secret(stack: &ResolvedStack) -> String {
    format!(
        r#"apiVersion: external-secrets.io/v1
kind: ExternalSecret
metadata:
  name: datadog-api-key
  namespace: datadog-{name}
spec:
  refreshInterval: 1h
  secretStoreRef:
    name: aws-secrets-manager
    kind: ClusterSecretStore
  target:
    name: datadog-api-key
    creationPolicy: Owner
  data:
    - secretKey: api-key
      remoteRef:
        key: datadog/{environment}/api-keys
        property: api-key
    - secretKey: app-key
      remoteRef:
        key: datadog/{environment}/api-keys
        property: app-key
"#,
        name = stack.name,
        environment = stack.environment,
    )
}

/// One-line status note for the metadata directory.
pub fn status(stack: &ResolvedStack) -> String {
    format!("message: Datadog stack configured with tier {}\n", stack.tier.as_str())
}

/// Prefix every non-empty line of `content` with `spaces` spaces.
///
/// Empty lines are dropped, not indented. Purely textual; malformed YAML in
/// `content` passes through unchanged.
fn indent_yaml(content: &str, spaces: usize) -> String {
    let indent = " ".repeat(spaces);
    content
        .split('\n')
        .filter(|line| !line.is_empty())
        .map(|line| format!("{indent}{line}"))
        .collect::<Vec<_>>()
        .join("\n")
}
