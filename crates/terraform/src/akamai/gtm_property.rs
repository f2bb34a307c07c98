//! `akamai_gtm_property` from the Akamai provider
//!
//! Registry docs: <https://registry.terraform.io/providers/akamai/akamai/5.6.0/docs/resources/gtm_property>

use super::PROVIDER_SOURCE;
use crate::error::{require, Result};
use crate::meta::MetaArguments;
use crate::resource::{attributes_of, TerraformResource};
use crate::stack::{ImportBlock, TerraformStack};
use serde::Serialize;
use serde_json::{Map, Value};

/// A datacenter that receives a share of the traffic
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GtmPropertyTrafficTarget {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datacenter_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handout_cname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub servers: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GtmPropertyStaticRrSet {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rdata: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GtmPropertyLivenessTestHttpHeader {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// Health check run against each traffic target
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GtmPropertyLivenessTest {
    pub name: String,
    pub test_interval: i64,
    pub test_object_protocol: String,
    pub test_timeout: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answers_required: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_nonstandard_port_warning: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_penalty: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_error3xx: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_error4xx: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_error5xx: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub peer_certificate_verification: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recursion_requested: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_string: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_string: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssl_client_certificate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssl_client_private_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_object: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_object_password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_object_port: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_object_username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_penalty: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_header: Option<Vec<GtmPropertyLivenessTestHttpHeader>>,
}

impl GtmPropertyLivenessTest {
    pub fn new(
        name: impl Into<String>,
        test_interval: i64,
        test_object_protocol: impl Into<String>,
        test_timeout: f64,
    ) -> Self {
        Self {
            name: name.into(),
            test_interval,
            test_object_protocol: test_object_protocol.into(),
            test_timeout,
            ..Default::default()
        }
    }
}

/// Declared attributes of `akamai_gtm_property`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GtmPropertyConfig {
    pub domain: String,
    pub handout_limit: i64,
    pub handout_mode: String,
    pub name: String,
    pub score_aggregation_type: String,
    pub r#type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_cname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_ip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balance_by_download_score: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dynamic_ttl: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failback_delay: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failover_delay: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ghost_demand_reporting: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_multiplier: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_threshold: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ipv6: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub load_imbalance_percentage: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub map_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_unreachable_penalty: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_live_fraction: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub static_ttl: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stickiness_bonus_constant: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stickiness_bonus_percentage: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unreachable_threshold: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_computed_targets: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wait_on_complete: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub liveness_test: Option<Vec<GtmPropertyLivenessTest>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub static_rr_set: Option<Vec<GtmPropertyStaticRrSet>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub traffic_target: Option<Vec<GtmPropertyTrafficTarget>>,
    #[serde(skip)]
    pub meta: MetaArguments,
}

impl GtmPropertyConfig {
    pub fn builder() -> GtmPropertyConfigBuilder {
        GtmPropertyConfigBuilder::default()
    }
}

#[derive(Debug, Clone, Default)]
pub struct GtmPropertyConfigBuilder {
    domain: Option<String>,
    handout_limit: Option<i64>,
    handout_mode: Option<String>,
    name: Option<String>,
    score_aggregation_type: Option<String>,
    r#type: Option<String>,
    backup_cname: Option<String>,
    backup_ip: Option<String>,
    balance_by_download_score: Option<bool>,
    cname: Option<String>,
    comments: Option<String>,
    dynamic_ttl: Option<i64>,
    failback_delay: Option<i64>,
    failover_delay: Option<i64>,
    ghost_demand_reporting: Option<bool>,
    health_max: Option<f64>,
    health_multiplier: Option<f64>,
    health_threshold: Option<f64>,
    id: Option<String>,
    ipv6: Option<bool>,
    load_imbalance_percentage: Option<f64>,
    map_name: Option<String>,
    max_unreachable_penalty: Option<f64>,
    min_live_fraction: Option<f64>,
    static_ttl: Option<i64>,
    stickiness_bonus_constant: Option<i64>,
    stickiness_bonus_percentage: Option<i64>,
    unreachable_threshold: Option<f64>,
    use_computed_targets: Option<bool>,
    wait_on_complete: Option<bool>,
    liveness_test: Option<Vec<GtmPropertyLivenessTest>>,
    static_rr_set: Option<Vec<GtmPropertyStaticRrSet>>,
    traffic_target: Option<Vec<GtmPropertyTrafficTarget>>,
    meta: MetaArguments,
}

impl GtmPropertyConfigBuilder {
    pub fn domain(mut self, value: impl Into<String>) -> Self {
        self.domain = Some(value.into());
        self
    }

    pub fn handout_limit(mut self, value: i64) -> Self {
        self.handout_limit = Some(value);
        self
    }

    pub fn handout_mode(mut self, value: impl Into<String>) -> Self {
        self.handout_mode = Some(value.into());
        self
    }

    pub fn name(mut self, value: impl Into<String>) -> Self {
        self.name = Some(value.into());
        self
    }

    pub fn score_aggregation_type(mut self, value: impl Into<String>) -> Self {
        self.score_aggregation_type = Some(value.into());
        self
    }

    pub fn r#type(mut self, value: impl Into<String>) -> Self {
        self.r#type = Some(value.into());
        self
    }

    pub fn backup_cname(mut self, value: impl Into<String>) -> Self {
        self.backup_cname = Some(value.into());
        self
    }

    pub fn backup_ip(mut self, value: impl Into<String>) -> Self {
        self.backup_ip = Some(value.into());
        self
    }

    pub fn balance_by_download_score(mut self, value: bool) -> Self {
        self.balance_by_download_score = Some(value);
        self
    }

    pub fn cname(mut self, value: impl Into<String>) -> Self {
        self.cname = Some(value.into());
        self
    }

    pub fn comments(mut self, value: impl Into<String>) -> Self {
        self.comments = Some(value.into());
        self
    }

    pub fn dynamic_ttl(mut self, value: i64) -> Self {
        self.dynamic_ttl = Some(value);
        self
    }

    pub fn failback_delay(mut self, value: i64) -> Self {
        self.failback_delay = Some(value);
        self
    }

    pub fn failover_delay(mut self, value: i64) -> Self {
        self.failover_delay = Some(value);
        self
    }

    pub fn ghost_demand_reporting(mut self, value: bool) -> Self {
        self.ghost_demand_reporting = Some(value);
        self
    }

    pub fn health_max(mut self, value: f64) -> Self {
        self.health_max = Some(value);
        self
    }

    pub fn health_multiplier(mut self, value: f64) -> Self {
        self.health_multiplier = Some(value);
        self
    }

    pub fn health_threshold(mut self, value: f64) -> Self {
        self.health_threshold = Some(value);
        self
    }

    pub fn id(mut self, value: impl Into<String>) -> Self {
        self.id = Some(value.into());
        self
    }

    pub fn ipv6(mut self, value: bool) -> Self {
        self.ipv6 = Some(value);
        self
    }

    pub fn load_imbalance_percentage(mut self, value: f64) -> Self {
        self.load_imbalance_percentage = Some(value);
        self
    }

    pub fn map_name(mut self, value: impl Into<String>) -> Self {
        self.map_name = Some(value.into());
        self
    }

    pub fn max_unreachable_penalty(mut self, value: f64) -> Self {
        self.max_unreachable_penalty = Some(value);
        self
    }

    pub fn min_live_fraction(mut self, value: f64) -> Self {
        self.min_live_fraction = Some(value);
        self
    }

    pub fn static_ttl(mut self, value: i64) -> Self {
        self.static_ttl = Some(value);
        self
    }

    pub fn stickiness_bonus_constant(mut self, value: i64) -> Self {
        self.stickiness_bonus_constant = Some(value);
        self
    }

    pub fn stickiness_bonus_percentage(mut self, value: i64) -> Self {
        self.stickiness_bonus_percentage = Some(value);
        self
    }

    pub fn unreachable_threshold(mut self, value: f64) -> Self {
        self.unreachable_threshold = Some(value);
        self
    }

    pub fn use_computed_targets(mut self, value: bool) -> Self {
        self.use_computed_targets = Some(value);
        self
    }

    pub fn wait_on_complete(mut self, value: bool) -> Self {
        self.wait_on_complete = Some(value);
        self
    }

    pub fn liveness_test(mut self, value: Vec<GtmPropertyLivenessTest>) -> Self {
        self.liveness_test = Some(value);
        self
    }

    pub fn static_rr_set(mut self, value: Vec<GtmPropertyStaticRrSet>) -> Self {
        self.static_rr_set = Some(value);
        self
    }

    pub fn traffic_target(mut self, value: Vec<GtmPropertyTrafficTarget>) -> Self {
        self.traffic_target = Some(value);
        self
    }

    pub fn meta(mut self, meta: MetaArguments) -> Self {
        self.meta = meta;
        self
    }

    pub fn build(self) -> Result<GtmPropertyConfig> {
        let resource = GtmProperty::TF_RESOURCE_TYPE;
        Ok(GtmPropertyConfig {
            domain: require(self.domain, resource, "domain")?,
            handout_limit: require(self.handout_limit, resource, "handout_limit")?,
            handout_mode: require(self.handout_mode, resource, "handout_mode")?,
            name: require(self.name, resource, "name")?,
            score_aggregation_type: require(
                self.score_aggregation_type,
                resource,
                "score_aggregation_type",
            )?,
            r#type: require(self.r#type, resource, "type")?,
            backup_cname: self.backup_cname,
            backup_ip: self.backup_ip,
            balance_by_download_score: self.balance_by_download_score,
            cname: self.cname,
            comments: self.comments,
            dynamic_ttl: self.dynamic_ttl,
            failback_delay: self.failback_delay,
            failover_delay: self.failover_delay,
            ghost_demand_reporting: self.ghost_demand_reporting,
            health_max: self.health_max,
            health_multiplier: self.health_multiplier,
            health_threshold: self.health_threshold,
            id: self.id,
            ipv6: self.ipv6,
            load_imbalance_percentage: self.load_imbalance_percentage,
            map_name: self.map_name,
            max_unreachable_penalty: self.max_unreachable_penalty,
            min_live_fraction: self.min_live_fraction,
            static_ttl: self.static_ttl,
            stickiness_bonus_constant: self.stickiness_bonus_constant,
            stickiness_bonus_percentage: self.stickiness_bonus_percentage,
            unreachable_threshold: self.unreachable_threshold,
            use_computed_targets: self.use_computed_targets,
            wait_on_complete: self.wait_on_complete,
            liveness_test: self.liveness_test,
            static_rr_set: self.static_rr_set,
            traffic_target: self.traffic_target,
            meta: self.meta,
        })
    }
}

/// `akamai_gtm_property` resource block
#[derive(Debug, Clone)]
pub struct GtmProperty {
    construct_id: String,
    config: GtmPropertyConfig,
}

impl GtmProperty {
    pub const TF_RESOURCE_TYPE: &'static str = "akamai_gtm_property";

    pub fn new(construct_id: impl Into<String>, config: GtmPropertyConfig) -> Self {
        Self {
            construct_id: construct_id.into(),
            config,
        }
    }

    /// Register an `import` block that adopts an existing remote object
    pub fn generate_config_for_import(
        stack: &mut TerraformStack,
        import_to_id: &str,
        import_from_id: &str,
        provider: Option<&str>,
    ) -> ImportBlock {
        let import =
            ImportBlock::new(Self::TF_RESOURCE_TYPE, import_to_id, import_from_id, provider);
        stack.add_import(import.clone());
        import
    }

    pub fn config(&self) -> &GtmPropertyConfig {
        &self.config
    }

    pub fn meta_mut(&mut self) -> &mut MetaArguments {
        &mut self.config.meta
    }

    pub fn domain(&self) -> String {
        self.reference("domain")
    }

    pub fn domain_input(&self) -> &str {
        &self.config.domain
    }

    pub fn set_domain(&mut self, value: impl Into<String>) {
        self.config.domain = value.into();
    }

    pub fn handout_limit(&self) -> String {
        self.reference("handout_limit")
    }

    pub fn handout_limit_input(&self) -> i64 {
        self.config.handout_limit
    }

    pub fn set_handout_limit(&mut self, value: i64) {
        self.config.handout_limit = value;
    }

    pub fn handout_mode(&self) -> String {
        self.reference("handout_mode")
    }

    pub fn handout_mode_input(&self) -> &str {
        &self.config.handout_mode
    }

    pub fn set_handout_mode(&mut self, value: impl Into<String>) {
        self.config.handout_mode = value.into();
    }

    pub fn name(&self) -> String {
        self.reference("name")
    }

    pub fn name_input(&self) -> &str {
        &self.config.name
    }

    pub fn set_name(&mut self, value: impl Into<String>) {
        self.config.name = value.into();
    }

    pub fn score_aggregation_type(&self) -> String {
        self.reference("score_aggregation_type")
    }

    pub fn score_aggregation_type_input(&self) -> &str {
        &self.config.score_aggregation_type
    }

    pub fn set_score_aggregation_type(&mut self, value: impl Into<String>) {
        self.config.score_aggregation_type = value.into();
    }

    pub fn r#type(&self) -> String {
        self.reference("type")
    }

    pub fn type_input(&self) -> &str {
        &self.config.r#type
    }

    pub fn set_type(&mut self, value: impl Into<String>) {
        self.config.r#type = value.into();
    }

    pub fn backup_cname(&self) -> String {
        self.reference("backup_cname")
    }

    pub fn backup_cname_input(&self) -> Option<&str> {
        self.config.backup_cname.as_deref()
    }

    pub fn set_backup_cname(&mut self, value: impl Into<String>) {
        self.config.backup_cname = Some(value.into());
    }

    pub fn reset_backup_cname(&mut self) {
        self.config.backup_cname = None;
    }

    pub fn backup_ip(&self) -> String {
        self.reference("backup_ip")
    }

    pub fn backup_ip_input(&self) -> Option<&str> {
        self.config.backup_ip.as_deref()
    }

    pub fn set_backup_ip(&mut self, value: impl Into<String>) {
        self.config.backup_ip = Some(value.into());
    }

    pub fn reset_backup_ip(&mut self) {
        self.config.backup_ip = None;
    }

    pub fn balance_by_download_score(&self) -> String {
        self.reference("balance_by_download_score")
    }

    pub fn balance_by_download_score_input(&self) -> Option<bool> {
        self.config.balance_by_download_score
    }

    pub fn set_balance_by_download_score(&mut self, value: bool) {
        self.config.balance_by_download_score = Some(value);
    }

    pub fn reset_balance_by_download_score(&mut self) {
        self.config.balance_by_download_score = None;
    }

    pub fn cname(&self) -> String {
        self.reference("cname")
    }

    pub fn cname_input(&self) -> Option<&str> {
        self.config.cname.as_deref()
    }

    pub fn set_cname(&mut self, value: impl Into<String>) {
        self.config.cname = Some(value.into());
    }

    pub fn reset_cname(&mut self) {
        self.config.cname = None;
    }

    pub fn comments(&self) -> String {
        self.reference("comments")
    }

    pub fn comments_input(&self) -> Option<&str> {
        self.config.comments.as_deref()
    }

    pub fn set_comments(&mut self, value: impl Into<String>) {
        self.config.comments = Some(value.into());
    }

    pub fn reset_comments(&mut self) {
        self.config.comments = None;
    }

    pub fn dynamic_ttl(&self) -> String {
        self.reference("dynamic_ttl")
    }

    pub fn dynamic_ttl_input(&self) -> Option<i64> {
        self.config.dynamic_ttl
    }

    pub fn set_dynamic_ttl(&mut self, value: i64) {
        self.config.dynamic_ttl = Some(value);
    }

    pub fn reset_dynamic_ttl(&mut self) {
        self.config.dynamic_ttl = None;
    }

    pub fn failback_delay(&self) -> String {
        self.reference("failback_delay")
    }

    pub fn failback_delay_input(&self) -> Option<i64> {
        self.config.failback_delay
    }

    pub fn set_failback_delay(&mut self, value: i64) {
        self.config.failback_delay = Some(value);
    }

    pub fn reset_failback_delay(&mut self) {
        self.config.failback_delay = None;
    }

    pub fn failover_delay(&self) -> String {
        self.reference("failover_delay")
    }

    pub fn failover_delay_input(&self) -> Option<i64> {
        self.config.failover_delay
    }

    pub fn set_failover_delay(&mut self, value: i64) {
        self.config.failover_delay = Some(value);
    }

    pub fn reset_failover_delay(&mut self) {
        self.config.failover_delay = None;
    }

    pub fn ghost_demand_reporting(&self) -> String {
        self.reference("ghost_demand_reporting")
    }

    pub fn ghost_demand_reporting_input(&self) -> Option<bool> {
        self.config.ghost_demand_reporting
    }

    pub fn set_ghost_demand_reporting(&mut self, value: bool) {
        self.config.ghost_demand_reporting = Some(value);
    }

    pub fn reset_ghost_demand_reporting(&mut self) {
        self.config.ghost_demand_reporting = None;
    }

    pub fn health_max(&self) -> String {
        self.reference("health_max")
    }

    pub fn health_max_input(&self) -> Option<f64> {
        self.config.health_max
    }

    pub fn set_health_max(&mut self, value: f64) {
        self.config.health_max = Some(value);
    }

    pub fn reset_health_max(&mut self) {
        self.config.health_max = None;
    }

    pub fn health_multiplier(&self) -> String {
        self.reference("health_multiplier")
    }

    pub fn health_multiplier_input(&self) -> Option<f64> {
        self.config.health_multiplier
    }

    pub fn set_health_multiplier(&mut self, value: f64) {
        self.config.health_multiplier = Some(value);
    }

    pub fn reset_health_multiplier(&mut self) {
        self.config.health_multiplier = None;
    }

    pub fn health_threshold(&self) -> String {
        self.reference("health_threshold")
    }

    pub fn health_threshold_input(&self) -> Option<f64> {
        self.config.health_threshold
    }

    pub fn set_health_threshold(&mut self, value: f64) {
        self.config.health_threshold = Some(value);
    }

    pub fn reset_health_threshold(&mut self) {
        self.config.health_threshold = None;
    }

    pub fn id(&self) -> String {
        self.reference("id")
    }

    pub fn id_input(&self) -> Option<&str> {
        self.config.id.as_deref()
    }

    pub fn set_id(&mut self, value: impl Into<String>) {
        self.config.id = Some(value.into());
    }

    pub fn reset_id(&mut self) {
        self.config.id = None;
    }

    pub fn ipv6(&self) -> String {
        self.reference("ipv6")
    }

    pub fn ipv6_input(&self) -> Option<bool> {
        self.config.ipv6
    }

    pub fn set_ipv6(&mut self, value: bool) {
        self.config.ipv6 = Some(value);
    }

    pub fn reset_ipv6(&mut self) {
        self.config.ipv6 = None;
    }

    pub fn load_imbalance_percentage(&self) -> String {
        self.reference("load_imbalance_percentage")
    }

    pub fn load_imbalance_percentage_input(&self) -> Option<f64> {
        self.config.load_imbalance_percentage
    }

    pub fn set_load_imbalance_percentage(&mut self, value: f64) {
        self.config.load_imbalance_percentage = Some(value);
    }

    pub fn reset_load_imbalance_percentage(&mut self) {
        self.config.load_imbalance_percentage = None;
    }

    pub fn map_name(&self) -> String {
        self.reference("map_name")
    }

    pub fn map_name_input(&self) -> Option<&str> {
        self.config.map_name.as_deref()
    }

    pub fn set_map_name(&mut self, value: impl Into<String>) {
        self.config.map_name = Some(value.into());
    }

    pub fn reset_map_name(&mut self) {
        self.config.map_name = None;
    }

    pub fn max_unreachable_penalty(&self) -> String {
        self.reference("max_unreachable_penalty")
    }

    pub fn max_unreachable_penalty_input(&self) -> Option<f64> {
        self.config.max_unreachable_penalty
    }

    pub fn set_max_unreachable_penalty(&mut self, value: f64) {
        self.config.max_unreachable_penalty = Some(value);
    }

    pub fn reset_max_unreachable_penalty(&mut self) {
        self.config.max_unreachable_penalty = None;
    }

    pub fn min_live_fraction(&self) -> String {
        self.reference("min_live_fraction")
    }

    pub fn min_live_fraction_input(&self) -> Option<f64> {
        self.config.min_live_fraction
    }

    pub fn set_min_live_fraction(&mut self, value: f64) {
        self.config.min_live_fraction = Some(value);
    }

    pub fn reset_min_live_fraction(&mut self) {
        self.config.min_live_fraction = None;
    }

    pub fn static_ttl(&self) -> String {
        self.reference("static_ttl")
    }

    pub fn static_ttl_input(&self) -> Option<i64> {
        self.config.static_ttl
    }

    pub fn set_static_ttl(&mut self, value: i64) {
        self.config.static_ttl = Some(value);
    }

    pub fn reset_static_ttl(&mut self) {
        self.config.static_ttl = None;
    }

    pub fn stickiness_bonus_constant(&self) -> String {
        self.reference("stickiness_bonus_constant")
    }

    pub fn stickiness_bonus_constant_input(&self) -> Option<i64> {
        self.config.stickiness_bonus_constant
    }

    pub fn set_stickiness_bonus_constant(&mut self, value: i64) {
        self.config.stickiness_bonus_constant = Some(value);
    }

    pub fn reset_stickiness_bonus_constant(&mut self) {
        self.config.stickiness_bonus_constant = None;
    }

    pub fn stickiness_bonus_percentage(&self) -> String {
        self.reference("stickiness_bonus_percentage")
    }

    pub fn stickiness_bonus_percentage_input(&self) -> Option<i64> {
        self.config.stickiness_bonus_percentage
    }

    pub fn set_stickiness_bonus_percentage(&mut self, value: i64) {
        self.config.stickiness_bonus_percentage = Some(value);
    }

    pub fn reset_stickiness_bonus_percentage(&mut self) {
        self.config.stickiness_bonus_percentage = None;
    }

    pub fn unreachable_threshold(&self) -> String {
        self.reference("unreachable_threshold")
    }

    pub fn unreachable_threshold_input(&self) -> Option<f64> {
        self.config.unreachable_threshold
    }

    pub fn set_unreachable_threshold(&mut self, value: f64) {
        self.config.unreachable_threshold = Some(value);
    }

    pub fn reset_unreachable_threshold(&mut self) {
        self.config.unreachable_threshold = None;
    }

    pub fn use_computed_targets(&self) -> String {
        self.reference("use_computed_targets")
    }

    pub fn use_computed_targets_input(&self) -> Option<bool> {
        self.config.use_computed_targets
    }

    pub fn set_use_computed_targets(&mut self, value: bool) {
        self.config.use_computed_targets = Some(value);
    }

    pub fn reset_use_computed_targets(&mut self) {
        self.config.use_computed_targets = None;
    }

    pub fn wait_on_complete(&self) -> String {
        self.reference("wait_on_complete")
    }

    pub fn wait_on_complete_input(&self) -> Option<bool> {
        self.config.wait_on_complete
    }

    pub fn set_wait_on_complete(&mut self, value: bool) {
        self.config.wait_on_complete = Some(value);
    }

    pub fn reset_wait_on_complete(&mut self) {
        self.config.wait_on_complete = None;
    }

    pub fn liveness_test(&self) -> String {
        self.reference("liveness_test")
    }

    pub fn liveness_test_input(&self) -> Option<&[GtmPropertyLivenessTest]> {
        self.config.liveness_test.as_deref()
    }

    pub fn put_liveness_test(&mut self, value: Vec<GtmPropertyLivenessTest>) {
        self.config.liveness_test = Some(value);
    }

    pub fn reset_liveness_test(&mut self) {
        self.config.liveness_test = None;
    }

    pub fn static_rr_set(&self) -> String {
        self.reference("static_rr_set")
    }

    pub fn static_rr_set_input(&self) -> Option<&[GtmPropertyStaticRrSet]> {
        self.config.static_rr_set.as_deref()
    }

    pub fn put_static_rr_set(&mut self, value: Vec<GtmPropertyStaticRrSet>) {
        self.config.static_rr_set = Some(value);
    }

    pub fn reset_static_rr_set(&mut self) {
        self.config.static_rr_set = None;
    }

    pub fn traffic_target(&self) -> String {
        self.reference("traffic_target")
    }

    pub fn traffic_target_input(&self) -> Option<&[GtmPropertyTrafficTarget]> {
        self.config.traffic_target.as_deref()
    }

    pub fn put_traffic_target(&mut self, value: Vec<GtmPropertyTrafficTarget>) {
        self.config.traffic_target = Some(value);
    }

    pub fn reset_traffic_target(&mut self) {
        self.config.traffic_target = None;
    }

    /// Computed by the provider
    pub fn weighted_hash_bits_for_ipv4(&self) -> String {
        self.reference("weighted_hash_bits_for_ipv4")
    }

    /// Computed by the provider
    pub fn weighted_hash_bits_for_ipv6(&self) -> String {
        self.reference("weighted_hash_bits_for_ipv6")
    }
}

impl TerraformResource for GtmProperty {
    fn resource_type(&self) -> &'static str {
        Self::TF_RESOURCE_TYPE
    }

    fn construct_id(&self) -> &str {
        &self.construct_id
    }

    fn synthesize_attributes(&self) -> Result<Map<String, Value>> {
        attributes_of(&self.config)
    }

    fn meta(&self) -> &MetaArguments {
        &self.config.meta
    }

    fn provider_requirement(&self) -> Option<(&'static str, &'static str)> {
        Some(("akamai", PROVIDER_SOURCE))
    }
}
