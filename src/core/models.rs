use std::collections::BTreeMap;

use lambda_runtime::Context;
use serde::Serialize;

/// Serializable view of the invocation metadata handed over by `lambda_runtime`.
///
/// Key names follow the ones Lambda uses for its own context object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvocationContext {
    pub aws_request_id: String,
    pub invoked_function_arn: String,
    pub function_name: String,
    pub function_version: String,
    #[serde(rename = "memoryLimitInMB")]
    pub memory_limit_in_mb: i32,
    pub log_group_name: String,
    pub log_stream_name: String,
    pub deadline_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xray_trace_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_context: Option<ClientContextInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identity: Option<IdentityInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientContextInfo {
    pub installation_id: String,
    pub app_title: String,
    pub app_version_name: String,
    pub app_version_code: String,
    pub app_package_name: String,
    // Sorted so identical contexts serialize identically
    pub custom: BTreeMap<String, String>,
    pub environment: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityInfo {
    pub identity_id: String,
    pub identity_pool_id: String,
}

impl From<&Context> for InvocationContext {
    fn from(ctx: &Context) -> Self {
        let env = &ctx.env_config;

        Self {
            aws_request_id: ctx.request_id.clone(),
            invoked_function_arn: ctx.invoked_function_arn.clone(),
            function_name: env.function_name.clone(),
            function_version: env.version.clone(),
            memory_limit_in_mb: env.memory,
            log_group_name: env.log_group.clone(),
            log_stream_name: env.log_stream.clone(),
            deadline_ms: ctx.deadline,
            xray_trace_id: ctx.xray_trace_id.clone(),
            client_context: ctx.client_context.as_ref().map(|cc| ClientContextInfo {
                installation_id: cc.client.installation_id.clone(),
                app_title: cc.client.app_title.clone(),
                app_version_name: cc.client.app_version_name.clone(),
                app_version_code: cc.client.app_version_code.clone(),
                app_package_name: cc.client.app_package_name.clone(),
                custom: cc
                    .custom
                    .iter()
                    .map(|(k, v)| (k.clone(), v.clone()))
                    .collect(),
                environment: cc
                    .environment
                    .iter()
                    .map(|(k, v)| (k.clone(), v.clone()))
                    .collect(),
            }),
            identity: ctx.identity.as_ref().map(|id| IdentityInfo {
                identity_id: id.identity_id.clone(),
                identity_pool_id: id.identity_pool_id.clone(),
            }),
        }
    }
}
