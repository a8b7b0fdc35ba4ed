//! CloudFormation template for the corrector deployment.
//!
//! Declares the function, a role that may invoke exactly one Bedrock
//! foundation model, and a public function URL without caller auth.

use serde_json::{Value, json};

use crate::core::config::non_empty_var;
use crate::core::profile::CorrectorVariant;
use crate::errors::CorrectorError;

pub const FUNCTION_TIMEOUT_SECS: u32 = 30;
pub const FUNCTION_MEMORY_MB: u32 = 256;
pub const FUNCTION_RUNTIME: &str = "provided.al2023";
pub const FUNCTION_HANDLER: &str = "bootstrap";

const FUNCTION_LOGICAL_ID: &str = "TextCorrector";
const ROLE_LOGICAL_ID: &str = "CorrectorRole";
const URL_LOGICAL_ID: &str = "CorrectorUrl";
const URL_PERMISSION_LOGICAL_ID: &str = "CorrectorUrlPublicInvoke";

#[derive(Debug, Clone)]
pub struct StackConfig {
    pub variant: CorrectorVariant,
    pub code_bucket: String,
    pub code_key: String,
    pub description: Option<String>,
    pub model_id: Option<String>,
    pub allowed_origin: Option<String>,
}

impl StackConfig {
    /// # Errors
    ///
    /// Returns `ConfigError` if the code location is missing or the variant is unknown.
    pub fn from_env() -> Result<Self, CorrectorError> {
        let variant = match non_empty_var("CORRECTOR_VARIANT") {
            Some(raw) => raw.parse()?,
            None => CorrectorVariant::Plain,
        };

        let config = Self {
            variant,
            code_bucket: non_empty_var("CODE_BUCKET").unwrap_or_default(),
            code_key: non_empty_var("CODE_KEY").unwrap_or_default(),
            description: non_empty_var("STACK_DESCRIPTION"),
            model_id: non_empty_var("BEDROCK_MODEL_ID"),
            allowed_origin: non_empty_var("CORS_ALLOWED_ORIGIN"),
        };
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    ///
    /// Returns `ConfigError` if the code bucket or key is empty.
    pub fn validate(&self) -> Result<(), CorrectorError> {
        if self.code_bucket.trim().is_empty() {
            return Err(CorrectorError::ConfigError(
                "CODE_BUCKET must name the S3 bucket holding the function package".to_string(),
            ));
        }
        if self.code_key.trim().is_empty() {
            return Err(CorrectorError::ConfigError(
                "CODE_KEY must name the function package object".to_string(),
            ));
        }
        Ok(())
    }

    /// Model the deployed function invokes, and therefore the only one it may invoke.
    #[must_use]
    pub fn model_id(&self) -> &str {
        self.model_id
            .as_deref()
            .unwrap_or_else(|| self.variant.default_model_id())
    }
}

fn model_arn(model_id: &str) -> Value {
    json!({
        "Fn::Sub": format!(
            "arn:${{AWS::Partition}}:bedrock:${{AWS::Region}}::foundation-model/{model_id}"
        )
    })
}

fn function_environment(config: &StackConfig) -> Value {
    let mut vars = serde_json::Map::new();
    vars.insert("CORRECTOR_VARIANT".into(), json!(config.variant.as_str()));
    vars.insert("BEDROCK_REGION".into(), json!({ "Ref": "AWS::Region" }));
    if let Some(model_id) = &config.model_id {
        vars.insert("BEDROCK_MODEL_ID".into(), json!(model_id));
    }
    if let Some(origin) = &config.allowed_origin {
        vars.insert("CORS_ALLOWED_ORIGIN".into(), json!(origin));
    }
    json!({ "Variables": vars })
}

fn role_resource(config: &StackConfig) -> Value {
    json!({
        "Type": "AWS::IAM::Role",
        "Properties": {
            "AssumeRolePolicyDocument": {
                "Version": "2012-10-17",
                "Statement": [{
                    "Effect": "Allow",
                    "Principal": { "Service": "lambda.amazonaws.com" },
                    "Action": "sts:AssumeRole"
                }]
            },
            "ManagedPolicyArns": [{
                "Fn::Sub": "arn:${AWS::Partition}:iam::aws:policy/service-role/AWSLambdaBasicExecutionRole"
            }],
            "Policies": [{
                "PolicyName": "BedrockInvokeModel",
                "PolicyDocument": {
                    "Version": "2012-10-17",
                    "Statement": [{
                        "Effect": "Allow",
                        "Action": ["bedrock:InvokeModel"],
                        "Resource": [model_arn(config.model_id())]
                    }]
                }
            }]
        }
    })
}

fn function_resource(config: &StackConfig) -> Value {
    json!({
        "Type": "AWS::Lambda::Function",
        "Properties": {
            "Runtime": FUNCTION_RUNTIME,
            "Handler": FUNCTION_HANDLER,
            "Architectures": ["arm64"],
            "Code": {
                "S3Bucket": config.code_bucket,
                "S3Key": config.code_key
            },
            "Role": { "Fn::GetAtt": [ROLE_LOGICAL_ID, "Arn"] },
            "Timeout": FUNCTION_TIMEOUT_SECS,
            "MemorySize": FUNCTION_MEMORY_MB,
            "Environment": function_environment(config)
        }
    })
}

/// Builds the full CloudFormation template.
#[must_use]
pub fn synthesize(config: &StackConfig) -> Value {
    let description = config.description.clone().unwrap_or_else(|| {
        format!("Spanish text corrector ({} variant) on Amazon Bedrock", config.variant)
    });

    json!({
        "AWSTemplateFormatVersion": "2010-09-09",
        "Description": description,
        "Resources": {
            ROLE_LOGICAL_ID: role_resource(config),
            FUNCTION_LOGICAL_ID: function_resource(config),
            URL_LOGICAL_ID: {
                "Type": "AWS::Lambda::Url",
                "Properties": {
                    "TargetFunctionArn": { "Fn::GetAtt": [FUNCTION_LOGICAL_ID, "Arn"] },
                    "AuthType": "NONE"
                }
            },
            URL_PERMISSION_LOGICAL_ID: {
                "Type": "AWS::Lambda::Permission",
                "Properties": {
                    "Action": "lambda:InvokeFunctionUrl",
                    "FunctionName": { "Ref": FUNCTION_LOGICAL_ID },
                    "Principal": "*",
                    "FunctionUrlAuthType": "NONE"
                }
            }
        },
        "Outputs": {
            URL_LOGICAL_ID: {
                "Description": "Public invocation URL of the text corrector",
                "Value": { "Fn::GetAtt": [URL_LOGICAL_ID, "FunctionUrl"] }
            }
        }
    })
}
